//! Start-up session resolution.

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::config::ConsoleConfig;
use crate::rest::{Envelope, RestError};
use crate::session::{CurrentUser, MenuItem};

/// Session context produced once at start-up and consumed by the layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitialState {
    /// The signed-in user, `None` when unknown.
    pub current_user: Option<CurrentUser>,
    /// The user's navigation menu tree.
    pub menu: Vec<MenuItem>,
    /// Where the shell must navigate before rendering, if anywhere.
    pub redirect: Option<String>,
    login_path: String,
}

impl InitialState {
    /// Returns `true` if a user is signed in.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Returns the login path this state guards with.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Returns the menu entries the layout lists, depth first.
    ///
    /// Entries marked `hideInMenu` are left out together with their children.
    #[must_use]
    pub fn visible_menu(&self) -> Vec<&MenuItem> {
        self.menu.iter().flat_map(MenuItem::visible).collect()
    }

    /// Checks a page change.
    ///
    /// Returns the login path when nobody is signed in and `path` is not the
    /// login page itself, `None` otherwise.
    #[must_use]
    pub fn guard_navigation(&self, path: &str) -> Option<&str> {
        if self.current_user.is_none() && path != self.login_path {
            Some(&self.login_path)
        } else {
            None
        }
    }
}

/// Resolves the session for a shell starting on `current_path`.
///
/// On the login page nothing is fetched. Elsewhere the current user is
/// fetched without going through the client's error handler; if that fails
/// the state carries a redirect to the login page. A signed-in user's menu
/// is fetched next; a failed menu fetch leaves the menu empty. Failures are
/// logged, never returned.
///
/// # Example
///
/// ```rust,ignore
/// use admin_console::session::bootstrap;
///
/// let state = bootstrap(&client, &config, "/dashboard").await;
/// if let Some(target) = &state.redirect {
///     navigate(target);
/// }
/// ```
pub async fn bootstrap(
    client: &HttpClient,
    config: &ConsoleConfig,
    current_path: &str,
) -> InitialState {
    let mut state = InitialState {
        login_path: config.login_path().to_string(),
        ..InitialState::default()
    };

    if current_path == config.login_path() {
        tracing::debug!(path = current_path, "on login page, skipping user fetch");
        return state;
    }

    let user = match fetch_current_user(client, config).await {
        Ok(user) => user,
        Err(error) => {
            tracing::warn!(error = %error, "failed to fetch current user, redirecting to login");
            state.redirect = Some(state.login_path.clone());
            return state;
        }
    };

    let Some(user) = user else {
        tracing::debug!("current user endpoint returned no user");
        return state;
    };

    match fetch_menu(client, config, &user).await {
        Ok(menu) => state.menu = menu.unwrap_or_default(),
        Err(error) => tracing::warn!(error = %error, "failed to fetch menu"),
    }
    state.current_user = Some(user);

    state
}

async fn fetch_current_user(
    client: &HttpClient,
    config: &ConsoleConfig,
) -> Result<Option<CurrentUser>, RestError> {
    let request = HttpRequest::builder(HttpMethod::Get, config.current_user_path())
        .skip_error_handler(true)
        .build()
        .map_err(|e| RestError::Http(e.into()))?;
    fetch(client, request).await
}

async fn fetch_menu(
    client: &HttpClient,
    config: &ConsoleConfig,
    user: &CurrentUser,
) -> Result<Option<Vec<MenuItem>>, RestError> {
    let mut builder = HttpRequest::builder(HttpMethod::Get, config.menu_path());
    if let Some(user_id) = &user.userid {
        builder = builder.param("userId", user_id.as_str());
    }
    let request = builder.build().map_err(|e| RestError::Http(e.into()))?;
    fetch(client, request).await
}

async fn fetch<R: DeserializeOwned>(
    client: &HttpClient,
    request: HttpRequest,
) -> Result<Option<R>, RestError> {
    let path = request.path.clone();
    let response = client.request(request).await?;
    let envelope: Envelope<R> =
        serde_json::from_value(response.body).map_err(|e| RestError::Decode {
            resource: path,
            message: e.to_string(),
        })?;
    Ok(envelope.into_data())
}
