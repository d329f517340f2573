//! Console shell session bootstrap.
//!
//! When the console starts, the shell resolves who is signed in and which
//! menu entries they may see, and decides whether to send them to the login
//! page first.
//!
//! # Overview
//!
//! - [`bootstrap`]: Fetches the current user and their menu tree
//! - [`InitialState`]: The resulting session context, with a navigation guard
//! - [`CurrentUser`] / [`MenuItem`]: Payload types of the two endpoints
//!
//! # Example
//!
//! ```rust,ignore
//! use admin_console::{BaseUrl, ConsoleConfig, HttpClient};
//! use admin_console::session::bootstrap;
//!
//! let config = ConsoleConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8000")?)
//!     .build()?;
//! let client = HttpClient::console(&config)?;
//!
//! let state = bootstrap(&client, &config, "/system/users").await;
//! match state.redirect.as_deref() {
//!     Some(login) => println!("redirect to {login}"),
//!     None => println!("welcome {:?}", state.current_user.and_then(|u| u.name)),
//! }
//! ```

mod bootstrap;
mod user;

pub use bootstrap::{bootstrap, InitialState};
pub use user::{CurrentUser, MenuItem};
