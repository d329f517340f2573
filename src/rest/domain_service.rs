//! Generic CRUD client for one REST collection.
//!
//! A [`DomainService`] is bound to a single [`ResourceName`] and issues every
//! request under `/api/{resource}`:
//!
//! | Operation | Request |
//! |---|---|
//! | [`list`](DomainService::list) | `GET /api/{resource}` |
//! | [`find_by_id`](DomainService::find_by_id) | `GET /api/{resource}/{id}` |
//! | [`create`](DomainService::create) | `POST /api/{resource}` |
//! | [`update_by_id`](DomainService::update_by_id) | `PATCH /api/{resource}/{id}` |
//! | [`delete_by_id`](DomainService::delete_by_id) | `DELETE /api/{resource}/{id}` |
//! | [`sort`](DomainService::sort) | `PATCH /api/{resource}/sort` |
//! | [`yn`](DomainService::yn) | `PATCH /api/{resource}/{id}/yn` (form body) |
//!
//! Failures are never caught or retried here; they reach the caller exactly
//! as the transport produced them.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::config::ResourceName;
use crate::rest::entity::to_params;
use crate::rest::{Acknowledgement, Entity, Envelope, PageQuery, Query, RestError, SortDescriptor};

/// Per-call request options.
///
/// # Example
///
/// ```rust
/// use admin_console::rest::RequestOptions;
///
/// let options = RequestOptions::new()
///     .header("X-Tenant", "acme")
///     .skip_error_handler(true);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    headers: HashMap<String, String>,
    skip_error_handler: bool,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Keeps failures of the request away from the client's error handler.
    #[must_use]
    pub const fn skip_error_handler(mut self, skip: bool) -> Self {
        self.skip_error_handler = skip;
        self
    }

    fn apply(self, builder: HttpRequestBuilder) -> HttpRequestBuilder {
        let builder = builder.skip_error_handler(self.skip_error_handler);
        if self.headers.is_empty() {
            builder
        } else {
            builder.extra_headers(self.headers)
        }
    }
}

/// REST client for one collection of entities `T`, listed with queries `Q`.
///
/// The only state besides the shared transport is the immutable resource
/// name, so a service can be cloned and used from many tasks at once.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use admin_console::{HttpClient, ResourceName};
/// use admin_console::rest::{DomainService, PageQuery, SortDescriptor};
///
/// let client = Arc::new(HttpClient::console(&config)?);
/// let users: DomainService<User> = DomainService::new(client, ResourceName::new("users")?);
///
/// let mut query = PageQuery::new().current(1).page_size(20);
/// let page = users.list(&mut query, Some(&SortDescriptor::new("name", "descend"))).await?;
/// assert_eq!(query.orders.as_deref(), Some("name desc"));
///
/// users.yn(5, 1).await?;
/// ```
pub struct DomainService<T, Q = PageQuery> {
    client: Arc<HttpClient>,
    resource: ResourceName,
    _marker: PhantomData<fn() -> (T, Q)>,
}

impl<T, Q> Clone for DomainService<T, Q> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            resource: self.resource.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, Q> fmt::Debug for DomainService<T, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainService")
            .field("resource", &self.resource)
            .field("base_url", self.client.base_url())
            .finish()
    }
}

impl<T: Entity, Q: Query> DomainService<T, Q> {
    /// Creates a service for `resource` on the given transport.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>, resource: ResourceName) -> Self {
        Self {
            client,
            resource,
            _marker: PhantomData,
        }
    }

    /// Returns the resource this service is bound to.
    #[must_use]
    pub const fn resource(&self) -> &ResourceName {
        &self.resource
    }

    /// Lists entities matching `query`.
    ///
    /// With a sort descriptor, `query`'s `orders` is set to `column` for
    /// ascending or `column desc` for anything else before the request is
    /// built; the caller sees the updated query. Without one, `orders` is
    /// left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for transport failures,
    /// [`RestError::Encode`] if the query cannot be serialized, and
    /// [`RestError::Decode`] if the response is not a list envelope.
    pub async fn list(
        &self,
        query: &mut Q,
        sort: Option<&SortDescriptor>,
    ) -> Result<Envelope<Vec<T>>, RestError> {
        self.list_with(query, sort, RequestOptions::default()).await
    }

    /// Lists entities, merging extra request options.
    ///
    /// # Errors
    ///
    /// See [`list`](Self::list).
    pub async fn list_with(
        &self,
        query: &mut Q,
        sort: Option<&SortDescriptor>,
        options: RequestOptions,
    ) -> Result<Envelope<Vec<T>>, RestError> {
        if let Some(orders) = sort.and_then(SortDescriptor::orders) {
            tracing::debug!(resource = %self.resource, %orders, "sorting list");
            query.set_orders(orders);
        }

        let params = to_params(&*query).map_err(|e| self.encode_error(&e))?;
        let builder = HttpRequest::builder(HttpMethod::Get, self.resource.base_path()).params(params);

        self.send(options.apply(builder)).await
    }

    /// Fetches one entity by identifier.
    ///
    /// A missing entity surfaces as the transport's 404 error.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for transport failures and
    /// [`RestError::Decode`] if the response is not an entity envelope.
    pub async fn find_by_id(&self, id: impl fmt::Display) -> Result<Envelope<T>, RestError> {
        let builder = HttpRequest::builder(HttpMethod::Get, self.member_path(&id));
        self.send(builder).await
    }

    /// Creates an entity and returns its new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for transport failures,
    /// [`RestError::Encode`] if `entity` cannot be serialized, and
    /// [`RestError::Decode`] if the response does not carry an identifier.
    pub async fn create(&self, entity: &T) -> Result<Envelope<T::Id>, RestError> {
        let builder = HttpRequest::builder(HttpMethod::Post, self.resource.base_path())
            .body(self.encode(entity)?)
            .body_type(DataType::Json);
        self.send(builder).await
    }

    /// Updates an entity and returns the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for transport failures,
    /// [`RestError::Encode`] if `entity` cannot be serialized, and
    /// [`RestError::Decode`] if the response does not carry a count.
    pub async fn update_by_id(
        &self,
        id: impl fmt::Display,
        entity: &T,
    ) -> Result<Envelope<u64>, RestError> {
        let builder = HttpRequest::builder(HttpMethod::Patch, self.member_path(&id))
            .body(self.encode(entity)?)
            .body_type(DataType::Json);
        self.send(builder).await
    }

    /// Deletes an entity and returns the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for transport failures and
    /// [`RestError::Decode`] if the response does not carry a count.
    pub async fn delete_by_id(&self, id: impl fmt::Display) -> Result<Envelope<u64>, RestError> {
        let builder = HttpRequest::builder(HttpMethod::Delete, self.member_path(&id));
        self.send(builder).await
    }

    /// Saves the manual order of `entities`.
    ///
    /// Every entity's `sortValue` is overwritten with its 1-based position in
    /// the slice, then the whole slice is sent. An envelope reply is decoded;
    /// any other successful body is handed back as the acknowledgement's
    /// `data`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for transport failures and
    /// [`RestError::Encode`] if the entities cannot be serialized.
    pub async fn sort(&self, entities: &mut [T]) -> Result<Acknowledgement, RestError> {
        self.sort_with(entities, RequestOptions::default()).await
    }

    /// Saves the manual order of `entities`, merging extra request options.
    ///
    /// # Errors
    ///
    /// See [`sort`](Self::sort).
    pub async fn sort_with(
        &self,
        entities: &mut [T],
        options: RequestOptions,
    ) -> Result<Acknowledgement, RestError> {
        for (position, entity) in (1_i64..).zip(entities.iter_mut()) {
            entity.set_sort_value(position);
        }

        let builder = HttpRequest::builder(
            HttpMethod::Patch,
            format!("{}/sort", self.resource.base_path()),
        )
        .body(self.encode(&*entities)?)
        .body_type(DataType::Json);

        let response = self
            .client
            .request(Self::build(options.apply(builder))?)
            .await?;

        match response.body {
            Value::Null => Ok(Acknowledgement::empty()),
            body @ Value::Object(_) => self.decode(body),
            body => Ok(Acknowledgement {
                data: Some(body),
                ..Acknowledgement::empty()
            }),
        }
    }

    /// Sets the enabled flag of an entity and returns the affected-row count.
    ///
    /// The flag is sent as a URL-encoded form body `yn=<flag>`, not JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for transport failures and
    /// [`RestError::Decode`] if the response does not carry a count.
    pub async fn yn(&self, id: impl fmt::Display, flag: u8) -> Result<Envelope<u64>, RestError> {
        let builder = HttpRequest::builder(
            HttpMethod::Patch,
            format!("{}/yn", self.member_path(&id)),
        )
        .body(json!({ "yn": flag }))
        .body_type(DataType::Form);
        self.send(builder).await
    }

    fn member_path(&self, id: &impl fmt::Display) -> String {
        format!("{}/{id}", self.resource.base_path())
    }

    async fn send<R: DeserializeOwned>(
        &self,
        builder: HttpRequestBuilder,
    ) -> Result<Envelope<R>, RestError> {
        let response = self.client.request(Self::build(builder)?).await?;
        self.decode(response.body)
    }

    fn build(builder: HttpRequestBuilder) -> Result<HttpRequest, RestError> {
        builder.build().map_err(|e| RestError::Http(e.into()))
    }

    fn encode<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Value, RestError> {
        serde_json::to_value(payload).map_err(|e| self.encode_error(&e))
    }

    fn encode_error(&self, error: &serde_json::Error) -> RestError {
        RestError::Encode {
            resource: self.resource.to_string(),
            message: error.to_string(),
        }
    }

    fn decode<R: DeserializeOwned>(&self, body: Value) -> Result<Envelope<R>, RestError> {
        serde_json::from_value(body).map_err(|e| RestError::Decode {
            resource: self.resource.to_string(),
            message: e.to_string(),
        })
    }
}
