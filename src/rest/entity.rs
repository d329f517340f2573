//! Shape contracts for entities and list queries.
//!
//! A [`DomainService`](crate::rest::DomainService) is generic over an entity
//! type and a query type. The traits here are the only capabilities it needs
//! from them: an entity has an identifier and a manual `sortValue`; a query
//! serializes to filter/paging fields and can carry an `orders` clause.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record managed through a resource service.
///
/// # Example
///
/// ```rust
/// use admin_console::rest::Entity;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct Role {
///     id: Option<u64>,
///     name: String,
///     sort_value: Option<i64>,
/// }
///
/// impl Entity for Role {
///     type Id = u64;
///
///     fn id(&self) -> Option<u64> {
///         self.id
///     }
///
///     fn sort_value(&self) -> Option<i64> {
///         self.sort_value
///     }
///
///     fn set_sort_value(&mut self, value: i64) {
///         self.sort_value = Some(value);
///     }
/// }
/// ```
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    /// The type of the entity's identifier (usually `u64` or `String`).
    type Id: Display + Serialize + DeserializeOwned + Clone + Send + Sync;

    /// Returns the identifier, `None` for records not yet created.
    fn id(&self) -> Option<Self::Id>;

    /// Returns the manual display position within the collection.
    fn sort_value(&self) -> Option<i64>;

    /// Overwrites the manual display position.
    fn set_sort_value(&mut self, value: i64);
}

/// Filter and paging fields of a list request.
///
/// The query is serialized to a flat map of query-string parameters; `null`
/// fields are dropped.
pub trait Query: Serialize + Send + Sync {
    /// Returns the current `orders` clause.
    fn orders(&self) -> Option<&str>;

    /// Sets the `orders` clause (`column` or `column desc`).
    fn set_orders(&mut self, orders: String);
}

/// A general-purpose list query.
///
/// Serializes `current`/`pageSize` (renamed to `page`/`size` on the wire by
/// [`PageArgumentsInterceptor`](crate::clients::PageArgumentsInterceptor)),
/// `orders`, and any extra filters at the top level.
///
/// # Example
///
/// ```rust
/// use admin_console::rest::PageQuery;
///
/// let query = PageQuery::new().current(2).page_size(20).filter("name", "ad");
///
/// let json = serde_json::to_value(&query).unwrap();
/// assert_eq!(json, serde_json::json!({"current": 2, "pageSize": 20, "name": "ad"}));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,
    /// Number of records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    /// Sort clause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<String>,
    /// Resource-specific filters.
    #[serde(flatten)]
    pub filters: Map<String, Value>,
}

impl PageQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    #[must_use]
    pub const fn current(mut self, current: u64) -> Self {
        self.current = Some(current);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Adds a filter field.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }
}

impl Query for PageQuery {
    fn orders(&self) -> Option<&str> {
        self.orders.as_deref()
    }

    fn set_orders(&mut self, orders: String) {
        self.orders = Some(orders);
    }
}

/// Serializes a query to query-string parameters.
///
/// Scalars are written as text, `null` is skipped, arrays become
/// comma-separated lists, and nested objects are written as JSON.
pub(crate) fn to_params<T: Serialize + ?Sized>(
    query: &T,
) -> Result<BTreeMap<String, String>, serde_json::Error> {
    let mut params = BTreeMap::new();

    if let Value::Object(map) = serde_json::to_value(query)? {
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => {
                    params.insert(key, s);
                }
                Value::Number(n) => {
                    params.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    params.insert(key, b.to_string());
                }
                Value::Array(items) => {
                    let values: Vec<String> = items
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            Value::Bool(b) => Some(b.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        params.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    params.insert(key, value.to_string());
                }
            }
        }
    }

    Ok(params)
}
