//! Resource services for the console's REST collections.
//!
//! This module provides the generic resource client and the contracts it is
//! built on:
//!
//! - **[`DomainService`]**: CRUD, manual reordering and enable/disable for one
//!   collection under `/api/{resource}`
//! - **[`Entity`] / [`Query`]**: What a service needs from record and query types
//! - **[`PageQuery`]**: A ready-made paged query with free-form filters
//! - **[`Envelope`]**: The `{success, data, ...}` wrapper every response uses
//! - **[`SortDescriptor`]**: Single-column sort turned into an `orders` clause
//! - **[`RestError`]**: Transport errors plus encode/decode failures
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use admin_console::{BaseUrl, ConsoleConfig, HttpClient, ResourceName};
//! use admin_console::rest::{DomainService, PageQuery, SortDescriptor};
//!
//! let config = ConsoleConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8000")?)
//!     .build()?;
//! let client = Arc::new(HttpClient::console(&config)?);
//!
//! let roles: DomainService<Role> = DomainService::new(client, ResourceName::new("roles")?);
//!
//! // GET /api/roles?page=1&size=20&orders=name%20desc
//! let mut query = PageQuery::new().current(1).page_size(20);
//! let page = roles.list(&mut query, Some(&SortDescriptor::descend("name"))).await?;
//! println!("{} of {:?}", page.data.map_or(0, |d| d.len()), page.total);
//!
//! // PATCH /api/roles/3/yn with body yn=0
//! roles.yn(3, 0).await?;
//! ```

mod domain_service;
mod entity;
mod envelope;
mod errors;
mod sort;

pub use domain_service::{DomainService, RequestOptions};
pub use entity::{Entity, PageQuery, Query};
pub use envelope::{Acknowledgement, Envelope};
pub(crate) use envelope::string_or_number;
pub use errors::RestError;
pub use sort::{SortDescriptor, SortOrder, ASCEND};
