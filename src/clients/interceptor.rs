//! Request interceptors.
//!
//! An interceptor sees every request issued through the [`HttpClient`] it is
//! registered on, once, immediately before the request is validated and
//! sent. Interceptors run synchronously in registration order and may
//! rewrite the request in place.
//!
//! Interceptors are composed into a client explicitly with
//! [`HttpClientBuilder::interceptor`]; a request sent through another client
//! instance is never affected.
//!
//! [`HttpClient`]: crate::clients::HttpClient
//! [`HttpClientBuilder::interceptor`]: crate::clients::HttpClientBuilder::interceptor

use std::fmt;

use crate::clients::HttpRequest;

/// A hook that rewrites outgoing requests.
pub trait RequestInterceptor: fmt::Debug + Send + Sync {
    /// Rewrites `request` before it is transmitted.
    fn intercept(&self, request: &mut HttpRequest);
}

/// Renames the UI paging fields to the backend's names.
///
/// Tables send `current` and `pageSize`; the backend reads `page` and
/// `size`. For a request carrying query parameters, `current` is moved to
/// `page` and `pageSize` to `size`. Every other parameter is left alone,
/// absent fields stay absent, and requests without parameters pass through
/// untouched.
///
/// # Example
///
/// ```rust
/// use admin_console::clients::{HttpMethod, HttpRequest, PageArgumentsInterceptor, RequestInterceptor};
///
/// let mut request = HttpRequest::builder(HttpMethod::Get, "/api/users")
///     .param("current", "2")
///     .param("pageSize", "20")
///     .param("q", "x")
///     .build()
///     .unwrap();
///
/// PageArgumentsInterceptor.intercept(&mut request);
///
/// let params = request.params.unwrap();
/// assert_eq!(params.get("page").map(String::as_str), Some("2"));
/// assert_eq!(params.get("size").map(String::as_str), Some("20"));
/// assert!(!params.contains_key("current"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageArgumentsInterceptor;

impl PageArgumentsInterceptor {
    const RENAMES: [(&'static str, &'static str); 2] = [("current", "page"), ("pageSize", "size")];
}

impl RequestInterceptor for PageArgumentsInterceptor {
    fn intercept(&self, request: &mut HttpRequest) {
        let Some(params) = request.params.as_mut() else {
            return;
        };

        for (from, to) in Self::RENAMES {
            if let Some(value) = params.remove(from) {
                params.insert(to.to_string(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use std::collections::BTreeMap;

    fn get(params: Option<BTreeMap<String, String>>) -> HttpRequest {
        let builder = HttpRequest::builder(HttpMethod::Get, "/api/users");
        let builder = match params {
            Some(p) => builder.params(p),
            None => builder,
        };
        builder.build().unwrap()
    }

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_renames_both_paging_fields() {
        let mut request = get(Some(map(&[("current", "2"), ("pageSize", "20"), ("q", "x")])));

        PageArgumentsInterceptor.intercept(&mut request);

        assert_eq!(
            request.params,
            Some(map(&[("page", "2"), ("size", "20"), ("q", "x")]))
        );
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let mut request = get(Some(map(&[("pageSize", "10")])));

        PageArgumentsInterceptor.intercept(&mut request);

        assert_eq!(request.params, Some(map(&[("size", "10")])));
    }

    #[test]
    fn test_request_without_params_is_untouched() {
        let mut request = get(None);

        PageArgumentsInterceptor.intercept(&mut request);

        assert!(request.params.is_none());
        assert_eq!(request.path, "/api/users");
    }

    #[test]
    fn test_empty_params_stay_empty() {
        let mut request = get(Some(BTreeMap::new()));

        PageArgumentsInterceptor.intercept(&mut request);

        assert_eq!(request.params, Some(BTreeMap::new()));
    }

    #[test]
    fn test_rename_applied_once() {
        let mut request = get(Some(map(&[("current", "3")])));

        PageArgumentsInterceptor.intercept(&mut request);
        PageArgumentsInterceptor.intercept(&mut request);

        assert_eq!(request.params, Some(map(&[("page", "3")])));
    }
}
