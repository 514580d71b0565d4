//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type for accessing API response
//! data after dispatch.

use std::collections::HashMap;

/// An HTTP response from the API.
///
/// Contains the response status code, headers, and the decoded JSON body.
/// SWAPI carries its pagination links inside the body (`next` / `previous`
/// URLs), so no header-level pagination parsing happens here.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched against their lowercased form.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

// Verify HttpResponse is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpResponse>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_for_2xx_codes() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.is_ok());

        let response = HttpResponse::new(204, HashMap::new(), json!({}));
        assert!(response.is_ok());
    }

    #[test]
    fn test_is_not_ok_for_error_codes() {
        let response = HttpResponse::new(404, HashMap::new(), json!({}));
        assert!(!response.is_ok());

        let response = HttpResponse::new(500, HashMap::new(), json!({}));
        assert!(!response.is_ok());
    }

    #[test]
    fn test_header_returns_first_value() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string(), "ignored".to_string()],
        );

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_body_is_accessible() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"count": 82}));
        assert_eq!(response.body["count"], 82);
    }
}
