//! Request header extraction
//!
//! Helpers for reading credentials out of HTTP request headers.

use axum::http::{HeaderMap, HeaderName, header};

/// Length of the `"Bearer "` scheme prefix in an `Authorization` header.
pub const BEARER_PREFIX_LEN: usize = 7;

/// Read a header as UTF-8 text.
///
/// Returns `None` when the header is absent or not valid visible ASCII.
/// When the header is repeated only the first value is considered.
pub fn header_value<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Extract the bearer token from the `Authorization` header.
///
/// The token is exactly what follows the 7-character `"Bearer "` prefix,
/// untouched: extra whitespace stays part of the token and fails
/// verification. The scheme itself is not inspected, so a header shorter
/// than the prefix, a missing header, or `"Bearer "` alone all yield an
/// empty string.
pub fn bearer_token(headers: &HeaderMap) -> &str {
    header_value(headers, &header::AUTHORIZATION)
        .and_then(|value| value.get(BEARER_PREFIX_LEN..))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_header_value_present() {
        let name = HeaderName::from_static("x-app-client-authorization-token");
        let mut headers = HeaderMap::new();
        headers.insert(name.clone(), HeaderValue::from_static("s3cret"));

        assert_eq!(header_value(&headers, &name), Some("s3cret"));
    }

    #[test]
    fn test_header_value_missing() {
        let name = HeaderName::from_static("x-app-client-authorization-token");
        assert_eq!(header_value(&HeaderMap::new(), &name), None);
    }

    #[test]
    fn test_header_value_non_ascii() {
        let name = HeaderName::from_static("x-test");
        let mut headers = HeaderMap::new();
        headers.insert(name.clone(), HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap());

        assert_eq!(header_value(&headers, &name), None);
    }

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_empty_cases() {
        assert_eq!(bearer_token(&HeaderMap::new()), "");

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), "");

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic"));
        assert_eq!(bearer_token(&headers), "");
    }

    #[test]
    fn test_bearer_token_keeps_extra_whitespace() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer   abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), "  abc.def.ghi");

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer \tabc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), "\tabc.def.ghi");
    }
}
