//! Static asset suppression.

use crate::types::{FormatConfig, TracedRequest};

/// URL suffixes treated as static assets. `.ico` is listed twice, as it always has been.
const STATIC_SUFFIXES: [&str; 5] = [".ico", ".jpg", ".png", ".css", ".ico"];

/// Whether `request` is hidden from the report.
///
/// Only GET requests are considered, and only by the last four characters of
/// the URL, so query strings or upper-case extensions defeat the check.
pub fn should_suppress(request: &TracedRequest, config: &FormatConfig) -> bool {
    if !config.filter_static || request.method != "GET" {
        return false;
    }
    url_suffix(&request.url).is_some_and(|suffix| STATIC_SUFFIXES.contains(&suffix))
}

fn url_suffix(url: &str) -> Option<&str> {
    let (start, _) = url.char_indices().rev().nth(3)?;
    Some(&url[start..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request(method: &str, url: &str) -> TracedRequest {
        TracedRequest {
            request_id: "1".to_string(),
            method: method.to_string(),
            url: url.to_string(),
            response_status_text: "HTTP/1.1 200".to_string(),
            response_headers: Vec::new(),
            saml: None,
        }
    }

    fn filtering() -> FormatConfig {
        FormatConfig {
            filter_static: true,
            ..FormatConfig::default()
        }
    }

    #[test]
    fn test_static_gets_are_suppressed() {
        for url in [
            "http://x/favicon.ico",
            "http://x/a.jpg",
            "http://x/a.png",
            "http://x/site.css",
        ] {
            assert!(should_suppress(&request("GET", url), &filtering()), "{url}");
        }
    }

    #[test]
    fn test_dynamic_gets_are_kept() {
        assert!(!should_suppress(&request("GET", "http://x/sso"), &filtering()));
        assert!(!should_suppress(&request("GET", "http://x/app.js"), &filtering()));
        assert!(!should_suppress(&request("GET", "http://x/a.jpeg"), &filtering()));
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        assert!(!should_suppress(&request("GET", "http://x/A.PNG"), &filtering()));
    }

    #[test]
    fn test_query_string_defeats_suffix() {
        assert!(!should_suppress(&request("GET", "http://x/a.png?v=2"), &filtering()));
    }

    #[test]
    fn test_short_urls_never_match() {
        assert!(!should_suppress(&request("GET", "png"), &filtering()));
        assert!(!should_suppress(&request("GET", ""), &filtering()));
        assert!(should_suppress(&request("GET", ".png"), &filtering()));
    }

    #[test]
    fn test_multibyte_url_suffix() {
        assert!(should_suppress(&request("GET", "http://x/ü.css"), &filtering()));
        assert!(!should_suppress(&request("GET", "http://x/üüüü"), &filtering()));
    }

    #[test]
    fn test_filter_disabled() {
        let config = FormatConfig::default();
        assert!(!should_suppress(&request("GET", "http://x/a.png"), &config));
    }

    proptest! {
        #[test]
        fn test_non_get_never_suppressed(
            method in "[A-Z]{3,7}".prop_filter("not GET", |m| m != "GET"),
            url in ".*",
        ) {
            prop_assert!(!should_suppress(&request(&method, &url), &filtering()));
        }

        #[test]
        fn test_unfiltered_never_suppressed(url in ".*") {
            prop_assert!(!should_suppress(&request("GET", &url), &FormatConfig::default()));
        }
    }
}
