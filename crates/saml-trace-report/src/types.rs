//! Core types for the report library: the decoded trace and the run configuration.

use serde::Deserialize;

/// Header name whose first occurrence carries the cookies shown in a report.
pub const SET_COOKIE: &str = "Set-Cookie";

/// Default maximum URL length before shortening kicks in.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Smallest accepted maximum URL length.
pub const MIN_MAX_LENGTH: usize = 10;

/// A trace as exported by the browser tracer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Trace {
    /// Capture start time, printed verbatim in the report header.
    pub timestamp: String,
    /// Recorded requests in capture order.
    pub requests: Vec<TracedRequest>,
}

/// One recorded request/response exchange.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracedRequest {
    pub request_id: String,
    pub method: String,
    pub url: String,
    /// Full status line, e.g. `HTTP/1.1 200 OK`.
    pub response_status_text: String,
    pub response_headers: Vec<Header>,
    /// Decoded SAML message attached by the tracer, if any.
    #[serde(default)]
    pub saml: Option<String>,
}

/// A response header as a name/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl TracedRequest {
    /// Value of the first `Set-Cookie` response header.
    ///
    /// The name match is case-sensitive and later `Set-Cookie` headers are ignored.
    pub fn set_cookie(&self) -> Option<&str> {
        self.response_headers
            .iter()
            .find(|h| h.name == SET_COOKIE)
            .map(|h| h.value.as_str())
    }
}

/// How overlong URLs are reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlStyle {
    /// Keep host and path, abbreviate long query values.
    #[default]
    Shorten,
    /// Keep the first `max_length` characters verbatim.
    Clip,
}

/// Options controlling how each request is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Prefix each record with the tracer's request id.
    pub show_request_id: bool,
    /// Hide GET requests for icons, images and stylesheets.
    pub filter_static: bool,
    /// URL length threshold; also the cookie value length threshold.
    pub max_length: usize,
    /// Append the `Set-Cookie` block under the status.
    pub show_cookies: bool,
    /// Put the status on its own line.
    pub extra_response_line: bool,
    pub url_style: UrlStyle,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            show_request_id: false,
            filter_static: false,
            max_length: DEFAULT_MAX_LENGTH,
            show_cookies: false,
            extra_response_line: false,
            url_style: UrlStyle::Shorten,
        }
    }
}

impl FormatConfig {
    /// Layout of the first release: one line per request, URLs clipped, no cookies.
    pub fn legacy() -> Self {
        Self {
            url_style: UrlStyle::Clip,
            ..Self::default()
        }
    }

    /// Set the maximum length, raising it to [`MIN_MAX_LENGTH`] if lower.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length.max(MIN_MAX_LENGTH);
        self
    }
}
