//! Per-request record formatting.

use tracing::debug;

use crate::cookie::format_cookies;
use crate::filter::should_suppress;
use crate::payload::indent_payload;
use crate::types::{FormatConfig, TracedRequest, UrlStyle};
use crate::url::{clip_url, shorten_url};

/// Characters dropped from the start of the status text (`HTTP/1.1 `).
const STATUS_PREFIX_CHARS: usize = 9;

/// Format one request as a newline-terminated record.
///
/// Suppressed requests yield an empty string.
pub fn format_request(request: &TracedRequest, config: &FormatConfig) -> String {
    if should_suppress(request, config) {
        debug!(
            "Suppressing static request {} {}",
            request.request_id, request.url
        );
        return String::new();
    }

    let id_prefix = if config.show_request_id {
        format!("{} ", request.request_id)
    } else {
        String::new()
    };
    let payload = indent_payload(request.saml.as_deref());
    let url = match config.url_style {
        UrlStyle::Shorten => shorten_url(&request.url, config.max_length),
        UrlStyle::Clip => clip_url(&request.url, config.max_length),
    };
    let response = format_response(request, config, &id_prefix);

    format!(
        "{id_prefix}{} {url}{payload} {response}\n",
        request.method
    )
}

/// Status text, optionally on its own line, followed by the cookie block.
fn format_response(request: &TracedRequest, config: &FormatConfig, id_prefix: &str) -> String {
    let mut response = String::new();
    if config.extra_response_line {
        response.push('\n');
        response.push_str(id_prefix);
    }
    response.extend(
        request
            .response_status_text
            .chars()
            .skip(STATUS_PREFIX_CHARS),
    );

    if config.show_cookies {
        let cookies = format_cookies(request.set_cookie(), config.max_length);
        if !cookies.is_empty() {
            response.push('\n');
            response.push_str(&cookies);
        }
    }
    response
}
