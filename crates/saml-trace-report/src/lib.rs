//! Text reports for browser SAML/HTTP trace exports.
//!
//! This library turns the JSON export of a browser request tracer into a
//! compact report with one record per request: method, shortened URL, status,
//! and optionally the decoded SAML payload and `Set-Cookie` block. It can be
//! used on its own or through the `saml-trace-report` CLI binary.
//!
//! # Example
//!
//! ```no_run
//! use saml_trace_report::{build_report, load_trace, FormatConfig};
//! use std::path::Path;
//!
//! let trace = load_trace(Path::new("trace.json"))?;
//! let config = FormatConfig {
//!     filter_static: true,
//!     show_cookies: true,
//!     ..FormatConfig::default()
//! };
//! print!("{}", build_report(&trace, &config));
//! # Ok::<(), saml_trace_report::ReportError>(())
//! ```

mod cookie;
mod error;
mod filter;
mod format;
mod payload;
mod report;
mod types;
mod url;

// Re-export public types
pub use error::{CookieError, ReportError};
pub use types::{
    FormatConfig, Header, Trace, TracedRequest, UrlStyle, DEFAULT_MAX_LENGTH, MIN_MAX_LENGTH,
    SET_COOKIE,
};

// Re-export the formatting pipeline for advanced usage
pub use cookie::{format_cookies, parse_set_cookie, Cookie, MAX_NAME_CHARS};
pub use filter::should_suppress;
pub use format::format_request;
pub use payload::indent_payload;
pub use report::{build_report, load_trace, parse_trace, read_trace, write_report};
pub use url::{clip_url, shorten_url, ELIDED};
