//! `Set-Cookie` parsing and rendering.
//!
//! A single header value may define several cookies: any `name=value` token
//! whose name is not a known attribute starts a new cookie, and the
//! attributes that follow attach to it. The rendered block lines up under
//! the status of the request it belongs to.

use tracing::debug;

use crate::error::CookieError;
use crate::url::ELIDED;

/// Cookie names longer than this are cut to this many characters.
pub const MAX_NAME_CHARS: usize = 40;

const RESERVED_ATTRIBUTES: [&str; 9] = [
    "expires", "path", "comment", "domain", "max-age", "secure", "version", "httponly", "samesite",
];

const FLAG_ATTRIBUTES: [&str; 2] = ["secure", "httponly"];

const SET_PREFIX: &str = "Set-";
const SAMESITE_LINE: &str = "Cookie: samesite=";

/// A cookie with its attributes in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    /// Attribute name as written, and its value (`None` for flags like `Secure`).
    pub attributes: Vec<(String, Option<String>)>,
}

impl Cookie {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            attributes: Vec::new(),
        }
    }

    /// Attribute value by case-insensitive name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .and_then(|(_, value)| value.as_deref())
    }

    /// Set an attribute, keeping the existing key spelling if present.
    fn set_attribute(&mut self, name: &str, value: Option<String>) {
        match self
            .attributes
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Copy for display: long values hide value and path, long names are cut.
    fn truncated(&self, max_length: usize) -> Self {
        let mut shown = self.clone();
        if self.value.chars().count() > max_length {
            shown.value = ELIDED.to_string();
            shown.set_attribute("Path", Some(ELIDED.to_string()));
        }
        if self.name.chars().count() > MAX_NAME_CHARS {
            shown.name = self.name.chars().take(MAX_NAME_CHARS).collect();
        }
        shown
    }

    /// Header form: `Set-Cookie: name=value; Attr=val; Flag`.
    fn header_line(&self) -> String {
        let mut line = format!("Set-Cookie: {}={}", self.name, self.value);
        for (key, value) in &self.attributes {
            match value {
                Some(value) => line.push_str(&format!("; {key}={value}")),
                None => line.push_str(&format!("; {key}")),
            }
        }
        line
    }
}

/// Parse a `Set-Cookie` header value into its cookies.
pub fn parse_set_cookie(header: &str) -> Result<Vec<Cookie>, CookieError> {
    let mut cookies: Vec<Cookie> = Vec::new();

    for token in header.split(';').map(str::trim).filter(|t| !t.is_empty()) {
        match token.split_once('=') {
            Some((key, value)) => {
                let key = key.trim();
                let value = unquote(value.trim());
                if is_reserved(key) {
                    let cookie = cookies
                        .last_mut()
                        .ok_or_else(|| CookieError::AttributeBeforeCookie(key.to_string()))?;
                    cookie.set_attribute(key, Some(value.to_string()));
                } else if key.is_empty() {
                    return Err(CookieError::EmptyName);
                } else {
                    cookies.push(Cookie::new(key, value));
                }
            }
            None => {
                let is_flag = FLAG_ATTRIBUTES
                    .iter()
                    .any(|flag| flag.eq_ignore_ascii_case(token));
                match cookies.last_mut() {
                    Some(cookie) if is_flag => cookie.set_attribute(token, None),
                    _ => return Err(CookieError::UnexpectedToken(token.to_string())),
                }
            }
        }
    }

    Ok(cookies)
}

/// Render the cookie block for a `Set-Cookie` value.
///
/// Returns an empty string when there is no header or it cannot be parsed.
pub fn format_cookies(header: Option<&str>, max_length: usize) -> String {
    let Some(header) = header else {
        return String::new();
    };
    let cookies = match parse_set_cookie(header) {
        Ok(cookies) => cookies,
        Err(e) => {
            debug!("Ignoring malformed Set-Cookie header: {e}");
            return String::new();
        }
    };

    let serialized = cookies
        .iter()
        .map(|cookie| cookie.truncated(max_length).header_line())
        .collect::<Vec<_>>()
        .join("\n");
    reindent(&serialized)
}

/// Align serialized cookie lines under the status column.
fn reindent(serialized: &str) -> String {
    serialized
        .lines()
        .map(|line| {
            if let Some(rest) = line.strip_prefix(SET_PREFIX) {
                format!("{}{rest}", " ".repeat(7))
            } else if let Some(rest) = line.strip_prefix(SAMESITE_LINE) {
                format!("{}samesite= {rest}", " ".repeat(8))
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_reserved(key: &str) -> bool {
    RESERVED_ATTRIBUTES
        .iter()
        .any(|attr| attr.eq_ignore_ascii_case(key))
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
