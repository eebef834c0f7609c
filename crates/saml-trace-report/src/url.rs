//! URL shortening for report lines.
//!
//! Long URLs are reduced to authority, path and a compacted query where every
//! long value is replaced by a marker. The result is meant for reading, not
//! for requesting: the scheme and fragment are dropped and the query is
//! appended without its `?`.

/// Placeholder for anything too long to show.
pub const ELIDED: &str = "[..]";

/// Query values with at least this many characters are elided.
const MAX_QUERY_VALUE_CHARS: usize = 10;

/// Shorten `url` if it has `max_length` characters or more.
pub fn shorten_url(url: &str, max_length: usize) -> String {
    if url.chars().count() < max_length {
        return url.to_string();
    }

    let parts = UrlParts::split(url);
    let mut shortened = String::with_capacity(url.len());
    shortened.push_str(parts.authority);
    shortened.push_str(parts.path);
    if !parts.params.is_empty() {
        shortened.push(';');
        shortened.push_str(parts.params);
    }
    shortened.push_str(&shorten_query(parts.query));
    shortened
}

/// Keep the first `max_length` characters of `url`.
pub fn clip_url(url: &str, max_length: usize) -> String {
    url.chars().take(max_length).collect()
}

/// Borrowed components of a URL.
#[derive(Debug, Default, PartialEq, Eq)]
struct UrlParts<'a> {
    authority: &'a str,
    path: &'a str,
    params: &'a str,
    query: &'a str,
}

impl<'a> UrlParts<'a> {
    fn split(url: &'a str) -> Self {
        let rest = strip_scheme(url);
        let rest = rest.split_once('#').map_or(rest, |(before, _)| before);

        let (authority, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find(['/', '?']).unwrap_or(after.len());
                after.split_at(end)
            }
            None => ("", rest),
        };

        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        // Params belong to the last path segment only.
        let segment_start = path.rfind('/').unwrap_or(0);
        let (path, params) = match path[segment_start..].find(';') {
            Some(offset) => {
                let at = segment_start + offset;
                (&path[..at], &path[at + 1..])
            }
            None => (path, ""),
        };

        Self {
            authority,
            path,
            params,
            query,
        }
    }
}

fn strip_scheme(url: &str) -> &str {
    let Some((scheme, rest)) = url.split_once(':') else {
        return url;
    };
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        rest
    } else {
        url
    }
}

/// Decode `query` into keys in first-seen order, each with its values in order.
///
/// Pairs without `=` or with an empty value are skipped.
fn parse_query(query: &str) -> Vec<(String, Vec<String>)> {
    let mut pairs: Vec<(String, Vec<String>)> = Vec::new();
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        let key = decode_component(key);
        let value = decode_component(value);
        match pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => pairs.push((key, vec![value])),
        }
    }
    pairs
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

fn shorten_query(query: &str) -> String {
    parse_query(query)
        .iter()
        .map(|(key, values)| {
            values
                .iter()
                .map(|value| {
                    if value.chars().count() >= MAX_QUERY_VALUE_CHARS {
                        format!("{key}={ELIDED}")
                    } else {
                        format!("{key}={value}")
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_url_unchanged() {
        let url = "https://sp.example.com/acs?x=1";
        assert_eq!(shorten_url(url, 100), url);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // 10 characters with max 10 is shortened: scheme goes away.
        assert_eq!(shorten_url("http://x/a", 10), "x/a");
        assert_eq!(shorten_url("http://x/a", 11), "http://x/a");
    }

    #[test]
    fn test_long_query_values_elided() {
        let url = "https://idp.example.com/sso?SAMLRequest=fZJNT8MwDIbvSPyHKvetTdcxiNZJg8EkPipNXy4Sum4&RelayState=abc";
        assert_eq!(
            shorten_url(url, 20),
            "idp.example.com/ssoSAMLRequest=[..]  RelayState=abc"
        );
    }

    #[test]
    fn test_repeated_keys_are_grouped() {
        let url = "https://h/p?a=1&b=2&a=0123456789&a=3";
        assert_eq!(shorten_url(url, 10), "h/pa=1a=[..]a=3  b=2");
    }

    #[test]
    fn test_values_are_decoded_before_measuring() {
        // "%20" decodes to one character, so this value is 9 characters long.
        let url = "https://h/p?q=a%20bcdef+g";
        assert_eq!(shorten_url(url, 10), "h/pq=a bcdef g");
    }

    #[test]
    fn test_blank_and_bare_pairs_dropped() {
        let url = "https://h/p?flag&empty=&kept=1";
        assert_eq!(shorten_url(url, 10), "h/pkept=1");
    }

    #[test]
    fn test_params_and_fragment() {
        let url = "https://h/a;b/c;jsessionid=42?x=1#frag";
        assert_eq!(shorten_url(url, 10), "h/a;b/c;jsessionid=42x=1");
    }

    #[test]
    fn test_port_stays_in_authority() {
        let url = "https://h:8443/path/to/resource";
        assert_eq!(shorten_url(url, 10), "h:8443/path/to/resource");
    }

    #[test]
    fn test_url_without_authority() {
        assert_eq!(shorten_url("/relative/path?k=v", 5), "/relative/pathk=v");
    }

    #[test]
    fn test_split_parts() {
        let parts = UrlParts::split("https://host/p;q?r=s#t");
        assert_eq!(
            parts,
            UrlParts {
                authority: "host",
                path: "/p",
                params: "q",
                query: "r=s",
            }
        );
    }

    #[test]
    fn test_clip_url() {
        assert_eq!(clip_url("https://host/path", 10), "https://ho");
        assert_eq!(clip_url("short", 10), "short");
        assert_eq!(clip_url("ééééé", 3), "ééé");
    }

    proptest! {
        #[test]
        fn test_urls_below_limit_are_untouched(url in ".{0,40}", extra in 1usize..20) {
            let max = url.chars().count() + extra;
            prop_assert_eq!(shorten_url(&url, max), url);
        }

        #[test]
        fn test_each_long_value_becomes_marker(value in "[a-z0-9]{10,60}") {
            let url = format!("https://h/p?k={value}");
            prop_assert_eq!(shorten_url(&url, 10), "h/pk=[..]");
        }
    }
}
