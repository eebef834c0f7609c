//! Indentation of decoded protocol payloads under their request line.

const PAYLOAD_INDENT: &str = "     ";

/// Start `payload` on a new line with every line indented by five spaces.
pub fn indent_payload(payload: Option<&str>) -> String {
    match payload {
        Some(text) if !text.is_empty() => text
            .lines()
            .map(|line| format!("\n{PAYLOAD_INDENT}{line}"))
            .collect(),
        _ => String::new(),
    }
}
