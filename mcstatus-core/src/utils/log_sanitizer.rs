//! Log sanitization utilities
//!
//! Status bodies embed the server icon as a base64 `data:` URL, often tens of
//! kilobytes. These helpers keep such bodies readable in debug/error logs.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 512;

/// Marker preceding inline base64 payloads.
const BASE64_MARKER: &str = ";base64,";

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Replace every inline base64 payload with its length.
///
/// `"data:image/png;base64,iVBOR..."` becomes `"data:image/png;base64,<4096 bytes>"`.
/// The payload ends at the first character outside the base64 alphabet.
pub fn redact_data_urls(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(TRUNCATE_LIMIT * 2));
    let mut rest = s;
    while let Some(pos) = rest.find(BASE64_MARKER) {
        let (head, tail) = rest.split_at(pos + BASE64_MARKER.len());
        out.push_str(head);
        let len = tail
            .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')))
            .unwrap_or(tail.len());
        out.push_str(&format!("<{len} bytes>"));
        rest = &tail[len..];
    }
    out.push_str(rest);
    out
}

/// Redact inline icons, then truncate to a loggable size.
pub fn truncate_for_log(s: &str) -> String {
    let s = redact_data_urls(s);
    if s.len() <= TRUNCATE_LIMIT {
        s
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(&s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}
