//! Printable rendering of escape sequences.
//!
//! Raw sequences are invisible (or destructive) when printed to a terminal.
//! [`escape_visible`] turns them into Rust-style escapes for display.

/// Render control characters in `s` as `\x1b`-style escapes.
///
/// Backslashes are doubled so the output is unambiguous. Printable
/// characters, including non-ASCII ones, pass through unchanged.
pub fn escape_visible(s: &str) -> String {
    let mut buf = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        match c {
            '\\' => buf.push_str("\\\\"),
            c if c.is_ascii_control() => {
                buf.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => buf.push(c),
        }
    }
    buf
}
