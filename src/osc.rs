//! Operating System Command sequences.
//!
//! These wrap caller data in an `OSC ... BEL` envelope. Nothing is escaped:
//! a BEL or ESC inside `url`, `text` or `dir` ends the envelope early.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::prefix::{BEL, OSC};

/// Wrap `text` in an OSC 8 hyperlink pointing at `url`.
pub fn link(url: &str, text: &str) -> String {
    format!("{OSC}8;;{url}{BEL}{text}{OSC}8;;{BEL}")
}

/// Display an inline image at its natural size.
pub fn image(img: &[u8]) -> String {
    image_width_height(img, 0, 0, true)
}

/// Display an inline image using the iTerm2 `File=` protocol.
///
/// A positive `height` is emitted as the `width=` field and a positive
/// `width` as the `height=` field.
///
/// `preserveAspectRatio=0` is only written when `preserve_aspect_ratio` is
/// false; the terminal preserves the ratio when the field is absent.
pub fn image_width_height(
    img: &[u8],
    height: i32,
    width: i32,
    preserve_aspect_ratio: bool,
) -> String {
    let mut buf = format!("{OSC}1337;File=inline=1");
    if height > 0 {
        buf.push_str(";width=");
        buf.push_str(&height.to_string());
    }
    if width > 0 {
        buf.push_str(";height=");
        buf.push_str(&width.to_string());
    }
    if !preserve_aspect_ratio {
        buf.push_str(";preserveAspectRatio=0");
    }
    buf.push(':');
    buf.push_str(&STANDARD.encode(img));
    buf.push_str(BEL);
    buf
}

/// Report `dir` as the current working directory (OSC 50).
pub fn set_cwd(dir: &str) -> String {
    format!("{OSC}50;CurrentDir={dir}{BEL}")
}
