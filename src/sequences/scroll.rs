//! Scrolling the active window.

use crate::prefix::{csi, CSI};

pub const SCROLL_UP: &str = csi!("S");
pub const SCROLL_DOWN: &str = csi!("T");

/// Scroll the current window by `n` lines.
///
/// Positive values scroll up, negative values scroll down by the magnitude,
/// and zero produces the empty string.
pub fn scroll(n: i32) -> String {
    match n {
        0 => String::new(),
        n if n > 0 => format!("{CSI}{n}S"),
        n => format!("{CSI}{}T", n.unsigned_abs()),
    }
}
