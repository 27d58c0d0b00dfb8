//! Cursor movement, positioning and visibility.
//!
//! Sequences emitted here:
//! - A/B/C/D: Cursor up, down, forward, backward
//! - E/F: Cursor next/previous line
//! - G: Cursor horizontal absolute
//! - d: Cursor vertical absolute
//! - H: Cursor position
//! - s/u: Save/restore cursor
//! - ?12h/?25h/?25l: Blink and visibility modes

use crate::prefix::{csi, CSI};

pub const CURSOR_UP: &str = csi!("A");
pub const CURSOR_DOWN: &str = csi!("B");
pub const CURSOR_FORWARD: &str = csi!("C");
pub const CURSOR_BACKWARD: &str = csi!("D");
pub const CURSOR_NEXT_LINE: &str = csi!("E");
pub const CURSOR_PREV_LINE: &str = csi!("F");
/// Move to the leftmost column of the current row.
pub const CURSOR_LEFT: &str = csi!("G");
/// Move to the topmost row of the current column.
pub const CURSOR_TOP: &str = csi!("d");
pub const CURSOR_TOP_LEFT: &str = csi!("H");
pub const CURSOR_SAVE: &str = csi!("s");
pub const CURSOR_RESTORE: &str = csi!("u");

pub const CURSOR_BLINK_ENABLE: &str = csi!("?12h");
/// Terminated by a capital `I`, not the lowercase `l` of the DEC reset form.
pub const CURSOR_BLINK_DISABLE: &str = csi!("?12I");
pub const CURSOR_SHOW: &str = csi!("?25h");
pub const CURSOR_HIDE: &str = csi!("?25l");

/// Move the cursor to column `x` of the current row, where 0 is the leftmost.
pub fn cursor_pos_x(x: i32) -> String {
    format!("{CSI}{}G", one_based(x))
}

/// Move the cursor to row `y` of the current column, where 0 is the topmost.
pub fn cursor_pos_y(y: i32) -> String {
    format!("{CSI}{}d", one_based(y))
}

/// Move the cursor to `(x, y)`, where `(0, 0)` is the top-left corner.
///
/// The terminal expects the row first, so the emitted parameters are in
/// `y;x` order.
pub fn cursor_pos(x: i32, y: i32) -> String {
    format!("{CSI}{};{}H", one_based(y), one_based(x))
}

/// Move the cursor relative to its current position.
///
/// The horizontal component is emitted before the vertical one. A zero
/// component emits nothing, so `cursor_move(0, 0)` is the empty string.
pub fn cursor_move(dx: i32, dy: i32) -> String {
    let mut buf = String::new();
    if dx < 0 {
        push_csi(&mut buf, dx.unsigned_abs(), 'D');
    } else if dx > 0 {
        push_csi(&mut buf, dx.unsigned_abs(), 'C');
    }
    if dy < 0 {
        push_csi(&mut buf, dy.unsigned_abs(), 'A');
    } else if dy > 0 {
        push_csi(&mut buf, dy.unsigned_abs(), 'B');
    }
    buf
}

fn push_csi(buf: &mut String, n: u32, final_byte: char) {
    buf.push_str(CSI);
    buf.push_str(&n.to_string());
    buf.push(final_byte);
}

// Widened so that `i32::MAX` still converts.
fn one_based(n: i32) -> i64 {
    i64::from(n) + 1
}
