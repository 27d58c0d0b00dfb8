//! Character and line insertion, deletion and erasure.
//!
//! Counts are passed through as given. Zero or negative values produce
//! sequences a terminal may ignore; that is left to the caller.

use crate::prefix::{csi, CSI};

pub const TEXT_INSERT_CHAR: &str = csi!("@");
pub const TEXT_DELETE_CHAR: &str = csi!("P");
pub const TEXT_ERASE_CHAR: &str = csi!("X");
pub const TEXT_INSERT_LINE: &str = csi!("L");
pub const TEXT_DELETE_LINE: &str = csi!("M");

/// Insert `n` spaces at the cursor, shifting existing characters right.
pub fn text_insert_chars(n: i32) -> String {
    with_count(n, '@')
}

/// Delete `n` characters at the cursor, shifting the rest of the line left.
pub fn text_delete_chars(n: i32) -> String {
    with_count(n, 'P')
}

/// Overwrite `n` characters at the cursor with spaces, without shifting.
pub fn text_erase_chars(n: i32) -> String {
    with_count(n, 'X')
}

/// Insert `n` blank lines at the cursor row, shifting lines below down.
pub fn text_insert_lines(n: i32) -> String {
    with_count(n, 'L')
}

/// Delete `n` lines starting at the cursor row.
pub fn text_delete_lines(n: i32) -> String {
    with_count(n, 'M')
}

fn with_count(n: i32, final_byte: char) -> String {
    format!("{CSI}{n}{final_byte}")
}
