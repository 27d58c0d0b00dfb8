//! CSI escape sequences, grouped by what they act on.
//!
//! Constants cover the parameter-less forms; functions build the forms
//! that take a count or coordinate.

pub mod color;
pub mod cursor;
pub mod erase;
pub mod scroll;
pub mod text;

pub use color::*;
pub use cursor::{cursor_move, cursor_pos, cursor_pos_x, cursor_pos_y};
pub use cursor::{
    CURSOR_BACKWARD, CURSOR_BLINK_DISABLE, CURSOR_BLINK_ENABLE, CURSOR_DOWN, CURSOR_FORWARD,
    CURSOR_HIDE, CURSOR_LEFT, CURSOR_NEXT_LINE, CURSOR_PREV_LINE, CURSOR_RESTORE, CURSOR_SAVE,
    CURSOR_SHOW, CURSOR_TOP, CURSOR_TOP_LEFT, CURSOR_UP,
};
pub use erase::{
    CLEAR_SCREEN, ERASE_DOWN, ERASE_LEFT, ERASE_LINE, ERASE_RIGHT, ERASE_SCREEN, ERASE_UP,
};
pub use scroll::{scroll, SCROLL_DOWN, SCROLL_UP};
pub use text::{
    text_delete_chars, text_delete_lines, text_erase_chars, text_insert_chars, text_insert_lines,
    TEXT_DELETE_CHAR, TEXT_DELETE_LINE, TEXT_ERASE_CHAR, TEXT_INSERT_CHAR, TEXT_INSERT_LINE,
};
