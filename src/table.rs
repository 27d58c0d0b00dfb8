//! Lookup of the parameter-less sequences by name.
//!
//! Names are the kebab-case form of the constant names in
//! [`crate::sequences`], e.g. `CURSOR_UP` is `cursor-up`.

use serde::Serialize;

use crate::sequences::*;

/// Grouping of named sequences, used for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Cursor,
    Scroll,
    Text,
    Erase,
    Foreground,
    Background,
    Reset,
}

impl Category {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cursor => "cursor",
            Self::Scroll => "scroll",
            Self::Text => "text",
            Self::Erase => "erase",
            Self::Foreground => "foreground",
            Self::Background => "background",
            Self::Reset => "reset",
        }
    }
}

/// A parameter-less escape sequence and its lookup name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedSequence {
    pub name: &'static str,
    pub category: Category,
    pub value: &'static str,
}

const fn entry(name: &'static str, category: Category, value: &'static str) -> NamedSequence {
    NamedSequence {
        name,
        category,
        value,
    }
}

/// Every named constant, in declaration order.
pub const NAMED_SEQUENCES: &[NamedSequence] = &[
    entry("cursor-up", Category::Cursor, CURSOR_UP),
    entry("cursor-down", Category::Cursor, CURSOR_DOWN),
    entry("cursor-forward", Category::Cursor, CURSOR_FORWARD),
    entry("cursor-backward", Category::Cursor, CURSOR_BACKWARD),
    entry("cursor-next-line", Category::Cursor, CURSOR_NEXT_LINE),
    entry("cursor-prev-line", Category::Cursor, CURSOR_PREV_LINE),
    entry("cursor-left", Category::Cursor, CURSOR_LEFT),
    entry("cursor-top", Category::Cursor, CURSOR_TOP),
    entry("cursor-top-left", Category::Cursor, CURSOR_TOP_LEFT),
    entry("cursor-save", Category::Cursor, CURSOR_SAVE),
    entry("cursor-restore", Category::Cursor, CURSOR_RESTORE),
    entry("cursor-blink-enable", Category::Cursor, CURSOR_BLINK_ENABLE),
    entry("cursor-blink-disable", Category::Cursor, CURSOR_BLINK_DISABLE),
    entry("cursor-show", Category::Cursor, CURSOR_SHOW),
    entry("cursor-hide", Category::Cursor, CURSOR_HIDE),
    entry("scroll-up", Category::Scroll, SCROLL_UP),
    entry("scroll-down", Category::Scroll, SCROLL_DOWN),
    entry("text-insert-char", Category::Text, TEXT_INSERT_CHAR),
    entry("text-delete-char", Category::Text, TEXT_DELETE_CHAR),
    entry("text-erase-char", Category::Text, TEXT_ERASE_CHAR),
    entry("text-insert-line", Category::Text, TEXT_INSERT_LINE),
    entry("text-delete-line", Category::Text, TEXT_DELETE_LINE),
    entry("erase-right", Category::Erase, ERASE_RIGHT),
    entry("erase-left", Category::Erase, ERASE_LEFT),
    entry("erase-line", Category::Erase, ERASE_LINE),
    entry("erase-down", Category::Erase, ERASE_DOWN),
    entry("erase-up", Category::Erase, ERASE_UP),
    entry("erase-screen", Category::Erase, ERASE_SCREEN),
    entry("text-color-black", Category::Foreground, TEXT_COLOR_BLACK),
    entry("text-color-red", Category::Foreground, TEXT_COLOR_RED),
    entry("text-color-green", Category::Foreground, TEXT_COLOR_GREEN),
    entry("text-color-yellow", Category::Foreground, TEXT_COLOR_YELLOW),
    entry("text-color-blue", Category::Foreground, TEXT_COLOR_BLUE),
    entry("text-color-magenta", Category::Foreground, TEXT_COLOR_MAGENTA),
    entry("text-color-cyan", Category::Foreground, TEXT_COLOR_CYAN),
    entry("text-color-white", Category::Foreground, TEXT_COLOR_WHITE),
    entry("text-color-bright-black", Category::Foreground, TEXT_COLOR_BRIGHT_BLACK),
    entry("text-color-bright-red", Category::Foreground, TEXT_COLOR_BRIGHT_RED),
    entry("text-color-bright-green", Category::Foreground, TEXT_COLOR_BRIGHT_GREEN),
    entry("text-color-bright-yellow", Category::Foreground, TEXT_COLOR_BRIGHT_YELLOW),
    entry("text-color-bright-blue", Category::Foreground, TEXT_COLOR_BRIGHT_BLUE),
    entry("text-color-bright-magenta", Category::Foreground, TEXT_COLOR_BRIGHT_MAGENTA),
    entry("text-color-bright-cyan", Category::Foreground, TEXT_COLOR_BRIGHT_CYAN),
    entry("text-color-bright-white", Category::Foreground, TEXT_COLOR_BRIGHT_WHITE),
    entry("background-color-black", Category::Background, BACKGROUND_COLOR_BLACK),
    entry("background-color-red", Category::Background, BACKGROUND_COLOR_RED),
    entry("background-color-green", Category::Background, BACKGROUND_COLOR_GREEN),
    entry("background-color-yellow", Category::Background, BACKGROUND_COLOR_YELLOW),
    entry("background-color-blue", Category::Background, BACKGROUND_COLOR_BLUE),
    entry("background-color-magenta", Category::Background, BACKGROUND_COLOR_MAGENTA),
    entry("background-color-cyan", Category::Background, BACKGROUND_COLOR_CYAN),
    entry("background-color-white", Category::Background, BACKGROUND_COLOR_WHITE),
    entry("background-color-bright-black", Category::Background, BACKGROUND_COLOR_BRIGHT_BLACK),
    entry("background-color-bright-red", Category::Background, BACKGROUND_COLOR_BRIGHT_RED),
    entry("background-color-bright-green", Category::Background, BACKGROUND_COLOR_BRIGHT_GREEN),
    entry("background-color-bright-yellow", Category::Background, BACKGROUND_COLOR_BRIGHT_YELLOW),
    entry("background-color-bright-blue", Category::Background, BACKGROUND_COLOR_BRIGHT_BLUE),
    entry("background-color-bright-magenta", Category::Background, BACKGROUND_COLOR_BRIGHT_MAGENTA),
    entry("background-color-bright-cyan", Category::Background, BACKGROUND_COLOR_BRIGHT_CYAN),
    entry("background-color-bright-white", Category::Background, BACKGROUND_COLOR_BRIGHT_WHITE),
    entry("color-reset", Category::Reset, COLOR_RESET),
    entry("clear-screen", Category::Reset, CLEAR_SCREEN),
];

/// Find a named sequence. Case-insensitive; `_` may be used in place of `-`.
pub fn lookup(name: &str) -> Option<&'static str> {
    let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
    NAMED_SEQUENCES
        .iter()
        .find(|seq| seq.name == wanted)
        .map(|seq| seq.value)
}

/// Iterate the sequences belonging to `category`.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static NamedSequence> {
    NAMED_SEQUENCES
        .iter()
        .filter(move |seq| seq.category == category)
}
