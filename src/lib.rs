//! ANSI/VT100 escape sequence constants and formatting helpers.
//!
//! Everything here builds a `String` (or exposes a `&'static str`) and
//! leaves writing it to the caller:
//!
//! ```
//! use escapes::{cursor_pos, link, COLOR_RESET, TEXT_COLOR_RED};
//!
//! let out = format!("{}{}error{}", cursor_pos(0, 2), TEXT_COLOR_RED, COLOR_RESET);
//! assert_eq!(out, "\x1b[3;1H\x1b[31merror\x1b[0m");
//! assert_eq!(link("https://example.com", "docs"),
//!            "\x1b]8;;https://example.com\x07docs\x1b]8;;\x07");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod osc;
pub mod prefix;
pub mod sequences;
pub mod table;
pub mod types;
pub mod visible;

pub use config::Config;
pub use error::EscapesError;
pub use osc::{image, image_width_height, link, set_cwd};
pub use prefix::{BEL, CSI, ESC, OSC};
pub use sequences::*;
pub use types::ConsoleDim;
