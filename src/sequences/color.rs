//! 16-color foreground and background SGR codes.
//!
//! The bright variants are the base color with the bold attribute
//! (`3x;1m` / `4x;1m`), not the aixterm `9x`/`10x` codes.

use crate::prefix::csi;

pub const TEXT_COLOR_BLACK: &str = csi!("30m");
pub const TEXT_COLOR_RED: &str = csi!("31m");
pub const TEXT_COLOR_GREEN: &str = csi!("32m");
pub const TEXT_COLOR_YELLOW: &str = csi!("33m");
pub const TEXT_COLOR_BLUE: &str = csi!("34m");
pub const TEXT_COLOR_MAGENTA: &str = csi!("35m");
pub const TEXT_COLOR_CYAN: &str = csi!("36m");
pub const TEXT_COLOR_WHITE: &str = csi!("37m");
pub const TEXT_COLOR_BRIGHT_BLACK: &str = csi!("30;1m");
pub const TEXT_COLOR_BRIGHT_RED: &str = csi!("31;1m");
pub const TEXT_COLOR_BRIGHT_GREEN: &str = csi!("32;1m");
pub const TEXT_COLOR_BRIGHT_YELLOW: &str = csi!("33;1m");
pub const TEXT_COLOR_BRIGHT_BLUE: &str = csi!("34;1m");
pub const TEXT_COLOR_BRIGHT_MAGENTA: &str = csi!("35;1m");
pub const TEXT_COLOR_BRIGHT_CYAN: &str = csi!("36;1m");
pub const TEXT_COLOR_BRIGHT_WHITE: &str = csi!("37;1m");

pub const BACKGROUND_COLOR_BLACK: &str = csi!("40m");
pub const BACKGROUND_COLOR_RED: &str = csi!("41m");
pub const BACKGROUND_COLOR_GREEN: &str = csi!("42m");
pub const BACKGROUND_COLOR_YELLOW: &str = csi!("43m");
pub const BACKGROUND_COLOR_BLUE: &str = csi!("44m");
pub const BACKGROUND_COLOR_MAGENTA: &str = csi!("45m");
pub const BACKGROUND_COLOR_CYAN: &str = csi!("46m");
pub const BACKGROUND_COLOR_WHITE: &str = csi!("47m");
pub const BACKGROUND_COLOR_BRIGHT_BLACK: &str = csi!("40;1m");
pub const BACKGROUND_COLOR_BRIGHT_RED: &str = csi!("41;1m");
pub const BACKGROUND_COLOR_BRIGHT_GREEN: &str = csi!("42;1m");
pub const BACKGROUND_COLOR_BRIGHT_YELLOW: &str = csi!("43;1m");
pub const BACKGROUND_COLOR_BRIGHT_BLUE: &str = csi!("44;1m");
pub const BACKGROUND_COLOR_BRIGHT_MAGENTA: &str = csi!("45;1m");
pub const BACKGROUND_COLOR_BRIGHT_CYAN: &str = csi!("46;1m");
pub const BACKGROUND_COLOR_BRIGHT_WHITE: &str = csi!("47;1m");

pub const COLOR_RESET: &str = csi!("0m");
