//! Line and screen erasure.

use crate::prefix::csi;

/// Erase from the cursor to the end of the line.
pub const ERASE_RIGHT: &str = csi!("K");
/// Erase from the start of the line to the cursor.
pub const ERASE_LEFT: &str = csi!("1K");
pub const ERASE_LINE: &str = csi!("2K");
/// Erase from the cursor to the end of the screen.
pub const ERASE_DOWN: &str = csi!("J");
/// Erase from the start of the screen to the cursor.
pub const ERASE_UP: &str = csi!("1J");
pub const ERASE_SCREEN: &str = csi!("2J");

/// Full terminal reset (RIS). This is `ESC c`, not a CSI sequence.
pub const CLEAR_SCREEN: &str = "\x1bc";
