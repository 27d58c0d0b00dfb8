//! Escape sequence prefix tokens.
//!
//! Every named constant in [`crate::sequences`] is one of these prefixes
//! followed by a literal suffix. The [`csi!`] macro builds those constants
//! at compile time so the table below and the constants can never drift.

/// Escape character, start of every sequence.
pub const ESC: &str = "\x1b";

/// Control Sequence Introducer (`ESC [`).
pub const CSI: &str = "\x1b[";

/// Operating System Command (`ESC ]`).
pub const OSC: &str = "\x1b]";

/// Bell, used as the OSC terminator.
pub const BEL: &str = "\x07";

/// Expands to a `&'static str` of `CSI` followed by `$suffix`.
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1b[", $suffix)
    };
}

pub(crate) use csi;
