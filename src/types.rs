//! Plain data types shared with callers.

use serde::{Deserialize, Serialize};

/// Dimensions of a console in rows and columns.
///
/// Both fields are expected to be non-negative, but nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ConsoleDim {
    pub rows: i32,
    pub cols: i32,
}

impl ConsoleDim {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }
}
