//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::table::Category;

/// Print ANSI/VT100 escape sequences.
#[derive(Debug, Parser)]
#[command(name = "escapes", version, about, long_about = None)]
pub struct Cli {
    /// Print the sequence with control bytes escaped (e.g. \x1b[A)
    #[arg(short, long, global = true)]
    pub escaped: bool,

    /// Append a newline after the sequence
    #[arg(short, long, global = true)]
    pub newline: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a named sequence, e.g. `cursor-hide` or `text-color-red`
    Named {
        /// Sequence name (see `escapes list`)
        name: String,
    },

    /// List named sequences
    List {
        /// Only list sequences in this category
        #[arg(short, long, value_enum)]
        category: Option<Category>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move the cursor to a column (0 is leftmost)
    CursorX {
        #[arg(allow_negative_numbers = true)]
        x: i32,
    },

    /// Move the cursor to a row (0 is topmost)
    CursorY {
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },

    /// Move the cursor to a column and row, (0, 0) is the top-left corner
    CursorPos {
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },

    /// Move the cursor relative to its current position
    CursorMove {
        #[arg(allow_negative_numbers = true)]
        dx: i32,
        #[arg(allow_negative_numbers = true)]
        dy: i32,
    },

    /// Scroll the window (positive is up, negative is down)
    Scroll {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },

    /// Insert blank characters at the cursor
    InsertChars {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },

    /// Delete characters at the cursor
    DeleteChars {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },

    /// Overwrite characters at the cursor with blanks
    EraseChars {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },

    /// Insert blank lines at the cursor row
    InsertLines {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },

    /// Delete lines at the cursor row
    DeleteLines {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },

    /// Print a hyperlink
    Link {
        url: String,
        text: String,
    },

    /// Display an image inline
    Image {
        /// Image file to embed
        file: PathBuf,

        /// Emitted as the `width=` field
        #[arg(long, default_value_t = 0)]
        height: i32,

        /// Emitted as the `height=` field
        #[arg(long, default_value_t = 0)]
        width: i32,

        /// Allow the terminal to stretch the image
        #[arg(long)]
        no_preserve_aspect_ratio: bool,
    },

    /// Report the working directory to the terminal
    Cwd {
        /// Directory to report (defaults to the current directory)
        dir: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
