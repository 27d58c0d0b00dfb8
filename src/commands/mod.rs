//! Subcommand handlers for the `escapes` binary.

pub mod completions;
pub mod list;
pub mod sequence;
