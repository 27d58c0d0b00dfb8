//! Integration tests for the escapes library and CLI.

mod cli_test;
mod parse_test;
