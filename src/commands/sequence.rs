//! Build and print a single sequence.

use std::fs;
use std::io::{self, Write};

use anyhow::Result;

use escapes::cli::Commands;
use escapes::config::OutputConfig;
use escapes::visible::escape_visible;
use escapes::{osc, sequences, table, EscapesError};

/// Build the sequence requested by `command`.
///
/// Only sequence-producing commands are handled here; `list` and
/// `completions` are dispatched before this is reached.
pub fn render(command: Commands) -> Result<String, EscapesError> {
    let seq = match command {
        Commands::Named { name } => table::lookup(&name)
            .ok_or(EscapesError::UnknownSequence { name })?
            .to_string(),
        Commands::CursorX { x } => sequences::cursor_pos_x(x),
        Commands::CursorY { y } => sequences::cursor_pos_y(y),
        Commands::CursorPos { x, y } => sequences::cursor_pos(x, y),
        Commands::CursorMove { dx, dy } => sequences::cursor_move(dx, dy),
        Commands::Scroll { n } => sequences::scroll(n),
        Commands::InsertChars { n } => sequences::text_insert_chars(n),
        Commands::DeleteChars { n } => sequences::text_delete_chars(n),
        Commands::EraseChars { n } => sequences::text_erase_chars(n),
        Commands::InsertLines { n } => sequences::text_insert_lines(n),
        Commands::DeleteLines { n } => sequences::text_delete_lines(n),
        Commands::Link { url, text } => osc::link(&url, &text),
        Commands::Image {
            file,
            height,
            width,
            no_preserve_aspect_ratio,
        } => {
            let img = fs::read(&file).map_err(|source| EscapesError::ReadImage {
                path: file.clone(),
                source,
            })?;
            tracing::debug!(path = %file.display(), bytes = img.len(), "read image");
            osc::image_width_height(&img, height, width, !no_preserve_aspect_ratio)
        }
        Commands::Cwd { dir } => {
            let dir = match dir {
                Some(dir) => dir,
                None => std::env::current_dir()
                    .map_err(EscapesError::CurrentDir)?
                    .display()
                    .to_string(),
            };
            osc::set_cwd(&dir)
        }
        Commands::List { .. } | Commands::Completions { .. } => String::new(),
    };
    Ok(seq)
}

/// Write `seq` to stdout as configured.
#[cfg(not(tarpaulin_include))]
pub fn emit(seq: &str, output: &OutputConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if output.escaped {
        stdout.write_all(escape_visible(seq).as_bytes())?;
    } else {
        stdout.write_all(seq.as_bytes())?;
    }
    if output.newline {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
