//! `escapes list` handler.

use anyhow::Result;

use escapes::table::{self, Category, NamedSequence};
use escapes::visible::escape_visible;

/// Print named sequences, one per line, or as a JSON array.
pub fn handle(category: Option<Category>, json: bool) -> Result<()> {
    let entries: Vec<&NamedSequence> = match category {
        Some(category) => table::by_category(category).collect(),
        None => table::NAMED_SEQUENCES.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in entries {
        println!(
            "{:<width$}  {:<10}  {}",
            entry.name,
            entry.category.name(),
            escape_visible(entry.value),
        );
    }
    Ok(())
}
