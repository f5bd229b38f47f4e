//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use fragments_core::FragmentMetadata;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a hint on stderr.
pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print fragment metadata as labeled fields.
pub fn metadata(fragment: &FragmentMetadata) {
    field("ID", fragment.id.as_str());
    field("Type", &fragment.media_type);
    field("Size", &fragment.size.to_string());
    field("Created", &fragment.created.to_rfc3339());
    field("Updated", &fragment.updated.to_rfc3339());
}
