use std::io::{self, Write};

use colored::Colorize;
use log::debug;

/// Prints what a cleanup run did to the output directory. `removed` holds
/// the deleted file names with their emitted sizes in bytes.
pub fn print_summary<W: Write>(
    writer: &mut W,
    entries: &[String],
    removed: &[(String, u64)],
    dry_run: bool,
) -> io::Result<()> {
    debug!("Printing summary for {} entries, {} removed files", entries.len(), removed.len());

    if dry_run {
        writeln!(
            writer,
            "{} Dry run: {} entries checked, nothing was removed",
            "⚠".yellow().bold(),
            entries.len().to_string().yellow()
        )?;
    } else if removed.is_empty() {
        writeln!(
            writer,
            "{} Nothing to clean for {} entries",
            "✓".green().bold(),
            entries.len().to_string().cyan()
        )?;
    } else {
        let total: u64 = removed.iter().map(|(_, size)| size).sum();
        writeln!(
            writer,
            "{} Cleaned {} entries ({} files removed, {} bytes freed)",
            "✓".green().bold(),
            entries.len().to_string().cyan(),
            removed.len().to_string().cyan(),
            total.to_string().cyan()
        )?;
        for (idx, (file, size)) in removed.iter().enumerate() {
            let prefix = if idx == removed.len() - 1 { "└──" } else { "├──" };
            writeln!(writer, "{}  {} ({} bytes)", prefix.dimmed(), file.blue(), size)?;
        }
    }

    writer.flush()
}
