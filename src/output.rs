//! Colored console output for the generator.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! yellow warnings, dimmed secondary text.

use alloy_primitives::Address;
use colored::Colorize;
use std::path::Path;

use crate::generate::{FileReport, FileStatus, GenerateReport};

/// Short label for a file status.
pub fn status_label(status: FileStatus) -> &'static str {
    match status {
        FileStatus::Written => "written",
        FileStatus::Unchanged => "up to date",
        FileStatus::Stale => "stale",
        FileStatus::Missing => "missing",
    }
}

/// Print the startup banner.
pub fn print_banner(out_dir: &Path, check: bool) {
    println!();
    println!("{}", "=== console-gen ===".blue().bold());
    println!("  Output dir:   {}", out_dir.display().to_string().cyan());
    println!("  Mode:         {}", (if check { "check" } else { "write" }).cyan());
}

/// Print the model summary.
pub fn print_model(address: &Address, report: &GenerateReport) {
    println!("  Address:      {}", format!("{address}").cyan());
    println!(
        "  Signatures:   {} ({} generic, {} typed)",
        report.entries.to_string().cyan(),
        report.generic.to_string().dimmed(),
        report.typed.to_string().dimmed()
    );
}

/// Print one line per output file.
pub fn print_files(files: &[FileReport]) {
    for file in files {
        let label = status_label(file.status);
        let marker = match file.status {
            FileStatus::Written => "OK".green().bold(),
            FileStatus::Unchanged => "OK".green(),
            FileStatus::Stale | FileStatus::Missing => "STALE".yellow().bold(),
        };
        println!("  {} {} {}", marker, file.path.display().to_string().cyan(), label.dimmed());
    }
}

/// Print the hint shown when check mode fails.
pub fn print_stale_hint(paths: &[std::path::PathBuf]) {
    println!(
        "  {} {} generated file(s) out of date",
        "WARNING:".yellow().bold(),
        paths.len().to_string().cyan()
    );
    for path in paths {
        println!("    {}", path.display().to_string().dimmed());
    }
    println!("  {}", "Re-run console-gen without --check and commit the result.".dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(FileStatus::Written), "written");
        assert_eq!(status_label(FileStatus::Unchanged), "up to date");
        assert_eq!(status_label(FileStatus::Stale), "stale");
        assert_eq!(status_label(FileStatus::Missing), "missing");
    }
}
