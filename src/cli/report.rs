//! Report formatting and printing utilities.
//!
//! Separate from the pipeline so pillars can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, ListSummary};
use crate::generate::{Collected, GenerateSummary, PillarKeys};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Generate(summary) => {
            print_generate_to(summary, &mut io::stdout().lock());
            print_scan_warnings(&summary.collected, verbose);
        }
        CommandSummary::List(summary) => {
            print_list_to(summary, &mut io::stdout().lock());
            print_scan_warnings(&summary.collected, verbose);
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Print the outcome of a generate run to a custom writer.
pub fn print_generate_to<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} file(s) from {} pillar file(s)",
            summary.files_written.len(),
            summary.collected.files_scanned
        )
        .green()
    );

    for row in category_rows(&summary.collected.pillars) {
        let _ = writeln!(writer, "  {}", row);
    }

    let _ = writeln!(writer, "{}", "Wrote:".bold());
    for file in &summary.files_written {
        let _ = writeln!(writer, "  {}", file.display());
    }
}

/// Print the keys of every listed category to a custom writer.
pub fn print_list_to<W: Write>(summary: &ListSummary, writer: &mut W) {
    let collected = &summary.collected;

    for pillar in &collected.pillars {
        let _ = writeln!(
            writer,
            "{}: {} key(s)",
            pillar.category.to_string().bold(),
            pillar.keys.len()
        );

        let key_width = pillar
            .keys
            .iter()
            .map(|key| key.width())
            .max()
            .unwrap_or(0);
        for key in &pillar.keys {
            let count = pillar.counts.get(key).copied().unwrap_or(0);
            let padding = " ".repeat(key_width - key.width());
            let _ = writeln!(writer, "  {}{}  {}", key, padding, count.to_string().dimmed());
        }
    }

    let total: usize = collected.pillars.iter().map(|pillar| pillar.keys.len()).sum();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} key(s) in {} pillar file(s)",
            total, collected.files_scanned
        )
        .green()
    );
}

/// One aligned `name  count key(s)` row per category.
fn category_rows(pillars: &[PillarKeys]) -> Vec<String> {
    let name_width = pillars
        .iter()
        .map(|pillar| pillar.category.variable_name().width())
        .max()
        .unwrap_or(0);
    let count_width = pillars
        .iter()
        .map(|pillar| pillar.keys.len().to_string().len())
        .max()
        .unwrap_or(0);

    pillars
        .iter()
        .map(|pillar| {
            format!(
                "{:<name_width$}  {:>count_width$} key(s)",
                pillar.category.variable_name(),
                pillar.keys.len()
            )
        })
        .collect()
}

fn print_scan_warnings(collected: &Collected, verbose: bool) {
    print_scan_warnings_to(collected, verbose, &mut io::stderr().lock());
}

/// Print scan warnings to a custom writer.
pub fn print_scan_warnings_to<W: Write>(collected: &Collected, verbose: bool, writer: &mut W) {
    if collected.files_scanned == 0 {
        let _ = writeln!(
            writer,
            "{} no pillar files found, generated output will be empty",
            "warning:".bold().yellow()
        );
    }

    if !collected.files_skipped.is_empty() && !verbose {
        let _ = writeln!(
            writer,
            "{} {} pillar file(s) skipped by ignore patterns (use {} for details)",
            "warning:".bold().yellow(),
            collected.files_skipped.len(),
            "-v".cyan()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.config_path.display()).green()
        );
    } else {
        eprintln!("Error: {} already exists", summary.config_path.display());
    }
}
