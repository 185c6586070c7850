//! Pipeline turning a mod's pillar files into generated game files.
//!
//! 1. **Collect**: list the pillar directory once, then extract and sort the
//!    keys of every category.
//! 2. **Emit**: write the scripted effect file holding all category chains,
//!    then one localization file per category.
//!
//! Every I/O failure aborts the run. Files written before the failure are
//! left in place.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    category::Category,
    config::Config,
    emit::{emit_effect_block, emit_localization, header::write_localization_header},
    scan::{KeySet, extract_keys_from, list_pillar_files, sort_keys},
};

/// Keys found for one category.
#[derive(Debug)]
pub struct PillarKeys {
    pub category: Category,
    /// Sorted, deduplicated keys.
    pub keys: Vec<String>,
    /// Occurrence count of every key.
    pub counts: KeySet,
}

/// Result of the collect phase.
#[derive(Debug)]
pub struct Collected {
    pub pillars: Vec<PillarKeys>,
    pub files_scanned: usize,
    pub files_skipped: Vec<PathBuf>,
}

/// Result of a full generation run.
#[derive(Debug)]
pub struct GenerateSummary {
    pub collected: Collected,
    /// Written files, relative to the mod directory.
    pub files_written: Vec<PathBuf>,
}

/// Extracts and sorts the keys of `categories` from the pillar directory of
/// `mod_dir`.
pub fn collect(
    mod_dir: &Path,
    config: &Config,
    categories: &[Category],
    verbose: bool,
) -> Result<Collected> {
    let pillars_dir = mod_dir.join(&config.pillars_dir);
    let listing = list_pillar_files(&pillars_dir, &config.ignore_patterns()?)?;

    if verbose {
        for path in &listing.skipped {
            eprintln!("{} {}", "Skipping".dimmed(), path.display());
        }
    }

    let mut pillars = Vec::with_capacity(categories.len());
    for &category in categories {
        if verbose {
            eprintln!("Reading {}...", category.plural());
        }
        let counts = extract_keys_from(&listing.files, category.variable_name())?;
        pillars.push(PillarKeys {
            category,
            keys: sort_keys(&counts),
            counts,
        });
    }

    Ok(Collected {
        pillars,
        files_scanned: listing.files.len(),
        files_skipped: listing.skipped,
    })
}

/// Runs the whole pipeline for `mod_dir`.
pub fn generate(mod_dir: &Path, config: &Config, verbose: bool) -> Result<GenerateSummary> {
    let collected = collect(mod_dir, config, &Category::ALL, verbose)?;
    let mut files_written = Vec::with_capacity(Category::ALL.len() + 1);

    if verbose {
        eprintln!("Creating scripted effect file...");
    }
    let effect_file = PathBuf::from(&config.scripted_effects_file);
    let chains: Vec<(Category, &[String])> = collected
        .pillars
        .iter()
        .map(|pillar| (pillar.category, pillar.keys.as_slice()))
        .collect();
    write_file(&mod_dir.join(&effect_file), |writer| {
        emit_effect_block(writer, &config.pillars_dir, &config.effect_name, &chains)
    })?;
    files_written.push(effect_file);

    if verbose {
        eprintln!("Creating localization files...");
    }
    for pillar in &collected.pillars {
        let loc_file = config.localization_file(pillar.category);
        write_file(&mod_dir.join(&loc_file), |writer| {
            write_localization_header(writer, &config.language)?;
            emit_localization(
                &pillar.keys,
                pillar.category.variable_name(),
                pillar.category.delimiter(),
                writer,
            )
        })?;
        files_written.push(loc_file);
    }

    Ok(GenerateSummary {
        collected,
        files_written,
    })
}

/// Creates `path`, fills it through `write`, and flushes it.
fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write(&mut writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
