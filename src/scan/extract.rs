use std::{
    borrow::Cow,
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

use super::comment::strip;

/// Keys found for one search term, with the number of times each occurred.
pub type KeySet = HashMap<String, usize>;

/// Entries of a pillar directory, split by the configured ignore patterns.
#[derive(Debug, Default)]
pub struct PillarFiles {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Lists the direct entries of `dir` in file name order.
///
/// Entries are not filtered by type: a sub-directory is listed like a file
/// and fails later when it is read. Entries whose file name matches one of
/// `ignores` go to `skipped`.
pub fn list_pillar_files(dir: &Path, ignores: &[Pattern]) -> Result<PillarFiles> {
    let mut result = PillarFiles::default();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy();

        if ignores.iter().any(|pattern| pattern.matches(&name)) {
            result.skipped.push(entry.into_path());
        } else {
            result.files.push(entry.into_path());
        }
    }

    Ok(result)
}

/// Collects every whitespace-delimited token containing `needle` from the
/// files of `dir`.
pub fn extract_keys(dir: &Path, needle: &str) -> Result<KeySet> {
    let listing = list_pillar_files(dir, &[])?;
    extract_keys_from(&listing.files, needle)
}

/// Collects every whitespace-delimited token containing `needle` from `files`.
///
/// Comments are stripped line by line before tokenizing. The first file that
/// cannot be read, or that holds a matching key which is not valid UTF-8,
/// aborts the scan.
pub fn extract_keys_from(files: &[PathBuf], needle: &str) -> Result<KeySet> {
    let mut keys = KeySet::new();

    for path in files {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

        collect_tokens(content, needle, &mut keys)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
    }

    Ok(keys)
}

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Lines that are not valid UTF-8 are decoded lossily. Replacement characters
/// are tolerated outside matching tokens, but a key carrying one would no
/// longer name the parameter it was read from.
fn collect_tokens(content: &[u8], needle: &str, keys: &mut KeySet) -> Result<()> {
    for (line_idx, line) in content.split(|&b| b == b'\n').enumerate() {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let decoded = String::from_utf8_lossy(line);
        let is_lossy = matches!(decoded, Cow::Owned(_));

        for token in strip(&decoded).split_whitespace() {
            if !token.contains(needle) {
                continue;
            }
            if is_lossy && token.contains(char::REPLACEMENT_CHARACTER) {
                anyhow::bail!(
                    "line {}: key `{}` is not valid UTF-8",
                    line_idx + 1,
                    token
                );
            }
            *keys.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    Ok(())
}
