use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::category::Category;

pub const CONFIG_FILE_NAME: &str = ".pillarsrc.json";

/// Languages the game loads localization for.
pub const KNOWN_LANGUAGES: [&str; 7] = [
    "english",
    "spanish",
    "french",
    "german",
    "russian",
    "korean",
    "simp_chinese",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_pillars_dir")]
    pub pillars_dir: String,
    #[serde(default = "default_scripted_effects_file")]
    pub scripted_effects_file: String,
    #[serde(default = "default_effect_name")]
    pub effect_name: String,
    #[serde(default = "default_localization_dir")]
    pub localization_dir: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_pillars_dir() -> String {
    "common/culture/pillars".to_string()
}

fn default_scripted_effects_file() -> String {
    "common/scripted_effects/ccu_scripted_effects.txt".to_string()
}

fn default_effect_name() -> String {
    "ccu_initialize_culture".to_string()
}

fn default_localization_dir() -> String {
    "localization".to_string()
}

fn default_language() -> String {
    "english".to_string()
}

fn default_file_prefix() -> String {
    "ccu".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pillars_dir: default_pillars_dir(),
            scripted_effects_file: default_scripted_effects_file(),
            effect_name: default_effect_name(),
            localization_dir: default_localization_dir(),
            language: default_language(),
            file_prefix: default_file_prefix(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any pattern in `ignores` is invalid or `language`
    /// is not one the game knows.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if !KNOWN_LANGUAGES.contains(&self.language.as_str()) {
            anyhow::bail!(
                "Unknown language \"{}\" (expected one of: {})",
                self.language,
                KNOWN_LANGUAGES.join(", ")
            );
        }

        Ok(())
    }

    /// Compiled `ignores` patterns. Call after [`Config::validate`].
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }

    /// Localization file for `category`, relative to the mod directory.
    pub fn localization_file(&self, category: Category) -> PathBuf {
        Path::new(&self.localization_dir)
            .join(&self.language)
            .join(format!(
                "{}_{}_l_{}.yml",
                self.file_prefix,
                category.variable_name(),
                self.language
            ))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Finds the nearest `.pillarsrc.json` in `start_dir` or its ancestors.
///
/// The search ends at the first directory containing `.git`, so a config
/// outside the mod's repository is never picked up.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was loaded from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
