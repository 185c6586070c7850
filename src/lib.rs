//! Pillars - culture pillar code generator for Crusader Kings III mods
//!
//! Pillars scans a mod's `common/culture/pillars` directory for heritage and
//! language pillar parameters, then generates a scripted effect that assigns
//! each parameter an ordinal variable value, plus one localization file per
//! pillar category.
//!
//! ## Module Structure
//!
//! - `category`: The four pillar categories and their formatting rules
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `emit`: Scripted effect and localization writers
//! - `generate`: Pipeline driving extraction, sorting and emission
//! - `scan`: Pillar file scanning (comment stripping, key extraction, sorting)
//! - `utils`: Shared utility functions

pub mod category;
pub mod cli;
pub mod config;
pub mod emit;
pub mod generate;
pub mod scan;
pub mod utils;
