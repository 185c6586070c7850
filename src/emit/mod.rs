//! Writers for the generated game files.
//!
//! Every writer targets a generic [`std::io::Write`] so output can be checked
//! in memory; callers own the files and attach path context to errors.

pub mod effect;
pub mod header;
pub mod localization;

pub use effect::{emit_effect, emit_effect_block};
pub use localization::{display_label, emit_localization};
