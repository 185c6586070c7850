use std::io::{self, Write};

/// The game expects its text files to start with a UTF-8 byte order mark.
pub const BOM: &str = "\u{feff}";

/// Writes the preamble of the generated scripted effect file.
pub fn write_effect_header<W: Write>(writer: &mut W, source_dir: &str) -> io::Result<()> {
    write!(
        writer,
        "{BOM}# Generated by pillars from {source_dir}. Manual edits will be overwritten.\n\n"
    )
}

/// Writes the language line every localization file starts with.
pub fn write_localization_header<W: Write>(writer: &mut W, language: &str) -> io::Result<()> {
    writeln!(writer, "{BOM}l_{language}:")
}
