use std::io::{self, Write};

use super::header::write_effect_header;
use crate::category::Category;

/// Writes one `if`/`else_if` branch per key, setting `variable_name` to the
/// key's position in `keys`.
///
/// No `else` branch is written: a culture without any of the parameters keeps
/// the variable unset.
pub fn emit_effect<W: Write>(
    keys: &[String],
    variable_name: &str,
    writer: &mut W,
) -> io::Result<()> {
    for (index, key) in keys.iter().enumerate() {
        let branch = if index == 0 { "if" } else { "else_if" };
        writeln!(
            writer,
            "\t{branch} = {{ limit = {{ has_cultural_parameter = {key} }} set_variable = {{ name = {variable_name} value = {index} }} }}"
        )?;
    }
    Ok(())
}

/// Writes a complete scripted effect file: header, the `effect_name` block
/// and one branch chain per category in the given order.
pub fn emit_effect_block<W: Write>(
    writer: &mut W,
    source_dir: &str,
    effect_name: &str,
    chains: &[(Category, &[String])],
) -> io::Result<()> {
    write_effect_header(writer, source_dir)?;
    write!(writer, "{effect_name} = {{\n\n")?;

    for (position, (category, keys)) in chains.iter().enumerate() {
        if position > 0 {
            writer.write_all(b"\n\n")?;
        }
        emit_effect(keys, category.variable_name(), writer)?;
    }

    writer.write_all(b"}")
}
