use std::io::{self, Write};

use crate::utils::title_case;

/// Number of leading `_`-separated segments that form a key's namespace.
const NAMESPACE_SEGMENTS: usize = 2;

/// Builds the display label for `key`: the segments after the namespace,
/// joined with `delimiter` and title-cased.
///
/// Returns `None` when the key has no segments past the namespace.
///
/// # Examples
///
/// ```
/// use pillars::emit::display_label;
///
/// assert_eq!(display_label("culture_pillar_north_sea", "-").as_deref(), Some("North-Sea"));
/// assert_eq!(display_label("heritage_family_west_african", " ").as_deref(), Some("West African"));
/// assert_eq!(display_label("heritage_group", "-"), None);
/// ```
pub fn display_label(key: &str, delimiter: &str) -> Option<String> {
    let segments: Vec<&str> = key.split('_').skip(NAMESPACE_SEGMENTS).collect();
    if segments.is_empty() {
        return None;
    }
    Some(title_case(&segments.join(delimiter)))
}

/// Writes one localization entry per key, describing the acceptance bonus
/// granted by sharing the pillar named by the key.
///
/// Fails with [`io::ErrorKind::InvalidData`] for a key that has no label.
pub fn emit_localization<W: Write>(
    keys: &[String],
    variable_name: &str,
    delimiter: &str,
    writer: &mut W,
) -> io::Result<()> {
    for key in keys {
        let label = display_label(key, delimiter).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("key `{key}` has no name segments to build a label from"),
            )
        })?;
        writeln!(
            writer,
            "culture_parameter_{key}:0 \"#P +[EmptyScope.ScriptValue('same_{variable_name}_cultural_acceptance')|0]#! [cultural_acceptance_baseline|E] with Cultures sharing the {label} [{variable_name}|E]\""
        )?;
    }
    Ok(())
}
