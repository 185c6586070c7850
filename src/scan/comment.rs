/// Returns the part of `line` before its first `#`.
///
/// A `#` at byte index 0 or 1 discards the whole line, so a single leading
/// character before the marker is dropped along with the comment. Generated
/// files depend on this exact boundary.
///
/// # Examples
///
/// ```
/// use pillars::scan::strip;
///
/// assert_eq!(strip("abc#def"), "abc");
/// assert_eq!(strip("a#b"), "");
/// assert_eq!(strip("no comment"), "no comment");
/// ```
pub fn strip(line: &str) -> &str {
    match line.find('#') {
        Some(index) if index > 1 => &line[..index],
        Some(_) => "",
        None => line,
    }
}
