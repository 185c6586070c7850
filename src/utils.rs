//! Common utility functions shared across the codebase.

/// Uppercases the first letter of every word in `text`.
///
/// A word starts after a separator: whitespace or ASCII punctuation other
/// than `_`. Letters, digits and `_` continue a word. Letters that are not
/// at a word start are left as they are.
///
/// Each character maps to exactly one character: digraphs take their
/// titlecase form (`ǆ` becomes `ǅ`), and a letter whose uppercase form is
/// longer than one character (`ß`) is kept as is.
///
/// # Examples
///
/// ```
/// use pillars::utils::title_case;
///
/// assert_eq!(title_case("north-sea"), "North-Sea");
/// assert_eq!(title_case("west african"), "West African");
/// assert_eq!(title_case("o'brien"), "O'Brien");
/// assert_eq!(title_case("1st_wave"), "1st_wave");
/// assert_eq!(title_case("ǆungla"), "ǅungla");
/// ```
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start {
            result.push(to_title(c));
        } else {
            result.push(c);
        }
        at_word_start = is_separator(c);
    }

    result
}

fn to_title(c: char) -> char {
    match c {
        // DŽ, LJ, NJ and DZ digraphs: uppercase, titlecase, lowercase.
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        // Greek letters with ypogegrammeni title to the prosgegrammeni form.
        '\u{1F80}'..='\u{1FAF}' => char::from_u32(c as u32 | 0x08).unwrap_or(c),
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',
        _ => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        }
    }
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}
