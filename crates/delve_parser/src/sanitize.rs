//! Input sanitizing.
//!
//! Every raw line goes through [`sanitize`] before it is matched against
//! anything, both at top level and when it answers a pending prompt:
//!
//! 1. trim surrounding whitespace
//! 2. lowercase
//! 3. delete every character that is neither a word character
//!    (`A-Z`, `a-z`, `0-9`, `_`) nor whitespace
//! 4. trim whitespace that step 3 exposed at either end
//!
//! Word characters are ASCII only, so accented letters and symbols are
//! dropped. Whitespace is the ECMAScript `\s` set, which differs from
//! [`char::is_whitespace`] in two code points.

/// Returns true for characters in the ECMAScript `\s` class.
///
/// That is Unicode `White_Space` minus U+0085 NEXT LINE, plus U+FEFF.
#[must_use]
pub fn is_space(ch: char) -> bool {
    match ch {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => ch.is_whitespace(),
    }
}

/// Returns true for ASCII word characters.
#[must_use]
pub const fn is_word(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Normalizes one line of player input.
#[must_use]
pub fn sanitize(input: &str) -> String {
    let stripped: String = input
        .trim_matches(is_space)
        .to_lowercase()
        .chars()
        .filter(|&ch| is_word(ch) || is_space(ch))
        .collect();

    match stripped.trim_matches(is_space) {
        trimmed if trimmed.len() == stripped.len() => stripped,
        trimmed => trimmed.to_string(),
    }
}
