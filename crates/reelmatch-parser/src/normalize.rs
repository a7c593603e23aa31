//! Comparable form of titles, filenames, and search terms.

use crate::term::SEPARATOR;

/// Lowercase `input`, turn the separator and every non-word character into a
/// space, collapse whitespace runs, and trim.
///
/// Word characters are letters, digits, and `_`.
///
/// # Examples
///
/// ```
/// use reelmatch_parser::normalize;
///
/// assert_eq!(normalize("Game+of+Thrones"), "game of thrones");
/// assert_eq!(normalize("  Marvel's   Agents of S.H.I.E.L.D. "), "marvel s agents of s h i e l d");
/// ```
pub fn normalize(input: &str) -> String {
    let spaced: String = input
        .chars()
        .map(|c| {
            if c != SEPARATOR && (c.is_alphanumeric() || c == '_') {
                c
            } else {
                ' '
            }
        })
        .collect();

    spaced
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
