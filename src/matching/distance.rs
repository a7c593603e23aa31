//! Edit distance between a candidate title and the filename it came from.

use crate::config::DistanceMode;

/// Smallest Levenshtein distance between `needle` and any substring of
/// `haystack`.
///
/// The first row of the dynamic-programming table is all zeros so a match
/// may start anywhere in `haystack`, and the answer is the minimum of the
/// last row so it may end anywhere.
///
/// ```
/// use reelmatch::matching::distance::substring_distance;
///
/// assert_eq!(substring_distance("matrix", "the matrix 1999"), 0);
/// assert_eq!(substring_distance("matrx", "the matrix 1999"), 1);
/// ```
pub fn substring_distance(needle: &str, haystack: &str) -> usize {
    let needle: Vec<char> = needle.chars().collect();
    let haystack: Vec<char> = haystack.chars().collect();

    let mut prev = vec![0usize; haystack.len() + 1];
    let mut cur = vec![0usize; haystack.len() + 1];

    for (i, &n) in needle.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &h) in haystack.iter().enumerate() {
            let substitution = prev[j] + usize::from(n != h);
            cur[j + 1] = substitution.min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev.into_iter().min().unwrap_or(0)
}

/// Distance between a normalized title and a normalized filename under
/// `mode`.
pub fn distance(mode: DistanceMode, title: &str, filename: &str) -> usize {
    match mode {
        DistanceMode::Substring => substring_distance(title, filename),
        DistanceMode::Full => strsim::levenshtein(title, filename),
    }
}
