//! String comparison helpers used by filtered help.
//!
//! A help filter selects parameters whose name is *similar* to the filter:
//! either one contains the other, or they are a few edits apart, or they are
//! built from exactly the same set of characters (typical of swapped letters).

use std::collections::BTreeSet;

/// How a parameter name matched a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Similarity {
    None,
    /// One string contains the other (case-insensitive).
    Substr,
    /// Small Levenshtein distance.
    LevDist,
    /// Same set of characters.
    Hist,
}

impl Similarity {
    pub fn is_similar(self) -> bool {
        self != Similarity::None
    }
}

pub fn to_lowercase(s: &str) -> String {
    s.to_lowercase()
}

/// Compares two strings, optionally ignoring ASCII case.
pub fn strequals(a: &str, b: &str, ignore_case: bool) -> bool {
    if ignore_case {
        a.eq_ignore_ascii_case(b)
    } else {
        a == b
    }
}

/// Levenshtein edit distance between `a` and `b`, counted in chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single rolling row: prev[j] is the distance between a[..i] and b[..j].
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        cur[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            cur[j + 1] = (prev[j + 1] + 1).min(cur[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

fn char_set(s: &str) -> BTreeSet<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Returns `true` if both strings use exactly the same set of characters,
/// ignoring case and repetition.
pub fn has_similar_histogram(a: &str, b: &str) -> bool {
    char_set(a) == char_set(b)
}

/// Case-insensitive containment in either direction.
pub fn has_keyword(param: &str, filter: &str) -> Similarity {
    if param.is_empty() || filter.is_empty() {
        return Similarity::None;
    }
    let param = to_lowercase(param);
    let filter = to_lowercase(filter);
    if param.contains(&filter) || filter.contains(&param) {
        Similarity::Substr
    } else {
        Similarity::None
    }
}

/// Decides whether the parameter name `param` looks like `filter`.
pub fn is_string_similar(param: &str, filter: &str) -> Similarity {
    if param.is_empty() || filter.is_empty() {
        return Similarity::None;
    }
    if has_keyword(param, filter).is_similar() {
        return Similarity::Substr;
    }

    let param_len = param.chars().count();
    let filter_len = filter.chars().count();
    let dist = levenshtein_distance(filter, param);
    let close = (dist == 1 || dist <= param_len / 2) && dist < param_len && dist < filter_len;
    if close {
        return Similarity::LevDist;
    }

    if has_similar_histogram(filter, param) {
        return Similarity::Hist;
    }
    Similarity::None
}
