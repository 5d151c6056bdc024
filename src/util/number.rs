//! Number and boolean recognition for raw argument tokens.
//!
//! Integers are accepted in decimal (`1234`) or hexadecimal (`0x4d2`, or bare
//! hex digits where the caller asks for a hex base). Conversions are checked:
//! a token that does not fit into the target type is rejected rather than
//! silently truncated.

use std::collections::BTreeSet;

/// Returns `true` if `s` is non-empty and made only of hexadecimal digits.
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Returns `true` if `s` is `0x` / `0X` followed by at least one hex digit.
pub fn is_hex_with_prefix(s: &str) -> bool {
    strip_hex_prefix(s).map(is_hex).unwrap_or(false)
}

/// Returns `true` if `s` is non-empty and made only of decimal digits.
pub fn is_dec(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if `s` is a decimal number or a `0x`-prefixed hex number.
pub fn is_number(s: &str) -> bool {
    is_hex_with_prefix(s) || is_dec(s)
}

/// Parses a decimal or `0x`-prefixed hex number.
///
/// Returns `None` if `s` is not a number or does not fit into `u64`.
pub fn get_number(s: &str) -> Option<u64> {
    if is_hex_with_prefix(s) {
        return load_int(s, true);
    }
    if is_dec(s) {
        return load_int(s, false);
    }
    None
}

/// Parses `s` in the given base. In hex mode an optional `0x` prefix is skipped.
pub fn load_int(s: &str, hex: bool) -> Option<u64> {
    if hex {
        let digits = strip_hex_prefix(s).unwrap_or(s);
        if !is_hex(digits) {
            return None;
        }
        u64::from_str_radix(digits, 16).ok()
    } else {
        if !is_dec(s) {
            return None;
        }
        s.parse::<u64>().ok()
    }
}

/// Interprets a boolean token.
///
/// `true`, `on`, `yes` and `1` are true; `false`, `off`, `no` and `0` are
/// false (words are case-insensitive). Anything else is `None`.
pub fn load_boolean(s: &str) -> Option<bool> {
    const TRUE_WORDS: [&str; 3] = ["true", "on", "yes"];
    const FALSE_WORDS: [&str; 3] = ["false", "off", "no"];

    if TRUE_WORDS.iter().any(|w| s.eq_ignore_ascii_case(w)) {
        return Some(true);
    }
    if FALSE_WORDS.iter().any(|w| s.eq_ignore_ascii_case(w)) {
        return Some(false);
    }
    if !is_dec(s) {
        return None;
    }
    match load_int(s, false) {
        Some(0) => Some(false),
        Some(1) => Some(true),
        _ => None,
    }
}

/// Splits `s` on `delim`, trims each element and drops empty ones.
///
/// Elements are returned sorted and de-duplicated. An empty delimiter yields
/// the whole trimmed string as a single element.
pub fn strip_to_list(s: &str, delim: &str) -> BTreeSet<String> {
    if delim.is_empty() {
        return std::iter::once(trim(s))
            .filter(|e| !e.is_empty())
            .map(str::to_owned)
            .collect();
    }
    s.split(delim)
        .map(trim)
        .filter(|e| !e.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Trims ASCII whitespace (`\t \n \v \f \r` and space) from both ends.
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| matches!(c, '\t' | '\n' | '\x0b' | '\x0c' | '\r' | ' '))
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}
