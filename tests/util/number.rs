// Integration tests for util/number.rs — token classification and conversion.
//
// Exercises the flat `util::` re-exports the way parameter parsing uses them:
// base detection first, then a checked conversion.

use paramkit::util;

// ─────────────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn hex_requires_digits() {
    assert!(util::is_hex("deadBEEF"));
    assert!(!util::is_hex(""));
    assert!(!util::is_hex("0xff"));
    assert!(util::is_hex_with_prefix("0xff"));
    assert!(util::is_hex_with_prefix("0XFF"));
    assert!(!util::is_hex_with_prefix("0x"));
}

#[test]
fn decimal_rejects_signs_and_spaces() {
    assert!(util::is_dec("0012"));
    assert!(!util::is_dec("-1"));
    assert!(!util::is_dec(" 1"));
    assert!(!util::is_dec(""));
}

#[test]
fn number_is_dec_or_prefixed_hex() {
    assert!(util::is_number("42"));
    assert!(util::is_number("0x2a"));
    assert!(!util::is_number("2a"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_number_picks_the_base_from_the_prefix() {
    assert_eq!(util::get_number("42"), Some(42));
    assert_eq!(util::get_number("0x2a"), Some(42));
    assert_eq!(util::get_number("2a"), None);
}

#[test]
fn load_int_is_checked() {
    assert_eq!(util::load_int("18446744073709551615", false), Some(u64::MAX));
    assert_eq!(util::load_int("18446744073709551616", false), None);
    assert_eq!(util::load_int("ffffffffffffffff", true), Some(u64::MAX));
    assert_eq!(util::load_int("1ffffffffffffffff", true), None);
}

#[test]
fn load_int_hex_mode_accepts_optional_prefix() {
    assert_eq!(util::load_int("1f", true), Some(31));
    assert_eq!(util::load_int("0x1f", true), Some(31));
    assert_eq!(util::load_int("0x1f", false), None);
}

#[test]
fn booleans() {
    for word in ["true", "ON", "Yes", "1"] {
        assert_eq!(util::load_boolean(word), Some(true), "{word}");
    }
    for word in ["false", "Off", "NO", "0"] {
        assert_eq!(util::load_boolean(word), Some(false), "{word}");
    }
    for word in ["2", "maybe", "", "01x"] {
        assert_eq!(util::load_boolean(word), None, "{word}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lists
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn strip_to_list_trims_and_sorts() {
    let list: Vec<String> = util::strip_to_list(" c , a,, b ,a", ",").into_iter().collect();
    assert_eq!(list, ["a", "b", "c"]);
}

#[test]
fn strip_to_list_with_multichar_delimiter() {
    let list: Vec<String> = util::strip_to_list("x::y", "::").into_iter().collect();
    assert_eq!(list, ["x", "y"]);
}

#[test]
fn trim_strips_ascii_whitespace() {
    assert_eq!(util::trim("\t value \r\n"), "value");
    assert_eq!(util::trim("   "), "");
}
