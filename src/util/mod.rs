//! Utility module: token classification and string similarity.
//!
//! - [`number`]  — decimal / hexadecimal recognition and conversion, booleans, list splitting
//! - [`strings`] — case folding, edit distance and the similarity tests used by filtered help

pub mod number;
pub mod strings;

// ── Re-exports at `util::` level ─────────────────────────────────────────────

pub use number::{
    get_number, is_dec, is_hex, is_hex_with_prefix, is_number, load_boolean, load_int,
    strip_to_list, trim,
};

pub use strings::{
    has_keyword, has_similar_histogram, is_string_similar, levenshtein_distance, strequals,
    to_lowercase, Similarity,
};
