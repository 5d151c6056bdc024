#![no_main]
use libfuzzer_sys::fuzz_target;

use paramkit::util::{has_keyword, is_string_similar, levenshtein_distance, Similarity};

fuzz_target!(|data: (String, String)| {
    let (a, b) = data;
    let d = levenshtein_distance(&a, &b);
    assert_eq!(d, levenshtein_distance(&b, &a));
    assert!(d <= a.chars().count().max(b.chars().count()));
    if has_keyword(&a, &b) == Similarity::Substr {
        assert_eq!(is_string_similar(&a, &b), Similarity::Substr);
    }
});
