#[path = "util/number.rs"]
mod number;
