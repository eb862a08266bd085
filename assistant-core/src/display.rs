//! Formatting shared by report text and language-model prompts, so both show
//! the user the same numbers.

/// Shortest round-trip form, always with a fractional part: `18.0`, `3.2`, `-0.5`.
pub fn decimal(value: f64) -> String {
    format!("{value:?}")
}

/// One decimal, exact ties to even: `4.25` becomes `4.2`, `4.75` becomes `4.8`.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
