//! Heuristic password strength scoring.

use std::fmt;

use super::GenerationRequest;
use super::charset::{self, SYMBOLS};

/// Length at which the length bonus kicks in.
const LONG_ENOUGH: usize = 12;

// Points out of 100. They sum to exactly 100, so a full score needs both
// length and all four classes.
const LENGTH_POINTS: u32 = 25;
const LOWER_POINTS: u32 = 20;
const UPPER_POINTS: u32 = 20;
const DIGIT_POINTS: u32 = 20;
const SYMBOL_POINTS: u32 = 15;

/// Score in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Strength(f64);

impl Strength {
    pub fn new(value: f64) -> Self {
        Strength(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Score as a percentage rounded to one decimal place.
    pub fn percent(self) -> f64 {
        (self.0 * 1000.0).round() / 10.0
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percent())
    }
}

/// Score a password. Each signal is independent and order does not matter.
pub fn score(password: &str) -> Strength {
    let mut points = 0;

    if password.chars().count() >= LONG_ENOUGH {
        points += LENGTH_POINTS;
    }
    if password.chars().any(char::is_lowercase) {
        points += LOWER_POINTS;
    }
    if password.chars().any(char::is_uppercase) {
        points += UPPER_POINTS;
    }
    if password.chars().any(is_digit) {
        points += DIGIT_POINTS;
    }
    if password.bytes().any(|c| SYMBOLS.contains(&c)) {
        points += SYMBOL_POINTS;
    }

    Strength::new(f64::from(points.min(100)) / 100.0)
}

/// Unicode digit: decimal digits in any script plus digit forms such as
/// superscripts and circled digits. Letter numerals (`Ⅻ`) and vulgar
/// fractions (`½`) are numeric but not digits.
fn is_digit(c: char) -> bool {
    c.is_numeric() && !c.is_alphabetic() && !is_fraction(c)
}

fn is_fraction(c: char) -> bool {
    matches!(
        c,
        '\u{00BC}'..='\u{00BE}' | '\u{2150}'..='\u{215F}' | '\u{2189}' | '\u{0F2A}'..='\u{0F33}'
    )
}

/// Password entropy in bits for a uniform draw from a pool.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

pub fn entropy_label(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

/// `"71.4 bits (Strong) • Source: ..."` for a request's pool and length.
pub fn entropy_summary(request: &GenerationRequest) -> String {
    let bits = entropy_bits(request.clamped_length(), charset::build(request).len());
    format!(
        "{:.1} bits ({}) • Source: {}",
        bits,
        entropy_label(bits),
        crate::rand::entropy_source()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_scores() {
        assert_eq!(score("").value(), 0.0);
        assert_eq!(score("aaaaaaaaaaaa").value(), 0.45);
        assert_eq!(score("Aa1!Aa1!Aa1!").value(), 1.0);
    }

    #[test]
    fn each_signal_is_independent() {
        assert_eq!(score("a").value(), 0.20);
        assert_eq!(score("A").value(), 0.20);
        assert_eq!(score("7").value(), 0.20);
        assert_eq!(score("!").value(), 0.15);
        assert_eq!(score("~~~~~~~~~~~~").value(), 0.25);
        assert_eq!(score("aA1!").value(), 0.75);
    }

    #[test]
    fn short_password_cannot_be_perfect() {
        assert_eq!(score("aA1!aA1!aA1").value(), 0.75);
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(score("!1Aa!1Aa!1Aa"), score("Aa1!Aa1!Aa1!"));
    }

    #[test]
    fn symbols_outside_the_set_do_not_count() {
        assert_eq!(score("~`'\"\\ ").value(), 0.0);
    }

    #[test]
    fn digits_in_other_scripts_count() {
        assert_eq!(score("\u{0663}").value(), 0.20);
        assert_eq!(score("²").value(), 0.20);
        assert_eq!(score("①").value(), 0.20);
        assert_eq!(score("٣٣٣٣٣٣٣٣٣٣٣٣").value(), 0.45);
    }

    #[test]
    fn numerals_that_are_not_digits_do_not_count() {
        assert_eq!(score("½").value(), 0.0);
        assert_eq!(score("\u{2155}").value(), 0.0);
        // Roman numeral twelve is an uppercase letter numeral
        assert!(!is_digit('Ⅻ'));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Six two-byte characters: twelve bytes, six chars.
        assert_eq!(score("éééééé").value(), 0.20);
    }

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_eq!(score("aaaaaaaaaaaa").percent(), 45.0);
        assert_eq!(score("Aa1!Aa1!Aa1!").percent(), 100.0);
        assert_eq!(Strength::new(0.12345).percent(), 12.3);
        assert_eq!(Strength::new(0.6).to_string(), "60.0%");
    }

    #[test]
    fn strength_is_clamped() {
        assert_eq!(Strength::new(1.7).value(), 1.0);
        assert_eq!(Strength::new(-0.2).value(), 0.0);
    }

    #[test]
    fn entropy_estimate() {
        assert_eq!(entropy_bits(10, 0), 0.0);
        assert_eq!(entropy_bits(8, 2), 8.0);
        assert_eq!(entropy_label(20.0), "Weak");
        assert_eq!(entropy_label(40.0), "Fair");
        assert_eq!(entropy_label(80.0), "Strong");
        assert_eq!(entropy_label(200.0), "Very Strong");
    }

    #[test]
    fn summary_uses_clamped_length() {
        let req = GenerationRequest {
            length: 2,
            use_upper: false,
            use_lower: false,
            use_numbers: true,
            use_symbols: false,
            avoid_ambiguous: false,
        };
        // 8 digits: 8 * log2(10)
        assert!(entropy_summary(&req).starts_with("26.6 bits (Weak)"));
    }
}
