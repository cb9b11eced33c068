//! Character pool building for password generation.

use super::GenerationRequest;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?/|";

/// Characters that are easy to misread for one another.
pub const AMBIGUOUS: &[u8] = b"O0l1I";

/// Build the character pool for a request.
///
/// Classes are appended in the order upper, lower, digits, symbols. The
/// result is never empty: with every class disabled the pool falls back
/// to ASCII letters and digits. Ambiguous exclusion applies to the
/// fallback as well.
pub fn build(request: &GenerationRequest) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(
        UPPERCASE.len() + LOWERCASE.len() + DIGITS.len() + SYMBOLS.len(),
    );

    if request.use_upper {
        chars.extend_from_slice(UPPERCASE);
    }
    if request.use_lower {
        chars.extend_from_slice(LOWERCASE);
    }
    if request.use_numbers {
        chars.extend_from_slice(DIGITS);
    }
    if request.use_symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    if chars.is_empty() {
        chars = fallback();
    }

    if request.avoid_ambiguous {
        chars.retain(|c| !AMBIGUOUS.contains(c));
    }

    chars
}

/// Letters of both cases plus digits.
pub fn fallback() -> Vec<u8> {
    [LOWERCASE, UPPERCASE, DIGITS].concat()
}
