//! Password generation.

use std::fmt;

use zeroize::Zeroizing;

use super::{GenerationRequest, charset};
use crate::rand::Rand;

/// A generated password. The buffer is wiped on drop and `Debug` never
/// prints the contents.
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters. The pool is ASCII, so this is also the byte length.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

/// Generate a single password for a request.
pub fn generate(request: &GenerationRequest) -> Password {
    let chars = charset::build(request);
    let length = request.clamped_length();
    log::debug!("generating {length} chars from a pool of {}", chars.len());
    from_charset(&chars, length)
}

/// Draw `length` independent, uniform samples from `chars`.
#[inline]
pub fn from_charset(chars: &[u8], length: usize) -> Password {
    let mut buf = Zeroizing::new(String::with_capacity(length));
    buf.extend((0..length).map(|_| Rand::pick(chars) as char));
    Password(buf)
}
