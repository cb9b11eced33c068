//! Random number generation backed by the operating system CSPRNG.
//!
//! Every draw goes straight to `getrandom` through `OsRng`. There is no
//! userspace state to seed or zeroize.

use ::rand::Rng;
use ::rand::rngs::OsRng;

pub struct Rand;

impl Rand {
    /// Uniform index in `0..len`. `gen_range` rejection-samples, so small
    /// pools carry no modulo bias.
    ///
    /// Panics if `len` is zero.
    #[inline]
    pub fn index(len: usize) -> usize {
        OsRng.gen_range(0..len)
    }

    /// Uniformly pick one element of a non-empty slice.
    #[inline]
    pub fn pick<T: Copy>(items: &[T]) -> T {
        items[Self::index(items.len())]
    }
}

pub fn entropy_source() -> &'static str {
    "OS CSPRNG (getrandom)"
}
