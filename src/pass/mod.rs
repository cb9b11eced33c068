//! Password generation and strength scoring.

pub mod charset;
mod generate;
mod request;
pub mod strength;

pub use generate::{Password, generate};
pub use request::{DEFAULT_LENGTH, GenerationRequest, MIN_LENGTH, Preset, parse_length};
pub use strength::{Strength, score};
