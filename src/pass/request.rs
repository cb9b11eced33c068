//! Generation requests and complexity presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 8;
pub const DEFAULT_LENGTH: usize = 12;

/// Which character classes to draw from, and how many characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub use_upper: bool,
    pub use_lower: bool,
    pub use_numbers: bool,
    pub use_symbols: bool,
    pub avoid_ambiguous: bool,
}

impl GenerationRequest {
    /// Requested length raised to `MIN_LENGTH`; larger requests are kept.
    pub fn clamped_length(&self) -> usize {
        self.length.max(MIN_LENGTH)
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            use_upper: true,
            use_lower: true,
            use_numbers: true,
            use_symbols: true,
            avoid_ambiguous: true,
        }
    }
}

/// Complexity levels offered by the menu and `--preset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Letters and digits.
    Basic,
    /// Letters, digits and symbols.
    #[default]
    Strong,
    /// Strong, minus look-alike characters.
    Max,
}

impl Preset {
    pub fn request(self, length: usize) -> GenerationRequest {
        GenerationRequest {
            length,
            use_upper: true,
            use_lower: true,
            use_numbers: true,
            use_symbols: !matches!(self, Preset::Basic),
            avoid_ambiguous: matches!(self, Preset::Max),
        }
    }

    /// Lenient menu lookup. Anything unrecognised, including an empty
    /// answer, means `Strong`.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Preset::Basic,
            "3" => Preset::Max,
            other => other.parse().unwrap_or_default(),
        }
    }

    /// Key that selects this preset in the complexity menu.
    pub fn menu_key(self) -> &'static str {
        match self {
            Preset::Basic => "1",
            Preset::Strong => "2",
            Preset::Max => "3",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Preset::Basic => "letters + numbers",
            Preset::Strong => "letters + numbers + symbols",
            Preset::Max => "strong + avoid ambiguous",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Basic => write!(f, "basic"),
            Preset::Strong => write!(f, "strong"),
            Preset::Max => write!(f, "max"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreset(pub String);

impl fmt::Display for UnknownPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown preset: {} (expected basic, strong or max)", self.0)
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Preset::Basic),
            "strong" => Ok(Preset::Strong),
            "max" => Ok(Preset::Max),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

/// Parse a typed length. Blank or non-numeric input yields `default`;
/// negative numbers become 0 and are clamped by the generator.
pub fn parse_length(input: &str, default: usize) -> usize {
    match input.trim().parse::<i64>() {
        Ok(n) => usize::try_from(n.max(0)).unwrap_or(usize::MAX),
        Err(_) => default,
    }
}
