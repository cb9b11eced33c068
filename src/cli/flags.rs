use std::path::PathBuf;

use crate::pass::Preset;

#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub save: bool,
    pub show_history: bool,
    pub no_history: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub avoid_ambiguous: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub preset: Option<Preset>,
    pub history: Option<PathBuf>,
}

impl CliFlags {
    /// True when any per-class switch narrows the preset.
    pub fn has_class_overrides(&self) -> bool {
        self.no_upper || self.no_lower || self.no_digits || self.no_symbols || self.avoid_ambiguous
    }
}
