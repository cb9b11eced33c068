//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::{Zeroize, Zeroizing};

use super::{CliFlags, prompts, quiet};
use crate::history::HistoryStore;
use crate::pass::{self, GenerationRequest};
use crate::settings::Settings;
use crate::tui::{format_entry, print_help};

/// Exit status when history could not be read or written.
pub const EXIT_HISTORY: u8 = 2;

/// Early exit from `Context::run`.
#[derive(Debug, PartialEq, Eq)]
pub enum Done {
    /// Nothing left to do (help, version, history listing).
    Finished,
    /// Stop with this exit status.
    Failed(u8),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        quiet::set(flags.quiet);

        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        Ok(Self {
            settings,
            flags,
            clipboard: None,
        })
    }

    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.apply_flags();
        self.handle_save();
        self.handle_show_history()?;
        self.handle_clipboard()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done::Finished);
        }
        if self.flags.version {
            println!("randpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done::Finished);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(preset) = self.flags.preset {
            self.settings.preset = preset;
        }
    }

    fn history_store(&self) -> HistoryStore {
        self.settings.history_store_with(self.flags.history.clone())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        let mut saved = self.settings.clone();
        if let Some(ref path) = self.flags.history {
            saved.history_path = Some(path.clone());
        }
        match saved.save_to_file() {
            Ok(path) => prompts::settings_saved(&path),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn handle_show_history(&self) -> Result<(), Done> {
        if !self.flags.show_history {
            return Ok(());
        }

        let store = self.history_store();
        match store.load_all() {
            Ok(entries) if entries.is_empty() => println!("No password history found."),
            Ok(entries) => {
                for entry in &entries {
                    println!("{}", format_entry(entry));
                }
            }
            Err(e) => {
                prompts::error(&e.to_string());
                return Err(Done::Failed(EXIT_HISTORY));
            }
        }
        Err(Done::Finished)
    }

    fn handle_clipboard(&mut self) -> Result<(), Done> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => self.clipboard = Some(c),
            Err(e) => {
                log::warn!("clipboard unavailable: {e}");
                if !prompts::clipboard_fallback_prompt() {
                    return Err(Done::Finished);
                }
            }
        }
        Ok(())
    }

    /// The request described by the settings, narrowed by per-class flags.
    pub fn request(&self) -> GenerationRequest {
        let mut request = self.settings.preset.request(self.settings.pass_length);
        if self.flags.no_upper {
            request.use_upper = false;
        }
        if self.flags.no_lower {
            request.use_lower = false;
        }
        if self.flags.no_digits {
            request.use_numbers = false;
        }
        if self.flags.no_symbols {
            request.use_symbols = false;
        }
        if self.flags.avoid_ambiguous {
            request.avoid_ambiguous = true;
        }
        if self.flags.has_class_overrides() {
            log::debug!("preset {} narrowed by class flags: {request:?}", self.settings.preset);
        }
        request
    }

    /// Generate passwords, print or copy them, and record history.
    pub fn generate_output(&mut self) -> Result<(), Done> {
        let request = self.request();
        let count = self.flags.number.unwrap_or(1).max(1);
        let mut store = (self.settings.record_history && !self.flags.no_history)
            .then(|| self.history_store());
        let mut status = Ok(());

        let mut board = Zeroizing::new(String::new());

        for _ in 0..count {
            let password = pass::generate(&request);
            let strength = pass::score(password.as_str());

            if self.clipboard.is_some() {
                board.push_str(password.as_str());
                board.push('\n');
            } else {
                println!("{}", password.as_str());
            }
            prompts::strength(strength);
            log::debug!("scored {:.2}", strength.value());

            // Stop recording after the first failure
            if let Some(history) = store.take() {
                match history.append(password.len(), strength) {
                    Ok(_) => store = Some(history),
                    Err(e) => {
                        record_failed(&history, &e.to_string());
                        status = Err(Done::Failed(EXIT_HISTORY));
                    }
                }
            }
        }

        if let Some(ctx) = self.clipboard.as_mut() {
            // Trailing newline only separates passwords
            board.pop();
            match ctx.set_contents(board.as_str().to_owned()) {
                Ok(_) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(count);
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    status = Err(Done::Failed(1));
                }
            }
        }

        status
    }
}

fn record_failed(store: &HistoryStore, err: &str) {
    log::error!("history append to {} failed: {err}", store.path().display());
    prompts::error(&format!("Could not record history: {err}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Preset;

    fn context(list: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("randpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        let mut ctx = Context {
            settings: Settings::default(),
            flags: super::super::parse(&args).unwrap(),
            clipboard: None,
        };
        ctx.apply_flags();
        ctx
    }

    #[test]
    fn default_request_is_strong_preset() {
        let ctx = context(&[]);
        assert_eq!(ctx.request(), Preset::Strong.request(12));
    }

    #[test]
    fn class_flags_narrow_the_preset() {
        let req = context(&["-p", "basic", "--no-upper", "-a", "-l", "30"]).request();
        assert_eq!(req.length, 30);
        assert!(!req.use_upper && req.use_lower && req.use_numbers && !req.use_symbols);
        assert!(req.avoid_ambiguous);
    }

    #[test]
    fn records_history_for_each_password() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("h.json");
        let mut ctx = context(&["-q", "-n", "3", "-l", "5", "--history", path.to_str().unwrap()]);

        assert_eq!(ctx.generate_output(), Ok(()));

        let entries = HistoryStore::new(&path).load_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.length == 8));
    }

    #[test]
    fn no_history_flag_skips_recording() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("h.json");
        let mut ctx = context(&["-q", "--no-history", "--history", path.to_str().unwrap()]);

        assert_eq!(ctx.generate_output(), Ok(()));
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_history_fails_with_history_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("h.json");
        std::fs::write(&path, "not json").unwrap();
        let mut ctx = context(&["-q", "-n", "2", "--history", path.to_str().unwrap()]);

        assert_eq!(ctx.generate_output(), Err(Done::Failed(EXIT_HISTORY)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }
}
