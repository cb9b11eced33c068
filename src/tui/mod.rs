//! Interactive TUI menus.

mod input;
mod menu;
mod text;

pub use input::*;
pub use menu::*;
pub use text::*;

use crate::settings::Settings;

/// Run TUI interactive mode.
pub fn run() {
    let settings = Settings::load_or_default();
    gen_main_menu(&settings);
}
