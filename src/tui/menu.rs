use crate::history::HistoryStore;
use crate::pass::{self, Preset, parse_length, strength::entropy_summary};
use crate::settings::Settings;
use crate::terminal::{clear, print_error, reset_terminal, stdin_is_tty, stdout_is_tty};

use super::{
    get_editable_input, print_banner, print_complexity_menu, print_generated, print_help,
    print_history, print_main_menu,
};

pub fn gen_main_menu(settings: &Settings) {
    reset_terminal();
    if stdout_is_tty() {
        clear();
    }

    let store = settings.history_store();
    log::info!("history file: {}", store.path().display());

    print_banner();

    loop {
        print_main_menu();

        let choice = match get_editable_input("Select option", "") {
            Some(s) => s,
            // EOF on a pipe ends the session; Esc on a tty just redraws
            None if !stdin_is_tty() => break,
            None => continue,
        };

        match choice.trim() {
            "0" => break,
            "1" => generate_password(settings, &store),
            "2" => show_history(&store),
            "3" => print_help(),
            _ => {
                print_error("Invalid choice.");
                println!();
            }
        }
    }
}

fn generate_password(settings: &Settings, store: &HistoryStore) {
    let prompt = format!("Password length (default {})", settings.pass_length);
    let Some(answer) = get_editable_input(&prompt, "") else {
        return;
    };
    let length = parse_length(&answer, settings.pass_length);

    println!();
    print_complexity_menu(settings.preset);
    let prompt = format!("Select level (1-3, default {})", settings.preset.menu_key());
    let Some(level) = get_editable_input(&prompt, "") else {
        return;
    };
    let preset = if level.trim().is_empty() {
        settings.preset
    } else {
        Preset::from_choice(&level)
    };

    let request = preset.request(length);
    let password = pass::generate(&request);
    let strength = pass::score(password.as_str());

    print_generated(&password, strength, &entropy_summary(&request));

    if !settings.record_history {
        return;
    }
    if let Err(e) = store.append(password.len(), strength) {
        log::error!("failed to record history: {e}");
        print_error(&format!("Could not save history: {e}"));
        println!();
    }
}

fn show_history(store: &HistoryStore) {
    match store.load_all() {
        Ok(entries) => print_history(&entries),
        Err(e) => {
            log::error!("failed to load history: {e}");
            println!();
            print_error(&format!("Could not read history: {e}"));
            println!();
        }
    }
}
