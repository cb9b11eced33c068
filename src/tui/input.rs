use std::io::BufRead;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Prompt for a line of input, prefilled with `initial_value`.
///
/// Returns `None` when the user presses Esc/Ctrl+Q, or when stdin hits
/// EOF in non-interactive use. Ctrl+C exits the process.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return read_plain_line(prompt, initial_value),
    };

    let mut input: Vec<char> = initial_value.chars().collect();
    // 0-based insertion point into `input`
    let mut cursor = input.len();
    let mut drawn_len = input.len();
    let mut cancelled = false;

    print!("{}: {}", prompt, initial_value);
    flush();

    loop {
        let key_event = match read() {
            Ok(Event::Key(k)) if k.kind != KeyEventKind::Release => k,
            Ok(_) => continue,
            Err(_) => break,
        };
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors, so restore the terminal first
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if ctrl => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left if cursor > 0 => cursor -= 1,
            KeyCode::Right if cursor < input.len() => cursor += 1,
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let text: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(drawn_len + 1));
        print!("\r{}: {}", prompt, text);
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        drawn_len = input.len();
    }

    drop(guard);
    println!();
    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}

/// Line-buffered fallback for pipes and redirected stdin.
fn read_plain_line(prompt: &str, initial_value: &str) -> Option<String> {
    print!("{}: ", prompt);
    flush();

    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                Some(initial_value.to_string())
            } else {
                Some(line.to_string())
            }
        }
    }
}
