//! Framed terminal output for the menu and help screens, plus the
//! strength meter and color codes.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

/// Wipe the screen and scrollback before redrawing the menu.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active color.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Outer width of every frame, corners included.
pub const BOX_WIDTH: usize = 74;

/// Text columns between `│ ` and ` │`.
const INNER: usize = BOX_WIDTH - 4;

/// Column where option descriptions start in the help screen.
const FLAG_COL: usize = 27;

fn rule(left: char, label: &str, right: char) -> String {
    let fill = (BOX_WIDTH - 2).saturating_sub(label.chars().count());
    format!("{left}{label}{}{right}", "─".repeat(fill))
}

/// Frame one row, padding `content` out to the right border. Overlong
/// rows are printed as is and push the border out.
fn row(left_pad: usize, content: &str) -> String {
    let used = left_pad + console_width(content);
    format!(
        "│ {}{content}{} │",
        " ".repeat(left_pad),
        " ".repeat(INNER.saturating_sub(used))
    )
}

/// Top border, with `title` set into it when non-empty.
pub fn box_top(title: &str) {
    let label = if title.is_empty() {
        String::new()
    } else {
        format!("─ {title} ")
    };
    println!("{}", rule('┌', &label, '┐'));
}

pub fn box_line(content: &str) {
    println!("{}", row(0, content));
}

pub fn box_line_center(content: &str) {
    let pad = INNER.saturating_sub(console_width(content)) / 2;
    println!("{}", row(pad, content));
}

pub fn box_bottom() {
    println!("{}", rule('└', "", '┘'));
}

/// Help row: the flag in a fixed column, the description word-wrapped
/// beside it.
pub fn box_opt(flag: &str, desc: &str) {
    let mut lines = wrap(desc, INNER - FLAG_COL).into_iter();
    let first = lines.next().unwrap_or_default();
    println!("{}", row(0, &format!("{flag:<FLAG_COL$}{first}")));
    for line in lines {
        println!("{}", row(FLAG_COL, &line));
    }
}

/// Greedy word wrap. A single word longer than `width` gets its own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Visible width of `s`, not counting SGR escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => width += 1,
        }
    }
    width
}

const METER_WIDTH: usize = 40;

/// Colored bar for a percentage: `████████░░░░ 65.0%`.
pub fn strength_meter(percent: f64) -> String {
    let percent = percent.clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * METER_WIDTH as f64).round() as usize;
    let color = match percent as u32 {
        0..=49 => RED,
        50..=79 => YELLOW,
        _ => GREEN,
    };
    format!(
        "{color}{}{RESET}{} {:.1}%",
        "█".repeat(filled),
        "░".repeat(METER_WIDTH - filled),
        percent
    )
}
