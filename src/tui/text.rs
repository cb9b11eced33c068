use crate::history::HistoryEntry;
use crate::pass::{MIN_LENGTH, Password, Preset, Strength};
use crate::terminal::{
    BOLD, RESET, box_bottom, box_line, box_line_center, box_opt, box_top, strength_meter,
};

pub fn print_banner() {
    box_top("");
    box_line_center(&format!("{BOLD}RandPass{RESET}"));
    box_line_center("Random passwords, scored and logged (metadata only)");
    box_bottom();
    println!();
}

pub fn print_main_menu() {
    box_top("Options");
    box_line("  1) Generate password");
    box_line("  2) View password history");
    box_line("  3) Help");
    box_line("  0) Exit");
    box_bottom();
}

pub fn print_complexity_menu(default: Preset) {
    box_top("Complexity levels");
    for preset in [Preset::Basic, Preset::Strong, Preset::Max] {
        let marker = if preset == default { " (default)" } else { "" };
        box_line(&format!(
            "  {}) {:<7} {}{}",
            preset.menu_key(),
            capitalize(&preset.to_string()),
            preset.describe(),
            marker
        ));
    }
    box_bottom();
}

pub fn print_generated(password: &Password, strength: Strength, entropy: &str) {
    println!();
    box_top("Generated password");
    box_line(password.as_str());
    box_line("");
    box_line(&format!("Strength: {}", strength_meter(strength.percent())));
    box_line(&format!("Entropy:  {entropy}"));
    box_bottom();
    println!();
}

pub fn print_history(entries: &[HistoryEntry]) {
    println!();
    if entries.is_empty() {
        println!("No password history found.");
        println!();
        return;
    }

    box_top("Password History");
    for entry in entries {
        box_line(&format_entry(entry));
    }
    box_bottom();
    println!();
}

/// `2024-03-01 09:15:42 | Length: 16 | Strength: 85.0%`
pub fn format_entry(entry: &HistoryEntry) -> String {
    format!(
        "{} | Length: {} | Strength: {:.1}%",
        entry.timestamp, entry.length, entry.strength_percent
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn print_help() {
    box_top("Randpass");
    box_line_center("Password generator with strength scoring");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. A menu asks for a length");
    box_line("     and a complexity level, then shows the password and its score.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -p max) to generate");
    box_line("     passwords without the menu.");
    box_line("");
    box_line("HISTORY:");
    box_line("  Each generation records its time, length and strength. The");
    box_line("  password itself is never written to disk.");
    box_line("");
    box_line("USAGE:");
    box_line("  randpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", &format!("Characters per password (minimum {MIN_LENGTH}, default 12)"));
    box_opt("  -n, --number <N>", "How many passwords to generate");
    box_opt("  -p, --preset <LEVEL>", "basic, strong (default) or max");
    box_opt("      --no-upper", "Leave out uppercase letters");
    box_opt("      --no-lower", "Leave out lowercase letters");
    box_opt("      --no-digits", "Leave out digits");
    box_opt("      --no-symbols", "Leave out symbols");
    box_opt("  -a, --avoid-ambiguous", "Leave out O 0 l 1 I");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Print passwords only, no strength line");
    box_line("");
    box_line(" History:");
    box_opt("  -H, --show-history", "List recorded generations and exit");
    box_opt("      --history <FILE>", "History file (env: RANDPASS_HISTORY)");
    box_opt("      --no-history", "Do not record this run");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --save", "Save -l, -p and --history as defaults");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  randpass                 Interactive menu");
    box_line("  randpass -l 16           One password, 16 characters");
    box_line("  randpass -l 20 -n 3      Three passwords, 20 characters each");
    box_line("  randpass -p basic        Letters and digits only");
    box_line("  randpass -p max -b       Max complexity, copied to clipboard");
    box_line("  randpass -H              Show generation history");
    box_line("");
    box_line("ENVIRONMENT:");
    box_line("  RANDPASS_LOG             Log filter (e.g. debug), default warn");
    box_bottom();
    println!();
}
