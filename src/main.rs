use std::env;
use std::process::ExitCode;

mod cli;
mod exits;
mod history;
mod pass;
mod rand;
mod settings;
mod terminal;
mod tui;

/// Environment variable holding the log filter, e.g. `RANDPASS_LOG=debug`.
const LOG_ENV: &str = "RANDPASS_LOG";

fn init_logging() {
    // stderr keeps stdout clean for piped passwords
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Arguments after the program name. argv may be empty when exec'd directly.
fn user_args(args: &[String]) -> usize {
    args.len().saturating_sub(1)
}

fn main() -> ExitCode {
    init_logging();
    exits::reset_terminal();
    exits::install_handlers();
    exits::harden_process();

    let args: Vec<String> = env::args().collect();
    log::debug!("starting with {} argument(s)", user_args(&args));

    match user_args(&args) {
        0 => {
            tui::run();
            ExitCode::SUCCESS
        }
        _ => cli::run(args),
    }
}
