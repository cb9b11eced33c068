mod context;
mod flags;
mod parse;
mod prompts;
mod quiet;

use std::process::ExitCode;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

/// Run non-interactive mode with the process arguments.
pub fn run(args: Vec<String>) -> ExitCode {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Run `randpass --help` for usage.");
            return ExitCode::FAILURE;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Done::Finished) => ExitCode::SUCCESS,
        Err(Done::Failed(code)) => ExitCode::from(code),
    }
}
