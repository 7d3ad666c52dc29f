//! Flag-driven, non-interactive mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run CLI mode and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let result = Context::new(&args).and_then(|mut ctx| ctx.run());
    match result {
        Ok(()) => 0,
        Err(e) => {
            prompts::error(&e.to_string());
            if e.exit_code() == 2 {
                eprintln!("Run `pwforge --help` for usage.");
            }
            e.exit_code()
        }
    }
}
