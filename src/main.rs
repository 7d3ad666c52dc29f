use std::env;

mod cli;
mod clipboard;
mod entropy;
mod error;
mod exits;
mod logging;
mod pass;
mod settings;
mod terminal;
mod tui;

fn main() {
    logging::init();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 => {
            exits::reset();
            match tui::run() {
                Ok(()) => 0,
                Err(e) => {
                    cli::prompts::error(&e.to_string());
                    e.exit_code()
                }
            }
        }
        _ => cli::run(args),
    };

    std::process::exit(code);
}
