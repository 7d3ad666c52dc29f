//! Interactive screen: length slider, class toggles, generate and copy.

mod input;
mod state;
mod text;

use std::time::{Duration, Instant};

pub use text::print_help;

use state::{Action, UiState};
use text::render;

use crate::clipboard::LazyClipboard;
use crate::error::Result;
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, clear, draw_screen, reset_terminal};

/// Poll interval while no copy feedback is pending.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Run interactive mode with the saved settings.
pub fn run() -> Result<()> {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {e}");
        Settings::default()
    });
    run_with(settings)
}

pub fn run_with(settings: Settings) -> Result<()> {
    let mut state = UiState::from_settings(&settings);
    let mut guard = RawModeGuard::new()?;

    let result = event_loop(&mut state, &settings);

    guard.release();
    clear();
    reset_terminal();
    result
}

fn event_loop(state: &mut UiState, settings: &Settings) -> Result<()> {
    let mut clipboard = LazyClipboard::default();
    let mut dirty = true;

    loop {
        if dirty {
            draw_screen(&render(state));
            dirty = false;
        }

        let timeout = state
            .feedback_deadline()
            .map(|d| d.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        match input::next_action(timeout)? {
            Some(Action::Quit) => break,
            Some(Action::Save) => {
                let updated = state.to_settings(settings);
                state.status = Some(match updated.save_to_file() {
                    Ok(()) => "Settings saved".to_string(),
                    Err(e) => format!("Save failed: {e}"),
                });
                dirty = true;
            }
            Some(action) => {
                state.apply(action, &mut clipboard, Instant::now());
                dirty = true;
            }
            None => {}
        }

        dirty |= state.tick(Instant::now());
    }

    Ok(())
}
