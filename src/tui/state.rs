//! Interactive screen state.
//!
//! Everything the screen shows lives here and is passed explicitly; the
//! event loop owns one `UiState` for the whole session.

use std::fmt;
use std::time::{Duration, Instant};

use zeroize::Zeroize;

use crate::clipboard::Clipboard;
use crate::pass::{self, CharClass, ClassSet};
use crate::settings::Settings;

/// How long copy success/failure feedback stays on screen.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

pub const PLACEHOLDER: &str = "PRESS ENTER TO GENERATE";

/// Large slider step (PgUp/PgDn).
pub const PAGE_STEP: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increase(usize),
    Decrease(usize),
    Toggle(CharClass),
    FocusNext,
    FocusPrev,
    ToggleFocused,
    Generate,
    Copy,
    Save,
    Help,
    Redraw,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyFeedback {
    Idle,
    Copied { since: Instant },
    Failed { since: Instant, reason: String },
}

impl CopyFeedback {
    fn since(&self) -> Option<Instant> {
        match self {
            CopyFeedback::Idle => None,
            CopyFeedback::Copied { since } | CopyFeedback::Failed { since, .. } => Some(*since),
        }
    }
}

/// Focusable rows: the slider, then one row per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Length,
    Class(CharClass),
}

impl Focus {
    fn order() -> [Focus; 5] {
        [
            Focus::Length,
            Focus::Class(CharClass::Lower),
            Focus::Class(CharClass::Upper),
            Focus::Class(CharClass::Number),
            Focus::Class(CharClass::Symbol),
        ]
    }

    fn step(self, forward: bool) -> Focus {
        let order = Self::order();
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (pos + 1) % order.len()
        } else {
            (pos + order.len() - 1) % order.len()
        };
        order[next]
    }
}

pub struct UiState {
    pub length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub classes: ClassSet,
    pub focus: Focus,
    pub copy_feedback: CopyFeedback,
    pub show_help: bool,
    /// One-line status message (e.g. after saving settings).
    pub status: Option<String>,
    password: Option<String>,
}

impl UiState {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut settings = settings.clone();
        settings.clamp_length();
        Self {
            length: settings.pass_length,
            min_length: settings.min_length,
            max_length: settings.max_length,
            classes: settings.classes,
            focus: Focus::Length,
            copy_feedback: CopyFeedback::Idle,
            show_help: false,
            status: None,
            password: None,
        }
    }

    /// Current length and classes layered over `base`.
    pub fn to_settings(&self, base: &Settings) -> Settings {
        Settings {
            pass_length: self.length,
            min_length: self.min_length,
            max_length: self.max_length,
            classes: self.classes,
            ..base.clone()
        }
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn is_generated(&self) -> bool {
        self.password.is_some()
    }

    pub fn increase(&mut self, step: usize) {
        self.length = self.length.saturating_add(step).min(self.max_length);
    }

    pub fn decrease(&mut self, step: usize) {
        self.length = self.length.saturating_sub(step).max(self.min_length);
    }

    /// The last enabled class cannot be switched off.
    pub fn is_locked(&self, class: CharClass) -> bool {
        self.classes.contains(class) && self.classes.len() == 1
    }

    /// Flip `class`. Returns false when refused because it is the last one.
    pub fn toggle(&mut self, class: CharClass) -> bool {
        if self.is_locked(class) {
            return false;
        }
        self.classes.set(class, !self.classes.contains(class));
        true
    }

    /// Generate into the display. An empty result leaves the previous
    /// password untouched and returns false.
    pub fn generate(&mut self) -> bool {
        let fresh = pass::generate(self.length, self.classes);
        if fresh.is_empty() {
            return false;
        }
        if let Some(old) = self.password.as_mut() {
            old.zeroize();
        }
        self.password = Some(fresh);
        self.copy_feedback = CopyFeedback::Idle;
        true
    }

    /// Copy the shown password. Ignored until something was generated.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        let Some(password) = self.password.as_deref() else {
            return false;
        };
        self.copy_feedback = match clipboard.copy(password) {
            Ok(()) => CopyFeedback::Copied { since: now },
            Err(e) => {
                log::info!("copy failed: {e}");
                CopyFeedback::Failed {
                    since: now,
                    reason: e.to_string(),
                }
            }
        };
        true
    }

    /// When the current copy feedback should disappear.
    pub fn feedback_deadline(&self) -> Option<Instant> {
        self.copy_feedback.since().map(|t| t + COPY_FEEDBACK)
    }

    /// Expire copy feedback. Returns true when the screen needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.feedback_deadline() {
            Some(deadline) if now >= deadline => {
                self.copy_feedback = CopyFeedback::Idle;
                true
            }
            _ => false,
        }
    }

    /// Apply one key action. `Save`, `Quit` and `Redraw` are handled by the
    /// event loop and are no-ops here.
    pub fn apply(&mut self, action: Action, clipboard: &mut dyn Clipboard, now: Instant) {
        self.status = None;
        match action {
            Action::Increase(step) => self.increase(step),
            Action::Decrease(step) => self.decrease(step),
            Action::Toggle(class) => {
                if !self.toggle(class) {
                    self.status = Some(format!("{} is the last enabled class", class.label()));
                }
            }
            Action::FocusNext => self.focus = self.focus.step(true),
            Action::FocusPrev => self.focus = self.focus.step(false),
            Action::ToggleFocused => {
                if let Focus::Class(class) = self.focus {
                    self.apply(Action::Toggle(class), clipboard, now);
                }
            }
            Action::Generate => {
                self.generate();
            }
            Action::Copy => {
                self.copy(clipboard, now);
            }
            Action::Help => self.show_help = !self.show_help,
            Action::Save | Action::Redraw | Action::Quit => {}
        }
    }
}

// Hand-written so the shown password never reaches a debug print
impl fmt::Debug for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiState")
            .field("length", &self.length)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("classes", &self.classes)
            .field("focus", &self.focus)
            .field("copy_feedback", &self.copy_feedback)
            .field("show_help", &self.show_help)
            .field("status", &self.status)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Drop for UiState {
    fn drop(&mut self) {
        if let Some(password) = self.password.as_mut() {
            password.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    #[derive(Default)]
    struct Recorder {
        copied: Vec<String>,
        fail: bool,
    }

    impl Clipboard for Recorder {
        fn copy(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Clipboard("no display".into()));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    fn state() -> UiState {
        UiState::from_settings(&Settings::default())
    }

    #[test]
    fn last_class_cannot_be_unchecked() {
        let mut s = state();
        assert!(s.toggle(CharClass::Lower));
        assert!(s.toggle(CharClass::Upper));
        assert!(s.toggle(CharClass::Number));
        assert!(s.is_locked(CharClass::Symbol));
        assert!(!s.toggle(CharClass::Symbol));
        assert_eq!(s.classes, ClassSet::empty().with(CharClass::Symbol));

        // Re-enabling another class unlocks it
        assert!(s.toggle(CharClass::Number));
        assert!(!s.is_locked(CharClass::Symbol));
    }

    #[test]
    fn refused_toggle_sets_status() {
        let mut s = state();
        s.classes = ClassSet::empty().with(CharClass::Upper);
        let mut clip = Recorder::default();
        s.apply(Action::Toggle(CharClass::Upper), &mut clip, Instant::now());
        assert!(s.status.is_some());
        assert!(s.classes.contains(CharClass::Upper));
    }

    #[test]
    fn slider_respects_bounds() {
        let mut s = state();
        s.increase(1_000);
        assert_eq!(s.length, s.max_length);
        s.decrease(1_000);
        assert_eq!(s.length, s.min_length);
        s.increase(PAGE_STEP);
        assert_eq!(s.length, s.min_length + PAGE_STEP);
    }

    #[test]
    fn generate_fills_display() {
        let mut s = state();
        assert!(!s.is_generated());
        assert!(s.generate());
        let shown = s.password().unwrap();
        assert_eq!(shown.len(), s.length);
        assert!(shown.bytes().all(|b| s.classes.allows(b)));
    }

    #[test]
    fn empty_generation_keeps_previous_password() {
        let mut s = state();
        s.generate();
        let before = s.password().unwrap().to_string();

        s.classes = ClassSet::empty();
        assert!(!s.generate());
        assert_eq!(s.password(), Some(before.as_str()));
    }

    #[test]
    fn copy_before_generate_is_ignored() {
        let mut s = state();
        let mut clip = Recorder::default();
        assert!(!s.copy(&mut clip, Instant::now()));
        assert!(clip.copied.is_empty());
        assert_eq!(s.copy_feedback, CopyFeedback::Idle);
    }

    #[test]
    fn copy_feedback_expires() {
        let mut s = state();
        let mut clip = Recorder::default();
        s.generate();

        let t0 = Instant::now();
        assert!(s.copy(&mut clip, t0));
        assert_eq!(clip.copied, vec![s.password().unwrap().to_string()]);
        assert_eq!(s.copy_feedback, CopyFeedback::Copied { since: t0 });

        assert!(!s.tick(t0 + Duration::from_millis(1999)));
        assert!(s.tick(t0 + COPY_FEEDBACK));
        assert_eq!(s.copy_feedback, CopyFeedback::Idle);
    }

    #[test]
    fn failed_copy_reports_without_losing_password() {
        let mut s = state();
        let mut clip = Recorder {
            fail: true,
            ..Default::default()
        };
        s.generate();
        assert!(s.copy(&mut clip, Instant::now()));
        assert!(matches!(s.copy_feedback, CopyFeedback::Failed { .. }));
        assert!(s.is_generated());
    }

    #[test]
    fn regenerating_resets_feedback() {
        let mut s = state();
        let mut clip = Recorder::default();
        s.generate();
        s.copy(&mut clip, Instant::now());
        s.generate();
        assert_eq!(s.copy_feedback, CopyFeedback::Idle);
    }

    #[test]
    fn focus_cycles_and_toggles_focused_class() {
        let mut s = state();
        let mut clip = Recorder::default();
        let now = Instant::now();
        s.apply(Action::FocusPrev, &mut clip, now);
        assert_eq!(s.focus, Focus::Class(CharClass::Symbol));
        s.apply(Action::ToggleFocused, &mut clip, now);
        assert!(!s.classes.contains(CharClass::Symbol));
        s.apply(Action::FocusNext, &mut clip, now);
        assert_eq!(s.focus, Focus::Length);
    }

    #[test]
    fn debug_output_hides_password() {
        let mut s = state();
        s.generate();
        let shown = s.password().unwrap().to_string();
        let printed = format!("{s:?}");
        assert!(!printed.contains(&shown));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn settings_round_trip_through_state() {
        let base = Settings {
            number_of_passwords: 7,
            ..Default::default()
        };
        let mut s = UiState::from_settings(&base);
        s.increase(2);
        s.toggle(CharClass::Symbol);
        let out = s.to_settings(&base);
        assert_eq!(out.pass_length, base.pass_length + 2);
        assert!(!out.classes.contains(CharClass::Symbol));
        assert_eq!(out.number_of_passwords, 7);
    }
}
