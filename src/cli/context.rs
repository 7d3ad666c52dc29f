//! CLI context - bundles settings, flags, and clipboard state.

use std::path::Path;

use zeroize::Zeroize;

use super::parse::DEFAULT_OUTPUT;
use super::{CliFlags, prompts, quiet};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::{Error, Result};
use crate::pass;
use crate::settings::Settings;
use crate::tui::{self, print_help};

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<SystemClipboard>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let settings = if flags.saved || flags.interactive {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        if self.handle_info_flags() {
            return Ok(());
        }
        self.apply_flags()?;

        if self.flags.interactive {
            return tui::run_with(self.settings.clone());
        }
        self.generate_output()
    }

    /// Returns true when an info flag was handled and nothing else should run.
    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print_help();
            return true;
        }
        if self.flags.version {
            println!("pwforge {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<()> {
        apply_to_settings(&self.flags, &mut self.settings);

        if self.flags.clipboard {
            match SystemClipboard::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(e) => {
                    log::info!("{e}");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(e);
                    }
                }
            }
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<()> {
        if self.settings.classes.is_empty() {
            prompts::no_classes();
            return Ok(());
        }

        let count = self.settings.number_of_passwords.max(1);

        if self.settings.to_clipboard {
            let passwords = pass::generate_batch(&self.settings, count)?;
            if let (Some(clip), Some(mut passwords)) = (self.clipboard.as_mut(), passwords) {
                let res = clip.copy(passwords.trim_end());
                passwords.zeroize();
                match res {
                    Ok(()) => prompts::clipboard_copied(),
                    Err(Error::Clipboard(msg)) => prompts::clipboard_error(&msg),
                    Err(e) => return Err(e),
                }
            }
        } else if !self.settings.output_file_path.is_empty() {
            pass::generate_batch(&self.settings, count)?;
            let full_path = std::fs::canonicalize(&self.settings.output_file_path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| self.settings.output_file_path.clone());
            prompts::passwords_written(count, &full_path);
        } else {
            pass::generate_batch(&self.settings, count)?;
        }
        Ok(())
    }
}

/// Layer explicit flags over loaded or default settings.
fn apply_to_settings(flags: &CliFlags, settings: &mut Settings) {
    if let Some(len) = flags.length {
        settings.pass_length = len;
        // An explicit length is honoured even outside the slider range
        settings.min_length = settings.min_length.min(len);
        settings.max_length = settings.max_length.max(len);
    }
    if let Some(num) = flags.number {
        settings.number_of_passwords = num;
    }
    if flags.has_class_flags() {
        settings.classes = flags.classes;
    }
    if let Some(ref path) = flags.output {
        settings.output_file_path = output_path(path);
    }
}

/// A directory argument (`.`, trailing `/`, or an existing dir) gets the
/// default file name appended.
fn output_path(path: &str) -> String {
    if path == "." {
        DEFAULT_OUTPUT.to_string()
    } else if path.ends_with('/') {
        format!("{path}{DEFAULT_OUTPUT}")
    } else if Path::new(path).is_dir() {
        Path::new(path).join(DEFAULT_OUTPUT).display().to_string()
    } else {
        path.to_string()
    }
}
