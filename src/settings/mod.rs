//! Password generation settings.

mod file;

use crate::error::Result;
use crate::pass::{ClassSet, GenerationRequest};

pub const DEFAULT_LENGTH: usize = 16;
pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub classes: ClassSet,
    pub number_of_passwords: usize,
    pub output_file_path: String,
    /// Runtime only, never persisted.
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<()> {
        file::save(self)
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.pass_length, self.classes)
    }

    /// Keep `pass_length` inside the slider bounds.
    pub fn clamp_length(&mut self) {
        if self.min_length > self.max_length {
            std::mem::swap(&mut self.min_length, &mut self.max_length);
        }
        self.pass_length = self.pass_length.clamp(self.min_length, self.max_length);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
            classes: ClassSet::all(),
            number_of_passwords: 1,
            output_file_path: String::new(),
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_length_into_bounds() {
        let mut s = Settings {
            pass_length: 99,
            ..Default::default()
        };
        s.clamp_length();
        assert_eq!(s.pass_length, MAX_LENGTH);

        s.pass_length = 0;
        s.clamp_length();
        assert_eq!(s.pass_length, MIN_LENGTH);
    }

    #[test]
    fn clamp_fixes_swapped_bounds() {
        let mut s = Settings {
            pass_length: 10,
            min_length: 20,
            max_length: 8,
            ..Default::default()
        };
        s.clamp_length();
        assert_eq!((s.min_length, s.max_length, s.pass_length), (8, 20, 10));
    }
}
