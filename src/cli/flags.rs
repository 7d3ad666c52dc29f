use crate::pass::{CharClass, ClassSet};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub interactive: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    /// Classes named on the command line. Empty means "not given".
    pub classes: ClassSet,
    pub output: Option<String>,
}

impl CliFlags {
    pub fn enable(&mut self, class: CharClass) {
        self.classes.insert(class);
    }

    pub fn has_class_flags(&self) -> bool {
        !self.classes.is_empty()
    }
}
