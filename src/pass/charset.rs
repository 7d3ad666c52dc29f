//! Character classes and their fixed alphabets.

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"~!@#$%^&*()_+{}\":?><;.,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Number,
    Symbol,
}

impl CharClass {
    /// Fixed iteration order for every class set.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Number,
        CharClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Number => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lower => "Lowercase",
            CharClass::Upper => "Uppercase",
            CharClass::Number => "Numbers",
            CharClass::Symbol => "Symbols",
        }
    }

    /// Short name used in the settings file.
    pub fn key(self) -> &'static str {
        match self {
            CharClass::Lower => "lower",
            CharClass::Upper => "upper",
            CharClass::Number => "number",
            CharClass::Symbol => "symbol",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of enabled character classes. May be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    #[cfg(test)]
    pub fn with(mut self, class: CharClass) -> Self {
        self.insert(class);
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Enabled classes in Lower, Upper, Number, Symbol order.
    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Number of distinct characters across the enabled alphabets.
    pub fn charset_size(self) -> usize {
        self.iter().map(|c| c.alphabet().len()).sum()
    }

    #[cfg(test)]
    pub fn allows(self, byte: u8) -> bool {
        self.iter().any(|c| c.alphabet().contains(&byte))
    }
}

impl FromIterator<CharClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_match_fixed_tables() {
        assert_eq!(CharClass::Lower.alphabet().len(), 26);
        assert_eq!(CharClass::Upper.alphabet().len(), 26);
        assert_eq!(CharClass::Number.alphabet().len(), 10);
        assert_eq!(CharClass::Symbol.alphabet(), b"~!@#$%^&*()_+{}\":?><;.,");
        assert_eq!(CharClass::Symbol.alphabet().len(), 23);
    }

    #[test]
    fn alphabets_are_disjoint() {
        for a in CharClass::ALL {
            for b in CharClass::ALL.into_iter().filter(|b| *b != a) {
                assert!(a.alphabet().iter().all(|ch| !b.alphabet().contains(ch)));
            }
        }
    }

    #[test]
    fn set_iterates_in_fixed_order() {
        let set: ClassSet = [CharClass::Symbol, CharClass::Lower, CharClass::Number]
            .into_iter()
            .collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(
            order,
            vec![CharClass::Lower, CharClass::Number, CharClass::Symbol]
        );
        assert_eq!(set.len(), 3);
        assert_eq!(set.charset_size(), 26 + 10 + 23);
    }

    #[test]
    fn insert_and_remove() {
        let mut set = ClassSet::empty();
        assert!(set.is_empty());
        set.set(CharClass::Upper, true);
        assert!(set.contains(CharClass::Upper));
        set.set(CharClass::Upper, false);
        assert!(set.is_empty());
        assert_eq!(ClassSet::all().len(), 4);
    }

    #[test]
    fn keys_round_trip() {
        for class in CharClass::ALL {
            assert_eq!(CharClass::from_key(class.key()), Some(class));
        }
        assert_eq!(CharClass::from_key("emoji"), None);
    }
}
