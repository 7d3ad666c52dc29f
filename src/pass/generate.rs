//! Password generation.

use crate::entropy::{self, SecureRng};

use super::charset::{CharClass, ClassSet};

/// Length and enabled classes captured at the moment of generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }

    pub fn generate_into<R: SecureRng + ?Sized>(&self, rng: &mut R, buf: &mut Vec<u8>) {
        generate_into(rng, self.length, self.classes, buf)
    }
}

/// Generate a password of `length` characters from the enabled classes.
///
/// Returns an empty string when `classes` is empty. Callers treat that as
/// "nothing to generate", not as a password.
pub fn generate(length: usize, classes: ClassSet) -> String {
    generate_with(&mut entropy::os(), length, classes)
}

/// Same as [`generate`] over a caller-supplied secure RNG.
pub fn generate_with<R: SecureRng + ?Sized>(rng: &mut R, length: usize, classes: ClassSet) -> String {
    let mut buf = Vec::with_capacity(length);
    generate_into(rng, length, classes, &mut buf);
    // Safety: every alphabet is ASCII
    unsafe { String::from_utf8_unchecked(buf) }
}

/// Fill `buf` with one password. Leaves it empty when no class is enabled.
/// Caller owns the buffer; zeroize it between calls.
pub fn generate_into<R: SecureRng + ?Sized>(
    rng: &mut R,
    length: usize,
    classes: ClassSet,
    buf: &mut Vec<u8>,
) {
    buf.clear();

    let mut enabled = [CharClass::Lower; 4];
    let mut n = 0;
    for class in classes.iter() {
        enabled[n] = class;
        n += 1;
    }
    if n == 0 {
        return;
    }

    buf.reserve(length);
    for _ in 0..length {
        let class = enabled[entropy::index(rng, n)];
        let alphabet = class.alphabet();
        buf.push(alphabet[entropy::index(rng, alphabet.len())]);
    }
}
