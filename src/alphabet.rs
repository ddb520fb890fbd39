//! Fixed working alphabet and index window keys.
//!
//! The dictionary and queries share a fixed `a..=z` alphabet. Window keys
//! are an enumerated type rather than raw `'a'`-relative subscripts, with
//! distinct variants for truncated windows instead of reusing a valid
//! alphabet index as a sentinel. This removes the bucket collision between
//! genuine trigrams and windows cut short at a word boundary.

/// Number of letters in the working alphabet (`a..=z`).
pub const ALPHABET_SIZE: usize = 26;

/// A validated letter of the working alphabet, stored as a `0..26` offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Convert an ASCII byte to a letter, if it is in the alphabet.
    pub fn from_byte(byte: u8) -> Option<Self> {
        byte.is_ascii_lowercase().then(|| Self(byte - b'a'))
    }

    /// Convert a character to a letter, if it is in the alphabet.
    pub fn from_char(ch: char) -> Option<Self> {
        ch.is_ascii_lowercase().then(|| Self(ch as u8 - b'a'))
    }

    /// Offset of this letter within the alphabet (`0..26`).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The character this letter represents.
    pub fn as_char(self) -> char {
        (self.0 + b'a') as char
    }

    /// Iterate over every letter of the alphabet in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_SIZE as u8).map(Letter)
    }
}

/// Key of one index bucket: a window of up to three consecutive alphabet
/// letters taken from a word.
///
/// The shorter variants mark windows that could not be extended: `Bi` means
/// no third alphabet letter follows the pair (end of word, or a character
/// outside the alphabet), `Uni` likewise for a lone letter. Keeping them as
/// separate variants means a truncated window can never collide with a
/// genuine trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKey {
    /// A single letter with no following alphabet letter.
    Uni(Letter),
    /// Two consecutive letters with no third alphabet letter following.
    Bi(Letter, Letter),
    /// Three consecutive alphabet letters.
    Tri(Letter, Letter, Letter),
}

impl WindowKey {
    /// Extract the window key starting at byte offset `j` of `word`.
    ///
    /// Returns `None` when `word[j]` is outside the alphabet; otherwise the
    /// window extends as far as the following bytes stay in the alphabet,
    /// up to three letters.
    pub fn at(word: &[u8], j: usize) -> Option<Self> {
        let first = Letter::from_byte(*word.get(j)?)?;
        let second = match word.get(j + 1).copied().and_then(Letter::from_byte) {
            Some(second) => second,
            None => return Some(Self::Uni(first)),
        };
        match word.get(j + 2).copied().and_then(Letter::from_byte) {
            Some(third) => Some(Self::Tri(first, second, third)),
            None => Some(Self::Bi(first, second)),
        }
    }
}
