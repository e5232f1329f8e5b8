use crate::config::HIDDEN_LETTER;
use std::collections::BTreeSet;
use std::fmt;

/// Uppercase characters confirmed present in the phrase, digits and punctuation included
pub type RevealedLetters = BTreeSet<char>;

/// The partially hidden phrase: one entry per phrase character.
/// Spaces are always shown; other characters show `HIDDEN_LETTER` until revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealMask {
    cells: Vec<char>,
}

impl RevealMask {
    /// Fully hidden mask for `phrase`, with spaces pre-revealed
    pub fn hidden(phrase: &str) -> Self {
        RevealMask {
            cells: phrase
                .chars()
                .map(|c| if c == ' ' { ' ' } else { HIDDEN_LETTER })
                .collect(),
        }
    }

    /// Recomputes every cell from the revealed letter set
    pub fn reveal(&mut self, phrase: &str, revealed: &RevealedLetters) {
        for (cell, c) in self.cells.iter_mut().zip(phrase.chars()) {
            if revealed.contains(&c) {
                *cell = c;
            }
        }
    }

    pub fn reveal_all(&mut self, phrase: &str) {
        self.cells = phrase.chars().collect();
    }

    pub fn is_complete(&self, phrase: &str) -> bool {
        self.cells.iter().copied().eq(phrase.chars())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells joined by single spaces, the way the phrase region shows them
    pub fn joined(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*c);
        }
        out
    }
}

impl fmt::Display for RevealMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact: String = self.cells.iter().collect();
        f.write_str(&compact)
    }
}
