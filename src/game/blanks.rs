//! The blank pattern: the word-in-progress, assembled one dropped letter
//! at a time.

#![allow(dead_code)]

use std::fmt;

/// Fixed row of slots; committed letters never move or leave except by a
/// full reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankPattern {
    slots: Vec<Option<char>>,
}

impl BlankPattern {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// The letter committed to `slot`, if any.
    pub fn slot(&self, slot: usize) -> Option<char> {
        self.slots.get(slot).copied().flatten()
    }

    /// True if `slot` is in range and still blank.
    pub fn can_fill(&self, slot: usize) -> bool {
        matches!(self.slots.get(slot), Some(None))
    }

    /// Commit a letter to an empty slot. Returns false (no change) if the
    /// slot is out of range or already holds a letter.
    pub fn fill(&mut self, slot: usize, letter: char) -> bool {
        if !self.can_fill(slot) {
            return false;
        }
        self.slots[slot] = Some(letter);
        true
    }

    /// Clear every slot.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Index of the leftmost blank slot, if any.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Indices of the slots still blank, in order.
    pub fn empty_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.is_none().then_some(i))
            .collect()
    }

    /// The committed letters, in slot order.
    pub fn committed(&self) -> impl Iterator<Item = char> + '_ {
        self.slots.iter().copied().flatten()
    }

    /// The assembled word, lowercase, once every slot is filled.
    pub fn word(&self) -> Option<String> {
        self.slots
            .iter()
            .map(|s| s.map(|c| c.to_ascii_lowercase()))
            .collect()
    }
}

impl fmt::Display for BlankPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", slot.unwrap_or('_'))?;
        }
        Ok(())
    }
}
