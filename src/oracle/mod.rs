//! Word-validity oracle: the authority consulted once a candidate word
//! is fully assembled.
//!
//! The engine only ever talks to [`WordOracle`] through the threaded
//! [`OracleClient`], so checks never block the input loop. The built-in
//! implementation answers from an in-memory word set and the game works
//! offline; a failing oracle is always recoverable and costs nothing but
//! the assembled pattern.

#![allow(dead_code)]

pub mod client;

pub use client::{OracleClient, Verdict};

use std::collections::HashSet;

/// Failure to obtain a verdict. Transient by contract: callers treat it
/// like a rejection with a different message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleError {
    Unreachable,
}

impl OracleError {
    pub fn message(&self) -> &'static str {
        match self {
            OracleError::Unreachable => "Error checking word. Try again!",
        }
    }
}

/// A dictionary authority for assembled words.
pub trait WordOracle {
    /// Judge `word` (lowercase). `Ok(false)` means "not a word"; `Err`
    /// means the authority could not answer at all.
    fn check(&self, word: &str) -> Result<bool, OracleError>;
}

/// Oracle backed by an in-memory word set.
pub struct WordSetOracle {
    words: HashSet<String>,
}

impl WordSetOracle {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }
}

impl WordOracle for WordSetOracle {
    fn check(&self, word: &str) -> Result<bool, OracleError> {
        Ok(self.words.contains(&word.to_lowercase()))
    }
}
