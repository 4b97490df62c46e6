//! The errors produced while preparing to generate passphrases.
//!
//! Once a [`Corpus`](crate::Corpus) exists, generation itself can't fail.
use thiserror::Error;

pub use crate::word_lists::WordListError;

/// Couldn't put together a usable [`Corpus`](crate::Corpus).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CorrectHorseError {
    /// A word list couldn't be read.
    #[error(transparent)]
    WordList(#[from] WordListError),
    /// None of the word lists had any words in them.
    #[error(transparent)]
    EmptyCorpus(#[from] EmptyCorpusError),
}

/// Every configured word list was empty, leaving nothing to draw from.
#[derive(Debug, Error)]
#[error("no non-empty wordlist found (checked {configured})")]
pub struct EmptyCorpusError {
    configured: usize,
}

impl EmptyCorpusError {
    pub(crate) const fn new(configured: usize) -> Self {
        EmptyCorpusError { configured }
    }

    /// How many word lists were configured, all of them empty.
    #[inline]
    #[must_use]
    pub const fn configured(&self) -> usize {
        self.configured
    }
}
