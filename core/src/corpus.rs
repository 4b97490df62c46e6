use std::slice;

use log::warn;
use rand::{Rng, seq::IndexedRandom};

use crate::{
    errors::{CorrectHorseError, EmptyCorpusError},
    word_lists::{WordList, WordSource, load_word_lists},
};

/// The word lists passphrases are drawn from.
///
/// Every word list in a `Corpus` has at least one word, and there's always at
/// least one word list.
#[derive(Debug, Clone)]
pub struct Corpus {
    word_lists: Vec<WordList>,
}

impl Corpus {
    /// Load all `sources` and assemble them into a `Corpus`.
    ///
    /// Fails on the first source that can't be read, or if every source is
    /// empty.
    pub fn load(sources: &[WordSource]) -> Result<Self, CorrectHorseError> {
        let word_lists = load_word_lists(sources)?;
        Ok(Corpus::assemble(word_lists)?)
    }

    /// Drop empty word lists, keeping the rest.
    ///
    /// Fails if that leaves nothing.
    pub fn assemble(
        mut word_lists: Vec<WordList>,
    ) -> Result<Self, EmptyCorpusError> {
        let configured = word_lists.len();
        word_lists.retain(|word_list| {
            if word_list.is_empty() {
                warn!("ignoring {}, it has no words", word_list.name());
            }
            !word_list.is_empty()
        });
        if word_lists.is_empty() {
            return Err(EmptyCorpusError::new(configured));
        }
        Ok(Corpus { word_lists })
    }

    /// How many word lists there are. Never zero.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_lists.len()
    }

    /// Iterate through the non-empty word lists making up the corpus.
    pub fn iter(&self) -> slice::Iter<'_, WordList> {
        self.word_lists.iter()
    }

    /// Pick a word list at random, then a word from it at random.
    ///
    /// Word lists are equally likely regardless of their length, so words in
    /// short lists come up more often than words in long ones.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let word_list = self
            .word_lists
            .choose(rng)
            .expect("corpus always holds a word list");
        &word_list[rng.random_range(0..word_list.len())]
    }
}
