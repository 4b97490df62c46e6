use rand::{Rng, seq::SliceRandom};

use crate::Corpus;

/// How the words of a passphrase are cased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Casing {
    /// Words are used exactly as they appear in the word lists.
    #[default]
    Normal,
    /// The first character of every word is uppercased, the rest are left
    /// alone (`CorrectHorseBatteryStaple` when joined without a separator).
    CapitalizeFirst,
}

impl Casing {
    /// Apply the casing to a single word.
    #[must_use]
    pub fn apply(self, word: &str) -> String {
        match self {
            Casing::Normal => word.to_owned(),
            Casing::CapitalizeFirst => capitalize_first(word),
        }
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// What passphrases should look like.
///
/// Shared by every generation in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    /// Keep adding words until there are at least this many characters,
    /// not counting separators.
    pub min_chars: usize,
    /// Keep adding words until there are at least this many.
    pub min_words: usize,
    /// Put between words. May be empty.
    pub separator: String,
    /// How to case each word.
    pub casing: Casing,
    /// Words that go into every passphrase, in addition to random ones.
    ///
    /// Duplicates are kept; each copy is included.
    pub included: Vec<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        GenerationParams {
            min_chars: 12,
            min_words: 4,
            separator: String::new(),
            casing: Casing::Normal,
            included: Vec::new(),
        }
    }
}

impl GenerationParams {
    /// Set the minimum number of characters.
    #[must_use]
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Set the minimum number of words.
    #[must_use]
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Set what goes between words.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set how words are cased.
    #[must_use]
    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }

    /// Set the words included in every passphrase, replacing any already
    /// set.
    #[must_use]
    pub fn with_included(
        mut self,
        included: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.included = included.into_iter().map(Into::into).collect();
        self
    }
}

/// The words of one passphrase, before they are joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passphrase {
    words: Vec<String>,
    chars: usize,
}

impl Passphrase {
    /// Start with the included words, then draw from `corpus` until both
    /// minimums are met.
    pub(crate) fn accumulate<R: Rng + ?Sized>(
        corpus: &Corpus,
        params: &GenerationParams,
        rng: &mut R,
    ) -> Self {
        let mut passphrase = Passphrase {
            words: Vec::new(),
            chars: 0,
        };
        params
            .included
            .iter()
            .for_each(|word| passphrase.push(word.clone()));

        while passphrase.words.len() < params.min_words
            || passphrase.chars < params.min_chars
        {
            passphrase.push(corpus.draw(rng).to_owned());
        }
        passphrase
    }

    fn push(&mut self, word: String) {
        self.chars += word.chars().count();
        self.words.push(word);
    }

    pub(crate) fn apply_casing(&mut self, casing: Casing) {
        if casing == Casing::Normal {
            return;
        }
        self.words
            .iter_mut()
            .for_each(|word| *word = casing.apply(word));
    }

    pub(crate) fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
    }

    /// The words, in output order.
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// How many characters the words had when they were drawn.
    ///
    /// This is what the minimum character count is checked against.
    #[inline]
    #[must_use]
    pub const fn char_count(&self) -> usize {
        self.chars
    }

    /// Join the words with `separator`.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.words.join(separator)
    }
}
