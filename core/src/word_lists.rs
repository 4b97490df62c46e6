use std::{
    fs, io,
    ops::{Deref, Index},
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

/// The directory relative word list names are looked up in.
pub const WORDLIST_DIR: &str = "/usr/share/correcthorse";

/// Where to find a word list.
///
/// Absolute paths are used as given, anything else is looked up below a base
/// directory ([`WORDLIST_DIR`] unless specified otherwise).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordSource {
    name: String,
    path: PathBuf,
}

impl WordSource {
    /// Resolve a word list name or path against [`WORDLIST_DIR`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        WordSource::resolve(name, WORDLIST_DIR)
    }

    /// Resolve a word list name or path against `base`.
    ///
    /// `base` is ignored if `name` is an absolute path.
    #[must_use]
    pub fn resolve(name: impl Into<String>, base: impl AsRef<Path>) -> Self {
        let name = name.into();
        let as_given = Path::new(&name);
        let path = if as_given.is_absolute() {
            as_given.to_owned()
        } else {
            base.as_ref().join(as_given)
        };
        WordSource { name, path }
    }

    /// The name the source was created from.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved path of the word list file.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A named list of words.
#[derive(Debug, Clone)]
pub struct WordList {
    name: String,
    words: Vec<String>,
}

impl WordList {
    /// Load a word list from a file.
    ///
    /// The file is expected to contain one word per line. Surrounding
    /// whitespace is trimmed and blank lines are skipped, so a word list may
    /// well end up empty.
    pub fn load(source: &WordSource) -> Result<Self, WordListError> {
        let path = source.path();
        let file_content = fs::read_to_string(path).map_err(|io_err| {
            WordListError::FailedToRead(path.to_owned(), io_err)
        })?;
        let word_list = WordList {
            name: source.name().to_owned(),
            words: newline_delimited_words(file_content),
        };
        debug!(
            "loaded {} words for {} from {}",
            word_list.len(),
            word_list.name(),
            path.display(),
        );
        Ok(word_list)
    }

    /// Create a new word list from an iterable.
    ///
    /// Words are taken as-is, without trimming.
    pub fn define(
        name: impl Into<String>,
        words: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        WordList {
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the name of the word list.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get how many words there are in the word list.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there are no words in the word list.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Index<usize> for WordList {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        self.words.index(index).deref()
    }
}

/// Load every source, keeping the order they were given in.
///
/// Sources are read in parallel when the `rayon` feature is enabled. Any
/// failure aborts the whole load; there are no partial results.
pub fn load_word_lists(
    sources: &[WordSource],
) -> Result<Vec<WordList>, WordListError> {
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;

        sources.par_iter().map(WordList::load).collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        sources.iter().map(WordList::load).collect()
    }
}

fn newline_delimited_words(input: impl AsRef<str>) -> Vec<String> {
    input
        .as_ref()
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

/// An error encountered while loading a [`WordList`].
#[derive(Debug, Error)]
pub enum WordListError {
    /// Unable to open or read the word list file.
    #[error("failed to read from {}: {}", .0.display(), .1)]
    FailedToRead(PathBuf, io::Error),
}
