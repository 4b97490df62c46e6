#![cfg_attr(docsrs, feature(doc_cfg))]
//! `correcthorse` generates passphrases in the spirit of
//! [xkcd #936](https://xkcd.com/936/): random words from one or more word
//! lists, strung together until the passphrase is both long enough and has
//! enough words.
//!
//! ```no_run
//! use correcthorse::{
//!     Corpus, GenerationParams, Generator, SeedSource, WordSource,
//! };
//!
//! let corpus = Corpus::load(&[WordSource::new("english")])?;
//! let params = GenerationParams::default().with_separator("-");
//! let generator = Generator::new(&corpus, &params);
//! for passphrase in generator.batch(3, SeedSource::Entropy) {
//!     println!("{passphrase}");
//! }
//! # Ok::<(), correcthorse::errors::CorrectHorseError>(())
//! ```
//!
//! Relative word list names are looked up in [`WORDLIST_DIR`].

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

pub use crate::{
    corpus::Corpus,
    passphrase::{Casing, GenerationParams, Passphrase},
    word_lists::{WORDLIST_DIR, WordList, WordSource, load_word_lists},
};

mod corpus;
pub mod errors;
mod passphrase;
mod word_lists;

/// Produces passphrases from a [`Corpus`], shaped by [`GenerationParams`].
///
/// Cheap to create; it only borrows its inputs.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    corpus: &'a Corpus,
    params: &'a GenerationParams,
}

impl<'a> Generator<'a> {
    /// Create a new `Generator`.
    #[inline]
    #[must_use]
    pub const fn new(corpus: &'a Corpus, params: &'a GenerationParams) -> Self {
        Generator { corpus, params }
    }

    /// Draw the words of a single passphrase.
    ///
    /// The words are cased and shuffled, ready to be joined.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Passphrase {
        let mut passphrase =
            Passphrase::accumulate(self.corpus, self.params, rng);
        passphrase.apply_casing(self.params.casing);
        passphrase.shuffle(rng);
        passphrase
    }

    /// Generate a single passphrase.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.draw(rng).join(&self.params.separator)
    }

    /// Generate `count` passphrases.
    ///
    /// Each passphrase gets its own random number generator from `seeds`, so
    /// with [`SeedSource::Fixed`] the result is the same whether or not the
    /// passphrases were generated in parallel.
    #[must_use]
    pub fn batch(&self, count: usize, seeds: SeedSource) -> Vec<String> {
        debug!("generating {count} passphrase(s), seeds: {seeds:?}");

        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;

            (0..count)
                .into_par_iter()
                .map(|index| self.generate(&mut seeds.rng_for(index)))
                .collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            (0..count)
                .map(|index| self.generate(&mut seeds.rng_for(index)))
                .collect()
        }
    }
}

/// Where the random number generator for each passphrase in a batch comes
/// from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SeedSource {
    /// Seed every generator from the operating system.
    #[default]
    Entropy,
    /// Derive every generator from this seed and the passphrase's position in
    /// the batch. Output is reproducible, and so **not secret**.
    Fixed(u64),
}

impl SeedSource {
    /// Create the random number generator for the passphrase at `index`.
    #[must_use]
    pub fn rng_for(self, index: usize) -> StdRng {
        match self {
            SeedSource::Entropy => StdRng::from_os_rng(),
            SeedSource::Fixed(seed) => {
                StdRng::seed_from_u64(seed.wrapping_add(index as u64))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horse_corpus() -> Corpus {
        Corpus::assemble(vec![WordList::define(
            "xkcd",
            ["correct", "horse", "battery", "staple", "pass", "word"],
        )])
        .unwrap()
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let corpus = horse_corpus();
        let params = GenerationParams::default();
        let generator = Generator::new(&corpus, &params);

        let first = generator.generate(&mut SeedSource::Fixed(9).rng_for(0));
        let second = generator.generate(&mut SeedSource::Fixed(9).rng_for(0));
        assert_eq!(first, second);
    }

    #[test]
    fn entropy_seeded_passphrases_differ() {
        let corpus = horse_corpus();
        let params = GenerationParams {
            min_words: 8,
            ..Default::default()
        };
        let batch =
            Generator::new(&corpus, &params).batch(2, SeedSource::Entropy);
        // 6^8 possible passphrases, a collision is vanishingly unlikely
        assert_ne!(batch[0], batch[1]);
    }

    #[test]
    fn batch_matches_sequential_generation() {
        let corpus = horse_corpus();
        let params = GenerationParams {
            separator: String::from(" "),
            ..Default::default()
        };
        let generator = Generator::new(&corpus, &params);
        let seeds = SeedSource::Fixed(1234);

        let sequential = (0..16)
            .map(|index| generator.generate(&mut seeds.rng_for(index)))
            .collect::<Vec<_>>();
        assert_eq!(generator.batch(16, seeds), sequential);
    }

    #[test]
    fn batch_of_zero_is_empty() {
        let corpus = horse_corpus();
        let params = GenerationParams::default();
        let generator = Generator::new(&corpus, &params);
        assert!(generator.batch(0, SeedSource::Entropy).is_empty());
    }

    #[test]
    fn draw_reports_pre_join_lengths() {
        let corpus = horse_corpus();
        let params = GenerationParams::default();
        let generator = Generator::new(&corpus, &params);
        let mut rng = SeedSource::Fixed(77).rng_for(0);
        let passphrase = generator.draw(&mut rng);
        let counted = passphrase
            .words()
            .iter()
            .map(|word| word.chars().count())
            .sum::<usize>();
        assert_eq!(passphrase.char_count(), counted);
        assert!(passphrase.char_count() >= 12);
        assert!(passphrase.words().len() >= 4);
    }
}
