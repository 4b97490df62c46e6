use std::convert::Infallible;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use correcthorse::{Casing, GenerationParams, SeedSource, WordSource};
use log::debug;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Minimum number of characters, not counting separators
    #[arg(short = 'c', long = "chars", value_name = "N", default_value_t = 12)]
    min_chars: usize,

    /// Minimum number of words
    #[arg(short = 'w', long = "words", value_name = "N", default_value_t = 4)]
    min_words: usize,

    /// Word list(s) to use; names without a leading / are looked up in
    /// /usr/share/correcthorse
    #[arg(
        short = 'l',
        long = "list",
        value_name = "LIST",
        value_delimiter = ',',
        value_parser = trimmed,
        default_value = "english",
    )]
    lists: Vec<String>,

    /// Word(s) to include in every passphrase
    #[arg(
        short = 'i',
        long = "include",
        visible_alias = "inc",
        value_name = "WORD",
        value_delimiter = ',',
        value_parser = trimmed,
    )]
    include: Vec<String>,

    /// Separate words with SEP
    #[arg(
        short = 's',
        long = "sep",
        value_name = "SEP",
        default_value = "",
        allow_hyphen_values = true
    )]
    separator: String,

    /// Capitalize the first letter of every word
    #[arg(short = 'u', long = "camelcase", visible_alias = "camel")]
    camel_case: bool,

    /// Seed the random number generator. Output becomes reproducible, so
    /// don't use the passphrases for anything that matters
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of passphrases to generate. Only the last value counts; if it
    /// isn't a number, one passphrase is generated
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    count: Vec<String>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

fn trimmed(value: &str) -> Result<String, Infallible> {
    Ok(value.trim().to_owned())
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug)]
pub struct Config {
    pub sources: Vec<WordSource>,
    pub params: GenerationParams,
    pub count: usize,
    pub seeds: SeedSource,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let count = match args.count.last() {
            None => 1,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                debug!("\"{raw}\" isn't a count, generating one passphrase");
                1
            }),
        };
        Config {
            sources: args.lists.into_iter().map(WordSource::new).collect(),
            params: GenerationParams::default()
                .with_min_chars(args.min_chars)
                .with_min_words(args.min_words)
                .with_separator(args.separator)
                .with_casing(if args.camel_case {
                    Casing::CapitalizeFirst
                } else {
                    Casing::Normal
                })
                .with_included(args.include),
            count,
            seeds: args.seed.map_or(SeedSource::Entropy, SeedSource::Fixed),
        }
    }
}
