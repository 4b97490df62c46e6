#![allow(missing_docs)]

mod config;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use correcthorse::{Corpus, Generator};
use env_logger::Env;
use log::{error, info};

use crate::config::{Args, Config};

fn main() -> ExitCode {
    match _main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why:#}");
            ExitCode::FAILURE
        },
    }
}

fn _main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbosity.into())
        .parse_env(Env::new().filter("CORRECTHORSE_LOG"))
        .init();

    let config = Config::from(args);
    run(&config, &mut io::stdout().lock())
}

/// Generate the configured passphrases and write them to `out`, one per line.
///
/// Nothing is written unless every word list loaded.
fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let corpus =
        Corpus::load(&config.sources).context("failed to load word lists")?;
    info!(
        "drawing from {} of {} word list(s)",
        corpus.len(),
        config.sources.len(),
    );

    let passphrases = Generator::new(&corpus, &config.params)
        .batch(config.count, config.seeds);

    passphrases
        .iter()
        .try_for_each(|passphrase| writeln!(out, "{passphrase}"))
        .context("failed to write passphrases")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use correcthorse::{GenerationParams, SeedSource, WordSource};
    use tempfile::TempDir;

    use super::*;

    fn config_for(dir: &TempDir, lists: &[&str], count: usize) -> Config {
        Config {
            sources: lists
                .iter()
                .map(|name| WordSource::resolve(*name, dir.path()))
                .collect(),
            params: GenerationParams::default().with_separator("-"),
            count,
            seeds: SeedSource::Fixed(0),
        }
    }

    #[test]
    fn writes_one_line_per_passphrase() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("xkcd"), "correct\nhorse\nbattery\n")
            .unwrap();

        let mut out = Vec::new();
        run(&config_for(&dir, &["xkcd"], 3), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|line| line.split('-').count() >= 4));
    }

    #[test]
    fn empty_word_lists_write_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("blank"), "\n  \n").unwrap();
        fs::write(dir.path().join("also_blank"), "").unwrap();

        let mut out = Vec::new();
        let err = run(&config_for(&dir, &["blank", "also_blank"], 3), &mut out)
            .unwrap_err();
        assert!(out.is_empty());
        assert!(
            format!("{err:#}").contains("no non-empty wordlist found"),
            "{err:#}",
        );
    }

    #[test]
    fn unreadable_word_list_writes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("present"), "word\n").unwrap();

        let mut out = Vec::new();
        let err = run(&config_for(&dir, &["present", "absent"], 3), &mut out)
            .unwrap_err();
        assert!(out.is_empty());
        assert!(format!("{err:#}").contains("absent"), "{err:#}");
    }

    #[test]
    fn zero_count_writes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("xkcd"), "staple\n").unwrap();

        let mut out = Vec::new();
        run(&config_for(&dir, &["xkcd"], 0), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
