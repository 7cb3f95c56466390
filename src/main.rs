use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use vigenere::analysis::key_length::DEFAULT_MAX_KEY_LENGTH;
use vigenere::analysis::{kasiski_examination_range, kasiski_factor_counts, rank_key_lengths};
use vigenere::{
    decrypt, encrypt, index_of_coincidence, normalize, AnalysisConfig, Cryptanalyst, Language,
};

/// Vigenere cipher and ciphertext-only cryptanalysis
#[derive(Parser, Debug)]
#[command(name = "vigenere", version, about)]
struct Cli {
    /// Log analysis steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt text with a key
    Encrypt {
        #[arg(short, long)]
        key: String,
        #[command(flatten)]
        input: Input,
    },
    /// Decrypt text with a key
    Decrypt {
        #[arg(short, long)]
        key: String,
        #[command(flatten)]
        input: Input,
    },
    /// Index of Coincidence of the text
    Ic {
        #[command(flatten)]
        input: Input,
    },
    /// Rank candidate key lengths by mean coset IC
    KeyLength {
        #[arg(long, default_value_t = DEFAULT_MAX_KEY_LENGTH)]
        max_key_length: usize,
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        input: Input,
    },
    /// Kasiski examination: distances between repeated fragments
    Kasiski {
        #[arg(long, default_value_t = 3)]
        min_length: usize,
        /// Fragment lengths stay below this cap
        #[arg(long, default_value_t = 10)]
        length_cap: usize,
        /// Largest distance factor counted
        #[arg(long, default_value_t = DEFAULT_MAX_KEY_LENGTH)]
        max_factor: usize,
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        input: Input,
    },
    /// Recover key and plaintext without the key
    Break {
        /// Plaintext language: pt or en
        #[arg(short, long, default_value = "pt")]
        language: Language,
        #[arg(long, default_value_t = DEFAULT_MAX_KEY_LENGTH)]
        max_key_length: usize,
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// Text to process; read from stdin when omitted
    #[arg(short, long)]
    text: Option<String>,
}

impl Input {
    fn read(self) -> Result<String> {
        match self.text {
            Some(text) => Ok(text),
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read text from stdin")?;
                Ok(buf)
            }
        }
    }
}

#[derive(Serialize)]
struct KasiskiReport {
    letters: usize,
    distances: vigenere::DistanceHistogram,
    factors: std::collections::BTreeMap<usize, usize>,
}

/// Initialize tracing subscriber for debug output
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Rejects limits that `AnalysisConfig::validate` refuses.
fn checked(config: AnalysisConfig) -> Result<AnalysisConfig> {
    config.validate().context("Invalid analysis limits")?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Encrypt { key, input } => {
            println!("{}", encrypt(&input.read()?, &key).context("Encryption failed")?);
        }
        Command::Decrypt { key, input } => {
            println!("{}", decrypt(&input.read()?, &key).context("Decryption failed")?);
        }
        Command::Ic { input } => {
            println!("{:.6}", index_of_coincidence(&input.read()?));
        }
        Command::KeyLength {
            max_key_length,
            json,
            input,
        } => {
            let config = checked(AnalysisConfig::default().with_max_key_length(max_key_length))?;
            let scores = rank_key_lengths(&input.read()?, config.max_key_length);
            if json {
                print_json(&scores)?;
            } else {
                for score in &scores {
                    println!("{:3}  {:.6}", score.length, score.mean_ic);
                }
            }
        }
        Command::Kasiski {
            min_length,
            length_cap,
            max_factor,
            json,
            input,
        } => {
            let config =
                checked(AnalysisConfig::default().with_kasiski_lengths(min_length, length_cap))?;
            let text = input.read()?;
            let distances = kasiski_examination_range(
                &text,
                config.kasiski_min_length,
                config.kasiski_length_cap,
            );
            let factors = kasiski_factor_counts(&distances, max_factor);
            let report = KasiskiReport {
                letters: normalize(&text).len(),
                distances,
                factors,
            };
            if json {
                print_json(&report)?;
            } else {
                println!("Distances ({} letters):", report.letters);
                for (distance, count) in &report.distances {
                    println!("  {:5} -> {}", distance, count);
                }
                let mut factors: Vec<_> = report.factors.into_iter().collect();
                factors.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
                println!("Most common factors:");
                for (factor, count) in factors.iter().take(8) {
                    println!("  {:2} -> {}", factor, count);
                }
            }
        }
        Command::Break {
            language,
            max_key_length,
            json,
            input,
        } => {
            let config = checked(AnalysisConfig::default().with_max_key_length(max_key_length))?;
            let analyst = Cryptanalyst::with_config(language, config)?;
            let result = analyst.analyze(&input.read()?);
            if json {
                print_json(&result)?;
            } else {
                println!("Key length: {}", result.key_length);
                println!("Key:        {}", result.key);
                if result.reduced_key() != result.key {
                    println!("Reduced:    {}", result.reduced_key());
                }
                println!("Plaintext:  {}", result.plaintext);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_max_key_length_rejected_everywhere() {
        let zero = AnalysisConfig::default().with_max_key_length(0);
        assert!(checked(zero).is_err());
        assert!(checked(AnalysisConfig::default().with_max_key_length(1)).is_ok());
    }

    #[test]
    fn test_empty_kasiski_range_rejected() {
        assert!(checked(AnalysisConfig::default().with_kasiski_lengths(5, 5)).is_err());
        assert!(checked(AnalysisConfig::default().with_kasiski_lengths(0, 5)).is_err());
        assert!(checked(AnalysisConfig::default().with_kasiski_lengths(2, 6)).is_ok());
    }

    #[test]
    fn test_kasiski_flags() {
        let cli = Cli::try_parse_from(["vigenere", "kasiski", "--text", "ABC"]).unwrap();
        match cli.command {
            Command::Kasiski {
                min_length,
                length_cap,
                max_factor,
                ..
            } => {
                assert_eq!((min_length, length_cap), (3, 10));
                assert_eq!(max_factor, DEFAULT_MAX_KEY_LENGTH);
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli =
            Cli::try_parse_from(["vigenere", "kasiski", "--max-factor", "6", "-t", "ABC"]).unwrap();
        assert!(matches!(cli.command, Command::Kasiski { max_factor: 6, .. }));
    }

    #[test]
    fn test_key_length_flag_default() {
        let cli = Cli::try_parse_from(["vigenere", "key-length", "-t", "ABC"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::KeyLength { max_key_length: DEFAULT_MAX_KEY_LENGTH, .. }
        ));
    }
}
