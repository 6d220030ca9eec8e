mod ui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use passmask::charset::CharClasses;
use passmask::crack::{self, CancelToken, CrackTarget};
use passmask::engine::{ClassSource, Engine};
use passmask::{entropy, lexicon, loader, mask};

#[derive(Parser)]
#[command(
    name = "passmask",
    version,
    about = "Mask-based passphrase entropy estimation and SHA-1 hash recovery"
)]
struct Cli {
    /// JSON dictionary of words and their parts of speech; only the fixed
    /// character classes are available when absent
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// Named catalog filter committed before the operation (requires --dict)
    #[arg(short, long, global = true)]
    filter: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate the possibility space and entropy of a mask
    ///
    /// Example: passmask analyze "lower lower digit digit"
    Analyze {
        /// Space-delimited class mask, e.g. "lower lower digit"
        mask: String,
    },

    /// Search a mask's candidate space for a digest or a digest set
    ///
    /// With --digest the first hit stops the search and prints the
    /// recovered plaintext; with --digest-file every candidate is tested
    /// and matches are counted.
    Crack {
        /// Space-delimited class mask describing the candidate shape
        mask: String,

        /// Hex SHA-1 digest to recover a plaintext for
        #[arg(long, conflicts_with = "digest_file")]
        digest: Option<String>,

        /// JSON array of hex SHA-1 digests to count matches against
        #[arg(long)]
        digest_file: Option<PathBuf>,

        /// Wall-clock budget in seconds; 0 means unbounded
        #[arg(short, long, default_value_t = 0)]
        timeout: u64,

        /// Suppress elapsed-time reporting
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate a random passphrase matching a mask
    Sample {
        /// Space-delimited class mask
        mask: String,
    },

    /// Translate a ?u?l?d?s template into this tool's mask grammar
    Translate {
        /// External template, e.g. "?l?l?d?d"
        template: String,
    },

    /// Show per-category entry counts for the dictionary catalog
    Counts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.dict {
        Some(path) => {
            let mut lexicon = loader::load_lexicon(path)
                .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
            lexicon.seed_char_classes(&CharClasses::new());

            if let Some(name) = cli.filter.as_deref() {
                let predicate = lexicon::builtin_filter(name).with_context(|| {
                    format!(
                        "Unknown filter \"{}\" (expected one of: {})",
                        name,
                        lexicon::FILTER_NAMES.join(", ")
                    )
                })?;
                lexicon.retain(predicate);
            }

            if let Command::Counts = cli.command {
                let options = ui::DisplayOptions::detect(false);
                ui::display_counts(&lexicon.category_counts(), &options);
                return Ok(());
            }

            run(Engine::new(lexicon), cli.command)
        }
        None => {
            if cli.filter.is_some() {
                anyhow::bail!("--filter requires a dictionary (--dict)");
            }
            run(Engine::new(CharClasses::new()), cli.command)
        }
    }
}

fn run<S: ClassSource>(mut engine: Engine<S>, command: Command) -> Result<()> {
    match command {
        Command::Analyze { mask } => {
            let options = ui::DisplayOptions::detect(false);
            let tokens = mask::parse(&mask);
            let possibilities = engine.possibility_count(&tokens)?;
            let bits = entropy::bits_of_entropy(possibilities)?;
            let time = entropy::crack_time(possibilities, entropy::HASH_RATE);
            ui::display_analysis(possibilities, bits, time, &options);
        }

        Command::Crack {
            mask,
            digest,
            digest_file,
            timeout,
            quiet,
        } => {
            let options = ui::DisplayOptions::detect(quiet);

            let target = match (digest, digest_file) {
                (Some(digest), None) => CrackTarget::single(&digest),
                (None, Some(path)) => CrackTarget::set(
                    loader::load_digests(&path)
                        .with_context(|| format!("Failed to load digests {}", path.display()))?,
                ),
                _ => anyhow::bail!("Provide exactly one of --digest or --digest-file"),
            };

            let tokens = mask::parse(&mask);
            let lists = engine.resolve_mask(&tokens)?;
            let cancel = CancelToken::new();

            let outcome = ui::show_progress(&options, "Enumerating candidates...", || {
                crack::search(&lists, &target, Duration::from_secs(timeout), &cancel)
            });

            ui::display_crack(&outcome, &options);
        }

        Command::Sample { mask } => {
            let tokens = mask::parse(&mask);
            let passphrase = engine.sample(&tokens)?;
            ui::display_sample(&passphrase);
        }

        Command::Translate { template } => {
            println!("{}", mask::from_template(&template));
        }

        Command::Counts => anyhow::bail!("counts requires a dictionary (--dict)"),
    }

    Ok(())
}
