use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use paraguard_lib::services::{
    detect_manipulation_files, read_document, score_manipulation, AppConfig, ConfigStore,
    EnglishResources, Paraphraser,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "paraguard")]
#[command(about = "Score documents for paraphrase manipulation, or paraphrase them")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate whether a .docx or .txt document has been manipulated
    Detect {
        file: PathBuf,

        /// Original document to compare against
        #[arg(long)]
        original: Option<PathBuf>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rewrite a document sentence by sentence
    Paraphrase {
        file: PathBuf,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Write the paraphrase here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Also score the paraphrase against the source
        #[arg(long)]
        score: bool,
    },
    /// Show or initialize the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init,
}

fn config_store(path: Option<PathBuf>) -> Result<ConfigStore> {
    match path {
        Some(file) => Ok(ConfigStore::at_file(file)),
        None => ConfigStore::default_config_dir()
            .map(ConfigStore::new)
            .ok_or_else(|| anyhow!("no config directory available; pass --config")),
    }
}

fn main() -> Result<()> {
    paraguard_lib::init_logging();
    let cli = Cli::parse();

    let store = config_store(cli.config)?;
    let config: AppConfig = store.load().map_err(|e| anyhow!(e))?;

    match cli.command {
        Command::Detect { file, original, json } => {
            let resources = EnglishResources::from_config(&config.lexicon)?;
            let report = detect_manipulation_files(&resources, &file, original.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Manipulation score: {:.4}", report.total_score);
                println!("{}", report.label.describe());
            }
        }
        Command::Paraphrase { file, seed, out, score } => {
            let resources = EnglishResources::from_config(&config.lexicon)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let text = read_document(&file)?;
            let output = Paraphraser::new(&config.paraphrase).paraphrase(&resources, &text, &mut rng);

            match out {
                Some(path) => {
                    std::fs::write(&path, &output)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), "paraphrase.written");
                }
                None => println!("{}", output),
            }

            if score {
                let verdict = score_manipulation(&resources, &output, Some(text.as_str()))?;
                eprintln!(
                    "Manipulation score: {:.4} ({})",
                    verdict.total_score,
                    verdict.label.describe()
                );
            }
        }
        Command::Config { action } => match action {
            ConfigAction::Show => {
                eprintln!("# {}", store.config_file().display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init => {
                store.save(&AppConfig::default()).map_err(|e| anyhow!(e))?;
                println!("Wrote {}", store.config_file().display());
            }
        },
    }

    Ok(())
}
