use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use lexitype::config;
use lexitype::lexicon::Lexicon;
use lexitype::pipeline::QueryPipeline;
use lexitype::resolver::LexicalResolver;

/// Offline as-you-type dictionary over the WordNet database.
#[derive(Parser)]
#[command(name = "lexitype", about = "Offline as-you-type dictionary")]
struct Cli {
    /// Directory containing the WordNet database files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a single word
    Lookup {
        /// The word to look up
        word: String,
        /// Output the raw senses as JSON instead of the formatted document
        #[arg(short, long)]
        json: bool,
    },
    /// Interactive prompt: each entered line is looked up
    Interactive,
    /// Show database location and per-part-of-speech counts
    Status,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> lexitype::errors::Result<()> {
    let cfg = config::load_config()?;
    let data_dir = config::resolve_data_dir(cli.data_dir.clone(), &cfg)?;

    // The database loads exactly once, before any query is served. A load
    // failure aborts here rather than answering queries against a partially
    // loaded database.
    let lexicon = Arc::new(Lexicon::load(&data_dir)?);

    match cli.command {
        Commands::Lookup { word, json } => {
            let resolver = LexicalResolver::new(lexicon);
            if json {
                let senses = resolver.resolve(&word);
                println!("{}", serde_json::to_string_pretty(&senses)?);
            } else {
                let pipeline = QueryPipeline::new(resolver);
                println!("{}", pipeline.document_for(&word));
            }
        }
        Commands::Interactive => {
            let pipeline = QueryPipeline::new(LexicalResolver::new(lexicon));
            loop {
                let query = match dialoguer::Input::<String>::new()
                    .with_prompt("word")
                    .allow_empty(true)
                    .interact_text()
                {
                    Ok(q) => q,
                    // EOF or interrupt ends the session.
                    Err(_) => break,
                };
                println!("{}", pipeline.document_for(&query));
            }
        }
        Commands::Status => {
            println!("Database: {}", data_dir.display());
            for (pos, counts) in lexicon.stats() {
                println!(
                    "  {:<5} {} lemmas, {} synsets",
                    pos.as_str(),
                    counts.lemmas,
                    counts.synsets
                );
            }
        }
    }

    Ok(())
}
