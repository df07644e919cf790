//! Ladder CLI - Command-line interface for word ladder graphs
//!
//! Loads a word list, builds the one-letter-substitution graph and
//! answers ladder queries over it.

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::LadderConfig;

#[derive(Parser)]
#[command(name = "ladder")]
#[command(author = "Ladder Contributors")]
#[command(version)]
#[command(about = "Word ladders over one-letter-substitution graphs", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Where the words come from. Overrides the config file.
#[derive(Args)]
struct SourceArgs {
    /// Config file (defaults to ./ladder.json when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dictionary file, plain or gzip; `-` reads stdin
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// Word length: leading characters taken from each line
    #[arg(short = 'n', long, global = true)]
    length: Option<usize>,

    /// Discover edges on all cores
    #[arg(long, global = true)]
    parallel: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write ladder.json in the current directory from the given flags
    Init,

    /// Build the graph and print node, edge and component counts
    Stats {
        /// Also report the word farthest from this one
        #[arg(long)]
        from: Option<String>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Find the shortest ladder between two words
    Path {
        source: String,
        target: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Run the configured ladder pairs
    Ladders,

    /// List the one-letter neighbors of a word
    Neighbors { word: String },

    /// List connected components, largest first
    Components {
        /// Maximum components to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Export the graph to JSON
    Export {
        /// Output file
        #[arg(short, long, default_value = "ladder-graph.json")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = resolve_config(&cli.source).and_then(|config| match cli.command {
        Commands::Init => commands::init(&config),
        Commands::Stats { from, json } => commands::stats(&config, from.as_deref(), json),
        Commands::Path {
            source,
            target,
            json,
        } => commands::path(&config, &source, &target, json),
        Commands::Ladders => commands::ladders(&config),
        Commands::Neighbors { word } => commands::neighbors(&config, &word),
        Commands::Components { limit } => commands::components(&config, limit),
        Commands::Export { output } => commands::export(&config, &output),
    });

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Loads the config file and applies command-line overrides.
fn resolve_config(args: &SourceArgs) -> commands::Result<LadderConfig> {
    let mut config = LadderConfig::load(args.config.as_deref())?;

    if let Some(dict) = &args.dict {
        config.dictionary = Some(dict.clone());
    }
    if let Some(length) = args.length {
        config.words.word_length = length;
    }
    if args.parallel {
        config.build.parallel = true;
    }

    Ok(config)
}
