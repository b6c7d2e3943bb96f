//! CLI frontend for the Yijing coin oracle.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "yj",
    about = "Yijing: cast and read I Ching hexagrams with three coins",
    version,
    propagate_version = true
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Toss six lines and print the reading
    Cast {
        /// RNG seed for a reproducible cast (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// The question to cast for
        #[arg(short, long)]
        question: Option<String>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,

        /// Write the reading to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show one hexagram by number or name
    Show {
        /// King Wen number (1-64), pinyin or English name
        hexagram: String,

        /// Print the hexagram as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all 64 hexagrams
    List {
        /// Only hexagrams containing this trigram (name or image)
        #[arg(short, long)]
        trigram: Option<String>,
    },

    /// Start an interactive divination session
    Session {
        /// RNG seed for deterministic tosses
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// The question to cast for
        #[arg(short, long)]
        question: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Cast {
            seed,
            question,
            json,
            output,
        } => commands::cast::run(seed, question.as_deref(), json, output.as_deref()),
        Commands::Show { hexagram, json } => commands::show::run(&hexagram, json),
        Commands::List { trigram } => commands::list::run(trigram.as_deref()),
        Commands::Session { seed, question } => commands::session::run(seed, question.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
