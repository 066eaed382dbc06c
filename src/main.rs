use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use spacegroup_symbols::config::DEFAULT_LOG_FILTER;
use spacegroup_symbols::{
    canonicalize, digest, generate_operations, is_valid, normalize_to_formatted,
};

#[derive(Parser)]
#[command(name = "spacegroup-symbols")]
#[command(about = "Parse, validate and canonicalize Hermann-Mauguin space group symbols")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical spelling of a symbol
    Canonicalize {
        /// Space group symbol, free-form or formatted
        symbol: String,
    },
    /// Check whether a symbol names a space group
    Validate {
        /// Space group symbol, free-form or formatted
        symbol: String,
    },
    /// Print the digested form of a symbol as JSON
    Digest {
        /// Space group symbol, free-form or formatted
        symbol: String,
    },
    /// List the symmetry operations a symbol generates
    Operations {
        /// Space group symbol, free-form or formatted
        symbol: String,

        /// Print matrices as JSON instead of coordinate triplets
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { DEFAULT_LOG_FILTER };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Canonicalize { symbol } => {
            let formatted = normalize_to_formatted(&symbol)?;
            info!("canonicalizing '{formatted}'");
            println!("{}", canonicalize(&formatted)?);
        }
        Commands::Validate { symbol } => {
            let valid = normalize_to_formatted(&symbol)
                .map(|formatted| is_valid(&formatted))
                .unwrap_or(false);
            println!("{}", if valid { "valid" } else { "invalid" });
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Digest { symbol } => {
            let formatted = normalize_to_formatted(&symbol)?;
            let digested = digest(&formatted)?;
            println!("{}", serde_json::to_string_pretty(&digested)?);
        }
        Commands::Operations { symbol, json } => {
            let formatted = normalize_to_formatted(&symbol)?;
            let operations = generate_operations(&formatted)?;
            info!("'{formatted}' generates {} operations", operations.len());
            if json {
                println!("{}", serde_json::to_string_pretty(&operations)?);
            } else {
                for operation in &operations {
                    println!("{}", operation.to_triplet());
                }
            }
        }
    }
    Ok(())
}
