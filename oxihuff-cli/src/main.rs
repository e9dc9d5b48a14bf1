//! OxiHuff CLI - Huffman file compressor
//!
//! Compresses single files with a static Huffman code whose tree travels in
//! the file header.

mod commands;
mod logger;
mod utils;

use clap::{ArgAction, Parser, Subcommand};
use commands::{cmd_compress, cmd_decompress, cmd_info, cmd_test};
use oxihuff_tree::DebugLevel;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "Pure Rust Huffman file compressor")]
#[command(long_about = "
OxiHuff compresses a file with a Huffman code built from its own byte
frequencies. The code tree is stored in front of the data, so a compressed
file decodes on its own.

Examples:
  oxihuff compress notes.txt
  oxihuff compress notes.txt -o notes.huff
  oxihuff decompress notes.txt.hf
  oxihuff info notes.txt.hf --json
  oxihuff test notes.txt.hf
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (default: <input>.hf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output (-v for summaries, -vv for per-symbol detail)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output file (default: input without .hf, or <input>.out)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output (-v for summaries, -vv for per-symbol detail)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },

    /// Show the tree header of a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Test compressed file integrity
    #[command(alias = "t")]
    Test {
        /// Compressed file to test
        input: PathBuf,

        /// Verbose output
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },
}

impl Commands {
    fn verbosity(&self) -> u8 {
        match self {
            Commands::Compress { verbose, .. }
            | Commands::Decompress { verbose, .. }
            | Commands::Test { verbose, .. } => *verbose,
            Commands::Info { .. } => 0,
        }
    }
}

/// Map the number of `-v` flags to a codec debug level.
fn debug_level(verbose: u8) -> DebugLevel {
    match verbose {
        0 => DebugLevel::Off,
        1 => DebugLevel::Low,
        _ => DebugLevel::High,
    }
}

fn main() {
    let cli = Cli::parse();

    let level = debug_level(cli.command.verbosity());
    logger::init(level);

    let result = match cli.command {
        Commands::Compress { input, output, .. } => cmd_compress(&input, output.as_deref(), level),
        Commands::Decompress { input, output, .. } => {
            cmd_decompress(&input, output.as_deref(), level)
        }
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Test { input, .. } => cmd_test(&input, level),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
