use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replaces the Chinese characters in a text with random homophones.
    Convert {
        /// The path or http(s) URL of the homophone dictionary.
        #[arg(short, long)]
        dictionary: String,
        /// The path to the input text. Read from stdin if not given.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// The path to write the converted text to. Written to stdout if not given.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Seed for the random choices, for reproducible output.
        #[arg(short, long)]
        seed: Option<u64>,
        /// Timeout for retrieving the dictionary, in seconds.
        #[arg(short, long)]
        timeout: Option<u64>,
    },
    /// Prints the number of pinyin and characters in the dictionary.
    Stats {
        /// The path or http(s) URL of the homophone dictionary.
        #[arg(short, long)]
        dictionary: String,
    },
}
