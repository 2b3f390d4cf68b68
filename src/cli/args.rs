use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::global::GlobalArgs;

#[derive(clap::Parser)]
#[command(name = "hashcodec")]
#[command(version)]
#[command(
    about = "Encode, decode and hash text: Base64, Base32, Hex, URL, HTML entities, ROT13/47, MD5, SHA, CRC-32",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available algorithms
    List(ListArgs),

    /// Show details for one algorithm
    Show {
        /// Algorithm id or alias
        algorithm: String,
    },

    /// Encode text (hash algorithms produce a digest)
    Encode(TransformArgs),

    /// Decode text (reversible algorithms only)
    Decode(TransformArgs),

    /// Hash text with a one-way algorithm
    Hash(TransformArgs),
}

/// Arguments shared by encode, decode and hash
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Algorithm id or alias (defaults to the configured default_algorithm)
    #[arg(short = 'a', long, value_name = "ALGORITHM")]
    pub algorithm: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for listing the catalog
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list this category
    #[arg(value_name = "CATEGORY")]
    pub category: Option<CategoryArg>,
}

/// Catalog categories (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CategoryArg {
    Encoding,
    Hash,
    Cipher,
}

impl From<CategoryArg> for hashcodec::Category {
    fn from(cli: CategoryArg) -> Self {
        match cli {
            CategoryArg::Encoding => hashcodec::Category::Encoding,
            CategoryArg::Hash => hashcodec::Category::Hash,
            CategoryArg::Cipher => hashcodec::Category::Cipher,
        }
    }
}
