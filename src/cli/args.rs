//! Command line argument parsing for the pilum CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::codec::CodecKind;
use crate::lexical::index::config::{CompressionConfig, InvertedIndexConfig};
use crate::search::engine::SearchOptions;

/// Pilum - N-of-M ranked retrieval over a JSON lines corpus
#[derive(Parser, Debug, Clone)]
#[command(name = "pilum")]
#[command(about = "Build an in-memory inverted index over a JSON lines corpus and query it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PilumArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PilumArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Index a corpus and evaluate a query against it
    Search(SearchArgs),

    /// Index a corpus and show posting list statistics
    Stats(StatsArgs),
}

/// Arguments shared by every command that builds an index
#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Corpus file, one JSON object per line
    #[arg(long, value_name = "JSONL_FILE")]
    pub corpus: PathBuf,

    /// Fields to index (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "body")]
    pub fields: Vec<String>,

    /// Store posting lists compressed
    #[arg(long)]
    pub compressed: bool,

    /// Codec for document-id gaps (ignored unless --compressed)
    #[arg(long, default_value = "variable-byte")]
    pub gap_codec: CodecArg,

    /// Codec for term frequencies (ignored unless --compressed)
    #[arg(long, default_value = "oneshot")]
    pub frequency_codec: CodecArg,
}

impl IndexArgs {
    /// Index configuration described by these arguments.
    pub fn config(&self) -> InvertedIndexConfig {
        let compression = if self.compressed {
            CompressionConfig::Compressed {
                gap_codec: self.gap_codec.into(),
                frequency_codec: self.frequency_codec.into(),
            }
        } else {
            CompressionConfig::None
        };
        InvertedIndexConfig::new(self.fields.iter().map(String::as_str))
            .with_compression(compression)
    }
}

/// Arguments for searching
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub index: IndexArgs,

    /// Query string
    #[arg(long, value_name = "QUERY")]
    pub query: String,

    /// Fraction of distinct query terms a document must contain
    #[arg(short, long, default_value = "1.0")]
    pub threshold: f64,

    /// Maximum number of results to return
    #[arg(long, default_value = "10")]
    pub hits: usize,

    /// Ranking function
    #[arg(short, long, default_value = "simple")]
    pub ranker: RankerKind,
}

impl SearchArgs {
    /// Evaluation options described by these arguments.
    pub fn options(&self) -> SearchOptions {
        SearchOptions::new(self.threshold, self.hits)
    }
}

/// Arguments for index statistics
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub index: IndexArgs,

    /// Include gap and term frequency histograms
    #[arg(long)]
    pub histograms: bool,
}

/// Codecs selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecArg {
    /// Variable-byte
    VariableByte,
    /// Elias-Gamma (values >= 1 only)
    EliasGamma,
    /// One bit for 1, variable-byte otherwise
    Oneshot,
}

impl From<CodecArg> for CodecKind {
    fn from(arg: CodecArg) -> Self {
        match arg {
            CodecArg::VariableByte => CodecKind::VariableByte,
            CodecArg::EliasGamma => CodecKind::EliasGamma,
            CodecArg::Oneshot => CodecKind::Oneshot,
        }
    }
}

/// Ranking functions available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankerKind {
    /// Sum of query multiplicity times term frequency
    Simple,
    /// Log-scaled term frequency times inverse document frequency
    Tfidf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
