use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use lsalign::aligner::AlignmentAlgorithm;
use lsalign::io::OutputFormat;

/// The result formats supported by lsalign
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputType {
    /// Score and both gapped sequences, one per line
    Text,

    /// Gapped sequences with a line marking identities and substitutions
    Pretty,

    /// A single JSON object
    Json,
}

impl From<OutputType> for OutputFormat {
    fn from(value: OutputType) -> Self {
        match value {
            OutputType::Text => OutputFormat::Text,
            OutputType::Pretty => OutputFormat::Pretty,
            OutputType::Json => OutputFormat::Json,
        }
    }
}

/// Which aligner to run
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Linear-space divide and conquer
    Hirschberg,

    /// Full dynamic programming table with traceback
    NeedlemanWunsch,
}

impl From<Algorithm> for AlignmentAlgorithm {
    fn from(value: Algorithm) -> Self {
        match value {
            Algorithm::Hirschberg => AlignmentAlgorithm::Hirschberg,
            Algorithm::NeedlemanWunsch => AlignmentAlgorithm::NeedlemanWunsch,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<CliSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliSubcommand {
    /// Compute an optimal global alignment of two sequences
    Align(AlignArgs),
}

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// First sequence: a path to a text or FASTA file (optionally gzipped), or the sequence itself
    #[clap(help_heading = "Inputs")]
    pub seq1: String,

    /// Second sequence: a path to a text or FASTA file (optionally gzipped), or the sequence itself
    #[clap(help_heading = "Inputs")]
    pub seq2: String,

    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    pub output: Option<PathBuf>,

    /// Output file type.
    #[arg(value_enum, short = 'O', long, default_value = "text")]
    #[clap(help_heading = "Outputs")]
    pub output_type: OutputType,

    /// Alignment algorithm
    #[arg(value_enum, short = 'a', long, default_value = "hirschberg")]
    #[clap(help_heading = "Alignment configuration")]
    pub algorithm: Algorithm,

    /// Substitution table file. Overrides --keys, --match, --mismatch and --gap.
    #[arg(short = 'd', long)]
    #[clap(help_heading = "Alignment configuration")]
    pub delta: Option<PathBuf>,

    /// Comma-separated symbols that may occur in the sequences, including the gap symbol '-'
    #[arg(short = 'k', long, required_unless_present = "delta")]
    #[clap(help_heading = "Alignment configuration")]
    pub keys: Option<String>,

    /// Score for identical symbols
    #[arg(long = "match", default_value = "1", allow_hyphen_values = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub match_score: i32,

    /// Score for differing symbols
    #[arg(long = "mismatch", default_value = "-1", allow_hyphen_values = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub mismatch_score: i32,

    /// Score for a symbol aligned to a gap
    #[arg(long = "gap", default_value = "-1", allow_hyphen_values = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub gap_score: i32,
}
