use std::fs::{self, File};
use std::io::{self, BufWriter, IsTerminal, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, info_span, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Registry};

use lsalign::aligner::scoring::{ScoreParams, ScoringModel};
use lsalign::aligner::AlignmentAlgorithm;
use lsalign::alphabet::Alphabet;
use lsalign::io::{read_scoring_table, resolve_sequence, write_result};

mod cli;

/// Build the tracing subscriber with stderr logging.
///
/// `RUST_LOG` takes precedence; otherwise the level follows the `-v` count.
fn build_subscriber(verbose: u8) -> impl Subscriber + for<'span> LookupSpan<'span> {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    Registry::default().with(stderr_log)
}

fn build_scoring(align_args: &cli::AlignArgs) -> Result<ScoringModel> {
    if let Some(path) = &align_args.delta {
        return read_scoring_table(path)
            .with_context(|| format!("Could not load substitution table {}", path.display()));
    }

    let keys = align_args.keys.as_deref()
        .context("Symbols used by the sequences are missing, specify --keys or --delta")?;
    let alphabet: Alphabet = keys.parse()
        .with_context(|| format!("Invalid alphabet '{keys}'"))?;

    let params = ScoreParams::new(align_args.match_score, align_args.mismatch_score, align_args.gap_score);

    Ok(ScoringModel::from_scores(alphabet, params))
}

fn align_subcommand(align_args: &cli::AlignArgs) -> Result<()> {
    let span = info_span!("align_subcommand");
    let _enter = span.enter();

    let scoring = build_scoring(align_args)?;
    info!("Alphabet: {}", scoring.alphabet());

    let seq1 = resolve_sequence(&align_args.seq1)
        .with_context(|| format!("Could not read sequence 1 from {}", align_args.seq1))?;
    let seq2 = resolve_sequence(&align_args.seq2)
        .with_context(|| format!("Could not read sequence 2 from {}", align_args.seq2))?;

    let algorithm = AlignmentAlgorithm::from(align_args.algorithm);
    info!("Aligning sequences of length {} and {} with {algorithm}...", seq1.len(), seq2.len());

    let start = Instant::now();
    let result = algorithm.align(&scoring, &seq1, &seq2)?;
    let elapsed = start.elapsed().as_secs_f64();

    info!("Done. Alignment Score: {}", result.score);
    info!("Alignment is done in {elapsed:.4} seconds!");

    // Determine where to write the result to
    let mut writer: Box<dyn Write> = if let Some(path) = &align_args.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?
        }

        let file = File::create(path)
            .with_context(|| format!("Could not create output file {}", path.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(io::stdout().lock())
    };

    write_result(&mut writer, &result, algorithm, align_args.output_type.into())?;
    writer.flush()?;

    if let Some(path) = &align_args.output {
        info!("Result saved at {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();
    build_subscriber(args.verbose).init();

    match &args.command {
        Some(cli::CliSubcommand::Align(v)) => align_subcommand(v)?,
        None => anyhow::bail!("No subcommand given."),
    };

    Ok(())
}
