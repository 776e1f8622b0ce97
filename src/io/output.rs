use std::io::Write;

use serde::Serialize;

use crate::aligner::scoring::Score;
use crate::aligner::{AlignmentAlgorithm, AlignmentResult};
use crate::alphabet::GAP;
use crate::errors::AlignError;

/// The supported result formats
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Score line followed by both gapped sequences
    #[default]
    Text,

    /// Gapped sequences with a line marking identities and substitutions
    Pretty,

    /// A single JSON object
    Json,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    algorithm: AlignmentAlgorithm,
    score: Score,
    aligned_v: &'a str,
    aligned_w: &'a str,
}

/// Render the middle line of a pretty-printed alignment: `|` for identical symbols, `*` for
/// substitutions, blank for gap columns.
pub fn match_line(aligned_v: &[u8], aligned_w: &[u8]) -> Vec<u8> {
    aligned_v.iter()
        .zip(aligned_w)
        .map(|(&a, &b)| match (a, b) {
            (GAP, _) | (_, GAP) => b' ',
            (a, b) if a == b => b'|',
            _ => b'*',
        })
        .collect()
}

pub fn write_result(
    mut writer: impl Write,
    result: &AlignmentResult,
    algorithm: AlignmentAlgorithm,
    format: OutputFormat,
) -> Result<(), AlignError> {
    let aligned_v = String::from_utf8_lossy(&result.aligned_v);
    let aligned_w = String::from_utf8_lossy(&result.aligned_w);

    match format {
        OutputFormat::Text => {
            writeln!(writer, "Best Alignment Score: {}", result.score)?;
            writeln!(writer, "Sequence 1: {aligned_v}")?;
            writeln!(writer, "Sequence 2: {aligned_w}")?;
        },
        OutputFormat::Pretty => {
            let matches = match_line(&result.aligned_v, &result.aligned_w);

            writeln!(writer, "# {algorithm}, score: {}", result.score)?;
            writeln!(writer, "{aligned_v}")?;
            writeln!(writer, "{}", String::from_utf8_lossy(&matches))?;
            writeln!(writer, "{aligned_w}")?;
        },
        OutputFormat::Json => {
            let record = JsonRecord {
                algorithm,
                score: result.score,
                aligned_v: &aligned_v,
                aligned_w: &aligned_w,
            };

            serde_json::to_writer(&mut writer, &record)?;
            writeln!(writer)?;
        },
    }

    Ok(())
}
