use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::debug;

use crate::errors::AlignError;

/// Read a single sequence from a file.
///
/// Files ending in `.gz` are decompressed. See [`parse_sequence`] for the accepted formats.
pub fn read_sequence(path: impl AsRef<Path>) -> Result<Vec<u8>, AlignError> {
    let path = path.as_ref();
    let is_gzipped = path.file_name()
        .map(|v| v.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    let file = File::open(path)
        .map_err(|source| AlignError::FileReadError { source })?;

    // Check if we have a gzipped file
    let reader: Box<dyn BufRead> = if is_gzipped {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    parse_sequence(reader)
}

/// Parse a single sequence.
///
/// Input starting with `>` is read as FASTA and the sequence of the first record is
/// returned. Anything else is treated as plain text: lines are trimmed and concatenated.
pub fn parse_sequence(mut reader: impl BufRead) -> Result<Vec<u8>, AlignError> {
    skip_blank(&mut reader)?;

    if reader.fill_buf()?.first() == Some(&b'>') {
        let mut fasta_reader = fasta::io::Reader::new(reader);

        return match fasta_reader.records().next() {
            Some(record) => {
                let record = record?;
                debug!(name = %String::from_utf8_lossy(record.name()), length = record.sequence().len(), "read FASTA record");

                Ok(record.sequence().as_ref().to_vec())
            },
            None => Ok(Vec::new()),
        };
    }

    let mut seq = Vec::new();
    for line in reader.lines() {
        seq.extend_from_slice(line?.trim().as_bytes());
    }

    Ok(seq)
}

/// Interpret a command line argument as a sequence: the contents of the file if the
/// argument names one, the argument itself otherwise.
pub fn resolve_sequence(arg: &str) -> Result<Vec<u8>, AlignError> {
    let path = Path::new(arg);

    if path.is_file() {
        debug!(path = %path.display(), "reading sequence from file");
        read_sequence(path)
    } else {
        Ok(arg.trim().as_bytes().to_vec())
    }
}

fn skip_blank(reader: &mut impl BufRead) -> Result<(), AlignError> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(());
        }

        let blank = buf.iter().take_while(|c| c.is_ascii_whitespace()).count();
        let done = blank < buf.len();
        reader.consume(blank);

        if done {
            return Ok(());
        }
    }
}
