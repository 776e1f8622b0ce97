//! Loader for tabular substitution matrices.
//!
//! The first line lists the alphabet symbols, separated by whitespace. Its last token is a
//! placeholder for the gap column and is mapped to `-`, whatever it is spelled as. Every
//! other non-blank line holds a row label followed by one integer per column:
//!
//! ```text
//!    A  C  G  T  *
//! A  5 -4 -4 -4 -6
//! C -4  5 -4 -4 -6
//! G -4 -4  5 -4 -6
//! T -4 -4 -4  5 -6
//! * -6 -6 -6 -6  0
//! ```
//!
//! Rows are matched to symbols by their label, so they may appear in any order. The gap row
//! is labelled with the placeholder or with `-`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::aligner::scoring::ScoringModel;
use crate::alphabet::{single_symbol, Alphabet, GAP};
use crate::errors::{AlignError, TableError};

pub fn read_scoring_table(path: impl AsRef<Path>) -> Result<ScoringModel, AlignError> {
    let file = File::open(path.as_ref())
        .map_err(|source| AlignError::FileReadError { source })?;

    load_scoring_table(BufReader::new(file))
}

pub fn load_scoring_table(reader: impl BufRead) -> Result<ScoringModel, AlignError> {
    let mut lines = reader.lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)));

    let header = loop {
        match lines.next().transpose()? {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break line,
            None => return Err(TableError::Empty.into()),
        }
    };

    let tokens: Vec<&str> = header.split_whitespace().collect();
    let Some((placeholder, symbol_tokens)) = tokens.split_last() else {
        return Err(TableError::Empty.into());
    };

    let mut symbols = symbol_tokens.iter()
        .map(|t| single_symbol(t))
        .collect::<Result<Vec<_>, _>>()?;
    symbols.push(GAP);

    let alphabet = Alphabet::new(&symbols)?;
    let size = alphabet.len();

    let mut rows: Vec<Option<Vec<i32>>> = vec![None; size];
    let mut num_rows = 0;
    for line in lines {
        let (line_no, line) = line?;
        let mut fields = line.split_whitespace();

        let Some(label) = fields.next() else {
            continue;
        };

        let row_symbol = if label == *placeholder {
            Some(GAP)
        } else {
            single_symbol(label).ok()
        };

        let Some(code) = row_symbol.and_then(|s| alphabet.code(s)) else {
            return Err(TableError::UnknownRowSymbol { line: line_no, token: label.to_string() }.into());
        };

        let scores = fields
            .map(|token| token.parse::<i32>()
                .map_err(|_| TableError::InvalidScore { line: line_no, token: token.to_string() }))
            .collect::<Result<Vec<_>, _>>()?;

        if scores.len() != size {
            return Err(TableError::ColumnCount { line: line_no, expected: size, found: scores.len() }.into());
        }

        let slot = &mut rows[code as usize];
        if slot.is_some() {
            return Err(TableError::DuplicateRow { line: line_no, token: label.to_string() }.into());
        }

        *slot = Some(scores);
        num_rows += 1;
    }

    if num_rows != size {
        return Err(TableError::RowCount { expected: size, found: num_rows }.into());
    }

    let rows: Vec<Vec<i32>> = rows.into_iter().flatten().collect();
    debug!(alphabet = %alphabet, "loaded substitution table");

    ScoringModel::from_rows(alphabet, &rows)
}
