use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// Problems with the scoring specification, detected while building an
/// [`Alphabet`](crate::alphabet::Alphabet) or a
/// [`ScoringModel`](crate::aligner::scoring::ScoringModel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The alphabet does not contain any symbols
    EmptyAlphabet,

    /// The alphabet does not include the reserved gap symbol
    MissingGapSymbol,

    /// A symbol was listed more than once
    DuplicateSymbol(u8),

    /// A symbol token is not a single byte
    InvalidSymbolToken(String),

    /// No score was given for the pair (first, second)
    MissingScore(u8, u8),
}

/// Shape or content problems in a tabular substitution matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table has no header line
    Empty,

    /// A row does not have one score per alphabet column
    ColumnCount { line: usize, expected: usize, found: usize },

    /// Row `row` (0-based, alphabet order) of an assembled matrix has the wrong length
    RowLength { row: usize, expected: usize, found: usize },

    /// The number of rows does not match the number of alphabet symbols
    RowCount { expected: usize, found: usize },

    /// A score could not be parsed as an integer
    InvalidScore { line: usize, token: String },

    /// A row label does not name a symbol of the header
    UnknownRowSymbol { line: usize, token: String },

    /// Two rows share the same label
    DuplicateRow { line: usize, token: String },
}

#[derive(Debug)]
pub enum AlignError {
    /// A sequence contains a symbol that is not part of the alphabet
    InvalidSymbol { symbol: u8, position: usize },

    /// The scoring specification is incomplete or inconsistent
    InvalidConfiguration(ConfigError),

    /// The substitution table has the wrong shape or unparseable content
    MalformedScoringTable(TableError),

    /// Error variant when we couldn't read from a file
    FileReadError { source: io::Error },

    /// Error variant when we could not serialize the result
    SerializationError { source: serde_json::Error },

    /// Other IO errors
    IOError(io::Error),
}

impl Error for AlignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::FileReadError { ref source } => Some(source),
            Self::SerializationError { ref source } => Some(source),
            Self::IOError(ref source) => Some(source),
            _ => None
        }
    }
}

impl From<io::Error> for AlignError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl From<serde_json::Error> for AlignError {
    fn from(value: serde_json::Error) -> Self {
        Self::SerializationError {
            source: value
        }
    }
}

impl From<ConfigError> for AlignError {
    fn from(value: ConfigError) -> Self {
        Self::InvalidConfiguration(value)
    }
}

impl From<TableError> for AlignError {
    fn from(value: TableError) -> Self {
        Self::MalformedScoringTable(value)
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::EmptyAlphabet =>
                write!(f, "the alphabet is empty"),
            Self::MissingGapSymbol =>
                write!(f, "the alphabet does not include the gap symbol '-'"),
            Self::DuplicateSymbol(symbol) =>
                write!(f, "symbol '{}' occurs more than once in the alphabet", symbol as char),
            Self::InvalidSymbolToken(ref token) =>
                write!(f, "'{token}' is not a single-character symbol"),
            Self::MissingScore(a, b) =>
                write!(f, "no score given for the pair ('{}', '{}')", a as char, b as char),
        }
    }
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Empty =>
                write!(f, "the table has no header line"),
            Self::ColumnCount { line, expected, found } =>
                write!(f, "line {line}: expected {expected} scores, found {found}"),
            Self::RowLength { row, expected, found } =>
                write!(f, "row {row} has {found} scores, expected {expected}"),
            Self::RowCount { expected, found } =>
                write!(f, "expected {expected} rows, found {found}"),
            Self::InvalidScore { line, ref token } =>
                write!(f, "line {line}: '{token}' is not an integer score"),
            Self::UnknownRowSymbol { line, ref token } =>
                write!(f, "line {line}: row label '{token}' is not in the header"),
            Self::DuplicateRow { line, ref token } =>
                write!(f, "line {line}: row '{token}' was already given"),
        }
    }
}

impl Display for AlignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::InvalidSymbol { symbol, position } =>
                write!(f, "Symbol '{}' at position {position} is not part of the alphabet!", symbol.escape_ascii()),
            Self::InvalidConfiguration(ref err) =>
                write!(f, "Invalid scoring configuration: {err}"),
            Self::MalformedScoringTable(ref err) =>
                write!(f, "Malformed scoring table: {err}"),
            Self::FileReadError { source: _ } =>
                write!(f, "Could not read from file!"),
            Self::SerializationError { source: _ } =>
                write!(f, "Could not serialize the alignment result!"),
            Self::IOError(ref err) =>
                err.fmt(f),
        }
    }
}
