use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::errors::{AlignError, ConfigError};

/// The reserved gap symbol.
pub const GAP: u8 = b'-';

/// The set of symbols sequences may be drawn from, plus the gap symbol.
///
/// Every symbol is assigned a small integer code (its position in the alphabet), which is
/// used to index the scoring matrix. Sequences are encoded to these codes once before
/// alignment.
#[derive(Clone, Debug)]
pub struct Alphabet {
    symbols: Vec<u8>,
    codes: FxHashMap<u8, u8>,
    gap_code: u8,
}

impl Alphabet {
    /// Build an alphabet from the given symbols. The gap symbol `-` must be among them.
    pub fn new(symbols: &[u8]) -> Result<Self, AlignError> {
        if symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet.into());
        }

        let mut codes = FxHashMap::default();
        for (code, &symbol) in symbols.iter().enumerate() {
            let code = u8::try_from(code)
                .map_err(|_| ConfigError::DuplicateSymbol(symbol))?;

            if codes.insert(symbol, code).is_some() {
                return Err(ConfigError::DuplicateSymbol(symbol).into());
            }
        }

        let Some(&gap_code) = codes.get(&GAP) else {
            return Err(ConfigError::MissingGapSymbol.into());
        };

        Ok(Self {
            symbols: symbols.to_vec(),
            codes,
            gap_code,
        })
    }

    /// Build an alphabet from string tokens, each of which must be a single byte.
    pub fn from_tokens<T: AsRef<str>>(tokens: &[T]) -> Result<Self, AlignError> {
        let symbols = tokens.iter()
            .map(|t| single_symbol(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(&symbols)
    }

    /// Number of symbols, including the gap symbol.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    pub fn gap_code(&self) -> u8 {
        self.gap_code
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    #[inline]
    pub fn code(&self, symbol: u8) -> Option<u8> {
        self.codes.get(&symbol).copied()
    }

    #[inline]
    pub fn symbol(&self, code: u8) -> u8 {
        self.symbols[code as usize]
    }

    /// Translate a sequence to symbol codes.
    ///
    /// Fails on the first symbol that is not in the alphabet. The gap symbol is rejected
    /// too, since input sequences are ungapped.
    pub fn encode(&self, seq: &[u8]) -> Result<Vec<u8>, AlignError> {
        seq.iter()
            .enumerate()
            .map(|(position, &symbol)| match self.code(symbol) {
                Some(code) if code != self.gap_code => Ok(code),
                _ => Err(AlignError::InvalidSymbol { symbol, position }),
            })
            .collect()
    }
}

impl FromStr for Alphabet {
    type Err = AlignError;

    /// Parse a comma-separated list of symbols, e.g. `A,C,G,T,-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        Self::from_tokens(&tokens)
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbols.iter().map(|&s| s as char).join(","))
    }
}

pub(crate) fn single_symbol(token: &str) -> Result<u8, ConfigError> {
    match token.as_bytes() {
        [symbol] => Ok(*symbol),
        _ => Err(ConfigError::InvalidSymbolToken(token.to_string())),
    }
}
