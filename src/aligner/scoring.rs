use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, GAP};
use crate::errors::{AlignError, ConfigError, TableError};

/// Alignment score. Table entries are `i32` and are widened on lookup.
pub type Score = i64;

/// Match, mismatch and gap scores for building a simple scoring model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreParams {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_score: i32,
}

impl ScoreParams {
    pub fn new(match_score: i32, mismatch_score: i32, gap_score: i32) -> Self {
        Self { match_score, mismatch_score, gap_score }
    }
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self::new(1, -1, -1)
    }
}

/// Symbol-pair scores (the "delta" function), stored as a dense `L x L` matrix indexed by
/// alphabet codes.
///
/// Built once per alignment session and shared read-only by all aligner calls. The entry
/// for gap against gap is never read.
#[derive(Clone, Debug)]
pub struct ScoringModel {
    alphabet: Alphabet,
    matrix: Vec<i32>,
}

impl ScoringModel {
    /// Build a model from match/mismatch/gap scores over the given alphabet.
    pub fn from_scores(alphabet: Alphabet, params: ScoreParams) -> Self {
        let size = alphabet.len();
        let gap = alphabet.gap_code() as usize;

        let mut matrix = vec![0; size * size];
        for a in 0..size {
            for b in 0..size {
                matrix[a * size + b] = if a == gap || b == gap {
                    params.gap_score
                } else if a == b {
                    params.match_score
                } else {
                    params.mismatch_score
                };
            }
        }

        Self { alphabet, matrix }
    }

    /// Build a model from a full matrix given row by row, in alphabet order.
    ///
    /// The number of rows and the length of each row must equal the alphabet size.
    pub fn from_rows(alphabet: Alphabet, rows: &[Vec<i32>]) -> Result<Self, AlignError> {
        let size = alphabet.len();
        if rows.len() != size {
            return Err(TableError::RowCount { expected: size, found: rows.len() }.into());
        }

        let mut matrix = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(TableError::RowLength { row: i, expected: size, found: row.len() }.into());
            }

            matrix.extend_from_slice(row);
        }

        Ok(Self { alphabet, matrix })
    }

    /// Build a model from scores keyed by symbol pair.
    ///
    /// Every pair of alphabet symbols must be present, except gap against gap.
    pub fn from_pairs(alphabet: Alphabet, scores: &FxHashMap<(u8, u8), i32>) -> Result<Self, AlignError> {
        let size = alphabet.len();
        let mut matrix = vec![0; size * size];

        for (a, &sym_a) in alphabet.symbols().iter().enumerate() {
            for (b, &sym_b) in alphabet.symbols().iter().enumerate() {
                if sym_a == GAP && sym_b == GAP {
                    continue;
                }

                let Some(&score) = scores.get(&(sym_a, sym_b)) else {
                    return Err(ConfigError::MissingScore(sym_a, sym_b).into());
                };

                matrix[a * size + b] = score;
            }
        }

        Ok(Self { alphabet, matrix })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Score for aligning code `a` against code `b`.
    #[inline(always)]
    pub fn delta(&self, a: u8, b: u8) -> Score {
        Score::from(self.matrix[a as usize * self.alphabet.len() + b as usize])
    }

    /// Score for aligning `a` against a gap.
    #[inline(always)]
    pub fn deletion(&self, a: u8) -> Score {
        self.delta(a, self.alphabet.gap_code())
    }

    /// Score for aligning a gap against `b`.
    #[inline(always)]
    pub fn insertion(&self, b: u8) -> Score {
        self.delta(self.alphabet.gap_code(), b)
    }

    /// Score for a pair of raw symbols, `None` if either is not in the alphabet.
    pub fn symbol_score(&self, a: u8, b: u8) -> Option<Score> {
        Some(self.delta(self.alphabet.code(a)?, self.alphabet.code(b)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna() -> Alphabet {
        Alphabet::new(b"ACTG-").unwrap()
    }

    #[test]
    fn test_from_scores() {
        let model = ScoringModel::from_scores(dna(), ScoreParams::new(2, -3, -5));

        assert_eq!(model.symbol_score(b'A', b'A'), Some(2));
        assert_eq!(model.symbol_score(b'A', b'G'), Some(-3));
        assert_eq!(model.symbol_score(b'G', b'A'), Some(-3));
        assert_eq!(model.symbol_score(b'T', b'-'), Some(-5));
        assert_eq!(model.symbol_score(b'-', b'C'), Some(-5));
        assert_eq!(model.symbol_score(b'N', b'C'), None);

        let t = model.alphabet().code(b'T').unwrap();
        assert_eq!(model.deletion(t), -5);
        assert_eq!(model.insertion(t), -5);
    }

    #[test]
    fn test_extreme_entries_are_widened() {
        let model = ScoringModel::from_scores(dna(), ScoreParams::new(i32::MAX, i32::MIN, i32::MIN));
        let a = model.alphabet().code(b'A').unwrap();

        assert_eq!(model.delta(a, a) + model.delta(a, a), 2 * i32::MAX as Score);
        assert_eq!(model.deletion(a) + model.insertion(a), 2 * i32::MIN as Score);
    }

    #[test]
    fn test_default_params() {
        assert_eq!(ScoreParams::default(), ScoreParams::new(1, -1, -1));
    }

    #[test]
    fn test_from_rows() {
        let alphabet = Alphabet::new(b"AC-").unwrap();
        let rows = vec![
            vec![5, -4, -2],
            vec![-1, 5, -3],
            vec![-2, -3, 0],
        ];
        let model = ScoringModel::from_rows(alphabet, &rows).unwrap();

        assert_eq!(model.symbol_score(b'A', b'C'), Some(-4));
        assert_eq!(model.symbol_score(b'C', b'A'), Some(-1));
        assert_eq!(model.symbol_score(b'C', b'-'), Some(-3));
        assert_eq!(model.symbol_score(b'-', b'A'), Some(-2));
    }

    #[test]
    fn test_from_rows_rejects_bad_shape() {
        let alphabet = Alphabet::new(b"AC-").unwrap();

        let err = ScoringModel::from_rows(alphabet.clone(), &[vec![1, 2, 3], vec![1, 2, 3]]).unwrap_err();
        assert!(matches!(err, AlignError::MalformedScoringTable(TableError::RowCount { expected: 3, found: 2 })));

        let rows = vec![vec![1, 2, 3], vec![1, 2], vec![1, 2, 3]];
        let err = ScoringModel::from_rows(alphabet, &rows).unwrap_err();
        assert!(matches!(err, AlignError::MalformedScoringTable(TableError::RowLength { row: 1, expected: 3, found: 2 })));
    }

    #[test]
    fn test_from_pairs() {
        let alphabet = Alphabet::new(b"AC-").unwrap();
        let mut scores = FxHashMap::default();
        for &a in b"AC-" {
            for &b in b"AC-" {
                if a == b'-' && b == b'-' {
                    continue;
                }
                scores.insert((a, b), if a == b { 3 } else { -2 });
            }
        }

        let model = ScoringModel::from_pairs(alphabet.clone(), &scores).unwrap();
        assert_eq!(model.symbol_score(b'C', b'C'), Some(3));
        assert_eq!(model.symbol_score(b'C', b'-'), Some(-2));

        scores.remove(&(b'-', b'C'));
        let err = ScoringModel::from_pairs(alphabet, &scores).unwrap_err();
        assert!(matches!(err, AlignError::InvalidConfiguration(ConfigError::MissingScore(b'-', b'C'))));
    }
}
