pub mod scoring;
pub mod alignment;
pub mod dp;
pub mod edge;
pub mod hirschberg;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::errors::AlignError;
use scoring::{Score, ScoringModel};

pub use alignment::{AlignedPair, Alignment, AlignmentResult, Direction};
pub use dp::NeedlemanWunsch;
pub use edge::EdgeScanner;
pub use hirschberg::Hirschberg;

/// Global alignment of two sequences under a [`ScoringModel`].
pub trait PairwiseAligner {
    fn scoring(&self) -> &ScoringModel;

    /// Align two sequences already translated to alphabet codes. Positions in the returned
    /// alignment index into `v` and `w`.
    fn align_encoded(&self, v: &[u8], w: &[u8]) -> (Score, Alignment);

    /// Align two sequences of raw symbols.
    ///
    /// Both sequences are checked against the alphabet before any DP work is done.
    fn align<V, W>(&self, v: V, w: W) -> Result<AlignmentResult, AlignError>
    where
        V: AsRef<[u8]>,
        W: AsRef<[u8]>,
    {
        let (v, w) = (v.as_ref(), w.as_ref());
        let span = debug_span!("align", v_len = v.len(), w_len = w.len());
        let _enter = span.enter();

        let alphabet = self.scoring().alphabet();
        let v_codes = alphabet.encode(v)?;
        let w_codes = alphabet.encode(w)?;

        let (score, alignment) = self.align_encoded(&v_codes, &w_codes);
        debug!(score, columns = alignment.len(), "alignment done");

        Ok(AlignmentResult::new(score, alignment, v, w))
    }
}

/// The available global alignment algorithms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentAlgorithm {
    /// Full quadratic-space dynamic programming with traceback
    NeedlemanWunsch,

    /// Linear-space divide and conquer
    #[default]
    Hirschberg,
}

impl AlignmentAlgorithm {
    pub fn align<V, W>(&self, scoring: &ScoringModel, v: V, w: W) -> Result<AlignmentResult, AlignError>
    where
        V: AsRef<[u8]>,
        W: AsRef<[u8]>,
    {
        match self {
            Self::NeedlemanWunsch => NeedlemanWunsch::new(scoring).align(v, w),
            Self::Hirschberg => Hirschberg::new(scoring).align(v, w),
        }
    }
}

impl Display for AlignmentAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NeedlemanWunsch => write!(f, "needleman-wunsch"),
            Self::Hirschberg => write!(f, "hirschberg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligner::scoring::ScoreParams;
    use crate::alphabet::Alphabet;

    #[test]
    fn test_algorithm_dispatch() {
        let scoring = ScoringModel::from_scores(Alphabet::new(b"ACTG-").unwrap(), ScoreParams::default());

        let nw = AlignmentAlgorithm::NeedlemanWunsch.align(&scoring, "GATTACA", "GCATGCT").unwrap();
        let hb = AlignmentAlgorithm::Hirschberg.align(&scoring, "GATTACA", "GCATGCT").unwrap();
        assert_eq!(nw.score, hb.score);
        assert_eq!(AlignmentAlgorithm::default(), AlignmentAlgorithm::Hirschberg);
        assert_eq!(AlignmentAlgorithm::NeedlemanWunsch.to_string(), "needleman-wunsch");
    }

    #[test]
    fn test_invalid_symbol_is_reported_before_alignment() {
        let scoring = ScoringModel::from_scores(Alphabet::new(b"ACTG-").unwrap(), ScoreParams::default());

        let err = Hirschberg::new(&scoring).align("GATTACA", "GAUTACA").unwrap_err();
        assert!(matches!(err, AlignError::InvalidSymbol { symbol: b'U', position: 2 }));

        let err = NeedlemanWunsch::new(&scoring).align("xGATTACA", "GATTACA").unwrap_err();
        assert!(matches!(err, AlignError::InvalidSymbol { symbol: b'x', position: 0 }));
    }
}
