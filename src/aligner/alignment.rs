use crate::aligner::scoring::{Score, ScoringModel};
use crate::alphabet::GAP;

/// Which branch of the recurrence produced a DP cell.
///
/// When branches tie, `Left` wins over `Up`, which wins over `Diagonal`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    /// The cell (0, 0)
    #[default]
    Origin,

    /// Gap in the second sequence: consumes one symbol of the first
    Up,

    /// Gap in the first sequence: consumes one symbol of the second
    Left,

    /// Both sequences consume one symbol
    Diagonal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AlignedPair {
    /// Position in the first sequence, `None` for a gap
    pub vpos: Option<usize>,

    /// Position in the second sequence, `None` for a gap
    pub wpos: Option<usize>,
}

impl AlignedPair {
    pub fn new(vpos: Option<usize>, wpos: Option<usize>) -> Self {
        Self { vpos, wpos }
    }

    pub fn is_aligned(&self) -> bool {
        matches!((self.vpos, self.wpos), (Some(_), Some(_)))
    }

    pub fn is_indel(&self) -> bool {
        !self.is_aligned()
    }

    pub(crate) fn shifted(self, v_offset: usize, w_offset: usize) -> Self {
        Self {
            vpos: self.vpos.map(|p| p + v_offset),
            wpos: self.wpos.map(|p| p + w_offset),
        }
    }
}

pub type Alignment = Vec<AlignedPair>;

/// An optimal score together with one alignment attaining it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: Score,
    pub alignment: Alignment,

    /// First sequence with gap symbols inserted
    pub aligned_v: Vec<u8>,

    /// Second sequence with gap symbols inserted
    pub aligned_w: Vec<u8>,
}

impl AlignmentResult {
    pub(crate) fn new(score: Score, alignment: Alignment, v: &[u8], w: &[u8]) -> Self {
        let (aligned_v, aligned_w) = gapped_sequences(&alignment, v, w);

        Self { score, alignment, aligned_v, aligned_w }
    }

    /// Sum the scoring model over all aligned columns.
    ///
    /// Returns `None` when a column holds a symbol outside of the model's alphabet.
    pub fn rescore(&self, scoring: &ScoringModel) -> Option<Score> {
        self.aligned_v.iter()
            .zip(&self.aligned_w)
            .map(|(&a, &b)| scoring.symbol_score(a, b))
            .sum()
    }
}

/// Render both sequences of an alignment with gap symbols inserted.
pub fn gapped_sequences(alignment: &[AlignedPair], v: &[u8], w: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut aligned_v = Vec::with_capacity(alignment.len());
    let mut aligned_w = Vec::with_capacity(alignment.len());

    for pair in alignment {
        aligned_v.push(pair.vpos.map_or(GAP, |p| v[p]));
        aligned_w.push(pair.wpos.map_or(GAP, |p| w[p]));
    }

    (aligned_v, aligned_w)
}
