//! Quadratic-space global alignment (Needleman-Wunsch) with traceback.

use std::mem;

use crate::aligner::alignment::{AlignedPair, Alignment, Direction};
use crate::aligner::scoring::{Score, ScoringModel};
use crate::aligner::PairwiseAligner;

/// Pick the best of the three recurrence branches.
///
/// The first maximum wins, in the order left, up, diagonal.
#[inline(always)]
pub(crate) fn best_branch(left: Score, up: Score, diagonal: Score) -> (Score, Direction) {
    let mut best = (left, Direction::Left);

    if up > best.0 {
        best = (up, Direction::Up);
    }

    if diagonal > best.0 {
        best = (diagonal, Direction::Diagonal);
    }

    best
}

/// Direction of every DP cell, stored row-major.
pub struct PointerGrid {
    data: Vec<Direction>,
    rows: usize,
    cols: usize,
}

impl PointerGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![Direction::Origin; rows * cols],
            rows,
            cols,
        }
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: Direction) {
        self.data[row * self.cols + col] = value;
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Direction {
        self.data[row * self.cols + col]
    }

    /// Walk the pointers from the last cell back to the origin.
    pub fn traceback(&self) -> Alignment {
        let (mut i, mut j) = (self.rows - 1, self.cols - 1);
        let mut alignment = Vec::with_capacity(i + j);

        while i > 0 || j > 0 {
            match self.get(i, j) {
                Direction::Left => {
                    alignment.push(AlignedPair::new(None, Some(j - 1)));
                    j -= 1;
                },
                Direction::Up => {
                    alignment.push(AlignedPair::new(Some(i - 1), None));
                    i -= 1;
                },
                Direction::Diagonal => {
                    alignment.push(AlignedPair::new(Some(i - 1), Some(j - 1)));
                    i -= 1;
                    j -= 1;
                },
                Direction::Origin => break,
            }
        }

        alignment.reverse();
        alignment
    }
}

/// Needleman-Wunsch aligner.
///
/// Keeps the full pointer grid for traceback, but only two rows of scores.
pub struct NeedlemanWunsch<'a> {
    scoring: &'a ScoringModel,
}

impl<'a> NeedlemanWunsch<'a> {
    pub fn new(scoring: &'a ScoringModel) -> Self {
        Self { scoring }
    }

    /// Fill the DP table for `v` against `w`, returning the optimal score and the pointer grid.
    pub fn fill(&self, v: &[u8], w: &[u8]) -> (Score, PointerGrid) {
        let (n, m) = (v.len(), w.len());
        let mut pointers = PointerGrid::new(n + 1, m + 1);

        let mut prev: Vec<Score> = vec![0; m + 1];
        let mut curr: Vec<Score> = vec![0; m + 1];

        for j in 1..=m {
            prev[j] = prev[j - 1] + self.scoring.insertion(w[j - 1]);
            pointers.set(0, j, Direction::Left);
        }

        for i in 1..=n {
            let del = self.scoring.deletion(v[i - 1]);
            curr[0] = prev[0] + del;
            pointers.set(i, 0, Direction::Up);

            for j in 1..=m {
                let (score, dir) = best_branch(
                    curr[j - 1] + self.scoring.insertion(w[j - 1]),
                    prev[j] + del,
                    prev[j - 1] + self.scoring.delta(v[i - 1], w[j - 1]),
                );

                curr[j] = score;
                pointers.set(i, j, dir);
            }

            mem::swap(&mut prev, &mut curr);
        }

        (prev[m], pointers)
    }
}

impl PairwiseAligner for NeedlemanWunsch<'_> {
    fn scoring(&self) -> &ScoringModel {
        self.scoring
    }

    fn align_encoded(&self, v: &[u8], w: &[u8]) -> (Score, Alignment) {
        let (score, pointers) = self.fill(v, w);

        (score, pointers.traceback())
    }
}
