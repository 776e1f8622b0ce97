use std::mem;

use crate::aligner::dp::best_branch;
use crate::aligner::scoring::{Score, ScoringModel};

/// Computes the last row of the global alignment DP table in linear space.
///
/// Only the row being filled and the one before it are kept; they are swapped after each
/// row. No pointers are recorded.
pub struct EdgeScanner<'a> {
    scoring: &'a ScoringModel,
}

impl<'a> EdgeScanner<'a> {
    pub fn new(scoring: &'a ScoringModel) -> Self {
        Self { scoring }
    }

    /// Scores of aligning all of `v` against every prefix of `w`.
    ///
    /// Entry `j` is the optimal score of `v` against `w[..j]`.
    pub fn prefix(&self, v: &[u8], w: &[u8]) -> Vec<Score> {
        self.last_row(v.len(), w.len(), |i| v[i - 1], |j| w[j - 1])
    }

    /// Scores of aligning all of `v` against every suffix of `w`.
    ///
    /// Runs the recurrence over both sequences reversed, so entry `j` is the optimal score of
    /// `v` against `w[w.len() - j..]`.
    pub fn suffix(&self, v: &[u8], w: &[u8]) -> Vec<Score> {
        let (n, m) = (v.len(), w.len());

        self.last_row(n, m, |i| v[n - i], |j| w[m - j])
    }

    fn last_row<V, W>(&self, n: usize, m: usize, v_at: V, w_at: W) -> Vec<Score>
    where
        V: Fn(usize) -> u8,
        W: Fn(usize) -> u8,
    {
        let mut prev: Vec<Score> = vec![0; m + 1];
        let mut curr: Vec<Score> = vec![0; m + 1];

        for j in 1..=m {
            prev[j] = prev[j - 1] + self.scoring.insertion(w_at(j));
        }

        for i in 1..=n {
            let vi = v_at(i);
            let del = self.scoring.deletion(vi);
            curr[0] = prev[0] + del;

            for j in 1..=m {
                let wj = w_at(j);
                let (score, _) = best_branch(
                    curr[j - 1] + self.scoring.insertion(wj),
                    prev[j] + del,
                    prev[j - 1] + self.scoring.delta(vi, wj),
                );

                curr[j] = score;
            }

            mem::swap(&mut prev, &mut curr);
        }

        prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligner::dp::NeedlemanWunsch;
    use crate::aligner::scoring::ScoreParams;
    use crate::alphabet::Alphabet;

    fn scoring() -> ScoringModel {
        ScoringModel::from_scores(Alphabet::new(b"ACTG-").unwrap(), ScoreParams::new(2, -1, -2))
    }

    #[test]
    fn test_prefix_matches_full_dp() {
        let scoring = scoring();
        let alphabet = scoring.alphabet();
        let v = alphabet.encode(b"TAGATA").unwrap();
        let w = alphabet.encode(b"GTAGGCTTAAGG").unwrap();

        let row = EdgeScanner::new(&scoring).prefix(&v, &w);
        assert_eq!(row.len(), w.len() + 1);

        let nw = NeedlemanWunsch::new(&scoring);
        for (j, score) in row.iter().enumerate() {
            assert_eq!(*score, nw.fill(&v, &w[..j]).0, "prefix column {j}");
        }
    }

    #[test]
    fn test_suffix_matches_reversed_dp() {
        let scoring = scoring();
        let alphabet = scoring.alphabet();
        let v = alphabet.encode(b"ATTGCA").unwrap();
        let w = alphabet.encode(b"CATGGAT").unwrap();

        let row = EdgeScanner::new(&scoring).suffix(&v, &w);

        let nw = NeedlemanWunsch::new(&scoring);
        let m = w.len();
        for (j, score) in row.iter().enumerate() {
            assert_eq!(*score, nw.fill(&v, &w[m - j..]).0, "suffix column {j}");
        }

        let v_rev: Vec<u8> = v.iter().rev().copied().collect();
        let w_rev: Vec<u8> = w.iter().rev().copied().collect();
        assert_eq!(row, EdgeScanner::new(&scoring).prefix(&v_rev, &w_rev));
    }

    #[test]
    fn test_empty_first_sequence() {
        let scoring = scoring();
        let w = scoring.alphabet().encode(b"GAT").unwrap();
        let scanner = EdgeScanner::new(&scoring);

        assert_eq!(scanner.prefix(&[], &w), vec![0, -2, -4, -6]);
        assert_eq!(scanner.suffix(&[], &w), vec![0, -2, -4, -6]);
    }

    #[test]
    fn test_empty_second_sequence() {
        let scoring = scoring();
        let v = scoring.alphabet().encode(b"GA").unwrap();

        assert_eq!(EdgeScanner::new(&scoring).prefix(&v, &[]), vec![-4]);
        assert_eq!(EdgeScanner::new(&scoring).suffix(&v, &[]), vec![-4]);
    }

    #[test]
    fn test_row_past_i32_range() {
        let scoring = ScoringModel::from_scores(Alphabet::new(b"ACTG-").unwrap(), ScoreParams::new(1, -1, i32::MIN));
        let w = scoring.alphabet().encode(b"GATT").unwrap();
        let gap = i32::MIN as Score;

        let row = EdgeScanner::new(&scoring).prefix(&[], &w);
        assert_eq!(row, vec![0, gap, 2 * gap, 3 * gap, 4 * gap]);
    }
}
