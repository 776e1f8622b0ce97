//! Linear-space global alignment (Hirschberg, 1975).
//!
//! The first sequence is split at its midpoint. A forward scan of the top half and a reversed
//! scan of the bottom half give, for every column `k` of the middle row, the best score of an
//! alignment passing through `(mid, k)`. The two sub-problems on either side of the best
//! crossing point are then solved independently and their alignments concatenated.
//!
//! Sub-problems where either sequence has at most one symbol are handed to
//! [`NeedlemanWunsch`], whose table is then linear in size.

use tracing::trace;

use crate::aligner::alignment::Alignment;
use crate::aligner::dp::NeedlemanWunsch;
use crate::aligner::edge::EdgeScanner;
use crate::aligner::scoring::{Score, ScoringModel};
use crate::aligner::PairwiseAligner;

pub struct Hirschberg<'a> {
    scoring: &'a ScoringModel,
}

impl<'a> Hirschberg<'a> {
    pub fn new(scoring: &'a ScoringModel) -> Self {
        Self { scoring }
    }

    /// Find the column where an optimal alignment of `v_head ++ v_tail` against `w` crosses
    /// the boundary between the two halves of the first sequence.
    ///
    /// Ties go to the smallest column.
    pub fn split_point(&self, v_head: &[u8], v_tail: &[u8], w: &[u8]) -> usize {
        let scanner = EdgeScanner::new(self.scoring);
        let prefix = scanner.prefix(v_head, w);
        let suffix = scanner.suffix(v_tail, w);

        let m = w.len();
        let mut best = (prefix[0] + suffix[m], 0);
        for k in 1..=m {
            let total = prefix[k] + suffix[m - k];
            if total > best.0 {
                best = (total, k);
            }
        }

        best.1
    }

    /// Align `v` against `w`, appending the columns to `out` with positions shifted by the
    /// given offsets. Returns the score of the appended part.
    fn align_into(
        &self,
        v: &[u8],
        w: &[u8],
        v_offset: usize,
        w_offset: usize,
        out: &mut Alignment,
    ) -> Score {
        let (n, m) = (v.len(), w.len());

        if n <= 1 || m <= 1 {
            let (score, alignment) = NeedlemanWunsch::new(self.scoring).align_encoded(v, w);
            out.extend(alignment.into_iter().map(|pair| pair.shifted(v_offset, w_offset)));

            return score;
        }

        let mid = n / 2;
        let split = self.split_point(&v[..mid], &v[mid..], w);
        trace!(n, m, mid, split, "split");

        let head = self.align_into(&v[..mid], &w[..split], v_offset, w_offset, out);
        let tail = self.align_into(&v[mid..], &w[split..], v_offset + mid, w_offset + split, out);

        head + tail
    }
}

impl PairwiseAligner for Hirschberg<'_> {
    fn scoring(&self) -> &ScoringModel {
        self.scoring
    }

    fn align_encoded(&self, v: &[u8], w: &[u8]) -> (Score, Alignment) {
        let mut alignment = Vec::with_capacity(v.len() + w.len());
        let score = self.align_into(v, w, 0, 0, &mut alignment);

        (score, alignment)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::aligner::scoring::ScoreParams;
    use crate::alphabet::{Alphabet, GAP};

    fn dna_scoring(params: ScoreParams) -> ScoringModel {
        ScoringModel::from_scores(Alphabet::new(b"ACTG-").unwrap(), params)
    }

    fn random_seq(rng: &mut StdRng, max_len: usize) -> Vec<u8> {
        let len = rng.random_range(0..=max_len);
        (0..len).map(|_| b"ACGT"[rng.random_range(0..4)]).collect()
    }

    fn random_params(rng: &mut StdRng) -> ScoreParams {
        ScoreParams::new(
            rng.random_range(0..=5),
            rng.random_range(-5..=1),
            rng.random_range(-5..=0),
        )
    }

    fn strip_gaps(seq: &[u8]) -> Vec<u8> {
        seq.iter().copied().filter(|&c| c != GAP).collect()
    }

    #[test]
    fn test_example_pair_agrees_with_dp() {
        let scoring = dna_scoring(ScoreParams::default());

        let linear = Hirschberg::new(&scoring).align("TAGATA", "GTAGGCTTAAGGTTA").unwrap();
        let quadratic = NeedlemanWunsch::new(&scoring).align("TAGATA", "GTAGGCTTAAGGTTA").unwrap();

        assert_eq!(linear.score, quadratic.score);
        assert_eq!(linear.rescore(&scoring), Some(linear.score));
        assert_eq!(strip_gaps(&linear.aligned_v), b"TAGATA");
        assert_eq!(strip_gaps(&linear.aligned_w), b"GTAGGCTTAAGGTTA");

        // Deterministic across runs
        let again = Hirschberg::new(&scoring).align("TAGATA", "GTAGGCTTAAGGTTA").unwrap();
        assert_eq!(linear, again);
    }

    #[test]
    fn test_identical_single_symbol() {
        let scoring = dna_scoring(ScoreParams::default());
        let result = Hirschberg::new(&scoring).align("A", "A").unwrap();

        assert_eq!(result.score, 1);
        assert_eq!(result.aligned_v, b"A");
        assert_eq!(result.aligned_w, b"A");
    }

    #[test]
    fn test_single_symbol_uses_dp_directly() {
        let scoring = dna_scoring(ScoreParams::default());
        let linear = Hirschberg::new(&scoring).align("A", "AAA").unwrap();
        let quadratic = NeedlemanWunsch::new(&scoring).align("A", "AAA").unwrap();

        assert_eq!(linear.score, -1);
        assert_eq!(linear, quadratic);
    }

    #[test]
    fn test_empty_against_sequence() {
        let scoring = dna_scoring(ScoreParams::default());
        let result = Hirschberg::new(&scoring).align("", "GATTACA").unwrap();

        assert_eq!(result.score, -7);
        assert_eq!(result.aligned_v, b"-------");
        assert_eq!(result.aligned_w, b"GATTACA");

        let result = Hirschberg::new(&scoring).align("GATTACA", "").unwrap();
        assert_eq!(result.score, -7);
        assert_eq!(result.aligned_v, b"GATTACA");
        assert_eq!(result.aligned_w, b"-------");
    }

    #[test]
    fn test_large_gap_penalties_do_not_overflow() {
        let scoring = dna_scoring(ScoreParams::new(1, -1, -1_500_000_000));

        let result = Hirschberg::new(&scoring).align("", "AA").unwrap();
        assert_eq!(result.score, -3_000_000_000);

        let linear = Hirschberg::new(&scoring).align("GATTACA", "CA").unwrap();
        let quadratic = NeedlemanWunsch::new(&scoring).align("GATTACA", "CA").unwrap();
        assert_eq!(linear.score, quadratic.score);
        assert_eq!(linear.score, 2 - 5 * 1_500_000_000);
        assert_eq!(linear.rescore(&scoring), Some(linear.score));
    }

    #[test]
    fn test_split_point_prefers_first_column() {
        // All columns tie when every pair scores zero
        let scoring = dna_scoring(ScoreParams::new(0, 0, 0));
        let alphabet = scoring.alphabet();
        let v = alphabet.encode(b"ACGT").unwrap();
        let w = alphabet.encode(b"TTTT").unwrap();

        assert_eq!(Hirschberg::new(&scoring).split_point(&v[..2], &v[2..], &w), 0);
    }

    #[test]
    fn test_split_point_is_on_optimal_path() {
        let scoring = dna_scoring(ScoreParams::default());
        let alphabet = scoring.alphabet();
        let v = alphabet.encode(b"AAAACCCC").unwrap();
        let w = alphabet.encode(b"AAAAGGCCCC").unwrap();

        let hb = Hirschberg::new(&scoring);
        let split = hb.split_point(&v[..4], &v[4..], &w);

        let nw = NeedlemanWunsch::new(&scoring);
        let total = nw.fill(&v[..4], &w[..split]).0 + nw.fill(&v[4..], &w[split..]).0;
        assert_eq!(total, nw.fill(&v, &w).0);
    }

    #[test]
    fn test_random_pairs_agree_with_dp() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..300 {
            let scoring = dna_scoring(random_params(&mut rng));
            let v = random_seq(&mut rng, 30);
            let w = random_seq(&mut rng, 30);

            let linear = Hirschberg::new(&scoring).align(&v, &w).unwrap();
            let quadratic = NeedlemanWunsch::new(&scoring).align(&v, &w).unwrap();

            assert_eq!(linear.score, quadratic.score, "v={:?} w={:?}", v, w);

            for result in [&linear, &quadratic] {
                assert_eq!(result.aligned_v.len(), result.aligned_w.len());
                assert_eq!(result.alignment.len(), result.aligned_v.len());
                assert_eq!(strip_gaps(&result.aligned_v), v);
                assert_eq!(strip_gaps(&result.aligned_w), w);
                assert_eq!(result.rescore(&scoring), Some(result.score));
                assert!(result.aligned_v.iter().zip(&result.aligned_w).all(|(&a, &b)| a != GAP || b != GAP));
            }
        }
    }

    #[test]
    fn test_random_asymmetric_table_agrees_with_dp() {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet = Alphabet::new(b"ACGT-").unwrap();

        for _ in 0..100 {
            let rows: Vec<Vec<i32>> = (0..alphabet.len())
                .map(|_| (0..alphabet.len()).map(|_| rng.random_range(-6..=4)).collect())
                .collect();
            let scoring = ScoringModel::from_rows(alphabet.clone(), &rows).unwrap();

            let v = random_seq(&mut rng, 25);
            let w = random_seq(&mut rng, 25);

            let linear = Hirschberg::new(&scoring).align(&v, &w).unwrap();
            let quadratic = NeedlemanWunsch::new(&scoring).align(&v, &w).unwrap();

            assert_eq!(linear.score, quadratic.score);
            assert_eq!(linear.rescore(&scoring), Some(linear.score));
        }
    }

    #[test]
    fn test_symmetric_scoring_gives_symmetric_scores() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let scoring = dna_scoring(random_params(&mut rng));
            let v = random_seq(&mut rng, 20);
            let w = random_seq(&mut rng, 20);

            let forward = Hirschberg::new(&scoring).align(&v, &w).unwrap();
            let backward = Hirschberg::new(&scoring).align(&w, &v).unwrap();
            assert_eq!(forward.score, backward.score);
        }
    }
}
