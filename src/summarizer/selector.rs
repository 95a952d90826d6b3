//! Top-K sentence selection for summarization
//!
//! Picks the highest-scoring sentences and returns them in document order,
//! so the summary reads in the article's own narrative order.

use crate::pagerank::RankVector;

/// A selected sentence with its score
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSentence {
    /// Sentence position in the document
    pub index: usize,
    /// LexRank score (zero for fallback sentences)
    pub score: f64,
    /// Whether the sentence was ranked or added as a zero-term fallback
    pub ranked: bool,
}

/// Top-K sentence selector
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    pub fn new() -> Self {
        Self
    }

    /// Select up to `sentence_count` sentences from a ranking
    ///
    /// Ranked sentences go first by score (near ties to the earlier
    /// position). When fewer than `sentence_count` sentences were ranked,
    /// the earliest `fallback` sentences (zero-term ones) fill the gap. The
    /// result is in document order.
    pub fn select(
        &self,
        ranks: &RankVector,
        sentence_count: usize,
        fallback: &[usize],
    ) -> Vec<SelectedSentence> {
        let mut selected: Vec<SelectedSentence> = ranks
            .top_n(sentence_count)
            .into_iter()
            .map(|(index, score)| SelectedSentence {
                index,
                score,
                ranked: true,
            })
            .collect();

        if selected.len() < sentence_count {
            let mut spare: Vec<usize> = fallback
                .iter()
                .copied()
                .filter(|idx| !ranks.sentence_indices.contains(idx))
                .collect();
            spare.sort_unstable();
            spare.dedup();

            let missing = sentence_count - selected.len();
            selected.extend(spare.into_iter().take(missing).map(|index| SelectedSentence {
                index,
                score: 0.0,
                ranked: false,
            }));
        }

        // Sort by document order
        selected.sort_by_key(|s| s.index);
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagerank::ConvergenceStatus;

    fn ranks(pairs: &[(usize, f64)]) -> RankVector {
        RankVector::new(
            pairs.iter().map(|p| p.1).collect(),
            pairs.iter().map(|p| p.0).collect(),
            3,
            0.0,
            ConvergenceStatus::Converged,
        )
    }

    fn indices(selected: &[SelectedSentence]) -> Vec<usize> {
        selected.iter().map(|s| s.index).collect()
    }

    #[test]
    fn test_top_k_in_document_order() {
        let r = ranks(&[(0, 0.1), (1, 0.4), (2, 0.15), (3, 0.35)]);
        let selected = SentenceSelector::new().select(&r, 2, &[]);

        assert_eq!(indices(&selected), vec![1, 3]);
        assert!(selected.iter().all(|s| s.ranked));
        assert_eq!(selected[0].score, 0.4);
    }

    #[test]
    fn test_ties_prefer_earlier_position() {
        let r = ranks(&[(0, 0.2), (1, 0.3), (2, 0.2), (3, 0.3)]);
        let selected = SentenceSelector::new().select(&r, 3, &[]);

        assert_eq!(indices(&selected), vec![0, 1, 3]);
    }

    #[test]
    fn test_k_larger_than_ranked_uses_fallback() {
        // Sentences 1 and 4 had no terms and were not ranked
        let r = ranks(&[(0, 0.5), (2, 0.3), (3, 0.2)]);
        let selected = SentenceSelector::new().select(&r, 4, &[4, 1]);

        assert_eq!(indices(&selected), vec![0, 1, 2, 3]);
        let fallback = selected.iter().find(|s| s.index == 1).unwrap();
        assert!(!fallback.ranked);
        assert_eq!(fallback.score, 0.0);
    }

    #[test]
    fn test_fallback_unused_when_enough_ranked() {
        let r = ranks(&[(0, 0.5), (2, 0.5)]);
        let selected = SentenceSelector::new().select(&r, 2, &[1]);

        assert_eq!(indices(&selected), vec![0, 2]);
    }

    #[test]
    fn test_zero_count_selects_nothing() {
        let r = ranks(&[(0, 0.6), (1, 0.4)]);
        assert!(SentenceSelector::new().select(&r, 0, &[2]).is_empty());
    }

    #[test]
    fn test_empty_ranking() {
        let r = ranks(&[]);
        let selected = SentenceSelector::new().select(&r, 3, &[]);

        assert!(selected.is_empty());
    }
}
