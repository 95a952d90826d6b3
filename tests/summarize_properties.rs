use proptest::prelude::*;
use rapid_lexrank::{
    GraphBuilder, LexRankSummarizer, PipelineObserver, RankVector, SimilarityGraph,
    SummarizerConfig, SummarizerError, TfIdfVectorizer,
};

const VOCAB: &[&str] = &[
    "glacier", "volcano", "copper", "harbor", "orchard", "violin", "meteor", "lantern", "falcon",
    "canyon", "tundra", "quartz", "walrus", "saffron", "turbine", "comet",
];

fn sentence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 2..6).prop_map(|words| {
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    })
}

fn document_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(sentence_strategy(), 1..12)
}

#[derive(Default)]
struct RankCapture {
    ranks: Option<RankVector>,
}

impl PipelineObserver for RankCapture {
    fn on_rank(&mut self, ranks: &RankVector) {
        self.ranks = Some(ranks.clone());
    }
}

fn summarizer() -> LexRankSummarizer {
    LexRankSummarizer::new(SummarizerConfig::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn summary_is_bounded_and_ordered(sentences in document_strategy(), k in 1usize..8) {
        let text = sentences.join(" ");
        let summary = summarizer().summarize(&text, k).unwrap();

        prop_assert_eq!(summary.total_sentences, sentences.len());
        prop_assert!(summary.len() <= k.min(sentences.len()));
        let indices = summary.indices();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        for s in &summary.sentences {
            prop_assert_eq!(&s.text, &sentences[s.index]);
        }
    }

    #[test]
    fn summary_is_deterministic(sentences in document_strategy(), k in 1usize..5) {
        let text = sentences.join(" ");
        let first = summarizer().summarize(&text, k).unwrap();
        let second = summarizer().summarize(&text, k).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn count_covering_document_returns_it_whole(sentences in document_strategy(), extra in 0usize..3) {
        let text = sentences.join(" ");
        let summary = summarizer().summarize(&text, sentences.len() + extra).unwrap();

        prop_assert!(summary.is_full_document());
        prop_assert!(summary.ranking.is_none());
        prop_assert_eq!(summary.text(), text);
    }

    #[test]
    fn ranks_sum_to_one(sentences in prop::collection::vec(sentence_strategy(), 2..12)) {
        let text = sentences.join(" ");
        let mut capture = RankCapture::default();
        summarizer().summarize_with_observer(&text, 1, &mut capture).unwrap();

        let ranks = capture.ranks.unwrap();
        prop_assert_eq!(ranks.len(), sentences.len());
        prop_assert!((ranks.total() - 1.0).abs() < 1e-9);
        prop_assert!(ranks.scores.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn ranks_sum_to_one_without_convergence(
        sentences in prop::collection::vec(sentence_strategy(), 2..12),
        max_iterations in 1usize..4,
    ) {
        let config = SummarizerConfig::default()
            .with_max_iterations(max_iterations)
            .with_convergence_epsilon(1e-300);
        let text = sentences.join(" ");
        let mut capture = RankCapture::default();
        LexRankSummarizer::new(config)
            .unwrap()
            .summarize_with_observer(&text, 1, &mut capture)
            .unwrap();

        let ranks = capture.ranks.unwrap();
        prop_assert!(ranks.iterations <= max_iterations);
        prop_assert!((ranks.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn similarity_graph_is_symmetric(
        term_lists in prop::collection::vec(
            prop::collection::vec(prop::sample::select(VOCAB).prop_map(String::from), 0..6),
            1..16,
        ),
        threshold in 0.0f64..0.6,
    ) {
        let vectors = TfIdfVectorizer::default().vectorize(&term_lists);
        let graph = SimilarityGraph::from_builder(&GraphBuilder::from_vectors(&vectors, threshold));

        prop_assert!(graph.is_symmetric());
        prop_assert_eq!(graph.num_nodes, term_lists.iter().filter(|t| !t.is_empty()).count());
        for node in 0..graph.num_nodes as u32 {
            for (other, weight) in graph.neighbors(node) {
                prop_assert_ne!(other, node);
                prop_assert!(weight > 0.0 && weight <= 1.0 && weight >= threshold);
            }
        }
    }

    #[test]
    fn whitespace_only_is_empty_document(ws in "[ \t\n\r]{0,20}") {
        prop_assert_eq!(summarizer().summarize(&ws, 3), Err(SummarizerError::EmptyDocument));
    }
}
