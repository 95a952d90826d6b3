use rapid_lexrank::{
    summarize, Article, BatchSummarizer, ConvergenceStatus, IdfMode, LexRankSummarizer,
    PipelineObserver, RankVector, StemmingRule, SummarizerConfig, SummarizerError,
};

const MAMMALS: &str = "Cats are mammals. Dogs are mammals. \
                       The stock market rose today. Mammals are warm-blooded.";

#[derive(Default)]
struct RankCapture {
    ranks: Option<RankVector>,
}

impl PipelineObserver for RankCapture {
    fn on_rank(&mut self, ranks: &RankVector) {
        self.ranks = Some(ranks.clone());
    }
}

#[test]
fn mammal_sentences_outrank_stock_market() {
    let summary = summarize(MAMMALS, 2, &SummarizerConfig::default()).unwrap();

    assert_eq!(summary.len(), 2);
    let indices = summary.indices();
    assert!(indices[0] < indices[1]);
    assert!(indices.iter().all(|i| [0, 1, 3].contains(i)));
    assert!(!summary.text().contains("stock market"));
    assert!(summary.converged());
}

#[test]
fn stock_market_sentence_scores_lowest() {
    let summarizer = LexRankSummarizer::new(SummarizerConfig::default()).unwrap();
    let mut capture = RankCapture::default();
    summarizer
        .summarize_with_observer(MAMMALS, 2, &mut capture)
        .unwrap();

    let ranks = capture.ranks.unwrap();
    assert_eq!(ranks.status, ConvergenceStatus::Converged);
    let stock = ranks.score_for_sentence(2);
    assert!([0, 1, 3]
        .iter()
        .all(|&i| ranks.score_for_sentence(i) > stock));
}

#[test]
fn reference_idf_formula_keeps_earliest_mammal_sentences() {
    // "mammal" appears in 3 of 4 sentences, so ln(4 / 4) gives it no weight
    let config = SummarizerConfig::default().with_idf_mode(IdfMode::Standard);
    let summary = summarize(MAMMALS, 2, &config).unwrap();

    assert_eq!(summary.indices(), vec![0, 1]);
}

#[test]
fn single_sentence_document_returned_as_is() {
    let summary = summarize("Only one sentence.", 3, &SummarizerConfig::default()).unwrap();

    assert_eq!(summary.text(), "Only one sentence.");
    assert!(summary.ranking.is_none());
}

#[test]
fn empty_string_is_empty_document() {
    assert_eq!(
        summarize("", 3, &SummarizerConfig::default()),
        Err(SummarizerError::EmptyDocument)
    );
}

#[test]
fn invalid_config_is_rejected_before_running() {
    let config = SummarizerConfig::default().with_similarity_threshold(2.0);
    assert!(matches!(
        summarize(MAMMALS, 2, &config),
        Err(SummarizerError::InvalidConfig(_))
    ));
}

#[test]
fn config_from_json_drives_summarizer() {
    let config = SummarizerConfig::from_json(
        r#"{"similarity_threshold": 0.05, "stemming": "none", "idf_mode": "smoothed"}"#,
    )
    .unwrap();
    assert_eq!(config.stemming, StemmingRule::None);
    assert_eq!(config.idf_mode, IdfMode::Smoothed);

    let summary = summarize(MAMMALS, 2, &config).unwrap();
    assert_eq!(summary.len(), 2);
}

#[test]
fn abbreviations_do_not_split_sentences() {
    let text = "Dr. Smith studies glaciers. Glaciers shape valleys. \
                Mr. Jones sells copper pipes.";
    let summarizer = LexRankSummarizer::new(SummarizerConfig::default()).unwrap();
    let (document, _) = summarizer.summarize_document("abbr", text, 1).unwrap();

    assert_eq!(document.len(), 3);
    assert_eq!(document.sentences()[0].text, "Dr. Smith studies glaciers.");
}

#[test]
fn batch_isolates_failures_and_keeps_order() {
    let articles = vec![
        Article::new("first", MAMMALS),
        Article::new("broken", "   "),
        Article::new(
            "third",
            "Glaciers carve valleys. Valleys hold lakes. Lakes freeze in winter.",
        ),
    ];
    let batch = BatchSummarizer::with_max_threads(SummarizerConfig::default(), Some(2))
        .unwrap()
        .with_sentence_count(2);
    let report = batch.summarize_batch(&articles);

    let ids: Vec<&str> = report.outcomes.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "broken", "third"]);
    assert_eq!(report.success_count(), 2);
    assert_eq!(
        report.outcomes[1].result,
        Err(SummarizerError::EmptyDocument)
    );
    for (_, summary) in report.successes() {
        assert_eq!(summary.len(), 2);
    }
}
