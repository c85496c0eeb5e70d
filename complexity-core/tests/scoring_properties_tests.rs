// complexity-core/tests/scoring_properties_tests.rs
//! Behavioural tests for the metrics and the document scorer, driven through
//! the public API the way an embedding application would use it.

use test_log::test;

use complexity_core::{
    diversity, entropy_of, headless_score_text, productivity, AnnotatedDocument, AnnotatedSentence,
    ComplexityError, ConlluAnnotator, DocumentScorer, JsonAnnotator, ScoringConfig, StaticAnnotator,
    TaggedSentence, Token,
};

const EPSILON: f64 = 1e-10;

fn sentence(pairs: &[(&str, &str)]) -> AnnotatedSentence {
    AnnotatedSentence::new(pairs.iter().map(|(w, t)| Token::new(*w, "X", *t)).collect())
}

#[test]
fn test_identical_tags_have_no_diversity() {
    for n in 2..10 {
        let tags = vec!["NN"; n];
        assert_eq!(diversity(&tags), 0.0, "n = {}", n);
    }
}

#[test]
fn test_every_pair_of_two_tags_observed_once() {
    // Four equiprobable transitions: AA, AB, BB, BA.
    let tags = ["A", "A", "B", "B", "A"];
    assert!((diversity(&tags) - 4f64.log2()).abs() < EPSILON);
}

#[test]
fn test_all_distinct_symbols_give_log2_length() {
    for n in 1..12usize {
        let symbols: Vec<usize> = (0..n).collect();
        assert!((entropy_of(symbols) - (n as f64).log2()).abs() < EPSILON, "n = {}", n);
    }
}

#[test]
fn test_entropy_is_order_independent() {
    let a = entropy_of(["DT", "NN", "VB", "DT", "JJ", "NN", "NN"]);
    let b = entropy_of(["NN", "JJ", "NN", "DT", "VB", "NN", "DT"]);
    assert!((a - b).abs() < EPSILON);
}

#[test]
fn test_short_sentences_are_degenerate() {
    let scorer = DocumentScorer::default();
    for doc in [vec![sentence(&[])], vec![sentence(&[("alone", "NN")])]] {
        let result = scorer.score_document(&doc).unwrap();
        assert_eq!(result.diversity, 0.0);
        assert_eq!(result.productivity, 1.0);
        assert_eq!(result.complexity, 0.0);
    }
}

#[test]
fn test_productivity_counts_words_per_tag() {
    // Two nouns under NN, one verb: H(W,T) = log2(3), H(T) = H(2/3, 1/3)
    let words = ["cat", "dog", "ran"];
    let tags = ["NN", "NN", "VB"];
    let h_t = -((2.0 / 3.0) * (2.0f64 / 3.0).log2() + (1.0 / 3.0) * (1.0f64 / 3.0).log2());
    let expected = 3f64.log2() - h_t + 1.0;
    assert!((productivity(&words, &tags).unwrap() - expected).abs() < EPSILON);
}

#[test]
fn test_lowercasing_merges_words() {
    // "Dog dog" under one tag is a single word type once lower-cased.
    let doc = vec![sentence(&[("Dog", "NN"), ("dog", "NN")])];
    let folded = DocumentScorer::default().score_document(&doc).unwrap();
    assert_eq!(folded.productivity, 1.0);

    let case_sensitive = DocumentScorer::new(ScoringConfig { lowercase: false, ..ScoringConfig::default() });
    let kept = case_sensitive.score_document(&doc).unwrap();
    assert!((kept.productivity - 2.0).abs() < EPSILON);
}

#[test]
fn test_reference_document_through_conllu() {
    let sentence = "1\tthe\tthe\tDET\tDET\t_\t_\t_\t_\t_\n\
2\tdog\tdog\tNOUN\tNOUN\t_\t_\t_\t_\t_\n\
3\tran\trun\tVERB\tVERB\t_\t_\t_\t_\t_\n\
4\t.\t.\tPUNCT\t.\t_\t_\t_\t_\t_\n";
    let text = format!("{}\n{}", sentence, sentence);

    let result = headless_score_text(&ConlluAnnotator::new(), ScoringConfig::default(), &text).unwrap();
    assert!((result.complexity - 1.0).abs() < EPSILON);
    assert!((result.diversity - 1.0).abs() < EPSILON);
    assert!((result.productivity - 1.0).abs() < EPSILON);
}

#[test]
fn test_json_and_conllu_agree() {
    let conllu = "1\tThe\tthe\tDET\tDT\t_\t_\t_\t_\t_\n\
2\tbig\tbig\tADJ\tJJ\t_\t_\t_\t_\t_\n\
3\tdog\tdog\tNOUN\tNN\t_\t_\t_\t_\t_\n\
4\tsaw\tsee\tVERB\tVBD\t_\t_\t_\t_\t_\n\
5\tthe\tthe\tDET\tDT\t_\t_\t_\t_\t_\n\
6\tcat\tcat\tNOUN\tNN\t_\t_\t_\t_\t_\n";
    let json = r#"[[
        {"text": "The", "upos": "DET", "xpos": "DT"},
        {"text": "big", "upos": "ADJ", "xpos": "JJ"},
        {"text": "dog", "upos": "NOUN", "xpos": "NN"},
        {"text": "saw", "upos": "VERB", "xpos": "VBD"},
        {"text": "the", "upos": "DET", "xpos": "DT"},
        {"text": "cat", "upos": "NOUN", "xpos": "NN"}
    ]]"#;

    let a = headless_score_text(&ConlluAnnotator::new(), ScoringConfig::default(), conllu).unwrap();
    let b = headless_score_text(&JsonAnnotator::new(), ScoringConfig::default(), json).unwrap();
    assert_eq!(a, b);
    assert!(a.complexity > 0.0);
    assert!(a.productivity > 1.0);
}

#[test]
fn test_empty_annotation_is_invalid_input() {
    let annotator = StaticAnnotator::new(AnnotatedDocument::default());
    let err = headless_score_text(&annotator, ScoringConfig::default(), "whatever").unwrap_err();
    assert!(matches!(err, ComplexityError::EmptyDocument));
    assert!(err.to_string().contains("no sentences"));
}

#[test]
fn test_mismatched_tagged_sentence_is_invalid_input() {
    let err = DocumentScorer::default()
        .score_tagged(&[TaggedSentence::new(["a", "b", "c"], ["DT", "NN"])])
        .unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("3 words but 2 tags"));
}

#[test]
fn test_scores_are_finite_and_non_negative() {
    let doc = vec![
        sentence(&[("a", "DT"), ("b", "NN"), ("c", "VB"), ("d", "DT"), ("e", "NN")]),
        sentence(&[("x", "NN")]),
        sentence(&[]),
        sentence(&[("y", "JJ"), ("y", "JJ"), ("z", "JJ")]),
    ];
    let report = DocumentScorer::default().score_detailed(&doc).unwrap();
    for value in [report.result.complexity, report.result.diversity, report.result.productivity] {
        assert!(value.is_finite() && value >= 0.0);
    }
    assert_eq!(report.sentence_count, 4);
}

#[test]
fn test_scorer_is_shareable_across_threads() {
    let scorer = std::sync::Arc::new(DocumentScorer::default());
    let doc = vec![sentence(&[("the", "DT"), ("dog", "NN"), ("ran", "VBD")])];

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let scorer = scorer.clone();
            let doc = doc.clone();
            std::thread::spawn(move || scorer.score_document(&doc).map(|r| r.complexity.to_bits()))
        })
        .collect();

    let results: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
