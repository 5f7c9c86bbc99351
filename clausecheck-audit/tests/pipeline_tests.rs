//! Audit pipeline composition tests with deterministic mock providers.

use std::sync::Arc;

use async_trait::async_trait;
use clausecheck_audit::{AuditError, AuditPipeline, Summarizer};
use clausecheck_match::{ClauseCorpus, ClauseMatcher, EmbeddingProvider, MatcherConfig};

/// Two-dimensional keyword embedder: dimension 0 counts confidentiality
/// vocabulary, dimension 1 termination vocabulary.
struct KeywordEmbedder;

#[async_trait]
impl EmbeddingProvider for KeywordEmbedder {
    async fn embed(&self, text: &str) -> clausecheck_match::Result<Vec<f32>> {
        let lower = text.to_lowercase();
        let count = |kws: &[&str]| {
            kws.iter().map(|kw| lower.matches(kw).count()).sum::<usize>() as f32
        };
        Ok(vec![
            count(&["confidential", "disclose"]),
            count(&["terminat", "notice", "ended"]),
        ])
    }

    fn dimensions(&self) -> usize {
        2
    }
}

struct CannedSummarizer;

#[async_trait]
impl Summarizer for CannedSummarizer {
    async fn summarize(&self, _text: &str) -> clausecheck_audit::Result<String> {
        Ok("- Parties exchange confidential data\n- Either side may exit with notice".to_string())
    }
}

struct BrokenSummarizer;

#[async_trait]
impl Summarizer for BrokenSummarizer {
    async fn summarize(&self, _text: &str) -> clausecheck_audit::Result<String> {
        Err(AuditError::SummaryError("model backend unavailable".to_string()))
    }
}

async fn matcher() -> Arc<ClauseMatcher> {
    let corpus = ClauseCorpus::from_json_str(
        r#"{
            "confidentiality": ["This information shall remain confidential."],
            "termination": ["Either party may terminate with 30 days notice."]
        }"#,
    )
    .unwrap();
    Arc::new(
        ClauseMatcher::builder()
            .config(MatcherConfig::builder().max_chars(40).build().unwrap())
            .corpus(corpus)
            .embedding_provider(Arc::new(KeywordEmbedder))
            .build()
            .await
            .unwrap(),
    )
}

const CONTRACT: &str = "All shared data is confidential and must not be disclosed.\n\n\
                        This agreement may be ended by either side with one month notice.";

#[tokio::test]
async fn full_report_carries_clauses_flags_and_summary() {
    let pipeline = AuditPipeline::builder()
        .matcher(matcher().await)
        .summarizer(Arc::new(CannedSummarizer))
        .build()
        .unwrap();

    let report = pipeline.analyze(CONTRACT).await.unwrap();

    assert_eq!(report.clauses.len(), 2);
    assert_eq!(report.clauses[0].matches[0].clause_type, "confidentiality");
    assert_eq!(report.clauses[1].matches[0].clause_type, "termination");

    assert_eq!(report.flags.len(), 6);
    let confidentiality =
        report.flags.iter().find(|f| f.id == "confidentiality").unwrap();
    assert!(confidentiality.present);
    assert!(report.missing_boilerplate().contains(&"payment_terms"));

    assert!(report.summary.as_deref().unwrap().contains("confidential"));
}

#[tokio::test]
async fn pipeline_without_summarizer_reports_none() {
    let pipeline = AuditPipeline::builder().matcher(matcher().await).build().unwrap();
    let report = pipeline.analyze(CONTRACT).await.unwrap();
    assert!(report.summary.is_none());
    assert!(!report.clauses.is_empty());
}

#[tokio::test]
async fn empty_text_produces_an_empty_but_valid_report() {
    let pipeline = AuditPipeline::builder().matcher(matcher().await).build().unwrap();
    let report = pipeline.analyze("").await.unwrap();
    assert!(report.clauses.is_empty());
    assert_eq!(report.flags.len(), 6);
    assert!(report.flags.iter().all(|f| !f.present));
    assert_eq!(report.missing_boilerplate().len(), 6);
}

#[tokio::test]
async fn summarizer_failure_propagates() {
    let pipeline = AuditPipeline::builder()
        .matcher(matcher().await)
        .summarizer(Arc::new(BrokenSummarizer))
        .build()
        .unwrap();
    let err = pipeline.analyze(CONTRACT).await.unwrap_err();
    assert!(matches!(err, AuditError::SummaryError(_)));
}

#[tokio::test]
async fn missing_matcher_is_a_config_error() {
    let err = AuditPipeline::builder().build().unwrap_err();
    assert!(matches!(err, AuditError::ConfigError(_)));
}

#[tokio::test]
async fn report_round_trips_through_serde() {
    let pipeline = AuditPipeline::builder()
        .matcher(matcher().await)
        .summarizer(Arc::new(CannedSummarizer))
        .build()
        .unwrap();
    let report = pipeline.analyze(CONTRACT).await.unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let parsed: clausecheck_audit::AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}

#[tokio::test]
async fn all_matches_flattens_in_document_order() {
    let pipeline = AuditPipeline::builder().matcher(matcher().await).build().unwrap();
    let report = pipeline.analyze(CONTRACT).await.unwrap();
    let types: Vec<&str> = report.all_matches().map(|m| m.clause_type.as_str()).collect();
    assert_eq!(types, vec!["confidentiality", "termination"]);
}
