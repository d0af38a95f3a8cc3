// Manipulation Detector
// Runs the feature extractors and the aggregator over one document

use super::aggregation::{aggregate, contributions};
use super::features::{conjunction_density, order_entropy, structure_complexity, synonym_irregularity};
use super::similarity::{tfidf_similarity, SimilarityError};
use crate::models::{DetectionReport, FeatureVector, ManipulationVerdict};
use crate::services::document_loader::{read_document, LoadError};
use crate::services::lexicon::LinguisticResources;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

/// Any lower failure, reported with the original message and no partial score.
#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("error detecting manipulation: {0}")]
    Load(#[from] LoadError),
    #[error("error detecting manipulation: error calculating TF-IDF similarity: {0}")]
    Similarity(#[from] SimilarityError),
}

/// Compute all five features. An empty or missing original scores 0.0
/// similarity.
pub fn extract_features<R: LinguisticResources + ?Sized>(
    resources: &R,
    text: &str,
    original: Option<&str>,
) -> Result<FeatureVector, DetectionError> {
    let similarity = match original {
        Some(orig) if !orig.is_empty() => tfidf_similarity(orig, text)?,
        _ => 0.0,
    };
    Ok(FeatureVector {
        synonym_irregularity: synonym_irregularity(resources, text),
        structure_complexity: structure_complexity(resources, text),
        order_entropy: order_entropy(resources, text),
        conjunction_density: conjunction_density(resources, text),
        similarity,
    })
}

pub fn score_manipulation<R: LinguisticResources + ?Sized>(
    resources: &R,
    text: &str,
    original: Option<&str>,
) -> Result<ManipulationVerdict, DetectionError> {
    let features = extract_features(resources, text, original)?;
    Ok(aggregate(&features))
}

/// Full scoring run with the per-feature breakdown.
pub fn analyze<R: LinguisticResources + ?Sized>(
    resources: &R,
    text: &str,
    original: Option<&str>,
) -> Result<DetectionReport, DetectionError> {
    let t0 = Instant::now();
    let features = extract_features(resources, text, original)?;
    let verdict = aggregate(&features);
    let sentence_count = resources.tokenize_sentences(text).len();
    let compared_with_original = original.map_or(false, |o| !o.is_empty());

    info!(
        total_score = verdict.total_score,
        label = verdict.label.as_str(),
        sentences = sentence_count,
        with_original = compared_with_original,
        elapsed_ms = t0.elapsed().as_millis(),
        "detection.completed"
    );

    Ok(DetectionReport {
        request_id: uuid::Uuid::new_v4().to_string(),
        contributions: contributions(&features),
        features,
        total_score: verdict.total_score,
        label: verdict.label,
        sentence_count,
        compared_with_original,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Load `path` (and optionally `original_path`) and score it.
pub fn detect_manipulation_files<R: LinguisticResources + ?Sized>(
    resources: &R,
    path: &Path,
    original_path: Option<&Path>,
) -> Result<DetectionReport, DetectionError> {
    let text = read_document(path)?;
    let original = original_path.map(read_document).transpose()?;
    analyze(resources, &text, original.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pos, VerdictLabel};
    use crate::services::lexicon::testing::FakeResources;
    use crate::services::lexicon::EnglishResources;

    #[test]
    fn test_empty_text_is_natural_zero() {
        let resources = FakeResources::new();
        let verdict = score_manipulation(&resources, "", None).unwrap();
        assert_eq!(verdict.total_score, 0.0);
        assert_eq!(verdict.label, VerdictLabel::Natural);
    }

    #[test]
    fn test_identical_documents_are_natural() {
        let resources = FakeResources::new();
        let text = "The cat sat.";
        let report = analyze(&resources, text, Some(text)).unwrap();
        assert!((report.features.similarity - 1.0).abs() < 1e-9);
        assert_eq!(report.features.synonym_irregularity, 0.0);
        assert_eq!(report.features.conjunction_density, 0.0);
        // similarity 0.2 plus entropy (2 - 2) * 0.2
        assert!((report.total_score - 0.2).abs() < 1e-9);
        assert_eq!(report.label, VerdictLabel::Natural);
        assert!(report.compared_with_original);
    }

    #[test]
    fn test_total_matches_weighted_features() {
        let resources = FakeResources::new()
            .tag("happy", "JJ")
            .tag("glad", "JJ")
            .synonyms("happy", Pos::Adjective, &["happy", "glad"]);
        let text = "He is happy and glad; however, it rains, and it pours.";
        let report = analyze(&resources, text, None).unwrap();
        let f = report.features;
        let expected = 0.25 * f.synonym_irregularity
            + 0.20 * f.structure_complexity
            + 0.20 * f.order_entropy
            + 0.15 * f.conjunction_density
            + 0.20 * f.similarity;
        assert!((report.total_score - expected).abs() < 1e-9);
        assert_eq!(f.similarity, 0.0);
        assert_eq!(f.conjunction_density, 1.0);
        assert_eq!(report.sentence_count, 1);
    }

    #[test]
    fn test_empty_original_means_no_comparison() {
        let resources = FakeResources::new();
        let report = analyze(&resources, "Some text here.", Some("")).unwrap();
        assert_eq!(report.features.similarity, 0.0);
        assert!(!report.compared_with_original);
    }

    #[test]
    fn test_similarity_failure_wraps_into_detection_error() {
        let resources = FakeResources::new();
        let err = score_manipulation(&resources, "a", Some("b")).unwrap_err();
        assert!(matches!(err, DetectionError::Similarity(SimilarityError::EmptyVocabulary)));
        assert!(err.to_string().starts_with("error detecting manipulation:"));
    }

    #[test]
    fn test_missing_file_wraps_load_error() {
        let resources = FakeResources::new();
        let err = detect_manipulation_files(&resources, Path::new("missing.pdf"), None).unwrap_err();
        assert!(matches!(err, DetectionError::Load(LoadError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_inflected_token_counts_like_its_base_form() {
        let resources = EnglishResources::new().unwrap();
        // "home" and "house" flag each other.
        let base = synonym_irregularity(&resources, "The home is a house.");
        assert!((base - 2.0 / 5.0).abs() < 1e-9);
        // "homes" still reaches the house synset; "house" finds no verbatim "home".
        let inflected = synonym_irregularity(&resources, "The homes are a house.");
        assert!((inflected - 1.0 / 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_files_end_to_end_with_english_resources() {
        let resources = EnglishResources::new().unwrap();
        let dir = std::env::temp_dir();
        let path = dir.join(format!("paraguard-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, "The dog runs in the park. It is a sunny day.").unwrap();

        let report = detect_manipulation_files(&resources, &path, Some(path.as_path())).unwrap();
        assert!((report.features.similarity - 1.0).abs() < 1e-9);
        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.contributions.len(), 5);
        let _ = std::fs::remove_file(&path);
    }
}
