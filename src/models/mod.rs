// Paraguard Data Models
// Shared types for the detection and paraphrase engines

use serde::{Deserialize, Serialize};

// ============ Part of Speech ============

/// Coarse part-of-speech category used for lemma and synonym lookups.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pos {
    #[serde(alias = "a", alias = "adj")]
    Adjective,
    #[serde(alias = "v")]
    Verb,
    #[serde(alias = "n")]
    Noun,
    #[serde(alias = "r", alias = "adv")]
    Adverb,
}

impl Pos {
    /// Map a Treebank tag onto a coarse category. Anything unrecognized is a noun.
    pub fn from_treebank(tag: &str) -> Self {
        match tag.chars().next() {
            Some('J') => Self::Adjective,
            Some('V') => Self::Verb,
            Some('R') => Self::Adverb,
            _ => Self::Noun,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adjective => "adjective",
            Self::Verb => "verb",
            Self::Noun => "noun",
            Self::Adverb => "adverb",
        }
    }
}

// ============ Feature Vector ============

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub synonym_irregularity: f64,
    pub structure_complexity: f64,
    /// Mean sentence entropy minus the 2.0 baseline; may be negative.
    pub order_entropy: f64,
    pub conjunction_density: f64,
    /// Always within [0, 1]; 0.0 when no original document was supplied.
    pub similarity: f64,
}

// ============ Verdict ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictLabel {
    Manipulated,
    Natural,
}

impl VerdictLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manipulated => "manipulated",
            Self::Natural => "natural",
        }
    }

    /// Human-readable sentence for CLI output.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Manipulated => "Text appears manipulated.",
            Self::Natural => "Text appears natural.",
        }
    }
}

impl std::fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManipulationVerdict {
    pub total_score: f64,
    pub label: VerdictLabel,
}

// ============ Detection Report ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureContribution {
    pub feature: String,
    pub value: f64,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub request_id: String,
    pub features: FeatureVector,
    pub contributions: Vec<FeatureContribution>,
    pub total_score: f64,
    pub label: VerdictLabel,
    pub sentence_count: usize,
    pub compared_with_original: bool,
    pub version: String,
}

// ============ Inspection ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedToken {
    pub text: String,
    pub tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceInspection {
    pub index: usize,
    pub text: String,
    pub tokens: Vec<TaggedToken>,
    pub structure_score: f64,
    /// None when the sentence has too few tokens to qualify.
    pub entropy: Option<f64>,
    pub has_complex_conjunction: bool,
}
