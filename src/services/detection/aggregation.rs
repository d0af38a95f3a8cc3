// Aggregation Logic
// Combines the feature vector into a total score and a verdict

use crate::models::{FeatureContribution, FeatureVector, ManipulationVerdict, VerdictLabel};

pub const SYNONYM_WEIGHT: f64 = 0.25;
pub const STRUCTURE_WEIGHT: f64 = 0.20;
pub const ORDER_WEIGHT: f64 = 0.20;
pub const CONJUNCTION_WEIGHT: f64 = 0.15;
pub const SIMILARITY_WEIGHT: f64 = 0.20;

/// Scores strictly above this are labeled manipulated.
pub const MANIPULATION_THRESHOLD: f64 = 0.3;

/// Weighted sum of the five features.
pub fn total_score(features: &FeatureVector) -> f64 {
    features.synonym_irregularity * SYNONYM_WEIGHT
        + features.structure_complexity * STRUCTURE_WEIGHT
        + features.order_entropy * ORDER_WEIGHT
        + features.conjunction_density * CONJUNCTION_WEIGHT
        + features.similarity * SIMILARITY_WEIGHT
}

pub fn verdict_label(total: f64) -> VerdictLabel {
    if total > MANIPULATION_THRESHOLD {
        VerdictLabel::Manipulated
    } else {
        VerdictLabel::Natural
    }
}

pub fn aggregate(features: &FeatureVector) -> ManipulationVerdict {
    let total = total_score(features);
    ManipulationVerdict {
        total_score: total,
        label: verdict_label(total),
    }
}

/// Per-feature breakdown in weighting order.
pub fn contributions(features: &FeatureVector) -> Vec<FeatureContribution> {
    [
        ("synonymIrregularity", features.synonym_irregularity, SYNONYM_WEIGHT),
        ("structureComplexity", features.structure_complexity, STRUCTURE_WEIGHT),
        ("orderEntropy", features.order_entropy, ORDER_WEIGHT),
        ("conjunctionDensity", features.conjunction_density, CONJUNCTION_WEIGHT),
        ("similarity", features.similarity, SIMILARITY_WEIGHT),
    ]
    .into_iter()
    .map(|(feature, value, weight)| FeatureContribution {
        feature: feature.to_string(),
        value,
        weight,
        contribution: value * weight,
    })
    .collect()
}
