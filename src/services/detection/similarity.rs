// Similarity Scorer
// TF-IDF vectors over a joint two-document vocabulary, compared by cosine

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    #[error("empty vocabulary; the documents contain no terms")]
    EmptyVocabulary,
    #[error("vectorizer encoded {0} documents, expected 2")]
    DocumentCount(usize),
}

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("valid token pattern"))
}

/// Smoothed TF-IDF with L2-normalized rows.
#[derive(Debug, Default, Clone)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn analyze(doc: &str) -> Vec<String> {
        let lower = doc.to_lowercase();
        token_regex()
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    /// Learn vocabulary and idf from `docs`, returning one row per document.
    pub fn fit_transform<S: AsRef<str>>(&mut self, docs: &[S]) -> Result<Vec<Vec<f64>>, SimilarityError> {
        let analyzed: Vec<Vec<String>> = docs.iter().map(|d| Self::analyze(d.as_ref())).collect();

        let mut terms: BTreeMap<String, usize> = BTreeMap::new();
        for doc in &analyzed {
            for term in doc {
                terms.entry(term.clone()).or_insert(0);
            }
        }
        if terms.is_empty() {
            return Err(SimilarityError::EmptyVocabulary);
        }
        for (idx, slot) in terms.values_mut().enumerate() {
            *slot = idx;
        }

        let n_docs = analyzed.len() as f64;
        let mut df = vec![0usize; terms.len()];
        let mut counts: Vec<Vec<f64>> = Vec::with_capacity(analyzed.len());
        for doc in &analyzed {
            let mut row = vec![0.0; terms.len()];
            for term in doc {
                row[terms[term]] += 1.0;
            }
            for (col, value) in row.iter().enumerate() {
                if *value > 0.0 {
                    df[col] += 1;
                }
            }
            counts.push(row);
        }

        self.idf = df
            .iter()
            .map(|&d| ((1.0 + n_docs) / (1.0 + d as f64)).ln() + 1.0)
            .collect();
        self.vocabulary = terms;

        Ok(counts
            .into_iter()
            .map(|mut row| {
                for (value, idf) in row.iter_mut().zip(&self.idf) {
                    *value *= idf;
                }
                l2_normalize(&mut row);
                row
            })
            .collect())
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in row.iter_mut() {
            *value /= norm;
        }
    }
}

/// Cosine of two equal-length vectors; 0.0 if either is all zeros.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

pub fn tfidf_similarity(original: &str, candidate: &str) -> Result<f64, SimilarityError> {
    let matrix = TfidfVectorizer::new().fit_transform(&[original, candidate])?;
    match matrix.as_slice() {
        [a, b] => Ok(cosine_similarity(a, b)),
        rows => Err(SimilarityError::DocumentCount(rows.len())),
    }
}
