// Feature Extractors
// Four independent text signals, each a pure function of (text, resources)

use crate::models::{Pos, SentenceInspection, TaggedToken};
use crate::services::lexicon::LinguisticResources;
use crate::services::text_processor::{char_count, is_alphanumeric_token};
use std::collections::HashMap;

/// Markers counted by `conjunction_density`. Matched case-sensitively against
/// single tokens, so the two-word markers never match a tokenized sentence.
pub const COMPLEX_CONJUNCTIONS: [&str; 9] = [
    "moreover",
    "furthermore",
    "additionally",
    "however",
    "nevertheless",
    "on the contrary",
    "alternatively",
    "or else",
    "either",
];

/// Subtracted from the mean sentence entropy.
pub const ENTROPY_BASELINE: f64 = 2.0;

const LONG_SENTENCE_CHARS: usize = 50;
const MIN_ENTROPY_TOKENS: usize = 3;

/// Share of alphanumeric tokens that have a synonym also present in their
/// own sentence.
pub fn synonym_irregularity<R: LinguisticResources + ?Sized>(resources: &R, text: &str) -> f64 {
    let mut irregular = 0usize;
    let mut total = 0usize;

    for sentence in resources.tokenize_sentences(text) {
        let tagged = resources.tagged_words(&sentence);
        for (word, tag) in &tagged {
            if !is_alphanumeric_token(word) {
                continue;
            }
            total += 1;

            // Looked up by surface form, compared against surface forms.
            let synonyms = resources.synonyms_for(word, Pos::from_treebank(tag));
            if synonyms.len() > 1
                && synonyms
                    .iter()
                    .any(|syn| syn != word && tagged.iter().any(|(other, _)| other == syn))
            {
                irregular += 1;
            }
        }
    }

    if total == 0 {
        0.0
    } else {
        irregular as f64 / total as f64
    }
}

/// Structure points for one sentence: long or semicolon, several commas,
/// any `IN`-tagged token.
pub fn sentence_structure_score<R: LinguisticResources + ?Sized>(
    resources: &R,
    sentence: &str,
) -> f64 {
    let mut score = 0.0;
    if sentence.contains(';') || char_count(sentence) > LONG_SENTENCE_CHARS {
        score += 1.0;
    }
    if sentence.matches(',').count() > 1 {
        score += 1.0;
    }
    let tokens = resources.tokenize_words(sentence);
    if resources.tag_pos(&tokens).iter().any(|tag| tag.starts_with("IN")) {
        score += 0.5;
    }
    score
}

pub fn structure_complexity<R: LinguisticResources + ?Sized>(resources: &R, text: &str) -> f64 {
    let sentences = resources.tokenize_sentences(text);
    if sentences.is_empty() {
        return 0.0;
    }
    let sum: f64 = sentences
        .iter()
        .map(|s| sentence_structure_score(resources, s))
        .sum();
    sum / sentences.len() as f64
}

/// Shannon entropy (bits) of the token distribution, or `None` for sentences
/// of three tokens or fewer.
pub fn token_entropy<S: AsRef<str>>(tokens: &[S]) -> Option<f64> {
    if tokens.len() <= MIN_ENTROPY_TOKENS {
        return None;
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_ref()).or_insert(0) += 1;
    }
    let n = tokens.len() as f64;
    let entropy = counts
        .values()
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.log2()
        })
        .sum();
    Some(entropy)
}

pub fn order_entropy<R: LinguisticResources + ?Sized>(resources: &R, text: &str) -> f64 {
    let scores: Vec<f64> = resources
        .tokenize_sentences(text)
        .iter()
        .filter_map(|s| token_entropy(&resources.tokenize_words(s)))
        .collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64 - ENTROPY_BASELINE
}

pub fn has_complex_conjunction<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens
        .iter()
        .any(|t| COMPLEX_CONJUNCTIONS.contains(&t.as_ref()))
}

pub fn conjunction_density<R: LinguisticResources + ?Sized>(resources: &R, text: &str) -> f64 {
    let sentences = resources.tokenize_sentences(text);
    if sentences.is_empty() {
        return 0.0;
    }
    let hits = sentences
        .iter()
        .filter(|s| has_complex_conjunction(&resources.tokenize_words(s)))
        .count();
    hits as f64 / sentences.len() as f64
}

/// Per-sentence view of the signals above, for diagnostics.
pub fn inspect_sentences<R: LinguisticResources + ?Sized>(
    resources: &R,
    text: &str,
) -> Vec<SentenceInspection> {
    resources
        .tokenize_sentences(text)
        .into_iter()
        .enumerate()
        .map(|(index, sentence)| {
            let tagged = resources.tagged_words(&sentence);
            let words: Vec<&str> = tagged.iter().map(|(w, _)| w.as_str()).collect();
            SentenceInspection {
                index,
                structure_score: sentence_structure_score(resources, &sentence),
                entropy: token_entropy(&words),
                has_complex_conjunction: has_complex_conjunction(&words),
                tokens: tagged
                    .into_iter()
                    .map(|(text, tag)| TaggedToken { text, tag })
                    .collect(),
                text: sentence,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::lexicon::testing::FakeResources;

    #[test]
    fn test_empty_text_scores_zero() {
        let resources = FakeResources::new();
        for text in ["", "   \n\t "] {
            assert_eq!(synonym_irregularity(&resources, text), 0.0);
            assert_eq!(structure_complexity(&resources, text), 0.0);
            assert_eq!(order_entropy(&resources, text), 0.0);
            assert_eq!(conjunction_density(&resources, text), 0.0);
        }
    }

    #[test]
    fn test_synonym_irregularity_counts_redundant_synonyms() {
        let resources = FakeResources::new()
            .tag("happy", "JJ")
            .tag("glad", "JJ")
            .synonyms("happy", Pos::Adjective, &["happy", "glad"])
            .synonyms("glad", Pos::Adjective, &["glad", "happy"]);
        // Tokens: happy and glad . -> 3 alphanumeric, 2 irregular.
        let score = synonym_irregularity(&resources, "happy and glad.");
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_synonym_irregularity_needs_more_than_one_candidate() {
        let resources = FakeResources::new().synonyms("word", Pos::Noun, &["word"]);
        assert_eq!(synonym_irregularity(&resources, "word word word."), 0.0);
    }

    #[test]
    fn test_synonym_irregularity_ignores_other_sentences() {
        let resources = FakeResources::new()
            .tag("happy", "JJ")
            .tag("glad", "JJ")
            .synonyms("happy", Pos::Adjective, &["happy", "glad"]);
        assert_eq!(synonym_irregularity(&resources, "He is happy. She is glad."), 0.0);
    }

    #[test]
    fn test_structure_score_components() {
        let resources = FakeResources::new().tag("of", "IN");
        assert_eq!(sentence_structure_score(&resources, "Short one."), 0.0);
        assert_eq!(sentence_structure_score(&resources, "A; b."), 1.0);
        assert_eq!(sentence_structure_score(&resources, "A, b, c."), 1.0);
        assert_eq!(sentence_structure_score(&resources, "Top of it."), 0.5);
        let long = "This sentence, which is long, keeps going well past the fifty char mark.";
        assert_eq!(sentence_structure_score(&resources, long), 2.0);
    }

    #[test]
    fn test_structure_complexity_averages_sentences() {
        let resources = FakeResources::new();
        let score = structure_complexity(&resources, "A; b. Plain words.");
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_token_entropy() {
        assert_eq!(token_entropy(&["a", "b", "c"]), None);
        let uniform = token_entropy(&["a", "b", "c", "d"]).unwrap();
        assert!((uniform - 2.0).abs() < 1e-9);
        let repeated = token_entropy(&["a", "a", "a", "a"]).unwrap();
        assert!(repeated.abs() < 1e-9);
    }

    #[test]
    fn test_order_entropy_subtracts_baseline() {
        let resources = FakeResources::new();
        // "one two three ." has four distinct tokens: entropy 2.0.
        assert!(order_entropy(&resources, "one two three.").abs() < 1e-9);
        // Too short to qualify.
        assert_eq!(order_entropy(&resources, "Hi there."), 0.0);
    }

    #[test]
    fn test_conjunction_density_is_literal() {
        let resources = FakeResources::new();
        let text = "It rained. Moreover it poured. We stayed, moreover, inside. On the contrary no.";
        // Only the lowercase single-token "moreover" counts.
        assert!((conjunction_density(&resources, text) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_inspect_sentences() {
        let resources = FakeResources::new().tag("of", "IN");
        let report = inspect_sentences(&resources, "Top of it. Hi. However, fine moreover.");
        assert_eq!(report.len(), 3);
        assert_eq!(report[0].structure_score, 0.5);
        assert_eq!(report[0].tokens[1].tag, "IN");
        assert!(report[0].entropy.is_some());
        assert_eq!(report[1].entropy, None);
        assert!(report[2].has_complex_conjunction);
        assert_eq!(report[2].index, 2);
    }
}
