// Fake resources for deterministic engine tests

use super::{tokenizer, LinguisticResources};
use crate::models::Pos;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Real tokenization, table-driven everything else. Untagged words are `NN`,
/// lemmas default to the word itself.
#[derive(Debug, Default)]
pub(crate) struct FakeResources {
    tags: HashMap<String, String>,
    lemmas: HashMap<String, String>,
    synonyms: HashMap<(String, Pos), BTreeSet<String>>,
    stopwords: HashSet<String>,
}

impl FakeResources {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn tag(mut self, word: &str, tag: &str) -> Self {
        self.tags.insert(word.to_string(), tag.to_string());
        self
    }

    pub(crate) fn lemma(mut self, word: &str, lemma: &str) -> Self {
        self.lemmas.insert(word.to_string(), lemma.to_string());
        self
    }

    pub(crate) fn synonyms(mut self, lemma: &str, pos: Pos, candidates: &[&str]) -> Self {
        self.synonyms.insert(
            (lemma.to_string(), pos),
            candidates.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    pub(crate) fn stopword(mut self, word: &str) -> Self {
        self.stopwords.insert(word.to_string());
        self
    }
}

impl LinguisticResources for FakeResources {
    fn tokenize_sentences(&self, text: &str) -> Vec<String> {
        tokenizer::split_sentences(text)
    }

    fn tokenize_words(&self, sentence: &str) -> Vec<String> {
        tokenizer::tokenize_words(sentence)
    }

    fn tag_pos(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| {
                if !t.chars().any(char::is_alphanumeric) {
                    t.clone()
                } else {
                    self.tags.get(t).cloned().unwrap_or_else(|| "NN".to_string())
                }
            })
            .collect()
    }

    fn lemmatize(&self, word: &str, _pos: Pos) -> String {
        self.lemmas.get(word).cloned().unwrap_or_else(|| word.to_string())
    }

    fn synonyms_for(&self, lemma: &str, pos: Pos) -> BTreeSet<String> {
        self.synonyms
            .get(&(lemma.to_string(), pos))
            .cloned()
            .unwrap_or_default()
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}
