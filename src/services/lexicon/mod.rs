// Linguistic Resources
// Capability trait consumed by the detection and paraphrase engines, plus the
// built-in English implementation:
// - tokenizer: sentence segmentation and Treebank-style word tokenization
// - tagger: rule and lexicon based Treebank POS tagging
// - lemmatizer: morphy-style suffix detachment with an exception table
// - thesaurus: synset index keyed by (lemma, POS)
// - english: the bundle wiring all of the above together

pub mod english;
pub mod lemmatizer;
pub mod tagger;
pub mod thesaurus;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod testing;

use crate::models::Pos;
use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;

pub use english::EnglishResources;
pub use lemmatizer::Lemmatizer;
pub use tagger::PosTagger;
pub use thesaurus::{SynsetEntry, Thesaurus};

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("failed to read thesaurus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse thesaurus: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid synset #{index}: {reason}")]
    InvalidSynset { index: usize, reason: String },
}

/// Everything the engines need from an NLP toolkit.
///
/// Implementations are read-only once built and may be shared across any
/// number of scoring or paraphrasing calls.
pub trait LinguisticResources {
    fn tokenize_sentences(&self, text: &str) -> Vec<String>;

    fn tokenize_words(&self, sentence: &str) -> Vec<String>;

    /// One Treebank tag per token, same length as `tokens`.
    fn tag_pos(&self, tokens: &[String]) -> Vec<String>;

    /// Base form of `word`, or `word` itself when nothing better is known.
    fn lemmatize(&self, word: &str, pos: Pos) -> String;

    /// Candidate lemmas sharing a synset with `lemma`, the lemma included.
    /// Providers may resolve an inflected form to its lemma first.
    fn synonyms_for(&self, lemma: &str, pos: Pos) -> BTreeSet<String>;

    fn is_stopword(&self, word: &str) -> bool;

    fn tagged_words(&self, sentence: &str) -> Vec<(String, String)> {
        let tokens = self.tokenize_words(sentence);
        let tags = self.tag_pos(&tokens);
        tokens.into_iter().zip(tags).collect()
    }
}
