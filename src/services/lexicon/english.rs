// Built-in English resource bundle

use super::{tokenizer, Lemmatizer, LinguisticResources, PosTagger, ResourceError, Thesaurus};
use crate::models::Pos;
use crate::services::config_store::LexiconConfig;
use std::collections::{BTreeSet, HashSet};
use stop_words::{get, LANGUAGE};
use tracing::info;

/// Self-contained English provider: rule-based tokenization and tagging, a
/// morphy-style lemmatizer, the embedded thesaurus and the NLTK English
/// stopword list.
#[derive(Debug, Clone)]
pub struct EnglishResources {
    thesaurus: Thesaurus,
    lemmatizer: Lemmatizer,
    tagger: PosTagger,
    stopwords: HashSet<String>,
}

impl EnglishResources {
    pub fn new() -> Result<Self, ResourceError> {
        Ok(Self::with_thesaurus(Thesaurus::builtin()?))
    }

    pub fn with_thesaurus(thesaurus: Thesaurus) -> Self {
        let stopwords = get(LANGUAGE::English)
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            thesaurus,
            lemmatizer: Lemmatizer::new(),
            tagger: PosTagger::new(),
            stopwords,
        }
    }

    /// Built-in resources extended with whatever the config names.
    pub fn from_config(config: &LexiconConfig) -> Result<Self, ResourceError> {
        let mut thesaurus = Thesaurus::builtin()?;
        if let Some(path) = &config.thesaurus_path {
            let extra = Thesaurus::from_file(path)?;
            info!(path = %path.display(), synsets = extra.len(), "lexicon.thesaurus_merged");
            thesaurus.merge(extra);
        }

        let mut resources = Self::with_thesaurus(thesaurus);
        resources.add_stopwords(&config.extra_stopwords);
        Ok(resources)
    }

    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().trim().to_lowercase());
        }
    }

    pub fn thesaurus(&self) -> &Thesaurus {
        &self.thesaurus
    }

    fn is_known(&self, lemma: &str, pos: Pos) -> bool {
        self.thesaurus.contains(lemma, pos)
    }

    /// Categories a surface word can take, directly or through its lemma.
    fn open_class_hints(&self, lower: &str) -> Vec<Pos> {
        let mut hints = self.thesaurus.parts_of_speech(lower);
        for pos in [Pos::Adjective, Pos::Noun, Pos::Verb] {
            if hints.contains(&pos) {
                continue;
            }
            let lemma = self.lemmatize(lower, pos);
            if lemma != lower && self.is_known(&lemma, pos) {
                hints.push(pos);
            }
        }
        hints
    }
}

impl LinguisticResources for EnglishResources {
    fn tokenize_sentences(&self, text: &str) -> Vec<String> {
        tokenizer::split_sentences(text)
    }

    fn tokenize_words(&self, sentence: &str) -> Vec<String> {
        tokenizer::tokenize_words(sentence)
    }

    fn tag_pos(&self, tokens: &[String]) -> Vec<String> {
        self.tagger.tag(tokens, |word| self.open_class_hints(word))
    }

    fn lemmatize(&self, word: &str, pos: Pos) -> String {
        self.lemmatizer
            .lemmatize(word, pos, |candidate, p| self.is_known(candidate, p))
    }

    /// Inflected forms fall back to their lemma's synsets.
    fn synonyms_for(&self, word: &str, pos: Pos) -> BTreeSet<String> {
        if self.is_known(word, pos) {
            return self.thesaurus.synonyms(word, pos);
        }
        self.thesaurus.synonyms(&self.lemmatize(word, pos), pos)
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }
}
