// Synset thesaurus
// Lemma + POS -> synonym candidates, WordNet style: a word's synonym set is the
// union of every synset it belongs to, itself included.

use super::ResourceError;
use crate::models::Pos;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

const BUILTIN_THESAURUS: &str = include_str!("../../../data/thesaurus.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynsetEntry {
    pub pos: Pos,
    pub lemmas: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ThesaurusFile {
    synsets: Vec<SynsetEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct Thesaurus {
    synsets: Vec<SynsetEntry>,
    index: HashMap<(Pos, String), Vec<usize>>,
}

impl Thesaurus {
    /// The English thesaurus compiled into the binary.
    pub fn builtin() -> Result<Self, ResourceError> {
        Self::from_json(BUILTIN_THESAURUS)
    }

    pub fn from_json(json: &str) -> Result<Self, ResourceError> {
        let file: ThesaurusFile = serde_json::from_str(json)?;
        let mut thesaurus = Self::default();
        for (index, entry) in file.synsets.into_iter().enumerate() {
            thesaurus.insert(index, entry)?;
        }
        Ok(thesaurus)
    }

    pub fn from_file(path: &Path) -> Result<Self, ResourceError> {
        let content = fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    fn insert(&mut self, index: usize, entry: SynsetEntry) -> Result<(), ResourceError> {
        let lemmas: Vec<String> = entry
            .lemmas
            .iter()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        if lemmas.is_empty() {
            return Err(ResourceError::InvalidSynset {
                index,
                reason: "synset has no lemmas".to_string(),
            });
        }

        let slot = self.synsets.len();
        for lemma in &lemmas {
            let ids = self.index.entry((entry.pos, lemma.clone())).or_default();
            if !ids.contains(&slot) {
                ids.push(slot);
            }
        }
        self.synsets.push(SynsetEntry {
            pos: entry.pos,
            lemmas,
        });
        Ok(())
    }

    /// Append every synset of `other`; existing synsets are left untouched.
    pub fn merge(&mut self, other: Thesaurus) {
        for entry in other.synsets {
            // Entries from a built Thesaurus are already validated.
            let _ = self.insert(self.synsets.len(), entry);
        }
    }

    pub fn synonyms(&self, lemma: &str, pos: Pos) -> BTreeSet<String> {
        let key = (pos, lemma.trim().to_lowercase());
        self.index
            .get(&key)
            .into_iter()
            .flatten()
            .flat_map(|&id| self.synsets[id].lemmas.iter().cloned())
            .collect()
    }

    pub fn contains(&self, lemma: &str, pos: Pos) -> bool {
        self.index.contains_key(&(pos, lemma.to_lowercase()))
    }

    /// Every category `word` is listed under, in a fixed order.
    pub fn parts_of_speech(&self, word: &str) -> Vec<Pos> {
        [Pos::Adjective, Pos::Noun, Pos::Verb, Pos::Adverb]
            .into_iter()
            .filter(|pos| self.contains(word, *pos))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }
}
