// Sentence Mutator
// Word-level synonym substitution followed by an occasional token swap

use crate::models::Pos;
use crate::services::config_store::ParaphraseConfig;
use crate::services::lexicon::LinguisticResources;
use crate::services::text_processor::is_alphanumeric_token;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct SentenceMutator {
    synonym_substitution: bool,
    swap_probability: f64,
}

impl Default for SentenceMutator {
    fn default() -> Self {
        Self::new(&ParaphraseConfig::default())
    }
}

/// Replacement candidates for `word`: synonyms of its lemma, minus the lemma
/// and any stopword.
pub fn synonym_candidates<R: LinguisticResources + ?Sized>(
    resources: &R,
    word: &str,
    pos: Pos,
) -> Vec<String> {
    let lemma = resources.lemmatize(word, pos);
    resources
        .synonyms_for(&lemma, pos)
        .into_iter()
        .filter(|candidate| *candidate != lemma && !resources.is_stopword(candidate))
        .collect()
}

impl SentenceMutator {
    pub fn new(config: &ParaphraseConfig) -> Self {
        Self {
            synonym_substitution: config.synonym_substitution,
            swap_probability: config.word_swap_probability,
        }
    }

    /// Tokenize, tag, substitute and perturb one sentence.
    pub fn mutate<R, G>(&self, resources: &R, sentence: &str, rng: &mut G) -> Vec<String>
    where
        R: LinguisticResources + ?Sized,
        G: Rng + ?Sized,
    {
        let tagged = resources.tagged_words(sentence);
        let mut tokens = self.substitute(resources, &tagged, rng);
        self.perturb_order(&mut tokens, rng);
        tokens
    }

    pub fn substitute<R, G>(&self, resources: &R, tagged: &[(String, String)], rng: &mut G) -> Vec<String>
    where
        R: LinguisticResources + ?Sized,
        G: Rng + ?Sized,
    {
        tagged
            .iter()
            .map(|(word, tag)| {
                if !self.synonym_substitution || !is_alphanumeric_token(word) {
                    return word.clone();
                }
                let candidates = synonym_candidates(resources, word, Pos::from_treebank(tag));
                candidates.choose(&mut *rng).cloned().unwrap_or_else(|| word.clone())
            })
            .collect()
    }

    /// Swap two distinct random positions. Never fires below four tokens.
    pub fn perturb_order<G: Rng + ?Sized>(&self, tokens: &mut [String], rng: &mut G) {
        if tokens.len() < 4 || rng.gen::<f64>() >= self.swap_probability {
            return;
        }
        let picked = rand::seq::index::sample(rng, tokens.len(), 2);
        tokens.swap(picked.index(0), picked.index(1));
    }
}
