// Paraphrase Pipeline
// Sentence-by-sentence mutation and structural rewriting of a whole document

use super::mutator::SentenceMutator;
use super::structural::StructuralTransformer;
use crate::services::config_store::{AppConfig, ParaphraseConfig};
use crate::services::document_loader::{read_document, LoadError};
use crate::services::lexicon::{EnglishResources, LinguisticResources, ResourceError};
use crate::services::text_processor::join_tokens;
use rand::Rng;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ParaphraseError {
    #[error("processing error: {0}")]
    Load(#[from] LoadError),
    #[error("failed to initialize linguistic resources: {0}")]
    Resources(#[from] ResourceError),
}

#[derive(Debug, Clone, Default)]
pub struct Paraphraser {
    mutator: SentenceMutator,
    structural: StructuralTransformer,
}

impl Paraphraser {
    pub fn new(config: &ParaphraseConfig) -> Self {
        Self {
            mutator: SentenceMutator::new(config),
            structural: StructuralTransformer::new(&config.rules),
        }
    }

    pub fn paraphrase_sentence<R, G>(&self, resources: &R, sentence: &str, rng: &mut G) -> String
    where
        R: LinguisticResources + ?Sized,
        G: Rng,
    {
        let tokens = self.mutator.mutate(resources, sentence, rng);
        self.structural.apply(&join_tokens(&tokens), rng)
    }

    /// Paraphrase every sentence independently and join with single spaces.
    /// Output varies between calls unless `rng` is seeded.
    pub fn paraphrase<R, G>(&self, resources: &R, text: &str, rng: &mut G) -> String
    where
        R: LinguisticResources + ?Sized,
        G: Rng,
    {
        let t0 = Instant::now();
        let sentences = resources.tokenize_sentences(text);
        let output = sentences
            .iter()
            .map(|s| self.paraphrase_sentence(resources, s, rng))
            .collect::<Vec<_>>()
            .join(" ");

        info!(
            sentences = sentences.len(),
            input_chars = text.chars().count(),
            output_chars = output.chars().count(),
            elapsed_ms = t0.elapsed().as_millis(),
            "paraphrase.completed"
        );
        output
    }
}

/// Paraphrase with the default gates and swap probability.
pub fn paraphrase<R, G>(resources: &R, text: &str, rng: &mut G) -> String
where
    R: LinguisticResources + ?Sized,
    G: Rng,
{
    Paraphraser::default().paraphrase(resources, text, rng)
}

pub fn paraphrase_file<R, G>(
    resources: &R,
    path: &Path,
    config: &ParaphraseConfig,
    rng: &mut G,
) -> Result<String, ParaphraseError>
where
    R: LinguisticResources + ?Sized,
    G: Rng,
{
    let text = read_document(path)?;
    Ok(Paraphraser::new(config).paraphrase(resources, &text, rng))
}

/// Build resources from `config`, then load and paraphrase `path`.
pub fn process_document<G: Rng>(
    path: &Path,
    config: &AppConfig,
    rng: &mut G,
) -> Result<String, ParaphraseError> {
    let resources = EnglishResources::from_config(&config.lexicon)?;
    paraphrase_file(&resources, path, &config.paraphrase, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pos;
    use crate::services::lexicon::testing::FakeResources;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn happy_resources() -> FakeResources {
        FakeResources::new()
            .tag("happy", "JJ")
            .synonyms("happy", Pos::Adjective, &["glad", "joyful"])
    }

    #[test]
    fn test_happy_sentence_substitution_only() {
        let resources = happy_resources();
        let paraphraser = Paraphraser::new(&ParaphraseConfig::substitution_only());
        let allowed = ["He is glad .", "He is joyful .", "He is happy ."];
        let mut seen = std::collections::HashSet::new();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = paraphraser.paraphrase(&resources, "He is happy.", &mut rng);
            assert!(allowed.contains(&out.as_str()), "unexpected output {:?}", out);
            seen.insert(out);
        }
        assert!(seen.contains("He is glad ."));
        assert!(seen.contains("He is joyful ."));
    }

    #[test]
    fn test_empty_text_returns_empty() {
        let resources = happy_resources();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(paraphrase(&resources, "", &mut rng), "");
        assert_eq!(paraphrase(&resources, "  \n ", &mut rng), "");
    }

    #[test]
    fn test_sentences_joined_in_order() {
        let resources = FakeResources::new();
        let paraphraser = Paraphraser::new(&ParaphraseConfig::substitution_only());
        let mut rng = StdRng::seed_from_u64(3);
        let out = paraphraser.paraphrase(&resources, "First one here.\n\nSecond one there!", &mut rng);
        assert_eq!(out, "First one here . Second one there !");
    }

    #[test]
    fn test_same_seed_same_output() {
        let resources = happy_resources();
        let text = "He is happy and she is happy, but the dog barked loudly at the mailman.";
        let a = paraphrase(&resources, text, &mut StdRng::seed_from_u64(42));
        let b = paraphrase(&resources, text, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_paraphrase_file_unsupported_format() {
        let resources = happy_resources();
        let mut rng = StdRng::seed_from_u64(0);
        let err = paraphrase_file(&resources, Path::new("doc.rtf"), &ParaphraseConfig::default(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, ParaphraseError::Load(LoadError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_process_document_with_builtin_resources() {
        let path = std::env::temp_dir().join(format!("paraguard-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, "The house is big.").unwrap();
        let mut config = AppConfig::default();
        config.paraphrase = ParaphraseConfig::substitution_only();
        let mut rng = StdRng::seed_from_u64(8);

        let out = process_document(&path, &config, &mut rng).unwrap();
        assert!(out.starts_with("The "));
        assert!(out.ends_with(" ."));
        let _ = std::fs::remove_file(&path);
    }
}
