// Paraphrase Module
// Document rewriting organized into:
// - mutator: synonym substitution and token swaps inside a sentence
// - structural: probability-gated string rewrites applied in a fixed order
// - pipeline: per-sentence orchestration over a whole document

pub mod mutator;
pub mod pipeline;
pub mod structural;

pub use mutator::{synonym_candidates, SentenceMutator};
pub use pipeline::{paraphrase, paraphrase_file, process_document, ParaphraseError, Paraphraser};
pub use structural::{StructuralRule, StructuralTransformer};
