// Paraguard Core Services

pub mod config_store;
pub mod detection;
pub mod document_loader;
pub mod lexicon;
pub mod paraphrase;
pub mod text_processor;

pub use config_store::*;
pub use document_loader::{read_document, DocumentFormat, LoadError};
pub use lexicon::{EnglishResources, LinguisticResources, ResourceError};
pub use text_processor::*;

pub use detection::{
    analyze,
    detect_manipulation_files,
    score_manipulation,
    DetectionError,
    SimilarityError,
};
pub use paraphrase::{paraphrase, paraphrase_file, process_document, ParaphraseError, Paraphraser};
