// Detection Module
// Manipulation-likelihood scoring organized into specialized submodules:
// - features: the four text signals computed per document
// - similarity: TF-IDF cosine similarity against an original document
// - aggregation: fixed weights and the verdict threshold
// - detector: end-to-end scoring over text or files

pub mod aggregation;
pub mod detector;
pub mod features;
pub mod similarity;

pub use aggregation::{aggregate, contributions, total_score, verdict_label, MANIPULATION_THRESHOLD};
pub use detector::{analyze, detect_manipulation_files, extract_features, score_manipulation, DetectionError};
pub use features::{
    conjunction_density,
    has_complex_conjunction,
    inspect_sentences,
    order_entropy,
    sentence_structure_score,
    structure_complexity,
    synonym_irregularity,
    token_entropy,
    COMPLEX_CONJUNCTIONS,
};
pub use similarity::{cosine_similarity, tfidf_similarity, SimilarityError, TfidfVectorizer};
