// Configuration Storage Service
// Handles config file read/write and version backup

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const KEEP_BACKUPS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub paraphrase: ParaphraseConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            paraphrase: ParaphraseConfig::default(),
            lexicon: LexiconConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.paraphrase.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParaphraseConfig {
    #[serde(default = "default_true")]
    pub synonym_substitution: bool,
    #[serde(default = "default_swap_probability")]
    pub word_swap_probability: f64,
    #[serde(default)]
    pub rules: RuleProbabilities,
}

impl Default for ParaphraseConfig {
    fn default() -> Self {
        Self {
            synonym_substitution: true,
            word_swap_probability: 0.1,
            rules: RuleProbabilities::default(),
        }
    }
}

impl ParaphraseConfig {
    /// Substitution stays on; the swap and every structural gate are closed.
    pub fn substitution_only() -> Self {
        Self {
            synonym_substitution: true,
            word_swap_probability: 0.0,
            rules: RuleProbabilities::disabled(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        check_probability("wordSwapProbability", self.word_swap_probability)?;
        for (name, p) in self.rules.named() {
            check_probability(name, p)?;
        }
        Ok(())
    }
}

/// Gate probabilities for the structural rewrite rules, in application order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleProbabilities {
    #[serde(default = "default_clause_insertion")]
    pub clause_insertion: f64,
    #[serde(default = "default_relative_pronoun")]
    pub relative_pronoun: f64,
    #[serde(default = "default_passive_inversion")]
    pub passive_inversion: f64,
    #[serde(default = "default_appositive")]
    pub appositive: f64,
    #[serde(default = "default_conjunction_replacement")]
    pub conjunction_replacement: f64,
    #[serde(default = "default_punctuation_softening")]
    pub punctuation_softening: f64,
    #[serde(default = "default_sentence_splitting")]
    pub sentence_splitting: f64,
    #[serde(default = "default_intro_phrase")]
    pub intro_phrase: f64,
}

impl Default for RuleProbabilities {
    fn default() -> Self {
        Self {
            clause_insertion: 0.3,
            relative_pronoun: 0.25,
            passive_inversion: 0.2,
            appositive: 0.15,
            conjunction_replacement: 1.0,
            punctuation_softening: 0.3,
            sentence_splitting: 0.2,
            intro_phrase: 0.15,
        }
    }
}

impl RuleProbabilities {
    pub fn disabled() -> Self {
        Self {
            clause_insertion: 0.0,
            relative_pronoun: 0.0,
            passive_inversion: 0.0,
            appositive: 0.0,
            conjunction_replacement: 0.0,
            punctuation_softening: 0.0,
            sentence_splitting: 0.0,
            intro_phrase: 0.0,
        }
    }

    pub fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("rules.clauseInsertion", self.clause_insertion),
            ("rules.relativePronoun", self.relative_pronoun),
            ("rules.passiveInversion", self.passive_inversion),
            ("rules.appositive", self.appositive),
            ("rules.conjunctionReplacement", self.conjunction_replacement),
            ("rules.punctuationSoftening", self.punctuation_softening),
            ("rules.sentenceSplitting", self.sentence_splitting),
            ("rules.introPhrase", self.intro_phrase),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LexiconConfig {
    #[serde(default)]
    pub thesaurus_path: Option<PathBuf>,
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

fn check_probability(name: &str, p: f64) -> Result<(), String> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(format!("{} must be within [0, 1], got {}", name, p))
    }
}

fn default_version() -> String { "1".to_string() }
fn default_true() -> bool { true }
fn default_swap_probability() -> f64 { 0.1 }
fn default_clause_insertion() -> f64 { 0.3 }
fn default_relative_pronoun() -> f64 { 0.25 }
fn default_passive_inversion() -> f64 { 0.2 }
fn default_appositive() -> f64 { 0.15 }
fn default_conjunction_replacement() -> f64 { 1.0 }
fn default_punctuation_softening() -> f64 { 0.3 }
fn default_sentence_splitting() -> f64 { 0.2 }
fn default_intro_phrase() -> f64 { 0.15 }

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join("config.json");
        Self { config_dir, config_file }
    }

    /// Store backed by an explicit file instead of `<dir>/config.json`.
    pub fn at_file(config_file: PathBuf) -> Self {
        let config_dir = config_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self { config_dir, config_file }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("paraguard"))
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> Result<(), String> {
        fs::create_dir_all(&self.config_dir)
            .map_err(|e| format!("Failed to create config dir: {}", e))
    }

    /// Load configuration from file
    pub fn load(&self) -> Result<AppConfig, String> {
        if !self.config_file.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_file)
            .map_err(|e| format!("Failed to read config: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, config: &AppConfig) -> Result<(), String> {
        config.validate()?;
        self.ensure_dir()?;

        // Create backup if file exists
        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(&self.config_file, content)
            .map_err(|e| format!("Failed to write config: {}", e))
    }

    fn backup_dir(&self) -> PathBuf {
        self.config_dir.join("backups")
    }

    /// `<stem>_` so stores sharing a directory keep separate backup sets.
    fn backup_prefix(&self) -> String {
        let stem = self
            .config_file
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "config".to_string());
        format!("{}_", stem)
    }

    /// Copy the current file into `backups/`, then prune that set to the newest ten.
    fn create_backup(&self) -> Result<PathBuf, String> {
        let backup_dir = self.backup_dir();
        fs::create_dir_all(&backup_dir)
            .map_err(|e| format!("Failed to create backup dir: {}", e))?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%3f");
        let backup_file = backup_dir.join(format!("{}{}.json", self.backup_prefix(), timestamp));
        fs::copy(&self.config_file, &backup_file)
            .map_err(|e| format!("Failed to create backup: {}", e))?;

        let pruned =
            crate::prune_oldest_files(&backup_dir, &self.backup_prefix(), ".json", KEEP_BACKUPS);
        debug!(backup = %backup_file.display(), pruned, "config.backup_created");
        Ok(backup_file)
    }
}
