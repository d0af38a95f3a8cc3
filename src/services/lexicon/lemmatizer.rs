// Lemmatizer
// WordNet morphy: irregular forms come from an exception table, regular forms
// from POS-specific suffix detachment. A candidate only counts if the lexicon
// knows it; the shortest known candidate wins.

use crate::models::Pos;
use std::collections::HashMap;

const NOUN_RULES: [(&str, &str); 8] = [
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: [(&str, &str); 8] = [
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJ_RULES: [(&str, &str); 4] = [("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("is", "be"), ("am", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("has", "have"), ("had", "have"), ("does", "do"), ("did", "do"), ("done", "do"),
    ("went", "go"), ("gone", "go"), ("saw", "see"), ("seen", "see"), ("ran", "run"),
    ("made", "make"), ("took", "take"), ("taken", "take"), ("gave", "give"), ("given", "give"),
    ("came", "come"), ("said", "say"), ("got", "get"), ("gotten", "get"), ("knew", "know"),
    ("known", "know"), ("thought", "think"), ("found", "find"), ("told", "tell"),
    ("felt", "feel"), ("left", "leave"), ("brought", "bring"), ("began", "begin"),
    ("begun", "begin"), ("kept", "keep"), ("held", "hold"), ("wrote", "write"),
    ("written", "write"), ("stood", "stand"), ("heard", "hear"), ("meant", "mean"),
    ("met", "meet"), ("paid", "pay"), ("sat", "sit"), ("spoke", "speak"), ("spoken", "speak"),
    ("led", "lead"), ("grew", "grow"), ("grown", "grow"), ("lost", "lose"), ("fell", "fall"),
    ("fallen", "fall"), ("sent", "send"), ("built", "build"), ("understood", "understand"),
    ("drew", "draw"), ("drawn", "draw"), ("broke", "break"), ("broken", "break"),
    ("spent", "spend"), ("rose", "rise"), ("risen", "rise"), ("drove", "drive"),
    ("driven", "drive"), ("bought", "buy"), ("wore", "wear"), ("worn", "wear"),
    ("chose", "choose"), ("chosen", "choose"), ("sought", "seek"), ("shown", "show"),
    ("taught", "teach"), ("caught", "catch"), ("fought", "fight"), ("won", "win"),
    ("ate", "eat"), ("eaten", "eat"), ("became", "become"), ("hid", "hide"),
    ("hidden", "hide"), ("running", "run"), ("sitting", "sit"), ("getting", "get"),
    ("stopped", "stop"), ("stopping", "stop"), ("planned", "plan"),
];

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"), ("women", "woman"), ("children", "child"), ("people", "person"),
    ("feet", "foot"), ("teeth", "tooth"), ("mice", "mouse"), ("geese", "goose"),
    ("analyses", "analysis"), ("criteria", "criterion"), ("phenomena", "phenomenon"),
    ("lives", "life"), ("wives", "wife"), ("knives", "knife"),
];

const ADJ_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("further", "far"), ("farther", "far"), ("elder", "old"), ("eldest", "old"),
];

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: HashMap<(Pos, String), Vec<&'static str>>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        let mut exceptions: HashMap<(Pos, String), Vec<&'static str>> = HashMap::new();
        let tables = [
            (Pos::Verb, VERB_EXCEPTIONS),
            (Pos::Noun, NOUN_EXCEPTIONS),
            (Pos::Adjective, ADJ_EXCEPTIONS),
        ];
        for (pos, table) in tables {
            for &(form, lemma) in table {
                let lemmas = exceptions.entry((pos, form.to_string())).or_default();
                if !lemmas.contains(&lemma) {
                    lemmas.push(lemma);
                }
            }
        }
        Self { exceptions }
    }

    /// Lemma of `word`, or `word` unchanged when no candidate is known.
    pub fn lemmatize(&self, word: &str, pos: Pos, is_known: impl Fn(&str, Pos) -> bool) -> String {
        let lower = word.to_lowercase();

        let candidates: Vec<String> = match self.exceptions.get(&(pos, lower.clone())) {
            // Exception targets are real lemmas even if the lexicon lacks them.
            Some(lemmas) => {
                let mut found: Vec<String> = lemmas.iter().map(|l| l.to_string()).collect();
                if is_known(&lower, pos) {
                    found.insert(0, lower.clone());
                }
                found
            }
            None => std::iter::once(lower.clone())
                .chain(detach_suffixes(&lower, pos))
                .filter(|c| is_known(c, pos))
                .collect(),
        };

        candidates
            .into_iter()
            .min_by_key(|c| c.chars().count())
            .unwrap_or_else(|| word.to_string())
    }
}

fn detach_suffixes(word: &str, pos: Pos) -> Vec<String> {
    let rules: &[(&str, &str)] = match pos {
        Pos::Noun => &NOUN_RULES,
        Pos::Verb => &VERB_RULES,
        Pos::Adjective => &ADJ_RULES,
        Pos::Adverb => &[],
    };
    rules
        .iter()
        .filter(|(suffix, _)| word.len() > suffix.len() && word.ends_with(suffix))
        .map(|(suffix, replacement)| format!("{}{}", &word[..word.len() - suffix.len()], replacement))
        .collect()
}
