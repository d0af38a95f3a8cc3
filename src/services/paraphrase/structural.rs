// Structural Transformer
// Ordered chain of probability-gated rewrites over one working sentence

use crate::services::config_store::RuleProbabilities;
use crate::services::text_processor::{char_count, insert_at_char, split_at_char};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const CLAUSES: [&str; 4] = [
    "which suggests that",
    "since it appears that",
    "although it is clear that",
    "because it has been shown that",
];

const RELATIVE_PRONOUNS: [&str; 5] = ["that", "which", "who", "whom", "whose"];

const APPOSITIVES: [&str; 3] = [
    ", a phenomenon well-known in the field",
    ", an aspect often overlooked",
    ", a term coined by experts",
];

const CONJUNCTION_REPLACEMENTS: [(&str, [&str; 3]); 3] = [
    ("and", ["moreover", "furthermore", "additionally"]),
    ("but", ["however", "nevertheless", "on the contrary"]),
    ("or", ["alternatively", "or else", "either"]),
];

const INTRO_PHRASES: [&str; 4] = ["In fact, ", "Notably, ", "Furthermore, ", "Consequently, "];

/// Random insertion points stay this many chars clear of either end.
const INSERT_MARGIN: usize = 5;
const SPLIT_MARGIN: usize = 10;
const SPLIT_MIN_CHARS: usize = 30;

pub type Transform = fn(&str, &mut dyn RngCore) -> Option<String>;

/// One rewrite. `transform` returns `None` when it does not apply.
#[derive(Clone, Copy)]
pub struct StructuralRule {
    pub name: &'static str,
    pub probability: f64,
    pub transform: Transform,
}

impl std::fmt::Debug for StructuralRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructuralRule")
            .field("name", &self.name)
            .field("probability", &self.probability)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct StructuralTransformer {
    rules: Vec<StructuralRule>,
}

impl Default for StructuralTransformer {
    fn default() -> Self {
        Self::new(&RuleProbabilities::default())
    }
}

impl StructuralTransformer {
    pub fn new(p: &RuleProbabilities) -> Self {
        let rule = |name, probability, transform: Transform| StructuralRule {
            name,
            probability,
            transform,
        };
        Self {
            rules: vec![
                rule("clause_insertion", p.clause_insertion, insert_clause),
                rule("relative_pronoun", p.relative_pronoun, insert_relative_pronoun),
                rule("passive_inversion", p.passive_inversion, invert_passive),
                rule("appositive", p.appositive, insert_appositive),
                rule("conjunction_replacement", p.conjunction_replacement, replace_conjunctions),
                rule("punctuation_softening", p.punctuation_softening, soften_punctuation),
                rule("sentence_splitting", p.sentence_splitting, split_sentence),
                rule("intro_phrase", p.intro_phrase, prefix_intro_phrase),
            ],
        }
    }

    pub fn rules(&self) -> &[StructuralRule] {
        &self.rules
    }

    /// Run every rule in order; each sees the output of the ones before it.
    pub fn apply<G: Rng>(&self, sentence: &str, rng: &mut G) -> String {
        let mut current = sentence.to_string();
        for rule in &self.rules {
            if rng.gen::<f64>() >= rule.probability {
                continue;
            }
            if let Some(next) = (rule.transform)(&current, &mut *rng) {
                debug!(rule = rule.name, "structural.rule_applied");
                current = next;
            }
        }
        current
    }
}

/// Interior char position, or `None` when the sentence is too short.
fn interior_position(sentence: &str, margin: usize, rng: &mut dyn RngCore) -> Option<usize> {
    let n = char_count(sentence);
    if n < margin * 2 {
        return None;
    }
    Some(rng.gen_range(margin..=n - margin))
}

pub fn insert_clause(sentence: &str, rng: &mut dyn RngCore) -> Option<String> {
    let clause = CLAUSES.choose(rng)?;
    let pos = interior_position(sentence, INSERT_MARGIN, rng)?;
    Some(insert_at_char(sentence, pos, &format!(" {} ", clause)))
}

/// Inserts before the first occurrence of "is", even inside a longer word.
pub fn insert_relative_pronoun(sentence: &str, rng: &mut dyn RngCore) -> Option<String> {
    let at = sentence.find("is")?;
    let pronoun = RELATIVE_PRONOUNS.choose(rng)?;
    Some(format!("{} {} {}", &sentence[..at], pronoun, &sentence[at..]))
}

fn passive_regex() -> &'static Regex {
    static PASSIVE_RE: OnceLock<Regex> = OnceLock::new();
    PASSIVE_RE.get_or_init(|| {
        Regex::new(r"(\w+)( is| was| has been| have been)( \w+)").expect("valid passive pattern")
    })
}

/// "dog was chased" becomes " chased  was doged" on the first match. The
/// captured groups keep their leading spaces, like the other inserting rules.
pub fn invert_passive(sentence: &str, _rng: &mut dyn RngCore) -> Option<String> {
    let caps = passive_regex().captures(sentence)?;
    let verb = caps.get(1)?.as_str();
    if verb == "is" || verb == "was" {
        return None;
    }
    let tense = caps.get(2)?.as_str();
    let object = caps.get(3)?.as_str();
    let whole = caps.get(0)?;
    Some(format!(
        "{}{} {} {}ed{}",
        &sentence[..whole.start()],
        object,
        tense,
        verb,
        &sentence[whole.end()..]
    ))
}

pub fn insert_appositive(sentence: &str, rng: &mut dyn RngCore) -> Option<String> {
    let pos = interior_position(sentence, INSERT_MARGIN, rng)?;
    let appositive = APPOSITIVES.choose(rng)?;
    Some(insert_at_char(sentence, pos, appositive))
}

fn conjunction_regexes() -> &'static [Regex] {
    static CONJ_RES: OnceLock<Vec<Regex>> = OnceLock::new();
    CONJ_RES.get_or_init(|| {
        CONJUNCTION_REPLACEMENTS
            .iter()
            .map(|(conj, _)| Regex::new(&format!(r"\b{}\b", regex::escape(conj))).expect("valid conjunction pattern"))
            .collect()
    })
}

/// Replace the first whole-word and/but/or, once per conjunction type.
pub fn replace_conjunctions(sentence: &str, rng: &mut dyn RngCore) -> Option<String> {
    let mut current = sentence.to_string();
    let mut changed = false;
    for ((_, replacements), re) in CONJUNCTION_REPLACEMENTS.iter().zip(conjunction_regexes()) {
        let Some(m) = re.find(&current) else { continue };
        let Some(replacement) = replacements.choose(rng) else { continue };
        current = format!("{}{}{}", &current[..m.start()], replacement, &current[m.end()..]);
        changed = true;
    }
    changed.then_some(current)
}

/// Coin flip between a semicolon and the original mark: the final period if
/// the sentence has any period, otherwise its first comma.
pub fn soften_punctuation(sentence: &str, rng: &mut dyn RngCore) -> Option<String> {
    if sentence.contains('.') {
        let head = sentence.strip_suffix('.')?;
        return rng.gen_bool(0.5).then(|| format!("{};", head));
    }
    let at = sentence.find(',')?;
    rng.gen_bool(0.5)
        .then(|| format!("{};{}", &sentence[..at], &sentence[at + 1..]))
}

pub fn split_sentence(sentence: &str, rng: &mut dyn RngCore) -> Option<String> {
    if char_count(sentence) <= SPLIT_MIN_CHARS {
        return None;
    }
    let pos = interior_position(sentence, SPLIT_MARGIN, rng)?;
    let (head, tail) = split_at_char(sentence, pos);
    let (head, tail) = (head.trim_end(), tail.trim_start());
    if head.is_empty() || tail.is_empty() {
        return None;
    }
    Some(format!("{}. {}", head, tail))
}

pub fn prefix_intro_phrase(sentence: &str, rng: &mut dyn RngCore) -> Option<String> {
    let intro = INTRO_PHRASES.choose(rng)?;
    Some(format!("{}{}", intro, sentence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const LONG: &str = "The committee was informed and the members agreed, but nobody acted.";

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_disabled_rules_leave_sentence_unchanged() {
        let transformer = StructuralTransformer::new(&RuleProbabilities::disabled());
        for seed in 0..20 {
            assert_eq!(transformer.apply(LONG, &mut seeded(seed)), LONG);
        }
    }

    #[test]
    fn test_rule_order_matches_gates() {
        let transformer = StructuralTransformer::default();
        let names: Vec<&str> = transformer.rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "clause_insertion",
                "relative_pronoun",
                "passive_inversion",
                "appositive",
                "conjunction_replacement",
                "punctuation_softening",
                "sentence_splitting",
                "intro_phrase",
            ]
        );
        let gates: Vec<f64> = transformer.rules().iter().map(|r| r.probability).collect();
        assert_eq!(gates, vec![0.3, 0.25, 0.2, 0.15, 1.0, 0.3, 0.2, 0.15]);
    }

    #[test]
    fn test_clause_insertion() {
        assert_eq!(insert_clause("Too short", &mut seeded(1)), None);
        let out = insert_clause(LONG, &mut seeded(1)).unwrap();
        assert!(CLAUSES.iter().any(|c| out.contains(c)));
        assert!(char_count(&out) > char_count(LONG));
    }

    #[test]
    fn test_insertions_are_char_safe() {
        let text = "Café naïve résumé déjà vu, très bien";
        for seed in 0..50 {
            assert!(insert_clause(text, &mut seeded(seed)).is_some());
            assert!(insert_appositive(text, &mut seeded(seed)).is_some());
            assert!(split_sentence(text, &mut seeded(seed)).is_some());
        }
    }

    #[test]
    fn test_relative_pronoun_before_first_is() {
        let out = insert_relative_pronoun("The sky is blue.", &mut seeded(2)).unwrap();
        assert!(out.starts_with("The sky  "));
        assert!(out.ends_with(" is blue."));
        assert!(RELATIVE_PRONOUNS.iter().any(|p| out.contains(&format!(" {} ", p))));
        assert_eq!(insert_relative_pronoun("No match here.", &mut seeded(2)), None);
    }

    #[test]
    fn test_passive_inversion() {
        let out = invert_passive("The dog was chased by the cat", &mut seeded(0)).unwrap();
        assert_eq!(out, "The  chased  was doged by the cat");
        let out = invert_passive("Data has been collected", &mut seeded(0)).unwrap();
        assert_eq!(out, " collected  has been Dataed");
        assert_eq!(invert_passive("is was fine", &mut seeded(0)), None);
        assert_eq!(invert_passive("Nothing to see", &mut seeded(0)), None);
    }

    #[test]
    fn test_conjunction_replacement() {
        let out = replace_conjunctions("cats and dogs but not birds", &mut seeded(4)).unwrap();
        assert!(!out.contains(" and "));
        assert!(!out.contains(" but "));
        assert!(out.starts_with("cats "));
        assert_eq!(replace_conjunctions("a sandwich for Brandon", &mut seeded(4)), None);
    }

    #[test]
    fn test_conjunction_replacement_first_only() {
        let out = replace_conjunctions("this and that and more", &mut seeded(9)).unwrap();
        assert!(out.ends_with(" that and more"));
    }

    #[test]
    fn test_punctuation_softening() {
        let mut saw_semicolon = false;
        for seed in 0..40 {
            match soften_punctuation("Hello there.", &mut seeded(seed)) {
                Some(out) => {
                    assert_eq!(out, "Hello there;");
                    saw_semicolon = true;
                }
                None => {}
            }
            // A period anywhere blocks the comma branch.
            assert_eq!(soften_punctuation("Pi is 3.14, roughly", &mut seeded(seed)), None);
            if let Some(out) = soften_punctuation("One, two, three", &mut seeded(seed)) {
                assert_eq!(out, "One; two, three");
            }
        }
        assert!(saw_semicolon);
    }

    #[test]
    fn test_sentence_splitting() {
        assert_eq!(split_sentence("Exactly thirty characters long", &mut seeded(0)), None);
        for seed in 0..20 {
            let out = split_sentence(LONG, &mut seeded(seed)).unwrap();
            assert!(out.contains(". "));
        }
    }

    #[test]
    fn test_intro_phrase() {
        let out = prefix_intro_phrase("it rained.", &mut seeded(5)).unwrap();
        assert!(INTRO_PHRASES.iter().any(|p| out == format!("{}it rained.", p)));
    }

    #[test]
    fn test_open_gates_compose() {
        let mut p = RuleProbabilities::disabled();
        p.intro_phrase = 1.0;
        p.conjunction_replacement = 1.0;
        let transformer = StructuralTransformer::new(&p);
        let out = transformer.apply("bread and butter", &mut seeded(11));
        assert!(INTRO_PHRASES.iter().any(|intro| out.starts_with(intro)));
        assert!(!out.contains(" and "));
    }
}
