// Part-of-speech tagger
// Emits Penn Treebank tags from a closed-class lexicon, open-class hints
// supplied by the caller (normally the thesaurus), suffix rules and a couple
// of left-context repairs.

use crate::models::Pos;
use std::collections::HashMap;

const CLOSED_CLASS: &[(&str, &str)] = &[
    // determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("these", "DT"),
    ("those", "DT"), ("each", "DT"), ("every", "DT"), ("some", "DT"), ("any", "DT"),
    ("no", "DT"), ("all", "DT"), ("both", "DT"), ("another", "DT"), ("either", "DT"),
    ("neither", "DT"),
    // prepositions and subordinating conjunctions
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("about", "IN"), ("against", "IN"), ("between", "IN"), ("into", "IN"),
    ("through", "IN"), ("during", "IN"), ("before", "IN"), ("after", "IN"), ("above", "IN"),
    ("below", "IN"), ("from", "IN"), ("under", "IN"), ("over", "IN"), ("because", "IN"),
    ("since", "IN"), ("although", "IN"), ("though", "IN"), ("while", "IN"), ("if", "IN"),
    ("unless", "IN"), ("until", "IN"), ("whereas", "IN"), ("whether", "IN"), ("as", "IN"),
    ("than", "IN"), ("upon", "IN"), ("within", "IN"), ("without", "IN"), ("among", "IN"),
    ("across", "IN"), ("behind", "IN"), ("beyond", "IN"), ("near", "IN"), ("that", "IN"),
    ("toward", "IN"), ("towards", "IN"), ("despite", "IN"),
    // particles
    ("up", "RP"), ("out", "RP"), ("off", "RP"),
    // coordinators
    ("and", "CC"), ("but", "CC"), ("or", "CC"), ("nor", "CC"), ("plus", "CC"),
    // pronouns
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"),
    ("we", "PRP"), ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("her", "PRP"),
    ("us", "PRP"), ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"),
    ("himself", "PRP"), ("herself", "PRP"), ("itself", "PRP"), ("ourselves", "PRP"),
    ("themselves", "PRP"), ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"),
    ("its", "PRP$"), ("our", "PRP$"), ("their", "PRP$"),
    // wh-words
    ("which", "WDT"), ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("whose", "WP$"),
    ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    // modals and auxiliaries
    ("can", "MD"), ("could", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"),
    ("shall", "MD"), ("should", "MD"), ("will", "MD"), ("would", "MD"), ("'ll", "MD"),
    ("'d", "MD"), ("to", "TO"), ("is", "VBZ"), ("has", "VBZ"), ("does", "VBZ"),
    ("are", "VBP"), ("am", "VBP"), ("have", "VBP"), ("do", "VBP"), ("'re", "VBP"),
    ("'m", "VBP"), ("'ve", "VBP"), ("was", "VBD"), ("were", "VBD"), ("had", "VBD"),
    ("did", "VBD"), ("been", "VBN"), ("be", "VB"), ("being", "VBG"),
    // adverbs
    ("not", "RB"), ("n't", "RB"), ("very", "RB"), ("too", "RB"), ("also", "RB"),
    ("just", "RB"), ("only", "RB"), ("never", "RB"), ("always", "RB"), ("already", "RB"),
    ("still", "RB"), ("even", "RB"), ("quite", "RB"), ("rather", "RB"), ("here", "RB"),
    ("now", "RB"), ("then", "RB"), ("again", "RB"), ("soon", "RB"), ("perhaps", "RB"),
    ("however", "RB"), ("moreover", "RB"), ("furthermore", "RB"), ("therefore", "RB"),
    ("nevertheless", "RB"), ("thus", "RB"), ("hence", "RB"), ("additionally", "RB"),
    ("alternatively", "RB"), ("so", "RB"), ("yet", "RB"), ("else", "RB"),
    ("there", "EX"), ("oh", "UH"),
    // number words
    ("one", "CD"), ("two", "CD"), ("three", "CD"), ("four", "CD"), ("five", "CD"),
    ("six", "CD"), ("seven", "CD"), ("eight", "CD"), ("nine", "CD"), ("ten", "CD"),
    ("hundred", "CD"), ("thousand", "CD"), ("million", "CD"),
];

const ADJ_SUFFIXES: [&str; 10] = ["ous", "ful", "able", "ible", "ive", "less", "ic", "al", "ish", "ical"];

const NOUN_SUFFIXES: [&str; 10] = ["tion", "sion", "ness", "ment", "ity", "ance", "ence", "ship", "ism", "ist"];

#[derive(Debug, Clone)]
pub struct PosTagger {
    lexicon: HashMap<&'static str, &'static str>,
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger {
    pub fn new() -> Self {
        Self {
            lexicon: CLOSED_CLASS.iter().copied().collect(),
        }
    }

    /// Tag every token. `open_class` lists the coarse categories the lexicon
    /// knows for a lowercase word (empty when unknown).
    pub fn tag(&self, tokens: &[String], open_class: impl Fn(&str) -> Vec<Pos>) -> Vec<String> {
        let mut tags: Vec<String> = Vec::with_capacity(tokens.len());
        let mut quote_open = false;

        for (i, token) in tokens.iter().enumerate() {
            let prev = tags.last().map(String::as_str).unwrap_or("");
            let tag = if let Some(tag) = punctuation_tag(token, &mut quote_open) {
                tag.to_string()
            } else if is_number(token) {
                "CD".to_string()
            } else {
                self.word_tag(token, i, prev, &open_class)
            };
            tags.push(tag);
        }

        tags
    }

    fn word_tag(&self, token: &str, i: usize, prev: &str, open_class: &impl Fn(&str) -> Vec<Pos>) -> String {
        let lower = token.to_lowercase();

        if lower == "'s" || lower == "\u{2019}s" {
            return if prev == "PRP" { "VBZ" } else { "POS" }.to_string();
        }
        if let Some(tag) = self.lexicon.get(lower.as_str()) {
            return tag.to_string();
        }

        let capitalized = token.chars().next().map_or(false, char::is_uppercase);
        if capitalized && i > 0 && prev != "." && prev != "``" {
            return "NNP".to_string();
        }

        let hints = open_class(&lower);
        let guess = hinted_tag(&hints, &lower, prev).unwrap_or_else(|| suffix_tag(&lower, prev));

        repair_with_context(guess, prev)
    }
}

fn punctuation_tag(token: &str, quote_open: &mut bool) -> Option<&'static str> {
    let tag = match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ";" | ":" | "..." | "--" | "-" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "`" | "\u{201c}" | "\u{2018}" => "``",
        "\u{201d}" | "\u{2019}" => "''",
        "\"" | "'" => {
            *quote_open = !*quote_open;
            if *quote_open {
                "``"
            } else {
                "''"
            }
        }
        "$" => "$",
        "#" => "#",
        _ if token.chars().all(|c| !c.is_alphanumeric()) => "SYM",
        _ => return None,
    };
    Some(tag)
}

fn is_number(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

fn hinted_tag(hints: &[Pos], lower: &str, prev: &str) -> Option<String> {
    if hints.is_empty() {
        return None;
    }
    let has = |pos: Pos| hints.contains(&pos);

    let after_subject = matches!(prev, "PRP" | "NNS" | "NNP" | "WDT" | "WP");
    let tag = if has(Pos::Verb) && (matches!(prev, "TO" | "MD") || after_subject) {
        verb_tag(lower, prev)
    } else if has(Pos::Adjective) {
        "JJ".to_string()
    } else if has(Pos::Noun) {
        noun_tag(lower)
    } else if has(Pos::Verb) {
        verb_tag(lower, prev)
    } else {
        "RB".to_string()
    };
    Some(tag)
}

fn verb_tag(lower: &str, prev: &str) -> String {
    let tag = if lower.ends_with("ing") {
        "VBG"
    } else if lower.ends_with("ed") {
        if matches!(prev, "VBZ" | "VBP" | "VBD" | "VBN") {
            "VBN"
        } else {
            "VBD"
        }
    } else if matches!(prev, "TO" | "MD") {
        "VB"
    } else if lower.ends_with('s') && !lower.ends_with("ss") {
        "VBZ"
    } else if matches!(prev, "PRP" | "NNS" | "WDT" | "WP") {
        "VBP"
    } else {
        "VB"
    };
    tag.to_string()
}

fn noun_tag(lower: &str) -> String {
    if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
        "NNS".to_string()
    } else {
        "NN".to_string()
    }
}

fn suffix_tag(lower: &str, prev: &str) -> String {
    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ly") {
        return "RB".to_string();
    }
    if len > 4 && lower.ends_with("ing") {
        return "VBG".to_string();
    }
    if len > 3 && lower.ends_with("ed") {
        return verb_tag(lower, prev);
    }
    if ADJ_SUFFIXES.iter().any(|s| len > s.len() + 2 && lower.ends_with(s)) {
        return "JJ".to_string();
    }
    if NOUN_SUFFIXES.iter().any(|s| len > s.len() + 1 && lower.ends_with(s)) {
        return "NN".to_string();
    }
    noun_tag(lower)
}

fn repair_with_context(tag: String, prev: &str) -> String {
    match prev {
        "TO" | "MD" if tag == "NN" => "VB".to_string(),
        "PRP" if tag == "NN" => "VBP".to_string(),
        "PRP" if tag == "NNS" => "VBZ".to_string(),
        "DT" | "PRP$" if tag == "VBD" || tag == "VBN" => "JJ".to_string(),
        "DT" | "PRP$" if tag == "VB" || tag == "VBP" || tag == "VBZ" => "NN".to_string(),
        _ => tag,
    }
}
