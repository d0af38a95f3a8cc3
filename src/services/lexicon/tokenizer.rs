// Sentence and word tokenization for English prose

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

const OPENERS: [char; 8] = ['"', '\'', '(', '[', '{', '`', '\u{201c}', '\u{2018}'];

const CLOSERS: [char; 12] = [
    ',', ';', ':', '!', '?', ')', ']', '}', '"', '\'', '\u{201d}', '\u{2019}',
];

const CLITICS: [&str; 6] = ["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Lowercase forms without the trailing period.
const ABBREVIATIONS: [&str; 21] = [
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "e.g", "i.e", "inc", "ltd", "corp",
    "u.s", "u.k", "fig", "approx", "dept", "cf", "mt",
];

fn is_abbreviation(word: &str) -> bool {
    let core = word.trim_start_matches(|c| OPENERS.contains(&c));
    let lower = core.to_lowercase();
    if ABBREVIATIONS.contains(&lower.as_str()) {
        return true;
    }
    // Single capital initial such as "J.", but not the pronoun
    let mut chars = core.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase() && c != 'I')
}

/// Split text into trimmed sentences.
///
/// A boundary is a run of terminators (plus any closing quotes or brackets)
/// followed by whitespace or the end of the text. A lone period after a known
/// abbreviation or an initial is not a boundary.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let ch = chars[i].1;
        if !SENTENCE_TERMINATORS.contains(&ch) {
            i += 1;
            continue;
        }

        let mut j = i;
        while j + 1 < chars.len() && SENTENCE_TERMINATORS.contains(&chars[j + 1].1) {
            j += 1;
        }
        while j + 1 < chars.len() && matches!(chars[j + 1].1, ')' | ']' | '"' | '\'' | '\u{201d}' | '\u{2019}') {
            j += 1;
        }

        let next = j + 1;
        let mut boundary = next >= chars.len() || chars[next].1.is_whitespace();

        if boundary && ch == '.' && j == i {
            let prefix = &text[start..chars[i].0];
            let word = prefix.rsplit(char::is_whitespace).next().unwrap_or(prefix);
            if next < chars.len() && is_abbreviation(word) {
                boundary = false;
            }
        }

        if boundary {
            let end = chars[j].0 + chars[j].1.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
        }

        i = j + 1;
    }

    let remaining = text[start..].trim();
    if !remaining.is_empty() {
        sentences.push(remaining.to_string());
    }

    sentences
}

/// Treebank-style word tokenization of a single sentence.
pub fn tokenize_words(sentence: &str) -> Vec<String> {
    let chunks: Vec<&str> = sentence.split_whitespace().collect();
    let mut tokens = Vec::new();
    for (idx, chunk) in chunks.iter().enumerate() {
        tokenize_chunk(chunk, idx + 1 == chunks.len(), &mut tokens);
    }
    tokens
}

fn tokenize_chunk(chunk: &str, is_last: bool, out: &mut Vec<String>) {
    let mut core = chunk;

    while let Some(c) = core.chars().next() {
        if !OPENERS.contains(&c) || core.len() == c.len_utf8() {
            break;
        }
        out.push(c.to_string());
        core = &core[c.len_utf8()..];
    }

    // Collected back to front.
    let mut trailing: Vec<String> = Vec::new();
    loop {
        if core.len() > 3 && core.ends_with("...") {
            trailing.push("...".to_string());
            core = &core[..core.len() - 3];
            continue;
        }
        let Some(c) = core.chars().last() else { break };
        if core.len() == c.len_utf8() {
            break;
        }
        if CLOSERS.contains(&c) {
            trailing.push(c.to_string());
            core = &core[..core.len() - c.len_utf8()];
            continue;
        }
        if c == '.' && is_last && !core[..core.len() - 1].contains('.') {
            trailing.push(".".to_string());
            core = &core[..core.len() - 1];
            continue;
        }
        break;
    }

    if !core.is_empty() {
        let (stem, clitic) = split_clitic(core);
        if !stem.is_empty() {
            out.push(stem.to_string());
        }
        if let Some(clitic) = clitic {
            out.push(clitic.to_string());
        }
    }

    out.extend(trailing.into_iter().rev());
}

fn split_clitic(word: &str) -> (&str, Option<&str>) {
    let normalized = word.replace('\u{2019}', "'").to_lowercase();
    let clitic_chars = if normalized.ends_with("n't") {
        3
    } else {
        CLITICS
            .iter()
            .find(|c| normalized.ends_with(*c))
            .map(|c| c.len())
            .unwrap_or(0)
    };
    if clitic_chars == 0 || word.chars().count() <= clitic_chars {
        return (word, None);
    }
    let cut = word
        .char_indices()
        .rev()
        .nth(clitic_chars - 1)
        .map(|(b, _)| b)
        .unwrap_or(0);
    (&word[..cut], Some(&word[cut..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("He is happy. She is sad! Why?");
        assert_eq!(sentences, vec!["He is happy.", "She is sad!", "Why?"]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_split_sentences_keeps_abbreviations_and_decimals() {
        let sentences = split_sentences("Dr. Smith paid 3.50 dollars. Then he left.");
        assert_eq!(sentences, vec!["Dr. Smith paid 3.50 dollars.", "Then he left."]);
    }

    #[test]
    fn test_split_sentences_trailing_quote_and_no_terminator() {
        let sentences = split_sentences("He said \"stop.\" Nobody listened");
        assert_eq!(sentences, vec!["He said \"stop.\"", "Nobody listened"]);
    }

    #[test]
    fn test_split_sentences_normalizes_newlines_between_sentences() {
        let sentences = split_sentences("First line.\n\nSecond   line.");
        assert_eq!(sentences, vec!["First line.", "Second   line."]);
    }

    #[test]
    fn test_tokenize_words_splits_final_period() {
        assert_eq!(tokenize_words("He is happy."), vec!["He", "is", "happy", "."]);
    }

    #[test]
    fn test_tokenize_words_punctuation_and_quotes() {
        assert_eq!(
            tokenize_words("\"Well, (maybe) not;\" he said..."),
            vec!["\"", "Well", ",", "(", "maybe", ")", "not", ";", "\"", "he", "said", "..."]
        );
    }

    #[test]
    fn test_tokenize_words_clitics() {
        assert_eq!(tokenize_words("I don't know"), vec!["I", "do", "n't", "know"]);
        assert_eq!(tokenize_words("it's John's"), vec!["it", "'s", "John", "'s"]);
        assert_eq!(tokenize_words("we'll go"), vec!["we", "'ll", "go"]);
    }

    #[test]
    fn test_tokenize_words_keeps_inner_abbreviation_periods() {
        assert_eq!(
            tokenize_words("The U.S. economy grew."),
            vec!["The", "U.S.", "economy", "grew", "."]
        );
    }
}
