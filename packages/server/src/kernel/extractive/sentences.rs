//! Rule-based sentence splitting.
//!
//! Sentences end at `.`, `!` or `?` (plus any trailing quotes/brackets) when
//! followed by whitespace, except after common abbreviations, initials inside
//! a name, or when the next word starts lowercase. A blank line always ends
//! a sentence. Returned sentences are verbatim slices of the input, trimmed.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").expect("paragraph pattern is valid");
}

/// Never end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "corp", "fig", "u.s", "u.k", "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec", "approx", "dept",
];

/// Abbreviations only when a number follows ("No. 5", "Mar. 3")
const NUMERIC_ABBREVIATIONS: &[&str] = &["no", "mar", "est", "vol", "p", "pp"];

/// Capitalized titles, abbreviations only before a name ("Gen. Patton")
const TITLE_ABBREVIATIONS: &[&str] = &["st", "gen", "gov", "sen", "rep", "col", "capt", "lt"];

/// Capitalized words that usually open a new clause rather than continue a name
const CLAUSE_OPENERS: &[&str] = &[
    "a", "an", "the", "i", "it", "its", "he", "she", "we", "you", "they", "this", "that",
    "these", "those", "there", "then", "but", "and", "so", "yet", "however", "in", "on", "at",
    "after", "when", "while", "if", "our", "his", "her", "their", "my",
];

pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for paragraph in PARAGRAPH_BREAK.split(text) {
        split_paragraph(paragraph, &mut sentences);
    }
    sentences
}

fn split_paragraph(paragraph: &str, out: &mut Vec<String>) {
    let chars: Vec<(usize, char)> = paragraph.char_indices().collect();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !is_terminator(c) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && (is_terminator(chars[j].1) || is_closing(chars[j].1)) {
            j += 1;
        }

        let at_end = j >= chars.len();
        let end = if at_end { paragraph.len() } else { chars[j].0 };
        let followed_by_space = at_end || chars[j].1.is_whitespace();

        let is_boundary = followed_by_space
            && (at_end || !next_word_is_lowercase(&chars[j..]))
            && !(c == '.' && ends_with_abbreviation(&paragraph[start..pos], &paragraph[end..]));

        if is_boundary {
            push_trimmed(&paragraph[start..end], out);
            start = end;
        }
        i = j;
    }

    push_trimmed(&paragraph[start..], out);
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’')
}

fn next_word_is_lowercase(rest: &[(usize, char)]) -> bool {
    rest.iter()
        .map(|(_, c)| *c)
        .find(|c| !c.is_whitespace())
        .is_some_and(|c| c.is_lowercase())
}

/// `prefix` is the sentence text up to (not including) the period, `rest`
/// the text after the terminator
fn ends_with_abbreviation(prefix: &str, rest: &str) -> bool {
    let mut words = prefix.split_whitespace().rev().map(strip_leading_punctuation);
    let raw = words.next().unwrap_or("");
    if raw.is_empty() {
        return false;
    }
    let previous = words.next().unwrap_or("");
    let next = rest.split_whitespace().next().unwrap_or("");
    let word = raw.to_lowercase();

    if raw.chars().count() == 1 && raw.chars().all(char::is_uppercase) {
        return is_initial(previous, next);
    }
    if ABBREVIATIONS.contains(&word.as_str()) {
        return true;
    }
    if NUMERIC_ABBREVIATIONS.contains(&word.as_str()) {
        return next.starts_with(|c: char| c.is_ascii_digit());
    }
    if TITLE_ABBREVIATIONS.contains(&word.as_str()) {
        return starts_uppercase(raw) && starts_name(next);
    }
    false
}

/// A lone capital is an initial when another initial follows ("J. R.") or
/// when it sits inside a name ("John F. Kennedy")
fn is_initial(previous: &str, next: &str) -> bool {
    let next_is_initial = {
        let mut chars = next.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(c), Some('.'), None) if c.is_uppercase()
        )
    };
    next_is_initial || (starts_uppercase(previous) && starts_name(next))
}

fn starts_name(word: &str) -> bool {
    let bare = strip_leading_punctuation(word)
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    starts_uppercase(strip_leading_punctuation(word)) && !CLAUSE_OPENERS.contains(&bare.as_str())
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn strip_leading_punctuation(word: &str) -> &str {
    word.trim_start_matches(|c: char| !c.is_alphanumeric())
}

fn push_trimmed(sentence: &str, out: &mut Vec<String>) {
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_split() {
        let sentences = split_sentences(
            "This is a test article. It has multiple sentences. We want to summarize it.",
        );
        assert_eq!(
            sentences,
            vec![
                "This is a test article.",
                "It has multiple sentences.",
                "We want to summarize it."
            ]
        );
    }

    #[test]
    fn test_abbreviations_and_initials_do_not_split() {
        let sentences = split_sentences("Dr. Smith met J. R. Tolkien in the U.S. today. He smiled.");
        assert_eq!(
            sentences,
            vec!["Dr. Smith met J. R. Tolkien in the U.S. today.", "He smiled."]
        );
    }

    #[test]
    fn test_ambiguous_words_end_sentences() {
        let sentences =
            split_sentences("The answer was no. We moved on. Prices fell in March. Sales rose.");
        assert_eq!(
            sentences,
            vec![
                "The answer was no.",
                "We moved on.",
                "Prices fell in March.",
                "Sales rose."
            ]
        );

        let sentences = split_sentences(
            "The firm is listed as a co. It has grown. They live on Elm St. It is quiet.",
        );
        assert_eq!(sentences.len(), 4);
    }

    #[test]
    fn test_numeric_and_title_abbreviations() {
        let sentences =
            split_sentences("See item No. 5 on the list. The meeting is Mar. 3 at noon. Done.");
        assert_eq!(
            sentences,
            vec!["See item No. 5 on the list.", "The meeting is Mar. 3 at noon.", "Done."]
        );

        let sentences = split_sentences("Gen. Patton visited St. Louis. He left.");
        assert_eq!(sentences, vec!["Gen. Patton visited St. Louis.", "He left."]);
    }

    #[test]
    fn test_sentence_final_capital_letter_splits() {
        assert_eq!(
            split_sentences("I chose plan B. It worked."),
            vec!["I chose plan B.", "It worked."]
        );
        assert_eq!(
            split_sentences("President John F. Kennedy spoke. Crowds cheered."),
            vec!["President John F. Kennedy spoke.", "Crowds cheered."]
        );
    }

    #[test]
    fn test_lowercase_continuation_does_not_split() {
        let sentences = split_sentences("Prices rose approx. three percent. Then they fell.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_quotes_and_mixed_terminators() {
        let sentences = split_sentences("\"Stop!\" she said. Really?! Yes.");
        assert_eq!(sentences, vec!["\"Stop!\" she said.", "Really?!", "Yes."]);
    }

    #[test]
    fn test_blank_line_ends_sentence() {
        let sentences = split_sentences("A heading without a period\n\nBody text here.");
        assert_eq!(sentences, vec!["A heading without a period", "Body text here."]);
    }

    #[test]
    fn test_decimal_numbers_do_not_split() {
        let sentences = split_sentences("Pi is about 3.14 in value. Done.");
        assert_eq!(sentences, vec!["Pi is about 3.14 in value.", "Done."]);
    }

    #[test]
    fn test_whitespace_only_yields_nothing() {
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_text_without_terminator_is_one_sentence() {
        assert_eq!(split_sentences("no punctuation here"), vec!["no punctuation here"]);
    }
}
