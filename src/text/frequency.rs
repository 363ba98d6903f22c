//! Word frequency statistics
//!
//! Turns one movie's joined review text into a capped, frequency-ordered
//! word list. Ordering is count descending with alphabetical tie-break,
//! so every downstream view (cloud, bars, treemap) agrees on what the
//! "top N" words are.

use std::collections::HashMap;

use crate::constants::words::MAX_WORDS;
use crate::text::stopwords::stopword_set;

/// One counted word with its frequency relative to the most common word
#[derive(Debug, Clone, PartialEq)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
    /// count / max count, in (0, 1]
    pub relative: f64,
}

/// Split text into lowercase word tokens. Tokens shorter than two
/// characters and purely numeric tokens are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\'').to_lowercase())
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
        .collect()
}

/// Count non-stopword tokens, keeping at most `MAX_WORDS` words ordered
/// by count descending (alphabetical on ties). Empty text gives an empty
/// list.
pub fn count_words(text: &str) -> Vec<WordCount> {
    let stopwords = stopword_set();

    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in tokenize(text) {
        if !stopwords.contains(token.as_str()) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut pairs: Vec<(String, u32)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs.truncate(MAX_WORDS);

    let max_count = pairs.first().map(|(_, c)| *c).unwrap_or(0);
    pairs
        .into_iter()
        .map(|(word, count)| WordCount {
            word,
            count,
            relative: count as f64 / max_count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokens = tokenize("Great HEIST, great pacing!");
        assert_eq!(tokens, vec!["great", "heist", "great", "pacing"]);
    }

    #[test]
    fn test_tokenize_drops_short_and_numeric() {
        let tokens = tokenize("a 10 out of 10, 9/10 scene");
        assert_eq!(tokens, vec!["out", "of", "scene"]);
    }

    #[test]
    fn test_count_words_ordering() {
        let counts = count_words("heist heist heist crew crew pacing");
        let words: Vec<&str> = counts.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["heist", "crew", "pacing"]);
        assert_eq!(counts[0].count, 3);
        assert_eq!(counts[0].relative, 1.0);
        assert_eq!(counts[1].relative, 2.0 / 3.0);
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let counts = count_words("zebra apple zebra apple");
        let words: Vec<&str> = counts.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["apple", "zebra"]);
    }

    #[test]
    fn test_stopwords_and_domain_terms_filtered() {
        let counts = count_words("the movie was a great film about the heist");
        let words: Vec<&str> = counts.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["great", "heist"]);
    }

    #[test]
    fn test_max_words_cap() {
        // 150 distinct words, each appearing once
        let text: String = (0..150)
            .map(|i| format!("word{:03}x", i))
            .collect::<Vec<_>>()
            .join(" ");
        let counts = count_words(&text);
        assert_eq!(counts.len(), MAX_WORDS);
    }

    #[test]
    fn test_empty_text_is_empty() {
        assert!(count_words("").is_empty());
        assert!(count_words("   \n  ").is_empty());
        // only stopwords
        assert!(count_words("the a an of movie film").is_empty());
    }
}
