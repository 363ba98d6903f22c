//! Stopword filtering
//!
//! Standard English stopword list plus the domain terms that dominate
//! every review ("movie", "film") and would otherwise drown out the
//! interesting vocabulary.

use std::collections::HashSet;

/// Domain-specific terms excluded on top of the standard list
pub const DOMAIN_STOPWORDS: &[&str] = &["movie", "film"];

/// Standard English stopwords
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself",
    "him", "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm",
    "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "let's",
    "like", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off",
    "on", "once", "only", "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out",
    "over", "own", "same", "shall", "shan't", "she", "she'd", "she'll", "she's", "should",
    "shouldn't", "since", "so", "some", "such", "than", "that", "that's", "the", "their",
    "theirs", "them", "themselves", "then", "there", "there's", "therefore", "these", "they",
    "they'd", "they'll", "they're", "they've", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were",
    "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while", "who",
    "who's", "whom", "why", "why's", "with", "won't", "would", "wouldn't", "www", "you", "you'd",
    "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// The full stopword set used for word counting
pub fn stopword_set() -> HashSet<&'static str> {
    STOPWORDS
        .iter()
        .chain(DOMAIN_STOPWORDS.iter())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_terms_included() {
        let set = stopword_set();
        assert!(set.contains("movie"));
        assert!(set.contains("film"));
        assert!(set.contains("the"));
        assert!(!set.contains("heist"));
    }

    #[test]
    fn test_list_is_lowercase() {
        for word in STOPWORDS.iter().chain(DOMAIN_STOPWORDS.iter()) {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
