pub mod frequency;
pub mod layout;
pub mod stopwords;

// Re-export key types for convenience
#[allow(unused_imports)]
pub use frequency::{count_words, WordCount};
#[allow(unused_imports)]
pub use layout::{layout_words, PlacedWord, WordLayout};
