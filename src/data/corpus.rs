//! Per-movie comment corpus
//!
//! One flat file of free-text review lines per movie, read fresh on every
//! selection change. The title-to-filename mapping sanitizes path-hostile
//! characters instead of trusting the display name, and a missing file is
//! a typed error rather than a panic.

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// The review lines associated with one movie
pub struct Corpus {
    lines: Vec<String>,
    path: PathBuf,
}

impl Corpus {
    /// Map a movie title to its comment file name. Path separators and
    /// other characters that are unsafe in file names become underscores,
    /// so a hostile title can never escape the comments directory.
    pub fn file_name(title: &str) -> String {
        let sanitized: String = title
            .trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        format!("{}.csv", sanitized)
    }

    /// Full path of the comment file for a title
    pub fn path_for(dir: &Path, title: &str) -> PathBuf {
        dir.join(Self::file_name(title))
    }

    /// Load the corpus for a movie. Blank lines are dropped; a file with
    /// no non-blank lines loads successfully as an empty corpus.
    pub fn load(dir: &Path, title: &str) -> Result<Self> {
        let path = Self::path_for(dir, title);
        if !path.is_file() {
            return Err(AppError::CorpusNotFound {
                title: title.to_string(),
                path,
            });
        }

        let contents = std::fs::read_to_string(&path)?;
        let lines: Vec<String> = contents
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(|l| l.to_string())
            .collect();

        Ok(Self { lines, path })
    }

    /// The non-blank review lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join all review lines into one text for word counting
    pub fn text(&self) -> String {
        self.lines.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The file this corpus was read from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_name_passthrough() {
        assert_eq!(Corpus::file_name("Inception"), "Inception.csv");
        assert_eq!(Corpus::file_name("The Dark Knight"), "The Dark Knight.csv");
    }

    #[test]
    fn test_file_name_sanitizes_path_hostile_characters() {
        let name = Corpus::file_name("../etc/passwd");
        assert!(!name.contains('/'));
        assert!(!name.contains('\\'));

        let name = Corpus::file_name("Alien: Covenant");
        assert_eq!(name, "Alien_ Covenant.csv");
    }

    #[test]
    fn test_load_filters_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Heat.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "great heist scenes").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "pacino and de niro").unwrap();
        drop(file);

        let corpus = Corpus::load(dir.path(), "Heat").unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.text(), "great heist scenes pacino and de niro");
    }

    #[test]
    fn test_empty_file_is_empty_corpus_not_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Tenet.csv"), "\n\n").unwrap();

        let corpus = Corpus::load(dir.path(), "Tenet").unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_missing_file_is_corpus_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corpus::load(dir.path(), "Tenet").unwrap_err();
        match err {
            AppError::CorpusNotFound { title, path } => {
                assert_eq!(title, "Tenet");
                assert!(path.ends_with("Tenet.csv"));
            }
            other => panic!("expected CorpusNotFound, got {:?}", other),
        }
    }
}
