// Loading and splitting the notes file.
//
// A line is the unit of retrieval: trimmed, non-blank, identified by its
// position. Paragraphs (blocks separated by blank lines) are only used for
// the per-paragraph emotion sample in the scan report.

use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::vector::tfidf::VectorSpace;

/// Read the whole notes file as UTF-8.
pub fn load_notes(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Line boundaries: `\n`, `\r` (alone or in `\r\n`), vertical tab, form
/// feed, the file/group/record separators, NEL and the Unicode line and
/// paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Trimmed, non-blank lines in file order.
pub fn split_lines(notes: &str) -> Vec<String> {
    notes
        .split(is_line_break)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Paragraphs separated by one or more blank (or whitespace-only) lines.
///
/// Each paragraph keeps its internal newlines and is trimmed at both ends.
pub fn split_paragraphs(notes: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in notes.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n").trim().to_string());
    }

    paragraphs
}

/// The ordered notes lines plus their synthetic concatenation.
///
/// The aggregate document takes part in vocabulary fitting only; it is never
/// a retrieval candidate.
#[derive(Debug, Clone)]
pub struct Corpus {
    lines: Vec<String>,
    aggregate: String,
}

impl Corpus {
    /// Build a corpus from raw notes text. Fails with `EmptyCorpus` if there
    /// are no non-blank lines.
    pub fn from_notes(notes: &str) -> Result<Self> {
        Self::from_lines(split_lines(notes))
    }

    pub fn from_lines(lines: Vec<String>) -> Result<Self> {
        if lines.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let aggregate = lines.join(" ");
        Ok(Self { lines, aggregate })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with single spaces.
    pub fn aggregate(&self) -> &str {
        &self.aggregate
    }

    /// Documents used for fitting: every line, then the aggregate.
    pub fn documents(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.aggregate.as_str()))
            .collect()
    }

    /// Fit the vector space for this run. The result is frozen.
    pub fn fit(&self) -> Result<VectorSpace> {
        info!(lines = self.lines.len(), "Building vector space from notes");
        VectorSpace::fit(&self.documents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTES: &str = "  Grace and truth  \n\nLent begins.\n   \n\n\nKingdom come\nthy will\n";

    #[test]
    fn test_split_lines_trims_and_skips_blanks() {
        assert_eq!(
            split_lines(NOTES),
            vec!["Grace and truth", "Lent begins.", "Kingdom come", "thy will"]
        );
    }

    #[test]
    fn test_split_lines_on_every_line_break() {
        assert_eq!(
            split_lines("grace\rmercy\u{2028}truth\r\nlent\u{0c}hope\u{85}peace"),
            vec!["grace", "mercy", "truth", "lent", "hope", "peace"]
        );
    }

    #[test]
    fn test_split_paragraphs_on_blank_runs() {
        assert_eq!(
            split_paragraphs(NOTES),
            vec!["Grace and truth", "Lent begins.", "Kingdom come\nthy will"]
        );
    }

    #[test]
    fn test_split_paragraphs_empty() {
        assert!(split_paragraphs("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_corpus_documents_end_with_aggregate() {
        let corpus = Corpus::from_notes("one line\nsecond line\n").unwrap();
        assert_eq!(
            corpus.documents(),
            vec!["one line", "second line", "one line second line"]
        );
    }

    #[test]
    fn test_empty_corpus_rejected() {
        assert!(matches!(
            Corpus::from_notes("\n   \n"),
            Err(Error::EmptyCorpus)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_notes(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }
}
