// Ad-hoc search over the notes lines.
//
// The interactive loop reads one query per line and stops on a blank line
// or end of input. A blank line is the normal way out, not an error.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::output::{terminal, to_json, OutputFormat};
use crate::vector::similarity::{retrieve, Snippet};
use crate::vector::tfidf::VectorSpace;

/// Describes what the scores in a search response mean.
pub const SCORE_SCALE: &str = "cosine similarity on TF-IDF; unitless; max=1.00";

pub const PROMPT: &str = "Search notes (blank to exit): ";

/// Structured search output. Scores are rounded to 6 decimal places.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub scale: &'static str,
    pub snippets: Vec<Snippet>,
}

impl SearchResponse {
    pub fn new(query: &str, snippets: Vec<Snippet>) -> Self {
        let snippets = snippets
            .into_iter()
            .map(|s| Snippet {
                score: round6(s.score),
                text: s.text,
            })
            .collect();
        Self {
            query: query.to_string(),
            scale: SCORE_SCALE,
            snippets,
        }
    }
}

fn round6(x: f64) -> f64 {
    (x * 1e6).round() / 1e6
}

/// Runs queries against a fixed set of lines and a frozen vector space.
pub struct SearchSession<'a> {
    lines: &'a [String],
    space: &'a VectorSpace,
    top_k: usize,
    format: OutputFormat,
}

impl<'a> SearchSession<'a> {
    pub fn new(
        lines: &'a [String],
        space: &'a VectorSpace,
        top_k: usize,
        format: OutputFormat,
    ) -> Self {
        Self {
            lines,
            space,
            top_k,
            format,
        }
    }

    /// Search once and render the result in the session's format.
    pub fn render_query(&self, query: &str) -> Result<String> {
        let snippets = retrieve(self.lines, self.space, query, self.top_k);
        match self.format {
            OutputFormat::Human => Ok(terminal::render_search(query, &snippets)),
            OutputFormat::Json => {
                let response = SearchResponse::new(query, snippets);
                // JSON blocks are followed by an empty line
                Ok(format!("{}\n\n", to_json(&response)?))
            }
        }
    }

    /// Prompt, read, search, print until a blank line or end of input.
    ///
    /// Returns the number of queries answered.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<usize> {
        let mut answered = 0;
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let query = line.trim();
            if query.is_empty() {
                break;
            }

            debug!(query, "Search query");
            write!(out, "{}", self.render_query(query)?)?;
            answered += 1;
        }
        Ok(answered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    fn fixture() -> (Corpus, VectorSpace) {
        let corpus = Corpus::from_notes("joy and peace\ngrief and sorrow\n").unwrap();
        let space = corpus.fit().unwrap();
        (corpus, space)
    }

    #[test]
    fn test_round6() {
        assert_eq!(round6(0.123_456_789), 0.123457);
        assert_eq!(round6(1.0), 1.0);
    }

    #[test]
    fn test_blank_line_ends_loop() {
        let (corpus, space) = fixture();
        let session = SearchSession::new(corpus.lines(), &space, 7, OutputFormat::Json);
        let input = "joy\n\nsorrow\n".as_bytes();
        let mut out = Vec::new();
        let answered = session.run(input, &mut out).unwrap();
        assert_eq!(answered, 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"query\": \"joy\""));
        assert!(!text.contains("\"query\": \"sorrow\""));
    }

    #[test]
    fn test_end_of_input_ends_loop() {
        let (corpus, space) = fixture();
        let session = SearchSession::new(corpus.lines(), &space, 7, OutputFormat::Human);
        let mut out = Vec::new();
        let answered = session.run("grief\nsorrow".as_bytes(), &mut out).unwrap();
        assert_eq!(answered, 2);
    }

    #[test]
    fn test_json_response_shape() {
        let (corpus, space) = fixture();
        let session = SearchSession::new(corpus.lines(), &space, 7, OutputFormat::Json);
        let rendered = session.render_query("joy").unwrap();
        let value: serde_json::Value = serde_json::from_str(rendered.trim()).unwrap();

        assert_eq!(value["query"], "joy");
        assert_eq!(value["scale"], SCORE_SCALE);
        let snippets = value["snippets"].as_array().unwrap();
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0]["text"], "joy and peace");
        assert!(snippets[0]["score"].as_f64().unwrap() > 0.0);
    }
}
