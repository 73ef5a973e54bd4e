// Full-corpus scan report.
//
// Pure composition of the other modules. Each section recomputes its own
// vectors from the frozen vector space; nothing is shared between sections.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use crate::corpus::{split_paragraphs, Corpus};
use crate::emotion::lexicon::{EmotionCategory, PerCategory};
use crate::emotion::scorer::{emotion_scores, EmotionScore};
use crate::output::truncate_chars;
use crate::text::normalize::tokenize;
use crate::vector::keywords::top_keywords;
use crate::vector::similarity::{retrieve, theme_similarity, Snippet, ThemeScore};
use crate::vector::tfidf::VectorSpace;

/// Named queries whose best-matching lines appear in every report.
pub const SNIPPET_QUERIES: [(&str, &str); 4] = [
    ("Grace", "grace truth mercy renewed"),
    ("Kingdom", "kingdom fulfillment hands"),
    ("Gospel", "gospel proclaim message teachings"),
    ("Lent", "lent preparation connect life"),
];

/// Section sizes for the scan report.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    /// Corpus keywords to extract (default 18)
    pub keyword_count: usize,
    /// Most frequent tokens to list (default 20)
    pub top_terms: usize,
    /// Leading paragraphs that get an emotion breakdown (default 12)
    pub paragraph_sample: usize,
    /// Preview length in characters (default 140)
    pub preview_chars: usize,
    /// Lines per canned query (default 4)
    pub snippets_per_query: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            keyword_count: 18,
            top_terms: 20,
            paragraph_sample: 12,
            preview_chars: 140,
            snippets_per_query: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanStats {
    pub lines: usize,
    /// Lexicon-path tokens across the whole text
    pub tokens: usize,
    pub paragraphs: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParagraphEmotion {
    /// 1-based paragraph number
    pub para: usize,
    pub top_emotion: EmotionCategory,
    pub dist: PerCategory<f64>,
    pub total_hits: u32,
    pub preview: String,
}

/// Everything the full scan produces. Field names are part of the JSON contract.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub stats: ScanStats,
    pub emotion: EmotionScore,
    pub top_keywords: Vec<String>,
    pub top_terms: Vec<TermCount>,
    pub theme_similarity: Vec<ThemeScore>,
    pub paragraph_emotions_sample: Vec<ParagraphEmotion>,
    pub snippets_by_query: IndexMap<String, Vec<Snippet>>,
}

/// Count token occurrences and return the `n` most frequent.
///
/// Ties keep first-occurrence order.
pub fn term_frequencies(tokens: &[String], n: usize) -> Vec<TermCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(n)
        .map(|(term, count)| TermCount {
            term: term.to_string(),
            count,
        })
        .collect()
}

/// Build the full scan report for the notes.
pub fn scan_report(
    notes: &str,
    corpus: &Corpus,
    space: &VectorSpace,
    settings: &ScanSettings,
) -> ScanReport {
    let emotion = emotion_scores(notes);

    let doc_vector = space.transform_one(corpus.aggregate());
    let keywords = top_keywords(&doc_vector, space.vocabulary(), settings.keyword_count);

    let tokens = tokenize(notes);
    let top_terms = term_frequencies(&tokens, settings.top_terms);

    let paragraphs = split_paragraphs(notes);
    let paragraph_emotions_sample: Vec<ParagraphEmotion> = paragraphs
        .iter()
        .take(settings.paragraph_sample)
        .enumerate()
        .map(|(i, p)| {
            let score = emotion_scores(p);
            ParagraphEmotion {
                para: i + 1,
                top_emotion: score.top,
                dist: score.dist,
                total_hits: score.total_hits,
                preview: truncate_chars(p, settings.preview_chars),
            }
        })
        .collect();

    let themes = theme_similarity(corpus.aggregate(), space);

    let snippets_by_query: IndexMap<String, Vec<Snippet>> = SNIPPET_QUERIES
        .iter()
        .map(|(name, query)| {
            (
                name.to_string(),
                retrieve(corpus.lines(), space, query, settings.snippets_per_query),
            )
        })
        .collect();

    info!(
        lines = corpus.lines().len(),
        tokens = tokens.len(),
        paragraphs = paragraphs.len(),
        emotion_hits = emotion.total_hits,
        "Scan complete"
    );

    ScanReport {
        stats: ScanStats {
            lines: corpus.lines().len(),
            tokens: tokens.len(),
            paragraphs: paragraphs.len(),
        },
        emotion,
        top_keywords: keywords,
        top_terms,
        theme_similarity: themes,
        paragraph_emotions_sample,
        snippets_by_query,
    }
}
