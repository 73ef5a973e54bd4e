// Cosine similarity, line retrieval, and theme ranking.
//
// All vectors come out of `VectorSpace::transform`, so they are
// non-negative and unit length (or all-zero). Cosine similarity is then just
// the dot product and always falls in [0, 1].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tfidf::{TermVector, VectorSpace};

/// A fixed reference text describing one retreat theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeReference {
    pub name: &'static str,
    pub text: &'static str,
}

/// The five retreat themes, in declaration order.
pub const THEMES: [ThemeReference; 5] = [
    ThemeReference {
        name: "Grace & Renewal",
        text: "grace truth renewed salvation mercy",
    },
    ThemeReference {
        name: "Kingdom & Calling",
        text: "kingdom proclamation fulfillment mission",
    },
    ThemeReference {
        name: "Lent & Practice",
        text: "lent preparation discipline prayer repentance",
    },
    ThemeReference {
        name: "Gospel as Message",
        text: "gospel message teachings proclaim",
    },
    ThemeReference {
        name: "Mindfulness & Clarity",
        text: "meditate clarity wisdom discern understand",
    },
];

/// A retrieved line and its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub score: f64,
    pub text: String,
}

/// Similarity of a document to one theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeScore {
    pub name: String,
    pub score: f64,
}

/// Cosine similarity of two vectors from the same vector space.
///
/// Clamped to [0, 1] to absorb floating-point drift on identical vectors.
pub fn cosine(u: &TermVector, v: &TermVector) -> f64 {
    u.dot(v).clamp(0.0, 1.0)
}

/// Rank `lines` by similarity to `query` and keep the best `k`.
///
/// Lines with zero similarity are never returned, even when fewer than `k`
/// remain. Equal scores keep their original line order.
pub fn retrieve<S: AsRef<str>>(
    lines: &[S],
    space: &VectorSpace,
    query: &str,
    k: usize,
) -> Vec<Snippet> {
    let line_vectors = space.transform(lines);
    let query_vector = space.transform_one(query);

    let mut scored: Vec<(usize, f64)> = line_vectors
        .iter()
        .map(|v| cosine(&query_vector, v))
        .enumerate()
        .collect();

    // Stable sort: ties stay in corpus order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let snippets: Vec<Snippet> = scored
        .into_iter()
        .take(k)
        .filter(|(_, score)| *score > 0.0)
        .map(|(i, score)| Snippet {
            score,
            text: lines[i].as_ref().to_string(),
        })
        .collect();

    debug!(query, k, hits = snippets.len(), "Retrieved lines");
    snippets
}

/// Similarity of a document to every theme, highest first.
///
/// All five themes are always returned, including those scoring 0. Equal
/// scores keep theme declaration order.
pub fn theme_similarity(doc_text: &str, space: &VectorSpace) -> Vec<ThemeScore> {
    let doc_vector = space.transform_one(doc_text);
    let theme_texts: Vec<&str> = THEMES.iter().map(|t| t.text).collect();
    let theme_vectors = space.transform(&theme_texts);

    let mut ranked: Vec<ThemeScore> = THEMES
        .iter()
        .zip(theme_vectors.iter())
        .map(|(theme, v)| ThemeScore {
            name: theme.name.to_string(),
            score: cosine(&doc_vector, v),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}
