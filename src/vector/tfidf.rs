// TF-IDF vector space over the notes.
//
// `VectorSpace::fit` builds a frozen vocabulary of unigrams and bigrams from
// the corpus documents and computes a smoothed IDF per term:
//
//   idf(t) = ln((1 + N) / (1 + df(t))) + 1
//
// `transform` turns any text into a sparse, L2-normalized TF-IDF vector over
// that vocabulary. Terms the vocabulary has never seen are ignored, so every
// vector produced after fitting is directly comparable with every other.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::text::normalize::is_stopword;

/// Word pattern for the vector path: a letter or apostrophe followed by at
/// least one more. Digits never form part of a term. `\b` is Unicode-aware,
/// so accented letters count as word characters and block a match.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z'][a-zA-Z']+\b").expect("valid token pattern"));

/// Extract the unigram and bigram terms of a text, in order of appearance.
///
/// Lowercases, matches `TOKEN_PATTERN`, drops stopwords, then forms bigrams
/// from the surviving unigrams (so a bigram can bridge a removed stopword).
pub fn analyze(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let unigrams: Vec<&str> = TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !is_stopword(t))
        .collect();

    let mut terms: Vec<String> = unigrams.iter().map(|t| t.to_string()).collect();
    terms.extend(unigrams.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    terms
}

/// A sparse TF-IDF vector: term index -> weight.
///
/// Weights are non-negative and, unless the vector is all-zero, the vector
/// has unit Euclidean length. Absent indices have weight 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: BTreeMap<usize, f64>,
}

impl TermVector {
    /// Weight for a term index (0.0 if absent).
    pub fn weight(&self, index: usize) -> f64 {
        self.weights.get(&index).copied().unwrap_or(0.0)
    }

    /// Non-zero `(index, weight)` entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.weights.iter().map(|(&i, &w)| (i, w))
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.weights.len()
    }

    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Sparse dot product. Walks the shorter of the two vectors.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.nnz() <= other.nnz() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .weights
            .iter()
            .filter_map(|(i, w)| large.weights.get(i).map(|v| w * v))
            .sum()
    }
}

/// A fitted vocabulary with per-term IDF. Read-only after `fit`.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    /// Terms in lexicographic order; a term's position is its index
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
    idf: Vec<f64>,
    document_count: usize,
}

impl VectorSpace {
    /// Fit the vocabulary and IDF weights over a set of documents.
    ///
    /// Every term seen in at least one document is kept. Fails with
    /// `EmptyCorpus` when there are no documents.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let distinct: BTreeSet<String> = analyze(doc.as_ref()).into_iter().collect();
            for term in distinct {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let mut vocabulary = Vec::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        let mut index = HashMap::with_capacity(document_frequency.len());

        // BTreeMap iteration gives lexicographic term order
        for (i, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            index.insert(term.clone(), i);
            vocabulary.push(term);
        }

        info!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Fitted TF-IDF vector space"
        );

        Ok(Self {
            vocabulary,
            index,
            idf,
            document_count: documents.len(),
        })
    }

    /// Vectorize a batch of texts.
    pub fn transform<S: AsRef<str>>(&self, texts: &[S]) -> Vec<TermVector> {
        texts.iter().map(|t| self.transform_one(t.as_ref())).collect()
    }

    /// Vectorize a single text: raw counts x IDF, then L2-normalized.
    pub fn transform_one(&self, text: &str) -> TermVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in analyze(text) {
            if let Some(&i) = self.index.get(&term) {
                *counts.entry(i).or_insert(0.0) += 1.0;
            }
        }

        for (i, w) in counts.iter_mut() {
            *w *= self.idf[*i];
        }

        let mut vector = TermVector { weights: counts };
        let norm = vector.norm();
        if norm > 0.0 {
            for w in vector.weights.values_mut() {
                *w /= norm;
            }
        }

        debug!(terms = vector.nnz(), "Vectorized text");
        vector
    }

    /// All terms, indexed by position.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Index of a term, if it is in the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// IDF weight of a term, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|i| self.idf[i])
    }

    /// Number of documents the space was fitted on.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}
