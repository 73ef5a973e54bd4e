// Keyword extraction from a single TF-IDF vector.

use super::tfidf::TermVector;

/// The `n` highest-weighted terms of `vector`, highest first.
///
/// Only terms with strictly positive weight are returned. Equal weights are
/// ordered by vocabulary index.
pub fn top_keywords(vector: &TermVector, vocabulary: &[String], n: usize) -> Vec<String> {
    let mut entries: Vec<(usize, f64)> = vector.iter().filter(|(_, w)| *w > 0.0).collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    entries
        .into_iter()
        .take(n)
        .filter_map(|(i, _)| vocabulary.get(i).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::tfidf::VectorSpace;

    #[test]
    fn test_rarer_term_ranks_higher() {
        let docs = ["grace mercy", "grace", "grace"];
        let space = VectorSpace::fit(&docs).unwrap();
        let v = space.transform_one("grace mercy");
        let kw = top_keywords(&v, space.vocabulary(), 10);
        // "mercy" and "grace mercy" share the higher idf; grace is everywhere
        assert_eq!(kw, vec!["grace mercy", "mercy", "grace"]);
    }

    #[test]
    fn test_limit_n() {
        let docs = ["alpha beta gamma delta"];
        let space = VectorSpace::fit(&docs).unwrap();
        let v = space.transform_one("alpha beta gamma delta");
        assert_eq!(top_keywords(&v, space.vocabulary(), 2).len(), 2);
    }

    #[test]
    fn test_zero_vector_has_no_keywords() {
        let space = VectorSpace::fit(&["alpha"]).unwrap();
        let v = space.transform_one("omega");
        assert!(top_keywords(&v, space.vocabulary(), 5).is_empty());
    }
}
