// Vector space model — TF-IDF fitting, similarity ranking, keywords.

pub mod keywords;
pub mod similarity;
pub mod tfidf;
