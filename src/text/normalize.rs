// Normalization and tokenization for lexicon scoring and term counts.
//
// This is the "word count" view of the notes: lowercase, punctuation turned
// into spaces, stopwords and very short tokens dropped. The vector space has
// its own pattern-based tokenizer (see `vector::tfidf::analyze`) and the two
// deliberately do not agree on every token.

/// Common words that carry no topical signal.
///
/// Shared by both tokenizers. Immutable for the life of the process.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "else", "in", "on", "at", "to", "for",
    "from", "of", "with", "without", "into", "over", "under", "is", "are", "was", "were", "be",
    "been", "being", "this", "that", "these", "those", "it", "its", "as", "by", "not", "no",
    "yes", "do", "does", "did", "we", "you", "they", "i", "he", "she", "him", "her", "them",
    "our", "your", "their", "my", "mine", "yours", "ours", "theirs",
];

/// Tokens of this many characters or fewer are dropped by `tokenize`.
const MAX_SHORT_TOKEN_LEN: usize = 2;

/// Check membership in the stopword table.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Lowercase, replace anything outside `[a-z0-9' ]` and whitespace with a
/// space, collapse whitespace runs and trim.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '\'' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into tokens, dropping stopwords and short tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|t| !is_stopword(t) && t.chars().count() > MAX_SHORT_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}
