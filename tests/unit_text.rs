// Unit tests for normalization, tokenization, and lexicon scoring.
//
// Property-style checks run over a fixed set of awkward inputs rather than
// random ones: punctuation runs, mixed case, non-ASCII, stopword-only lines.

use retreat_notes::emotion::lexicon::EmotionCategory;
use retreat_notes::emotion::scorer::emotion_scores;
use retreat_notes::text::normalize::{is_stopword, normalize, tokenize, STOPWORDS};

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "Joy, joy, JOY!!!",
    "The Lord is my shepherd; I shall not want.",
    "We ponder -- and we discern -- in the quiet.",
    "Don't be afraid: 'fear not' was said 365 times?",
    "café crème, naïve résumé",
    "\t\ttabs\nand\r\nnewlines\u{00a0}nbsp",
    "a an the of to in it is",
    "grief/sorrow/lament — mourning…",
];

// ============================================================
// normalize
// ============================================================

#[test]
fn normalize_is_idempotent() {
    for s in SAMPLES {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
    }
}

#[test]
fn normalize_output_uses_allowed_characters_only() {
    for s in SAMPLES {
        let out = normalize(s);
        assert!(
            out.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '\'' || c == ' '),
            "unexpected character in {out:?}"
        );
        assert!(!out.contains("  "), "whitespace not collapsed in {out:?}");
        assert_eq!(out.trim(), out);
    }
}

// ============================================================
// tokenize
// ============================================================

#[test]
fn tokenize_never_yields_stopwords_or_short_tokens() {
    for s in SAMPLES {
        for tok in tokenize(s) {
            assert!(!is_stopword(&tok), "stopword {tok:?} from {s:?}");
            assert!(tok.chars().count() > 2, "short token {tok:?} from {s:?}");
        }
    }
}

#[test]
fn tokenize_stopword_only_text_is_empty() {
    assert!(tokenize("a an the of to in it is").is_empty());
}

#[test]
fn stopword_table_is_lowercase() {
    for w in STOPWORDS {
        assert_eq!(w.to_lowercase(), *w);
    }
}

// ============================================================
// emotion_scores
// ============================================================

#[test]
fn dist_sums_to_one_or_zero() {
    for s in SAMPLES {
        let score = emotion_scores(s);
        let sum: f64 = score.dist.entries().iter().map(|(_, f)| f).sum();
        if score.total_hits > 0 {
            assert!((sum - 1.0).abs() < 1e-9, "dist sums to {sum} for {s:?}");
        } else {
            assert_eq!(sum, 0.0, "no hits but dist sums to {sum} for {s:?}");
        }
    }
}

#[test]
fn scenario_repeated_words_count_each_occurrence() {
    let score = emotion_scores("joy joy sadness");
    assert_eq!(score.raw.joy, 2);
    assert_eq!(score.raw.sadness, 1);
    for cat in [
        EmotionCategory::Anger,
        EmotionCategory::Fear,
        EmotionCategory::Trust,
        EmotionCategory::Reflection,
    ] {
        assert_eq!(score.raw.get(cat), 0);
        assert_eq!(score.dist.get(cat), 0.0);
    }
    assert_eq!(score.total_hits, 3);
    assert!((score.dist.joy - 0.667).abs() < 0.001);
    assert!((score.dist.sadness - 0.333).abs() < 0.001);
    assert_eq!(score.top, EmotionCategory::Joy);
}

#[test]
fn scenario_paragraph_without_hits_is_all_zero() {
    let score = emotion_scores("We walked to the chapel after breakfast and read quietly.");
    assert_eq!(score.total_hits, 0);
    for (_, frac) in score.dist.entries() {
        assert_eq!(frac, 0.0);
        assert!(!frac.is_nan());
    }
}

#[test]
fn stopword_filtering_applies_before_lexicon() {
    // "hope" is a joy word; surrounding stopwords must not affect the count
    let score = emotion_scores("in the hope of it");
    assert_eq!(score.raw.joy, 1);
    assert_eq!(score.total_hits, 1);
}

#[test]
fn dominant_category_uses_raw_counts() {
    let score = emotion_scores("fear fear afraid trust wisdom");
    assert_eq!(score.top, EmotionCategory::Fear);
    assert_eq!(score.raw.fear, 3);
}

#[test]
fn emotion_score_json_shape() {
    let score = emotion_scores("mercy");
    let value = serde_json::to_value(&score).unwrap();
    assert_eq!(value["top"], "trust");
    assert_eq!(value["total_hits"], 1);
    assert_eq!(value["raw"]["trust"], 1);
    assert_eq!(value["dist"]["trust"], 1.0);
    assert_eq!(value["dist"]["joy"], 0.0);
}
