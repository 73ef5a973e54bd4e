// Emotion scoring against the static lexicon.
//
// Counts every token occurrence (repeats included) that appears in a
// category's word set. The distribution is a fraction of total hits, NOT a
// probability that the text "is" that emotion.

use serde::{Deserialize, Serialize};

use super::lexicon::{EmotionCategory, PerCategory};
use crate::text::normalize::tokenize;

/// Lexicon hits for one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    /// Raw hit count per category
    pub raw: PerCategory<u32>,
    /// raw / total_hits; all zeros when there are no hits
    pub dist: PerCategory<f64>,
    /// Category with the most raw hits (ties go to the earlier category)
    pub top: EmotionCategory,
    pub total_hits: u32,
}

impl EmotionScore {
    /// Distribution entries sorted by fraction descending.
    ///
    /// Stable, so equal fractions keep canonical category order.
    pub fn ranked_dist(&self) -> Vec<(EmotionCategory, f64)> {
        let mut entries = self.dist.entries().to_vec();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }
}

/// Score a text against the emotion lexicon.
pub fn emotion_scores(text: &str) -> EmotionScore {
    let tokens = tokenize(text);

    let raw = PerCategory::from_fn(|category| {
        tokens.iter().filter(|t| category.contains(t)).count() as u32
    });

    let total_hits: u32 = raw.entries().iter().map(|(_, n)| n).sum();
    // Zero hits divides by one so every fraction is exactly 0.0
    let denom = total_hits.max(1) as f64;
    let dist = PerCategory::from_fn(|category| raw.get(category) as f64 / denom);

    let mut top = EmotionCategory::Joy;
    for category in EmotionCategory::ALL {
        if raw.get(category) > raw.get(top) {
            top = category;
        }
    }

    EmotionScore {
        raw,
        dist,
        top,
        total_hits,
    }
}
