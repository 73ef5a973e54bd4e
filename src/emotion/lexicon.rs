// The fixed emotion categories and their trigger words.
//
// Categories are a closed enum rather than map keys so that iteration order
// is explicit. `EmotionCategory::ALL` is the canonical order used for the
// dominant-category tie-break and for serialized output.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Joy,
    Sadness,
    Anger,
    Fear,
    Trust,
    Reflection,
}

impl EmotionCategory {
    /// Canonical declaration order.
    pub const ALL: [EmotionCategory; 6] = [
        EmotionCategory::Joy,
        EmotionCategory::Sadness,
        EmotionCategory::Anger,
        EmotionCategory::Fear,
        EmotionCategory::Trust,
        EmotionCategory::Reflection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Joy => "joy",
            EmotionCategory::Sadness => "sadness",
            EmotionCategory::Anger => "anger",
            EmotionCategory::Fear => "fear",
            EmotionCategory::Trust => "trust",
            EmotionCategory::Reflection => "reflection",
        }
    }

    /// Trigger words for this category.
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            EmotionCategory::Joy => &[
                "joy", "rejoice", "glad", "praise", "peace", "grace", "love", "hope", "light",
            ],
            EmotionCategory::Sadness => &[
                "sad", "sadness", "weep", "mourning", "grief", "lament", "sorrow",
            ],
            EmotionCategory::Anger => &["anger", "wrath", "rage", "fury", "hate"],
            EmotionCategory::Fear => &["fear", "afraid", "anxious", "terror", "tremble"],
            EmotionCategory::Trust => &["trust", "faith", "believe", "amen", "steadfast", "mercy"],
            EmotionCategory::Reflection => &[
                "meditate",
                "ponder",
                "wisdom",
                "understand",
                "discern",
                "clarity",
            ],
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words().contains(&token)
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per emotion category, always in canonical order.
///
/// Serializes as a JSON object keyed by category name, e.g.
/// `{"joy": 2, "sadness": 1, "anger": 0, ...}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerCategory<T> {
    pub joy: T,
    pub sadness: T,
    pub anger: T,
    pub fear: T,
    pub trust: T,
    pub reflection: T,
}

impl<T: Copy> PerCategory<T> {
    /// Build by evaluating `f` once per category, in canonical order.
    pub fn from_fn(mut f: impl FnMut(EmotionCategory) -> T) -> Self {
        Self {
            joy: f(EmotionCategory::Joy),
            sadness: f(EmotionCategory::Sadness),
            anger: f(EmotionCategory::Anger),
            fear: f(EmotionCategory::Fear),
            trust: f(EmotionCategory::Trust),
            reflection: f(EmotionCategory::Reflection),
        }
    }

    pub fn get(&self, category: EmotionCategory) -> T {
        match category {
            EmotionCategory::Joy => self.joy,
            EmotionCategory::Sadness => self.sadness,
            EmotionCategory::Anger => self.anger,
            EmotionCategory::Fear => self.fear,
            EmotionCategory::Trust => self.trust,
            EmotionCategory::Reflection => self.reflection,
        }
    }

    /// `(category, value)` pairs in canonical order.
    pub fn entries(&self) -> [(EmotionCategory, T); 6] {
        EmotionCategory::ALL.map(|c| (c, self.get(c)))
    }
}
