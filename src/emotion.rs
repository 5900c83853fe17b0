//! Emotion Wheel — 8 discrete emotions on a fixed ring.
//!
//! Plutchik-style taxonomy. Every emotion has an opposite (4 positions
//! away), two wheel neighbors, a complementary partner, and a base
//! intensity that scales interaction results:
//!
//! ```text
//! ┌─────────────┬─────────────┬──────────────────────┬──────────────┬───────┐
//! │ Emotion     │ Opposite    │ Adjacent             │ Complementary│ Base  │
//! ├─────────────┼─────────────┼──────────────────────┼──────────────┼───────┤
//! │ Joy         │ Sad         │ Trust, Anticipated   │ Trust        │ 1.0   │
//! │ Trust       │ Disgust     │ Joy, Feared          │ Joy          │ 0.9   │
//! │ Feared      │ Angry       │ Trust, Surprised     │ Surprised    │ 0.8   │
//! │ Surprised   │ Anticipated │ Feared, Sad          │ Feared       │ 0.7   │
//! │ Sad         │ Joy         │ Surprised, Disgust   │ Disgust      │ 0.6   │
//! │ Disgust     │ Trust       │ Sad, Angry           │ Sad          │ 0.7   │
//! │ Angry       │ Feared      │ Disgust, Anticipated │ Anticipated  │ 0.9   │
//! │ Anticipated │ Surprised   │ Angry, Joy           │ Angry        │ 0.8   │
//! └─────────────┴─────────────┴──────────────────────┴──────────────┴───────┘
//! ```
//!
//! The complementary partner is always one of the two wheel neighbors,
//! which is why [`emotion_relationship`] resolves such pairs as
//! `Adjacent`: the cascade checks adjacency first.

use serde::{Deserialize, Serialize};

use crate::wheel;
use crate::{Error, WHEEL_SIZE};

// =============================================================================
// THE WHEEL
// =============================================================================

/// One of the 8 discrete emotions, in fixed circular order.
///
/// The declaration order IS the wheel order (index 0..=7). Canonical
/// labels are the capitalized variant names, exact-match and
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Joy,
    Trust,
    Feared,
    Surprised,
    Sad,
    Disgust,
    Angry,
    Anticipated,
}

/// The emotion wheel in taxonomy order.
pub const EMOTION_WHEEL: [Emotion; WHEEL_SIZE] = [
    Emotion::Joy,
    Emotion::Trust,
    Emotion::Feared,
    Emotion::Surprised,
    Emotion::Sad,
    Emotion::Disgust,
    Emotion::Angry,
    Emotion::Anticipated,
];

/// Static relationship profile of one emotion.
#[derive(Debug, Clone, Copy)]
pub struct EmotionProfile {
    /// The emotion 4 positions away on the wheel. Pairing is symmetric.
    pub opposite: Emotion,
    /// The two wheel neighbors.
    pub adjacent: [Emotion; 2],
    /// The balancing partner. Pairs are symmetric by construction.
    pub complementary: Emotion,
    /// Scales the intensity of any interaction that resolves to this emotion.
    pub base_intensity: f64,
}

/// Relationship profiles, indexed by wheel position.
const PROFILES: [EmotionProfile; WHEEL_SIZE] = [
    // Joy
    EmotionProfile {
        opposite: Emotion::Sad,
        adjacent: [Emotion::Trust, Emotion::Anticipated],
        complementary: Emotion::Trust,
        base_intensity: 1.0,
    },
    // Trust
    EmotionProfile {
        opposite: Emotion::Disgust,
        adjacent: [Emotion::Joy, Emotion::Feared],
        complementary: Emotion::Joy,
        base_intensity: 0.9,
    },
    // Feared
    EmotionProfile {
        opposite: Emotion::Angry,
        adjacent: [Emotion::Trust, Emotion::Surprised],
        complementary: Emotion::Surprised,
        base_intensity: 0.8,
    },
    // Surprised
    EmotionProfile {
        opposite: Emotion::Anticipated,
        adjacent: [Emotion::Feared, Emotion::Sad],
        complementary: Emotion::Feared,
        base_intensity: 0.7,
    },
    // Sad
    EmotionProfile {
        opposite: Emotion::Joy,
        adjacent: [Emotion::Surprised, Emotion::Disgust],
        complementary: Emotion::Disgust,
        base_intensity: 0.6,
    },
    // Disgust
    EmotionProfile {
        opposite: Emotion::Trust,
        adjacent: [Emotion::Sad, Emotion::Angry],
        complementary: Emotion::Sad,
        base_intensity: 0.7,
    },
    // Angry
    EmotionProfile {
        opposite: Emotion::Feared,
        adjacent: [Emotion::Disgust, Emotion::Anticipated],
        complementary: Emotion::Anticipated,
        base_intensity: 0.9,
    },
    // Anticipated
    EmotionProfile {
        opposite: Emotion::Surprised,
        adjacent: [Emotion::Angry, Emotion::Joy],
        complementary: Emotion::Angry,
        base_intensity: 0.8,
    },
];

impl Emotion {
    /// Wheel position, 0..=7.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Static relationship profile for this emotion.
    #[inline]
    pub fn profile(self) -> &'static EmotionProfile {
        &PROFILES[self.index()]
    }

    /// The emotion 4 positions away on the wheel.
    #[inline]
    pub fn opposite(self) -> Emotion {
        self.profile().opposite
    }

    /// The two wheel neighbors.
    #[inline]
    pub fn adjacent(self) -> [Emotion; 2] {
        self.profile().adjacent
    }

    /// The balancing partner.
    #[inline]
    pub fn complementary(self) -> Emotion {
        self.profile().complementary
    }

    /// Base intensity scalar applied to interaction results.
    #[inline]
    pub fn base_intensity(self) -> f64 {
        self.profile().base_intensity
    }

    /// Canonical label, e.g. `"Joy"`.
    pub fn name(self) -> &'static str {
        match self {
            Emotion::Joy => "Joy",
            Emotion::Trust => "Trust",
            Emotion::Feared => "Feared",
            Emotion::Surprised => "Surprised",
            Emotion::Sad => "Sad",
            Emotion::Disgust => "Disgust",
            Emotion::Angry => "Angry",
            Emotion::Anticipated => "Anticipated",
        }
    }

    /// Parse a canonical label. Exact-match, case-sensitive.
    pub fn from_name(name: &str) -> Option<Emotion> {
        EMOTION_WHEEL.iter().copied().find(|e| e.name() == name)
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Emotion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::from_name(s).ok_or_else(|| Error::UnknownEmotion(s.to_string()))
    }
}

// =============================================================================
// RELATIONSHIP CLASSIFIER
// =============================================================================

/// How two emotions relate on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionRelation {
    Same,
    Opposite,
    Adjacent,
    Complementary,
    Neutral,
}

impl EmotionRelation {
    /// Lowercase label as stored alongside interaction records.
    pub fn as_str(self) -> &'static str {
        match self {
            EmotionRelation::Same => "same",
            EmotionRelation::Opposite => "opposite",
            EmotionRelation::Adjacent => "adjacent",
            EmotionRelation::Complementary => "complementary",
            EmotionRelation::Neutral => "neutral",
        }
    }
}

/// Classify the relationship between two emotions.
///
/// Ordered cascade: same wins over opposite wins over adjacent wins over
/// complementary wins over neutral. The order is the contract: some
/// wheel pairs satisfy more than one category (every complementary
/// partner is also a neighbor) and the earlier check decides.
pub fn emotion_relationship(e1: Emotion, e2: Emotion) -> EmotionRelation {
    let profile = e1.profile();
    if e1 == e2 {
        EmotionRelation::Same
    } else if profile.opposite == e2 {
        EmotionRelation::Opposite
    } else if profile.adjacent.contains(&e2) {
        EmotionRelation::Adjacent
    } else if profile.complementary == e2 {
        EmotionRelation::Complementary
    } else {
        EmotionRelation::Neutral
    }
}

// =============================================================================
// BLENDING
// =============================================================================

/// Blend two emotions: the wheel member at their wrap-corrected floor
/// midpoint. Blending an emotion with itself returns itself.
pub fn blend_emotions(a: Emotion, b: Emotion) -> Emotion {
    EMOTION_WHEEL[wheel::midpoint(a.index(), b.index())]
}

// =============================================================================
// INTROSPECTION HELPERS
// =============================================================================

/// All 8 emotions in taxonomy order.
pub fn list_emotions() -> &'static [Emotion; WHEEL_SIZE] {
    &EMOTION_WHEEL
}

/// Is `name` a canonical emotion label? Exact-match, case-sensitive.
pub fn is_valid_emotion(name: &str) -> bool {
    Emotion::from_name(name).is_some()
}

// =============================================================================
// TESTS
// =============================================================================
