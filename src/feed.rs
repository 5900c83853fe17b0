//! Feed Preference Ranking — what a user wants to see next.
//!
//! Builds per-taxonomy weight maps from the user's current emotion and
//! color, then ranks both wheels by weight. Assignments are applied in a
//! fixed sequence and later assignments overwrite earlier ones on
//! collision: the complementary emotion is always one of the two
//! adjacents, so it lands at 1.2 rather than 1.3, and a triadic color
//! that doubles as the complementary drops from 1.1 to 1.0.
//!
//! ```text
//! Emotions: user 1.5 → adjacent 1.3 → complementary 1.2 → opposite 0.8 → rest 1.0
//! Colors:   user 1.5 → analogous 1.3 → complementary 1.1 → triadic 1.0 → rest 0.9
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::{Color, COLOR_WHEEL};
use crate::emotion::{Emotion, EMOTION_WHEEL};

/// Ranked taxonomies and the weight maps behind them.
///
/// Both ranked lists always hold all 8 members of their wheel, sorted by
/// weight descending with ties in taxonomy order. The weight maps are
/// empty only in the balanced (invalid-input) case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPreferences {
    pub ranked_emotions: Vec<Emotion>,
    pub ranked_colors: Vec<Color>,
    pub emotion_weights: BTreeMap<Emotion, f64>,
    pub color_weights: BTreeMap<Color, f64>,
}

impl FeedPreferences {
    /// The balanced result: both wheels in taxonomy order, no weights.
    /// Returned by the string entry point for labels outside the
    /// taxonomies.
    pub fn balanced() -> FeedPreferences {
        FeedPreferences {
            ranked_emotions: EMOTION_WHEEL.to_vec(),
            ranked_colors: COLOR_WHEEL.to_vec(),
            emotion_weights: BTreeMap::new(),
            color_weights: BTreeMap::new(),
        }
    }
}

/// Compute feed preference weights for a user's current state.
pub fn calculate_feed_preferences(user_emotion: Emotion, user_color: Color) -> FeedPreferences {
    let emotion_profile = user_emotion.profile();
    let color_profile = user_color.profile();

    // Sequential assignment; insert overwrites, later rules win.
    let mut emotion_weights: BTreeMap<Emotion, f64> = BTreeMap::new();
    emotion_weights.insert(user_emotion, 1.5);
    for adjacent in emotion_profile.adjacent {
        emotion_weights.insert(adjacent, 1.3);
    }
    emotion_weights.insert(emotion_profile.complementary, 1.2);
    emotion_weights.insert(emotion_profile.opposite, 0.8);
    for &emotion in &EMOTION_WHEEL {
        emotion_weights.entry(emotion).or_insert(1.0);
    }

    let mut color_weights: BTreeMap<Color, f64> = BTreeMap::new();
    color_weights.insert(user_color, 1.5);
    for analogous in color_profile.analogous {
        color_weights.insert(analogous, 1.3);
    }
    color_weights.insert(color_profile.complementary, 1.1);
    for &triadic in color_profile.triadic {
        color_weights.insert(triadic, 1.0);
    }
    for &color in &COLOR_WHEEL {
        color_weights.entry(color).or_insert(0.9);
    }

    FeedPreferences {
        ranked_emotions: rank(&EMOTION_WHEEL, &emotion_weights),
        ranked_colors: rank(&COLOR_WHEEL, &color_weights),
        emotion_weights,
        color_weights,
    }
}

/// String-level entry point for untrusted labels. Labels outside the
/// taxonomies yield [`FeedPreferences::balanced`].
pub fn calculate_feed_preferences_str(user_emotion: &str, user_color: &str) -> FeedPreferences {
    match (Emotion::from_name(user_emotion), Color::from_name(user_color)) {
        (Some(e), Some(c)) => calculate_feed_preferences(e, c),
        _ => FeedPreferences::balanced(),
    }
}

/// Sort a wheel by weight descending. The sort is stable over taxonomy
/// order, so equal weights keep their wheel positions relative to each
/// other.
fn rank<T: Copy + Ord>(wheel: &[T; crate::WHEEL_SIZE], weights: &BTreeMap<T, f64>) -> Vec<T> {
    let mut ranked = wheel.to_vec();
    ranked.sort_by(|a, b| {
        let wa = weights.get(a).copied().unwrap_or(0.0);
        let wb = weights.get(b).copied().unwrap_or(0.0);
        wb.total_cmp(&wa)
    });
    ranked
}

// =============================================================================
// TESTS
// =============================================================================
