//! Interaction Engine — what happens when a user acts on a post.
//!
//! Combines the emotion relationship and the color harmony of the
//! (user, post) pair into a new emotion/color/intensity/confidence
//! tuple. The rule tables:
//!
//! ```text
//! Emotion rule (sets intensity + confidence)
//! ┌───────────────┬──────────────────────────────┬───────────┬────────────┐
//! │ Relation      │ Result emotion               │ Intensity │ Confidence │
//! ├───────────────┼──────────────────────────────┼───────────┼────────────┤
//! │ opposite      │ complementary(user)          │ 0.8       │ 0.9        │
//! │ adjacent      │ post                         │ 1.3       │ 1.0        │
//! │ complementary │ blend(user, post)            │ 1.0       │ 0.85       │
//! │ same          │ post                         │ 1.5       │ 1.0        │
//! │ neutral       │ post                         │ 0.9       │ 0.7        │
//! └───────────────┴──────────────────────────────┴───────────┴────────────┘
//!
//! Color rule (multiplies into the running intensity)
//! ┌───────────────┬──────────────────────────────┬───────────┐
//! │ Harmony       │ Result color                 │ Intensity │
//! ├───────────────┼──────────────────────────────┼───────────┤
//! │ complementary │ closest triadic of user's    │ ×1.1      │
//! │ analogous     │ post                         │ ×1.0      │
//! │ triadic       │ blend(user, post)            │ ×0.95     │
//! │ same          │ user                         │ ×1.2      │
//! │ neutral       │ blend(user, post)            │ ×0.9      │
//! └───────────────┴──────────────────────────────┴───────────┘
//! ```
//!
//! The composed intensity is then scaled by the result emotion's base
//! intensity and capped at 2.0. Pure computation throughout, with no
//! state and no I/O; the string entry points degrade to a fixed
//! fallback result instead of erroring.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::color::{blend_colors, closest_triadic, color_harmony, Color, ColorHarmony};
use crate::emotion::{blend_emotions, emotion_relationship, Emotion, EmotionRelation};

/// Intensity never exceeds this, whatever the rule composition yields.
pub const MAX_INTENSITY: f64 = 2.0;

/// Placeholder recorded as the original emotion on the fallback path.
const UNKNOWN_EMOTION: &str = "Unknown";
/// Placeholder recorded as the original color on the fallback path.
const UNKNOWN_COLOR: &str = "unknown";

// =============================================================================
// RESULT
// =============================================================================

/// Outcome of one user-acts-on-post event.
///
/// A value object, produced once and never mutated by the engine. The
/// caller persists `emotion`/`color`/`intensity` onto the post record;
/// `relation`/`harmony` and the `original_*` provenance fields travel
/// with it for analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionResult {
    /// Emotion the post should take on after this interaction.
    pub emotion: Emotion,
    /// Color the post should take on after this interaction.
    pub color: Color,
    /// Composed weight of the interaction, rounded to 2 decimals, in [0, 2].
    pub intensity: f64,
    /// Certainty of the emotion-side classification, rounded to 2 decimals, in [0, 1].
    pub confidence: f64,
    /// Emotion relationship that drove the emotion rule.
    pub relation: EmotionRelation,
    /// Color harmony that drove the color rule.
    pub harmony: ColorHarmony,
    /// Canonical label of the post emotion the call was made against, or
    /// `"Unknown"` on the fallback path.
    pub original_emotion: String,
    /// Canonical label of the post color the call was made against, or
    /// `"unknown"` on the fallback path.
    pub original_color: String,
}

impl InteractionResult {
    /// The fixed result substituted when a string entry point receives a
    /// label outside its taxonomy. Identical regardless of the invalid
    /// input; the `original_*` fields carry hardcoded placeholders, not
    /// echoes of the bad labels.
    pub fn fallback() -> InteractionResult {
        InteractionResult {
            emotion: Emotion::Disgust,
            color: Color::Orange,
            intensity: 1.0,
            confidence: 0.5,
            relation: EmotionRelation::Neutral,
            harmony: ColorHarmony::Neutral,
            original_emotion: UNKNOWN_EMOTION.to_string(),
            original_color: UNKNOWN_COLOR.to_string(),
        }
    }
}

/// One act-on-content event, as a plain tuple of states.
///
/// Batch input for [`calculate_interaction_batch`]; also convenient for
/// callers that queue interactions before evaluating them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interaction {
    pub user_emotion: Emotion,
    pub user_color: Color,
    pub post_emotion: Emotion,
    pub post_color: Color,
}

// =============================================================================
// THE CALCULATION
// =============================================================================

/// Calculate the emotional response when a user interacts with a post.
///
/// Total over the typed taxonomies; deterministic; side-effect free.
pub fn calculate_interaction(
    user_emotion: Emotion,
    user_color: Color,
    post_emotion: Emotion,
    post_color: Color,
) -> InteractionResult {
    let relation = emotion_relationship(user_emotion, post_emotion);
    let harmony = color_harmony(user_color, post_color);

    // Emotion rule: picks the result emotion, seeds intensity, and is the
    // only place confidence is set.
    let (result_emotion, mut intensity, confidence) = match relation {
        EmotionRelation::Opposite => (user_emotion.complementary(), 0.8, 0.9),
        EmotionRelation::Adjacent => (post_emotion, 1.3, 1.0),
        EmotionRelation::Complementary => (blend_emotions(user_emotion, post_emotion), 1.0, 0.85),
        EmotionRelation::Same => (post_emotion, 1.5, 1.0),
        EmotionRelation::Neutral => (post_emotion, 0.9, 0.7),
    };

    // Color rule: picks the result color and multiplies into the running
    // intensity. The triadic candidates come from the USER's color.
    let result_color = match harmony {
        ColorHarmony::Complementary => {
            intensity *= 1.1;
            closest_triadic(user_color.triadic(), post_color).unwrap_or(post_color)
        }
        ColorHarmony::Analogous => post_color,
        ColorHarmony::Triadic => {
            intensity *= 0.95;
            blend_colors(user_color, post_color)
        }
        ColorHarmony::Same => {
            intensity *= 1.2;
            user_color
        }
        ColorHarmony::Neutral => {
            intensity *= 0.9;
            blend_colors(user_color, post_color)
        }
    };

    // The resulting emotion's own base intensity scales the composed value.
    intensity = (intensity * result_emotion.base_intensity()).min(MAX_INTENSITY);

    InteractionResult {
        emotion: result_emotion,
        color: result_color,
        intensity: round2(intensity),
        confidence: round2(confidence),
        relation,
        harmony,
        original_emotion: post_emotion.name().to_string(),
        original_color: post_color.name().to_string(),
    }
}

/// String-level entry point for untrusted labels.
///
/// Any label outside its taxonomy degrades to
/// [`InteractionResult::fallback`], never an error. Callers that need
/// to distinguish valid computation from fallback should check
/// [`is_valid_emotion`](crate::is_valid_emotion) /
/// [`is_valid_color`](crate::is_valid_color) first.
pub fn calculate_interaction_str(
    user_emotion: &str,
    user_color: &str,
    post_emotion: &str,
    post_color: &str,
) -> InteractionResult {
    let (ue, pe) = (Emotion::from_name(user_emotion), Emotion::from_name(post_emotion));
    let (Some(ue), Some(pe)) = (ue, pe) else {
        tracing::warn!(user_emotion, post_emotion, "invalid emotion label, using fallback result");
        return InteractionResult::fallback();
    };

    let (uc, pc) = (Color::from_name(user_color), Color::from_name(post_color));
    let (Some(uc), Some(pc)) = (uc, pc) else {
        tracing::warn!(user_color, post_color, "invalid color label, using fallback result");
        return InteractionResult::fallback();
    };

    calculate_interaction(ue, uc, pe, pc)
}

/// Evaluate many independent interactions.
///
/// Output order matches input order; each element equals a direct
/// [`calculate_interaction`] call. Items are evaluated in parallel;
/// the engine is pure, so fan-out needs no coordination.
pub fn calculate_interaction_batch(interactions: &[Interaction]) -> Vec<InteractionResult> {
    interactions
        .par_iter()
        .map(|i| calculate_interaction(i.user_emotion, i.user_color, i.post_emotion, i.post_color))
        .collect()
}

/// Round to two decimal places, matching the stored precision of
/// intensity and confidence.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_emotion_reinforces() {
        let r = calculate_interaction(Emotion::Joy, Color::Yellow, Emotion::Joy, Color::Yellow);
        assert_eq!(r.relation, EmotionRelation::Same);
        assert_eq!(r.emotion, Emotion::Joy);
        assert_eq!(r.harmony, ColorHarmony::Same);
        assert_eq!(r.color, Color::Yellow);
        // 1.5 × 1.2 × base(Joy)=1.0
        assert_eq!(r.intensity, 1.8);
        assert_eq!(r.confidence, 1.0);
    }

    #[test]
    fn test_opposite_emotion_transforms_to_complementary() {
        let r = calculate_interaction(Emotion::Joy, Color::Yellow, Emotion::Sad, Color::Blue);
        assert_eq!(r.relation, EmotionRelation::Opposite);
        assert_eq!(r.emotion, Emotion::Trust, "Joy's complementary");
        assert_eq!(r.harmony, ColorHarmony::Complementary);
        // yellow's triadic [red, blue]: blue is distance 0 from the post color
        assert_eq!(r.color, Color::Blue);
        // 0.8 × 1.1 × base(Trust)=0.9
        assert_eq!(r.intensity, 0.79);
        assert_eq!(r.confidence, 0.9);
    }

    #[test]
    fn test_adjacent_emotion_amplifies() {
        let r = calculate_interaction(Emotion::Joy, Color::Yellow, Emotion::Trust, Color::Lime);
        assert_eq!(r.relation, EmotionRelation::Adjacent);
        assert_eq!(r.emotion, Emotion::Trust);
        assert_eq!(r.harmony, ColorHarmony::Analogous);
        assert_eq!(r.color, Color::Lime, "analogous keeps the post color");
        // 1.3 × 1.0 × base(Trust)=0.9
        assert_eq!(r.intensity, 1.17);
        assert!(r.intensity > 1.0);
    }

    #[test]
    fn test_neutral_relation_dampens() {
        // Joy vs Feared is neutral; green vs yellow is neutral
        let r = calculate_interaction(Emotion::Joy, Color::Green, Emotion::Feared, Color::Yellow);
        assert_eq!(r.relation, EmotionRelation::Neutral);
        assert_eq!(r.emotion, Emotion::Feared);
        assert_eq!(r.harmony, ColorHarmony::Neutral);
        // neutral harmony blends: green (2) and yellow (0) → lime (1)
        assert_eq!(r.color, Color::Lime);
        // 0.9 × 0.9 × base(Feared)=0.8
        assert_eq!(r.intensity, 0.65);
        assert_eq!(r.confidence, 0.7);
    }

    #[test]
    fn test_triadic_harmony_blends_colors() {
        // Joy vs Joy (same); yellow vs red: red is in yellow's triadic set
        let r = calculate_interaction(Emotion::Joy, Color::Yellow, Emotion::Joy, Color::Red);
        assert_eq!(r.harmony, ColorHarmony::Triadic);
        // yellow (0) and red (6): |0-6| = 6 > 4 → midpoint 3 rotates to 7
        assert_eq!(r.color, Color::Orange);
        // 1.5 × 0.95 × base(Joy)=1.0; the product sits just under 1.425
        assert_eq!(r.intensity, 1.42);
    }

    #[test]
    fn test_success_path_echoes_post_labels() {
        let r = calculate_interaction(Emotion::Joy, Color::Yellow, Emotion::Sad, Color::Blue);
        assert_eq!(r.original_emotion, "Sad");
        assert_eq!(r.original_color, "blue");
    }

    #[test]
    fn test_invalid_labels_degrade_to_fallback() {
        for (ue, uc, pe, pc) in [
            ("Invalid", "yellow", "Sad", "blue"),
            ("Joy", "yellow", "Invalid", "blue"),
            ("Joy", "invalid", "Sad", "blue"),
            ("Joy", "yellow", "Sad", "invalid"),
            ("", "", "", ""),
        ] {
            let r = calculate_interaction_str(ue, uc, pe, pc);
            assert_eq!(r, InteractionResult::fallback(), "inputs ({ue}, {uc}, {pe}, {pc})");
        }
    }

    #[test]
    fn test_fallback_is_the_fixed_result() {
        let r = InteractionResult::fallback();
        assert_eq!(r.emotion, Emotion::Disgust);
        assert_eq!(r.color, Color::Orange);
        assert_eq!(r.intensity, 1.0);
        assert_eq!(r.confidence, 0.5);
        assert_eq!(r.relation, EmotionRelation::Neutral);
        assert_eq!(r.harmony, ColorHarmony::Neutral);
        assert_eq!(r.original_emotion, "Unknown");
        assert_eq!(r.original_color, "unknown");
    }

    #[test]
    fn test_str_entry_matches_typed_entry_on_valid_labels() {
        let typed = calculate_interaction(Emotion::Angry, Color::Red, Emotion::Trust, Color::Lime);
        let parsed = calculate_interaction_str("Angry", "red", "Trust", "lime");
        assert_eq!(typed, parsed);
    }

    #[test]
    fn test_batch_preserves_order_and_matches_direct_calls() {
        let inputs = vec![
            Interaction {
                user_emotion: Emotion::Joy,
                user_color: Color::Yellow,
                post_emotion: Emotion::Sad,
                post_color: Color::Blue,
            },
            Interaction {
                user_emotion: Emotion::Angry,
                user_color: Color::Red,
                post_emotion: Emotion::Trust,
                post_color: Color::Lime,
            },
            Interaction {
                user_emotion: Emotion::Joy,
                user_color: Color::Yellow,
                post_emotion: Emotion::Joy,
                post_color: Color::Yellow,
            },
        ];
        let results = calculate_interaction_batch(&inputs);
        assert_eq!(results.len(), inputs.len());
        for (input, result) in inputs.iter().zip(&results) {
            let direct = calculate_interaction(
                input.user_emotion,
                input.user_color,
                input.post_emotion,
                input.post_color,
            );
            assert_eq!(*result, direct);
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.176), 1.18);
        assert_eq!(round2(0.5), 0.5);
    }
}
