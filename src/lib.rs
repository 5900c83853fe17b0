//! # ecbridge
//!
//! Emotion-color interaction engine: the deterministic core of a social
//! network where users and posts carry one of 8 discrete emotions and
//! one of 8 discrete colors. Everything here is pure computation over
//! two fixed circular taxonomies; persistence, transport, and UI live
//! with the caller.
//!
//! ## Quick Start
//! ```rust,ignore
//! use ecbridge::{calculate_interaction, calculate_feed_preferences, Color, Emotion};
//!
//! // A joyful user comments on a sad post
//! let result = calculate_interaction(Emotion::Joy, Color::Yellow, Emotion::Sad, Color::Blue);
//! assert_eq!(result.emotion, Emotion::Trust); // opposite transforms to complementary
//!
//! // Rank the user's feed
//! let prefs = calculate_feed_preferences(Emotion::Joy, Color::Yellow);
//! assert_eq!(prefs.ranked_emotions[0], Emotion::Joy);
//!
//! // Untrusted labels degrade to fixed fallbacks, never errors
//! let result = ecbridge::calculate_interaction_str("???", "yellow", "Sad", "blue");
//! assert_eq!(result.emotion, Emotion::Disgust);
//! ```
//!
//! ## Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         ECBRIDGE                             │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  emotion   → 8-member wheel, relationship classifier, blend  │
//! │  color     → 8-member wheel, harmony classifier, blend,      │
//! │              triadic selection, warmth                       │
//! │  engine    → interaction rules → InteractionResult           │
//! │  feed      → preference weights → ranked taxonomies          │
//! │  analytics → summary statistics over result sets             │
//! │                                                              │
//! │  Stateless: two const tables, no locks, no I/O, no panics    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is total over untrusted input: the `*_str` entry points
//! substitute a fixed fallback ([`InteractionResult::fallback`]) or a
//! balanced ranking ([`FeedPreferences::balanced`]) for labels outside
//! the taxonomies. The typed API cannot be called with invalid state at
//! all. Every function is referentially transparent and safe to call
//! from any number of threads concurrently.

pub mod analytics;
pub mod color;
pub mod emotion;
pub mod engine;
pub mod feed;
pub(crate) mod wheel;

// === Re-exports for convenience ===

// Emotion wheel
pub use crate::emotion::{
    blend_emotions, emotion_relationship, is_valid_emotion, list_emotions, Emotion,
    EmotionProfile, EmotionRelation, EMOTION_WHEEL,
};

// Color wheel
pub use crate::color::{
    blend_colors, closest_triadic, color_harmony, is_valid_color, list_colors,
    temperature_difference, Color, ColorHarmony, ColorProfile, COLOR_WHEEL,
};

// Interaction engine
pub use crate::engine::{
    calculate_interaction, calculate_interaction_batch, calculate_interaction_str, Interaction,
    InteractionResult, MAX_INTENSITY,
};

// Feed ranking
pub use crate::feed::{
    calculate_feed_preferences, calculate_feed_preferences_str, FeedPreferences,
};

// Analytics
pub use crate::analytics::{summarize, InteractionSummary};

// === Error types ===

/// Crate-level error type.
///
/// Produced only by the opt-in [`FromStr`](std::str::FromStr)
/// conversions; the engine entry points themselves are total and never
/// return an error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unknown emotion label: {0:?}")]
    UnknownEmotion(String),

    #[error("unknown color label: {0:?}")]
    UnknownColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// === Constants ===

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Members per wheel. Both taxonomies are rings of this size.
pub const WHEEL_SIZE: usize = 8;
