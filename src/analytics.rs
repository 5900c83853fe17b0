//! Interaction Analytics — summary statistics over computed results.
//!
//! Aggregates a slice of [`InteractionResult`] records into averages and
//! per-taxonomy distributions. Where the records come from (a log table,
//! a replay, a simulation) is the caller's business; the aggregation
//! itself is pure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::emotion::Emotion;
use crate::engine::{round2, InteractionResult};

/// Summary of a set of interaction results.
///
/// Distributions only carry members that actually occur. Ties for the
/// most-frequent member resolve to the earliest member in taxonomy
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSummary {
    pub total: usize,
    /// Mean result intensity, rounded to 2 decimals. 0.0 for an empty set.
    pub avg_intensity: f64,
    /// Mean confidence, rounded to 2 decimals. 0.0 for an empty set.
    pub avg_confidence: f64,
    pub most_frequent_emotion: Option<Emotion>,
    pub most_frequent_color: Option<Color>,
    pub emotion_distribution: BTreeMap<Emotion, u32>,
    pub color_distribution: BTreeMap<Color, u32>,
}

/// Aggregate interaction results into a summary.
pub fn summarize(results: &[InteractionResult]) -> InteractionSummary {
    let mut emotion_distribution: BTreeMap<Emotion, u32> = BTreeMap::new();
    let mut color_distribution: BTreeMap<Color, u32> = BTreeMap::new();
    let mut intensity_sum = 0.0f64;
    let mut confidence_sum = 0.0f64;

    for result in results {
        *emotion_distribution.entry(result.emotion).or_insert(0) += 1;
        *color_distribution.entry(result.color).or_insert(0) += 1;
        intensity_sum += result.intensity;
        confidence_sum += result.confidence;
    }

    let total = results.len();
    let (avg_intensity, avg_confidence) = if total == 0 {
        (0.0, 0.0)
    } else {
        (
            round2(intensity_sum / total as f64),
            round2(confidence_sum / total as f64),
        )
    };

    InteractionSummary {
        total,
        avg_intensity,
        avg_confidence,
        most_frequent_emotion: most_frequent(&emotion_distribution),
        most_frequent_color: most_frequent(&color_distribution),
        emotion_distribution,
        color_distribution,
    }
}

/// Highest-count key; taxonomy order breaks ties because the map
/// iterates in wheel order and only a strictly greater count replaces
/// the current candidate.
fn most_frequent<T: Copy + Ord>(distribution: &BTreeMap<T, u32>) -> Option<T> {
    let mut best: Option<(T, u32)> = None;
    for (&member, &count) in distribution {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((member, count)),
        }
    }
    best.map(|(member, _)| member)
}

// =============================================================================
// TESTS
// =============================================================================
