//! Color Wheel — 8 discrete colors with harmony rules.
//!
//! Color-theory taxonomy, independent from the emotion wheel. Every
//! color has a complementary (4 positions away), two analogous
//! neighbors, a triadic set, a warmth scalar, and a base intensity:
//!
//! ```text
//! ┌────────┬──────────────┬───────────────┬──────────────┬────────┬───────┐
//! │ Color  │ Complementary│ Analogous     │ Triadic      │ Warmth │ Base  │
//! ├────────┼──────────────┼───────────────┼──────────────┼────────┼───────┤
//! │ yellow │ blue         │ lime, orange  │ red, blue    │ 1.0    │ 0.9   │
//! │ lime   │ pink         │ yellow, green │ pink, blue   │ 0.7    │ 0.8   │
//! │ green  │ red          │ lime, aqua    │ orange, pink │ 0.5    │ 0.7   │
//! │ aqua   │ orange       │ green, blue   │ yellow, red  │ 0.3    │ 0.8   │
//! │ blue   │ yellow       │ aqua, pink    │ red, lime    │ 0.2    │ 0.9   │
//! │ pink   │ lime         │ blue, red     │ yellow, green│ 0.8    │ 0.7   │
//! │ red    │ green        │ pink, orange  │ blue, yellow │ 1.0    │ 1.0   │
//! │ orange │ aqua         │ red, yellow   │ lime, pink   │ 0.9    │ 0.9   │
//! └────────┴──────────────┴───────────────┴──────────────┴────────┴───────┘
//! ```
//!
//! The triadic sets are table data, not derived from wheel geometry, and
//! are not symmetric between colors. A triadic set may contain the
//! color's own complementary (yellow's does); [`color_harmony`] resolves
//! such pairs as `Complementary` because that check runs first.

use serde::{Deserialize, Serialize};

use crate::wheel;
use crate::{Error, WHEEL_SIZE};

// =============================================================================
// THE WHEEL
// =============================================================================

/// One of the 8 discrete colors, in fixed circular order.
///
/// The declaration order IS the wheel order (index 0..=7). Canonical
/// labels are lowercase (`"yellow"`), exact-match and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Lime,
    Green,
    Aqua,
    Blue,
    Pink,
    Red,
    Orange,
}

/// The color wheel in taxonomy order.
pub const COLOR_WHEEL: [Color; WHEEL_SIZE] = [
    Color::Yellow,
    Color::Lime,
    Color::Green,
    Color::Aqua,
    Color::Blue,
    Color::Pink,
    Color::Red,
    Color::Orange,
];

/// Static harmony profile of one color.
#[derive(Debug, Clone, Copy)]
pub struct ColorProfile {
    /// The color 4 positions away on the wheel. Pairing is symmetric.
    pub complementary: Color,
    /// The two wheel neighbors.
    pub analogous: [Color; 2],
    /// Balanced partner set, 2-3 members. Table data, not symmetric.
    pub triadic: &'static [Color],
    /// Warm (1.0) to cool (0.0).
    pub warmth: f64,
    /// Scales nothing directly; exposed for callers that weight by color.
    pub base_intensity: f64,
}

/// Harmony profiles, indexed by wheel position.
const PROFILES: [ColorProfile; WHEEL_SIZE] = [
    // yellow
    ColorProfile {
        complementary: Color::Blue,
        analogous: [Color::Lime, Color::Orange],
        triadic: &[Color::Red, Color::Blue],
        warmth: 1.0,
        base_intensity: 0.9,
    },
    // lime
    ColorProfile {
        complementary: Color::Pink,
        analogous: [Color::Yellow, Color::Green],
        triadic: &[Color::Pink, Color::Blue],
        warmth: 0.7,
        base_intensity: 0.8,
    },
    // green
    ColorProfile {
        complementary: Color::Red,
        analogous: [Color::Lime, Color::Aqua],
        triadic: &[Color::Orange, Color::Pink],
        warmth: 0.5,
        base_intensity: 0.7,
    },
    // aqua
    ColorProfile {
        complementary: Color::Orange,
        analogous: [Color::Green, Color::Blue],
        triadic: &[Color::Yellow, Color::Red],
        warmth: 0.3,
        base_intensity: 0.8,
    },
    // blue
    ColorProfile {
        complementary: Color::Yellow,
        analogous: [Color::Aqua, Color::Pink],
        triadic: &[Color::Red, Color::Lime],
        warmth: 0.2,
        base_intensity: 0.9,
    },
    // pink
    ColorProfile {
        complementary: Color::Lime,
        analogous: [Color::Blue, Color::Red],
        triadic: &[Color::Yellow, Color::Green],
        warmth: 0.8,
        base_intensity: 0.7,
    },
    // red
    ColorProfile {
        complementary: Color::Green,
        analogous: [Color::Pink, Color::Orange],
        triadic: &[Color::Blue, Color::Yellow],
        warmth: 1.0,
        base_intensity: 1.0,
    },
    // orange
    ColorProfile {
        complementary: Color::Aqua,
        analogous: [Color::Red, Color::Yellow],
        triadic: &[Color::Lime, Color::Pink],
        warmth: 0.9,
        base_intensity: 0.9,
    },
];

impl Color {
    /// Wheel position, 0..=7.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Static harmony profile for this color.
    #[inline]
    pub fn profile(self) -> &'static ColorProfile {
        &PROFILES[self.index()]
    }

    /// The color 4 positions away on the wheel.
    #[inline]
    pub fn complementary(self) -> Color {
        self.profile().complementary
    }

    /// The two wheel neighbors.
    #[inline]
    pub fn analogous(self) -> [Color; 2] {
        self.profile().analogous
    }

    /// Balanced partner set, 2-3 members.
    #[inline]
    pub fn triadic(self) -> &'static [Color] {
        self.profile().triadic
    }

    /// Warm (1.0) to cool (0.0).
    #[inline]
    pub fn warmth(self) -> f64 {
        self.profile().warmth
    }

    /// Base intensity scalar.
    #[inline]
    pub fn base_intensity(self) -> f64 {
        self.profile().base_intensity
    }

    /// Canonical lowercase label, e.g. `"yellow"`.
    pub fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Lime => "lime",
            Color::Green => "green",
            Color::Aqua => "aqua",
            Color::Blue => "blue",
            Color::Pink => "pink",
            Color::Red => "red",
            Color::Orange => "orange",
        }
    }

    /// Parse a canonical label. Exact-match, case-sensitive.
    pub fn from_name(name: &str) -> Option<Color> {
        COLOR_WHEEL.iter().copied().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_name(s).ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}

// =============================================================================
// HARMONY CLASSIFIER
// =============================================================================

/// How two colors relate on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorHarmony {
    Same,
    Complementary,
    Analogous,
    Triadic,
    Neutral,
}

impl ColorHarmony {
    /// Lowercase label as stored alongside interaction records.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorHarmony::Same => "same",
            ColorHarmony::Complementary => "complementary",
            ColorHarmony::Analogous => "analogous",
            ColorHarmony::Triadic => "triadic",
            ColorHarmony::Neutral => "neutral",
        }
    }
}

/// Classify the harmony between two colors.
///
/// Ordered cascade: same wins over complementary wins over analogous
/// wins over triadic wins over neutral. The order is the contract: a
/// triadic set may contain the complementary color and the earlier
/// check decides.
pub fn color_harmony(c1: Color, c2: Color) -> ColorHarmony {
    let profile = c1.profile();
    if c1 == c2 {
        ColorHarmony::Same
    } else if profile.complementary == c2 {
        ColorHarmony::Complementary
    } else if profile.analogous.contains(&c2) {
        ColorHarmony::Analogous
    } else if profile.triadic.contains(&c2) {
        ColorHarmony::Triadic
    } else {
        ColorHarmony::Neutral
    }
}

// =============================================================================
// BLENDING & SELECTION
// =============================================================================

/// Blend two colors: the wheel member at their wrap-corrected floor
/// midpoint. Blending a color with itself returns itself.
pub fn blend_colors(a: Color, b: Color) -> Color {
    COLOR_WHEEL[wheel::midpoint(a.index(), b.index())]
}

/// Pick the candidate closest to `target` by circular wheel distance.
///
/// Strict less-than comparison: ties resolve to the first candidate in
/// iteration order. `None` only for an empty slice.
pub fn closest_triadic(candidates: &[Color], target: Color) -> Option<Color> {
    let mut closest = None;
    let mut min_distance = usize::MAX;
    for &candidate in candidates {
        let d = wheel::distance(candidate.index(), target.index());
        if d < min_distance {
            min_distance = d;
            closest = Some(candidate);
        }
    }
    closest
}

/// Absolute warmth difference between two colors, in [0, 1].
pub fn temperature_difference(c1: Color, c2: Color) -> f64 {
    (c1.warmth() - c2.warmth()).abs()
}

// =============================================================================
// INTROSPECTION HELPERS
// =============================================================================

/// All 8 colors in taxonomy order.
pub fn list_colors() -> &'static [Color; WHEEL_SIZE] {
    &COLOR_WHEEL
}

/// Is `name` a canonical color label? Exact-match, case-sensitive.
pub fn is_valid_color(name: &str) -> bool {
    Color::from_name(name).is_some()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complementary_four_apart_and_symmetric() {
        for &c in &COLOR_WHEEL {
            let o = c.complementary();
            let d = c.index().abs_diff(o.index());
            assert_eq!(d.min(WHEEL_SIZE - d), 4, "{c}/{o} not 4 apart");
            assert_eq!(o.complementary(), c, "complementary not symmetric for {c}");
        }
    }

    #[test]
    fn test_analogous_are_wheel_neighbors() {
        for &c in &COLOR_WHEEL {
            for n in c.analogous() {
                let d = c.index().abs_diff(n.index());
                assert_eq!(d.min(WHEEL_SIZE - d), 1, "{c} analogous {n} not a neighbor");
            }
        }
    }

    #[test]
    fn test_triadic_sets_have_two_to_three_members() {
        for &c in &COLOR_WHEEL {
            let t = c.triadic();
            assert!((2..=3).contains(&t.len()), "{c} triadic set size {}", t.len());
            for member in t {
                assert_ne!(*member, c, "{c} triadic set contains itself");
            }
        }
    }

    #[test]
    fn test_warmth_in_unit_range() {
        for &c in &COLOR_WHEEL {
            assert!((0.0..=1.0).contains(&c.warmth()));
            assert!((0.0..=1.0).contains(&c.base_intensity()));
        }
    }

    #[test]
    fn test_harmony_cascade_precedence() {
        // yellow's triadic set contains blue, its complementary; the
        // complementary check runs first and wins.
        assert_eq!(
            color_harmony(Color::Yellow, Color::Blue),
            ColorHarmony::Complementary
        );
        assert_eq!(color_harmony(Color::Yellow, Color::Yellow), ColorHarmony::Same);
        assert_eq!(color_harmony(Color::Yellow, Color::Lime), ColorHarmony::Analogous);
        assert_eq!(color_harmony(Color::Yellow, Color::Red), ColorHarmony::Triadic);
        // yellow vs green: two steps away, in no category
        assert_eq!(color_harmony(Color::Yellow, Color::Green), ColorHarmony::Neutral);
    }

    #[test]
    fn test_harmony_is_not_symmetric_for_triadic() {
        // blue is in yellow's triadic set, but yellow is in blue's
        // complementary slot; classification depends on the first argument
        assert_eq!(color_harmony(Color::Blue, Color::Yellow), ColorHarmony::Complementary);
        assert_eq!(color_harmony(Color::Aqua, Color::Yellow), ColorHarmony::Triadic);
        assert_eq!(color_harmony(Color::Yellow, Color::Aqua), ColorHarmony::Neutral);
    }

    #[test]
    fn test_blend_self_is_identity() {
        for &c in &COLOR_WHEEL {
            assert_eq!(blend_colors(c, c), c);
        }
    }

    #[test]
    fn test_blend_wraps_across_zero() {
        // yellow (0) and orange (7): |0-7| = 7 > 4, corrected midpoint 7
        assert_eq!(blend_colors(Color::Yellow, Color::Orange), Color::Orange);
        // yellow (0) and blue (4): plain floor midpoint
        assert_eq!(blend_colors(Color::Yellow, Color::Blue), Color::Green);
    }

    #[test]
    fn test_closest_triadic_prefers_shorter_arc() {
        // yellow's triadic [red, blue] against post color blue: blue is
        // distance 0 and wins
        assert_eq!(
            closest_triadic(Color::Yellow.triadic(), Color::Blue),
            Some(Color::Blue)
        );
        // against aqua (3): red (6) distance 3, blue (4) distance 1
        assert_eq!(
            closest_triadic(Color::Yellow.triadic(), Color::Aqua),
            Some(Color::Blue)
        );
    }

    #[test]
    fn test_closest_triadic_tie_takes_first_candidate() {
        // red (6) and blue (4) are both distance 1 from pink (5); red is
        // listed first in yellow's triadic set
        assert_eq!(
            closest_triadic(Color::Yellow.triadic(), Color::Pink),
            Some(Color::Red)
        );
        assert_eq!(closest_triadic(&[], Color::Pink), None);
    }

    #[test]
    fn test_temperature_difference() {
        assert!((temperature_difference(Color::Yellow, Color::Blue) - 0.8).abs() < 1e-6);
        assert_eq!(temperature_difference(Color::Red, Color::Yellow), 0.0);
        for &a in &COLOR_WHEEL {
            for &b in &COLOR_WHEEL {
                let d = temperature_difference(a, b);
                assert!((0.0..=1.0).contains(&d));
                assert_eq!(d, temperature_difference(b, a));
            }
        }
    }

    #[test]
    fn test_names_round_trip() {
        for &c in &COLOR_WHEEL {
            assert_eq!(Color::from_name(c.name()), Some(c));
            assert!(is_valid_color(c.name()));
        }
        assert!(!is_valid_color("Yellow"), "labels are case-sensitive");
        assert!(Color::from_name("purple").is_none());
    }

    #[test]
    fn test_from_str_reports_unknown_label() {
        let err = "magenta".parse::<Color>().unwrap_err();
        assert!(matches!(err, Error::UnknownColor(ref s) if s == "magenta"));
    }
}
