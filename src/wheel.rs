//! Circular wheel arithmetic shared by both taxonomies.
//!
//! Both the emotion wheel and the color wheel are rings of
//! [`WHEEL_SIZE`](crate::WHEEL_SIZE) members addressed by index 0..=7.
//! Everything here operates on raw indices; the typed wrappers live in
//! [`emotion`](crate::emotion) and [`color`](crate::color).

use crate::WHEEL_SIZE;

/// Floor midpoint of two wheel indices, corrected for wrap-around.
///
/// `mid = floor((i + j) / 2)`; when the pair straddles the wrap point
/// (`|i - j| > WHEEL_SIZE / 2`) the midpoint is rotated half a turn so it
/// lands on the shorter arc. The floor keeps the result deterministic for
/// odd `i + j`; callers must not rely on `midpoint(i, j) == midpoint(j, i)`
/// being a stronger guarantee than this arithmetic provides.
pub(crate) fn midpoint(i: usize, j: usize) -> usize {
    let mut mid = (i + j) / 2;
    if i.abs_diff(j) > WHEEL_SIZE / 2 {
        mid = (mid + WHEEL_SIZE / 2) % WHEEL_SIZE;
    }
    mid
}

/// Circular distance between two wheel indices: the shorter arc.
pub(crate) fn distance(i: usize, j: usize) -> usize {
    let d = i.abs_diff(j);
    d.min(WHEEL_SIZE - d)
}
