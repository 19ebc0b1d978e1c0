// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free evaluator functions.
//!
//! Each function takes every input explicitly. [`DrawerGeometry`] wraps them
//! for callers that prefer to resolve their inputs once.
//!
//! [`DrawerGeometry`]: crate::DrawerGeometry

use crate::policy::CornerAnimationPolicy;
use crate::state::DrawerState;

/// Clamps `value` into `[min, max]` without panicking.
///
/// Inverted bounds resolve to `max`, and a NaN `value` resolves to `min`.
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Clamps a requested collapsed height into `[0, container_height]`.
#[must_use]
pub fn height_for_collapsed(requested: f64, container_height: f64) -> f64 {
    clamp(requested, 0.0, container_height.max(0.0))
}

/// Clamps a requested partially expanded height into `[0, container_height]`.
#[must_use]
pub fn height_for_partial(requested: f64, container_height: f64) -> f64 {
    clamp(requested, 0.0, container_height.max(0.0))
}

/// Returns the Y of the drawer's top edge when collapsed.
#[must_use]
pub fn y_for_collapsed(collapsed_height: f64, container_height: f64) -> f64 {
    container_height - collapsed_height
}

/// Returns the Y of the drawer's top edge when partially expanded.
#[must_use]
pub fn y_for_partial(partial_height: f64, container_height: f64) -> f64 {
    container_height - partial_height
}

/// Maps a logical state to the Y of the drawer's top edge.
///
/// This is the inverse of [`state_for_y`] at the three canonical offsets.
#[must_use]
pub fn y_for_state(
    state: DrawerState,
    collapsed_height: f64,
    partial_height: f64,
    container_height: f64,
    full_y: f64,
) -> f64 {
    match state {
        DrawerState::FullyExpanded => full_y,
        DrawerState::PartiallyExpanded => y_for_partial(partial_height, container_height),
        DrawerState::Collapsed => y_for_collapsed(collapsed_height, container_height),
    }
}

/// Partial offset used as the anchor of both marks, kept inside
/// `[full_y, container_height]`.
fn mark_anchor(full_y: f64, partial_height: f64, container_height: f64) -> f64 {
    let partial_y = y_for_partial(
        height_for_partial(partial_height, container_height),
        container_height,
    );
    clamp(partial_y, full_y, container_height)
}

/// Boundary between the fully expanded and partially expanded zones.
///
/// The mark sits `upper_mark_gap` above the partial offset and never leaves
/// `[full_y, partial_y]`. Negative gaps count as zero.
#[must_use]
pub fn upper_mark_y(
    full_y: f64,
    partial_height: f64,
    container_height: f64,
    upper_mark_gap: f64,
) -> f64 {
    let anchor = mark_anchor(full_y, partial_height, container_height);
    clamp(anchor - upper_mark_gap.max(0.0), full_y, anchor)
}

/// Boundary between the partially expanded and collapsed zones.
///
/// The mark sits `lower_mark_gap` below the partial offset and never leaves
/// `[partial_y, container_height]`. Negative gaps count as zero.
#[must_use]
pub fn lower_mark_y(partial_height: f64, container_height: f64, lower_mark_gap: f64) -> f64 {
    let partial_y = y_for_partial(
        height_for_partial(partial_height, container_height),
        container_height,
    );
    clamp(
        partial_y + lower_mark_gap.max(0.0),
        partial_y,
        container_height,
    )
}

/// Classifies an arbitrary Y into the nearest logical state.
///
/// The marks from [`upper_mark_y`] and [`lower_mark_y`] are the decision
/// boundaries:
/// - `y <= upper_mark_y` is [`DrawerState::FullyExpanded`];
/// - otherwise, when partial expansion is supported, `y <= lower_mark_y` is
///   [`DrawerState::PartiallyExpanded`];
/// - everything else is [`DrawerState::Collapsed`].
///
/// Two tie-breaks keep the canonical offsets stable: the partial offset itself
/// classifies as partially expanded even when a zero upper gap puts the upper
/// mark on it, and the collapsed offset always classifies as collapsed even
/// when a wide lower gap reaches past it.
///
/// Without partial expansion the lower mark is ignored and the upper mark is
/// the only threshold. Classification is monotonic: a larger `y` is never
/// less collapsed.
#[must_use]
pub fn state_for_y(
    y: f64,
    full_y: f64,
    collapsed_height: f64,
    partial_height: f64,
    container_height: f64,
    upper_mark_gap: f64,
    lower_mark_gap: f64,
    supports_partial: bool,
) -> DrawerState {
    let upper = upper_mark_y(full_y, partial_height, container_height, upper_mark_gap);
    let anchor = mark_anchor(full_y, partial_height, container_height);
    let on_partial = supports_partial && y >= anchor && y > full_y;
    if y <= upper && !on_partial {
        return DrawerState::FullyExpanded;
    }

    if supports_partial {
        let lower = lower_mark_y(partial_height, container_height, lower_mark_gap);
        let collapsed_y = y_for_collapsed(
            height_for_collapsed(collapsed_height, container_height),
            container_height,
        );
        if y <= lower && y < collapsed_y {
            return DrawerState::PartiallyExpanded;
        }
    }

    DrawerState::Collapsed
}

/// Piecewise-linear "triangular" fraction in `[0, 1]` driven by the drawer's Y.
///
/// With partial expansion the fraction rises from `0` at `full_y` to `1` at
/// `partial_y`, then falls back to `0` at `container_height`. Without it the
/// fraction falls linearly from `1` at `full_y` to `0` at `container_height`.
///
/// Returns `0` when any two of `full_y`, `partial_y` and `container_height`
/// coincide. `y` is clamped into `[full_y, container_height]` first.
#[must_use]
pub fn interpolation_fraction(
    y: f64,
    full_y: f64,
    partial_y: f64,
    container_height: f64,
    supports_partial: bool,
) -> f64 {
    if partial_y == full_y || partial_y == container_height || full_y == container_height {
        return 0.0;
    }

    let y = clamp(y, full_y, container_height);
    let fraction = if supports_partial {
        if y < partial_y {
            (y - full_y) / (partial_y - full_y)
        } else {
            1.0 - (y - partial_y) / (container_height - partial_y)
        }
    } else {
        1.0 - (y - full_y) / (container_height - full_y)
    };

    // Also maps NaN to zero.
    clamp(fraction, 0.0, 1.0)
}

/// Corner radius for a drawer whose top edge is at `y`.
///
/// `fraction` is the [`interpolation_fraction`] at the same `y`; it is only
/// consulted by [`CornerAnimationPolicy::MaximumAtPartialY`]. The result is in
/// `[0, max_radius]`, with negative radii treated as zero.
///
/// Under [`CornerAnimationPolicy::AlwaysShowBelowStatusBar`], a non-positive
/// `status_bar_height` means every position is already below the status bar.
#[must_use]
pub fn corner_radius(
    policy: CornerAnimationPolicy,
    max_radius: f64,
    status_bar_height: f64,
    y: f64,
    fraction: f64,
) -> f64 {
    let max_radius = max_radius.max(0.0);
    match policy {
        CornerAnimationPolicy::None => max_radius,
        CornerAnimationPolicy::MaximumAtPartialY => max_radius * clamp(fraction, 0.0, 1.0),
        CornerAnimationPolicy::AlwaysShowBelowStatusBar => {
            if status_bar_height <= 0.0 {
                return max_radius;
            }
            max_radius * clamp(y / status_bar_height, 0.0, 1.0)
        }
    }
}
