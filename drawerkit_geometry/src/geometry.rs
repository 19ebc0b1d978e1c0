// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::evaluator::{self, clamp};
use crate::policy::CornerAnimationPolicy;
use crate::state::DrawerState;

/// Thickness of the strips returned by [`DrawerGeometry::debug_marks`].
pub const DEBUG_MARK_THICKNESS: f64 = 3.0;

/// Resolved drawer geometry for one container size.
///
/// `DrawerGeometry` is a plain snapshot: it is cheap to build, holds no
/// references, and every query is a pure function of the resolved values. It
/// is meant to be rebuilt whenever the configuration or container changes
/// rather than updated in place.
///
/// Resolution rules:
/// - A negative container height is treated as zero.
/// - The full-expansion offset is clamped into `[0, container_height]`.
/// - Requested heights are clamped into the container and then ordered so
///   that `collapsed_height <= partial_height <= container_height - full_y`.
///   The collapsed offset is therefore never above the partial offset, which
///   is never above the full-expansion offset.
/// - The partial height is kept even when partial expansion is unsupported;
///   it then only places the upper mark, the single threshold between the
///   two remaining states.
/// - Without a partial height, the partial offset resolves to the midpoint
///   between the full-expansion offset and the container bottom, and partial
///   expansion is unsupported.
/// - Negative mark gaps are treated as zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerGeometry {
    container_height: f64,
    full_y: f64,
    collapsed_height: f64,
    partial_height: f64,
    supports_partial: bool,
    upper_mark_gap: f64,
    lower_mark_gap: f64,
}

impl DrawerGeometry {
    /// Resolves a geometry snapshot from raw inputs.
    #[must_use]
    pub fn new(
        container_height: f64,
        full_y: f64,
        collapsed_height: f64,
        partial_height: Option<f64>,
        supports_partial: bool,
        upper_mark_gap: f64,
        lower_mark_gap: f64,
    ) -> Self {
        let container_height = container_height.max(0.0);
        let full_y = clamp(full_y, 0.0, container_height);
        let expandable = container_height - full_y;
        let collapsed_height =
            evaluator::height_for_collapsed(collapsed_height, container_height).min(expandable);
        let requested_partial = match partial_height {
            Some(requested) => evaluator::height_for_partial(requested, container_height),
            None => expandable / 2.0,
        };
        let resolved_partial = clamp(requested_partial, collapsed_height, expandable);
        Self {
            container_height,
            full_y,
            collapsed_height,
            partial_height: resolved_partial,
            supports_partial: supports_partial && partial_height.is_some(),
            upper_mark_gap: upper_mark_gap.max(0.0),
            lower_mark_gap: lower_mark_gap.max(0.0),
        }
    }

    /// Height of the container the drawer slides within.
    #[must_use]
    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    /// Y of the drawer's top edge when fully expanded.
    #[must_use]
    pub fn full_y(&self) -> f64 {
        self.full_y
    }

    /// Clamped visible height when collapsed.
    #[must_use]
    pub fn collapsed_height(&self) -> f64 {
        self.collapsed_height
    }

    /// Clamped visible height when partially expanded.
    #[must_use]
    pub fn partial_height(&self) -> f64 {
        self.partial_height
    }

    /// Whether the partially expanded state is reachable.
    ///
    /// This is `false` when no partial height was supplied, even if partial
    /// expansion was requested.
    #[must_use]
    pub fn supports_partial(&self) -> bool {
        self.supports_partial
    }

    /// Gap between the upper mark and the partial offset.
    #[must_use]
    pub fn upper_mark_gap(&self) -> f64 {
        self.upper_mark_gap
    }

    /// Gap between the partial offset and the lower mark.
    #[must_use]
    pub fn lower_mark_gap(&self) -> f64 {
        self.lower_mark_gap
    }

    /// Y of the drawer's top edge when collapsed.
    #[must_use]
    pub fn collapsed_y(&self) -> f64 {
        evaluator::y_for_collapsed(self.collapsed_height, self.container_height)
    }

    /// Y of the drawer's top edge when partially expanded.
    #[must_use]
    pub fn partial_y(&self) -> f64 {
        evaluator::y_for_partial(self.partial_height, self.container_height)
    }

    /// See [`upper_mark_y`](crate::upper_mark_y).
    #[must_use]
    pub fn upper_mark_y(&self) -> f64 {
        evaluator::upper_mark_y(
            self.full_y,
            self.partial_height,
            self.container_height,
            self.upper_mark_gap,
        )
    }

    /// See [`lower_mark_y`](crate::lower_mark_y).
    #[must_use]
    pub fn lower_mark_y(&self) -> f64 {
        evaluator::lower_mark_y(
            self.partial_height,
            self.container_height,
            self.lower_mark_gap,
        )
    }

    /// Clamps a live position into `[full_y, container_height]`.
    #[must_use]
    pub fn clamp_y(&self, y: f64) -> f64 {
        clamp(y, self.full_y, self.container_height)
    }

    /// Y of the drawer's top edge for `state`.
    #[must_use]
    pub fn y_for_state(&self, state: DrawerState) -> f64 {
        evaluator::y_for_state(
            state,
            self.collapsed_height,
            self.partial_height,
            self.container_height,
            self.full_y,
        )
    }

    /// Nearest logical state for a drawer whose top edge is at `y`.
    #[must_use]
    pub fn state_for_y(&self, y: f64) -> DrawerState {
        evaluator::state_for_y(
            y,
            self.full_y,
            self.collapsed_height,
            self.partial_height,
            self.container_height,
            self.upper_mark_gap,
            self.lower_mark_gap,
            self.supports_partial,
        )
    }

    /// Interpolation fraction for a drawer whose top edge is at `y`.
    #[must_use]
    pub fn interpolation_fraction(&self, y: f64) -> f64 {
        evaluator::interpolation_fraction(
            y,
            self.full_y,
            self.partial_y(),
            self.container_height,
            self.supports_partial,
        )
    }

    /// Interpolation fraction at the canonical offset of `state`.
    #[must_use]
    pub fn interpolation_fraction_at(&self, state: DrawerState) -> f64 {
        self.interpolation_fraction(self.y_for_state(state))
    }

    /// Corner radius at the canonical offset of `state`.
    #[must_use]
    pub fn corner_radius(
        &self,
        state: DrawerState,
        policy: CornerAnimationPolicy,
        max_radius: f64,
        status_bar_height: f64,
    ) -> f64 {
        let y = self.y_for_state(state);
        evaluator::corner_radius(
            policy,
            max_radius,
            status_bar_height,
            y,
            self.interpolation_fraction(y),
        )
    }

    /// Full-width strips marking the hysteresis boundaries, for debug overlays.
    ///
    /// A mark whose gap is zero is omitted; the partial offset is always
    /// marked.
    #[must_use]
    pub fn debug_marks(&self, width: f64) -> DebugMarks {
        let strip = |y: f64| Rect::new(0.0, y, width.max(0.0), y + DEBUG_MARK_THICKNESS);
        DebugMarks {
            upper: (self.upper_mark_gap > 0.0).then(|| strip(self.upper_mark_y())),
            lower: (self.lower_mark_gap > 0.0).then(|| strip(self.lower_mark_y())),
            partial: strip(self.partial_y()),
        }
    }
}

/// Debug overlay strips produced by [`DrawerGeometry::debug_marks`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugMarks {
    /// Strip at the upper mark, when the upper gap is positive.
    pub upper: Option<Rect>,
    /// Strip at the lower mark, when the lower gap is positive.
    pub lower: Option<Rect>,
    /// Strip at the partial offset.
    pub partial: Rect,
}
