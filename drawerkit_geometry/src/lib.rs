// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DrawerKit Geometry: pure evaluation of drawer offsets and states.
//!
//! A drawer is a panel that slides vertically over a container and settles at
//! one of three logical positions: collapsed, partially expanded, or fully
//! expanded. This crate turns a handful of numbers (container height, the
//! requested drawer heights, the hysteresis gaps) into concrete offsets and
//! back again. It focuses on:
//! - Clamping requested heights into the container.
//! - Mapping a [`DrawerState`] to the Y of the drawer's top edge, and
//!   classifying an arbitrary Y back into the nearest state.
//! - The piecewise-linear interpolation fraction that drives handle opacity
//!   and corner rounding while the drawer is dragged or animated.
//! - Corner radius selection under a [`CornerAnimationPolicy`].
//!
//! All coordinates share one vertical axis: `0` is the top of the container,
//! `container_height` is its bottom, and Y grows downward. A larger Y is a more
//! collapsed drawer.
//!
//! It does **not** own any view, gesture recognizer, or animation clock.
//! Every function is total and side-effect free; out-of-range input is
//! clamped rather than rejected. Callers are expected to:
//! - Resolve a [`DrawerGeometry`] from their current configuration and
//!   container size whenever they need to query it.
//! - Apply the returned offsets and radii to their own drawer surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use drawerkit_geometry::{DrawerGeometry, DrawerState};
//!
//! // 800pt tall container, drawer covers the full screen when expanded,
//! // 100pt visible when collapsed, 400pt when partially expanded.
//! let geometry = DrawerGeometry::new(800.0, 0.0, 100.0, Some(400.0), true, 20.0, 20.0);
//!
//! assert_eq!(geometry.collapsed_y(), 700.0);
//! assert_eq!(geometry.partial_y(), 400.0);
//!
//! assert_eq!(geometry.state_for_y(0.0), DrawerState::FullyExpanded);
//! assert_eq!(geometry.state_for_y(410.0), DrawerState::PartiallyExpanded);
//! assert_eq!(geometry.state_for_y(750.0), DrawerState::Collapsed);
//!
//! // Handle opacity peaks at the partial offset.
//! assert_eq!(geometry.interpolation_fraction(400.0), 1.0);
//! ```
//!
//! The free functions in this crate (for example [`state_for_y`] and
//! [`interpolation_fraction`]) take every input explicitly and can be used
//! without building a [`DrawerGeometry`].
//!
//! This crate is `no_std`.

#![no_std]

mod evaluator;
mod geometry;
mod handle;
mod policy;
mod state;

pub use evaluator::{
    corner_radius, height_for_collapsed, height_for_partial, interpolation_fraction,
    lower_mark_y, state_for_y, upper_mark_y, y_for_collapsed, y_for_partial, y_for_state,
};
pub use geometry::{DEBUG_MARK_THICKNESS, DebugMarks, DrawerGeometry};
pub use handle::{HandleCornerRadius, HandleViewConfiguration};
pub use policy::{CornerAnimationPolicy, FullExpansionBehaviour, STATUS_BAR_HEIGHT};
pub use state::DrawerState;
