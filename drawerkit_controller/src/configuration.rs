// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use drawerkit_geometry::{
    CornerAnimationPolicy, DrawerGeometry, FullExpansionBehaviour, STATUS_BAR_HEIGHT,
};

/// Behavior and metrics of one drawer session.
///
/// Heights are requests: they are clamped into the container when a
/// [`DrawerGeometry`] is resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfiguration {
    /// Where the top edge sits when fully expanded.
    pub full_expansion_behaviour: FullExpansionBehaviour,
    /// Requested visible height when collapsed.
    pub collapsed_height: f64,
    /// Requested visible height when partially expanded.
    ///
    /// `None` disables the partially expanded state.
    pub partial_height: Option<f64>,
    /// Whether the partially expanded state is reachable.
    pub supports_partial_expansion: bool,
    /// Distance from the partial offset up to the upper mark.
    pub upper_mark_gap: f64,
    /// Distance from the partial offset down to the lower mark.
    pub lower_mark_gap: f64,
    /// How the corner radius follows the drawer's position.
    pub corner_animation_policy: CornerAnimationPolicy,
    /// Largest corner radius the drawer may use.
    pub maximum_corner_radius: f64,
    /// Status bar line used by the full-expansion behaviour and the
    /// corner policy.
    pub status_bar_height: f64,
    /// Whether [`DrawerController::debug_marks`](crate::DrawerController::debug_marks)
    /// reports overlay strips.
    pub debug_marks: bool,
}

impl Default for DrawerConfiguration {
    fn default() -> Self {
        Self {
            full_expansion_behaviour: FullExpansionBehaviour::CoversFullScreen,
            collapsed_height: 0.0,
            partial_height: None,
            supports_partial_expansion: true,
            upper_mark_gap: 40.0,
            lower_mark_gap: 40.0,
            corner_animation_policy: CornerAnimationPolicy::MaximumAtPartialY,
            maximum_corner_radius: 15.0,
            status_bar_height: STATUS_BAR_HEIGHT,
            debug_marks: false,
        }
    }
}

impl DrawerConfiguration {
    /// Full-expansion offset before it is clamped to a container.
    #[must_use]
    pub fn drawer_full_y(&self) -> f64 {
        self.full_expansion_behaviour
            .drawer_full_y(self.status_bar_height)
    }

    /// Maximum corner radius, with negative values treated as zero.
    #[must_use]
    pub fn maximum_corner_radius(&self) -> f64 {
        self.maximum_corner_radius.max(0.0)
    }

    /// Resolves the geometry for a container of the given height.
    #[must_use]
    pub fn resolve(&self, container_height: f64) -> DrawerGeometry {
        DrawerGeometry::new(
            container_height,
            self.drawer_full_y(),
            self.collapsed_height,
            self.partial_height,
            self.supports_partial_expansion,
            self.upper_mark_gap,
            self.lower_mark_gap,
        )
    }
}

#[cfg(test)]
mod tests {
    use drawerkit_geometry::{DrawerState, FullExpansionBehaviour};

    use super::DrawerConfiguration;

    #[test]
    fn default_has_no_partial_state() {
        let geometry = DrawerConfiguration::default().resolve(600.0);
        assert!(!geometry.supports_partial());
        assert_eq!(geometry.collapsed_y(), 600.0);
        assert_eq!(geometry.state_for_y(0.0), DrawerState::FullyExpanded);
    }

    #[test]
    fn resolve_uses_full_expansion_behaviour() {
        let config = DrawerConfiguration {
            full_expansion_behaviour: FullExpansionBehaviour::DoesNotCoverStatusBar,
            collapsed_height: 80.0,
            partial_height: Some(300.0),
            ..DrawerConfiguration::default()
        };
        let geometry = config.resolve(600.0);
        assert_eq!(geometry.full_y(), 20.0);
        assert_eq!(geometry.partial_y(), 300.0);
        assert_eq!(geometry.collapsed_y(), 520.0);
    }

    #[test]
    fn negative_radius_reads_as_zero() {
        let config = DrawerConfiguration {
            maximum_corner_radius: -4.0,
            ..DrawerConfiguration::default()
        };
        assert_eq!(config.maximum_corner_radius(), 0.0);
    }
}
