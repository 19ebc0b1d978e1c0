// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Height of the status bar line used by
/// [`CornerAnimationPolicy::AlwaysShowBelowStatusBar`] and
/// [`FullExpansionBehaviour::DoesNotCoverStatusBar`].
pub const STATUS_BAR_HEIGHT: f64 = 20.0;

/// How the drawer's corner radius follows its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CornerAnimationPolicy {
    /// Corners stay at the maximum radius regardless of position.
    ///
    /// Corner radius writes under this policy are applied without implicit
    /// animation.
    None,
    /// Radius follows the interpolation fraction, peaking at the partial
    /// offset and fading to zero at both ends.
    #[default]
    MaximumAtPartialY,
    /// Radius ramps from zero at the top of the container to the maximum once
    /// the drawer's top edge is below the status bar line.
    AlwaysShowBelowStatusBar,
}

/// Where the drawer's top edge sits when fully expanded.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum FullExpansionBehaviour {
    /// Top edge at the top of the container.
    #[default]
    CoversFullScreen,
    /// Top edge just below the status bar.
    DoesNotCoverStatusBar,
    /// Top edge `gap` below the top of the container.
    LeavesCustomGap {
        /// Distance from the top of the container. Negative gaps count as zero.
        gap: f64,
    },
}

impl FullExpansionBehaviour {
    /// Returns the full-expansion offset for this behaviour.
    ///
    /// The result is never negative. It is not clamped to any container; see
    /// [`DrawerGeometry::new`](crate::DrawerGeometry::new) for that.
    #[must_use]
    pub fn drawer_full_y(self, status_bar_height: f64) -> f64 {
        match self {
            Self::CoversFullScreen => 0.0,
            Self::DoesNotCoverStatusBar => status_bar_height.max(0.0),
            Self::LeavesCustomGap { gap } => gap.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FullExpansionBehaviour, STATUS_BAR_HEIGHT};

    #[test]
    fn full_y_per_behaviour() {
        assert_eq!(
            FullExpansionBehaviour::CoversFullScreen.drawer_full_y(STATUS_BAR_HEIGHT),
            0.0
        );
        assert_eq!(
            FullExpansionBehaviour::DoesNotCoverStatusBar.drawer_full_y(STATUS_BAR_HEIGHT),
            20.0
        );
        assert_eq!(
            FullExpansionBehaviour::LeavesCustomGap { gap: 64.0 }.drawer_full_y(STATUS_BAR_HEIGHT),
            64.0
        );
    }

    #[test]
    fn negative_gaps_count_as_zero() {
        assert_eq!(
            FullExpansionBehaviour::LeavesCustomGap { gap: -5.0 }.drawer_full_y(STATUS_BAR_HEIGHT),
            0.0
        );
        assert_eq!(
            FullExpansionBehaviour::DoesNotCoverStatusBar.drawer_full_y(-1.0),
            0.0
        );
    }
}
