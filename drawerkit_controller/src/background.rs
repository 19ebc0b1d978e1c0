// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hook for the background treatment behind a drawer.
//!
//! Dimming, blurring, or otherwise styling what lies behind the drawer is the
//! host's business. The controller only reports where the drawer is each time
//! its position is written, through a [`BackgroundHandler`].

/// Position report passed to a [`BackgroundHandler`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleContext {
    /// Applied (clamped) Y of the drawer's top edge.
    pub current_y: f64,
    /// Height of the container.
    pub container_height: f64,
}

impl HandleContext {
    /// Fraction of the container covered by the drawer, in `[0, 1]`.
    ///
    /// Returns `0` for an empty container.
    #[must_use]
    pub fn coverage(&self) -> f64 {
        if self.container_height <= 0.0 {
            return 0.0;
        }
        let covered = (self.container_height - self.current_y) / self.container_height;
        covered.max(0.0).min(1.0)
    }
}

/// Receives a [`HandleContext`] on every position write.
///
/// Implemented for any `FnMut(HandleContext)`.
pub trait BackgroundHandler {
    /// Called after the drawer's position was applied.
    fn handle(&mut self, context: HandleContext);
}

impl<F: FnMut(HandleContext)> BackgroundHandler for F {
    fn handle(&mut self, context: HandleContext) {
        self(context);
    }
}

#[cfg(test)]
mod tests {
    use super::HandleContext;

    #[test]
    fn coverage_tracks_position() {
        let at = |current_y| HandleContext {
            current_y,
            container_height: 800.0,
        };
        assert_eq!(at(800.0).coverage(), 0.0);
        assert_eq!(at(400.0).coverage(), 0.5);
        assert_eq!(at(0.0).coverage(), 1.0);
    }

    #[test]
    fn empty_container_has_no_coverage() {
        let context = HandleContext {
            current_y: 0.0,
            container_height: 0.0,
        };
        assert_eq!(context.coverage(), 0.0);
    }
}
