// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the DrawerKit benchmarks.

use drawerkit_controller::{CornerAnimation, DrawerConfiguration, DrawerSurface};
use kurbo::Rect;

/// Drawer configuration used across benchmarks: 100pt collapsed, 400pt
/// partially expanded.
pub fn bench_configuration() -> DrawerConfiguration {
    DrawerConfiguration {
        collapsed_height: 100.0,
        partial_height: Some(400.0),
        upper_mark_gap: 20.0,
        lower_mark_gap: 20.0,
        ..DrawerConfiguration::default()
    }
}

/// Minimal in-memory drawer surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct BenchSurface {
    /// Current frame.
    pub frame: Rect,
    /// Current corner radius.
    pub radius: f64,
}

impl DrawerSurface for BenchSurface {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_origin_y(&mut self, y: f64) {
        self.frame = self.frame.with_origin((self.frame.x0, y));
    }

    fn corner_radius(&self) -> f64 {
        self.radius
    }

    fn set_corner_radius(&mut self, radius: f64, _animation: CornerAnimation) {
        self.radius = radius;
    }
}
