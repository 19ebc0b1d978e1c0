// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Whether a corner radius write may animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CornerAnimation {
    /// Use whatever implicit animation the host applies to property changes.
    Implicit,
    /// Apply the change immediately, with implicit animations disabled.
    Suppressed,
}

/// The presented drawer, as seen by [`DrawerController`](crate::DrawerController).
///
/// Hosts implement this for whatever view, layer, or widget renders the
/// drawer. Only the top two corners are expected to be rounded.
pub trait DrawerSurface {
    /// Current frame in container coordinates.
    fn frame(&self) -> Rect;

    /// Moves the surface so its top edge sits at `y`, keeping its size.
    fn set_origin_y(&mut self, y: f64);

    /// Current corner radius.
    fn corner_radius(&self) -> f64;

    /// Sets the corner radius.
    fn set_corner_radius(&mut self, radius: f64, animation: CornerAnimation);
}

impl<T: DrawerSurface + ?Sized> DrawerSurface for &mut T {
    fn frame(&self) -> Rect {
        (**self).frame()
    }

    fn set_origin_y(&mut self, y: f64) {
        (**self).set_origin_y(y);
    }

    fn corner_radius(&self) -> f64 {
        (**self).corner_radius()
    }

    fn set_corner_radius(&mut self, radius: f64, animation: CornerAnimation) {
        (**self).set_corner_radius(radius, animation);
    }
}
