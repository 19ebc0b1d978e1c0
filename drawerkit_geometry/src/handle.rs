// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout of the grab handle drawn at the top of a drawer.

use kurbo::{Rect, Size};

/// Corner rounding for the handle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum HandleCornerRadius {
    /// Half the handle height, giving a pill shape.
    #[default]
    Automatic,
    /// A fixed radius.
    Custom(f64),
}

/// Size and placement of the grab handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleViewConfiguration {
    /// Handle size.
    pub size: Size,
    /// Distance from the drawer's top edge to the handle's top edge.
    pub top: f64,
    /// Corner rounding.
    pub corner_radius: HandleCornerRadius,
}

impl Default for HandleViewConfiguration {
    fn default() -> Self {
        Self {
            size: Size::new(40.0, 6.0),
            top: 8.0,
            corner_radius: HandleCornerRadius::Automatic,
        }
    }
}

impl HandleViewConfiguration {
    /// Resolved corner radius.
    ///
    /// Custom radii are clamped so the corners never overlap.
    #[must_use]
    pub fn resolved_corner_radius(&self) -> f64 {
        let size = self.clamped_size();
        match self.corner_radius {
            HandleCornerRadius::Automatic => size.height / 2.0,
            HandleCornerRadius::Custom(radius) => {
                let limit = size.width.min(size.height) / 2.0;
                radius.max(0.0).min(limit)
            }
        }
    }

    /// Frame of the handle inside a drawer surface whose frame is `surface`.
    ///
    /// The handle is horizontally centered on the surface, `top` below its
    /// top edge.
    #[must_use]
    pub fn frame_in(&self, surface: Rect) -> Rect {
        let size = self.clamped_size();
        let surface = surface.abs();
        let x0 = surface.center().x - size.width / 2.0;
        let y0 = surface.y0 + self.top;
        Rect::from_origin_size((x0, y0), size)
    }

    fn clamped_size(&self) -> Size {
        Size::new(self.size.width.max(0.0), self.size.height.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{HandleCornerRadius, HandleViewConfiguration};

    #[test]
    fn automatic_radius_is_half_height() {
        let handle = HandleViewConfiguration::default();
        assert_eq!(handle.resolved_corner_radius(), 3.0);
    }

    #[test]
    fn custom_radius_is_limited() {
        let mut handle = HandleViewConfiguration {
            corner_radius: HandleCornerRadius::Custom(2.0),
            ..HandleViewConfiguration::default()
        };
        assert_eq!(handle.resolved_corner_radius(), 2.0);

        handle.corner_radius = HandleCornerRadius::Custom(50.0);
        assert_eq!(handle.resolved_corner_radius(), 3.0);

        handle.corner_radius = HandleCornerRadius::Custom(-1.0);
        assert_eq!(handle.resolved_corner_radius(), 0.0);
    }

    #[test]
    fn frame_is_centered_below_top_edge() {
        let handle = HandleViewConfiguration::default();
        let surface = Rect::new(0.0, 400.0, 320.0, 800.0);
        let frame = handle.frame_in(surface);
        assert_eq!(frame, Rect::new(140.0, 408.0, 180.0, 414.0));
    }

    #[test]
    fn frame_follows_surface_offset() {
        let handle = HandleViewConfiguration {
            size: Size::new(20.0, 4.0),
            top: 0.0,
            corner_radius: HandleCornerRadius::Automatic,
        };
        let frame = handle.frame_in(Rect::new(100.0, 50.0, 200.0, 150.0));
        assert_eq!(frame.origin(), Point::new(140.0, 50.0));
        assert_eq!(frame.size(), Size::new(20.0, 4.0));
    }
}
