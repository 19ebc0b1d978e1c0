// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DrawerKit Controller: apply drawer geometry to a live drawer surface.
//!
//! [`DrawerController`] sits between a host's drawer view and the pure
//! evaluator in [`drawerkit_geometry`]. It holds the session
//! [`DrawerConfiguration`] and the container size, reads the drawer's live
//! position from a [`DrawerSurface`], and writes clamped positions and corner
//! radii back to it.
//!
//! Hosts remain responsible for:
//! - Building the drawer view and implementing [`DrawerSurface`] for it.
//! - Wiring pan and tap gestures into [`DrawerController::set_current_y`] and
//!   [`DrawerController::set_current_state`], and driving any animation.
//! - Styling the background, optionally via a [`BackgroundHandler`] that the
//!   controller notifies on every position write.
//!
//! ## Minimal example
//!
//! ```rust
//! use drawerkit_controller::{
//!     CornerAnimation, DrawerConfiguration, DrawerController, DrawerSurface,
//! };
//! use drawerkit_geometry::DrawerState;
//! use kurbo::{Rect, Size};
//!
//! #[derive(Debug)]
//! struct Sheet {
//!     frame: Rect,
//!     radius: f64,
//! }
//!
//! impl DrawerSurface for Sheet {
//!     fn frame(&self) -> Rect {
//!         self.frame
//!     }
//!     fn set_origin_y(&mut self, y: f64) {
//!         self.frame = self.frame.with_origin((self.frame.x0, y));
//!     }
//!     fn corner_radius(&self) -> f64 {
//!         self.radius
//!     }
//!     fn set_corner_radius(&mut self, radius: f64, _animation: CornerAnimation) {
//!         self.radius = radius;
//!     }
//! }
//!
//! let config = DrawerConfiguration {
//!     collapsed_height: 100.0,
//!     partial_height: Some(400.0),
//!     ..DrawerConfiguration::default()
//! };
//! let mut drawer = DrawerController::new(config);
//! drawer.set_container_size(Size::new(390.0, 800.0));
//! drawer.attach_surface(Sheet {
//!     frame: Rect::new(0.0, 800.0, 390.0, 1_600.0),
//!     radius: 0.0,
//! });
//!
//! drawer.set_current_state(DrawerState::PartiallyExpanded);
//! assert_eq!(drawer.current_y(), 400.0);
//!
//! // A drag past the lower mark reads as collapsed.
//! drawer.set_current_y(650.0);
//! assert_eq!(drawer.current_state(), DrawerState::Collapsed);
//!
//! let radius = drawer.corner_radius_at(drawer.current_state());
//! drawer.set_current_corner_radius(radius);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod background;
mod configuration;
mod controller;
mod surface;

pub use background::{BackgroundHandler, HandleContext};
pub use configuration::DrawerConfiguration;
pub use controller::DrawerController;
pub use surface::{CornerAnimation, DrawerSurface};
