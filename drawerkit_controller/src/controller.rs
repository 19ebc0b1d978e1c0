// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use drawerkit_geometry::{
    CornerAnimationPolicy, DebugMarks, DrawerGeometry, DrawerState, HandleViewConfiguration,
    corner_radius,
};
use kurbo::{Rect, Size};

use crate::background::{BackgroundHandler, HandleContext};
use crate::configuration::DrawerConfiguration;
use crate::surface::{CornerAnimation, DrawerSurface};

/// Applies drawer geometry to a host-supplied [`DrawerSurface`].
///
/// The controller owns the session's [`DrawerConfiguration`], the current
/// container size, and (once attached) the drawer surface. It keeps no
/// position of its own: every query reads the surface and resolves a fresh
/// [`DrawerGeometry`], and every command clamps before writing back.
///
/// Queries (`current_*`, `*_at`, `geometry`, ...) never mutate anything.
/// Commands (`set_current_*`) write to the surface and, for position writes,
/// notify the [`BackgroundHandler`] if one is installed.
pub struct DrawerController<S> {
    configuration: DrawerConfiguration,
    container_size: Size,
    surface: Option<S>,
    background: Option<Box<dyn BackgroundHandler>>,
}

impl<S: fmt::Debug> fmt::Debug for DrawerController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerController")
            .field("configuration", &self.configuration)
            .field("container_size", &self.container_size)
            .field("surface", &self.surface)
            .field("background", &self.background.is_some())
            .finish()
    }
}

impl<S: DrawerSurface> DrawerController<S> {
    /// Creates a controller with an empty container and no surface.
    #[must_use]
    pub fn new(configuration: DrawerConfiguration) -> Self {
        Self {
            configuration,
            container_size: Size::ZERO,
            surface: None,
            background: None,
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn configuration(&self) -> &DrawerConfiguration {
        &self.configuration
    }

    /// Replaces the session configuration.
    ///
    /// The surface is not moved; call [`Self::set_current_state`] to settle it
    /// against the new geometry.
    pub fn set_configuration(&mut self, configuration: DrawerConfiguration) {
        self.configuration = configuration;
    }

    /// Returns the container size, [`Size::ZERO`] until one is set.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Sets the container size. Negative extents count as zero.
    pub fn set_container_size(&mut self, size: Size) {
        self.container_size = Size::new(size.width.max(0.0), size.height.max(0.0));
    }

    /// Attaches the drawer surface, returning the previously attached one.
    pub fn attach_surface(&mut self, surface: S) -> Option<S> {
        tracing::debug!(
            top_y = surface.frame().y0,
            replaced = self.surface.is_some(),
            "drawer surface attached"
        );
        self.surface.replace(surface)
    }

    /// Detaches and returns the drawer surface.
    pub fn detach_surface(&mut self) -> Option<S> {
        let surface = self.surface.take();
        if surface.is_some() {
            tracing::debug!("drawer surface detached");
        }
        surface
    }

    /// Returns the attached surface.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Returns the attached surface mutably.
    ///
    /// Writes made through this reference bypass clamping.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Installs the handler notified on every position write.
    pub fn set_background_handler(&mut self, handler: impl BackgroundHandler + 'static) {
        self.background = Some(Box::new(handler));
    }

    /// Removes the background handler, if any.
    pub fn clear_background_handler(&mut self) {
        self.background = None;
    }

    /// Resolves the geometry for the current configuration and container.
    #[must_use]
    pub fn geometry(&self) -> DrawerGeometry {
        self.configuration.resolve(self.container_size.height)
    }

    /// Y of the top edge when fully expanded.
    #[must_use]
    pub fn full_y(&self) -> f64 {
        self.geometry().full_y()
    }

    /// Y of the top edge when partially expanded.
    #[must_use]
    pub fn partial_y(&self) -> f64 {
        self.geometry().partial_y()
    }

    /// Y of the top edge when collapsed.
    #[must_use]
    pub fn collapsed_y(&self) -> f64 {
        self.geometry().collapsed_y()
    }

    /// Boundary between the fully and partially expanded zones.
    #[must_use]
    pub fn upper_mark_y(&self) -> f64 {
        self.geometry().upper_mark_y()
    }

    /// Boundary between the partially expanded and collapsed zones.
    #[must_use]
    pub fn lower_mark_y(&self) -> f64 {
        self.geometry().lower_mark_y()
    }

    /// Clamps `y` into `[full_y, container_height]` without applying it.
    #[must_use]
    pub fn clamp_y(&self, y: f64) -> f64 {
        self.geometry().clamp_y(y)
    }

    /// Clamped Y of the surface's top edge.
    ///
    /// Without a surface this is the full-expansion offset.
    #[must_use]
    pub fn current_y(&self) -> f64 {
        let geometry = self.geometry();
        let y = self
            .surface
            .as_ref()
            .map_or(geometry.full_y(), |surface| surface.frame().y0);
        geometry.clamp_y(y)
    }

    /// Moves the surface's top edge to `y`, clamped into
    /// `[full_y, container_height]`.
    ///
    /// The background handler, if any, is notified with the applied value
    /// even when no surface is attached. Returns the applied value.
    pub fn set_current_y(&mut self, y: f64) -> f64 {
        let geometry = self.geometry();
        let previous = self.surface.as_ref().map(|_| self.current_y());
        let applied = geometry.clamp_y(y);

        if let Some(surface) = self.surface.as_mut() {
            surface.set_origin_y(applied);
        }
        tracing::trace!(requested = y, applied, "drawer position written");

        if let Some(previous) = previous {
            let from = geometry.state_for_y(previous);
            let to = geometry.state_for_y(applied);
            if from != to {
                tracing::debug!(?from, ?to, "drawer state changed");
            }
        }

        if let Some(handler) = self.background.as_mut() {
            handler.handle(HandleContext {
                current_y: applied,
                container_height: geometry.container_height(),
            });
        }
        applied
    }

    /// Nearest logical state for the surface's current position.
    #[must_use]
    pub fn current_state(&self) -> DrawerState {
        self.geometry().state_for_y(self.current_y())
    }

    /// Moves the surface to the canonical offset of `state`.
    ///
    /// This is a position write, so the background handler is notified.
    pub fn set_current_state(&mut self, state: DrawerState) {
        let y = self.geometry().y_for_state(state);
        self.set_current_y(y);
    }

    /// Surface corner radius clamped into `[0, maximum_corner_radius]`.
    ///
    /// Without a surface this is `0`.
    #[must_use]
    pub fn current_corner_radius(&self) -> f64 {
        let radius = self
            .surface
            .as_ref()
            .map_or(0.0, |surface| surface.corner_radius());
        clamp_radius(radius, self.configuration.maximum_corner_radius())
    }

    /// Sets the surface's corner radius, clamped into
    /// `[0, maximum_corner_radius]`, and returns the applied value.
    ///
    /// Under [`CornerAnimationPolicy::None`] the write is applied with
    /// implicit animation suppressed.
    pub fn set_current_corner_radius(&mut self, radius: f64) -> f64 {
        let applied = clamp_radius(radius, self.configuration.maximum_corner_radius());
        let animation = match self.configuration.corner_animation_policy {
            CornerAnimationPolicy::None => CornerAnimation::Suppressed,
            CornerAnimationPolicy::MaximumAtPartialY
            | CornerAnimationPolicy::AlwaysShowBelowStatusBar => CornerAnimation::Implicit,
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.set_corner_radius(applied, animation);
        }
        tracing::trace!(requested = radius, applied, ?animation, "drawer corner radius written");
        applied
    }

    /// Corner radius the drawer would have at the canonical offset of `state`.
    #[must_use]
    pub fn corner_radius_at(&self, state: DrawerState) -> f64 {
        self.corner_radius_at_y(self.geometry().y_for_state(state))
    }

    /// Corner radius the drawer would have with its top edge at `y`.
    #[must_use]
    pub fn corner_radius_at_y(&self, y: f64) -> f64 {
        let geometry = self.geometry();
        let y = geometry.clamp_y(y);
        corner_radius(
            self.configuration.corner_animation_policy,
            self.configuration.maximum_corner_radius(),
            self.configuration.status_bar_height,
            y,
            geometry.interpolation_fraction(y),
        )
    }

    /// Handle opacity at the canonical offset of `state`.
    #[must_use]
    pub fn handle_view_alpha_at(&self, state: DrawerState) -> f64 {
        self.geometry().interpolation_fraction_at(state)
    }

    /// Handle opacity with the drawer's top edge at `y`.
    #[must_use]
    pub fn handle_view_alpha_at_y(&self, y: f64) -> f64 {
        self.geometry().interpolation_fraction(y)
    }

    /// Frame of the grab handle on the attached surface.
    #[must_use]
    pub fn handle_view_frame(&self, handle: &HandleViewConfiguration) -> Option<Rect> {
        self.surface
            .as_ref()
            .map(|surface| handle.frame_in(surface.frame()))
    }

    /// Debug overlay strips for the marks and the partial offset.
    ///
    /// Returns `None` unless debug marks are enabled and at least one gap is
    /// positive.
    #[must_use]
    pub fn debug_marks(&self) -> Option<DebugMarks> {
        let geometry = self.geometry();
        let any_gap = geometry.upper_mark_gap() > 0.0 || geometry.lower_mark_gap() > 0.0;
        (self.configuration.debug_marks && any_gap)
            .then(|| geometry.debug_marks(self.container_size.width))
    }
}

fn clamp_radius(radius: f64, max_radius: f64) -> f64 {
    radius.max(0.0).min(max_radius)
}
