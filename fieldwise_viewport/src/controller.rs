// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed pair of container controllers behind one interface.

use kurbo::Rect;

use crate::command::{ContainerMetrics, RepositionCommand};
use crate::fixed::Fixed;
use crate::scrollable::Scrollable;

/// Viewport controller for the session's container, one of two kinds.
///
/// The kind is decided once, when the session configures against a
/// container, and never re-checked per operation.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewportController {
    /// The container scrolls; overlay intrusion is absorbed as a bottom
    /// content inset.
    Scrollable(Scrollable),
    /// The container is fixed; its frame is translated upward instead.
    Fixed(Fixed),
}

impl ViewportController {
    /// Select the controller variant for a container kind.
    pub fn for_container(is_scrollable: bool) -> Self {
        if is_scrollable {
            Self::Scrollable(Scrollable::new())
        } else {
            Self::Fixed(Fixed::new())
        }
    }

    /// React to the overlay appearing.
    ///
    /// Scrollable containers compute and record their bottom inset here; a
    /// fixed container has nothing to absorb the inset and does nothing
    /// (its repositioning happens entirely in [`Self::move_to_active`]).
    pub fn on_overlay_shown(
        &mut self,
        overlay: &Rect,
        metrics: &ContainerMetrics,
        clearance: f64,
    ) -> Option<RepositionCommand> {
        match self {
            Self::Scrollable(s) => Some(s.on_overlay_shown(overlay, metrics, clearance)),
            Self::Fixed(_) => None,
        }
    }

    /// Keep the active control visible above the overlay.
    ///
    /// `active` is the control's frame in the common frame.
    pub fn move_to_active(
        &mut self,
        active: &Rect,
        overlay: &Rect,
        metrics: &ContainerMetrics,
        clearance: f64,
    ) -> Option<RepositionCommand> {
        match self {
            Self::Scrollable(s) => Some(s.move_to_active(active, clearance)),
            Self::Fixed(f) => f.move_to_active(active, overlay, metrics, clearance),
        }
    }

    /// React to the overlay disappearing: exact restoration.
    pub fn on_overlay_hidden(&mut self) -> RepositionCommand {
        match self {
            Self::Scrollable(s) => s.on_overlay_hidden(),
            Self::Fixed(f) => f.on_overlay_hidden(),
        }
    }

    /// Whether the container is in its resting state (no inset, identity
    /// translation). Holds whenever the overlay is hidden.
    pub fn at_rest(&self) -> bool {
        match self {
            Self::Scrollable(s) => s.bottom_inset() == 0.0,
            Self::Fixed(f) => f.translation() == kurbo::Vec2::ZERO,
        }
    }
}
