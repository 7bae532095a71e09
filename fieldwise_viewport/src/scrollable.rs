// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller for scrollable containers: bottom inset plus minimal reveal.

use fieldwise_geometry::bottom_inset;
use kurbo::Rect;

use crate::command::{ContainerMetrics, RepositionCommand};

/// State and command computation for a scrollable container.
///
/// Invariant: while the overlay is hidden the recorded inset is exactly zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scrollable {
    bottom_inset: f64,
}

impl Scrollable {
    /// New controller with no inset applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently recorded bottom inset.
    pub fn bottom_inset(&self) -> f64 {
        self.bottom_inset
    }

    /// Compute the bottom inset compensating the overlay's intrusion.
    ///
    /// Space already below the container (a toolbar, for example) absorbs
    /// part of the overlay, so the inset is the overlay height minus that
    /// distance, plus the configured clearance.
    pub fn on_overlay_shown(
        &mut self,
        overlay: &Rect,
        metrics: &ContainerMetrics,
        clearance: f64,
    ) -> RepositionCommand {
        let inset = bottom_inset(overlay, &metrics.container, &metrics.screen, clearance);
        self.bottom_inset = inset;
        RepositionCommand::SetBottomInset(inset)
    }

    /// Reveal the active control, extended downward by `clearance` so the
    /// scroll leaves breathing room above the overlay.
    pub fn move_to_active(&self, active: &Rect, clearance: f64) -> RepositionCommand {
        let target = Rect::new(active.x0, active.y0, active.x1, active.y1 + clearance);
        RepositionCommand::RevealRect(target)
    }

    /// Restore the inset to exactly zero.
    pub fn on_overlay_hidden(&mut self) -> RepositionCommand {
        self.bottom_inset = 0.0;
        RepositionCommand::SetBottomInset(0.0)
    }
}
