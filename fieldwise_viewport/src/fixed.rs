// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller for fixed (non-scrolling) containers: upward translation.

use fieldwise_geometry::{uncovered_height, upward_excess};
use kurbo::{Rect, Vec2};

use crate::command::{ContainerMetrics, RepositionCommand};

/// State and command computation for a fixed container.
///
/// Invariant: while the overlay is hidden the recorded translation is the
/// identity. Restoration is an exact reset, never a reverse-computed delta.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fixed {
    translation: Vec2,
}

impl Fixed {
    /// New controller at the identity translation.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently recorded translation.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Translate the container just enough to keep the active control above
    /// the overlay, or restore it when no translation is needed.
    ///
    /// `active` is the control's current frame in the common frame. Any
    /// translation this controller already applied is subtracted out before
    /// measuring, which is equivalent to resetting the container to identity
    /// first: repeated identical calls compute from the same resting
    /// geometry and cannot compound.
    ///
    /// Returns `None` when the container is already where it should be.
    pub fn move_to_active(
        &mut self,
        active: &Rect,
        overlay: &Rect,
        metrics: &ContainerMetrics,
        clearance: f64,
    ) -> Option<RepositionCommand> {
        let resting_bottom = active.y1 - self.translation.y;
        let limit = uncovered_height(&metrics.screen, overlay);
        let excess = upward_excess(resting_bottom + clearance, limit);

        if excess == 0.0 {
            if self.translation == Vec2::ZERO {
                return None;
            }
            self.translation = Vec2::ZERO;
            return Some(RepositionCommand::ClearTranslation);
        }

        let translation = Vec2::new(0.0, -excess);
        if translation == self.translation {
            return None;
        }
        self.translation = translation;
        Some(RepositionCommand::SetTranslation(translation))
    }

    /// Restore the container's frame exactly.
    pub fn on_overlay_hidden(&mut self) -> RepositionCommand {
        self.translation = Vec2::ZERO;
        RepositionCommand::ClearTranslation
    }
}
