// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repositioning commands and the geometry snapshots they are computed from.

use alloc::vec::Vec;
use kurbo::{Rect, Vec2};

/// Opaque animation-curve token from the host's overlay event.
///
/// The core never interprets the value; it travels from the overlay-shown
/// payload to command application unchanged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CurveToken(pub u32);

/// Animation parameters for applying a command batch, passed through from
/// the most recent overlay event.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transition {
    /// Host-declared animation duration in seconds.
    pub duration: f64,
    /// Host-declared curve token.
    pub curve: CurveToken,
}

/// A single repositioning side effect for the host to execute.
///
/// Rects are expressed in the common frame; the host converts into whatever
/// space its container API expects when applying.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RepositionCommand {
    /// Set the scrollable container's bottom content inset.
    SetBottomInset(f64),
    /// Scroll minimally until this rect is visible. No centering.
    RevealRect(Rect),
    /// Translate the fixed container's frame by this offset.
    SetTranslation(Vec2),
    /// Restore the fixed container's frame to its original position.
    ClearTranslation,
}

/// Commands to apply together under one transition.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandBatch {
    /// Commands in application order.
    pub commands: Vec<RepositionCommand>,
    /// Animation parameters, applied fire-and-forget.
    pub transition: Transition,
}

/// Geometry snapshot the coordinator gathers from the host before each
/// computation. Both rects share the common (screen) frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainerMetrics {
    /// The container's frame.
    pub container: Rect,
    /// The screen bounds.
    pub screen: Rect,
}
