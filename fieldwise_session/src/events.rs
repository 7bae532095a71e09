// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events the host delivers to a session.

use fieldwise_viewport::{CurveToken, Transition};
use kurbo::{Point, Rect};

/// Raw overlay-appearing payload as the host received it.
///
/// Hosts forward whatever fields their notification carried; the session
/// validates. Geometry is required: a payload without a frame is malformed
/// and the whole event is ignored. Duration and curve are optional and fall
/// back to a zero-duration default transition.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RawOverlayPayload {
    /// Final overlay frame in the common (screen) coordinate space.
    pub frame: Option<Rect>,
    /// Host-declared animation duration in seconds.
    pub duration: Option<f64>,
    /// Host-declared animation curve token, passed through opaquely.
    pub curve: Option<u32>,
}

/// Validated overlay state captured from the most recent appearing event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayTransition {
    /// The overlay's frame in the common frame.
    pub rect: Rect,
    /// Animation parameters for repositioning commands.
    pub transition: Transition,
}

impl OverlayTransition {
    /// Validate a raw payload. `None` means the payload is malformed and the
    /// event must be ignored.
    pub fn from_payload(payload: &RawOverlayPayload) -> Option<Self> {
        let rect = payload.frame?;
        Some(Self {
            rect,
            transition: Transition {
                duration: payload.duration.unwrap_or(0.0),
                curve: CurveToken(payload.curve.unwrap_or_default()),
            },
        })
    }
}

/// A discrete external event delivered on the host's UI thread.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SessionEvent<K> {
    /// The overlay is appearing with the given payload.
    OverlayShown(RawOverlayPayload),
    /// The overlay is disappearing.
    OverlayHidden,
    /// A single-line control's explicit submit action fired.
    Submitted(K),
    /// A multi-line control finished editing by losing focus.
    FocusLost(K),
    /// A single tap landed on the container at this common-frame point.
    BackgroundTap(Point),
}
