// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldwise Geometry: pure overlay/viewport geometry helpers.
//!
//! These functions reason about the relationship between three rectangles,
//! all expressed in the same screen-space coordinate frame:
//!
//! - the **screen** bounds,
//! - a **container** holding a group of input controls,
//! - an intrusive **overlay** (typically an on-screen keyboard) anchored to
//!   the bottom of the screen.
//!
//! Everything here is stateless. Container controllers in
//! `fieldwise_viewport` combine these helpers with their own recorded state
//! to produce repositioning commands.
//!
//! ## Example
//!
//! A 300-unit overlay over an 800-unit screen, with a container whose bottom
//! edge sits flush with the bottom of the screen:
//!
//! ```rust
//! use kurbo::Rect;
//! use fieldwise_geometry::{bottom_inset, uncovered_height};
//!
//! let screen = Rect::new(0.0, 0.0, 400.0, 800.0);
//! let overlay = Rect::new(0.0, 500.0, 400.0, 800.0);
//! let container = Rect::new(0.0, 200.0, 400.0, 800.0);
//!
//! // The overlay covers 300 units of the container; with 20 units of
//! // clearance the container needs a 320-unit bottom inset.
//! assert_eq!(bottom_inset(&overlay, &container, &screen, 20.0), 320.0);
//!
//! // 500 units of the screen remain usable above the overlay.
//! assert_eq!(uncovered_height(&screen, &overlay), 500.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Rect;

/// How far the overlay intrudes into the container's own extent.
///
/// Space that already separates the container's bottom edge from the bottom
/// of the screen (a toolbar, a tab bar) absorbs part of the overlay, so the
/// intrusion is the overlay height minus that gap. The result is negative
/// when the overlay does not reach the container at all.
pub fn overlay_intrusion(overlay: &Rect, container: &Rect, screen: &Rect) -> f64 {
    let below_container = screen.max_y() - container.max_y();
    overlay.height() - below_container
}

/// Bottom content inset that exactly compensates the overlay's intrusion
/// into the container, plus `clearance` of breathing room above the overlay.
pub fn bottom_inset(overlay: &Rect, container: &Rect, screen: &Rect, clearance: f64) -> f64 {
    overlay_intrusion(overlay, container, screen) + clearance
}

/// Height of the screen not covered by the overlay.
pub fn uncovered_height(screen: &Rect, overlay: &Rect) -> f64 {
    screen.height() - overlay.height()
}

/// How far `bottom_edge` extends past `limit`, or zero when it does not.
///
/// Used by the fixed-container controller: the returned excess is exactly
/// the upward translation needed to pull an edge back above the limit.
pub fn upward_excess(bottom_edge: f64, limit: f64) -> f64 {
    (bottom_edge - limit).max(0.0)
}

/// Intersection of two rectangles, or `None` when they do not overlap.
pub fn overlap(a: &Rect, b: &Rect) -> Option<Rect> {
    let r = a.intersect(*b);
    (r.width() > 0.0 && r.height() > 0.0).then_some(r)
}

/// Whether the overlay obscures any part of `rect`.
pub fn obscures(overlay: &Rect, rect: &Rect) -> bool {
    overlap(overlay, rect).is_some()
}
