// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldwise Viewport: container repositioning around an intrusive overlay.
//!
//! When an overlay (an on-screen keyboard) appears, the container holding the
//! active input control has to move so the control stays visible. How it can
//! move depends on the container kind:
//!
//! - A **scrollable** container absorbs the overlay as a bottom content inset
//!   and then scrolls minimally until the active control is visible.
//! - A **fixed** container cannot absorb an inset; instead its whole frame is
//!   translated upward by exactly the amount the active control's bottom edge
//!   would be covered.
//!
//! Controllers here compute [`RepositionCommand`]s and track the container
//! state (current inset or translation); the host applies the commands. The
//! animation [`Transition`] captured from the overlay event is attached to a
//! [`CommandBatch`] and passed through opaquely; controllers never interpret
//! duration or curve.
//!
//! Restoration on overlay dismissal is an **exact reset**: the inset returns
//! to zero and the translation to identity, never a reverse-computed delta,
//! so repeated show/hide cycles cannot drift.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use fieldwise_viewport::{ContainerMetrics, RepositionCommand, ViewportController};
//!
//! let metrics = ContainerMetrics {
//!     container: Rect::new(0.0, 0.0, 400.0, 800.0),
//!     screen: Rect::new(0.0, 0.0, 400.0, 800.0),
//! };
//! let overlay = Rect::new(0.0, 500.0, 400.0, 800.0);
//!
//! let mut controller = ViewportController::for_container(true);
//! let cmd = controller.on_overlay_shown(&overlay, &metrics, 20.0);
//! assert_eq!(cmd, Some(RepositionCommand::SetBottomInset(320.0)));
//!
//! // Dismissal restores the inset to exactly zero.
//! assert_eq!(
//!     controller.on_overlay_hidden(),
//!     RepositionCommand::SetBottomInset(0.0),
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
mod controller;
mod fixed;
mod scrollable;

pub use command::{CommandBatch, ContainerMetrics, CurveToken, RepositionCommand, Transition};
pub use controller::ViewportController;
pub use fixed::Fixed;
pub use scrollable::Scrollable;
