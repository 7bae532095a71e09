// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldwise Session: the coordinator tying the workspace together.
//!
//! A [`Session`] owns the focus chain and the viewport controller for one
//! container and connects them to the host through three narrow traits:
//!
//! - [`ControlOps`]: focus, affordance, and content operations on
//!   individual controls,
//! - [`ContainerOps`]: container kind, screen bounds, and command
//!   application,
//! - [`HookRegistrar`]: submit/focus-loss observer registration, tracked in
//!   a ledger so reload and teardown always deregister everything that was
//!   registered.
//!
//! The host delivers discrete [`SessionEvent`]s (overlay shown/hidden,
//! control submitted, focus lost, background tap) on its single UI thread;
//! the session reacts by deciding (chain, viewport) and then executing
//! through the traits. Repositioning commands are handed over in one
//! [`CommandBatch`](fieldwise_viewport::CommandBatch) together with the
//! overlay's animation transition, fire-and-forget.
//!
//! See `demos/examples/form_session.rs` for an end-to-end walkthrough
//! against a mock host.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod events;
mod host;
mod session;

pub use config::SessionConfig;
pub use events::{OverlayTransition, RawOverlayPayload, SessionEvent};
pub use host::{ContainerOps, ControlOps, HookRegistrar};
pub use session::Session;
