// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits the host UI framework implements for a session.
//!
//! Together with [`ViewTree`](fieldwise_discovery::ViewTree) these are the
//! session's entire window onto the host. All of them operate on the host's
//! own view handles; the session never owns a widget.

use fieldwise_chain::Affordance;
use fieldwise_viewport::CommandBatch;
use kurbo::Rect;

/// Operations on individual input controls.
pub trait ControlOps<K> {
    /// Ask the control to acquire focus.
    fn acquire_focus(&mut self, control: K);
    /// Ask the control to give up focus. Must be safe to call on a control
    /// that is not focused.
    fn resign_focus(&mut self, control: K);
    /// Whether the control currently holds focus.
    fn has_focus(&self, control: K) -> bool;
    /// Whether the control could acquire focus right now.
    fn can_acquire_focus(&self, control: K) -> bool;
    /// Show the given submit affordance on a single-line control.
    fn set_affordance(&mut self, control: K, affordance: Affordance);
    /// Reset the control's content to empty.
    fn clear_content(&mut self, control: K);
}

/// Operations on the session's container.
pub trait ContainerOps<K> {
    /// Whether this container scrolls (decides the viewport controller
    /// variant at configure time).
    fn is_scrollable(&self, container: K) -> bool;
    /// Bounds of the screen in the common frame.
    fn screen_bounds(&self) -> Rect;
    /// Execute a batch of repositioning commands, animating with the
    /// batch's transition. Fire-and-forget: the session never waits for
    /// completion.
    fn apply(&mut self, container: K, batch: &CommandBatch);
}

/// Registration of editing-finished observers on controls.
///
/// The session records every registration in its ledger and guarantees a
/// matching [`HookRegistrar::remove_observers`] for each on reload and
/// teardown, so hosts never see duplicate registrations for one control.
pub trait HookRegistrar<K> {
    /// Deliver [`SessionEvent::Submitted`](crate::SessionEvent::Submitted)
    /// when this single-line control's submit action fires.
    fn observe_submit(&mut self, control: K);
    /// Deliver [`SessionEvent::FocusLost`](crate::SessionEvent::FocusLost)
    /// when this multi-line control stops editing.
    fn observe_focus_loss(&mut self, control: K);
    /// Remove every observer previously registered for this control.
    fn remove_observers(&mut self, control: K);
}
