// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldwise Chain: the spatially ordered focus chain.
//!
//! A [`FocusChain`] holds the input controls discovered in a container,
//! sorted into reading order (vertical position first, horizontal position
//! as the tie-break) using bounds expressed in one common coordinate frame.
//! Controls inside different nested scroll regions are therefore comparable.
//!
//! The chain only *decides*; it never touches the host. Traversal operations
//! return a [`ChainAction`], either "focus this control" or "dismiss the
//! overlay", and a higher layer (the session coordinator) executes it. This
//! mirrors the split between routing and dispatching elsewhere in the
//! workspace.
//!
//! ## Minimal example
//!
//! Two fields stacked vertically; submitting the first advances to the
//! second, submitting the second dismisses the overlay:
//!
//! ```rust
//! use kurbo::Rect;
//! use fieldwise_chain::{ChainAction, FocusChain};
//! use fieldwise_discovery::{InputEntry, InputKind};
//!
//! let mut chain: FocusChain<u32> = FocusChain::new();
//! chain.rebuild(vec![
//!     InputEntry {
//!         id: 2,
//!         kind: InputKind::SingleLine,
//!         frame: Rect::new(0.0, 60.0, 100.0, 90.0),
//!         can_acquire_focus: true,
//!     },
//!     InputEntry {
//!         id: 1,
//!         kind: InputKind::SingleLine,
//!         frame: Rect::new(0.0, 10.0, 100.0, 40.0),
//!         can_acquire_focus: true,
//!     },
//! ]);
//!
//! // Spatial order puts id 1 first regardless of discovery order.
//! assert_eq!(chain.advance_from(1, true, |_| true), ChainAction::Focus(2));
//! assert_eq!(chain.advance_from(2, true, |_| true), ChainAction::Dismiss);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use fieldwise_discovery::{InputEntry, InputKind};
use kurbo::Rect;

/// Submit affordance shown on a single-line control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Affordance {
    /// Submitting advances to the next field.
    Advance,
    /// Submitting finishes the group (last field).
    Finish,
}

/// Default affordance policy: every field advances except the last.
pub fn default_affordance(_index: usize, is_last: bool) -> Affordance {
    if is_last { Affordance::Finish } else { Affordance::Advance }
}

/// Outcome of a traversal decision, executed by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChainAction<K> {
    /// Request focus on this control.
    Focus(K),
    /// No eligible control remains; request overlay dismissal.
    Dismiss,
}

/// Ordered sequence of discovered input controls.
///
/// The chain is rebuilt wholesale on every discovery pass, never patched
/// incrementally, which keeps the ordering invariant trivially true: entries
/// are always sorted by `(y, x)` ascending in the common frame, with the
/// sort stable for coincident positions.
#[derive(Clone, Debug, Default)]
pub struct FocusChain<K> {
    entries: Vec<InputEntry<K>>,
}

impl<K> FocusChain<K>
where
    K: Copy + Eq,
{
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Replace the chain contents with freshly discovered entries and sort
    /// them into reading order.
    pub fn rebuild(&mut self, entries: Vec<InputEntry<K>>) {
        self.entries = entries;
        self.sort();
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of controls in the chain.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the chain holds no controls.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sorted entries.
    pub fn entries(&self) -> &[InputEntry<K>] {
        &self.entries
    }

    /// Index of `id` in the chain, by handle identity.
    pub fn position(&self, id: K) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn sort(&mut self) {
        self.entries
            .sort_by(|a, b| compare_rect_reading(&a.frame, &b.frame));
    }

    /// Compute the affordance assignment for every single-line control.
    ///
    /// `provider` receives each control's chain index and whether it is the
    /// last control of the whole chain (multi-line controls included in both
    /// counts). Multi-line controls have no affordance and are skipped.
    pub fn affordances(
        &self,
        provider: impl Fn(usize, bool) -> Affordance,
    ) -> Vec<(K, Affordance)> {
        let last = self.entries.len().saturating_sub(1);
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.kind == InputKind::SingleLine)
            .map(|(i, e)| (e.id, provider(i, i == last)))
            .collect()
    }

    /// Decide which control should receive focus, starting at `index`.
    ///
    /// Controls the live `can_focus` probe rejects are skipped strictly
    /// forward, without wrapping around or revisiting an earlier index.
    /// Running past the end of the chain yields [`ChainAction::Dismiss`].
    pub fn activate(&self, index: usize, can_focus: impl Fn(K) -> bool) -> ChainAction<K> {
        for entry in self.entries.iter().skip(index) {
            if can_focus(entry.id) {
                return ChainAction::Focus(entry.id);
            }
        }
        ChainAction::Dismiss
    }

    /// Decide where focus goes after `id` finished editing.
    ///
    /// Lookup is by handle identity. An unknown handle, or auto-advance
    /// being disabled, dismisses the overlay instead of advancing.
    pub fn advance_from(
        &self,
        id: K,
        auto_advance: bool,
        can_focus: impl Fn(K) -> bool,
    ) -> ChainAction<K> {
        let Some(index) = self.position(id) else {
            return ChainAction::Dismiss;
        };
        if !auto_advance {
            return ChainAction::Dismiss;
        }
        self.activate(index + 1, can_focus)
    }
}

fn compare_rect_reading(a: &Rect, b: &Rect) -> Ordering {
    const RELATIVE_EPS: f64 = 1e-6;
    let ay = a.y0;
    let by = b.y0;
    if (ay - by).abs() > f64::max(ay.abs(), by.abs()) * RELATIVE_EPS {
        return ay.partial_cmp(&by).unwrap_or(Ordering::Equal);
    }
    let ax = a.x0;
    let bx = b.x0;
    ax.partial_cmp(&bx).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn entry(id: u32, x: f64, y: f64) -> InputEntry<u32> {
        InputEntry {
            id,
            kind: InputKind::SingleLine,
            frame: Rect::new(x, y, x + 100.0, y + 30.0),
            can_acquire_focus: true,
        }
    }

    fn multiline(id: u32, x: f64, y: f64) -> InputEntry<u32> {
        InputEntry {
            kind: InputKind::MultiLine,
            ..entry(id, x, y)
        }
    }

    fn chain(entries: Vec<InputEntry<u32>>) -> FocusChain<u32> {
        let mut chain = FocusChain::new();
        chain.rebuild(entries);
        chain
    }

    #[test]
    fn rebuild_sorts_by_y_then_x() {
        let chain = chain(vec![
            entry(1, 0.0, 200.0),
            entry(2, 150.0, 50.0),
            entry(3, 0.0, 50.0),
        ]);
        let ids: Vec<u32> = chain.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn sort_is_stable_for_coincident_frames() {
        // Identical geometry, distinct handles: discovery order survives.
        let chain = chain(vec![entry(7, 0.0, 10.0), entry(8, 0.0, 10.0)]);
        let ids: Vec<u32> = chain.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![7, 8]);
    }

    #[test]
    fn activate_out_of_bounds_dismisses() {
        let chain = chain(vec![entry(1, 0.0, 0.0)]);
        assert_eq!(chain.activate(1, |_| true), ChainAction::Dismiss);
        assert_eq!(chain.activate(99, |_| true), ChainAction::Dismiss);
    }

    #[test]
    fn activate_skips_forward_past_unfocusable_controls() {
        let chain = chain(vec![
            entry(1, 0.0, 0.0),
            entry(2, 0.0, 40.0),
            entry(3, 0.0, 80.0),
        ]);
        // 2 refuses focus; 3 is chosen, 1 is never revisited.
        assert_eq!(chain.activate(1, |id| id != 2), ChainAction::Focus(3));
    }

    #[test]
    fn activate_dismisses_when_no_remaining_control_can_focus() {
        let chain = chain(vec![entry(1, 0.0, 0.0), entry(2, 0.0, 40.0)]);
        assert_eq!(chain.activate(1, |_| false), ChainAction::Dismiss);
    }

    #[test]
    fn advance_moves_in_spatial_order_not_discovery_order() {
        let chain = chain(vec![entry(9, 0.0, 300.0), entry(4, 0.0, 100.0)]);
        assert_eq!(chain.advance_from(4, true, |_| true), ChainAction::Focus(9));
        assert_eq!(chain.advance_from(9, true, |_| true), ChainAction::Dismiss);
    }

    #[test]
    fn advance_from_unknown_handle_dismisses() {
        let chain = chain(vec![entry(1, 0.0, 0.0)]);
        assert_eq!(chain.advance_from(42, true, |_| true), ChainAction::Dismiss);
    }

    #[test]
    fn advance_with_auto_advance_disabled_dismisses() {
        let chain = chain(vec![entry(1, 0.0, 0.0), entry(2, 0.0, 40.0)]);
        assert_eq!(chain.advance_from(1, false, |_| true), ChainAction::Dismiss);
    }

    #[test]
    fn coincident_controls_are_distinguished_by_handle() {
        let chain = chain(vec![entry(1, 0.0, 10.0), entry(2, 0.0, 10.0)]);
        assert_eq!(chain.advance_from(1, true, |_| true), ChainAction::Focus(2));
        assert_eq!(chain.advance_from(2, true, |_| true), ChainAction::Dismiss);
    }

    #[test]
    fn default_affordances_for_three_fields() {
        let chain = chain(vec![
            entry(1, 0.0, 0.0),
            entry(2, 0.0, 40.0),
            entry(3, 0.0, 80.0),
        ]);
        let assigned = chain.affordances(default_affordance);
        assert_eq!(
            assigned,
            vec![
                (1, Affordance::Advance),
                (2, Affordance::Advance),
                (3, Affordance::Finish),
            ]
        );
    }

    #[test]
    fn affordances_skip_multiline_but_count_it_for_is_last() {
        // The trailing control is multi-line, so no single-line control is
        // "last" and all of them advance.
        let chain = chain(vec![
            entry(1, 0.0, 0.0),
            entry(2, 0.0, 40.0),
            multiline(3, 0.0, 80.0),
        ]);
        let assigned = chain.affordances(default_affordance);
        assert_eq!(
            assigned,
            vec![(1, Affordance::Advance), (2, Affordance::Advance)]
        );
    }

    #[test]
    fn near_equal_y_falls_back_to_x_tie_break() {
        let mut left = entry(1, 10.0, 100.0);
        left.frame = Rect::new(10.0, 100.0 + 1e-12, 110.0, 130.0);
        let right = entry(2, 200.0, 100.0);
        let chain = chain(vec![right, left]);
        let ids: Vec<u32> = chain.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
