// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldwise Discovery: input-control discovery over a host view tree.
//!
//! The host UI framework owns the view hierarchy; this crate only needs a
//! narrow read-only window onto it, expressed by the [`ViewTree`] trait:
//! child enumeration, per-view [`ViewFlags`], and conversion of a view's
//! bounds into a single **common frame** (typically window or screen space)
//! so that views living in different nested coordinate systems can be
//! compared.
//!
//! [`discover`] walks a container's descendant tree depth-first and collects
//! every view flagged as a single-line or multi-line text input, however
//! deeply nested, producing non-owning [`InputEntry`] handles in tree order.
//! Spatial ordering is a separate concern (see `fieldwise_chain`).
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use fieldwise_discovery::{InputKind, ViewFlags, ViewTree, discover};
//!
//! // A toy host: node 0 is the container, node 1 a wrapper, node 2 a field.
//! struct Toy;
//! impl ViewTree for Toy {
//!     type Id = u32;
//!     fn children(&self, of: u32) -> Vec<u32> {
//!         match of {
//!             0 => vec![1],
//!             1 => vec![2],
//!             _ => vec![],
//!         }
//!     }
//!     fn flags(&self, id: u32) -> ViewFlags {
//!         if id == 2 {
//!             ViewFlags::SINGLE_LINE | ViewFlags::FOCUSABLE
//!         } else {
//!             ViewFlags::empty()
//!         }
//!     }
//!     fn frame_in_common(&self, id: u32) -> Option<Rect> {
//!         Some(Rect::new(0.0, 10.0 * f64::from(id), 100.0, 10.0 * f64::from(id) + 8.0))
//!     }
//! }
//!
//! let entries = discover(&Toy, 0);
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].id, 2);
//! assert_eq!(entries[0].kind, InputKind::SingleLine);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

bitflags::bitflags! {
    /// Classification flags the host reports for each view.
    ///
    /// Kind flags are mutually exclusive in practice; if a host reports both
    /// input kinds, single-line wins.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ViewFlags: u8 {
        /// A single-line text input (submits via an explicit "done" action).
        const SINGLE_LINE = 0b0000_0001;
        /// A multi-line text input (submits implicitly on loss of focus).
        const MULTI_LINE = 0b0000_0010;
        /// A scrolling list/table/grid region; background taps inside one
        /// must pass through rather than dismiss the overlay.
        const SCROLL_REGION = 0b0000_0100;
        /// The view can currently acquire focus.
        const FOCUSABLE = 0b0000_1000;
    }
}

impl ViewFlags {
    /// The input kind encoded in these flags, if any.
    pub fn input_kind(self) -> Option<InputKind> {
        if self.contains(Self::SINGLE_LINE) {
            Some(InputKind::SingleLine)
        } else if self.contains(Self::MULTI_LINE) {
            Some(InputKind::MultiLine)
        } else {
            None
        }
    }
}

/// Kind of a text-entry control, decided once at discovery time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// One line of text; carries a submit affordance ("next"/"done").
    SingleLine,
    /// Multiple lines of text; no submit affordance.
    MultiLine,
}

impl InputKind {
    /// How a control of this kind signals that editing finished.
    pub fn submit_style(self) -> SubmitStyle {
        match self {
            Self::SingleLine => SubmitStyle::ExplicitDone,
            Self::MultiLine => SubmitStyle::FocusLoss,
        }
    }
}

/// How a control reports the end of editing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SubmitStyle {
    /// An explicit "done"/"next" action on the control.
    ExplicitDone,
    /// Implicitly, when the control loses focus.
    FocusLoss,
}

/// A discovered input control.
///
/// `id` is a non-owning handle into the host's view tree; the host owns the
/// control's lifetime. Two controls with identical geometry and content are
/// still distinct because their handles differ.
#[derive(Clone, Debug)]
pub struct InputEntry<K> {
    /// Host handle for this control.
    pub id: K,
    /// Control kind, fixed at discovery.
    pub kind: InputKind,
    /// Bounds in the common frame at discovery time.
    pub frame: Rect,
    /// Whether the control reported itself focusable at discovery time.
    /// Treated as a hint; traversal re-probes the live value.
    pub can_acquire_focus: bool,
}

/// Read-only window onto the host's view hierarchy.
///
/// `Id` is any small copyable handle the host uses to identify views
/// (an arena index, a widget id, a pointer-derived token). Handle equality
/// is identity: the same view always maps to the same `Id` for the lifetime
/// of a session.
pub trait ViewTree {
    /// Host view handle.
    type Id: Copy + Eq;

    /// Direct children of `of`, in the host's tree order.
    fn children(&self, of: Self::Id) -> Vec<Self::Id>;

    /// Classification flags for `id`.
    fn flags(&self, id: Self::Id) -> ViewFlags;

    /// `id`'s bounds converted into the common frame, or `None` when the
    /// view is not currently part of a hierarchy with a common frame.
    fn frame_in_common(&self, id: Self::Id) -> Option<Rect>;
}

/// Collect every input control among `container`'s descendants, in tree
/// order.
///
/// The walk recurses into non-matching views at any depth. A view that is
/// itself an input is collected and not descended into. Views whose
/// common-frame conversion fails are skipped silently; no visibility or
/// enabled-state filtering is applied.
pub fn discover<T: ViewTree>(tree: &T, container: T::Id) -> Vec<InputEntry<T::Id>> {
    let mut entries = Vec::new();
    collect_inputs(tree, container, &mut entries);
    entries
}

fn collect_inputs<T: ViewTree>(tree: &T, view: T::Id, out: &mut Vec<InputEntry<T::Id>>) {
    for child in tree.children(view) {
        let flags = tree.flags(child);
        match flags.input_kind() {
            Some(kind) => {
                let Some(frame) = tree.frame_in_common(child) else {
                    continue;
                };
                out.push(InputEntry {
                    id: child,
                    kind,
                    frame,
                    can_acquire_focus: flags.contains(ViewFlags::FOCUSABLE),
                });
            }
            None => collect_inputs(tree, child, out),
        }
    }
}

/// Common-frame rects of every scroll region among `container`'s
/// descendants.
///
/// A matching region is not descended into; nested lists are covered by
/// their outermost rect.
pub fn scroll_regions<T: ViewTree>(tree: &T, container: T::Id) -> Vec<Rect> {
    let mut rects = Vec::new();
    collect_scroll_regions(tree, container, &mut rects);
    rects
}

fn collect_scroll_regions<T: ViewTree>(tree: &T, view: T::Id, out: &mut Vec<Rect>) {
    for child in tree.children(view) {
        if tree.flags(child).contains(ViewFlags::SCROLL_REGION) {
            if let Some(frame) = tree.frame_in_common(child) {
                out.push(frame);
            }
        } else {
            collect_scroll_regions(tree, child, out);
        }
    }
}
