// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small in-memory host used by the runnable demos.
//!
//! `DemoHost` stands in for a real UI framework: it owns a flat arena of
//! views, tracks which control is focused, and executes repositioning
//! commands by mutating a recorded inset/translation and printing what a
//! real host would animate.

use fieldwise_chain::Affordance;
use fieldwise_discovery::{ViewFlags, ViewTree};
use fieldwise_session::{ContainerOps, ControlOps, HookRegistrar};
use fieldwise_viewport::{CommandBatch, RepositionCommand};
use kurbo::{Rect, Vec2};

struct Node {
    label: &'static str,
    children: Vec<usize>,
    flags: ViewFlags,
    frame: Option<Rect>,
    content: String,
    affordance: Option<Affordance>,
}

/// In-memory stand-in for a host UI framework. Node 0 is the container.
pub struct DemoHost {
    nodes: Vec<Node>,
    scrollable: bool,
    screen: Rect,
    focused: Option<usize>,
    /// Bottom content inset a real scroll view would carry.
    pub bottom_inset: f64,
    /// Frame translation a real fixed container would carry.
    pub translation: Vec2,
}

impl DemoHost {
    /// New host with an empty container covering the given screen.
    pub fn new(scrollable: bool, screen: Rect) -> Self {
        Self {
            nodes: vec![Node {
                label: "container",
                children: Vec::new(),
                flags: ViewFlags::empty(),
                frame: Some(screen),
                content: String::new(),
                affordance: None,
            }],
            scrollable,
            screen,
            focused: None,
            bottom_inset: 0.0,
            translation: Vec2::ZERO,
        }
    }

    /// Add a view under `parent` and return its handle.
    pub fn add(
        &mut self,
        parent: usize,
        label: &'static str,
        flags: ViewFlags,
        frame: Rect,
    ) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            label,
            children: Vec::new(),
            flags,
            frame: Some(frame),
            content: String::from("lorem"),
            affordance: None,
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Display label for a view handle.
    pub fn label(&self, id: usize) -> &'static str {
        self.nodes[id].label
    }

    /// The affordance last assigned to a control.
    pub fn affordance(&self, id: usize) -> Option<Affordance> {
        self.nodes[id].affordance
    }

    /// The control currently focused, if any.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Give a control focus directly, as a user tap on it would.
    pub fn focus(&mut self, id: usize) {
        self.focused = Some(id);
    }

    /// A control's content.
    pub fn content(&self, id: usize) -> &str {
        &self.nodes[id].content
    }
}

impl ViewTree for DemoHost {
    type Id = usize;

    fn children(&self, of: usize) -> Vec<usize> {
        self.nodes[of].children.clone()
    }

    fn flags(&self, id: usize) -> ViewFlags {
        self.nodes[id].flags
    }

    fn frame_in_common(&self, id: usize) -> Option<Rect> {
        self.nodes[id].frame
    }
}

impl ControlOps<usize> for DemoHost {
    fn acquire_focus(&mut self, control: usize) {
        println!("  host: focus -> {}", self.nodes[control].label);
        self.focused = Some(control);
    }

    fn resign_focus(&mut self, control: usize) {
        if self.focused == Some(control) {
            println!("  host: {} resigns focus", self.nodes[control].label);
            self.focused = None;
        }
    }

    fn has_focus(&self, control: usize) -> bool {
        self.focused == Some(control)
    }

    fn can_acquire_focus(&self, control: usize) -> bool {
        self.nodes[control].flags.contains(ViewFlags::FOCUSABLE)
    }

    fn set_affordance(&mut self, control: usize, affordance: Affordance) {
        self.nodes[control].affordance = Some(affordance);
    }

    fn clear_content(&mut self, control: usize) {
        self.nodes[control].content.clear();
    }
}

impl ContainerOps<usize> for DemoHost {
    fn is_scrollable(&self, _container: usize) -> bool {
        self.scrollable
    }

    fn screen_bounds(&self) -> Rect {
        self.screen
    }

    fn apply(&mut self, _container: usize, batch: &CommandBatch) {
        for command in &batch.commands {
            match *command {
                RepositionCommand::SetBottomInset(inset) => {
                    println!(
                        "  host: bottom inset {} -> {} ({}s, curve {:?})",
                        self.bottom_inset, inset, batch.transition.duration, batch.transition.curve,
                    );
                    self.bottom_inset = inset;
                }
                RepositionCommand::RevealRect(rect) => {
                    println!("  host: scroll minimally to reveal {rect:?}");
                }
                RepositionCommand::SetTranslation(offset) => {
                    println!("  host: translate container by {offset:?}");
                    self.translation = offset;
                }
                RepositionCommand::ClearTranslation => {
                    println!("  host: restore container frame");
                    self.translation = Vec2::ZERO;
                }
            }
        }
    }
}

impl HookRegistrar<usize> for DemoHost {
    fn observe_submit(&mut self, control: usize) {
        println!("  host: observing submit on {}", self.nodes[control].label);
    }

    fn observe_focus_loss(&mut self, control: usize) {
        println!("  host: observing focus loss on {}", self.nodes[control].label);
    }

    fn remove_observers(&mut self, control: usize) {
        println!("  host: removed observers on {}", self.nodes[control].label);
    }
}
