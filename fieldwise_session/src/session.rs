// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The session coordinator.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

use fieldwise_chain::{Affordance, ChainAction, FocusChain, default_affordance};
use fieldwise_discovery::{SubmitStyle, ViewTree, discover, scroll_regions};
use fieldwise_viewport::{CommandBatch, ContainerMetrics, ViewportController};

use crate::config::SessionConfig;
use crate::events::{OverlayTransition, SessionEvent};
use crate::host::{ContainerOps, ControlOps, HookRegistrar};

type Provider = Box<dyn Fn(usize, bool) -> Affordance>;

/// Coordinator for one container's input controls.
///
/// Owns the focus chain, the viewport controller, the captured overlay
/// state, and the observer ledger. The host is borrowed per call; control
/// and container lifetime stays with the host.
///
/// All operations are synchronous and run on the host's UI thread; none of
/// them block or wait for animations. A new overlay-shown event simply
/// supersedes the previously captured overlay state.
pub struct Session<K> {
    container: K,
    config: SessionConfig,
    chain: FocusChain<K>,
    viewport: ViewportController,
    overlay: Option<OverlayTransition>,
    scroll_regions: Vec<Rect>,
    ledger: HashMap<K, SubmitStyle>,
    provider: Provider,
    original_frame: Option<Rect>,
}

impl<K: core::fmt::Debug + Copy + Eq> core::fmt::Debug for Session<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("container", &self.container)
            .field("config", &self.config)
            .field("chain_len", &self.chain.len())
            .field("viewport", &self.viewport)
            .field("overlay", &self.overlay)
            .finish_non_exhaustive()
    }
}

impl<K> Session<K>
where
    K: Copy + Eq + Hash,
{
    /// Configure a session against `container`: discover its input
    /// controls, build the sorted chain, register editing observers, apply
    /// affordances, and select the viewport controller for the container
    /// kind.
    pub fn configure<H>(container: K, config: SessionConfig, host: &mut H) -> Self
    where
        H: ViewTree<Id = K> + ControlOps<K> + ContainerOps<K> + HookRegistrar<K>,
    {
        let mut session = Self {
            container,
            config,
            chain: FocusChain::new(),
            viewport: ViewportController::for_container(host.is_scrollable(container)),
            overlay: None,
            scroll_regions: Vec::new(),
            ledger: HashMap::new(),
            provider: Box::new(default_affordance),
            original_frame: None,
        };
        session.attach(host);
        session
    }

    /// Tear down every observer registration and rebuild the session from a
    /// fresh discovery pass.
    pub fn reload<H>(&mut self, host: &mut H)
    where
        H: ViewTree<Id = K> + ControlOps<K> + ContainerOps<K> + HookRegistrar<K>,
    {
        self.detach(host);
        self.viewport = ViewportController::for_container(host.is_scrollable(self.container));
        self.attach(host);
    }

    /// Deregister all observers and clear the chain. The session can be
    /// dropped afterwards without leaving observers behind in the host.
    pub fn teardown<H: HookRegistrar<K>>(&mut self, host: &mut H) {
        self.detach(host);
    }

    /// Handle one external event.
    pub fn handle<H>(&mut self, event: SessionEvent<K>, host: &mut H)
    where
        H: ViewTree<Id = K> + ControlOps<K> + ContainerOps<K> + HookRegistrar<K>,
    {
        match event {
            SessionEvent::OverlayShown(payload) => {
                // A payload without geometry is malformed: ignore the event,
                // keep the previous snapshot.
                let Some(snapshot) = OverlayTransition::from_payload(&payload) else {
                    return;
                };
                self.overlay = Some(snapshot);
                self.reposition(host);
            }
            SessionEvent::OverlayHidden => {
                let transition = self
                    .overlay
                    .take()
                    .map(|o| o.transition)
                    .unwrap_or_default();
                let command = self.viewport.on_overlay_hidden();
                host.apply(
                    self.container,
                    &CommandBatch {
                        commands: vec![command],
                        transition,
                    },
                );
            }
            SessionEvent::Submitted(control) | SessionEvent::FocusLost(control) => {
                self.advance(control, host);
            }
            SessionEvent::BackgroundTap(point) => {
                if self.config.dismiss_on_background_tap && self.tap_should_begin(point) {
                    self.dismiss_overlay(host);
                }
            }
        }
    }

    /// Resign focus on every currently focused control. Safe when nothing
    /// is focused.
    pub fn dismiss_overlay<H: ControlOps<K>>(&self, host: &mut H) {
        for entry in self.chain.entries() {
            if host.has_focus(entry.id) {
                host.resign_focus(entry.id);
            }
        }
    }

    /// Reset every control's content to empty, focused or not.
    pub fn clear_all<H: ControlOps<K>>(&self, host: &mut H) {
        for entry in self.chain.entries() {
            host.clear_content(entry.id);
        }
    }

    /// The control currently holding focus, if any.
    pub fn active_control<H: ControlOps<K>>(&self, host: &H) -> Option<K> {
        self.chain
            .entries()
            .iter()
            .map(|e| e.id)
            .find(|&id| host.has_focus(id))
    }

    /// Replace the affordance provider and re-apply affordances.
    ///
    /// Ignored when automatic affordance assignment is disabled.
    pub fn set_affordance_provider<H: ControlOps<K>>(
        &mut self,
        provider: impl Fn(usize, bool) -> Affordance + 'static,
        host: &mut H,
    ) {
        if !self.config.auto_assign_submit_affordance {
            return;
        }
        self.provider = Box::new(provider);
        self.apply_affordances(host);
    }

    /// Gesture policy: whether a single tap at `point` (common frame) should
    /// be recognized as a background tap. Taps inside a scroll region yield
    /// so lists keep scrolling and selecting normally.
    pub fn tap_should_begin(&self, point: Point) -> bool {
        !self.scroll_regions.iter().any(|r| r.contains(point))
    }

    /// The sorted focus chain.
    pub fn chain(&self) -> &FocusChain<K> {
        &self.chain
    }

    /// The session's container handle.
    pub fn container(&self) -> K {
        self.container
    }

    /// The configuration fixed at configure time.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The container's frame captured at configure time, for hosts that
    /// restore a fixed container by frame rather than by transform.
    pub fn original_frame(&self) -> Option<Rect> {
        self.original_frame
    }

    fn attach<H>(&mut self, host: &mut H)
    where
        H: ViewTree<Id = K> + ControlOps<K> + ContainerOps<K> + HookRegistrar<K>,
    {
        self.original_frame = host.frame_in_common(self.container);
        let entries = discover(host, self.container);
        for entry in &entries {
            let style = entry.kind.submit_style();
            match style {
                SubmitStyle::ExplicitDone => host.observe_submit(entry.id),
                SubmitStyle::FocusLoss => host.observe_focus_loss(entry.id),
            }
            self.ledger.insert(entry.id, style);
        }
        self.scroll_regions = scroll_regions(host, self.container);
        self.chain.rebuild(entries);
        if self.config.auto_assign_submit_affordance {
            self.apply_affordances(host);
        }
    }

    fn detach<H: HookRegistrar<K>>(&mut self, host: &mut H) {
        // Drain before deregistering so a re-entrant reload observes an
        // empty ledger and cannot remove an observer twice.
        let registered: Vec<K> = self.ledger.drain().map(|(id, _)| id).collect();
        for id in registered {
            host.remove_observers(id);
        }
        self.chain.clear();
        self.scroll_regions.clear();
    }

    fn apply_affordances<H: ControlOps<K>>(&self, host: &mut H) {
        for (id, affordance) in self.chain.affordances(|i, last| (self.provider)(i, last)) {
            host.set_affordance(id, affordance);
        }
    }

    fn advance<H: ControlOps<K>>(&mut self, from: K, host: &mut H) {
        let action = self.chain.advance_from(from, self.config.auto_advance_on_submit, |id| {
            host.can_acquire_focus(id)
        });
        match action {
            ChainAction::Focus(next) => host.acquire_focus(next),
            ChainAction::Dismiss => self.dismiss_overlay(host),
        }
    }

    /// Apply the inset and then reveal the active control, in that order:
    /// the reveal computation depends on the layout after the inset.
    fn reposition<H>(&mut self, host: &mut H)
    where
        H: ViewTree<Id = K> + ControlOps<K> + ContainerOps<K>,
    {
        let Some(overlay) = self.overlay else { return };
        let Some(metrics) = self.metrics(host) else { return };
        let clearance = self.config.clearance_above_overlay;

        let mut commands = Vec::new();
        if let Some(cmd) = self.viewport.on_overlay_shown(&overlay.rect, &metrics, clearance) {
            commands.push(cmd);
        }
        if let Some(active) = self.active_control(host)
            && let Some(frame) = host.frame_in_common(active)
            && let Some(cmd) = self
                .viewport
                .move_to_active(&frame, &overlay.rect, &metrics, clearance)
        {
            commands.push(cmd);
        }
        if commands.is_empty() {
            return;
        }
        host.apply(
            self.container,
            &CommandBatch {
                commands,
                transition: overlay.transition,
            },
        );
    }

    fn metrics<H>(&self, host: &H) -> Option<ContainerMetrics>
    where
        H: ViewTree<Id = K> + ContainerOps<K>,
    {
        let container = host.frame_in_common(self.container)?;
        Some(ContainerMetrics {
            container,
            screen: host.screen_bounds(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RawOverlayPayload;
    use alloc::string::String;
    use fieldwise_discovery::ViewFlags;
    use fieldwise_viewport::{CurveToken, RepositionCommand, Transition};
    use kurbo::Vec2;

    const SCREEN: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);
    const OVERLAY: Rect = Rect::new(0.0, 500.0, 400.0, 800.0);

    struct MockHost {
        children: Vec<Vec<usize>>,
        flags: Vec<ViewFlags>,
        frames: Vec<Option<Rect>>,
        scrollable: bool,
        focused: Option<usize>,
        contents: Vec<String>,
        affordances: Vec<Option<Affordance>>,
        observed: Vec<usize>,
        removed: Vec<usize>,
        batches: Vec<CommandBatch>,
        acquire_calls: usize,
    }

    impl MockHost {
        fn new(scrollable: bool) -> Self {
            let mut host = Self {
                children: Vec::new(),
                flags: Vec::new(),
                frames: Vec::new(),
                scrollable,
                focused: None,
                contents: Vec::new(),
                affordances: Vec::new(),
                observed: Vec::new(),
                removed: Vec::new(),
                batches: Vec::new(),
                acquire_calls: 0,
            };
            // Node 0 is the container.
            host.node(None, ViewFlags::empty(), Some(Rect::new(0.0, 0.0, 400.0, 800.0)));
            host
        }

        fn node(&mut self, parent: Option<usize>, flags: ViewFlags, frame: Option<Rect>) -> usize {
            let id = self.children.len();
            self.children.push(Vec::new());
            self.flags.push(flags);
            self.frames.push(frame);
            self.contents.push(String::from("text"));
            self.affordances.push(None);
            if let Some(p) = parent {
                self.children[p].push(id);
            }
            id
        }

        fn field(&mut self, parent: usize, y: f64) -> usize {
            self.node(
                Some(parent),
                ViewFlags::SINGLE_LINE | ViewFlags::FOCUSABLE,
                Some(Rect::new(20.0, y, 380.0, y + 40.0)),
            )
        }

        fn text_area(&mut self, parent: usize, y: f64) -> usize {
            self.node(
                Some(parent),
                ViewFlags::MULTI_LINE | ViewFlags::FOCUSABLE,
                Some(Rect::new(20.0, y, 380.0, y + 120.0)),
            )
        }
    }

    impl ViewTree for MockHost {
        type Id = usize;

        fn children(&self, of: usize) -> Vec<usize> {
            self.children[of].clone()
        }

        fn flags(&self, id: usize) -> ViewFlags {
            self.flags[id]
        }

        fn frame_in_common(&self, id: usize) -> Option<Rect> {
            self.frames[id]
        }
    }

    impl ControlOps<usize> for MockHost {
        fn acquire_focus(&mut self, control: usize) {
            self.acquire_calls += 1;
            self.focused = Some(control);
        }

        fn resign_focus(&mut self, control: usize) {
            if self.focused == Some(control) {
                self.focused = None;
            }
        }

        fn has_focus(&self, control: usize) -> bool {
            self.focused == Some(control)
        }

        fn can_acquire_focus(&self, control: usize) -> bool {
            self.flags[control].contains(ViewFlags::FOCUSABLE)
        }

        fn set_affordance(&mut self, control: usize, affordance: Affordance) {
            self.affordances[control] = Some(affordance);
        }

        fn clear_content(&mut self, control: usize) {
            self.contents[control].clear();
        }
    }

    impl ContainerOps<usize> for MockHost {
        fn is_scrollable(&self, _container: usize) -> bool {
            self.scrollable
        }

        fn screen_bounds(&self) -> Rect {
            SCREEN
        }

        fn apply(&mut self, _container: usize, batch: &CommandBatch) {
            self.batches.push(batch.clone());
        }
    }

    impl HookRegistrar<usize> for MockHost {
        fn observe_submit(&mut self, control: usize) {
            self.observed.push(control);
        }

        fn observe_focus_loss(&mut self, control: usize) {
            self.observed.push(control);
        }

        fn remove_observers(&mut self, control: usize) {
            self.removed.push(control);
            self.observed.retain(|&c| c != control);
        }
    }

    fn shown_payload() -> RawOverlayPayload {
        RawOverlayPayload {
            frame: Some(OVERLAY),
            duration: Some(0.25),
            curve: Some(7),
        }
    }

    /// Container with three fields discovered out of spatial order.
    fn three_fields(host: &mut MockHost) -> (usize, usize, usize) {
        let c = host.field(0, 300.0);
        let a = host.field(0, 100.0);
        let b = host.field(0, 200.0);
        (a, b, c)
    }

    #[test]
    fn configure_builds_sorted_chain_and_registers_hooks() {
        let mut host = MockHost::new(true);
        let (a, b, c) = three_fields(&mut host);
        let session = Session::configure(0, SessionConfig::default(), &mut host);

        let ids: Vec<usize> = session.chain().entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(host.observed.len(), 3);
        assert_eq!(host.affordances[a], Some(Affordance::Advance));
        assert_eq!(host.affordances[b], Some(Affordance::Advance));
        assert_eq!(host.affordances[c], Some(Affordance::Finish));
    }

    #[test]
    fn reload_round_trip_preserves_chain_and_observers() {
        let mut host = MockHost::new(true);
        let (a, b, c) = three_fields(&mut host);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);
        let before: Vec<usize> = session.chain().entries().iter().map(|e| e.id).collect();

        session.reload(&mut host);

        let after: Vec<usize> = session.chain().entries().iter().map(|e| e.id).collect();
        assert_eq!(before, after);
        assert_eq!(after, vec![a, b, c]);
        // Every original registration was removed before re-registering.
        assert_eq!(host.removed.len(), 3);
        assert_eq!(host.observed.len(), 3);
    }

    #[test]
    fn overlay_shown_applies_inset_then_reveal() {
        let mut host = MockHost::new(true);
        let (a, _, _) = three_fields(&mut host);
        host.focused = Some(a);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);

        session.handle(SessionEvent::OverlayShown(shown_payload()), &mut host);

        assert_eq!(host.batches.len(), 1);
        let batch = &host.batches[0];
        assert_eq!(
            batch.commands,
            vec![
                RepositionCommand::SetBottomInset(320.0),
                RepositionCommand::RevealRect(Rect::new(20.0, 100.0, 380.0, 160.0)),
            ]
        );
        assert_eq!(
            batch.transition,
            Transition {
                duration: 0.25,
                curve: CurveToken(7),
            }
        );
    }

    #[test]
    fn overlay_shown_without_active_control_only_insets() {
        let mut host = MockHost::new(true);
        three_fields(&mut host);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);

        session.handle(SessionEvent::OverlayShown(shown_payload()), &mut host);

        assert_eq!(
            host.batches[0].commands,
            vec![RepositionCommand::SetBottomInset(320.0)]
        );
    }

    #[test]
    fn malformed_overlay_payload_is_ignored() {
        let mut host = MockHost::new(true);
        three_fields(&mut host);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);

        let payload = RawOverlayPayload {
            frame: None,
            duration: Some(0.25),
            curve: Some(7),
        };
        session.handle(SessionEvent::OverlayShown(payload), &mut host);

        assert!(host.batches.is_empty());
    }

    #[test]
    fn overlay_hidden_restores_inset_with_last_transition() {
        let mut host = MockHost::new(true);
        three_fields(&mut host);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);

        session.handle(SessionEvent::OverlayShown(shown_payload()), &mut host);
        session.handle(SessionEvent::OverlayHidden, &mut host);

        let batch = host.batches.last().unwrap();
        assert_eq!(batch.commands, vec![RepositionCommand::SetBottomInset(0.0)]);
        assert_eq!(batch.transition.duration, 0.25);
    }

    #[test]
    fn fixed_container_translates_for_covered_control() {
        let mut host = MockHost::new(false);
        // Bottom edge at 460 + clearance 20 = 480 < 500: visible, no move.
        let high = host.field(0, 420.0);
        // Bottom edge at 660 + clearance 20 = 680 > 500: 180 too low.
        let low = host.field(0, 620.0);
        host.focused = Some(low);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);

        session.handle(SessionEvent::OverlayShown(shown_payload()), &mut host);
        assert_eq!(
            host.batches[0].commands,
            vec![RepositionCommand::SetTranslation(Vec2::new(0.0, -180.0))]
        );

        // With the high control focused instead, nothing needs to move, so
        // the shown event produces no batch at all for a fixed container.
        host.batches.clear();
        host.focused = Some(high);
        let mut session2 = Session::configure(0, SessionConfig::default(), &mut host);
        session2.handle(SessionEvent::OverlayShown(shown_payload()), &mut host);
        assert!(host.batches.is_empty());
    }

    #[test]
    fn submit_advances_to_next_field_in_spatial_order() {
        let mut host = MockHost::new(true);
        let (a, b, _) = three_fields(&mut host);
        host.focused = Some(a);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);

        session.handle(SessionEvent::Submitted(a), &mut host);
        assert_eq!(host.focused, Some(b));
        assert_eq!(host.acquire_calls, 1);
    }

    #[test]
    fn submit_on_last_field_dismisses_exactly_once() {
        let mut host = MockHost::new(true);
        let (_, _, c) = three_fields(&mut host);
        host.focused = Some(c);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);

        session.handle(SessionEvent::Submitted(c), &mut host);
        assert_eq!(host.focused, None);
        assert_eq!(host.acquire_calls, 0, "no focus request past the end");
    }

    #[test]
    fn submit_with_auto_advance_disabled_dismisses() {
        let mut host = MockHost::new(true);
        let (a, _, _) = three_fields(&mut host);
        host.focused = Some(a);
        let config = SessionConfig {
            auto_advance_on_submit: false,
            ..SessionConfig::default()
        };
        let mut session = Session::configure(0, config, &mut host);

        session.handle(SessionEvent::Submitted(a), &mut host);
        assert_eq!(host.focused, None);
        assert_eq!(host.acquire_calls, 0);
    }

    #[test]
    fn focus_loss_on_text_area_advances() {
        let mut host = MockHost::new(true);
        let area = host.text_area(0, 100.0);
        let field = host.field(0, 300.0);
        host.focused = Some(area);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);

        session.handle(SessionEvent::FocusLost(area), &mut host);
        assert_eq!(host.focused, Some(field));
    }

    #[test]
    fn advance_skips_fields_that_cannot_focus() {
        let mut host = MockHost::new(true);
        let (a, b, c) = three_fields(&mut host);
        host.flags[b].remove(ViewFlags::FOCUSABLE);
        host.focused = Some(a);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);

        session.handle(SessionEvent::Submitted(a), &mut host);
        assert_eq!(host.focused, Some(c));
    }

    #[test]
    fn background_tap_dismisses_unless_inside_a_scroll_region() {
        let mut host = MockHost::new(true);
        let list = Rect::new(0.0, 600.0, 400.0, 760.0);
        host.node(Some(0), ViewFlags::SCROLL_REGION, Some(list));
        let (a, _, _) = three_fields(&mut host);
        host.focused = Some(a);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);

        assert!(!session.tap_should_begin(Point::new(200.0, 700.0)));
        session.handle(SessionEvent::BackgroundTap(Point::new(200.0, 700.0)), &mut host);
        assert_eq!(host.focused, Some(a), "tap inside a list yields");

        assert!(session.tap_should_begin(Point::new(200.0, 50.0)));
        session.handle(SessionEvent::BackgroundTap(Point::new(200.0, 50.0)), &mut host);
        assert_eq!(host.focused, None);
    }

    #[test]
    fn background_tap_is_inert_when_disabled() {
        let mut host = MockHost::new(true);
        let (a, _, _) = three_fields(&mut host);
        host.focused = Some(a);
        let config = SessionConfig {
            dismiss_on_background_tap: false,
            ..SessionConfig::default()
        };
        let mut session = Session::configure(0, config, &mut host);

        session.handle(SessionEvent::BackgroundTap(Point::new(200.0, 50.0)), &mut host);
        assert_eq!(host.focused, Some(a));
    }

    #[test]
    fn dismiss_overlay_with_nothing_focused_is_a_no_op() {
        let mut host = MockHost::new(true);
        three_fields(&mut host);
        let session = Session::configure(0, SessionConfig::default(), &mut host);

        session.dismiss_overlay(&mut host);
        assert_eq!(host.focused, None);
    }

    #[test]
    fn clear_all_empties_every_control() {
        let mut host = MockHost::new(true);
        let (a, b, c) = three_fields(&mut host);
        host.focused = Some(b);
        let session = Session::configure(0, SessionConfig::default(), &mut host);

        session.clear_all(&mut host);
        for id in [a, b, c] {
            assert!(host.contents[id].is_empty());
        }
        assert_eq!(host.focused, Some(b), "clearing does not touch focus");
    }

    #[test]
    fn active_control_queries_the_host() {
        let mut host = MockHost::new(true);
        let (_, b, _) = three_fields(&mut host);
        let session = Session::configure(0, SessionConfig::default(), &mut host);

        assert_eq!(session.active_control(&host), None);
        host.focused = Some(b);
        assert_eq!(session.active_control(&host), Some(b));
    }

    #[test]
    fn custom_provider_reapplies_affordances() {
        let mut host = MockHost::new(true);
        let (a, b, c) = three_fields(&mut host);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);

        session.set_affordance_provider(|_, _| Affordance::Finish, &mut host);
        for id in [a, b, c] {
            assert_eq!(host.affordances[id], Some(Affordance::Finish));
        }
    }

    #[test]
    fn provider_is_rejected_when_auto_assignment_is_disabled() {
        let mut host = MockHost::new(true);
        let (a, _, _) = three_fields(&mut host);
        let config = SessionConfig {
            auto_assign_submit_affordance: false,
            ..SessionConfig::default()
        };
        let mut session = Session::configure(0, config, &mut host);
        assert_eq!(host.affordances[a], None);

        session.set_affordance_provider(|_, _| Affordance::Finish, &mut host);
        assert_eq!(host.affordances[a], None);
    }

    #[test]
    fn teardown_removes_every_observer() {
        let mut host = MockHost::new(true);
        three_fields(&mut host);
        let mut session = Session::configure(0, SessionConfig::default(), &mut host);

        session.teardown(&mut host);
        assert!(host.observed.is_empty());
        assert!(session.chain().is_empty());
    }

    #[test]
    fn original_frame_is_snapshot_at_configure() {
        let mut host = MockHost::new(false);
        three_fields(&mut host);
        let session = Session::configure(0, SessionConfig::default(), &mut host);
        assert_eq!(session.original_frame(), Some(Rect::new(0.0, 0.0, 400.0, 800.0)));
    }
}
