// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end walkthrough: a signup form above an on-screen keyboard.
//!
//! This example shows the full session lifecycle against `DemoHost`:
//! discovery and spatial ordering, affordance assignment, keyboard-driven
//! repositioning, focus advancement across fields, and exact restoration
//! when the keyboard goes away.
//!
//! Run:
//! - `cargo run -p fieldwise_demos --example form_session`

use fieldwise_demos::DemoHost;
use fieldwise_discovery::ViewFlags;
use fieldwise_geometry::uncovered_height;
use fieldwise_session::{RawOverlayPayload, Session, SessionConfig, SessionEvent};
use kurbo::{Point, Rect};

fn main() {
    let screen = Rect::new(0.0, 0.0, 400.0, 800.0);
    let mut host = DemoHost::new(true, screen);

    // Build the form out of spatial order on purpose; the chain sorts it.
    let field = ViewFlags::SINGLE_LINE | ViewFlags::FOCUSABLE;
    let email = host.add(0, "email", field, Rect::new(20.0, 180.0, 380.0, 220.0));
    let name = host.add(0, "name", field, Rect::new(20.0, 100.0, 380.0, 140.0));
    let notes = host.add(
        0,
        "notes",
        ViewFlags::MULTI_LINE | ViewFlags::FOCUSABLE,
        Rect::new(20.0, 260.0, 380.0, 420.0),
    );
    let country = host.add(0, "country", field, Rect::new(20.0, 460.0, 380.0, 500.0));
    let picker = host.add(
        0,
        "country picker",
        ViewFlags::SCROLL_REGION,
        Rect::new(20.0, 520.0, 380.0, 700.0),
    );
    let _ = (notes, picker);

    println!("== configure ==");
    let mut session = Session::configure(0, SessionConfig::default(), &mut host);
    print!("chain order:");
    for entry in session.chain().entries() {
        print!(" {}", host.label(entry.id));
    }
    println!();
    for entry in session.chain().entries() {
        if let Some(affordance) = host.affordance(entry.id) {
            println!("  {} shows {affordance:?}", host.label(entry.id));
        }
    }

    println!("\n== keyboard appears while editing the country field ==");
    host.focus(country);
    let keyboard = Rect::new(0.0, 500.0, 400.0, 800.0);
    println!(
        "screen space left above the keyboard: {}",
        uncovered_height(&screen, &keyboard),
    );
    let payload = RawOverlayPayload {
        frame: Some(keyboard),
        duration: Some(0.25),
        curve: Some(7),
    };
    session.handle(SessionEvent::OverlayShown(payload), &mut host);

    println!("\n== submitting advances along the chain ==");
    host.focus(name);
    session.handle(SessionEvent::Submitted(name), &mut host);
    assert_eq!(host.focused(), Some(email));
    session.handle(SessionEvent::Submitted(email), &mut host);

    println!("\n== a tap on the country picker passes through ==");
    let inside_picker = Point::new(200.0, 600.0);
    println!(
        "tap at {inside_picker:?} begins dismissal: {}",
        session.tap_should_begin(inside_picker),
    );

    println!("\n== keyboard hides; the container is restored exactly ==");
    session.handle(SessionEvent::OverlayHidden, &mut host);
    assert_eq!(host.bottom_inset, 0.0);

    println!("\n== clear and tear down ==");
    session.clear_all(&mut host);
    assert!(host.content(name).is_empty());
    session.teardown(&mut host);
}
