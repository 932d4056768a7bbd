// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event routing through the dispatcher.

use pretty_assertions::assert_eq;
use tether_core::trace::{EventKind, ForwardEvent};
use tether_core::{
    ContextId, Delivery, InputObserver, LayoutObserver, LayoutPolicy, LayoutRect, RedrawObserver,
    Screen, ScreenConfig, SurfaceObserver,
};
use tether_debug::{
    CallJournal, EventLog, FakeAssets, FakeInput, FakeSurface, FakeWindow, NativeCall,
    RecordingEngine, TraceEvent,
};

type TestScreen = Screen<RecordingEngine, FakeSurface>;

fn bound(
    engine: RecordingEngine,
    config: ScreenConfig,
) -> (TestScreen, FakeSurface, ContextId, CallJournal) {
    let journal = engine.journal();
    let mut screen = TestScreen::new(engine, config);
    let h = screen.initialize(&FakeAssets).unwrap();
    let s = FakeSurface::new(1);
    screen.set_surface(Some(s.clone()));
    journal.take();
    (screen, s, h, journal)
}

fn paint(context: ContextId, force: bool) -> NativeCall {
    NativeCall::RequestPaint { context, force }
}

#[test]
fn redraw_needed_forces_and_draw_does_not() {
    let (mut screen, s, h, journal) = bound(RecordingEngine::new(), ScreenConfig::new("demo"));

    assert_eq!(screen.dispatcher().redraw_needed(&s), Delivery::Forwarded);
    assert_eq!(journal.take(), vec![paint(h, true)]);

    assert_eq!(screen.dispatcher().draw(&s), Delivery::Forwarded);
    assert_eq!(journal.take(), vec![paint(h, false)]);
}

#[test]
fn surface_lifecycle_reaches_engine() {
    let (mut screen, s, h, journal) = bound(RecordingEngine::new(), ScreenConfig::new("demo"));

    s.produce_window();
    let mut d = screen.dispatcher();
    assert_eq!(d.surface_created(&s), Delivery::Forwarded);
    assert_eq!(d.surface_changed(&s), Delivery::Forwarded);
    s.lose_window();
    assert_eq!(d.surface_destroyed(&s), Delivery::Forwarded);

    assert_eq!(
        journal.take(),
        vec![
            NativeCall::SurfaceChanged(h, Some(FakeWindow(1))),
            NativeCall::SurfaceChanged(h, Some(FakeWindow(1))),
            NativeCall::SurfaceChanged(h, None),
        ]
    );
}

#[test]
fn input_returns_engine_verdict() {
    let (mut screen, s, h, journal) = bound(
        RecordingEngine::new().consuming_input(false),
        ScreenConfig::new("demo"),
    );
    assert!(!screen.dispatcher().input_event(&s, &FakeInput(9)));
    assert_eq!(journal.take(), vec![NativeCall::InputEvent(h, FakeInput(9))]);

    let (mut screen, s, _, _) = bound(RecordingEngine::new(), ScreenConfig::new("demo"));
    assert!(screen.dispatcher().input_event(&s, &FakeInput(9)));
}

#[test]
fn events_from_unbound_surface_are_dropped() {
    let (mut screen, s, _, journal) = bound(RecordingEngine::new(), ScreenConfig::new("demo"));
    let stale = FakeSurface::with_window(2);

    let mut d = screen.dispatcher();
    assert_eq!(
        d.layout_changed(&stale, LayoutRect::new(0, 0, 10, 10)),
        Delivery::NotBound
    );
    assert_eq!(d.surface_created(&stale), Delivery::NotBound);
    assert_eq!(d.redraw_needed(&stale), Delivery::NotBound);
    assert!(!d.input_event(&stale, &FakeInput(1)));
    assert!(journal.is_empty());

    screen.set_surface(None);
    journal.take();
    let mut d = screen.dispatcher();
    assert_eq!(d.draw(&s), Delivery::NotBound);
    assert_eq!(d.surface_destroyed(&s), Delivery::NotBound);
    assert!(journal.is_empty());
}

#[test]
fn layout_always_forwards_duplicates() {
    let (mut screen, s, h, journal) = bound(RecordingEngine::new(), ScreenConfig::new("demo"));
    let r = LayoutRect::new(0, 0, 800, 600);

    let mut d = screen.dispatcher();
    assert_eq!(d.layout_changed(&s, r), Delivery::Forwarded);
    assert_eq!(d.layout_changed(&s, r), Delivery::Forwarded);
    assert_eq!(
        journal.take(),
        vec![NativeCall::LayoutChanged(h, r), NativeCall::LayoutChanged(h, r)]
    );
}

#[test]
fn layout_on_change_drops_duplicates() {
    let config = ScreenConfig::new("demo").with_layout_policy(LayoutPolicy::OnChange);
    let (mut screen, s, h, journal) = bound(RecordingEngine::new(), config);
    let r = LayoutRect::new(0, 0, 800, 600);
    let rotated = LayoutRect::new(0, 0, 600, 800);

    let mut d = screen.dispatcher();
    assert_eq!(d.layout_changed(&s, r), Delivery::Forwarded);
    assert_eq!(d.layout_changed(&s, r), Delivery::Unchanged);
    assert_eq!(d.layout_changed(&s, rotated), Delivery::Forwarded);
    assert_eq!(d.layout_changed(&s, r), Delivery::Forwarded);
    assert_eq!(
        journal.take(),
        vec![
            NativeCall::LayoutChanged(h, r),
            NativeCall::LayoutChanged(h, rotated),
            NativeCall::LayoutChanged(h, r),
        ]
    );
}

#[test]
fn rebinding_resets_last_layout() {
    let config = ScreenConfig::new("demo").with_layout_policy(LayoutPolicy::OnChange);
    let (mut screen, s, _, journal) = bound(RecordingEngine::new(), config);
    let r = LayoutRect::new(0, 0, 800, 600);

    screen.dispatcher().layout_changed(&s, r);
    screen.set_surface(None);
    screen.set_surface(Some(s.clone()));
    journal.take();

    assert_eq!(screen.dispatcher().layout_changed(&s, r), Delivery::Forwarded);
    assert_eq!(journal.len(), 1);
}

#[test]
fn trace_sink_sees_forwarded_and_dropped_events() {
    let (mut screen, s, h, _) = bound(
        RecordingEngine::new().consuming_input(false),
        ScreenConfig::new("demo"),
    );
    let log = EventLog::new();
    screen.set_trace_sink(Box::new(log.clone()));
    let stale = FakeSurface::new(2);

    let mut d = screen.dispatcher();
    d.input_event(&s, &FakeInput(1));
    d.surface_created(&stale);

    assert_eq!(
        log.take(),
        vec![
            TraceEvent::Forward(ForwardEvent {
                kind: EventKind::Input { consumed: false },
                context: Some(h),
                delivery: Delivery::Forwarded,
            }),
            TraceEvent::Forward(ForwardEvent {
                kind: EventKind::SurfaceCreated,
                context: Some(h),
                delivery: Delivery::NotBound,
            }),
        ]
    );
}
