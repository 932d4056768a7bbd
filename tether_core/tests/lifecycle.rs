// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context creation, teardown, and the end-to-end screen walkthrough.

use pretty_assertions::assert_eq;
use tether_core::{
    Delivery, InitError, LayoutObserver, LayoutRect, LifecycleState, RedrawObserver, Screen,
    ScreenConfig,
};
use tether_debug::{
    EventLog, FakeAssets, FakeSurface, FakeWindow, NativeCall, RecordingEngine, TraceEvent,
};

type TestScreen = Screen<RecordingEngine, FakeSurface>;

fn create(identifier: &str) -> NativeCall {
    NativeCall::CreateContext {
        identifier: identifier.into(),
    }
}

#[test]
fn end_to_end_walkthrough() {
    let engine = RecordingEngine::new();
    let journal = engine.journal();
    let mut screen = TestScreen::new(engine, ScreenConfig::new("demo"));

    let h = screen.initialize(&FakeAssets).unwrap();
    assert_eq!(screen.state(), LifecycleState::Initialized);

    let x = FakeSurface::new(1);
    screen.set_surface(Some(x.clone()));
    let bounds = LayoutRect::new(0, 0, 800, 600);
    assert_eq!(
        screen.dispatcher().layout_changed(&x, bounds),
        Delivery::Forwarded
    );
    screen.set_surface(None);
    screen.teardown();
    assert_eq!(screen.context(), None);

    assert_eq!(
        screen.dispatcher().layout_changed(&x, bounds),
        Delivery::NoContext
    );

    assert_eq!(
        journal.take(),
        vec![
            create("demo"),
            NativeCall::LayoutChanged(h, bounds),
            NativeCall::SurfaceChanged(h, None),
            NativeCall::DestroyContext(h),
        ]
    );
}

#[test]
fn destroy_twice_reaches_engine_once() {
    let engine = RecordingEngine::new();
    let journal = engine.journal();
    {
        let mut screen = TestScreen::new(engine, ScreenConfig::new("demo"));
        screen.initialize(&FakeAssets).unwrap();
        screen.teardown();
        screen.teardown();
        assert!(screen.is_closed());
    }
    assert_eq!(
        journal.count(|c| matches!(c, NativeCall::DestroyContext(_))),
        1
    );
}

#[test]
fn teardown_before_initialize_is_a_no_op() {
    let engine = RecordingEngine::new();
    let journal = engine.journal();
    let mut screen = TestScreen::new(engine, ScreenConfig::new("demo"));
    screen.teardown();
    assert_eq!(screen.state(), LifecycleState::Destroyed);
    assert_eq!(
        screen.initialize(&FakeAssets),
        Err(InitError::InvalidState(LifecycleState::Destroyed))
    );
    assert!(journal.is_empty());
}

#[test]
fn no_engine_calls_after_destroy() {
    let engine = RecordingEngine::new();
    let journal = engine.journal();
    let mut screen = TestScreen::new(engine, ScreenConfig::new("demo"));
    screen.initialize(&FakeAssets).unwrap();
    let s = FakeSurface::with_window(1);
    screen.set_surface(Some(s.clone()));
    screen.teardown();
    let before = journal.len();

    let mut d = screen.dispatcher();
    assert_eq!(
        d.layout_changed(&s, LayoutRect::new(0, 0, 1, 1)),
        Delivery::NoContext
    );
    assert_eq!(d.redraw_needed(&s), Delivery::NoContext);
    assert_eq!(d.draw(&s), Delivery::NoContext);
    screen.invalidator().request_invalidate();
    assert_eq!(screen.pump_invalidations(), 0);

    assert_eq!(journal.len(), before);
}

#[test]
fn init_failure_closes_screen() {
    let engine = RecordingEngine::new().failing_create();
    let journal = engine.journal();
    let mut screen = TestScreen::new(engine, ScreenConfig::new("demo"));

    assert_eq!(
        screen.initialize(&FakeAssets),
        Err(InitError::ContextCreation {
            identifier: "demo".into()
        })
    );
    assert!(screen.is_closed());

    let s = FakeSurface::with_window(1);
    assert!(!screen.set_surface(Some(s.clone())).changed());
    assert_eq!(s.registrations(), 0);
    assert_eq!(screen.dispatcher().redraw_needed(&s), Delivery::NoContext);
    assert_eq!(
        screen.initialize(&FakeAssets),
        Err(InitError::InvalidState(LifecycleState::Destroyed))
    );

    drop(screen);
    assert_eq!(journal.take(), vec![create("demo")]);
}

#[test]
fn drop_tears_down() {
    let engine = RecordingEngine::new();
    let journal = engine.journal();
    let s = FakeSurface::with_window(4);
    let h = {
        let mut screen = TestScreen::new(engine, ScreenConfig::new("demo"));
        let h = screen.initialize(&FakeAssets).unwrap();
        screen.set_surface(Some(s.clone()));
        h
    };

    assert!(s.observers().is_empty());
    assert_eq!(
        journal.take(),
        vec![
            create("demo"),
            NativeCall::SurfaceChanged(h, Some(FakeWindow(4))),
            NativeCall::SurfaceChanged(h, None),
            NativeCall::DestroyContext(h),
        ]
    );
}

#[test]
fn trace_sink_sees_context_lifecycle() {
    let log = EventLog::new();
    let mut screen = TestScreen::new(RecordingEngine::new(), ScreenConfig::new("demo"));
    screen.set_trace_sink(Box::new(log.clone()));
    let h = screen.initialize(&FakeAssets).unwrap();
    screen.teardown();

    assert_eq!(
        log.take(),
        vec![
            TraceEvent::ContextCreated {
                context: h,
                identifier: "demo".into(),
            },
            TraceEvent::ContextDestroyed(h),
        ]
    );
}

#[test]
fn trace_sink_sees_create_failure() {
    let log = EventLog::new();
    let mut screen = TestScreen::new(
        RecordingEngine::new().failing_create(),
        ScreenConfig::new("demo"),
    );
    screen.set_trace_sink(Box::new(log.clone()));
    assert!(screen.initialize(&FakeAssets).is_err());
    assert_eq!(
        log.take(),
        vec![TraceEvent::ContextCreateFailed {
            identifier: "demo".into()
        }]
    );
}
