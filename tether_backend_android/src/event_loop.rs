// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `android_main` poll loop.
//!
//! [`run`] owns the [`Screen`] for the lifetime of the activity and maps
//! `android-activity` events onto it:
//!
//! | Event                          | Bridge call                   |
//! |--------------------------------|-------------------------------|
//! | `MainEvent::InitWindow`        | `surface_created`             |
//! | `MainEvent::WindowResized`     | `surface_changed`             |
//! | `MainEvent::TerminateWindow`   | `surface_destroyed`           |
//! | `MainEvent::RedrawNeeded`      | `redraw_needed`               |
//! | `MainEvent::ContentRectChanged`| `layout_changed`              |
//! | `MainEvent::InputAvailable`    | `input_event` per motion event|
//! | `PollEvent::Wake`              | `pump_invalidations`          |
//! | `MainEvent::Destroy`           | leave the loop, `teardown`    |
//!
//! The looper waker installed as the invalidate waker turns an engine-side
//! [`Invalidator::request_invalidate`](tether_core::Invalidator::request_invalidate)
//! into a `PollEvent::Wake` on this thread.

use core::ops::ControlFlow;

use android_activity::input::InputStatus;
use android_activity::{AndroidApp, MainEvent, PollEvent};
use log::{info, trace, warn};
use ndk::asset::AssetManager;
use ndk::native_window::NativeWindow;
use tether_core::{
    Capabilities, InitError, InputObserver, LayoutObserver, LayoutRect, NativeEngine,
    RedrawObserver, Screen, ScreenConfig, SurfaceObserver,
};

use crate::input::MotionInput;
use crate::surface::ActivitySurface;

type ActivityScreen<E> = Screen<E, ActivitySurface>;

/// Runs `engine` against the activity behind `app` until it is destroyed.
///
/// # Errors
///
/// Returns the [`InitError`] if the native context could not be created.
/// The loop never starts in that case; returning from `android_main` lets
/// the activity finish.
pub fn run<E>(app: AndroidApp, engine: E, config: ScreenConfig) -> Result<(), InitError>
where
    E: NativeEngine<Window = NativeWindow, InputEvent = MotionInput, AssetSource = AssetManager>,
{
    let mut screen = ActivityScreen::new(engine, config);
    let waker = app.create_waker();
    screen.set_invalidate_waker(move || waker.wake());

    screen.initialize(&app.asset_manager())?;

    let surface = ActivitySurface::new(app.clone());
    screen.set_surface(Some(surface.clone()));

    let mut running = true;
    while running {
        app.poll_events(None, |event| match event {
            PollEvent::Wake => trace!("woken"),
            PollEvent::Main(main) => {
                running = dispatch_main(&mut screen, &surface, &app, main).is_continue();
            }
            _ => {}
        });
        screen.pump_invalidations();
    }

    info!("activity destroyed, tearing down");
    screen.teardown();
    Ok(())
}

fn dispatch_main<E>(
    screen: &mut ActivityScreen<E>,
    surface: &ActivitySurface,
    app: &AndroidApp,
    event: MainEvent<'_>,
) -> ControlFlow<()>
where
    E: NativeEngine<Window = NativeWindow, InputEvent = MotionInput>,
{
    match event {
        MainEvent::InitWindow { .. } if surface.observes(Capabilities::SURFACE) => {
            screen.dispatcher().surface_created(surface);
        }
        MainEvent::WindowResized { .. } if surface.observes(Capabilities::SURFACE) => {
            screen.dispatcher().surface_changed(surface);
        }
        MainEvent::TerminateWindow { .. } if surface.observes(Capabilities::SURFACE) => {
            screen.dispatcher().surface_destroyed(surface);
        }
        MainEvent::RedrawNeeded { .. } if surface.observes(Capabilities::REDRAW) => {
            screen.dispatcher().redraw_needed(surface);
        }
        MainEvent::ContentRectChanged { .. } if surface.observes(Capabilities::LAYOUT) => {
            let rect = app.content_rect();
            let bounds = LayoutRect::new(rect.left, rect.top, rect.right, rect.bottom);
            screen.dispatcher().layout_changed(surface, bounds);
        }
        MainEvent::InputAvailable => dispatch_input(screen, surface, app),
        MainEvent::Destroy => return ControlFlow::Break(()),
        _ => {}
    }
    ControlFlow::Continue(())
}

/// Drains the input queue. Events the engine does not consume, and all key
/// and text events, are returned to the platform as unhandled.
fn dispatch_input<E>(screen: &mut ActivityScreen<E>, surface: &ActivitySurface, app: &AndroidApp)
where
    E: NativeEngine<Window = NativeWindow, InputEvent = MotionInput>,
{
    let mut iter = match app.input_events_iter() {
        Ok(iter) => iter,
        Err(err) => {
            warn!("failed to read input events: {err:?}");
            return;
        }
    };
    let observing = surface.observes(Capabilities::INPUT);
    loop {
        let read = iter.next(|event| {
            let Some(input) = MotionInput::from_event(event).filter(|_| observing) else {
                return InputStatus::Unhandled;
            };
            if screen.dispatcher().input_event(surface, &input) {
                InputStatus::Handled
            } else {
                InputStatus::Unhandled
            }
        });
        if !read {
            break;
        }
    }
}
