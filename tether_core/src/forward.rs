// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing of platform callbacks to the engine.
//!
//! The platform reports four classes of events for a bound surface. Each
//! class is a small observer trait, and one [`Dispatcher`] implements all of
//! them. Every entry point names the surface the event came from, because
//! platform callbacks may still arrive for a surface after it was unbound.
//!
//! An event reaches the engine only when both hold at the time of the call:
//!
//! 1. the context is live, and
//! 2. `source` is the currently bound surface.
//!
//! Anything else is dropped without error and reported as a [`Delivery`].
//! Nothing here panics or returns an error to the platform.

use log::trace;

use crate::binding::{PlatformSurface, SurfaceBinding};
use crate::config::{LayoutPolicy, ScreenConfig};
use crate::engine::NativeEngine;
use crate::geometry::LayoutRect;
use crate::handle::ContextId;
use crate::paint::PaintScheduler;
use crate::trace::{EventKind, ForwardEvent, PaintEvent, PaintOrigin, TraceSink};

/// What happened to one routed event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delivery {
    /// The engine was called.
    Forwarded,
    /// Dropped: no live context.
    NoContext,
    /// Dropped: the event came from a surface that is not bound.
    NotBound,
    /// Dropped: the bound surface has no live window.
    NoWindow,
    /// Dropped: layout bounds equal to the last forwarded ones.
    Unchanged,
}

impl Delivery {
    /// Returns `true` if the engine was called.
    #[must_use]
    pub const fn is_forwarded(self) -> bool {
        matches!(self, Self::Forwarded)
    }
}

/// Layout bounds changes.
pub trait LayoutObserver<S> {
    /// The bounds of `source` changed.
    fn layout_changed(&mut self, source: &S, bounds: LayoutRect) -> Delivery;
}

/// Surface availability.
pub trait SurfaceObserver<S> {
    /// `source` got a drawable.
    fn surface_created(&mut self, source: &S) -> Delivery;
    /// The drawable of `source` changed geometry or format.
    fn surface_changed(&mut self, source: &S) -> Delivery;
    /// `source` lost its drawable.
    fn surface_destroyed(&mut self, source: &S) -> Delivery;
}

/// Pointer and generic-motion input.
pub trait InputObserver<S, I> {
    /// Returns `true` if the engine consumed `event`. Dropped events return
    /// `false` so the platform can fall back to its own handling.
    fn input_event(&mut self, source: &S, event: &I) -> bool;
}

/// Redraw callbacks.
pub trait RedrawObserver<S> {
    /// The platform needs the surface redrawn before it can continue.
    fn redraw_needed(&mut self, source: &S) -> Delivery;
    /// Routine draw callback.
    fn draw(&mut self, source: &S) -> Delivery;
}

/// Borrows a screen's state for the duration of one platform callback.
///
/// Obtained from [`Screen::dispatcher`](crate::screen::Screen::dispatcher).
pub struct Dispatcher<'a, E, S> {
    engine: &'a mut E,
    context: Option<ContextId>,
    binding: &'a mut SurfaceBinding<S>,
    paint: &'a PaintScheduler,
    config: &'a ScreenConfig,
    sink: &'a mut dyn TraceSink,
}

impl<E, S> core::fmt::Debug for Dispatcher<'_, E, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("context", &self.context)
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, E, S> Dispatcher<'a, E, S>
where
    E: NativeEngine<Window = S::Window>,
    S: PlatformSurface,
{
    pub(crate) fn new(
        engine: &'a mut E,
        context: Option<ContextId>,
        binding: &'a mut SurfaceBinding<S>,
        paint: &'a PaintScheduler,
        config: &'a ScreenConfig,
        sink: &'a mut dyn TraceSink,
    ) -> Self {
        Self {
            engine,
            context,
            binding,
            paint,
            config,
            sink,
        }
    }

    /// The context events are routed to, if live.
    #[must_use]
    pub fn context(&self) -> Option<ContextId> {
        self.context
    }

    fn admit(&self, source: &S) -> Result<ContextId, Delivery> {
        let ctx = self.context.ok_or(Delivery::NoContext)?;
        if !self.binding.is_bound_to(source) {
            return Err(Delivery::NotBound);
        }
        Ok(ctx)
    }

    fn report(&mut self, kind: EventKind, delivery: Delivery) -> Delivery {
        if !delivery.is_forwarded() {
            trace!("{kind:?} dropped: {delivery:?}");
        }
        self.sink.on_forward(&ForwardEvent {
            kind,
            context: self.context,
            delivery,
        });
        delivery
    }

    fn notify_window(&mut self, source: &S, kind: EventKind, present: bool) -> Delivery {
        let delivery = match self.admit(source) {
            Ok(ctx) => {
                let window = if present { source.live_window() } else { None };
                self.engine.on_surface_changed(ctx, window.as_ref());
                Delivery::Forwarded
            }
            Err(dropped) => dropped,
        };
        self.report(kind, delivery)
    }

    fn forward_paint(&mut self, source: &S, origin: PaintOrigin, force: bool) -> Delivery {
        let delivery = match self.admit(source) {
            Ok(ctx) => self.paint.request_paint(&mut *self.engine, Some(ctx), force),
            Err(dropped) => dropped,
        };
        if !delivery.is_forwarded() {
            trace!("{origin:?} paint dropped: {delivery:?}");
        }
        self.sink.on_paint(&PaintEvent {
            origin,
            force,
            context: self.context,
            delivery,
        });
        delivery
    }
}

impl<E, S> LayoutObserver<S> for Dispatcher<'_, E, S>
where
    E: NativeEngine<Window = S::Window>,
    S: PlatformSurface,
{
    fn layout_changed(&mut self, source: &S, bounds: LayoutRect) -> Delivery {
        let delivery = match self.admit(source) {
            Ok(_)
                if self.config.layout_policy() == LayoutPolicy::OnChange
                    && self.binding.last_layout() == Some(bounds) =>
            {
                Delivery::Unchanged
            }
            Ok(ctx) => {
                self.engine.on_layout_changed(ctx, bounds);
                self.binding.record_layout(bounds);
                Delivery::Forwarded
            }
            Err(dropped) => dropped,
        };
        self.report(EventKind::Layout, delivery)
    }
}

impl<E, S> SurfaceObserver<S> for Dispatcher<'_, E, S>
where
    E: NativeEngine<Window = S::Window>,
    S: PlatformSurface,
{
    fn surface_created(&mut self, source: &S) -> Delivery {
        self.notify_window(source, EventKind::SurfaceCreated, true)
    }

    fn surface_changed(&mut self, source: &S) -> Delivery {
        self.notify_window(source, EventKind::SurfaceChanged, true)
    }

    fn surface_destroyed(&mut self, source: &S) -> Delivery {
        self.notify_window(source, EventKind::SurfaceDestroyed, false)
    }
}

impl<E, S> InputObserver<S, E::InputEvent> for Dispatcher<'_, E, S>
where
    E: NativeEngine<Window = S::Window>,
    S: PlatformSurface,
{
    fn input_event(&mut self, source: &S, event: &E::InputEvent) -> bool {
        let (delivery, consumed) = match self.admit(source) {
            Ok(ctx) => (
                Delivery::Forwarded,
                self.engine.on_input_event(ctx, event),
            ),
            Err(dropped) => (dropped, false),
        };
        self.report(EventKind::Input { consumed }, delivery);
        consumed
    }
}

impl<E, S> RedrawObserver<S> for Dispatcher<'_, E, S>
where
    E: NativeEngine<Window = S::Window>,
    S: PlatformSurface,
{
    fn redraw_needed(&mut self, source: &S) -> Delivery {
        self.forward_paint(source, PaintOrigin::RedrawNeeded, true)
    }

    fn draw(&mut self, source: &S) -> Delivery {
        self.forward_paint(source, PaintOrigin::Draw, false)
    }
}
