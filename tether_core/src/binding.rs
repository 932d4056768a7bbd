// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 0-or-1 association between a context and a platform surface.
//!
//! A [`SurfaceBinding`] holds at most one [`PlatformSurface`]. Rebinding
//! always runs the detach branch for the old surface to completion (observer
//! unregistration, then the engine's absent-surface notification) before the
//! attach branch for the new one starts.
//!
//! Binding is orthogonal to context validity: the platform may recreate its
//! surface any number of times (rotation, backgrounding) while the context
//! lives on, and a binding may be cleared after the context is gone.
//!
//! # Late binding
//!
//! A surface can already own a live window by the time it is bound, for
//! example when the platform produced the drawable before the screen got
//! around to binding. Such a window will never be announced through a
//! future "surface created" event, so [`SurfaceBinding::bind`] reconciles by
//! attaching it immediately.

use bitflags::bitflags;
use log::debug;

use crate::engine::NativeEngine;
use crate::geometry::LayoutRect;
use crate::handle::ContextId;

bitflags! {
    /// Observer contracts a binding registers on its surface.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Layout bounds changes.
        const LAYOUT = 1 << 0;
        /// Surface created / changed / destroyed.
        const SURFACE = 1 << 1;
        /// Pointer and generic-motion input.
        const INPUT = 1 << 2;
        /// Redraw-needed and routine draw callbacks.
        const REDRAW = 1 << 3;
    }
}

/// A platform-owned drawing surface the bridge can bind to.
///
/// Implementors are cheap handles (a shared reference, a JNI global ref, an
/// id into platform state); the bridge never owns the underlying surface.
/// Equality is identity: two values compare equal when they refer to the
/// same platform surface.
pub trait PlatformSurface: PartialEq {
    /// The drawable the engine renders into.
    type Window;

    /// Returns the drawable if the platform has one live right now.
    fn live_window(&self) -> Option<Self::Window>;

    /// Starts routing the given event classes for this surface to the
    /// bridge.
    fn register_observers(&self, capabilities: Capabilities);

    /// Stops routing the given event classes for this surface.
    fn unregister_observers(&self, capabilities: Capabilities);
}

/// What one half of a bind did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Nothing to do on this side.
    None,
    /// Observers changed but the engine was not called (no live context, or
    /// no live window yet).
    Silent,
    /// The engine was notified.
    Notified,
}

/// Result of [`SurfaceBinding::bind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BindOutcome {
    /// Detach half for the previously bound surface.
    pub detach: Transition,
    /// Attach half for the new surface.
    pub attach: Transition,
}

impl BindOutcome {
    /// Binding was a no-op.
    pub const UNCHANGED: Self = Self {
        detach: Transition::None,
        attach: Transition::None,
    };

    /// Returns `true` if anything changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        *self != Self::UNCHANGED
    }
}

/// Holds the surface currently bound to a context.
#[derive(Debug)]
pub struct SurfaceBinding<S> {
    surface: Option<S>,
    last_layout: Option<LayoutRect>,
}

impl<S> Default for SurfaceBinding<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SurfaceBinding<S> {
    /// Creates an empty binding.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            surface: None,
            last_layout: None,
        }
    }

    /// Returns the bound surface.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Returns the last bounds forwarded for the bound surface.
    #[must_use]
    pub fn last_layout(&self) -> Option<LayoutRect> {
        self.last_layout
    }

    pub(crate) fn record_layout(&mut self, bounds: LayoutRect) {
        self.last_layout = Some(bounds);
    }
}

impl<S: PlatformSurface> SurfaceBinding<S> {
    /// Returns `true` if `surface` is the bound one.
    #[must_use]
    pub fn is_bound_to(&self, surface: &S) -> bool {
        self.surface.as_ref() == Some(surface)
    }

    /// Returns the live window of the bound surface, if both exist.
    #[must_use]
    pub fn live_window(&self) -> Option<S::Window> {
        self.surface.as_ref().and_then(|s| s.live_window())
    }

    /// Binds `surface` (or unbinds with `None`), notifying the engine when
    /// `context` is live.
    pub fn bind<E>(
        &mut self,
        engine: &mut E,
        context: Option<ContextId>,
        surface: Option<S>,
    ) -> BindOutcome
    where
        E: NativeEngine<Window = S::Window>,
    {
        if self.surface == surface {
            return BindOutcome::UNCHANGED;
        }

        let detach = self.detach(engine, context);
        let attach = match surface {
            Some(surface) => self.attach(engine, context, surface),
            None => Transition::None,
        };

        BindOutcome { detach, attach }
    }

    fn detach<E>(&mut self, engine: &mut E, context: Option<ContextId>) -> Transition
    where
        E: NativeEngine<Window = S::Window>,
    {
        let Some(old) = self.surface.take() else {
            return Transition::None;
        };
        self.last_layout = None;
        old.unregister_observers(Capabilities::all());

        match context {
            Some(ctx) => {
                debug!("detaching surface from context {ctx}");
                engine.on_surface_changed(ctx, None);
                Transition::Notified
            }
            None => Transition::Silent,
        }
    }

    fn attach<E>(&mut self, engine: &mut E, context: Option<ContextId>, surface: S) -> Transition
    where
        E: NativeEngine<Window = S::Window>,
    {
        surface.register_observers(Capabilities::all());
        let window = surface.live_window();
        self.surface = Some(surface);

        match (context, window) {
            (Some(ctx), Some(window)) => {
                debug!("surface already live at bind, attaching to context {ctx}");
                engine.on_surface_changed(ctx, Some(&window));
                Transition::Notified
            }
            _ => Transition::Silent,
        }
    }
}
