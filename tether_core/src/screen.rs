// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-screen composition root.
//!
//! A [`Screen`] owns one engine instance together with the context owner,
//! the surface binding, the paint scheduler and the trace sink. A backend
//! drives it from the presentation thread:
//!
//! ```text
//!   Screen::new ─► initialize ─► set_surface(Some) ─► dispatcher()… ─► teardown
//!                      │                                                 ▲
//!                      └──── Err: screen closed ────────────────────────┘
//! ```
//!
//! Teardown also runs when the screen is dropped.

use log::{debug, error, trace};

use crate::binding::{BindOutcome, PlatformSurface, SurfaceBinding};
use crate::config::ScreenConfig;
use crate::engine::NativeEngine;
use crate::forward::Dispatcher;
use crate::handle::ContextId;
use crate::owner::{AppContextOwner, InitError, LifecycleState};
use crate::paint::{Invalidator, PaintScheduler};
use crate::trace::{BindEvent, NoopSink, TraceSink};

/// One platform screen bound to one native context.
pub struct Screen<E, S>
where
    E: NativeEngine<Window = S::Window>,
    S: PlatformSurface,
{
    engine: E,
    config: ScreenConfig,
    owner: AppContextOwner,
    binding: SurfaceBinding<S>,
    paint: PaintScheduler,
    sink: Box<dyn TraceSink>,
}

impl<E, S> core::fmt::Debug for Screen<E, S>
where
    E: NativeEngine<Window = S::Window>,
    S: PlatformSurface,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Screen")
            .field("config", &self.config)
            .field("owner", &self.owner)
            .field("paint", &self.paint)
            .finish_non_exhaustive()
    }
}

impl<E, S> Screen<E, S>
where
    E: NativeEngine<Window = S::Window>,
    S: PlatformSurface,
{
    /// Creates a screen around `engine`. No context exists until
    /// [`initialize`](Self::initialize).
    #[must_use]
    pub fn new(engine: E, config: ScreenConfig) -> Self {
        let paint = PaintScheduler::new(config.coalesce_invalidates());
        Self {
            engine,
            config,
            owner: AppContextOwner::new(),
            binding: SurfaceBinding::new(),
            paint,
            sink: Box::new(NoopSink),
        }
    }

    /// Replaces the trace sink.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.sink = sink;
    }

    /// Creates the native context using the configured identifier.
    ///
    /// # Errors
    ///
    /// Any [`InitError`] is fatal: the screen is closed afterwards and drops
    /// every further event.
    pub fn initialize(&mut self, assets: &E::AssetSource) -> Result<ContextId, InitError> {
        let identifier = self.config.identifier();
        match self.owner.create(&mut self.engine, identifier, assets) {
            Ok(ctx) => {
                self.sink.on_context_created(ctx, identifier);
                Ok(ctx)
            }
            Err(err) => {
                error!("screen `{identifier}` closed: {err}");
                if matches!(err, InitError::ContextCreation { .. }) {
                    self.sink.on_context_create_failed(identifier);
                }
                Err(err)
            }
        }
    }

    /// Binds `surface`, or unbinds the current one with `None`.
    ///
    /// A closed screen only accepts unbinding.
    pub fn set_surface(&mut self, surface: Option<S>) -> BindOutcome {
        if surface.is_some() && self.is_closed() {
            trace!("bind ignored, screen is closed");
            return BindOutcome::UNCHANGED;
        }
        let context = self.owner.context();
        let outcome = self.binding.bind(&mut self.engine, context, surface);
        if outcome.changed() {
            debug!("bind: {outcome:?}");
            self.sink.on_bind(&BindEvent { context, outcome });
        }
        outcome
    }

    /// Borrows the screen for routing one platform callback.
    pub fn dispatcher(&mut self) -> Dispatcher<'_, E, S> {
        Dispatcher::new(
            &mut self.engine,
            self.owner.context(),
            &mut self.binding,
            &self.paint,
            &self.config,
            &mut *self.sink,
        )
    }

    /// Returns a handle the engine can use to invalidate from any thread.
    #[must_use]
    pub fn invalidator(&self) -> Invalidator {
        self.paint.invalidator()
    }

    /// Installs the presentation-thread wake function. See
    /// [`PaintScheduler::set_waker`].
    pub fn set_invalidate_waker<F>(&self, wake: F) -> bool
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.paint.set_waker(wake)
    }

    /// Drains posted invalidations, returning the number of paints issued.
    pub fn pump_invalidations(&mut self) -> usize {
        self.paint.drain(
            &mut self.engine,
            self.owner.context(),
            &self.binding,
            &mut *self.sink,
        )
    }

    /// Unbinds the surface and destroys the context. Idempotent.
    pub fn teardown(&mut self) {
        self.set_surface(None);
        if let Some(ctx) = self.owner.destroy(&mut self.engine) {
            self.sink.on_context_destroyed(ctx);
        }
    }

    /// Returns `true` once the context is destroyed or failed to create.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.owner.state() == LifecycleState::Destroyed
    }

    /// The live context, if any.
    #[must_use]
    pub fn context(&self) -> Option<ContextId> {
        self.owner.context()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.owner.state()
    }

    /// The bound surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.binding.surface()
    }

    /// The engine.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The engine, mutably.
    ///
    /// Calls made through this reference bypass the bridge's liveness checks.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }
}

impl<E, S> Drop for Screen<E, S>
where
    E: NativeEngine<Window = S::Window>,
    S: PlatformSurface,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
