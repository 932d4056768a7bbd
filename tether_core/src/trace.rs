// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the bridge.
//!
//! [`TraceSink`] receives one call per bridge decision: context lifecycle,
//! bind transitions, forwarded or dropped events, and paint requests. All
//! methods default to no-ops, so implementing only the events you care about
//! is fine.
//!
//! A [`Screen`](crate::screen::Screen) starts with a [`NoopSink`]; install a
//! different one with
//! [`Screen::set_trace_sink`](crate::screen::Screen::set_trace_sink).
//! Ready-made sinks live in `tether_debug`.

use crate::binding::BindOutcome;
use crate::forward::Delivery;
use crate::handle::ContextId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which platform event was routed through the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Layout bounds changed.
    Layout,
    /// Surface created.
    SurfaceCreated,
    /// Surface geometry or format changed.
    SurfaceChanged,
    /// Surface destroyed.
    SurfaceDestroyed,
    /// Pointer or generic-motion input.
    Input {
        /// Whether the engine consumed the event.
        consumed: bool,
    },
}

/// Why a paint was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintOrigin {
    /// Platform redraw-needed callback (forced).
    RedrawNeeded,
    /// Routine draw callback.
    Draw,
    /// Drained invalidate message.
    Invalidate,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after every bind or unbind that changed something.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindEvent {
    /// Context at the time of the bind.
    pub context: Option<ContextId>,
    /// What each half did.
    pub outcome: BindOutcome,
}

/// Emitted for every event routed through the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForwardEvent {
    /// Event class.
    pub kind: EventKind,
    /// Context at the time of the event.
    pub context: Option<ContextId>,
    /// Whether it reached the engine.
    pub delivery: Delivery,
}

/// Emitted for every paint request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintEvent {
    /// Why the paint was requested.
    pub origin: PaintOrigin,
    /// Force flag passed to the engine.
    pub force: bool,
    /// Context at the time of the request.
    pub context: Option<ContextId>,
    /// Whether it reached the engine.
    pub delivery: Delivery,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the bridge.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after the engine created a context.
    fn on_context_created(&mut self, context: ContextId, identifier: &str) {
        _ = (context, identifier);
    }

    /// Called when the engine failed to create a context.
    fn on_context_create_failed(&mut self, identifier: &str) {
        _ = identifier;
    }

    /// Called after a context was destroyed.
    fn on_context_destroyed(&mut self, context: ContextId) {
        _ = context;
    }

    /// Called after a bind that changed the binding.
    fn on_bind(&mut self, e: &BindEvent) {
        _ = e;
    }

    /// Called for every dispatched platform event.
    fn on_forward(&mut self, e: &ForwardEvent) {
        _ = e;
    }

    /// Called for every paint request.
    fn on_paint(&mut self, e: &PaintEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}
