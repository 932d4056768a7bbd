// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory trace capture.

use std::cell::RefCell;
use std::rc::Rc;

use tether_core::ContextId;
use tether_core::trace::{BindEvent, ForwardEvent, PaintEvent, TraceSink};

/// One captured trace event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// [`TraceSink::on_context_created`].
    ContextCreated {
        /// New context.
        context: ContextId,
        /// Identifier it was created for.
        identifier: String,
    },
    /// [`TraceSink::on_context_create_failed`].
    ContextCreateFailed {
        /// Identifier creation was attempted for.
        identifier: String,
    },
    /// [`TraceSink::on_context_destroyed`].
    ContextDestroyed(ContextId),
    /// [`TraceSink::on_bind`].
    Bind(BindEvent),
    /// [`TraceSink::on_forward`].
    Forward(ForwardEvent),
    /// [`TraceSink::on_paint`].
    Paint(PaintEvent),
}

/// A [`TraceSink`] that keeps every event in memory.
///
/// Clones share the same buffer, so one clone can be boxed into a
/// [`Screen`](tether_core::Screen) while another is read by the test.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<TraceEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured events.
    #[must_use]
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns the captured events.
    pub fn take(&self) -> Vec<TraceEvent> {
        core::mem::take(&mut *self.events.borrow_mut())
    }

    fn push(&self, event: TraceEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl TraceSink for EventLog {
    fn on_context_created(&mut self, context: ContextId, identifier: &str) {
        self.push(TraceEvent::ContextCreated {
            context,
            identifier: identifier.to_owned(),
        });
    }

    fn on_context_create_failed(&mut self, identifier: &str) {
        self.push(TraceEvent::ContextCreateFailed {
            identifier: identifier.to_owned(),
        });
    }

    fn on_context_destroyed(&mut self, context: ContextId) {
        self.push(TraceEvent::ContextDestroyed(context));
    }

    fn on_bind(&mut self, e: &BindEvent) {
        self.push(TraceEvent::Bind(*e));
    }

    fn on_forward(&mut self, e: &ForwardEvent) {
        self.push(TraceEvent::Forward(*e));
    }

    fn on_paint(&mut self, e: &PaintEvent) {
        self.push(TraceEvent::Paint(*e));
    }
}
