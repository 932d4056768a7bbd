// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use tether_core::ContextId;
use tether_core::binding::Transition;
use tether_core::trace::{BindEvent, ForwardEvent, PaintEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

struct Ctx(Option<ContextId>);

impl std::fmt::Display for Ctx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("-"),
        }
    }
}

pub(crate) fn transition_name(t: Transition) -> &'static str {
    match t {
        Transition::None => "none",
        Transition::Silent => "silent",
        Transition::Notified => "notified",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_context_created(&mut self, context: ContextId, identifier: &str) {
        let _ = writeln!(self.writer, "[context:create] {context} id=`{identifier}`");
    }

    fn on_context_create_failed(&mut self, identifier: &str) {
        let _ = writeln!(self.writer, "[context:create] FAILED id=`{identifier}`");
    }

    fn on_context_destroyed(&mut self, context: ContextId) {
        let _ = writeln!(self.writer, "[context:destroy] {context}");
    }

    fn on_bind(&mut self, e: &BindEvent) {
        let _ = writeln!(
            self.writer,
            "[bind] ctx={} detach={} attach={}",
            Ctx(e.context),
            transition_name(e.outcome.detach),
            transition_name(e.outcome.attach),
        );
    }

    fn on_forward(&mut self, e: &ForwardEvent) {
        let _ = writeln!(
            self.writer,
            "[forward] ctx={} {:?} -> {:?}",
            Ctx(e.context),
            e.kind,
            e.delivery,
        );
    }

    fn on_paint(&mut self, e: &PaintEvent) {
        let force = if e.force { " force" } else { "" };
        let _ = writeln!(
            self.writer,
            "[paint] ctx={} {:?}{force} -> {:?}",
            Ctx(e.context),
            e.origin,
            e.delivery,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_core::Delivery;
    use tether_core::trace::{EventKind, PaintOrigin};

    #[test]
    fn pretty_print_lines() {
        let ctx = ContextId::from_raw(0x10);
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_context_created(ctx.unwrap(), "demo");
        sink.on_forward(&ForwardEvent {
            kind: EventKind::Layout,
            context: None,
            delivery: Delivery::NoContext,
        });
        sink.on_paint(&PaintEvent {
            origin: PaintOrigin::RedrawNeeded,
            force: true,
            context: ctx,
            delivery: Delivery::Forwarded,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3, "got: {output}");
        assert_eq!(lines[0], "[context:create] 0x10 id=`demo`");
        assert_eq!(lines[1], "[forward] ctx=- Layout -> NoContext");
        assert_eq!(lines[2], "[paint] ctx=0x10 RedrawNeeded force -> Forwarded");
    }
}
