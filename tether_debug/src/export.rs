// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of captured trace events.
//!
//! [`export`] writes the events of an [`EventLog`](crate::event_log::EventLog)
//! as a JSON array, one object per event, in capture order. Each object has a
//! `seq`, a `name`, a `cat` (`Context`, `Bind`, `Forward` or `Paint`) and an
//! `args` object.

use std::io::{self, Write};

use serde_json::{Value, json};

use tether_core::ContextId;

use crate::event_log::TraceEvent;
use crate::pretty::transition_name;

/// Writes `events` as pretty-printed JSON.
pub fn export(events: &[TraceEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events
        .iter()
        .enumerate()
        .map(|(seq, event)| to_value(seq, event))
        .collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}

fn to_value(seq: usize, event: &TraceEvent) -> Value {
    match event {
        TraceEvent::ContextCreated {
            context,
            identifier,
        } => json!({
            "seq": seq,
            "name": "ContextCreated",
            "cat": "Context",
            "args": {
                "context": context.get(),
                "identifier": identifier,
            }
        }),
        TraceEvent::ContextCreateFailed { identifier } => json!({
            "seq": seq,
            "name": "ContextCreateFailed",
            "cat": "Context",
            "args": {
                "identifier": identifier,
            }
        }),
        TraceEvent::ContextDestroyed(context) => json!({
            "seq": seq,
            "name": "ContextDestroyed",
            "cat": "Context",
            "args": {
                "context": context.get(),
            }
        }),
        TraceEvent::Bind(e) => json!({
            "seq": seq,
            "name": "Bind",
            "cat": "Bind",
            "args": {
                "context": raw(e.context),
                "detach": transition_name(e.outcome.detach),
                "attach": transition_name(e.outcome.attach),
            }
        }),
        TraceEvent::Forward(e) => json!({
            "seq": seq,
            "name": format!("{:?}", e.kind),
            "cat": "Forward",
            "args": {
                "context": raw(e.context),
                "delivery": format!("{:?}", e.delivery),
            }
        }),
        TraceEvent::Paint(e) => json!({
            "seq": seq,
            "name": format!("{:?}", e.origin),
            "cat": "Paint",
            "args": {
                "context": raw(e.context),
                "force": e.force,
                "delivery": format!("{:?}", e.delivery),
            }
        }),
    }
}

fn raw(context: Option<ContextId>) -> Option<u64> {
    context.map(ContextId::get)
}
