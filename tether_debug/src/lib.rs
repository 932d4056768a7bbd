// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles and trace sinks for tether.
//!
//! - [`recorder::RecordingEngine`] — a [`NativeEngine`](tether_core::NativeEngine)
//!   that journals every call it receives.
//! - [`surface::FakeSurface`] — a [`PlatformSurface`](tether_core::PlatformSurface)
//!   whose window and observer registrations are driven by the test.
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`event_log::EventLog`] — an in-memory trace sink, with
//!   [`export::export`] to write it out as JSON.

pub mod event_log;
pub mod export;
pub mod pretty;
pub mod recorder;
pub mod surface;

pub use event_log::{EventLog, TraceEvent};
pub use pretty::PrettyPrintSink;
pub use recorder::{CallJournal, FakeAssets, FakeInput, FakeWindow, NativeCall, RecordingEngine};
pub use surface::FakeSurface;
