// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A native engine that records instead of rendering.
//!
//! [`RecordingEngine`] implements [`NativeEngine`] and appends one
//! [`NativeCall`] per boundary call to a [`CallJournal`]. The journal is a
//! shared handle, so a test can keep reading it after the engine moved into
//! a [`Screen`](tether_core::Screen) or after the screen was dropped.

use std::cell::RefCell;
use std::rc::Rc;

use tether_core::{ContextId, LayoutRect, NativeEngine};

/// Drawable handed out by [`FakeSurface`](crate::surface::FakeSurface).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FakeWindow(pub u32);

/// Input event understood by [`RecordingEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FakeInput(pub u32);

/// Asset source passed through at context creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FakeAssets;

/// One call received by a [`RecordingEngine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NativeCall {
    /// `create_context`, successful or not.
    CreateContext {
        /// Identifier passed by the screen.
        identifier: String,
    },
    /// `destroy_context`.
    DestroyContext(ContextId),
    /// `on_surface_changed`.
    SurfaceChanged(ContextId, Option<FakeWindow>),
    /// `on_layout_changed`.
    LayoutChanged(ContextId, LayoutRect),
    /// `on_input_event`.
    InputEvent(ContextId, FakeInput),
    /// `request_paint`.
    RequestPaint {
        /// Target context.
        context: ContextId,
        /// Force flag.
        force: bool,
    },
}

/// Shared, append-only list of [`NativeCall`]s.
#[derive(Clone, Debug, Default)]
pub struct CallJournal {
    calls: Rc<RefCell<Vec<NativeCall>>>,
}

impl CallJournal {
    fn push(&self, call: NativeCall) {
        self.calls.borrow_mut().push(call);
    }

    /// Returns a copy of every call recorded so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<NativeCall> {
        self.calls.borrow().clone()
    }

    /// Removes and returns every call recorded so far.
    pub fn take(&self) -> Vec<NativeCall> {
        core::mem::take(&mut *self.calls.borrow_mut())
    }

    /// Number of calls recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// Counts recorded calls matching `pred`.
    #[must_use]
    pub fn count(&self, pred: impl Fn(&NativeCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }
}

/// A [`NativeEngine`] that journals calls and hands out sequential ids.
#[derive(Debug)]
pub struct RecordingEngine {
    journal: CallJournal,
    next_id: u64,
    fail_create: bool,
    consume_input: bool,
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingEngine {
    /// Raw value of the first context id handed out.
    pub const FIRST_ID: u64 = 0x10;

    /// Creates an engine whose context creation succeeds and which consumes
    /// every input event.
    #[must_use]
    pub fn new() -> Self {
        Self {
            journal: CallJournal::default(),
            next_id: Self::FIRST_ID,
            fail_create: false,
            consume_input: true,
        }
    }

    /// Makes `create_context` fail.
    #[must_use]
    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Sets the value returned from `on_input_event`.
    #[must_use]
    pub fn consuming_input(mut self, consume: bool) -> Self {
        self.consume_input = consume;
        self
    }

    /// Returns a handle to the call journal.
    #[must_use]
    pub fn journal(&self) -> CallJournal {
        self.journal.clone()
    }
}

impl NativeEngine for RecordingEngine {
    type Window = FakeWindow;
    type InputEvent = FakeInput;
    type AssetSource = FakeAssets;

    fn create_context(&mut self, identifier: &str, _assets: &FakeAssets) -> Option<ContextId> {
        self.journal.push(NativeCall::CreateContext {
            identifier: identifier.to_owned(),
        });
        if self.fail_create {
            return ContextId::from_raw(0);
        }
        let id = ContextId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    fn destroy_context(&mut self, context: ContextId) {
        self.journal.push(NativeCall::DestroyContext(context));
    }

    fn on_surface_changed(&mut self, context: ContextId, window: Option<&FakeWindow>) {
        self.journal
            .push(NativeCall::SurfaceChanged(context, window.copied()));
    }

    fn on_layout_changed(&mut self, context: ContextId, bounds: LayoutRect) {
        self.journal.push(NativeCall::LayoutChanged(context, bounds));
    }

    fn on_input_event(&mut self, context: ContextId, event: &FakeInput) -> bool {
        self.journal.push(NativeCall::InputEvent(context, *event));
        self.consume_input
    }

    fn request_paint(&mut self, context: ContextId, force_paint: bool) {
        self.journal.push(NativeCall::RequestPaint {
            context,
            force: force_paint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_are_sequential_and_nonzero() {
        let mut engine = RecordingEngine::new();
        let a = engine.create_context("a", &FakeAssets).unwrap();
        let b = engine.create_context("b", &FakeAssets).unwrap();
        assert_eq!(a.get(), RecordingEngine::FIRST_ID);
        assert_eq!(b.get(), RecordingEngine::FIRST_ID + 1);
    }

    #[test]
    fn failing_create_still_journals() {
        let mut engine = RecordingEngine::new().failing_create();
        let journal = engine.journal();
        assert!(engine.create_context("demo", &FakeAssets).is_none());
        assert_eq!(
            journal.snapshot(),
            vec![NativeCall::CreateContext {
                identifier: "demo".into()
            }]
        );
    }

    #[test]
    fn journal_outlives_engine() {
        let journal = {
            let mut engine = RecordingEngine::new().consuming_input(false);
            let ctx = engine.create_context("demo", &FakeAssets).unwrap();
            assert!(!engine.on_input_event(ctx, &FakeInput(7)));
            engine.destroy_context(ctx);
            engine.journal()
        };
        assert_eq!(journal.len(), 3);
        assert_eq!(
            journal.count(|c| matches!(c, NativeCall::DestroyContext(_))),
            1
        );
        assert_eq!(journal.take().len(), 3);
        assert!(journal.is_empty());
    }
}
