// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A platform surface driven by the test.

use std::cell::Cell;
use std::rc::Rc;

use tether_core::{Capabilities, PlatformSurface};

use crate::recorder::FakeWindow;

#[derive(Debug)]
struct State {
    window: Cell<Option<FakeWindow>>,
    observers: Cell<Capabilities>,
    registrations: Cell<u32>,
    unregistrations: Cell<u32>,
}

/// A [`PlatformSurface`] whose drawable the test produces and loses by hand.
///
/// Clones share state and compare equal; surfaces created separately never
/// compare equal, even with the same id.
#[derive(Clone, Debug)]
pub struct FakeSurface {
    id: u32,
    state: Rc<State>,
}

impl PartialEq for FakeSurface {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl FakeSurface {
    /// Creates a surface with no live window.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            state: Rc::new(State {
                window: Cell::new(None),
                observers: Cell::new(Capabilities::empty()),
                registrations: Cell::new(0),
                unregistrations: Cell::new(0),
            }),
        }
    }

    /// Creates a surface whose window is already live.
    #[must_use]
    pub fn with_window(id: u32) -> Self {
        let surface = Self::new(id);
        surface.produce_window();
        surface
    }

    /// The id given at construction.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Makes `FakeWindow(id)` live.
    pub fn produce_window(&self) -> FakeWindow {
        let window = FakeWindow(self.id);
        self.state.window.set(Some(window));
        window
    }

    /// Drops the live window.
    pub fn lose_window(&self) {
        self.state.window.set(None);
    }

    /// Capabilities currently registered.
    #[must_use]
    pub fn observers(&self) -> Capabilities {
        self.state.observers.get()
    }

    /// Number of `register_observers` calls so far.
    #[must_use]
    pub fn registrations(&self) -> u32 {
        self.state.registrations.get()
    }

    /// Number of `unregister_observers` calls so far.
    #[must_use]
    pub fn unregistrations(&self) -> u32 {
        self.state.unregistrations.get()
    }
}

impl PlatformSurface for FakeSurface {
    type Window = FakeWindow;

    fn live_window(&self) -> Option<FakeWindow> {
        self.state.window.get()
    }

    fn register_observers(&self, capabilities: Capabilities) {
        let s = &self.state;
        s.observers.set(s.observers.get() | capabilities);
        s.registrations.set(s.registrations.get() + 1);
    }

    fn unregister_observers(&self, capabilities: Capabilities) {
        let s = &self.state;
        s.observers.set(s.observers.get() - capabilities);
        s.unregistrations.set(s.unregistrations.get() + 1);
    }
}
