// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The activity window as a bindable surface.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use android_activity::AndroidApp;
use ndk::native_window::NativeWindow;
use tether_core::{Capabilities, PlatformSurface};

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// The window of a `NativeActivity`.
///
/// The platform creates and destroys the underlying `ANativeWindow` on its
/// own schedule (rotation, backgrounding); this handle stays valid across
/// those and reports whatever window is live at the moment. Clones share
/// identity and observer registrations.
#[derive(Clone)]
pub struct ActivitySurface {
    id: u64,
    app: AndroidApp,
    observers: Rc<Cell<Capabilities>>,
}

impl core::fmt::Debug for ActivitySurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActivitySurface")
            .field("id", &self.id)
            .field("observers", &self.observers.get())
            .finish_non_exhaustive()
    }
}

impl PartialEq for ActivitySurface {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl ActivitySurface {
    /// Creates a surface for the activity behind `app`.
    #[must_use]
    pub fn new(app: AndroidApp) -> Self {
        Self {
            id: NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed),
            app,
            observers: Rc::new(Cell::new(Capabilities::empty())),
        }
    }

    /// Returns `true` if a binding registered for `capability`.
    #[must_use]
    pub fn observes(&self, capability: Capabilities) -> bool {
        self.observers.get().contains(capability)
    }
}

impl PlatformSurface for ActivitySurface {
    type Window = NativeWindow;

    fn live_window(&self) -> Option<NativeWindow> {
        self.app.native_window()
    }

    fn register_observers(&self, capabilities: Capabilities) {
        self.observers.set(self.observers.get() | capabilities);
    }

    fn unregister_observers(&self, capabilities: Capabilities) {
        self.observers.set(self.observers.get() - capabilities);
    }
}
