// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ownership of the native context handle.
//!
//! [`AppContextOwner`] is the only place a [`ContextId`] is stored long term.
//! It walks a one-way state machine:
//!
//! ```text
//!   Uninitialized ──create ok──► Initialized ──destroy──► Destroyed
//!         │                                                   ▲
//!         └──────────── create failed / destroy ──────────────┘
//! ```
//!
//! `Destroyed` is terminal. Other components receive the id by value for
//! the duration of one call and never keep it.

use log::{error, info};
use thiserror::Error;

use crate::engine::NativeEngine;
use crate::handle::{ContextId, ContextSlot};

/// Lifecycle of the native context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// No creation attempted yet.
    Uninitialized,
    /// A live context is held.
    Initialized,
    /// Destroyed, or creation failed. Terminal.
    Destroyed,
}

/// Fatal errors while initializing a screen.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InitError {
    /// The engine could not create a context.
    #[error("native context creation failed for `{identifier}`")]
    ContextCreation {
        /// Identifier the screen asked for.
        identifier: String,
    },
    /// Creation was attempted outside the `Uninitialized` state.
    #[error("cannot create a native context while {0:?}")]
    InvalidState(LifecycleState),
}

/// Creates and destroys the native context for one screen.
#[derive(Debug)]
pub struct AppContextOwner {
    slot: ContextSlot,
    state: LifecycleState,
}

impl Default for AppContextOwner {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContextOwner {
    /// Creates an owner in the `Uninitialized` state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: ContextSlot::EMPTY,
            state: LifecycleState::Uninitialized,
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> LifecycleState {
        self.state
    }

    /// Returns the live context, or `None` before creation and after
    /// destruction.
    #[inline]
    #[must_use]
    pub const fn context(&self) -> Option<ContextId> {
        self.slot.get()
    }

    /// Creates the native context.
    ///
    /// # Errors
    ///
    /// - [`InitError::InvalidState`] if called in any state other than
    ///   `Uninitialized`. The engine is not called.
    /// - [`InitError::ContextCreation`] if the engine fails. The owner moves
    ///   to `Destroyed`, so creation is never retried.
    pub fn create<E: NativeEngine>(
        &mut self,
        engine: &mut E,
        identifier: &str,
        assets: &E::AssetSource,
    ) -> Result<ContextId, InitError> {
        if self.state != LifecycleState::Uninitialized {
            return Err(InitError::InvalidState(self.state));
        }

        match engine.create_context(identifier, assets) {
            Some(id) => {
                info!("created native context {id} for `{identifier}`");
                self.slot = ContextSlot::live(id);
                self.state = LifecycleState::Initialized;
                Ok(id)
            }
            None => {
                error!("native context creation failed for `{identifier}`");
                self.state = LifecycleState::Destroyed;
                Err(InitError::ContextCreation {
                    identifier: identifier.to_owned(),
                })
            }
        }
    }

    /// Destroys the context if one is live.
    ///
    /// The slot is emptied before the engine is called. Returns the id that
    /// was destroyed, or `None` when there was nothing to destroy.
    pub fn destroy<E: NativeEngine>(&mut self, engine: &mut E) -> Option<ContextId> {
        self.state = LifecycleState::Destroyed;
        let id = self.slot.take()?;
        engine.destroy_context(id);
        info!("destroyed native context {id}");
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LayoutRect;

    #[derive(Default)]
    struct Counting {
        fail: bool,
        created: u32,
        destroyed: u32,
    }

    impl NativeEngine for Counting {
        type Window = ();
        type InputEvent = ();
        type AssetSource = ();

        fn create_context(&mut self, _: &str, _: &()) -> Option<ContextId> {
            self.created += 1;
            ContextId::from_raw(if self.fail { 0 } else { 7 })
        }

        fn destroy_context(&mut self, _: ContextId) {
            self.destroyed += 1;
        }

        fn on_surface_changed(&mut self, _: ContextId, _: Option<&()>) {}
        fn on_layout_changed(&mut self, _: ContextId, _: LayoutRect) {}
        fn on_input_event(&mut self, _: ContextId, _: &()) -> bool {
            false
        }
        fn request_paint(&mut self, _: ContextId, _: bool) {}
    }

    #[test]
    fn create_then_destroy_once() {
        let mut engine = Counting::default();
        let mut owner = AppContextOwner::new();
        let id = owner.create(&mut engine, "demo", &()).unwrap();
        assert_eq!(owner.context(), Some(id));
        assert_eq!(owner.state(), LifecycleState::Initialized);

        assert_eq!(owner.destroy(&mut engine), Some(id));
        assert_eq!(owner.destroy(&mut engine), None);
        assert_eq!(owner.context(), None);
        assert_eq!(engine.destroyed, 1);
    }

    #[test]
    fn failed_create_is_terminal() {
        let mut engine = Counting {
            fail: true,
            ..Counting::default()
        };
        let mut owner = AppContextOwner::new();
        assert_eq!(
            owner.create(&mut engine, "demo", &()),
            Err(InitError::ContextCreation {
                identifier: "demo".into()
            })
        );
        assert_eq!(owner.state(), LifecycleState::Destroyed);
        assert_eq!(
            owner.create(&mut engine, "demo", &()),
            Err(InitError::InvalidState(LifecycleState::Destroyed))
        );
        assert_eq!(owner.destroy(&mut engine), None);
        assert_eq!((engine.created, engine.destroyed), (1, 0));
    }

    #[test]
    fn second_create_is_rejected() {
        let mut engine = Counting::default();
        let mut owner = AppContextOwner::new();
        owner.create(&mut engine, "demo", &()).unwrap();
        assert_eq!(
            owner.create(&mut engine, "demo", &()),
            Err(InitError::InvalidState(LifecycleState::Initialized))
        );
        assert_eq!(engine.created, 1);
    }

    #[test]
    fn error_messages() {
        let err = InitError::ContextCreation {
            identifier: "demo".into(),
        };
        assert_eq!(err.to_string(), "native context creation failed for `demo`");
    }
}
