// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Android backend for tether.
//!
//! Drives a [`Screen`](tether_core::Screen) from the `android_main` poll loop
//! of a `NativeActivity` app built on `android-activity`:
//!
//! - [`surface::ActivitySurface`] — the activity's window as a
//!   [`PlatformSurface`](tether_core::PlatformSurface).
//! - [`input::MotionInput`] — portable snapshot of a motion event, the
//!   input type engines driven by this backend accept.
//! - [`event_loop::run`] — maps `MainEvent`s onto the bridge until the
//!   activity is destroyed.
//!
//! ```rust,ignore
//! #[unsafe(no_mangle)]
//! fn android_main(app: android_activity::AndroidApp) {
//!     let config = tether_core::ScreenConfig::new("demo");
//!     if let Err(err) = tether_backend_android::event_loop::run(app, MyEngine::new(), config) {
//!         log::error!("{err}");
//!     }
//! }
//! ```
//!
//! Everything except [`input`] is only compiled for `target_os = "android"`.

pub mod input;

#[cfg(target_os = "android")]
pub mod event_loop;
#[cfg(target_os = "android")]
pub mod surface;

pub use input::{MotionInput, MotionPhase, PointerSample};
