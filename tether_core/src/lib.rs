// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface and lifecycle binding between a platform screen and an opaque
//! native context.
//!
//! `tether_core` owns the small state machine that sits between a host
//! platform (an Android activity, a test harness) and an external engine that
//! is reachable only through opaque context handles. It is platform
//! independent; backend crates map platform callbacks onto it.
//!
//! # Architecture
//!
//! ```text
//!   Platform callbacks (presentation thread)
//!       │
//!       ▼
//!   Screen ──► AppContextOwner ──► NativeEngine::create_context / destroy_context
//!     │
//!     ├──► SurfaceBinding ──► NativeEngine::on_surface_changed
//!     │
//!     ├──► Dispatcher ──► on_layout_changed / on_surface_changed / on_input_event
//!     │                         │
//!     │                         ▼
//!     └──► PaintScheduler ──► NativeEngine::request_paint
//!               ▲
//!               │  PaintMessage (mpsc) + waker
//!   Invalidator (engine worker threads)
//! ```
//!
//! **[`handle`]** — [`ContextId`](handle::ContextId) tokens and the two-state
//! [`ContextSlot`](handle::ContextSlot) that makes "empty after destroy"
//! structural.
//!
//! **[`engine`]** — The [`NativeEngine`](engine::NativeEngine) trait: the
//! whole boundary with the external engine.
//!
//! **[`owner`]** — [`AppContextOwner`](owner::AppContextOwner): create once,
//! destroy at most once.
//!
//! **[`binding`]** — [`SurfaceBinding`](binding::SurfaceBinding) and the
//! [`PlatformSurface`](binding::PlatformSurface) contract: at most one
//! surface per context, detach before attach.
//!
//! **[`forward`]** — [`Dispatcher`](forward::Dispatcher), the single object
//! implementing the layout, surface, input and redraw observer contracts.
//!
//! **[`paint`]** — [`PaintScheduler`](paint::PaintScheduler) and the
//! cross-thread [`Invalidator`](paint::Invalidator).
//!
//! **[`screen`]** — [`Screen`](screen::Screen), the composition root tying
//! the pieces to one engine instance.
//!
//! **[`config`]** — [`ScreenConfig`](config::ScreenConfig).
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! bridge instrumentation.
//!
//! # Threading
//!
//! Everything except [`Invalidator`](paint::Invalidator) lives on the
//! presentation thread. Invalidations are posted as messages and drained by
//! [`Screen::pump_invalidations`](screen::Screen::pump_invalidations).

pub mod binding;
pub mod config;
pub mod engine;
pub mod forward;
pub mod geometry;
pub mod handle;
pub mod owner;
pub mod paint;
pub mod screen;
pub mod trace;

pub use binding::{BindOutcome, Capabilities, PlatformSurface, SurfaceBinding, Transition};
pub use config::{LayoutPolicy, ScreenConfig};
pub use engine::NativeEngine;
pub use forward::{
    Delivery, Dispatcher, InputObserver, LayoutObserver, RedrawObserver, SurfaceObserver,
};
pub use geometry::LayoutRect;
pub use handle::{ContextId, ContextSlot};
pub use owner::{AppContextOwner, InitError, LifecycleState};
pub use paint::{Invalidator, PaintMessage, PaintScheduler};
pub use screen::Screen;
