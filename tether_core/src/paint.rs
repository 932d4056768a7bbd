// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint requests and cross-thread invalidation.
//!
//! Paint requests come from two directions:
//!
//! - **Presentation thread** — redraw-needed (forced) and routine draw
//!   callbacks call [`PaintScheduler::request_paint`] synchronously.
//! - **Engine worker threads** — the engine marks the surface dirty through
//!   an [`Invalidator`]. The invalidator never touches bridge state; it posts
//!   a [`PaintMessage`] over a channel and fires the installed waker so the
//!   presentation thread runs [`PaintScheduler::drain`].
//!
//! ```text
//!   worker thread                     presentation thread
//!   ─────────────                     ───────────────────
//!   Invalidator::request_invalidate
//!     ├─ pending? ──yes──► (folded)
//!     ├─ tx.send(Invalidate)
//!     └─ waker() ───────────────────► PaintScheduler::drain
//!                                       ├─ pending = false
//!                                       ├─ context live?     (re-checked)
//!                                       ├─ live window bound? (re-checked)
//!                                       └─ engine.request_paint(ctx, false)
//! ```
//!
//! Invalidations are not ordered relative to presentation-thread events. A
//! surface may be destroyed between the post and the drain, so liveness is
//! checked when the paint is issued, not when it is requested.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, OnceLock};

use log::trace;

use crate::binding::{PlatformSurface, SurfaceBinding};
use crate::engine::NativeEngine;
use crate::forward::Delivery;
use crate::handle::ContextId;
use crate::trace::{PaintEvent, PaintOrigin, TraceSink};

/// Messages posted to the presentation thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintMessage {
    /// Mark the bound surface dirty.
    Invalidate,
}

type Waker = Box<dyn Fn() + Send + Sync>;

struct Shared {
    pending: AtomicBool,
    coalesce: bool,
    waker: OnceLock<Waker>,
}

/// A `Send + Sync` handle for marking the surface dirty from any thread.
///
/// Obtained from [`PaintScheduler::invalidator`]. Cloning is cheap (a
/// channel sender plus an `Arc` bump).
#[derive(Clone)]
pub struct Invalidator {
    tx: Sender<PaintMessage>,
    shared: Arc<Shared>,
}

impl fmt::Debug for Invalidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invalidator")
            .field("pending", &self.shared.pending.load(Ordering::Relaxed))
            .field("coalesce", &self.shared.coalesce)
            .finish_non_exhaustive()
    }
}

impl Invalidator {
    /// Requests a repaint of the bound surface.
    ///
    /// Safe to call from any thread. This only posts a message; the paint
    /// happens on the presentation thread at its next drain, and only if a
    /// context and a live surface still exist then. Posting after the
    /// screen is gone is a no-op.
    pub fn request_invalidate(&self) {
        if self.shared.coalesce && self.shared.pending.swap(true, Ordering::AcqRel) {
            trace!("invalidate folded into pending request");
            return;
        }
        if self.tx.send(PaintMessage::Invalidate).is_err() {
            trace!("invalidate dropped, presentation side is gone");
            return;
        }
        if let Some(wake) = self.shared.waker.get() {
            wake();
        }
    }
}

/// Issues paint requests and drains posted invalidations.
pub struct PaintScheduler {
    rx: Receiver<PaintMessage>,
    invalidator: Invalidator,
}

impl fmt::Debug for PaintScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintScheduler")
            .field("invalidator", &self.invalidator)
            .finish_non_exhaustive()
    }
}

impl PaintScheduler {
    /// Creates a scheduler. With `coalesce`, invalidations posted while one
    /// is already pending are folded into it.
    #[must_use]
    pub fn new(coalesce: bool) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            rx,
            invalidator: Invalidator {
                tx,
                shared: Arc::new(Shared {
                    pending: AtomicBool::new(false),
                    coalesce,
                    waker: OnceLock::new(),
                }),
            },
        }
    }

    /// Returns a new [`Invalidator`] for this scheduler.
    #[must_use]
    pub fn invalidator(&self) -> Invalidator {
        self.invalidator.clone()
    }

    /// Installs the function that wakes the presentation thread after a
    /// post (for example `AndroidAppWaker::wake`).
    ///
    /// The waker can be installed once; returns `false` if one was already
    /// set. Invalidators created before this call pick it up too.
    pub fn set_waker<F>(&self, wake: F) -> bool
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.invalidator.shared.waker.set(Box::new(wake)).is_ok()
    }

    /// Forwards a paint request if `context` is live.
    pub fn request_paint<E: NativeEngine>(
        &self,
        engine: &mut E,
        context: Option<ContextId>,
        force: bool,
    ) -> Delivery {
        match context {
            Some(ctx) => {
                engine.request_paint(ctx, force);
                Delivery::Forwarded
            }
            None => Delivery::NoContext,
        }
    }

    /// Handles every posted message. Must run on the presentation thread.
    ///
    /// Returns the number of paints issued.
    pub fn drain<E, S>(
        &mut self,
        engine: &mut E,
        context: Option<ContextId>,
        binding: &SurfaceBinding<S>,
        sink: &mut dyn TraceSink,
    ) -> usize
    where
        E: NativeEngine<Window = S::Window>,
        S: PlatformSurface,
    {
        let mut painted = 0;
        // The scheduler keeps a sender alive, so the channel never reports
        // disconnection here.
        while let Ok(message) = self.rx.try_recv() {
            match message {
                PaintMessage::Invalidate => {
                    self.invalidator.shared.pending.store(false, Ordering::Release);
                    let delivery = match context {
                        None => Delivery::NoContext,
                        Some(_) if binding.surface().is_none() => Delivery::NotBound,
                        Some(_) if binding.live_window().is_none() => Delivery::NoWindow,
                        Some(ctx) => {
                            engine.request_paint(ctx, false);
                            painted += 1;
                            Delivery::Forwarded
                        }
                    };
                    if delivery != Delivery::Forwarded {
                        trace!("invalidate dropped at drain: {delivery:?}");
                    }
                    sink.on_paint(&PaintEvent {
                        origin: PaintOrigin::Invalidate,
                        force: false,
                        context,
                        delivery,
                    });
                }
            }
        }
        painted
    }

    /// Returns `true` if an invalidate is waiting to be drained.
    ///
    /// Only meaningful with coalescing enabled.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.invalidator.shared.pending.load(Ordering::Acquire)
    }
}
