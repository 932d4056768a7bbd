// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary with the external native engine.
//!
//! Everything the bridge knows about the engine goes through
//! [`NativeEngine`]. Implementations are typically thin FFI shims around the
//! engine's C entry points, or test doubles such as
//! `tether_debug::RecordingEngine`.
//!
//! # Call discipline
//!
//! The bridge upholds the following on behalf of every implementation:
//!
//! - `create_context` is called at most once per screen.
//! - `destroy_context` is called at most once, and only with an id returned
//!   by `create_context`.
//! - No other method is called with an id after `destroy_context` received
//!   it.
//! - For one context, `on_surface_changed(ctx, None)` for a detached surface
//!   is always delivered before `on_surface_changed(ctx, Some(..))` for the
//!   next one.
//! - All calls happen on the presentation thread. The only entry point the
//!   engine may use from other threads is
//!   [`Invalidator::request_invalidate`](crate::paint::Invalidator::request_invalidate).

use crate::geometry::LayoutRect;
use crate::handle::ContextId;

/// The native side of the bridge.
///
/// ```rust,ignore
/// fn on_create(engine: &mut impl NativeEngine, assets: &AssetManager) {
///     let Some(ctx) = engine.create_context("demo", assets) else {
///         // Fatal: close the screen.
///         return;
///     };
///     engine.on_layout_changed(ctx, LayoutRect::new(0, 0, 800, 600));
///     engine.request_paint(ctx, true);
///     engine.destroy_context(ctx);
/// }
/// ```
pub trait NativeEngine {
    /// Platform drawable handed to the engine while a surface is attached.
    type Window;
    /// Pointer or generic-motion event type.
    type InputEvent;
    /// Opaque asset source passed through at creation.
    type AssetSource: ?Sized;

    /// Creates the native context for `identifier`.
    ///
    /// Returns `None` when native initialization fails for any reason. FFI
    /// implementations map a raw `0` handle to `None` with
    /// [`ContextId::from_raw`].
    fn create_context(
        &mut self,
        identifier: &str,
        assets: &Self::AssetSource,
    ) -> Option<ContextId>;

    /// Destroys a context. The id is never used again afterwards.
    fn destroy_context(&mut self, context: ContextId);

    /// Attaches `window`, or detaches the current one when `None`.
    ///
    /// May be called repeatedly with the same window; the engine is
    /// responsible for diffing.
    fn on_surface_changed(&mut self, context: ContextId, window: Option<&Self::Window>);

    /// Reports the latest visible bounds of the attached surface.
    fn on_layout_changed(&mut self, context: ContextId, bounds: LayoutRect);

    /// Offers an input event to the engine, returning whether it was
    /// consumed.
    fn on_input_event(&mut self, context: ContextId, event: &Self::InputEvent) -> bool;

    /// Asks the engine to paint. With `force_paint` the engine must repaint
    /// even if it believes nothing changed.
    fn request_paint(&mut self, context: ContextId, force_paint: bool);
}
