// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-screen configuration.

/// When layout reports are forwarded to the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutPolicy {
    /// Forward every report, including ones equal to the last forwarded
    /// bounds. The engine is expected to be idempotent.
    #[default]
    Always,
    /// Drop reports equal to the last bounds forwarded for the bound
    /// surface.
    OnChange,
}

/// Configuration for a [`Screen`](crate::screen::Screen).
///
/// ```rust
/// use tether_core::{LayoutPolicy, ScreenConfig};
///
/// let config = ScreenConfig::new("demo")
///     .with_layout_policy(LayoutPolicy::OnChange)
///     .with_invalidate_coalescing(false);
/// assert_eq!(config.identifier(), "demo");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenConfig {
    identifier: String,
    layout_policy: LayoutPolicy,
    coalesce_invalidates: bool,
}

impl ScreenConfig {
    /// Creates a configuration for the native app variant `identifier`.
    ///
    /// Defaults: [`LayoutPolicy::Always`], invalidate coalescing on.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            layout_policy: LayoutPolicy::Always,
            coalesce_invalidates: true,
        }
    }

    /// Sets the layout forwarding policy.
    #[must_use]
    pub fn with_layout_policy(mut self, policy: LayoutPolicy) -> Self {
        self.layout_policy = policy;
        self
    }

    /// Enables or disables folding of invalidate requests that arrive while
    /// one is already pending.
    #[must_use]
    pub fn with_invalidate_coalescing(mut self, coalesce: bool) -> Self {
        self.coalesce_invalidates = coalesce;
        self
    }

    /// The identifier passed to the engine at context creation.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The layout forwarding policy.
    #[must_use]
    pub const fn layout_policy(&self) -> LayoutPolicy {
        self.layout_policy
    }

    /// Whether pending invalidates are coalesced.
    #[must_use]
    pub const fn coalesce_invalidates(&self) -> bool {
        self.coalesce_invalidates
    }
}
