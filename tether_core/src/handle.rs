// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native context identity types.

use core::fmt;
use core::num::NonZeroU64;

/// An opaque token identifying one native execution context.
///
/// The engine hands these out from
/// [`NativeEngine::create_context`](crate::engine::NativeEngine::create_context).
/// The raw value `0` is reserved for "no context" and can never be
/// represented, so a `ContextId` in hand is always a value the engine
/// produced. Whether that context is still alive is tracked by the
/// [`ContextSlot`] that owns it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(NonZeroU64);

impl ContextId {
    /// Wraps a raw engine handle, mapping `0` to `None`.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Option<Self> {
        match NonZeroU64::new(raw) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Returns the raw handle value to pass across an FFI boundary.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContextId({:#x})", self.0.get())
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}

/// Storage for the single context a screen owns.
///
/// The only states are "live with id" and "empty". [`take`](Self::take)
/// empties the slot and hands back the id, so a destroyed context can never
/// be read back out of it.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextSlot {
    id: Option<ContextId>,
}

impl ContextSlot {
    /// An empty slot.
    pub const EMPTY: Self = Self { id: None };

    /// Creates a slot holding `id`.
    #[must_use]
    pub const fn live(id: ContextId) -> Self {
        Self { id: Some(id) }
    }

    /// Returns the held id, if any.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Option<ContextId> {
        self.id
    }

    /// Returns `true` while the slot holds an id.
    #[inline]
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.id.is_some()
    }

    /// Empties the slot, returning the id it held.
    pub fn take(&mut self) -> Option<ContextId> {
        self.id.take()
    }
}

impl fmt::Debug for ContextSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "ContextSlot::Live({id})"),
            None => f.write_str("ContextSlot::Empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_context() {
        assert_eq!(ContextId::from_raw(0), None);
        assert_eq!(ContextId::from_raw(7).map(ContextId::get), Some(7));
    }

    #[test]
    fn take_empties_the_slot() {
        let id = ContextId::from_raw(0x2a).unwrap();
        let mut slot = ContextSlot::live(id);
        assert!(slot.is_live());

        assert_eq!(slot.take(), Some(id));
        assert!(!slot.is_live());
        assert_eq!(slot.get(), None);
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn debug_output_names_the_state() {
        let id = ContextId::from_raw(0x10).unwrap();
        assert_eq!(format!("{:?}", ContextSlot::live(id)), "ContextSlot::Live(0x10)");
        assert_eq!(format!("{:?}", ContextSlot::EMPTY), "ContextSlot::Empty");
    }
}
