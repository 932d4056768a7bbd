// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portable motion input.
//!
//! `android-activity` motion events borrow from the input queue and are only
//! valid inside the iterator callback. [`MotionInput`] copies out what an
//! engine needs so it can be handed across the [`NativeEngine`] boundary.
//! Touch and generic motion (mouse, stylus, hover, scroll) share this one
//! type.
//!
//! [`NativeEngine`]: tether_core::NativeEngine

/// Action of a motion event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionPhase {
    /// First pointer went down.
    Down,
    /// Last pointer went up.
    Up,
    /// One or more pointers moved.
    Move,
    /// The gesture was aborted.
    Cancel,
    /// An additional pointer went down.
    PointerDown,
    /// A non-last pointer went up.
    PointerUp,
    /// A pointer moved without contact.
    Hover,
    /// Scroll wheel or similar.
    Scroll,
    /// Any other action.
    Other,
}

/// One pointer in a [`MotionInput`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Platform pointer id, stable for the duration of a gesture.
    pub id: i32,
    /// X in window pixels.
    pub x: f32,
    /// Y in window pixels.
    pub y: f32,
}

/// A motion event detached from the platform input queue.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionInput {
    /// What happened.
    pub phase: MotionPhase,
    /// Index into `pointers` of the pointer the action applies to.
    pub action_index: usize,
    /// All pointers, in platform order.
    pub pointers: Vec<PointerSample>,
}

impl MotionInput {
    /// Creates an event whose action applies to the first pointer.
    #[must_use]
    pub fn new(phase: MotionPhase, pointers: Vec<PointerSample>) -> Self {
        Self {
            phase,
            action_index: 0,
            pointers,
        }
    }

    /// The pointer the action applies to.
    #[must_use]
    pub fn action_pointer(&self) -> Option<&PointerSample> {
        self.pointers.get(self.action_index)
    }

    /// Looks up a pointer by platform id.
    #[must_use]
    pub fn pointer(&self, id: i32) -> Option<&PointerSample> {
        self.pointers.iter().find(|p| p.id == id)
    }

    /// Returns `true` if this event ends the gesture.
    #[must_use]
    pub fn ends_gesture(&self) -> bool {
        matches!(self.phase, MotionPhase::Up | MotionPhase::Cancel)
    }
}

#[cfg(target_os = "android")]
mod convert {
    use android_activity::input::{InputEvent, MotionAction, MotionEvent};

    use super::{MotionInput, MotionPhase, PointerSample};

    fn phase(action: MotionAction) -> MotionPhase {
        match action {
            MotionAction::Down => MotionPhase::Down,
            MotionAction::Up => MotionPhase::Up,
            MotionAction::Move => MotionPhase::Move,
            MotionAction::Cancel => MotionPhase::Cancel,
            MotionAction::PointerDown => MotionPhase::PointerDown,
            MotionAction::PointerUp => MotionPhase::PointerUp,
            MotionAction::HoverEnter | MotionAction::HoverMove | MotionAction::HoverExit => {
                MotionPhase::Hover
            }
            MotionAction::Scroll => MotionPhase::Scroll,
            _ => MotionPhase::Other,
        }
    }

    impl MotionInput {
        /// Copies a motion event. Key and text events yield `None`.
        #[must_use]
        pub fn from_event(event: &InputEvent<'_>) -> Option<Self> {
            match event {
                InputEvent::MotionEvent(motion) => Some(Self::from_motion(motion)),
                _ => None,
            }
        }

        fn from_motion(motion: &MotionEvent<'_>) -> Self {
            Self {
                phase: phase(motion.action()),
                action_index: motion.pointer_index(),
                pointers: motion
                    .pointers()
                    .map(|p| PointerSample {
                        id: p.pointer_id(),
                        x: p.x(),
                        y: p.y(),
                    })
                    .collect(),
            }
        }
    }
}
