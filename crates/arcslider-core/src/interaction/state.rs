//! Drag state definitions.

use super::pointer::Pointer;

/// Gesture bookkeeping, alive from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// The pointer that owns the gesture.
    pub pointer: Pointer,
    /// The value last proposed through `on_change`, until the pointer comes
    /// back to the host's value.
    pub last_notified: Option<f64>,
}

impl DragSession {
    pub fn new(pointer: Pointer) -> Self {
        Self {
            pointer,
            last_notified: None,
        }
    }
}

/// State of the press/drag/release machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A pointer pressed the handle and has not been released yet.
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active session, if dragging.
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
