//! Pointer identities and events delivered by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// The device (and for touch, the finger) behind an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pointer {
    Mouse(MouseButton),
    /// A touch point, identified by the host's touch identifier.
    Touch(u64),
}

impl Pointer {
    /// Whether this pointer may start a gesture: the left mouse button or
    /// any touch.
    pub fn can_start_gesture(self) -> bool {
        matches!(self, Pointer::Mouse(MouseButton::Left) | Pointer::Touch(_))
    }

    /// Whether `other` comes from the same source as `self`.
    ///
    /// Mouse events match regardless of button, since moves and releases do
    /// not carry the button that started the drag. Touches match by id.
    pub fn same_source(self, other: Pointer) -> bool {
        match (self, other) {
            (Pointer::Mouse(_), Pointer::Mouse(_)) => true,
            (Pointer::Touch(a), Pointer::Touch(b)) => a == b,
            _ => false,
        }
    }
}

/// What a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PressTarget {
    /// The handle itself.
    Handle,
    /// The track or anything else. Such presses never start a drag.
    #[default]
    Elsewhere,
}

/// Pointer event in the slider's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        pointer: Pointer,
        position: Point,
        target: PressTarget,
    },
    Move {
        pointer: Pointer,
        position: Point,
    },
    Up {
        pointer: Pointer,
    },
    /// The host lost the gesture (touch cancel, pointer capture lost).
    Cancel,
}
