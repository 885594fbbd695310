//! Press/drag/release handling.
//!
//! The host owns event wiring: it subscribes to move and release events for
//! the duration of a gesture and forwards them here in local coordinates.
//! This module only decides what a gesture means:
//! - which presses start a drag (the handle, by the first accepted pointer)
//! - which value each position maps to
//! - when to notify the host of a new value
//!
//! The slider value itself stays with the host.

mod listener;
mod machine;
mod pointer;
mod state;

pub use listener::{SliderEvent, SliderListener};
pub use machine::{DragInteraction, aligned_value_at};
pub use pointer::{MouseButton, Pointer, PointerEvent, PressTarget};
pub use state::{DragSession, DragState};
