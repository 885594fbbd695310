//! ArcSlider browser bindings
//!
//! The host side of the engine for web front ends: maps client coordinates
//! into the slider's local space and forwards DOM pointer events to
//! [`arcslider_core::CircularSlider`], invoking JavaScript callbacks with the
//! proposed values. Attaching and detaching DOM listeners stays with the page.

mod shared;
mod transform;

pub use shared::SharedSlider;
pub use transform::{ScreenTransform, TransformError};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{WebSlider, start};
