//! ArcSlider Core Library
//!
//! Platform-agnostic geometry and interaction engine for circular (arc)
//! sliders. A rendering host feeds pointer positions in local coordinates and
//! gets back proposed values and arc paths for the track and fill.

pub mod angle;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod mapping;
pub mod path;
pub mod range;
pub mod slider;
pub mod step;

pub use angle::{AngleType, Axis, Direction, normalize_degrees};
pub use config::SliderConfig;
pub use error::{ConfigError, ConfigResult};
pub use geometry::{angle_to_position, position_to_angle};
pub use interaction::{
    DragInteraction, DragState, MouseButton, Pointer, PointerEvent, PressTarget, SliderEvent,
    SliderListener,
};
pub use layout::{SliderLayout, track_radius};
pub use mapping::{angle_to_value, value_to_angle};
pub use path::{ArcPath, ArcPathParams, ArcSegment, arc_shaped_path};
pub use range::{AngleSpan, SliderRange};
pub use slider::CircularSlider;
pub use step::trim_align_value;
