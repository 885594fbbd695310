//! Angle conventions: which way angles grow and where 0 degrees points.

use serde::{Deserialize, Serialize};

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;

/// Rotation direction in which angles increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Clockwise, as seen on screen.
    #[default]
    #[serde(rename = "cw")]
    Cw,
    /// Counter-clockwise, as seen on screen.
    #[serde(rename = "ccw")]
    Ccw,
}

impl Direction {
    /// Sign of an angle delta in the standard (counter-clockwise) frame.
    fn sign(self) -> f64 {
        match self {
            Direction::Cw => -1.0,
            Direction::Ccw => 1.0,
        }
    }
}

/// Direction that 0 degrees points to, as seen on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Right.
    #[serde(rename = "+x")]
    PosX,
    /// Left.
    #[serde(rename = "-x")]
    NegX,
    /// Up.
    #[serde(rename = "+y")]
    PosY,
    /// Down.
    #[default]
    #[serde(rename = "-y")]
    NegY,
}

impl Axis {
    /// Offset of this axis in the standard frame (counter-clockwise from +x, y up).
    fn offset(self) -> f64 {
        match self {
            Axis::PosX => 0.0,
            Axis::PosY => 90.0,
            Axis::NegX => 180.0,
            Axis::NegY => 270.0,
        }
    }
}

/// The `{direction, axis}` pair that fixes the sign and orientation of all
/// angle math.
///
/// The default, clockwise from straight down, suits thermostat-style dials
/// whose dead zone sits at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleType {
    pub direction: Direction,
    pub axis: Axis,
}

impl AngleType {
    pub const fn new(direction: Direction, axis: Axis) -> Self {
        Self { direction, axis }
    }

    /// Every supported combination, for exhaustive checks.
    pub const ALL: [AngleType; 8] = [
        AngleType::new(Direction::Cw, Axis::PosX),
        AngleType::new(Direction::Cw, Axis::NegX),
        AngleType::new(Direction::Cw, Axis::PosY),
        AngleType::new(Direction::Cw, Axis::NegY),
        AngleType::new(Direction::Ccw, Axis::PosX),
        AngleType::new(Direction::Ccw, Axis::NegX),
        AngleType::new(Direction::Ccw, Axis::PosY),
        AngleType::new(Direction::Ccw, Axis::NegY),
    ];

    /// Convert an angle in this convention to the standard frame
    /// (counter-clockwise from +x), normalized to [0, 360).
    pub fn to_standard(self, degrees: f64) -> f64 {
        normalize_degrees(self.axis.offset() + self.direction.sign() * degrees)
    }

    /// Convert a standard-frame angle into this convention, normalized to [0, 360).
    pub fn from_standard(self, degrees: f64) -> f64 {
        normalize_degrees(self.direction.sign() * (degrees - self.axis.offset()))
    }
}

/// Normalize any finite angle into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if normalized >= FULL_TURN { 0.0 } else { normalized }
}

/// Shortest angular distance between two angles, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = normalize_degrees(a - b);
    diff.min(FULL_TURN - diff)
}
