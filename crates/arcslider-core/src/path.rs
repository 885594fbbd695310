//! Arc path descriptions for the slider track and fill.
//!
//! An [`ArcPath`] prints as SVG path data (`M ... A ...`) and can also be
//! flattened to a kurbo [`BezPath`] for renderers that do not speak SVG.

use std::fmt;

use crate::angle::{AngleType, Direction, FULL_TURN};
use crate::geometry::angle_to_position;
use kurbo::{Arc, BezPath, Point, SvgArc, Vec2};
use serde::{Deserialize, Serialize};

/// Spans at least this close to a full turn are drawn as two half arcs.
const FULL_TURN_TOLERANCE: f64 = 1e-9;

/// Inputs to [`arc_shaped_path`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcPathParams {
    pub start_angle: f64,
    pub end_angle: f64,
    pub angle_type: AngleType,
    /// Radius of the arc (the track radius).
    pub radius: f64,
    /// Side of the square viewport the arc is centered in.
    pub svg_size: f64,
    /// Direction used for the sweep flag, normally `angle_type.direction`.
    pub direction: Direction,
}

/// One circular `A` command: an arc of `radius` from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub from: Point,
    pub to: Point,
    pub radius: f64,
    /// Covers more than half a turn.
    pub large_arc: bool,
    /// Travels clockwise on screen.
    pub sweep: bool,
}

impl ArcSegment {
    pub fn to_svg_arc(&self) -> SvgArc {
        SvgArc {
            from: self.from,
            to: self.to,
            radii: Vec2::new(self.radius, self.radius),
            x_rotation: 0.0,
            large_arc: self.large_arc,
            sweep: self.sweep,
        }
    }
}

/// A circular arc from one angle to another, as one or two SVG arc commands.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPath {
    segments: Vec<ArcSegment>,
}

impl ArcPath {
    /// The move-to point.
    pub fn start(&self) -> Point {
        self.segments[0].from
    }

    /// Where the last arc command ends.
    pub fn end(&self) -> Point {
        self.segments[self.segments.len() - 1].to
    }

    /// The arc commands, in drawing order.
    pub fn segments(&self) -> &[ArcSegment] {
        &self.segments
    }

    /// Whether the path has zero visual length.
    pub fn is_empty(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| segment.to_svg_arc().is_straight_line())
            && self.start() == self.end()
    }

    /// Flatten into cubic Béziers.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start());
        for segment in &self.segments {
            let svg_arc = segment.to_svg_arc();
            match Arc::from_svg_arc(&svg_arc) {
                Some(arc) => path.extend(arc.append_iter(tolerance)),
                None if svg_arc.from != svg_arc.to => path.line_to(svg_arc.to),
                None => {}
            }
        }
        path
    }
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start();
        write!(f, "M {},{}", coord(start.x), coord(start.y))?;
        for segment in &self.segments {
            write!(
                f,
                " A {r} {r} 0 {} {} {},{}",
                u8::from(segment.large_arc),
                u8::from(segment.sweep),
                coord(segment.to.x),
                coord(segment.to.y),
                r = coord(segment.radius),
            )?;
        }
        Ok(())
    }
}

/// Print `-0` as `0`.
fn coord(value: f64) -> f64 {
    value + 0.0
}

/// Build the arc from `start_angle` to `end_angle` on a circle of `radius`
/// centered in the viewport.
///
/// The sweep flag is set when the arc travels clockwise on screen; the
/// large-arc flag when it covers more than half a turn. Equal angles give a
/// zero-length arc. A full turn is split at its midpoint, since an SVG arc
/// whose endpoints coincide draws nothing.
pub fn arc_shaped_path(params: &ArcPathParams) -> ArcPath {
    let ArcPathParams {
        start_angle,
        end_angle,
        angle_type,
        radius,
        svg_size,
        direction,
    } = *params;

    let delta = end_angle - start_angle;
    let sweep = (delta >= 0.0) == (direction == Direction::Cw);
    let position = |degrees| angle_to_position(degrees, angle_type, radius, svg_size);
    let segment = |from: f64, to: f64| ArcSegment {
        from: position(from),
        to: position(to),
        radius,
        large_arc: (to - from).abs() > FULL_TURN / 2.0,
        sweep,
    };

    let segments = if delta.abs() >= FULL_TURN - FULL_TURN_TOLERANCE {
        let middle = start_angle + delta / 2.0;
        vec![segment(start_angle, middle), segment(middle, end_angle)]
    } else {
        vec![segment(start_angle, end_angle)]
    };

    ArcPath { segments }
}
