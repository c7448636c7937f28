use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use crate::constants::{LABEL_RADIUS_RATIO, WHEEL_CENTER, WHEEL_COLORS, WHEEL_RADIUS};
use crate::error::WheelError;

/// Screen angle of the fixed pointer (12 o'clock, y axis pointing down).
pub const POINTER_ANGLE: f64 = 1.5 * PI;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` along `angle`.
    pub fn polar(&self, distance: f64, angle: f64) -> Self {
        Self {
            x: self.x + distance * angle.cos(),
            y: self.y + distance * angle.sin(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub radius: f64,
    pub center: Point,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            radius: WHEEL_RADIUS,
            center: Point::new(WHEEL_CENTER, WHEEL_CENTER),
        }
    }
}

/// One wedge of the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Sector {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: String,
    pub label: String,
    /// SVG path data for the wedge outline.
    pub path: String,
    pub large_arc: bool,
    pub label_position: Point,
    /// Text rotation in degrees.
    pub label_rotation: f64,
}

impl Sector {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn bisector(&self) -> f64 {
        self.start_angle + self.span() / 2.0
    }

    pub fn contains(&self, angle: f64) -> bool {
        let angle = angle.rem_euclid(TAU);
        // Tiny negative angles wrap to exactly TAU, which belongs to the last sector.
        if angle >= TAU {
            return self.end_angle >= TAU;
        }
        angle >= self.start_angle && angle < self.end_angle
    }
}

/// Lays out `names` with the default palette.
pub fn layout<S: AsRef<str>>(names: &[S], geometry: WheelGeometry) -> Vec<Sector> {
    build_sectors(names, geometry, &WHEEL_COLORS)
}

pub fn layout_with_palette<S: AsRef<str>>(
    names: &[S],
    geometry: WheelGeometry,
    palette: &[&str],
) -> Result<Vec<Sector>, WheelError> {
    if palette.is_empty() {
        return Err(WheelError::EmptyPalette);
    }
    Ok(build_sectors(names, geometry, palette))
}

fn build_sectors<S: AsRef<str>>(names: &[S], geometry: WheelGeometry, palette: &[&str]) -> Vec<Sector> {
    let total = names.len();
    if total == 0 {
        return Vec::new();
    }
    let span = sector_span(total);

    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let start_angle = index as f64 * span;
            // The last sector closes the circle exactly instead of accumulating error.
            let end_angle = if index + 1 == total { TAU } else { (index + 1) as f64 * span };
            let large_arc = end_angle - start_angle > PI;
            let bisector = start_angle + (end_angle - start_angle) / 2.0;

            Sector {
                index,
                start_angle,
                end_angle,
                color: palette[index % palette.len()].to_string(),
                label: name.as_ref().to_string(),
                path: sector_path(geometry, start_angle, end_angle, large_arc),
                large_arc,
                label_position: geometry.center.polar(geometry.radius * LABEL_RADIUS_RATIO, bisector),
                label_rotation: bisector.to_degrees() + 90.0,
            }
        })
        .collect()
}

pub fn sector_span(total: usize) -> f64 {
    TAU / total as f64
}

/// Index of the sector sitting under the pointer when the wheel body is
/// rotated clockwise by `rotation` radians.
pub fn sector_at(rotation: f64, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    let wheel_angle = (POINTER_ANGLE - rotation).rem_euclid(TAU);
    let index = (wheel_angle / sector_span(total)).floor() as usize;
    Some(index.min(total - 1))
}

fn sector_path(geometry: WheelGeometry, start_angle: f64, end_angle: f64, large_arc: bool) -> String {
    let c = geometry.center;
    let r = geometry.radius;

    if end_angle - start_angle >= TAU {
        // A single sector is the whole disc; one arc cannot start and end on the same point.
        let right = c.polar(r, 0.0);
        let left = c.polar(r, PI);
        return format!(
            "M {} {} A {r} {r} 0 1 1 {} {} A {r} {r} 0 1 1 {} {} Z",
            coord(right.x),
            coord(right.y),
            coord(left.x),
            coord(left.y),
            coord(right.x),
            coord(right.y),
            r = coord(r),
        );
    }

    let from = c.polar(r, start_angle);
    let to = c.polar(r, end_angle);
    [
        format!("M {} {}", coord(c.x), coord(c.y)),
        format!("L {} {}", coord(from.x), coord(from.y)),
        format!(
            "A {r} {r} 0 {} 1 {} {}",
            if large_arc { 1 } else { 0 },
            coord(to.x),
            coord(to.y),
            r = coord(r),
        ),
        "Z".to_string(),
    ]
    .join(" ")
}

// Three decimals keep paths stable across platforms and avoid "-0".
fn coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}
