use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::wheel_layout::{layout, Sector, WheelGeometry};
use crate::wheel_spin::SpinMachine;

const POINTER_HALF_WIDTH: f64 = 14.0;
const POINTER_HEIGHT: f64 = 30.0;
const POINTER_OVERLAP: f64 = 12.0;

/// Everything the wheel needs to draw one frame.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelFrame {
    pub geometry: WheelGeometry,
    pub sectors: Vec<Sector>,
    /// Clockwise rotation of the wheel body, in degrees.
    pub rotation_deg: f64,
    pub spinning: bool,
    /// Set once the wheel has settled.
    pub winner: Option<String>,
    /// SVG polygon points of the fixed pointer at 12 o'clock.
    pub pointer_points: String,
}

impl WheelFrame {
    pub fn compose<S, R>(names: &[S], geometry: WheelGeometry, spin: &SpinMachine<R>, now: f64) -> Self
    where
        S: AsRef<str>,
        R: Rng,
    {
        let spinning = spin.is_spinning();
        Self {
            geometry,
            sectors: layout(names, geometry),
            rotation_deg: spin.rotation_at(now).to_degrees(),
            spinning,
            winner: if spinning { None } else { spin.winner().map(str::to_string) },
            pointer_points: pointer_points(geometry),
        }
    }

    /// SVG transform that rotates the wheel body about its center.
    pub fn wheel_transform(&self) -> String {
        format!(
            "rotate({:.3} {} {})",
            self.rotation_deg, self.geometry.center.x, self.geometry.center.y
        )
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}

pub fn pointer_points(geometry: WheelGeometry) -> String {
    let cx = geometry.center.x;
    let top = geometry.center.y - geometry.radius;
    format!(
        "{},{} {},{} {},{}",
        cx - POINTER_HALF_WIDTH,
        top - POINTER_HEIGHT + POINTER_OVERLAP,
        cx + POINTER_HALF_WIDTH,
        top - POINTER_HEIGHT + POINTER_OVERLAP,
        cx,
        top + POINTER_OVERLAP,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel_layout::sector_at;
    use crate::wheel_spin::SpinConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_idle_frame() {
        let spin = SpinMachine::new(StdRng::seed_from_u64(1), SpinConfig::default());
        let frame = WheelFrame::compose(&["A", "B"], WheelGeometry::default(), &spin, 0.0);
        assert_eq!(frame.sectors.len(), 2);
        assert_eq!(frame.rotation_deg, 0.0);
        assert!(!frame.spinning);
        assert_eq!(frame.winner, None);
        assert_eq!(frame.wheel_transform(), "rotate(0.000 200 200)");
    }

    #[test]
    fn test_empty_frame_is_plain_disc() {
        let spin = SpinMachine::new(StdRng::seed_from_u64(1), SpinConfig::default());
        let frame = WheelFrame::compose::<&str, _>(&[], WheelGeometry::default(), &spin, 0.0);
        assert!(frame.is_empty());
    }

    #[test]
    fn test_winner_hidden_until_settled() {
        let names = ["Alice", "Bob", "Carol"];
        let mut spin = SpinMachine::new(StdRng::seed_from_u64(9), SpinConfig::default());
        spin.request_spin(&names, 0.0);

        let mid = WheelFrame::compose(&names, WheelGeometry::default(), &spin, 1_500.0);
        assert!(mid.spinning);
        assert_eq!(mid.winner, None);

        let winner = spin.animation_complete(3_000.0);
        let done = WheelFrame::compose(&names, WheelGeometry::default(), &spin, 3_000.0);
        assert!(!done.spinning);
        assert_eq!(done.winner, winner);

        let index = sector_at(done.rotation_deg.to_radians(), names.len()).unwrap();
        assert_eq!(Some(names[index].to_string()), done.winner);
    }

    #[test]
    fn test_pointer_sits_on_top_of_wheel() {
        assert_eq!(pointer_points(WheelGeometry::default()), "186,32 214,32 200,62");
    }
}
