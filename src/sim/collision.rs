//! Catch detection
//!
//! A catch is a circle-overlap between the tongue tip and an insect: both
//! are circles whose `size` is a diameter, so the threshold is the sum of
//! the two radii.

use glam::Vec2;

use super::state::{Insect, Tongue};

/// Circle-overlap test on two centers with diameters
#[inline]
pub fn circles_overlap(a: Vec2, a_size: f32, b: Vec2, b_size: f32) -> bool {
    a.distance(b) < a_size / 2.0 + b_size / 2.0
}

/// True when the tongue tip overlaps the insect
pub fn tongue_touches(tongue: &Tongue, insect: &Insect) -> bool {
    circles_overlap(tongue.pos, tongue.size, insect.pos, insect.kind.size())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{InsectKind, TongueState};

    fn tongue_at(x: f32, y: f32) -> Tongue {
        Tongue {
            pos: Vec2::new(x, y),
            size: 40.0,
            speed: 20.0,
            state: TongueState::Outbound,
        }
    }

    #[test]
    fn test_overlap_inside_threshold() {
        assert!(circles_overlap(
            Vec2::new(0.0, 0.0),
            40.0,
            Vec2::new(30.0, 0.0),
            30.0
        ));
    }

    #[test]
    fn test_touching_circles_do_not_overlap() {
        // Distance exactly equal to the radius sum is not a catch
        assert!(!circles_overlap(
            Vec2::new(0.0, 0.0),
            40.0,
            Vec2::new(35.0, 0.0),
            30.0
        ));
    }

    #[test]
    fn test_catch_radius_varies_by_insect_size() {
        let tongue = tongue_at(500.0, 400.0);

        // Fly is size 30: threshold 35
        let fly = Insect {
            kind: InsectKind::Fly,
            pos: Vec2::new(534.0, 400.0),
        };
        assert!(tongue_touches(&tongue, &fly));

        // Mosquito is size 10: threshold 25, same distance misses
        let mosquito = Insect {
            kind: InsectKind::Mosquito,
            pos: Vec2::new(534.0, 400.0),
        };
        assert!(!tongue_touches(&tongue, &mosquito));
    }
}
