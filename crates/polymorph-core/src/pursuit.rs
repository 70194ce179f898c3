//! Turn-rate limited pursuit of a selected prey

use crate::geometry::{self, GeometryError};
use crate::perception::Candidate;
use crate::predator::Predator;

impl Predator {
    /// Steer toward `target` for one tick.
    ///
    /// Returns `Ok(true)` when the target is close enough to strike this
    /// tick. In that case the predator lands on the target and faces it
    /// without the turn-rate limit. Otherwise it turns at most `turn_rate`
    /// toward the target and takes a normal move step.
    ///
    /// An absent target is a no-op returning `Ok(false)`.
    pub fn intercept(&mut self, target: Option<&Candidate>) -> Result<bool, GeometryError> {
        let Some(target) = target else {
            return Ok(false);
        };

        let psi = geometry::lead_angle(self.position, self.heading(), target.position)?;

        if target.distance < self.speed {
            self.position = geometry::wrap_position(target.position);
            self.turn(psi);
            return Ok(true);
        }

        self.turn(psi.clamp(-self.turn_rate, self.turn_rate));
        self.move_step()?;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use glam::DVec2;

    use super::*;
    use crate::predator::test_predator;

    fn candidate_at(p: &Predator, x: f64, y: f64) -> Candidate {
        let position = DVec2::new(x, y);
        Candidate {
            index: 0,
            position,
            distance: p.position.distance(position),
            colour_difference: 0.0,
        }
    }

    #[test]
    fn test_no_target_is_noop() {
        let mut p = test_predator(0.3, 0.2);
        let before = p.clone();
        assert!(!p.intercept(None).unwrap());
        assert_eq!(p, before);
    }

    #[test]
    fn test_snap_when_within_reach() {
        let mut p = test_predator(0.0, 0.0);
        // Target behind-left: lead angle beyond the turn rate, still no clamp
        let target = candidate_at(&p, -0.03, 0.04);
        assert!(p.intercept(Some(&target)).unwrap());
        assert_eq!(p.position, DVec2::new(-0.03, 0.04));
        let expected = 0.04f64.atan2(-0.03);
        assert!((p.heading() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_turn_clamped_when_far() {
        let mut p = test_predator(0.0, 0.0);
        let target = candidate_at(&p, 0.0, 0.4);
        assert!(!p.intercept(Some(&target)).unwrap());
        // Wanted a quarter turn left, allowed 0.2 rad
        assert!((p.heading() - 0.2).abs() < 1e-12);
        let expected = DVec2::new(0.2f64.cos(), 0.2f64.sin()) * 0.1;
        assert!(p.position.distance(expected) < 1e-12);
    }

    #[test]
    fn test_turn_clamped_clockwise() {
        let mut p = test_predator(0.0, 0.0);
        let target = candidate_at(&p, 0.0, -0.4);
        assert!(!p.intercept(Some(&target)).unwrap());
        assert!((p.heading() - (2.0 * PI - 0.2)).abs() < 1e-12);
    }

    #[test]
    fn test_small_correction_not_clamped() {
        let mut p = test_predator(0.0, 0.0);
        let target = candidate_at(&p, 0.4, 0.02);
        p.intercept(Some(&target)).unwrap();
        assert!((p.heading() - 0.02f64.atan2(0.4)).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_target_errors() {
        let mut p = test_predator(0.0, 0.0);
        let target = Candidate {
            index: 0,
            position: DVec2::new(f64::NAN, 0.0),
            distance: 1.0,
            colour_difference: 0.0,
        };
        assert!(p.intercept(Some(&target)).is_err());
    }
}
