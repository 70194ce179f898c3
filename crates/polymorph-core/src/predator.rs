//! Visual predator entity
//!
//! Holds the predator's kinematic state, its counters and its colour imprint.
//! Behaviour is split across sibling modules: `perception` (prey search),
//! `pursuit` (intercept), `attack` and `lifecycle` each add methods to
//! [`Predator`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::colour::Rgb;
use crate::config::PredatorConfig;
use crate::geometry::{self, GeometryError};

/// Kind tag carried by render exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Predator,
}

/// Snapshot of what the renderer needs for one predator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawInfo {
    pub kind: AgentKind,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub colour: [u8; 3],
}

/// A visually-guided predator agent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Predator {
    /// Position on the world torus
    pub position: DVec2,
    pub speed: f64,
    pub acceleration: f64,
    /// Max heading change per pursuit step (radians)
    pub turn_rate: f64,
    // heading and direction only change together, see `turn`
    heading: f64,
    direction: DVec2,
    pub lifespan: i32,
    pub hunger: i32,
    /// Set for the tick in which an attack succeeded
    pub attack_success: bool,
    pub fertility: i32,
    pub gravid: bool,
    pub visual_search_range: f64,
    pub visual_acuity: f64,
    pub colour_imprint: Rgb,
}

impl Predator {
    /// Create a predator with the population parameters from `config`
    pub fn new(
        position: DVec2,
        heading: f64,
        lifespan: i32,
        colour_imprint: Rgb,
        config: &PredatorConfig,
    ) -> Self {
        let heading = geometry::wrap_angle(heading);
        Self {
            position: geometry::wrap_position(position),
            speed: config.base_speed,
            acceleration: config.base_acceleration,
            turn_rate: config.turn_rate_limit,
            heading,
            direction: geometry::unit_vector(heading),
            lifespan,
            hunger: 0,
            attack_success: false,
            fertility: 1,
            gravid: false,
            visual_search_range: config.visual_search_range,
            visual_acuity: config.visual_acuity,
            colour_imprint,
        }
    }

    /// Heading angle in `[0, 2π)`
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Unit vector of `heading`
    pub fn direction(&self) -> DVec2 {
        self.direction
    }

    /// Distance covered by one `move_step`
    pub fn displacement(&self) -> f64 {
        self.speed * self.acceleration
    }

    /// Rotate by `theta` radians, keeping heading in `[0, 2π)`
    pub fn turn(&mut self, theta: f64) {
        let heading = geometry::wrap_angle(self.heading + theta);
        self.heading = heading;
        self.direction = geometry::unit_vector(heading);
    }

    /// Advance along the current heading, wrapping around the world edges.
    ///
    /// Position is left untouched on error.
    pub fn move_step(&mut self) -> Result<(), GeometryError> {
        let offset = geometry::ensure_finite(self.direction * self.displacement(), "move offset")?;
        let next = geometry::ensure_finite(self.position + offset, "moved position")?;
        self.position = geometry::wrap_position(next);
        Ok(())
    }

    /// Render export. A predator that just killed shows black for one tick.
    pub fn draw_info(&self) -> DrawInfo {
        let colour = if self.attack_success {
            Rgb::BLACK.to_256()
        } else {
            self.colour_imprint.to_256()
        };
        DrawInfo {
            kind: AgentKind::Predator,
            x: self.position.x,
            y: self.position.y,
            heading: self.heading,
            colour,
        }
    }
}

impl std::fmt::Display for Predator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "pos=({},{})", self.position.x, self.position.y)?;
        writeln!(f, "speed={}", self.speed)?;
        writeln!(f, "acceleration={}", self.acceleration)?;
        writeln!(f, "heading={}", self.heading)?;
        writeln!(f, "dir=({},{})", self.direction.x, self.direction.y)?;
        writeln!(f, "turn_rate={}", self.turn_rate)?;
        writeln!(f, "vsr={}", self.visual_search_range)?;
        writeln!(f, "acuity={}", self.visual_acuity)?;
        writeln!(f, "lifespan={}", self.lifespan)?;
        writeln!(f, "hunger={}", self.hunger)?;
        writeln!(f, "attack_success={}", self.attack_success)?;
        writeln!(f, "fertility={}", self.fertility)?;
        writeln!(f, "gravid={}", self.gravid)?;
        writeln!(f, "imprint={}", self.colour_imprint)
    }
}

#[cfg(test)]
pub(crate) fn test_predator(x: f64, y: f64) -> Predator {
    let config = PredatorConfig {
        base_speed: 0.1,
        base_acceleration: 1.0,
        turn_rate_limit: 0.2,
        visual_search_range: 0.5,
        visual_acuity: 1.0,
        ..PredatorConfig::default()
    };
    Predator::new(DVec2::new(x, y), 0.0, 100, Rgb::new(0.5, 0.5, 0.5), &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    fn assert_direction_matches(p: &Predator) {
        let h = p.heading();
        assert!((0.0..TAU).contains(&h));
        assert!((p.direction().x - h.cos()).abs() < 1e-12);
        assert!((p.direction().y - h.sin()).abs() < 1e-12);
    }

    #[test]
    fn test_turn_keeps_direction_in_sync() {
        let mut p = test_predator(0.0, 0.0);
        for theta in [0.3, -1.0, 4.0 * PI, -7.5, PI, 0.0, 100.0] {
            p.turn(theta);
            assert_direction_matches(&p);
        }
    }

    #[test]
    fn test_turn_wraps_negative() {
        let mut p = test_predator(0.0, 0.0);
        p.turn(-0.5 * PI);
        assert!((p.heading() - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_move_along_heading() {
        let mut p = test_predator(0.0, 0.0);
        p.move_step().unwrap();
        assert!((p.position.x - 0.1).abs() < 1e-12);
        assert!(p.position.y.abs() < 1e-12);
    }

    #[test]
    fn test_move_wraps_edges() {
        let mut p = test_predator(0.95, 0.0);
        p.move_step().unwrap();
        assert!((p.position.x + 0.95).abs() < 1e-12);

        // Displacement of several world widths still lands inside the world
        let mut p = test_predator(0.0, 0.0);
        p.turn(0.5 * PI);
        p.speed = 7.3;
        p.move_step().unwrap();
        assert!((-1.0..=1.0).contains(&p.position.x));
        assert!((-1.0..=1.0).contains(&p.position.y));
        assert!((p.position.y + 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_move_rejects_non_finite() {
        let mut p = test_predator(0.2, 0.3);
        p.speed = f64::INFINITY;
        assert!(p.move_step().is_err());
        assert_eq!(p.position, DVec2::new(0.2, 0.3));
    }

    #[test]
    fn test_draw_info_kill_cue() {
        let mut p = test_predator(0.1, -0.2);
        p.colour_imprint = Rgb::new(1.0, 0.0, 0.0);
        let info = p.draw_info();
        assert_eq!(info.kind, AgentKind::Predator);
        assert_eq!(info.colour, [255, 0, 0]);
        assert_eq!((info.x, info.y), (0.1, -0.2));

        p.attack_success = true;
        assert_eq!(p.draw_info().colour, [0, 0, 0]);
    }

    #[test]
    fn test_display_dump_is_deterministic() {
        let p = test_predator(0.0, 0.0);
        let dump = p.to_string();
        assert_eq!(dump, p.to_string());
        assert!(dump.starts_with("pos=(0,0)\n"));
        assert!(dump.contains("hunger=0\n"));
        assert!(dump.contains("gravid=false\n"));
        assert_eq!(dump.lines().count(), 14);
    }
}
