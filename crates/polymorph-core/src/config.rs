//! Predator population parameters
//!
//! Serializable to RON. Every field has a default so partial config files only
//! need to name what they override.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::geometry::{WORLD_MAX, WORLD_MIN};

/// Lifespan assigned when ageing is disabled
pub const UNBOUNDED_LIFESPAN: i32 = 99_999;

/// Axis-aligned spawn rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl WorldBounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, pos: DVec2) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            min: DVec2::splat(WORLD_MIN),
            max: DVec2::splat(WORLD_MAX),
        }
    }
}

/// Parameters shared by every predator in a population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredatorConfig {
    /// Spawn area
    pub bounds: WorldBounds,
    /// Decrement lifespan every tick
    pub ageing_enabled: bool,
    /// Spread lifespans over 70%..130% of `base_lifespan`
    pub randomize_lifespan: bool,
    pub base_lifespan: i32,
    pub base_speed: f64,
    pub base_acceleration: f64,
    /// Max heading change per pursuit step (radians)
    pub turn_rate_limit: f64,
    pub visual_search_range: f64,
    /// Recognition multiplier; 1.0 is neutral
    pub visual_acuity: f64,
    /// Hunger above this kills the predator when starvation is enabled
    pub hunger_limit: i32,
    pub starvation_enabled: bool,
    /// Hunger below this sends the predator looking for a mate
    pub sexual_readiness_threshold: i32,
}

impl Default for PredatorConfig {
    fn default() -> Self {
        Self {
            bounds: WorldBounds::default(),
            ageing_enabled: true,
            randomize_lifespan: true,
            base_lifespan: 500,
            base_speed: 0.02,
            base_acceleration: 1.0,
            turn_rate_limit: 0.2,
            visual_search_range: 0.5,
            visual_acuity: 1.0,
            hunger_limit: 100,
            starvation_enabled: true,
            sexual_readiness_threshold: -10,
        }
    }
}
