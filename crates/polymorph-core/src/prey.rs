//! Prey-side interface consumed by the predator
//!
//! The prey model lives outside this crate. Predators only need to see where a
//! prey is, what colour it is and whether it is still alive, and to flag it as
//! eaten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::colour::Rgb;

/// What a predator can observe about, and do to, a prey agent
pub trait Prey {
    fn position(&self) -> DVec2;

    fn colouration(&self) -> Rgb;

    /// Remaining lifespan; 0 or less means dead and awaiting removal
    fn lifespan(&self) -> i32;

    /// Flag the prey as eaten. Removal is left to the scheduler.
    fn kill(&mut self);

    fn is_alive(&self) -> bool {
        self.lifespan() > 0
    }
}

/// Plain prey data record with no behaviour of its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreyRecord {
    pub position: DVec2,
    pub colouration: Rgb,
    pub lifespan: i32,
}

impl PreyRecord {
    pub fn new(position: DVec2, colouration: Rgb, lifespan: i32) -> Self {
        Self {
            position,
            colouration,
            lifespan,
        }
    }
}

impl Prey for PreyRecord {
    fn position(&self) -> DVec2 {
        self.position
    }

    fn colouration(&self) -> Rgb {
        self.colouration
    }

    fn lifespan(&self) -> i32 {
        self.lifespan
    }

    fn kill(&mut self) {
        self.lifespan = 0;
    }
}

impl std::fmt::Display for PreyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "pos=({},{})", self.position.x, self.position.y)?;
        writeln!(f, "lifespan={}", self.lifespan)?;
        writeln!(f, "colouration={}", self.colouration)
    }
}
