//! Visual predator agent for colour-polymorphism predator/prey simulations
//!
//! This crate implements:
//! - Prey perception biased by a learned colour imprint
//! - Turn-rate limited pursuit on a toroidal `[-1, 1]` world
//! - Stochastic attacks that pull the imprint toward eaten prey
//! - Per-tick ageing that reports an advisory lifecycle state
//!
//! The prey model and the scheduler that drives ticks live outside this
//! crate; prey are reached through the [`Prey`] trait.

pub mod attack;
pub mod colour;
pub mod config;
pub mod geometry;
pub mod lifecycle;
pub mod perception;
pub mod predator;
pub mod prey;
pub mod pursuit;
pub mod rng;
pub mod spawning;

// Re-export main types for convenience
pub use attack::SATIETY;
pub use colour::Rgb;
pub use config::{PredatorConfig, WorldBounds, UNBOUNDED_LIFESPAN};
pub use geometry::GeometryError;
pub use lifecycle::LifecycleState;
pub use perception::{Candidate, SectorGrid};
pub use predator::{AgentKind, DrawInfo, Predator};
pub use prey::{Prey, PreyRecord};
pub use rng::SimRng;
pub use spawning::generate_predators;
