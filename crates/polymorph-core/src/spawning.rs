//! Predator population generation

use std::f64::consts::TAU;

use glam::DVec2;

use crate::colour::Rgb;
use crate::config::{PredatorConfig, WorldBounds, UNBOUNDED_LIFESPAN};
use crate::predator::Predator;
use crate::rng::SimRng;

/// Create `count` predators with random positions, headings and imprints
pub fn generate_predators<R: SimRng + ?Sized>(
    count: usize,
    config: &PredatorConfig,
    rng: &mut R,
) -> Vec<Predator> {
    let population: Vec<Predator> = (0..count)
        .map(|_| {
            let position = random_position(config, rng);
            let lifespan = initial_lifespan(config, rng);
            let heading = rng.next_unit() * TAU;
            let imprint = Rgb::random(rng);
            Predator::new(position, heading, lifespan, imprint, config)
        })
        .collect();

    log::info!(
        "Generated {} predators (ageing: {}, vsr: {})",
        population.len(),
        config.ageing_enabled,
        config.visual_search_range
    );
    population
}

fn random_position<R: SimRng + ?Sized>(config: &PredatorConfig, rng: &mut R) -> DVec2 {
    let WorldBounds { min, max } = config.bounds;
    DVec2::new(
        min.x + rng.next_unit() * (max.x - min.x),
        min.y + rng.next_unit() * (max.y - min.y),
    )
}

fn initial_lifespan<R: SimRng + ?Sized>(config: &PredatorConfig, rng: &mut R) -> i32 {
    if !config.ageing_enabled {
        return UNBOUNDED_LIFESPAN;
    }
    if config.randomize_lifespan {
        let (low, high) = lifespan_bounds(config.base_lifespan);
        rng.int_in(low, high)
    } else {
        config.base_lifespan
    }
}

/// Whole lifespans inside `[0.7 * base, 1.3 * base]`, in exact integer math
fn lifespan_bounds(base: i32) -> (i32, i32) {
    let base = i64::from(base);
    let low = (7 * base).div_euclid(10) + i64::from((7 * base).rem_euclid(10) != 0);
    let high = (13 * base).div_euclid(10);
    let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    (clamp(low), clamp(high))
}
