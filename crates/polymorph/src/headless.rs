//! Headless tick loop driving the predator core
//!
//! Prey here are static records: they never move or breed, they only wait to
//! be eaten. Each tick every predator ages, acts on the state it reports and
//! the dead of both kinds are removed once all predators have acted.

use anyhow::Result;
use glam::DVec2;
use polymorph_core::{
    generate_predators, DrawInfo, GeometryError, LifecycleState, Predator, PreyRecord, Rgb,
    SectorGrid, SimRng,
};
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};

use crate::settings::RunConfig;

/// Render snapshot of one tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub prey_alive: usize,
    pub agents: Vec<DrawInfo>,
}

/// Totals reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub kills: usize,
    pub predator_deaths: usize,
    pub errors: usize,
    pub predators_left: usize,
    pub prey_left: usize,
}

/// Counts from a single tick
#[derive(Debug, Clone, Copy, Default)]
struct TickStats {
    kills: usize,
    deaths: usize,
    errors: usize,
}

pub struct HeadlessRun {
    config: RunConfig,
    rng: Xoshiro256StarStar,
    predators: Vec<Predator>,
    prey: Vec<PreyRecord>,
    tick: u64,
}

impl HeadlessRun {
    pub fn new(config: RunConfig, predator_count: usize, mut rng: Xoshiro256StarStar) -> Self {
        let predators = generate_predators(predator_count, &config.predator, &mut rng);
        let prey = scatter_prey(&config, &mut rng);
        log::info!(
            "Headless run: {} predators, {} prey, indexed search: {}",
            predators.len(),
            prey.len(),
            config.index.enabled
        );
        Self {
            config,
            rng,
            predators,
            prey,
            tick: 0,
        }
    }

    pub fn predators(&self) -> &[Predator] {
        &self.predators
    }

    pub fn prey(&self) -> &[PreyRecord] {
        &self.prey
    }

    /// Run `ticks` ticks, collecting a frame per tick when `frames` is given
    pub fn run(&mut self, ticks: u64, mut frames: Option<&mut Vec<Frame>>) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for _ in 0..ticks {
            if self.predators.is_empty() {
                log::info!("All predators dead after {} ticks", self.tick);
                break;
            }
            let stats = self.step()?;
            summary.ticks += 1;
            summary.kills += stats.kills;
            summary.predator_deaths += stats.deaths;
            summary.errors += stats.errors;
            if let Some(frames) = frames.as_deref_mut() {
                frames.push(self.frame());
            }
        }
        summary.predators_left = self.predators.len();
        summary.prey_left = self.prey.len();
        Ok(summary)
    }

    /// Advance every predator by one tick
    fn step(&mut self) -> Result<TickStats> {
        self.tick += 1;
        let mut stats = TickStats::default();
        let grid = if self.config.index.enabled {
            let index = &self.config.index;
            match SectorGrid::build(&self.prey, index.cell_size, index.cells) {
                Ok(grid) => Some(grid),
                Err(err) => {
                    stats.errors += 1;
                    log::warn!(
                        "Sector grid unavailable on tick {}, searching exhaustively: {}",
                        self.tick,
                        err
                    );
                    None
                }
            }
        } else {
            None
        };

        let mut alive = Vec::with_capacity(self.predators.len());
        for predator in self.predators.iter_mut() {
            let state = predator.age(&self.config.predator);
            let outcome = match state {
                LifecycleState::Death => {
                    stats.deaths += 1;
                    alive.push(false);
                    continue;
                }
                // Mating is handled elsewhere; without it the predator roams
                LifecycleState::Patrol | LifecycleState::MateSearch => {
                    predator.move_step().map(|_| false)
                }
                LifecycleState::PreySearch => hunt(
                    predator,
                    &mut self.prey,
                    grid.as_ref(),
                    &self.config,
                    &mut self.rng,
                ),
            };
            match outcome {
                Ok(true) => stats.kills += 1,
                Ok(false) => {}
                Err(err) => {
                    stats.errors += 1;
                    log::warn!("Predator action failed on tick {}: {}", self.tick, err);
                }
            }
            alive.push(true);
        }

        let mut flags = alive.into_iter();
        self.predators.retain(|_| flags.next().unwrap_or(true));
        self.prey.retain(|p| p.lifespan > 0);

        log::debug!(
            "tick {}: {} kills, {} predator deaths, {} predators, {} prey",
            self.tick,
            stats.kills,
            stats.deaths,
            self.predators.len(),
            self.prey.len()
        );
        Ok(stats)
    }

    fn frame(&self) -> Frame {
        Frame {
            tick: self.tick,
            prey_alive: self.prey.len(),
            agents: self.predators.iter().map(Predator::draw_info).collect(),
        }
    }
}

/// Search, pursue and attack for one predator. Returns whether it killed.
fn hunt(
    predator: &mut Predator,
    prey: &mut [PreyRecord],
    grid: Option<&SectorGrid>,
    config: &RunConfig,
    rng: &mut Xoshiro256StarStar,
) -> Result<bool, GeometryError> {
    let search_chance = config.hunt.search_chance;
    let target = match grid {
        Some(grid) => predator.prey_search_indexed(grid, &*prey, search_chance)?,
        None => predator.prey_search(&*prey, search_chance)?,
    };
    let Some(target) = target else {
        // Nothing recognised in range; keep roaming
        predator.move_step()?;
        return Ok(false);
    };
    if !predator.intercept(Some(&target))? {
        return Ok(false);
    }
    let victim = prey.get_mut(target.index);
    Ok(predator.attack(
        victim,
        config.hunt.attack_chance,
        config.hunt.imprint_factor,
        rng,
    ))
}

fn scatter_prey(config: &RunConfig, rng: &mut Xoshiro256StarStar) -> Vec<PreyRecord> {
    let bounds = config.predator.bounds;
    (0..config.prey.count)
        .map(|_| {
            let position = DVec2::new(
                bounds.min.x + rng.next_unit() * (bounds.max.x - bounds.min.x),
                bounds.min.y + rng.next_unit() * (bounds.max.y - bounds.min.y),
            );
            PreyRecord::new(position, Rgb::random(rng), config.prey.lifespan)
        })
        .collect()
}
