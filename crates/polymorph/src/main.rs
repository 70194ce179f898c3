use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

mod headless;
mod settings;

use headless::HeadlessRun;
use settings::RunConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of predators to generate
    #[arg(long, default_value = "20")]
    predators: usize,

    /// Number of prey to scatter (overrides config)
    #[arg(long)]
    prey: Option<usize>,

    /// Number of ticks to simulate
    #[arg(long, default_value = "500")]
    ticks: u64,

    /// RNG seed for a reproducible run
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Recognition permissiveness in [0, 1] (overrides config)
    #[arg(long)]
    search_chance: Option<f64>,

    /// Probability that an attack kills (overrides config)
    #[arg(long)]
    attack_chance: Option<f64>,

    /// Imprint pull per kill in [0, 1] (overrides config)
    #[arg(long)]
    imprint_factor: Option<f64>,

    /// Restrict prey search to nearby grid sectors
    #[arg(long)]
    indexed: bool,

    /// RON config file (default: ./polymorph.ron if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write per-tick draw frames to this RON file
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = RunConfig::load(args.config.as_deref())?;
    if let Some(count) = args.prey {
        config.prey.count = count;
    }
    if let Some(chance) = args.search_chance {
        config.hunt.search_chance = chance;
    }
    if let Some(chance) = args.attack_chance {
        config.hunt.attack_chance = chance;
    }
    if let Some(factor) = args.imprint_factor {
        config.hunt.imprint_factor = factor;
    }
    if args.indexed {
        config.index.enabled = true;
    }

    log::info!("Starting polymorph (seed {})", args.seed);

    let rng = Xoshiro256StarStar::seed_from_u64(args.seed);
    let mut run = HeadlessRun::new(config, args.predators, rng);

    let mut frames = Vec::new();
    let sink = if args.export.is_some() {
        Some(&mut frames)
    } else {
        None
    };
    let summary = run.run(args.ticks, sink)?;

    if let Some(path) = &args.export {
        let text = ron::ser::to_string_pretty(&frames, ron::ser::PrettyConfig::default())
            .context("Failed to serialize frames")?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write frames to {}", path.display()))?;
        log::info!("Wrote {} frames to {}", frames.len(), path.display());
    }

    log::info!(
        "Finished after {} ticks: {} kills, {} predator deaths, {} errors, {} predators and {} prey left",
        summary.ticks,
        summary.kills,
        summary.predator_deaths,
        summary.errors,
        summary.predators_left,
        summary.prey_left
    );
    if let Some(prey) = run.prey().first() {
        log::debug!("first remaining prey:\n{}", prey);
    }
    for predator in run.predators().iter().take(3) {
        log::debug!("surviving predator:\n{}", predator);
    }

    Ok(())
}
