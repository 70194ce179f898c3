//! Run configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `polymorph.ron` in the working directory, or the file given by `--config`
//! 3. Environment variables prefixed with `POLYMORPH_`
//!
//! Example environment variable: `POLYMORPH_HUNT__SEARCH_CHANCE=0.8`

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use polymorph_core::PredatorConfig;
use serde::{Deserialize, Serialize};

/// Everything a headless run needs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunConfig {
    #[serde(default)]
    pub predator: PredatorConfig,

    #[serde(default)]
    pub hunt: HuntConfig,

    #[serde(default)]
    pub prey: PreyFieldConfig,

    #[serde(default)]
    pub index: IndexConfig,
}

/// Per-tick hunting parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuntConfig {
    /// Higher values make recognition easier
    pub search_chance: f64,
    /// Probability that one attack kills
    pub attack_chance: f64,
    /// How far one kill pulls the imprint toward the prey colour
    pub imprint_factor: f64,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            search_chance: 0.5,
            attack_chance: 0.8,
            imprint_factor: 0.2,
        }
    }
}

/// Static prey scattered for the predators to hunt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreyFieldConfig {
    pub count: usize,
    pub lifespan: i32,
}

impl Default for PreyFieldConfig {
    fn default() -> Self {
        Self {
            count: 200,
            lifespan: 1000,
        }
    }
}

/// Sector grid used by indexed prey search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    pub enabled: bool,
    pub cell_size: f64,
    pub cells: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            cell_size: 0.1,
            cells: 20,
        }
    }
}

impl RunConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. Config file (optional unless given explicitly)
    /// 3. Environment variables prefixed with `POLYMORPH_` (highest priority)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("polymorph")
                .format(FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1: Compiled defaults (predator settings default through serde)
            .set_default("hunt.search_chance", 0.5)?
            .set_default("hunt.attack_chance", 0.8)?
            .set_default("hunt.imprint_factor", 0.2)?
            .set_default("prey.count", 200_i64)?
            .set_default("prey.lifespan", 1000_i64)?
            .set_default("index.enabled", false)?
            .set_default("index.cell_size", 0.1)?
            .set_default("index.cells", 20_i64)?
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (POLYMORPH_HUNT__SEARCH_CHANCE, etc.)
            .add_source(Environment::with_prefix("POLYMORPH").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
