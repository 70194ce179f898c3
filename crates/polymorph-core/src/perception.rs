//! Visual prey search
//!
//! A predator ranks every live prey within its visual search range by how
//! closely the prey matches its colour imprint, then walks the ranking and
//! takes the first prey that passes the recognition test
//! `(1 - χ)(1 - δ)γ > 1 - search_chance`, where χ is colour difference, δ is
//! distance and γ is visual acuity.
//!
//! Distance and colour difference are returned in [`Candidate`] values rather
//! than stored on the prey, so a scan only needs shared access to the
//! population.
//!
//! [`SectorGrid`] buckets prey by grid cell so a search can be limited to the
//! cells the predator's search circle can reach.

use std::cmp::Ordering;
use std::f64::consts::FRAC_1_SQRT_2;

use glam::DVec2;

use crate::geometry::{self, GeometryError};
use crate::predator::Predator;
use crate::prey::Prey;

/// A prey within visual range, with the values it was ranked by
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Index into the population that was scanned
    pub index: usize,
    /// Prey position at scan time
    pub position: DVec2,
    /// Euclidean distance from the predator (δ)
    pub distance: f64,
    /// Normalised colour distance from the predator's imprint (χ)
    pub colour_difference: f64,
}

/// Ranking order: colour difference, then distance, then population index
pub fn visual_difference_order(a: &Candidate, b: &Candidate) -> Ordering {
    a.colour_difference
        .total_cmp(&b.colour_difference)
        .then(a.distance.total_cmp(&b.distance))
        .then(a.index.cmp(&b.index))
}

/// Grid cells `(row, col)` visited by a sector query
pub type Sector = (usize, usize);

impl Predator {
    /// All live prey within visual range, most salient first
    pub fn ranked_candidates<P: Prey>(
        &self,
        population: &[P],
    ) -> Result<Vec<Candidate>, GeometryError> {
        self.rank(population, 0..population.len())
    }

    /// Deterministic recognition test for one ranked candidate
    pub fn recognises(&self, candidate: &Candidate, search_chance: f64) -> bool {
        (1.0 - candidate.colour_difference) * (1.0 - candidate.distance) * self.visual_acuity
            > 1.0 - search_chance
    }

    /// Pick at most one prey to pursue from the whole population.
    ///
    /// `Ok(None)` means nothing in range was recognised. A malformed position
    /// aborts the scan.
    pub fn prey_search<P: Prey>(
        &self,
        population: &[P],
        search_chance: f64,
    ) -> Result<Option<Candidate>, GeometryError> {
        let ranked = self.ranked_candidates(population)?;
        Ok(self.select(&ranked, search_chance))
    }

    /// Same as [`Predator::prey_search`] but only looks at prey bucketed in
    /// grid cells the search circle can reach.
    pub fn prey_search_indexed<P: Prey>(
        &self,
        grid: &SectorGrid,
        population: &[P],
        search_chance: f64,
    ) -> Result<Option<Candidate>, GeometryError> {
        let nearby = grid.query(self.position, self.visual_search_range)?;
        let ranked = self.rank(population, nearby.into_iter())?;
        Ok(self.select(&ranked, search_chance))
    }

    /// Grid cells under the four diagonal points of the search circle
    /// (45°, 135°, 225° and 315° from the world x axis).
    pub fn sector_samples(
        &self,
        cell_size: f64,
        cells: usize,
    ) -> Result<[Sector; 4], GeometryError> {
        let reach = self.visual_search_range * FRAC_1_SQRT_2;
        diagonal_sectors(self.position, reach, cell_size, cells)
    }

    fn rank<P: Prey>(
        &self,
        population: &[P],
        indices: impl Iterator<Item = usize>,
    ) -> Result<Vec<Candidate>, GeometryError> {
        let mut candidates = Vec::new();
        for index in indices {
            let Some(prey) = population.get(index) else {
                continue;
            };
            // Eaten prey stay in the population until the scheduler removes them
            if !prey.is_alive() {
                continue;
            }
            let position = prey.position();
            let distance = geometry::distance(self.position, position)?;
            if distance <= self.visual_search_range {
                candidates.push(Candidate {
                    index,
                    position,
                    distance,
                    colour_difference: self.colour_imprint.distance(&prey.colouration()),
                });
            }
        }
        candidates.sort_by(visual_difference_order);
        log::debug!(
            "prey search at ({:.3}, {:.3}): {} candidates within {:.3}",
            self.position.x,
            self.position.y,
            candidates.len(),
            self.visual_search_range
        );
        Ok(candidates)
    }

    fn select(&self, ranked: &[Candidate], search_chance: f64) -> Option<Candidate> {
        ranked
            .iter()
            .find(|c| self.recognises(c, search_chance))
            .copied()
    }
}

fn diagonal_sectors(
    center: DVec2,
    reach: f64,
    cell_size: f64,
    cells: usize,
) -> Result<[Sector; 4], GeometryError> {
    let points = [
        center + DVec2::new(reach, reach),
        center + DVec2::new(-reach, reach),
        center + DVec2::new(-reach, -reach),
        center + DVec2::new(reach, -reach),
    ];
    let mut sectors = [(0, 0); 4];
    for (sector, point) in sectors.iter_mut().zip(points) {
        *sector = geometry::position_to_sector(cell_size, cells, point)?;
    }
    Ok(sectors)
}

/// Uniform grid of prey indices keyed by `(row, col)` cell
#[derive(Debug, Clone)]
pub struct SectorGrid {
    cell_size: f64,
    cells: usize,
    /// buckets[row * cells + col]
    buckets: Vec<Vec<usize>>,
}

impl SectorGrid {
    /// Bucket every prey in `population` by cell
    pub fn build<P: Prey>(
        population: &[P],
        cell_size: f64,
        cells: usize,
    ) -> Result<Self, GeometryError> {
        // Validates the grid parameters even for an empty population
        geometry::position_to_sector(cell_size, cells, DVec2::ZERO)?;
        let mut grid = Self {
            cell_size,
            cells,
            buckets: vec![Vec::new(); cells * cells],
        };
        for (index, prey) in population.iter().enumerate() {
            let (row, col) = geometry::position_to_sector(cell_size, cells, prey.position())?;
            grid.buckets[row * cells + col].push(index);
        }
        Ok(grid)
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Prey indices bucketed in one cell
    pub fn get(&self, row: usize, col: usize) -> &[usize] {
        if row < self.cells && col < self.cells {
            &self.buckets[row * self.cells + col]
        } else {
            &[]
        }
    }

    /// Prey indices in every cell touched by the square circumscribing the
    /// circle of `radius` around `center`, in ascending order.
    pub fn query(&self, center: DVec2, radius: f64) -> Result<Vec<usize>, GeometryError> {
        // Corners of the circumscribed square are the diagonal samples at radius * √2
        let corners = diagonal_sectors(center, radius, self.cell_size, self.cells)?;
        let rows = corners.iter().map(|&(r, _)| r);
        let cols = corners.iter().map(|&(_, c)| c);
        let (row_min, row_max) = (rows.clone().min().unwrap_or(0), rows.max().unwrap_or(0));
        let (col_min, col_max) = (cols.clone().min().unwrap_or(0), cols.max().unwrap_or(0));

        let mut found = Vec::new();
        for row in row_min..=row_max {
            for col in col_min..=col_max {
                found.extend_from_slice(self.get(row, col));
            }
        }
        found.sort_unstable();
        Ok(found)
    }
}
