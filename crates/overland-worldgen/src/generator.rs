//! Terrain synthesis.
//!
//! Each biome fills an all-Grass grid through a fixed sequence of raster
//! passes. Passes only ever read the chunk being built, never a neighbor,
//! so a chunk's tiles depend on nothing but its coordinates.
//! Seam artifacts at chunk boundaries are accepted policy, not bugs.

use overland_common::{ChunkCoord, TileType};
use tracing::debug;

use crate::biome::{classify, Biome};
use crate::grid::TileGrid;
use crate::hash::{chance, hash};

/// Parameters controlling terrain synthesis.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GeneratorConfig {
    /// Tiles per chunk edge
    pub chunk_tiles: u32,
    /// Layer sparse decoration (flowers, bushes, rocks, stray paths) onto
    /// plain chunks
    pub decorate_plains: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            chunk_tiles: 20,
            decorate_plains: true,
        }
    }
}

/// Procedural chunk generator.
///
/// Stateless apart from its configuration: generating the same coordinate
/// twice yields tile-identical grids, regardless of what was generated in
/// between.
#[derive(Debug, Clone)]
pub struct WorldGenerator {
    /// Configuration
    config: GeneratorConfig,
}

impl WorldGenerator {
    /// Creates a new generator with the given config.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Creates a generator with default config and the given grid size.
    #[must_use]
    pub fn with_chunk_tiles(chunk_tiles: u32) -> Self {
        Self::new(GeneratorConfig {
            chunk_tiles,
            ..Default::default()
        })
    }

    /// Returns the generator configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the chunk at the given coordinate.
    #[must_use]
    pub fn generate_chunk(&self, coord: ChunkCoord) -> TileGrid {
        let biome = classify(coord.x, coord.y);
        let mut grid = TileGrid::new(coord, self.config.chunk_tiles);

        match biome {
            Biome::Plain => {
                if self.config.decorate_plains {
                    Self::decorate_plain(&mut grid, coord);
                }
            },
            Biome::Forest => Self::grow_forest(&mut grid, coord),
            Biome::Settlement => Self::build_settlement(&mut grid, coord),
        }

        debug!("generated {biome:?} chunk at ({}, {})", coord.x, coord.y);
        grid
    }

    /// Scatters sparse decoration over an otherwise plain chunk.
    ///
    /// All tiers of one cell read the same hash draw, so thresholds are
    /// cumulative: a cell falls into at most one band (stray path 1%,
    /// flower 1.5%, bush 1%, rock 0.5%).
    fn decorate_plain(grid: &mut TileGrid, coord: ChunkCoord) {
        let size = grid.size() as i32;
        for ty in 0..size {
            for tx in 0..size {
                if chance(tx, ty, 0.01, coord.x, coord.y)
                    && grid.count_neighbors(tx, ty, TileType::Path) == 0
                {
                    grid.set(tx, ty, TileType::Path);
                } else if chance(tx, ty, 0.025, coord.x, coord.y) {
                    grid.set(tx, ty, TileType::Flower);
                } else if chance(tx, ty, 0.035, coord.x, coord.y) {
                    grid.set(tx, ty, TileType::Bush);
                } else if chance(tx, ty, 0.04, coord.x, coord.y) {
                    grid.set(tx, ty, TileType::Rock);
                }
            }
        }
    }

    /// Grows a forest: scattered seeds, then two cellular growth passes.
    fn grow_forest(grid: &mut TileGrid, coord: ChunkCoord) {
        let size = grid.size() as i32;

        // Seeding pass
        for ty in 0..size {
            for tx in 0..size {
                if chance(tx, ty, 0.03, coord.x, coord.y) {
                    grid.set(tx, ty, TileType::Tree);
                }
            }
        }

        // Growth passes. Each scan reads mutations applied earlier in the
        // same scan (row-major, ascending); the iteration order is part
        // of the output, not an implementation detail.
        for _ in 0..2 {
            for ty in 0..size {
                for tx in 0..size {
                    if grid.get(tx, ty) != Some(TileType::Grass) {
                        continue;
                    }
                    let neighbors = grid.count_neighbors(tx, ty, TileType::Tree);
                    let grow = if neighbors >= 2 {
                        chance(tx, ty, 0.40, coord.x, coord.y)
                    } else if neighbors == 1 {
                        chance(tx, ty, 0.15, coord.x, coord.y)
                    } else {
                        chance(tx, ty, 0.02, coord.x, coord.y)
                    };
                    if grow {
                        grid.set(tx, ty, TileType::Tree);
                    }
                }
            }
        }
    }

    /// Lays out a settlement: a ring of houses around the chunk center,
    /// path aprons around each house, and a plaza lattice near the center.
    fn build_settlement(grid: &mut TileGrid, coord: ChunkCoord) {
        let size = grid.size() as i32;
        let center = size / 2;
        let seed = hash(coord.x, coord.y, 0, 0);
        let house_count = 3 + (seed % 3) as i32;
        let ring_radius = f64::from(3 + (seed % 3) as i32);

        for i in 0..house_count {
            let angle = f64::from(i) * std::f64::consts::TAU / f64::from(house_count);
            let hx = center + (ring_radius * angle.cos()).round() as i32;
            let hy = center + (ring_radius * angle.sin()).round() as i32;
            if hx < 0 || hx >= size || hy < 0 || hy >= size {
                // Off-grid placements are skipped, never retried or shifted.
                continue;
            }
            grid.set(hx, hy, TileType::House);

            // Path apron: only Grass converts, so paths never overwrite a
            // house or an existing path.
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    if grid.get(hx + dx, hy + dy) == Some(TileType::Grass) {
                        grid.set(hx + dx, hy + dy, TileType::Path);
                    }
                }
            }
        }

        // Plaza lattice: even offsets from center within Euclidean
        // distance 5, checked against the grid as it stands now.
        for ty in 0..size {
            for tx in 0..size {
                let dx = tx - center;
                let dy = ty - center;
                if dx * dx + dy * dy > 25 {
                    continue;
                }
                if dx % 2 != 0 || dy % 2 != 0 {
                    continue;
                }
                if grid.get(tx, ty) == Some(TileType::Grass) {
                    grid.set(tx, ty, TileType::Path);
                }
            }
        }
    }
}
