//! Bounded chunk cache.

use std::collections::VecDeque;

use ahash::AHashMap;
use overland_common::{ChunkCoord, ConfigResult, TileType, WorldConfig, WorldCoord};
use overland_worldgen::{GeneratorConfig, TileGrid, WorldGenerator};
use tracing::{debug, info};

/// Bounded in-memory cache of generated chunks.
///
/// Two eviction mechanisms run side by side and neither disables the
/// other:
///
/// - **Capacity**: when an insert would exceed `max_loaded_chunks`, the
///   oldest-*inserted* entry is evicted: FIFO by insertion, not LRU.
///   Reads never refresh an entry's position.
/// - **Distance**: [`ChunkStore::prune`] drops every chunk outside a
///   Chebyshev radius of the current focal chunk, regardless of age.
///
/// Evicting is always safe because generation is deterministic: a dropped
/// chunk regenerates tile-identically on its next access.
pub struct ChunkStore {
    /// Configuration
    config: WorldConfig,
    /// Terrain generator
    generator: WorldGenerator,
    /// Loaded chunks
    chunks: AHashMap<ChunkCoord, TileGrid>,
    /// Insertion order, front = oldest. Mutates together with `chunks`:
    /// both always hold exactly the same key set.
    order: VecDeque<ChunkCoord>,
}

impl ChunkStore {
    /// Creates a chunk store, validating the configuration up front.
    pub fn new(config: WorldConfig) -> ConfigResult<Self> {
        let generator_config = GeneratorConfig {
            chunk_tiles: config.chunk_tiles(),
            ..GeneratorConfig::default()
        };
        Self::with_generator_config(config, generator_config)
    }

    /// Creates a chunk store with explicit generator parameters.
    ///
    /// The generator's grid size always follows the world geometry; only
    /// the remaining synthesis knobs are taken from `generator_config`.
    pub fn with_generator_config(
        config: WorldConfig,
        generator_config: GeneratorConfig,
    ) -> ConfigResult<Self> {
        config.validate()?;
        let generator = WorldGenerator::new(GeneratorConfig {
            chunk_tiles: config.chunk_tiles(),
            ..generator_config
        });
        info!(
            "chunk store ready: {} tiles per edge, capacity {}, retain radius {}",
            config.chunk_tiles(),
            config.max_loaded_chunks,
            config.retain_radius
        );
        Ok(Self {
            config,
            generator,
            chunks: AHashMap::new(),
            order: VecDeque::new(),
        })
    }

    /// Gets the chunk at the given coordinate, generating it on first
    /// access.
    ///
    /// A hit returns the stored grid unchanged and does not touch the
    /// insertion order. A miss evicts at most one oldest entry (only when
    /// the store is full), then generates, stores, and returns the chunk.
    pub fn get(&mut self, coord: ChunkCoord) -> &TileGrid {
        if !self.chunks.contains_key(&coord) {
            if self.chunks.len() >= self.config.max_loaded_chunks {
                self.evict_oldest();
            }
            let grid = self.generator.generate_chunk(coord);
            self.chunks.insert(coord, grid);
            self.order.push_back(coord);
        }
        match self.chunks.get(&coord) {
            Some(grid) => grid,
            // Inserted above when missing.
            None => unreachable!(),
        }
    }

    /// Reads the tile at a world-pixel position, loading its chunk if
    /// needed.
    pub fn tile_at_world(&mut self, pos: WorldCoord) -> Option<TileType> {
        let chunk_size = self.config.chunk_size;
        let tile_size = self.config.tile_size;
        let coord = pos.to_chunk_coord(chunk_size);
        let local = pos.to_local_tile(chunk_size, tile_size);
        self.get(coord).get_local(local)
    }

    /// Drops every chunk whose Chebyshev distance from the focal chunk
    /// exceeds `radius`, regardless of insertion age.
    pub fn prune(&mut self, focal: ChunkCoord, radius: u32) {
        let before = self.chunks.len();
        self.chunks.retain(|coord, _| coord.chebyshev(focal) <= radius);
        let chunks = &self.chunks;
        self.order.retain(|coord| chunks.contains_key(coord));

        let removed = before - self.chunks.len();
        if removed > 0 {
            debug!(
                "pruned {removed} chunks beyond radius {radius} of ({}, {})",
                focal.x, focal.y
            );
        }
    }

    /// Drops chunks outside the configured retention radius of the focal
    /// chunk.
    pub fn prune_default(&mut self, focal: ChunkCoord) {
        self.prune(focal, self.config.retain_radius);
    }

    /// Loads every chunk in the square of the given Chebyshev radius
    /// around the focal chunk.
    ///
    /// A warm-up for the viewport: with a capacity of at least
    /// `(2 * radius + 1)^2`, the whole square is resident afterwards.
    pub fn preload_around(&mut self, focal: ChunkCoord, radius: u32) {
        let r = radius as i32;
        for cy in (focal.y - r)..=(focal.y + r) {
            for cx in (focal.x - r)..=(focal.x + r) {
                self.get(ChunkCoord::new(cx, cy));
            }
        }
    }

    /// Checks whether a chunk is currently loaded.
    #[must_use]
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Returns the number of loaded chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns whether the store holds no chunks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns the world configuration.
    #[must_use]
    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Evicts the single oldest-inserted chunk.
    fn evict_oldest(&mut self) {
        if let Some(oldest) = self.order.pop_front() {
            self.chunks.remove(&oldest);
            debug!("evicted chunk ({}, {})", oldest.x, oldest.y);
        }
    }
}
