//! # Overland World
//!
//! World access for Overland.
//!
//! This crate handles:
//! - On-demand chunk generation behind a read-through cache
//! - Bounded memory via FIFO-by-insertion eviction
//! - Focal-point distance pruning as a viewer roams
//!
//! Nothing is ever written to storage: evicted chunks are regenerated
//! deterministically on the next access.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod store;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::store::*;
    pub use overland_common::prelude::*;
    pub use overland_worldgen::{chance, classify, hash, variant, Biome, TileGrid};
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creation() {
        let store = ChunkStore::new(WorldConfig::default()).expect("valid config");
        assert!(store.is_empty());
        assert_eq!(store.config().chunk_tiles(), 20);
    }

    #[test]
    fn test_reference_walk_scenario() {
        // Tile size 28, chunk size 560 (20x20 tiles), capacity 4: the
        // fifth distinct request evicts the first-inserted chunk.
        let config = WorldConfig {
            tile_size: 28,
            chunk_size: 560,
            max_loaded_chunks: 4,
            retain_radius: 3,
        };
        let mut store = ChunkStore::new(config).expect("valid config");

        for cx in 0..5 {
            store.get(ChunkCoord::new(cx, 0));
        }

        assert_eq!(store.len(), 4);
        assert!(!store.contains(ChunkCoord::new(0, 0)));
        for cx in 1..5 {
            assert!(store.contains(ChunkCoord::new(cx, 0)));
        }
    }
}
