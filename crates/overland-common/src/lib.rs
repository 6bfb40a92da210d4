//! # Overland Common
//!
//! Common types, utilities, and shared abstractions for Overland.
//!
//! This crate provides foundational types used across all Overland
//! subsystems:
//! - Coordinate types (world, chunk, local)
//! - Tile type codes
//! - World configuration and its validation
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod coords;
pub mod error;
pub mod tile;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::tile::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_coords_conversion() {
        let world = WorldCoord::new(100, 200);
        let chunk = world.to_chunk_coord(32);
        let local = world.to_local_tile(32, 8);

        assert_eq!(chunk, ChunkCoord::new(3, 6));
        assert_eq!(local, LocalCoord::new(0, 1));
    }

    #[test]
    fn test_default_config_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunk_tiles(), 20);
    }
}
