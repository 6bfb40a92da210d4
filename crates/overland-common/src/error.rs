//! Error types for Overland.
//!
//! The taxonomy is deliberately narrow: generation is total over integer
//! coordinates and out-of-bounds tile reads return an absence value, so the
//! only fallible surface is configuration validation at construction time.

use thiserror::Error;

/// Configuration errors, raised before any world state exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Tile size must be a positive number of pixels
    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(u32),

    /// Chunk size must be a positive number of pixels
    #[error("chunk size must be positive, got {0}")]
    InvalidChunkSize(u32),

    /// Chunk size must divide evenly into tiles
    #[error("chunk size {chunk_size} is not a multiple of tile size {tile_size}")]
    ChunkSizeNotAligned {
        /// Configured chunk size in pixels
        chunk_size: u32,
        /// Configured tile size in pixels
        tile_size: u32,
    },

    /// The chunk cache must hold at least one chunk
    #[error("chunk cache capacity must be at least 1")]
    ZeroCapacity,
}

/// Result type alias for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
