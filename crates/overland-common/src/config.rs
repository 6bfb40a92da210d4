//! World configuration shared by the generation and caching layers.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// World parameters, fixed at construction time.
///
/// There is no runtime reconfiguration path: changing the geometry after
/// chunks exist would desynchronize freshly generated regions from ones
/// generated earlier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Tile edge length in pixels
    pub tile_size: u32,
    /// Chunk edge length in pixels (must be a multiple of `tile_size`)
    pub chunk_size: u32,
    /// Maximum chunks held in memory before FIFO eviction
    pub max_loaded_chunks: usize,
    /// Chebyshev radius (in chunks) retained around the focal point
    pub retain_radius: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tile_size: 28,
            chunk_size: 560, // 20x20 tiles
            max_loaded_chunks: 100,
            retain_radius: 3,
        }
    }
}

impl WorldConfig {
    /// Number of tiles per chunk edge.
    #[must_use]
    pub const fn chunk_tiles(&self) -> u32 {
        self.chunk_size / self.tile_size
    }

    /// Validates the configuration, failing fast on geometry that would
    /// make floor division or grid indexing ill-defined.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tile_size == 0 {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        if self.chunk_size % self.tile_size != 0 {
            return Err(ConfigError::ChunkSizeNotAligned {
                chunk_size: self.chunk_size,
                tile_size: self.tile_size,
            });
        }
        if self.max_loaded_chunks == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_tile_size() {
        let config = WorldConfig {
            tile_size: 0,
            ..WorldConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidTileSize(0)));
    }

    #[test]
    fn rejects_zero_chunk_size() {
        let config = WorldConfig {
            chunk_size: 0,
            ..WorldConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidChunkSize(0)));
    }

    #[test]
    fn rejects_misaligned_chunk_size() {
        let config = WorldConfig {
            tile_size: 28,
            chunk_size: 570,
            ..WorldConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ChunkSizeNotAligned {
                chunk_size: 570,
                tile_size: 28,
            })
        );
    }

    #[test]
    fn rejects_zero_capacity() {
        let config = WorldConfig {
            max_loaded_chunks: 0,
            ..WorldConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity));
    }
}
