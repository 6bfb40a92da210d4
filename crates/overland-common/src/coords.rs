//! Coordinate types for world, chunk, and local positions.
//!
//! World positions are pixels, chunk coordinates index an unbounded integer
//! lattice, and local coordinates address tiles within one chunk. All
//! conversions use euclidean (floor) division so that negative world
//! positions resolve correctly and contiguously.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// World coordinate in pixels (global position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct WorldCoord {
    /// X coordinate in world space
    pub x: i64,
    /// Y coordinate in world space
    pub y: i64,
}

impl WorldCoord {
    /// Creates a new world coordinate.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Converts to the chunk coordinate containing this position.
    ///
    /// Uses floor division (toward negative infinity), not truncation, so
    /// positions at and below zero map to the correct chunk.
    #[must_use]
    pub const fn to_chunk_coord(self, chunk_size: u32) -> ChunkCoord {
        let size = chunk_size as i64;
        ChunkCoord {
            x: self.x.div_euclid(size) as i32,
            y: self.y.div_euclid(size) as i32,
        }
    }

    /// Converts to the local tile coordinate within the containing chunk.
    ///
    /// The result is always in `[0, chunk_size / tile_size)` on both axes,
    /// including for negative world positions.
    #[must_use]
    pub const fn to_local_tile(self, chunk_size: u32, tile_size: u32) -> LocalCoord {
        let size = chunk_size as i64;
        let tile = tile_size as i64;
        LocalCoord {
            x: (self.x.rem_euclid(size) / tile) as u16,
            y: (self.y.rem_euclid(size) / tile) as u16,
        }
    }
}

/// Chunk coordinate (identifies a chunk in the world grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct ChunkCoord {
    /// X coordinate in chunk space
    pub x: i32,
    /// Y coordinate in chunk space
    pub y: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts to world coordinate (top-left corner of chunk).
    #[must_use]
    pub const fn to_world_coord(self, chunk_size: u32) -> WorldCoord {
        WorldCoord {
            x: (self.x as i64) * (chunk_size as i64),
            y: (self.y as i64) * (chunk_size as i64),
        }
    }

    /// Chebyshev distance to another chunk (max of the coordinate deltas).
    #[must_use]
    pub const fn chebyshev(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        if dx > dy {
            dx
        } else {
            dy
        }
    }
}

/// Local tile coordinate within a chunk (0 to tiles-per-edge minus 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct LocalCoord {
    /// X tile coordinate within chunk
    pub x: u16,
    /// Y tile coordinate within chunk
    pub y: u16,
}

impl LocalCoord {
    /// Creates a new local coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Converts to linear index for row-major array access.
    #[must_use]
    pub const fn to_index(self, chunk_tiles: u32) -> usize {
        (self.y as usize) * (chunk_tiles as usize) + (self.x as usize)
    }

    /// Creates from linear index.
    #[must_use]
    pub const fn from_index(index: usize, chunk_tiles: u32) -> Self {
        let size = chunk_tiles as usize;
        Self {
            x: (index % size) as u16,
            y: (index / size) as u16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn negative_positions_floor_to_lower_chunk() {
        let pos = WorldCoord::new(-1, -560);
        assert_eq!(pos.to_chunk_coord(560), ChunkCoord::new(-1, -1));

        let local = pos.to_local_tile(560, 28);
        assert_eq!(local, LocalCoord::new(19, 0));
    }

    #[test]
    fn chunk_origin_round_trip() {
        let chunk = ChunkCoord::new(-3, 7);
        let origin = chunk.to_world_coord(560);
        assert_eq!(origin, WorldCoord::new(-1680, 3920));
        assert_eq!(origin.to_chunk_coord(560), chunk);
    }

    #[test]
    fn chebyshev_is_max_of_deltas() {
        let a = ChunkCoord::new(0, 0);
        assert_eq!(a.chebyshev(ChunkCoord::new(3, -1)), 3);
        assert_eq!(a.chebyshev(ChunkCoord::new(-2, -5)), 5);
        assert_eq!(a.chebyshev(a), 0);
    }

    #[test]
    fn index_round_trip() {
        let local = LocalCoord::new(7, 13);
        let index = local.to_index(20);
        assert_eq!(index, 13 * 20 + 7);
        assert_eq!(LocalCoord::from_index(index, 20), local);
    }

    proptest! {
        /// Reconstructing a world position from its chunk and local tile
        /// lands in the same tile cell as the original position.
        #[test]
        fn world_mapping_round_trip(wx in -1_000_000i64..1_000_000, wy in -1_000_000i64..1_000_000) {
            let tile_size = 28u32;
            let chunk_size = 560u32;
            let pos = WorldCoord::new(wx, wy);

            let chunk = pos.to_chunk_coord(chunk_size);
            let local = pos.to_local_tile(chunk_size, tile_size);
            let origin = chunk.to_world_coord(chunk_size);

            let rx = origin.x + i64::from(local.x) * i64::from(tile_size);
            let ry = origin.y + i64::from(local.y) * i64::from(tile_size);

            prop_assert!(wx - rx >= 0 && wx - rx < i64::from(tile_size));
            prop_assert!(wy - ry >= 0 && wy - ry < i64::from(tile_size));
        }

        #[test]
        fn local_tile_always_in_range(wx in -1_000_000i64..1_000_000, wy in -1_000_000i64..1_000_000) {
            let local = WorldCoord::new(wx, wy).to_local_tile(560, 28);
            prop_assert!(local.x < 20);
            prop_assert!(local.y < 20);
        }
    }
}
