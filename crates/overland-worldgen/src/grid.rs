//! Tile grid for one generated chunk.

use overland_common::{ChunkCoord, LocalCoord, TileType};

/// A square, row-major grid of tiles covering one chunk.
///
/// Grids are mutated only while a synthesizer builds them; once handed to
/// a caller they are read-only. Regenerating the same chunk coordinate
/// after eviction therefore reproduces the grid tile for tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    /// Chunk coordinate this grid was generated for
    coord: ChunkCoord,
    /// Tiles per edge
    size: u32,
    /// Tile data, row-major (size x size)
    tiles: Vec<TileType>,
}

impl TileGrid {
    /// Creates an all-Grass grid, the starting point of every synthesizer.
    #[must_use]
    pub fn new(coord: ChunkCoord, size: u32) -> Self {
        let tile_count = (size * size) as usize;
        Self {
            coord,
            size,
            tiles: vec![TileType::Grass; tile_count],
        }
    }

    /// Returns the chunk coordinate this grid belongs to.
    #[must_use]
    pub const fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Returns the grid edge length in tiles.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Reads the tile at local coordinates.
    ///
    /// Returns `None` for out-of-bounds coordinates; callers treat absent
    /// tiles as undrawable and skip them.
    #[must_use]
    pub fn get(&self, tx: i32, ty: i32) -> Option<TileType> {
        if tx < 0 || ty < 0 || tx >= self.size as i32 || ty >= self.size as i32 {
            return None;
        }
        let index = (ty as u32 * self.size + tx as u32) as usize;
        self.tiles.get(index).copied()
    }

    /// Reads the tile at a mapped local coordinate.
    #[must_use]
    pub fn get_local(&self, local: LocalCoord) -> Option<TileType> {
        self.get(i32::from(local.x), i32::from(local.y))
    }

    /// Returns a slice of all tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[TileType] {
        &self.tiles
    }

    /// Counts tiles of the given type in the whole grid.
    #[must_use]
    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Writes a tile, silently skipping out-of-bounds coordinates.
    pub(crate) fn set(&mut self, tx: i32, ty: i32, tile: TileType) {
        if tx < 0 || ty < 0 || tx >= self.size as i32 || ty >= self.size as i32 {
            return;
        }
        let index = (ty as u32 * self.size + tx as u32) as usize;
        if let Some(slot) = self.tiles.get_mut(index) {
            *slot = tile;
        }
    }

    /// Counts tiles of the given type in the 8-neighborhood of a cell.
    ///
    /// Neighbors outside the grid count as absent; generation never reads
    /// across chunk boundaries.
    pub(crate) fn count_neighbors(&self, tx: i32, ty: i32, tile: TileType) -> u8 {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.get(tx + dx, ty + dy) == Some(tile) {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_grass() {
        let grid = TileGrid::new(ChunkCoord::new(0, 0), 8);
        assert_eq!(grid.count(TileType::Grass), 64);
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let grid = TileGrid::new(ChunkCoord::new(0, 0), 8);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(8, 0), None);
        assert_eq!(grid.get(0, 8), None);
        assert_eq!(grid.get(7, 7), Some(TileType::Grass));
    }

    #[test]
    fn out_of_bounds_writes_are_skipped() {
        let mut grid = TileGrid::new(ChunkCoord::new(0, 0), 4);
        grid.set(-1, 2, TileType::Tree);
        grid.set(4, 0, TileType::Tree);
        assert_eq!(grid.count(TileType::Tree), 0);
    }

    #[test]
    fn neighbor_counting_ignores_outside() {
        let mut grid = TileGrid::new(ChunkCoord::new(0, 0), 4);
        grid.set(0, 1, TileType::Tree);
        grid.set(1, 0, TileType::Tree);
        // Corner cell has only 3 in-grid neighbors, 2 of them trees.
        assert_eq!(grid.count_neighbors(0, 0, TileType::Tree), 2);
        assert_eq!(grid.count_neighbors(0, 0, TileType::Grass), 1);
    }
}
