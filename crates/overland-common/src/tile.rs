//! Tile type codes.

use serde::{Deserialize, Serialize};

/// Terrain code for one tile cell.
///
/// The set is extensible; generation currently emits everything except
/// [`TileType::Border`], which is reserved for the visual layer's
/// world-edge framing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileType {
    /// Open grass, the base terrain of every chunk.
    #[default]
    Grass,
    /// Walkable path or plaza paving.
    Path,
    /// Tree (forest canopy or lone growth).
    Tree,
    /// Rock outcrop.
    Rock,
    /// Low bush.
    Bush,
    /// Wildflower patch.
    Flower,
    /// Settlement house.
    House,
    /// World-edge framing, drawn but never generated.
    Border,
}
