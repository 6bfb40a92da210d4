//! # Overland Worldgen
//!
//! Deterministic terrain generation for Overland.
//!
//! Every stochastic decision flows through a pure coordinate hash: the same
//! chunk coordinates always synthesize the same tiles, on every platform,
//! with no random-number state anywhere. Chunks can therefore be discarded
//! and regenerated at will without storage.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod biome;
pub mod generator;
pub mod grid;
pub mod hash;

pub use biome::{classify, Biome};
pub use generator::{GeneratorConfig, WorldGenerator};
pub use grid::TileGrid;
pub use hash::{chance, hash, variant};
