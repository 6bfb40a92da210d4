//! Deterministic coordinate hashing.
//!
//! The foundation of the whole generation pipeline: a pure function from
//! integer coordinates to a 31-bit value, using only fixed-width wrapping
//! arithmetic. No floats, no RNG state, so the result is bit-identical
//! across platforms, access orders, and regenerations.

/// Mixes integer coordinates into a 31-bit pseudo-random value.
///
/// Local coordinates `(x, y)` and chunk coordinates `(cx, cy)` are combined
/// with distinct odd multipliers, then run through one linear-congruential
/// round. All intermediate products wrap at 32 bits; the sign bit is
/// cleared so the result is always non-negative.
#[must_use]
pub const fn hash(x: i32, y: i32, cx: i32, cy: i32) -> u32 {
    let mixed = (x as u32).wrapping_mul(73_856_093)
        ^ (y as u32).wrapping_mul(19_349_663)
        ^ (cx as u32).wrapping_mul(83_492_791)
        ^ (cy as u32).wrapping_mul(19_283_746);
    mixed.wrapping_mul(1_103_515_245).wrapping_add(12_345) & 0x7FFF_FFFF
}

/// Deterministic probability test.
///
/// True iff `hash(x, y, cx, cy) % 10000` falls below `probability` scaled
/// to basis points. Probability is discretized in 0.01% steps; callers
/// must not assume finer resolution.
#[must_use]
pub fn chance(x: i32, y: i32, probability: f64, cx: i32, cy: i32) -> bool {
    let threshold = (probability * 10_000.0) as u32;
    hash(x, y, cx, cy) % 10_000 < threshold
}

/// Picks a stable variant index in `[0, count)` for a world tile.
///
/// Lets the visual layer choose sprite variants (which grass texture, which
/// tree silhouette) reproducibly from the same hash family, without owning
/// any generation state. Returns 0 when `count` is 0.
#[must_use]
pub const fn variant(x: i32, y: i32, count: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    hash(x, y, 0, 0) % count
}
