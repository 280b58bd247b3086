//! # Chunk System
//!
//! The world is an unbounded grid of tiles, cut into N x N chunks that
//! are generated on demand.
//!
//! ## Addressing
//!
//! A world coordinate splits into a chunk coordinate and a local index
//! with floor semantics, so the split is consistent across the origin:
//!
//! ```text
//!   chunk = floor_div(world, N)      -3 / 10 -> -1
//!   local = floor_mod(world, N)      -3 % 10 ->  7
//!   chunk * N + local == world
//! ```
//!
//! ## Storage
//!
//! Tiles are stored row-major (`ty * N + tx`). A chunk is built whole
//! from exactly N * N tiles and never changes afterwards.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ProceduralError, ProceduralResult};
use crate::noise::{NoiseField, NoiseParams, WorldSeed};
use crate::terrain::{TerrainClassifier, TileKind};

/// Validated chunk side length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkSize(u32);

impl ChunkSize {
    /// Largest accepted side length.
    pub const MAX: u32 = 4096;
    /// Default side length.
    pub const DEFAULT: Self = Self(10);

    /// Creates a chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`ProceduralError::InvalidChunkSize`] for 0 or anything
    /// above [`ChunkSize::MAX`].
    pub const fn new(side: u32) -> ProceduralResult<Self> {
        if side == 0 || side > Self::MAX {
            return Err(ProceduralError::InvalidChunkSize(side));
        }
        Ok(Self(side))
    }

    /// Side length in tiles.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Side length as a signed value for world arithmetic.
    #[inline]
    #[must_use]
    pub const fn signed(self) -> i32 {
        // MAX keeps this lossless.
        self.0 as i32
    }

    /// Tiles per chunk (N * N).
    #[inline]
    #[must_use]
    pub const fn area(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One tile position in the infinite world grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldCoord {
    /// X (grows to the right).
    pub x: i32,
    /// Y (grows downwards).
    pub y: i32,
}

impl WorldCoord {
    /// The world origin.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Creates a world coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this coordinate moved by `(dx, dy)`, saturating at the
    /// edge of the grid.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Splits into the owning chunk and the index inside it.
    #[inline]
    #[must_use]
    pub const fn split(self, size: ChunkSize) -> (ChunkCoord, LocalIndex) {
        (ChunkCoord::from_world(self, size), LocalIndex::from_world(self, size))
    }
}

impl fmt::Display for WorldCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Chunk coordinate (identifies a chunk in the world grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    /// X coordinate (in chunks, not tiles).
    pub cx: i32,
    /// Y coordinate (in chunks, not tiles).
    pub cy: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn new(cx: i32, cy: i32) -> Self {
        Self { cx, cy }
    }

    /// Chunk containing a world tile (floor division).
    #[inline]
    #[must_use]
    pub const fn from_world(world: WorldCoord, size: ChunkSize) -> Self {
        let n = size.signed();
        Self {
            cx: world.x.div_euclid(n),
            cy: world.y.div_euclid(n),
        }
    }

    /// World X/Y of the chunk's local (0, 0), widened so far-out chunk
    /// coordinates cannot overflow.
    #[inline]
    #[must_use]
    pub const fn origin(self, size: ChunkSize) -> (i64, i64) {
        let n = size.get() as i64;
        (self.cx as i64 * n, self.cy as i64 * n)
    }

    /// Chebyshev distance in chunks (max of the axis distances).
    #[inline]
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        self.cx.abs_diff(other.cx).max(self.cy.abs_diff(other.cy))
    }

    /// Packs both axes into one 64-bit key for seed derivation.
    #[inline]
    #[must_use]
    pub const fn packed(self) -> u64 {
        ((self.cx as u32 as u64) << 32) | (self.cy as u32 as u64)
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chunk({}, {})", self.cx, self.cy)
    }
}

/// Position of a tile inside its chunk, each axis in `[0, N)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalIndex {
    /// Local X.
    pub tx: u32,
    /// Local Y.
    pub ty: u32,
}

impl LocalIndex {
    /// Creates a local index. Range is checked on use.
    #[inline]
    #[must_use]
    pub const fn new(tx: u32, ty: u32) -> Self {
        Self { tx, ty }
    }

    /// Index of a world tile inside its chunk (floor modulo).
    #[inline]
    #[must_use]
    pub const fn from_world(world: WorldCoord, size: ChunkSize) -> Self {
        let n = size.signed();
        // rem_euclid with a positive divisor is in [0, n).
        Self {
            tx: world.x.rem_euclid(n) as u32,
            ty: world.y.rem_euclid(n) as u32,
        }
    }

    /// Returns whether both axes are inside `[0, N)`.
    #[inline]
    #[must_use]
    pub const fn in_bounds(self, size: ChunkSize) -> bool {
        self.tx < size.get() && self.ty < size.get()
    }

    /// Rebuilds the world coordinate: `chunk * N + local`.
    ///
    /// Exact for every pair produced by [`WorldCoord::split`], including
    /// the `i32` extremes where `chunk * N` alone is out of range.
    #[inline]
    #[must_use]
    pub const fn to_world(self, chunk: ChunkCoord, size: ChunkSize) -> WorldCoord {
        let n = size.signed();
        // Two's-complement wrapping cancels out when the sum is in range.
        WorldCoord {
            x: chunk.cx.wrapping_mul(n).wrapping_add(self.tx as i32),
            y: chunk.cy.wrapping_mul(n).wrapping_add(self.ty as i32),
        }
    }
}

/// A generated N x N block of tiles.
///
/// Immutable once built; shared read-only through the world cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    coord: ChunkCoord,
    size: ChunkSize,
    /// Row-major tiles, `ty * N + tx`.
    tiles: Box<[TileKind]>,
}

impl Chunk {
    /// Assembles a chunk from a complete row-major tile list.
    ///
    /// # Errors
    ///
    /// Returns [`ProceduralError::IncompleteChunk`] unless `tiles` holds
    /// exactly N * N entries.
    pub fn from_tiles(coord: ChunkCoord, size: ChunkSize, tiles: Vec<TileKind>) -> ProceduralResult<Self> {
        if tiles.len() != size.area() {
            return Err(ProceduralError::IncompleteChunk {
                coord,
                expected: size.area(),
                actual: tiles.len(),
            });
        }
        Ok(Self {
            coord,
            size,
            tiles: tiles.into_boxed_slice(),
        })
    }

    /// Chunk position in the world.
    #[inline]
    #[must_use]
    pub const fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Side length.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> ChunkSize {
        self.size
    }

    /// Gets the tile at a local index.
    ///
    /// # Errors
    ///
    /// Returns [`ProceduralError::LocalIndexOutOfRange`] if either axis
    /// is outside `[0, N)`.
    #[inline]
    pub fn tile(&self, local: LocalIndex) -> ProceduralResult<TileKind> {
        if !local.in_bounds(self.size) {
            return Err(ProceduralError::LocalIndexOutOfRange {
                tx: local.tx,
                ty: local.ty,
                size: self.size.get(),
            });
        }
        let n = self.size.get() as usize;
        Ok(self.tiles[local.ty as usize * n + local.tx as usize])
    }

    /// All tiles, row-major.
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileKind]> {
        self.tiles.chunks_exact(self.size.get() as usize)
    }

    /// Number of tiles of a given kind.
    #[must_use]
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }
}

/// Where tree-overlay draws come from.
///
/// Terrain kinds are a pure function of the seed; trees are the one
/// stochastic part of a chunk, so their source is an explicit policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreePlacement {
    /// Per-chunk stream seeded from the session seed and chunk coordinate.
    /// Regenerating a chunk reproduces its trees exactly.
    #[default]
    Stable,
    /// Fresh OS entropy per generation. Trees are frozen once the chunk is
    /// cached but differ if the chunk is ever regenerated.
    Volatile,
}

/// Chunk generator: noise field + classifier + tree draws.
pub struct ChunkGenerator {
    field: NoiseField,
    classifier: TerrainClassifier,
    size: ChunkSize,
    seed: WorldSeed,
    trees: TreePlacement,
}

impl ChunkGenerator {
    /// Seed purpose tag for tree streams.
    const TREE_PURPOSE: u64 = 102;

    /// Creates a new chunk generator.
    ///
    /// # Errors
    ///
    /// Returns [`ProceduralError::InvalidNoiseParams`] if `params` fails
    /// validation.
    pub fn new(
        seed: WorldSeed,
        params: NoiseParams,
        size: ChunkSize,
        trees: TreePlacement,
    ) -> ProceduralResult<Self> {
        Ok(Self {
            field: NoiseField::new(seed, params)?,
            classifier: TerrainClassifier::new(),
            size,
            seed,
            trees,
        })
    }

    /// Chunk side length.
    #[inline]
    #[must_use]
    pub const fn chunk_size(&self) -> ChunkSize {
        self.size
    }

    /// Tree placement policy.
    #[inline]
    #[must_use]
    pub const fn tree_placement(&self) -> TreePlacement {
        self.trees
    }

    /// Session seed.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// The terrain noise field.
    #[inline]
    #[must_use]
    pub const fn field(&self) -> &NoiseField {
        &self.field
    }

    /// Seed of the stable tree stream for one chunk.
    #[must_use]
    pub const fn tree_seed(&self, coord: ChunkCoord) -> u64 {
        self.seed.derive(Self::TREE_PURPOSE).derive(coord.packed()).value()
    }

    /// Generates a chunk, drawing trees per the placement policy.
    ///
    /// # Errors
    ///
    /// Only on an internal invariant violation (see [`Chunk::from_tiles`]).
    pub fn generate(&self, coord: ChunkCoord) -> ProceduralResult<Chunk> {
        match self.trees {
            TreePlacement::Stable => {
                let mut rng = ChaCha8Rng::seed_from_u64(self.tree_seed(coord));
                self.generate_with_rng(coord, &mut rng)
            }
            TreePlacement::Volatile => {
                let mut rng = ChaCha8Rng::from_entropy();
                self.generate_with_rng(coord, &mut rng)
            }
        }
    }

    /// Generates a chunk with an explicit draw source.
    ///
    /// One draw is consumed per tile in row-major order, whether or not
    /// the tile can host a tree, so the stream position only depends on
    /// the tile index.
    ///
    /// # Errors
    ///
    /// Only on an internal invariant violation (see [`Chunk::from_tiles`]).
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, coord: ChunkCoord, rng: &mut R) -> ProceduralResult<Chunk> {
        let n = self.size.get();
        let (origin_x, origin_y) = coord.origin(self.size);
        let mut tiles = Vec::with_capacity(self.size.area());

        for ty in 0..n {
            for tx in 0..n {
                let wx = origin_x + i64::from(tx);
                let wy = origin_y + i64::from(ty);
                let noise_value = self.field.sample(wx as f64, wy as f64);
                let draw: f64 = rng.gen();
                tiles.push(self.classifier.classify(noise_value, draw));
            }
        }

        tracing::trace!(cx = coord.cx, cy = coord.cy, tiles = tiles.len(), "generated chunk");
        Chunk::from_tiles(coord, self.size, tiles)
    }
}
