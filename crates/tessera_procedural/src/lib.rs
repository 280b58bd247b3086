//! # TESSERA Procedural Generation
//!
//! Deterministic terrain for an unbounded 2-D tile world.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same terrain
//! 2. **Chunked**: World is generated in fixed-size square chunks
//! 3. **Lazy**: A chunk exists only once something looks at it
//! 4. **Immutable**: A generated chunk never changes
//!
//! ## Core Components
//!
//! - `NoiseField`: Multi-octave simplex terrain field
//! - `TerrainClassifier`: Noise value to tile kind, plus tree overlay
//! - `ChunkGenerator`: Produces whole chunks from the field
//! - `WorldCache`: Generate-on-miss chunk store with retention policies
//! - `Viewport`: Tiles visible around a center point
//!
//! ## Example
//!
//! ```rust
//! use tessera_procedural::{
//!     CachePolicy, ChunkGenerator, ChunkSize, NoiseParams, TreePlacement, WorldCache, WorldSeed,
//! };
//!
//! let generator = ChunkGenerator::new(
//!     WorldSeed::new(12345),
//!     NoiseParams::default(),
//!     ChunkSize::DEFAULT,
//!     TreePlacement::Stable,
//! )?;
//! let cache = WorldCache::new(generator, CachePolicy::Unbounded);
//!
//! let tile = cache.get_tile(-3, 4)?;
//! assert_eq!(cache.get_tile(-3, 4)?, tile);
//! # Ok::<(), tessera_procedural::ProceduralError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod chunk;
pub mod error;
pub mod noise;
pub mod terrain;
pub mod viewport;
pub mod world_cache;

pub use chunk::{Chunk, ChunkCoord, ChunkGenerator, ChunkSize, LocalIndex, TreePlacement, WorldCoord};
pub use error::{ProceduralError, ProceduralResult};
pub use noise::{NoiseField, NoiseParams, SimplexNoise, WorldSeed};
pub use terrain::{TerrainClassifier, TileKind, UnknownTileKind};
pub use viewport::{ViewWindow, Viewport, VisibleTile};
pub use world_cache::{CachePolicy, CacheStats, WorldCache};
