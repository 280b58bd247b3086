//! # Procedural Error Types
//!
//! Every error here is an internal invariant violation or a rejected
//! parameter set. None of them are transient, so nothing is retried.

use thiserror::Error;

use crate::chunk::ChunkCoord;

/// Errors that can occur during terrain generation and lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProceduralError {
    /// Chunk side length outside `1..=ChunkSize::MAX`.
    #[error("invalid chunk size: {0} (must be between 1 and 4096)")]
    InvalidChunkSize(u32),

    /// A chunk was assembled from the wrong number of tiles.
    #[error("incomplete chunk at {coord}: expected {expected} tiles, got {actual}")]
    IncompleteChunk {
        /// The chunk being assembled.
        coord: ChunkCoord,
        /// Tiles required (N * N).
        expected: usize,
        /// Tiles supplied.
        actual: usize,
    },

    /// A local index fell outside `[0, N)`.
    #[error("local index ({tx}, {ty}) out of range for chunk size {size}")]
    LocalIndexOutOfRange {
        /// Local X.
        tx: u32,
        /// Local Y.
        ty: u32,
        /// Chunk side length.
        size: u32,
    },

    /// Noise parameters cannot produce a usable field.
    #[error("invalid noise parameters: {0}")]
    InvalidNoiseParams(String),

    /// Viewport must be at least one tile in each direction.
    #[error("invalid viewport: {width}x{height}")]
    InvalidViewport {
        /// Requested width in tiles.
        width: u32,
        /// Requested height in tiles.
        height: u32,
    },
}

/// Result type for procedural operations.
pub type ProceduralResult<T> = Result<T, ProceduralError>;
