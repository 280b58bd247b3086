//! # World Cache
//!
//! Lazily materialized chunk store. The first lookup that touches a chunk
//! generates it; every later lookup returns the same shared [`Chunk`].
//!
//! ## Locking
//!
//! ```text
//!   read lock  -> hit?  -> clone Arc, done
//!   write lock -> re-check -> generate -> insert -> evict (capacity)
//! ```
//!
//! Generation runs under the write lock, so a coordinate is generated by
//! exactly one caller and no reader sees a half-built chunk.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::chunk::{Chunk, ChunkCoord, ChunkGenerator, WorldCoord};
use crate::error::ProceduralResult;
use crate::terrain::TileKind;

/// Retention policy for generated chunks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CachePolicy {
    /// Keep every chunk for the whole session.
    #[default]
    Unbounded,
    /// Drop chunks farther than `chunks` (Chebyshev, in chunks) from the
    /// player's chunk after each move.
    Radius {
        /// Chunks kept on each side of the player's chunk.
        chunks: u32,
    },
    /// Least-recently-used eviction above `max_chunks` entries.
    Capacity {
        /// Maximum cached chunks.
        max_chunks: usize,
    },
}

/// Snapshot of cache counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from the cache.
    pub hits: u64,
    /// Lookups that found no chunk.
    pub misses: u64,
    /// Chunks generated.
    pub generated: u64,
    /// Chunks dropped by policy.
    pub evicted: u64,
    /// Chunks currently cached.
    pub entries: usize,
}

struct Entry {
    chunk: Arc<Chunk>,
    last_used: AtomicU64,
}

/// Chunk cache over a [`ChunkGenerator`].
pub struct WorldCache {
    generator: ChunkGenerator,
    policy: CachePolicy,
    entries: RwLock<HashMap<ChunkCoord, Entry>>,
    clock: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    generated: AtomicU64,
    evicted: AtomicU64,
}

impl WorldCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new(generator: ChunkGenerator, policy: CachePolicy) -> Self {
        Self {
            generator,
            policy,
            entries: RwLock::new(HashMap::new()),
            clock: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            generated: AtomicU64::new(0),
            evicted: AtomicU64::new(0),
        }
    }

    /// Tile at a world position, generating its chunk on first touch.
    ///
    /// # Errors
    ///
    /// Propagates generation failures from [`ChunkGenerator::generate`].
    pub fn get_tile(&self, x: i32, y: i32) -> ProceduralResult<TileKind> {
        let (coord, local) = WorldCoord::new(x, y).split(self.generator.chunk_size());
        self.chunk(coord)?.tile(local)
    }

    /// Chunk at a chunk coordinate, generating it on a miss.
    ///
    /// # Errors
    ///
    /// Propagates generation failures from [`ChunkGenerator::generate`].
    pub fn chunk(&self, coord: ChunkCoord) -> ProceduralResult<Arc<Chunk>> {
        if let Some(chunk) = self.lookup(coord) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(chunk);
        }

        let mut entries = self.entries.write();
        // Another caller may have generated it between the two locks.
        if let Some(entry) = entries.get(&coord) {
            entry.last_used.store(self.tick(), Ordering::Relaxed);
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(&entry.chunk));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let chunk = Arc::new(self.generator.generate(coord)?);
        self.generated.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(cx = coord.cx, cy = coord.cy, cached = entries.len() + 1, "chunk cached");

        entries.insert(
            coord,
            Entry {
                chunk: Arc::clone(&chunk),
                last_used: AtomicU64::new(self.tick()),
            },
        );

        if let CachePolicy::Capacity { max_chunks } = self.policy {
            self.evict_lru(&mut entries, max_chunks, coord);
        }

        Ok(chunk)
    }

    /// Returns whether a chunk is currently cached. Does not generate.
    #[must_use]
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.entries.read().contains_key(&coord)
    }

    /// Number of cached chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing has been generated (or everything evicted).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Counter snapshot.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            generated: self.generated.load(Ordering::Relaxed),
            evicted: self.evicted.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    /// Drops every chunk farther than `radius` chunks from `center`.
    ///
    /// Returns the number of chunks evicted.
    pub fn retain_around(&self, center: ChunkCoord, radius: u32) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|coord, _| coord.chebyshev_distance(center) <= radius);
        let dropped = before - entries.len();
        if dropped > 0 {
            self.evicted.fetch_add(dropped as u64, Ordering::Relaxed);
            tracing::debug!(cx = center.cx, cy = center.cy, radius, dropped, "evicted distant chunks");
        }
        dropped
    }

    /// Applies the radius policy for a player now standing at `position`.
    ///
    /// No-op for the other policies. Returns the number of chunks evicted.
    pub fn observe_position(&self, position: WorldCoord) -> usize {
        match self.policy {
            CachePolicy::Radius { chunks } => {
                let center = ChunkCoord::from_world(position, self.generator.chunk_size());
                self.retain_around(center, chunks)
            }
            CachePolicy::Unbounded | CachePolicy::Capacity { .. } => 0,
        }
    }

    /// Retention policy.
    #[must_use]
    pub const fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// The generator behind this cache.
    #[must_use]
    pub const fn generator(&self) -> &ChunkGenerator {
        &self.generator
    }

    fn lookup(&self, coord: ChunkCoord) -> Option<Arc<Chunk>> {
        let entries = self.entries.read();
        entries.get(&coord).map(|entry| {
            entry.last_used.store(self.tick(), Ordering::Relaxed);
            Arc::clone(&entry.chunk)
        })
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    fn evict_lru(&self, entries: &mut HashMap<ChunkCoord, Entry>, max_chunks: usize, keep: ChunkCoord) {
        while entries.len() > max_chunks {
            let victim = entries
                .iter()
                .filter(|(coord, _)| **coord != keep)
                .min_by_key(|(_, entry)| entry.last_used.load(Ordering::Relaxed))
                .map(|(coord, _)| *coord);
            let Some(victim) = victim else { break };
            entries.remove(&victim);
            self.evicted.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(cx = victim.cx, cy = victim.cy, "evicted least recently used chunk");
        }
    }
}
