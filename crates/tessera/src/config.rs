//! # Game Configuration
//!
//! Loaded once at startup from an optional TOML file. Every section and
//! every key is optional; anything missing takes its default.
//!
//! ```toml
//! [world]
//! chunk_size = 10
//! seed = 12345
//! tree_placement = "stable"   # or "volatile"
//!
//! [noise]
//! scale = 100.0
//! octaves = 6
//! persistence = 0.5
//! lacunarity = 2.0
//!
//! [cache]
//! kind = "radius"             # "unbounded" | "radius" | "capacity"
//! chunks = 3
//!
//! [view]
//! tile_size = 40
//! width = 14
//! height = 8
//! color = true
//!
//! [inventory]
//! slots = 9
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tessera_procedural::{CachePolicy, ChunkSize, NoiseParams, TreePlacement, Viewport, WorldSeed};

use crate::error::{GameError, GameResult};

/// World generation settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Chunk side length in tiles.
    pub chunk_size: u32,
    /// Session seed.
    pub seed: WorldSeed,
    /// Where tree draws come from.
    pub tree_placement: TreePlacement,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_size: ChunkSize::DEFAULT.get(),
            seed: WorldSeed::default(),
            tree_placement: TreePlacement::default(),
        }
    }
}

/// Viewport and cell settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Cell size in pixels.
    pub tile_size: u32,
    /// Visible columns.
    pub width: u32,
    /// Visible rows.
    pub height: u32,
    /// ANSI colors in the terminal (glyphs otherwise).
    pub color: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            tile_size: 40,
            width: 14,
            height: 8,
            color: true,
        }
    }
}

/// Inventory settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Number of slots.
    pub slots: usize,
}

impl InventoryConfig {
    /// Largest accepted slot count.
    pub const MAX_SLOTS: usize = 64;
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { slots: 9 }
    }
}

/// Complete startup configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// World generation.
    pub world: WorldConfig,
    /// Terrain noise.
    pub noise: NoiseParams,
    /// Chunk retention.
    pub cache: CachePolicy,
    /// Viewport.
    pub view: ViewConfig,
    /// Inventory.
    pub inventory: InventoryConfig,
}

impl GameConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] on malformed TOML or invalid values.
    pub fn from_toml_str(source: &str) -> GameResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Io`] if the file cannot be read, otherwise as
    /// [`GameConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Serializes to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if a value has no TOML form (a seed
    /// above `i64::MAX`).
    pub fn to_toml_string(&self) -> GameResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Checks every value against what the session can run with.
    ///
    /// # Errors
    ///
    /// Returns the procedural error for chunk size, noise or viewport
    /// problems, and [`GameError::Config`] for the rest.
    pub fn validate(&self) -> GameResult<()> {
        let _ = ChunkSize::new(self.world.chunk_size)?;
        self.noise.validate()?;
        let _ = Viewport::new(self.view.width, self.view.height)?;

        if self.view.tile_size == 0 {
            return Err(GameError::Config("view.tile_size must be at least 1".to_string()));
        }
        if self.inventory.slots == 0 || self.inventory.slots > InventoryConfig::MAX_SLOTS {
            return Err(GameError::Config(format!(
                "inventory.slots must be between 1 and {}, got {}",
                InventoryConfig::MAX_SLOTS,
                self.inventory.slots
            )));
        }
        if let CachePolicy::Capacity { max_chunks: 0 } = self.cache {
            return Err(GameError::Config("cache.max_chunks must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Validated chunk size.
    ///
    /// # Errors
    ///
    /// Same as [`ChunkSize::new`].
    pub fn chunk_size(&self) -> GameResult<ChunkSize> {
        Ok(ChunkSize::new(self.world.chunk_size)?)
    }
}
