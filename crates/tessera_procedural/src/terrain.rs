//! # Terrain Classification
//!
//! Maps a noise sample to a discrete tile kind.
//!
//! Base brackets, ascending, each upper bound exclusive:
//!
//! ```text
//!   noise < -0.1  water
//!   noise <  0.0  sand
//!   noise <  0.4  grass
//!   noise <  0.6  forest
//!   noise <  0.8  rock
//!   otherwise     mountain
//! ```
//!
//! Grass and forest then take a tree overlay when the caller's draw is
//! below [`TerrainClassifier::TREE_CHANCE`]. The classifier never draws
//! randomness itself; where the draw comes from is the chunk generator's
//! [`TreePlacement`](crate::chunk::TreePlacement) policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tile types in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TileKind {
    /// Open water.
    Water = 0,
    /// Beach between water and land.
    Sand = 1,
    /// Grassland.
    Grass = 2,
    /// Forest floor.
    Forest = 3,
    /// Bare rock.
    Rock = 4,
    /// High peaks.
    Mountain = 5,
    /// Tree overlay on grass or forest.
    Tree = 6,
}

impl TileKind {
    /// Every kind, in id order.
    pub const ALL: [Self; 7] = [
        Self::Water,
        Self::Sand,
        Self::Grass,
        Self::Forest,
        Self::Rock,
        Self::Mountain,
        Self::Tree,
    ];

    /// Stable lowercase name, shared with the palette and config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Sand => "sand",
            Self::Grass => "grass",
            Self::Forest => "forest",
            Self::Rock => "rock",
            Self::Mountain => "mountain",
            Self::Tree => "tree",
        }
    }

    /// Returns whether a tree may be overlaid on this base kind.
    #[must_use]
    pub const fn can_host_tree(self) -> bool {
        matches!(self, Self::Grass | Self::Forest)
    }

    /// Looks a kind up by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown tile name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tile kind: {0}")]
pub struct UnknownTileKind(pub String);

impl FromStr for TileKind {
    type Err = UnknownTileKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownTileKind(s.to_string()))
    }
}

/// Classifier from noise value (plus caller-supplied draw) to tile kind.
///
/// Stateless; a unit struct so the thresholds stay associated constants.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerrainClassifier;

impl TerrainClassifier {
    /// Upper bound (exclusive) of water.
    pub const WATER_BELOW: f64 = -0.1;
    /// Upper bound (exclusive) of sand.
    pub const SAND_BELOW: f64 = 0.0;
    /// Upper bound (exclusive) of grass.
    pub const GRASS_BELOW: f64 = 0.4;
    /// Upper bound (exclusive) of forest.
    pub const FOREST_BELOW: f64 = 0.6;
    /// Upper bound (exclusive) of rock. Everything above is mountain.
    pub const ROCK_BELOW: f64 = 0.8;
    /// Draws below this become trees on grass/forest.
    pub const TREE_CHANCE: f64 = 0.1;

    /// Creates a classifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Base kind for a noise value, before any overlay.
    #[must_use]
    pub fn base_kind(&self, noise_value: f64) -> TileKind {
        if noise_value < Self::WATER_BELOW {
            TileKind::Water
        } else if noise_value < Self::SAND_BELOW {
            TileKind::Sand
        } else if noise_value < Self::GRASS_BELOW {
            TileKind::Grass
        } else if noise_value < Self::FOREST_BELOW {
            TileKind::Forest
        } else if noise_value < Self::ROCK_BELOW {
            TileKind::Rock
        } else {
            TileKind::Mountain
        }
    }

    /// Classifies a tile.
    ///
    /// # Arguments
    ///
    /// * `noise_value` - Terrain field sample, roughly [-1, 1]
    /// * `rng_draw` - Uniform draw in [0, 1) for the tree overlay
    #[must_use]
    pub fn classify(&self, noise_value: f64, rng_draw: f64) -> TileKind {
        let base = self.base_kind(noise_value);
        if base.can_host_tree() && rng_draw < Self::TREE_CHANCE {
            TileKind::Tree
        } else {
            base
        }
    }
}
