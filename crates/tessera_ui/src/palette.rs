//! Color palette for the tile map.
//!
//! Every tile kind has exactly one named color. Anything the table does
//! not know (unrecognized names, empty inventory slots) is drawn white.

use std::fmt;

use serde::{Deserialize, Serialize};
use tessera_procedural::TileKind;

/// 24-bit display color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
}

impl Color {
    /// Creates a color from RGB values (0-1).
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Converts to 8-bit channels for truecolor output.
    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        // Channels are clamped to [0, 1] first, so the cast cannot wrap.
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}

/// The named colors the map uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    /// Water.
    Blue,
    /// Sand.
    Yellow,
    /// Grass.
    Green,
    /// Forest and trees.
    DarkGreen,
    /// Rock.
    Gray,
    /// Mountain, and the fallback.
    White,
    /// Player marker.
    Red,
    /// Cell outlines.
    Black,
}

impl NamedColor {
    /// Lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::DarkGreen => "darkgreen",
            Self::Gray => "gray",
            Self::White => "white",
            Self::Red => "red",
            Self::Black => "black",
        }
    }

    /// RGB value, matching the usual X11 color names.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Blue => Color::rgb(0.0, 0.0, 1.0),
            Self::Yellow => Color::rgb(1.0, 1.0, 0.0),
            Self::Green => Color::rgb(0.0, 0.502, 0.0),
            Self::DarkGreen => Color::rgb(0.0, 0.392, 0.0),
            Self::Gray => Color::rgb(0.502, 0.502, 0.502),
            Self::White => Color::rgb(1.0, 1.0, 1.0),
            Self::Red => Color::rgb(1.0, 0.0, 0.0),
            Self::Black => Color::rgb(0.0, 0.0, 0.0),
        }
    }

    /// Closest xterm 256-color index.
    #[must_use]
    pub const fn ansi_index(self) -> u8 {
        match self {
            Self::Blue => 21,
            Self::Yellow => 226,
            Self::Green => 28,
            Self::DarkGreen => 22,
            Self::Gray => 244,
            Self::White => 231,
            Self::Red => 196,
            Self::Black => 16,
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tile kind and marker color lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Indexed by `TileKind as usize`.
    tiles: [NamedColor; 7],
    player: NamedColor,
    fallback: NamedColor,
    outline: NamedColor,
}

impl Palette {
    /// The standard map colors.
    pub const STANDARD: Self = Self {
        tiles: [
            NamedColor::Blue,      // water
            NamedColor::Yellow,    // sand
            NamedColor::Green,     // grass
            NamedColor::DarkGreen, // forest
            NamedColor::Gray,      // rock
            NamedColor::White,     // mountain
            NamedColor::DarkGreen, // tree
        ],
        player: NamedColor::Red,
        fallback: NamedColor::White,
        outline: NamedColor::Black,
    };

    /// Color of a tile kind.
    #[must_use]
    pub const fn tile(&self, kind: TileKind) -> NamedColor {
        self.tiles[kind as usize]
    }

    /// Color by tile name; unknown names get the fallback.
    #[must_use]
    pub fn by_name(&self, name: &str) -> NamedColor {
        if name == "player" {
            return self.player;
        }
        TileKind::from_name(name).map_or(self.fallback, |kind| self.tile(kind))
    }

    /// Color of an inventory slot; empty slots get the fallback.
    #[must_use]
    pub fn slot(&self, item: Option<TileKind>) -> NamedColor {
        item.map_or(self.fallback, |kind| self.tile(kind))
    }

    /// Player marker color.
    #[must_use]
    pub const fn player(&self) -> NamedColor {
        self.player
    }

    /// Color for anything not in the table.
    #[must_use]
    pub const fn fallback(&self) -> NamedColor {
        self.fallback
    }

    /// Cell outline color.
    #[must_use]
    pub const fn outline(&self) -> NamedColor {
        self.outline
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let p = Palette::STANDARD;
        assert_eq!(p.tile(TileKind::Water), NamedColor::Blue);
        assert_eq!(p.tile(TileKind::Sand), NamedColor::Yellow);
        assert_eq!(p.tile(TileKind::Grass), NamedColor::Green);
        assert_eq!(p.tile(TileKind::Forest), NamedColor::DarkGreen);
        assert_eq!(p.tile(TileKind::Rock), NamedColor::Gray);
        assert_eq!(p.tile(TileKind::Mountain), NamedColor::White);
        assert_eq!(p.tile(TileKind::Tree), NamedColor::DarkGreen);
        assert_eq!(p.player(), NamedColor::Red);
    }

    #[test]
    fn test_lookup_by_name() {
        let p = Palette::default();
        for kind in TileKind::ALL {
            assert_eq!(p.by_name(kind.name()), p.tile(kind));
        }
        assert_eq!(p.by_name("player"), NamedColor::Red);
        assert_eq!(p.by_name("lava"), NamedColor::White);
        assert_eq!(p.by_name(""), NamedColor::White);
    }

    #[test]
    fn test_empty_slot_is_fallback() {
        let p = Palette::default();
        assert_eq!(p.slot(None), p.fallback());
        assert_eq!(p.slot(Some(TileKind::Water)), NamedColor::Blue);
    }

    #[test]
    fn test_rgb8() {
        assert_eq!(NamedColor::Red.color().to_rgb8(), [255, 0, 0]);
        assert_eq!(NamedColor::DarkGreen.color().to_rgb8(), [0, 100, 0]);
        assert_eq!(Color::rgb(2.0, -1.0, 0.5).to_rgb8(), [255, 0, 128]);
    }
}
