//! # Viewport
//!
//! A fixed-size window of tiles centered on a world position.
//!
//! ```text
//!   min_x = center.x - width / 2        (integer division)
//!   max_x = min_x + width               (exclusive)
//! ```
//!
//! With an even width the center sits right of the middle, which is
//! exactly where [`Viewport::marker_cell`] puts the player marker.
//!
//! Every window must be addressable with `i32` world coordinates, so
//! centers are limited to [`Viewport::center_bounds`]. The margin is
//! `width / 2` on the left and `width - width / 2` on the right, since
//! `max_x` is exclusive.

use crate::chunk::WorldCoord;
use crate::error::{ProceduralError, ProceduralResult};
use crate::terrain::TileKind;
use crate::world_cache::WorldCache;

/// Window dimensions in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

/// World-space bounds of a viewport placed at a center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewWindow {
    /// Leftmost visible column (inclusive).
    pub min_x: i32,
    /// Topmost visible row (inclusive).
    pub min_y: i32,
    /// One past the rightmost column.
    pub max_x: i32,
    /// One past the bottom row.
    pub max_y: i32,
}

impl ViewWindow {
    /// Returns whether a world position falls inside the window.
    #[must_use]
    pub const fn contains(&self, world: WorldCoord) -> bool {
        world.x >= self.min_x && world.x < self.max_x && world.y >= self.min_y && world.y < self.max_y
    }
}

/// One resolved tile in screen space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleTile {
    /// Column, 0 at the left edge.
    pub screen_x: u32,
    /// Row, 0 at the top edge.
    pub screen_y: u32,
    /// Tile at that cell.
    pub kind: TileKind,
}

impl Viewport {
    /// Creates a viewport.
    ///
    /// # Errors
    ///
    /// Returns [`ProceduralError::InvalidViewport`] if either dimension is
    /// zero or too large to address with `i32` world coordinates.
    pub fn new(width: u32, height: u32) -> ProceduralResult<Self> {
        if width == 0 || height == 0 || i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(ProceduralError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in tiles.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in tiles.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells in the window.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Smallest and largest centers whose window fits the `i32` grid,
    /// both inclusive.
    #[must_use]
    pub const fn center_bounds(&self) -> (WorldCoord, WorldCoord) {
        // Both dimensions fit in i32, checked in `new`.
        let (w, h) = (self.width as i32, self.height as i32);
        (
            WorldCoord::new(i32::MIN + w / 2, i32::MIN + h / 2),
            WorldCoord::new(i32::MAX - (w - w / 2), i32::MAX - (h - h / 2)),
        )
    }

    /// Pulls `center` into [`Viewport::center_bounds`].
    #[must_use]
    pub fn clamp_center(&self, center: WorldCoord) -> WorldCoord {
        let (lo, hi) = self.center_bounds();
        WorldCoord::new(center.x.clamp(lo.x, hi.x), center.y.clamp(lo.y, hi.y))
    }

    /// World bounds of the window around `center`.
    ///
    /// A center outside [`Viewport::center_bounds`] is clamped first, so
    /// the window always spans exactly `width` x `height` tiles.
    #[must_use]
    pub fn window(&self, center: WorldCoord) -> ViewWindow {
        let center = self.clamp_center(center);
        let (w, h) = (self.width as i32, self.height as i32);
        let min_x = center.x - w / 2;
        let min_y = center.y - h / 2;
        ViewWindow {
            min_x,
            min_y,
            max_x: min_x + w,
            max_y: min_y + h,
        }
    }

    /// Screen cell where the center (the player) is drawn.
    #[must_use]
    pub const fn marker_cell(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    /// Resolves every tile in the window, row-major from the top-left.
    ///
    /// Chunks not yet cached are generated on the way.
    ///
    /// # Errors
    ///
    /// Propagates generation failures from the cache.
    pub fn visible_tiles(&self, cache: &WorldCache, center: WorldCoord) -> ProceduralResult<Vec<VisibleTile>> {
        let window = self.window(center);
        let mut tiles = Vec::with_capacity(self.cell_count());

        for (screen_y, y) in (window.min_y..window.max_y).enumerate() {
            for (screen_x, x) in (window.min_x..window.max_x).enumerate() {
                let kind = cache.get_tile(x, y)?;
                tracing::trace!(x, y, kind = kind.name(), "tile resolved");
                tiles.push(VisibleTile {
                    screen_x: screen_x as u32,
                    screen_y: screen_y as u32,
                    kind,
                });
            }
        }

        Ok(tiles)
    }
}
