//! # Session
//!
//! One running world: the chunk cache, the player and everything needed to
//! turn the player's surroundings into a frame. Nothing here is global;
//! callers own the session and pass it where it is needed.

use tessera_procedural::{
    CacheStats, ChunkGenerator, ViewWindow, Viewport, VisibleTile, WorldCache, WorldCoord,
};
use tessera_ui::{FrameBuilder, InventoryBar, MoveIntent, Palette, RenderCommand};

use crate::config::GameConfig;
use crate::error::GameResult;
use crate::player::PlayerState;

/// World, player and presentation state for one game.
pub struct Session {
    cache: WorldCache,
    player: PlayerState,
    viewport: Viewport,
    frame: FrameBuilder,
    inventory_bar: InventoryBar,
}

impl Session {
    /// Builds a session from a configuration.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is not runnable.
    pub fn new(config: &GameConfig) -> GameResult<Self> {
        config.validate()?;

        let generator = ChunkGenerator::new(
            config.world.seed,
            config.noise,
            config.chunk_size()?,
            config.world.tree_placement,
        )?;
        let viewport = Viewport::new(config.view.width, config.view.height)?;
        let palette = Palette::STANDARD;
        // Keep every view window inside the i32 grid.
        let (center_min, center_max) = viewport.center_bounds();
        // Inventory row sits directly under the map.
        let bar_top = config.view.height as f32 * config.view.tile_size as f32;

        tracing::info!(
            seed = config.world.seed.value(),
            chunk_size = config.world.chunk_size,
            trees = ?config.world.tree_placement,
            cache = ?config.cache,
            "session started"
        );

        Ok(Self {
            cache: WorldCache::new(generator, config.cache),
            player: PlayerState::new(config.inventory.slots).with_bounds(center_min, center_max),
            viewport,
            frame: FrameBuilder::new(config.view.tile_size, palette),
            inventory_bar: InventoryBar::new(config.view.tile_size, (0.0, bar_top)),
        })
    }

    /// Steps the player one tile, then applies the cache's radius policy
    /// around the new position. Returns the new position.
    ///
    /// Movement stops where the view would leave the `i32` grid.
    pub fn apply_move(&mut self, intent: MoveIntent) -> WorldCoord {
        let (dx, dy) = intent.delta();
        let position = self.player.translate(dx, dy);
        let evicted = self.cache.observe_position(position);
        tracing::debug!(x = position.x, y = position.y, evicted, "player moved");
        position
    }

    /// Player position.
    #[must_use]
    pub const fn position(&self) -> WorldCoord {
        self.player.position()
    }

    /// World bounds of the current view.
    #[must_use]
    pub fn window(&self) -> ViewWindow {
        self.viewport.window(self.player.position())
    }

    /// Tiles in view, row-major.
    ///
    /// # Errors
    ///
    /// Propagates chunk generation failures.
    pub fn visible_tiles(&self) -> GameResult<Vec<VisibleTile>> {
        Ok(self.viewport.visible_tiles(&self.cache, self.player.position())?)
    }

    /// Builds the next frame: map cells, then the player marker, then the
    /// inventory row.
    ///
    /// # Errors
    ///
    /// Propagates chunk generation failures.
    pub fn frame(&mut self) -> GameResult<Vec<RenderCommand>> {
        let tiles = self.visible_tiles()?;
        let palette = *self.frame.palette();

        self.frame.begin_frame();
        self.frame.push_tiles(&tiles);
        self.frame.push_marker(self.viewport.marker_cell());
        self.frame
            .extend(self.inventory_bar.layout(self.player.inventory().slots(), &palette));
        Ok(self.frame.end_frame())
    }

    /// The player.
    #[must_use]
    pub const fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The player, mutably (inventory edits).
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// The world cache.
    #[must_use]
    pub const fn cache(&self) -> &WorldCache {
        &self.cache
    }

    /// Cache counters.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// The viewport.
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
