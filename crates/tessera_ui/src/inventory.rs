//! Inventory bar - one cell per slot, laid out left to right.

use tessera_procedural::TileKind;

use crate::layout::Rect;
use crate::palette::Palette;
use crate::render::RenderCommand;

/// Horizontal slot strip.
#[derive(Debug, Clone, Copy)]
pub struct InventoryBar {
    tile_size: f32,
    origin: (f32, f32),
}

impl InventoryBar {
    /// Creates a bar with `tile_size`-pixel slots, top-left at `origin`.
    #[must_use]
    pub fn new(tile_size: u32, origin: (f32, f32)) -> Self {
        Self {
            tile_size: tile_size as f32,
            origin,
        }
    }

    /// Bounds of slot `index`.
    #[must_use]
    pub fn slot_bounds(&self, index: usize) -> Rect {
        let column = u32::try_from(index).unwrap_or(u32::MAX);
        Rect::grid_cell(self.origin, column, 0, self.tile_size)
    }

    /// One cell per slot; empty slots use the palette fallback.
    #[must_use]
    pub fn layout(&self, slots: &[Option<TileKind>], palette: &Palette) -> Vec<RenderCommand> {
        slots
            .iter()
            .enumerate()
            .map(|(i, item)| RenderCommand::Cell {
                bounds: self.slot_bounds(i),
                fill: palette.slot(*item),
                outline: palette.outline(),
            })
            .collect()
    }
}
