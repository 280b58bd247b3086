//! Frame rendering.
//!
//! Turns resolved tiles into a flat list of cell commands. Building a
//! frame is pure; a [`RenderSink`] does the actual painting.

use tessera_procedural::VisibleTile;

use crate::layout::Rect;
use crate::palette::{NamedColor, Palette};

/// A render command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    /// Filled, outlined cell.
    Cell {
        /// Bounds in pixels.
        bounds: Rect,
        /// Fill color.
        fill: NamedColor,
        /// Outline color.
        outline: NamedColor,
    },
}

impl RenderCommand {
    /// Bounds of the command.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        match self {
            Self::Cell { bounds, .. } => *bounds,
        }
    }
}

/// Consumer of finished frames.
pub trait RenderSink {
    /// Error raised while presenting.
    type Error;

    /// Presents one frame's commands, in paint order.
    ///
    /// # Errors
    ///
    /// Implementation-defined (for example, a failed terminal write).
    fn present(&mut self, commands: &[RenderCommand]) -> Result<(), Self::Error>;
}

/// Sink that keeps every presented frame. Useful for headless runs.
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<Vec<RenderCommand>>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[Vec<RenderCommand>] {
        &self.frames
    }
}

impl RenderSink for RecordingSink {
    type Error = std::convert::Infallible;

    fn present(&mut self, commands: &[RenderCommand]) -> Result<(), Self::Error> {
        self.frames.push(commands.to_vec());
        Ok(())
    }
}

/// Collects the commands of one frame.
pub struct FrameBuilder {
    tile_size: f32,
    palette: Palette,
    commands: Vec<RenderCommand>,
}

impl FrameBuilder {
    /// Creates a builder drawing `tile_size`-pixel cells.
    #[must_use]
    pub fn new(tile_size: u32, palette: Palette) -> Self {
        Self {
            tile_size: tile_size as f32,
            palette,
            commands: Vec::with_capacity(256),
        }
    }

    /// The palette in use.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Adds multiple render commands.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        self.commands.extend(commands);
    }

    /// One cell per visible tile, in the order given.
    pub fn push_tiles(&mut self, tiles: &[VisibleTile]) {
        let size = self.tile_size;
        let outline = self.palette.outline();
        let palette = self.palette;
        self.commands.extend(tiles.iter().map(|tile| {
            let fill = palette.tile(tile.kind);
            tracing::trace!(
                screen_x = tile.screen_x,
                screen_y = tile.screen_y,
                kind = tile.kind.name(),
                color = fill.name(),
                "tile cell"
            );
            RenderCommand::Cell {
                bounds: Rect::grid_cell((0.0, 0.0), tile.screen_x, tile.screen_y, size),
                fill,
                outline,
            }
        }));
    }

    /// Player marker over the given screen cell. Push after the tiles so it
    /// paints on top.
    pub fn push_marker(&mut self, cell: (u32, u32)) {
        self.commands.push(RenderCommand::Cell {
            bounds: Rect::grid_cell((0.0, 0.0), cell.0, cell.1, self.tile_size),
            fill: self.palette.player(),
            outline: self.palette.outline(),
        });
    }

    /// Ends the frame, handing over its commands.
    pub fn end_frame(&mut self) -> Vec<RenderCommand> {
        tracing::trace!(commands = self.commands.len(), "frame built");
        std::mem::take(&mut self.commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_procedural::TileKind;

    fn tiles() -> Vec<VisibleTile> {
        vec![
            VisibleTile { screen_x: 0, screen_y: 0, kind: TileKind::Water },
            VisibleTile { screen_x: 1, screen_y: 0, kind: TileKind::Tree },
            VisibleTile { screen_x: 0, screen_y: 1, kind: TileKind::Mountain },
            VisibleTile { screen_x: 1, screen_y: 1, kind: TileKind::Sand },
        ]
    }

    #[test]
    fn test_tiles_become_cells() {
        let mut builder = FrameBuilder::new(40, Palette::STANDARD);
        builder.begin_frame();
        builder.push_tiles(&tiles());
        let frame = builder.end_frame();

        assert_eq!(frame.len(), 4);
        assert_eq!(
            frame[1],
            RenderCommand::Cell {
                bounds: Rect::new(40.0, 0.0, 40.0, 40.0),
                fill: NamedColor::DarkGreen,
                outline: NamedColor::Black,
            }
        );
        assert_eq!(frame[2].bounds(), Rect::new(0.0, 40.0, 40.0, 40.0));
    }

    #[test]
    fn test_marker_paints_last() {
        let mut builder = FrameBuilder::new(40, Palette::STANDARD);
        builder.push_tiles(&tiles());
        builder.push_marker((1, 1));
        let frame = builder.end_frame();

        let RenderCommand::Cell { bounds, fill, .. } = frame[frame.len() - 1];
        assert_eq!(fill, NamedColor::Red);
        assert_eq!(bounds, Rect::new(40.0, 40.0, 40.0, 40.0));
    }

    #[test]
    fn test_begin_frame_clears() {
        let mut builder = FrameBuilder::new(10, Palette::STANDARD);
        builder.push_marker((0, 0));
        builder.begin_frame();
        assert!(builder.end_frame().is_empty());
    }

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::new();
        let mut builder = FrameBuilder::new(40, Palette::STANDARD);
        builder.push_marker((7, 4));
        let frame = builder.end_frame();
        sink.present(&frame).unwrap();
        assert_eq!(sink.frames().len(), 1);
        assert_eq!(sink.frames()[0], frame);
    }
}
