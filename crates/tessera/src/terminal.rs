//! Terminal render sink.
//!
//! Maps pixel-space cells back onto a character grid (one cell per
//! `tile_size` pixels) and paints each as two characters wide, so cells
//! come out roughly square in a typical terminal font.

use std::io::Write;

use tessera_ui::{NamedColor, RenderCommand, RenderSink};

/// How cells are painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellStyle {
    /// 256-color ANSI background.
    Ansi,
    /// 24-bit ANSI background.
    TrueColor,
    /// One glyph per color, no escape codes.
    Glyph,
}

impl CellStyle {
    /// Plain-text glyph for a color.
    #[must_use]
    pub const fn glyph(color: NamedColor) -> char {
        match color {
            NamedColor::Blue => '~',
            NamedColor::Yellow => '.',
            NamedColor::Green => '"',
            NamedColor::DarkGreen => '#',
            NamedColor::Gray => '%',
            NamedColor::White => '^',
            NamedColor::Red => '@',
            NamedColor::Black => ' ',
        }
    }
}

/// Paints frames onto any [`Write`].
pub struct TerminalSink<W> {
    out: W,
    tile_size: f32,
    style: CellStyle,
    clear: bool,
}

impl<W: Write> TerminalSink<W> {
    /// Creates a sink for `tile_size`-pixel cells.
    pub fn new(out: W, tile_size: u32, style: CellStyle) -> Self {
        Self {
            out,
            tile_size: tile_size.max(1) as f32,
            style,
            clear: false,
        }
    }

    /// Clear the screen before each frame.
    #[must_use]
    pub fn clearing(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn grid(&self, commands: &[RenderCommand]) -> (usize, Vec<Option<NamedColor>>) {
        let cell_of = |v: f32| (v / self.tile_size).floor().max(0.0) as usize;
        let (mut cols, mut rows) = (0, 0);
        for command in commands {
            let bounds = command.bounds();
            cols = cols.max(cell_of(bounds.right() - 1.0) + 1);
            rows = rows.max(cell_of(bounds.bottom() - 1.0) + 1);
        }

        let mut grid = vec![None; cols * rows];
        for command in commands {
            let RenderCommand::Cell { bounds, fill, .. } = *command;
            // Later commands paint over earlier ones.
            grid[cell_of(bounds.y) * cols + cell_of(bounds.x)] = Some(fill);
        }
        (cols, grid)
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    type Error = std::io::Error;

    fn present(&mut self, commands: &[RenderCommand]) -> Result<(), Self::Error> {
        let (cols, grid) = self.grid(commands);
        if self.clear {
            write!(self.out, "\x1b[2J\x1b[H")?;
        }

        for row in grid.chunks(cols.max(1)) {
            for cell in row {
                match (self.style, cell) {
                    (_, None) => write!(self.out, "  ")?,
                    (CellStyle::Ansi, Some(color)) => write!(self.out, "\x1b[48;5;{}m  ", color.ansi_index())?,
                    (CellStyle::TrueColor, Some(color)) => {
                        let [r, g, b] = color.color().to_rgb8();
                        write!(self.out, "\x1b[48;2;{r};{g};{b}m  ")?;
                    }
                    (CellStyle::Glyph, Some(color)) => {
                        let glyph = CellStyle::glyph(*color);
                        write!(self.out, "{glyph}{glyph}")?;
                    }
                }
            }
            if self.style != CellStyle::Glyph {
                write!(self.out, "\x1b[0m")?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_ui::Rect;

    fn cell(x: f32, y: f32, fill: NamedColor) -> RenderCommand {
        RenderCommand::Cell {
            bounds: Rect::new(x, y, 40.0, 40.0),
            fill,
            outline: NamedColor::Black,
        }
    }

    #[test]
    fn test_glyph_grid() {
        let mut sink = TerminalSink::new(Vec::new(), 40, CellStyle::Glyph);
        sink.present(&[
            cell(0.0, 0.0, NamedColor::Blue),
            cell(40.0, 0.0, NamedColor::Yellow),
            cell(0.0, 40.0, NamedColor::Gray),
        ])
        .unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "~~..\n%%  \n");
    }

    #[test]
    fn test_later_commands_paint_on_top() {
        let mut sink = TerminalSink::new(Vec::new(), 40, CellStyle::Glyph);
        sink.present(&[cell(0.0, 0.0, NamedColor::Green), cell(0.0, 0.0, NamedColor::Red)]).unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "@@\n");
    }

    #[test]
    fn test_ansi_codes() {
        let mut sink = TerminalSink::new(Vec::new(), 40, CellStyle::Ansi).clearing(true);
        sink.present(&[cell(0.0, 0.0, NamedColor::Red)]).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with("\x1b[2J\x1b[H"));
        assert!(text.contains("\x1b[48;5;196m  "));
        assert!(text.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_truecolor_codes() {
        let mut sink = TerminalSink::new(Vec::new(), 40, CellStyle::TrueColor);
        sink.present(&[cell(0.0, 0.0, NamedColor::DarkGreen), cell(40.0, 0.0, NamedColor::Gray)]).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "\x1b[48;2;0;100;0m  \x1b[48;2;128;128;128m  \x1b[0m\n");
    }

    #[test]
    fn test_empty_frame() {
        let mut sink = TerminalSink::new(Vec::new(), 40, CellStyle::Glyph);
        sink.present(&[]).unwrap();
        assert!(sink.into_inner().is_empty());
    }
}
