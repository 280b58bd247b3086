//! # TESSERA Game Loop
//!
//! ```text
//! Turn N:
//! ┌───────────────────────────────────────────────────────────┐
//! │ 1. READ INPUT     one line, zero or more commands         │
//! │ 2. APPLY          each move steps the player              │
//! │                   (radius policy evicts after each step)  │
//! │ 3. BUILD FRAME    viewport -> cells, marker, inventory    │
//! │ 4. PRESENT        sink paints the commands                │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! A frame is drawn once up front and then after every move, so the sink
//! always shows the view centered on the current position. Quit stops the
//! loop immediately; end of input does too.

use std::io::BufRead;
use std::time::Instant;

use tessera_ui::{Command, RenderSink};

use crate::error::{GameError, GameResult};
use crate::session::Session;

/// What the loop should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep reading input.
    Continue,
    /// Stop.
    Quit,
}

/// Counters for a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Frames presented.
    pub frames: u64,
    /// Moves applied.
    pub moves: u64,
    /// Total time building and presenting frames.
    pub render_us_sum: u64,
    /// Slowest frame.
    pub max_render_us: u64,
}

impl LoopStats {
    /// Average frame time in milliseconds.
    #[must_use]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames == 0 {
            return 0.0;
        }
        (self.render_us_sum as f64 / self.frames as f64) / 1000.0
    }

    fn record_frame(&mut self, elapsed_us: u64) {
        self.frames += 1;
        self.render_us_sum += elapsed_us;
        self.max_render_us = self.max_render_us.max(elapsed_us);
    }
}

/// Drives a session against a render sink.
pub struct GameLoop<S> {
    session: Session,
    sink: S,
    stats: LoopStats,
}

impl<S> GameLoop<S>
where
    S: RenderSink,
    GameError: From<S::Error>,
{
    /// Creates a loop. Nothing is drawn until [`GameLoop::redraw`] or
    /// [`GameLoop::run_lines`].
    #[must_use]
    pub fn new(session: Session, sink: S) -> Self {
        Self {
            session,
            sink,
            stats: LoopStats::default(),
        }
    }

    /// Builds and presents a frame for the current position.
    ///
    /// # Errors
    ///
    /// Chunk generation or sink failures.
    pub fn redraw(&mut self) -> GameResult<()> {
        let start = Instant::now();
        let commands = self.session.frame()?;
        self.sink.present(&commands)?;
        let elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        self.stats.record_frame(elapsed_us);
        tracing::trace!(frame = self.stats.frames, elapsed_us, "frame presented");
        Ok(())
    }

    /// Applies one command, redrawing after a move.
    ///
    /// # Errors
    ///
    /// Chunk generation or sink failures.
    pub fn handle(&mut self, command: Command) -> GameResult<LoopControl> {
        match command {
            Command::Move(intent) => {
                let _ = self.session.apply_move(intent);
                self.stats.moves += 1;
                self.redraw()?;
                Ok(LoopControl::Continue)
            }
            Command::Quit => Ok(LoopControl::Quit),
        }
    }

    /// Draws the first frame, then handles commands line by line until
    /// quit or end of input.
    ///
    /// # Errors
    ///
    /// Input read, chunk generation or sink failures.
    pub fn run_lines<R: BufRead>(&mut self, input: R) -> GameResult<LoopStats> {
        self.redraw()?;

        for line in input.lines() {
            let line = line?;
            for command in Command::parse_line(&line) {
                if self.handle(command)? == LoopControl::Quit {
                    tracing::info!(moves = self.stats.moves, frames = self.stats.frames, "quit requested");
                    return Ok(self.stats);
                }
            }
        }

        tracing::info!(moves = self.stats.moves, frames = self.stats.frames, "input closed");
        Ok(self.stats)
    }

    /// Run counters.
    #[must_use]
    pub const fn stats(&self) -> LoopStats {
        self.stats
    }

    /// The session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Splits the loop back into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Session, S) {
        (self.session, self.sink)
    }
}
