//! # TESSERA Terminal Client
//!
//! Line-driven: type any mix of `w`/`a`/`s`/`d` and press enter to move,
//! `q` to quit. The view is redrawn after every step.
//!
//! ```bash
//! tessera                          # built-in defaults
//! tessera world.toml               # settings from a TOML file
//! tessera --seed 7 --style glyph   # overrides on top of either
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tessera::{CellStyle, GameConfig, GameLoop, GameResult, Session, TerminalSink};
use tessera_procedural::WorldSeed;

/// Walk an infinite procedurally generated tile world.
#[derive(Parser, Debug)]
#[command(name = "tessera", version)]
struct Args {
    /// TOML settings file; built-in defaults when omitted.
    config: Option<PathBuf>,

    /// World seed, replacing `[world] seed`.
    #[arg(long)]
    seed: Option<u64>,

    /// How cells are painted. Without it, `[view] color` picks ansi or glyph.
    #[arg(long, value_enum)]
    style: Option<StyleArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Ansi,
    Truecolor,
    Glyph,
}

impl Args {
    fn config(&self) -> GameResult<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.world.seed = WorldSeed::new(seed);
        }
        Ok(config)
    }

    fn cell_style(&self, config: &GameConfig) -> CellStyle {
        match self.style {
            Some(StyleArg::Ansi) => CellStyle::Ansi,
            Some(StyleArg::Truecolor) => CellStyle::TrueColor,
            Some(StyleArg::Glyph) => CellStyle::Glyph,
            None if config.view.color => CellStyle::Ansi,
            None => CellStyle::Glyph,
        }
    }
}

fn main() -> ExitCode {
    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "fatal");
            eprintln!("tessera: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> GameResult<()> {
    let config = args.config()?;
    let session = Session::new(&config)?;
    let style = args.cell_style(&config);
    let sink = TerminalSink::new(io::stdout().lock(), config.view.tile_size, style).clearing(style != CellStyle::Glyph);

    println!("w/a/s/d + enter to move, q to quit");
    let mut game = GameLoop::new(session, sink);
    let stats = game.run_lines(io::stdin().lock())?;

    let cache = game.session().cache_stats();
    let position = game.session().position();
    println!(
        "{} moves, ended at {position}; {} chunks generated, {} cached",
        stats.moves, cache.generated, cache.entries
    );
    Ok(())
}
