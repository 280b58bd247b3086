//! # TESSERA
//!
//! An unbounded, procedurally generated tile world you walk around in.
//!
//! ## Crate Structure
//!
//! - `tessera_procedural`: noise, terrain, chunks, world cache, viewport
//! - `tessera_ui`: palette, render commands, inventory bar, input mapping
//! - `tessera` (this crate): configuration, session, game loop, terminal
//!
//! ## Example
//!
//! ```rust
//! use tessera::{GameConfig, GameLoop, Session};
//! use tessera_ui::RecordingSink;
//!
//! let session = Session::new(&GameConfig::default())?;
//! let mut game = GameLoop::new(session, RecordingSink::new());
//! let stats = game.run_lines("ddsq".as_bytes())?;
//! assert_eq!(stats.moves, 3);
//! # Ok::<(), tessera::GameError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod game_loop;
pub mod player;
pub mod session;
pub mod terminal;

pub use config::{GameConfig, InventoryConfig, ViewConfig, WorldConfig};
pub use error::{GameError, GameResult};
pub use game_loop::{GameLoop, LoopControl, LoopStats};
pub use player::{Inventory, PlayerState};
pub use session::Session;
pub use terminal::{CellStyle, TerminalSink};
