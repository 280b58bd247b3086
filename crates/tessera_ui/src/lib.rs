//! # TESSERA UI
//!
//! Everything between resolved tiles and pixels, minus the pixels.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UI PIPELINE                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  Visible Tiles → FrameBuilder → Render Commands → Sink   │
//! │  Inventory     → InventoryBar ↗                          │
//! │  Keys          → Command (Move / Quit)                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Building commands is pure. Only a [`RenderSink`] touches a terminal
//! or window.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod input;
pub mod inventory;
pub mod layout;
pub mod palette;
pub mod render;

pub use input::{Command, Key, MoveIntent};
pub use inventory::InventoryBar;
pub use layout::Rect;
pub use palette::{Color, NamedColor, Palette};
pub use render::{FrameBuilder, RecordingSink, RenderCommand, RenderSink};
