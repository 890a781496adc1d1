//! Terminal front end.
//!
//! A small game-oriented rendering layer: the view draws snapshots into a framebuffer and the
//! renderer flushes framebuffers to the terminal. No widget toolkit is involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
