//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and nothing else. It has **no dependencies** on
//! terminals, windows or clocks:
//!
//! - **Deterministic**: the same seed replays the same pieces and colors
//! - **Driven from outside**: the caller decides when time passes and which intents arrive
//! - **Infallible**: illegal moves are reverted, never reported as errors
//!
//! # Module Structure
//!
//! - [`piece`]: shape catalog and the falling piece
//! - [`board`]: locked cells and the render grid
//! - [`collision`]: the single legality check behind every motion
//! - [`lines`]: full-row detection and compaction
//! - [`scoring`]: flat scoring, level and gravity schedule
//! - [`session`]: the state machine tying everything together
//! - [`rng`]: seeded piece and color generation
//! - [`config`]: tunable parameters
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn at the top, horizontally centered, in their first rotation state
//! - Gravity moves the piece down one row per fall interval; a blocked step locks it
//! - Each cleared row is worth 100 points; every 500 points raises the level by one
//! - The fall interval starts at 500ms and shrinks by 50ms per level, never below 100ms
//! - The game ends when a lock leaves any cell on row 0 or above, or a spawn is blocked
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameSession};
//! use blockfall_core::types::GameAction;
//!
//! let mut game = GameSession::new(GameConfig {
//!     seed: Some(12345),
//!     ..GameConfig::default()
//! });
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick(16);
//!
//! assert!(game.is_running());
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod lines;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::is_valid;
pub use config::GameConfig;
pub use lines::clear_full_rows;
pub use piece::{rotation_states, Matrix, Piece, SPAWN_ORIGIN};
pub use rng::PieceSource;
pub use session::{GameSession, Phase};
pub use snapshot::{GameSnapshot, NextPreview};
