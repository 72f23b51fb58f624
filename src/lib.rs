//! war-rs: the card game War with an animated flip, in the terminal
//!
//! Goals:
//! - A pure, tick-driven core (flip state machine + round resolver) with no
//!   terminal or clock dependencies
//! - Deterministic play under a seed for reproducible games and tests
//! - No panics in library code; `Result` at the shell boundary only
//!
//! ## Quick start: drive a game without a terminal
//! ```
//! use war_rs::game::{Game, GameEvent, DWELL_MS};
//! use war_rs::flip::FRAME_COUNT;
//!
//! let mut game = Game::new_seeded(42);
//! // flip both in-play cards, run the animation, wait out the dwell
//! game.tick(&[GameEvent::Select], 0);
//! for _ in 0..FRAME_COUNT {
//!     game.tick(&[], 100);
//! }
//! game.tick(&[], DWELL_MS + 1);
//! assert_eq!(game.round(), 2);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin war-rs
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod flip;
pub mod game;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
