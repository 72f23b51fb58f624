// Minimal game engine API boundary. This trait exposes the core War
// commands and queries so UIs can drive the game without depending on core
// internals. It is implemented for the core `Game` type.

use crate::flip::TableCard;
use crate::game::{GameEvent, RoundOutcome, Seat, SoundEffect};

pub trait WarEngine {
    // Frame lifecycle
    fn tick(&mut self, events: &[GameEvent], now_ms: u64) -> Vec<SoundEffect>;
    fn restart(&mut self);

    // Queries for UI counters and card rendering
    fn round(&self) -> u32;
    fn hand_len(&self, seat: Seat) -> usize;
    fn player_name(&self, seat: Seat) -> &str;
    fn stack_len(&self) -> usize;
    fn game_over(&self) -> bool;
    fn winner(&self) -> Option<Seat>;
    fn last_outcome(&self) -> Option<RoundOutcome>;
    fn slot(&self, seat: Seat) -> Option<&TableCard>;
}

impl WarEngine for crate::game::Game {
    fn tick(&mut self, events: &[GameEvent], now_ms: u64) -> Vec<SoundEffect> {
        self.tick(events, now_ms)
    }

    fn restart(&mut self) {
        self.restart();
    }

    fn round(&self) -> u32 {
        self.round()
    }

    fn hand_len(&self, seat: Seat) -> usize {
        self.hand_len(seat)
    }

    fn player_name(&self, seat: Seat) -> &str {
        self.player(seat).name()
    }

    fn stack_len(&self) -> usize {
        self.stack_len()
    }

    fn game_over(&self) -> bool {
        self.game_over()
    }

    fn winner(&self) -> Option<Seat> {
        self.winner()
    }

    fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome()
    }

    fn slot(&self, seat: Seat) -> Option<&TableCard> {
        self.slot(seat)
    }
}
