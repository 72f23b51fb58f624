use crate::game::{Game, GameEvent, SoundEffect};
use std::time::Instant;

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    /// Flip the in-play cards (Space or left click).
    Select,
    /// Start a new game after one ends (Enter).
    Confirm,
}

/// Shell-side state: the core game, the clock origin, and the input events
/// collected since the last tick. The controller queues events as they
/// arrive; [`AppState::on_tick`] hands them to the core in one batch so the
/// frame order (input, animation, resolution) stays fixed.
#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub game: Game,
    pub started: Instant,
    pending: Vec<GameEvent>,
}

impl Default for AppState {
    fn default() -> Self {
        Self { game: Game::new(), started: Instant::now(), pending: Vec::new() }
    }
}

impl AppState {
    /// Deterministic variant for tests and demo recordings.
    pub fn seeded(seed: u64) -> Self {
        Self { game: Game::new_seeded(seed), started: Instant::now(), pending: Vec::new() }
    }

    /// Milliseconds since the shell started; the core's monotonic clock.
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Queue an input action for the next tick. Returns whether the action
    /// was accepted in the current phase of the game (selects are dropped
    /// once the game is over, confirms only count after it).
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Select => {
                if self.game.game_over() {
                    return false;
                }
                self.pending.push(GameEvent::Select);
                true
            }
            InputAction::Confirm => {
                if !self.game.game_over() {
                    return false;
                }
                self.pending.push(GameEvent::Confirm);
                true
            }
        }
    }

    /// Advance one frame: drain the queued events into the core and return
    /// the sound effects it fired.
    pub fn on_tick(&mut self) -> Vec<SoundEffect> {
        let now = self.now_ms();
        self.advance(now)
    }

    /// Like [`AppState::on_tick`] with an explicit clock, for tests.
    pub fn advance(&mut self, now_ms: u64) -> Vec<SoundEffect> {
        let events = std::mem::take(&mut self.pending);
        self.game.tick(&events, now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Seat;

    #[test]
    fn select_queues_while_playing() {
        let mut app = AppState::seeded(1);
        assert!(app.handle_input(InputAction::Select));
        assert_eq!(app.pending_len(), 1);
        let sounds = app.advance(0);
        assert_eq!(sounds.len(), 2);
        assert_eq!(app.pending_len(), 0);
    }

    #[test]
    fn confirm_rejected_while_playing() {
        let mut app = AppState::seeded(2);
        assert!(!app.handle_input(InputAction::Confirm));
        assert_eq!(app.pending_len(), 0);
        assert_eq!(app.game.hand_len(Seat::One), 23);
    }
}
