use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use war_rs::cards::{Card, Rank, Suit};
use war_rs::flip::{FlipState, TableCard, FRAME_COUNT};
use war_rs::game::{Game, GameEvent, Seat, DWELL_MS};

/// One shell-side step in a randomly driven game.
#[derive(Debug, Clone)]
enum Step {
    Select,
    Confirm,
    Wait(u64),
}

fn any_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::Select),
        1 => Just(Step::Confirm),
        4 => (0u64..2_500).prop_map(Step::Wait),
    ]
}

fn check_card(card: &TableCard) -> Result<(), TestCaseError> {
    let frame = card.current_frame();
    prop_assert!(frame < FRAME_COUNT);
    // the only stable configurations are the two edges
    if !card.is_flipping() {
        prop_assert!(frame == 0 || frame == FRAME_COUNT - 1);
    }
    prop_assert_eq!(card.face_up(), frame == FRAME_COUNT - 1);
    Ok(())
}

proptest! {
    /// Cards are never created or destroyed, whatever the input stream does.
    #[test]
    fn cards_are_conserved_under_random_play(seed in any::<u64>(), steps in prop::collection::vec(any_step(), 1..200)) {
        let mut game = Game::new_seeded(seed);
        let mut now = 0u64;
        for step in steps {
            let events = match step {
                Step::Select => vec![GameEvent::Select],
                Step::Confirm => vec![GameEvent::Confirm],
                Step::Wait(ms) => {
                    now += ms;
                    Vec::new()
                }
            };
            game.tick(&events, now);
            prop_assert_eq!(game.total_cards(), 48);
            for seat in Seat::ALL {
                if let Some(card) = game.slot(seat) {
                    check_card(card)?;
                }
            }
        }
    }

    /// The round counter never decreases and moves one at a time.
    #[test]
    fn rounds_advance_monotonically(seed in any::<u64>(), waits in prop::collection::vec(0u64..3_000, 1..100)) {
        let mut game = Game::new_seeded(seed);
        let mut now = 0u64;
        let mut last_round = game.round();
        for wait in waits {
            game.tick(&[GameEvent::Select], now);
            now += wait;
            game.tick(&[], now);
            let round = game.round();
            prop_assert!(round == last_round || round == last_round + 1);
            last_round = round;
        }
    }

    /// A lone table card honors its own invariants under any interleaving
    /// of triggers and ticks.
    #[test]
    fn table_card_state_machine_is_sound(ops in prop::collection::vec((any::<bool>(), 0u64..2_500), 1..100)) {
        let mut card = TableCard::new(Card::new(Rank::Nine, Suit::Stars));
        let mut now = 0u64;
        for (do_trigger, dt) in ops {
            now += dt;
            if do_trigger {
                card.trigger(now);
            }
            card.tick();
            let frame = card.current_frame();
            prop_assert!(frame < FRAME_COUNT);
            match card.state() {
                FlipState::FaceDown => {
                    prop_assert_eq!(frame, 0);
                }
                FlipState::FaceUp => {
                    prop_assert_eq!(frame, FRAME_COUNT - 1);
                }
                FlipState::FlippingUp | FlipState::FlippingDown => {
                    prop_assert!(frame > 0 && frame < FRAME_COUNT - 1);
                }
            }
        }
    }

    /// Nothing resolves while both cards are still inside the dwell window.
    #[test]
    fn dwell_window_blocks_resolution(seed in any::<u64>(), early in 0u64..=DWELL_MS) {
        let mut game = Game::new_seeded(seed);
        game.tick(&[GameEvent::Select], 0);
        for _ in 0..FRAME_COUNT {
            game.tick(&[], 0);
        }
        game.tick(&[], early);
        prop_assert_eq!(game.round(), 1);
    }
}
