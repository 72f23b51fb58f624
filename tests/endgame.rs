use war_rs::cards::parse_cards;
use war_rs::flip::FRAME_COUNT;
use war_rs::game::{Game, GameEvent, Seat, DWELL_MS};

fn play_round(game: &mut Game, now: u64) -> u64 {
    game.tick(&[GameEvent::Select], now);
    for _ in 0..FRAME_COUNT {
        game.tick(&[], now + 1);
    }
    game.tick(&[], now + DWELL_MS + 1);
    now + DWELL_MS + 2_000
}

fn game_from(hand_1: &str, hand_2: &str) -> Game {
    Game::from_hands(parse_cards(hand_1).unwrap(), parse_cards(hand_2).unwrap(), 0)
}

#[test]
fn king_beats_queen_and_ends_the_game() {
    let mut game = game_from("Kc", "Qu");
    play_round(&mut game, 0);

    assert_eq!(game.hand_len(Seat::One), 2);
    assert_eq!(game.hand_len(Seat::Two), 0);
    assert!(game.game_over());
    assert_eq!(game.winner(), Some(Seat::One));
    // no cards left to deal
    assert!(game.slot(Seat::One).is_none());
    assert!(game.slot(Seat::Two).is_none());
}

#[test]
fn war_that_empties_both_hands_goes_to_player_two() {
    // 8 vs 8 is a war; the 5 and 3 are swallowed as antes, leaving both
    // hands empty at once. Player one's hand is checked first, so player
    // two takes the game.
    let mut game = game_from("8c 5c", "8u 3u");
    play_round(&mut game, 0);

    assert_eq!(game.stack_len(), 4);
    assert_eq!(game.hand_len(Seat::One), 0);
    assert_eq!(game.hand_len(Seat::Two), 0);
    assert!(game.game_over());
    assert_eq!(game.winner(), Some(Seat::Two));
}

#[test]
fn stack_cards_stay_stranded_at_game_over() {
    let mut game = game_from("8c 5c", "8u 3u");
    play_round(&mut game, 0);

    assert!(game.game_over());
    // the contested cards are never awarded, but they are not lost either
    assert_eq!(game.total_cards(), 4);
    assert_eq!(game.stack_len(), 4);
}

#[test]
fn confirm_restarts_a_finished_game() {
    let mut game = game_from("Kc", "Qu");
    let now = play_round(&mut game, 0);
    assert!(game.game_over());

    game.tick(&[GameEvent::Confirm], now);

    assert!(!game.game_over());
    assert_eq!(game.winner(), None);
    assert_eq!(game.round(), 1);
    assert_eq!(game.last_outcome(), None);
    assert_eq!(game.stack_len(), 0);
    // a full 48-card deal replaces the scenario hands
    assert_eq!(game.total_cards(), 48);
    assert_eq!(game.hand_len(Seat::One), 23);
    assert_eq!(game.hand_len(Seat::Two), 23);
    assert!(game.slot(Seat::One).is_some());
    assert!(game.slot(Seat::Two).is_some());
}

#[test]
fn restarted_game_plays_normally() {
    let mut game = game_from("Kc", "Qu");
    let mut now = play_round(&mut game, 0);
    game.tick(&[GameEvent::Confirm], now);

    now += 2_000;
    play_round(&mut game, now);
    assert_eq!(game.round(), 2);
    assert_eq!(game.total_cards(), 48);
}
