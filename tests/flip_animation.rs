use war_rs::flip::{COOLDOWN_MS, FRAME_COUNT};
use war_rs::game::{Game, GameEvent, Seat, SoundEffect, DWELL_MS};

#[test]
fn one_select_flips_both_cards() {
    let mut game = Game::new_seeded(11);
    game.tick(&[GameEvent::Select], 0);
    assert!(game.slot(Seat::One).unwrap().is_flipping());
    assert!(game.slot(Seat::Two).unwrap().is_flipping());
}

#[test]
fn sound_fires_once_per_accepted_trigger_not_per_tick() {
    let mut game = Game::new_seeded(12);
    let sounds = game.tick(&[GameEvent::Select], 0);
    assert_eq!(sounds, vec![SoundEffect::CardFlip, SoundEffect::CardFlip]);

    // animation ticks are silent
    for _ in 0..FRAME_COUNT {
        assert!(game.tick(&[], 10).is_empty());
    }
}

#[test]
fn select_mid_flip_is_silent_and_harmless() {
    let mut game = Game::new_seeded(13);
    game.tick(&[GameEvent::Select], 0);
    let frame_before = game.slot(Seat::One).unwrap().current_frame();
    let sounds = game.tick(&[GameEvent::Select], 5);
    assert!(sounds.is_empty());
    // the flip keeps advancing one frame per tick regardless
    assert_eq!(game.slot(Seat::One).unwrap().current_frame(), frame_before + 1);
}

#[test]
fn select_within_cooldown_is_ignored() {
    let mut game = Game::new_seeded(14);
    game.tick(&[GameEvent::Select], 0);
    for _ in 0..FRAME_COUNT {
        game.tick(&[], 10);
    }
    assert!(game.slot(Seat::One).unwrap().face_up());

    // face up, inside the 1800ms lockout (and before the dwell gate at
    // 1700ms): re-trigger does nothing
    assert!(COOLDOWN_MS > 1_000 && DWELL_MS > 1_000);
    let sounds = game.tick(&[GameEvent::Select], 1_000);
    assert!(sounds.is_empty());
    assert!(game.slot(Seat::One).unwrap().face_up());
    assert_eq!(game.round(), 1);
}

#[test]
fn flip_frames_advance_monotonically_to_face_up() {
    let mut game = Game::new_seeded(15);
    game.tick(&[GameEvent::Select], 0);
    let mut last = game.slot(Seat::One).unwrap().current_frame();
    while !game.slot(Seat::One).unwrap().face_up() {
        game.tick(&[], 20);
        let frame = game.slot(Seat::One).unwrap().current_frame();
        assert!(frame > last);
        assert!(frame < FRAME_COUNT);
        last = frame;
    }
    assert_eq!(last, FRAME_COUNT - 1);
}

#[test]
fn dwell_gate_holds_the_round_until_elapsed() {
    let mut game = Game::new_seeded(16);
    game.tick(&[GameEvent::Select], 0);
    for _ in 0..FRAME_COUNT {
        game.tick(&[], 30);
    }
    assert!(game.slot(Seat::One).unwrap().face_up());
    assert!(game.slot(Seat::Two).unwrap().face_up());

    // face up but still dwelling: nothing resolves
    game.tick(&[], DWELL_MS);
    assert_eq!(game.round(), 1);
    assert!(game.slot(Seat::One).unwrap().face_up());

    // one past the gate: resolved and redealt face down
    game.tick(&[], DWELL_MS + 1);
    assert_eq!(game.round(), 2);
    assert!(!game.slot(Seat::One).unwrap().face_up());
    assert_eq!(game.slot(Seat::One).unwrap().current_frame(), 0);
}
