use crate::cards::Card;
use crate::deck::Deck;
use crate::flip::{Orientation, TableCard};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Pause after both in-play cards reach face up before the round is scored,
/// so the flip animation stays visible.
pub const DWELL_MS: u64 = 1700;

/// The two seats at the table. Player one sits at the bottom of the screen,
/// player two at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::One, Seat::Two];

    pub const fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    pub const fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// Input events the shell forwards to the game each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameEvent {
    /// Flip request (left click or the flip key). Routed to both in-play
    /// cards; each applies its own cooldown.
    Select,
    /// Restart request. Only honored while the game is over.
    Confirm,
}

/// Fire-and-forget sound effects emitted by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SoundEffect {
    CardFlip,
}

/// How the most recent round resolved, for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Win(Seat),
    War,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub(crate) name: String,
    /// Front of the queue is the next card to play.
    pub(crate) holding: VecDeque<TableCard>,
}

impl Player {
    fn new(name: &str, holding: Vec<TableCard>) -> Self {
        Self { name: name.to_string(), holding: holding.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.holding.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holding.is_empty()
    }

    /// Card identities in hand order, front (next to play) first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.holding.iter().map(|t| t.card())
    }
}

/// The contested pile accumulated during one or more consecutive wars,
/// awarded whole to whoever wins the next non-tied round.
#[derive(Debug, Clone, Default)]
pub struct WarStack {
    cards: Vec<TableCard>,
}

impl WarStack {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn push(&mut self, card: TableCard) {
        self.cards.push(card);
    }

    fn take_all(&mut self) -> Vec<TableCard> {
        std::mem::take(&mut self.cards)
    }

    fn clear(&mut self) {
        self.cards.clear();
    }

    // The stack is shuffled after every war even though it is always
    // awarded whole, so the order never shows.
    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        use rand::seq::SliceRandom;
        self.cards.shuffle(rng);
    }
}

/// One game of War: two players, the war stack, the two in-play slots, and
/// the round counter. Driven by [`Game::tick`] from the presentation shell.
#[derive(Debug)]
pub struct Game {
    pub(crate) players: [Player; 2],
    pub(crate) stack: WarStack,
    /// In-play card per seat; `None` before the first deal or once a hand
    /// has run dry.
    pub(crate) slots: [Option<TableCard>; 2],
    pub(crate) round: u32,
    pub(crate) game_over: bool,
    pub(crate) winner: Option<Seat>,
    pub(crate) last_outcome: Option<RoundOutcome>,
    rng: ChaCha8Rng,
}

impl Game {
    pub fn new() -> Self {
        Self::new_seeded(rand::rng().random())
    }

    /// Build a game with a deterministic shuffle, for reproducible runs and
    /// tests.
    pub fn new_seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle_with(&mut rng);
        let (hand_1, hand_2) = deck.split_into_hands(&mut rng);
        let mut game = Self {
            players: [Player::new("Player 1", hand_1), Player::new("Player 2", hand_2)],
            stack: WarStack::default(),
            slots: [None, None],
            round: 1,
            game_over: false,
            winner: None,
            last_outcome: None,
            rng,
        };
        game.deal();
        game
    }

    /// Build a game from explicit hands (front of each vec plays first).
    /// Intended for setting up positions; the regular constructor deals a
    /// shuffled 48-card deck.
    pub fn from_hands(hand_1: Vec<Card>, hand_2: Vec<Card>, seed: u64) -> Self {
        let to_hand = |cards: Vec<Card>| cards.into_iter().map(TableCard::new).collect();
        let mut game = Self {
            players: [
                Player::new("Player 1", to_hand(hand_1)),
                Player::new("Player 2", to_hand(hand_2)),
            ],
            stack: WarStack::default(),
            slots: [None, None],
            round: 1,
            game_over: false,
            winner: None,
            last_outcome: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.deal();
        game
    }

    /// Advance one frame of logic, in fixed order: input, animation, round
    /// resolution. Returns the sound effects fired this tick. `now_ms` is a
    /// monotonic millisecond clock supplied by the shell.
    pub fn tick(&mut self, events: &[GameEvent], now_ms: u64) -> Vec<SoundEffect> {
        let mut sounds = Vec::new();
        for event in events {
            match event {
                GameEvent::Select if !self.game_over => {
                    // one select reaches both in-play cards
                    for slot in self.slots.iter_mut().flatten() {
                        if slot.trigger(now_ms) {
                            sounds.push(SoundEffect::CardFlip);
                        }
                    }
                }
                GameEvent::Confirm if self.game_over => self.restart(),
                _ => {}
            }
        }

        for slot in self.slots.iter_mut().flatten() {
            slot.tick();
        }

        if self.round_ready(now_ms) {
            self.resolve_round();
            self.deal();
        }
        sounds
    }

    /// Full reinitialization: fresh shuffled deck, both hands redealt,
    /// counters and stack reset. The RNG stream continues.
    pub fn restart(&mut self) {
        let mut deck = Deck::new();
        deck.shuffle_with(&mut self.rng);
        let (hand_1, hand_2) = deck.split_into_hands(&mut self.rng);
        self.players[0].holding = hand_1.into();
        self.players[1].holding = hand_2.into();
        self.stack.clear();
        self.slots = [None, None];
        self.round = 1;
        self.game_over = false;
        self.winner = None;
        self.last_outcome = None;
        self.deal();
    }

    /// Both cards face up and the dwell period elapsed since the later of
    /// the two flip triggers.
    fn round_ready(&self, now_ms: u64) -> bool {
        match (&self.slots[0], &self.slots[1]) {
            (Some(a), Some(b)) if a.face_up() && b.face_up() => {
                match a.last_flip().max(b.last_flip()) {
                    Some(at) => now_ms.saturating_sub(at) > DWELL_MS,
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// Score the two in-play cards: transfer them (and any stack) to the
    /// winner, or escalate a war. Counts the round and checks for the end
    /// of the game. Only called once the dwell gate has passed, which
    /// guarantees both slots hold face-up cards.
    fn resolve_round(&mut self) {
        let (mut card_1, mut card_2) = match (self.slots[0].take(), self.slots[1].take()) {
            (Some(a), Some(b)) => (a, b),
            _ => return,
        };
        card_1.flip_down();
        card_2.flip_down();

        match card_1.card().rank().cmp(&card_2.card().rank()) {
            Ordering::Greater => self.award_round(Seat::One, card_1, card_2),
            Ordering::Less => self.award_round(Seat::Two, card_1, card_2),
            Ordering::Equal => self.go_to_war(card_1, card_2),
        }

        self.round += 1;
        self.check_endgame();
    }

    /// Winner takes both played cards and then the whole stack, appended to
    /// the back of the hand in that order.
    fn award_round(&mut self, winner: Seat, card_1: TableCard, card_2: TableCard) {
        let hand = &mut self.players[winner.index()].holding;
        hand.push_back(card_1);
        hand.push_back(card_2);
        hand.extend(self.stack.take_all());
        self.last_outcome = Some(RoundOutcome::Win(winner));
    }

    /// Tie: both played cards join the stack, plus one ante card from the
    /// front of each hand when both players can still pay it.
    fn go_to_war(&mut self, card_1: TableCard, card_2: TableCard) {
        self.stack.push(card_1);
        self.stack.push(card_2);
        if !self.players[0].is_empty() && !self.players[1].is_empty() {
            if let Some(ante) = self.players[0].holding.pop_front() {
                self.stack.push(ante);
            }
            if let Some(ante) = self.players[1].holding.pop_front() {
                self.stack.push(ante);
            }
        }
        self.stack.shuffle_with(&mut self.rng);
        self.last_outcome = Some(RoundOutcome::War);
    }

    /// Player one's hand is checked first, so if a war empties both hands at
    /// once player two takes the game.
    fn check_endgame(&mut self) {
        if self.players[0].is_empty() {
            self.game_over = true;
            self.winner = Some(Seat::Two);
        } else if self.players[1].is_empty() {
            self.game_over = true;
            self.winner = Some(Seat::One);
        }
    }

    /// Pop the front card of each hand into its in-play slot, only when
    /// both hands can supply one. Orientation is reassigned on every deal,
    /// clearing any stale rotation from a previous tenure.
    fn deal(&mut self) {
        if self.players[0].is_empty() || self.players[1].is_empty() {
            return;
        }
        if let Some(mut card) = self.players[0].holding.pop_front() {
            card.set_orientation(Orientation::Upright);
            self.slots[0] = Some(card);
        }
        if let Some(mut card) = self.players[1].holding.pop_front() {
            card.set_orientation(Orientation::Reversed);
            self.slots[1] = Some(card);
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn hand_len(&self, seat: Seat) -> usize {
        self.players[seat.index()].len()
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// The in-play card for a seat, if one is dealt.
    pub fn slot(&self, seat: Seat) -> Option<&TableCard> {
        self.slots[seat.index()].as_ref()
    }

    /// Cards across both hands, the stack, and the in-play slots. Constant
    /// at 48 for the lifetime of a regularly dealt game.
    pub fn total_cards(&self) -> usize {
        self.players[0].len()
            + self.players[1].len()
            + self.stack.len()
            + self.slots.iter().flatten().count()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
