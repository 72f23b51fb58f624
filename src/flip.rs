use crate::cards::Card;

/// Frame rects per spritesheet (one sheet for the card back, one per card
/// face).
pub const SHEET_FRAMES: usize = 7;

/// Length of the displayed flip sequence: the back sheet's frames in
/// shrinking order followed by the face sheet's frames in growing order.
/// Frame 0 is the full-width back, frame `FRAME_COUNT - 1` the full face.
pub const FRAME_COUNT: usize = SHEET_FRAMES * 2;

/// Lockout after a flip trigger before the same card accepts another.
pub const COOLDOWN_MS: u64 = 1800;

/// Which player a table card faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Facing the bottom seat (player 1), drawn at 0 degrees.
    Upright,
    /// Facing the top seat (player 2), drawn rotated 180 degrees.
    Reversed,
}

impl Orientation {
    pub const fn degrees(self) -> u16 {
        match self {
            Orientation::Upright => 0,
            Orientation::Reversed => 180,
        }
    }
}

/// Flip animation states. `FlippingDown` is only reachable by re-triggering
/// a face-up card; round resolution uses the immediate [`TableCard::flip_down`]
/// reset instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipState {
    FaceDown,
    FlippingUp,
    FaceUp,
    FlippingDown,
}

/// A card on the table: identity plus per-tenure animation and orientation
/// state. Owned by exactly one of a player's hand, the war stack, or an
/// in-play slot at any time.
#[derive(Debug, Clone)]
pub struct TableCard {
    card: Card,
    state: FlipState,
    orientation: Orientation,
    current_frame: usize,
    last_flip: Option<u64>,
}

impl TableCard {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            state: FlipState::FaceDown,
            orientation: Orientation::Upright,
            current_frame: 0,
            last_flip: None,
        }
    }

    pub fn card(&self) -> Card {
        self.card
    }

    pub fn state(&self) -> FlipState {
        self.state
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Fixed per in-play tenure; reassigned when the card is dealt to a slot.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Millisecond timestamp of the most recent accepted trigger, if any.
    pub fn last_flip(&self) -> Option<u64> {
        self.last_flip
    }

    /// A card is face up exactly when it shows the final frame.
    pub fn face_up(&self) -> bool {
        self.current_frame == FRAME_COUNT - 1
    }

    pub fn is_flipping(&self) -> bool {
        matches!(self.state, FlipState::FlippingUp | FlipState::FlippingDown)
    }

    fn cooled_down(&self, now_ms: u64) -> bool {
        match self.last_flip {
            None => true,
            Some(at) => now_ms.saturating_sub(at) > COOLDOWN_MS,
        }
    }

    /// Handle a select event. Starts a flip if the card is idle and the
    /// cooldown has elapsed; returns whether a flip started (the caller
    /// plays the flip sound exactly once per accepted trigger). Triggers
    /// during an animation or inside the cooldown are silently ignored.
    pub fn trigger(&mut self, now_ms: u64) -> bool {
        match self.state {
            FlipState::FaceDown if self.cooled_down(now_ms) => {
                self.last_flip = Some(now_ms);
                self.state = FlipState::FlippingUp;
                true
            }
            FlipState::FaceUp if self.cooled_down(now_ms) => {
                self.last_flip = Some(now_ms);
                self.state = FlipState::FlippingDown;
                true
            }
            _ => false,
        }
    }

    /// Advance the animation by one frame. Idle states are unaffected; a
    /// flip in progress always runs to its edge, one frame per tick.
    pub fn tick(&mut self) {
        match self.state {
            FlipState::FlippingUp => {
                self.current_frame += 1;
                if self.current_frame == FRAME_COUNT - 1 {
                    self.state = FlipState::FaceUp;
                }
            }
            FlipState::FlippingDown => {
                self.current_frame -= 1;
                if self.current_frame == 0 {
                    self.state = FlipState::FaceDown;
                }
            }
            FlipState::FaceDown | FlipState::FaceUp => {}
        }
    }

    /// Immediate, non-animated reset to face down. Used when a round
    /// resolves and the card returns to a hand or the stack. Leaves
    /// `last_flip` alone so the cooldown still applies on the next tenure.
    pub fn flip_down(&mut self) {
        self.current_frame = 0;
        self.state = FlipState::FaceDown;
    }
}
