//! Frame lookup for the card flip animation.
//!
//! The card art is cut into seven frames per spritesheet, each wider than
//! the last as the card turns toward the viewer. In the terminal the same
//! effect comes from drawing the card at the column width of the current
//! frame: full-width back, shrinking to an edge-on sliver, then growing
//! back as the face.

use crate::cards::{Rank, Suit};
use crate::flip::SHEET_FRAMES;
use ratatui::style::{Color, Style};

/// Rows a card occupies on screen, borders included.
pub(super) const CARD_HEIGHT: u16 = 7;

/// Columns of the widest (fully turned) frame.
pub(super) const CARD_MAX_WIDTH: u16 = 13;

/// Per-sheet frame widths in columns, narrowest first, scaled down from
/// the sheet's pixel rects (1, 30, 60, 90, 120, 151, 182).
const SHEET_WIDTHS: [u16; SHEET_FRAMES] = [1, 3, 5, 7, 9, 11, 13];

/// Column width of a display frame. Frames below `SHEET_FRAMES` show the
/// card back shrinking; the rest show the face growing.
pub(super) fn frame_width(frame: usize) -> u16 {
    if frame < SHEET_FRAMES {
        SHEET_WIDTHS[SHEET_FRAMES - 1 - frame]
    } else {
        SHEET_WIDTHS[frame - SHEET_FRAMES]
    }
}

/// Whether a display frame shows the card back.
pub(super) fn shows_back(frame: usize) -> bool {
    frame < SHEET_FRAMES
}

pub(super) fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
        Suit::Cups => ('∪', Style::default().fg(Color::Red)),
        Suit::Stars => ('★', Style::default().fg(Color::Yellow)),
        Suit::Swords => ('†', Style::default().fg(Color::Cyan)),
    }
}

pub(super) fn rank_str(r: Rank) -> &'static str {
    match r {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}
