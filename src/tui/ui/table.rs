use crate::flip::{Orientation, TableCard};
use crate::game::{RoundOutcome, Seat};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_fixed, centered_rect, inner};
use super::sprites::{self, CARD_HEIGHT, CARD_MAX_WIDTH};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // round counter
            Constraint::Min(CARD_HEIGHT + 2),    // player 2 (top, reversed)
            Constraint::Length(3),               // war stack
            Constraint::Min(CARD_HEIGHT + 2),    // player 1 (bottom)
            Constraint::Length(4),               // status bar
        ])
        .split(size);

    let header = Paragraph::new(Line::from(format!("Round: {}", app.game.round())))
        .alignment(Alignment::Center)
        .block(Block::default().title("war-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_seat(f, chunks[1], app, Seat::Two);
    draw_stack(f, chunks[2], app);
    draw_seat(f, chunks[3], app, Seat::One);
    draw_status(f, chunks[4], app);

    if app.game.game_over() {
        draw_game_over(f, app);
    }
}

fn draw_seat(f: &mut Frame, area: Rect, app: &AppState, seat: Seat) {
    let title = format!("{}: {} cards", app.game.player(seat).name(), app.game.hand_len(seat));
    let block = Block::default().title(title).borders(Borders::ALL);
    let zone = inner(area);
    f.render_widget(block, area);
    render_table_card(f, zone, app.game.slot(seat));
}

fn draw_stack(f: &mut Frame, area: Rect, app: &AppState) {
    // the stack only shows while a war is unresolved
    if app.game.stack_len() == 0 {
        return;
    }
    let para = Paragraph::new(Line::from(format!("Cards in stack: {}", app.game.stack_len())))
        .alignment(Alignment::Center)
        .block(Block::default().title("War").borders(Borders::ALL).border_style(
            Style::default().fg(Color::Red),
        ));
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let status_inner = inner(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let left_info = vec![match app.game.last_outcome() {
        Some(RoundOutcome::Win(seat)) => {
            Line::from(format!("{} won the last round", app.game.player(seat).name()))
        }
        Some(RoundOutcome::War) => Line::from(Span::styled(
            "War! The stack grows...",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from("Space or click to flip the cards."),
    }];
    let right_keys = vec![Line::from("Space/click flip • Q quit")];

    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);
}

fn draw_game_over(f: &mut Frame, app: &AppState) {
    let area = centered_rect(60, 25, f.area());
    let winner = app
        .game
        .winner()
        .map(|s| app.game.player(s).name().to_string())
        .unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(
            format!("The game is over! {winner} won!"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press 'Enter' to start a new game."),
    ];
    let block = Block::default().title("Game over").borders(Borders::ALL);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

/// Draw a table card at its current flip frame, centered in `area`. The
/// frame index picks both the drawn width and which side shows.
fn render_table_card(f: &mut Frame, area: Rect, card: Option<&TableCard>) {
    let Some(tc) = card else {
        // empty slot outline
        let slot = centered_fixed(CARD_MAX_WIDTH, CARD_HEIGHT, area);
        let block =
            Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray));
        f.render_widget(block, slot);
        return;
    };

    let frame = tc.current_frame();
    let width = sprites::frame_width(frame);
    let rect = centered_fixed(width, CARD_HEIGHT, area);

    if width < 4 {
        // edge-on sliver, no room for borders
        let rows: Vec<Line> =
            (0..rect.height).map(|_| Line::from("█".repeat(width as usize))).collect();
        f.render_widget(Paragraph::new(rows), rect);
        return;
    }

    if sprites::shows_back(frame) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let fill: Vec<Line> = (0..rect.height.saturating_sub(2))
            .map(|_| Line::from("▒".repeat(width.saturating_sub(2) as usize)))
            .collect();
        f.render_widget(block, rect);
        f.render_widget(Paragraph::new(fill), inner(rect));
        return;
    }

    let (glyph, style) = sprites::suit_glyph_and_style(tc.card().suit());
    let label = format!("{}{}", sprites::rank_str(tc.card().rank()), glyph);
    // upright cards read from the top edge, reversed ones from the bottom
    let block = match tc.orientation() {
        Orientation::Upright => {
            Block::default().borders(Borders::ALL).title(Line::from(label.clone()).left_aligned())
        }
        Orientation::Reversed => Block::default()
            .borders(Borders::ALL)
            .title_bottom(Line::from(label.clone()).right_aligned()),
    };
    f.render_widget(block, rect);
    let card_inner = inner(rect);
    let mid = Rect { y: card_inner.y + card_inner.height / 2, height: 1, ..card_inner };
    let para = Paragraph::new(Line::from(Span::styled(label, style))).alignment(Alignment::Center);
    f.render_widget(para, mid);
}
