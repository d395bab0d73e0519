use crate::cards::{Card, Rank, Suit};
use crate::selection::Slot;
use crate::table::Phase;
use crate::tui::app::AppState;
use crate::tui::geometry::{SeatGeometry, TableGeometry};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let selection = app.table.selection();
    let geo = TableGeometry::compute(f.area(), selection.num_players(), app.deck_visible());

    // Felt
    let phase = match app.table.phase() {
        Phase::Setup => "Setup",
        Phase::Dealing => "Dealing",
        Phase::Ready => "Ready",
        Phase::Cleared => "Cleared",
    };
    let mut felt = Block::default()
        .title(format!("poker-odds — {} players — {phase}", selection.num_players()))
        .borders(Borders::ALL);
    if app.table.highlight_active() {
        felt = felt.border_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
    }
    f.render_widget(felt, geo.table);

    for (i, &area) in geo.board.iter().enumerate() {
        let slot = Slot::board(i);
        render_slot(f, area, selection.card_at(slot), app.hover() == Some(slot));
    }

    for (p, seat) in geo.seats.iter().enumerate() {
        render_seat(f, app, p, seat);
    }

    // Result line
    let result = app.table.result();
    let style = if result.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let result_para = Paragraph::new(Line::from(Span::styled(result.to_string(), style)))
        .block(Block::default().title("Results").borders(Borders::ALL));
    f.render_widget(result_para, geo.result);

    if app.deck_visible() {
        draw_deck(f, app, &geo);
    }

    // Status bar
    let status_area = geo.status;
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner(status_area));
    let mut left = vec![Line::from(format!(
        "Placed: {}   Trials: {}   Click fills: {}",
        selection.placed_count(),
        app.table.trials(),
        selection.scan_order()
    ))];
    left.push(match app.dragging() {
        Some(card) => Line::from(Span::styled(
            format!("Dragging {}", short_card(card)),
            Style::default().fg(Color::Magenta),
        )),
        None if !app.table.is_ready() => Line::from("Pick every player's hole cards to get odds."),
        None => Line::from("Add board cards to update the odds."),
    });
    let deck_key = if app.deck_visible() { "T hide deck" } else { "T show deck" };
    let right = vec![
        Line::from("Enter place • U undo • C clear"),
        Line::from(format!("{deck_key} • ? help • Q quit")),
    ];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    }
}

fn render_seat(f: &mut Frame, app: &AppState, p: usize, seat: &SeatGeometry) {
    let title = if p == 0 { "Hero".to_string() } else { format!("Villain {p}") };
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if p == 0 {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }
    f.render_widget(block, seat.area);

    let selection = app.table.selection();
    for (i, &area) in seat.slots.iter().enumerate() {
        let slot = Slot::player(p, i);
        render_slot(f, area, selection.card_at(slot), app.hover() == Some(slot));
    }

    let Some(indicator) = app.table.seat(p) else {
        return;
    };
    f.render_widget(Paragraph::new(indicator.text.as_str()), seat.odds_text);
    let width = f64::from(seat.odds_bar.width);
    let filled = ((indicator.fill_percent.clamp(0.0, 100.0) / 100.0) * width).round() as usize;
    let empty = (seat.odds_bar.width as usize).saturating_sub(filled);
    let bar = Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
        Span::styled("░".repeat(empty), Style::default().add_modifier(Modifier::DIM)),
    ]);
    f.render_widget(Paragraph::new(bar), seat.odds_bar);
}

fn draw_deck(f: &mut Frame, app: &AppState, geo: &TableGeometry) {
    f.render_widget(Block::default().title("Deck").borders(Borders::ALL), geo.deck);
    let cursor = app.cursor_card();
    for &(card, area) in &geo.deck_cells {
        let placed = app.table.selection().is_placed(card);
        let border = if app.dragging() == Some(card) {
            Some(Color::Magenta)
        } else if cursor == Some(card) {
            Some(Color::Yellow)
        } else {
            None
        };
        render_card_widget(f, area, Some(card), border, placed);
    }
}

fn render_slot(f: &mut Frame, area: Rect, card: Option<Card>, hover: bool) {
    let border = if hover { Some(Color::Yellow) } else { card.map(|_| Color::Cyan) };
    render_card_widget(f, area, card, border, false);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Mouse:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Click a deck card: fill the next empty slot"),
        Line::from("- Drag a deck card onto a slot: fill that slot"),
        Line::from(""),
        Line::from(Span::styled("Keys:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Arrows: move deck cursor"),
        Line::from("- Enter / Space: place card under cursor"),
        Line::from("- U / Backspace: undo last card"),
        Line::from("- C: clear table and return to setup"),
        Line::from("- T: hide / show deck"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Odds are requested once every player has two cards,"),
        Line::from("and again for every board card added."),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn rank_char(r: Rank) -> &'static str {
    match r {
        Rank::Ten => "10",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>, dim: bool) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    } else if dim {
        block = block.border_style(Style::default().fg(Color::DarkGray));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) if dim => Line::from(Span::styled(short_card(c), Style::default().fg(Color::DarkGray))),
        Some(c) => {
            let (_, style) = suit_glyph_and_style(c.suit());
            Line::from(Span::styled(short_card(c), style))
        }
        None => Line::from(Span::styled("··", Style::default().add_modifier(Modifier::DIM))),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}

fn short_card(c: Card) -> String {
    let (sg, _) = suit_glyph_and_style(c.suit());
    format!("{}{}", rank_char(c.rank()), sg)
}
