//! Screen geometry shared by drawing and mouse hit-testing.
//!
//! Both sides compute the same [`TableGeometry`] from the frame size, so a
//! mouse event always maps onto exactly what was drawn there.

use crate::cards::Card;
use crate::deck::Deck;
use crate::selection::{Slot, BOARD_SLOTS, HOLE_SLOTS};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use std::f64::consts::PI;

pub const CARD_WIDTH: u16 = 6;
pub const CARD_HEIGHT: u16 = 3;
pub const SEAT_WIDTH: u16 = 2 * CARD_WIDTH + 6;
pub const SEAT_HEIGHT: u16 = CARD_HEIGHT + 4;
pub const STATUS_HEIGHT: u16 = 4;
pub const RESULT_HEIGHT: u16 = 3;

/// Horizontal ellipse radius as a share of the table width.
pub const SEAT_RADIUS_X: f64 = 0.42;
/// Vertical ellipse radius as a share of the table height.
pub const SEAT_RADIUS_Y: f64 = 0.32;

/// Seat centres evenly spread on an ellipse inside a `width` × `height` table.
/// Seat 0 sits at the top; the rest follow clockwise.
pub fn seat_positions(num_players: usize, width: f64, height: f64) -> Vec<(f64, f64)> {
    let (cx, cy) = (width / 2.0, height / 2.0);
    let (rx, ry) = (width * SEAT_RADIUS_X, height * SEAT_RADIUS_Y);
    (0..num_players)
        .map(|i| {
            let angle = (i as f64 / num_players as f64) * 2.0 * PI - PI / 2.0;
            (cx + rx * angle.cos(), cy + ry * angle.sin())
        })
        .collect()
}

/// What lies under a screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Slot(Slot),
    Deck(Card),
}

#[derive(Debug, Clone)]
pub struct SeatGeometry {
    pub area: Rect,
    pub slots: [Rect; HOLE_SLOTS],
    pub odds_text: Rect,
    pub odds_bar: Rect,
}

#[derive(Debug, Clone)]
pub struct TableGeometry {
    pub table: Rect,
    pub result: Rect,
    pub deck: Rect,
    pub status: Rect,
    pub seats: Vec<SeatGeometry>,
    pub board: [Rect; BOARD_SLOTS],
    pub deck_cells: Vec<(Card, Rect)>,
}

impl TableGeometry {
    pub fn compute(area: Rect, num_players: usize, deck_visible: bool) -> Self {
        let deck_height = if deck_visible { CARD_HEIGHT * Deck::ROWS as u16 + 2 } else { 0 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(SEAT_HEIGHT * 2 + CARD_HEIGHT),
                Constraint::Length(RESULT_HEIGHT),
                Constraint::Length(deck_height),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);
        let (table, result, deck, status) = (rows[0], rows[1], rows[2], rows[3]);

        let felt = inner(table);
        let seats = seat_positions(num_players, f64::from(felt.width), f64::from(felt.height))
            .into_iter()
            .map(|(x, y)| seat_geometry(felt, x, y))
            .collect();

        let board_width = CARD_WIDTH * BOARD_SLOTS as u16;
        let board_origin = centred(felt, board_width, CARD_HEIGHT);
        let board = std::array::from_fn(|i| {
            clip(
                Rect::new(
                    board_origin.x + i as u16 * CARD_WIDTH,
                    board_origin.y,
                    CARD_WIDTH,
                    CARD_HEIGHT,
                ),
                felt,
            )
        });

        let deck_cells = if deck_visible { deck_cells(inner(deck)) } else { Vec::new() };

        Self { table, result, deck, status, seats, board, deck_cells }
    }

    /// The slot or deck card drawn at `(column, row)`, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        if let Some(i) = self.board.iter().position(|r| r.contains(pos)) {
            return Some(Hit::Slot(Slot::board(i)));
        }
        for (p, seat) in self.seats.iter().enumerate() {
            if let Some(i) = seat.slots.iter().position(|r| r.contains(pos)) {
                return Some(Hit::Slot(Slot::player(p, i)));
            }
        }
        self.deck_cells.iter().find(|(_, r)| r.contains(pos)).map(|(c, _)| Hit::Deck(*c))
    }

    pub fn slot_rect(&self, slot: Slot) -> Option<Rect> {
        match slot.owner {
            crate::selection::Owner::Board => self.board.get(slot.index).copied(),
            crate::selection::Owner::Player(p) => {
                self.seats.get(p).and_then(|s| s.slots.get(slot.index).copied())
            }
        }
    }
}

pub(crate) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn centred(outer: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        outer.x + outer.width.saturating_sub(width) / 2,
        outer.y + outer.height.saturating_sub(height) / 2,
        width.min(outer.width),
        height.min(outer.height),
    )
}

fn clip(r: Rect, bounds: Rect) -> Rect {
    r.intersection(bounds)
}

fn seat_geometry(felt: Rect, cx: f64, cy: f64) -> SeatGeometry {
    let half_w = f64::from(SEAT_WIDTH) / 2.0;
    let half_h = f64::from(SEAT_HEIGHT) / 2.0;
    let max_x = felt.width.saturating_sub(SEAT_WIDTH);
    let max_y = felt.height.saturating_sub(SEAT_HEIGHT);
    let x = ((cx - half_w).round().max(0.0) as u16).min(max_x);
    let y = ((cy - half_h).round().max(0.0) as u16).min(max_y);
    let area = clip(Rect::new(felt.x + x, felt.y + y, SEAT_WIDTH, SEAT_HEIGHT), felt);
    let body = inner(area);
    let pad = body.width.saturating_sub(2 * CARD_WIDTH) / 2;
    let slots = std::array::from_fn(|i| {
        clip(Rect::new(body.x + pad + i as u16 * CARD_WIDTH, body.y, CARD_WIDTH, CARD_HEIGHT), body)
    });
    let odds_text = clip(Rect::new(body.x, body.y + CARD_HEIGHT, body.width, 1), body);
    let odds_bar = clip(Rect::new(body.x, body.y + CARD_HEIGHT + 1, body.width, 1), body);
    SeatGeometry { area, slots, odds_text, odds_bar }
}

fn deck_cells(area: Rect) -> Vec<(Card, Rect)> {
    let deck = Deck::standard();
    let cell_w = (area.width / Deck::COLS as u16).max(1);
    let mut cells = Vec::with_capacity(deck.len());
    for &card in deck.cards() {
        let (row, col) = Deck::cell_of(card);
        let r = Rect::new(
            area.x + col as u16 * cell_w,
            area.y + row as u16 * CARD_HEIGHT,
            cell_w,
            CARD_HEIGHT,
        );
        cells.push((card, clip(r, area)));
    }
    cells
}
