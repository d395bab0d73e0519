//! Selection state: which card sits in which slot, plus the undo history.
//!
//! A [`Selection`] is the single source of truth for card placement. The deck
//! view derives each card's "occupied" marking from it, so undoing a placement
//! frees the card again without any extra bookkeeping.

pub(crate) mod scan;
pub(crate) mod slot;

pub use scan::{ScanOrder, ScanOrderParseError};
pub use slot::{Owner, Slot, BOARD_SLOTS, HOLE_SLOTS};

use crate::cards::Card;

/// Smallest table the selection accepts.
pub const MIN_PLAYERS: usize = 1;
/// Largest table the selection accepts.
pub const MAX_PLAYERS: usize = 9;

/// Reasons a placement is refused. Refusals never change the selection.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlaceError {
    #[error("no such slot: {0}")]
    UnknownSlot(Slot),
    #[error("slot {0} is already occupied")]
    SlotOccupied(Slot),
    #[error("card {card} is already placed at {at}")]
    CardInUse { card: Card, at: Slot },
    #[error("every slot is occupied")]
    NoEmptySlot,
    #[error("no game in progress")]
    Inactive,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("player count must be between 1 and 9, got {0}")]
    PlayerCount(usize),
}

/// One successful placement, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub slot: Slot,
    pub card: Card,
}

#[derive(Debug, Clone)]
pub struct Selection {
    players: Vec<[Option<Card>; HOLE_SLOTS]>,
    board: [Option<Card>; BOARD_SLOTS],
    // Dense by `Card::index`.
    placed_at: [Option<Slot>; 52],
    history: Vec<Placement>,
    scan_order: ScanOrder,
}

impl Selection {
    pub fn new(num_players: usize) -> Result<Self, SelectionError> {
        Self::with_scan_order(num_players, ScanOrder::default())
    }

    pub fn with_scan_order(num_players: usize, scan_order: ScanOrder) -> Result<Self, SelectionError> {
        check_player_count(num_players)?;
        Ok(Self {
            players: vec![[None; HOLE_SLOTS]; num_players],
            board: [None; BOARD_SLOTS],
            placed_at: [None; 52],
            history: Vec::new(),
            scan_order,
        })
    }

    /// Empty every slot and drop the undo history. On error nothing changes.
    pub fn reset(&mut self, num_players: usize) -> Result<(), SelectionError> {
        check_player_count(num_players)?;
        self.players = vec![[None; HOLE_SLOTS]; num_players];
        self.board = [None; BOARD_SLOTS];
        self.placed_at = [None; 52];
        self.history.clear();
        Ok(())
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn scan_order(&self) -> ScanOrder {
        self.scan_order
    }

    pub fn set_scan_order(&mut self, order: ScanOrder) {
        self.scan_order = order;
    }

    pub fn contains(&self, slot: Slot) -> bool {
        match slot.owner {
            Owner::Board => slot.index < BOARD_SLOTS,
            Owner::Player(p) => p < self.players.len() && slot.index < HOLE_SLOTS,
        }
    }

    pub fn card_at(&self, slot: Slot) -> Option<Card> {
        if !self.contains(slot) {
            return None;
        }
        match slot.owner {
            Owner::Board => self.board[slot.index],
            Owner::Player(p) => self.players[p][slot.index],
        }
    }

    pub fn slot_of(&self, card: Card) -> Option<Slot> {
        self.placed_at[card.index()]
    }

    pub fn is_placed(&self, card: Card) -> bool {
        self.slot_of(card).is_some()
    }

    pub fn placed_count(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Put `card` into the empty slot `slot`.
    pub fn place_card(&mut self, slot: Slot, card: Card) -> Result<Placement, PlaceError> {
        if !self.contains(slot) {
            return Err(PlaceError::UnknownSlot(slot));
        }
        if let Some(at) = self.slot_of(card) {
            return Err(PlaceError::CardInUse { card, at });
        }
        let cell = self.cell_mut(slot);
        if cell.is_some() {
            return Err(PlaceError::SlotOccupied(slot));
        }
        *cell = Some(card);
        self.placed_at[card.index()] = Some(slot);
        let placement = Placement { slot, card };
        self.history.push(placement);
        log::debug!("placed {card} at {slot}");
        Ok(placement)
    }

    /// First empty slot under the current scan order.
    pub fn first_empty(&self) -> Option<Slot> {
        self.scan_order.slots(self.num_players()).find(|&s| self.card_at(s).is_none())
    }

    /// Place `card` into the first empty slot of the scan order.
    pub fn click_place(&mut self, card: Card) -> Result<Placement, PlaceError> {
        if let Some(at) = self.slot_of(card) {
            return Err(PlaceError::CardInUse { card, at });
        }
        let slot = self.first_empty().ok_or(PlaceError::NoEmptySlot)?;
        self.place_card(slot, card)
    }

    /// Take back the most recent placement, freeing its slot and card.
    pub fn undo(&mut self) -> Option<Placement> {
        let last = self.history.pop()?;
        *self.cell_mut(last.slot) = None;
        self.placed_at[last.card.index()] = None;
        log::debug!("undid {} at {}", last.card, last.slot);
        Some(last)
    }

    /// Every player has both hole cards. The board is never required.
    pub fn is_ready(&self) -> bool {
        self.players.iter().all(|hand| hand.iter().all(Option::is_some))
    }

    pub fn hand(&self, player: usize) -> Option<&[Option<Card>; HOLE_SLOTS]> {
        self.players.get(player)
    }

    pub fn board(&self) -> &[Option<Card>; BOARD_SLOTS] {
        &self.board
    }

    /// Placed board cards in slot order, gaps skipped.
    pub fn board_cards(&self) -> Vec<Card> {
        self.board.iter().flatten().copied().collect()
    }

    /// Player 0's placed hole cards.
    pub fn hero(&self) -> Vec<Card> {
        self.players.first().map(|h| h.iter().flatten().copied().collect()).unwrap_or_default()
    }

    /// Placed hole cards of players 1.., one entry per opponent.
    pub fn opponents(&self) -> Vec<Vec<Card>> {
        self.players.iter().skip(1).map(|h| h.iter().flatten().copied().collect()).collect()
    }

    fn cell_mut(&mut self, slot: Slot) -> &mut Option<Card> {
        match slot.owner {
            Owner::Board => &mut self.board[slot.index],
            Owner::Player(p) => &mut self.players[p][slot.index],
        }
    }
}

impl Default for Selection {
    /// An empty heads-up table.
    fn default() -> Self {
        Self {
            players: vec![[None; HOLE_SLOTS]; 2],
            board: [None; BOARD_SLOTS],
            placed_at: [None; 52],
            history: Vec::new(),
            scan_order: ScanOrder::default(),
        }
    }
}

fn check_player_count(n: usize) -> Result<(), SelectionError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
        Ok(())
    } else {
        Err(SelectionError::PlayerCount(n))
    }
}
