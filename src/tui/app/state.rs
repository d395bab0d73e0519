use crate::cards::Card;
use crate::deck::Deck;
use crate::selection::{ScanOrder, Slot, MAX_PLAYERS};
use crate::table::{Phase, Table};
use crate::tui::cue::Cue;
use crate::tui::geometry::Hit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Setup,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    SetupNext,
    SetupPrev,
    SetupInc,
    SetupDec,
    SetupApply,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    PlaceAtCursor,
    Undo,
    Clear,
    ToggleDeck,
    ToggleHelp,
}

/// Card gestures, independent of how they were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Gesture {
    /// Place into the first empty slot of the scan order.
    Click(Card),
    DragStart(Card),
    DragOver(Slot),
    DragLeave,
    Drop(Slot),
    DragEnd,
}

/// Raw pointer events after hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Down(Option<Hit>),
    Move(Option<Hit>),
    Up(Option<Hit>),
}

#[derive(Debug, Clone, Copy, Default)]
struct Press {
    card: Option<Card>,
    moved: bool,
}

pub struct AppState {
    pub scene: Scene,
    pub table: Table,
    // Deck cursor as (row, col) in the deck grid
    pub cursor: (usize, usize),
    // Setup screen being edited
    pub setup_index: usize,
    pub cfg_num_players: usize,
    pub cfg_trials: u32,
    pub cfg_scan_order: ScanOrder,
    cue: Box<dyn Cue>,
    dragging: Option<Card>,
    hover: Option<Slot>,
    press: Press,
    deck_visible: bool,
    help_open: bool,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("scene", &self.scene)
            .field("table", &self.table)
            .field("cursor", &self.cursor)
            .field("dragging", &self.dragging)
            .field("hover", &self.hover)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(table: Table, num_players: usize, cue: Box<dyn Cue>) -> Self {
        let cfg_trials = table.trials();
        let cfg_scan_order = table.selection().scan_order();
        Self {
            scene: Scene::Setup,
            table,
            cursor: (0, 0),
            setup_index: 0,
            cfg_num_players: num_players.clamp(Self::MIN_SEATS, MAX_PLAYERS),
            cfg_trials,
            cfg_scan_order,
            cue,
            dragging: None,
            hover: None,
            press: Press::default(),
            deck_visible: true,
            help_open: false,
        }
    }

    pub fn dragging(&self) -> Option<Card> {
        self.dragging
    }

    pub fn hover(&self) -> Option<Slot> {
        self.hover
    }

    pub fn deck_visible(&self) -> bool {
        self.deck_visible
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    /// Card under the deck cursor.
    pub fn cursor_card(&self) -> Option<Card> {
        Deck::standard().at(self.cursor.0, self.cursor.1)
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::SetupNext => {
                if self.scene == Scene::Setup {
                    self.setup_next();
                }
                false
            }
            InputAction::SetupPrev => {
                if self.scene == Scene::Setup {
                    self.setup_prev();
                }
                false
            }
            InputAction::SetupInc => {
                if self.scene == Scene::Setup {
                    self.setup_inc();
                }
                false
            }
            InputAction::SetupDec => {
                if self.scene == Scene::Setup {
                    self.setup_dec();
                }
                false
            }
            InputAction::SetupApply => {
                if self.scene == Scene::Setup {
                    self.apply_setup();
                }
                false
            }
            InputAction::CursorUp => self.move_cursor(-1, 0),
            InputAction::CursorDown => self.move_cursor(1, 0),
            InputAction::CursorLeft => self.move_cursor(0, -1),
            InputAction::CursorRight => self.move_cursor(0, 1),
            InputAction::PlaceAtCursor => match self.cursor_card() {
                Some(card) if self.scene == Scene::Table => self.gesture(Gesture::Click(card)),
                _ => false,
            },
            InputAction::Undo => {
                if self.scene == Scene::Table {
                    return self.table.undo().is_some();
                }
                false
            }
            InputAction::Clear => {
                if self.scene == Scene::Table {
                    self.clear_table();
                }
                false
            }
            InputAction::ToggleDeck => {
                if self.scene == Scene::Table {
                    self.deck_visible = !self.deck_visible;
                }
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        let wrap = |v: usize, d: isize, n: usize| ((v as isize + d).rem_euclid(n as isize)) as usize;
        self.cursor = (wrap(self.cursor.0, d_row, Deck::ROWS), wrap(self.cursor.1, d_col, Deck::COLS));
        false
    }

    /// Apply a card gesture. Returns true when a card was placed.
    pub fn gesture(&mut self, gesture: Gesture) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        match gesture {
            Gesture::Click(card) => {
                if self.table.selection().is_placed(card) {
                    return false;
                }
                let ok = self.table.click_place(card).is_ok();
                self.placed(ok)
            }
            Gesture::DragStart(card) => {
                if !self.table.selection().is_placed(card) {
                    self.dragging = Some(card);
                }
                false
            }
            Gesture::DragOver(slot) => {
                if self.dragging.is_some() {
                    self.hover = Some(slot);
                }
                false
            }
            Gesture::DragLeave => {
                self.hover = None;
                false
            }
            Gesture::Drop(slot) => {
                self.hover = None;
                let Some(card) = self.dragging.take() else {
                    return false;
                };
                let ok = self.table.place(slot, card).is_ok();
                self.placed(ok)
            }
            Gesture::DragEnd => {
                self.dragging = None;
                self.hover = None;
                false
            }
        }
    }

    /// Turn hit-tested pointer events into gestures.
    ///
    /// Press and release on the same free deck card is a click; pressing a
    /// free deck card and releasing over a slot is a drop.
    pub fn pointer(&mut self, event: Pointer) -> bool {
        match event {
            Pointer::Down(Some(Hit::Deck(card))) => {
                self.press = Press { card: Some(card), moved: false };
                self.gesture(Gesture::DragStart(card))
            }
            Pointer::Down(_) => {
                self.press = Press::default();
                false
            }
            Pointer::Move(hit) => {
                if self.press.card.is_none() {
                    return false;
                }
                if hit != self.press.card.map(Hit::Deck) {
                    self.press.moved = true;
                }
                match hit {
                    Some(Hit::Slot(slot)) => self.gesture(Gesture::DragOver(slot)),
                    _ => self.gesture(Gesture::DragLeave),
                }
            }
            Pointer::Up(hit) => {
                let press = std::mem::take(&mut self.press);
                let placed = match (press.card, hit) {
                    (Some(_), Some(Hit::Slot(slot))) => self.gesture(Gesture::Drop(slot)),
                    (Some(card), Some(Hit::Deck(up))) if card == up && !press.moved => {
                        self.gesture(Gesture::DragEnd);
                        self.gesture(Gesture::Click(card))
                    }
                    _ => false,
                };
                self.gesture(Gesture::DragEnd);
                placed
            }
        }
    }

    fn placed(&mut self, ok: bool) -> bool {
        if ok {
            self.cue.deal();
        }
        ok
    }

    fn clear_table(&mut self) {
        self.table.clear();
        self.dragging = None;
        self.hover = None;
        self.press = Press::default();
        self.help_open = false;
        self.open_setup();
    }

    /// Drain finished odds requests. Called every tick.
    pub fn on_tick(&mut self) {
        if self.table.pump() > 0 {
            log::debug!("odds updated: {}", self.table.result());
        }
    }

    pub fn phase(&self) -> Phase {
        self.table.phase()
    }
}
