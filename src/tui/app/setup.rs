use crate::selection::{ScanOrder, MAX_PLAYERS};

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum SetupItem {
    Players,
    Trials,
    ScanOrder,
}

const SETUP_ITEMS: [SetupItem; 3] = [SetupItem::Players, SetupItem::Trials, SetupItem::ScanOrder];

const TRIALS_STEP: u32 = 5_000;
const MIN_TRIALS: u32 = 1_000;
const MAX_TRIALS: u32 = 1_000_000;

impl SetupItem {
    fn display(self, app: &AppState) -> String {
        match self {
            SetupItem::Players => format!("Players: {}", app.cfg_num_players),
            SetupItem::Trials => format!("Trials: {}", app.cfg_trials),
            SetupItem::ScanOrder => format!("Click fills: {}", app.cfg_scan_order),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            SetupItem::Players => {
                if app.cfg_num_players < MAX_PLAYERS {
                    app.cfg_num_players += 1;
                }
            }
            SetupItem::Trials => {
                app.cfg_trials = app.cfg_trials.saturating_add(TRIALS_STEP).min(MAX_TRIALS);
            }
            SetupItem::ScanOrder => app.cfg_scan_order = next_order(app.cfg_scan_order),
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            SetupItem::Players => {
                if app.cfg_num_players > AppState::MIN_SEATS {
                    app.cfg_num_players -= 1;
                }
            }
            SetupItem::Trials => {
                app.cfg_trials = app.cfg_trials.saturating_sub(TRIALS_STEP).max(MIN_TRIALS);
            }
            SetupItem::ScanOrder => app.cfg_scan_order = next_order(app.cfg_scan_order),
        }
    }
}

fn next_order(order: ScanOrder) -> ScanOrder {
    match order {
        ScanOrder::DealRound => ScanOrder::SeatMajor,
        _ => ScanOrder::DealRound,
    }
}

impl AppState {
    /// Fewest seats the setup screen offers.
    pub const MIN_SEATS: usize = 2;

    pub fn setup_items_display(&self) -> Vec<String> {
        SETUP_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn open_setup(&mut self) {
        self.table.open_setup();
        self.setup_index = 0;
        self.scene = Scene::Setup;
    }

    /// Start a game with the edited settings.
    pub fn apply_setup(&mut self) {
        self.cfg_num_players = self.cfg_num_players.clamp(Self::MIN_SEATS, MAX_PLAYERS);
        self.table.set_trials(self.cfg_trials);
        self.table.set_scan_order(self.cfg_scan_order);
        match self.table.start(self.cfg_num_players) {
            Ok(()) => {
                self.cursor = (0, 0);
                self.scene = Scene::Table;
            }
            Err(e) => log::warn!("cannot start game: {e}"),
        }
    }

    pub fn setup_next(&mut self) {
        self.setup_index = (self.setup_index + 1) % SETUP_ITEMS.len();
    }

    pub fn setup_prev(&mut self) {
        self.setup_index = (self.setup_index + SETUP_ITEMS.len() - 1) % SETUP_ITEMS.len();
    }

    pub fn setup_inc(&mut self) {
        let item = SETUP_ITEMS[self.setup_index % SETUP_ITEMS.len()];
        item.inc(self);
    }

    pub fn setup_dec(&mut self) {
        let item = SETUP_ITEMS[self.setup_index % SETUP_ITEMS.len()];
        item.dec(self);
    }
}
