//! Table controller: the one object that owns the selection, the seat
//! indicators and the odds requests in flight.
//!
//! Every state change goes through a named transition (`start`, `place`,
//! `click_place`, `undo`, `clear`, `open_setup`) so the whole interaction can
//! be driven and tested without a terminal.

use crate::cards::Card;
use crate::odds::format::{hero_text, opponent_text, thousands, UNKNOWN_ODDS};
use crate::odds::{OddsRequest, OddsResponse, OddsService, Reply, DEFAULT_TRIALS};
use crate::selection::{PlaceError, Placement, ScanOrder, Selection, SelectionError, Slot};
use std::fmt;
use std::time::{Duration, Instant};

/// Where the interaction is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// Choosing the number of players.
    Setup,
    /// Cards being picked; some hole card is still missing.
    Dealing,
    /// Every hole card is known; odds are requested or shown.
    Ready,
    /// The table was just cleared.
    Cleared,
}

/// Odds readout attached to one seat.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatIndicator {
    pub text: String,
    /// Width of the proportional bar, 0..=100.
    pub fill_percent: f64,
}

impl SeatIndicator {
    pub fn unknown() -> Self {
        Self { text: UNKNOWN_ODDS.to_string(), fill_percent: 0.0 }
    }
}

impl Default for SeatIndicator {
    fn default() -> Self {
        Self::unknown()
    }
}

/// The message line under the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum ResultArea {
    #[default]
    Empty,
    Calculating,
    Simulated(u64),
    Error(String),
}

impl ResultArea {
    pub fn is_error(&self) -> bool {
        matches!(self, ResultArea::Error(_))
    }
}

impl fmt::Display for ResultArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultArea::Empty => Ok(()),
            ResultArea::Calculating => f.write_str("Calculating…"),
            ResultArea::Simulated(n) => write!(f, "Simulated {} hands", thousands(*n)),
            ResultArea::Error(msg) => f.write_str(msg),
        }
    }
}

pub struct Table {
    selection: Selection,
    phase: Phase,
    seats: Vec<SeatIndicator>,
    result: ResultArea,
    trials: u32,
    service: Box<dyn OddsService>,
    next_seq: u64,
    // Only a reply carrying this sequence number is applied.
    awaiting: Option<u64>,
    highlight_until: Option<Instant>,
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("phase", &self.phase)
            .field("selection", &self.selection)
            .field("result", &self.result)
            .field("awaiting", &self.awaiting)
            .finish_non_exhaustive()
    }
}

impl Table {
    /// How long the table stays highlighted after fresh odds arrive.
    pub const HIGHLIGHT_TTL: Duration = Duration::from_millis(1500);

    pub fn new(service: Box<dyn OddsService>) -> Self {
        Self {
            selection: Selection::default(),
            phase: Phase::Setup,
            seats: Vec::new(),
            result: ResultArea::Empty,
            trials: DEFAULT_TRIALS,
            service,
            next_seq: 0,
            awaiting: None,
            highlight_until: None,
        }
    }

    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_scan_order(mut self, order: ScanOrder) -> Self {
        self.selection.set_scan_order(order);
        self
    }

    pub fn set_scan_order(&mut self, order: ScanOrder) {
        self.selection.set_scan_order(order);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn seats(&self) -> &[SeatIndicator] {
        &self.seats
    }

    pub fn seat(&self, idx: usize) -> Option<&SeatIndicator> {
        self.seats.get(idx)
    }

    pub fn result(&self) -> &ResultArea {
        &self.result
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    pub fn set_trials(&mut self, trials: u32) {
        self.trials = trials;
    }

    pub fn is_ready(&self) -> bool {
        self.selection.is_ready()
    }

    /// An odds request has been sent and its reply is still wanted.
    pub fn is_calculating(&self) -> bool {
        self.awaiting.is_some()
    }

    pub fn highlight_active(&self) -> bool {
        self.highlight_until.is_some_and(|until| Instant::now() < until)
    }

    fn in_game(&self) -> bool {
        matches!(self.phase, Phase::Dealing | Phase::Ready)
    }

    /// Begin a fresh game for `num_players`, whatever came before.
    pub fn start(&mut self, num_players: usize) -> Result<(), SelectionError> {
        self.selection.reset(num_players)?;
        self.seats = vec![SeatIndicator::unknown(); num_players];
        self.result = ResultArea::Empty;
        self.awaiting = None;
        self.highlight_until = None;
        self.phase = Phase::Dealing;
        log::info!("new game with {num_players} players");
        Ok(())
    }

    /// Put `card` into the empty `slot` (drag placement).
    pub fn place(&mut self, slot: Slot, card: Card) -> Result<Placement, PlaceError> {
        if !self.in_game() {
            return Err(PlaceError::Inactive);
        }
        let placement = self.selection.place_card(slot, card)?;
        self.after_change(false);
        Ok(placement)
    }

    /// Put `card` into the first empty slot of the scan order (click placement).
    pub fn click_place(&mut self, card: Card) -> Result<Placement, PlaceError> {
        if !self.in_game() {
            return Err(PlaceError::Inactive);
        }
        let placement = self.selection.click_place(card)?;
        self.after_change(false);
        Ok(placement)
    }

    /// Take back the latest placement. No-op when nothing was placed.
    pub fn undo(&mut self) -> Option<Placement> {
        if !self.in_game() {
            return None;
        }
        let undone = self.selection.undo()?;
        self.after_change(true);
        Some(undone)
    }

    /// Drop the game entirely; the UI goes back to setup afterwards.
    pub fn clear(&mut self) {
        let n = self.selection.num_players();
        // Same player count as before, so the reset cannot fail.
        let _ = self.selection.reset(n);
        self.seats.clear();
        self.result = ResultArea::Empty;
        self.awaiting = None;
        self.highlight_until = None;
        self.phase = Phase::Cleared;
        log::info!("table cleared");
    }

    pub fn open_setup(&mut self) {
        if matches!(self.phase, Phase::Cleared | Phase::Setup) {
            self.phase = Phase::Setup;
        }
    }

    fn after_change(&mut self, undone: bool) {
        if self.selection.is_ready() {
            self.phase = Phase::Ready;
            self.submit();
        } else {
            self.phase = Phase::Dealing;
            if undone {
                self.reset_indicators();
            }
        }
    }

    fn reset_indicators(&mut self) {
        for seat in &mut self.seats {
            *seat = SeatIndicator::unknown();
        }
        self.result = ResultArea::Empty;
        if let Some(seq) = self.awaiting.take() {
            log::debug!("abandoning odds request #{seq}");
        }
    }

    /// The request describing the current selection.
    pub fn request(&self) -> OddsRequest {
        OddsRequest {
            n_players: self.selection.num_players(),
            hero: self.selection.hero(),
            board: self.selection.board_cards(),
            opponents: self.selection.opponents(),
            trials: self.trials,
        }
    }

    fn submit(&mut self) {
        self.next_seq += 1;
        let seq = self.next_seq;
        let request = self.request();
        log::info!(
            "requesting odds #{seq}: {} players, {} board cards",
            request.n_players,
            request.board.len()
        );
        self.awaiting = Some(seq);
        self.result = ResultArea::Calculating;
        self.service.submit(seq, request);
    }

    /// Apply every reply the odds service has finished. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let replies = self.service.poll();
        replies.into_iter().filter(|r| self.apply_reply(r)).count()
    }

    /// Apply one reply unless it belongs to a superseded request.
    pub fn apply_reply(&mut self, reply: &Reply) -> bool {
        if self.awaiting != Some(reply.seq) {
            log::debug!("dropping stale odds reply #{}", reply.seq);
            return false;
        }
        self.awaiting = None;
        match &reply.result {
            Ok(response) => self.show_odds(response),
            Err(err) => {
                log::warn!("odds request #{} failed: {err}", reply.seq);
                self.result = ResultArea::Error(err.user_message());
            }
        }
        true
    }

    fn show_odds(&mut self, response: &OddsResponse) {
        if let Some(hero) = self.seats.get_mut(0) {
            hero.text = hero_text(&response.hero);
            hero.fill_percent = response.hero.win * 100.0;
        }
        for (i, opp) in response.opponents.iter().enumerate() {
            let Some(seat) = self.seats.get_mut(i + 1) else {
                continue;
            };
            seat.text = opponent_text(opp);
            seat.fill_percent = opp.win * 100.0;
        }
        self.result = ResultArea::Simulated(response.meta.trials);
        self.highlight_until = Some(Instant::now() + Self::HIGHLIGHT_TTL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds::{HeroOdds, Meta, OddsError, OpponentOdds};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Log {
        submitted: Vec<(u64, OddsRequest)>,
        replies: Vec<Reply>,
    }

    struct Manual(Rc<RefCell<Log>>);

    impl OddsService for Manual {
        fn submit(&mut self, seq: u64, request: OddsRequest) {
            self.0.borrow_mut().submitted.push((seq, request));
        }
        fn poll(&mut self) -> Vec<Reply> {
            std::mem::take(&mut self.0.borrow_mut().replies)
        }
    }

    fn table(n: usize) -> (Table, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut t = Table::new(Box::new(Manual(Rc::clone(&log)))).with_scan_order(ScanOrder::SeatMajor);
        t.start(n).unwrap();
        (t, log)
    }

    fn c(code: &str) -> Card {
        code.parse().unwrap()
    }

    fn ok(seq: u64, win: f64) -> Reply {
        Reply {
            seq,
            result: Ok(OddsResponse {
                hero: HeroOdds { win, tie: 0.0 },
                opponents: vec![OpponentOdds { win: 1.0 - win, tie: None }],
                meta: Meta { trials: 100 },
            }),
        }
    }

    #[test]
    fn placing_before_start_is_refused() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut t = Table::new(Box::new(Manual(log)));
        assert_eq!(t.phase(), Phase::Setup);
        assert_eq!(t.click_place(c("Ah")), Err(PlaceError::Inactive));
        assert!(t.undo().is_none());
    }

    #[test]
    fn stale_replies_are_dropped() {
        let (mut t, log) = table(2);
        for code in ["Ah", "Ks", "Qh", "Qd"] {
            t.click_place(c(code)).unwrap();
        }
        t.click_place(c("2c")).unwrap();
        let seqs: Vec<u64> = log.borrow().submitted.iter().map(|(s, _)| *s).collect();
        assert_eq!(seqs, vec![1, 2]);

        log.borrow_mut().replies.push(ok(2, 0.7));
        log.borrow_mut().replies.push(ok(1, 0.1));
        assert_eq!(t.pump(), 1);
        assert_eq!(t.seat(0).unwrap().text, "Win 70.00% · Tie 0.00%");
        assert!(!t.is_calculating());
    }

    #[test]
    fn undo_below_readiness_abandons_request() {
        let (mut t, log) = table(2);
        for code in ["Ah", "Ks", "Qh", "Qd"] {
            t.click_place(c(code)).unwrap();
        }
        assert_eq!(t.phase(), Phase::Ready);
        assert_eq!(t.result(), &ResultArea::Calculating);
        t.undo().unwrap();
        assert_eq!(t.phase(), Phase::Dealing);
        assert_eq!(t.result(), &ResultArea::Empty);
        log.borrow_mut().replies.push(ok(1, 0.5));
        assert_eq!(t.pump(), 0);
        assert!(t.seats().iter().all(|s| *s == SeatIndicator::unknown()));
    }

    #[test]
    fn errors_keep_indicators() {
        let (mut t, log) = table(2);
        for code in ["Ah", "Ks", "Qh", "Qd"] {
            t.click_place(c(code)).unwrap();
        }
        log.borrow_mut().replies.push(ok(1, 0.6));
        t.pump();
        t.click_place(c("3d")).unwrap();
        log.borrow_mut()
            .replies
            .push(Reply { seq: 2, result: Err(OddsError::Transport("refused".into())) });
        t.pump();
        assert_eq!(t.result().to_string(), "Error connecting to server.");
        assert!(t.result().is_error());
        assert_eq!(t.seat(0).unwrap().text, "Win 60.00% · Tie 0.00%");
    }

    #[test]
    fn clear_then_setup() {
        let (mut t, _log) = table(3);
        t.click_place(c("Ah")).unwrap();
        t.clear();
        assert_eq!(t.phase(), Phase::Cleared);
        assert!(t.seats().is_empty());
        assert_eq!(t.selection().placed_count(), 0);
        assert_eq!(t.click_place(c("Ah")), Err(PlaceError::Inactive));
        t.open_setup();
        assert_eq!(t.phase(), Phase::Setup);
        t.start(2).unwrap();
        assert_eq!(t.phase(), Phase::Dealing);
    }
}
