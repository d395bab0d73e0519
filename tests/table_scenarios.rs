use poker_odds::cards::Card;
use poker_odds::odds::{decode_reply, OddsRequest, OddsResponse, OddsService, Reply};
use poker_odds::selection::{ScanOrder, Slot};
use poker_odds::table::{Phase, ResultArea, SeatIndicator, Table};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Wire {
    sent: Vec<(u64, OddsRequest)>,
    inbox: Vec<Reply>,
}

#[derive(Clone, Default)]
struct Recording(Rc<RefCell<Wire>>);

impl Recording {
    fn last_seq(&self) -> u64 {
        self.0.borrow().sent.last().map(|(seq, _)| *seq).unwrap()
    }

    fn answer(&self, seq: u64, status: u16, body: &str) {
        self.0.borrow_mut().inbox.push(Reply { seq, result: decode_reply(status, body) });
    }
}

impl OddsService for Recording {
    fn submit(&mut self, seq: u64, request: OddsRequest) {
        self.0.borrow_mut().sent.push((seq, request));
    }

    fn poll(&mut self) -> Vec<Reply> {
        std::mem::take(&mut self.0.borrow_mut().inbox)
    }
}

fn c(code: &str) -> Card {
    code.parse().unwrap()
}

fn heads_up(order: ScanOrder) -> (Table, Recording) {
    let wire = Recording::default();
    let mut table = Table::new(Box::new(wire.clone())).with_scan_order(order);
    table.start(2).unwrap();
    (table, wire)
}

fn ready_heads_up() -> (Table, Recording) {
    let (mut table, wire) = heads_up(ScanOrder::SeatMajor);
    for code in ["Ah", "Ks", "Qh", "Qd"] {
        table.click_place(c(code)).unwrap();
    }
    (table, wire)
}

#[test]
fn clicking_four_cards_sends_the_request() {
    let (table, wire) = ready_heads_up();
    assert_eq!(table.phase(), Phase::Ready);
    assert_eq!(table.selection().hand(0), Some(&[Some(c("Ah")), Some(c("Ks"))]));
    assert_eq!(table.selection().hand(1), Some(&[Some(c("Qh")), Some(c("Qd"))]));
    assert_eq!(table.result(), &ResultArea::Calculating);

    let log = wire.0.borrow();
    assert_eq!(log.sent.len(), 1);
    assert_eq!(
        serde_json::to_value(&log.sent[0].1).unwrap(),
        json!({
            "n_players": 2,
            "hero": ["Ah", "Ks"],
            "opponents": [["Qh", "Qd"]],
            "board": [],
            "trials": 20000
        })
    );
}

#[test]
fn deal_round_interleaves_seats() {
    let (mut table, _wire) = heads_up(ScanOrder::DealRound);
    for code in ["Ah", "Qh", "Ks", "Qd"] {
        table.click_place(c(code)).unwrap();
    }
    assert_eq!(table.selection().hero(), vec![c("Ah"), c("Ks")]);
    assert_eq!(table.selection().opponents(), vec![vec![c("Qh"), c("Qd")]]);
}

#[test]
fn success_reply_fills_the_seats() {
    let (mut table, wire) = ready_heads_up();
    let body = r#"{"hero":{"win":0.65,"tie":0.02},"opponents":[{"win":0.33}],"meta":{"trials":20000}}"#;
    wire.answer(wire.last_seq(), 200, body);
    assert_eq!(table.pump(), 1);

    let hero = table.seat(0).unwrap();
    assert_eq!(hero.text, "Win 65.00% · Tie 2.00%");
    assert!((hero.fill_percent - 65.0).abs() < 1e-9);
    assert_eq!(table.seat(1).unwrap().text, "Win 33.00%");
    assert_eq!(table.result().to_string(), "Simulated 20,000 hands");
    assert!(table.highlight_active());
    assert!(!table.is_calculating());
}

#[test]
fn error_reply_only_touches_the_result_area() {
    let (mut table, wire) = ready_heads_up();
    let seats_before: Vec<SeatIndicator> = table.seats().to_vec();
    wire.answer(wire.last_seq(), 400, r#"{"error":"invalid card"}"#);
    assert_eq!(table.pump(), 1);

    assert_eq!(table.result().to_string(), "Error: invalid card");
    assert!(table.result().is_error());
    assert_eq!(table.seats(), seats_before.as_slice());
}

#[test]
fn missing_error_text_falls_back() {
    let (mut table, wire) = ready_heads_up();
    wire.answer(wire.last_seq(), 500, "{}");
    table.pump();
    assert_eq!(table.result().to_string(), "Error: Server error");
}

#[test]
fn unreadable_reply_reads_as_connection_error() {
    let (mut table, wire) = ready_heads_up();
    wire.answer(wire.last_seq(), 502, "<html>bad gateway</html>");
    table.pump();
    assert_eq!(table.result().to_string(), "Error connecting to server.");
}

#[test]
fn duplicate_drop_is_rejected() {
    let (mut table, wire) = ready_heads_up();
    let history = table.selection().history().len();
    assert!(table.place(Slot::board(0), c("Ah")).is_err());
    assert_eq!(table.selection().history().len(), history);
    assert_eq!(table.selection().card_at(Slot::board(0)), None);
    assert_eq!(wire.0.borrow().sent.len(), 1);
}

#[test]
fn board_card_supersedes_the_pending_request() {
    let (mut table, wire) = ready_heads_up();
    let first = wire.last_seq();
    table.place(Slot::board(0), c("2c")).unwrap();
    let second = wire.last_seq();
    assert!(second > first);
    assert_eq!(wire.0.borrow().sent[1].1.board, vec![c("2c")]);

    let body = r#"{"hero":{"win":0.5,"tie":0.0},"opponents":[{"win":0.5}],"meta":{"trials":20000}}"#;
    wire.answer(first, 200, body);
    assert_eq!(table.pump(), 0);
    assert_eq!(table.seat(0).unwrap(), &SeatIndicator::unknown());

    wire.answer(second, 200, body);
    assert_eq!(table.pump(), 1);
    assert_eq!(table.seat(0).unwrap().text, "Win 50.00% · Tie 0.00%");
}

#[test]
fn undoing_a_hole_card_resets_and_ignores_late_reply() {
    let (mut table, wire) = ready_heads_up();
    let seq = wire.last_seq();
    table.undo().unwrap();
    assert_eq!(table.phase(), Phase::Dealing);
    assert_eq!(table.result(), &ResultArea::Empty);
    assert!(!table.is_calculating());

    wire.answer(seq, 200, r#"{"hero":{"win":0.9,"tie":0.0},"opponents":[{"win":0.1}],"meta":{"trials":20000}}"#);
    assert_eq!(table.pump(), 0);
    assert!(table.seats().iter().all(|s| s == &SeatIndicator::unknown()));
}

#[test]
fn clear_returns_through_cleared_to_setup() {
    let (mut table, _wire) = ready_heads_up();
    table.clear();
    assert_eq!(table.phase(), Phase::Cleared);
    assert_eq!(table.selection().placed_count(), 0);
    assert!(table.click_place(c("Ah")).is_err());
    table.open_setup();
    assert_eq!(table.phase(), Phase::Setup);
    table.start(3).unwrap();
    assert_eq!(table.phase(), Phase::Dealing);
    assert_eq!(table.seats().len(), 3);
}

#[test]
fn opponents_default_to_empty() {
    let parsed: OddsResponse =
        decode_reply(200, r#"{"hero":{"win":0.1,"tie":0.2},"meta":{"trials":5}}"#).unwrap();
    assert!(parsed.opponents.is_empty());
}
