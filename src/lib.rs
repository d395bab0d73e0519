//! poker-odds: card-selection front end for a remote Hold'em odds engine
//!
//! The user picks hole cards for every player (and optionally board cards)
//! from a 52-card deck; once every player has two cards the spot is sent to an
//! odds engine over HTTP and the win/tie percentages are shown per seat.
//!
//! - [`selection`]: which card sits in which slot, with undo
//! - [`table`]: the controller driving selection, requests and seat readouts
//! - [`odds`]: wire types, HTTP transport and the non-blocking service
//! - [`tui`]: the terminal front end
//!
//! ## Quick start: drive a table without a terminal
//! ```
//! use poker_odds::odds::{OddsRequest, OddsService, Reply};
//! use poker_odds::table::{Phase, Table};
//!
//! struct Offline;
//! impl OddsService for Offline {
//!     fn submit(&mut self, _seq: u64, _request: OddsRequest) {}
//!     fn poll(&mut self) -> Vec<Reply> { Vec::new() }
//! }
//!
//! let mut table = Table::new(Box::new(Offline));
//! table.start(2).unwrap();
//! for code in ["Ah", "Qh", "Ks", "Qd"] {
//!     table.click_place(code.parse().unwrap()).unwrap();
//! }
//! assert_eq!(table.phase(), Phase::Ready);
//! assert_eq!(table.request().hero.len(), 2);
//! ```
//!
//! ## TUI
//! ```sh
//! cargo run --bin poker-odds -- --endpoint http://127.0.0.1:5000/api/calc
//! ```

pub mod calc;
pub mod cards;
pub mod config;
pub mod deck;
pub mod odds;
pub mod selection;
pub mod table;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
