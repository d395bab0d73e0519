//! One-shot odds query from text input, for use without the table UI.

use crate::cards::{parse_cards, parse_opponents, Card, CardParseError};
use crate::odds::format::{percent, thousands};
use crate::odds::{OddsRequest, OddsResponse};

/// A spot described as text, the way a user types it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcForm {
    pub hero: Vec<Card>,
    pub board: Vec<Card>,
    pub opponents: Vec<Vec<Card>>,
    pub n_players: usize,
    pub trials: u32,
}

impl CalcForm {
    /// `players` defaults to one more than the opponent count, and never below 2.
    pub fn parse(
        hero: &str,
        board: &str,
        opps: &str,
        players: Option<usize>,
        trials: u32,
    ) -> Result<Self, CardParseError> {
        let hero = parse_cards(hero)?;
        let board = parse_cards(board)?;
        let opponents = parse_opponents(opps)?;
        let n_players = players.unwrap_or_else(|| (1 + opponents.len()).max(2));
        Ok(Self { hero, board, opponents, n_players, trials })
    }

    pub fn request(&self) -> OddsRequest {
        OddsRequest {
            n_players: self.n_players,
            hero: self.hero.clone(),
            board: self.board.clone(),
            opponents: self.opponents.clone(),
            trials: self.trials,
        }
    }
}

/// Lines printed for a successful reply.
pub fn report(response: &OddsResponse) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 + response.opponents.len());
    lines.push(format!("Trials: {}", thousands(response.meta.trials)));
    lines.push(format!(
        "Hero: Win {}% · Tie {}%",
        percent(response.hero.win),
        percent(response.hero.tie)
    ));
    for (i, o) in response.opponents.iter().enumerate() {
        lines.push(format!("Villain {}: Win {}%", i + 1, percent(o.win)));
    }
    lines
}
