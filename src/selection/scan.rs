use super::slot::{Slot, BOARD_SLOTS, HOLE_SLOTS};
use std::fmt;
use std::str::FromStr;

/// Order in which click-placement looks for the first empty slot.
///
/// Both orders fill every hole-card slot before any board slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum ScanOrder {
    /// Slot 0 of every player in seat order, then slot 1 of every player.
    #[default]
    DealRound,
    /// Both slots of player 0, then both slots of player 1, and so on.
    SeatMajor,
}

impl ScanOrder {
    pub const ALL: [ScanOrder; 2] = [ScanOrder::DealRound, ScanOrder::SeatMajor];

    /// Every slot of a table with `num_players` seats, in scan order.
    pub fn slots(self, num_players: usize) -> impl Iterator<Item = Slot> {
        let holes: Vec<Slot> = match self {
            ScanOrder::DealRound => (0..HOLE_SLOTS)
                .flat_map(|i| (0..num_players).map(move |p| Slot::player(p, i)))
                .collect(),
            ScanOrder::SeatMajor => (0..num_players)
                .flat_map(|p| (0..HOLE_SLOTS).map(move |i| Slot::player(p, i)))
                .collect(),
        };
        holes.into_iter().chain((0..BOARD_SLOTS).map(Slot::board))
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScanOrder::DealRound => "deal-round",
            ScanOrder::SeatMajor => "seat-major",
        }
    }
}

impl fmt::Display for ScanOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown scan order: '{0}' (expected deal-round or seat-major)")]
pub struct ScanOrderParseError(String);

impl FromStr for ScanOrder {
    type Err = ScanOrderParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScanOrder::ALL
            .iter()
            .copied()
            .find(|o| o.label() == s)
            .ok_or_else(|| ScanOrderParseError(s.to_string()))
    }
}
