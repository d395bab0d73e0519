use std::fmt;

/// Number of community card slots.
pub const BOARD_SLOTS: usize = 5;
/// Number of hole-card slots per player.
pub const HOLE_SLOTS: usize = 2;

/// Who a slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Owner {
    Board,
    Player(usize),
}

impl Owner {
    /// Slot count for this owner.
    pub const fn capacity(self) -> usize {
        match self {
            Owner::Board => BOARD_SLOTS,
            Owner::Player(_) => HOLE_SLOTS,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Board => write!(f, "board"),
            Owner::Player(p) => write!(f, "player{p}"),
        }
    }
}

/// An addressable card position: a player's hole card or a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub owner: Owner,
    pub index: usize,
}

impl Slot {
    pub const fn new(owner: Owner, index: usize) -> Self {
        Self { owner, index }
    }

    pub const fn board(index: usize) -> Self {
        Self::new(Owner::Board, index)
    }

    pub const fn player(player: usize, index: usize) -> Self {
        Self::new(Owner::Player(player), index)
    }

    pub const fn is_board(self) -> bool {
        matches!(self.owner, Owner::Board)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.owner, self.index)
    }
}
