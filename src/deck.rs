use crate::cards::{Card, Rank, Suit};

/// The 52-card source deck cards are picked from.
///
/// Cards are ordered ranks outer, suits inner (`2c 2d 2h 2s 3c … As`). On
/// screen the deck is a grid with one row per suit and one column per rank.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const ROWS: usize = 4;
    pub const COLS: usize = 13;

    /// ```
    /// use poker_odds::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.cards()[0].to_string(), "2c");
    /// assert_eq!(deck.cards()[51].to_string(), "As");
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &r in &Rank::ALL {
            for &s in &Suit::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card shown at grid cell `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Option<Card> {
        if row >= Self::ROWS || col >= Self::COLS {
            return None;
        }
        self.cards.get(col * Self::ROWS + row).copied()
    }

    /// Grid cell `(row, col)` of a card.
    pub fn cell_of(card: Card) -> (usize, usize) {
        (card.suit().index(), card.rank().index())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        let set: HashSet<Card> = d.cards().iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn grid_cells_roundtrip() {
        let d = Deck::standard();
        for &c in d.cards() {
            let (row, col) = Deck::cell_of(c);
            assert_eq!(d.at(row, col), Some(c));
        }
        assert_eq!(d.at(4, 0), None);
        assert_eq!(d.at(0, 13), None);
    }

    #[test]
    fn order_matches_dense_index() {
        let d = Deck::standard();
        for (i, c) in d.cards().iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }
}
