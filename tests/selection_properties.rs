use poker_odds::cards::Card;
use poker_odds::deck::Deck;
use poker_odds::selection::{Owner, ScanOrder, Selection, Slot, MAX_PLAYERS};
use proptest::prelude::*;
use std::collections::HashMap;

fn card(i: usize) -> Card {
    Deck::standard().cards()[i % 52]
}

fn all_slots(n: usize) -> Vec<Slot> {
    ScanOrder::SeatMajor.slots(n).collect()
}

/// Everything observable about a selection, for before/after comparisons.
fn snapshot(sel: &Selection) -> (Vec<Option<Card>>, Vec<bool>, usize) {
    let slots = all_slots(sel.num_players()).into_iter().map(|s| sel.card_at(s)).collect();
    let placed = Deck::standard().cards().iter().map(|&c| sel.is_placed(c)).collect();
    (slots, placed, sel.history().len())
}

fn any_order() -> impl Strategy<Value = ScanOrder> {
    prop_oneof![Just(ScanOrder::DealRound), Just(ScanOrder::SeatMajor)]
}

proptest! {
    #[test]
    fn placements_land_exactly_where_requested(
        n in 1usize..=MAX_PLAYERS,
        moves in prop::collection::vec((0usize..23, 0usize..52), 0..40),
    ) {
        let mut sel = Selection::new(n).unwrap();
        let slots = all_slots(n);
        let mut model: HashMap<Slot, Card> = HashMap::new();
        for (s, c) in moves {
            let slot = slots[s % slots.len()];
            let card = card(c);
            let before = sel.history().len();
            match sel.place_card(slot, card) {
                Ok(p) => {
                    prop_assert_eq!(p.slot, slot);
                    prop_assert!(!model.contains_key(&slot));
                    prop_assert!(!model.values().any(|&m| m == card));
                    model.insert(slot, card);
                }
                Err(_) => prop_assert_eq!(sel.history().len(), before),
            }
        }
        prop_assert_eq!(sel.history().len(), model.len());
        prop_assert_eq!(sel.placed_count(), model.len());
        for (&slot, &card) in &model {
            prop_assert_eq!(sel.card_at(slot), Some(card));
            prop_assert_eq!(sel.slot_of(card), Some(slot));
        }
    }

    #[test]
    fn undo_restores_state_before_last_placement(
        n in 1usize..=MAX_PLAYERS,
        order in any_order(),
        prefix in prop::collection::vec(0usize..52, 0..12),
        last in 0usize..52,
    ) {
        let mut sel = Selection::with_scan_order(n, order).unwrap();
        for c in prefix {
            let _ = sel.click_place(card(c));
        }
        let before = snapshot(&sel);
        if let Ok(placed) = sel.click_place(card(last)) {
            prop_assert_eq!(sel.undo(), Some(placed));
            prop_assert_eq!(snapshot(&sel), before);
        } else {
            prop_assert_eq!(snapshot(&sel), before);
        }
    }

    #[test]
    fn board_changes_never_break_readiness(
        n in 1usize..=MAX_PLAYERS,
        board_ops in prop::collection::vec(any::<bool>(), 0..12),
    ) {
        let mut sel = Selection::with_scan_order(n, ScanOrder::SeatMajor).unwrap();
        let mut next = 0;
        for _ in 0..2 * n {
            sel.click_place(card(next)).unwrap();
            next += 1;
        }
        prop_assert!(sel.is_ready());
        let hole_cards = sel.history().len();
        for add in board_ops {
            if add {
                if sel.click_place(card(next)).is_ok() {
                    next += 1;
                }
            } else if sel.history().len() > hole_cards {
                let undone = sel.undo().unwrap();
                prop_assert!(undone.slot.is_board());
            }
            prop_assert!(sel.is_ready());
        }
    }

    #[test]
    fn deal_round_fills_first_hole_card_of_every_player_first(
        n in 1usize..=MAX_PLAYERS,
        picks in 1usize..=23,
    ) {
        let mut sel = Selection::new(n).unwrap();
        let picks = picks.min(2 * n + 5);
        let filled: Vec<Slot> = (0..picks).map(|i| sel.click_place(card(i)).unwrap().slot).collect();
        for (i, slot) in filled.iter().enumerate() {
            let expected = if i < n {
                Slot::player(i, 0)
            } else if i < 2 * n {
                Slot::player(i - n, 1)
            } else {
                Slot::board(i - 2 * n)
            };
            prop_assert_eq!(*slot, expected);
        }
        // No board slot is used while a hole slot is still free.
        if filled.iter().any(|s| s.owner == Owner::Board) {
            prop_assert!(sel.is_ready());
        }
    }
}

#[test]
fn duplicate_drop_is_rejected_without_side_effects() {
    let mut sel = Selection::new(2).unwrap();
    let ah: Card = "Ah".parse().unwrap();
    sel.place_card(Slot::player(0, 0), ah).unwrap();
    let before = snapshot(&sel);
    assert!(sel.place_card(Slot::board(0), ah).is_err());
    assert_eq!(snapshot(&sel), before);
    assert_eq!(sel.history().len(), 1);
}

#[test]
fn full_table_refuses_clicks() {
    let mut sel = Selection::new(1).unwrap();
    for i in 0..7 {
        sel.click_place(card(i)).unwrap();
    }
    assert!(sel.first_empty().is_none());
    assert!(sel.click_place(card(7)).is_err());
    assert_eq!(sel.history().len(), 7);
}
