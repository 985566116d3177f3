use std::cmp::Ordering;
use std::path::Path;

use poker_hand_analyzer::analyzer::{parse_hands, read_hands_file, AnalysisReport};
use poker_hand_analyzer::core::{
    compare, sort_descending, Deck, Hand, HandCategory, PokerHandError, Rankable,
};
use rand::{SeedableRng, rngs::StdRng};

fn data_file() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/six_hands.txt"))
}

#[test]
fn test_two_pair_and_broadway_flush() {
    let hands = parse_hands("2D 2C 9H 9S 5D\nAD KD QD JD 10D").unwrap();
    let categories: Vec<HandCategory> = hands.iter().map(|h| h.category()).collect();
    // Ace is low, so ace through ten is not a straight of any kind.
    assert_eq!(vec![HandCategory::TwoPair, HandCategory::Flush], categories);

    let sorted = sort_descending(&hands);
    assert_eq!(hands[1], sorted[0]);
    assert_eq!(hands[0], sorted[1]);
}

#[test]
fn test_file_winning_order() {
    let hands = read_hands_file(data_file()).unwrap();
    assert_eq!(6, hands.len());

    let report = AnalysisReport::from_hands(&hands);
    let order: Vec<(usize, HandCategory)> = report
        .winning_order
        .iter()
        .map(|r| (r.seat, r.category))
        .collect();
    assert_eq!(
        vec![
            (3, HandCategory::StraightFlush),
            // Both flushes. Diamond lead beats club lead.
            (2, HandCategory::Flush),
            (4, HandCategory::Flush),
            (5, HandCategory::ThreeOfAKind),
            (1, HandCategory::TwoPair),
            (6, HandCategory::HighCard),
        ],
        order
    );
}

#[test]
fn test_report_text() {
    let hands = read_hands_file(data_file()).unwrap();
    let text = AnalysisReport::from_hands(&hands).to_string();
    let winning: Vec<&str> = text
        .lines()
        .skip_while(|l| !l.starts_with("--- WINNING"))
        .skip(1)
        .collect();
    assert_eq!("Hand 1: AH 2C 3D 4S 5H - Straight Flush", winning[0]);
    assert_eq!("Hand 6: QD 2C 4H 6S 9D - High Card", winning[5]);
}

#[test]
fn test_bad_file_reports_line() {
    let err = parse_hands("2D 2C 9H 9S 5D\n2D 2C 9H 9S\n").unwrap_err();
    assert_eq!(
        "Line 2: a hand must hold exactly 5 cards, got 4",
        err.to_string()
    );
}

#[test]
fn test_dealt_hands_are_ordered() {
    let mut deck = Deck::default();
    deck.shuffle(&mut StdRng::seed_from_u64(2024));
    let hands = deck.deal(10).unwrap();
    let sorted = sort_descending(&hands);

    for pair in sorted.windows(2) {
        assert_ne!(Ordering::Less, compare(&pair[0], &pair[1]));
        assert!(pair[0].category() >= pair[1].category());
    }
    for a in &hands {
        for b in &hands {
            assert_eq!(compare(a, b), compare(b, a).reverse());
        }
    }
}

#[test]
fn test_too_many_hands() {
    let mut deck = Deck::default();
    assert!(matches!(
        deck.deal(11),
        Err(PokerHandError::NotEnoughCards { .. })
    ));
}

#[test]
fn test_high_card_order_sensitivity() {
    let a: Hand = "KD 2C 4H 6S 8D".parse().unwrap();
    let b: Hand = "2C KD 4H 6S 8D".parse().unwrap();
    assert_eq!(a.category(), b.category());
    assert_eq!(Ordering::Greater, compare(&a, &b));
}
