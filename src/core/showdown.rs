use std::cmp::Ordering;

use tracing::debug;

use super::{Evaluation, Hand};

/// Compare two hands. `Greater` means `a` beats `b`.
///
/// Category strength decides first. Equal categories fall back on the
/// category's [`TieBreak`](super::TieBreak):
///
/// - Flush type hands: lower first card suit wins (Diamond is best).
/// - High card: values compared in dealt order, higher wins.
/// - Pair, two pair, three of a kind: always `Equal`.
///
/// `compare(a, b)` is always the reverse of `compare(b, a)`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use poker_hand_analyzer::core::{compare, Hand};
///
/// let two_pair = Hand::new_from_str("2D 2C 9H 9S 5D").unwrap();
/// let pair = Hand::new_from_str("AD AC KD QC 2H").unwrap();
/// assert_eq!(Ordering::Greater, compare(&two_pair, &pair));
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    Evaluation::new(*a).cmp_strength(&Evaluation::new(*b))
}

/// Order hands strongest first. Returns a new vector and leaves the
/// input alone.
///
/// The sort is stable, so hands that compare `Equal` keep their input
/// order.
pub fn sort_descending(hands: &[Hand]) -> Vec<Hand> {
    rank_descending(hands)
        .into_iter()
        .map(|evaluation| evaluation.hand)
        .collect()
}

/// Same as [`sort_descending`] but keeps each hand's category alongside it.
pub fn rank_descending(hands: &[Hand]) -> Vec<Evaluation> {
    let mut evaluations: Vec<Evaluation> = hands.iter().copied().map(Evaluation::new).collect();
    // sort_by is stable.
    evaluations.sort_by(|a, b| b.cmp_strength(a));
    debug!(
        num_hands = evaluations.len(),
        best = ?evaluations.first().map(|e| e.category),
        "Sorted hands"
    );
    evaluations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HandCategory, Rankable};

    fn hand(s: &str) -> Hand {
        Hand::new_from_str(s).unwrap()
    }

    fn sample_hands() -> Vec<Hand> {
        [
            "2D 2C 9H 9S 5D",
            "AD KD QD JD 10D",
            "AH 2C 3D 4S 5H",
            "3S 6S 10S QS KS",
            "KD 2C 4H 6S 8D",
            "AD AC KD QC 2H",
            "7D 7C 7H KC 2H",
            "QD 2C 4H 6S 9D",
            "9C 2D 3D 5D 7D",
        ]
        .iter()
        .map(|s| hand(s))
        .collect()
    }

    #[test]
    fn test_category_decides_first() {
        let flush = hand("3S 6S 10S QS KS");
        let trips = hand("7D 7C 7H KC 2H");
        assert_eq!(Ordering::Greater, compare(&flush, &trips));
        assert_eq!(Ordering::Less, compare(&trips, &flush));
    }

    #[test]
    fn test_flush_suit_tie_break() {
        let clubs = hand("KC 2C 5C 8C 9C");
        let hearts = hand("2H 3H 7H 9H JH");
        assert_eq!(Ordering::Greater, compare(&clubs, &hearts));
    }

    #[test]
    fn test_flush_same_suit_is_equal() {
        let a = hand("KC 2C 5C 8C 9C");
        let b = hand("3C 4C 6C 10C JC");
        assert_eq!(Ordering::Equal, compare(&a, &b));
    }

    #[test]
    fn test_straight_flush_suit_tie_break() {
        let diamond_lead = hand("AD 2C 3H 4S 5S");
        let spade_lead = hand("AS 2D 3D 4D 5D");
        assert_eq!(Ordering::Greater, compare(&diamond_lead, &spade_lead));
    }

    #[test]
    fn test_high_card_first_difference_decides() {
        let a = hand("9D 7C 4H 3S 2D");
        let b = hand("9C 6D KH QS JD");
        assert_eq!(Ordering::Greater, compare(&a, &b));
    }

    #[test]
    fn test_high_card_identical_values_equal() {
        let a = hand("9D 7C 4H 3S 2D");
        let b = hand("9H 7S 4D 3C 2H");
        assert_eq!(Ordering::Equal, compare(&a, &b));
    }

    #[test]
    fn test_antisymmetric() {
        let hands = sample_hands();
        for a in &hands {
            for b in &hands {
                assert_eq!(compare(a, b), compare(b, a).reverse(), "{a} vs {b}");
            }
        }
    }

    #[test_log::test]
    fn test_sort_descending_categories() {
        let sorted = sort_descending(&sample_hands());
        let strengths: Vec<u8> = sorted.iter().map(|h| h.category().strength()).collect();
        let mut expected = strengths.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(expected, strengths);
        assert_eq!(HandCategory::StraightFlush, sorted[0].category());
    }

    #[test_log::test]
    fn test_sort_suit_order() {
        let hands = vec![
            hand("2S 5S 9S JS KS"),
            hand("2H 5H 9H JH KH"),
            hand("2D 5D 9D JD KD"),
            hand("2C 5C 9C JC KC"),
        ];
        let leads: Vec<char> = sort_descending(&hands)
            .iter()
            .map(|h| h.first().suit.to_char())
            .collect();
        assert_eq!(vec!['D', 'C', 'H', 'S'], leads);
    }

    #[test]
    fn test_sort_is_stable() {
        let a = hand("AD AC KD QC 2H");
        let b = hand("2D 2C KD QC 9H");
        let c = hand("5D 5C 8D 9C JH");
        assert_eq!(vec![c, a, b], sort_descending(&[c, a, b]));
        assert_eq!(vec![b, c, a], sort_descending(&[b, c, a]));
    }

    #[test]
    fn test_sort_leaves_input_alone() {
        let hands = sample_hands();
        let before = hands.clone();
        let sorted = sort_descending(&hands);
        assert_eq!(before, hands);
        assert_eq!(hands.len(), sorted.len());
        for h in &hands {
            assert!(sorted.contains(h));
        }
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_descending(&[]).is_empty());
    }

    #[test]
    fn test_rank_descending_keeps_categories() {
        let ranked = rank_descending(&[hand("2D 2C 9H 9S 5D"), hand("AD KD QD JD 10D")]);
        assert_eq!(HandCategory::Flush, ranked[0].category);
        assert_eq!(HandCategory::TwoPair, ranked[1].category);
    }
}
