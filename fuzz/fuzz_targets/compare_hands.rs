#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate poker_hand_analyzer;

use poker_hand_analyzer::core::{compare, sort_descending, Hand, HandCategory, Rankable};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub hands: Vec<Hand>,
}

fuzz_target!(|input: Input| {
    for a in &input.hands {
        // These are in the table but can't come out of the evaluator.
        assert!(!matches!(
            a.category(),
            HandCategory::RoyalStraightFlush
                | HandCategory::FourOfAKind
                | HandCategory::FullHouse
                | HandCategory::Straight
        ));
        for b in &input.hands {
            assert_eq!(compare(a, b), compare(b, a).reverse());
        }
    }

    let sorted = sort_descending(&input.hands);
    assert_eq!(input.hands.len(), sorted.len());
    for pair in sorted.windows(2) {
        assert!(pair[0].category() >= pair[1].category());
    }
    for h in &input.hands {
        let want = input.hands.iter().filter(|x| *x == h).count();
        let got = sorted.iter().filter(|x| *x == h).count();
        assert_eq!(want, got);
    }
});
