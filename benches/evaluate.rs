use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use poker_hand_analyzer::core::{sort_descending, Deck, Hand, Rankable};
use rand::{SeedableRng, rngs::StdRng};

fn bench_category(c: &mut Criterion) {
    let mut group = c.benchmark_group("category");
    for (name, text) in [
        ("high_card", "KD 2C 4H 6S 8D"),
        ("two_pair", "2D 2C 9H 9S 5D"),
        ("flush", "2D 5D 9D JD KD"),
        ("wheel", "AH 2C 3D 4S 5H"),
    ] {
        let hand = Hand::new_from_str(text).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &hand, |b, hand| {
            b.iter(|| hand.category())
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_descending");
    for num_hands in [2, 6, 10] {
        let mut deck = Deck::default();
        deck.shuffle(&mut StdRng::seed_from_u64(42));
        let hands = deck.deal(num_hands).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(num_hands),
            &hands,
            |b, hands| b.iter(|| sort_descending(hands)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_category, bench_sort);
criterion_main!(benches);
