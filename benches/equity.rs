#[macro_use]
extern crate criterion;
extern crate holdem_core;

use criterion::Criterion;
use holdem_core::core::{CardSet, HoleCards};
use holdem_core::holdem::exhaustive_equity;

fn hands(strs: &[&str]) -> Vec<HoleCards> {
    strs.iter()
        .map(|s| s.parse().expect("Should be able to parse hole cards."))
        .collect()
}

fn equity_on_flop(c: &mut Criterion) {
    let hands = hands(&["AdAh", "KsKc"]);
    let board: CardSet = "2c7d9h".parse().expect("Should be able to parse a board.");
    c.bench_function("Equity AdAh vs KsKc on a flop", move |b| {
        b.iter(|| exhaustive_equity(&hands, &board, &CardSet::new()))
    });
}

fn equity_three_way_turn(c: &mut Criterion) {
    let hands = hands(&["AdAh", "KsKc", "QhJh"]);
    let board: CardSet = "2c7d9hTh".parse().expect("Should be able to parse a board.");
    c.bench_function("Equity three way on a turn", move |b| {
        b.iter(|| exhaustive_equity(&hands, &board, &CardSet::new()))
    });
}

criterion_group!(benches, equity_on_flop, equity_three_way_turn);
criterion_main!(benches);
