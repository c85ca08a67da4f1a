#[macro_use]
extern crate criterion;
extern crate holdem_core;

use criterion::Criterion;
use holdem_core::core::HoleCards;
use holdem_core::holdem::{StartingHand, range};

fn all_starting(c: &mut Criterion) {
    c.bench_function("Generate all starting hands", |b| b.iter(StartingHand::all));
}

fn iter_everything(c: &mut Criterion) {
    c.bench_function("Iter all possible hads from all starting hands", |b| {
        b.iter(|| -> usize {
            StartingHand::all()
                .iter()
                .map(|sh| -> usize { sh.possible_hands().len() })
                .sum()
        })
    });
}

fn index_all_hole_cards(c: &mut Criterion) {
    let all = HoleCards::all();
    c.bench_function("Starting hand index of all 1326 hole cards", move |b| {
        b.iter(|| all.iter().map(range::index).sum::<usize>())
    });
}

criterion_group!(benches, all_starting, iter_everything, index_all_hole_cards);
criterion_main!(benches);
