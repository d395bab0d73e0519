use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_odds::deck::Deck;
use poker_odds::odds::decode_reply;
use poker_odds::selection::{ScanOrder, Selection};

fn bench_fill_table(c: &mut Criterion) {
    let deck = Deck::standard();
    let mut g = c.benchmark_group("fill_table");
    for order in ScanOrder::ALL {
        for n in [2usize, 9] {
            g.bench_with_input(BenchmarkId::new(order.label(), n), &n, |b, &n| {
                b.iter(|| {
                    let mut sel = Selection::with_scan_order(n, order).unwrap();
                    for &card in deck.cards().iter().take(2 * n + 5) {
                        let _ = sel.click_place(black_box(card));
                    }
                    while sel.undo().is_some() {}
                    sel
                })
            });
        }
    }
    g.finish();
}

fn bench_decode_reply(c: &mut Criterion) {
    let body = r#"{"hero":{"win":0.65,"tie":0.02},"opponents":[{"win":0.33},{"win":0.01}],"meta":{"trials":20000}}"#;
    c.bench_function("decode_reply", |b| b.iter(|| decode_reply(200, black_box(body))));
}

criterion_group!(benches, bench_fill_table, bench_decode_reply);
criterion_main!(benches);
