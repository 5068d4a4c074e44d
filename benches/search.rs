use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tictactoe::eval::evaluate;
use tictactoe::search::{ordered_moves, Searcher};
use tictactoe::{Board3, Board4, Mark};

fn corpus3() -> Vec<Board3> {
    [".../.../...", "X../.O./...", "XO./.X./..O", "X../OO./..X", "XOX/.O./..."]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect()
}

fn corpus4() -> Vec<Board4> {
    ["..../..../..../....", "X..O/.OX./..../....", "X.X./OOO./...X/...."]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let boards3 = corpus3();
    let boards4 = corpus4();
    let mut searcher = Searcher::new(3);

    c.bench_function("search/best_move_3x3", |bch| {
        bch.iter(|| {
            let mut acc = 0i64;
            for bd in &boards3 {
                acc += i64::from(searcher.search(black_box(bd)).score);
            }
            black_box(acc)
        })
    });

    c.bench_function("search/best_move_4x4", |bch| {
        bch.iter(|| {
            let mut acc = 0i64;
            for bd in &boards4 {
                acc += i64::from(searcher.search(black_box(bd)).score);
            }
            black_box(acc)
        })
    });

    c.bench_function("search/minimax_reference_3x3", |bch| {
        bch.iter(|| {
            let mut work = boards3[1];
            black_box(searcher.minimax(&mut work, Mark::Human, 0))
        })
    });
}

fn bench_static(c: &mut Criterion) {
    let boards4 = corpus4();

    c.bench_function("eval/evaluate_4x4", |bch| {
        bch.iter(|| boards4.iter().map(|bd| evaluate(black_box(bd))).sum::<i32>())
    });

    c.bench_function("ordering/ordered_moves_4x4", |bch| {
        bch.iter(|| boards4.iter().map(|bd| ordered_moves(black_box(bd)).len()).sum::<usize>())
    });
}

criterion_group!(benches, bench_search, bench_static);
criterion_main!(benches);
