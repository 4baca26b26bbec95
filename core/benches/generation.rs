use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use demine_core::{Board, Difficulty, generate};
use std::hint::black_box;

fn generation_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        let origin = (config.cols / 2, config.rows / 2);
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty.name()),
            &config,
            |b, config| {
                let mut seed = 0;
                b.iter(|| {
                    seed += 1;
                    let mut board = Board::for_config(config);
                    generate(&mut board, config.mines, Some(origin), seed).unwrap();
                    black_box(board)
                })
            },
        );
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_zeros");
    for size in [16, 64, 255] {
        let board = Board::from_mines(size, size, &[(size - 1, 0)]).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| {
                let mut board = board.clone();
                board.reveal_and_expand((0, size - 1)).unwrap();
                black_box(board.revealed_count())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, generation_tiers, flood_fill);
criterion_main!(benches);
