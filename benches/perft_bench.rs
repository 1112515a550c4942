use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cozy_chess::Board;
use plybot::collect::dfs::{DfsMode, LimitedDfs};
use plybot::collect::divide::Divide;
use plybot::collect::perft::PerftCounter;

fn bench_perft(c: &mut Criterion) {
    let b = Board::default();
    c.bench_function("dfs_count_depth_4_startpos", |ben| {
        ben.iter(|| {
            let mut dfs = LimitedDfs::new(DfsMode::CountLeaves);
            dfs.generate_game_tree(black_box(&b), 4);
            black_box(dfs.total_nodes())
        })
    });
    c.bench_function("perft_per_ply_depth_4_startpos", |ben| {
        ben.iter(|| {
            let mut counter = PerftCounter::new();
            counter.generate_game_tree(black_box(&b), 4);
            black_box(counter.leaves())
        })
    });
    c.bench_function("divide_depth_4_startpos", |ben| {
        ben.iter(|| {
            let mut divide = Divide::new();
            divide.generate_game_tree(black_box(&b), 4);
            black_box(divide.total_nodes())
        })
    });
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
