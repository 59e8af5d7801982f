use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_board::move_generation::perft::perft;
use plum_board::Board;

const STARTPOS_NODES: &[u64] = &[20, 400, 8902];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for (depth_idx, expected_nodes) in STARTPOS_NODES.iter().enumerate() {
        let depth = (depth_idx + 1) as u8;
        let mut board = Board::new();

        // Correctness guard before benchmarking.
        let warmup = perft(&mut board, depth);
        assert_eq!(warmup.nodes, *expected_nodes, "node mismatch at depth {depth}");

        group.throughput(Throughput::Elements(*expected_nodes));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}")),
            expected_nodes,
            |b, expected| {
                b.iter(|| {
                    let counts = perft(black_box(&mut board), black_box(depth));
                    assert_eq!(counts.nodes, *expected);
                    black_box(counts.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
