//! Benchmarks for admittance accumulation.
//!
//! ```bash
//! cargo bench -p ymat-core
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ymat_core::{LineParams, NodeId, YMatrixAccumulator};

/// Radial feeder with a tie back to the source every tenth node.
fn feeder_lines(nodes: u64) -> Vec<(NodeId, NodeId, LineParams)> {
    let mut lines = Vec::new();
    for k in 1..nodes {
        lines.push((NodeId::new(k), NodeId::new(k + 1), LineParams::new(0.01, 0.1, 0.02)));
        if k % 10 == 0 {
            lines.push((NodeId::new(1), NodeId::new(k), LineParams::new(0.02, 0.2, 0.0)));
        }
    }
    lines
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for nodes in [14u64, 118, 1354] {
        let lines = feeder_lines(nodes);
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &lines, |bench, lines| {
            bench.iter(|| {
                let mut ymat = YMatrixAccumulator::with_capacity(lines.len() * 2);
                for &(a, b, line) in lines {
                    ymat.add_line(a, b, line).unwrap();
                }
                black_box(ymat.len())
            })
        });
    }
    group.finish();
}

fn bench_outage_cycle(c: &mut Criterion) {
    let lines = feeder_lines(1354);
    let mut ymat = YMatrixAccumulator::new();
    for &(a, b, line) in &lines {
        ymat.add_line(a, b, line).unwrap();
    }

    c.bench_function("outage_cycle_1354", |bench| {
        bench.iter(|| {
            for &(a, b, line) in lines.iter().step_by(50) {
                ymat.subtract_line(a, b, line).unwrap();
                ymat.add_line(a, b, line).unwrap();
            }
            black_box(ymat.get(NodeId::new(1), NodeId::new(1)))
        })
    });
}

criterion_group!(benches, bench_build, bench_outage_cycle);
criterion_main!(benches);
