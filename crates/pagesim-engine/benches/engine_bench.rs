//! Engine benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagesim_common::types::PageId;
use pagesim_engine::{EngineConfig, PagingEngine, ReplacementPolicy};

/// Deterministic trace with locality: bursts of nearby pages with
/// occasional far jumps, over a 64-page space.
fn make_trace(len: usize) -> Vec<PageId> {
    (0..len)
        .map(|i| PageId::new(((i * 7 + (i / 13) * 31) % 64) as u32))
        .collect()
}

fn replay_benchmark(c: &mut Criterion) {
    let trace = make_trace(10_000);

    for policy in ReplacementPolicy::ALL {
        c.bench_function(&format!("replay_10k_{policy}"), |b| {
            b.iter(|| {
                let mut engine =
                    PagingEngine::new(EngineConfig::new(policy, 64, 8)).unwrap();
                black_box(engine.replay(&trace).unwrap())
            })
        });
    }
}

fn single_access_benchmark(c: &mut Criterion) {
    let trace = make_trace(10_000);
    let mut engine =
        PagingEngine::new(EngineConfig::new(ReplacementPolicy::Lru, 64, 8)).unwrap();
    engine.replay(&trace).unwrap();

    c.bench_function("step_warm_lru", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let page = trace[i % trace.len()];
            i += 1;
            black_box(engine.step(page).unwrap())
        })
    });
}

criterion_group!(benches, replay_benchmark, single_access_benchmark);
criterion_main!(benches);
