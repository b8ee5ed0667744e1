//! Micro-operation benchmarks for the structkit toolkit.
//!
//! Run with: `cargo bench --bench ops`
//!
//! Measures per-operation latency for the hot paths of each structure under
//! steady-state conditions.

use std::hint::black_box;
use std::time::Instant;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use structkit::cache::LruCache;
use structkit::set::RandomizedSet;
use structkit::stack::{MinStack, SpanStack};
use structkit::trie::WildcardTrie;
use structkit::window::RecentCounter;

const CAPACITY: usize = 16_384;
const OPS: u64 = 100_000;

// ============================================================================
// LruCache: get hit / insert with eviction
// ============================================================================

fn bench_lru(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("get_hit", |b| {
        b.iter_custom(|iters| {
            let mut cache = LruCache::new(CAPACITY);
            for i in 0..CAPACITY as u64 {
                cache.insert(i, i);
            }
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    black_box(cache.get(&(i % CAPACITY as u64)));
                }
            }
            start.elapsed()
        })
    });

    group.bench_function("insert_evicting", |b| {
        b.iter_custom(|iters| {
            let mut cache = LruCache::new(CAPACITY);
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    black_box(cache.insert(i, i));
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

// ============================================================================
// WildcardTrie: literal and single-wildcard search
// ============================================================================

fn bench_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_ns");

    let mut trie = WildcardTrie::new();
    for i in 0..10_000u32 {
        trie.insert(&format!("word{i:05}"));
    }

    group.bench_function("search_literal", |b| {
        b.iter(|| black_box(trie.search("word04999")))
    });

    group.bench_function("search_one_wildcard", |b| {
        b.iter(|| black_box(trie.search("word.4999")))
    });

    group.finish();
}

// ============================================================================
// Stacks and window counter
// ============================================================================

fn bench_stacks_and_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("min_stack_push_pop", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let mut stack = MinStack::new();
                for i in 0..OPS {
                    stack.push((OPS - i) as i64);
                }
                while stack.pop().is_ok() {}
            }
            start.elapsed()
        })
    });

    group.bench_function("span_stack_push", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let mut stack = SpanStack::new();
                for i in 0..OPS {
                    // Sawtooth: exercises both the pop-fold and push paths.
                    black_box(stack.push((i % 37) as i64));
                }
            }
            start.elapsed()
        })
    });

    group.bench_function("set_churn", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let mut set = RandomizedSet::new();
                for i in 0..OPS {
                    set.insert(i % 1024);
                    if i % 2 == 0 {
                        black_box(set.get_random());
                    } else {
                        set.remove(&(i % 512));
                    }
                }
            }
            start.elapsed()
        })
    });

    group.bench_function("window_ping", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let mut counter = RecentCounter::new();
                for i in 0..OPS {
                    let _ = black_box(counter.ping(i * 10));
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lru, bench_trie, bench_stacks_and_window);
criterion_main!(benches);
