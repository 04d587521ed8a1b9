use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use osavl_tree::OSAvlMultiset;
use std::collections::BTreeMap;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for a deterministic pseudo-random sequence. Keys are
    // folded into a narrow range so duplicates occur, as in a multiset's
    // natural workload.
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push(((x >> 33) % (n as u64)) as i64);
    }
    keys
}

/// `BTreeMap<value, count>` is the closest std stand-in for a multiset.
fn count_map_insert(map: &mut BTreeMap<i64, usize>, key: i64) {
    *map.entry(key).or_insert(0) += 1;
}

fn count_map_remove(map: &mut BTreeMap<i64, usize>, key: i64) {
    if let Some(count) = map.get_mut(&key) {
        *count -= 1;
        if *count == 0 {
            map.remove(&key);
        }
    }
}

// ─── Insert benchmarks ──────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("OSAvlMultiset", N), |b| {
        b.iter(|| {
            let mut set = OSAvlMultiset::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                count_map_insert(&mut map, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("OSAvlMultiset", N), |b| {
        b.iter(|| {
            let mut set = OSAvlMultiset::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                count_map_insert(&mut map, k);
            }
            map
        });
    });

    group.finish();
}

// ─── Remove benchmark ───────────────────────────────────────────────────────

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let set: OSAvlMultiset<i64> = keys.iter().copied().collect();
    let mut map: BTreeMap<i64, usize> = BTreeMap::new();
    for &k in &keys {
        count_map_insert(&mut map, k);
    }

    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("OSAvlMultiset", N), |b| {
        b.iter(|| {
            let mut set = set.clone();
            for &k in &keys {
                set.remove(&k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = map.clone();
            for &k in &keys {
                count_map_remove(&mut map, k);
            }
            map
        });
    });

    group.finish();
}

// ─── Rank query benchmark ───────────────────────────────────────────────────

fn bench_get_by_rank(c: &mut Criterion) {
    let keys = random_keys(N);
    let set: OSAvlMultiset<i64> = keys.iter().copied().collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();

    let mut group = c.benchmark_group("get_by_rank");

    group.bench_function(BenchmarkId::new("OSAvlMultiset", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for rank in 0..N {
                if let Some(&v) = set.get_by_rank(rank) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    // A pre-sorted Vec answers rank queries by direct indexing; this is the
    // floor any tree-walking implementation is measured against.
    group.bench_function(BenchmarkId::new("sorted Vec", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for rank in 0..N {
                sum = sum.wrapping_add(sorted[rank]);
            }
            sum
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_ordered,
    bench_insert_random,
    bench_remove_random,
    bench_get_by_rank
);
criterion_main!(benches);
