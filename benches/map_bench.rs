/// Insert, lookup, remove and traversal costs for a few tree sizes.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use rb_sorted_map::SortedMap;

const TREE_SIZES: [u64; 3] = [1 << 10, 1 << 14, 1 << 18];

fn shuffled_keys(n: u64, rng: &mut StdRng) -> Vec<u64> {
    let mut keys = (0..n).collect::<Vec<_>>();
    keys.shuffle(rng);
    keys
}

fn filled(keys: &[u64]) -> SortedMap<u64, u64> {
    keys.iter().map( |&k| (k, k) ).collect()
}

pub fn rand_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_insert");
    group.throughput(Throughput::Elements(1));
    for size in TREE_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(size);
            let mut map = filled(&shuffled_keys(size, &mut rng));
            b.iter(|| {
                let key = rng.gen_range(0..size << 1);
                black_box(map.insert(key, key));
            })
        });
    }
    group.finish();
}

pub fn rand_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_get");
    group.throughput(Throughput::Elements(1));
    for size in TREE_SIZES {
        let mut rng = StdRng::seed_from_u64(size);
        let map = filled(&shuffled_keys(size, &mut rng));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let key = rng.gen_range(0..size);
                black_box(map.get(&key));
            })
        });
    }
    group.finish();
}

pub fn remove_reinsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_reinsert");
    group.throughput(Throughput::Elements(1));
    for size in TREE_SIZES {
        let mut rng = StdRng::seed_from_u64(size);
        let mut map = filled(&shuffled_keys(size, &mut rng));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let key = rng.gen_range(0..size);
                let value = map.remove(&key);
                map.insert(key, black_box(value.unwrap_or(key)));
            })
        });
    }
    group.finish();
}

pub fn traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for size in TREE_SIZES {
        let mut rng = StdRng::seed_from_u64(size);
        let mut map = filled(&shuffled_keys(size, &mut rng));
        group.throughput(Throughput::Elements(size));
        group.bench_function(BenchmarkId::new("forward", size), |b| {
            b.iter(|| map.forward_iter().map( |(_, v)| *v ).sum::<u64>())
        });
        group.bench_function(BenchmarkId::new("backward", size), |b| {
            b.iter(|| map.backward_iter().map( |(_, v)| *v ).sum::<u64>())
        });
    }
    group.finish();
}

criterion_group!(benches, rand_insert, rand_get, remove_reinsert, traversal);
criterion_main!(benches);
