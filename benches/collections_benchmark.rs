use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};
use stowage::{Collection, CollectionFactory, Dictionary, TypedCollection, TypedDictionary};

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key{i}")).collect()
}

fn bench_collection_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_add");
    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("stowage", n), &n, |b, &n| {
            b.iter(|| {
                let mut collection = Collection::new();
                for i in 0..n {
                    collection.add(i).unwrap();
                }
                black_box(collection.size());
            });
        });
        group.bench_with_input(BenchmarkId::new("std_vec", n), &n, |b, &n| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..n {
                    vec.push(i);
                }
                black_box(vec.len());
            });
        });
    }
    group.finish();
}

fn bench_collection_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_find");
    for &n in SIZES {
        let collection = Collection::from_items(0..n).unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                for i in 0..n {
                    black_box(collection.find(i).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_collection_remove_front(c: &mut Criterion) {
    c.bench_function("collection_remove_at_front_1000", |b| {
        b.iter_batched(
            || Collection::from_items(0..1_000usize).unwrap(),
            |mut collection| {
                while !collection.is_empty() {
                    black_box(collection.remove_at(0).unwrap());
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_dictionary_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary_add");
    for &n in SIZES {
        let keys = keys(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut dictionary = Dictionary::new();
                for (i, key) in keys.iter().enumerate() {
                    dictionary.add(key.as_str(), i).unwrap();
                }
                black_box(dictionary.size());
            });
        });
    }
    group.finish();
}

fn bench_dictionary_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary_find");
    for &n in SIZES {
        let keys = keys(n);
        let dictionary =
            Dictionary::from_items(keys.iter().enumerate().map(|(i, k)| (k.as_str(), i))).unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(dictionary.find(key).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_typed_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed_add");
    group.throughput(Throughput::Elements(1_000));
    group.bench_function("collection_i64", |b| {
        b.iter(|| {
            let mut collection = TypedCollection::new("i64").unwrap();
            for i in 0..1_000i64 {
                collection.add(i).unwrap();
            }
            black_box(collection.size());
        });
    });
    group.bench_function("dictionary_json_integer", |b| {
        let keys = keys(1_000);
        b.iter(|| {
            let mut dictionary = TypedDictionary::new("integer").unwrap();
            for (i, key) in keys.iter().enumerate() {
                dictionary.add(key.as_str(), json!(i)).unwrap();
            }
            black_box(dictionary.size());
        });
    });
    group.finish();
}

fn bench_factory(c: &mut Criterion) {
    let factory = CollectionFactory::new();
    let seed: Vec<Value> = (0..100).map(|i| json!(i)).collect();
    c.bench_function("factory_new_typed_collection_100", |b| {
        b.iter(|| {
            let collection = factory
                .new_typed_collection("number", seed.iter().cloned())
                .unwrap();
            black_box(collection.size());
        });
    });
}

criterion_group!(
    benches,
    bench_collection_add,
    bench_collection_find,
    bench_collection_remove_front,
    bench_dictionary_add,
    bench_dictionary_find,
    bench_typed_add,
    bench_factory
);
criterion_main!(benches);
