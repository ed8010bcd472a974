//! Performance benchmarks for matching and partitioning

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use implmap::{
    match_all, match_relations, split, ExactIdentity, InterfaceNode, MatchOptions,
    MethodSignature, PartitionParams, TypeNode,
};

fn method(name: &str) -> MethodSignature {
    MethodSignature::new(name, ["string"], ["error"])
}

fn create_symbols(interface_count: usize, type_count: usize) -> (Vec<InterfaceNode>, Vec<TypeNode>) {
    let interfaces = (0..interface_count)
        .map(|i| {
            InterfaceNode::new(
                format!("example.com/pkg{}", i % 10),
                format!("Iface{}", i),
                vec![method(&format!("M{}", i % 7)), method(&format!("N{}", i % 5))],
            )
        })
        .collect();

    // Every type carries a few value and pointer methods so roughly a third
    // of the pairs match.
    let types = (0..type_count)
        .map(|i| {
            TypeNode::new(
                format!("example.com/pkg{}", i % 10),
                format!("Type{}", i),
                vec![method(&format!("M{}", i % 7)), method(&format!("M{}", (i + 1) % 7))],
                vec![method(&format!("N{}", i % 5))],
            )
        })
        .collect();

    (interfaces, types)
}

fn bench_match_all(c: &mut Criterion) {
    let (interfaces, types) = create_symbols(100, 1000);

    c.bench_function("match_all_parallel", |b| {
        b.iter(|| match_all(black_box(&interfaces), black_box(&types)))
    });

    c.bench_function("match_all_sequential", |b| {
        b.iter(|| {
            match_relations(
                black_box(&interfaces),
                black_box(&types),
                &ExactIdentity,
                MatchOptions { parallel: false },
            )
        })
    });
}

fn bench_split(c: &mut Criterion) {
    let (interfaces, types) = create_symbols(100, 1000);
    let relations = match_all(&interfaces, &types);

    c.bench_function("split_default_params", |b| {
        b.iter(|| {
            split(
                black_box(&interfaces),
                black_box(&types),
                black_box(&relations),
                PartitionParams::default(),
            )
        })
    });

    c.bench_function("split_large_chunks", |b| {
        b.iter(|| {
            split(
                black_box(&interfaces),
                black_box(&types),
                black_box(&relations),
                PartitionParams::new(50, 25),
            )
        })
    });
}

criterion_group!(benches, bench_match_all, bench_split);
criterion_main!(benches);
