use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use valtree::{from_str, to_string, ValTree};

const ROOTS: usize = 100;

/// `ROOTS` top level keys, each the head of a single chain `depth` nodes deep.
fn chains(depth: usize) -> ValTree {
    let mut tree = ValTree::new();
    for i in 0..ROOTS {
        let key = format!("key-{}", i);
        let mut current = tree.insert_child(&key, Some(i.to_string().as_str())).unwrap();
        for j in 0..depth {
            let mut node = tree.get_mut(current).unwrap();
            current = node
                .insert_child(&format!("child-{}", j), Some(j.to_string().as_str()))
                .unwrap();
        }
    }
    tree
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_chains");
    group.sample_size(10);

    for depth in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter(|| chains(black_box(depth)))
        });
    }
    group.finish();
}

fn benchmark_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_chains");
    group.sample_size(10);

    for depth in [10, 100, 1000].iter() {
        let tree = chains(*depth);
        group.throughput(Throughput::Elements(tree.node_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tree, |b, tree| {
            b.iter(|| to_string(black_box(tree)))
        });
    }
    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_chains");
    group.sample_size(10);

    for depth in [10, 100, 1000].iter() {
        let text = to_string(&chains(*depth));
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_reparse(c: &mut Criterion) {
    let text = to_string(&chains(100));
    let mut tree = ValTree::new();

    c.bench_function("reparse_into_existing_tree", |b| {
        b.iter(|| tree.parse_str(black_box(&text)))
    });
}

fn benchmark_query(c: &mut Criterion) {
    let tree = chains(100);
    let path = std::iter::once("key-50".to_string())
        .chain((0..100).map(|j| format!("child-{}", j)))
        .collect::<Vec<_>>()
        .join(".");

    c.bench_function("query_deep_path", |b| {
        b.iter(|| tree.query_for_integer(black_box(&path)))
    });
}

criterion_group!(
    benches,
    benchmark_build,
    benchmark_write,
    benchmark_parse,
    benchmark_reparse,
    benchmark_query
);
criterion_main!(benches);
