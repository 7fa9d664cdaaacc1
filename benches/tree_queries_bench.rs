use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use phylo_topology::algs::ancestry::{lowest_common_ancestor, lowest_common_ancestors};
use phylo_topology::algs::sides::{edge_sides, node_root_direction_matrix};
use phylo_topology::algs::subtrees::{subtree_max_path_heights_from_root, subtree_sizes_from_root};
use phylo_topology::topology::{NodeIndex, Topology, TopologyBuilder};

/// Random tree with `n` nodes, built from a seeded parent array.
fn random_tree(n: usize, seed: u64) -> Topology {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut children = vec![Vec::new(); n];
    for i in 1..n {
        let p = rng.gen_range(0..i);
        children[p].push(i);
    }
    if children[0].is_empty() {
        children[0].push(n);
        children.push(Vec::new());
    }

    let mut b = TopologyBuilder::with_capacity(children.len());
    b.add_root((), children[0].len()).expect("root");
    let mut stack = children[0].clone();
    while let Some(v) = stack.pop() {
        b.add_node((), (), children[v].len()).expect("node");
        stack.extend(children[v].iter().copied());
    }
    b.build().expect("random tree")
}

fn bench_tree_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_queries");

    for &n in &[256usize, 2048usize] {
        let tree = random_tree(n, 0x5eed);

        group.bench_with_input(BenchmarkId::new("subtree_sizes", n), &n, |b, _| {
            b.iter(|| black_box(subtree_sizes_from_root(&tree)));
        });

        group.bench_with_input(BenchmarkId::new("subtree_heights", n), &n, |b, _| {
            b.iter(|| black_box(subtree_max_path_heights_from_root(&tree)));
        });

        group.bench_with_input(BenchmarkId::new("preorder", n), &n, |b, _| {
            b.iter(|| black_box(tree.preorder().count()));
        });

        group.bench_with_input(BenchmarkId::new("lca_pairs", n), &n, |b, _| {
            let mut rng = SmallRng::seed_from_u64(7);
            b.iter(|| {
                let a = NodeIndex::new(rng.gen_range(0..tree.node_count()));
                let z = NodeIndex::new(rng.gen_range(0..tree.node_count()));
                black_box(lowest_common_ancestor(&tree, a, z))
            });
        });
    }

    // Quadratic outputs: keep these small.
    let tree = random_tree(256, 0x5eed);
    group.bench_function("edge_sides_256", |b| b.iter(|| black_box(edge_sides(&tree))));
    group.bench_function("root_direction_256", |b| {
        b.iter(|| black_box(node_root_direction_matrix(&tree)))
    });
    group.bench_function("all_pairs_lca_256", |b| {
        b.iter(|| black_box(lowest_common_ancestors(&tree)))
    });

    group.finish();
}

criterion_group!(benches, bench_tree_queries);
criterion_main!(benches);
