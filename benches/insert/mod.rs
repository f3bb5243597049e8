use avltree::{AvlTree, Config};
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    validate: bool,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("validate_{}/n_values", v.validate), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values, false)
    }

    // The post-rebalance check walks each rebalanced subtree, so only measure
    // it with smaller trees.
    for n_values in [1, 100, 1_000] {
        bench_param(&mut g, n_values, true)
    }
}

/// Measure the time needed to insert `n_values` number of randomly generated
/// keys into an empty tree.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize, validate: bool)
where
    M: Measurement,
{
    let bench_name = BenchName { validate, n_values };
    let config = Config::default().with_validation(validate);

    g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (AvlTree::with_config(config), Lfsr::default()),
            |(mut t, mut rand)| {
                for _i in 0..n_values {
                    t.insert(rand.next_key());
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}
