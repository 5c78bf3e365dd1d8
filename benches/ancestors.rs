use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mondo::ontology::Builder;
use mondo::{Closure, Ontology};

/// A layered DAG where every term has up to two parents
fn ontology(size: u32) -> Ontology {
    let mut builder = Builder::new();
    for id in 1..=size {
        builder.add_term(id.into(), Some(format!("disease {id}").as_str()));
    }
    let mut builder = builder.terms_complete();
    for id in 2..=size {
        builder.add_parent((id / 2).into(), id.into());
        if id > 3 {
            builder.add_parent((id / 3).into(), id.into());
        }
    }
    builder.build()
}

fn ancestors(ontology: &Ontology, max_depth: usize, closure: Closure) -> usize {
    ontology
        .terms()
        .map(|term| term.ancestors(max_depth, closure).len())
        .sum()
}

fn frontier_benchmark(c: &mut Criterion) {
    let ontology = ontology(20_000);

    c.bench_function("frontier depth 3", |b| {
        b.iter(|| ancestors(black_box(&ontology), black_box(3), Closure::Frontier))
    });
    c.bench_function("frontier depth 10", |b| {
        b.iter(|| ancestors(black_box(&ontology), black_box(10), Closure::Frontier))
    });
}

fn cumulative_benchmark(c: &mut Criterion) {
    let ontology = ontology(20_000);

    c.bench_function("cumulative depth 3", |b| {
        b.iter(|| ancestors(black_box(&ontology), black_box(3), Closure::Cumulative))
    });
}

criterion_group!(traversal, frontier_benchmark, cumulative_benchmark);
criterion_main!(traversal);
