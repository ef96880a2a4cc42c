//! Parsing throughput benchmarks

use argspec::{Arity, OptionRegistry, OptionSpec, ParsePolicy, Parser};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn registry() -> OptionRegistry {
    let mut registry = OptionRegistry::new();
    registry.add_flag('v', Some("verbose"), "verbose").unwrap();
    registry.add_option('o', Some("output"), true, "output file").unwrap();
    registry
        .register(
            OptionSpec::builder('D')
                .long("define")
                .arity(Arity::Unlimited)
                .value_separator('=')
                .build()
                .unwrap(),
        )
        .unwrap();
    registry
        .register(OptionSpec::builder('r').long("range").arity(Arity::Exactly(2)).build().unwrap())
        .unwrap();
    registry
}

/// An argument vector of roughly `n` tokens mixing every option shape
fn argv(n: usize) -> Vec<String> {
    let mut args = Vec::with_capacity(n);
    let mut i = 0;
    while args.len() < n {
        match i % 5 {
            0 => args.push("-v".to_string()),
            1 => args.extend(["--output".to_string(), format!("out{}.txt", i)]),
            2 => args.push(format!("-Dkey{}=value{}", i, i)),
            3 => args.extend(["-r".to_string(), "1".to_string(), "9".to_string()]),
            _ => args.push(format!("input{}.txt", i)),
        }
        i += 1;
    }
    args
}

fn bench_parse(c: &mut Criterion) {
    let registry = registry();
    let mut group = c.benchmark_group("parse");

    for size in [10, 100, 1_000, 10_000] {
        let args = argv(size);
        group.bench_with_input(BenchmarkId::new("default", size), &args, |b, args| {
            let parser = Parser::default();
            b.iter(|| parser.parse(black_box(&registry), black_box(args.as_slice())).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("strict", size), &args, |b, args| {
            let parser = Parser::new(ParsePolicy::strict());
            b.iter(|| parser.parse(black_box(&registry), black_box(args.as_slice())).unwrap())
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let registry = registry();
    c.bench_function("lookup_long", |b| {
        b.iter(|| registry.lookup(black_box("define")).is_some())
    });
}

criterion_group!(benches, bench_parse, bench_lookup);
criterion_main!(benches);
