use calc_front::{Parser, Scanner, SwitchLexer, TableLexer};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn program(statements: usize) -> String {
    let mut source = String::from("// generated\nread x\n");
    for i in 0..statements {
        source.push_str(&format!(
            "v := (x + {i}.5) * 3 - y / 2 /* step {i} */\nwrite v\n"
        ));
    }
    source
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("calc scan");

    for statements in [10, 1_000] {
        let source = program(statements);
        let input = source.as_bytes();
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("switch scan", statements), input, |b, i| {
            b.iter(|| {
                let mut lexer = SwitchLexer::new(black_box(i));
                lexer.scan().unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("table scan", statements), input, |b, i| {
            b.iter(|| {
                let mut lexer = TableLexer::new(black_box(i));
                lexer.scan().unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("switch parse", statements), input, |b, i| {
            b.iter(|| {
                let mut lexer = SwitchLexer::new(black_box(i));
                Parser::new(&mut lexer).parse().unwrap();
            });
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
