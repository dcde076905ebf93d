use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numframe_core::random::RandomFrameGenerator;
use numframe_core::DataFrame;

fn get_bench_df(num_rows: usize, num_columns: usize) -> DataFrame {
    let columns: Vec<String> = (0..num_columns).map(|j| format!("c{j}")).collect();
    RandomFrameGenerator::uniform(0., 1.)
        .unwrap()
        .generate(42, num_rows, columns)
        .unwrap()
}

macro_rules! bench_ops {
    ($c:expr, $num_rows:expr, $num_columns:expr) => {{
        let df = get_bench_df($num_rows, $num_columns);
        let df = &df;
        let shape = format!("{}x{}", $num_rows, $num_columns);
        $c.bench_function(&format!("select ({shape})"), |b| {
            b.iter(|| black_box(df).select(|row| row.values()[0] > 0.5))
        });
        $c.bench_function(&format!("compute_column ({shape})"), |b| {
            b.iter(|| {
                black_box(df)
                    .compute_column("sum", |row| row.values().iter().sum())
                    .unwrap()
            })
        });
        $c.bench_function(&format!("summarize ({shape})"), |b| {
            b.iter(|| black_box(df).summarize("sum", |acc, x| acc + x))
        });
        $c.bench_function(&format!("get_columns ({shape})"), |b| {
            b.iter(|| black_box(df).get_columns())
        });
    }};
}

pub fn bench_frame_ops(c: &mut Criterion) {
    bench_ops!(c, 1000, 10);
    bench_ops!(c, 10000, 10);
    bench_ops!(c, 1000, 100);
}

criterion_group!(benches, bench_frame_ops);
criterion_main!(benches);
