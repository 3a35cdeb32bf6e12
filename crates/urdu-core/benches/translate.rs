use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use urdu_core::samples::SAMPLES;
use urdu_core::translator::explain;
use urdu_core::{normalize, Translator};

fn corpus(repeat: usize) -> String {
    let line: Vec<&str> = SAMPLES.iter().map(|&(_, text)| text).collect();
    vec![line.join("۔ "); repeat].join("\n")
}

fn bench_translate(c: &mut Criterion) {
    let translator = Translator::default();
    let mut group = c.benchmark_group("translate");
    for repeat in [1, 16, 256] {
        let text = corpus(repeat);
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
            b.iter(|| translator.translate(text))
        });
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let text = corpus(16);
    c.bench_function("normalize/16", |b| b.iter(|| normalize(&text)));
}

fn bench_explain(c: &mut Criterion) {
    let translator = Translator::default();
    let text = corpus(1);
    c.bench_function("explain/1", |b| b.iter(|| explain(&translator, &text)));
}

criterion_group!(benches, bench_translate, bench_normalize, bench_explain);
criterion_main!(benches);
