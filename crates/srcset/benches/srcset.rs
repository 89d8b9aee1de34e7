//! Benchmarks for srcset generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ixurl_core::{Param, UrlBuilder};
use ixurl_srcset::{target_widths, SrcsetExt, SrcsetOptions};

fn bench_target_widths(c: &mut Criterion) {
    c.bench_function("target_widths_default", |b| {
        b.iter(|| target_widths(black_box(100), black_box(8192), black_box(0.08)))
    });
}

fn bench_srcset(c: &mut Criterion) {
    let builder = UrlBuilder::new("demo.imgix.net")
        .expect("valid domain")
        .with_token("MYT0KEN");
    let options = SrcsetOptions::default();
    let fixed = [Param::new("h", "800"), Param::new("ar", "4:3")];

    c.bench_function("srcset_fluid_signed", |b| {
        b.iter(|| builder.create_srcset(black_box("image.png"), &[], &options))
    });

    c.bench_function("srcset_fixed_signed", |b| {
        b.iter(|| builder.create_srcset(black_box("image.png"), black_box(&fixed), &options))
    });
}

criterion_group!(benches, bench_target_widths, bench_srcset);
criterion_main!(benches);
