use crate::common::{configure_criterion, DomainError};
use criterion::{criterion_group, Criterion};
use http::StatusCode;
use http_rail::{Settings, StackConfig};
use std::hint::black_box;

/// Compact, verbose and quoted renderings of the same error.
pub fn bench_render_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/render");

    let settings = Settings::default().with_stack(StackConfig::default().with_max_depth(8));
    let err = settings
        .new_error(StatusCode::BAD_GATEWAY, "upstream failed")
        .with_cause(DomainError::Network("connection refused".to_string()));

    group.bench_function("compact", |b| b.iter(|| black_box(err.to_string())));
    group.bench_function("verbose", |b| b.iter(|| black_box(format!("{err:#}"))));
    group.bench_function("quoted", |b| b.iter(|| black_box(err.render("quoted"))));

    group.finish();
}

criterion_group! {
    name = formatting_benches;
    config = configure_criterion();
    targets = bench_render_modes,
}
