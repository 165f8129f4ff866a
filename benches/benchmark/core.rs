use crate::common::{configure_criterion, violations, DomainError};
use criterion::{criterion_group, BenchmarkId, Criterion};
use http::StatusCode;
use http_rail::{Settings, StackConfig};
use std::hint::black_box;

pub fn bench_error_creation_without_stack(c: &mut Criterion) {
    let settings = Settings::default().with_stack(StackConfig::disabled());
    c.bench_function("core/error_creation_no_stack", |b| {
        b.iter(|| {
            black_box(
                settings
                    .new_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid payload")
                    .add_reasons(violations())
                    .add_header("x-request-id", "42"),
            )
        })
    });
}

pub fn bench_stack_capture_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/stack_capture");
    for depth in [1usize, 4, 16] {
        let settings = Settings::default().with_stack(StackConfig::default().with_max_depth(depth));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &settings, |b, settings| {
            b.iter(|| black_box(settings.new_error(StatusCode::INTERNAL_SERVER_ERROR, "")))
        });
    }
    group.finish();
}

pub fn bench_stack_capture_filtered(c: &mut Criterion) {
    let settings = Settings::default().with_stack(StackConfig::default().with_name("core"));
    c.bench_function("core/stack_capture_filtered", |b| {
        b.iter(|| black_box(settings.new_error(StatusCode::INTERNAL_SERVER_ERROR, "")))
    });
}

pub fn bench_wrap(c: &mut Criterion) {
    let settings = Settings::default().with_stack(StackConfig::disabled()).with_status_resolver(
        |cause: &(dyn std::error::Error + 'static), fallback: StatusCode| {
            match cause.downcast_ref::<DomainError>() {
                Some(DomainError::Network(_)) => StatusCode::BAD_GATEWAY,
                _ => fallback,
            }
        },
    );
    c.bench_function("core/wrap_with_resolver", |b| {
        b.iter(|| {
            let cause = DomainError::Network("connection refused".to_string());
            black_box(settings.wrap(Some(cause), StatusCode::INTERNAL_SERVER_ERROR))
        })
    });
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets =
        bench_error_creation_without_stack,
        bench_stack_capture_depth,
        bench_stack_capture_filtered,
        bench_wrap,
}
