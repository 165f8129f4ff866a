use crate::common::{configure_criterion, simulate_db_query, violations, DomainError};
use criterion::{criterion_group, Criterion, Throughput};
use http::StatusCode;
use http_rail::traits::HttpResultExt;
use http_rail::{ErrorTier, HttpError, ResponseRecorder, Settings, StackConfig};
use std::hint::black_box;

fn user_handler(settings: &Settings, user_id: u64) -> Result<u64, HttpError> {
    simulate_db_query(user_id).or_status_with(settings, StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn bench_real_world_scenarios(c: &mut Criterion) {
    let mut group = c.benchmark_group("real_world");

    let settings = Settings::default().with_stack(StackConfig::default().with_max_depth(4));
    let validation = settings
        .new_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid payload")
        .add_reasons(violations());

    // Full error written as a JSON response
    group.bench_function("write_validation_error", |b| {
        b.iter(|| {
            let mut recorder = ResponseRecorder::new();
            validation.write(&settings, &mut recorder).unwrap();
            black_box(recorder)
        })
    });

    // Same error with cause and stack exposed
    let diagnostic = Settings::diagnostic().with_stack(StackConfig::default().with_max_depth(4));
    group.bench_function("write_diagnostic_error", |b| {
        b.iter(|| black_box(validation.to_response(&diagnostic).unwrap()))
    });

    // Status-carrying domain error without an HttpError
    let domain = DomainError::Validation("email missing".to_string());
    group.bench_function("write_status_tier", |b| {
        b.iter(|| {
            let mut recorder = ResponseRecorder::new();
            settings.write_error(ErrorTier::status(&domain), &mut recorder).unwrap();
            black_box(recorder)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("handler_batch", |b| {
        b.iter(|| {
            let failures = (1..=100u64)
                .filter_map(|id| user_handler(&settings, id).err())
                .count();
            black_box(failures)
        })
    });

    group.finish();
}

criterion_group! {
    name = real_world_benches;
    config = configure_criterion();
    targets = bench_real_world_scenarios,
}
