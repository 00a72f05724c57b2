//! Scroll-spy benchmarks
//!
//! The resolver runs once per throttled scroll event per open page, so it and
//! the form parsing in front of it sit on the hot path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use portfolio_site::navigation::{resolve, ScrollSample, ScrollSpyConfig, ScrollState, SectionRegistry};
use portfolio_site::site::{build_page, ViewState};
use portfolio_site::Portfolio;

const SECTION_HEIGHT: f64 = 900.0;

/// Sample for a page scrolled to `scroll_y`, every section `SECTION_HEIGHT` tall.
fn sample_at(registry: &SectionRegistry, scroll_y: f64) -> ScrollSample {
    registry
        .iter()
        .enumerate()
        .fold(ScrollSample::new(scroll_y), |sample, (i, section)| {
            sample.with_top(section.id.clone(), i as f64 * SECTION_HEIGHT - scroll_y)
        })
}

fn bench_resolve(c: &mut Criterion) {
    let registry = SectionRegistry::standard();
    let config = ScrollSpyConfig::default();
    let state = ScrollState::initial(&registry);
    let sample = sample_at(&registry, 2_000.0);

    c.bench_function("resolve_single_sample", |b| {
        b.iter(|| resolve(black_box(&state), black_box(&sample), &registry, &config))
    });

    let mut group = c.benchmark_group("resolve_sweep");
    for steps in [10usize, 100, 1_000] {
        let samples: Vec<_> = (0..steps)
            .map(|i| sample_at(&registry, i as f64 * 4_500.0 / steps as f64))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(steps), &samples, |b, samples| {
            b.iter(|| {
                samples.iter().fold(state.clone(), |prev, sample| {
                    resolve(&prev, black_box(sample), &registry, &config)
                })
            })
        });
    }
    group.finish();
}

fn bench_parse_fields(c: &mut Criterion) {
    let fields = [
        ("scroll_y", "2400"),
        ("top_hero", "-2400"),
        ("top_projects", "-1500.5"),
        ("top_skills", "100"),
        ("top_resume", "900"),
        ("top_contact", "1700"),
    ];

    c.bench_function("sample_from_fields", |b| {
        b.iter(|| ScrollSample::from_fields(black_box(fields.iter().copied())))
    });
}

fn bench_build_page(c: &mut Criterion) {
    let portfolio = Portfolio::embedded().expect("embedded portfolio is valid");
    let registry = SectionRegistry::standard();
    let view = ViewState::new(&registry);

    c.bench_function("build_page", |b| {
        b.iter(|| build_page(black_box(&portfolio), &registry, &view, 2026))
    });
}

criterion_group!(benches, bench_resolve, bench_parse_fields, bench_build_page);
criterion_main!(benches);
