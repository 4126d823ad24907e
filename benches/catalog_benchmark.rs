// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use criterion::{criterion_group, criterion_main, Criterion};
use f1_explorer::services::listing::{list_drivers, DriverQuery};
use f1_explorer::services::search::search;
use f1_explorer::services::Catalog;
use std::hint::black_box;

fn benchmark_search(c: &mut Criterion) {
    // Load the catalog once
    let catalog = Catalog::load_from_file("data/f1_2025.json").expect("Failed to load catalog");

    let mut group = c.benchmark_group("search");

    group.bench_function("team_match_with_aliases", |b| {
        b.iter(|| {
            search(
                black_box("red bull"),
                catalog.drivers(),
                catalog.constructors(),
                catalog.aliases(),
            )
        })
    });

    group.bench_function("no_match", |b| {
        b.iter(|| {
            search(
                black_box("zzzz"),
                catalog.drivers(),
                catalog.constructors(),
                catalog.aliases(),
            )
        })
    });

    group.finish();
}

fn benchmark_listing(c: &mut Criterion) {
    let catalog = Catalog::load_from_file("data/f1_2025.json").expect("Failed to load catalog");
    let query = DriverQuery {
        nationality: Some("British".to_string()),
        page: Some("1".to_string()),
        per_page: Some("20".to_string()),
        ..DriverQuery::default()
    };

    c.bench_function("list_drivers_filtered", |b| {
        b.iter(|| list_drivers(&catalog, black_box(&query), "2025"))
    });
}

criterion_group!(benches, benchmark_search, benchmark_listing);
criterion_main!(benches);
