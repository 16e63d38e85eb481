// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the readboost-document layout engine: reflow of a
// five-paragraph excerpt with real Helvetica metrics, and pagination of the
// resulting lines.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use readboost_core::{BoldingConfig, Excerpt, LayoutConfig, PageGeometry, Paragraph};
use readboost_document::{HelveticaMetrics, paginate, reflow};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Five paragraphs of roughly 120 words each.
fn sample_excerpt() -> Excerpt {
    let sentence = "Readers skim faster when the first letters of each word carry more weight on the page. ";
    let paragraphs = (0..5)
        .filter_map(|_| Paragraph::new(&sentence.repeat(8)))
        .collect();
    Excerpt { start: 0, paragraphs }
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_reflow(c: &mut Criterion) {
    let excerpt = sample_excerpt();
    let bolding = BoldingConfig::default();
    let layout = LayoutConfig::default();

    c.bench_function("reflow (5 paragraphs, 16pt)", |b| {
        b.iter(|| {
            reflow(
                black_box(&excerpt),
                &bolding,
                &layout,
                &PageGeometry::LETTER,
                &HelveticaMetrics,
            )
        })
    });
}

fn bench_paginate(c: &mut Criterion) {
    let layout = LayoutConfig::new(24.0, 2.0);
    let lines = reflow(
        &sample_excerpt(),
        &BoldingConfig::default(),
        &layout,
        &PageGeometry::LETTER,
        &HelveticaMetrics,
    );

    c.bench_function("paginate (24pt, double spacing)", |b| {
        b.iter(|| paginate(black_box(&lines), &layout, &PageGeometry::LETTER))
    });
}

criterion_group!(benches, bench_reflow, bench_paginate);
criterion_main!(benches);
