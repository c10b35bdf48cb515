//! Benchmarks for resumark segmentation performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test segmentation and tokenization with synthetic
//! resume text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resumark::{segment, tokenize, Document, RenderOptions};

/// Creates a synthetic resume with the given number of sections.
fn create_test_resume(section_count: usize) -> String {
    let mut text = String::new();
    text.push_str("**Jane Doe**\nSenior engineer with broad experience.\n\n");

    for i in 0..section_count {
        text.push_str(&format!("## Position {}\n\n", i + 1));
        text.push_str(&format!("*Engineer, Company {}*\n", i + 1));
        text.push_str("Jan 2019 - Present\n");
        text.push_str("- Delivered the **first** milestone ahead of schedule\n");
        text.push_str("- Reduced costs by *double digits*\n");
        text.push_str("- Mentored three junior engineers\n\n");
        text.push_str("Recognized for cross-team collaboration.\n\n");
    }

    text
}

fn bench_segment(c: &mut Criterion) {
    let small = create_test_resume(5);
    let large = create_test_resume(100);

    c.bench_function("segment_5_sections", |b| {
        b.iter(|| segment(black_box(&small)))
    });

    c.bench_function("segment_100_sections", |b| {
        b.iter(|| segment(black_box(&large)))
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let line = "Improved **throughput** by *tuning* the cache and **cut** latency";

    c.bench_function("tokenize_mixed_line", |b| {
        b.iter(|| tokenize(black_box(line)))
    });
}

fn bench_render(c: &mut Criterion) {
    let doc = Document::from_sections(segment(&create_test_resume(20)));
    let options = RenderOptions::default();

    c.bench_function("render_html_20_sections", |b| {
        b.iter(|| resumark::render::to_html(black_box(&doc), black_box(&options)))
    });
}

criterion_group!(benches, bench_segment, bench_tokenize, bench_render);
criterion_main!(benches);
