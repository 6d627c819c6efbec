use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indic_shaper as is;

struct BenchFace;

impl is::Face for BenchFace {
    fn capabilities(&self) -> is::FaceCapabilities {
        is::FaceCapabilities::OUTLINES | is::FaceCapabilities::LAYOUT
    }

    fn nominal_glyph(&self, c: char) -> Option<u32> {
        Some(c as u32)
    }

    fn glyph_h_advance(&self, _glyph: u32, _coords: &[is::NormalizedCoord]) -> i32 {
        500
    }

    fn has_script(&self, _table: is::TableIndex, script: is::Tag) -> bool {
        script == is::Tag::new(b"dev2")
    }
}

fn devanagari() -> is::SegmentProperties {
    is::SegmentProperties::new()
        .direction(is::Direction::LeftToRight)
        .script(is::Script::Devanagari)
}

fn bench_devanagari(c: &mut Criterion) {
    let font = is::Font::new(Arc::new(BenchFace));
    let text = "र्क्षिं क्षत्रिय हिन्दी ".repeat(40);

    c.bench_function("Shape/Devanagari", |b| {
        b.iter(|| {
            let mut buffer = is::Buffer::new()
                .push_str(black_box(&text))
                .segment_properties(devanagari());
            is::shape(&font, &mut buffer, &[]);
            black_box(buffer.len());
        });
    });
}

fn bench_fallback(c: &mut Criterion) {
    let font = is::Font::new(Arc::new(BenchFace));
    let text = "Pure ASCII text for the fallback shaper.\n".repeat(50);

    c.bench_function("Shape/Fallback", |b| {
        b.iter(|| {
            let mut buffer = is::Buffer::new().push_str(black_box(&text));
            is::shape_full(&font, &mut buffer, &[], Some(&["fallback"]));
            black_box(buffer.len());
        });
    });
}

fn bench_plan_cache_hit(c: &mut Criterion) {
    let cache = is::PlanCache::new();
    let font = is::Font::new(Arc::new(BenchFace));
    let features: Vec<is::Feature> = ["kern", "-liga", "smcp[3:5]"]
        .iter()
        .map(|f| f.parse().unwrap())
        .collect();
    cache.get_or_create(&font, &devanagari(), &features, None);

    c.bench_function("PlanCache/Hit", |b| {
        b.iter(|| {
            black_box(cache.get_or_create(&font, &devanagari(), black_box(&features), None));
        });
    });
}

fn bench_set_digest(c: &mut Criterion) {
    let mut digest = is::SetDigest::new();
    digest.add_range(100, 5000);
    digest.add(42);

    c.bench_function("SetDigest/MayHave", |b| {
        b.iter(|| {
            let hits = (0..10_000u32).filter(|&g| digest.may_have(black_box(g))).count();
            black_box(hits);
        });
    });
}

criterion_group!(
    benches,
    bench_devanagari,
    bench_fallback,
    bench_plan_cache_hit,
    bench_set_digest
);
criterion_main!(benches);
