use std::{sync::Arc, thread};

use common::TestFace;
use indic_shaper::{
    shape_plan_create_cached, Direction, Face, Feature, Font, PlanCache, Script,
    SegmentProperties, ShaperKind, Tag,
};

mod common;

fn latin() -> SegmentProperties {
    SegmentProperties::new()
        .direction(Direction::LeftToRight)
        .script(Script::Latin)
}

#[test]
fn test_same_key_same_plan() {
    let cache = PlanCache::new();
    let font = TestFace::new().font();
    let kern = [Feature::global(Tag::new(b"kern"), 1)];

    let a = cache.get_or_create(&font, &latin(), &kern, None);
    let b = cache.get_or_create(&font, &latin(), &kern, None);
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 1);

    let liga = [Feature::global(Tag::new(b"liga"), 1)];
    let c = cache.get_or_create(&font, &latin(), &liga, None);
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.plans_for(font.id()).len(), 2);
}

#[test]
fn test_ranges_share_plans() {
    let cache = PlanCache::new();
    let font = TestFace::new().font();
    let liga = Tag::new(b"liga");

    let a = cache.get_or_create(&font, &latin(), &[Feature::new(liga, 0, 5..9)], None);
    let b = cache.get_or_create(&font, &latin(), &[Feature::new(liga, 0, 12..20)], None);
    assert!(Arc::ptr_eq(&a, &b));

    let c = cache.get_or_create(&font, &latin(), &[Feature::global(liga, 0)], None);
    assert!(!Arc::ptr_eq(&a, &c));
}

#[test]
fn test_plans_per_face() {
    let cache = PlanCache::new();
    let face: Arc<dyn Face> = Arc::new(TestFace::new());
    let a = Font::new(face.clone());
    let b = Font::new(face);

    let plan_a = cache.get_or_create(&a, &latin(), &[], None);
    let plan_b = cache.get_or_create(&b, &latin(), &[], None);
    assert!(!Arc::ptr_eq(&plan_a, &plan_b));

    // a clone keeps its identity
    let plan_c = cache.get_or_create(&a.clone(), &latin(), &[], None);
    assert!(Arc::ptr_eq(&plan_a, &plan_c));
}

#[test]
fn test_shaper_list_is_part_of_key() {
    let cache = PlanCache::new();
    let font = TestFace::new().font();

    let ot = cache.get_or_create(&font, &latin(), &[], None);
    let fallback = cache.get_or_create(&font, &latin(), &[], Some(&["fallback"]));
    assert_eq!(ot.shaper(), Some(ShaperKind::OpenType));
    assert_eq!(fallback.shaper(), Some(ShaperKind::Fallback));
    assert!(!Arc::ptr_eq(&ot, &fallback));
}

#[test]
fn test_purge_dropped_faces() {
    let cache = PlanCache::new();
    let kept = TestFace::new().font();
    let dropped = TestFace::new().font();

    cache.get_or_create(&kept, &latin(), &[], None);
    cache.get_or_create(&dropped, &latin(), &[], None);
    cache.get_or_create(&dropped, &latin(), &[], Some(&["fallback"]));
    assert_eq!(cache.purge_dropped_faces(), 0);

    let dropped_id = dropped.id();
    drop(dropped);
    assert_eq!(cache.purge_dropped_faces(), 2);
    assert_eq!(cache.len(), 1);
    assert!(cache.plans_for(dropped_id).is_empty());
}

#[test]
fn test_concurrent_get_or_create() {
    let cache = Arc::new(PlanCache::new());
    let font = TestFace::new().script(b"dev2").font();
    let props = SegmentProperties::new()
        .direction(Direction::LeftToRight)
        .script(Script::Devanagari);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = cache.clone();
            let font = font.clone();
            let props = props.clone();
            thread::spawn(move || cache.get_or_create(&font, &props, &[], None))
        })
        .collect();
    let plans: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(plans.iter().all(|plan| Arc::ptr_eq(plan, &plans[0])));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_global_cache() {
    let font = TestFace::new().font();
    let a = shape_plan_create_cached(&font, &latin(), &[], None);
    let b = shape_plan_create_cached(&font, &latin(), &[], None);
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(PlanCache::global().plans_for(font.id()).len(), 1);
}
