use common::{clusters, glyphs, ShapeTestCfg, TestFace, ADVANCE};
use indic_shaper::{
    shape, Buffer, ContentType, Direction, FaceCapabilities, Script,
};

mod common;

const FI: u32 = 0xFB01;

#[test]
fn test_latin_ligature() {
    let font = TestFace::new().script(b"latn").feature(b"liga", "fi", FI).font();
    let buffer = ShapeTestCfg::new("fix")
        .script(Script::Latin)
        .validate_glyphs(&font, &[FI, 'x' as u32]);
    assert_eq!(clusters(&buffer), [0, 2]);
    assert_eq!(buffer.positions()[0].x_advance, ADVANCE);
}

#[test]
fn test_disabled_feature() {
    let font = TestFace::new().script(b"latn").feature(b"liga", "fi", FI).font();
    ShapeTestCfg::new("fix")
        .script(Script::Latin)
        .feature("-liga")
        .validate_glyphs(&font, &['f' as u32, 'i' as u32, 'x' as u32]);
}

#[test]
fn test_ranged_feature() {
    let font = TestFace::new()
        .script(b"latn")
        .feature(b"smcp", "a", 'A' as u32)
        .font();
    ShapeTestCfg::new("aaa")
        .script(Script::Latin)
        .feature("smcp[1:2]")
        .validate_glyphs(&font, &['a' as u32, 'A' as u32, 'a' as u32]);
}

#[test]
fn test_right_to_left() {
    let font = TestFace::new().font();
    let buffer = ShapeTestCfg::new("\u{05D0}\u{05D1}")
        .script(Script::Hebrew)
        .validate_glyphs(&font, &[0x05D1, 0x05D0]);
    assert_eq!(buffer.props().direction, Direction::RightToLeft);
    assert_eq!(clusters(&buffer), [2, 0]);
}

#[test]
fn test_guessed_properties() {
    let font = TestFace::new().font();
    let mut buffer = Buffer::new().push_str("\u{0915}\u{093F}");
    assert!(shape(&font, &mut buffer, &[]));
    assert_eq!(buffer.props().script, Script::Devanagari);
    assert_eq!(buffer.props().direction, Direction::LeftToRight);
    assert_eq!(glyphs(&buffer), [0x093F, 0x0915]);
    assert_eq!(buffer.content_type(), ContentType::Glyphs);
}

#[test]
fn test_fallback_for_metrics_only_face() {
    let font = TestFace::new()
        .capabilities(FaceCapabilities::OUTLINES)
        .missing("b")
        .font();
    let buffer = ShapeTestCfg::new("\u{0915}\u{093F}b")
        .script(Script::Devanagari)
        .validate_glyphs(&font, &[0x0915, 0x093F, 0]);
    assert_eq!(buffer.positions()[2].x_advance, 0);
}

#[test]
fn test_graphite_first() {
    let font = TestFace::new().graphite(Some(7)).font();
    ShapeTestCfg::new("ab")
        .script(Script::Latin)
        .validate_glyphs(&font, &[7, 7]);
}

#[test]
fn test_failed_graphite_falls_back() {
    let font = TestFace::new().graphite(None).font();
    ShapeTestCfg::new("ab")
        .script(Script::Latin)
        .validate_glyphs(&font, &['a' as u32, 'b' as u32]);
}

#[test]
fn test_shaper_list() {
    let font = TestFace::new().graphite(Some(7)).font();
    ShapeTestCfg::new("ab")
        .script(Script::Latin)
        .shapers(&["bogus", "ot"])
        .validate_glyphs(&font, &['a' as u32, 'b' as u32]);

    let font = TestFace::new().capabilities(FaceCapabilities::OUTLINES).font();
    let (shaped, buffer) = ShapeTestCfg::new("ab")
        .script(Script::Latin)
        .shapers(&["graphite2", "ot"])
        .shape(&font);
    assert!(!shaped);
    assert_eq!(buffer.content_type(), ContentType::Unicode);
}

#[test]
fn test_empty_buffer() {
    let font = TestFace::new().font();
    let (shaped, buffer) = ShapeTestCfg::new("").script(Script::Latin).shape(&font);
    assert!(shaped);
    assert!(buffer.is_empty());
}

#[test]
fn test_already_shaped() {
    let font = TestFace::new().font();
    let mut buffer = Buffer::new().push_str("ab");
    assert!(shape(&font, &mut buffer, &[]));
    assert!(!shape(&font, &mut buffer, &[]));
}
