// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shaper for the Brahmic scripts of India and Sri Lanka.
//!
//! Characters are classified once when masks are set up. The remaining work
//! happens in pauses between GSUB stages: syllables are found before any
//! lookup runs, the initial reordering pass tags and sorts each syllable and
//! assigns the basic-feature masks, and the final reordering pass moves
//! matras, reph and pre-base-reordering Ra into place once the basic forms
//! have been substituted.

use std::sync::OnceLock;

use crate::{
    complex::syllabic, Buffer, Face, FeatureFlags, Font, GlyphInfo, LookupMap, Mask, OtMap,
    OtMapBuilder, OtShapePlan, Script, SegmentProperties, TableIndex, Tag, UnicodeProps,
};

use self::{
    final_reorder::FinalReorderingPass, initial_reorder::InitialReorderingPass,
    machine::SyllableType,
};

mod final_reorder;
mod initial_reorder;
mod machine;
pub(crate) mod table;

/// Syllabic categories.
pub(crate) mod category {
    pub const X: u8 = 0;
    pub const C: u8 = 1;
    pub const V: u8 = 2;
    pub const N: u8 = 3;
    pub const H: u8 = 4;
    pub const ZWNJ: u8 = 5;
    pub const ZWJ: u8 = 6;
    pub const M: u8 = 7;
    pub const SM: u8 = 8;
    pub const A: u8 = 10;
    pub const PLACEHOLDER: u8 = 11;
    pub const DOTTED_CIRCLE: u8 = 12;
    pub const RS: u8 = 13;
    pub const REPHA: u8 = 15;
    pub const RA: u8 = 16;
    pub const CM: u8 = 17;
    pub const SYMBOL: u8 = 18;
    pub const CS: u8 = 19;
}

/// Positional classes, in visual order.
pub(crate) mod position {
    pub const START: u8 = 0;
    pub const RA_TO_BECOME_REPH: u8 = 1;
    pub const PRE_M: u8 = 2;
    pub const PRE_C: u8 = 3;
    pub const BASE_C: u8 = 4;
    pub const AFTER_MAIN: u8 = 5;
    pub const ABOVE_C: u8 = 6;
    pub const BEFORE_SUB: u8 = 7;
    pub const BELOW_C: u8 = 8;
    pub const AFTER_SUB: u8 = 9;
    pub const POST_C: u8 = 11;
    pub const AFTER_POST: u8 = 12;
    pub const FINAL_C: u8 = 13;
    pub const SMVD: u8 = 14;
    pub const END: u8 = 15;
}

use self::{category as cat, position as pos};

/// Bit for `value` in a category or position set. Out-of-range values
/// belong to no set.
pub(crate) const fn flag(value: u8) -> u32 {
    if value < 32 {
        1 << value
    } else {
        0
    }
}

pub(crate) const MEDIAL_FLAGS: u32 = flag(cat::CM);
// Vowels and placeholders are treated as consonants so one routine handles
// every syllable kind.
pub(crate) const CONSONANT_FLAGS: u32 = flag(cat::C)
    | flag(cat::CS)
    | flag(cat::RA)
    | MEDIAL_FLAGS
    | flag(cat::V)
    | flag(cat::PLACEHOLDER)
    | flag(cat::DOTTED_CIRCLE);
pub(crate) const JOINER_FLAGS: u32 = flag(cat::ZWJ) | flag(cat::ZWNJ);

/// Category test that never matches a ligature.
pub(crate) fn is_one_of(info: &GlyphInfo, flags: u32) -> bool {
    !info.is_ligated() && flag(info.complex_category) & flags != 0
}

pub(crate) fn is_joiner(info: &GlyphInfo) -> bool {
    is_one_of(info, JOINER_FLAGS)
}

pub(crate) fn is_consonant(info: &GlyphInfo) -> bool {
    is_one_of(info, CONSONANT_FLAGS)
}

pub(crate) fn is_halant(info: &GlyphInfo) -> bool {
    is_one_of(info, flag(cat::H))
}

/// Where the search for the base consonant starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BasePosition {
    /// Backwards from the end, skipping below and post forms.
    Last,
    /// Forwards, stopping at a ZWJ-blocked consonant.
    LastSinhala,
}

/// Target of the reph in final reordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RephPosition {
    AfterMain,
    BeforeSub,
    AfterSub,
    BeforePost,
    AfterPost,
}

/// How a reph is encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RephMode {
    /// Initial Ra,H.
    Implicit,
    /// Initial Ra,H,ZWJ.
    Explicit,
    /// A dedicated Repha character in logical order.
    LogRepha,
}

/// Which side of the base gets the below-form feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BlwfMode {
    PreAndPost,
    PostOnly,
}

/// Per-script behaviour switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IndicConfig {
    pub script: Option<Script>,
    pub has_old_spec: bool,
    pub virama: u32,
    pub base_pos: BasePosition,
    pub reph_pos: RephPosition,
    pub reph_mode: RephMode,
    pub blwf_mode: BlwfMode,
}

const fn config(
    script: Option<Script>,
    has_old_spec: bool,
    virama: u32,
    base_pos: BasePosition,
    reph_pos: RephPosition,
    reph_mode: RephMode,
    blwf_mode: BlwfMode,
) -> IndicConfig {
    IndicConfig {
        script,
        has_old_spec,
        virama,
        base_pos,
        reph_pos,
        reph_mode,
        blwf_mode,
    }
}

#[rustfmt::skip]
static INDIC_CONFIGS: [IndicConfig; 11] = {
    use self::{BasePosition::*, BlwfMode::*, RephMode::*, RephPosition::*};
    [
        // default, must stay first
        config(None,                     false, 0,      Last,        BeforePost, Implicit, PreAndPost),
        config(Some(Script::Devanagari), true,  0x094D, Last,        BeforePost, Implicit, PreAndPost),
        config(Some(Script::Bengali),    true,  0x09CD, Last,        AfterSub,   Implicit, PreAndPost),
        config(Some(Script::Gurmukhi),   true,  0x0A4D, Last,        BeforeSub,  Implicit, PreAndPost),
        config(Some(Script::Gujarati),   true,  0x0ACD, Last,        BeforePost, Implicit, PreAndPost),
        config(Some(Script::Oriya),      true,  0x0B4D, Last,        AfterMain,  Implicit, PreAndPost),
        config(Some(Script::Tamil),      true,  0x0BCD, Last,        AfterPost,  Implicit, PreAndPost),
        config(Some(Script::Telugu),     true,  0x0C4D, Last,        AfterPost,  Explicit, PostOnly),
        config(Some(Script::Kannada),    true,  0x0CCD, Last,        AfterPost,  Implicit, PostOnly),
        config(Some(Script::Malayalam),  true,  0x0D4D, Last,        AfterMain,  LogRepha, PreAndPost),
        config(Some(Script::Sinhala),    false, 0x0DCA, LastSinhala, AfterPost,  Explicit, PreAndPost),
    ]
};

impl IndicConfig {
    pub(crate) fn for_script(script: Script) -> &'static Self {
        INDIC_CONFIGS[1..]
            .iter()
            .find(|config| config.script == Some(script))
            .unwrap_or(&INDIC_CONFIGS[0])
    }
}

/// Reproduce Uniscribe behaviour where it differs from the OpenType
/// script documents.
const UNISCRIBE_BUG_COMPATIBLE: bool = true;

// Indices into `INDIC_FEATURES` and `IndicShapePlan::mask_array`.
pub(crate) const RPHF: usize = 2;
pub(crate) const PREF: usize = 4;
pub(crate) const BLWF: usize = 5;
pub(crate) const ABVF: usize = 6;
pub(crate) const HALF: usize = 7;
pub(crate) const PSTF: usize = 8;
pub(crate) const INIT: usize = 11;
const BASIC_FEATURES: usize = INIT;
const NUM_FEATURES: usize = 17;

#[rustfmt::skip]
const INDIC_FEATURES: [(Tag, FeatureFlags); NUM_FEATURES] = [
    // basic features, applied one at a time after initial reordering
    (Tag::new(b"nukt"), FeatureFlags::GLOBAL_MANUAL_JOINERS),
    (Tag::new(b"akhn"), FeatureFlags::GLOBAL_MANUAL_JOINERS),
    (Tag::new(b"rphf"), FeatureFlags::MANUAL_JOINERS),
    (Tag::new(b"rkrf"), FeatureFlags::GLOBAL_MANUAL_JOINERS),
    (Tag::new(b"pref"), FeatureFlags::MANUAL_JOINERS),
    (Tag::new(b"blwf"), FeatureFlags::MANUAL_JOINERS),
    (Tag::new(b"abvf"), FeatureFlags::MANUAL_JOINERS),
    (Tag::new(b"half"), FeatureFlags::MANUAL_JOINERS),
    (Tag::new(b"pstf"), FeatureFlags::MANUAL_JOINERS),
    (Tag::new(b"vatu"), FeatureFlags::GLOBAL_MANUAL_JOINERS),
    (Tag::new(b"cjct"), FeatureFlags::GLOBAL_MANUAL_JOINERS),
    // other features, applied together after final reordering
    (Tag::new(b"init"), FeatureFlags::MANUAL_JOINERS),
    (Tag::new(b"pres"), FeatureFlags::GLOBAL_MANUAL_JOINERS),
    (Tag::new(b"abvs"), FeatureFlags::GLOBAL_MANUAL_JOINERS),
    (Tag::new(b"blws"), FeatureFlags::GLOBAL_MANUAL_JOINERS),
    (Tag::new(b"psts"), FeatureFlags::GLOBAL_MANUAL_JOINERS),
    (Tag::new(b"haln"), FeatureFlags::GLOBAL_MANUAL_JOINERS),
];

pub(crate) fn collect_features(builder: &mut OtMapBuilder<'_>) {
    builder.add_gsub_pause(Some(setup_syllables));

    builder.enable_feature(Tag::new(b"locl"), FeatureFlags::empty(), 1);
    builder.enable_feature(Tag::new(b"ccmp"), FeatureFlags::empty(), 1);

    builder.add_gsub_pause(Some(initial_reordering));

    for &(tag, flags) in &INDIC_FEATURES[..BASIC_FEATURES] {
        builder.add_feature(tag, flags, 1);
        builder.add_gsub_pause(None);
    }

    builder.add_gsub_pause(Some(final_reordering));

    for &(tag, flags) in &INDIC_FEATURES[BASIC_FEATURES..] {
        builder.add_feature(tag, flags, 1);
    }

    builder.enable_feature(Tag::new(b"calt"), FeatureFlags::empty(), 1);
    builder.enable_feature(Tag::new(b"clig"), FeatureFlags::empty(), 1);

    builder.add_gsub_pause(Some(syllabic::clear_syllables));
}

pub(crate) fn override_features(builder: &mut OtMapBuilder<'_>) {
    builder.disable_feature(Tag::new(b"liga"));
}

/// The lookups of one feature, for asking the face whether they would
/// substitute a glyph sequence.
#[derive(Clone, Debug, Default)]
pub(crate) struct WouldSubstituteFeature {
    lookups: Vec<LookupMap>,
    zero_context: bool,
}

impl WouldSubstituteFeature {
    fn new(map: &OtMap, tag: Tag, zero_context: bool) -> Self {
        let lookups = map
            .get_feature_stage(TableIndex::Gsub, tag)
            .map(|stage| map.get_stage_lookups(TableIndex::Gsub, stage).to_vec())
            .unwrap_or_default();
        Self {
            lookups,
            zero_context,
        }
    }

    pub(crate) fn would_substitute(&self, glyphs: &[u32], face: &dyn Face) -> bool {
        self.lookups
            .iter()
            .any(|lookup| face.would_substitute(lookup.index, glyphs, self.zero_context))
    }
}

/// Indic state derived once per shape plan.
#[derive(Debug)]
pub(crate) struct IndicShapePlan {
    pub(crate) config: &'static IndicConfig,
    pub(crate) is_old_spec: bool,
    pub(crate) uniscribe_bug_compatible: bool,
    // resolved on first use, plans are built without a font instance
    virama_glyph: OnceLock<u32>,
    pub(crate) rphf: WouldSubstituteFeature,
    pub(crate) pref: WouldSubstituteFeature,
    pub(crate) blwf: WouldSubstituteFeature,
    pub(crate) pstf: WouldSubstituteFeature,
    pub(crate) vatu: WouldSubstituteFeature,
    pub(crate) mask_array: [Mask; NUM_FEATURES],
}

impl IndicShapePlan {
    pub(crate) fn new(map: &OtMap, props: &SegmentProperties) -> Self {
        let config = IndicConfig::for_script(props.script);

        let is_old_spec = config.has_old_spec
            && map
                .chosen_script(TableIndex::Gsub)
                .map_or(true, |tag| tag.to_be_bytes()[3] != b'2');

        // Zero-context matching for the new specs, except Malayalam where
        // fonts of either spec rely on context.
        let zero_context = !is_old_spec && props.script != Script::Malayalam;

        let mut mask_array = [0; NUM_FEATURES];
        for (mask, &(tag, flags)) in mask_array.iter_mut().zip(&INDIC_FEATURES) {
            if !flags.contains(FeatureFlags::GLOBAL) {
                *mask = map.get_1_mask(tag);
            }
        }

        log::debug!(
            "indic plan for {:?}: old spec {}, zero context {}",
            props.script,
            is_old_spec,
            zero_context
        );

        Self {
            config,
            is_old_spec,
            uniscribe_bug_compatible: UNISCRIBE_BUG_COMPATIBLE,
            virama_glyph: OnceLock::new(),
            rphf: WouldSubstituteFeature::new(map, Tag::new(b"rphf"), zero_context),
            pref: WouldSubstituteFeature::new(map, Tag::new(b"pref"), zero_context),
            blwf: WouldSubstituteFeature::new(map, Tag::new(b"blwf"), zero_context),
            pstf: WouldSubstituteFeature::new(map, Tag::new(b"pstf"), zero_context),
            vatu: WouldSubstituteFeature::new(map, Tag::new(b"vatu"), zero_context),
            mask_array,
        }
    }

    /// Glyph of the script's virama, or 0 when the script or font has none.
    pub(crate) fn virama_glyph(&self, font: &Font) -> u32 {
        *self.virama_glyph.get_or_init(|| {
            char::from_u32(self.config.virama)
                .filter(|_| self.config.virama != 0)
                .and_then(|virama| font.nominal_glyph(virama))
                .unwrap_or(0)
        })
    }

    /// Position of a consonant according to the forms the font provides.
    ///
    /// Both `virama, consonant` and `consonant, virama` are tried: some
    /// fonts carry old-spec sequences in their new-spec lookups.
    fn consonant_position_from_face(&self, consonant: u32, virama: u32, face: &dyn Face) -> u8 {
        let glyphs = [virama, consonant, virama];
        let forms = |feature: &WouldSubstituteFeature| {
            feature.would_substitute(&glyphs[0..2], face)
                || feature.would_substitute(&glyphs[1..3], face)
        };
        if forms(&self.blwf) || forms(&self.vatu) {
            pos::BELOW_C
        } else if forms(&self.pstf) || forms(&self.pref) {
            pos::POST_C
        } else {
            pos::BASE_C
        }
    }

    fn update_consonant_positions(&self, font: &Font, buffer: &mut Buffer) {
        if self.config.base_pos != BasePosition::Last {
            return;
        }
        let virama = self.virama_glyph(font);
        if virama == 0 {
            return;
        }
        let face = font.face();
        for info in &mut buffer.info {
            if info.complex_aux == pos::BASE_C {
                info.complex_aux = self.consonant_position_from_face(info.codepoint, virama, face);
            }
        }
    }
}

fn is_ra(u: u32) -> bool {
    matches!(
        u,
        0x0930 // Devanagari
            | 0x09B0 | 0x09F0 // Bengali
            | 0x0A30 // Gurmukhi, no reph
            | 0x0AB0 // Gujarati
            | 0x0B30 // Oriya
            | 0x0BB0 // Tamil, no reph
            | 0x0C30 // Telugu, reph only with ZWJ
            | 0x0CB0 // Kannada
            | 0x0D30 // Malayalam, logical repha
            | 0x0DBB // Sinhala, reph only with ZWJ
    )
}

fn script_block(u: u32) -> Option<Script> {
    Some(match u & !0x7F {
        0x0900 => Script::Devanagari,
        0x0980 => Script::Bengali,
        0x0A00 => Script::Gurmukhi,
        0x0A80 => Script::Gujarati,
        0x0B00 => Script::Oriya,
        0x0B80 => Script::Tamil,
        0x0C00 => Script::Telugu,
        0x0C80 => Script::Kannada,
        0x0D00 => Script::Malayalam,
        0x0D80 => Script::Sinhala,
        _ => return None,
    })
}

/// Final position of a matra from its raw side relative to the consonant.
fn matra_position(u: u32, side: u8) -> u8 {
    use Script::*;

    let script = script_block(u);
    match side {
        pos::PRE_C => pos::PRE_M,
        pos::POST_C => match script {
            Some(Bengali | Gurmukhi | Gujarati | Oriya | Tamil | Malayalam) => pos::AFTER_POST,
            Some(Telugu) if u <= 0x0C42 => pos::BEFORE_SUB,
            Some(Kannada) if !(0x0CC3..=0x0CD6).contains(&u) => pos::BEFORE_SUB,
            _ => pos::AFTER_SUB,
        },
        // Bengali and Malayalam have no top matras
        pos::ABOVE_C => match script {
            Some(Gurmukhi) => pos::AFTER_POST,
            Some(Oriya) => pos::AFTER_MAIN,
            Some(Telugu | Kannada) => pos::BEFORE_SUB,
            _ => pos::AFTER_SUB,
        },
        pos::BELOW_C => match script {
            Some(Gurmukhi | Gujarati | Tamil | Malayalam) => pos::AFTER_POST,
            Some(Telugu | Kannada) => pos::BEFORE_SUB,
            _ => pos::AFTER_SUB,
        },
        _ => side,
    }
}

/// Classifies one character into category and positional class.
pub(crate) fn set_indic_properties(info: &mut GlyphInfo) {
    let u = info.codepoint;
    let categories = table::get_categories(u);
    let mut category = (categories & 0xFF) as u8;
    let mut position = (categories >> 8) as u8;

    match u {
        // act like bindus
        0x0953..=0x0954 => category = cat::SM,
        // act like consonants
        0x0A72..=0x0A73 | 0x1CF5..=0x1CF6 => category = cat::C,
        // tone marks
        0x1CE2..=0x1CE8 | 0x1CED => category = cat::A,
        // take marks in standalone clusters, like avagraha
        0xA8F2..=0xA8F7 | 0x1CE9..=0x1CEC | 0x1CEE..=0x1CF1 => category = cat::SYMBOL,
        0x0A51 => {
            category = cat::M;
            position = pos::BELOW_C;
        }
        // Grantha marks also used in Tamil
        0x11301 | 0x11303 => category = cat::SM,
        0x1133B | 0x1133C => category = cat::N,
        0x0AFB => category = cat::N,
        0x0980 | 0x09FC | 0x0C80 | 0x2010..=0x2011 => category = cat::PLACEHOLDER,
        0x25CC => category = cat::DOTTED_CIRCLE,
        _ => {}
    }

    if flag(category) & CONSONANT_FLAGS != 0 {
        position = pos::BASE_C;
        if is_ra(u) {
            category = cat::RA;
        }
    } else if category == cat::M {
        position = matra_position(u, position);
    } else if flag(category) & (flag(cat::SM) | flag(cat::A) | flag(cat::SYMBOL)) != 0 {
        position = pos::SMVD;
    }

    // Oriya bindu
    if u == 0x0B01 {
        position = pos::BEFORE_SUB;
    }

    info.complex_category = category;
    info.complex_aux = position;
}

pub(crate) fn setup_masks(buffer: &mut Buffer) {
    // masks are set in the initial reordering pause, once syllables are known
    for info in &mut buffer.info {
        set_indic_properties(info);
    }
}

/// Parts of a two- or three-part dependent vowel.
///
/// Sinhala split matras decompose the way Uniscribe does, keeping the
/// character itself as the second half.
fn split_matra(u: u32) -> Option<&'static [u32]> {
    Some(match u {
        0x09CB => &[0x09C7, 0x09BE],
        0x09CC => &[0x09C7, 0x09D7],
        0x0B48 => &[0x0B47, 0x0B56],
        0x0B4B => &[0x0B47, 0x0B3E],
        0x0B4C => &[0x0B47, 0x0B57],
        0x0BCA => &[0x0BC6, 0x0BBE],
        0x0BCB => &[0x0BC7, 0x0BBE],
        0x0BCC => &[0x0BC6, 0x0BD7],
        0x0C48 => &[0x0C46, 0x0C56],
        0x0CC0 => &[0x0CBF, 0x0CD5],
        0x0CC7 => &[0x0CC6, 0x0CD5],
        0x0CC8 => &[0x0CC6, 0x0CD6],
        0x0CCA => &[0x0CC6, 0x0CC2],
        0x0CCB => &[0x0CC6, 0x0CC2, 0x0CD5],
        0x0D4A => &[0x0D46, 0x0D3E],
        0x0D4B => &[0x0D47, 0x0D3E],
        0x0D4C => &[0x0D46, 0x0D57],
        0x0DDA => &[0x0DD9, 0x0DDA],
        0x0DDC => &[0x0DD9, 0x0DDC],
        0x0DDD => &[0x0DD9, 0x0DDD],
        0x0DDE => &[0x0DD9, 0x0DDE],
        _ => return None,
    })
}

/// Decomposes split matras in place. Parts keep the cluster of the
/// original character.
pub(crate) fn preprocess_text(buffer: &mut Buffer) {
    if !buffer
        .info
        .iter()
        .any(|info| split_matra(info.codepoint).is_some())
    {
        return;
    }

    let mut out = Vec::with_capacity(buffer.len() + 4);
    for info in &buffer.info {
        match split_matra(info.codepoint) {
            Some(parts) => out.extend(parts.iter().filter_map(|&part| {
                let c = char::from_u32(part)?;
                Some(GlyphInfo {
                    codepoint: part,
                    unicode: UnicodeProps::of(c),
                    ..*info
                })
            })),
            None => out.push(*info),
        }
    }
    buffer.replace_info(out);
}

fn setup_syllables(_plan: &OtShapePlan, _font: &Font, buffer: &mut Buffer) {
    machine::find_syllables(buffer);
    let mut start = 0;
    while start < buffer.len() {
        let end = buffer.next_syllable(start);
        buffer.unsafe_to_break(start, end);
        start = end;
    }
}

fn initial_reordering(plan: &OtShapePlan, font: &Font, buffer: &mut Buffer) {
    let Some(indic) = plan.indic() else {
        return;
    };

    log::trace!("indic initial reordering: {} glyphs", buffer.len());

    indic.update_consonant_positions(font, buffer);
    syllabic::insert_dotted_circles(
        font,
        buffer,
        SyllableType::BrokenCluster as u8,
        cat::DOTTED_CIRCLE,
        Some(cat::REPHA),
        Some(pos::END),
    );

    let pass = InitialReorderingPass::new(indic, font.face(), plan.props().script);
    let mut start = 0;
    while start < buffer.len() {
        let end = buffer.next_syllable(start);
        pass.reorder_syllable(buffer, start, end);
        start = end;
    }
}

fn final_reordering(plan: &OtShapePlan, font: &Font, buffer: &mut Buffer) {
    let Some(indic) = plan.indic() else {
        return;
    };
    if buffer.is_empty() {
        return;
    }

    log::trace!("indic final reordering: {} glyphs", buffer.len());

    let pass = FinalReorderingPass::new(indic, indic.virama_glyph(font), plan.props().script);
    let mut start = 0;
    while start < buffer.len() {
        let end = buffer.next_syllable(start);
        pass.reorder_syllable(buffer, start, end);
        start = end;
    }
}

#[cfg(test)]
mod test {
    use super::{
        category as cat, matra_position, position as pos, preprocess_text, set_indic_properties,
        BasePosition, IndicConfig, RephMode,
    };
    use crate::{Buffer, GlyphInfo, Script};

    fn classify(c: char) -> (u8, u8) {
        let mut info = GlyphInfo::new(c, 0);
        set_indic_properties(&mut info);
        (info.complex_category, info.complex_aux)
    }

    #[test]
    fn devanagari_classes() {
        assert_eq!(classify('\u{0915}'), (cat::C, pos::BASE_C));
        assert_eq!(classify('\u{0930}'), (cat::RA, pos::BASE_C));
        assert_eq!(classify('\u{094D}').0, cat::H);
        assert_eq!(classify('\u{093F}'), (cat::M, pos::PRE_M));
        assert_eq!(classify('\u{0940}'), (cat::M, pos::AFTER_SUB));
        assert_eq!(classify('\u{0902}'), (cat::SM, pos::SMVD));
        assert_eq!(classify('\u{200D}').0, cat::ZWJ);
        assert_eq!(classify('\u{25CC}'), (cat::DOTTED_CIRCLE, pos::BASE_C));
    }

    #[test]
    fn overrides() {
        assert_eq!(classify('\u{0953}').0, cat::SM);
        assert_eq!(classify('\u{0A72}'), (cat::C, pos::BASE_C));
        assert_eq!(classify('\u{0A51}'), (cat::M, pos::AFTER_POST));
        assert_eq!(classify('\u{0B01}').1, pos::BEFORE_SUB);
        assert_eq!(classify('\u{2010}'), (cat::PLACEHOLDER, pos::BASE_C));
    }

    #[test]
    fn matra_sides() {
        assert_eq!(matra_position(0x0C41, pos::POST_C), pos::BEFORE_SUB);
        assert_eq!(matra_position(0x0C43, pos::POST_C), pos::AFTER_SUB);
        assert_eq!(matra_position(0x0CC3, pos::POST_C), pos::AFTER_SUB);
        assert_eq!(matra_position(0x0CBE, pos::POST_C), pos::BEFORE_SUB);
        assert_eq!(matra_position(0x09C1, pos::BELOW_C), pos::AFTER_SUB);
        assert_eq!(matra_position(0x0B3F, pos::ABOVE_C), pos::AFTER_MAIN);
    }

    #[test]
    fn configs() {
        let deva = IndicConfig::for_script(Script::Devanagari);
        assert_eq!(deva.virama, 0x094D);
        assert!(deva.has_old_spec);
        let sinh = IndicConfig::for_script(Script::Sinhala);
        assert_eq!(sinh.base_pos, BasePosition::LastSinhala);
        assert_eq!(sinh.reph_mode, RephMode::Explicit);
        let default = IndicConfig::for_script(Script::Latin);
        assert_eq!(default.script, None);
        assert_eq!(default.virama, 0);
    }

    #[test]
    fn split_matras() {
        let mut buffer = Buffer::new().push_str("\u{0D9A}\u{0DDA}\u{0C95}\u{0CCB}");
        preprocess_text(&mut buffer);
        let codepoints: Vec<u32> = buffer.info().iter().map(|i| i.codepoint).collect();
        assert_eq!(
            codepoints,
            vec![0x0D9A, 0x0DD9, 0x0DDA, 0x0C95, 0x0CC6, 0x0CC2, 0x0CD5]
        );
        let clusters: Vec<u32> = buffer.info().iter().map(|i| i.cluster).collect();
        assert_eq!(clusters, vec![0, 3, 3, 6, 9, 9, 9]);
    }
}
