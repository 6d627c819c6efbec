// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    complex::{indic::IndicShapePlan, ComplexData, ComplexShaper},
    Buffer, ClusterLevel, ContentType, Direction, Face, Feature, FeatureFlags, Font, Mask, OtMap,
    OtMapBuilder, Script, SegmentProperties, TableIndex, Tag, UnicodeProps,
};

const COMMON_FEATURES: [Tag; 7] = [
    Tag::new(b"abvm"),
    Tag::new(b"blwm"),
    Tag::new(b"ccmp"),
    Tag::new(b"locl"),
    Tag::new(b"mark"),
    Tag::new(b"mkmk"),
    Tag::new(b"rlig"),
];

const HORIZONTAL_FEATURES: [Tag; 6] = [
    Tag::new(b"calt"),
    Tag::new(b"clig"),
    Tag::new(b"curs"),
    Tag::new(b"kern"),
    Tag::new(b"liga"),
    Tag::new(b"rclt"),
];

/// OpenType tags to try for `script`, most preferred first.
///
/// Indic scripts prefer their new-spec tag (`dev2`) over the old one
/// (`deva`). Every list ends with the default script.
pub fn script_tags(script: Script) -> Vec<Tag> {
    let new_spec: Option<&[u8; 4]> = match script {
        Script::Devanagari => Some(b"dev2"),
        Script::Bengali => Some(b"bng2"),
        Script::Gurmukhi => Some(b"gur2"),
        Script::Gujarati => Some(b"gjr2"),
        Script::Oriya => Some(b"ory2"),
        Script::Tamil => Some(b"tml2"),
        Script::Telugu => Some(b"tel2"),
        Script::Kannada => Some(b"knd2"),
        Script::Malayalam => Some(b"mlm2"),
        _ => None,
    };

    let mut tags = Vec::with_capacity(3);
    tags.extend(new_spec.map(Tag::new));
    if let [a, b, c, d] = *script.short_name().as_bytes() {
        if !matches!(script, Script::Common | Script::Inherited | Script::Unknown) {
            tags.push(Tag::new(&[
                a.to_ascii_lowercase(),
                b.to_ascii_lowercase(),
                c.to_ascii_lowercase(),
                d.to_ascii_lowercase(),
            ]));
        }
    }
    tags.push(Tag::new(b"DFLT"));
    tags
}

/// Compiled OpenType shaping program for one segment type and feature set.
#[derive(Debug)]
pub struct OtShapePlan {
    props: SegmentProperties,
    shaper: ComplexShaper,
    map: OtMap,
    data: ComplexData,
}

impl OtShapePlan {
    pub fn new(
        face: &dyn Face,
        props: &SegmentProperties,
        user_features: &[Feature],
        variations_index: [Option<u32>; 2],
    ) -> Self {
        let shaper = ComplexShaper::for_script(props.script);
        let tags = script_tags(props.script);
        let mut builder = OtMapBuilder::new(face, &tags, variations_index);

        builder.enable_feature(Tag::new(b"rvrn"), FeatureFlags::empty(), 1);
        builder.add_gsub_pause(None);

        match props.direction {
            Direction::LeftToRight => {
                builder.enable_feature(Tag::new(b"ltra"), FeatureFlags::empty(), 1);
                builder.enable_feature(Tag::new(b"ltrm"), FeatureFlags::empty(), 1);
            }
            Direction::RightToLeft => {
                builder.enable_feature(Tag::new(b"rtla"), FeatureFlags::empty(), 1);
                builder.add_feature(Tag::new(b"rtlm"), FeatureFlags::empty(), 1);
            }
            _ => {}
        }

        shaper.collect_features(&mut builder);

        for tag in COMMON_FEATURES {
            builder.enable_feature(tag, FeatureFlags::empty(), 1);
        }
        if props.direction.is_horizontal() {
            for tag in HORIZONTAL_FEATURES {
                builder.enable_feature(tag, FeatureFlags::empty(), 1);
            }
        } else {
            builder.enable_feature(Tag::new(b"vert"), FeatureFlags::GLOBAL_SEARCH, 1);
        }

        for feature in user_features {
            let flags = if feature.is_global() {
                FeatureFlags::GLOBAL
            } else {
                FeatureFlags::empty()
            };
            builder.add_feature(feature.tag, flags, feature.value);
        }

        shaper.override_features(&mut builder);

        let map = builder.compile();
        let data = shaper.create_data(&map, props);

        log::debug!(
            "ot plan for {:?}: shaper {:?}, gsub script {:?}, gpos script {:?}",
            props.script,
            shaper,
            map.chosen_script(TableIndex::Gsub),
            map.chosen_script(TableIndex::Gpos)
        );

        Self {
            props: props.clone(),
            shaper,
            map,
            data,
        }
    }

    pub fn map(&self) -> &OtMap {
        &self.map
    }

    pub fn props(&self) -> &SegmentProperties {
        &self.props
    }

    pub fn complex_shaper(&self) -> ComplexShaper {
        self.shaper
    }

    pub(crate) fn indic(&self) -> Option<&IndicShapePlan> {
        match &self.data {
            ComplexData::Indic(plan) => Some(plan),
            ComplexData::None => None,
        }
    }

    /// Runs the whole pipeline over `buffer`, leaving glyphs in it.
    ///
    /// `features` are the caller's features with their real ranges; the
    /// plan itself only knows their tags and values.
    pub fn execute(&self, font: &Font, buffer: &mut Buffer, features: &[Feature]) {
        form_clusters(buffer);
        self.shaper.preprocess_text(buffer);
        self.setup_masks(buffer, features);

        for info in &mut buffer.info {
            info.codepoint = info
                .as_char()
                .and_then(|c| font.nominal_glyph(c))
                .unwrap_or(0);
        }

        self.map.apply(TableIndex::Gsub, self, font, buffer);

        buffer.clear_positions();
        let face = font.face();
        let horizontal = self.props.direction.is_horizontal();
        for (info, pos) in buffer.info.iter().zip(&mut buffer.pos) {
            if horizontal {
                pos.x_advance = face.glyph_h_advance(info.codepoint, font.coords());
            } else {
                pos.y_advance = face.glyph_v_advance(info.codepoint, font.coords());
            }
        }

        self.map.apply(TableIndex::Gpos, self, font, buffer);

        if self.props.direction.is_backward() {
            buffer.reverse();
        }
        buffer.set_content_type(ContentType::Glyphs);
    }

    fn setup_masks(&self, buffer: &mut Buffer, features: &[Feature]) {
        let global_mask = self.map.global_mask();
        for info in &mut buffer.info {
            info.mask = global_mask;
        }

        self.shaper.setup_masks(buffer);

        for feature in features.iter().filter(|feature| !feature.is_global()) {
            let (mask, shift) = self.map.get_mask(feature.tag);
            if mask == 0 {
                continue;
            }
            let bits: Mask = (feature.value << shift) & mask;
            for info in &mut buffer.info {
                if feature.start <= info.cluster && info.cluster < feature.end {
                    info.mask = (info.mask & !mask) | bits;
                }
            }
        }
    }
}

/// Merges every base with the marks and joiners that follow it.
fn form_clusters(buffer: &mut Buffer) {
    let level = buffer.get_cluster_level();
    let mut start = 0;
    for end in 1..=buffer.len() {
        if end < buffer.len()
            && buffer.info[end]
                .unicode
                .contains(UnicodeProps::CONTINUATION)
        {
            continue;
        }
        if level == ClusterLevel::MonotoneGraphemes {
            buffer.merge_clusters(start, end);
        } else {
            buffer.unsafe_to_break(start, end);
        }
        start = end;
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::{form_clusters, script_tags, OtShapePlan};
    use crate::{
        Buffer, ClusterLevel, ComplexShaper, Direction, Face, FaceCapabilities, Feature, Font,
        NormalizedCoord, Script, SegmentProperties, TableIndex, Tag,
    };

    struct Plain;

    impl Face for Plain {
        fn capabilities(&self) -> FaceCapabilities {
            FaceCapabilities::OUTLINES | FaceCapabilities::LAYOUT
        }

        fn nominal_glyph(&self, c: char) -> Option<u32> {
            (c != 'z').then_some(c as u32)
        }

        fn glyph_h_advance(&self, glyph: u32, _coords: &[NormalizedCoord]) -> i32 {
            glyph as i32
        }

        fn has_script(&self, _table: TableIndex, script: Tag) -> bool {
            script == Tag::new(b"deva") || script == Tag::new(b"latn")
        }
    }

    #[test]
    fn tags_for_scripts() {
        assert_eq!(
            script_tags(Script::Devanagari),
            [Tag::new(b"dev2"), Tag::new(b"deva"), Tag::new(b"DFLT")]
        );
        assert_eq!(script_tags(Script::Latin), [Tag::new(b"latn"), Tag::new(b"DFLT")]);
        assert_eq!(script_tags(Script::Common), [Tag::new(b"DFLT")]);
    }

    #[test]
    fn old_spec_fallback() {
        let props = SegmentProperties::new()
            .direction(Direction::LeftToRight)
            .script(Script::Devanagari);
        let plan = OtShapePlan::new(&Plain, &props, &[], [None; 2]);
        assert_eq!(plan.complex_shaper(), ComplexShaper::Indic);
        assert_eq!(plan.map().chosen_script(TableIndex::Gsub), Some(Tag::new(b"deva")));
        assert!(plan.indic().is_some_and(|indic| indic.is_old_spec));
    }

    #[test]
    fn latin_pipeline() {
        let props = SegmentProperties::new()
            .direction(Direction::RightToLeft)
            .script(Script::Latin);
        let plan = OtShapePlan::new(&Plain, &props, &[], [None; 2]);
        assert!(plan.indic().is_none());

        let font = Font::new(Arc::new(Plain));
        let mut buffer = Buffer::new().push_str("az").segment_properties(props);
        let features = [Feature::new(Tag::new(b"smcp"), 1, 0..1)];
        plan.execute(&font, &mut buffer, &features);

        let glyphs: Vec<u32> = buffer.info().iter().map(|info| info.codepoint).collect();
        assert_eq!(glyphs, [0, 'a' as u32]);
        assert_eq!(buffer.positions()[1].x_advance, 'a' as i32);
    }

    #[test]
    fn marks_join_clusters() {
        let mut buffer = Buffer::new().push_str("\u{0915}\u{093F}\u{0937}\u{093F}a");
        form_clusters(&mut buffer);
        let clusters: Vec<u32> = buffer.info().iter().map(|info| info.cluster).collect();
        assert_eq!(clusters, [0, 0, 6, 6, 12]);

        // marks outside the Indic blocks join too
        for text in ["\u{0E01}\u{0E31}", "\u{1780}\u{17B6}", "\u{1100}\u{1161}"] {
            let mut buffer = Buffer::new().push_str(text);
            form_clusters(&mut buffer);
            assert!(buffer.info().iter().all(|info| info.cluster == 0), "{text:?}");
        }

        let mut buffer = Buffer::new()
            .push_str("\u{0915}\u{094D}")
            .cluster_level(ClusterLevel::Characters);
        form_clusters(&mut buffer);
        assert_eq!(buffer.info()[1].cluster, 3);
    }
}
