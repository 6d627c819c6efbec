#![allow(dead_code)]

use std::sync::Arc;

use indic_shaper::{
    shape_full, Buffer, BufferFlags, Direction, Face, FaceCapabilities, Feature, Font, LookupMap,
    NormalizedCoord, Script, SegmentProperties, TableIndex, Tag,
};

pub const ADVANCE: i32 = 500;

/// One substitution: `input` becomes `output`, as a ligature when `input`
/// has several glyphs.
#[derive(Clone, Debug)]
struct Rule {
    input: Vec<u32>,
    output: u32,
}

/// An in-memory face for tests.
///
/// Glyph ids equal codepoints, except for characters marked missing. GSUB
/// features are single lookups made of substitution rules, which also answer
/// would-substitute queries.
#[derive(Clone, Debug)]
pub struct TestFace {
    capabilities: FaceCapabilities,
    missing: Vec<char>,
    scripts: Vec<Tag>,
    features: Vec<(Tag, u16)>,
    lookups: Vec<Vec<Rule>>,
    /// Glyph a working Graphite engine outputs for every character.
    graphite_glyph: Option<u32>,
}

impl Default for TestFace {
    fn default() -> Self {
        Self {
            capabilities: FaceCapabilities::OUTLINES | FaceCapabilities::LAYOUT,
            missing: Vec::new(),
            scripts: Vec::new(),
            features: Vec::new(),
            lookups: Vec::new(),
            graphite_glyph: None,
        }
    }
}

impl TestFace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capabilities(mut self, capabilities: FaceCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Characters the character map does not cover.
    pub fn missing(mut self, chars: &str) -> Self {
        self.missing.extend(chars.chars());
        self
    }

    /// A script the layout tables support.
    pub fn script(mut self, tag: &[u8; 4]) -> Self {
        self.scripts.push(Tag::new(tag));
        self
    }

    /// A GSUB feature replacing the glyphs of `input` with `output`.
    pub fn feature(mut self, tag: &[u8; 4], input: &str, output: u32) -> Self {
        let index = self.lookups.len() as u16;
        self.lookups.push(vec![Rule {
            input: input.chars().map(u32::from).collect(),
            output,
        }]);
        self.features.push((Tag::new(tag), index));
        self
    }

    pub fn graphite(mut self, glyph: Option<u32>) -> Self {
        self.capabilities |= FaceCapabilities::GRAPHITE;
        self.graphite_glyph = glyph;
        self
    }

    pub fn font(self) -> Font {
        Font::new(Arc::new(self))
    }
}

impl Face for TestFace {
    fn capabilities(&self) -> FaceCapabilities {
        self.capabilities
    }

    fn nominal_glyph(&self, c: char) -> Option<u32> {
        (!self.missing.contains(&c)).then_some(u32::from(c))
    }

    fn glyph_h_advance(&self, glyph: u32, _coords: &[NormalizedCoord]) -> i32 {
        if glyph == 0 {
            0
        } else {
            ADVANCE
        }
    }

    fn has_script(&self, _table: TableIndex, script: Tag) -> bool {
        self.scripts.contains(&script)
    }

    fn feature_lookups(
        &self,
        table: TableIndex,
        _script: Option<Tag>,
        feature: Tag,
        _variations_index: Option<u32>,
    ) -> Vec<u16> {
        if table != TableIndex::Gsub {
            return Vec::new();
        }
        self.features
            .iter()
            .filter(|(tag, _)| *tag == feature)
            .map(|&(_, index)| index)
            .collect()
    }

    fn would_substitute(&self, lookup_index: u16, glyphs: &[u32], _zero_context: bool) -> bool {
        self.lookups
            .get(usize::from(lookup_index))
            .is_some_and(|rules| rules.iter().any(|rule| rule.input == glyphs))
    }

    fn apply_lookup(&self, table: TableIndex, lookup: &LookupMap, buffer: &mut Buffer) {
        let Some(rules) = self.lookups.get(usize::from(lookup.index)) else {
            return;
        };
        if table != TableIndex::Gsub {
            return;
        }
        for rule in rules {
            let len = rule.input.len();
            let mut i = 0;
            while i + len <= buffer.len() {
                let window = &buffer.info()[i..i + len];
                let matches = window
                    .iter()
                    .zip(&rule.input)
                    .all(|(info, &glyph)| info.codepoint == glyph && info.mask & lookup.mask != 0);
                if matches {
                    if len == 1 {
                        buffer.substitute(i, rule.output);
                    } else {
                        buffer.ligate(i..i + len, rule.output);
                    }
                }
                i += 1;
            }
        }
    }

    fn shape_graphite(&self, _font: &Font, buffer: &mut Buffer, _features: &[Feature]) -> bool {
        let Some(glyph) = self.graphite_glyph else {
            return false;
        };
        for info in buffer.info_mut() {
            info.codepoint = glyph;
        }
        buffer.clear_positions();
        true
    }
}

/// The test configuration.
///
/// The text is shaped with a given font and the glyph ids compared with the
/// expected ones. Clusters of the result must be monotonic.
#[derive(Debug)]
pub struct ShapeTestCfg {
    text: String,
    props: SegmentProperties,
    features: Vec<Feature>,
    flags: BufferFlags,
    shapers: Option<Vec<&'static str>>,
}

impl ShapeTestCfg {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            props: SegmentProperties::new(),
            features: Vec::new(),
            flags: BufferFlags::empty(),
            shapers: None,
        }
    }

    pub fn script(mut self, script: Script) -> Self {
        self.props = SegmentProperties::new()
            .direction(Direction::from_script(script))
            .script(script);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.props.direction = direction;
        self
    }

    pub fn feature(mut self, feature: &str) -> Self {
        self.features.push(feature.parse().unwrap());
        self
    }

    pub fn flags(mut self, flags: BufferFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn shapers(mut self, shapers: &[&'static str]) -> Self {
        self.shapers = Some(shapers.to_vec());
        self
    }

    pub fn shape(&self, font: &Font) -> (bool, Buffer) {
        let mut buffer = Buffer::new()
            .push_str(&self.text)
            .segment_properties(self.props.clone())
            .flags(self.flags);
        let shaped = shape_full(font, &mut buffer, &self.features, self.shapers.as_deref());
        (shaped, buffer)
    }

    pub fn validate_glyphs(self, font: &Font, expected: &[u32]) -> Buffer {
        let (shaped, buffer) = self.shape(font);
        assert!(shaped, "shaping failed for {self:?}");
        assert_eq!(glyphs(&buffer), expected, "wrong glyphs for {self:?}");
        assert_monotonic_clusters(&buffer);
        buffer
    }
}

pub fn glyphs(buffer: &Buffer) -> Vec<u32> {
    buffer.info().iter().map(|info| info.codepoint).collect()
}

pub fn clusters(buffer: &Buffer) -> Vec<u32> {
    buffer.info().iter().map(|info| info.cluster).collect()
}

/// Clusters never decrease in logical order.
pub fn assert_monotonic_clusters(buffer: &Buffer) {
    let mut clusters = clusters(buffer);
    if buffer.props().direction.is_backward() {
        clusters.reverse();
    }
    assert!(
        clusters.windows(2).all(|pair| pair[0] <= pair[1]),
        "clusters not monotonic: {clusters:?}"
    );
}
