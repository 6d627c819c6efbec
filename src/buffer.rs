// SPDX-License-Identifier: MIT OR Apache-2.0

use core::ops::Range;

use bitflags::bitflags;
use unicode_script::UnicodeScript;

use crate::{Direction, Script, SegmentProperties, UnicodeProps};

/// Per-glyph feature selection bits.
pub type Mask = u32;

bitflags! {
    /// Flags published on shaped glyphs for consumers such as line breakers.
    #[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
    pub struct GlyphFlags: u8 {
        /// Breaking the text before this glyph requires reshaping both sides.
        const UNSAFE_TO_BREAK = 0x01;
    }
}

bitflags! {
    /// Substitution history maintained by lookup application.
    #[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
    pub struct GlyphProps: u8 {
        const SUBSTITUTED = 0x01;
        const LIGATED = 0x02;
        const MULTIPLIED = 0x04;
        const DELETED = 0x08;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
    pub struct BufferFlags: u8 {
        const BEGINNING_OF_TEXT = 0x01;
        const END_OF_TEXT = 0x02;
        /// Never insert U+25CC for broken clusters.
        const DO_NOT_INSERT_DOTTED_CIRCLE = 0x04;
    }
}

/// What the buffer's `codepoint` fields currently hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentType {
    #[default]
    Invalid,
    Unicode,
    Glyphs,
}

/// Granularity of cluster merging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClusterLevel {
    #[default]
    MonotoneGraphemes,
    MonotoneCharacters,
    /// Clusters are never merged, only flagged unsafe to break.
    Characters,
}

/// One buffer entry: a character before shaping, a glyph after.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphInfo {
    /// Unicode scalar value before glyph mapping, glyph id afterwards.
    pub codepoint: u32,
    pub cluster: u32,
    pub mask: Mask,
    pub flags: GlyphFlags,
    pub props: GlyphProps,
    pub(crate) unicode: UnicodeProps,
    pub(crate) syllable: u8,
    pub(crate) complex_category: u8,
    pub(crate) complex_aux: u8,
}

impl GlyphInfo {
    pub fn new(c: char, cluster: u32) -> Self {
        Self {
            codepoint: c as u32,
            cluster,
            unicode: UnicodeProps::of(c),
            ..Self::default()
        }
    }

    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.codepoint)
    }

    /// Packed syllable byte: serial in the high nibble, type in the low one.
    pub fn syllable(&self) -> u8 {
        self.syllable
    }

    pub fn complex_category(&self) -> u8 {
        self.complex_category
    }

    pub fn complex_aux(&self) -> u8 {
        self.complex_aux
    }

    pub fn unicode_props(&self) -> UnicodeProps {
        self.unicode
    }

    pub fn is_substituted(&self) -> bool {
        self.props.contains(GlyphProps::SUBSTITUTED)
    }

    pub fn is_ligated(&self) -> bool {
        self.props.contains(GlyphProps::LIGATED)
    }

    pub fn is_multiplied(&self) -> bool {
        self.props.contains(GlyphProps::MULTIPLIED)
    }

    pub fn is_ligated_and_didnt_multiply(&self) -> bool {
        self.is_ligated() && !self.is_multiplied()
    }

    pub(crate) fn clear_ligated_and_multiplied(&mut self) {
        self.props.remove(GlyphProps::LIGATED | GlyphProps::MULTIPLIED);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphPosition {
    pub x_advance: i32,
    pub y_advance: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

/// Text being shaped, along with its segment properties.
#[derive(Clone, Debug, Default)]
pub struct Buffer {
    pub(crate) info: Vec<GlyphInfo>,
    pub(crate) pos: Vec<GlyphPosition>,
    pub(crate) props: SegmentProperties,
    content_type: ContentType,
    cluster_level: ClusterLevel,
    flags: BufferFlags,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every character of `text`, using byte offsets as clusters.
    pub fn push_str(mut self, text: &str) -> Self {
        for (index, c, unicode) in UnicodeProps::for_text(text) {
            self.push_info(GlyphInfo {
                unicode,
                ..GlyphInfo::new(c, index as u32)
            });
        }
        self
    }

    /// Appends a single character classified without context.
    pub fn add(&mut self, c: char, cluster: u32) {
        self.push_info(GlyphInfo::new(c, cluster));
    }

    fn push_info(&mut self, info: GlyphInfo) {
        self.info.push(info);
        self.content_type = ContentType::Unicode;
    }

    pub fn segment_properties(mut self, props: SegmentProperties) -> Self {
        self.props = props;
        self
    }

    pub fn cluster_level(mut self, cluster_level: ClusterLevel) -> Self {
        self.cluster_level = cluster_level;
        self
    }

    pub fn flags(mut self, flags: BufferFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn props(&self) -> &SegmentProperties {
        &self.props
    }

    pub fn set_props(&mut self, props: SegmentProperties) {
        self.props = props;
    }

    pub fn get_cluster_level(&self) -> ClusterLevel {
        self.cluster_level
    }

    pub fn get_flags(&self) -> BufferFlags {
        self.flags
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub(crate) fn set_content_type(&mut self, content_type: ContentType) {
        self.content_type = content_type;
    }

    pub fn len(&self) -> usize {
        self.info.len()
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_empty()
    }

    pub fn info(&self) -> &[GlyphInfo] {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut [GlyphInfo] {
        &mut self.info
    }

    pub fn positions(&self) -> &[GlyphPosition] {
        &self.pos
    }

    pub fn positions_mut(&mut self) -> &mut [GlyphPosition] {
        &mut self.pos
    }

    /// Removes all content, keeping configuration.
    pub fn clear(&mut self) {
        self.info.clear();
        self.pos.clear();
        self.content_type = ContentType::Invalid;
    }

    /// Fills in a missing script and direction from the text itself.
    pub fn guess_segment_properties(&mut self) {
        if matches!(
            self.props.script,
            Script::Unknown | Script::Common | Script::Inherited
        ) {
            let script = self
                .info
                .iter()
                .filter_map(GlyphInfo::as_char)
                .map(|c| c.script())
                .find(|s| !matches!(s, Script::Common | Script::Inherited | Script::Unknown));
            if let Some(script) = script {
                self.props.script = script;
            }
        }
        if self.props.direction == Direction::Invalid {
            self.props.direction = Direction::from_script(self.props.script);
        }
    }

    /// Resets positions to one zeroed entry per glyph.
    pub fn clear_positions(&mut self) {
        self.pos.clear();
        self.pos.resize(self.info.len(), GlyphPosition::default());
    }

    pub fn reverse(&mut self) {
        self.info.reverse();
        self.pos.reverse();
    }

    pub fn reverse_range(&mut self, range: Range<usize>) {
        self.info[range.clone()].reverse();
        if self.pos.len() == self.info.len() {
            self.pos[range].reverse();
        }
    }

    /// Makes `start..end` one cluster, taking the smallest cluster value.
    ///
    /// The range is widened to cover neighbours already sharing a cluster with
    /// its ends so clusters stay contiguous.
    pub fn merge_clusters(&mut self, mut start: usize, mut end: usize) {
        if end.saturating_sub(start) < 2 {
            return;
        }
        if self.cluster_level == ClusterLevel::Characters {
            self.unsafe_to_break(start, end);
            return;
        }

        let cluster = self.min_cluster(start, end);

        while end < self.info.len() && self.info[end - 1].cluster == self.info[end].cluster {
            end += 1;
        }
        while start > 0 && self.info[start - 1].cluster == self.info[start].cluster {
            start -= 1;
        }

        for info in &mut self.info[start..end] {
            info.cluster = cluster;
        }
    }

    /// Flags every glyph in `start..end` not in the range's first cluster.
    pub fn unsafe_to_break(&mut self, start: usize, end: usize) {
        if end.saturating_sub(start) < 2 {
            return;
        }
        let cluster = self.min_cluster(start, end);
        for info in &mut self.info[start..end] {
            if info.cluster != cluster {
                info.flags |= GlyphFlags::UNSAFE_TO_BREAK;
            }
        }
    }

    fn min_cluster(&self, start: usize, end: usize) -> u32 {
        self.info[start..end]
            .iter()
            .map(|info| info.cluster)
            .min()
            .unwrap_or(0)
    }

    /// End of the syllable starting at `start`.
    pub fn next_syllable(&self, start: usize) -> usize {
        let Some(first) = self.info.get(start) else {
            return self.info.len();
        };
        let syllable = first.syllable;
        let mut end = start + 1;
        while end < self.info.len() && self.info[end].syllable == syllable {
            end += 1;
        }
        end
    }

    /// Ranges of consecutive glyphs sharing a syllable byte.
    pub fn syllables(&self) -> Syllables<'_> {
        Syllables {
            buffer: self,
            start: 0,
        }
    }

    pub(crate) fn clear_syllables(&mut self) {
        for info in &mut self.info {
            info.syllable = 0;
        }
    }

    /// Replaces the glyph at `index`.
    pub fn substitute(&mut self, index: usize, glyph: u32) {
        if let Some(info) = self.info.get_mut(index) {
            info.codepoint = glyph;
            info.props |= GlyphProps::SUBSTITUTED;
        }
    }

    /// Replaces `range` with a single ligature glyph.
    pub fn ligate(&mut self, range: Range<usize>, glyph: u32) {
        if range.is_empty() || range.end > self.info.len() {
            return;
        }
        self.merge_clusters(range.start, range.end);
        let first = &mut self.info[range.start];
        first.codepoint = glyph;
        first.props |= GlyphProps::SUBSTITUTED | GlyphProps::LIGATED;
        first.props.remove(GlyphProps::MULTIPLIED);
        self.info.drain(range.start + 1..range.end);
        if self.pos.len() > self.info.len() {
            self.pos.truncate(self.info.len());
        }
    }

    /// Replaces the glyph at `index` with `glyphs`, all in its cluster.
    pub fn multiply(&mut self, index: usize, glyphs: &[u32]) {
        let Some(template) = self.info.get(index).copied() else {
            return;
        };
        let ligated = template.props & GlyphProps::LIGATED;
        let expanded = glyphs.iter().map(|&glyph| GlyphInfo {
            codepoint: glyph,
            props: GlyphProps::SUBSTITUTED | GlyphProps::MULTIPLIED | ligated,
            ..template
        });
        self.info.splice(index..index + 1, expanded);
    }

    pub(crate) fn insert(&mut self, index: usize, info: GlyphInfo) {
        self.info.insert(index, info);
    }

    pub(crate) fn replace_info(&mut self, info: Vec<GlyphInfo>) {
        self.info = info;
    }
}

/// Iterator returned by [`Buffer::syllables`].
pub struct Syllables<'a> {
    buffer: &'a Buffer,
    start: usize,
}

impl Iterator for Syllables<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.buffer.len() {
            return None;
        }
        let end = self.buffer.next_syllable(self.start);
        let range = self.start..end;
        self.start = end;
        Some(range)
    }
}
