// SPDX-License-Identifier: MIT OR Apache-2.0

use core::ops::Range;

use bitflags::bitflags;

use crate::{Buffer, Face, Font, Mask, OtShapePlan, SetDigest, TableIndex, Tag};

/// Bit carrying every feature that is global and on/off only.
pub const GLOBAL_BIT_SHIFT: u32 = 0;
pub const GLOBAL_BIT_MASK: Mask = 1 << GLOBAL_BIT_SHIFT;
const MAX_BITS: u32 = Mask::BITS;
const MAX_VALUE_BITS: u32 = 8;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
    pub struct FeatureFlags: u32 {
        /// Applies to every glyph by default.
        const GLOBAL = 0x01;
        /// Kept even when the font lacks it.
        const HAS_FALLBACK = 0x02;
        /// Lookups must not skip ZWNJ.
        const MANUAL_ZWNJ = 0x04;
        /// Lookups must not skip ZWJ.
        const MANUAL_ZWJ = 0x08;
        /// Search every script of the font when the chosen one lacks it.
        const GLOBAL_SEARCH = 0x10;
        const RANDOM = 0x20;
        /// Lookups may not match across syllables.
        const PER_SYLLABLE = 0x40;

        const MANUAL_JOINERS = Self::MANUAL_ZWNJ.bits() | Self::MANUAL_ZWJ.bits();
        const GLOBAL_MANUAL_JOINERS = Self::GLOBAL.bits() | Self::MANUAL_JOINERS.bits();
    }
}

/// Callback run between two lookup stages.
pub type PauseFunc = fn(&OtShapePlan, &Font, &mut Buffer);

/// Mask allocation of one compiled feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureMap {
    pub tag: Tag,
    pub stage: [usize; 2],
    pub shift: u32,
    pub mask: Mask,
    /// The mask of value 1, or zero when the feature got no bits.
    pub one_mask: Mask,
    pub needs_fallback: bool,
}

/// A lookup scheduled in some stage, with the glyphs it may act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LookupMap {
    pub index: u16,
    pub mask: Mask,
    pub auto_zwnj: bool,
    pub auto_zwj: bool,
    pub random: bool,
    pub per_syllable: bool,
    pub feature_tag: Tag,
}

/// End of a stage's lookups and the pause that follows them.
#[derive(Clone, Copy)]
pub struct StageMap {
    pub last_lookup: usize,
    pub pause_func: Option<PauseFunc>,
}

impl core::fmt::Debug for StageMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StageMap")
            .field("last_lookup", &self.last_lookup)
            .field("has_pause", &self.pause_func.is_some())
            .finish()
    }
}

/// Compiled, immutable feature and lookup schedule.
#[derive(Clone, Debug, Default)]
pub struct OtMap {
    global_mask: Mask,
    features: Vec<FeatureMap>,
    lookups: [Vec<LookupMap>; 2],
    stages: [Vec<StageMap>; 2],
    chosen_script: [Option<Tag>; 2],
    found_script: [bool; 2],
}

impl OtMap {
    pub fn global_mask(&self) -> Mask {
        self.global_mask
    }

    pub fn chosen_script(&self, table: TableIndex) -> Option<Tag> {
        self.chosen_script[table as usize]
    }

    pub fn found_script(&self, table: TableIndex) -> bool {
        self.found_script[table as usize]
    }

    fn feature(&self, tag: Tag) -> Option<&FeatureMap> {
        self.features
            .binary_search_by(|f| f.tag.cmp(&tag))
            .ok()
            .map(|index| &self.features[index])
    }

    /// Mask and shift of `tag`, or zero when it was not compiled in.
    pub fn get_mask(&self, tag: Tag) -> (Mask, u32) {
        self.feature(tag).map_or((0, 0), |f| (f.mask, f.shift))
    }

    pub fn get_1_mask(&self, tag: Tag) -> Mask {
        self.feature(tag).map_or(0, |f| f.one_mask)
    }

    pub fn needs_fallback(&self, tag: Tag) -> bool {
        self.feature(tag).is_some_and(|f| f.needs_fallback)
    }

    pub fn get_feature_stage(&self, table: TableIndex, tag: Tag) -> Option<usize> {
        self.feature(tag).map(|f| f.stage[table as usize])
    }

    pub fn stages(&self, table: TableIndex) -> &[StageMap] {
        &self.stages[table as usize]
    }

    pub fn lookups(&self, table: TableIndex) -> &[LookupMap] {
        &self.lookups[table as usize]
    }

    fn stage_range(&self, table: TableIndex, stage: usize) -> Range<usize> {
        let stages = &self.stages[table as usize];
        let lookups = &self.lookups[table as usize];
        let start = match stage {
            0 => 0,
            _ => stages.get(stage - 1).map_or(lookups.len(), |s| s.last_lookup),
        };
        let end = stages.get(stage).map_or(lookups.len(), |s| s.last_lookup);
        start.min(end)..end
    }

    /// Lookups scheduled in `stage`.
    pub fn get_stage_lookups(&self, table: TableIndex, stage: usize) -> &[LookupMap] {
        &self.lookups[table as usize][self.stage_range(table, stage)]
    }

    /// Applies every stage of `table`, running pauses in between.
    ///
    /// A lookup is skipped when its coverage digest cannot intersect the
    /// glyphs currently in the buffer.
    pub fn apply(&self, table: TableIndex, plan: &OtShapePlan, font: &Font, buffer: &mut Buffer) {
        let face = font.face();
        let mut digest = buffer_digest(buffer);
        for (stage_index, stage) in self.stages[table as usize].iter().enumerate() {
            for lookup in self.get_stage_lookups(table, stage_index) {
                if !face
                    .lookup_coverage(table, lookup.index)
                    .may_have_digest(&digest)
                {
                    continue;
                }
                face.apply_lookup(table, lookup, buffer);
                digest = buffer_digest(buffer);
            }
            if let Some(pause) = stage.pause_func {
                pause(plan, font, buffer);
                digest = buffer_digest(buffer);
            }
        }
    }
}

fn buffer_digest(buffer: &Buffer) -> SetDigest {
    buffer.info().iter().map(|info| info.codepoint).collect()
}

#[derive(Clone, Copy, Debug)]
struct FeatureInfo {
    tag: Tag,
    seq: usize,
    max_value: u32,
    flags: FeatureFlags,
    default_value: u32,
    stage: [usize; 2],
}

#[derive(Clone, Copy)]
struct StageInfo {
    index: usize,
    pause_func: Option<PauseFunc>,
}

/// Collects feature requests and pauses, then compiles them into an
/// [`OtMap`].
pub struct OtMapBuilder<'a> {
    face: &'a dyn Face,
    chosen_script: [Option<Tag>; 2],
    found_script: [bool; 2],
    variations_index: [Option<u32>; 2],
    current_stage: [usize; 2],
    feature_infos: Vec<FeatureInfo>,
    stages: [Vec<StageInfo>; 2],
}

impl<'a> OtMapBuilder<'a> {
    /// Picks, per table, the first of `script_tags` the face supports.
    pub fn new(face: &'a dyn Face, script_tags: &[Tag], variations_index: [Option<u32>; 2]) -> Self {
        let mut chosen_script = [None; 2];
        let mut found_script = [false; 2];
        for table in [TableIndex::Gsub, TableIndex::Gpos] {
            if let Some(tag) = script_tags.iter().find(|&&tag| face.has_script(table, tag)) {
                chosen_script[table as usize] = Some(*tag);
                found_script[table as usize] = true;
            }
        }
        Self {
            face,
            chosen_script,
            found_script,
            variations_index,
            current_stage: [0; 2],
            feature_infos: Vec::new(),
            stages: [Vec::new(), Vec::new()],
        }
    }

    pub fn chosen_script(&self, table: TableIndex) -> Option<Tag> {
        self.chosen_script[table as usize]
    }

    pub fn add_feature(&mut self, tag: Tag, flags: FeatureFlags, value: u32) {
        let seq = self.feature_infos.len();
        self.feature_infos.push(FeatureInfo {
            tag,
            seq,
            max_value: value,
            flags,
            default_value: if flags.contains(FeatureFlags::GLOBAL) {
                value
            } else {
                0
            },
            stage: self.current_stage,
        });
    }

    pub fn enable_feature(&mut self, tag: Tag, flags: FeatureFlags, value: u32) {
        self.add_feature(tag, flags | FeatureFlags::GLOBAL, value);
    }

    pub fn disable_feature(&mut self, tag: Tag) {
        self.add_feature(tag, FeatureFlags::GLOBAL, 0);
    }

    pub fn add_gsub_pause(&mut self, pause_func: Option<PauseFunc>) {
        self.add_pause(TableIndex::Gsub, pause_func);
    }

    pub fn add_gpos_pause(&mut self, pause_func: Option<PauseFunc>) {
        self.add_pause(TableIndex::Gpos, pause_func);
    }

    fn add_pause(&mut self, table: TableIndex, pause_func: Option<PauseFunc>) {
        let table = table as usize;
        self.stages[table].push(StageInfo {
            index: self.current_stage[table],
            pause_func,
        });
        self.current_stage[table] += 1;
    }

    pub fn compile(mut self) -> OtMap {
        // terminating stage so trailing lookups get a stage of their own
        self.add_gsub_pause(None);
        self.add_gpos_pause(None);

        let mut map = OtMap {
            global_mask: GLOBAL_BIT_MASK,
            chosen_script: self.chosen_script,
            found_script: self.found_script,
            ..OtMap::default()
        };

        // Merge repeated requests for one tag. A later global request wins
        // outright; otherwise the ranges of values are combined.
        self.feature_infos.sort_by_key(|info| (info.tag, info.seq));
        let mut merged: Vec<FeatureInfo> = Vec::with_capacity(self.feature_infos.len());
        for info in self.feature_infos {
            match merged.last_mut() {
                Some(last) if last.tag == info.tag => {
                    if info.flags.contains(FeatureFlags::GLOBAL) {
                        last.flags |= FeatureFlags::GLOBAL;
                        last.max_value = info.max_value;
                        last.default_value = info.default_value;
                    } else {
                        if last.flags.contains(FeatureFlags::GLOBAL) {
                            last.flags ^= FeatureFlags::GLOBAL;
                        }
                        last.max_value = last.max_value.max(info.max_value);
                    }
                    last.flags |= info.flags & FeatureFlags::HAS_FALLBACK;
                    last.stage[0] = last.stage[0].min(info.stage[0]);
                    last.stage[1] = last.stage[1].min(info.stage[1]);
                }
                _ => merged.push(info),
            }
        }

        let mut next_bit = GLOBAL_BIT_SHIFT + 1;
        let mut feature_lookups: Vec<([Vec<u16>; 2], FeatureFlags)> = Vec::new();

        for info in &merged {
            let bits_needed = if info.flags.contains(FeatureFlags::GLOBAL) && info.max_value == 1 {
                0
            } else {
                u32::BITS - info.max_value.leading_zeros()
            };

            if info.max_value == 0 || bits_needed > MAX_VALUE_BITS {
                continue;
            }

            let lookups = [TableIndex::Gsub, TableIndex::Gpos].map(|table| {
                let script = self.chosen_script[table as usize];
                let variations = self.variations_index[table as usize];
                let mut lookups = self.face.feature_lookups(table, script, info.tag, variations);
                if lookups.is_empty() && info.flags.contains(FeatureFlags::GLOBAL_SEARCH) {
                    lookups = self.face.feature_lookups(table, None, info.tag, variations);
                }
                lookups
            });
            let found = lookups.iter().any(|l| !l.is_empty());
            if !found && !info.flags.contains(FeatureFlags::HAS_FALLBACK) {
                continue;
            }

            if next_bit + bits_needed > MAX_BITS {
                log::warn!("ran out of mask bits for feature {}", info.tag);
                continue;
            }

            let (shift, mask) = if info.flags.contains(FeatureFlags::GLOBAL) && bits_needed == 0 {
                (GLOBAL_BIT_SHIFT, GLOBAL_BIT_MASK)
            } else {
                let shift = next_bit;
                let mask = ((1u64 << (next_bit + bits_needed)) - (1u64 << next_bit)) as Mask;
                next_bit += bits_needed;
                (shift, mask)
            };

            if info.flags.contains(FeatureFlags::GLOBAL) {
                map.global_mask |= (info.default_value << shift) & mask;
            }

            map.features.push(FeatureMap {
                tag: info.tag,
                stage: info.stage,
                shift,
                mask,
                one_mask: (1 << shift) & mask,
                needs_fallback: !found,
            });
            feature_lookups.push((lookups, info.flags));
        }

        for table in [TableIndex::Gsub, TableIndex::Gpos] {
            let t = table as usize;
            let mut stage_index = 0;
            let mut last_lookup = 0;
            for stage in 0..self.current_stage[t] {
                for (feature, (lookups, flags)) in map.features.iter().zip(&feature_lookups) {
                    if feature.stage[t] != stage {
                        continue;
                    }
                    for &index in &lookups[t] {
                        map.lookups[t].push(LookupMap {
                            index,
                            mask: feature.mask,
                            auto_zwnj: !flags.contains(FeatureFlags::MANUAL_ZWNJ),
                            auto_zwj: !flags.contains(FeatureFlags::MANUAL_ZWJ),
                            random: flags.contains(FeatureFlags::RANDOM),
                            per_syllable: flags.contains(FeatureFlags::PER_SYLLABLE),
                            feature_tag: feature.tag,
                        });
                    }
                }

                // one entry per lookup within a stage, in lookup order
                let stage_lookups = &mut map.lookups[t][last_lookup..];
                stage_lookups.sort_by_key(|l| l.index);
                let mut deduped: Vec<LookupMap> = Vec::with_capacity(stage_lookups.len());
                for lookup in stage_lookups.iter() {
                    match deduped.last_mut() {
                        Some(prev) if prev.index == lookup.index => {
                            prev.mask |= lookup.mask;
                            prev.auto_zwnj &= lookup.auto_zwnj;
                            prev.auto_zwj &= lookup.auto_zwj;
                        }
                        _ => deduped.push(*lookup),
                    }
                }
                map.lookups[t].truncate(last_lookup);
                map.lookups[t].extend(deduped);
                last_lookup = map.lookups[t].len();

                if let Some(info) = self.stages[t].get(stage_index) {
                    if info.index == stage {
                        map.stages[t].push(StageMap {
                            last_lookup,
                            pause_func: info.pause_func,
                        });
                        stage_index += 1;
                    }
                }
            }
        }

        log::debug!(
            "compiled map: {} features, {} gsub lookups in {} stages, {} gpos lookups",
            map.features.len(),
            map.lookups[0].len(),
            map.stages[0].len(),
            map.lookups[1].len()
        );

        map
    }
}

#[cfg(test)]
mod test {
    use super::{FeatureFlags, OtMapBuilder, GLOBAL_BIT_MASK};
    use crate::{Face, FaceCapabilities, NormalizedCoord, TableIndex, Tag};

    struct LayoutFace;

    impl Face for LayoutFace {
        fn capabilities(&self) -> FaceCapabilities {
            FaceCapabilities::OUTLINES | FaceCapabilities::LAYOUT
        }

        fn nominal_glyph(&self, c: char) -> Option<u32> {
            Some(c as u32)
        }

        fn glyph_h_advance(&self, _glyph: u32, _coords: &[NormalizedCoord]) -> i32 {
            0
        }

        fn has_script(&self, _table: TableIndex, script: Tag) -> bool {
            script == Tag::new(b"dev2")
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
            match &feature.to_be_bytes() {
                b"ccmp" => vec![0],
                b"rphf" => vec![1],
                b"half" => vec![2, 3],
                b"liga" => vec![4],
                b"aalt" => vec![5],
                _ => Vec::new(),
            }
        }
    }

    #[test]
    fn chooses_supported_script() {
        let face = LayoutFace;
        let builder = OtMapBuilder::new(&face, &[Tag::new(b"dev2"), Tag::new(b"deva")], [None; 2]);
        assert_eq!(builder.chosen_script(TableIndex::Gsub), Some(Tag::new(b"dev2")));
        let builder = OtMapBuilder::new(&face, &[Tag::new(b"deva")], [None; 2]);
        assert_eq!(builder.chosen_script(TableIndex::Gsub), None);
    }

    #[test]
    fn allocates_masks() {
        let face = LayoutFace;
        let mut builder = OtMapBuilder::new(&face, &[Tag::new(b"dev2")], [None; 2]);
        builder.enable_feature(Tag::new(b"ccmp"), FeatureFlags::empty(), 1);
        builder.add_feature(Tag::new(b"rphf"), FeatureFlags::MANUAL_JOINERS, 1);
        builder.add_feature(Tag::new(b"half"), FeatureFlags::MANUAL_JOINERS, 1);
        builder.add_feature(Tag::new(b"aalt"), FeatureFlags::GLOBAL, 3);
        builder.add_feature(Tag::new(b"zzzz"), FeatureFlags::empty(), 1);
        let map = builder.compile();

        assert_eq!(map.get_mask(Tag::new(b"ccmp")).0, GLOBAL_BIT_MASK);
        let rphf = map.get_1_mask(Tag::new(b"rphf"));
        let half = map.get_1_mask(Tag::new(b"half"));
        assert_ne!(rphf, 0);
        assert_ne!(half, 0);
        assert_eq!(rphf & half, 0);
        assert_eq!(rphf & map.global_mask(), 0);
        // absent from the font and without fallback
        assert_eq!(map.get_1_mask(Tag::new(b"zzzz")), 0);

        let (aalt_mask, aalt_shift) = map.get_mask(Tag::new(b"aalt"));
        assert_eq!(aalt_mask.count_ones(), 2);
        assert_eq!(map.global_mask() & aalt_mask, 3 << aalt_shift);
    }

    #[test]
    fn disable_overrides() {
        let face = LayoutFace;
        let mut builder = OtMapBuilder::new(&face, &[], [None; 2]);
        builder.enable_feature(Tag::new(b"liga"), FeatureFlags::empty(), 1);
        builder.disable_feature(Tag::new(b"liga"));
        let map = builder.compile();
        assert_eq!(map.get_1_mask(Tag::new(b"liga")), 0);
        assert!(map.lookups(TableIndex::Gsub).is_empty());
    }

    #[test]
    fn stages_follow_pauses() {
        fn noop(_: &crate::OtShapePlan, _: &crate::Font, _: &mut crate::Buffer) {}

        let face = LayoutFace;
        let mut builder = OtMapBuilder::new(&face, &[Tag::new(b"dev2")], [None; 2]);
        builder.enable_feature(Tag::new(b"ccmp"), FeatureFlags::empty(), 1);
        builder.add_gsub_pause(Some(noop));
        builder.add_feature(Tag::new(b"rphf"), FeatureFlags::MANUAL_JOINERS, 1);
        builder.add_gsub_pause(None);
        builder.add_feature(Tag::new(b"half"), FeatureFlags::MANUAL_JOINERS, 1);
        let map = builder.compile();

        let stage = map.get_feature_stage(TableIndex::Gsub, Tag::new(b"rphf")).unwrap();
        assert_eq!(stage, 1);
        let rphf: Vec<u16> = map
            .get_stage_lookups(TableIndex::Gsub, stage)
            .iter()
            .map(|l| l.index)
            .collect();
        assert_eq!(rphf, vec![1]);
        let half_stage = map.get_feature_stage(TableIndex::Gsub, Tag::new(b"half")).unwrap();
        let half: Vec<u16> = map
            .get_stage_lookups(TableIndex::Gsub, half_stage)
            .iter()
            .map(|l| l.index)
            .collect();
        assert_eq!(half, vec![2, 3]);
        assert!(map.stages(TableIndex::Gsub)[0].pause_func.is_some());
        assert_eq!(map.stages(TableIndex::Gsub).len(), 3);
    }
}
