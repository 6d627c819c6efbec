// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    category as cat, flag, is_consonant, is_joiner, is_one_of, machine::SyllableType,
    position as pos, BasePosition, BlwfMode, IndicShapePlan, RephMode, ABVF, BLWF, HALF,
    JOINER_FLAGS, MEDIAL_FLAGS, PREF, PSTF, RPHF,
};
use crate::{Buffer, Face, Script};

/// Tags, sorts and masks syllables before the basic features run.
pub(crate) struct InitialReorderingPass<'a> {
    plan: &'a IndicShapePlan,
    face: &'a dyn Face,
    script: Script,
}

impl<'a> InitialReorderingPass<'a> {
    pub(crate) fn new(plan: &'a IndicShapePlan, face: &'a dyn Face, script: Script) -> Self {
        Self { plan, face, script }
    }

    pub(crate) fn reorder_syllable(&self, buffer: &mut Buffer, start: usize, end: usize) {
        // vowels and placeholders were classified as consonants, so every
        // kind goes through the consonant logic
        match SyllableType::of(buffer.info[start].syllable) {
            Some(SyllableType::ConsonantSyllable | SyllableType::VowelSyllable) => {
                self.consonant_syllable(buffer, start, end);
            }
            Some(SyllableType::BrokenCluster | SyllableType::StandaloneCluster) => {
                self.standalone_cluster(buffer, start, end);
            }
            _ => {}
        }
    }

    fn standalone_cluster(&self, buffer: &mut Buffer, start: usize, end: usize) {
        // Uniscribe leaves a cluster ending in a dotted circle alone, so no
        // reph forms
        if self.plan.uniscribe_bug_compatible
            && buffer.info[end - 1].complex_category == cat::DOTTED_CIRCLE
        {
            return;
        }
        self.consonant_syllable(buffer, start, end);
    }

    fn consonant_syllable(&self, buffer: &mut Buffer, start: usize, end: usize) {
        // legacy Kannada input: Ra,H,ZWJ behaves as Ra,ZWJ,H
        if self.script == Script::Kannada
            && start + 3 <= end
            && is_one_of(&buffer.info[start], flag(cat::RA))
            && is_one_of(&buffer.info[start + 1], flag(cat::H))
            && is_one_of(&buffer.info[start + 2], flag(cat::ZWJ))
        {
            buffer.merge_clusters(start + 1, start + 3);
            buffer.info.swap(start + 1, start + 2);
        }

        let (base, has_reph) = self.find_base(buffer, start, end);
        self.tag_positions(buffer, start, end, base, has_reph);
        if self.plan.is_old_spec {
            self.move_old_spec_halant(buffer, base, end);
        }
        attach_misc_marks(buffer, start, end);
        own_post_base_marks(buffer, base, end);
        let base = self.sort_syllable(buffer, start, end);
        self.setup_masks(buffer, start, end, base);
        self.mark_pref(buffer, base, end);
        self.apply_joiners(buffer, start, end);
    }

    /// Index of the base consonant, or `end` if none was found, and whether
    /// the syllable begins with a reph.
    fn find_base(&self, buffer: &mut Buffer, start: usize, end: usize) -> (usize, bool) {
        let config = self.plan.config;
        let info = &mut buffer.info;

        let mut base = end;
        let mut has_reph = false;
        let mut limit = start;

        if self.plan.mask_array[RPHF] != 0
            && start + 3 <= end
            && ((config.reph_mode == RephMode::Implicit && !is_joiner(&info[start + 2]))
                || (config.reph_mode == RephMode::Explicit
                    && info[start + 2].complex_category == cat::ZWJ))
        {
            let glyphs = [
                info[start].codepoint,
                info[start + 1].codepoint,
                info[start + 2].codepoint,
            ];
            if self.plan.rphf.would_substitute(&glyphs[..2], self.face)
                || (config.reph_mode == RephMode::Explicit
                    && self.plan.rphf.would_substitute(&glyphs, self.face))
            {
                limit += 2;
                while limit < end && is_joiner(&info[limit]) {
                    limit += 1;
                }
                base = start;
                has_reph = true;
            }
        } else if config.reph_mode == RephMode::LogRepha
            && info[start].complex_category == cat::REPHA
        {
            limit += 1;
            while limit < end && is_joiner(&info[limit]) {
                limit += 1;
            }
            base = start;
            has_reph = true;
        }

        match config.base_pos {
            BasePosition::Last => {
                // Walk back to a consonant without a below or post form.
                // Post forms only count once a below form has been seen.
                let mut i = end;
                let mut seen_below = false;
                loop {
                    i -= 1;
                    if is_consonant(&info[i]) {
                        let position = info[i].complex_aux;
                        if position != pos::BELOW_C && (position != pos::POST_C || seen_below) {
                            base = i;
                            break;
                        }
                        if position == pos::BELOW_C {
                            seen_below = true;
                        }
                        base = i;
                    } else if start < i
                        && info[i].complex_category == cat::ZWJ
                        && info[i - 1].complex_category == cat::H
                    {
                        // Halant,ZWJ asks for an explicit half form
                        break;
                    }
                    if i <= limit {
                        break;
                    }
                }
            }
            BasePosition::LastSinhala => {
                if !has_reph {
                    base = limit;
                }
                // last consonant not preceded by ZWJ, which asks for a
                // subjoined form
                for i in limit..end {
                    if is_consonant(&info[i]) {
                        if limit < i && info[i - 1].complex_category == cat::ZWJ {
                            break;
                        }
                        base = i;
                    }
                }
                for glyph in info.iter_mut().take(end).skip(base + 1) {
                    if is_consonant(glyph) {
                        glyph.complex_aux = pos::BELOW_C;
                    }
                }
            }
        }

        // an unforced reph with no other consonant stays a plain Ra
        if has_reph && base == start && limit - base <= 2 {
            has_reph = false;
        }

        (base, has_reph)
    }

    fn tag_positions(&self, buffer: &mut Buffer, start: usize, end: usize, base: usize, has_reph: bool) {
        let info = &mut buffer.info;

        for glyph in &mut info[start..base] {
            glyph.complex_aux = glyph.complex_aux.min(pos::PRE_C);
        }
        if base < end {
            info[base].complex_aux = pos::BASE_C;
        }

        // a consonant after a matra is final
        if let Some(matra) = (base + 1..end).find(|&i| info[i].complex_category == cat::M) {
            if let Some(consonant) = (matra + 1..end).find(|&j| is_consonant(&info[j])) {
                info[consonant].complex_aux = pos::FINAL_C;
            }
        }

        if has_reph {
            info[start].complex_aux = pos::RA_TO_BECOME_REPH;
        }
    }

    /// Old-spec fonts expect the first post-base halant after the last
    /// consonant. Kannada only moves it when no halant is already there.
    fn move_old_spec_halant(&self, buffer: &mut Buffer, base: usize, end: usize) {
        let info = &mut buffer.info;
        let disallow_double_halants = self.script == Script::Kannada;

        let Some(i) = (base + 1..end).find(|&i| info[i].complex_category == cat::H) else {
            return;
        };
        let mut j = end - 1;
        while j > i {
            if is_consonant(&info[j])
                || (disallow_double_halants && info[j].complex_category == cat::H)
            {
                break;
            }
            j -= 1;
        }
        if info[j].complex_category != cat::H && j > i {
            info[i..=j].rotate_left(1);
        }
    }

    /// Stable sort by position. Returns the new base index.
    fn sort_syllable(&self, buffer: &mut Buffer, start: usize, end: usize) -> usize {
        // the syllable byte holds each glyph's original offset meanwhile
        let syllable = buffer.info[start].syllable;
        for (offset, info) in buffer.info[start..end].iter_mut().enumerate() {
            info.syllable = offset as u8;
        }

        buffer.info[start..end].sort_by_key(|info| info.complex_aux);

        let base = (start..end)
            .find(|&i| buffer.info[i].complex_aux == pos::BASE_C)
            .unwrap_or(end);

        // Post-base glyphs may have been shuffled. Merge the clusters of
        // every permutation cycle instead of the whole tail, so cursor
        // positions survive. Old-spec halant moves and syllables too long
        // for the offset byte take the coarse route.
        if self.plan.is_old_spec || end - start > 127 {
            buffer.merge_clusters(base, end);
        } else {
            for i in base..end {
                if buffer.info[i].syllable == 255 {
                    continue;
                }
                let mut max = i;
                let mut j = start + usize::from(buffer.info[i].syllable);
                while j != i {
                    max = max.max(j);
                    let next = start + usize::from(buffer.info[j].syllable);
                    buffer.info[j].syllable = 255;
                    j = next;
                }
                if i != max {
                    buffer.merge_clusters(i, max + 1);
                }
            }
        }

        for info in &mut buffer.info[start..end] {
            info.syllable = syllable;
        }

        base
    }

    fn setup_masks(&self, buffer: &mut Buffer, start: usize, end: usize, base: usize) {
        let masks = &self.plan.mask_array;
        let info = &mut buffer.info;

        for glyph in info[start..end]
            .iter_mut()
            .take_while(|g| g.complex_aux == pos::RA_TO_BECOME_REPH)
        {
            glyph.mask |= masks[RPHF];
        }

        let mut pre_base = masks[HALF];
        if !self.plan.is_old_spec && self.plan.config.blwf_mode == BlwfMode::PreAndPost {
            pre_base |= masks[BLWF];
        }
        for glyph in &mut info[start..base] {
            glyph.mask |= pre_base;
        }

        let post_base = masks[BLWF] | masks[ABVF] | masks[PSTF];
        for glyph in info.iter_mut().take(end).skip(base + 1) {
            glyph.mask |= post_base;
        }

        // Old-spec eyelash Ra: Ra,H before the base also takes blwf unless
        // a ZWJ asks for the eyelash form explicitly.
        if self.plan.is_old_spec && self.script == Script::Devanagari {
            let mut i = start;
            while i + 1 < base {
                if info[i].complex_category == cat::RA
                    && info[i + 1].complex_category == cat::H
                    && (i + 2 == base || info[i + 2].complex_category != cat::ZWJ)
                {
                    info[i].mask |= masks[BLWF];
                    info[i + 1].mask |= masks[BLWF];
                }
                i += 1;
            }
        }
    }

    /// Marks a post-base Halant,Ra pair the font turns into a pre-base
    /// reordering form.
    fn mark_pref(&self, buffer: &mut Buffer, base: usize, end: usize) {
        const PREF_LEN: usize = 2;

        let pref_mask = self.plan.mask_array[PREF];
        if pref_mask == 0 || base + PREF_LEN >= end {
            return;
        }
        let info = &mut buffer.info;
        for i in base + 1..=end - PREF_LEN {
            let glyphs = [info[i].codepoint, info[i + 1].codepoint];
            if self.plan.pref.would_substitute(&glyphs, self.face) {
                for glyph in &mut info[i..i + PREF_LEN] {
                    glyph.mask |= pref_mask;
                }
                return;
            }
        }
    }

    /// A ZWNJ disables half forms back to the previous consonant. ZWJ and
    /// ZWNJ block `cjct` just by being present.
    fn apply_joiners(&self, buffer: &mut Buffer, start: usize, end: usize) {
        let half = self.plan.mask_array[HALF];
        let info = &mut buffer.info;
        for i in start + 1..end {
            if !is_joiner(&info[i]) {
                continue;
            }
            let non_joiner = info[i].complex_category == cat::ZWNJ;
            let mut j = i;
            loop {
                j -= 1;
                if non_joiner {
                    info[j].mask &= !half;
                }
                if j <= start || is_consonant(&info[j]) {
                    break;
                }
            }
        }
    }
}

/// Joiners, nuktas, medials and halants take the position of the glyph
/// before them so they travel with it.
fn attach_misc_marks(buffer: &mut Buffer, start: usize, end: usize) {
    let info = &mut buffer.info;

    let mut last_pos = pos::START;
    for i in start..end {
        let category = flag(info[i].complex_category);
        if category & (JOINER_FLAGS | flag(cat::N) | flag(cat::RS) | MEDIAL_FLAGS | flag(cat::H)) != 0
        {
            info[i].complex_aux = last_pos;
            // Uniscribe does not move a halant with a left matra
            if info[i].complex_category == cat::H && info[i].complex_aux == pos::PRE_M {
                if let Some(j) = (start..i).rev().find(|&j| info[j].complex_aux != pos::PRE_M) {
                    info[i].complex_aux = info[j].complex_aux;
                }
            }
        } else if info[i].complex_aux != pos::SMVD {
            last_pos = info[i].complex_aux;
        }
    }
}

/// Post-base consonants own everything since the previous consonant or
/// matra.
fn own_post_base_marks(buffer: &mut Buffer, base: usize, end: usize) {
    let info = &mut buffer.info;
    let mut last = base;
    for i in base + 1..end {
        if is_consonant(&info[i]) {
            let position = info[i].complex_aux;
            for glyph in &mut info[last + 1..i] {
                if glyph.complex_aux < pos::SMVD {
                    glyph.complex_aux = position;
                }
            }
            last = i;
        } else if info[i].complex_category == cat::M {
            last = i;
        }
    }
}
