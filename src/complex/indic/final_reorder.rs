// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    category as cat, flag, is_consonant, is_halant, is_joiner, is_one_of, position as pos,
    IndicShapePlan, RephPosition, INIT, PREF,
};
use crate::{Buffer, GlyphInfo, Script, UnicodeProps};

/// A way of choosing where the reph goes. Returns the index the reph is
/// moved to, if this rule applies.
type RephFinder<'p> = fn(&FinalReorderingPass<'p>, &[GlyphInfo], usize, usize, usize) -> Option<usize>;

/// Moves pre-base matras, reph and pre-base-reordering consonants once the
/// basic forms have been substituted.
pub(crate) struct FinalReorderingPass<'a> {
    plan: &'a IndicShapePlan,
    virama_glyph: u32,
    script: Script,
}

impl<'a> FinalReorderingPass<'a> {
    pub(crate) fn new(plan: &'a IndicShapePlan, virama_glyph: u32, script: Script) -> Self {
        Self {
            plan,
            virama_glyph,
            script,
        }
    }

    fn has_half_forms(&self) -> bool {
        // the 'half' glyphs of these are chillus or ligated explicit viramas
        !matches!(self.script, Script::Malayalam | Script::Tamil)
    }

    pub(crate) fn reorder_syllable(&self, buffer: &mut Buffer, start: usize, end: usize) {
        self.repair_virama(buffer, start, end);

        let pref_mask = self.plan.mask_array[PREF];
        let mut try_pref = pref_mask != 0;
        let mut base = self.find_base(buffer, start, end, &mut try_pref);

        self.reorder_matras(buffer, start, end, &mut base);
        self.reorder_reph(buffer, start, end, &mut base);
        if try_pref && base + 1 < end {
            self.reorder_pref(buffer, start, end, base);
        }

        // 'init' applies to a left matra only at a word start
        if buffer.info[start].complex_aux == pos::PRE_M {
            if start == 0
                || !buffer.info[start - 1]
                    .unicode
                    .contains(UnicodeProps::WORD_CHAR)
            {
                buffer.info[start].mask |= self.plan.mask_array[INIT];
            } else {
                buffer.unsafe_to_break(start - 1, start + 1);
            }
        }

        // Uniscribe merges whole syllables, except in Tamil and Sinhala
        if self.plan.uniscribe_bug_compatible
            && !matches!(self.script, Script::Tamil | Script::Sinhala)
        {
            buffer.merge_clusters(start, end);
        }
    }

    /// Substitutions may hand back the virama glyph as part of a ligature
    /// that was multiplied again. Such a glyph is a halant.
    fn repair_virama(&self, buffer: &mut Buffer, start: usize, end: usize) {
        if self.virama_glyph == 0 {
            return;
        }
        for info in &mut buffer.info[start..end] {
            if info.codepoint == self.virama_glyph && info.is_ligated() && info.is_multiplied() {
                info.complex_category = cat::H;
                info.clear_ligated_and_multiplied();
            }
        }
    }

    fn find_base(&self, buffer: &mut Buffer, start: usize, end: usize, try_pref: &mut bool) -> usize {
        let pref_mask = self.plan.mask_array[PREF];
        let info = &mut buffer.info;

        let mut base = start;
        while base < end {
            if info[base].complex_aux < pos::BASE_C {
                base += 1;
                continue;
            }

            if *try_pref && base + 1 < end {
                if let Some(i) = (base + 1..end).find(|&i| info[i].mask & pref_mask != 0) {
                    // a pref candidate that formed nothing: the base is
                    // right after it
                    if !info[i].is_substituted() && info[i].is_ligated_and_didnt_multiply() {
                        base = i;
                        while base < end && is_halant(&info[base]) {
                            base += 1;
                        }
                        if base < end {
                            info[base].complex_aux = pos::BASE_C;
                        }
                        *try_pref = false;
                    }
                }
            }

            // Malayalam: skip unformed below forms, but not post forms
            if self.script == Script::Malayalam {
                let mut i = base + 1;
                while i < end {
                    while i < end && is_joiner(&info[i]) {
                        i += 1;
                    }
                    if i == end || !is_halant(&info[i]) {
                        break;
                    }
                    i += 1;
                    while i < end && is_joiner(&info[i]) {
                        i += 1;
                    }
                    if i < end && is_consonant(&info[i]) && info[i].complex_aux == pos::BELOW_C {
                        base = i;
                        info[base].complex_aux = pos::BASE_C;
                    }
                    i += 1;
                }
            }

            if start < base && base < end && info[base].complex_aux > pos::BASE_C {
                base -= 1;
            }
            break;
        }

        if base == end && start < base && is_one_of(&info[base - 1], flag(cat::ZWJ)) {
            base -= 1;
        }
        if base < end {
            while start < base && is_one_of(&info[base], flag(cat::N) | flag(cat::H)) {
                base -= 1;
            }
        }
        base
    }

    /// Moves a pre-base matra right after the last standalone halant
    /// before the base.
    ///
    /// A halant followed by ZWJ keeps the search going. Halant,ZWNJ never
    /// reaches here since it ends the syllable.
    fn reorder_matras(&self, buffer: &mut Buffer, start: usize, end: usize, base: &mut usize) {
        if start + 1 >= end || start >= *base {
            return;
        }

        // if the base was lost, use the position before the last glyph
        let mut new_pos = if *base == end { *base - 2 } else { *base - 1 };

        if self.has_half_forms() {
            let info = &buffer.info;
            loop {
                while new_pos > start && !is_one_of(&info[new_pos], flag(cat::M) | flag(cat::H)) {
                    new_pos -= 1;
                }
                // only a halant that isn't the matra's own counts
                if is_halant(&info[new_pos]) && info[new_pos].complex_aux != pos::PRE_M {
                    if new_pos + 1 < end
                        && info[new_pos + 1].complex_category == cat::ZWJ
                        && new_pos > start
                    {
                        new_pos -= 1;
                        continue;
                    }
                } else {
                    new_pos = start;
                }
                break;
            }
        }

        if start < new_pos && buffer.info[new_pos].complex_aux != pos::PRE_M {
            for i in (start + 1..=new_pos).rev() {
                if buffer.info[i - 1].complex_aux != pos::PRE_M {
                    continue;
                }
                let old_pos = i - 1;
                if old_pos < *base && *base <= new_pos {
                    *base -= 1;
                }
                buffer.info[old_pos..=new_pos].rotate_left(1);
                // merged after the move, spanning up to the base
                buffer.merge_clusters(new_pos, end.min(*base + 1));
                new_pos -= 1;
            }
        } else if let Some(i) = (start..*base).find(|&i| buffer.info[i].complex_aux == pos::PRE_M) {
            buffer.merge_clusters(i, end.min(*base + 1));
        }
    }

    /// Moves a formed reph to its script's position.
    ///
    /// A reph encoded as Ra,H moves only if it ligated. A logical Repha
    /// moves only if it did not, since a ligature means the font placed it.
    fn reorder_reph(&self, buffer: &mut Buffer, start: usize, end: usize, base: &mut usize) {
        let first = &buffer.info[start];
        if start + 1 >= end
            || first.complex_aux != pos::RA_TO_BECOME_REPH
            || (first.complex_category == cat::REPHA) == first.is_ligated_and_didnt_multiply()
        {
            return;
        }

        let reph_pos = self.plan.config.reph_pos;
        let finders: [(bool, RephFinder<'a>); 4] = [
            (true, Self::reph_after_halant),
            (reph_pos == RephPosition::AfterMain, Self::reph_after_main),
            (reph_pos == RephPosition::AfterSub, Self::reph_after_sub),
            (true, Self::reph_at_end),
        ];
        let new_reph_pos = finders
            .iter()
            .filter(|(applies, _)| *applies)
            .find_map(|(_, finder)| finder(self, &buffer.info, start, end, *base))
            .unwrap_or(end - 1);

        buffer.merge_clusters(start, new_reph_pos + 1);
        buffer.info[start..=new_reph_pos].rotate_left(1);
        if start < *base && *base <= new_reph_pos {
            *base -= 1;
        }
    }

    /// After the first explicit halant between reph and base, and after a
    /// joiner following it.
    fn reph_after_halant(&self, info: &[GlyphInfo], start: usize, _end: usize, base: usize) -> Option<usize> {
        let mut target = start + 1;
        while target < base && !is_halant(&info[target]) {
            target += 1;
        }
        if target >= base {
            return None;
        }
        if target + 1 < base && is_joiner(&info[target + 1]) {
            target += 1;
        }
        Some(target)
    }

    /// After the main consonant and anything attached to it.
    fn reph_after_main(&self, info: &[GlyphInfo], _start: usize, end: usize, base: usize) -> Option<usize> {
        let mut target = base;
        while target + 1 < end && info[target + 1].complex_aux <= pos::AFTER_MAIN {
            target += 1;
        }
        (target < end).then_some(target)
    }

    /// Before the first post-base consonant, post matra or modifier.
    fn reph_after_sub(&self, info: &[GlyphInfo], _start: usize, end: usize, base: usize) -> Option<usize> {
        const STOP: u32 = flag(pos::POST_C) | flag(pos::AFTER_POST) | flag(pos::SMVD);
        let mut target = base;
        while target + 1 < end && flag(info[target + 1].complex_aux) & STOP == 0 {
            target += 1;
        }
        (target < end).then_some(target)
    }

    /// End of the syllable, before trailing modifiers.
    fn reph_at_end(&self, info: &[GlyphInfo], start: usize, end: usize, base: usize) -> Option<usize> {
        let mut target = end - 1;
        while target > start && info[target].complex_aux == pos::SMVD {
            target -= 1;
        }
        // Ending after Matra,Halant, go before the halant so the reph can
        // interact with the matra. Uniscribe does not do this.
        if !self.plan.uniscribe_bug_compatible && is_halant(&info[target]) {
            for i in base + 1..target {
                if info[i].complex_category == cat::M {
                    target -= 1;
                }
            }
        }
        Some(target)
    }

    /// Moves a pre-base-reordering consonant that ligated in front of the
    /// base, at the same spot a pre-base matra would go.
    fn reorder_pref(&self, buffer: &mut Buffer, start: usize, end: usize, base: usize) {
        let pref_mask = self.plan.mask_array[PREF];
        let Some(old_pos) = (base + 1..end).find(|&i| buffer.info[i].mask & pref_mask != 0) else {
            return;
        };
        // only reorder a glyph the feature actually produced
        if !buffer.info[old_pos].is_ligated_and_didnt_multiply() {
            return;
        }

        let info = &buffer.info;
        let mut new_pos = base;
        if self.has_half_forms() {
            while new_pos > start && !is_one_of(&info[new_pos - 1], flag(cat::M) | flag(cat::H)) {
                new_pos -= 1;
            }
        }
        if new_pos > start && is_halant(&info[new_pos - 1]) && new_pos < end && is_joiner(&info[new_pos]) {
            new_pos += 1;
        }

        buffer.merge_clusters(new_pos, old_pos + 1);
        buffer.info[new_pos..=old_pos].rotate_right(1);
    }
}
