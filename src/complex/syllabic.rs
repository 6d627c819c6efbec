// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers shared by shapers that segment text into syllables.

use crate::{Buffer, BufferFlags, Font, GlyphInfo, OtShapePlan};

const DOTTED_CIRCLE: char = '\u{25CC}';

/// Gives every broken syllable a U+25CC base to attach its marks to.
///
/// The circle goes after any leading repha of the syllable and shares the
/// cluster and mask of the syllable's first glyph. Nothing is inserted when
/// the buffer forbids it or the font lacks the glyph.
pub(crate) fn insert_dotted_circles(
    font: &Font,
    buffer: &mut Buffer,
    broken_type: u8,
    dotted_category: u8,
    repha_category: Option<u8>,
    position: Option<u8>,
) {
    if buffer
        .get_flags()
        .contains(BufferFlags::DO_NOT_INSERT_DOTTED_CIRCLE)
    {
        return;
    }

    let is_broken = |info: &GlyphInfo| info.syllable & 0x0F == broken_type;
    if !buffer.info.iter().any(is_broken) {
        return;
    }

    let Some(glyph) = font.nominal_glyph(DOTTED_CIRCLE) else {
        log::warn!("{:?} has no dotted circle glyph, broken clusters stay bare", font.id());
        return;
    };

    let mut circle = GlyphInfo::new(DOTTED_CIRCLE, 0);
    circle.codepoint = glyph;
    circle.complex_category = dotted_category;
    if let Some(position) = position {
        circle.complex_aux = position;
    }

    let input = std::mem::take(&mut buffer.info);
    let mut output = Vec::with_capacity(input.len() + 1);
    let mut last_syllable = 0;
    let mut glyphs = input.into_iter().peekable();
    while let Some(info) = glyphs.next() {
        let syllable = info.syllable;
        if last_syllable == syllable || !is_broken(&info) {
            output.push(info);
            continue;
        }
        last_syllable = syllable;

        let inserted = GlyphInfo {
            cluster: info.cluster,
            mask: info.mask,
            syllable,
            ..circle
        };

        let mut pending = Some(info);
        if let Some(repha) = repha_category {
            while let Some(leading) = pending.filter(|info| info.complex_category == repha) {
                output.push(leading);
                pending = glyphs.next_if(|next| next.syllable == syllable);
            }
        }
        output.push(inserted);
        output.extend(pending);
    }

    log::trace!("inserted dotted circles, {} glyphs now", output.len());
    buffer.replace_info(output);
}

/// Pause that forgets syllables once the reordering features are done.
pub(crate) fn clear_syllables(_plan: &OtShapePlan, _font: &Font, buffer: &mut Buffer) {
    buffer.clear_syllables();
}
