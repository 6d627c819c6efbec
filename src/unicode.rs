// SPDX-License-Identifier: MIT OR Apache-2.0

use bitflags::bitflags;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_segmentation::UnicodeSegmentation;

bitflags! {
    /// Character properties recorded once when the buffer is filled.
    #[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
    pub struct UnicodeProps: u8 {
        /// Letter, mark, format, private-use or unassigned character.
        const WORD_CHAR = 0x01;
        /// Continues the grapheme started by an earlier character.
        const CONTINUATION = 0x02;
        /// Zero-width format control such as ZWJ or ZWNJ.
        const FORMAT = 0x04;
    }
}

impl UnicodeProps {
    /// Properties of `c` taken on its own.
    ///
    /// Without surrounding text only marks and ZWJ count as continuations.
    pub fn of(c: char) -> Self {
        use GeneralCategory as Gc;

        match get_general_category(c) {
            Gc::Format if c == '\u{200D}' => Self::FORMAT | Self::WORD_CHAR | Self::CONTINUATION,
            Gc::Format => Self::FORMAT | Self::WORD_CHAR,
            Gc::NonspacingMark | Gc::SpacingMark | Gc::EnclosingMark => {
                Self::CONTINUATION | Self::WORD_CHAR
            }
            Gc::LowercaseLetter
            | Gc::ModifierLetter
            | Gc::OtherLetter
            | Gc::TitlecaseLetter
            | Gc::UppercaseLetter
            | Gc::PrivateUse
            | Gc::Surrogate
            | Gc::Unassigned => Self::WORD_CHAR,
            _ => Self::empty(),
        }
    }

    /// Classifies every character of `text` with its byte offset.
    ///
    /// Continuation follows extended grapheme cluster boundaries.
    pub fn for_text(text: &str) -> impl Iterator<Item = (usize, char, Self)> + '_ {
        text.grapheme_indices(true).flat_map(|(start, grapheme)| {
            grapheme.char_indices().map(move |(offset, c)| {
                let mut props = Self::of(c);
                props.set(Self::CONTINUATION, offset != 0);
                (start + offset, c, props)
            })
        })
    }
}

#[cfg(test)]
mod test {
    use super::UnicodeProps;

    fn continuations(text: &str) -> Vec<bool> {
        UnicodeProps::for_text(text)
            .map(|(_, _, props)| props.contains(UnicodeProps::CONTINUATION))
            .collect()
    }

    #[test]
    fn classify() {
        assert!(UnicodeProps::of('क').contains(UnicodeProps::WORD_CHAR));
        assert!(!UnicodeProps::of('क').contains(UnicodeProps::CONTINUATION));
        assert!(UnicodeProps::of('\u{094D}').contains(UnicodeProps::CONTINUATION));
        assert!(UnicodeProps::of('\u{093F}').contains(UnicodeProps::CONTINUATION));
        assert!(UnicodeProps::of('\u{0E31}').contains(UnicodeProps::CONTINUATION));
        assert!(UnicodeProps::of('\u{0301}').contains(UnicodeProps::WORD_CHAR));
        assert!(UnicodeProps::of('\u{200D}').contains(UnicodeProps::FORMAT));
        assert!(UnicodeProps::of('\u{E000}').contains(UnicodeProps::WORD_CHAR));
        assert!(!UnicodeProps::of(' ').contains(UnicodeProps::WORD_CHAR));
        assert!(!UnicodeProps::of('1').contains(UnicodeProps::WORD_CHAR));
        assert!(!UnicodeProps::of('.').intersects(UnicodeProps::all()));
    }

    #[test]
    fn grapheme_continuations() {
        // thai, khmer, hangul jamo, emoji modifier
        assert_eq!(continuations("\u{0E01}\u{0E31}"), [false, true]);
        assert_eq!(continuations("\u{1780}\u{17B6}"), [false, true]);
        assert_eq!(continuations("\u{1100}\u{1161}"), [false, true]);
        assert_eq!(continuations("\u{1F44D}\u{1F3FD}"), [false, true]);
        assert_eq!(continuations("ab"), [false, false]);
        // a leading mark starts its own grapheme
        assert_eq!(continuations("\u{0301}a"), [false, false]);
    }

    #[test]
    fn byte_offsets() {
        let offsets: Vec<usize> = UnicodeProps::for_text("a\u{0E01}\u{0E31}")
            .map(|(offset, _, _)| offset)
            .collect();
        assert_eq!(offsets, [0, 1, 4]);
    }
}
