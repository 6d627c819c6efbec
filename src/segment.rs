// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;

pub use unicode_script::Script;

/// Text flow direction of a segment.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Invalid,
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::LeftToRight | Self::RightToLeft)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::TopToBottom | Self::BottomToTop)
    }

    /// Backward directions store glyphs opposite to logical order.
    pub fn is_backward(self) -> bool {
        matches!(self, Self::RightToLeft | Self::BottomToTop)
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::Invalid => Self::Invalid,
            Self::LeftToRight => Self::RightToLeft,
            Self::RightToLeft => Self::LeftToRight,
            Self::TopToBottom => Self::BottomToTop,
            Self::BottomToTop => Self::TopToBottom,
        }
    }

    /// Horizontal direction a script is written in.
    pub fn from_script(script: Script) -> Self {
        match script {
            Script::Adlam
            | Script::Arabic
            | Script::Avestan
            | Script::Cypriot
            | Script::Hanifi_Rohingya
            | Script::Hatran
            | Script::Hebrew
            | Script::Imperial_Aramaic
            | Script::Inscriptional_Pahlavi
            | Script::Inscriptional_Parthian
            | Script::Kharoshthi
            | Script::Lydian
            | Script::Mandaic
            | Script::Manichaean
            | Script::Mende_Kikakui
            | Script::Nabataean
            | Script::Nko
            | Script::Old_Hungarian
            | Script::Old_North_Arabian
            | Script::Old_South_Arabian
            | Script::Old_Turkic
            | Script::Palmyrene
            | Script::Phoenician
            | Script::Psalter_Pahlavi
            | Script::Samaritan
            | Script::Syriac
            | Script::Thaana => Self::RightToLeft,
            _ => Self::LeftToRight,
        }
    }
}

/// BCP 47 language tag, stored lowercase.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Language(String);

impl Language {
    pub fn new(tag: &str) -> Self {
        Self(tag.trim().replace('_', "-").to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary subtag, such as `sa` for `sa-Deva-IN`.
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or("")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction, script and language of a run of text.
///
/// Two segments shape identically only if all three match, so this is part of
/// every shape plan key.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct SegmentProperties {
    pub direction: Direction,
    pub script: Script,
    pub language: Option<Language>,
}

impl SegmentProperties {
    pub fn new() -> Self {
        Self {
            direction: Direction::Invalid,
            script: Script::Unknown,
            language: None,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn script(mut self, script: Script) -> Self {
        self.script = script;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

impl Default for SegmentProperties {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::{Direction, Language, Script, SegmentProperties};

    #[test]
    fn directions() {
        assert!(Direction::RightToLeft.is_backward());
        assert!(!Direction::LeftToRight.is_backward());
        assert!(Direction::TopToBottom.is_vertical());
        assert_eq!(Direction::BottomToTop.reverse(), Direction::TopToBottom);
        assert_eq!(Direction::from_script(Script::Hebrew), Direction::RightToLeft);
        assert_eq!(
            Direction::from_script(Script::Devanagari),
            Direction::LeftToRight
        );
    }

    #[test]
    fn language_folding() {
        let lang = Language::new("sa_Deva-IN");
        assert_eq!(lang.as_str(), "sa-deva-in");
        assert_eq!(lang.primary(), "sa");
        assert_eq!(Language::new("HI"), Language::new("hi"));
    }

    #[test]
    fn builder() {
        let props = SegmentProperties::new()
            .direction(Direction::LeftToRight)
            .script(Script::Devanagari)
            .language(Language::new("hi"));
        assert_eq!(props.script, Script::Devanagari);
        assert_ne!(props, SegmentProperties::new());
    }
}
