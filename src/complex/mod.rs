// SPDX-License-Identifier: MIT OR Apache-2.0

//! Script-specific shaping hooks run by the OpenType shaper.

pub(crate) mod indic;
pub(crate) mod syllabic;

use crate::{Buffer, OtMap, OtMapBuilder, Script, SegmentProperties};

use self::indic::IndicShapePlan;

/// Script-specific behavior selected for a plan.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum ComplexShaper {
    /// No script-specific processing.
    #[default]
    Default,
    /// Syllable-based reordering for the Brahmic scripts of India and Sri Lanka.
    Indic,
}

impl ComplexShaper {
    pub fn for_script(script: Script) -> Self {
        match script {
            Script::Devanagari
            | Script::Bengali
            | Script::Gurmukhi
            | Script::Gujarati
            | Script::Oriya
            | Script::Tamil
            | Script::Telugu
            | Script::Kannada
            | Script::Malayalam
            | Script::Sinhala => Self::Indic,
            _ => Self::Default,
        }
    }

    pub(crate) fn collect_features(self, builder: &mut OtMapBuilder<'_>) {
        match self {
            Self::Default => {}
            Self::Indic => indic::collect_features(builder),
        }
    }

    pub(crate) fn override_features(self, builder: &mut OtMapBuilder<'_>) {
        match self {
            Self::Default => {}
            Self::Indic => indic::override_features(builder),
        }
    }

    pub(crate) fn create_data(self, map: &OtMap, props: &SegmentProperties) -> ComplexData {
        match self {
            Self::Default => ComplexData::None,
            Self::Indic => ComplexData::Indic(IndicShapePlan::new(map, props)),
        }
    }

    pub(crate) fn preprocess_text(self, buffer: &mut Buffer) {
        match self {
            Self::Default => {}
            Self::Indic => indic::preprocess_text(buffer),
        }
    }

    pub(crate) fn setup_masks(self, buffer: &mut Buffer) {
        match self {
            Self::Default => {}
            Self::Indic => indic::setup_masks(buffer),
        }
    }
}

/// Per-plan state owned by the selected [`ComplexShaper`].
#[derive(Debug)]
pub(crate) enum ComplexData {
    None,
    Indic(IndicShapePlan),
}
