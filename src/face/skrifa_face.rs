// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use self_cell::self_cell;
use skrifa::{
    instance::{LocationRef, Size},
    raw::{
        tables::layout::{Condition, ConditionSet, FeatureList, FeatureVariations, ScriptList},
        FontRef, ReadError, TableProvider,
    },
    GlyphId, MetadataProvider,
};

use super::{Face, FaceCapabilities, NormalizedCoord, TableIndex};
use crate::Tag;

self_cell!(
    struct OwnedFontRef {
        owner: Arc<[u8]>,

        #[covariant]
        dependent: FontRef,
    }

    impl {}
);

/// [`Face`] over font data read with `skrifa`.
///
/// Provides the character map, metrics, table presence and OpenType
/// script/feature/lookup enumeration. Lookups are not executed: wrap this
/// face and forward to a layout engine for `would_substitute` and
/// `apply_lookup`.
pub struct SkrifaFace {
    font: OwnedFontRef,
    capabilities: FaceCapabilities,
    units_per_em: u16,
}

impl SkrifaFace {
    pub fn new(data: Arc<[u8]>, index: u32) -> Option<Self> {
        let font = match OwnedFontRef::try_new(data, |data| FontRef::from_index(data, index)) {
            Ok(font) => font,
            Err(err) => {
                log::warn!("failed to read font face {}: {}", index, err);
                return None;
            }
        };

        let (capabilities, units_per_em) = {
            let font_ref = font.borrow_dependent();
            let has = |tag: &[u8; 4]| font_ref.table_data(Tag::new(tag)).is_some();
            let mut capabilities = FaceCapabilities::LAYOUT;
            if has(b"Silf") {
                capabilities |= FaceCapabilities::GRAPHITE;
            }
            if has(b"glyf") || has(b"CFF ") || has(b"CFF2") {
                capabilities |= FaceCapabilities::OUTLINES;
            }
            let units_per_em = font_ref
                .head()
                .map(|head| head.units_per_em())
                .unwrap_or(1000);
            (capabilities, units_per_em)
        };

        Some(Self {
            font,
            capabilities,
            units_per_em,
        })
    }

    fn font_ref(&self) -> &FontRef<'_> {
        self.font.borrow_dependent()
    }

    fn layout_lists(&self, table: TableIndex) -> Option<LayoutLists<'_>> {
        let font = self.font_ref();
        let lists = match table {
            TableIndex::Gsub => {
                let gsub = font.gsub().ok()?;
                LayoutLists {
                    scripts: gsub.script_list().ok()?,
                    features: gsub.feature_list().ok()?,
                    variations: gsub.feature_variations().and_then(Result::ok),
                }
            }
            TableIndex::Gpos => {
                let gpos = font.gpos().ok()?;
                LayoutLists {
                    scripts: gpos.script_list().ok()?,
                    features: gpos.feature_list().ok()?,
                    variations: gpos.feature_variations().and_then(Result::ok),
                }
            }
        };
        Some(lists)
    }
}

struct LayoutLists<'a> {
    scripts: ScriptList<'a>,
    features: FeatureList<'a>,
    variations: Option<FeatureVariations<'a>>,
}

impl LayoutLists<'_> {
    /// Feature indices of the default language system of `script`, falling
    /// back to `DFLT`.
    fn feature_indices(&self, script: Option<Tag>) -> Vec<u16> {
        let records = self.scripts.script_records();
        let record = script
            .and_then(|tag| records.iter().find(|r| r.script_tag() == tag))
            .or_else(|| records.iter().find(|r| r.script_tag() == Tag::new(b"DFLT")));
        let Some(record) = record else {
            return Vec::new();
        };
        let Ok(script) = record.script(self.scripts.offset_data()) else {
            return Vec::new();
        };
        let Some(Ok(lang_sys)) = script.default_lang_sys() else {
            return Vec::new();
        };
        let mut indices: Vec<u16> = lang_sys.feature_indices().iter().map(|i| i.get()).collect();
        let required = lang_sys.required_feature_index();
        if required != 0xFFFF {
            indices.push(required);
        }
        indices
    }

    /// Lookups of feature `index`, honoring a substitution from the active
    /// feature variation record.
    fn lookups(&self, index: u16, variations_index: Option<u32>) -> Option<Vec<u16>> {
        if let (Some(variations), Some(record_index)) = (&self.variations, variations_index) {
            let record = variations
                .feature_variation_records()
                .get(record_index as usize)?;
            if let Some(Ok(substitution)) =
                record.feature_table_substitution(variations.offset_data())
            {
                for sub in substitution.substitutions() {
                    if sub.feature_index() == index {
                        let feature = sub.alternate_feature(substitution.offset_data()).ok()?;
                        return Some(feature.lookup_list_indices().iter().map(|i| i.get()).collect());
                    }
                }
            }
        }
        let record = self.features.feature_records().get(index as usize)?;
        let feature = record.feature(self.features.offset_data()).ok()?;
        Some(feature.lookup_list_indices().iter().map(|i| i.get()).collect())
    }
}

impl Face for SkrifaFace {
    fn capabilities(&self) -> FaceCapabilities {
        self.capabilities
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn nominal_glyph(&self, c: char) -> Option<u32> {
        self.font_ref().charmap().map(c).map(GlyphId::to_u32)
    }

    fn glyph_h_advance(&self, glyph: u32, coords: &[NormalizedCoord]) -> i32 {
        self.font_ref()
            .glyph_metrics(Size::unscaled(), LocationRef::new(coords))
            .advance_width(GlyphId::new(glyph))
            .map(|advance| advance.round() as i32)
            .unwrap_or(0)
    }

    fn feature_variations_index(&self, table: TableIndex, coords: &[NormalizedCoord]) -> Option<u32> {
        let variations = self.layout_lists(table)?.variations?;
        variations
            .feature_variation_records()
            .iter()
            .position(|record| {
                conditions_match(record.condition_set(variations.offset_data()), coords)
            })
            .map(|index| index as u32)
    }

    fn has_script(&self, table: TableIndex, script: Tag) -> bool {
        self.layout_lists(table).is_some_and(|lists| {
            lists
                .scripts
                .script_records()
                .iter()
                .any(|r| r.script_tag() == script)
        })
    }

    fn feature_lookups(
        &self,
        table: TableIndex,
        script: Option<Tag>,
        feature: Tag,
        variations_index: Option<u32>,
    ) -> Vec<u16> {
        let Some(lists) = self.layout_lists(table) else {
            return Vec::new();
        };
        let records = lists.features.feature_records();
        let mut lookups = Vec::new();
        for index in lists.feature_indices(script) {
            let Some(record) = records.get(index as usize) else {
                continue;
            };
            if record.feature_tag() != feature {
                continue;
            }
            if let Some(indices) = lists.lookups(index, variations_index) {
                lookups.extend(indices);
            }
        }
        lookups.sort_unstable();
        lookups.dedup();
        lookups
    }
}

impl core::fmt::Debug for SkrifaFace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SkrifaFace")
            .field("capabilities", &self.capabilities)
            .field("units_per_em", &self.units_per_em)
            .finish_non_exhaustive()
    }
}

/// A record without a condition set always matches; an unreadable one
/// never does.
fn conditions_match(
    condition_set: Option<Result<ConditionSet<'_>, ReadError>>,
    coords: &[NormalizedCoord],
) -> bool {
    let condition_set = match condition_set {
        None => return true,
        Some(Ok(condition_set)) => condition_set,
        Some(Err(err)) => {
            log::debug!("skipping unreadable condition set: {}", err);
            return false;
        }
    };
    condition_set.conditions().iter().all(|condition| match condition {
        Ok(Condition::Format1AxisRange(range)) => {
            let coord = coords
                .get(range.axis_index() as usize)
                .copied()
                .unwrap_or(NormalizedCoord::ZERO);
            coord >= range.filter_range_min_value() && coord <= range.filter_range_max_value()
        }
        _ => false,
    })
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use skrifa::raw::ReadError;

    use super::{conditions_match, SkrifaFace};

    #[test]
    fn unreadable_conditions_never_match() {
        assert!(conditions_match(None, &[]));
        assert!(!conditions_match(Some(Err(ReadError::OutOfBounds)), &[]));
    }

    #[test]
    fn rejects_garbage() {
        let data: Arc<[u8]> = Arc::from(&b"definitely not a font"[..]);
        assert!(SkrifaFace::new(data, 0).is_none());
    }
}
