// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Weak;

use crate::{
    shape_fallback, Buffer, ContentType, Face, FaceId, Feature, Font, OtShapePlan,
    SegmentProperties, ShaperKind, TableIndex,
};

/// Everything that decides whether a cached plan can be reused.
///
/// User features are stored normalized: a ranged feature only remembers
/// that it is ranged, so plans are shared across different ranges of the
/// same features.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ShapePlanKey {
    pub props: SegmentProperties,
    pub user_features: Vec<Feature>,
    /// Feature variation records chosen for GSUB and GPOS.
    pub variations_index: [Option<u32>; 2],
    /// `None` when no requested shaper can handle the face.
    pub shaper: Option<ShaperKind>,
}

impl ShapePlanKey {
    pub fn new(
        font: &Font,
        props: &SegmentProperties,
        user_features: &[Feature],
        shaper_list: Option<&[&str]>,
    ) -> Self {
        let face = font.face();
        let variations_index = [TableIndex::Gsub, TableIndex::Gpos]
            .map(|table| face.feature_variations_index(table, font.coords()));
        Self {
            props: props.clone(),
            user_features: user_features.iter().map(|f| f.normalized()).collect(),
            variations_index,
            shaper: ShaperKind::select(face.capabilities(), shaper_list),
        }
    }
}

/// A reusable shaping decision for one face.
///
/// Plans hold their face weakly; a plan outliving its face can no longer
/// be executed.
pub struct ShapePlan {
    face: Weak<dyn Face>,
    face_id: FaceId,
    key: ShapePlanKey,
    ot: Option<OtShapePlan>,
}

impl ShapePlan {
    pub fn new(
        font: &Font,
        props: &SegmentProperties,
        user_features: &[Feature],
        shaper_list: Option<&[&str]>,
    ) -> Self {
        Self::from_key(font, ShapePlanKey::new(font, props, user_features, shaper_list))
    }

    pub(crate) fn from_key(font: &Font, key: ShapePlanKey) -> Self {
        let ot = (key.shaper == Some(ShaperKind::OpenType)).then(|| {
            OtShapePlan::new(
                font.face(),
                &key.props,
                &key.user_features,
                key.variations_index,
            )
        });
        log::debug!(
            "plan for {:?} {:?}: shaper {:?}, {} user features",
            font.id(),
            key.props.script,
            key.shaper,
            key.user_features.len()
        );
        Self {
            face: font.downgrade(),
            face_id: font.id(),
            key,
            ot,
        }
    }

    pub fn key(&self) -> &ShapePlanKey {
        &self.key
    }

    pub fn shaper(&self) -> Option<ShaperKind> {
        self.key.shaper
    }

    pub fn face_id(&self) -> FaceId {
        self.face_id
    }

    /// Whether the face this plan was built for still exists.
    pub fn is_face_alive(&self) -> bool {
        self.face.strong_count() > 0
    }

    pub fn ot_plan(&self) -> Option<&OtShapePlan> {
        self.ot.as_ref()
    }

    /// Shapes `buffer` with the plan's shaper.
    ///
    /// Returns `false` only when the plan has no shaper. A shaper that fails
    /// or turns text into nothing is replaced by the fallback shaper.
    pub fn execute(&self, font: &Font, buffer: &mut Buffer, features: &[Feature]) -> bool {
        let Some(kind) = self.key.shaper else {
            log::warn!("no shaper available for {:?}", self.face_id);
            return false;
        };
        if font.id() != self.face_id {
            log::warn!("plan for {:?} executed with {:?}", self.face_id, font.id());
        }

        let input = buffer.info.clone();
        let shaped = match (kind, &self.ot) {
            (ShaperKind::Graphite, _) => font.face().shape_graphite(font, buffer, features),
            (ShaperKind::OpenType, Some(plan)) => {
                plan.execute(font, buffer, features);
                true
            }
            (ShaperKind::OpenType, None) => false,
            (ShaperKind::Fallback, _) => {
                shape_fallback(font, buffer);
                true
            }
        };

        if !shaped || (buffer.is_empty() && !input.is_empty()) {
            log::warn!(
                "{:?} shaper produced no glyphs for {} characters, using fallback",
                kind,
                input.len()
            );
            buffer.replace_info(input);
            buffer.set_content_type(ContentType::Unicode);
            shape_fallback(font, buffer);
        }
        buffer.set_content_type(ContentType::Glyphs);
        true
    }
}

impl core::fmt::Debug for ShapePlan {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShapePlan")
            .field("face_id", &self.face_id)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
