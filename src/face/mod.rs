// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Weak,
};

use bitflags::bitflags;
pub use skrifa::instance::NormalizedCoord;

use crate::{Buffer, Feature, LookupMap, SetDigest, Tag};

pub use self::skrifa_face::*;
mod skrifa_face;

bitflags! {
    /// Shaping backends a face can drive.
    #[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
    pub struct FaceCapabilities: u8 {
        /// Graphite smart-font tables are present.
        const GRAPHITE = 0x01;
        /// TrueType or CFF outlines are present.
        const OUTLINES = 0x02;
        /// The face answers OpenType layout queries.
        const LAYOUT = 0x04;
    }
}

/// The two OpenType layout tables.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TableIndex {
    Gsub = 0,
    Gpos = 1,
}

/// Parsed font face consumed by the shaper.
///
/// Only the character map and advances are required. Layout methods default to
/// "nothing available", which is what a face without GSUB/GPOS reports.
/// Lookup execution is the implementor's job: the shaper stages lookups and
/// calls [`Face::apply_lookup`] with the masks it has assigned.
pub trait Face: Send + Sync {
    fn capabilities(&self) -> FaceCapabilities;

    fn units_per_em(&self) -> u16 {
        1000
    }

    fn nominal_glyph(&self, c: char) -> Option<u32>;

    fn glyph_h_advance(&self, glyph: u32, coords: &[NormalizedCoord]) -> i32;

    fn glyph_v_advance(&self, _glyph: u32, _coords: &[NormalizedCoord]) -> i32 {
        -i32::from(self.units_per_em())
    }

    /// Index of the feature variation record matching `coords`, if any.
    fn feature_variations_index(&self, _table: TableIndex, _coords: &[NormalizedCoord]) -> Option<u32> {
        None
    }

    fn has_script(&self, _table: TableIndex, _script: Tag) -> bool {
        false
    }

    /// Lookup indices of `feature` under `script` (or the default script).
    fn feature_lookups(
        &self,
        _table: TableIndex,
        _script: Option<Tag>,
        _feature: Tag,
        _variations_index: Option<u32>,
    ) -> Vec<u16> {
        Vec::new()
    }

    /// Glyphs a lookup may match. Defaults to everything.
    fn lookup_coverage(&self, _table: TableIndex, _lookup_index: u16) -> SetDigest {
        SetDigest::FULL
    }

    /// Whether a GSUB lookup would substitute exactly `glyphs`.
    ///
    /// With `zero_context` set, rules needing context outside `glyphs` must not
    /// match.
    fn would_substitute(&self, _lookup_index: u16, _glyphs: &[u32], _zero_context: bool) -> bool {
        false
    }

    /// Applies one lookup to every glyph whose mask intersects `lookup.mask`.
    fn apply_lookup(&self, _table: TableIndex, _lookup: &LookupMap, _buffer: &mut Buffer) {}

    /// Runs a Graphite engine over `buffer`. Faces without one return `false`.
    fn shape_graphite(&self, _font: &Font, _buffer: &mut Buffer, _features: &[Feature]) -> bool {
        false
    }
}

/// Identity of a face for plan caching.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FaceId(u64);

impl FaceId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A face together with the variation coordinates it is shaped at.
///
/// Clones share the face and its [`FaceId`].
#[derive(Clone)]
pub struct Font {
    id: FaceId,
    face: Arc<dyn Face>,
    coords: Vec<NormalizedCoord>,
}

impl Font {
    pub fn new(face: Arc<dyn Face>) -> Self {
        Self {
            id: FaceId::next(),
            face,
            coords: Vec::new(),
        }
    }

    /// Same face and identity at other normalized coordinates.
    pub fn with_coords(&self, coords: Vec<NormalizedCoord>) -> Self {
        Self {
            id: self.id,
            face: self.face.clone(),
            coords,
        }
    }

    pub fn id(&self) -> FaceId {
        self.id
    }

    pub fn face(&self) -> &dyn Face {
        &*self.face
    }

    pub fn coords(&self) -> &[NormalizedCoord] {
        &self.coords
    }

    pub(crate) fn downgrade(&self) -> Weak<dyn Face> {
        Arc::downgrade(&self.face)
    }

    pub fn nominal_glyph(&self, c: char) -> Option<u32> {
        self.face.nominal_glyph(c)
    }
}

impl core::fmt::Debug for Font {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Font")
            .field("id", &self.id)
            .field("coords", &self.coords)
            .finish_non_exhaustive()
    }
}
