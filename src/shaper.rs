// SPDX-License-Identifier: MIT OR Apache-2.0

use core::{fmt, str::FromStr};
use std::sync::Arc;

use crate::{
    Buffer, ContentType, Direction, FaceCapabilities, Feature, Font, PlanCache,
    SegmentProperties, ShapePlan,
};

/// Shaping backends, in the order they are tried.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ShaperKind {
    Graphite,
    OpenType,
    /// Nominal glyphs and advances only. Works with any face.
    Fallback,
}

impl ShaperKind {
    pub const ALL: [Self; 3] = [Self::Graphite, Self::OpenType, Self::Fallback];

    pub fn name(self) -> &'static str {
        match self {
            Self::Graphite => "graphite2",
            Self::OpenType => "ot",
            Self::Fallback => "fallback",
        }
    }

    pub fn is_supported(self, capabilities: FaceCapabilities) -> bool {
        match self {
            Self::Graphite => capabilities.contains(FaceCapabilities::GRAPHITE),
            Self::OpenType => {
                capabilities.contains(FaceCapabilities::OUTLINES | FaceCapabilities::LAYOUT)
            }
            Self::Fallback => true,
        }
    }

    /// First shaper of `shaper_list` (or of [`ShaperKind::ALL`]) that can
    /// handle a face. Unknown names are skipped.
    pub fn select(capabilities: FaceCapabilities, shaper_list: Option<&[&str]>) -> Option<Self> {
        let Some(list) = shaper_list else {
            return Self::ALL
                .into_iter()
                .find(|kind| kind.is_supported(capabilities));
        };
        list.iter()
            .filter_map(|name| match name.parse::<Self>() {
                Ok(kind) => Some(kind),
                Err(err) => {
                    log::warn!("{}, skipping it", err);
                    None
                }
            })
            .find(|kind| kind.is_supported(capabilities))
    }
}

impl fmt::Display for ShaperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownShaper(pub String);

impl fmt::Display for UnknownShaper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shaper {:?}", self.0)
    }
}

impl std::error::Error for UnknownShaper {}

impl FromStr for ShaperKind {
    type Err = UnknownShaper;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownShaper(s.to_string()))
    }
}

/// Maps characters to nominal glyphs and sets their advances.
///
/// Missing characters become glyph 0. Backward directions are reversed.
pub fn shape_fallback(font: &Font, buffer: &mut Buffer) {
    let face = font.face();
    let direction = buffer.props().direction;

    for info in &mut buffer.info {
        info.codepoint = info
            .as_char()
            .and_then(|c| face.nominal_glyph(c))
            .unwrap_or(0);
    }

    buffer.clear_positions();
    for (info, pos) in buffer.info.iter().zip(&mut buffer.pos) {
        if direction.is_vertical() {
            pos.y_advance = face.glyph_v_advance(info.codepoint, font.coords());
        } else {
            pos.x_advance = face.glyph_h_advance(info.codepoint, font.coords());
        }
    }

    if direction.is_backward() {
        buffer.reverse();
    }
    buffer.set_content_type(ContentType::Glyphs);
}

/// Plan for `font` from the process-wide [`PlanCache`], built on first use.
pub fn shape_plan_create_cached(
    font: &Font,
    props: &SegmentProperties,
    user_features: &[Feature],
    shaper_list: Option<&[&str]>,
) -> Arc<ShapePlan> {
    PlanCache::global().get_or_create(font, props, user_features, shaper_list)
}

/// Shapes `buffer` with the first backend that can handle `font`.
///
/// Missing segment properties are guessed from the text first.
pub fn shape(font: &Font, buffer: &mut Buffer, features: &[Feature]) -> bool {
    shape_full(font, buffer, features, None)
}

/// Like [`shape`], restricted to the named shapers in order of preference.
///
/// Returns `false` when none of them can handle `font`; the buffer is left
/// untouched then.
pub fn shape_full(
    font: &Font,
    buffer: &mut Buffer,
    features: &[Feature],
    shaper_list: Option<&[&str]>,
) -> bool {
    if buffer.content_type() == ContentType::Glyphs {
        log::warn!("buffer already holds glyphs, not shaping it again");
        return false;
    }
    if buffer.props().direction == Direction::Invalid {
        buffer.guess_segment_properties();
    }

    let plan = shape_plan_create_cached(font, buffer.props(), features, shaper_list);
    plan.execute(font, buffer, features)
}

#[cfg(test)]
mod test {
    use super::ShaperKind;
    use crate::FaceCapabilities;

    #[test]
    fn names() {
        for kind in ShaperKind::ALL {
            assert_eq!(kind.name().parse::<ShaperKind>(), Ok(kind));
        }
        let err = "uniscribe".parse::<ShaperKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown shaper \"uniscribe\"");
    }

    #[test]
    fn selection_order() {
        let all = FaceCapabilities::all();
        let ot = FaceCapabilities::OUTLINES | FaceCapabilities::LAYOUT;
        assert_eq!(ShaperKind::select(all, None), Some(ShaperKind::Graphite));
        assert_eq!(ShaperKind::select(ot, None), Some(ShaperKind::OpenType));
        assert_eq!(
            ShaperKind::select(FaceCapabilities::OUTLINES, None),
            Some(ShaperKind::Fallback)
        );
        assert_eq!(
            ShaperKind::select(all, Some(&["bogus", "ot", "graphite2"])),
            Some(ShaperKind::OpenType)
        );
        assert_eq!(ShaperKind::select(ot, Some(&["graphite2"])), None);
    }
}
