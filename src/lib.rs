// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Indic Shaper
//!
//! This library turns runs of Unicode text into positioned glyphs. It provides shape plans that
//! are built once per face, segment and feature set and then cached, a dispatch between Graphite,
//! OpenType and a metrics-only fallback, and the Indic syllable engine that reorders Brahmic
//! clusters around the font's GSUB lookups. Fonts are reached through the [`Face`] trait; the
//! [`SkrifaFace`] adapter implements it over real font files with skrifa.
//!
//! ```
//! use std::sync::Arc;
//! use indic_shaper::{shape, Buffer, Face, FaceCapabilities, Font, NormalizedCoord};
//!
//! // A face that knows only its character map and advances
//! struct Monospace;
//!
//! impl Face for Monospace {
//!     fn capabilities(&self) -> FaceCapabilities {
//!         FaceCapabilities::OUTLINES
//!     }
//!
//!     fn nominal_glyph(&self, c: char) -> Option<u32> {
//!         c.is_ascii().then_some(c as u32)
//!     }
//!
//!     fn glyph_h_advance(&self, _glyph: u32, _coords: &[NormalizedCoord]) -> i32 {
//!         600
//!     }
//! }
//!
//! // A Font is a shared handle to a face, with its identity for plan caching
//! let font = Font::new(Arc::new(Monospace));
//!
//! // Segment properties are guessed from the text when left unset
//! let mut buffer = Buffer::new().push_str("Hello");
//! assert!(shape(&font, &mut buffer, &[]));
//!
//! for (info, pos) in buffer.info().iter().zip(buffer.positions()) {
//!     println!("glyph {} cluster {} advance {}", info.codepoint, info.cluster, pos.x_advance);
//! }
//! ```

pub use self::buffer::*;
mod buffer;

pub use self::complex::ComplexShaper;
mod complex;

pub use self::face::*;
mod face;

pub use self::feature::*;
mod feature;

pub use self::ot_map::*;
mod ot_map;

pub use self::ot_shape::*;
mod ot_shape;

pub use self::segment::*;
mod segment;

pub use self::set_digest::*;
mod set_digest;

pub use self::shape_plan::*;
mod shape_plan;

pub use self::shape_plan_cache::*;
mod shape_plan_cache;

pub use self::shaper::*;
mod shaper;

pub use self::unicode::*;
mod unicode;
