// SPDX-License-Identifier: MIT OR Apache-2.0

use core::{fmt, ops::Range, str::FromStr};

pub use skrifa::Tag;

pub const FEATURE_GLOBAL_START: u32 = 0;
pub const FEATURE_GLOBAL_END: u32 = u32::MAX;

/// A requested OpenType feature setting over a half-open cluster range.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Feature {
    pub tag: Tag,
    pub value: u32,
    pub start: u32,
    pub end: u32,
}

impl Feature {
    pub fn new(tag: Tag, value: u32, range: Range<u32>) -> Self {
        Self {
            tag,
            value,
            start: range.start,
            end: range.end,
        }
    }

    /// A feature applying to the whole buffer.
    pub fn global(tag: Tag, value: u32) -> Self {
        Self::new(tag, value, FEATURE_GLOBAL_START..FEATURE_GLOBAL_END)
    }

    pub fn is_global(&self) -> bool {
        self.start == FEATURE_GLOBAL_START && self.end == FEATURE_GLOBAL_END
    }

    /// Collapses an explicit range into the `[1, 2)` marker used for plan
    /// identity. Global bounds are left alone.
    pub(crate) fn normalized(mut self) -> Self {
        if self.start != FEATURE_GLOBAL_START {
            self.start = 1;
        }
        if self.end != FEATURE_GLOBAL_END {
            self.end = 2;
        }
        self
    }
}

/// Returned when a feature string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFeatureError(String);

impl fmt::Display for ParseFeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid feature string {:?}", self.0)
    }
}

impl std::error::Error for ParseFeatureError {}

impl FromStr for Feature {
    type Err = ParseFeatureError;

    /// Parses `kern`, `+kern`, `-liga`, `aalt=2`, `liga[3:5]=0`, `liga[3]` and
    /// `smcp=on` style settings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseFeatureError(s.to_string());
        let mut rest = s.trim();

        let mut value = 1;
        if let Some(stripped) = rest.strip_prefix('-') {
            value = 0;
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('+') {
            rest = stripped;
        }

        let tag_end = rest
            .find(|c: char| c == '[' || c == '=')
            .unwrap_or(rest.len());
        let (tag_str, mut rest) = rest.split_at(tag_end);
        let tag_str = tag_str.trim().trim_matches(|c| c == '"' || c == '\'');
        if tag_str.is_empty() || tag_str.len() > 4 || !tag_str.is_ascii() {
            return Err(err());
        }
        let mut tag_bytes = [b' '; 4];
        tag_bytes[..tag_str.len()].copy_from_slice(tag_str.as_bytes());
        let tag = Tag::new(&tag_bytes);

        let mut start = FEATURE_GLOBAL_START;
        let mut end = FEATURE_GLOBAL_END;
        if let Some(stripped) = rest.strip_prefix('[') {
            let close = stripped.find(']').ok_or_else(err)?;
            let range = &stripped[..close];
            rest = &stripped[close + 1..];
            match range.split_once(':') {
                Some((a, b)) => {
                    if !a.trim().is_empty() {
                        start = a.trim().parse().map_err(|_| err())?;
                    }
                    if !b.trim().is_empty() {
                        end = b.trim().parse().map_err(|_| err())?;
                    }
                }
                None if !range.trim().is_empty() => {
                    start = range.trim().parse().map_err(|_| err())?;
                    end = start.checked_add(1).ok_or_else(err)?;
                }
                None => {}
            }
        }

        if let Some(stripped) = rest.strip_prefix('=') {
            value = match stripped.trim() {
                "on" | "true" => 1,
                "off" | "false" => 0,
                number => number.parse().map_err(|_| err())?,
            };
        } else if !rest.trim().is_empty() {
            return Err(err());
        }

        Ok(Self {
            tag,
            value,
            start,
            end,
        })
    }
}
