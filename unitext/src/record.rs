// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::props::{BidiClass, GeneralCategory, GraphemeBreakProp, LineBreakProp, WordBreakProp};

/// Everything known about one code point.
///
/// Records are plain values compared by content. The lookup tables store each distinct record
/// once and map code points to it by index.
///
/// The derived ordering compares fields in declaration order; it is the total order used when
/// de-duplicating records.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "datagen", derive(databake::Bake))]
#[cfg_attr(feature = "datagen", databake(path = unitext))]
pub struct CharRecord {
    /// Simple uppercase mapping, or 0 if the code point maps to itself.
    pub upper: u32,
    /// Simple lowercase mapping, or 0 if the code point maps to itself.
    pub lower: u32,
    /// Simple titlecase mapping, or 0 if the code point maps to itself.
    pub title: u32,
    /// Decimal digit value, 0 for non-digits.
    pub digit: u8,
    /// General category.
    pub category: GeneralCategory,
    /// Grapheme cluster break property.
    pub grapheme_break: GraphemeBreakProp,
    /// Line break class.
    pub line_break: LineBreakProp,
    /// Word break property.
    pub word_break: WordBreakProp,
    /// Bidirectional class.
    pub bidi_class: BidiClass,
    /// Kangxi radical number. Reserved, always 0 in the shipped tables.
    pub kangxi_radical: u8,
    /// Residual stroke count. Reserved, always 0 in the shipped tables.
    pub residual_strokes: u8,
}

impl CharRecord {
    /// The record shared by every unassigned code point. Always stored at index 0.
    pub const UNASSIGNED: Self = Self {
        upper: 0,
        lower: 0,
        title: 0,
        digit: 0,
        category: GeneralCategory::Unassigned,
        grapheme_break: GraphemeBreakProp::Other,
        line_break: LineBreakProp::Unknown,
        word_break: WordBreakProp::Other,
        bidi_class: BidiClass::OtherNeutral,
        kangxi_radical: 0,
        residual_strokes: 0,
    };

    /// Returns `true` for the unassigned sentinel.
    #[inline]
    pub fn is_unassigned(&self) -> bool {
        *self == Self::UNASSIGNED
    }
}

impl Default for CharRecord {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}
