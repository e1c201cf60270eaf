// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `unitext` is a small Unicode text core: UTF-8 and UTF-16 codecs, a compact per-code-point
//! property table, and grapheme, word and line segmentation.
//!
//! Every property of a code point lives in one [`CharRecord`], found with a single three-level
//! table lookup through [`CharData`]. The segmentation algorithms work on slices of break
//! properties, so they can run on any text representation.
//!
//! ## Features
//!
//! - `std` (enabled by default): required by `compiled_data`.
//! - `compiled_data` (enabled by default): builds the process-wide tables returned by
//!   [`CharData::global`] from ICU4X compiled data, and enables the free functions that use them.
//! - `datagen`: derives `databake::Bake` for [`CharRecord`] and the property enums, for use by
//!   the table generator.
//!
//! ## Example
//!
//! ```
//! use unitext::{utf8, CharData, GeneralCategory};
//!
//! let data = CharData::global();
//! let codepoints: Vec<u32> = utf8::Utf8Chars::new("café".as_bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(codepoints, [0x63, 0x61, 0x66, 0xE9]);
//! assert_eq!(data.to_upper(0xE9), 0xC9);
//! assert_eq!(data.category(0xE9), GeneralCategory::LowercaseLetter);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod builder;
mod compare;
mod data;
mod error;
mod grapheme;
#[cfg(feature = "compiled_data")]
mod icu_convert;
mod line;
mod props;
mod record;
mod strops;
mod word;

pub mod utf16;
pub mod utf8;

#[cfg(test)]
mod tests;

pub use builder::TableBuilder;
pub use compare::{CaseInsensitive, Conversion, Neutral, PredEq};
pub use data::{
    CharData, CharDataTables, PageEntry, TableError, MAX_PAGE_PAYLOAD, PAGE_BITS, PAGE_COUNT,
    PAGE_SIZE,
};
pub use error::{Error, ValidationError};
pub use grapheme::{is_grapheme_boundary_prop, GRAPHEME_BREAK_TABLE};
pub use line::{
    complex_run_len, find_line_breaks, find_line_breaks_into, find_line_breaks_with, BreakAll,
    ComplexBreak, KeepAll, LineBreakAction,
};
pub use props::{
    BidiClass, CategoryClass, GeneralCategory, GraphemeBreakProp, LineBreakProp, WordBreakProp,
};
pub use record::CharRecord;
pub use strops::{
    compare_utf16, compare_utf8, find_utf16, find_utf8, parse_int_utf16, parse_int_utf8,
};
pub use word::{
    find_word_breaks, find_word_breaks_into, ALETTER_MID, NUMERIC_MID, WORD_BREAK_STATES,
    WORD_BREAK_TABLE,
};

/// One past the largest code point.
pub const MAX_CODEPOINTS: u32 = 0x11_0000;

/// Returns `true` for UTF-16 surrogate code points, which are not scalar values.
#[inline]
pub const fn is_surrogate(codepoint: u32) -> bool {
    matches!(codepoint, 0xD800..=0xDFFF)
}

/// Returns the record of `codepoint` from the global tables.
#[cfg(feature = "compiled_data")]
#[inline]
pub fn lookup(codepoint: u32) -> &'static CharRecord {
    CharData::global().lookup(codepoint)
}

/// General category of `codepoint`.
#[cfg(feature = "compiled_data")]
#[inline]
pub fn category(codepoint: u32) -> GeneralCategory {
    CharData::global().category(codepoint)
}

/// Simple uppercase mapping of `codepoint`.
#[cfg(feature = "compiled_data")]
#[inline]
pub fn to_upper(codepoint: u32) -> u32 {
    CharData::global().to_upper(codepoint)
}

/// Simple lowercase mapping of `codepoint`.
#[cfg(feature = "compiled_data")]
#[inline]
pub fn to_lower(codepoint: u32) -> u32 {
    CharData::global().to_lower(codepoint)
}

/// Simple titlecase mapping of `codepoint`.
#[cfg(feature = "compiled_data")]
#[inline]
pub fn to_title(codepoint: u32) -> u32 {
    CharData::global().to_title(codepoint)
}

/// Returns `true` if a grapheme cluster boundary separates the two code points.
#[cfg(feature = "compiled_data")]
#[inline]
pub fn is_grapheme_boundary(prev: u32, next: u32) -> bool {
    CharData::global().is_grapheme_boundary(prev, next)
}
