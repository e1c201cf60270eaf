// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The code point lookup engine.
//!
//! Properties are stored in three levels:
//!
//! - a page table with one entry per 256 code points,
//! - a zone table made of 256-entry blocks, one block per page whose records are not uniform,
//! - the list of distinct [`CharRecord`]s, with the unassigned sentinel at index 0.
//!
//! A page entry either names a record directly (the whole page shares it) or names a zone block
//! that must be indexed by the low byte of the code point.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use crate::props::{BidiClass, CategoryClass, GeneralCategory, GraphemeBreakProp};
use crate::props::{LineBreakProp, WordBreakProp};
use crate::{CharRecord, MAX_CODEPOINTS};

/// Number of low code point bits resolved inside a zone block.
pub const PAGE_BITS: u32 = 8;

/// Number of code points covered by one page table entry.
pub const PAGE_SIZE: usize = 1 << PAGE_BITS;

/// Number of entries in the page table.
pub const PAGE_COUNT: usize = (MAX_CODEPOINTS >> PAGE_BITS) as usize;

/// Tag bit of a page entry that names a record directly.
const DIRECT_BIT: u16 = 0x8000;

/// Largest record index or zone number a page entry can hold.
pub const MAX_PAGE_PAYLOAD: u16 = !DIRECT_BIT;

/// A decoded page table entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageEntry {
    /// Every code point of the page uses this record index.
    Direct(u16),
    /// The page is described by this zone block.
    Zone(u16),
}

impl PageEntry {
    /// Decodes the packed 16-bit form: bit 15 set for [`PageEntry::Direct`].
    #[inline(always)]
    pub const fn decode(raw: u16) -> Self {
        if raw & DIRECT_BIT != 0 {
            Self::Direct(raw & !DIRECT_BIT)
        } else {
            Self::Zone(raw)
        }
    }

    /// Packs the entry into its 16-bit form.
    ///
    /// The payload must not exceed [`MAX_PAGE_PAYLOAD`].
    #[inline]
    pub const fn encode(self) -> u16 {
        match self {
            Self::Direct(record) => {
                debug_assert!(record <= MAX_PAGE_PAYLOAD, "record index overflows page entry");
                record | DIRECT_BIT
            }
            Self::Zone(zone) => {
                debug_assert!(zone <= MAX_PAGE_PAYLOAD, "zone number overflows page entry");
                zone
            }
        }
    }
}

/// Borrowed form of the three lookup tables, as emitted by the table generator.
#[derive(Copy, Clone, Debug)]
pub struct CharDataTables<'a> {
    /// Distinct records; index 0 is [`CharRecord::UNASSIGNED`].
    pub records: &'a [CharRecord],
    /// Flattened 256-entry blocks of record indices.
    pub zones: &'a [u16],
    /// One packed [`PageEntry`] per page, [`PAGE_COUNT`] entries.
    pub pages: &'a [u16],
}

/// An error found while validating lookup tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The page table does not have [`PAGE_COUNT`] entries.
    PageTableLength(usize),
    /// The zone table length is not a multiple of [`PAGE_SIZE`].
    ZoneTableLength(usize),
    /// Record 0 is missing or is not the unassigned sentinel.
    MissingSentinel,
    /// More records than a page entry can address.
    TooManyRecords(usize),
    /// More zone blocks than a page entry can address.
    TooManyZones(usize),
    /// A record was supplied past U+10FFFF.
    TableFull,
    /// A page entry names a record or zone block that does not exist.
    PageOutOfRange {
        /// Index of the offending page.
        page: usize,
    },
    /// A zone entry names a record that does not exist.
    ZoneOutOfRange {
        /// Offset of the offending entry in the zone table.
        offset: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageTableLength(len) => {
                write!(f, "page table has {len} entries, expected {PAGE_COUNT}")
            }
            Self::ZoneTableLength(len) => {
                write!(f, "zone table length {len} is not a multiple of {PAGE_SIZE}")
            }
            Self::MissingSentinel => f.write_str("record 0 is not the unassigned sentinel"),
            Self::TooManyRecords(len) => write!(f, "{len} records cannot be addressed"),
            Self::TooManyZones(len) => write!(f, "{len} zone blocks cannot be addressed"),
            Self::TableFull => f.write_str("all code points already have a record"),
            Self::PageOutOfRange { page } => write!(f, "page {page:#X} is out of range"),
            Self::ZoneOutOfRange { offset } => {
                write!(f, "zone entry at offset {offset} is out of range")
            }
        }
    }
}

impl core::error::Error for TableError {}

/// Code point to [`CharRecord`] mapping.
///
/// Immutable once constructed; share it by reference. With the `compiled_data` feature a
/// process-wide instance is available from [`CharData::global`].
pub struct CharData {
    records: Cow<'static, [CharRecord]>,
    zones: Cow<'static, [u16]>,
    pages: Cow<'static, [u16]>,
}

impl fmt::Debug for CharData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharData")
            .field("records", &self.records.len())
            .field("zones", &(self.zones.len() / PAGE_SIZE))
            .field("pages", &self.pages.len())
            .finish()
    }
}

impl CharData {
    /// Wraps static tables, typically produced by the table generator.
    pub fn from_tables(tables: CharDataTables<'static>) -> Result<Self, TableError> {
        validate(tables.records, tables.zones, tables.pages)?;
        Ok(Self {
            records: Cow::Borrowed(tables.records),
            zones: Cow::Borrowed(tables.zones),
            pages: Cow::Borrowed(tables.pages),
        })
    }

    /// Takes ownership of tables built at runtime.
    pub fn from_vecs(
        records: Vec<CharRecord>,
        zones: Vec<u16>,
        pages: Vec<u16>,
    ) -> Result<Self, TableError> {
        validate(&records, &zones, &pages)?;
        Ok(Self {
            records: Cow::Owned(records),
            zones: Cow::Owned(zones),
            pages: Cow::Owned(pages),
        })
    }

    /// The process-wide tables, computed from ICU4X compiled data on first use.
    #[cfg(feature = "compiled_data")]
    pub fn global() -> &'static Self {
        static GLOBAL: std::sync::OnceLock<CharData> = std::sync::OnceLock::new();
        GLOBAL.get_or_init(|| {
            let data = crate::icu_convert::build_char_data();
            log::debug!(
                "built character tables: {} records, {} zone blocks, {} bytes",
                data.records.len(),
                data.zones.len() / PAGE_SIZE,
                data.table_size()
            );
            data
        })
    }

    /// Borrows the raw tables.
    pub fn tables(&self) -> CharDataTables<'_> {
        CharDataTables {
            records: &self.records,
            zones: &self.zones,
            pages: &self.pages,
        }
    }

    /// Memory used by the three tables, in bytes.
    pub fn table_size(&self) -> usize {
        size_of_val::<[CharRecord]>(&self.records)
            + size_of_val::<[u16]>(&self.zones)
            + size_of_val::<[u16]>(&self.pages)
    }

    /// Returns the record for `codepoint`.
    ///
    /// `codepoint` must be below `0x110000`. This is checked in debug builds only; in release
    /// builds an out of range value panics on the page table index.
    #[inline(always)]
    pub fn lookup(&self, codepoint: u32) -> &CharRecord {
        debug_assert!(
            codepoint < MAX_CODEPOINTS,
            "code point {codepoint:#X} out of range"
        );
        let page = self.pages[(codepoint >> PAGE_BITS) as usize];
        let index = match PageEntry::decode(page) {
            PageEntry::Direct(record) => record as usize,
            PageEntry::Zone(zone) => {
                let offset = ((zone as usize) << PAGE_BITS) | (codepoint as usize & (PAGE_SIZE - 1));
                self.zones[offset] as usize
            }
        };
        &self.records[index]
    }

    /// General category of `codepoint`.
    #[inline]
    pub fn category(&self, codepoint: u32) -> GeneralCategory {
        self.lookup(codepoint).category
    }

    /// Major class of the general category of `codepoint`.
    #[inline]
    pub fn category_class(&self, codepoint: u32) -> CategoryClass {
        self.category(codepoint).class()
    }

    /// Simple uppercase mapping, or `codepoint` itself.
    #[inline]
    pub fn to_upper(&self, codepoint: u32) -> u32 {
        mapped_or_self(self.lookup(codepoint).upper, codepoint)
    }

    /// Simple lowercase mapping, or `codepoint` itself.
    #[inline]
    pub fn to_lower(&self, codepoint: u32) -> u32 {
        mapped_or_self(self.lookup(codepoint).lower, codepoint)
    }

    /// Simple titlecase mapping, or `codepoint` itself.
    #[inline]
    pub fn to_title(&self, codepoint: u32) -> u32 {
        mapped_or_self(self.lookup(codepoint).title, codepoint)
    }

    /// Decimal digit value, or `None` if `codepoint` is not a decimal digit.
    #[inline]
    pub fn digit(&self, codepoint: u32) -> Option<u8> {
        let record = self.lookup(codepoint);
        (record.category == GeneralCategory::DecimalNumber).then_some(record.digit)
    }

    /// Grapheme cluster break property of `codepoint`.
    #[inline]
    pub fn grapheme_break_prop(&self, codepoint: u32) -> GraphemeBreakProp {
        self.lookup(codepoint).grapheme_break
    }

    /// Line break class of `codepoint`.
    #[inline]
    pub fn line_break_prop(&self, codepoint: u32) -> LineBreakProp {
        self.lookup(codepoint).line_break
    }

    /// Word break property of `codepoint`.
    #[inline]
    pub fn word_break_prop(&self, codepoint: u32) -> WordBreakProp {
        self.lookup(codepoint).word_break
    }

    /// Bidirectional class of `codepoint`.
    #[inline]
    pub fn bidi_class(&self, codepoint: u32) -> BidiClass {
        self.lookup(codepoint).bidi_class
    }

    /// Word break properties of a code point sequence.
    pub fn word_break_props(&self, codepoints: &[u32]) -> Vec<WordBreakProp> {
        codepoints
            .iter()
            .map(|&cp| self.word_break_prop(cp))
            .collect()
    }

    /// Line break classes of a code point sequence.
    pub fn line_break_props(&self, codepoints: &[u32]) -> Vec<LineBreakProp> {
        codepoints
            .iter()
            .map(|&cp| self.line_break_prop(cp))
            .collect()
    }
}

#[inline(always)]
fn mapped_or_self(mapped: u32, codepoint: u32) -> u32 {
    if mapped == 0 {
        codepoint
    } else {
        mapped
    }
}

fn validate(records: &[CharRecord], zones: &[u16], pages: &[u16]) -> Result<(), TableError> {
    if pages.len() != PAGE_COUNT {
        return Err(TableError::PageTableLength(pages.len()));
    }
    if zones.len() % PAGE_SIZE != 0 {
        return Err(TableError::ZoneTableLength(zones.len()));
    }
    if records.first() != Some(&CharRecord::UNASSIGNED) {
        return Err(TableError::MissingSentinel);
    }
    if records.len() > MAX_PAGE_PAYLOAD as usize + 1 {
        return Err(TableError::TooManyRecords(records.len()));
    }
    let zone_count = zones.len() / PAGE_SIZE;
    for (page, &raw) in pages.iter().enumerate() {
        let in_range = match PageEntry::decode(raw) {
            PageEntry::Direct(record) => (record as usize) < records.len(),
            PageEntry::Zone(zone) => (zone as usize) < zone_count,
        };
        if !in_range {
            return Err(TableError::PageOutOfRange { page });
        }
    }
    if let Some(offset) = zones.iter().position(|&r| r as usize >= records.len()) {
        return Err(TableError::ZoneOutOfRange { offset });
    }
    Ok(())
}
