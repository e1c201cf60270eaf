// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compaction of per-code-point records into the three-level lookup tables.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::data::{PageEntry, MAX_PAGE_PAYLOAD, PAGE_COUNT, PAGE_SIZE};
use crate::{CharData, CharRecord, TableError, MAX_CODEPOINTS};

/// Builds [`CharData`] from one record per code point, supplied in code point order.
///
/// Records are de-duplicated by value. A page whose 256 records are all equal becomes a direct
/// page entry; other pages get a zone block, and identical blocks are shared.
///
/// ```
/// use unitext::{CharRecord, GeneralCategory, TableBuilder};
///
/// let digit = CharRecord {
///     category: GeneralCategory::DecimalNumber,
///     digit: 7,
///     ..CharRecord::UNASSIGNED
/// };
/// let mut builder = TableBuilder::new();
/// for codepoint in 0..0x40 {
///     let record = if codepoint == 0x37 { digit } else { CharRecord::UNASSIGNED };
///     builder.push(record).unwrap();
/// }
/// let data = builder.finish().unwrap();
/// assert_eq!(data.digit(0x37), Some(7));
/// assert_eq!(data.digit(0x10_0000), None);
/// ```
#[derive(Debug)]
pub struct TableBuilder {
    records: Vec<CharRecord>,
    record_ids: HashMap<CharRecord, u16>,
    zones: Vec<u16>,
    zone_ids: HashMap<[u16; PAGE_SIZE], u16>,
    pages: Vec<u16>,
    page: [u16; PAGE_SIZE],
    filled: usize,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    /// Creates an empty builder holding only the unassigned sentinel.
    pub fn new() -> Self {
        let mut record_ids = HashMap::new();
        record_ids.insert(CharRecord::UNASSIGNED, 0);
        Self {
            records: alloc::vec![CharRecord::UNASSIGNED],
            record_ids,
            zones: Vec::new(),
            zone_ids: HashMap::new(),
            pages: Vec::with_capacity(PAGE_COUNT),
            page: [0; PAGE_SIZE],
            filled: 0,
        }
    }

    /// Compacts a complete list of records, where `records[cp]` describes code point `cp`.
    ///
    /// Code points past the end of the list are unassigned.
    pub fn build<I>(records: I) -> Result<CharData, TableError>
    where
        I: IntoIterator<Item = CharRecord>,
    {
        let mut builder = Self::new();
        for record in records {
            builder.push(record)?;
        }
        builder.finish()
    }

    /// The code point the next pushed record will describe.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "at most PAGE_COUNT * PAGE_SIZE code points"
    )]
    pub fn next_codepoint(&self) -> u32 {
        (self.pages.len() * PAGE_SIZE + self.filled) as u32
    }

    /// Appends the record of the next code point.
    pub fn push(&mut self, record: CharRecord) -> Result<(), TableError> {
        if self.next_codepoint() >= MAX_CODEPOINTS {
            return Err(TableError::TableFull);
        }
        let id = self.record_id(record)?;
        self.page[self.filled] = id;
        self.filled += 1;
        if self.filled == PAGE_SIZE {
            self.close_page()?;
        }
        Ok(())
    }

    /// Appends `count` copies of `record`.
    pub fn push_repeated(&mut self, record: CharRecord, count: u32) -> Result<(), TableError> {
        for _ in 0..count {
            self.push(record)?;
        }
        Ok(())
    }

    /// Pads the remaining code points with the unassigned record and validates the result.
    pub fn finish(mut self) -> Result<CharData, TableError> {
        while self.pages.len() < PAGE_COUNT {
            self.page[self.filled..].fill(0);
            self.filled = PAGE_SIZE;
            self.close_page()?;
        }
        log::trace!(
            "compacted {} code points into {} records and {} zone blocks",
            MAX_CODEPOINTS,
            self.records.len(),
            self.zones.len() / PAGE_SIZE
        );
        CharData::from_vecs(self.records, self.zones, self.pages)
    }

    fn record_id(&mut self, record: CharRecord) -> Result<u16, TableError> {
        if let Some(&id) = self.record_ids.get(&record) {
            return Ok(id);
        }
        let id = u16::try_from(self.records.len())
            .ok()
            .filter(|&id| id <= MAX_PAGE_PAYLOAD)
            .ok_or(TableError::TooManyRecords(self.records.len() + 1))?;
        self.records.push(record);
        self.record_ids.insert(record, id);
        Ok(id)
    }

    fn close_page(&mut self) -> Result<(), TableError> {
        let first = self.page[0];
        let entry = if self.page.iter().all(|&id| id == first) {
            PageEntry::Direct(first)
        } else if let Some(&zone) = self.zone_ids.get(&self.page) {
            PageEntry::Zone(zone)
        } else {
            let count = self.zones.len() / PAGE_SIZE;
            let zone = u16::try_from(count)
                .ok()
                .filter(|&zone| zone <= MAX_PAGE_PAYLOAD)
                .ok_or(TableError::TooManyZones(count + 1))?;
            self.zones.extend_from_slice(&self.page);
            self.zone_ids.insert(self.page, zone);
            log::trace!("zone block {zone} for page {:#X}", self.pages.len());
            PageEntry::Zone(zone)
        };
        self.pages.push(entry.encode());
        self.filled = 0;
        Ok(())
    }
}
