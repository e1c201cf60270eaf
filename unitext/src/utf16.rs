// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! UTF-16 encoding and decoding over slices of `u16` code units.

use smallvec::SmallVec;

use crate::{Error, ValidationError, MAX_CODEPOINTS};

const HIGH_SURROGATE_FIRST: u16 = 0xD800;
const LOW_SURROGATE_FIRST: u16 = 0xDC00;
const SURROGATE_PAYLOAD: u16 = 0x3FF;

/// Planes above the BMP are stored with this bias subtracted from `codepoint >> 10`.
const PLANE_BIAS: u32 = 0x40;

/// Returns `false` for low surrogates, which can only end a pair.
#[inline]
pub const fn is_valid_lead_word(word: u16) -> bool {
    !is_valid_end_word(word)
}

/// Returns `true` for low surrogates (`0xDC00..=0xDFFF`).
#[inline]
pub const fn is_valid_end_word(word: u16) -> bool {
    matches!(word, 0xDC00..=0xDFFF)
}

/// Returns `true` if `word` is a complete code point on its own.
#[inline]
pub const fn is_single_word(word: u16) -> bool {
    !matches!(word, 0xD800..=0xDFFF)
}

/// Returns the number of units needed to encode `codepoint`.
///
/// Fails with [`Error::CharOutOfRange`] for surrogates and values above U+10FFFF.
#[inline]
pub const fn sequence_length_for_scalar(codepoint: u32) -> Result<usize, Error> {
    if codepoint >= MAX_CODEPOINTS || crate::is_surrogate(codepoint) {
        Err(Error::CharOutOfRange)
    } else if codepoint < 0x1_0000 {
        Ok(1)
    } else {
        Ok(2)
    }
}

/// Encodes `codepoint` at the start of `buffer` and returns the number of units written.
///
/// Nothing is written on failure.
///
/// # Panics
///
/// Panics if `buffer` is shorter than [`sequence_length_for_scalar`] of `codepoint`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "range checked first; every stored value fits 16 bits"
)]
pub fn encode(buffer: &mut [u16], codepoint: u32) -> Result<usize, Error> {
    let len = sequence_length_for_scalar(codepoint)?;
    if len == 1 {
        buffer[0] = codepoint as u16;
    } else {
        let buffer = &mut buffer[..2];
        buffer[0] = ((codepoint >> 10) - PLANE_BIAS) as u16 | HIGH_SURROGATE_FIRST;
        buffer[1] = (codepoint as u16 & SURROGATE_PAYLOAD) | LOW_SURROGATE_FIRST;
    }
    Ok(len)
}

/// Encodes `codepoint` into a new inline buffer.
pub fn encode_utf16(codepoint: u32) -> Result<SmallVec<[u16; 2]>, Error> {
    let mut units = [0_u16; 2];
    let len = encode(&mut units, codepoint)?;
    Ok(SmallVec::from_slice(&units[..len]))
}

/// Decodes the sequence at the start of `units`.
///
/// Returns the scalar value and the number of units consumed. An empty input or a lone low
/// surrogate fails with [`Error::InvalidLeadWord`]; a high surrogate that is not followed by a
/// low surrogate fails with [`Error::InvalidEndWord`].
pub fn decode(units: &[u16]) -> Result<(u32, usize), Error> {
    let Some(&lead) = units.first() else {
        return Err(Error::InvalidLeadWord);
    };
    if is_single_word(lead) {
        return Ok((u32::from(lead), 1));
    }
    if !is_valid_lead_word(lead) {
        return Err(Error::InvalidLeadWord);
    }
    match units.get(1) {
        Some(&end) if is_valid_end_word(end) => {
            let high = u32::from(lead & SURROGATE_PAYLOAD) + PLANE_BIAS;
            let low = u32::from(end & SURROGATE_PAYLOAD);
            Ok(((high << 10) | low, 2))
        }
        _ => Err(Error::InvalidEndWord),
    }
}

/// Checks the sequence at the start of `units` and returns its length.
#[inline]
pub fn check_char_valid(units: &[u16]) -> Result<usize, Error> {
    decode(units).map(|(_, len)| len)
}

/// Checks a whole UTF-16 string, reporting the first malformed sequence.
pub fn check_string_valid(units: &[u16]) -> Result<(), ValidationError> {
    let mut offset = 0;
    while offset < units.len() {
        match check_char_valid(&units[offset..]) {
            Ok(len) => offset += len,
            Err(kind) => return Err(ValidationError { offset, kind }),
        }
    }
    Ok(())
}

/// Iterator over the scalar values of a UTF-16 string, stopping after the first error.
#[derive(Clone, Debug)]
pub struct Utf16Chars<'a> {
    units: &'a [u16],
    offset: usize,
    failed: bool,
}

impl<'a> Utf16Chars<'a> {
    /// Creates an iterator over `units`.
    pub fn new(units: &'a [u16]) -> Self {
        Self {
            units,
            offset: 0,
            failed: false,
        }
    }

    /// Unit offset of the next sequence to decode.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Utf16Chars<'_> {
    type Item = Result<u32, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.units.len() {
            return None;
        }
        match decode(&self.units[self.offset..]) {
            Ok((codepoint, len)) => {
                self.offset += len;
                Some(Ok(codepoint))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl core::iter::FusedIterator for Utf16Chars<'_> {}
