// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! UTF-8 encoding and decoding over plain byte slices.
//!
//! Decoding follows the restricted grammar of RFC 3629: over-long forms, surrogates and values
//! above U+10FFFF are rejected.

use smallvec::SmallVec;

use crate::{Error, ValidationError, MAX_CODEPOINTS};

/// Smallest scalar that needs a sequence of the given length, indexed by length.
const MIN_SCALAR_FOR_LEN: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];

/// Payload bits of the lead byte, indexed by sequence length.
const LEAD_MASK: [u8; 5] = [0, 0x7F, 0x1F, 0x0F, 0x07];

/// Marker bits of the lead byte, indexed by sequence length.
const LEAD_MARKER: [u8; 5] = [0, 0x00, 0xC0, 0xE0, 0xF0];

/// Returns `false` for the bytes that can never start a sequence: `0xC0`, `0xC1` and anything
/// above `0xF4`.
///
/// Continuation bytes are accepted here; [`sequence_length_for_lead_byte`] rejects them.
#[inline]
pub const fn is_valid_lead_byte(byte: u8) -> bool {
    !matches!(byte, 0xC0 | 0xC1 | 0xF5..=0xFF)
}

/// Returns `true` for continuation bytes (`10xxxxxx`).
#[inline]
pub const fn is_valid_follow_byte(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Returns the number of bytes needed to encode `codepoint`.
///
/// Fails with [`Error::CharOutOfRange`] for surrogates and values from `0x110000` on.
#[inline]
pub const fn sequence_length_for_scalar(codepoint: u32) -> Result<usize, Error> {
    if codepoint >= MAX_CODEPOINTS || crate::is_surrogate(codepoint) {
        Err(Error::CharOutOfRange)
    } else if codepoint < 0x80 {
        Ok(1)
    } else if codepoint < 0x800 {
        Ok(2)
    } else if codepoint < 0x1_0000 {
        Ok(3)
    } else {
        Ok(4)
    }
}

/// Returns the total sequence length announced by a lead byte.
///
/// The length is read from the high bits alone. Bytes that announce a length but can never
/// start a valid sequence (`0xC0`, `0xC1` and `0xF5..=0xFD`) still get one here; check
/// [`is_valid_lead_byte`] first to reject them. Lengths 5 and 6 belong to the obsolete
/// ISO 10646 grammar. They are recognised so that a caller can skip such a sequence, but
/// [`decode`] never accepts them.
#[inline]
pub const fn sequence_length_for_lead_byte(byte: u8) -> Result<usize, Error> {
    match byte {
        0x00..=0x7F => Ok(1),
        0xC0..=0xDF => Ok(2),
        0xE0..=0xEF => Ok(3),
        0xF0..=0xF7 => Ok(4),
        0xF8..=0xFB => Ok(5),
        0xFC..=0xFD => Ok(6),
        _ => Err(Error::InvalidLeadByte),
    }
}

/// Encodes `codepoint` at the start of `buffer` and returns the number of bytes written.
///
/// Nothing is written on failure.
///
/// # Panics
///
/// Panics if `buffer` is shorter than [`sequence_length_for_scalar`] of `codepoint`.
pub fn encode(buffer: &mut [u8], codepoint: u32) -> Result<usize, Error> {
    let len = sequence_length_for_scalar(codepoint)?;
    let buffer = &mut buffer[..len];
    let mut rest = codepoint;
    for byte in buffer[1..].iter_mut().rev() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "masked to six bits before the cast"
        )]
        {
            *byte = 0x80 | (rest & 0x3F) as u8;
        }
        rest >>= 6;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the remaining bits fit the lead byte payload for this length"
    )]
    {
        buffer[0] = LEAD_MARKER[len] | (rest as u8 & LEAD_MASK[len]);
    }
    Ok(len)
}

/// Encodes `codepoint` into a new inline buffer.
pub fn encode_utf8(codepoint: u32) -> Result<SmallVec<[u8; 4]>, Error> {
    let mut bytes = [0_u8; 4];
    let len = encode(&mut bytes, codepoint)?;
    Ok(SmallVec::from_slice(&bytes[..len]))
}

/// Decodes the sequence at the start of `bytes`.
///
/// Returns the scalar value and the number of bytes consumed. An empty input is reported as
/// [`Error::InvalidLeadByte`]; a sequence cut short by the end of input is reported as
/// [`Error::InvalidFollowByte`], as are over-long forms (the second byte is outside the range the
/// lead byte permits). Decoded surrogates and values above U+10FFFF fail with
/// [`Error::CharOutOfRange`].
pub fn decode(bytes: &[u8]) -> Result<(u32, usize), Error> {
    let Some(&lead) = bytes.first() else {
        return Err(Error::InvalidLeadByte);
    };
    if lead < 0x80 {
        return Ok((u32::from(lead), 1));
    }
    if !is_valid_lead_byte(lead) {
        return Err(Error::InvalidLeadByte);
    }
    let len = sequence_length_for_lead_byte(lead)?;
    // `is_valid_lead_byte` already excluded the lead bytes of lengths 5 and 6.
    debug_assert!((2..=4).contains(&len), "unexpected sequence length {len}");

    let mut codepoint = u32::from(lead & LEAD_MASK[len]);
    for index in 1..len {
        match bytes.get(index) {
            Some(&byte) if is_valid_follow_byte(byte) => {
                codepoint = (codepoint << 6) | u32::from(byte & 0x3F);
            }
            _ => return Err(Error::InvalidFollowByte),
        }
    }

    if codepoint < MIN_SCALAR_FOR_LEN[len] {
        return Err(Error::InvalidFollowByte);
    }
    if codepoint >= MAX_CODEPOINTS || crate::is_surrogate(codepoint) {
        return Err(Error::CharOutOfRange);
    }
    Ok((codepoint, len))
}

/// Checks the sequence at the start of `bytes` and returns its length.
#[inline]
pub fn check_char_valid(bytes: &[u8]) -> Result<usize, Error> {
    decode(bytes).map(|(_, len)| len)
}

/// Checks a whole byte string, reporting the first malformed sequence.
pub fn check_string_valid(bytes: &[u8]) -> Result<(), ValidationError> {
    let mut offset = 0;
    while offset < bytes.len() {
        match check_char_valid(&bytes[offset..]) {
            Ok(len) => offset += len,
            Err(kind) => return Err(ValidationError { offset, kind }),
        }
    }
    Ok(())
}

/// Iterator over the scalar values of a UTF-8 byte string.
///
/// The iterator yields the first decoding error it meets and then stops, so malformed input is
/// never silently skipped.
#[derive(Clone, Debug)]
pub struct Utf8Chars<'a> {
    bytes: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> Utf8Chars<'a> {
    /// Creates an iterator over `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            offset: 0,
            failed: false,
        }
    }

    /// Byte offset of the next sequence to decode.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Utf8Chars<'_> {
    type Item = Result<u32, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.bytes.len() {
            return None;
        }
        match decode(&self.bytes[self.offset..]) {
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

impl core::iter::FusedIterator for Utf8Chars<'_> {}
