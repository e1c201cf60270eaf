// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comparison, search and number parsing over encoded strings.
//!
//! All operations decode as they go and stop at the first malformed sequence, returning its
//! error instead of guessing.

use alloc::collections::VecDeque;
use core::cmp::Ordering;

use smallvec::SmallVec;

use crate::compare::{Conversion, PredEq};
use crate::props::GeneralCategory;
use crate::{utf16, utf8, CharData, Error};

type Decode<T> = fn(&[T]) -> Result<(u32, usize), Error>;

/// Compares two UTF-8 strings code point by code point after conversion.
///
/// ```
/// use core::cmp::Ordering;
/// use unitext::{compare_utf8, CaseInsensitive, CharData, PredEq};
///
/// let pred = PredEq::<CaseInsensitive>::new(CharData::global());
/// assert_eq!(compare_utf8(pred, "café".as_bytes(), "CAFÉ".as_bytes()), Ok(Ordering::Equal));
/// ```
pub fn compare_utf8<C: Conversion>(
    pred: PredEq<'_, C>,
    a: &[u8],
    b: &[u8],
) -> Result<Ordering, Error> {
    compare(pred, a, b, utf8::decode)
}

/// Compares two UTF-16 strings code point by code point after conversion.
pub fn compare_utf16<C: Conversion>(
    pred: PredEq<'_, C>,
    a: &[u16],
    b: &[u16],
) -> Result<Ordering, Error> {
    compare(pred, a, b, utf16::decode)
}

fn compare<T, C: Conversion>(
    pred: PredEq<'_, C>,
    a: &[T],
    b: &[T],
    decode: Decode<T>,
) -> Result<Ordering, Error> {
    let (mut i, mut j) = (0, 0);
    loop {
        match (i < a.len(), j < b.len()) {
            (false, false) => return Ok(Ordering::Equal),
            (false, true) => return Ok(Ordering::Less),
            (true, false) => return Ok(Ordering::Greater),
            (true, true) => {}
        }
        let (ca, la) = decode(&a[i..])?;
        let (cb, lb) = decode(&b[j..])?;
        match pred.convert(ca).cmp(&pred.convert(cb)) {
            Ordering::Equal => {}
            other => return Ok(other),
        }
        i += la;
        j += lb;
    }
}

/// Finds the first occurrence of `needle` in `haystack`, returning its byte offset.
///
/// An empty needle matches at 0. The haystack is decoded as the scan advances, so a match that
/// ends before a malformed sequence is found. Otherwise fails with the decoding error that
/// stopped the scan, or with [`Error::NotFound`].
pub fn find_utf8<C: Conversion>(
    pred: PredEq<'_, C>,
    haystack: &[u8],
    needle: &[u8],
) -> Result<usize, Error> {
    find(pred, haystack, needle, utf8::decode)
}

/// Finds the first occurrence of `needle` in `haystack`, returning its unit offset.
pub fn find_utf16<C: Conversion>(
    pred: PredEq<'_, C>,
    haystack: &[u16],
    needle: &[u16],
) -> Result<usize, Error> {
    find(pred, haystack, needle, utf16::decode)
}

fn find<T, C: Conversion>(
    pred: PredEq<'_, C>,
    haystack: &[T],
    needle: &[T],
    decode: Decode<T>,
) -> Result<usize, Error> {
    let mut pattern = SmallVec::<[u32; 32]>::new();
    let mut offset = 0;
    while offset < needle.len() {
        let (codepoint, len) = decode(&needle[offset..])?;
        pattern.push(pred.convert(codepoint));
        offset += len;
    }
    if pattern.is_empty() {
        return Ok(0);
    }

    // The last `pattern.len()` decoded code points: (offset, converted code point).
    let mut window = VecDeque::with_capacity(pattern.len());
    let mut offset = 0;
    while offset < haystack.len() {
        let (codepoint, len) = decode(&haystack[offset..])?;
        if window.len() == pattern.len() {
            window.pop_front();
        }
        window.push_back((offset, pred.convert(codepoint)));
        offset += len;
        if window.len() == pattern.len()
            && window
                .iter()
                .zip(&pattern)
                .all(|(&(_, codepoint), &expected)| codepoint == expected)
        {
            return Ok(window[0].0);
        }
    }
    Err(Error::NotFound)
}

/// Parses a decimal integer at the start of a UTF-8 string.
///
/// Leading space separators (`Zs`) are skipped, then an optional `+` or `-` sign, then one or
/// more decimal digits of any script. Parsing stops at the first non-digit. Returns the value
/// and the number of bytes consumed.
///
/// Fails with [`Error::NotFound`] if no digit follows, with [`Error::Overflow`] if the value
/// does not fit an `i64`, or with a decoding error.
pub fn parse_int_utf8(data: &CharData, text: &[u8]) -> Result<(i64, usize), Error> {
    parse_int(data, text, utf8::decode)
}

/// Parses a decimal integer at the start of a UTF-16 string, as [`parse_int_utf8`] does.
pub fn parse_int_utf16(data: &CharData, text: &[u16]) -> Result<(i64, usize), Error> {
    parse_int(data, text, utf16::decode)
}

fn parse_int<T>(data: &CharData, text: &[T], decode: Decode<T>) -> Result<(i64, usize), Error> {
    let mut offset = 0;
    let next = |offset: usize| -> Result<Option<(u32, usize)>, Error> {
        if offset < text.len() {
            decode(&text[offset..]).map(Some)
        } else {
            Ok(None)
        }
    };

    while let Some((codepoint, len)) = next(offset)? {
        if data.category(codepoint) != GeneralCategory::SpaceSeparator {
            break;
        }
        offset += len;
    }
    let mut negative = false;
    if let Some((sign @ ('+' | '-'), len)) =
        next(offset)?.map(|(codepoint, len)| (char::from_u32(codepoint).unwrap_or('\0'), len))
    {
        negative = sign == '-';
        offset += len;
    }

    let mut value: i64 = 0;
    let mut digits = 0;
    while let Some((codepoint, len)) = next(offset)? {
        let Some(digit) = data.digit(codepoint) else {
            break;
        };
        let digit = i64::from(digit);
        value = value
            .checked_mul(10)
            .and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            })
            .ok_or(Error::Overflow)?;
        digits += 1;
        offset += len;
    }
    if digits == 0 {
        return Err(Error::NotFound);
    }
    Ok((value, offset))
}
