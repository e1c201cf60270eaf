// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Code point comparison under a conversion.

use crate::CharData;

/// Maps a code point before comparison.
pub trait Conversion {
    /// Converts `codepoint`.
    fn convert(data: &CharData, codepoint: u32) -> u32;
}

/// Compares code points as they are.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Neutral;

impl Conversion for Neutral {
    #[inline(always)]
    fn convert(_: &CharData, codepoint: u32) -> u32 {
        codepoint
    }
}

/// Compares the simple uppercase mappings of code points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl Conversion for CaseInsensitive {
    #[inline(always)]
    fn convert(data: &CharData, codepoint: u32) -> u32 {
        data.to_upper(codepoint)
    }
}

/// Equality predicate over code points, applying `C` to both sides.
///
/// The conversion is a type parameter, so each instantiation compiles to a direct comparison.
#[derive(Debug)]
pub struct PredEq<'a, C> {
    data: &'a CharData,
    _conversion: core::marker::PhantomData<C>,
}

impl<C> Clone for PredEq<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for PredEq<'_, C> {}

impl<'a, C: Conversion> PredEq<'a, C> {
    /// Creates a predicate using `data` for conversions.
    pub fn new(data: &'a CharData) -> Self {
        Self {
            data,
            _conversion: core::marker::PhantomData,
        }
    }

    /// Converts a single code point.
    #[inline]
    pub fn convert(self, codepoint: u32) -> u32 {
        C::convert(self.data, codepoint)
    }

    /// Returns `true` if `a` and `b` are equal after conversion.
    #[inline]
    pub fn eq(self, a: u32, b: u32) -> bool {
        self.convert(a) == self.convert(b)
    }

    /// The tables used for conversions.
    pub fn data(self) -> &'a CharData {
        self.data
    }
}
