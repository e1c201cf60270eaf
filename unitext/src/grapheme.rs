// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grapheme cluster boundaries (UAX #29, rules GB3 to GB9b).
//!
//! Only the pairwise rules are implemented; regional indicator pairing and emoji ZWJ
//! sequences are not.

use alloc::vec::Vec;

use crate::props::GraphemeBreakProp;
use crate::CharData;

const N: usize = GraphemeBreakProp::COUNT;

/// `GRAPHEME_BREAK_TABLE[prev][next]` is `true` if there is a boundary between the two.
pub static GRAPHEME_BREAK_TABLE: [[bool; N]; N] = grapheme_break_table();

const fn grapheme_break_table() -> [[bool; N]; N] {
    use GraphemeBreakProp::*;

    let mut table = [[true; N]; N];
    let mut prev = 0;
    while prev < N {
        let mut next = 0;
        while next < N {
            let p = GraphemeBreakProp::ALL[prev];
            let n = GraphemeBreakProp::ALL[next];
            table[prev][next] = match (p, n) {
                // GB3
                (Cr, Lf) => false,
                // GB4, GB5
                (Cr | Lf | Control, _) | (_, Cr | Lf | Control) => true,
                // GB6
                (L, L | V | Lv | Lvt) => false,
                // GB7
                (Lv | V, V | T) => false,
                // GB8
                (Lvt | T, T) => false,
                // GB9, GB9a
                (_, Extend | SpacingMark) => false,
                // GB9b
                (Prepend, _) => false,
                // GB999
                _ => true,
            };
            next += 1;
        }
        prev += 1;
    }
    table
}

/// Returns `true` if a grapheme cluster boundary separates `prev` and `next`.
#[inline]
pub fn is_grapheme_boundary_prop(prev: GraphemeBreakProp, next: GraphemeBreakProp) -> bool {
    GRAPHEME_BREAK_TABLE[prev as usize][next as usize]
}

impl CharData {
    /// Returns `true` if a grapheme cluster boundary separates the two code points.
    #[inline]
    pub fn is_grapheme_boundary(&self, prev: u32, next: u32) -> bool {
        is_grapheme_boundary_prop(self.grapheme_break_prop(prev), self.grapheme_break_prop(next))
    }

    /// Grapheme boundaries of a code point sequence.
    ///
    /// Entry `i` is `true` if a boundary follows `codepoints[i]`; the last entry is always
    /// `true`. Empty input gives an empty result.
    pub fn grapheme_boundaries(&self, codepoints: &[u32]) -> Vec<bool> {
        let mut boundaries: Vec<bool> = codepoints
            .windows(2)
            .map(|pair| self.is_grapheme_boundary(pair[0], pair[1]))
            .collect();
        if !codepoints.is_empty() {
            boundaries.push(true);
        }
        boundaries
    }
}
