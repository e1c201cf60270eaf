// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word boundaries (UAX #29, rules WB3 to WB14).
//!
//! The rules that look two characters ahead (WB6 and WB12) are handled with two extra
//! contextual states: a letter followed by a mid-letter character, and a number followed by a
//! mid-number character. Entering one of these states records the gap before the mid
//! character; if the next character completes the pattern, that gap is un-broken.

use alloc::vec;
use alloc::vec::Vec;

use crate::props::WordBreakProp;
use crate::CharData;

/// Contextual state: `ALetter (MidLetter | MidNumLet)`.
pub const ALETTER_MID: usize = WordBreakProp::COUNT;

/// Contextual state: `Numeric (MidNum | MidNumLet)`.
pub const NUMERIC_MID: usize = WordBreakProp::COUNT + 1;

/// Number of rows of [`WORD_BREAK_TABLE`].
pub const WORD_BREAK_STATES: usize = WordBreakProp::COUNT + 2;

/// `WORD_BREAK_TABLE[state][next]` is `true` if there is a boundary before `next`.
///
/// Rows `0..WordBreakProp::COUNT` are indexed by property; [`ALETTER_MID`] and
/// [`NUMERIC_MID`] are the contextual states.
pub static WORD_BREAK_TABLE: [[bool; WordBreakProp::COUNT]; WORD_BREAK_STATES] =
    word_break_table();

const fn word_break_table() -> [[bool; WordBreakProp::COUNT]; WORD_BREAK_STATES] {
    let mut table = [[true; WordBreakProp::COUNT]; WORD_BREAK_STATES];
    let mut state = 0;
    while state < WORD_BREAK_STATES {
        let mut next = 0;
        while next < WordBreakProp::COUNT {
            table[state][next] = is_boundary(state, WordBreakProp::ALL[next]);
            next += 1;
        }
        state += 1;
    }
    table
}

const fn is_boundary(state: usize, next: WordBreakProp) -> bool {
    use WordBreakProp::*;

    if state == ALETTER_MID {
        return !matches!(next, ALetter | Extend | Format);
    }
    if state == NUMERIC_MID {
        return !matches!(next, Numeric | Extend | Format);
    }
    let prev = WordBreakProp::ALL[state];
    match (prev, next) {
        // WB3
        (Cr, Lf) => false,
        // WB3a, WB3b
        (Cr | Lf | Newline, _) | (_, Cr | Lf | Newline) => true,
        // WB4
        (_, Extend | Format) => false,
        // WB5, WB9
        (ALetter, ALetter | Numeric) => false,
        // WB8, WB10
        (Numeric, Numeric | ALetter) => false,
        // WB13
        (Katakana, Katakana) => false,
        // WB13a
        (ALetter | Numeric | Katakana | ExtendNumLet, ExtendNumLet) => false,
        // WB13b
        (ExtendNumLet, ALetter | Numeric | Katakana) => false,
        // WB14
        _ => true,
    }
}

/// Finds the word boundaries of a property sequence.
///
/// Entry `i` of the result is `true` if a boundary follows `props[i]`. The last entry is always
/// `true`; empty input gives an empty result.
///
/// ```
/// use unitext::{find_word_breaks, WordBreakProp::*};
///
/// // "it's"
/// let breaks = find_word_breaks(&[ALetter, ALetter, MidNumLet, ALetter]);
/// assert_eq!(breaks, [false, false, false, true]);
/// ```
pub fn find_word_breaks(props: &[WordBreakProp]) -> Vec<bool> {
    let mut breaks = vec![false; props.len()];
    find_word_breaks_into(&mut breaks, props);
    breaks
}

/// Like [`find_word_breaks`], writing into `breaks`.
///
/// # Panics
///
/// Panics if `breaks` is shorter than `props`.
pub fn find_word_breaks_into(breaks: &mut [bool], props: &[WordBreakProp]) {
    use WordBreakProp::*;

    let Some((&first, rest)) = props.split_first() else {
        return;
    };
    let breaks = &mut breaks[..props.len()];
    let mut state = first as usize;
    let mut prev = first;
    // Gap before a mid character that the following character may join.
    let mut pending = None;
    for (index, &next) in rest.iter().enumerate() {
        // `index` is the gap after `props[index]`, which is `prev`.
        if matches!(next, Extend | Format) && !matches!(prev, Cr | Lf | Newline) {
            // WB4: the extender takes the place of its base.
            breaks[index] = false;
            prev = next;
            continue;
        }
        breaks[index] = WORD_BREAK_TABLE[state][next as usize];
        state = match (state, next) {
            (s, MidLetter | MidNumLet) if s == ALetter as usize => {
                pending = Some(index);
                ALETTER_MID
            }
            (s, MidNum | MidNumLet) if s == Numeric as usize => {
                pending = Some(index);
                NUMERIC_MID
            }
            (ALETTER_MID, ALetter) | (NUMERIC_MID, Numeric) => {
                if let Some(gap) = pending.take() {
                    breaks[gap] = false;
                }
                next as usize
            }
            _ => {
                pending = None;
                next as usize
            }
        };
        prev = next;
    }
    breaks[props.len() - 1] = true;
}

impl CharData {
    /// Word boundaries of a code point sequence, as in [`find_word_breaks`].
    pub fn word_boundaries(&self, codepoints: &[u32]) -> Vec<bool> {
        find_word_breaks(&self.word_break_props(codepoints))
    }
}
