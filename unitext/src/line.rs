// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line break opportunities (UAX #14, pair table algorithm).
//!
//! Classes outside the pair table are resolved by explicit rules first:
//!
//! - `AI`, `SG` and `XX` act as `AL`.
//! - `SP` never breaks before itself and does not change the class on the left of the next
//!   pair, so the table sees `X SP* Y` as the pair `X Y`.
//! - `BK`, `CR`, `LF` and `NL` do not break before themselves and force a break after, except
//!   between `CR` and `LF`.
//! - Runs of `SA` or of `CB` are handed to a [`ComplexBreak`] strategy. At the edges of a run
//!   `SA` acts as `AL` and `CB` acts as `ID`.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::props::LineBreakProp;
use crate::CharData;

#[allow(unused_imports, reason = "the full alias set mirrors the pair table header")]
use LineBreakProp::{
    Alphabetic as AL, Ambiguous as AI, BreakAfter as BA, BreakBefore as BB, BreakBoth as B2,
    BreakSymbols as SY, CarriageReturn as CR, CloseParenthesis as CP, ClosePunctuation as CL,
    CombiningMark as CM, ComplexContext as SA, ContingentBreak as CB, Exclamation as EX,
    Glue as GL, HangulLJamo as JL, HangulLvSyllable as H2, HangulLvtSyllable as H3,
    HangulTJamo as JT, HangulVJamo as JV, Hyphen as HY, Ideographic as ID, InfixNumeric as IS,
    Inseparable as IN, LineFeed as LF, MandatoryBreak as BK, NextLine as NL, Nonstarter as NS,
    Numeric as NU, OpenPunctuation as OP, PostfixNumeric as PO, PrefixNumeric as PR,
    Quotation as QU, Space as SP, Surrogate as SG, Unknown as XX, WordJoiner as WJ,
    ZwSpace as ZW,
};

/// Break decision for the gap after a character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LineBreakAction {
    /// A line must not end here.
    Prohibited,
    /// A line may end here.
    Allowed,
    /// A line must end here.
    Mandatory,
}

/// Entry of the pair table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PairAction {
    /// `_`: break allowed.
    Direct,
    /// `%`: break allowed only if spaces intervene.
    Indirect,
    /// `#`: combining mark; break allowed only after spaces.
    CombiningIndirect,
    /// `@`: combining mark; never break.
    CombiningProhibited,
    /// `^`: never break, even with intervening spaces.
    Prohibited,
}

const DIR: PairAction = PairAction::Direct;
const IND: PairAction = PairAction::Indirect;
const CMI: PairAction = PairAction::CombiningIndirect;
const CMP: PairAction = PairAction::CombiningProhibited;
const PRO: PairAction = PairAction::Prohibited;

const N: usize = LineBreakProp::TABLE_COUNT;

/// Row is the class before the gap, column the class after it.
///
/// Columns: OP CL CP QU GL NS EX SY IS PR PO NU AL ID IN HY BA BB B2 ZW CM WJ H2 H3 JL JV JT
#[rustfmt::skip]
static PAIR_TABLE: [[PairAction; N]; N] = [
    /* OP */ [PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, PRO, CMP, PRO, PRO, PRO, PRO, PRO, PRO],
    /* CL */ [DIR, PRO, PRO, IND, IND, PRO, PRO, PRO, PRO, IND, IND, DIR, DIR, DIR, DIR, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* CP */ [DIR, PRO, PRO, IND, IND, PRO, PRO, PRO, PRO, IND, IND, IND, IND, DIR, DIR, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* QU */ [PRO, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, IND, IND, IND, IND, IND, IND, IND, IND, IND, IND, PRO, CMI, PRO, IND, IND, IND, IND, IND],
    /* GL */ [IND, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, IND, IND, IND, IND, IND, IND, IND, IND, IND, IND, PRO, CMI, PRO, IND, IND, IND, IND, IND],
    /* NS */ [DIR, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, DIR, DIR, DIR, DIR, DIR, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* EX */ [DIR, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, DIR, DIR, DIR, DIR, IND, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* SY */ [DIR, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, DIR, IND, DIR, DIR, DIR, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* IS */ [DIR, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, DIR, IND, IND, DIR, DIR, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* PR */ [IND, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, DIR, IND, IND, IND, DIR, IND, IND, DIR, DIR, PRO, CMI, PRO, IND, IND, IND, IND, IND],
    /* PO */ [IND, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, DIR, IND, IND, DIR, DIR, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* NU */ [IND, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, IND, IND, IND, IND, DIR, IND, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* AL */ [IND, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, DIR, IND, IND, DIR, IND, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* ID */ [DIR, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, IND, DIR, DIR, DIR, IND, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* IN */ [DIR, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, DIR, DIR, DIR, DIR, IND, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* HY */ [DIR, PRO, PRO, IND, DIR, IND, PRO, PRO, PRO, DIR, DIR, IND, DIR, DIR, DIR, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* BA */ [DIR, PRO, PRO, IND, DIR, IND, PRO, PRO, PRO, DIR, DIR, DIR, DIR, DIR, DIR, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* BB */ [IND, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, IND, IND, IND, IND, IND, IND, IND, IND, IND, IND, PRO, CMI, PRO, IND, IND, IND, IND, IND],
    /* B2 */ [DIR, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, DIR, DIR, DIR, DIR, DIR, IND, IND, DIR, PRO, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* ZW */ [DIR, DIR, DIR, DIR, DIR, DIR, DIR, DIR, DIR, DIR, DIR, DIR, DIR, DIR, DIR, DIR, DIR, DIR, DIR, PRO, DIR, DIR, DIR, DIR, DIR, DIR, DIR],
    /* CM */ [IND, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, DIR, IND, IND, DIR, IND, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, DIR],
    /* WJ */ [IND, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, IND, IND, IND, IND, IND, IND, IND, IND, IND, IND, PRO, CMI, PRO, IND, IND, IND, IND, IND],
    /* H2 */ [DIR, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, IND, DIR, DIR, DIR, IND, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, IND, IND],
    /* H3 */ [DIR, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, IND, DIR, DIR, DIR, IND, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, IND],
    /* JL */ [DIR, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, IND, DIR, DIR, DIR, IND, IND, IND, DIR, DIR, PRO, CMI, PRO, IND, IND, IND, IND, DIR],
    /* JV */ [DIR, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, IND, DIR, DIR, DIR, IND, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, IND, IND],
    /* JT */ [DIR, PRO, PRO, IND, IND, IND, PRO, PRO, PRO, DIR, IND, DIR, DIR, DIR, IND, IND, IND, DIR, DIR, PRO, CMI, PRO, DIR, DIR, DIR, DIR, IND],
];

/// Strategy for runs of characters the pair table does not decide: complex context (`SA`)
/// text such as Thai or Khmer, and contingent break (`CB`) objects.
///
/// Real segmentation of these scripts needs a dictionary. Implementations receive the whole
/// run, which holds a single class, and decide its inner gaps.
pub trait ComplexBreak {
    /// Resolves the breaks inside a run of `SA` or `CB` characters.
    ///
    /// `props` holds the run, and `actions` has the same length. The implementation writes the
    /// gaps between the characters it consumes into `actions[..consumed - 1]` and returns
    /// `consumed`. Returning less than the run length starts a new run with the remaining
    /// characters; the value is clamped to `1..=props.len()`.
    fn resolve(&self, props: &[LineBreakProp], actions: &mut [LineBreakAction]) -> usize;
}

impl<F> ComplexBreak for F
where
    F: Fn(&[LineBreakProp], &mut [LineBreakAction]) -> usize,
{
    fn resolve(&self, props: &[LineBreakProp], actions: &mut [LineBreakAction]) -> usize {
        self(props, actions)
    }
}

/// Allows a break between every pair of characters in a complex run.
#[derive(Copy, Clone, Debug, Default)]
pub struct BreakAll;

impl ComplexBreak for BreakAll {
    fn resolve(&self, props: &[LineBreakProp], actions: &mut [LineBreakAction]) -> usize {
        fill_run(props, actions, LineBreakAction::Allowed)
    }
}

/// Keeps a complex run on one line.
#[derive(Copy, Clone, Debug, Default)]
pub struct KeepAll;

impl ComplexBreak for KeepAll {
    fn resolve(&self, props: &[LineBreakProp], actions: &mut [LineBreakAction]) -> usize {
        fill_run(props, actions, LineBreakAction::Prohibited)
    }
}

fn fill_run(
    props: &[LineBreakProp],
    actions: &mut [LineBreakAction],
    fill: LineBreakAction,
) -> usize {
    let len = props.len();
    if let Some(inner) = actions.get_mut(..len.saturating_sub(1)) {
        inner.fill(fill);
    }
    len
}

/// Length of the run of `SA` or `CB` characters at the start of `props`.
///
/// A run holds one class only; `SA` followed by `CB` is two runs.
pub fn complex_run_len(props: &[LineBreakProp]) -> usize {
    match props.first() {
        Some(&first @ (SA | CB)) => props.iter().take_while(|&&prop| prop == first).count(),
        _ => 0,
    }
}

/// Finds line break opportunities, breaking anywhere inside complex runs.
///
/// Entry `i` of the result is the action for the gap after `props[i]`. The last entry is
/// always [`LineBreakAction::Mandatory`]; empty input gives an empty result.
///
/// ```
/// use unitext::{find_line_breaks, LineBreakAction::*, LineBreakProp::*};
///
/// // "(x y"
/// let actions = find_line_breaks(&[OpenPunctuation, Alphabetic, Space, Alphabetic]);
/// assert_eq!(actions, [Prohibited, Prohibited, Allowed, Mandatory]);
/// ```
pub fn find_line_breaks(props: &[LineBreakProp]) -> Vec<LineBreakAction> {
    find_line_breaks_with(props, &BreakAll)
}

/// Finds line break opportunities, resolving complex runs with `complex`.
pub fn find_line_breaks_with<C>(props: &[LineBreakProp], complex: &C) -> Vec<LineBreakAction>
where
    C: ComplexBreak + ?Sized,
{
    let mut actions = vec![LineBreakAction::Prohibited; props.len()];
    find_line_breaks_into(&mut actions, props, complex);
    actions
}

/// Like [`find_line_breaks_with`], writing into `actions`.
///
/// # Panics
///
/// Panics if `actions` is shorter than `props`.
pub fn find_line_breaks_into<C>(
    actions: &mut [LineBreakAction],
    props: &[LineBreakProp],
    complex: &C,
) where
    C: ComplexBreak + ?Sized,
{
    let len = props.len();
    if len == 0 {
        return;
    }
    let actions = &mut actions[..len];
    let mut complex_run: Range<usize> = 0..0;
    // Class on the left of the next pair; spaces and attached marks leave it unchanged.
    let mut cls = WJ;
    // Resolved class of the previous character.
    let mut prev = WJ;
    for (index, &raw) in props.iter().enumerate() {
        if matches!(raw, SA | CB) && !complex_run.contains(&index) {
            let run = index..index + complex_run_len(&props[index..]);
            let consumed = complex
                .resolve(&props[run.clone()], &mut actions[run.clone()])
                .clamp(1, run.len());
            complex_run = index..index + consumed;
        }
        let cur = resolve_class(raw);
        let Some(gap) = index.checked_sub(1) else {
            cls = start_class(cur);
            prev = cur;
            continue;
        };
        if matches!(prev, BK | LF | NL) || (prev == CR && cur != LF) {
            actions[gap] = LineBreakAction::Mandatory;
            cls = start_class(cur);
        } else if matches!(cur, BK | CR | LF | NL | SP) {
            actions[gap] = LineBreakAction::Prohibited;
        } else if complex_run.contains(&gap) && complex_run.contains(&index) {
            // Decided by the complex strategy.
            cls = cur;
        } else {
            let (action, next_cls) = pair_action(cls, cur, prev == SP);
            actions[gap] = action;
            cls = next_cls;
        }
        prev = cur;
    }
    actions[len - 1] = LineBreakAction::Mandatory;
}

/// Maps classes without pair table rules onto the class they act as.
fn resolve_class(prop: LineBreakProp) -> LineBreakProp {
    match prop {
        AI | SG | XX | SA => AL,
        CB => ID,
        other => other,
    }
}

/// Class on the left of the first pair of a line.
fn start_class(cur: LineBreakProp) -> LineBreakProp {
    match cur {
        SP => WJ,
        LF | NL => BK,
        other => other,
    }
}

/// Looks up the pair `cls cur` and returns the action and the class left for the next pair.
fn pair_action(
    cls: LineBreakProp,
    cur: LineBreakProp,
    after_space: bool,
) -> (LineBreakAction, LineBreakProp) {
    debug_assert!(
        cls.is_table_class() && cur.is_table_class(),
        "pair {cls:?} {cur:?} is outside the pair table"
    );
    let allowed_after_space = if after_space {
        LineBreakAction::Allowed
    } else {
        LineBreakAction::Prohibited
    };
    match PAIR_TABLE[cls as usize][cur as usize] {
        PairAction::Direct => (LineBreakAction::Allowed, cur),
        PairAction::Indirect => (allowed_after_space, cur),
        // A mark after a space stands alone and acts as a letter.
        PairAction::CombiningIndirect if after_space => (LineBreakAction::Allowed, AL),
        PairAction::CombiningIndirect => (LineBreakAction::Prohibited, cls),
        PairAction::CombiningProhibited if after_space => (LineBreakAction::Prohibited, AL),
        PairAction::CombiningProhibited => (LineBreakAction::Prohibited, cls),
        PairAction::Prohibited => (LineBreakAction::Prohibited, cur),
    }
}

impl CharData {
    /// Line break opportunities of a code point sequence, as in [`find_line_breaks`].
    pub fn line_breaks(&self, codepoints: &[u32]) -> Vec<LineBreakAction> {
        find_line_breaks(&self.line_break_props(codepoints))
    }
}
