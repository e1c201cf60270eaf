// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds the character tables from ICU4X compiled data.
//!
//! ICU property values newer than the classic alphabets used by the segmentation rules are
//! folded onto their closest classic value.

use icu_casemap::{CaseMapper, CaseMapperBorrowed};
use icu_properties::props::{
    BidiClass as IcuBidi, GeneralCategory as IcuCategory, GraphemeClusterBreak, LineBreak,
    WordBreak,
};
use icu_properties::{CodePointMapData, CodePointMapDataBorrowed};

use crate::props::{BidiClass, GeneralCategory, GraphemeBreakProp, LineBreakProp, WordBreakProp};
use crate::{CharData, CharRecord, TableBuilder, MAX_CODEPOINTS};

/// Computes the record of every code point and compacts the result.
pub(crate) fn build_char_data() -> CharData {
    match TableBuilder::build(IcuRecords::new()) {
        Ok(data) => data,
        // ICU data has a few thousand distinct records, far below the addressable limit.
        Err(err) => unreachable!("ICU data produced invalid tables: {err}"),
    }
}

/// Yields one record per code point in `0..MAX_CODEPOINTS`.
pub(crate) struct IcuRecords {
    categories: CodePointMapDataBorrowed<'static, IcuCategory>,
    graphemes: CodePointMapDataBorrowed<'static, GraphemeClusterBreak>,
    lines: CodePointMapDataBorrowed<'static, LineBreak>,
    words: CodePointMapDataBorrowed<'static, WordBreak>,
    bidi: CodePointMapDataBorrowed<'static, IcuBidi>,
    case: CaseMapperBorrowed<'static>,
    next: u32,
    digit_run_start: Option<u32>,
}

impl IcuRecords {
    pub(crate) fn new() -> Self {
        Self {
            categories: CodePointMapData::<IcuCategory>::new(),
            graphemes: CodePointMapData::<GraphemeClusterBreak>::new(),
            lines: CodePointMapData::<LineBreak>::new(),
            words: CodePointMapData::<WordBreak>::new(),
            bidi: CodePointMapData::<IcuBidi>::new(),
            case: CaseMapper::new(),
            next: 0,
            digit_run_start: None,
        }
    }

    fn record(&mut self, codepoint: u32) -> CharRecord {
        let category = general_category(self.categories.get32(codepoint));
        if category == GeneralCategory::Unassigned {
            self.digit_run_start = None;
            return CharRecord::UNASSIGNED;
        }
        // Decimal digits come in contiguous runs of ten, each starting at zero.
        let digit = if category == GeneralCategory::DecimalNumber {
            let start = *self.digit_run_start.get_or_insert(codepoint);
            digit_value(codepoint - start)
        } else {
            self.digit_run_start = None;
            0
        };
        let (upper, lower, title) = match char::from_u32(codepoint) {
            Some(ch) => (
                mapping(self.case.simple_uppercase(ch), codepoint),
                mapping(self.case.simple_lowercase(ch), codepoint),
                mapping(self.case.simple_titlecase(ch), codepoint),
            ),
            None => (0, 0, 0),
        };
        CharRecord {
            upper,
            lower,
            title,
            digit,
            category,
            grapheme_break: grapheme_break(self.graphemes.get32(codepoint)),
            line_break: line_break(self.lines.get32(codepoint)),
            word_break: word_break(self.words.get32(codepoint)),
            bidi_class: bidi_class(self.bidi.get32(codepoint)),
            kangxi_radical: 0,
            residual_strokes: 0,
        }
    }
}

impl Iterator for IcuRecords {
    type Item = CharRecord;

    fn next(&mut self) -> Option<CharRecord> {
        if self.next >= MAX_CODEPOINTS {
            return None;
        }
        let codepoint = self.next;
        self.next += 1;
        Some(self.record(codepoint))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the remainder is below 10"
)]
fn digit_value(offset: u32) -> u8 {
    (offset % 10) as u8
}

fn mapping(mapped: char, codepoint: u32) -> u32 {
    let mapped = u32::from(mapped);
    if mapped == codepoint {
        0
    } else {
        mapped
    }
}

pub(crate) fn general_category(category: IcuCategory) -> GeneralCategory {
    use GeneralCategory as Gc;
    match category {
        IcuCategory::Unassigned => Gc::Unassigned,
        IcuCategory::UppercaseLetter => Gc::UppercaseLetter,
        IcuCategory::LowercaseLetter => Gc::LowercaseLetter,
        IcuCategory::TitlecaseLetter => Gc::TitlecaseLetter,
        IcuCategory::ModifierLetter => Gc::ModifierLetter,
        IcuCategory::OtherLetter => Gc::OtherLetter,
        IcuCategory::NonspacingMark => Gc::NonspacingMark,
        IcuCategory::SpacingMark => Gc::SpacingMark,
        IcuCategory::EnclosingMark => Gc::EnclosingMark,
        IcuCategory::DecimalNumber => Gc::DecimalNumber,
        IcuCategory::LetterNumber => Gc::LetterNumber,
        IcuCategory::OtherNumber => Gc::OtherNumber,
        IcuCategory::ConnectorPunctuation => Gc::ConnectorPunctuation,
        IcuCategory::DashPunctuation => Gc::DashPunctuation,
        IcuCategory::OpenPunctuation => Gc::OpenPunctuation,
        IcuCategory::ClosePunctuation => Gc::ClosePunctuation,
        IcuCategory::InitialPunctuation => Gc::InitialPunctuation,
        IcuCategory::FinalPunctuation => Gc::FinalPunctuation,
        IcuCategory::OtherPunctuation => Gc::OtherPunctuation,
        IcuCategory::MathSymbol => Gc::MathSymbol,
        IcuCategory::CurrencySymbol => Gc::CurrencySymbol,
        IcuCategory::ModifierSymbol => Gc::ModifierSymbol,
        IcuCategory::OtherSymbol => Gc::OtherSymbol,
        IcuCategory::SpaceSeparator => Gc::SpaceSeparator,
        IcuCategory::LineSeparator => Gc::LineSeparator,
        IcuCategory::ParagraphSeparator => Gc::ParagraphSeparator,
        IcuCategory::Control => Gc::Control,
        IcuCategory::Format => Gc::Format,
        IcuCategory::Surrogate => Gc::Surrogate,
        IcuCategory::PrivateUse => Gc::PrivateUse,
    }
}

pub(crate) fn bidi_class(class: IcuBidi) -> BidiClass {
    use BidiClass as B;
    match class {
        IcuBidi::LeftToRight => B::LeftToRight,
        IcuBidi::RightToLeft => B::RightToLeft,
        IcuBidi::ArabicLetter => B::ArabicLetter,
        IcuBidi::EuropeanNumber => B::EuropeanNumber,
        IcuBidi::EuropeanSeparator => B::EuropeanSeparator,
        IcuBidi::EuropeanTerminator => B::EuropeanTerminator,
        IcuBidi::ArabicNumber => B::ArabicNumber,
        IcuBidi::CommonSeparator => B::CommonSeparator,
        IcuBidi::NonspacingMark => B::NonspacingMark,
        IcuBidi::BoundaryNeutral => B::BoundaryNeutral,
        IcuBidi::ParagraphSeparator => B::ParagraphSeparator,
        IcuBidi::SegmentSeparator => B::SegmentSeparator,
        IcuBidi::WhiteSpace => B::WhiteSpace,
        IcuBidi::LeftToRightEmbedding => B::LeftToRightEmbedding,
        IcuBidi::LeftToRightOverride => B::LeftToRightOverride,
        IcuBidi::RightToLeftEmbedding => B::RightToLeftEmbedding,
        IcuBidi::RightToLeftOverride => B::RightToLeftOverride,
        IcuBidi::PopDirectionalFormat => B::PopDirectionalFormat,
        IcuBidi::LeftToRightIsolate => B::LeftToRightIsolate,
        IcuBidi::RightToLeftIsolate => B::RightToLeftIsolate,
        IcuBidi::FirstStrongIsolate => B::FirstStrongIsolate,
        IcuBidi::PopDirectionalIsolate => B::PopDirectionalIsolate,
        _ => B::OtherNeutral,
    }
}

pub(crate) fn grapheme_break(value: GraphemeClusterBreak) -> GraphemeBreakProp {
    use GraphemeBreakProp as G;
    match value {
        GraphemeClusterBreak::Control => G::Control,
        GraphemeClusterBreak::CR => G::Cr,
        GraphemeClusterBreak::Extend
        | GraphemeClusterBreak::EModifier
        | GraphemeClusterBreak::ZWJ => G::Extend,
        GraphemeClusterBreak::L => G::L,
        GraphemeClusterBreak::LF => G::Lf,
        GraphemeClusterBreak::LV => G::Lv,
        GraphemeClusterBreak::LVT => G::Lvt,
        GraphemeClusterBreak::T => G::T,
        GraphemeClusterBreak::V => G::V,
        GraphemeClusterBreak::SpacingMark => G::SpacingMark,
        GraphemeClusterBreak::Prepend => G::Prepend,
        _ => G::Other,
    }
}

pub(crate) fn word_break(value: WordBreak) -> WordBreakProp {
    use WordBreakProp as W;
    match value {
        WordBreak::ALetter | WordBreak::HebrewLetter => W::ALetter,
        WordBreak::Format => W::Format,
        WordBreak::Katakana => W::Katakana,
        WordBreak::MidLetter => W::MidLetter,
        WordBreak::MidNum => W::MidNum,
        WordBreak::Numeric => W::Numeric,
        WordBreak::ExtendNumLet => W::ExtendNumLet,
        WordBreak::CR => W::Cr,
        WordBreak::Extend | WordBreak::ZWJ => W::Extend,
        WordBreak::LF => W::Lf,
        WordBreak::MidNumLet | WordBreak::SingleQuote => W::MidNumLet,
        WordBreak::Newline => W::Newline,
        _ => W::Other,
    }
}

pub(crate) fn line_break(value: LineBreak) -> LineBreakProp {
    use LineBreakProp as L;
    match value {
        LineBreak::Ambiguous => L::Ambiguous,
        LineBreak::Alphabetic
        | LineBreak::HebrewLetter
        | LineBreak::RegionalIndicator
        | LineBreak::Aksara
        | LineBreak::AksaraPrebase
        | LineBreak::AksaraStart => L::Alphabetic,
        LineBreak::BreakBoth => L::BreakBoth,
        LineBreak::BreakAfter => L::BreakAfter,
        LineBreak::BreakBefore => L::BreakBefore,
        LineBreak::MandatoryBreak => L::MandatoryBreak,
        LineBreak::ContingentBreak => L::ContingentBreak,
        LineBreak::ClosePunctuation => L::ClosePunctuation,
        LineBreak::CombiningMark
        | LineBreak::ZWJ
        | LineBreak::ViramaFinal
        | LineBreak::Virama => L::CombiningMark,
        LineBreak::CarriageReturn => L::CarriageReturn,
        LineBreak::Exclamation => L::Exclamation,
        LineBreak::Glue => L::Glue,
        LineBreak::Hyphen => L::Hyphen,
        LineBreak::Ideographic | LineBreak::EBase | LineBreak::EModifier => L::Ideographic,
        LineBreak::Inseparable => L::Inseparable,
        LineBreak::InfixNumeric => L::InfixNumeric,
        LineBreak::LineFeed => L::LineFeed,
        LineBreak::Nonstarter | LineBreak::ConditionalJapaneseStarter => L::Nonstarter,
        LineBreak::Numeric => L::Numeric,
        LineBreak::OpenPunctuation => L::OpenPunctuation,
        LineBreak::PostfixNumeric => L::PostfixNumeric,
        LineBreak::PrefixNumeric => L::PrefixNumeric,
        LineBreak::Quotation => L::Quotation,
        LineBreak::ComplexContext => L::ComplexContext,
        LineBreak::Surrogate => L::Surrogate,
        LineBreak::Space => L::Space,
        LineBreak::BreakSymbols => L::BreakSymbols,
        LineBreak::ZWSpace => L::ZwSpace,
        LineBreak::NextLine => L::NextLine,
        LineBreak::WordJoiner => L::WordJoiner,
        LineBreak::H2 => L::HangulLvSyllable,
        LineBreak::H3 => L::HangulLvtSyllable,
        LineBreak::JL => L::HangulLJamo,
        LineBreak::JT => L::HangulTJamo,
        LineBreak::JV => L::HangulVJamo,
        LineBreak::CloseParenthesis => L::CloseParenthesis,
        _ => L::Unknown,
    }
}
