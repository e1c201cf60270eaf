// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character property value enums.
//!
//! The break property alphabets are the ones the segmentation algorithms in this crate are
//! written against. Newer Unicode values are folded onto them when the tables are built.

/// The seven major classes of the general category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CategoryClass {
    /// `L*`
    Letter = 0,
    /// `M*`
    Mark = 1,
    /// `N*`
    Number = 2,
    /// `P*`
    Punctuation = 3,
    /// `S*`
    Symbol = 4,
    /// `Z*`
    Separator = 5,
    /// `C*`
    Other = 6,
}

/// Unicode general category.
///
/// The discriminant packs the [`CategoryClass`] into the high nibble, so `category as u8 >> 4`
/// yields the class.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "datagen", derive(databake::Bake))]
#[cfg_attr(feature = "datagen", databake(path = unitext))]
#[repr(u8)]
#[allow(missing_docs, reason = "variants are the Unicode long value names")]
pub enum GeneralCategory {
    UppercaseLetter = 0x00,
    LowercaseLetter = 0x01,
    TitlecaseLetter = 0x02,
    ModifierLetter = 0x03,
    OtherLetter = 0x04,

    NonspacingMark = 0x10,
    SpacingMark = 0x11,
    EnclosingMark = 0x12,

    DecimalNumber = 0x20,
    LetterNumber = 0x21,
    OtherNumber = 0x22,

    ConnectorPunctuation = 0x30,
    DashPunctuation = 0x31,
    OpenPunctuation = 0x32,
    ClosePunctuation = 0x33,
    InitialPunctuation = 0x34,
    FinalPunctuation = 0x35,
    OtherPunctuation = 0x36,

    MathSymbol = 0x40,
    CurrencySymbol = 0x41,
    ModifierSymbol = 0x42,
    OtherSymbol = 0x43,

    SpaceSeparator = 0x50,
    LineSeparator = 0x51,
    ParagraphSeparator = 0x52,

    Control = 0x60,
    Format = 0x61,
    Surrogate = 0x62,
    PrivateUse = 0x63,
    /// `Cn`, the category of every code point without a record of its own.
    Unassigned = 0x64,
}

impl GeneralCategory {
    /// Returns the major class of this category.
    #[inline]
    pub const fn class(self) -> CategoryClass {
        match self as u8 >> 4 {
            0 => CategoryClass::Letter,
            1 => CategoryClass::Mark,
            2 => CategoryClass::Number,
            3 => CategoryClass::Punctuation,
            4 => CategoryClass::Symbol,
            5 => CategoryClass::Separator,
            _ => CategoryClass::Other,
        }
    }

    /// Returns the two-letter short name (`Lu`, `Nd`, …).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::Unassigned => "Cn",
        }
    }

    /// Every category, in discriminant order.
    pub const ALL: [Self; 30] = [
        Self::UppercaseLetter,
        Self::LowercaseLetter,
        Self::TitlecaseLetter,
        Self::ModifierLetter,
        Self::OtherLetter,
        Self::NonspacingMark,
        Self::SpacingMark,
        Self::EnclosingMark,
        Self::DecimalNumber,
        Self::LetterNumber,
        Self::OtherNumber,
        Self::ConnectorPunctuation,
        Self::DashPunctuation,
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::InitialPunctuation,
        Self::FinalPunctuation,
        Self::OtherPunctuation,
        Self::MathSymbol,
        Self::CurrencySymbol,
        Self::ModifierSymbol,
        Self::OtherSymbol,
        Self::SpaceSeparator,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::Control,
        Self::Format,
        Self::Surrogate,
        Self::PrivateUse,
        Self::Unassigned,
    ];
}

/// Grapheme cluster break property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "datagen", derive(databake::Bake))]
#[cfg_attr(feature = "datagen", databake(path = unitext))]
#[repr(u8)]
#[allow(missing_docs, reason = "variants are the UAX #29 value names")]
pub enum GraphemeBreakProp {
    Other = 0,
    Cr,
    Lf,
    Control,
    Extend,
    Prepend,
    SpacingMark,
    /// Hangul leading jamo.
    L,
    /// Hangul vowel jamo.
    V,
    /// Hangul trailing jamo.
    T,
    /// Hangul LV syllable.
    Lv,
    /// Hangul LVT syllable.
    Lvt,
}

impl GraphemeBreakProp {
    /// Number of values.
    pub const COUNT: usize = 12;

    /// Every value, in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Other,
        Self::Cr,
        Self::Lf,
        Self::Control,
        Self::Extend,
        Self::Prepend,
        Self::SpacingMark,
        Self::L,
        Self::V,
        Self::T,
        Self::Lv,
        Self::Lvt,
    ];
}

/// Word break property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "datagen", derive(databake::Bake))]
#[cfg_attr(feature = "datagen", databake(path = unitext))]
#[repr(u8)]
#[allow(missing_docs, reason = "variants are the UAX #29 value names")]
pub enum WordBreakProp {
    Other = 0,
    Cr,
    Lf,
    Newline,
    Extend,
    Format,
    Katakana,
    ALetter,
    MidLetter,
    MidNum,
    MidNumLet,
    Numeric,
    ExtendNumLet,
}

impl WordBreakProp {
    /// Number of values.
    pub const COUNT: usize = 13;

    /// Every value, in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Other,
        Self::Cr,
        Self::Lf,
        Self::Newline,
        Self::Extend,
        Self::Format,
        Self::Katakana,
        Self::ALetter,
        Self::MidLetter,
        Self::MidNum,
        Self::MidNumLet,
        Self::Numeric,
        Self::ExtendNumLet,
    ];
}

/// Line break class.
///
/// The first [`LineBreakProp::TABLE_COUNT`] values index the pair table directly; the rest are
/// resolved by explicit rules before the table is consulted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "datagen", derive(databake::Bake))]
#[cfg_attr(feature = "datagen", databake(path = unitext))]
#[repr(u8)]
pub enum LineBreakProp {
    // Pair table classes.
    /// `OP`: prohibit line breaks after.
    OpenPunctuation = 0,
    /// `CL`: prohibit line breaks before.
    ClosePunctuation,
    /// `CP`: prohibit line breaks before.
    CloseParenthesis,
    /// `QU`: act like they are both opening and closing.
    Quotation,
    /// `GL`: prohibit line breaks before and after.
    Glue,
    /// `NS`: allow only indirect line breaks before.
    Nonstarter,
    /// `EX`: prohibit line breaks before.
    Exclamation,
    /// `SY`: prevent a break before, allow a break after.
    BreakSymbols,
    /// `IS`: prevent breaks after any and before numeric.
    InfixNumeric,
    /// `PR`: do not break in front of a numeric expression.
    PrefixNumeric,
    /// `PO`: do not break following a numeric expression.
    PostfixNumeric,
    /// `NU`: form numeric expressions.
    Numeric,
    /// `AL`: alphabetic characters and symbols used with them.
    Alphabetic,
    /// `ID`: break before or after, except in some numeric context.
    Ideographic,
    /// `IN`: allow only indirect line breaks between pairs.
    Inseparable,
    /// `HY`: break after, except in numeric context.
    Hyphen,
    /// `BA`: generally break after.
    BreakAfter,
    /// `BB`: generally break before.
    BreakBefore,
    /// `B2`: break before and after, but not between two of them.
    BreakBoth,
    /// `ZW`: zero width space, always a break opportunity after.
    ZwSpace,
    /// `CM`: combining marks, attach to the preceding character.
    CombiningMark,
    /// `WJ`: prohibit line breaks before and after.
    WordJoiner,
    /// `H2`: Hangul LV syllable.
    HangulLvSyllable,
    /// `H3`: Hangul LVT syllable.
    HangulLvtSyllable,
    /// `JL`: Hangul leading jamo.
    HangulLJamo,
    /// `JV`: Hangul vowel jamo.
    HangulVJamo,
    /// `JT`: Hangul trailing jamo.
    HangulTJamo,

    // Classes resolved before the pair table.
    /// `SA`: complex context (South East Asian scripts).
    ComplexContext,
    /// `SP`: space, enables indirect breaks.
    Space,
    /// `BK`: mandatory break after.
    MandatoryBreak,
    /// `CR`: carriage return.
    CarriageReturn,
    /// `LF`: line feed.
    LineFeed,
    /// `NL`: next line.
    NextLine,
    /// `CB`: contingent break opportunity.
    ContingentBreak,
    /// `SG`: surrogates.
    Surrogate,
    /// `AI`: ambiguous width, resolved as alphabetic.
    Ambiguous,
    /// `XX`: unknown or unassigned.
    Unknown,
}

impl LineBreakProp {
    /// Number of values.
    pub const COUNT: usize = 37;

    /// Number of classes handled by the pair table.
    pub const TABLE_COUNT: usize = 27;

    /// Every value, in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::CloseParenthesis,
        Self::Quotation,
        Self::Glue,
        Self::Nonstarter,
        Self::Exclamation,
        Self::BreakSymbols,
        Self::InfixNumeric,
        Self::PrefixNumeric,
        Self::PostfixNumeric,
        Self::Numeric,
        Self::Alphabetic,
        Self::Ideographic,
        Self::Inseparable,
        Self::Hyphen,
        Self::BreakAfter,
        Self::BreakBefore,
        Self::BreakBoth,
        Self::ZwSpace,
        Self::CombiningMark,
        Self::WordJoiner,
        Self::HangulLvSyllable,
        Self::HangulLvtSyllable,
        Self::HangulLJamo,
        Self::HangulVJamo,
        Self::HangulTJamo,
        Self::ComplexContext,
        Self::Space,
        Self::MandatoryBreak,
        Self::CarriageReturn,
        Self::LineFeed,
        Self::NextLine,
        Self::ContingentBreak,
        Self::Surrogate,
        Self::Ambiguous,
        Self::Unknown,
    ];

    /// Returns `true` if this class indexes the pair table.
    #[inline]
    pub const fn is_table_class(self) -> bool {
        (self as usize) < Self::TABLE_COUNT
    }

    /// Returns the two-letter UAX #14 abbreviation.
    pub const fn short_name(self) -> &'static str {
        const NAMES: [&str; LineBreakProp::COUNT] = [
            "OP", "CL", "CP", "QU", "GL", "NS", "EX", "SY", "IS", "PR", "PO", "NU", "AL", "ID",
            "IN", "HY", "BA", "BB", "B2", "ZW", "CM", "WJ", "H2", "H3", "JL", "JV", "JT", "SA",
            "SP", "BK", "CR", "LF", "NL", "CB", "SG", "AI", "XX",
        ];
        NAMES[self as usize]
    }
}

/// Bidirectional character type.
///
/// Only the per-character class is provided; the bidi algorithm itself is out of scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "datagen", derive(databake::Bake))]
#[cfg_attr(feature = "datagen", databake(path = unitext))]
#[repr(u8)]
pub enum BidiClass {
    /// `L`
    LeftToRight = 0,
    /// `R`
    RightToLeft,
    /// `AL`
    ArabicLetter,
    /// `EN`
    EuropeanNumber,
    /// `ES`
    EuropeanSeparator,
    /// `ET`
    EuropeanTerminator,
    /// `AN`
    ArabicNumber,
    /// `CS`
    CommonSeparator,
    /// `NSM`
    NonspacingMark,
    /// `BN`
    BoundaryNeutral,
    /// `B`
    ParagraphSeparator,
    /// `S`
    SegmentSeparator,
    /// `WS`
    WhiteSpace,
    /// `ON`
    OtherNeutral,
    /// `LRE`
    LeftToRightEmbedding,
    /// `LRO`
    LeftToRightOverride,
    /// `RLE`
    RightToLeftEmbedding,
    /// `RLO`
    RightToLeftOverride,
    /// `PDF`
    PopDirectionalFormat,
    /// `LRI`
    LeftToRightIsolate,
    /// `RLI`
    RightToLeftIsolate,
    /// `FSI`
    FirstStrongIsolate,
    /// `PDI`
    PopDirectionalIsolate,
}

impl BidiClass {
    /// Returns the UAX #9 abbreviation (`L`, `AL`, `NSM`, …).
    pub const fn short_name(self) -> &'static str {
        const NAMES: [&str; 23] = [
            "L", "R", "AL", "EN", "ES", "ET", "AN", "CS", "NSM", "BN", "B", "S", "WS", "ON",
            "LRE", "LRO", "RLE", "RLO", "PDF", "LRI", "RLI", "FSI", "PDI",
        ];
        NAMES[self as usize]
    }

    /// Every value, in discriminant order.
    pub const ALL: [Self; 23] = [
        Self::LeftToRight,
        Self::RightToLeft,
        Self::ArabicLetter,
        Self::EuropeanNumber,
        Self::EuropeanSeparator,
        Self::EuropeanTerminator,
        Self::ArabicNumber,
        Self::CommonSeparator,
        Self::NonspacingMark,
        Self::BoundaryNeutral,
        Self::ParagraphSeparator,
        Self::SegmentSeparator,
        Self::WhiteSpace,
        Self::OtherNeutral,
        Self::LeftToRightEmbedding,
        Self::LeftToRightOverride,
        Self::RightToLeftEmbedding,
        Self::RightToLeftOverride,
        Self::PopDirectionalFormat,
        Self::LeftToRightIsolate,
        Self::RightToLeftIsolate,
        Self::FirstStrongIsolate,
        Self::PopDirectionalIsolate,
    ];
}
