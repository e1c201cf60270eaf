// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsers for the Unicode Character Database files the tables are built from.

use std::fmt;
use std::ops::RangeInclusive;

use unitext::{BidiClass, GeneralCategory, GraphemeBreakProp, LineBreakProp, WordBreakProp};

/// A malformed line in a UCD file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UcdError {
    /// One-based line number.
    pub line: usize,
    /// What is wrong with the line.
    pub kind: UcdErrorKind,
}

/// The kind of a [`UcdError`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UcdErrorKind {
    /// The line has fewer fields than the format requires.
    MissingField(usize),
    /// A code point is not hexadecimal or is above U+10FFFF.
    InvalidCodepoint(String),
    /// A range ends before it starts, or a `First>` line has no matching `Last>` line.
    InvalidRange,
    /// A property value name is not known.
    UnknownValue(String),
}

impl fmt::Display for UcdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            UcdErrorKind::MissingField(field) => write!(f, "missing field {field}"),
            UcdErrorKind::InvalidCodepoint(text) => write!(f, "invalid code point `{text}`"),
            UcdErrorKind::InvalidRange => f.write_str("invalid code point range"),
            UcdErrorKind::UnknownValue(name) => write!(f, "unknown property value `{name}`"),
        }
    }
}

impl std::error::Error for UcdError {}

/// One line (or `First>`/`Last>` pair) of `UnicodeData.txt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnicodeDataEntry {
    /// Code points described by the entry.
    pub range: RangeInclusive<u32>,
    /// General category.
    pub category: GeneralCategory,
    /// Bidirectional class.
    pub bidi_class: BidiClass,
    /// Decimal digit value.
    pub digit: Option<u8>,
    /// Simple uppercase mapping.
    pub upper: Option<u32>,
    /// Simple lowercase mapping.
    pub lower: Option<u32>,
    /// Simple titlecase mapping; falls back to the uppercase mapping when the field is empty.
    pub title: Option<u32>,
}

/// Parses `UnicodeData.txt`.
pub fn parse_unicode_data(text: &str) -> Result<Vec<UnicodeDataEntry>, UcdError> {
    let mut entries = Vec::new();
    let mut range_start: Option<(usize, u32)> = None;
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let err = |kind| UcdError {
            line: line_number,
            kind,
        };
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() < 15 {
            return Err(err(UcdErrorKind::MissingField(fields.len())));
        }
        let codepoint = parse_codepoint(fields[0]).map_err(err)?;
        let name = fields[1];
        if name.ends_with(", First>") {
            range_start = Some((line_number, codepoint));
            continue;
        }
        let range = if name.ends_with(", Last>") {
            match range_start.take() {
                Some((_, start)) if start <= codepoint => start..=codepoint,
                _ => return Err(err(UcdErrorKind::InvalidRange)),
            }
        } else {
            codepoint..=codepoint
        };
        let category = general_category(fields[2]).ok_or_else(|| err(unknown(fields[2])))?;
        let bidi_class = bidi_class(fields[4]).ok_or_else(|| err(unknown(fields[4])))?;
        let digit = match fields[6].trim() {
            "" => None,
            value => Some(
                value
                    .parse::<u8>()
                    .ok()
                    .filter(|&digit| digit < 10)
                    .ok_or_else(|| err(unknown(value)))?,
            ),
        };
        let upper = parse_optional_codepoint(fields[12]).map_err(err)?;
        let lower = parse_optional_codepoint(fields[13]).map_err(err)?;
        let title = parse_optional_codepoint(fields[14]).map_err(err)?.or(upper);
        entries.push(UnicodeDataEntry {
            range,
            category,
            bidi_class,
            digit,
            upper,
            lower,
            title,
        });
    }
    if let Some((line, _)) = range_start {
        return Err(UcdError {
            line,
            kind: UcdErrorKind::InvalidRange,
        });
    }
    Ok(entries)
}

/// A property file: defaults from `@missing` lines, then explicit assignments, in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyFile<T> {
    /// Values for code points not listed explicitly.
    pub missing: Vec<(RangeInclusive<u32>, T)>,
    /// Explicit assignments.
    pub values: Vec<(RangeInclusive<u32>, T)>,
}

impl<T: Copy> PropertyFile<T> {
    /// Passes every default, then every explicit value, to `set`.
    pub fn apply(&self, mut set: impl FnMut(u32, T)) {
        for (range, value) in self.missing.iter().chain(&self.values) {
            for codepoint in range.clone() {
                set(codepoint, *value);
            }
        }
    }
}

/// Parses a `codepoint[..codepoint] ; value # comment` file such as `LineBreak.txt`.
///
/// `value` maps a property value name to its folded value.
pub fn parse_property_file<T>(
    text: &str,
    value: impl Fn(&str) -> Option<T>,
) -> Result<PropertyFile<T>, UcdError> {
    let mut file = PropertyFile {
        missing: Vec::new(),
        values: Vec::new(),
    };
    for (index, line) in text.lines().enumerate() {
        let err = |kind| UcdError {
            line: index + 1,
            kind,
        };
        let (data, is_missing) = match line.trim_start().strip_prefix("# @missing:") {
            Some(rest) => (rest, true),
            None => (line.split('#').next().unwrap_or_default(), false),
        };
        if data.trim().is_empty() {
            continue;
        }
        let mut fields = data.split(';').map(str::trim);
        let range = parse_range(fields.next().unwrap_or_default()).map_err(err)?;
        let name = fields
            .next()
            .ok_or_else(|| err(UcdErrorKind::MissingField(1)))?;
        let parsed = value(name).ok_or_else(|| err(unknown(name)))?;
        if is_missing {
            file.missing.push((range, parsed));
        } else {
            file.values.push((range, parsed));
        }
    }
    Ok(file)
}

fn unknown(name: &str) -> UcdErrorKind {
    UcdErrorKind::UnknownValue(name.to_owned())
}

fn parse_codepoint(text: &str) -> Result<u32, UcdErrorKind> {
    let text = text.trim();
    u32::from_str_radix(text, 16)
        .ok()
        .filter(|&codepoint| codepoint < unitext::MAX_CODEPOINTS)
        .ok_or_else(|| UcdErrorKind::InvalidCodepoint(text.to_owned()))
}

fn parse_optional_codepoint(text: &str) -> Result<Option<u32>, UcdErrorKind> {
    match text.trim() {
        "" => Ok(None),
        text => parse_codepoint(text).map(Some),
    }
}

fn parse_range(text: &str) -> Result<RangeInclusive<u32>, UcdErrorKind> {
    let (start, end) = match text.split_once("..") {
        Some((start, end)) => (parse_codepoint(start)?, parse_codepoint(end)?),
        None => {
            let codepoint = parse_codepoint(text)?;
            (codepoint, codepoint)
        }
    };
    if start > end {
        return Err(UcdErrorKind::InvalidRange);
    }
    Ok(start..=end)
}

/// Maps a two-letter general category abbreviation.
pub fn general_category(name: &str) -> Option<GeneralCategory> {
    GeneralCategory::ALL
        .into_iter()
        .find(|category| category.short_name() == name)
}

/// Maps a bidi class abbreviation.
pub fn bidi_class(name: &str) -> Option<BidiClass> {
    BidiClass::ALL
        .into_iter()
        .find(|class| class.short_name() == name)
}

/// Maps a `GraphemeBreakProperty.txt` value, folding emoji and regional indicator values.
pub fn grapheme_break(name: &str) -> Option<GraphemeBreakProp> {
    use GraphemeBreakProp as G;
    Some(match name {
        "CR" => G::Cr,
        "LF" => G::Lf,
        "Control" => G::Control,
        "Extend" | "ZWJ" | "E_Modifier" => G::Extend,
        "Prepend" => G::Prepend,
        "SpacingMark" => G::SpacingMark,
        "L" => G::L,
        "V" => G::V,
        "T" => G::T,
        "LV" => G::Lv,
        "LVT" => G::Lvt,
        "Other" | "Regional_Indicator" | "E_Base" | "E_Base_GAZ" | "Glue_After_Zwj" => G::Other,
        _ => return None,
    })
}

/// Maps a `WordBreakProperty.txt` value, folding values newer than the classic rules.
pub fn word_break(name: &str) -> Option<WordBreakProp> {
    use WordBreakProp as W;
    Some(match name {
        "CR" => W::Cr,
        "LF" => W::Lf,
        "Newline" => W::Newline,
        "Extend" | "ZWJ" => W::Extend,
        "Format" => W::Format,
        "Katakana" => W::Katakana,
        "ALetter" | "Hebrew_Letter" => W::ALetter,
        "MidLetter" => W::MidLetter,
        "MidNum" => W::MidNum,
        "MidNumLet" | "Single_Quote" => W::MidNumLet,
        "Numeric" => W::Numeric,
        "ExtendNumLet" => W::ExtendNumLet,
        "Other" | "Double_Quote" | "Regional_Indicator" | "WSegSpace" | "E_Base"
        | "E_Modifier" | "E_Base_GAZ" | "Glue_After_Zwj" => W::Other,
        _ => return None,
    })
}

/// Maps a `LineBreak.txt` abbreviation, folding classes newer than the pair table.
pub fn line_break(name: &str) -> Option<LineBreakProp> {
    use LineBreakProp as L;
    match name {
        "HL" | "RI" | "AK" | "AP" | "AS" => Some(L::Alphabetic),
        "CJ" => Some(L::Nonstarter),
        "EB" | "EM" => Some(L::Ideographic),
        "ZWJ" | "VF" | "VI" => Some(L::CombiningMark),
        _ => LineBreakProp::ALL
            .into_iter()
            .find(|class| class.short_name() == name),
    }
}
