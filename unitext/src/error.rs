// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// An error returned by the codecs and the string operations built on them.
///
/// All of these are local conditions reported to the immediate caller. Encoders and decoders that
/// fail never write partial output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The first byte of a UTF-8 sequence cannot start any valid encoding.
    InvalidLeadByte,
    /// A UTF-8 continuation byte does not match `10xxxxxx`, is missing, or makes the sequence
    /// over-long.
    InvalidFollowByte,
    /// The first unit of a UTF-16 sequence is a lone low surrogate.
    InvalidLeadWord,
    /// A high surrogate is not followed by a low surrogate.
    InvalidEndWord,
    /// The scalar value is a surrogate or is not below `0x110000`.
    CharOutOfRange,
    /// A search did not find its pattern.
    NotFound,
    /// A parsed number does not fit the target integer type.
    Overflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLeadByte => f.write_str("invalid UTF-8 lead byte"),
            Self::InvalidFollowByte => f.write_str("invalid UTF-8 continuation byte"),
            Self::InvalidLeadWord => f.write_str("invalid UTF-16 lead word"),
            Self::InvalidEndWord => f.write_str("invalid UTF-16 trailing word"),
            Self::CharOutOfRange => f.write_str("code point out of range"),
            Self::NotFound => f.write_str("pattern not found"),
            Self::Overflow => f.write_str("numeric overflow"),
        }
    }
}

impl core::error::Error for Error {}

/// The first malformed sequence found while validating a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValidationError {
    /// Offset in code units (bytes for UTF-8, words for UTF-16) of the malformed sequence.
    pub offset: usize,
    /// Why the sequence was rejected.
    pub kind: Error,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.offset)
    }
}

impl core::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.kind)
    }
}
