// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! See `./main.rs`.

use std::fmt;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use unitext::{
    CharData, CharRecord, LineBreakProp, TableBuilder, TableError, MAX_CODEPOINTS, PAGE_SIZE,
};

pub mod ucd;


use ucd::{PropertyFile, UcdError, UnicodeDataEntry};

const COPYRIGHT_HEADER: &str =
    "// Copyright 2025 the Unitext Authors\n// SPDX-License-Identifier: Apache-2.0 OR MIT\n";

/// UCD files read from the input directory.
pub const UNICODE_DATA: &str = "UnicodeData.txt";
/// See [`UNICODE_DATA`].
pub const GRAPHEME_BREAK_PROPERTY: &str = "GraphemeBreakProperty.txt";
/// See [`UNICODE_DATA`].
pub const WORD_BREAK_PROPERTY: &str = "WordBreakProperty.txt";
/// See [`UNICODE_DATA`].
pub const LINE_BREAK: &str = "LineBreak.txt";

/// An error that stops table generation.
#[derive(Debug)]
pub enum GenerateError {
    /// Reading an input or writing the output failed.
    Io(PathBuf, std::io::Error),
    /// An input file is malformed.
    Ucd(&'static str, UcdError),
    /// The assembled records do not fit the table format.
    Table(TableError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, err) => write!(f, "{}: {err}", path.display()),
            Self::Ucd(file, err) => write!(f, "{file}, {err}"),
            Self::Table(err) => write!(f, "cannot build tables: {err}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, err) => Some(err),
            Self::Ucd(_, err) => Some(err),
            Self::Table(err) => Some(err),
        }
    }
}

/// The parsed contents of the four input files.
#[derive(Clone, Debug)]
pub struct UcdSources {
    /// `UnicodeData.txt`.
    pub unicode_data: Vec<UnicodeDataEntry>,
    /// `GraphemeBreakProperty.txt`.
    pub grapheme_break: PropertyFile<unitext::GraphemeBreakProp>,
    /// `WordBreakProperty.txt`.
    pub word_break: PropertyFile<unitext::WordBreakProp>,
    /// `LineBreak.txt`.
    pub line_break: PropertyFile<LineBreakProp>,
}

impl UcdSources {
    /// Reads and parses the input files from `dir`.
    pub fn load(dir: &Path) -> Result<Self, GenerateError> {
        Ok(Self {
            unicode_data: parse_file(dir, UNICODE_DATA, ucd::parse_unicode_data)?,
            grapheme_break: parse_file(dir, GRAPHEME_BREAK_PROPERTY, |text| {
                ucd::parse_property_file(text, ucd::grapheme_break)
            })?,
            word_break: parse_file(dir, WORD_BREAK_PROPERTY, |text| {
                ucd::parse_property_file(text, ucd::word_break)
            })?,
            line_break: parse_file(dir, LINE_BREAK, |text| {
                ucd::parse_property_file(text, ucd::line_break)
            })?,
        })
    }

    /// One record per code point in `0..MAX_CODEPOINTS`.
    ///
    /// Code points missing from `UnicodeData.txt` keep the unassigned record, whatever the
    /// property files say about them.
    pub fn records(&self) -> Vec<CharRecord> {
        let mut records = vec![CharRecord::UNASSIGNED; MAX_CODEPOINTS as usize];
        for entry in &self.unicode_data {
            if entry.category == unitext::GeneralCategory::Unassigned {
                continue;
            }
            for codepoint in entry.range.clone() {
                let mapping = |mapped: Option<u32>| mapped.filter(|&m| m != codepoint).unwrap_or(0);
                records[codepoint as usize] = CharRecord {
                    upper: mapping(entry.upper),
                    lower: mapping(entry.lower),
                    title: mapping(entry.title),
                    digit: entry.digit.unwrap_or(0),
                    category: entry.category,
                    bidi_class: entry.bidi_class,
                    ..CharRecord::UNASSIGNED
                };
            }
        }
        self.grapheme_break.apply(|codepoint, value| {
            if let Some(record) = assigned(&mut records, codepoint) {
                record.grapheme_break = value;
            }
        });
        self.word_break.apply(|codepoint, value| {
            if let Some(record) = assigned(&mut records, codepoint) {
                record.word_break = value;
            }
        });
        self.line_break.apply(|codepoint, value| {
            if let Some(record) = assigned(&mut records, codepoint) {
                record.line_break = value;
            }
        });
        records
    }

    /// Compacts [`Self::records`] into lookup tables.
    pub fn build(&self) -> Result<CharData, GenerateError> {
        TableBuilder::build(self.records()).map_err(GenerateError::Table)
    }
}

fn assigned(records: &mut [CharRecord], codepoint: u32) -> Option<&mut CharRecord> {
    records
        .get_mut(codepoint as usize)
        .filter(|record| !record.is_unassigned())
}

fn parse_file<T>(
    dir: &Path,
    name: &'static str,
    parse: impl FnOnce(&str) -> Result<T, UcdError>,
) -> Result<T, GenerateError> {
    let path = dir.join(name);
    let text = std::fs::read_to_string(&path).map_err(|err| GenerateError::Io(path, err))?;
    log::info!("parsing {name} ({} bytes)", text.len());
    parse(&text).map_err(|err| GenerateError::Ucd(name, err))
}

/// Reads the UCD files from `ucd_dir` and writes the baked tables to `out/mod.rs`.
pub fn generate(ucd_dir: &Path, out: &Path) -> Result<(), GenerateError> {
    let data = UcdSources::load(ucd_dir)?.build()?;
    let path = out.join("mod.rs");
    let io_err = |err| GenerateError::Io(path.clone(), err);
    let file = std::fs::File::create(&path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_tables(&mut writer, &data).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    log::info!(
        "wrote {} ({} records, {} bytes of tables)",
        path.display(),
        data.tables().records.len(),
        data.table_size()
    );
    Ok(())
}

/// Writes `data` as a Rust module defining `RECORDS`, `ZONES`, `PAGES` and `TABLES`.
///
/// The module is meant to be loaded with `CharData::from_tables(TABLES)`.
pub fn write_tables(writer: &mut impl Write, data: &CharData) -> std::io::Result<()> {
    let tables = data.tables();
    let env = databake::CrateEnv::default();

    writeln!(writer, "{COPYRIGHT_HEADER}")?;
    writeln!(writer, "//! Character tables generated by `unitext_data_gen`.")?;
    write_baked(
        writer,
        &format!("Distinct records. Expected size of all tables: {}B", data.table_size()),
        "RECORDS: &[unitext::CharRecord]",
        databake::Bake::bake(&tables.records, &env),
    )?;
    write_baked(
        writer,
        &format!("Zone blocks of {PAGE_SIZE} record indices."),
        "ZONES: &[u16]",
        databake::Bake::bake(&tables.zones, &env),
    )?;
    write_baked(
        writer,
        &format!("Packed page entries, one per {PAGE_SIZE} code points."),
        "PAGES: &[u16]",
        databake::Bake::bake(&tables.pages, &env),
    )?;
    writeln!(writer)?;
    writeln!(writer, "/// The tables above, ready for `unitext::CharData::from_tables`.")?;
    writeln!(
        writer,
        "pub const TABLES: unitext::CharDataTables<'static> = unitext::CharDataTables {{ records: RECORDS, zones: ZONES, pages: PAGES }};"
    )?;
    Ok(())
}

fn write_baked(
    writer: &mut impl Write,
    doc: &str,
    declaration: &str,
    baked: impl fmt::Display,
) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "/// {doc}")?;
    writeln!(writer, "#[rustfmt::skip]")?;
    writeln!(
        writer,
        "#[allow(clippy::unseparated_literal_suffix, reason = \"databake behaviour\")]"
    )?;
    writeln!(writer, "pub const {declaration} = {baked};")
}
