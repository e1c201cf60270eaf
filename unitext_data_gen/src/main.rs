// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small CLI that regenerates the baked character tables of `unitext`.
//! It reads `UnicodeData.txt` and the break property files of a Unicode Character Database
//! directory, compacts them into the three-level tables, and writes a Rust module that can be
//! loaded with `CharData::from_tables`.

fn main() {
    use std::{env, ffi::OsString, path::PathBuf, process};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args_os();
    let exe = args
        .next()
        .unwrap_or_else(|| OsString::from("unitext_data_gen"));

    let (Some(ucd_arg), Some(out_arg)) = (args.next(), args.next()) else {
        eprintln!("Usage: {} <ucd-dir> <output-dir>", exe.to_string_lossy());
        process::exit(1);
    };

    let ucd_path = PathBuf::from(ucd_arg);
    let out_path = PathBuf::from(out_arg);

    if let Err(err) = std::fs::create_dir_all(&out_path) {
        eprintln!(
            "Failed to create output directory '{}': {}",
            out_path.display(),
            err
        );
        process::exit(1);
    }

    if let Err(err) = unitext_data_gen::generate(&ucd_path, &out_path) {
        eprintln!("Failed to generate tables: {err}");
        process::exit(1);
    }
}
