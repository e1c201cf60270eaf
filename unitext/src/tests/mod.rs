// Copyright 2025 the Unitext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests that span several modules and use the ICU-backed global tables.

#![cfg(feature = "compiled_data")]
