// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for page export parsing: malformed JSON and odd timestamps
//! must come back as errors or dropped fields, never as panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wikisift::build::{parse_pages, parse_timestamp};

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let _ = parse_timestamp(Some(&raw));
    if let Ok(docs) = parse_pages(&raw) {
        for doc in &docs {
            assert_eq!(doc.fields.len(), 3);
        }
    }
});
