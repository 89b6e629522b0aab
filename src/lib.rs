// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: 2021 The vanadinite developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License,
// v. 2.0. If a copy of the MPL was not distributed with this file, You can
// obtain one at https://mozilla.org/MPL/2.0/.

//! Splits x86-64 style virtual addresses into their P4, P3, P2 and P1 page
//! table indices (4-level paging, 4 KiB pages).

pub mod address;
pub mod error;
pub mod logging;
pub mod parse;

pub use address::{decode, PageTableIndices, PageTableLevel, VirtualAddress};
pub use error::{Error, ParseFailure, Result};
pub use parse::{parse_address, Radix};

/// Parses `input` and decodes it in one go
pub fn decode_str(input: &str) -> Result<PageTableIndices> {
    parse_address(input).map(decode)
}
