// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: 2021 The vanadinite developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License,
// v. 2.0. If a copy of the MPL was not distributed with this file, You can
// obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::Context;
use clap::Parser;
use virtual_to_indices::{logging, parse_address, Error, VirtualAddress};

pub type Result<T> = anyhow::Result<T>;

/// Print the P4, P3, P2 and P1 page table indices of a virtual address
#[derive(Parser)]
#[clap(version)]
struct Arguments {
    /// The virtual address, in decimal, `0x` hex, `0o`/leading-zero octal or
    /// `0b` binary
    #[clap(allow_negative_numbers = true)]
    address: Option<String>,

    /// Log more, repeat for trace output
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    logging::init(args.verbose);

    let input = args.address.ok_or(Error::MissingArgument)?;
    let address = VirtualAddress::new(parse_address(&input).context("failed to decode address")?);
    tracing::debug!("decoding {:#p} (page offset {:#x})", address, address.page_offset());

    println!("{}", address.indices());

    Ok(())
}
