// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: 2021 The vanadinite developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License,
// v. 2.0. If a copy of the MPL was not distributed with this file, You can
// obtain one at https://mozilla.org/MPL/2.0/.

use core::fmt;

const PAGE_OFFSET_BITS: u32 = 12;
const PAGE_OFFSET_MASK: u64 = 0xFFF;
const INDEX_BITS: u32 = 9;
const INDEX_BITMASK: u64 = 0x1FF;

/// A 64-bit virtual address under 4-level paging with 4 KiB pages. Bits 48
/// through 63 are carried along but never looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VirtualAddress(u64);

impl VirtualAddress {
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    pub const fn page_offset(self) -> u64 {
        self.0 & PAGE_OFFSET_MASK
    }

    pub fn indices(self) -> PageTableIndices {
        decode(self.0)
    }
}

impl From<u64> for VirtualAddress {
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}

impl fmt::Pointer for VirtualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageTableLevel {
    P4,
    P3,
    P2,
    P1,
}

impl PageTableLevel {
    /// Top-down, the order the indices are printed in
    pub const ALL: [PageTableLevel; 4] = [Self::P4, Self::P3, Self::P2, Self::P1];

    pub const fn shift(self) -> u32 {
        let depth = match self {
            Self::P1 => 0,
            Self::P2 => 1,
            Self::P3 => 2,
            Self::P4 => 3,
        };

        PAGE_OFFSET_BITS + depth * INDEX_BITS
    }

    /// Pulls this level's index straight out of `addr` with a single shift.
    pub const fn extract(self, addr: u64) -> u16 {
        ((addr >> self.shift()) & INDEX_BITMASK) as u16
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::P4 => "P4",
            Self::P3 => "P3",
            Self::P2 => "P2",
            Self::P1 => "P1",
        }
    }
}

/// The four table indices a virtual address walks through. Each is always in
/// `0..=511`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PageTableIndices {
    pub p4: u16,
    pub p3: u16,
    pub p2: u16,
    pub p1: u16,
}

impl PageTableIndices {
    pub const fn index(&self, level: PageTableLevel) -> u16 {
        match level {
            PageTableLevel::P4 => self.p4,
            PageTableLevel::P3 => self.p3,
            PageTableLevel::P2 => self.p2,
            PageTableLevel::P1 => self.p1,
        }
    }

    pub const fn as_array(&self) -> [u16; 4] {
        [self.p4, self.p3, self.p2, self.p1]
    }
}

impl fmt::Display for PageTableIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in PageTableLevel::ALL.into_iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }

            write!(f, "{}: {};", level.label(), self.index(level))?;
        }

        Ok(())
    }
}

/// Splits `addr` into its P4..P1 indices, dropping the page offset.
pub fn decode(addr: u64) -> PageTableIndices {
    let mut current = addr >> PAGE_OFFSET_BITS;

    let mut next = || {
        let index = (current & INDEX_BITMASK) as u16;
        current >>= INDEX_BITS;
        index
    };

    let p1 = next();
    let p2 = next();
    let p3 = next();
    let p4 = next();

    let indices = PageTableIndices { p4, p3, p2, p1 };
    tracing::trace!(addr = %format_args!("{:#x}", addr), ?indices, "decoded virtual address");

    indices
}
