// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: 2021 The vanadinite developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License,
// v. 2.0. If a copy of the MPL was not distributed with this file, You can
// obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no virtual address was given, usage: virtual_to_indices <ADDRESS>")]
    MissingArgument,
    #[error("`{input}` is not a valid address: {reason}")]
    InvalidInput { input: String, reason: ParseFailure },
}

/// Why a numeral was rejected by [`crate::parse::parse_address`]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("the numeral is empty")]
    Empty,
    #[error("no digits follow the radix prefix")]
    MissingDigits,
    #[error("`{digit}` is not a valid base {radix} digit")]
    InvalidDigit { digit: char, radix: u32 },
    #[error("addresses cannot be negative")]
    Negative,
    #[error("the value does not fit in 64 bits")]
    Overflow,
    #[error("digit separators must sit between two digits")]
    MisplacedSeparator,
}

impl Error {
    pub fn invalid_input(input: &str, reason: ParseFailure) -> Self {
        Self::InvalidInput { input: input.to_owned(), reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_input() {
        let err = Error::invalid_input("abc", ParseFailure::InvalidDigit { digit: 'a', radix: 10 });
        assert_eq!(err.to_string(), "`abc` is not a valid address: `a` is not a valid base 10 digit");
    }

    #[test]
    fn missing_argument_mentions_usage() {
        assert!(Error::MissingArgument.to_string().contains("<ADDRESS>"));
    }
}
