// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: 2021 The vanadinite developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License,
// v. 2.0. If a copy of the MPL was not distributed with this file, You can
// obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::{Error, ParseFailure, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Picks the radix from the numeral's prefix and returns it alongside the
    /// remaining digits. A bare leading zero means octal.
    pub fn detect(numeral: &str) -> (Radix, &str) {
        let bytes = numeral.as_bytes();

        match bytes {
            [b'0', b'x' | b'X', ..] => (Radix::Hexadecimal, &numeral[2..]),
            [b'0', b'o' | b'O', ..] => (Radix::Octal, &numeral[2..]),
            [b'0', b'b' | b'B', ..] => (Radix::Binary, &numeral[2..]),
            [b'0', _, ..] => (Radix::Octal, &numeral[1..]),
            _ => (Radix::Decimal, numeral),
        }
    }
}

/// Parses a 64-bit address written in decimal, `0x` hex, `0o` or leading-zero
/// octal, or `0b` binary. Single underscores may separate digits.
pub fn parse_address(input: &str) -> Result<u64> {
    let fail = |reason| Error::invalid_input(input, reason);

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(fail(ParseFailure::Empty));
    }

    let unsigned = match trimmed.as_bytes()[0] {
        b'-' => return Err(fail(ParseFailure::Negative)),
        b'+' => &trimmed[1..],
        _ => trimmed,
    };

    let (radix, digits) = Radix::detect(unsigned);
    tracing::debug!(?radix, digits, "parsing address");

    if digits.is_empty() {
        return match radix {
            Radix::Decimal => Err(fail(ParseFailure::Empty)),
            _ => Err(fail(ParseFailure::MissingDigits)),
        };
    }

    let base = radix.value();
    let mut value = 0u64;
    let mut last_was_separator = true;

    for c in digits.chars() {
        if c == '_' {
            if last_was_separator {
                return Err(fail(ParseFailure::MisplacedSeparator));
            }

            last_was_separator = true;
            continue;
        }

        let digit = c.to_digit(base).ok_or_else(|| fail(ParseFailure::InvalidDigit { digit: c, radix: base }))?;

        value = value
            .checked_mul(u64::from(base))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| fail(ParseFailure::Overflow))?;
        last_was_separator = false;
    }

    if last_was_separator {
        return Err(fail(ParseFailure::MisplacedSeparator));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn reason(input: &str) -> ParseFailure {
        match parse_address(input) {
            Err(Error::InvalidInput { reason, .. }) => reason,
            other => panic!("expected `{}` to be rejected, got {:?}", input, other),
        }
    }

    #[test]
    fn radixes_agree() {
        for input in ["4096", "0x1000", "0X1000", "0o10000", "010000", "0b1_0000_0000_0000", "+4096", " 4096\n"] {
            assert_eq!(parse_address(input), Ok(4096), "{}", input);
        }
    }

    #[test]
    fn zero() {
        assert_eq!(parse_address("0"), Ok(0));
        assert_eq!(parse_address("00"), Ok(0));
        assert_eq!(parse_address("0x0"), Ok(0));
    }

    #[test]
    fn full_width() {
        assert_eq!(parse_address("0xFFFFFFFFFFFFFFFF"), Ok(u64::MAX));
        assert_eq!(parse_address("18446744073709551615"), Ok(u64::MAX));
        assert_eq!(parse_address("0xffff_8000_0000_0000"), Ok(0xFFFF_8000_0000_0000));
    }

    #[test]
    fn detection() {
        assert_eq!(Radix::detect("0x1f"), (Radix::Hexadecimal, "1f"));
        assert_eq!(Radix::detect("017"), (Radix::Octal, "17"));
        assert_eq!(Radix::detect("0"), (Radix::Decimal, "0"));
        assert_eq!(Radix::detect("17"), (Radix::Decimal, "17"));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(reason("abc"), ParseFailure::InvalidDigit { digit: 'a', radix: 10 });
        assert_eq!(reason("0x1g"), ParseFailure::InvalidDigit { digit: 'g', radix: 16 });
        assert_eq!(reason("09"), ParseFailure::InvalidDigit { digit: '9', radix: 8 });
        assert_eq!(reason("0b102"), ParseFailure::InvalidDigit { digit: '2', radix: 2 });
        assert_eq!(reason("12 34"), ParseFailure::InvalidDigit { digit: ' ', radix: 10 });
    }

    #[test]
    fn rejects_empty_and_bare_prefixes() {
        assert_eq!(reason(""), ParseFailure::Empty);
        assert_eq!(reason("   "), ParseFailure::Empty);
        assert_eq!(reason("+"), ParseFailure::Empty);
        assert_eq!(reason("0x"), ParseFailure::MissingDigits);
        assert_eq!(reason("0o"), ParseFailure::MissingDigits);
    }

    #[test]
    fn rejects_negative_and_overflow() {
        assert_eq!(reason("-1"), ParseFailure::Negative);
        assert_eq!(reason("18446744073709551616"), ParseFailure::Overflow);
        assert_eq!(reason("0x1_0000_0000_0000_0000"), ParseFailure::Overflow);
    }

    #[test]
    fn separators() {
        assert_eq!(parse_address("1_000"), Ok(1000));
        assert_eq!(reason("_1000"), ParseFailure::MisplacedSeparator);
        assert_eq!(reason("1000_"), ParseFailure::MisplacedSeparator);
        assert_eq!(reason("1__000"), ParseFailure::MisplacedSeparator);
        assert_eq!(reason("0x_10"), ParseFailure::MisplacedSeparator);
    }

    #[test]
    fn error_keeps_original_text() {
        match parse_address(" nope ") {
            Err(Error::InvalidInput { input, .. }) => assert_eq!(input, " nope "),
            other => panic!("unexpected {:?}", other),
        }
    }
}
