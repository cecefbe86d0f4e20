//! Conversion of numbers written in bases 2 to 16 into `u32`.

use crate::error::{Error, Result};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 16;

/// Parses `text` as an unsigned number in `base`.
///
/// Digits are `0`-`9` and `A`-`F` in either case. The base is checked first,
/// then every character, and only then is the value accumulated, so a
/// malformed digit is reported even if the prefix before it already
/// overflows. An empty string is 0.
///
/// ```
/// use unipoly::radix::parse_in_base;
///
/// assert_eq!(parse_in_base("1AeF101", 16), Ok(28242177));
/// assert_eq!(parse_in_base("10011", 2), Ok(19));
/// ```
pub fn parse_in_base(text: &str, base: u32) -> Result<u32> {
    if base < MIN_BASE || base > MAX_BASE {
        return Err(Error::OutOfRange {
            base,
            min: MIN_BASE,
            max: MAX_BASE,
        });
    }

    let digits = text
        .chars()
        .map(|c| {
            c.to_digit(MAX_BASE)
                .filter(|d| *d < base)
                .ok_or(Error::InvalidFormat { element: c, base })
        })
        .collect::<Result<Vec<u32>>>()?;

    let value = digits.iter().try_fold(0u32, |acc, d| {
        acc.checked_mul(base).and_then(|v| v.checked_add(*d))
    });

    match value {
        Some(v) => {
            debug!("parsed {:?} in base {} as {}", text, base, v);
            Ok(v)
        }
        None => Err(Error::Overflow),
    }
}
