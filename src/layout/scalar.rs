use std::num::IntErrorKind;

use super::{Layout, LayoutWriter};
use crate::error::{SfsError, ShapeViolation};
use crate::pubkey::Pubkey;

impl Layout for u8 {
    const SPAN: usize = 1;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        w.put_bytes(&[*self]);
    }
}

impl Layout for u16 {
    const SPAN: usize = 2;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        w.put_bytes(&self.to_le_bytes());
    }
}

impl Layout for u64 {
    const SPAN: usize = 8;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        w.put_bytes(&self.to_le_bytes());
    }
}

// Raw 32-byte key material.
impl Layout for Pubkey {
    const SPAN: usize = 32;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        w.put_bytes(self.as_ref());
    }
}

/// Narrow a caller-supplied number into a u8 field.
pub fn checked_u8(field: &'static str, value: u64) -> Result<u8, SfsError> {
    u8::try_from(value).map_err(|_| {
        SfsError::shape(
            field,
            ShapeViolation::OutOfRange {
                value,
                max: u8::MAX as u64,
            },
        )
    })
}

/// Narrow a caller-supplied number into a u16 field.
pub fn checked_u16(field: &'static str, value: u64) -> Result<u16, SfsError> {
    u16::try_from(value).map_err(|_| {
        SfsError::shape(
            field,
            ShapeViolation::OutOfRange {
                value,
                max: u16::MAX as u64,
            },
        )
    })
}

/// Check that a JS number is a whole, non-negative value.
fn whole_number(field: &'static str, value: f64) -> Result<f64, SfsError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Ok(value)
    } else {
        Err(SfsError::shape(field, ShapeViolation::NotAnInteger))
    }
}

/// Narrow a JS number into a u8 field.
pub fn number_to_u8(field: &'static str, value: f64) -> Result<u8, SfsError> {
    // `as` saturates, so huge values still report as out of range
    checked_u8(field, whole_number(field, value)? as u64)
}

/// Narrow a JS number into a u16 field.
pub fn number_to_u16(field: &'static str, value: f64) -> Result<u16, SfsError> {
    checked_u16(field, whole_number(field, value)? as u64)
}

/// Parse a u64 carried as a decimal string (JS BigInt values travel this way).
pub fn decimal_to_u64(field: &'static str, value: &str) -> Result<u64, SfsError> {
    value.parse::<u64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => SfsError::shape(field, ShapeViolation::Overflow { bits: 64 }),
        _ => SfsError::shape(field, ShapeViolation::NotAnInteger),
    })
}

#[cfg(test)]
mod tests {
    use super::super::encode;
    use super::*;

    #[test]
    fn test_u16_little_endian() {
        assert_eq!(encode(&1000u16), vec![0xE8, 0x03]);
    }

    #[test]
    fn test_u64_little_endian() {
        let data = encode(&1_000_000_000u64);
        assert_eq!(hex::encode(&data), "00ca9a3b00000000");
    }

    #[test]
    fn test_u64_above_f64_precision() {
        let value = (1u64 << 53) + 1;
        assert_eq!(u64::from_le_bytes(encode(&value).try_into().unwrap()), value);
    }

    #[test]
    fn test_pubkey_blob() {
        let key = Pubkey::from([9u8; 32]);
        assert_eq!(encode(&key), vec![9u8; 32]);
    }

    #[test]
    fn test_checked_narrowing() {
        assert_eq!(checked_u8("userId", 255).unwrap(), 255);
        assert_eq!(checked_u16("leagueId", 65535).unwrap(), 65535);
        assert_eq!(
            checked_u8("userId", 256).unwrap_err(),
            SfsError::shape("userId", ShapeViolation::OutOfRange { value: 256, max: 255 })
        );
        assert!(checked_u16("leagueId", 65536).is_err());
    }

    #[test]
    fn test_number_narrowing() {
        assert_eq!(number_to_u16("leagueId", 7.0).unwrap(), 7);
        assert_eq!(number_to_u8("userId", 255.0).unwrap(), 255);
        assert_eq!(
            number_to_u16("leagueId", 70000.0).unwrap_err(),
            SfsError::shape(
                "leagueId",
                ShapeViolation::OutOfRange { value: 70000, max: 65535 }
            )
        );
        assert!(matches!(
            number_to_u16("leagueId", 1e30),
            Err(SfsError::ShapeViolation {
                violation: ShapeViolation::OutOfRange { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_number_must_be_whole() {
        for value in [-1.0, 1.5, f64::NAN, f64::INFINITY] {
            assert_eq!(
                number_to_u8("currentWeek", value).unwrap_err(),
                SfsError::shape("currentWeek", ShapeViolation::NotAnInteger)
            );
        }
    }

    #[test]
    fn test_decimal_to_u64() {
        assert_eq!(decimal_to_u64("bid", "18446744073709551615").unwrap(), u64::MAX);
        assert_eq!(
            decimal_to_u64("bid", "18446744073709551616").unwrap_err(),
            SfsError::shape("bid", ShapeViolation::Overflow { bits: 64 })
        );
        for value in ["-1", "", "1.5", "0x10"] {
            assert_eq!(
                decimal_to_u64("bid", value).unwrap_err(),
                SfsError::shape("bid", ShapeViolation::NotAnInteger)
            );
        }
    }
}
