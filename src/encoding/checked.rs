//! Fallible conversion of loosely typed numbers into the 32-bit wire widths.
//!
//! Integrality is checked before range, so `-Infinity` is `NotAnInteger`
//! rather than `OutOfRange`.

use crate::encoding::error::CodecError;

/// A numeric input that may or may not hold a valid 32-bit integer
pub trait CheckedInt: Copy {
    fn to_u32_checked(self) -> Result<u32, CodecError>;
    fn to_i32_checked(self) -> Result<i32, CodecError>;
}

/// Convert `value` to `u32`, rejecting non-integers and out-of-range values
pub fn u32_from_checked<N: CheckedInt>(value: N) -> Result<u32, CodecError> {
    value.to_u32_checked()
}

/// Convert `value` to `i32`, rejecting non-integers and out-of-range values
pub fn i32_from_checked<N: CheckedInt>(value: N) -> Result<i32, CodecError> {
    value.to_i32_checked()
}

fn integral(value: f64) -> Result<f64, CodecError> {
    if value.is_finite() && value.fract() == 0.0 {
        Ok(value)
    } else {
        Err(CodecError::NotAnInteger)
    }
}

impl CheckedInt for f64 {
    fn to_u32_checked(self) -> Result<u32, CodecError> {
        let value = integral(self)?;
        if value < 0.0 || value > f64::from(u32::MAX) {
            return Err(CodecError::OutOfRange);
        }
        Ok(value as u32)
    }

    fn to_i32_checked(self) -> Result<i32, CodecError> {
        let value = integral(self)?;
        if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return Err(CodecError::OutOfRange);
        }
        Ok(value as i32)
    }
}

impl CheckedInt for f32 {
    fn to_u32_checked(self) -> Result<u32, CodecError> {
        f64::from(self).to_u32_checked()
    }

    fn to_i32_checked(self) -> Result<i32, CodecError> {
        f64::from(self).to_i32_checked()
    }
}

macro_rules! checked_int_for_integer {
    ($($t:ty),*) => {
        $(
            impl CheckedInt for $t {
                fn to_u32_checked(self) -> Result<u32, CodecError> {
                    u32::try_from(self).map_err(|_| CodecError::OutOfRange)
                }

                fn to_i32_checked(self) -> Result<i32, CodecError> {
                    i32::try_from(self).map_err(|_| CodecError::OutOfRange)
                }
            }
        )*
    };
}

checked_int_for_integer!(i64, u64, i128);
