// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction for offsets, item sizes, and viewport extents.
//!
//! Only `f32` and `f64` implement [`Scalar`].

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for item offsets, item sizes, and scroll positions.
///
/// The trait is deliberately minimal and geared toward floating-point
/// coordinates such as logical pixels.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Size assumed for items that have not been measured yet (`50.0`).
    const DEFAULT_ESTIMATED_ITEM_SIZE: Self;

    /// Additive identity (`0.0`).
    fn zero() -> Self;

    /// Returns the maximum of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns the minimum of `self` and `other`.
    fn min(self, other: Self) -> Self;

    /// Returns `true` if the value is neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// Returns `true` if the value is negative, including `-0.0`.
    fn is_sign_negative(self) -> bool;

    /// Converts an item count or index, lossily for very large values.
    fn from_usize(value: usize) -> Self;

    /// Floors the value and converts it to `isize`.
    ///
    /// Callers clamp the result into a valid index range afterwards.
    fn floor_to_isize(self) -> isize;

    /// Clamps negative values (including `-0.0`) to zero.
    fn clamp_non_negative(self) -> Self {
        if self.is_sign_negative() {
            Self::zero()
        } else {
            self
        }
    }

    /// Returns `true` if the value is finite and not negative.
    fn is_valid_extent(self) -> bool {
        self.is_finite() && self >= Self::zero()
    }
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            const DEFAULT_ESTIMATED_ITEM_SIZE: Self = 50.0;

            fn zero() -> Self {
                0.0
            }

            fn max(self, other: Self) -> Self {
                Self::max(self, other)
            }

            fn min(self, other: Self) -> Self {
                Self::min(self, other)
            }

            fn is_finite(self) -> bool {
                Self::is_finite(self)
            }

            fn is_sign_negative(self) -> bool {
                Self::is_sign_negative(self)
            }

            fn from_usize(value: usize) -> Self {
                value as Self
            }

            fn floor_to_isize(self) -> isize {
                // `as` truncates toward zero (and saturates), so step negatives down.
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "Used only for index approximation; result is clamped by callers"
                )]
                let truncated = self as isize;
                if (truncated as Self) > self {
                    truncated.saturating_sub(1)
                } else {
                    truncated
                }
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn floor_rounds_toward_negative_infinity() {
        assert_eq!(4.4_f64.floor_to_isize(), 4);
        assert_eq!(4.0_f32.floor_to_isize(), 4);
        assert_eq!((-0.5_f64).floor_to_isize(), -1);
        assert_eq!((-2.0_f64).floor_to_isize(), -2);
    }

    #[test]
    fn valid_extents_are_finite_and_non_negative() {
        assert!(0.0_f32.is_valid_extent());
        assert!(45.0_f64.is_valid_extent());
        assert!(!(-1.0_f64).is_valid_extent());
        assert!(!f64::NAN.is_valid_extent());
        assert!(!f32::INFINITY.is_valid_extent());
        assert!(!f64::NEG_INFINITY.is_valid_extent());
        assert!((-0.0_f64).is_valid_extent());
        assert_eq!((-3.0_f32).clamp_non_negative(), 0.0);
    }

    #[test]
    fn default_estimate_is_fifty_units() {
        assert_eq!(f32::DEFAULT_ESTIMATED_ITEM_SIZE, 50.0);
        assert_eq!(f64::DEFAULT_ESTIMATED_ITEM_SIZE, 50.0);
    }
}
