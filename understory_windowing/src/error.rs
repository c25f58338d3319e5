// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration errors.

use core::fmt;

/// Error returned when an axis is configured with sizes it cannot window over.
///
/// These are detected eagerly when an axis is built, never during a query.
/// Query-time inputs (scroll offsets, viewport extents, out-of-range indices)
/// are clamped instead of rejected.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A fixed item size was NaN, infinite, or negative.
    InvalidItemSize,
    /// An estimated item size was NaN, infinite, or negative.
    InvalidEstimatedItemSize,
}

impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidItemSize => f.write_str("ConfigError::InvalidItemSize"),
            Self::InvalidEstimatedItemSize => f.write_str("ConfigError::InvalidEstimatedItemSize"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidItemSize => {
                f.write_str("an invalid item size was specified; it must be finite and non-negative")
            }
            Self::InvalidEstimatedItemSize => f.write_str(
                "an invalid estimated item size was specified; it must be finite and non-negative",
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::ConfigError;

    #[test]
    fn display_names_the_offending_setting() {
        assert!(
            ConfigError::InvalidItemSize
                .to_string()
                .starts_with("an invalid item size"),
            "fixed size errors should mention the item size"
        );
        assert!(
            ConfigError::InvalidEstimatedItemSize
                .to_string()
                .contains("estimated item size"),
            "estimate errors should mention the estimate"
        );
    }
}
