// Dweve benchlog - Benchmark Log Extraction
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Duration normalization.
//!
//! The harness prints elapsed times with whatever unit suits the magnitude
//! (`1.234s`, `56.789ms`, `12.3µs`). Everything is rescaled to milliseconds
//! and rendered with a fixed number of decimals so that columns compare
//! cleanly. Rounding happens once, in [`format_fixed`], on the exact binary
//! value of the rescaled duration.
//!
//! Logs that went through a Latin-1 round trip carry `Âµs` instead of `µs`;
//! both spellings are accepted.

use std::fmt;
use thiserror::Error;

/// Number of decimal digits kept for every derived numeric value.
pub const PRECISION: usize = 5;

/// Micro sign as the harness prints it.
const MICRO: &str = "\u{00b5}s";
/// Micro sign after a UTF-8 → Latin-1 → UTF-8 round trip.
const MICRO_MISENCODED: &str = "\u{00c2}\u{00b5}s";

/// Time units the harness emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    Microseconds,
}

impl TimeUnit {
    /// Parse a unit suffix. Returns `None` outside the closed set.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "s" => Some(Self::Seconds),
            "ms" => Some(Self::Milliseconds),
            MICRO | MICRO_MISENCODED => Some(Self::Microseconds),
            _ => None,
        }
    }

    /// Convert a value expressed in this unit to milliseconds.
    #[inline]
    pub fn to_millis(self, value: f64) -> f64 {
        match self {
            Self::Seconds => value * 1000.0,
            Self::Milliseconds => value,
            Self::Microseconds => value / 1000.0,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Microseconds => MICRO,
        };
        f.write_str(s)
    }
}

/// Failure to normalize a duration literal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("invalid duration literal '{0}'")]
    BadNumber(String),
    #[error("unknown time unit '{0}'")]
    UnknownUnit(String),
}

/// Convert a numeric literal plus unit tag into milliseconds.
///
/// The result is not rounded; pass it to [`format_fixed`] for output.
///
/// ```rust
/// use benchlog_core::units::normalize;
///
/// assert_eq!(normalize("1.5", "s").unwrap(), 1500.0);
/// assert_eq!(normalize("250", "µs").unwrap(), 0.25);
/// assert!(normalize("1", "ns").is_err());
/// ```
pub fn normalize(literal: &str, unit_tag: &str) -> Result<f64, UnitError> {
    let unit =
        TimeUnit::parse(unit_tag).ok_or_else(|| UnitError::UnknownUnit(unit_tag.to_string()))?;
    let value: f64 = literal
        .parse()
        .map_err(|_| UnitError::BadNumber(literal.to_string()))?;
    Ok(unit.to_millis(value))
}

/// Render a value with exactly [`PRECISION`] decimals.
///
/// The formatter rounds the exact binary value, so a literal such as
/// `12.345675` (stored slightly below the half-way point) rounds down.
///
/// ```rust
/// use benchlog_core::units::format_fixed;
///
/// assert_eq!(format_fixed(2.0), "2.00000");
/// assert_eq!(format_fixed(0.123456789), "0.12346");
/// assert_eq!(format_fixed(12.345675), "12.34567");
/// ```
#[inline]
pub fn format_fixed(value: f64) -> String {
    format!("{:.*}", PRECISION, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(literal: &str, unit: &str) -> String {
        format_fixed(normalize(literal, unit).unwrap())
    }

    #[test]
    fn test_seconds_scale_up() {
        assert_eq!(fixed("1.23456", "s"), "1234.56000");
        assert_eq!(fixed("2", "s"), "2000.00000");
    }

    #[test]
    fn test_milliseconds_unchanged() {
        assert_eq!(normalize("42.125", "ms").unwrap(), 42.125);
        assert_eq!(format_fixed(normalize("1.00000", "ms").unwrap()), "1.00000");
    }

    #[test]
    fn test_microseconds_scale_down() {
        assert_eq!(normalize("1500", "µs").unwrap(), 1.5);
        assert_eq!(format_fixed(normalize("12.3", "µs").unwrap()), "0.01230");
    }

    #[test]
    fn test_misencoded_micro_is_microseconds() {
        assert_eq!(TimeUnit::parse("Âµs"), Some(TimeUnit::Microseconds));
        assert_eq!(normalize("1500", "Âµs").unwrap(), normalize("1500", "µs").unwrap());
    }

    #[test]
    fn test_rounding_to_five_decimals() {
        assert_eq!(fixed("1.234567", "µs"), "0.00123");
        assert_eq!(format_fixed(1.000004), "1.00000");
        assert_eq!(format_fixed(1.000006), "1.00001");
    }

    #[test]
    fn test_half_way_literals_round_on_binary_value() {
        // Both literals are stored just below the half-way point.
        assert_eq!(fixed("12.345675", "ms"), "12.34567");
        assert_eq!(fixed("2.123455", "ms"), "2.12345");
        // Stored just above it.
        assert_eq!(fixed("0.000125", "ms"), "0.00013");
        assert_eq!(fixed("1.000005", "ms"), "1.00001");
        assert_eq!(fixed("40.125", "µs"), "0.04013");
    }

    #[test]
    fn test_normalize_is_unrounded() {
        assert_eq!(normalize("12.345675", "ms").unwrap(), 12.345675);
        assert_eq!(normalize("1.5", "µs").unwrap(), 0.0015);
    }

    #[test]
    fn test_unknown_units_rejected() {
        for unit in ["ns", "m", "min", "Âs", "Âms", "MS", ""] {
            assert_eq!(
                normalize("1", unit),
                Err(UnitError::UnknownUnit(unit.to_string())),
                "unit {unit:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_bad_number() {
        assert_eq!(normalize("1.2.3", "ms"), Err(UnitError::BadNumber("1.2.3".into())));
        assert_eq!(normalize(".", "ms"), Err(UnitError::BadNumber(".".into())));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for unit in [TimeUnit::Seconds, TimeUnit::Milliseconds, TimeUnit::Microseconds] {
            assert_eq!(TimeUnit::parse(&unit.to_string()), Some(unit));
        }
    }
}
