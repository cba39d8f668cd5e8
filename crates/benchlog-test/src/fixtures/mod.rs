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

//! Canned logs.
//!
//! - **builders**: randomness benchmark logs with known expected rows
//! - **errors**: logs that must fail extraction, with the failure kind
//! - daily estimate logs for the histogram and point readers

pub mod builders;
pub mod errors;

use benchlog_core::{AssemblerConfig, MeasurementSchema, MeasurementStep};

/// A four-step schema with a single leading field, and its config.
pub fn compact_schema() -> (MeasurementSchema, AssemblerConfig) {
    let schema = MeasurementSchema::new(vec![
        MeasurementStep::size("Number of constraints"),
        MeasurementStep::duration("Prove"),
        MeasurementStep::size("Messages sent"),
        MeasurementStep::size("Proof"),
    ])
    .expect("valid compact schema");
    let config = AssemblerConfig {
        leading_fields: 1,
        ..AssemblerConfig::default()
    };
    (schema, config)
}

/// `runs` cycles of the [`compact_schema`] layout. Run `i` proves in
/// `i + 1` milliseconds.
pub fn compact_log(runs: usize) -> String {
    let mut log = String::from("setup\n--- START MEASUREMENTS ---\n");
    for i in 0..runs {
        log.push_str(&format!(
            "Number of constraints: {}\nStart:   Prove\nEnd:     Prove ........{}ms\nMessages sent: 64b\n··Proof: 64b\n",
            100 + i,
            i + 1
        ));
    }
    log
}

/// Histogram estimates for `days` days over three bins.
///
/// Each day block starts with the participant listing `0..3`, so the `0`
/// line closes the previous day.
pub fn histogram_log(days: usize) -> String {
    let mut log = String::new();
    for day in 1..=days {
        log.push_str("0\n1\n2\n");
        log.push_str(&format!("Day {}:\nEstimate:\n", day));
        for (bin, base) in [("(52.37, 4.89)", 10), ("(52.09, 5.12)", 20), ("(51.92, 4.47)", 30)] {
            log.push_str(&format!("{}: {}\n", bin, base + day));
        }
    }
    log
}

/// Point estimates for `days` days, value `day / 8`.
pub fn point_log(days: usize) -> String {
    let mut log = String::from("Participants: 3\n");
    for day in 1..=days {
        log.push_str(&format!("Day {}:\nEstimate: {}\n", day, day as f64 / 8.0));
    }
    log
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_log_shape() {
        let log = compact_log(2);
        assert_eq!(log.matches("Messages sent").count(), 2);
    }

    #[test]
    fn test_daily_logs_have_days() {
        assert_eq!(histogram_log(3).matches("Day ").count(), 3);
        assert_eq!(point_log(4).matches("Estimate: ").count(), 4);
    }
}
