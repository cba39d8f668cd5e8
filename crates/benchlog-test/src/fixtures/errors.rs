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

//! Logs that must be rejected.
//!
//! Each sample is a full randomness log with one line corrupted after the
//! start marker.

use super::builders::{CycleValues, LogBuilder};

/// Expected failure of an invalid sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    MalformedToken,
    UnknownUnit,
    Desynchronization,
}

/// One valid cycle with `from` replaced by `to` in the measured part.
fn corrupt(from: &str, to: &str) -> String {
    let log = LogBuilder::new().cycle(CycleValues::sample(0)).build();
    let text = log.into_text();
    let (head, body) = text
        .split_once("--- START MEASUREMENTS ---\n")
        .expect("marker present");
    assert!(body.contains(from), "fixture text '{}' not found", from);
    format!("{}--- START MEASUREMENTS ---\n{}", head, body.replacen(from, to, 1))
}

/// Returns `(name, log, failure)` triples.
pub fn invalid_logs() -> Vec<(&'static str, String, Failure)> {
    vec![
        (
            "kilobyte_key_size",
            corrupt("Proving key size: 10240b", "Proving key size: 12kb"),
            Failure::MalformedToken,
        ),
        (
            "non_integer_constraints",
            corrupt("Number of constraints: 74213", "Number of constraints: 74k"),
            Failure::MalformedToken,
        ),
        (
            "nanoseconds",
            corrupt("...2.5ms", "...2.5ns"),
            Failure::UnknownUnit,
        ),
        (
            "message_block_reordered",
            corrupt("····Client message: 192b", "····Server message: 192b"),
            Failure::Desynchronization,
        ),
        (
            "garbled_message_count",
            corrupt("Messages sent: 2336b", "Messages sent: many"),
            Failure::MalformedToken,
        ),
    ]
}
