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

//! Builders for synthetic harness logs.
//!
//! A cycle is printed exactly the way the randomness benchmark prints it:
//! three leading size lines, a nested timing trace with `Start:`/`End:`
//! pairs and `··` indentation, then the message-size block.

/// Start-of-measurements marker written by the harness.
pub const START_MARKER: &str = "--- START MEASUREMENTS ---";

/// Unit suffix a timing is printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingUnit {
    Seconds,
    Millis,
    Micros,
    /// `µs` as it appears after a UTF-8 → Latin-1 → UTF-8 round trip.
    MicrosMisencoded,
}

impl TimingUnit {
    fn suffix(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Millis => "ms",
            Self::Micros => "\u{00b5}s",
            Self::MicrosMisencoded => "\u{00c2}\u{00b5}s",
        }
    }

    fn to_millis(self, value: f64) -> f64 {
        match self {
            Self::Seconds => value * 1000.0,
            Self::Millis => value,
            Self::Micros | Self::MicrosMisencoded => value / 1000.0,
        }
    }
}

/// One printed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    pub literal: String,
    pub unit: TimingUnit,
}

impl Timing {
    pub fn new(literal: impl Into<String>, unit: TimingUnit) -> Self {
        Self {
            literal: literal.into(),
            unit,
        }
    }

    pub fn seconds(literal: impl Into<String>) -> Self {
        Self::new(literal, TimingUnit::Seconds)
    }

    pub fn millis(literal: impl Into<String>) -> Self {
        Self::new(literal, TimingUnit::Millis)
    }

    pub fn micros(literal: impl Into<String>) -> Self {
        Self::new(literal, TimingUnit::Micros)
    }

    /// Token as printed after the dot leader, e.g. `12.5ms`.
    pub fn token(&self) -> String {
        format!("{}{}", self.literal, self.unit.suffix())
    }

    /// Milliseconds with five decimals, as extraction should report it.
    pub fn expected(&self) -> String {
        let value: f64 = self.literal.parse().expect("numeric timing literal");
        format!("{:.5}", self.unit.to_millis(value))
    }
}

/// Values of one measurement cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleValues {
    pub constraints: u64,
    pub proving_key: u64,
    pub verifying_key: u64,
    pub client_generation: Timing,
    pub server_generation: Timing,
    pub client_verification: Timing,
    pub generate_randomness: Timing,
    pub trusted_environment: Timing,
    pub randomization_client: Timing,
    pub server_verification: Timing,
    pub verifiable_randomization: Timing,
    pub client_message: u64,
    pub server_message: u64,
    pub randomization_message: u64,
}

impl CycleValues {
    /// Deterministic values for the `index`-th cycle. Every unit the
    /// harness prints appears at least once.
    pub fn sample(index: usize) -> Self {
        let i = index as u64;
        Self {
            constraints: 74_213,
            proving_key: 10_240 + i,
            verifying_key: 512,
            client_generation: Timing::millis(format!("{}.25", 12 + i)),
            server_generation: Timing::micros(format!("{}", 800 + 10 * i)),
            client_verification: Timing::new(format!("{}.5", 40 + i), TimingUnit::MicrosMisencoded),
            generate_randomness: Timing::millis(format!("{}.75", 14 + i)),
            trusted_environment: Timing::millis("2.5"),
            randomization_client: Timing::seconds(format!("1.{}", 100 + i)),
            server_verification: Timing::millis(format!("{}.125", 9 + i)),
            verifiable_randomization: Timing::seconds(format!("1.{}", 200 + i)),
            client_message: 192 + i,
            server_message: 96,
            randomization_message: 2_048 + i,
        }
    }

    fn randomness_message(&self) -> u64 {
        self.client_message + self.server_message
    }

    fn total_messages(&self) -> u64 {
        self.randomness_message() + self.randomization_message
    }

    /// The sixteen values in schema order.
    pub fn expected_row(&self) -> Vec<String> {
        vec![
            self.constraints.to_string(),
            self.proving_key.to_string(),
            self.verifying_key.to_string(),
            self.client_generation.expected(),
            self.server_generation.expected(),
            self.client_verification.expected(),
            self.generate_randomness.expected(),
            self.trusted_environment.expected(),
            self.randomization_client.expected(),
            self.server_verification.expected(),
            self.verifiable_randomization.expected(),
            self.total_messages().to_string(),
            self.randomness_message().to_string(),
            self.client_message.to_string(),
            self.server_message.to_string(),
            self.randomization_message.to_string(),
        ]
    }

    /// The trace block the harness prints for this cycle.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Number of constraints: {}\n", self.constraints));
        out.push_str(&format!("Proving key size: {}b\n", self.proving_key));
        out.push_str(&format!("Verifying key size: {}b\n", self.verifying_key));

        span(&mut out, 0, "Generate randomness", None);
        span(&mut out, 1, "Client generation", Some(&self.client_generation));
        span(&mut out, 1, "Server generation", Some(&self.server_generation));
        span(&mut out, 1, "Client verification", Some(&self.client_verification));
        end(&mut out, 0, "Generate randomness", &self.generate_randomness);
        span(&mut out, 0, "Trusted environment computation", Some(&self.trusted_environment));
        span(&mut out, 0, "Verifiable randomization", None);
        span(&mut out, 1, "Client generation", Some(&self.randomization_client));
        span(&mut out, 1, "Server verification", Some(&self.server_verification));
        end(&mut out, 0, "Verifiable randomization", &self.verifiable_randomization);

        out.push_str(&format!("Messages sent: {}b\n", self.total_messages()));
        out.push_str(&format!("··Generate randomness: {}b\n", self.randomness_message()));
        out.push_str(&format!("····Client message: {}b\n", self.client_message));
        out.push_str(&format!("····Server message: {}b\n", self.server_message));
        out.push_str(&format!("··Verifiable randomization: {}b\n", self.randomization_message));
        out
    }
}

/// Write a `Start:` line, and the matching `End:` line when `timing` is set.
fn span(out: &mut String, depth: usize, name: &str, timing: Option<&Timing>) {
    out.push_str(&format!("{}Start:   {}\n", indent(depth), name));
    if let Some(timing) = timing {
        end(out, depth, name, timing);
    }
}

fn end(out: &mut String, depth: usize, name: &str, timing: &Timing) {
    let prefix = format!("{}End:     {} ", indent(depth), name);
    let leader = ".".repeat(70usize.saturating_sub(prefix.chars().count()).max(3));
    out.push_str(&format!("{}{}{}\n", prefix, leader, timing.token()));
}

fn indent(depth: usize) -> String {
    "··".repeat(depth)
}

/// A generated log together with the rows it should produce.
#[derive(Debug, Clone)]
pub struct SyntheticLog {
    text: String,
    rows: Vec<Vec<String>>,
}

impl SyntheticLog {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Expected rows in schema order, one per complete cycle.
    pub fn expected_rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Builder for a full harness log.
///
/// # Examples
///
/// ```
/// use benchlog_test::fixtures::builders::{CycleValues, LogBuilder};
///
/// let log = LogBuilder::new()
///     .cycle(CycleValues::sample(7))
///     .partial_cycle()
///     .build();
/// assert_eq!(log.expected_rows().len(), 1);
/// assert_eq!(log.expected_rows()[0][1], "10247");
/// ```
#[derive(Debug, Clone)]
pub struct LogBuilder {
    warmup: usize,
    cycles: Vec<CycleValues>,
    partial: bool,
    crlf: bool,
    marker: bool,
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBuilder {
    pub fn new() -> Self {
        Self {
            warmup: 0,
            cycles: Vec::new(),
            partial: false,
            crlf: false,
            marker: true,
        }
    }

    /// Prepend `n` warmup cycles before the start marker.
    pub fn warmup(mut self, n: usize) -> Self {
        self.warmup = n;
        self
    }

    /// Append one measured cycle.
    pub fn cycle(mut self, values: CycleValues) -> Self {
        self.cycles.push(values);
        self
    }

    /// Append `n` measured cycles built with [`CycleValues::sample`].
    pub fn cycles(mut self, n: usize) -> Self {
        let start = self.cycles.len();
        self.cycles.extend((start..start + n).map(CycleValues::sample));
        self
    }

    /// End the log in the middle of an extra cycle, as a killed harness does.
    pub fn partial_cycle(mut self) -> Self {
        self.partial = true;
        self
    }

    /// Use `\r\n` line endings.
    pub fn crlf(mut self) -> Self {
        self.crlf = true;
        self
    }

    /// Leave out the start-of-measurements marker.
    pub fn without_marker(mut self) -> Self {
        self.marker = false;
        self
    }

    pub fn build(self) -> SyntheticLog {
        let mut text = String::from("Running randomness benchmark\n--- START WARMUP ---\n");
        for i in 0..self.warmup {
            text.push_str(&CycleValues::sample(1000 + i).render());
        }
        text.push_str("--- END WARMUP ---\n");
        if self.marker {
            text.push_str(START_MARKER);
            text.push('\n');
        }

        for cycle in &self.cycles {
            text.push_str(&cycle.render());
        }
        if self.partial {
            let cut: String = CycleValues::sample(self.cycles.len())
                .render()
                .lines()
                .take(8)
                .flat_map(|l| [l, "\n"])
                .collect();
            text.push_str(&cut);
        }

        let rows = if self.marker {
            self.cycles.iter().map(CycleValues::expected_row).collect()
        } else {
            Vec::new()
        };

        if self.crlf {
            text = text.replace('\n', "\r\n");
        }

        SyntheticLog { text, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_expected() {
        assert_eq!(Timing::seconds("1.2").expected(), "1200.00000");
        assert_eq!(Timing::micros("800").expected(), "0.80000");
        assert_eq!(Timing::millis("12.25").expected(), "12.25000");
    }

    #[test]
    fn test_end_line_layout() {
        let mut out = String::new();
        end(&mut out, 1, "Client generation", &Timing::millis("3.5"));
        assert!(out.starts_with("··End:     Client generation ..."));
        assert!(out.ends_with("...3.5ms\n"));
    }

    #[test]
    fn test_cycle_row_width() {
        assert_eq!(CycleValues::sample(0).expected_row().len(), 16);
    }

    #[test]
    fn test_marker_is_on_its_own_line() {
        let log = LogBuilder::new().cycles(1).build();
        assert!(log.text().lines().any(|l| l == START_MARKER));
    }
}
