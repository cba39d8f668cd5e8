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

//! Benchmark log extraction.
//!
//! This crate turns the free-text trace a benchmark harness prints for the
//! zero-knowledge randomness protocols into fixed-schema rows, then
//! summarizes them per column.
//!
//! # Pipeline
//!
//! ```text
//! lines ──► RunAssembler ──► Run ──► ColumnProjection ──► Table ──► summarize
//!             │   ▲
//!             ▼   │
//!        LineClassifier + MeasurementSchema + units::normalize
//! ```
//!
//! - [`MeasurementSchema`]: the cyclic list of steps one run emits
//! - [`LineClassifier`]: the four extraction rules
//! - [`RunAssembler`]: the state machine that seals one [`Run`] per cycle
//! - [`ColumnProjection`]: positional reorder/subset of a run
//! - [`summarize`]: per-column median and mean
//!
//! # Example
//!
//! ```rust
//! use benchlog_core::{
//!     extract_runs, summarize, AssemblerConfig, ColumnProjection, MeasurementSchema,
//!     ProjectionPreset, Statistic, Table,
//! };
//! use std::io::Cursor;
//!
//! let log = "no measurements here\n";
//! let schema = MeasurementSchema::randomness_protocol();
//! let runs = extract_runs(Cursor::new(log), &schema, &AssemblerConfig::default()).unwrap();
//! assert!(runs.is_empty());
//!
//! let projection = ColumnProjection::preset(ProjectionPreset::Publication, &schema).unwrap();
//! let table = Table::from_runs(&runs, &projection).unwrap();
//! assert_eq!(table.width(), 11);
//!
//! // No rows, no statistics
//! assert!(summarize(&table, "empty").is_err());
//! ```
//!
//! # Error Handling
//!
//! Every error is fatal for the input being processed. See [`ExtractError`].

mod assembler;
mod classifier;
pub mod daily;
mod error;
mod projection;
mod reader;
mod schema;
mod stats;
mod table;
pub mod units;

pub use assembler::{extract_runs, Run, RunAssembler, RunStream};
pub use classifier::{
    trailing_token, AssemblerConfig, Extraction, LineClassifier, ParserState, Rule,
};
pub use error::{ExtractError, ExtractResult};
pub use projection::{
    ColumnProjection, ProjectedColumn, ProjectionPreset, PUBLICATION_ORDER, RANDOMNESS_LABELS,
};
pub use reader::LineReader;
pub use schema::{MeasurementSchema, MeasurementStep, StepKind};
pub use stats::{mean, median, summarize, Statistic, Summary, SummaryRow};
pub use table::Table;
pub use units::{format_fixed, TimeUnit, PRECISION};
