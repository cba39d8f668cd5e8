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

//! CSV persistence for benchlog tables.
//!
//! Tables produced by extraction and summarization are written as one
//! header row plus one record per row. Written tables can be read back so
//! that statistics can be recomputed without re-parsing the source logs.
//!
//! # Examples
//!
//! ```
//! use benchlog_core::Table;
//! use benchlog_csv::{from_csv, to_csv};
//!
//! let mut table = Table::new(vec!["Prove".to_string()]);
//! table.push_row(vec!["2.50000".to_string()]).unwrap();
//!
//! let text = to_csv(&table).unwrap();
//! assert_eq!(from_csv(&text).unwrap(), table);
//! ```

mod error;
mod from_csv;
mod to_csv;

pub use error::{CsvError, Result};
pub use from_csv::{
    from_csv, read_table, read_table_file, read_table_with_config, FromCsvConfig,
    DEFAULT_MAX_ROWS,
};
pub use to_csv::{
    to_csv, to_csv_with_config, write_table, write_table_file, write_table_with_config,
    ToCsvConfig,
};
