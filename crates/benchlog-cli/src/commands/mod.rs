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

//! CLI command implementations

mod bench;
mod completion;
mod daily;
mod summarize;

pub use bench::bench;
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use daily::{geo_data, smart_meter, DailyKind};
pub use summarize::summarize;

use crate::error::CliError;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Default maximum input size to prevent OOM on runaway logs (1 GB).
/// Can be overridden via the BENCHLOG_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Maximum input size from `BENCHLOG_MAX_FILE_SIZE`, or
/// [`DEFAULT_MAX_FILE_SIZE`] when unset or invalid.
fn get_max_file_size() -> u64 {
    std::env::var("BENCHLOG_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

pub(crate) fn check_size(path: &Path) -> Result<(), CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }
    Ok(())
}

/// Open an input file for streaming after checking its size.
///
/// # Errors
///
/// Returns `Err` if the file is missing, unreadable, or larger than the
/// limit configured via `BENCHLOG_MAX_FILE_SIZE`.
pub fn open_input(path: &Path) -> Result<File, CliError> {
    check_size(path)?;
    File::open(path).map_err(|e| CliError::io_error(path, e))
}

/// Read a whole file with the same size check as [`open_input`].
///
/// # Examples
///
/// ```no_run
/// use benchlog_cli::commands::read_file;
/// use std::path::Path;
///
/// # fn main() -> Result<(), benchlog_cli::error::CliError> {
/// let content = read_file(Path::new("pipeline.json"))?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &Path) -> Result<String, CliError> {
    check_size(path)?;
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<(), CliError> {
    fs::create_dir_all(dir).map_err(|e| CliError::io_error(dir, e))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
