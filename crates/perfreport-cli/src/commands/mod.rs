// Dweve PerfReport - Benchmark Report Comparison Tables
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

mod compare;
mod inspect;

pub use compare::{compare, CompareOptions};
pub use inspect::inspect;

use crate::error::CliError;
use perfreport_core::NamedReport;
use std::fs;

/// Default maximum report file size (256 MB).
/// Can be overridden via the PERFREPORT_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("PERFREPORT_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before reading.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The file size exceeds the maximum allowed size (configurable via `PERFREPORT_MAX_FILE_SIZE`)
/// - The file cannot be read or is not valid UTF-8
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file, replacing any previous content.
pub fn write_output(content: &str, path: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|e| CliError::io_error(path, e))
}

/// Load a report file, naming it after its parent directory.
pub fn load_report_file(path: &str) -> Result<NamedReport, CliError> {
    let content = read_file(path)?;
    let named = NamedReport::from_json_str(path, &content)?;
    tracing::debug!(path, name = %named.name, tests = named.report.results.len(), "loaded report");
    Ok(named)
}

/// Load every report, in order. Fails on the first unreadable or malformed one.
pub fn load_reports(paths: &[String]) -> Result<Vec<NamedReport>, CliError> {
    paths.iter().map(|path| load_report_file(path)).collect()
}
