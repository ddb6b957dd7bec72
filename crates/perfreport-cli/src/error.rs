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

//! Structured error types for the PerfReport CLI.

use perfreport_core::ReportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for PerfReport CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use perfreport_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// A report could not be loaded or the table could not be written.
    #[error("{0}")]
    Report(String),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<ReportError> for CliError {
    fn from(source: ReportError) -> Self {
        Self::Report(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "run/PerformanceTestResults.json",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("run/PerformanceTestResults.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.json", 200_000_000, 100 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.json"));
        assert!(msg.contains("200000000 bytes"));
        assert!(msg.contains("100 MB"));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = CliError::invalid_input("separator must be a single ASCII character");
        assert_eq!(
            err.to_string(),
            "Invalid input: separator must be a single ASCII character"
        );
    }

    #[test]
    fn test_report_error_conversion() {
        let err: CliError = ReportError::NoReports.into();
        assert_eq!(err.to_string(), "At least one report is required");

        let err: CliError = ReportError::Parse {
            path: "run/a.json".into(),
            message: "missing field `Results`".to_string(),
        }
        .into();
        assert!(matches!(err, CliError::Report(_)));
        assert!(err.to_string().contains("run/a.json"));
    }

    #[test]
    fn test_error_cloning() {
        let err = CliError::invalid_input("bad");
        assert_eq!(err.to_string(), err.clone().to_string());
    }
}
