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

//! Error types for report loading and table rendering.
//!
//! Only structural failures are errors. A test or sample group that cannot be
//! aligned across reports is not an error; the row is simply left out of the
//! table.

use std::path::PathBuf;
use thiserror::Error;

/// Report loading and rendering error types.
///
/// # Examples
///
/// ```
/// use perfreport_core::ReportError;
///
/// let err = ReportError::Parse {
///     path: "run1/PerformanceTestResults.json".into(),
///     message: "missing field `Name` at line 3 column 5".to_string(),
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "Malformed report 'run1/PerformanceTestResults.json': missing field `Name` at line 3 column 5"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// A report file is not a valid report document.
    ///
    /// Raised for invalid JSON, missing required fields (`Results`, `Name`,
    /// `SampleGroups` or any of the six statistics) and wrongly typed values.
    #[error("Malformed report '{path}': {message}")]
    Parse {
        /// The file path of the malformed report.
        path: PathBuf,
        /// serde_json's description, including line and column.
        message: String,
    },

    /// An in-memory report document is not valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfreport_core::{Report, ReportError};
    ///
    /// let err = Report::from_json_str(r#"{"Results": [{"Name": 1}]}"#).unwrap_err();
    /// assert!(matches!(err, ReportError::Json(_)));
    /// ```
    #[error("Malformed report: {0}")]
    Json(#[from] serde_json::Error),

    /// Alignment was requested without any input report.
    #[error("At least one report is required")]
    NoReports,

    /// Error from the underlying CSV writer.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Rendered output was not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// What was being produced when the invalid bytes were found.
        context: String,
    },
}

impl ReportError {
    /// Attach a file path to an in-memory parse failure.
    ///
    /// Errors that are not [`ReportError::Json`] are returned unchanged.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Json(source) => Self::Parse {
                path: path.into(),
                message: source.to_string(),
            },
            other => other,
        }
    }
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
