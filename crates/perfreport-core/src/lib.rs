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

//! Benchmark report comparison tables.
//!
//! This crate loads benchmark reports written by a performance test runner
//! and lines up the same test across several runs, producing one table row
//! per test with one column group per run.
//!
//! # Pipeline
//!
//! 1. **Load**: [`NamedReport::from_json_str`] / [`Report::from_json_str`] parse
//!    each run.
//! 2. **Normalize**: [`NameNormalizer`] strips namespace prefixes so tests
//!    renamed between suite versions still match.
//! 3. **Align**: [`RowAligner`] walks the first (reference) report and finds
//!    each test and sample group in every other report.
//! 4. **Render**: [`TableRenderer`] writes the aligned rows as delimited text.
//!
//! # Examples
//!
//! ```
//! use perfreport_core::{
//!     compare_reports, AlignConfig, NameNormalizer, NamedReport, Report, RowAligner,
//!     TableConfig, TableRenderer,
//! };
//!
//! let base = r#"{"Results": [{"Name": "GLTFast.Tests.Suite.case1", "SampleGroups": [
//!     {"Name": "Time", "Min": 10, "Max": 15, "Median": 12, "Average": 12.5,
//!      "StandardDeviation": 1.0, "Sum": 50}]}]}"#;
//! let head = r#"{"Results": [{"Name": "GLTFTest.Suite.case1", "SampleGroups": [
//!     {"Name": "Time", "Min": 13, "Max": 16, "Median": 14, "Average": 14.0,
//!      "StandardDeviation": 1.0, "Sum": 56}]}]}"#;
//!
//! let reports = vec![
//!     NamedReport::new("report0", Report::from_json_str(base).unwrap()),
//!     NamedReport::new("report1", Report::from_json_str(head).unwrap()),
//! ];
//!
//! let aligner = RowAligner::new(
//!     NameNormalizer::default(),
//!     AlignConfig { filter: "Suite".to_string(), ..Default::default() },
//! );
//! let renderer = TableRenderer::new(TableConfig::default());
//!
//! let csv = compare_reports(&reports, &aligner, &renderer).unwrap();
//! assert_eq!(csv, "Test Name,report0,report1\ncase1,12.5,14.0\n");
//! ```
//!
//! # Error Handling
//!
//! Malformed report documents fail with [`ReportError`]. Tests or sample
//! groups that cannot be matched in every report are never errors: their
//! rows are left out of the table.

mod align;
mod error;
mod model;
mod normalize;
mod render;

pub use align::{
    AlignConfig, AlignStats, AlignedRow, AlignedTable, MissingGroupPolicy, RowAligner,
    RowAlignment, DEFAULT_GROUP,
};
pub use error::{ReportError, Result};
pub use model::{report_name_for_path, NamedReport, Report, SampleGroup, Statistic, TestResult};
pub use normalize::{NameNormalizer, Normalized, DEFAULT_PREFIXES, NAME_SEPARATOR};
pub use render::{Layout, TableConfig, TableRenderer, TEST_NAME_HEADER};

/// Align `reports` and render the resulting table to a string.
///
/// The first report is the reference.
///
/// # Errors
///
/// Returns [`ReportError::NoReports`] if `reports` is empty, or a CSV error if
/// writing fails.
pub fn compare_reports(
    reports: &[NamedReport],
    aligner: &RowAligner,
    renderer: &TableRenderer,
) -> Result<String> {
    let table = aligner.align_all(reports)?;
    renderer.render_to_string(&table)
}
