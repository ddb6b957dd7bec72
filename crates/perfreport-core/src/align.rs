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

//! Cross-report row alignment.
//!
//! The first report is the reference: its tests, in its order, decide which
//! rows exist. A row is emitted only when the test and the selected sample
//! group can be found in every report. Rows that cannot be aligned are
//! dropped without error.

use crate::error::{ReportError, Result};
use crate::model::{NamedReport, SampleGroup, TestResult};
use crate::normalize::NameNormalizer;
use tracing::{debug, info};

/// Sample group extracted when none is configured.
pub const DEFAULT_GROUP: &str = "Time";

/// What to do when the reference test has no group with the configured name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingGroupPolicy {
    /// Leave the test out of the table.
    #[default]
    Skip,
    /// Emit the test name with empty data columns.
    EmitEmpty,
}

/// Configuration for row alignment.
#[derive(Debug, Clone)]
pub struct AlignConfig {
    /// Only tests whose normalized name starts with this prefix are included.
    pub filter: String,
    /// Name of the sample group to extract (default: `"Time"`).
    pub group: String,
    /// Handling of reference tests lacking the group (default: skip).
    pub missing_group: MissingGroupPolicy,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            filter: String::new(),
            group: DEFAULT_GROUP.to_string(),
            missing_group: MissingGroupPolicy::default(),
        }
    }
}

/// One table row: a test and its sample group in every report.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow<'r> {
    /// Display name, relative to the filter prefix.
    pub test_name: &'r str,
    /// One slot per report, in input order. All slots are `None` only for
    /// rows kept by [`MissingGroupPolicy::EmitEmpty`].
    pub values: Vec<Option<&'r SampleGroup>>,
}

/// Outcome of aligning a single reference test.
#[derive(Debug, Clone, PartialEq)]
pub enum RowAlignment<'r> {
    /// The test aligned; the row should be rendered.
    Row(AlignedRow<'r>),
    /// The normalized name does not start with the filter prefix.
    Filtered,
    /// The report at this index has no test with the same normalized name.
    MissingTest { report: usize },
    /// The report at this index has the test but not the sample group.
    MissingGroup { report: usize },
}

impl<'r> RowAlignment<'r> {
    /// The aligned row, if there is one.
    pub fn into_row(self) -> Option<AlignedRow<'r>> {
        match self {
            Self::Row(row) => Some(row),
            _ => None,
        }
    }
}

/// Counts of what happened to each reference test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignStats {
    pub emitted: usize,
    pub filtered: usize,
    pub missing_test: usize,
    pub missing_group: usize,
}

/// All rows of a comparison table plus alignment statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedTable<'r> {
    /// Report display names, in input order.
    pub report_names: Vec<&'r str>,
    pub rows: Vec<AlignedRow<'r>>,
    pub stats: AlignStats,
}

/// Aligns tests across reports.
///
/// # Examples
///
/// ```
/// use perfreport_core::{AlignConfig, NameNormalizer, NamedReport, Report, RowAligner};
///
/// let json = r#"{"Results": [{"Name": "GLTFast.Tests.Suite.case1", "SampleGroups": [
///     {"Name": "Time", "Min": 1, "Max": 2, "Median": 1.5, "Average": 1.5,
///      "StandardDeviation": 0.5, "Sum": 3}]}]}"#;
/// let reports = vec![NamedReport::new("run", Report::from_json_str(json).unwrap())];
///
/// let config = AlignConfig { filter: "Suite".to_string(), ..Default::default() };
/// let aligner = RowAligner::new(NameNormalizer::default(), config);
/// let table = aligner.align_all(&reports).unwrap();
///
/// assert_eq!(table.rows.len(), 1);
/// assert_eq!(table.rows[0].test_name, "case1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RowAligner {
    normalizer: NameNormalizer,
    config: AlignConfig,
}

impl RowAligner {
    pub fn new(normalizer: NameNormalizer, config: AlignConfig) -> Self {
        Self { normalizer, config }
    }

    pub fn normalizer(&self) -> &NameNormalizer {
        &self.normalizer
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Align one reference test against every report.
    ///
    /// `reports` must include the reference report itself, which is looked up
    /// like any other.
    pub fn align_test<'r>(
        &self,
        reports: &'r [NamedReport],
        reference: &'r TestResult,
    ) -> RowAlignment<'r> {
        let normalized = self.normalizer.normalize(&reference.name);
        let Some(test_name) = NameNormalizer::display_name(&normalized, &self.config.filter)
        else {
            return RowAlignment::Filtered;
        };

        let mut matched = Vec::with_capacity(reports.len());
        for (index, named) in reports.iter().enumerate() {
            match named.report.find_test_by_name(&self.normalizer, &normalized) {
                Some(test) => matched.push(test),
                None => return RowAlignment::MissingTest { report: index },
            }
        }

        let Some(reference_group) = reference.find_sample_group_by_name(&self.config.group)
        else {
            return match self.config.missing_group {
                MissingGroupPolicy::Skip => RowAlignment::MissingGroup { report: 0 },
                MissingGroupPolicy::EmitEmpty => RowAlignment::Row(AlignedRow {
                    test_name,
                    values: vec![None; reports.len()],
                }),
            };
        };

        let mut values = Vec::with_capacity(matched.len());
        for (index, test) in matched.into_iter().enumerate() {
            match test.find_sample_group_by_name(&reference_group.name) {
                Some(group) => values.push(Some(group)),
                None => return RowAlignment::MissingGroup { report: index },
            }
        }

        RowAlignment::Row(AlignedRow { test_name, values })
    }

    /// Align every test of the first report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NoReports`] if `reports` is empty.
    pub fn align_all<'r>(&self, reports: &'r [NamedReport]) -> Result<AlignedTable<'r>> {
        let reference = reports.first().ok_or(ReportError::NoReports)?;

        let mut rows = Vec::new();
        let mut stats = AlignStats::default();

        for test in &reference.report.results {
            match self.align_test(reports, test) {
                RowAlignment::Row(row) => {
                    stats.emitted += 1;
                    rows.push(row);
                }
                RowAlignment::Filtered => stats.filtered += 1,
                RowAlignment::MissingTest { report } => {
                    debug!(
                        test = %test.name,
                        report = %reports[report].name,
                        "dropping row: test not found"
                    );
                    stats.missing_test += 1;
                }
                RowAlignment::MissingGroup { report } => {
                    debug!(
                        test = %test.name,
                        report = %reports[report].name,
                        group = %self.config.group,
                        "dropping row: sample group not found"
                    );
                    stats.missing_group += 1;
                }
            }
        }

        info!(
            reference = %reference.name,
            rows = stats.emitted,
            filtered = stats.filtered,
            missing_test = stats.missing_test,
            missing_group = stats.missing_group,
            "aligned reports"
        );

        Ok(AlignedTable {
            report_names: reports.iter().map(|r| r.name.as_str()).collect(),
            rows,
            stats,
        })
    }
}
