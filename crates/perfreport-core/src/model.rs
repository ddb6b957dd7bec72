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

//! In-memory report model and JSON loading.
//!
//! A report is the document written by the performance test runner for one
//! benchmark run:
//!
//! ```text
//! { "Results": [ { "Name": ..., "SampleGroups": [ { "Name": ..., "Min": ..., ... } ] } ] }
//! ```
//!
//! Fields the model does not name (units, raw samples, run metadata) are
//! ignored when parsing.

use crate::error::Result;
use crate::normalize::{NameNormalizer, Normalized};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use std::io::Read;
use std::path::Path;

/// A single pre-computed statistic.
///
/// The number keeps the text the producer wrote (serde_json is built with
/// `arbitrary_precision`), so `10` renders as `10`, `14.0` as `14.0` and
/// `1e3` as `1e3`.
///
/// # Examples
///
/// ```
/// use perfreport_core::Statistic;
///
/// let stat: Statistic = serde_json::from_str("14.0").unwrap();
/// assert_eq!(stat.to_string(), "14.0");
/// assert_eq!(stat.as_f64(), 14.0);
///
/// let stat: Statistic = serde_json::from_str("10").unwrap();
/// assert_eq!(stat.to_string(), "10");
///
/// let stat: Statistic = serde_json::from_str("1e3").unwrap();
/// assert_eq!(stat.to_string(), "1e3");
/// assert_eq!(stat.as_f64(), 1000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Statistic(Number);

impl Statistic {
    /// Create a statistic from a float. Returns `None` for NaN or infinity,
    /// which the report format cannot carry.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self)
    }

    /// The statistic as a float.
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or(f64::NAN)
    }
}

impl From<i64> for Statistic {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A named statistical summary of repeated timing samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SampleGroup {
    /// Group name, e.g. `"Time"`, `"LoadTime"` or `"FrameTime"`.
    pub name: String,
    pub min: Statistic,
    pub max: Statistic,
    pub median: Statistic,
    pub average: Statistic,
    pub standard_deviation: Statistic,
    pub sum: Statistic,
}

/// Results of one test, e.g. `GLTFast.Tests.SampleModelsTest.SmoothLoading.case1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestResult {
    pub name: String,
    pub sample_groups: Vec<SampleGroup>,
}

impl TestResult {
    /// Find a sample group by exact name. The first match wins.
    pub fn find_sample_group_by_name(&self, name: &str) -> Option<&SampleGroup> {
        self.sample_groups.iter().find(|group| group.name == name)
    }
}

/// One benchmark run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    pub results: Vec<TestResult>,
}

impl Report {
    /// Parse a report document from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Json`](crate::ReportError::Json) if the document is not valid JSON or a
    /// required field is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfreport_core::Report;
    ///
    /// let report = Report::from_json_str(r#"{"Results": []}"#).unwrap();
    /// assert!(report.results.is_empty());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a report document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Find a test whose normalized name equals `name`.
    ///
    /// Each candidate is normalized with `normalizer` before comparing, and
    /// the target must come from a normalizer too, so both sides are always
    /// compared in the same form. The first match wins.
    pub fn find_test_by_name(
        &self,
        normalizer: &NameNormalizer,
        name: &Normalized<'_>,
    ) -> Option<&TestResult> {
        self.results
            .iter()
            .find(|result| normalizer.normalize(&result.name).name == name.name)
    }
}

/// A report together with the name it is shown under in table headers.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedReport {
    pub name: String,
    pub report: Report,
}

impl NamedReport {
    pub fn new(name: impl Into<String>, report: Report) -> Self {
        Self {
            name: name.into(),
            report,
        }
    }

    /// Parse the contents of the report file at `path`, naming it after the
    /// file's parent directory (see [`report_name_for_path`]).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Parse`](crate::ReportError::Parse) carrying `path` if `json` is not a
    /// valid report.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfreport_core::NamedReport;
    ///
    /// let named = NamedReport::from_json_str("runs/2.5.1/PerformanceTestResults.json", r#"{"Results": []}"#)
    ///     .unwrap();
    /// assert_eq!(named.name, "2.5.1");
    /// ```
    pub fn from_json_str(path: impl AsRef<Path>, json: &str) -> Result<Self> {
        let path = path.as_ref();
        let report = Report::from_json_str(json).map_err(|e| e.with_path(path))?;
        Ok(Self::new(report_name_for_path(path), report))
    }
}

/// Derive a report's display name from its file path.
///
/// Runners write every run to a file with the same name inside a per-run
/// directory, so the parent directory names the run. Falls back to the file
/// stem, then to the whole path.
///
/// # Examples
///
/// ```
/// use perfreport_core::report_name_for_path;
///
/// assert_eq!(report_name_for_path("runs/2.5.1/PerformanceTestResults.json"), "2.5.1");
/// assert_eq!(report_name_for_path("baseline.json"), "baseline");
/// ```
pub fn report_name_for_path(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    path.parent()
        .and_then(Path::file_name)
        .or_else(|| path.file_stem())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Results": [
            {
                "Name": "GLTFast.Tests.SampleModelsTest.SmoothLoading.Box",
                "Version": "1",
                "SampleGroups": [
                    {"Name": "Time", "Unit": 1, "Min": 1.5, "Max": 3, "Median": 2.0,
                     "Average": 2.25, "StandardDeviation": 0.5, "Sum": 9, "Samples": [1.5, 3]},
                    {"Name": "Time", "Min": 0, "Max": 0, "Median": 0,
                     "Average": 99, "StandardDeviation": 0, "Sum": 0}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let report = Report::from_json_str(SAMPLE).unwrap();
        assert_eq!(report.results.len(), 1);
        let result = &report.results[0];
        assert_eq!(result.name, "GLTFast.Tests.SampleModelsTest.SmoothLoading.Box");
        assert_eq!(result.sample_groups.len(), 2);
        assert_eq!(result.sample_groups[0].standard_deviation.as_f64(), 0.5);
    }

    #[test]
    fn test_statistic_keeps_written_form() {
        let report = Report::from_json_str(SAMPLE).unwrap();
        let group = &report.results[0].sample_groups[0];
        assert_eq!(group.max.to_string(), "3");
        assert_eq!(group.median.to_string(), "2.0");
        assert_eq!(group.average.to_string(), "2.25");
    }

    #[test]
    fn test_statistic_keeps_trailing_zeros_and_exponents() {
        let json = r#"{"Name": "Time", "Min": 1.50, "Max": 1e3, "Median": 2.50E-1,
            "Average": 10, "StandardDeviation": 0.0, "Sum": 1000}"#;
        let group: SampleGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.min.to_string(), "1.50");
        assert_eq!(group.max.to_string(), "1e3");
        assert_eq!(group.median.to_string(), "2.50E-1");
        assert_eq!(group.standard_deviation.to_string(), "0.0");
        assert_eq!(group.max.as_f64(), 1000.0);
        assert_eq!(group.median.as_f64(), 0.25);
    }

    #[test]
    fn test_find_test_first_match_wins() {
        let json = r#"{"Results": [
            {"Name": "GLTFast.Tests.Suite.case1", "SampleGroups": []},
            {"Name": "GLTFTest.Suite.case1", "SampleGroups": [
                {"Name": "Time", "Min": 1, "Max": 1, "Median": 1, "Average": 1,
                 "StandardDeviation": 0, "Sum": 1}
            ]}
        ]}"#;
        let report = Report::from_json_str(json).unwrap();
        let normalizer = NameNormalizer::default();

        let target = normalizer.normalize("Suite.case1");
        let found = report.find_test_by_name(&normalizer, &target).unwrap();
        assert_eq!(found.name, "GLTFast.Tests.Suite.case1");
        assert!(found.sample_groups.is_empty());
    }

    #[test]
    fn test_named_report_from_json_str_attaches_path() {
        let err = NamedReport::from_json_str("run/a.json", "{").unwrap_err();
        match err {
            crate::ReportError::Parse { path, .. } => {
                assert_eq!(path, Path::new("run/a.json"));
            }
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_find_sample_group_first_match_wins() {
        let report = Report::from_json_str(SAMPLE).unwrap();
        let group = report.results[0].find_sample_group_by_name("Time").unwrap();
        assert_eq!(group.average.as_f64(), 2.25);
    }

    #[test]
    fn test_find_sample_group_is_case_sensitive() {
        let report = Report::from_json_str(SAMPLE).unwrap();
        assert!(report.results[0].find_sample_group_by_name("time").is_none());
        assert!(report.results[0].find_sample_group_by_name("LoadTime").is_none());
    }

    #[test]
    fn test_find_test_normalizes_candidates() {
        let report = Report::from_json_str(SAMPLE).unwrap();
        let normalizer = NameNormalizer::default();

        let target = normalizer.normalize("GLTFTest.SampleModelsTest.SmoothLoading.Box");
        let found = report.find_test_by_name(&normalizer, &target).unwrap();
        assert_eq!(found.name, "GLTFast.Tests.SampleModelsTest.SmoothLoading.Box");

        let missing = normalizer.normalize("GLTFTest.SampleModelsTest.SmoothLoading.Duck");
        assert!(report.find_test_by_name(&normalizer, &missing).is_none());
    }

    #[test]
    fn test_missing_statistic_is_rejected() {
        let json = r#"{"Results": [{"Name": "A", "SampleGroups": [
            {"Name": "Time", "Min": 1, "Max": 1, "Median": 1, "Average": 1, "Sum": 1}
        ]}]}"#;
        let err = Report::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("StandardDeviation"));
    }

    #[test]
    fn test_missing_results_is_rejected() {
        assert!(Report::from_json_str("{}").is_err());
    }

    #[test]
    fn test_non_numeric_statistic_is_rejected() {
        let json = r#"{"Results": [{"Name": "A", "SampleGroups": [
            {"Name": "Time", "Min": "1", "Max": 1, "Median": 1, "Average": 1,
             "StandardDeviation": 0, "Sum": 1}
        ]}]}"#;
        assert!(Report::from_json_str(json).is_err());
    }

    #[test]
    fn test_from_reader() {
        let report = Report::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(report.results.len(), 1);
    }

    #[test]
    fn test_statistic_from_f64() {
        assert_eq!(Statistic::from_f64(12.5).unwrap().to_string(), "12.5");
        assert!(Statistic::from_f64(f64::NAN).is_none());
        assert_eq!(Statistic::from(7).to_string(), "7");
    }

    #[test]
    fn test_report_name_for_path() {
        assert_eq!(
            report_name_for_path("/data/glTFastDemo/async3_json/PerformanceTestResults.json"),
            "async3_json"
        );
        assert_eq!(report_name_for_path("report.json"), "report");
    }
}
