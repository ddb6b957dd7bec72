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

//! Compare command - cross-report comparison tables

use super::{load_reports, write_output};
use crate::error::CliError;
use perfreport_core::{
    compare_reports, AlignConfig, Layout, MissingGroupPolicy, NameNormalizer, RowAligner,
    TableConfig, TableRenderer, DEFAULT_GROUP,
};
use tracing::info;

/// Options of the compare command.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Output table path, overwritten on every run.
    pub output: String,
    /// Only tests whose normalized name starts with this prefix are compared.
    pub filter: String,
    /// Sample group to extract.
    pub group: String,
    /// Write min, max, median and average instead of only the average.
    pub all_stats: bool,
    /// Field separator.
    pub separator: u8,
    /// Namespace prefixes to strip; empty means the built-in list.
    pub prefixes: Vec<String>,
    pub missing_group: MissingGroupPolicy,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            output: String::new(),
            filter: String::new(),
            group: DEFAULT_GROUP.to_string(),
            all_stats: false,
            separator: b',',
            prefixes: Vec::new(),
            missing_group: MissingGroupPolicy::default(),
        }
    }
}

impl CompareOptions {
    fn normalizer(&self) -> NameNormalizer {
        if self.prefixes.is_empty() {
            NameNormalizer::default()
        } else {
            NameNormalizer::new(self.prefixes.iter().cloned())
        }
    }
}

/// Align the tests of several reports and write a comparison table.
///
/// The first report is the reference: its tests, in its order, decide which
/// rows are written. Each report's column header is the name of the
/// directory containing it.
///
/// # Errors
///
/// Returns `Err` if no report is given, a report cannot be read or parsed,
/// or the output cannot be written. Tests that cannot be matched in every
/// report are not errors; they are left out of the table.
pub fn compare(reports: &[String], options: &CompareOptions) -> Result<(), CliError> {
    if reports.is_empty() {
        return Err(CliError::invalid_input("at least one report file is required"));
    }

    let reports = load_reports(reports)?;

    let aligner = RowAligner::new(
        options.normalizer(),
        AlignConfig {
            filter: options.filter.clone(),
            group: options.group.clone(),
            missing_group: options.missing_group,
        },
    );
    let renderer = TableRenderer::new(TableConfig {
        delimiter: options.separator,
        layout: if options.all_stats {
            Layout::FullStats
        } else {
            Layout::AverageOnly
        },
    });

    let table = compare_reports(&reports, &aligner, &renderer)?;
    write_output(&table, &options.output)?;

    info!(output = %options.output, reports = reports.len(), "wrote comparison table");
    Ok(())
}
