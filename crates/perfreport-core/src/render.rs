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

//! Render aligned rows as a delimited comparison table.

use crate::align::{AlignedRow, AlignedTable};
use crate::error::{ReportError, Result};
use crate::model::SampleGroup;
use std::io::Write;

/// Title of the first header column.
pub const TEST_NAME_HEADER: &str = "Test Name";

/// Statistic columns written per report in [`Layout::FullStats`].
const FULL_STATS_COLUMNS: [&str; 4] = ["Min", "Max", "Median", "Average"];

/// Column layout of the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// One column per report holding the average.
    #[default]
    AverageOnly,
    /// Four columns per report: min, max, median and average.
    FullStats,
}

impl Layout {
    fn columns_per_report(self) -> usize {
        match self {
            Layout::AverageOnly => 1,
            Layout::FullStats => FULL_STATS_COLUMNS.len(),
        }
    }
}

/// Configuration for table output.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Column layout (default: average only)
    pub layout: Layout,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            layout: Layout::default(),
        }
    }
}

/// Writes comparison tables.
///
/// The header is always written, even when there are no rows. Fields that
/// contain the delimiter, a quote or a newline are quoted.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    config: TableConfig,
}

impl TableRenderer {
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Header fields for the given report names.
    pub fn header(&self, report_names: &[&str]) -> Vec<String> {
        let mut header = Vec::with_capacity(1 + report_names.len() * self.width());
        header.push(TEST_NAME_HEADER.to_string());

        for name in report_names {
            match self.config.layout {
                Layout::AverageOnly => header.push((*name).to_string()),
                Layout::FullStats => header.extend(
                    FULL_STATS_COLUMNS
                        .iter()
                        .map(|column| format!("{}_{}", name, column)),
                ),
            }
        }

        header
    }

    /// Data fields for one row.
    pub fn record(&self, row: &AlignedRow<'_>) -> Vec<String> {
        let mut record = Vec::with_capacity(1 + row.values.len() * self.width());
        record.push(row.test_name.to_string());

        for value in &row.values {
            match value {
                Some(group) => self.push_values(&mut record, group),
                None => record.extend(std::iter::repeat(String::new()).take(self.width())),
            }
        }

        record
    }

    fn push_values(&self, record: &mut Vec<String>, group: &SampleGroup) {
        match self.config.layout {
            Layout::AverageOnly => record.push(group.average.to_string()),
            Layout::FullStats => record.extend([
                group.min.to_string(),
                group.max.to_string(),
                group.median.to_string(),
                group.average.to_string(),
            ]),
        }
    }

    fn width(&self) -> usize {
        self.config.layout.columns_per_report()
    }

    /// Write a table to `writer`.
    pub fn render_to_writer<W: Write>(&self, table: &AlignedTable<'_>, writer: W) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        wtr.write_record(self.header(&table.report_names))?;
        for row in &table.rows {
            wtr.write_record(self.record(row))?;
        }

        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Render a table to a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfreport_core::{AlignedTable, AlignStats, TableRenderer};
    ///
    /// let table = AlignedTable {
    ///     report_names: vec!["report0", "report1"],
    ///     rows: vec![],
    ///     stats: AlignStats::default(),
    /// };
    /// let csv = TableRenderer::default().render_to_string(&table).unwrap();
    /// assert_eq!(csv, "Test Name,report0,report1\n");
    /// ```
    pub fn render_to_string(&self, table: &AlignedTable<'_>) -> Result<String> {
        let mut buffer = Vec::with_capacity(256 + table.rows.len() * 64);
        self.render_to_writer(table, &mut buffer)?;
        String::from_utf8(buffer).map_err(|_| ReportError::InvalidUtf8 {
            context: "table output".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::AlignStats;
    use crate::model::Statistic;

    fn group(min: i64, max: i64, median: i64, average: f64) -> SampleGroup {
        SampleGroup {
            name: "Time".to_string(),
            min: Statistic::from(min),
            max: Statistic::from(max),
            median: Statistic::from(median),
            average: Statistic::from_f64(average).unwrap(),
            standard_deviation: Statistic::from(0),
            sum: Statistic::from(0),
        }
    }

    fn full_stats() -> TableRenderer {
        TableRenderer::new(TableConfig {
            layout: Layout::FullStats,
            ..Default::default()
        })
    }

    #[test]
    fn test_average_only_header() {
        let header = TableRenderer::default().header(&["a", "b"]);
        assert_eq!(header, vec!["Test Name", "a", "b"]);
    }

    #[test]
    fn test_full_stats_header() {
        let header = full_stats().header(&["a"]);
        assert_eq!(header, vec!["Test Name", "a_Min", "a_Max", "a_Median", "a_Average"]);
    }

    #[test]
    fn test_full_stats_record() {
        let g = group(10, 15, 12, 12.5);
        let row = AlignedRow {
            test_name: "case1",
            values: vec![Some(&g)],
        };
        assert_eq!(full_stats().record(&row), vec!["case1", "10", "15", "12", "12.5"]);
    }

    #[test]
    fn test_empty_values_keep_width() {
        let row = AlignedRow {
            test_name: "case1",
            values: vec![None, None],
        };
        assert_eq!(full_stats().record(&row).len(), 9);
        assert_eq!(TableRenderer::default().record(&row), vec!["case1", "", ""]);
    }

    #[test]
    fn test_custom_delimiter() {
        let g = group(1, 2, 1, 1.5);
        let table = AlignedTable {
            report_names: vec!["a"],
            rows: vec![AlignedRow {
                test_name: "case,1",
                values: vec![Some(&g)],
            }],
            stats: AlignStats::default(),
        };
        let renderer = TableRenderer::new(TableConfig {
            delimiter: b';',
            ..Default::default()
        });
        assert_eq!(
            renderer.render_to_string(&table).unwrap(),
            "Test Name;a\ncase,1;1.5\n"
        );
    }

    #[test]
    fn test_delimiter_in_name_is_quoted() {
        let g = group(1, 2, 1, 1.5);
        let table = AlignedTable {
            report_names: vec!["a"],
            rows: vec![AlignedRow {
                test_name: "case,1",
                values: vec![Some(&g)],
            }],
            stats: AlignStats::default(),
        };
        assert_eq!(
            TableRenderer::default().render_to_string(&table).unwrap(),
            "Test Name,a\n\"case,1\",1.5\n"
        );
    }
}
