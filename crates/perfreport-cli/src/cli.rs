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

//! CLI command definitions and argument parsing.

use crate::commands::{self, CompareOptions};
use crate::error::CliError;
use clap::{Subcommand, ValueEnum};
use perfreport_core::{MissingGroupPolicy, NameNormalizer, DEFAULT_GROUP};

/// Handling of tests whose reference entry lacks the selected sample group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MissingGroup {
    /// Leave the test out of the table
    #[default]
    Skip,
    /// Write the test name with empty value columns
    EmitEmpty,
}

impl From<MissingGroup> for MissingGroupPolicy {
    fn from(value: MissingGroup) -> Self {
        match value {
            MissingGroup::Skip => MissingGroupPolicy::Skip,
            MissingGroup::EmitEmpty => MissingGroupPolicy::EmitEmpty,
        }
    }
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compare benchmark reports side by side
    ///
    /// Aligns every test of the first report with the same test in the other
    /// reports and writes one row per test. Tests missing from any report, or
    /// lacking the selected sample group, are left out.
    Compare {
        /// Output table path (overwritten)
        #[arg(short, long, value_name = "FILE")]
        output: String,

        /// Only include tests whose normalized name starts with this prefix
        #[arg(short, long, value_name = "PREFIX")]
        filter: String,

        /// Sample group to extract
        #[arg(short, long, default_value = DEFAULT_GROUP)]
        group: String,

        /// Write min, max, median and average for each report instead of the average only
        #[arg(short, long)]
        all_stats: bool,

        /// Field separator (single ASCII character)
        #[arg(short, long, default_value = ",", value_parser = parse_separator)]
        separator: u8,

        /// Namespace prefix to strip from test names (repeatable, replaces the built-in list)
        #[arg(long = "prefix", value_name = "PREFIX")]
        prefixes: Vec<String>,

        /// What to do when the reference test lacks the sample group
        #[arg(long, value_enum, default_value_t = MissingGroup::Skip)]
        missing_group: MissingGroup,

        /// Report files; the first one is the reference
        #[arg(value_name = "REPORT", required = true, num_args = 1..)]
        reports: Vec<String>,
    },

    /// List the tests and sample groups of a report
    Inspect {
        /// Report file
        #[arg(value_name = "REPORT")]
        file: String,

        /// Show the statistics of every sample group
        #[arg(short, long)]
        verbose: bool,

        /// Namespace prefix to strip from test names (repeatable, replaces the built-in list)
        #[arg(long = "prefix", value_name = "PREFIX")]
        prefixes: Vec<String>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a report cannot be read or parsed, or the output
    /// cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Compare {
                output,
                filter,
                group,
                all_stats,
                separator,
                prefixes,
                missing_group,
                reports,
            } => {
                let options = CompareOptions {
                    output,
                    filter,
                    group,
                    all_stats,
                    separator,
                    prefixes,
                    missing_group: missing_group.into(),
                };
                commands::compare(&reports, &options)
            }
            Commands::Inspect {
                file,
                verbose,
                prefixes,
            } => {
                let normalizer = if prefixes.is_empty() {
                    NameNormalizer::default()
                } else {
                    NameNormalizer::new(prefixes)
                };
                commands::inspect(&file, verbose, &normalizer)
            }
        }
    }
}

/// Parse a field separator: exactly one ASCII character other than a quote
/// or line break.
fn parse_separator(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some('\t'), None) => Ok(b'\t'),
        (Some(c), None) if c.is_ascii() && !c.is_ascii_control() && c != '"' => Ok(c as u8),
        _ => Err(format!(
            "separator must be a single printable ASCII character other than '\"', got '{}'",
            value
        )),
    }
}
