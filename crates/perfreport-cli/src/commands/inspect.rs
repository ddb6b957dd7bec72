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

//! Inspect command - report contents listing

use super::load_report_file;
use crate::error::CliError;
use colored::Colorize;
use perfreport_core::{NameNormalizer, SampleGroup};

/// List the tests of a report with their normalized names.
///
/// Useful for choosing a filter prefix and sample group name for `compare`.
/// In verbose mode every sample group is printed with its statistics.
///
/// # Errors
///
/// Returns `Err` if the report cannot be read or parsed.
pub fn inspect(file: &str, verbose: bool, normalizer: &NameNormalizer) -> Result<(), CliError> {
    let named = load_report_file(file)?;

    println!("{}", "Benchmark Report".bold().underline());
    println!();
    println!("{}  {}", "Name:".cyan(), named.name);
    println!("{}  {}", "Tests:".cyan(), named.report.results.len());
    println!();

    for result in &named.report.results {
        let normalized = normalizer.normalize(&result.name);
        match normalized.prefix {
            Some(prefix) => println!("  {}{}", prefix.dimmed(), normalized.name.green()),
            None => println!("  {}", normalized.name.yellow()),
        }

        if verbose {
            for group in &result.sample_groups {
                println!("    {}", format_group(group));
            }
        } else if !result.sample_groups.is_empty() {
            let names: Vec<&str> = result.sample_groups.iter().map(|g| g.name.as_str()).collect();
            println!("    groups: [{}]", names.join(", "));
        }
    }

    Ok(())
}

fn format_group(group: &SampleGroup) -> String {
    format!(
        "{}: min={} max={} median={} avg={} stddev={} sum={}",
        group.name.magenta(),
        group.min,
        group.max,
        group.median,
        group.average.to_string().cyan(),
        group.standard_deviation,
        group.sum
    )
}
