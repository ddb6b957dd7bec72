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

//! PerfReport Command Line Interface

use clap::Parser;
use perfreport_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "perfreport=warn";

/// PerfReport - benchmark report comparison tables
///
/// Lines up the same tests across several benchmark runs and writes one
/// delimited table with a column group per run.
///
/// # Examples
///
/// ```bash
/// # Compare average load times of two runs
/// perfreport compare -o load.csv -f SampleModelsTest.SmoothLoading -g LoadTime \
///     2.5.1/PerformanceTestResults.json async3_json/PerformanceTestResults.json
///
/// # Full frame time statistics
/// perfreport compare -o frames.csv -f SampleModelsTest -g FrameTime --all-stats \
///     2.5.1/PerformanceTestResults.json async3_json/PerformanceTestResults.json
///
/// # List the tests and sample groups of a report
/// perfreport inspect 2.5.1/PerformanceTestResults.json --verbose
/// ```
#[derive(Parser)]
#[command(name = "perfreport")]
#[command(author, version, about = "PerfReport - benchmark report comparison tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
