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

//! PerfReport CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **compare**: Align tests across benchmark reports and write a comparison table
//! - **inspect**: List the tests and sample groups of a single report
//!
//! # Examples
//!
//! ```no_run
//! use perfreport_cli::commands::{compare, CompareOptions};
//!
//! # fn main() -> Result<(), perfreport_cli::error::CliError> {
//! let options = CompareOptions {
//!     output: "load.csv".to_string(),
//!     filter: "SampleModelsTest".to_string(),
//!     ..Default::default()
//! };
//! let reports = vec![
//!     "2.5.1/PerformanceTestResults.json".to_string(),
//!     "async3_json/PerformanceTestResults.json".to_string(),
//! ];
//! compare(&reports, &options)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! - `PERFREPORT_MAX_FILE_SIZE`: largest report file accepted, in bytes
//! - `RUST_LOG`: log filter; `RUST_LOG=perfreport=debug` explains dropped rows

pub mod cli;
pub mod commands;
pub mod error;
