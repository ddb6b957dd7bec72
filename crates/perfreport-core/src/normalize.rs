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

//! Test name normalization.
//!
//! Different versions of the test suite put their tests in different
//! namespaces (`GLTFast.Tests.` in newer runs, `GLTFTest.` in older ones).
//! Stripping the namespace gives a name that identifies the same test in
//! every run.

/// Namespace prefixes recognized by [`NameNormalizer::default`], in priority order.
pub const DEFAULT_PREFIXES: &[&str] = &["GLTFast.Tests.", "GLTFTest."];

/// Separator between the components of a dotted test name.
pub const NAME_SEPARATOR: char = '.';

/// A test name with its namespace prefix removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized<'a> {
    /// The prefix that was stripped, if any.
    pub prefix: Option<&'a str>,
    /// The remaining name.
    pub name: &'a str,
}

/// Strips one recognized namespace prefix from test names.
///
/// Prefixes are checked in configured order and the first match wins.
///
/// # Examples
///
/// ```
/// use perfreport_core::NameNormalizer;
///
/// let normalizer = NameNormalizer::default();
///
/// let n = normalizer.normalize("GLTFast.Tests.Foo.Bar");
/// assert_eq!(n.prefix, Some("GLTFast.Tests."));
/// assert_eq!(n.name, "Foo.Bar");
///
/// let n = normalizer.normalize("Unprefixed.Foo");
/// assert_eq!(n.prefix, None);
/// assert_eq!(n.name, "Unprefixed.Foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameNormalizer {
    prefixes: Vec<String>,
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIXES.iter().copied())
    }
}

impl NameNormalizer {
    /// Create a normalizer recognizing `prefixes`, checked in the given order.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// The configured prefixes in priority order.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Strip the first matching prefix from `name`.
    pub fn normalize<'a>(&self, name: &'a str) -> Normalized<'a> {
        for prefix in &self.prefixes {
            if let Some(rest) = name.strip_prefix(prefix.as_str()) {
                return Normalized {
                    prefix: Some(&name[..prefix.len()]),
                    name: rest,
                };
            }
        }

        Normalized { prefix: None, name }
    }

    /// Name of a test as shown in the table, relative to `filter`.
    ///
    /// Returns `None` if the normalized name does not start with `filter`:
    /// the test belongs to another benchmark category and is left out.
    /// Otherwise strips `filter` and at most one following [`NAME_SEPARATOR`].
    ///
    /// # Examples
    ///
    /// ```
    /// use perfreport_core::NameNormalizer;
    ///
    /// let normalizer = NameNormalizer::default();
    /// let n = normalizer.normalize("GLTFast.Tests.Suite.case1");
    ///
    /// assert_eq!(NameNormalizer::display_name(&n, "Suite"), Some("case1"));
    /// assert_eq!(NameNormalizer::display_name(&n, "Other"), None);
    /// ```
    pub fn display_name<'a>(normalized: &Normalized<'a>, filter: &str) -> Option<&'a str> {
        let rest = normalized.name.strip_prefix(filter)?;
        Some(rest.strip_prefix(NAME_SEPARATOR).unwrap_or(rest))
    }
}
