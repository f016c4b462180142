//! Package → benchmark → measurements aggregation.
//!
//! Titles remember the order they were first seen in, so a report renders in
//! the same order it was written unless sorting is requested.

use std::collections::HashMap;

use super::measurement::Measurement;

/// All measurements of one benchmark (one table row).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkRow {
    /// Row title (benchmark name without sub-benchmark part)
    pub title: String,
    /// Measurements in input order, one per column
    pub measurements: Vec<Measurement>,
}

/// All benchmark rows under one `pkg:` header.
#[derive(Debug, Clone, Default)]
pub struct PackageRows {
    /// Package title as found in the header
    pub title: String,
    rows: Vec<BenchmarkRow>,
    index: HashMap<String, usize>,
}

impl PackageRows {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Rows in first-seen order.
    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    /// Look up a row by title.
    pub fn row(&self, title: &str) -> Option<&BenchmarkRow> {
        self.index.get(title).map(|&i| &self.rows[i])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.index.clear();
    }

    fn push(&mut self, row_title: &str, measurement: Measurement) {
        let idx = match self.index.get(row_title) {
            Some(&idx) => idx,
            None => {
                self.rows.push(BenchmarkRow {
                    title: row_title.to_string(),
                    measurements: Vec::new(),
                });
                self.index.insert(row_title.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        self.rows[idx].measurements.push(measurement);
    }
}

/// The full parse result: every package with its benchmark rows.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    packages: Vec<PackageRows>,
    index: HashMap<String, usize>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a package section.
    ///
    /// A title seen before keeps its position but loses its rows.
    pub fn begin_package(&mut self, title: &str) {
        match self.index.get(title) {
            Some(&idx) => self.packages[idx].clear(),
            None => {
                self.packages.push(PackageRows::new(title));
                self.index.insert(title.to_string(), self.packages.len() - 1);
            }
        }
    }

    /// Append a measurement, creating the package and row on demand.
    pub fn push(&mut self, package: &str, row_title: &str, measurement: Measurement) {
        if !self.index.contains_key(package) {
            self.begin_package(package);
        }
        let idx = self.index[package];
        self.packages[idx].push(row_title, measurement);
    }

    /// Packages in first-seen order.
    pub fn packages(&self) -> &[PackageRows] {
        &self.packages
    }

    /// Look up a package by title.
    pub fn package(&self, title: &str) -> Option<&PackageRows> {
        self.index.get(title).map(|&i| &self.packages[i])
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }
}
