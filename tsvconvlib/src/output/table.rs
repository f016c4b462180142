//! Table-ready data structures for TSV output.
//!
//! This module provides `TsvReport`, a presentation-ready structure that can
//! be written as tab separated text or serialized to JSON.
//!
//! The data flow is:
//! 1. Raw collection (report lines → `Aggregate`)
//! 2. TsvReport (ordering and error columns applied, numbers formatted)
//! 3. Text (`# ---- pkg ----` blocks) or JSON

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::data::{Aggregate, BenchmarkRow, Measurement, PackageRows};
use crate::options::{Ordering, RenderOptions};

const ABOVE_LABEL: &str = "+err";
const BELOW_LABEL: &str = "-err";

/// A single benchmark row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row title (benchmark name)
    pub label: String,
    /// Formatted values, one or three per column group
    pub values: Vec<String>,
}

/// The table for one package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageTable {
    /// Package title from the `pkg:` header
    pub title: String,
    /// Column labels taken from the first row; empty when there are no rows
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<TableRow>,
}

/// Table-ready conversion result: one table per package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TsvReport {
    pub tables: Vec<PackageTable>,
}

impl TsvReport {
    /// Build the report from aggregated measurements.
    pub fn from_aggregate(aggregate: &Aggregate, options: &RenderOptions) -> Self {
        let mut packages: Vec<&PackageRows> = aggregate.packages().iter().collect();
        if options.ordering == Ordering::Sorted {
            packages.sort_by(|a, b| a.title.cmp(&b.title));
        }

        let tables = packages
            .into_iter()
            .map(|pkg| build_package_table(pkg, options))
            .collect();

        TsvReport { tables }
    }

    /// Write every table as tab separated text.
    pub fn write_tsv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for TsvReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in &self.tables {
            write!(f, "{}", table)?;
        }
        Ok(())
    }
}

/// Every field, including the last one on a line, is followed by a tab.
impl fmt::Display for PackageTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# ---- {} ----", self.title)?;
        if !self.rows.is_empty() {
            write!(f, "#\t")?;
            for header in &self.headers {
                write!(f, "{}\t", header)?;
            }
            writeln!(f)?;
        }
        for row in &self.rows {
            write!(f, "{}\t", row.label)?;
            for value in &row.values {
                write!(f, "{}\t", value)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

fn build_package_table(pkg: &PackageRows, options: &RenderOptions) -> PackageTable {
    let mut rows: Vec<&BenchmarkRow> = pkg.rows().iter().collect();
    if options.ordering == Ordering::Sorted {
        rows.sort_by(|a, b| a.title.cmp(&b.title));
    }

    let headers = rows
        .first()
        .map(|first| build_headers(&first.measurements, options))
        .unwrap_or_default();

    if let Some(first) = rows.first() {
        for row in rows.iter().skip(1) {
            if row.measurements.len() != first.measurements.len() {
                log::debug!(
                    "package '{}': row '{}' has {} columns, header has {} (from: {})",
                    pkg.title,
                    row.title,
                    row.measurements.len(),
                    first.measurements.len(),
                    row.measurements
                        .first()
                        .map(|m| m.original.as_str())
                        .unwrap_or_default()
                );
            }
        }
    }

    PackageTable {
        title: pkg.title.clone(),
        headers,
        rows: rows
            .into_iter()
            .map(|row| TableRow {
                label: row.title.clone(),
                values: row_values(&row.measurements, options),
            })
            .collect(),
    }
}

/// Build column labels from the measurements of the first row.
fn build_headers(measurements: &[Measurement], options: &RenderOptions) -> Vec<String> {
    let mut headers = Vec::with_capacity(measurements.len() * options.fields_per_column());
    for m in measurements {
        headers.push(m.column.clone());
        if !options.omit_err {
            headers.push(ABOVE_LABEL.to_string());
            headers.push(BELOW_LABEL.to_string());
        }
    }
    headers
}

fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

fn row_values(measurements: &[Measurement], options: &RenderOptions) -> Vec<String> {
    let mut values = Vec::with_capacity(measurements.len() * options.fields_per_column());
    for m in measurements {
        values.push(format_value(m.value));
        if !options.omit_err {
            values.push(format_value(m.above));
            values.push(format_value(m.below));
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_aggregate() -> Aggregate {
        let mut agg = Aggregate::new();
        agg.begin_package("example.com/zeta");
        agg.push(
            "example.com/zeta",
            "BenchmarkSub",
            Measurement::new("default", 10.0, 10.0, ""),
        );
        agg.push(
            "example.com/zeta",
            "BenchmarkAdd",
            Measurement::new("size=1", 1.0, 0.0, ""),
        );
        agg.push(
            "example.com/zeta",
            "BenchmarkAdd",
            Measurement::new("size=2", 2.5, 0.0, ""),
        );
        agg.begin_package("example.com/alpha");
        agg
    }

    #[test]
    fn test_headers_with_errors() {
        let ms = vec![
            Measurement::new("a", 1.0, 1.0, ""),
            Measurement::new("b", 1.0, 1.0, ""),
        ];
        let headers = build_headers(&ms, &RenderOptions::new());
        assert_eq!(headers, vec!["a", "+err", "-err", "b", "+err", "-err"]);
    }

    #[test]
    fn test_headers_omit_errors() {
        let ms = vec![Measurement::new("a", 1.0, 1.0, "")];
        let headers = build_headers(&ms, &RenderOptions::new().omit_err(true));
        assert_eq!(headers, vec!["a"]);
    }

    #[test]
    fn test_row_values() {
        let ms = vec![Measurement::new("default", 123.45, 5.0, "")];
        assert_eq!(
            row_values(&ms, &RenderOptions::new()),
            vec!["123.45", "129.62", "117.28"]
        );
        assert_eq!(
            row_values(&ms, &RenderOptions::new().omit_err(true)),
            vec!["123.45"]
        );
    }

    #[test]
    fn test_input_order() {
        let report = TsvReport::from_aggregate(&sample_aggregate(), &RenderOptions::new());
        assert_eq!(report.tables.len(), 2);
        assert_eq!(report.tables[0].title, "example.com/zeta");
        assert_eq!(report.tables[0].rows[0].label, "BenchmarkSub");
        // Header comes from the first row in output order
        assert_eq!(report.tables[0].headers, vec!["default", "+err", "-err"]);
    }

    #[test]
    fn test_sorted_order() {
        let opts = RenderOptions::new().ordering(Ordering::Sorted);
        let report = TsvReport::from_aggregate(&sample_aggregate(), &opts);
        assert_eq!(report.tables[0].title, "example.com/alpha");
        let zeta = &report.tables[1];
        assert_eq!(zeta.rows[0].label, "BenchmarkAdd");
        assert_eq!(
            zeta.headers,
            vec!["size=1", "+err", "-err", "size=2", "+err", "-err"]
        );
    }

    #[test]
    fn test_tsv_text() {
        let opts = RenderOptions::new().ordering(Ordering::Sorted);
        let report = TsvReport::from_aggregate(&sample_aggregate(), &opts);
        let text = report.to_string();
        let expected = "\
# ---- example.com/alpha ----

# ---- example.com/zeta ----
#\tsize=1\t+err\t-err\tsize=2\t+err\t-err\t
BenchmarkAdd\t1.00\t1.00\t1.00\t2.50\t2.50\t2.50\t
BenchmarkSub\t10.00\t11.00\t9.00\t

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_write_tsv_omit_err() {
        let opts = RenderOptions::new().omit_err(true);
        let report = TsvReport::from_aggregate(&sample_aggregate(), &opts);
        let mut buf = Vec::new();
        report.write_tsv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("#\tdefault\t\n"));
        assert!(text.contains("BenchmarkAdd\t1.00\t2.50\t\n"));
        assert!(!text.contains("+err"));
    }

    #[test]
    fn test_json_shape() {
        let report = TsvReport::from_aggregate(&sample_aggregate(), &RenderOptions::new());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["tables"][0]["title"], "example.com/zeta");
        assert_eq!(value["tables"][0]["rows"][0]["values"][0], "10.00");
        assert!(value["tables"][1]["headers"].as_array().unwrap().is_empty());
    }
}
