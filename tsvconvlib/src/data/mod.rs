//! Data collection: parse report lines and aggregate measurements.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Measurements**: one value with error bounds, normalized to microseconds
//! - **Aggregation**: package → benchmark row → ordered measurements
//! - **Parsing**: line classification and field extraction (`parse_report`)
//!
//! ## Example
//!
//! ```rust
//! use tsvconvlib::data::parse_report;
//!
//! let report = "pkg: example.com/foo\nBenchmarkAdd-8  2.00ms ± 10%\n";
//! let parsed = parse_report(report).unwrap();
//! let row = parsed.aggregate.package("example.com/foo").unwrap().row("BenchmarkAdd").unwrap();
//! assert_eq!(row.measurements[0].value, 2000.0);
//! ```

pub mod aggregate;
pub mod measurement;
pub mod parser;

pub use aggregate::{Aggregate, BenchmarkRow, PackageRows};
pub use measurement::{split_name, Measurement, TimeUnit, DEFAULT_COLUMN};
pub use parser::{
    classify_line, parse_data_line, parse_file, parse_header, parse_report, DataLine, LineKind,
    ParseStats, ParsedReport,
};
