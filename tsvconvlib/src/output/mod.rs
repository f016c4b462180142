//! Output formatting: present aggregated measurements as tables.
//!
//! This module handles the final stage of the pipeline. It provides:
//!
//! - **TsvReport**: one `PackageTable` per package, in the requested order
//! - **PackageTable**: title, column headers and formatted rows
//!
//! Formatting happens here and nowhere else: values are rendered with two
//! decimals, and the `+err`/`-err` columns are dropped when requested.
//!
//! ## Example
//!
//! ```rust
//! use tsvconvlib::{parse_report, RenderOptions, TsvReport};
//!
//! let parsed = parse_report("pkg: a\nBenchmarkX-8  1.00µs ± 10%\n").unwrap();
//! let report = TsvReport::from_aggregate(&parsed.aggregate, &RenderOptions::new());
//! assert_eq!(report.tables[0].rows[0].values, vec!["1.00", "1.10", "0.90"]);
//! ```

pub mod table;

pub use table::{PackageTable, TableRow, TsvReport};
