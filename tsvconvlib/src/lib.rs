//! # tsvconvlib
//!
//! Turn benchstat comparison reports into tab separated tables that can be
//! pasted into a spreadsheet.
//!
//! ## Overview
//!
//! A report is parsed in a single pass. Lines are classified as:
//!
//! - **Package headers**: `pkg: example.com/foo` starts a new section
//! - **Data lines**: `BenchmarkAdd/size=10-8   2.00ms ± 10%`
//! - **Everything else**: logged with a `?` marker and skipped
//!
//! Each data line becomes a [`Measurement`] normalized to microseconds, with
//! upper and lower bounds derived from the error percentage. Measurements
//! are grouped by package, then by benchmark name (the row); the part of the
//! name after the first `/` becomes the column.
//!
//! ## Example
//!
//! ```rust
//! use tsvconvlib::{parse_report, Ordering, RenderOptions, TsvReport};
//!
//! let input = "\
//! pkg: example.com/foo
//! BenchmarkAdd/size=10-8   2.00ms ± 10%
//! BenchmarkAdd/size=20-8   4.00ms ± 10%
//! ";
//! let parsed = parse_report(input).unwrap();
//! let options = RenderOptions::new().omit_err(true).ordering(Ordering::Sorted);
//! let report = TsvReport::from_aggregate(&parsed.aggregate, &options);
//!
//! assert_eq!(
//!     report.to_string(),
//!     "# ---- example.com/foo ----\n#\tsize=10\tsize=20\t\nBenchmarkAdd\t2000.00\t4000.00\t\n\n"
//! );
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;

pub use data::{
    parse_file, parse_report, Aggregate, BenchmarkRow, Measurement, PackageRows, ParseStats,
    ParsedReport, TimeUnit,
};
pub use error::{NumericField, TsvconvError};
pub use options::{Ordering, RenderOptions};
pub use output::{PackageTable, TableRow, TsvReport};

/// Result type for tsvconvlib operations
pub type Result<T> = std::result::Result<T, TsvconvError>;
