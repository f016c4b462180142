//! Benchstat report line parser.
//!
//! A report is processed line by line. Each line is one of:
//!
//! - a package header: `pkg: example.com/foo`
//! - a data line: `BenchmarkAdd/size=10-8   2.00ms ± 10%`
//! - anything else, which is logged with a `?` marker and skipped
//!
//! Data lines are attached to the most recent package header. Lines that
//! appear before any header are grouped under the empty title.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::aggregate::Aggregate;
use super::measurement::{split_name, Measurement, TimeUnit};
use crate::error::{NumericField, TsvconvError};
use crate::Result;

const HEADER_PREFIX: &str = "pkg:";

fn header_regex() -> &'static Regex {
    static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADER_REGEX.get_or_init(|| {
        Regex::new(r"^pkg:\s*(?P<pkg>[\w/.\-]+)").expect("HEADER_REGEX is valid")
    })
}

fn data_regex() -> &'static Regex {
    static DATA_REGEX: OnceLock<Regex> = OnceLock::new();
    DATA_REGEX.get_or_init(|| {
        Regex::new(
            r"^(?P<name>.+)-(?P<cpus>\d+)\s+(?P<value>\S+?)(?P<unit>[µμmn])s\s*±\s*(?P<error>[^\s%]+)%",
        )
        .expect("DATA_REGEX is valid")
    })
}

/// The raw fields of a matched data line.
///
/// Numeric fields are kept as text; they are only converted by
/// [`DataLine::build_measurement`], which is where a bad number becomes an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLine<'a> {
    /// Full benchmark name, including any `/` sub-benchmark part
    pub name: &'a str,
    /// GOMAXPROCS suffix
    pub cpus: Option<u32>,
    /// Value token as printed, without the unit
    pub value: &'a str,
    pub unit: TimeUnit,
    /// Error percentage token, without `%`
    pub error: &'a str,
}

impl<'a> DataLine<'a> {
    /// Benchmark name before the first `/`.
    pub fn row_title(&self) -> &'a str {
        split_name(self.name).0
    }

    /// Sub-benchmark name after the first `/`, or `default`.
    pub fn column_title(&self) -> &'a str {
        split_name(self.name).1
    }

    /// Convert the textual fields into a normalized measurement.
    pub fn build_measurement(&self, line_number: usize, line: &str) -> Result<Measurement> {
        let value = parse_number(self.value, NumericField::Value, line_number, line)?;
        let error = parse_number(self.error, NumericField::Error, line_number, line)?;

        Ok(Measurement::new(
            self.column_title(),
            self.unit.to_micros(value),
            error,
            line,
        ))
    }
}

fn parse_number(token: &str, field: NumericField, line_number: usize, line: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(TsvconvError::InvalidNumber {
            field,
            token: token.to_string(),
            line_number,
            line: line.to_string(),
        }),
    }
}

/// Classification of a single report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `pkg:` header with the extracted package title
    Header(&'a str),
    /// A benchmark measurement
    Data(DataLine<'a>),
    /// Anything else
    Unrecognized,
}

/// Extract the package title from a `pkg:` header line.
pub fn parse_header(line: &str) -> Option<&str> {
    header_regex()
        .captures(line)
        .and_then(|caps| caps.name("pkg"))
        .map(|m| m.as_str())
}

/// Match a data line and return its raw fields.
pub fn parse_data_line(line: &str) -> Option<DataLine<'_>> {
    let caps = data_regex().captures(line)?;
    let unit = TimeUnit::from_prefix(caps.name("unit")?.as_str())?;

    Some(DataLine {
        name: caps.name("name")?.as_str(),
        cpus: caps.name("cpus").and_then(|m| m.as_str().parse().ok()),
        value: caps.name("value")?.as_str(),
        unit,
        error: caps.name("error")?.as_str(),
    })
}

/// Decide what kind of line this is.
///
/// Lines starting with `pkg:` are never treated as data, even when the
/// header itself is malformed.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.starts_with(HEADER_PREFIX) {
        return match parse_header(line) {
            Some(title) => LineKind::Header(title),
            None => LineKind::Unrecognized,
        };
    }
    match parse_data_line(line) {
        Some(data) => LineKind::Data(data),
        None => LineKind::Unrecognized,
    }
}

/// Line counts collected during a parse pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Total lines seen
    pub lines: usize,
    /// `pkg:` headers
    pub headers: usize,
    /// Data lines turned into measurements
    pub measurements: usize,
    /// Unrecognized lines
    pub skipped: usize,
}

/// Result of parsing a whole report.
#[derive(Debug, Clone, Default)]
pub struct ParsedReport {
    pub aggregate: Aggregate,
    pub stats: ParseStats,
}

/// Parse a full report held in memory.
///
/// Stops at the first data line whose numbers cannot be parsed; nothing of
/// the partial aggregate is returned in that case.
pub fn parse_report(input: &str) -> Result<ParsedReport> {
    let mut aggregate = Aggregate::new();
    let mut stats = ParseStats::default();
    let mut current = String::new();

    for (idx, line) in input.lines().enumerate() {
        let line_number = idx + 1;
        stats.lines += 1;

        match classify_line(line) {
            LineKind::Header(title) => {
                log::debug!("line {}: package '{}'", line_number, title);
                current = title.to_string();
                aggregate.begin_package(&current);
                stats.headers += 1;
            }
            LineKind::Data(data) => {
                let measurement = data.build_measurement(line_number, line)?;
                log::debug!(
                    "line {}: {} / {} = {:.3}µs",
                    line_number,
                    data.row_title(),
                    measurement.column,
                    measurement.value
                );
                aggregate.push(&current, data.row_title(), measurement);
                stats.measurements += 1;
            }
            LineKind::Unrecognized => {
                log::info!("?  {}", line);
                stats.skipped += 1;
            }
        }
    }

    Ok(ParsedReport { aggregate, stats })
}

/// Read a report file fully into memory and parse it.
///
/// Invalid UTF-8 is replaced rather than rejected; such lines simply fail
/// to match.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedReport> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| TsvconvError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_report(&String::from_utf8_lossy(&bytes))
}
