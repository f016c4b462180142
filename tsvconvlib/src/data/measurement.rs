//! A single benchmark measurement and its error bounds.
//!
//! All values are normalized to microseconds so that columns coming from
//! different benchmark scales line up in the spreadsheet.

/// Column title used when a benchmark name has no `/` sub-benchmark part.
pub const DEFAULT_COLUMN: &str = "default";

/// Time unit prefix as printed in front of the `s` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// `µs`
    Micros,
    /// `ms`
    Millis,
    /// `ns`
    Nanos,
}

impl TimeUnit {
    /// Map the unit prefix (`µ`, `m`, `n`) to a unit.
    ///
    /// Both the micro sign (U+00B5) and the Greek mu (U+03BC) mean micro.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "µ" | "μ" => Some(TimeUnit::Micros),
            "m" => Some(TimeUnit::Millis),
            "n" => Some(TimeUnit::Nanos),
            _ => None,
        }
    }

    /// Convert a value expressed in this unit to microseconds.
    pub fn to_micros(self, value: f64) -> f64 {
        match self {
            TimeUnit::Micros => value,
            TimeUnit::Millis => value * 1000.0,
            TimeUnit::Nanos => value / 1000.0,
        }
    }
}

/// Split a full benchmark name into `(row title, column title)`.
///
/// Everything before the first `/` names the row; the rest names the column.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.split_once('/') {
        Some((row, column)) => (row, column),
        None => (name, DEFAULT_COLUMN),
    }
}

/// One parsed data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Column title (sub-benchmark or `default`)
    pub column: String,
    /// Value in microseconds
    pub value: f64,
    /// `value * (1 + err/100)`
    pub above: f64,
    /// `value * (1 - err/100)`
    pub below: f64,
    /// The report line this was parsed from
    pub original: String,
}

impl Measurement {
    /// Build a measurement from a microsecond value and an error percentage.
    pub fn new(
        column: impl Into<String>,
        value: f64,
        error_percent: f64,
        original: impl Into<String>,
    ) -> Self {
        let delta = error_percent / 100.0;
        Self {
            column: column.into(),
            value,
            above: value * (1.0 + delta),
            below: value * (1.0 - delta),
            original: original.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_unit_prefixes() {
        assert_eq!(TimeUnit::from_prefix("µ"), Some(TimeUnit::Micros));
        assert_eq!(TimeUnit::from_prefix("μ"), Some(TimeUnit::Micros));
        assert_eq!(TimeUnit::from_prefix("m"), Some(TimeUnit::Millis));
        assert_eq!(TimeUnit::from_prefix("n"), Some(TimeUnit::Nanos));
        assert_eq!(TimeUnit::from_prefix("s"), None);
    }

    #[test]
    fn test_to_micros() {
        assert!(close(TimeUnit::Micros.to_micros(123.45), 123.45));
        assert!(close(TimeUnit::Millis.to_micros(2.0), 2000.0));
        assert!(close(TimeUnit::Nanos.to_micros(500.0), 0.5));
    }

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("BenchmarkAdd"), ("BenchmarkAdd", "default"));
        assert_eq!(
            split_name("BenchmarkAdd/size=10"),
            ("BenchmarkAdd", "size=10")
        );
        // Only the first slash splits
        assert_eq!(split_name("BenchmarkMap/a/b"), ("BenchmarkMap", "a/b"));
    }

    #[test]
    fn test_bounds() {
        let m = Measurement::new("default", 123.45, 5.0, "line");
        assert!(close(m.value, 123.45));
        assert!(close(m.above, 129.6225));
        assert!(close(m.below, 117.2775));
    }

    #[test]
    fn test_zero_error_collapses_bounds() {
        let m = Measurement::new("x", 10.0, 0.0, "");
        assert_eq!(m.above, m.value);
        assert_eq!(m.below, m.value);
    }
}
