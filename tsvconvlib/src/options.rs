//! Options controlling how aggregated benchmarks are laid out.

use std::str::FromStr;

/// Order in which packages and rows are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ordering {
    /// First-seen order in the input report
    #[default]
    Input,
    /// Lexicographic by package title, then by row title
    Sorted,
}

impl FromStr for Ordering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "input" | "none" => Ok(Ordering::Input),
            "sorted" | "sort" | "name" => Ok(Ordering::Sorted),
            _ => Err(format!("Unknown ordering: {}", s)),
        }
    }
}

/// Rendering configuration for the TSV tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Drop the `+err`/`-err` columns
    pub omit_err: bool,
    /// Package and row ordering
    pub ordering: Ordering,
}

impl RenderOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: omit the error bound columns.
    pub fn omit_err(mut self, omit: bool) -> Self {
        self.omit_err = omit;
        self
    }

    /// Builder: set the ordering.
    pub fn ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Number of fields emitted per measurement.
    pub fn fields_per_column(&self) -> usize {
        if self.omit_err {
            1
        } else {
            3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_errors_in_input_order() {
        let opts = RenderOptions::new();
        assert!(!opts.omit_err);
        assert_eq!(opts.ordering, Ordering::Input);
        assert_eq!(opts.fields_per_column(), 3);
    }

    #[test]
    fn test_builder() {
        let opts = RenderOptions::new()
            .omit_err(true)
            .ordering(Ordering::Sorted);
        assert!(opts.omit_err);
        assert_eq!(opts.ordering, Ordering::Sorted);
        assert_eq!(opts.fields_per_column(), 1);
    }

    #[test]
    fn test_ordering_from_str() {
        assert_eq!("input".parse::<Ordering>().unwrap(), Ordering::Input);
        assert_eq!("Sorted".parse::<Ordering>().unwrap(), Ordering::Sorted);
        assert!("random".parse::<Ordering>().is_err());
    }
}
