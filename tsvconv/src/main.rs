//! # tsvconv
//!
//! Convert the output of benchstat to tab separated values.
//!
//! ## Overview
//!
//! tsvconv is built on top of tsvconvlib. It reads one report file, groups
//! the measurements by package and benchmark, and prints one TSV block per
//! package on stdout. Unrecognized lines are reported on stderr.
//!
//! ## Usage
//!
//! ```bash
//! # Value, +err and -err for every sub-benchmark
//! tsvconv bench.txt
//!
//! # Values only
//! tsvconv -omiterr bench.txt
//!
//! # Stable ordering, JSON instead of TSV
//! tsvconv --sort --output json bench.txt
//!
//! # Show every parsed measurement
//! RUST_LOG=debug tsvconv bench.txt
//! ```

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use tsvconvlib::{parse_file, Ordering, RenderOptions, TsvReport};

/// Boolean flags that also accept the Go spellings `-omiterr` and
/// `-omiterr=<bool>`.
const GO_BOOL_FLAGS: &[&str] = &["omiterr"];

/// Output format for the converted report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum OutputFormat {
    #[default]
    Tsv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" | "text" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tsvconv")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Convert benchstat output to tab separated values")
        .arg(
            Arg::new("input")
                .help("benchstat report to convert")
                .required(true),
        )
        .arg(
            Arg::new("omiterr")
                .long("omiterr")
                .action(ArgAction::SetTrue)
                .help("Omit the +err/-err columns (also -omiterr, -omiterr=<bool>)"),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .value_parser(|s: &str| s.parse::<Ordering>())
                .default_value("input")
                .help("Package and benchmark order: input or sorted"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .action(ArgAction::SetTrue)
                .help("Shorthand for --order sorted"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(|s: &str| s.parse::<OutputFormat>())
                .default_value("tsv")
                .help("Output format: tsv or json"),
        )
}

/// Boolean syntax accepted by Go's `strconv.ParseBool`.
fn parse_go_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Rewrite one Go-style boolean flag.
///
/// Returns `None` when the argument is not one of ours, `Some(None)` when it
/// should be dropped (`=false`), and `Some(Some(flag))` for the clap form.
fn rewrite_go_flag(arg: &str) -> Option<Option<String>> {
    let name = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    let (flag, value) = match name.split_once('=') {
        Some((flag, value)) => (flag, Some(value)),
        None => (name, None),
    };
    if !GO_BOOL_FLAGS.contains(&flag) {
        return None;
    }
    match value {
        None => Some(Some(format!("--{}", flag))),
        Some(value) => {
            if parse_go_bool(value)? {
                Some(Some(format!("--{}", flag)))
            } else {
                Some(None)
            }
        }
    }
}

/// Rewrite `-omiterr` and `-omiterr=<bool>` so clap recognizes them.
///
/// An unparseable boolean is passed through and rejected by clap.
fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen_separator = false;
    args.into_iter()
        .filter_map(|arg| {
            if seen_separator {
                return Some(arg);
            }
            if arg == "--" {
                seen_separator = true;
                return Some(arg);
            }
            match rewrite_go_flag(&arg) {
                Some(rewritten) => rewritten,
                None => Some(arg),
            }
        })
        .collect()
}

/// Build render options from matches
fn render_options(matches: &ArgMatches) -> RenderOptions {
    let ordering = if matches.get_flag("sort") {
        Ordering::Sorted
    } else {
        matches
            .get_one::<Ordering>("order")
            .copied()
            .unwrap_or_default()
    };
    RenderOptions::new()
        .omit_err(matches.get_flag("omiterr"))
        .ordering(ordering)
}

fn output_format(matches: &ArgMatches) -> OutputFormat {
    matches
        .get_one::<OutputFormat>("output")
        .copied()
        .unwrap_or_default()
}

/// Diagnostics go to stderr as bare messages; `RUST_LOG` overrides the level.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("no input file given")?;
    let options = render_options(matches);
    let format = output_format(matches);

    let parsed = parse_file(input)?;
    log::debug!(
        "{}: {} lines, {} packages, {} measurements, {} skipped",
        input,
        parsed.stats.lines,
        parsed.aggregate.len(),
        parsed.stats.measurements,
        parsed.stats.skipped
    );

    let report = TsvReport::from_aggregate(&parsed.aggregate, &options);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match format {
        OutputFormat::Tsv => report.write_tsv(&mut out)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
    }
    out.flush().context("failed to write output")?;

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches_from(normalize_args(std::env::args()));
    init_logger();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold().for_stderr(), e);
            ExitCode::FAILURE
        }
    }
}
