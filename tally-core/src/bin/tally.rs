//! Word-frequency report for a text file.
//!
//! Reads a UTF-8 file, analyzes it, writes `word_frequencies.csv` and
//! `word_frequencies_chart.json` into the output directory, and prints a
//! summary of the most frequent words.
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/tally notes.txt
//! ./target/release/tally notes.txt --output reports --config tally.toml
//! ```
//!
//! The output directory defaults to `$OUTPUT_FOLDER`, then `output`.
//! Logging goes to stderr and is controlled by `TALLY_LOG`.
//!
//! ## Example Output
//!
//! ```text
//! File        : notes.txt (12.40 KiB)
//! Elapsed     : 0.004 s
//!
//! Analysis Summary:
//! Total words: 1873
//! ...
//! ```

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use tally_core::config::load_config;
use tally_core::logging::init_tracing;
use tally_core::sink::{persist, FileSink};
use tally_core::{AnalyzerConfig, WordFrequencyAnalyzer};
use tracing::info;

const USAGE: &str = "Usage: tally <text_file> [--config <path>] [--output <dir>]";
const SUMMARY_ROWS: usize = 10;

struct Args {
    input: PathBuf,
    config: Option<PathBuf>,
    output: PathBuf,
}

fn main() {
    init_tracing();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}\n{USAGE}");
            process::exit(1);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn parse_args<I: Iterator<Item = String>>(mut raw: I) -> Result<Args, String> {
    let mut input = None;
    let mut config = None;
    let mut output = None;

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--config" => {
                config = Some(raw.next().ok_or("--config needs a path")?.into());
            }
            "--output" => {
                output = Some(raw.next().ok_or("--output needs a directory")?.into());
            }
            "-h" | "--help" => return Err(String::from("tally: word-frequency report")),
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            _ if input.is_none() => input = Some(PathBuf::from(&arg)),
            _ => return Err(format!("unexpected argument {arg}")),
        }
    }

    let output = output
        .or_else(|| env::var_os("OUTPUT_FOLDER").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("output"));

    Ok(Args {
        input: input.ok_or("missing <text_file>")?,
        config,
        output,
    })
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AnalyzerConfig::default(),
    };

    let text = fs::read_to_string(&args.input)
        .map_err(|e| format!("cannot read {}: {e}", args.input.display()))?;

    let analyzer = WordFrequencyAnalyzer::with_config(config);

    let start = Instant::now();
    let report = analyzer.try_analyze(&text)?;
    let elapsed = start.elapsed();

    let mut sink = FileSink::new(&args.output).with_chart_top_n(config.chart_top_n);
    persist(&report, &mut sink)?;
    info!(dir = %args.output.display(), "wrote results");

    println!("File        : {} ({})", args.input.display(), fmt_bytes(text.len() as u64));
    println!("Elapsed     : {:.3} s", elapsed.as_secs_f64());
    println!("Table       : {}", sink.table_path().display());
    println!("Chart       : {}\n", sink.chart_path().display());
    println!("{}", report.summary(SUMMARY_ROWS));

    Ok(())
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}
