use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{value_parser, Arg, Command};
use miette::IntoDiagnostic;
use station_stats::{aggregate, render, Options, Source, CHUNK_SIZE, DELIMITER};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,station_stats=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("station-stats")
        .about("Min/mean/max temperature per station")
        .after_help("Timing and line counts are logged to stderr, RUST_LOG overrides the level")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .default_value("measurements.txt")
                .value_parser(value_parser!(PathBuf))
                .help("Measurement file, one `<station>;<value>` per line"),
        )
        .arg(
            Arg::new("chunk-size")
                .long("chunk-size")
                .value_parser(value_parser!(u64).range(1..))
                .help("Lines buffered before being folded [default: 5000]"),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .value_parser(value_parser!(char))
                .help("Separator between station and value [default: ;]"),
        )
        .get_matches();

    let path = matches
        .get_one::<PathBuf>("path")
        .cloned()
        .ok_or_else(|| miette::miette!("missing input path"))?;
    let options = Options {
        chunk_size: matches
            .get_one::<u64>("chunk-size")
            .map_or(CHUNK_SIZE, |&n| n as usize),
        delimiter: matches
            .get_one::<char>("delimiter")
            .copied()
            .unwrap_or(DELIMITER),
    };

    let source = Source::open(&path)?;
    let (stations, elapsed) = timeit(|| aggregate(source.as_bytes(), &options));
    let stations = stations?;
    info!(?elapsed, path = %path.display(), "file read");

    let report = render(&stations.finish());
    write_report(&report)
}

fn timeit<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

fn write_report(report: &str) -> miette::Result<()> {
    writeln!(std::io::stdout().lock(), "{report}").into_diagnostic()
}
