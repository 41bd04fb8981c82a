use clap::Parser;
use readsfq::{CountOptions, LineReader, count_path, count_reads, parse_buffer_size};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Count the number of reads in a FASTQ file
#[derive(Parser, Debug)]
#[command(name = "readsfq", version)]
#[command(about = "Count the number of reads in a FASTQ file")]
#[command(
    long_about = "Count the number of reads in a FASTQ file, giving an accurate count\neven for files with multi-line reads.",
    after_help = "Examples:\n  readsfq reads.fq\n  gunzip -c reads.fq.gz | readsfq"
)]
struct Args {
    /// Input FASTQ file (omit or use '-' for stdin)
    input: Option<PathBuf>,

    /// File reading buffer size, in bytes [default: 65535].
    /// WARNING: lines longer than this end up truncated
    #[arg(
        short = 'B',
        long = "buffer-size",
        value_name = "BUFFER_SIZE",
        value_parser = parse_buffer_size
    )]
    buffer_size: Option<CountOptions>,

    /// Verbosity: 1=error, 2=warning, 3=info, 4=debug, 5+=trace
    #[arg(short = 'v', long, default_value_t = 2)]
    verbosity: u8,
}

fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        v if v <= 1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => "Error",
                log::Level::Warn => "Warning",
                log::Level::Info => "Info",
                log::Level::Debug => "Debug",
                log::Level::Trace => "Trace",
            };
            writeln!(buf, "{}: {}", level, record.args())
        })
        .init();
}

/// Fatal errors bypass the logger so no filter can hide them.
fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    process::exit(1);
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbosity);

    let opts = args.buffer_size.unwrap_or_default();
    let result = match args.input.as_deref() {
        Some(path) if path != Path::new("-") => count_path(path, &opts),
        _ => count_reads(&mut LineReader::stdin(&opts)),
    };
    let summary = result.unwrap_or_else(|e| fail(e));

    let mut out = io::stdout().lock();
    if let Err(e) = writeln!(out, "{}", summary.reads).and_then(|_| out.flush()) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            process::exit(0);
        }
        fail(e);
    }
}
