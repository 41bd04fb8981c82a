//! Count the reads in a FASTQ file.
//!
//! - Sequence and quality blocks may wrap over any number of lines.
//! - Streaming, one bounded line buffer (no full-file buffering).
//! - Blank lines before a header are skipped; any other non-`@` line where a
//!   header is expected is a fatal error.
//! - Sequence/quality length mismatches are logged as warnings and never
//!   change the count.
//! - Plain text only: pipe compressed input through `gunzip -c`.

pub mod count;
pub mod counter;
pub mod error;
pub mod options;
pub mod reader;
mod util;

pub use crate::count::{count_bufread, count_path, count_reads};
pub use crate::counter::{Phase, ReadCounter, Summary, Warning, WarningTally};
pub use crate::error::{ConfigError, CountError, FormatError, IoContext};
pub use crate::options::{CountOptions, DEFAULT_BUFFER_SIZE, parse_buffer_size};
pub use crate::reader::{LineReader, Source};
