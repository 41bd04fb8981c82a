use crate::counter::{ReadCounter, Summary};
use crate::error::CountError;
use crate::options::CountOptions;
use crate::reader::LineReader;

use std::io::BufRead;
use std::path::Path;

/// Run one full pass over `reader`.
pub fn count_reads(reader: &mut LineReader) -> Result<Summary, CountError> {
    log::debug!(
        "counting reads from {:?} (line buffer {} bytes)",
        reader.source(),
        reader.max_line_len()
    );

    let mut counter = ReadCounter::new();
    let mut line = Vec::with_capacity(reader.max_line_len().min(1024));
    loop {
        let n = reader
            .read_line(&mut line)
            .map_err(|e| CountError::io_err(e, reader.ctx()))?;
        if n == 0 {
            break;
        }
        counter
            .process_line(&line)
            .map_err(|e| CountError::fmt_err(e, reader.ctx()))?;
    }

    let summary = counter.finish(reader.ctx().byte_pos);
    log::info!(
        "{} reads in {} lines ({} bytes), {} warnings",
        summary.reads,
        summary.lines,
        summary.bytes,
        summary.warnings.total()
    );
    Ok(summary)
}

pub fn count_path<P: AsRef<Path>>(path: P, opts: &CountOptions) -> Result<Summary, CountError> {
    let mut reader = LineReader::from_path(path, opts)?;
    count_reads(&mut reader)
}

pub fn count_bufread<R: BufRead + Send + 'static>(
    reader: R,
    opts: &CountOptions,
) -> Result<Summary, CountError> {
    let mut reader = LineReader::from_bufread(reader, opts);
    count_reads(&mut reader)
}
