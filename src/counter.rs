//! The read counting state machine.
//!
//! FASTQ records have no fixed line count: sequence and quality may each wrap
//! over any number of lines. The end of a quality block is found by summing
//! quality characters until they cover the sequence length counted before the
//! `+` separator.

use crate::error::FormatError;
use std::fmt;

const HEADER_MARKER: u8 = b'@';
const PLUS_MARKER: u8 = b'+';

/// Expected role of the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHeader,
    InSequence,
    AfterPlusMarker,
    InQuality,
}

/// Non-fatal length mismatches between sequence and quality data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// A line starting with `@` showed up while more quality data was expected.
    ShortQuality,
    /// The quality block ended up longer than the sequence.
    ExcessQuality,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortQuality => f.write_str(
                "looking for more quality scores but the line starts with \"@\"; \
                 this might be a header line and there were fewer quality scores than bases",
            ),
            Self::ExcessQuality => f.write_str("counted more quality scores than bases"),
        }
    }
}

/// Warnings seen so far, by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarningTally {
    pub short_quality: u64,
    pub excess_quality: u64,
}

impl WarningTally {
    #[inline]
    pub fn total(&self) -> u64 {
        self.short_quality + self.excess_quality
    }

    fn record(&mut self, warning: Warning) {
        match warning {
            Warning::ShortQuality => self.short_quality += 1,
            Warning::ExcessQuality => self.excess_quality += 1,
        }
    }
}

/// Result of a finished pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub reads: u64,
    pub lines: u64,
    pub bytes: u64,
    pub warnings: WarningTally,
    /// False when the input stopped in the middle of a record.
    pub complete: bool,
}

/// Running state for one input source. Not restartable: use a fresh
/// instance per input.
#[derive(Debug, Clone)]
pub struct ReadCounter {
    phase: Phase,
    read_count: u64,
    sequence_length: u64,
    quality_length: u64,
    line_num: u64,
    warnings: WarningTally,
}

impl Default for ReadCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadCounter {
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingHeader,
            read_count: 0,
            sequence_length: 0,
            quality_length: 0,
            line_num: 0,
            warnings: WarningTally::default(),
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn read_count(&self) -> u64 {
        self.read_count
    }

    #[inline]
    pub fn sequence_length(&self) -> u64 {
        self.sequence_length
    }

    #[inline]
    pub fn quality_length(&self) -> u64 {
        self.quality_length
    }

    /// Lines handed to `process_line` so far.
    #[inline]
    pub fn line_num(&self) -> u64 {
        self.line_num
    }

    #[inline]
    pub fn warnings(&self) -> WarningTally {
        self.warnings
    }

    /// Feed the next line, terminator included or not.
    pub fn process_line(&mut self, line: &[u8]) -> Result<(), FormatError> {
        self.line_num += 1;
        let first = line.first().copied();

        match self.phase {
            Phase::AwaitingHeader => {
                // blank lines before a header are allowed
                if is_blank(line) {
                    return Ok(());
                }
                if first != Some(HEADER_MARKER) {
                    return Err(FormatError::MissingHeader);
                }
                self.read_count += 1;
                self.sequence_length = 0;
                self.phase = Phase::InSequence;
            }
            Phase::InSequence => {
                if first == Some(PLUS_MARKER) {
                    self.quality_length = 0;
                    self.phase = Phase::AfterPlusMarker;
                } else {
                    self.sequence_length += content_len(line) as u64;
                }
            }
            Phase::AfterPlusMarker | Phase::InQuality => {
                if self.phase == Phase::InQuality && first == Some(HEADER_MARKER) {
                    self.warn(Warning::ShortQuality);
                }
                self.phase = Phase::InQuality;
                self.quality_length += content_len(line) as u64;
                if self.quality_length >= self.sequence_length {
                    self.phase = Phase::AwaitingHeader;
                    if self.quality_length > self.sequence_length {
                        self.warn(Warning::ExcessQuality);
                    }
                }
            }
        }
        Ok(())
    }

    /// Close the pass. A trailing incomplete record stays counted.
    pub fn finish(self, bytes: u64) -> Summary {
        let complete = self.phase == Phase::AwaitingHeader;
        if !complete {
            log::debug!(
                "input ended in phase {:?} (sequence length {}, quality length {}); last read counted as is",
                self.phase,
                self.sequence_length,
                self.quality_length
            );
        }
        Summary {
            reads: self.read_count,
            lines: self.line_num,
            bytes,
            warnings: self.warnings,
            complete,
        }
    }

    fn warn(&mut self, warning: Warning) {
        log::warn!("line {}: {warning}", self.line_num);
        self.warnings.record(warning);
    }
}

/// Number of content bytes: everything before the first `\n`, `\r` or NUL.
#[inline]
pub fn content_len(line: &[u8]) -> usize {
    line.iter()
        .position(|&b| b == b'\n' || b == b'\r' || b == 0)
        .unwrap_or(line.len())
}

/// True for `""`, `"\n"`, `"\r"` and `"\r\n"` only.
#[inline]
pub fn is_blank(line: &[u8]) -> bool {
    matches!(line, b"" | b"\n" | b"\r" | b"\r\n")
}
