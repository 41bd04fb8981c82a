use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Position in the input where a fatal condition was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

impl fmt::Display for IoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} (byte {})", self.line_num, self.byte_pos)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("line looked like a header line but does not start with \"@\"")]
    MissingHeader,
    #[error("input looks gzip-compressed; decompress it first, e.g. `gunzip -c reads.fq.gz | readsfq`")]
    CompressedInput,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid buffer size: \"{0}\"")]
    InvalidBufferSize(String),
}

#[derive(Debug, Error)]
pub enum CountError {
    #[error("I/O error at {ctx}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("format error at {ctx}: {source}")]
    Format {
        #[source]
        source: FormatError,
        ctx: IoContext,
    },
    #[error("cannot read \"{}\": {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CountError {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: IoContext) -> Self {
        Self::Format { source, ctx }
    }

    /// The format error behind this failure, if it was caused by malformed input.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Format { source, .. } => Some(source),
            _ => None,
        }
    }
}
