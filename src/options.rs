use crate::error::ConfigError;

/// Default line buffer size in bytes. Longer lines are split at this boundary.
pub const DEFAULT_BUFFER_SIZE: usize = 65535;

/// Settings for one counting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountOptions {
    max_line_len: usize,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl CountOptions {
    /// `max_line_len` must be non-zero.
    pub fn with_buffer_size(max_line_len: usize) -> Result<Self, ConfigError> {
        if max_line_len == 0 {
            return Err(ConfigError::InvalidBufferSize(max_line_len.to_string()));
        }
        Ok(Self { max_line_len })
    }

    /// Maximum bytes read into the line buffer at once, terminator included.
    /// Content past this point is handed to the counter as the next line.
    #[inline]
    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }
}

/// Parse a `-B` argument: 1 to 10 ASCII digits forming a valid buffer size.
pub fn parse_buffer_size(arg: &str) -> Result<CountOptions, ConfigError> {
    let invalid = || ConfigError::InvalidBufferSize(arg.to_string());
    if arg.is_empty() || arg.len() > 10 || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let size = arg.parse::<usize>().map_err(|_| invalid())?;
    CountOptions::with_buffer_size(size).map_err(|_| invalid())
}
