use crate::error::{CountError, IoContext};
use crate::options::CountOptions;
use crate::util::open_file;

use memchr::memchr2;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

const READ_CAPACITY: usize = 256 * 1024;

#[derive(Debug)]
pub enum Source {
    Path(PathBuf),
    Stdin,
    Reader,
}

/// Reads physical lines into a reusable buffer, never more than
/// `max_line_len` bytes at a time.
pub struct LineReader {
    src: Source,
    rdr: Box<dyn BufRead + Send>,
    max_line_len: usize,
    line_num: u64,
    byte_pos: u64,
}

impl LineReader {
    /// Open a plain FASTQ file. Gzip input is detected by its magic bytes and refused.
    pub fn from_path<P: AsRef<Path>>(path: P, opts: &CountOptions) -> Result<Self, CountError> {
        let path = path.as_ref();
        let f = open_file(path)?;

        Ok(Self::with_source(
            Source::Path(path.to_path_buf()),
            Box::new(BufReader::with_capacity(READ_CAPACITY, f)),
            opts,
        ))
    }

    pub fn stdin(opts: &CountOptions) -> Self {
        Self::with_source(
            Source::Stdin,
            Box::new(BufReader::with_capacity(READ_CAPACITY, io::stdin())),
            opts,
        )
    }

    /// Wrap an arbitrary `BufRead`.
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R, opts: &CountOptions) -> Self {
        Self::with_source(Source::Reader, Box::new(reader), opts)
    }

    fn with_source(src: Source, rdr: Box<dyn BufRead + Send>, opts: &CountOptions) -> Self {
        Self {
            src,
            rdr,
            max_line_len: opts.max_line_len(),
            line_num: 0,
            byte_pos: 0,
        }
    }

    #[inline]
    pub fn source(&self) -> &Source {
        &self.src
    }

    #[inline]
    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }

    /// Read the next line into `buf`, terminator included. Returns the number
    /// of bytes read, 0 at end of input.
    ///
    /// A line ends after `\n`, after `\r` (taking a directly following `\n`
    /// with it), or once `max_line_len` bytes are buffered. In the last case
    /// the remainder of the physical line is returned by the next call.
    pub fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        buf.clear();
        let mut after_cr = false;
        loop {
            let (used, done) = {
                let available = match self.rdr.fill_buf() {
                    Ok(b) => b,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if available.is_empty() {
                    break;
                }
                if after_cr {
                    let lf = available[0] == b'\n';
                    if lf {
                        buf.push(b'\n');
                    }
                    (usize::from(lf), true)
                } else {
                    let room = self.max_line_len - buf.len();
                    let window = &available[..available.len().min(room)];
                    match memchr2(b'\n', b'\r', window) {
                        Some(i) => {
                            buf.extend_from_slice(&window[..=i]);
                            after_cr = window[i] == b'\r';
                            (i + 1, !after_cr)
                        }
                        None => {
                            buf.extend_from_slice(window);
                            (window.len(), buf.len() >= self.max_line_len)
                        }
                    }
                }
            };
            self.rdr.consume(used);
            if done {
                break;
            }
        }

        let n = buf.len();
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
        }
        Ok(n)
    }

    #[inline]
    pub fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}
