use crate::error::{CountError, FormatError, IoContext};

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Peek at the first two bytes and rewind.
pub fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.stream_position()?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == GZIP_MAGIC)
}

/// Open a plain-text input file. Failures name the path; gzip input is refused.
pub fn open_file(path: &Path) -> Result<File, CountError> {
    let open_err = |source| CountError::Open {
        path: path.to_path_buf(),
        source,
    };
    let f = File::open(path).map_err(open_err)?;

    match looks_like_gzip(&f) {
        Ok(false) => Ok(f),
        Ok(true) => Err(CountError::fmt_err(
            FormatError::CompressedInput,
            IoContext {
                byte_pos: 0,
                line_num: 0,
            },
        )),
        // pipes and FIFOs cannot be rewound; read them unsniffed
        Err(e) if e.kind() == io::ErrorKind::NotSeekable => Ok(f),
        Err(e) => Err(open_err(e)),
    }
}
