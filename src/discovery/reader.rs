use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use flate2::read::MultiGzDecoder;

use crate::error::{AppError, AppResult, DiscoveryError};

use super::select::{Compression, SelectedFile};

/// Lazily yields the lines of a log, one at a time, without line endings.
///
/// Bytes that are not valid UTF-8 are replaced rather than reported, so a
/// damaged line ends up as a parse failure instead of aborting the read.
pub struct LogLines {
    reader: Box<dyn BufRead>,
    buf: Vec<u8>,
}

impl LogLines {
    /// Wraps any byte source, decompressing it first when `compression` says so.
    #[must_use]
    pub fn from_reader<R>(reader: R, compression: Compression) -> Self
    where
        R: Read + 'static,
    {
        let reader: Box<dyn BufRead> = match compression {
            Compression::Plain => Box::new(BufReader::new(reader)),
            Compression::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(reader))),
        };
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl Iterator for LogLines {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

/// Opens the selected log for streaming.
///
/// # Errors
///
/// Returns [`DiscoveryError::OpenLog`] when the file cannot be opened.
pub fn open_log(file: &SelectedFile) -> AppResult<LogLines> {
    let handle = File::open(&file.path).map_err(|err| {
        AppError::discovery(DiscoveryError::OpenLog {
            path: file.path.clone(),
            source: err,
        })
    })?;
    Ok(LogLines::from_reader(handle, file.compression))
}
