use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use crate::core::errors::{Result, SignetError};
use crate::core::traits::archive::CommentReader;

/// Reads the ZIP end-of-central-directory comment out of a payload
/// that starts partway into a file (after the signed header).
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipCommentReader;

impl ZipCommentReader {
    pub fn new() -> Self {
        Self
    }
}

impl CommentReader for ZipCommentReader {
    fn read_comment(&self, path: &Path, offset: u64) -> Result<String> {
        let file = File::open(path).map_err(|_| SignetError::FileNotFound {
            path: path.to_path_buf(),
        })?;
        let view = OffsetView::new(file, offset)?;
        let archive = zip::ZipArchive::new(view).map_err(|e| SignetError::PayloadUnreadable {
            detail: format!("payload is not a readable zip archive: {e}"),
        })?;

        let comment = std::str::from_utf8(archive.comment()).map_err(|_| {
            SignetError::PayloadUnreadable {
                detail: "zip comment is not valid UTF-8".into(),
            }
        })?;
        Ok(comment.to_string())
    }
}

/// A `Read + Seek` view of the tail of a file, starting at `base`.
///
/// Position 0 of the view is byte `base` of the underlying file, and
/// seeking before it is an error. The zip reader can then treat the
/// payload as a complete archive in its own right.
struct OffsetView<R> {
    inner: R,
    base: u64,
}

impl<R: Seek> OffsetView<R> {
    fn new(mut inner: R, base: u64) -> Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        if len < base {
            return Err(SignetError::PayloadUnreadable {
                detail: format!("file is shorter ({len} bytes) than the payload offset {base}"),
            });
        }
        inner.seek(SeekFrom::Start(base))?;
        Ok(Self { inner, base })
    }
}

impl<R: Read> Read for OffsetView<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Seek> Seek for OffsetView<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let absolute = match pos {
            SeekFrom::Start(n) => self.inner.seek(SeekFrom::Start(self.base + n))?,
            SeekFrom::End(n) => self.inner.seek(SeekFrom::End(n))?,
            SeekFrom::Current(n) => self.inner.seek(SeekFrom::Current(n))?,
        };
        absolute.checked_sub(self.base).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek before the start of the payload",
            )
        })
    }
}
