//! MD5 hashing utilities for package integrity

use std::io::{self, Write};

use md5::{Digest, Md5};

/// Compare two hex digests, ignoring case
pub fn verify_hash(expected: &str, actual: &str) -> bool {
    expected.eq_ignore_ascii_case(actual)
}

/// Writer that forwards bytes to an inner writer while hashing and counting them
pub struct HashingWriter<W> {
    inner: W,
    hasher: Md5,
    written: u64,
}

impl<W: Write> HashingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Md5::new(),
            written: 0,
        }
    }

    /// Bytes written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Consume the writer, returning the inner writer and the hex digest
    pub fn finish(self) -> (W, String) {
        (self.inner, hex::encode(self.hasher.finalize()))
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
