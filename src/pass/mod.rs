//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

use std::io::{self, Write};

use zeroize::Zeroize;

pub use charset::{CharClass, ClassSet};
pub use generate::{GenerationRequest, generate};
pub use output::generate_batch;

const SECURE_BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that zeroizes its staging buffer on every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(SECURE_BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > SECURE_BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= SECURE_BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_writer_passes_bytes_through() {
        let mut sink = Vec::new();
        {
            let mut w = SecureBufWriter::new(&mut sink);
            w.write_all(b"abc\n").unwrap();
            w.write_all(&vec![b'x'; SECURE_BUF_CAPACITY + 3]).unwrap();
            w.write_all(b"def\n").unwrap();
        }
        assert_eq!(sink.len(), 4 + SECURE_BUF_CAPACITY + 3 + 4);
        assert!(sink.starts_with(b"abc\nxxx"));
        assert!(sink.ends_with(b"xdef\n"));
    }
}
