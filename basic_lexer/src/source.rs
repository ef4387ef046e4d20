use std::io::{self, Read};

/// Producer of raw input bytes.
///
/// `has_bytes_available` may be optimistic: a source that cannot know in
/// advance whether more input exists reports `true` until a read comes back
/// empty.
pub trait ByteSource {
    fn has_bytes_available(&self) -> bool;

    /// Reads up to `buf.len()` bytes, returning how many were written.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    fn close(&mut self) {}
}

impl ByteSource for &[u8] {
    fn has_bytes_available(&self) -> bool {
        !self.is_empty()
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }

    fn close(&mut self) {
        *self = &[];
    }
}

/// Adapts any [`Read`] into a [`ByteSource`].
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: Option<R>,
    drained: bool,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: Some(inner),
            drained: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn has_bytes_available(&self) -> bool {
        self.inner.is_some() && !self.drained
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(inner) = self.inner.as_mut() else {
            return Ok(0);
        };

        loop {
            match inner.read(buf) {
                Ok(0) if !buf.is_empty() => {
                    self.drained = true;
                    return Ok(0);
                }
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn close(&mut self) {
        self.inner = None;
    }
}
