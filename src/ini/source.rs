//! Line sources: where the parser pulls raw input lines from.
//!
//! [`LineSource`] abstracts over the storage medium. Three providers cover
//! the standard cases:
//!
//! 1. [`ReadSource`] - any buffered reader (open file, socket, pipe)
//! 2. [`BufferSource`] - an in-memory byte region with a read cursor
//! 3. [`FnSource`] - a caller-supplied closure for custom media
//!
//! All providers behave identically from the parse driver's perspective:
//! each call appends at most one line (including its trailing newline when
//! the medium provides one) and signals end of input by appending nothing.

use std::io::BufRead;

use super::types::error::Result;

/// Supplies the next raw line of text from some medium.
pub trait LineSource {
    /// Appends at most `limit` bytes to `buf`, stopping immediately after
    /// a `\n` byte. Returns the number of bytes appended; `0` means end
    /// of input.
    ///
    /// A return equal to `limit` with no trailing newline means the
    /// physical line continues beyond what was requested; the parse
    /// driver calls again to grow or discard the remainder. No line
    /// splitting happens beyond what the medium naturally provides.
    fn read_line(&mut self, buf: &mut Vec<u8>, limit: usize) -> Result<usize>;
}

/// Line source over any [`BufRead`] stream.
///
/// The caller retains ownership of the underlying reader; the parser
/// never closes it. Wrap an unbuffered reader in
/// [`std::io::BufReader`] first.
#[derive(Debug)]
pub struct ReadSource<R: BufRead> {
    inner: R,
}

impl<R: BufRead> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineSource for ReadSource<R> {
    fn read_line(&mut self, buf: &mut Vec<u8>, limit: usize) -> Result<usize> {
        let mut appended = 0;
        while appended < limit {
            let chunk = self.inner.fill_buf()?;
            if chunk.is_empty() {
                break;
            }
            let take = chunk.len().min(limit - appended);
            match chunk[..take].iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    buf.extend_from_slice(&chunk[..=pos]);
                    self.inner.consume(pos + 1);
                    appended += pos + 1;
                    break;
                }
                None => {
                    buf.extend_from_slice(&chunk[..take]);
                    self.inner.consume(take);
                    appended += take;
                }
            }
        }
        Ok(appended)
    }
}

/// Line source over an in-memory byte region.
///
/// Tracks a read cursor and the remaining byte count, so the region does
/// not need a terminator of any kind.
#[derive(Debug, Clone)]
pub struct BufferSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BufferSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl LineSource for BufferSource<'_> {
    fn read_line(&mut self, buf: &mut Vec<u8>, limit: usize) -> Result<usize> {
        let remaining = &self.data[self.pos..];
        if remaining.is_empty() {
            return Ok(0);
        }
        let take = match remaining[..remaining.len().min(limit)]
            .iter()
            .position(|&b| b == b'\n')
        {
            Some(pos) => pos + 1,
            None => remaining.len().min(limit),
        };
        buf.extend_from_slice(&remaining[..take]);
        self.pos += take;
        Ok(take)
    }
}

/// Line source delegating to a caller-supplied closure with the same
/// contract as [`LineSource::read_line`].
///
/// Useful for media the other providers do not cover, e.g. decrypting or
/// decompressing transports that produce text incrementally.
pub struct FnSource<F>(F);

impl<F> FnSource<F>
where
    F: FnMut(&mut Vec<u8>, usize) -> Result<usize>,
{
    pub fn new(read: F) -> Self {
        Self(read)
    }
}

impl<F> LineSource for FnSource<F>
where
    F: FnMut(&mut Vec<u8>, usize) -> Result<usize>,
{
    fn read_line(&mut self, buf: &mut Vec<u8>, limit: usize) -> Result<usize> {
        (self.0)(buf, limit)
    }
}
