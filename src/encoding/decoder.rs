use std::fmt;

use tracing::debug;

use crate::config::CodecConfig;
use crate::encoding::error::CodecError;
use crate::utils::limits::{DEFAULT_MAX_STRING_LEN, MAX_VARINT32_LEN};
use crate::utils::varint;

/// Reads values back from a byte slice in the order they were appended.
///
/// A failed read leaves the position where that read started, so the
/// caller can inspect the offending bytes. Reading on after a failure is
/// not meaningful.
#[derive(Clone)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
    max_string_len: u32,
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }

    pub fn with_config(buf: &'a [u8], config: &CodecConfig) -> Self {
        Self {
            buf,
            pos: 0,
            max_string_len: config.max_string_len,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True once every byte has been consumed
    pub fn done(&self) -> bool {
        self.pos == self.buf.len()
    }

    pub fn read_uint32(&mut self) -> Result<u32, CodecError> {
        let (value, len) = varint::decode_u32(self.rest()).map_err(|e| self.failed("uint32", e))?;
        self.pos += len;
        Ok(value)
    }

    pub fn read_int32(&mut self) -> Result<i32, CodecError> {
        let (value, len) = varint::decode_i32(self.rest()).map_err(|e| self.failed("int32", e))?;
        self.pos += len;
        Ok(value)
    }

    /// Read a length prefix and that many bytes of UTF-8 text
    pub fn read_prefixed_string(&mut self) -> Result<&'a str, CodecError> {
        let start = self.pos;
        let result = self.read_prefixed_string_inner();
        if result.is_err() {
            self.pos = start;
        }
        result
    }

    fn read_prefixed_string_inner(&mut self) -> Result<&'a str, CodecError> {
        let len = self.read_uint32()?;
        if len > self.max_string_len {
            return Err(self.failed("string", CodecError::OutOfRange));
        }
        let bytes = self.take(len as usize).map_err(|e| self.failed("string", e))?;
        std::str::from_utf8(bytes).map_err(|_| self.failed("string", CodecError::InvalidUtf8))
    }

    /// Borrow the next `len` bytes verbatim
    pub fn read_raw_bytes(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        self.take(len).map_err(|e| self.failed("raw bytes", e))
    }

    /// Fail if any bytes are left unread
    pub fn finish(&self) -> Result<(), CodecError> {
        if self.done() {
            Ok(())
        } else {
            Err(self.failed("end of buffer", CodecError::TrailingBytes))
        }
    }

    fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < len {
            return Err(CodecError::Truncated);
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn failed(&self, what: &'static str, err: CodecError) -> CodecError {
        let next = &self.rest()[..self.remaining().min(MAX_VARINT32_LEN)];
        debug!(
            position = self.pos,
            remaining = self.remaining(),
            next = %hex::encode(next),
            error = %err,
            "failed to read {}", what
        );
        err
    }
}

impl fmt::Debug for Decoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("position", &self.pos)
            .field("len", &self.buf.len())
            .field("rest", &hex::encode(self.rest()))
            .finish()
    }
}
