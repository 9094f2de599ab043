use std::fmt;

use tracing::debug;

use crate::config::CodecConfig;
use crate::encoding::checked::CheckedInt;
use crate::encoding::error::CodecError;
use crate::utils::buffer::ByteBuffer;
use crate::utils::limits::{DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_STRING_LEN, MAX_VARINT32_LEN};
use crate::utils::varint;

/// Appends LEB128 integers and prefixed strings to a growable buffer.
///
/// Every append either writes its whole encoding or returns an error
/// without touching the buffer.
#[derive(Clone)]
pub struct Encoder {
    buf: ByteBuffer,
    max_string_len: u32,
}

impl Encoder {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: ByteBuffer::new(capacity),
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }

    pub fn with_config(config: &CodecConfig) -> Self {
        Self {
            buf: ByteBuffer::new(config.initial_capacity),
            max_string_len: config.max_string_len,
        }
    }

    pub fn append_uint32(&mut self, value: u32) -> &mut Self {
        self.buf
            .write_with(MAX_VARINT32_LEN, |out| varint::encode_u32(value, out));
        self
    }

    pub fn append_int32(&mut self, value: i32) -> &mut Self {
        self.buf
            .write_with(MAX_VARINT32_LEN, |out| varint::encode_i32(value, out));
        self
    }

    /// Convert `value` to `u32` and append it; nothing is written on failure
    pub fn append_uint32_checked<N: CheckedInt>(&mut self, value: N) -> Result<&mut Self, CodecError> {
        let value = value.to_u32_checked().map_err(|e| {
            debug!(error = %e, "rejected value for uint32 append");
            e
        })?;
        Ok(self.append_uint32(value))
    }

    /// Convert `value` to `i32` and append it; nothing is written on failure
    pub fn append_int32_checked<N: CheckedInt>(&mut self, value: N) -> Result<&mut Self, CodecError> {
        let value = value.to_i32_checked().map_err(|e| {
            debug!(error = %e, "rejected value for int32 append");
            e
        })?;
        Ok(self.append_int32(value))
    }

    /// Append the UTF-8 byte length of `text` followed by its bytes
    pub fn append_prefixed_string(&mut self, text: &str) -> Result<&mut Self, CodecError> {
        let len = u32::try_from(text.len())
            .ok()
            .filter(|&len| len <= self.max_string_len)
            .ok_or_else(|| {
                debug!(
                    len = text.len(),
                    max = self.max_string_len,
                    "string too long for prefixed encoding"
                );
                CodecError::OutOfRange
            })?;

        self.buf.reserve(varint::encoded_len_u32(len) + text.len());
        self.append_uint32(len);
        self.buf.extend(text.as_bytes());
        Ok(self)
    }

    /// Append `data` verbatim, with no length prefix
    pub fn append_raw_bytes(&mut self, data: &[u8]) -> &mut Self {
        self.buf.extend(data);
        self
    }

    /// Bytes written so far
    pub fn buffer(&self) -> &[u8] {
        self.buf.as_slice()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.into_vec()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Forget all written bytes, keeping the allocation for reuse
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("len", &self.len())
            .field("bytes", &hex::encode(self.buffer()))
            .finish()
    }
}

impl AsRef<[u8]> for Encoder {
    fn as_ref(&self) -> &[u8] {
        self.buffer()
    }
}
