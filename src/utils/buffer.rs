use tracing::trace;

/// Growable append-only byte buffer
///
/// Only the written bytes are ever visible; spare capacity stays hidden.
#[derive(Debug, Default, Clone)]
pub struct ByteBuffer {
    buf: Vec<u8>,
}

impl ByteBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn extend(&mut self, data: &[u8]) {
        self.reserve(data.len());
        self.buf.extend_from_slice(data);
    }

    /// Reserve `max_len` bytes, then let `write` append into the backing vector
    pub fn write_with<F>(&mut self, max_len: usize, write: F)
    where
        F: FnOnce(&mut Vec<u8>),
    {
        self.reserve(max_len);
        write(&mut self.buf);
    }

    pub fn reserve(&mut self, additional: usize) {
        let old_capacity = self.buf.capacity();
        if self.buf.len() + additional <= old_capacity {
            return;
        }
        // Vec::reserve grows at least geometrically.
        self.buf.reserve(additional);
        trace!(
            old_capacity,
            new_capacity = self.buf.capacity(),
            "byte buffer grown"
        );
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
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
}
