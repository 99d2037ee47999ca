//! PCM16 mono sample decoding.
//!
//! Each frame is one signed 16-bit little-endian integer. A trailing odd
//! byte is not a sample and is ignored.

use tracing::debug;

/// Fallback buffer size when the source length is unknown.
/// 30 MiB holds roughly six minutes of 44.1 kHz 16-bit mono audio.
pub const UNKNOWN_LENGTH_CAPACITY: usize = 30 * 1024 * 1024;

/// Largest buffer a single source may allocate.
pub const MAX_CAPACITY: usize = i32::MAX as usize;

/// Decode little-endian PCM16 bytes into amplitudes.
pub fn decode(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Decode only the first `valid_len` bytes of `buffer`.
///
/// Extractors write into buffers sized for the whole file, so the allocated
/// length usually exceeds the data actually read. `valid_len` is clamped to
/// the buffer.
pub fn decode_valid(buffer: &[u8], valid_len: usize) -> Vec<i16> {
    decode(&buffer[..valid_len.min(buffer.len())])
}

/// A pre-allocated byte buffer filled incrementally by an extractor.
#[derive(Debug, Clone, Default)]
pub struct PcmBuffer {
    data: Vec<u8>,
}

impl PcmBuffer {
    /// Create a buffer sized for a source of `source_len` bytes.
    ///
    /// `None` means the length is unknown and falls back to
    /// [`UNKNOWN_LENGTH_CAPACITY`]. Sizes above [`MAX_CAPACITY`] are clamped.
    pub fn for_source(source_len: Option<u64>) -> Self {
        let capacity = match source_len {
            Some(len) => usize::try_from(len).unwrap_or(MAX_CAPACITY).min(MAX_CAPACITY),
            None => UNKNOWN_LENGTH_CAPACITY,
        };
        Self::with_capacity(capacity)
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Append a chunk read from the source; the valid length grows with it.
    pub fn append(&mut self, chunk: &[u8]) {
        self.data.extend_from_slice(chunk);
    }

    /// Number of valid bytes written so far.
    pub fn valid_len(&self) -> usize {
        self.data.len()
    }

    /// Allocated capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Decode the valid bytes into amplitudes.
    pub fn decode(&self) -> Vec<i16> {
        let samples = decode(&self.data);
        debug!(
            bytes = self.data.len(),
            samples = samples.len(),
            "Decoded PCM16 buffer"
        );
        samples
    }
}
