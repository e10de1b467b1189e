//! Line-ending translation (LF → LF CR)
//!
//! Some terminals' printer pass-through expects a carriage return after every
//! line feed. The transcoder rewrites one chunk at a time with a single linear
//! scan. It carries no state between chunks: the rewrite is a per-byte
//! substitution, so a line feed on a chunk boundary needs no special care.

use crate::constants::{CARRIAGE_RETURN, LINE_FEED};

/// Number of bytes `chunk` occupies once translated.
pub fn expanded_len(chunk: &[u8]) -> usize {
    chunk.len() + chunk.iter().filter(|&&b| b == LINE_FEED).count()
}

/// Appends the translated form of `chunk` to `out`.
pub fn translate_into(chunk: &[u8], out: &mut Vec<u8>) {
    out.reserve(expanded_len(chunk));
    let mut start = 0;
    for (idx, &byte) in chunk.iter().enumerate() {
        if byte == LINE_FEED {
            out.extend_from_slice(&chunk[start..=idx]);
            out.push(CARRIAGE_RETURN);
            start = idx + 1;
        }
    }
    out.extend_from_slice(&chunk[start..]);
}

/// Bounded line-ending transcoder.
///
/// Owns an output buffer of `capacity` bytes that is reused for every chunk.
/// Callers must feed at most `capacity / 2` bytes at a time; see
/// [`LineEndingTranscoder::max_input`].
#[derive(Debug, Clone)]
pub struct LineEndingTranscoder {
    capacity: usize,
    out: Vec<u8>,
}

impl LineEndingTranscoder {
    /// Creates a transcoder whose output never exceeds `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            out: Vec::with_capacity(capacity),
        }
    }

    /// Output capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest chunk that is guaranteed to fit once expanded.
    pub fn max_input(&self) -> usize {
        self.capacity / 2
    }

    /// Translates `chunk` and returns exactly the translated bytes.
    ///
    /// # Panics
    ///
    /// Panics if the expanded chunk would exceed the capacity. The copier
    /// reads at most [`max_input`](Self::max_input) bytes per pull, so this
    /// cannot happen through the public copy path.
    pub fn transcode(&mut self, chunk: &[u8]) -> &[u8] {
        let needed = expanded_len(chunk);
        assert!(
            needed <= self.capacity,
            "translated chunk of {needed} bytes overflows {}-byte buffer",
            self.capacity
        );

        self.out.clear();
        translate_into(chunk, &mut self.out);
        debug_assert_eq!(self.out.len(), needed);
        &self.out
    }
}
