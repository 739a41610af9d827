//! Filter serialization
//!
//! Encodes a filter to the binary format described in the module docs and
//! decodes it back, validating structure and checksum.

use crate::error::{Result, TrailError};

use super::bloom::BloomFilter;
use super::{FOOTER_SIZE, HEADER_SIZE, MAGIC, VERSION};

impl BloomFilter {
    /// Serialize to the binary format
    ///
    /// The encoding is deterministic: the same filter state always produces
    /// the same bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_SIZE + self.words.len() * 8 + FOOTER_SIZE);

        buf.extend_from_slice(MAGIC);
        buf.extend_from_slice(&VERSION.to_le_bytes());
        buf.extend_from_slice(&self.capacity.to_le_bytes());
        buf.extend_from_slice(&self.hash_count.to_le_bytes());
        buf.extend_from_slice(&self.bit_count.to_le_bytes());

        for word in &self.words {
            buf.extend_from_slice(&word.to_le_bytes());
        }

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&buf);
        buf.extend_from_slice(&hasher.finalize().to_le_bytes());

        buf
    }

    /// Deserialize from the binary format
    ///
    /// Fails with [`TrailError::Format`] if the stream is truncated, carries
    /// the wrong magic or an unknown version, disagrees with its own length
    /// fields, or fails the checksum.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE + FOOTER_SIZE {
            return Err(TrailError::Format(format!(
                "truncated filter: {} bytes, need at least {}",
                bytes.len(),
                HEADER_SIZE + FOOTER_SIZE
            )));
        }

        if &bytes[0..4] != MAGIC {
            return Err(TrailError::Format(format!(
                "invalid filter magic: expected PTBF, got {:?}",
                &bytes[0..4]
            )));
        }

        let version = u16::from_le_bytes(bytes[4..6].try_into().unwrap());
        if version != VERSION {
            return Err(TrailError::Format(format!(
                "unsupported filter version: {}",
                version
            )));
        }

        let capacity = u64::from_le_bytes(bytes[6..14].try_into().unwrap());
        let hash_count = u32::from_le_bytes(bytes[14..18].try_into().unwrap());
        let bit_count = u64::from_le_bytes(bytes[18..26].try_into().unwrap());

        if hash_count == 0 || bit_count == 0 {
            return Err(TrailError::Format(format!(
                "degenerate filter parameters: hash_count={}, bit_count={}",
                hash_count, bit_count
            )));
        }

        // Length fields are untrusted until the stream size confirms them
        let word_count = bit_count.div_ceil(64);
        let expected_len = HEADER_SIZE as u64 + word_count * 8 + FOOTER_SIZE as u64;
        if bytes.len() as u64 != expected_len {
            return Err(TrailError::Format(format!(
                "filter length mismatch: {} bytes, expected {} for {} bits",
                bytes.len(),
                expected_len,
                bit_count
            )));
        }

        let body = &bytes[..bytes.len() - FOOTER_SIZE];
        let stored_crc =
            u32::from_le_bytes(bytes[bytes.len() - FOOTER_SIZE..].try_into().unwrap());

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(body);
        let computed_crc = hasher.finalize();

        if stored_crc != computed_crc {
            return Err(TrailError::Format(format!(
                "filter checksum mismatch: stored {:#010x}, computed {:#010x}",
                stored_crc, computed_crc
            )));
        }

        let mut words = Vec::with_capacity(word_count as usize);
        for chunk in body[HEADER_SIZE..].chunks_exact(8) {
            words.push(u64::from_le_bytes(chunk.try_into().unwrap()));
        }

        Ok(Self {
            capacity,
            hash_count,
            bit_count,
            words,
        })
    }
}
