//! Bloom Filter Module
//!
//! Space-efficient probabilistic set membership over string keys. Queries
//! answer "possibly inserted" or "certainly not inserted": false positives
//! happen at a bounded rate, false negatives never. There is no removal.
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Header (26 bytes)                                        │
//! │   Magic: "PTBF" (4) | Version: u16 (2)                   │
//! │   Capacity: u64 (8) | HashCount: u32 (4)                 │
//! │   BitCount: u64 (8)                                      │
//! ├──────────────────────────────────────────────────────────┤
//! │ Bit Array (variable)                                     │
//! │   ceil(BitCount / 64) × u64 words                        │
//! ├──────────────────────────────────────────────────────────┤
//! │ Footer (4 bytes)                                         │
//! │   CRC32 over header + bit array                          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//! All integers are little-endian.

mod bloom;
mod codec;

pub use bloom::BloomFilter;

// =============================================================================
// Shared Constants (used by bloom and codec)
// =============================================================================

/// Magic bytes identifying a prefixtrail filter file
pub(crate) const MAGIC: &[u8; 4] = b"PTBF";

/// Current filter format version
pub(crate) const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + Capacity (8) + HashCount (4) + BitCount (8) = 26 bytes
pub(crate) const HEADER_SIZE: usize = 26;

/// Footer size: CRC32 (4)
pub(crate) const FOOTER_SIZE: usize = 4;

/// Target false-positive rate the sizing math is tuned to
pub(crate) const TARGET_FPP: f64 = 0.03;

/// Default expected insertions when none is given
pub(crate) const DEFAULT_CAPACITY: usize = 1_000_000;
