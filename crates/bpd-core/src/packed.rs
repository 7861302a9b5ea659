//! Bit-packed 32-bit reference fields.
//!
//! # Layouts
//!
//! Both encodings read the four bytes of the raw integer in **big-endian**
//! order:
//!
//! ```text
//! PackedIndexLength  [ start_index: u16 ][ length: u16 ]
//! PackedLinkRef      [ link_id: i8 ][ reserved: u8 ][ target_index: u16 ]
//! ```
//!
//! Snapshots carry the raw signed integers exactly as the engine stores them;
//! decoding happens on demand and is infallible.

use std::ops::Range;

use serde::{Deserialize, Serialize};

// ── Raw decoders ──────────────────────────────────────────────────────────────

/// Split `raw` into `(start_index, length)`.
#[inline]
pub fn decode_index_length(raw: i32) -> (u16, u16) {
    let [a, b, c, d] = raw.to_be_bytes();
    (u16::from_be_bytes([a, b]), u16::from_be_bytes([c, d]))
}

/// Split `raw` into `(link_id, target_index)`, discarding the reserved byte.
///
/// The first byte is two's-complement: `0xFF` decodes to `-1`.
#[inline]
pub fn decode_link_ref(raw: i32) -> (i8, u16) {
    let [id, _reserved, c, d] = raw.to_be_bytes();
    (i8::from_be_bytes([id]), u16::from_be_bytes([c, d]))
}

// ── PackedIndexLength ─────────────────────────────────────────────────────────

/// A contiguous run `[start, start + len)` into one of a sequence's
/// consolidated tables.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedIndexLength(pub i32);

impl PackedIndexLength {
    /// Pack `start` and `len` into the raw representation.
    pub fn new(start: u16, len: u16) -> Self {
        Self(((u32::from(start) << 16) | u32::from(len)) as i32)
    }

    #[inline]
    pub fn start(self) -> u16 {
        decode_index_length(self.0).0
    }

    #[inline]
    pub fn len(self) -> u16 {
        decode_index_length(self.0).1
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The referenced index range.  Never overflows: both halves are `u16`.
    #[inline]
    pub fn range(self) -> Range<usize> {
        let (start, len) = decode_index_length(self.0);
        let start = usize::from(start);
        start..start + usize::from(len)
    }
}

// ── PackedLinkRef ─────────────────────────────────────────────────────────────

/// "This output slot connects, via link `link_id`, to behavior `target`."
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedLinkRef(pub i32);

impl PackedLinkRef {
    /// Pack a link id and target slot.  The reserved byte is written as zero.
    pub fn new(link_id: i8, target: u16) -> Self {
        let [id] = link_id.to_be_bytes();
        let [hi, lo] = target.to_be_bytes();
        Self(i32::from_be_bytes([id, 0, hi, lo]))
    }

    #[inline]
    pub fn link_id(self) -> i8 {
        decode_link_ref(self.0).0
    }

    #[inline]
    pub fn target(self) -> u16 {
        decode_link_ref(self.0).1
    }
}
