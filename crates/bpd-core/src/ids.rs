//! Typed position indices.
//!
//! A behavior sequence is addressed by its position in the definition and a
//! node or event by its slot in the sequence.  Both are plain arena indices:
//! nothing in a snapshot holds a pointer to anything else.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generate a typed index wrapper around a primitive integer.
macro_rules! typed_idx {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(idx: $name) -> usize {
                idx.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_idx! {
    /// Position of a behavior sequence inside its provider definition.
    pub struct SequenceIdx(u32);
}

typed_idx! {
    /// Position of a node or event inside its behavior sequence.
    ///
    /// Output links address behavior slots with a `u16`, so every reachable
    /// slot fits; the wider type only matters for enumerating long arrays.
    pub struct SlotIdx(u32);
}

impl From<u16> for SlotIdx {
    #[inline(always)]
    fn from(n: u16) -> SlotIdx {
        SlotIdx(u32::from(n))
    }
}
