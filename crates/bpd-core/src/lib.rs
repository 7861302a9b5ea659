//! `bpd-core`: foundational types for the behavior-provider grapher.
//!
//! This crate is a dependency of every other `bpd-*` crate.  It has no
//! `bpd-*` dependencies and only `thiserror`, `serde`, and `serde_json`
//! externally.
//!
//! # What lives here
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`ids`]      | `SequenceIdx`, `SlotIdx`                                      |
//! | [`packed`]   | `PackedIndexLength`, `PackedLinkRef`, raw decode functions    |
//! | [`number`]   | `round_scale`, `round_digits`, `format_float`                 |
//! | [`kind`]     | `BehaviorKind`, `VariableLinkType`, `VariableType`            |
//! | [`snapshot`] | `BehaviorProviderDefinition`, `BehaviorSequence`, records     |
//! | [`loader`]   | JSON snapshot loading                                         |
//! | [`error`]    | `CoreError`, `CoreResult`                                     |

pub mod error;
pub mod ids;
pub mod kind;
pub mod loader;
pub mod number;
pub mod packed;
pub mod snapshot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{SequenceIdx, SlotIdx};
pub use kind::{BehaviorKind, TimerOperation, VariableLinkType, VariableType};
pub use loader::{
    load_definition_path, load_definition_reader, load_definitions_path, load_definitions_reader,
    load_snapshot_path, load_snapshot_reader,
};
pub use number::{format_float, round_digits, round_scale};
pub use packed::{decode_index_length, decode_link_ref, PackedIndexLength, PackedLinkRef};
pub use snapshot::{
    BehaviorNode, BehaviorProviderDefinition, BehaviorSequence, EventNode, OutputLinkRecord,
    VariableDefinition, VariableLinkRecord,
};
