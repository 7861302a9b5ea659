//! Read-only snapshot of one behavior-provider definition.
//!
//! # Data layout
//!
//! Each [`BehaviorSequence`] stores its nodes in two arrays (`nodes`,
//! `events`) and everything they reference in four flat "consolidated"
//! tables.  A node never owns its links; it holds [`PackedIndexLength`]
//! ranges into the tables:
//!
//! ```text
//! node.output_links      → output_link_table[start .. start+len]
//!                            └ link.target    → nodes[target]
//! node.linked_variables  → variable_link_table[start .. start+len]
//!                            └ record.linked_variables
//!                                → linked_variable_indices[start .. start+len]
//!                                    └ variable_definitions[i]
//! ```
//!
//! Disconnected behavior slots are `None` in `nodes`; the slot index is kept
//! so that link targets stay valid.

use serde::{Deserialize, Serialize};

use crate::kind::{BehaviorKind, VariableLinkType, VariableType};
use crate::packed::{PackedIndexLength, PackedLinkRef};

/// Top-level record: every behavior sequence of one logical unit.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BehaviorProviderDefinition {
    /// Full object path, used as the graph caption and in error reports.
    pub path:      String,
    #[serde(default)]
    pub sequences: Vec<BehaviorSequence>,
}

/// One named scope of nodes, events, and consolidated tables.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSequence {
    pub name:                    String,
    pub nodes:                   Vec<Option<BehaviorNode>>,
    pub events:                  Vec<EventNode>,
    pub variable_link_table:     Vec<VariableLinkRecord>,
    /// Indices into `variable_definitions`.  Signed as stored by the engine;
    /// a negative entry can never resolve.
    pub linked_variable_indices: Vec<i32>,
    pub variable_definitions:    Vec<VariableDefinition>,
    pub output_link_table:       Vec<OutputLinkRecord>,
}

/// A processing node in a sequence.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BehaviorNode {
    /// Object name shown in the node label.
    pub name:             String,
    #[serde(default)]
    pub kind:             BehaviorKind,
    #[serde(default)]
    pub output_links:     PackedIndexLength,
    #[serde(default)]
    pub linked_variables: PackedIndexLength,
}

/// An entry point into a sequence.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventNode {
    pub name:             String,
    #[serde(default)]
    pub output_links:     PackedIndexLength,
    /// The event's output-variable reference.
    #[serde(default)]
    pub linked_variables: PackedIndexLength,
}

/// Association between a node property and one or more sequence variables.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VariableLinkRecord {
    #[serde(default)]
    pub link_type:        VariableLinkType,
    pub property_name:    String,
    #[serde(default)]
    pub connection_index: i32,
    #[serde(default)]
    pub linked_variables: PackedIndexLength,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VariableDefinition {
    pub name:     String,
    #[serde(default, rename = "type")]
    pub var_type: VariableType,
}

/// One control-flow link out of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputLinkRecord {
    pub link:           PackedLinkRef,
    /// Activation delay in seconds.
    #[serde(default)]
    pub activate_delay: f32,
}

impl BehaviorSequence {
    /// The behavior at `slot`, or `None` if the slot is out of range or
    /// disconnected.
    pub fn node(&self, slot: usize) -> Option<&BehaviorNode> {
        self.nodes.get(slot).and_then(Option::as_ref)
    }

    /// Number of connected (non-`None`) behavior slots.
    pub fn live_node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }
}
