//! The directed-graph model handed to renderers.
//!
//! Node identity is the triple `(sequence, slot, kind)`, so the same logical
//! node always maps to the same [`GraphNodeId`] within a build and an event
//! and a behavior sharing a slot number never collide.

use std::fmt;

use serde::Serialize;

use bpd_core::{SequenceIdx, SlotIdx};

#[cfg(feature = "fx-hash")]
type IdIndex = rustc_hash::FxHashMap<GraphNodeId, usize>;
#[cfg(not(feature = "fx-hash"))]
type IdIndex = std::collections::HashMap<GraphNodeId, usize>;

// ── Identity ──────────────────────────────────────────────────────────────────

/// Which node array a slot index refers to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Event,
    Behavior,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize)]
pub struct GraphNodeId {
    pub sequence: SequenceIdx,
    pub slot:     SlotIdx,
    pub kind:     SlotKind,
}

impl GraphNodeId {
    pub fn event(sequence: SequenceIdx, slot: SlotIdx) -> Self {
        Self { sequence, slot, kind: SlotKind::Event }
    }

    pub fn behavior(sequence: SequenceIdx, slot: SlotIdx) -> Self {
        Self { sequence, slot, kind: SlotKind::Behavior }
    }
}

impl fmt::Display for GraphNodeId {
    /// `e<seq>_<slot>` for events, `b<seq>_<slot>` for behaviors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            SlotKind::Event    => 'e',
            SlotKind::Behavior => 'b',
        };
        write!(f, "{prefix}{}_{}", self.sequence, self.slot)
    }
}

// ── Nodes and edges ───────────────────────────────────────────────────────────

/// Presentation class of a node.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeStyle {
    /// Sequence entry point.
    EventTrigger,
    /// One of the six custom/remote event dispatchers.
    RemoteDispatch,
    /// Every other behavior.
    Processing,
}

impl NodeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeStyle::EventTrigger   => "event-trigger",
            NodeStyle::RemoteDispatch => "remote-dispatch",
            NodeStyle::Processing     => "processing",
        }
    }
}

impl fmt::Display for NodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphNode {
    pub id:    GraphNodeId,
    pub label: String,
    pub style: NodeStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphEdge {
    pub source: GraphNodeId,
    pub target: GraphNodeId,
    pub label:  String,
}

// ── GraphModel ────────────────────────────────────────────────────────────────

/// Nodes and edges of one definition, in build order.
///
/// Every edge connects two nodes present in the model.  Built fresh per
/// definition; see [`GraphBuilder`](crate::GraphBuilder).
#[derive(Clone, Debug, Default, Serialize)]
pub struct GraphModel {
    /// Caption: the definition's path.
    pub title: String,
    nodes:     Vec<GraphNode>,
    edges:     Vec<GraphEdge>,
    #[serde(skip)]
    index:     IdIndex,
}

impl GraphModel {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Default::default() }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Access ────────────────────────────────────────────────────────────

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node(&self, id: GraphNodeId) -> Option<&GraphNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: GraphNodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Edges leaving `id`, in build order.
    pub fn out_edges(&self, id: GraphNodeId) -> impl Iterator<Item = &GraphEdge> + '_ {
        self.edges.iter().filter(move |e| e.source == id)
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Insert `node`.  Returns `false` (and changes nothing) if a node with
    /// the same id is already present.
    pub fn add_node(&mut self, node: GraphNode) -> bool {
        if self.index.contains_key(&node.id) {
            return false;
        }
        self.index.insert(node.id, self.nodes.len());
        self.nodes.push(node);
        true
    }

    /// Insert `edge`.  Returns `false` (and changes nothing) if either
    /// endpoint is missing from the model.
    pub fn add_edge(&mut self, edge: GraphEdge) -> bool {
        if !self.contains(edge.source) || !self.contains(edge.target) {
            return false;
        }
        self.edges.push(edge);
        true
    }
}
