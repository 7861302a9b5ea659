//! Definition → [`GraphModel`] construction.

use bpd_core::{BehaviorProviderDefinition, BehaviorSequence, SequenceIdx, SlotIdx};
use bpd_resolve::{behavior_label, describe_output_links, event_label, ResolveResult};

use crate::{ErrorPolicy, GraphConfig, GraphEdge, GraphError, GraphModel, GraphNode, GraphNodeId, GraphResult, NodeStyle};

/// Build the graph of `def` with the default [`GraphConfig`].
pub fn build_graph(def: &BehaviorProviderDefinition) -> GraphResult<GraphModel> {
    GraphBuilder::default().build(def)
}

/// Builds one [`GraphModel`] per definition.
///
/// The builder holds only configuration; it can be shared across threads and
/// reused for any number of definitions.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

/// Nodes and edges of one sequence, held back until the whole sequence
/// resolved.
struct StagedSequence {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl GraphBuilder {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Build the graph of every sequence in `def`, in array order.
    ///
    /// Under [`ErrorPolicy::AbortDefinition`] the first unresolvable index
    /// fails the whole build.  Under [`ErrorPolicy::SkipSequence`] the
    /// failing sequence is left out and the build always succeeds.
    pub fn build(&self, def: &BehaviorProviderDefinition) -> GraphResult<GraphModel> {
        let mut graph = GraphModel::new(def.path.as_str());

        for (i, seq) in def.sequences.iter().enumerate() {
            let seq_idx = SequenceIdx(i as u32);
            match build_sequence(seq, seq_idx) {
                Ok(staged) => {
                    tracing::debug!(
                        definition = %def.path,
                        sequence = %seq.name,
                        nodes = staged.nodes.len(),
                        edges = staged.edges.len(),
                        "built sequence"
                    );
                    commit(&mut graph, staged);
                }
                Err(source) => {
                    let err = GraphError::Resolve {
                        definition:    def.path.clone(),
                        sequence:      seq_idx,
                        sequence_name: seq.name.clone(),
                        source,
                    };
                    match self.config.on_error {
                        ErrorPolicy::AbortDefinition => {
                            tracing::error!(error = %err, "aborting graph build");
                            return Err(err);
                        }
                        ErrorPolicy::SkipSequence => {
                            tracing::warn!(error = %err, "skipping sequence");
                        }
                    }
                }
            }
        }

        tracing::debug!(
            definition = %def.path,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built graph"
        );
        Ok(graph)
    }
}

// ── Per-sequence build ────────────────────────────────────────────────────────

fn build_sequence(seq: &BehaviorSequence, seq_idx: SequenceIdx) -> ResolveResult<StagedSequence> {
    let mut nodes = Vec::with_capacity(seq.events.len() + seq.nodes.len());
    let mut edges = Vec::new();

    // ① Event nodes.
    for (i, event) in seq.events.iter().enumerate() {
        let slot = SlotIdx(i as u32);
        nodes.push(GraphNode {
            id:    GraphNodeId::event(seq_idx, slot),
            label: event_label(seq, seq_idx, slot, event)?,
            style: NodeStyle::EventTrigger,
        });
    }

    // ② Connected behavior nodes.
    for (i, node) in seq.nodes.iter().enumerate() {
        let Some(node) = node else { continue };
        let slot = SlotIdx(i as u32);
        let style = if node.kind.is_remote_event() {
            NodeStyle::RemoteDispatch
        } else {
            NodeStyle::Processing
        };
        nodes.push(GraphNode {
            id:    GraphNodeId::behavior(seq_idx, slot),
            label: behavior_label(seq, seq_idx, slot, node)?,
            style,
        });
    }

    // ③ Edges out of events.
    for (i, event) in seq.events.iter().enumerate() {
        let source = GraphNodeId::event(seq_idx, SlotIdx(i as u32));
        for link in describe_output_links(seq, None, event.output_links)? {
            edges.push(GraphEdge {
                source,
                target: GraphNodeId::behavior(seq_idx, link.target),
                label:  link.label(),
            });
        }
    }

    // ④ Edges out of behaviors.
    for (i, node) in seq.nodes.iter().enumerate() {
        let Some(node) = node else { continue };
        let source = GraphNodeId::behavior(seq_idx, SlotIdx(i as u32));
        for link in describe_output_links(seq, Some(&node.kind), node.output_links)? {
            edges.push(GraphEdge {
                source,
                target: GraphNodeId::behavior(seq_idx, link.target),
                label:  link.label(),
            });
        }
    }

    Ok(StagedSequence { nodes, edges })
}

fn commit(graph: &mut GraphModel, staged: StagedSequence) {
    for node in staged.nodes {
        let added = graph.add_node(node);
        debug_assert!(added, "node ids are unique per (sequence, slot, kind)");
    }
    for edge in staged.edges {
        let added = graph.add_edge(edge);
        debug_assert!(added, "link targets are connected slots of the same sequence");
    }
}
