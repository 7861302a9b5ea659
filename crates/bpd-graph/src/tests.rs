//! Integration tests for bpd-graph.

use bpd_core::{
    BehaviorKind, BehaviorNode, BehaviorProviderDefinition, BehaviorSequence, EventNode,
    OutputLinkRecord, PackedIndexLength, PackedLinkRef, SequenceIdx, SlotIdx, VariableDefinition,
    VariableLinkRecord, VariableLinkType, VariableType,
};

use crate::{
    build_graph, build_graphs, ErrorPolicy, GraphBuilder, GraphConfig, GraphError, GraphNodeId,
    NodeStyle,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn behavior(name: &str, kind: BehaviorKind, outputs: PackedIndexLength) -> Option<BehaviorNode> {
    Some(BehaviorNode {
        name: name.to_owned(),
        kind,
        output_links: outputs,
        linked_variables: PackedIndexLength::default(),
    })
}

fn event(name: &str, outputs: PackedIndexLength) -> EventNode {
    EventNode {
        name:             name.to_owned(),
        output_links:     outputs,
        linked_variables: PackedIndexLength::default(),
    }
}

fn link(link_id: i8, target: u16, delay: f32) -> OutputLinkRecord {
    OutputLinkRecord { link: PackedLinkRef::new(link_id, target), activate_delay: delay }
}

fn definition(sequences: Vec<BehaviorSequence>) -> BehaviorProviderDefinition {
    BehaviorProviderDefinition { path: "GD_Test.BPD_0".to_owned(), sequences }
}

/// One event linked to one behavior with the given delay.
fn event_to_behavior(delay: f32) -> BehaviorSequence {
    BehaviorSequence {
        name:              "Main".to_owned(),
        events:            vec![event("OnSpawned", PackedIndexLength::new(0, 1))],
        nodes:             vec![behavior("Behavior_Other_0", BehaviorKind::Other, PackedIndexLength::default())],
        output_link_table: vec![link(0, 0, delay)],
        ..Default::default()
    }
}

/// Event → CompareValues → three targets, one of which is disconnected.
///
/// ```text
/// e0 ──▶ b0 (CompareValues) ──[0]──▶ b1 (RemoteEvent)
///                           ──[1]──▶ b2 (None, dropped)
///                           ──[2]──▶ b3 (Delay)
/// ```
fn branching_sequence() -> BehaviorSequence {
    BehaviorSequence {
        name:   "Branch".to_owned(),
        events: vec![event("OnUsed", PackedIndexLength::new(0, 1))],
        nodes:  vec![
            behavior("Behavior_CompareValues_0", BehaviorKind::CompareValues, PackedIndexLength::new(1, 3)),
            behavior(
                "Behavior_RemoteEvent_1",
                BehaviorKind::RemoteEvent { event_name: "Open".into() },
                PackedIndexLength::default(),
            ),
            None,
            behavior("Behavior_Delay_3", BehaviorKind::Delay { delay: 1.5 }, PackedIndexLength::default()),
        ],
        output_link_table: vec![
            link(0, 0, 0.0),
            link(2, 1, 0.0),
            link(1, 2, 0.0),
            link(4, 3, 0.25),
        ],
        ..Default::default()
    }
}

// ── Build order and identity ──────────────────────────────────────────────────

#[cfg(test)]
mod structure {
    use super::*;

    #[test]
    fn empty_definition_builds_empty_graph() {
        let graph = build_graph(&definition(vec![])).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.title, "GD_Test.BPD_0");
    }

    #[test]
    fn events_then_behaviors_then_edges() {
        let graph = build_graph(&definition(vec![branching_sequence()])).unwrap();
        let s = SequenceIdx(0);

        let ids: Vec<_> = graph.nodes().iter().map(|n| n.id).collect();
        assert_eq!(
            ids,
            [
                GraphNodeId::event(s, SlotIdx(0)),
                GraphNodeId::behavior(s, SlotIdx(0)),
                GraphNodeId::behavior(s, SlotIdx(1)),
                GraphNodeId::behavior(s, SlotIdx(3)),
            ]
        );

        let edges: Vec<_> = graph.edges().iter().map(|e| (e.source, e.target)).collect();
        assert_eq!(
            edges,
            [
                (GraphNodeId::event(s, SlotIdx(0)),    GraphNodeId::behavior(s, SlotIdx(0))),
                (GraphNodeId::behavior(s, SlotIdx(0)), GraphNodeId::behavior(s, SlotIdx(1))),
                (GraphNodeId::behavior(s, SlotIdx(0)), GraphNodeId::behavior(s, SlotIdx(3))),
            ]
        );
    }

    #[test]
    fn absent_slot_has_no_node_and_no_edges() {
        let graph = build_graph(&definition(vec![branching_sequence()])).unwrap();
        let absent = GraphNodeId::behavior(SequenceIdx(0), SlotIdx(2));
        assert!(graph.node(absent).is_none());
        assert!(graph.edges().iter().all(|e| e.source != absent && e.target != absent));
    }

    #[test]
    fn event_and_behavior_with_same_slot_do_not_collide() {
        let graph = build_graph(&definition(vec![event_to_behavior(0.0)])).unwrap();
        let e = GraphNodeId::event(SequenceIdx(0), SlotIdx(0));
        let b = GraphNodeId::behavior(SequenceIdx(0), SlotIdx(0));
        assert_ne!(e, b);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node(e).unwrap().style, NodeStyle::EventTrigger);
        assert_eq!(graph.node(b).unwrap().style, NodeStyle::Processing);
        assert_eq!(e.to_string(), "e0_0");
        assert_eq!(b.to_string(), "b0_0");
    }

    #[test]
    fn sequences_are_numbered_in_array_order() {
        let graph =
            build_graph(&definition(vec![event_to_behavior(0.0), branching_sequence()])).unwrap();
        assert_eq!(graph.node_count(), 6);
        let label = &graph.node(GraphNodeId::event(SequenceIdx(1), SlotIdx(0))).unwrap().label;
        assert_eq!(label, "[1] Branch [0] OnUsed");
        let label = &graph.node(GraphNodeId::behavior(SequenceIdx(1), SlotIdx(3))).unwrap().label;
        assert_eq!(label, "[1][3] Behavior_Delay_3\ndelay 1.5");
    }

    #[test]
    fn out_edges_follow_source() {
        let graph = build_graph(&definition(vec![branching_sequence()])).unwrap();
        let compare = GraphNodeId::behavior(SequenceIdx(0), SlotIdx(0));
        assert_eq!(graph.out_edges(compare).count(), 2);
    }

    #[test]
    fn repeated_builds_are_identical() {
        let def = definition(vec![branching_sequence(), event_to_behavior(2.5)]);
        let a = build_graph(&def).unwrap();
        let b = build_graph(&def).unwrap();
        assert_eq!(a.nodes(), b.nodes());
        assert_eq!(a.edges(), b.edges());
    }
}

// ── Labels and styles ─────────────────────────────────────────────────────────

#[cfg(test)]
mod labels {
    use super::*;

    #[test]
    fn zero_delay_has_no_delay_segment() {
        let graph = build_graph(&definition(vec![event_to_behavior(0.0)])).unwrap();
        let label = &graph.edges()[0].label;
        assert!(!label.contains("d="), "got {label:?}");
        assert_eq!(label, "[0] (0,0)");
    }

    #[test]
    fn nonzero_delay_uses_round_scale() {
        let graph = build_graph(&definition(vec![event_to_behavior(2.5)])).unwrap();
        assert_eq!(graph.edges()[0].label, "[0] (0,0) d=2.5");

        let graph = build_graph(&definition(vec![event_to_behavior(0.25)])).unwrap();
        assert_eq!(graph.edges()[0].label, "[0] (0,0) d=0.2");
    }

    #[test]
    fn compare_values_edges_carry_comparator() {
        let graph = build_graph(&definition(vec![branching_sequence()])).unwrap();
        let labels: Vec<_> = graph.edges().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["[0] (0,0)", "[0] (2,1) ==", "[2] (4,3) d=0.2 >="]);
        assert!(labels[1].ends_with("=="));
    }

    #[test]
    fn event_edges_never_carry_comparator() {
        let mut seq = event_to_behavior(0.0);
        seq.nodes[0] = behavior("Behavior_CompareObject_0", BehaviorKind::CompareObject, PackedIndexLength::default());
        let graph = build_graph(&definition(vec![seq])).unwrap();
        assert_eq!(graph.edges()[0].label, "[0] (0,0)");
    }

    #[test]
    fn remote_events_use_remote_dispatch_style() {
        let graph = build_graph(&definition(vec![branching_sequence()])).unwrap();
        let remote = graph.node(GraphNodeId::behavior(SequenceIdx(0), SlotIdx(1))).unwrap();
        assert_eq!(remote.style, NodeStyle::RemoteDispatch);
        assert_eq!(remote.label, "[0][1] Behavior_RemoteEvent_1\nOpen");

        let compare = graph.node(GraphNodeId::behavior(SequenceIdx(0), SlotIdx(0))).unwrap();
        assert_eq!(compare.style, NodeStyle::Processing);
    }

    #[test]
    fn every_remote_kind_is_remote_dispatch() {
        let kinds = [
            BehaviorKind::CustomEvent { event_name: "A".into() },
            BehaviorKind::SkillCustomEvent { skill: None, event_name: "A".into() },
            BehaviorKind::FireCustomSkillEvent { skill: None, event_name: "A".into() },
            BehaviorKind::RemoteEvent { event_name: "A".into() },
            BehaviorKind::RemoteCustomEvent { provider_path: vec![], event_name: "A".into() },
            BehaviorKind::MissionCustomEvent { mission: None, event_name: "A".into() },
        ];
        let seq = BehaviorSequence {
            name:  "Remote".into(),
            nodes: kinds
                .into_iter()
                .enumerate()
                .map(|(i, k)| behavior(&format!("Behavior_{i}"), k, PackedIndexLength::default()))
                .collect(),
            ..Default::default()
        };
        let graph = build_graph(&definition(vec![seq])).unwrap();
        assert_eq!(graph.node_count(), 6);
        assert!(graph.nodes().iter().all(|n| n.style == NodeStyle::RemoteDispatch));
    }

    #[test]
    fn event_label_uses_output_variables() {
        let mut seq = event_to_behavior(0.0);
        seq.variable_definitions = vec![VariableDefinition { name: "Instigator".into(), var_type: VariableType::Object }];
        seq.linked_variable_indices = vec![0];
        seq.variable_link_table = vec![VariableLinkRecord {
            link_type:        VariableLinkType::Output,
            property_name:    "Instigator".into(),
            connection_index: 1,
            linked_variables: PackedIndexLength::new(0, 1),
        }];
        seq.events[0].linked_variables = PackedIndexLength::new(0, 1);

        let graph = build_graph(&definition(vec![seq])).unwrap();
        assert_eq!(
            graph.nodes()[0].label,
            "[0] Main [0] OnSpawned\nOutput: [0]Instigator(Object) via [0]Instigator (1)"
        );
    }
}

// ── Failure policy ────────────────────────────────────────────────────────────

#[cfg(test)]
mod failures {
    use super::*;
    use bpd_resolve::{ResolveError, Table};

    /// A sequence whose only behavior points past the end of the
    /// variable-link table.
    fn broken_sequence() -> BehaviorSequence {
        let mut seq = event_to_behavior(0.0);
        seq.name = "Broken".into();
        if let Some(node) = seq.nodes[0].as_mut() {
            node.linked_variables = PackedIndexLength::new(0, 1);
        }
        seq
    }

    #[test]
    fn variable_index_out_of_range_aborts_definition() {
        let def = definition(vec![event_to_behavior(0.0), broken_sequence()]);
        let err = build_graph(&def).unwrap_err();
        match err {
            GraphError::Resolve { definition, sequence, sequence_name, source } => {
                assert_eq!(definition, "GD_Test.BPD_0");
                assert_eq!(sequence, SequenceIdx(1));
                assert_eq!(sequence_name, "Broken");
                assert_eq!(source, ResolveError::IndexOutOfRange { table: Table::VariableLinkTable, index: 0 });
            }
        }
    }

    #[test]
    fn error_message_names_definition_and_sequence() {
        let err = build_graph(&definition(vec![broken_sequence()])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "GD_Test.BPD_0: sequence [0] Broken: index 0 is out of range for variable_link_table"
        );
    }

    #[test]
    fn output_link_out_of_range_aborts_definition() {
        let mut seq = event_to_behavior(0.0);
        seq.events[0].output_links = PackedIndexLength::new(0, 2);
        assert!(build_graph(&definition(vec![seq])).is_err());
    }

    #[test]
    fn link_target_out_of_range_aborts_definition() {
        let mut seq = event_to_behavior(0.0);
        seq.output_link_table[0] = link(0, 9, 0.0);
        let err = build_graph(&definition(vec![seq])).unwrap_err();
        let GraphError::Resolve { source, .. } = err;
        assert_eq!(source, ResolveError::IndexOutOfRange { table: Table::BehaviorNodes, index: 9 });
    }

    #[test]
    fn disconnected_target_is_not_an_error() {
        let mut seq = event_to_behavior(0.0);
        seq.nodes.push(None);
        seq.output_link_table[0] = link(0, 1, 0.0);
        let graph = build_graph(&definition(vec![seq])).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn skip_sequence_policy_drops_only_failing_sequence() {
        let builder = GraphBuilder::new(GraphConfig { on_error: ErrorPolicy::SkipSequence });
        let def = definition(vec![event_to_behavior(0.0), broken_sequence(), branching_sequence()]);
        let graph = builder.build(&def).unwrap();

        // Sequence 1 contributed nothing, not even its event node.
        assert!(graph.nodes().iter().all(|n| n.id.sequence != SequenceIdx(1)));
        assert_eq!(graph.node_count(), 2 + 4);
        assert_eq!(graph.edge_count(), 1 + 3);
    }

    #[test]
    fn batch_results_are_independent_and_ordered() {
        let defs = vec![
            definition(vec![event_to_behavior(0.0)]),
            definition(vec![broken_sequence()]),
            definition(vec![branching_sequence()]),
        ];
        let results = build_graphs(&defs, &GraphConfig::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().node_count(), 2);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().node_count(), 4);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn default_policy_aborts() {
        assert_eq!(GraphConfig::default().on_error, ErrorPolicy::AbortDefinition);
        assert_eq!(GraphBuilder::default().config().on_error, ErrorPolicy::AbortDefinition);
    }

    #[test]
    fn deserialize_from_json() {
        let cfg: GraphConfig = serde_json::from_str(r#"{ "on_error": "skip_sequence" }"#).unwrap();
        assert_eq!(cfg.on_error, ErrorPolicy::SkipSequence);

        let cfg: GraphConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.on_error, ErrorPolicy::AbortDefinition);
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod model {
    use crate::{GraphEdge, GraphModel, GraphNode, GraphNodeId, NodeStyle};
    use bpd_core::{SequenceIdx, SlotIdx};

    fn node(slot: u32) -> GraphNode {
        GraphNode {
            id:    GraphNodeId::behavior(SequenceIdx(0), SlotIdx(slot)),
            label: format!("n{slot}"),
            style: NodeStyle::Processing,
        }
    }

    #[test]
    fn duplicate_node_is_rejected() {
        let mut g = GraphModel::new("t");
        assert!(g.add_node(node(0)));
        assert!(!g.add_node(node(0)));
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn edge_requires_both_endpoints() {
        let mut g = GraphModel::new("t");
        g.add_node(node(0));
        let dangling = GraphEdge { source: node(0).id, target: node(1).id, label: String::new() };
        assert!(!g.add_edge(dangling.clone()));
        g.add_node(node(1));
        assert!(g.add_edge(dangling));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn style_names() {
        assert_eq!(NodeStyle::EventTrigger.to_string(), "event-trigger");
        assert_eq!(NodeStyle::RemoteDispatch.as_str(), "remote-dispatch");
        assert_eq!(NodeStyle::Processing.as_str(), "processing");
    }
}
