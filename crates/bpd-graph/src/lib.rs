//! `bpd-graph`: graph model construction for behavior-provider definitions.
//!
//! # Build order
//!
//! ```text
//! for each sequence (array order):
//!   ① event nodes
//!   ② connected behavior nodes
//!   ③ edges out of events
//!   ④ edges out of behaviors
//! ```
//!
//! A sequence is built into a staging buffer and merged into the model only
//! once all of its labels and links resolved.  Under the default
//! [`ErrorPolicy::AbortDefinition`] the first failure discards the whole
//! definition; [`ErrorPolicy::SkipSequence`] discards just that sequence.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`build_graphs`] runs on Rayon's thread pool.          |
//! | `fx-hash`  | FxHash for the [`GraphModel`] node-id index.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bpd_core::load_definition_path;
//! use bpd_graph::build_graph;
//!
//! let def = load_definition_path(Path::new("bpd.json"))?;
//! let graph = build_graph(&def)?;
//! println!("{} nodes, {} edges", graph.node_count(), graph.edge_count());
//! ```

pub mod batch;
pub mod builder;
pub mod config;
pub mod error;
pub mod model;

#[cfg(test)]
mod tests;

pub use batch::build_graphs;
pub use builder::{build_graph, GraphBuilder};
pub use config::{ErrorPolicy, GraphConfig};
pub use error::{GraphError, GraphResult};
pub use model::{GraphEdge, GraphModel, GraphNode, GraphNodeId, NodeStyle, SlotKind};
