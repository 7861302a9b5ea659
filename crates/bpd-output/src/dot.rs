//! Graphviz DOT output backend.
//!
//! Emits plain DOT text; layout is left to the `dot` tool:
//!
//! ```text
//! digraph {
//!     labelloc="t";
//!     label="GD_Example.BPD_0";
//!     edge [arrowhead="vee"];
//!     e0_0 [label="[0] Main [0] OnSpawned" shape=box style=filled fillcolor=chartreuse2 group=event];
//!     b0_0 [label="[0][0] Behavior_Delay_0\ndelay 0.5" shape=box style=rounded];
//!     e0_0 -> b0_0 [label="[0] (0,0)"];
//! }
//! ```

use std::io::Write;

use serde::Deserialize;

use bpd_graph::{GraphModel, NodeStyle};

use crate::writer::GraphWriter;
use crate::OutputResult;

// ── DotConfig ─────────────────────────────────────────────────────────────────

/// Graph-wide DOT attributes.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    /// Edge arrowhead shape.  Default: `vee`.
    pub arrowhead: String,
    /// Print the graph title as a caption above the graph.  Default: on.
    pub caption:   bool,
    /// Layout direction (`TB`, `LR`, …).  Graphviz default when `None`.
    pub rankdir:   Option<String>,
    /// Font for nodes and edges.  Graphviz default when `None`.
    pub font_name: Option<String>,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            arrowhead: "vee".to_owned(),
            caption:   true,
            rankdir:   None,
            font_name: None,
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Node attributes for each presentation class.
fn style_attrs(style: NodeStyle) -> &'static str {
    match style {
        NodeStyle::EventTrigger   => "shape=box style=filled fillcolor=chartreuse2 group=event",
        NodeStyle::RemoteDispatch => "shape=cds style=filled fillcolor=gold1 margin=\"0.15\"",
        NodeStyle::Processing     => "shape=box style=rounded",
    }
}

/// Quote-safe DOT string body.  Newlines become centered line breaks.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"'  => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            c    => out.push(c),
        }
    }
    out
}

/// Render `graph` as one DOT `digraph`.
pub fn render_dot(graph: &GraphModel, config: &DotConfig) -> String {
    let mut out = String::from("digraph {\n");

    if config.caption {
        out.push_str("    labelloc=\"t\";\n");
        out.push_str(&format!("    label=\"{}\";\n", escape(&graph.title)));
    }
    if let Some(rankdir) = &config.rankdir {
        out.push_str(&format!("    rankdir=\"{}\";\n", escape(rankdir)));
    }
    if let Some(font) = &config.font_name {
        let font = escape(font);
        out.push_str(&format!("    node [fontname=\"{font}\"];\n"));
        out.push_str(&format!("    edge [fontname=\"{font}\"];\n"));
    }
    out.push_str(&format!("    edge [arrowhead=\"{}\"];\n", escape(&config.arrowhead)));

    for node in graph.nodes() {
        out.push_str(&format!(
            "    {} [label=\"{}\" {}];\n",
            node.id,
            escape(&node.label),
            style_attrs(node.style),
        ));
    }
    for edge in graph.edges() {
        out.push_str(&format!(
            "    {} -> {} [label=\"{}\"];\n",
            edge.source,
            edge.target,
            escape(&edge.label),
        ));
    }

    out.push_str("}\n");
    out
}

// ── DotWriter ─────────────────────────────────────────────────────────────────

/// Writes each graph as a DOT `digraph` to any `Write` sink.
pub struct DotWriter<W: Write> {
    out:      W,
    config:   DotConfig,
    finished: bool,
}

impl<W: Write> DotWriter<W> {
    pub fn new(out: W, config: DotConfig) -> Self {
        Self { out, config, finished: false }
    }

    /// Unwrap the inner sink (e.g. to inspect a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GraphWriter for DotWriter<W> {
    fn write_graph(&mut self, graph: &GraphModel) -> OutputResult<()> {
        self.out.write_all(render_dot(graph, &self.config).as_bytes())?;
        tracing::debug!(
            graph = %graph.title,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "wrote DOT graph"
        );
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
