//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `nodes.csv`: `graph,node_id,style,label`
//! - `edges.csv`: `graph,source,target,label`
//!
//! The `graph` column holds the graph title, so several definitions can
//! share one pair of files.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use bpd_graph::GraphModel;

use crate::writer::GraphWriter;
use crate::OutputResult;

/// Writes graph nodes and edges to two CSV files.
pub struct CsvWriter {
    nodes:    Writer<File>,
    edges:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut nodes = Writer::from_path(dir.join("nodes.csv"))?;
        nodes.write_record(["graph", "node_id", "style", "label"])?;

        let mut edges = Writer::from_path(dir.join("edges.csv"))?;
        edges.write_record(["graph", "source", "target", "label"])?;

        Ok(Self { nodes, edges, finished: false })
    }
}

impl GraphWriter for CsvWriter {
    fn write_graph(&mut self, graph: &GraphModel) -> OutputResult<()> {
        for node in graph.nodes() {
            self.nodes.write_record([
                graph.title.as_str(),
                &node.id.to_string(),
                node.style.as_str(),
                &node.label,
            ])?;
        }
        for edge in graph.edges() {
            self.edges.write_record([
                graph.title.as_str(),
                &edge.source.to_string(),
                &edge.target.to_string(),
                &edge.label,
            ])?;
        }
        tracing::debug!(graph = %graph.title, "wrote CSV rows");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.nodes.flush()?;
        self.edges.flush()?;
        Ok(())
    }
}
