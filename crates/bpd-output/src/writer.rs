//! The `GraphWriter` trait implemented by all backend writers.

use bpd_graph::GraphModel;

use crate::OutputResult;

/// Trait implemented by the DOT, CSV, and JSON writers.
pub trait GraphWriter {
    /// Append one graph.
    fn write_graph(&mut self, graph: &GraphModel) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
