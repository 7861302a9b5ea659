//! JSON Lines output backend.

use std::io::Write;

use bpd_graph::GraphModel;

use crate::writer::GraphWriter;
use crate::OutputResult;

/// Writes each graph as one line of JSON.
pub struct JsonWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GraphWriter for JsonWriter<W> {
    fn write_graph(&mut self, graph: &GraphModel) -> OutputResult<()> {
        serde_json::to_writer(&mut self.out, graph)?;
        self.out.write_all(b"\n")?;
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
