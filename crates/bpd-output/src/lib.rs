//! `bpd-output`: graph model writers.
//!
//! Three backends are provided:
//!
//! | Writer       | Output                                                     |
//! |--------------|------------------------------------------------------------|
//! | `DotWriter`  | Graphviz DOT text, one `digraph` per graph                 |
//! | `CsvWriter`  | `nodes.csv`, `edges.csv` in a directory                    |
//! | `JsonWriter` | JSON Lines, one serialized `GraphModel` per line           |
//!
//! All backends implement [`GraphWriter`].  Layout and rasterizing are left
//! to Graphviz itself.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bpd_output::{DotConfig, DotWriter, GraphWriter};
//!
//! let file = File::create("bpd.gv")?;
//! let mut writer = DotWriter::new(BufWriter::new(file), DotConfig::default());
//! writer.write_graph(&graph)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod dot;
pub mod error;
pub mod json;
pub mod writer;


pub use self::csv::CsvWriter;
pub use dot::{render_dot, DotConfig, DotWriter};
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use writer::GraphWriter;
