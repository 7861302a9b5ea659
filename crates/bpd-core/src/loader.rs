//! JSON snapshot loader.
//!
//! # Format
//!
//! A definition is a JSON object mirroring [`BehaviorProviderDefinition`];
//! packed references are the engine's raw signed integers.
//!
//! ```json
//! {
//!   "path": "GD_Example.Character:AIBehaviorProviderDefinition_0",
//!   "sequences": [{
//!     "name": "OnDeath",
//!     "events": [{ "name": "OnDied", "output_links": 1 }],
//!     "nodes": [
//!       { "name": "Behavior_Delay_3",
//!         "kind": { "class": "Behavior_Delay", "delay": 0.5 } },
//!       null
//!     ],
//!     "output_link_table": [{ "link": 0, "activate_delay": 0.0 }]
//!   }]
//! }
//! ```
//!
//! `null` in `nodes` marks a disconnected slot.  A batch file is a JSON
//! array of definitions.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::snapshot::BehaviorProviderDefinition;
use crate::CoreResult;

/// Parse one definition from any `Read` source.
pub fn load_definition_reader<R: Read>(reader: R) -> CoreResult<BehaviorProviderDefinition> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse one definition from a JSON file.
pub fn load_definition_path(path: &Path) -> CoreResult<BehaviorProviderDefinition> {
    let file = File::open(path)?;
    load_definition_reader(BufReader::new(file))
}

/// Parse a JSON array of definitions from any `Read` source.
pub fn load_definitions_reader<R: Read>(reader: R) -> CoreResult<Vec<BehaviorProviderDefinition>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a JSON array of definitions from a file.
pub fn load_definitions_path(path: &Path) -> CoreResult<Vec<BehaviorProviderDefinition>> {
    let file = File::open(path)?;
    load_definitions_reader(BufReader::new(file))
}

/// Parse either a single definition or an array of definitions.
///
/// Returns [`CoreError::Parse`](crate::CoreError::Parse) when the top-level
/// JSON value is neither an object nor an array.
pub fn load_snapshot_reader<R: Read>(reader: R) -> CoreResult<Vec<BehaviorProviderDefinition>> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        other => Err(crate::CoreError::Parse(format!(
            "expected a definition object or an array of definitions, found {}",
            json_kind(&other)
        ))),
    }
}

/// Like [`load_snapshot_reader`] but reads from a file.
pub fn load_snapshot_path(path: &Path) -> CoreResult<Vec<BehaviorProviderDefinition>> {
    let file = File::open(path)?;
    load_snapshot_reader(BufReader::new(file))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null      => "null",
        serde_json::Value::Bool(_)   => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_)  => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
