//! Graph build configuration.

use serde::Deserialize;

/// What a build does when a sequence fails to resolve.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Fail the whole definition; no graph is returned.
    #[default]
    AbortDefinition,
    /// Drop the failing sequence (none of its nodes or edges) and keep
    /// building the rest.
    SkipSequence,
}

/// Settings for [`GraphBuilder`](crate::GraphBuilder).
///
/// Typically deserialized from the application's JSON config file; every
/// field has a default.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub on_error: ErrorPolicy,
}
