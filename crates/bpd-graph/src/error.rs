use bpd_core::SequenceIdx;
use bpd_resolve::ResolveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// A sequence of `definition` referenced an index outside one of its
    /// tables.  No graph is produced for the definition.
    #[error("{definition}: sequence [{sequence}] {sequence_name}: {source}")]
    Resolve {
        definition:    String,
        sequence:      SequenceIdx,
        sequence_name: String,
        #[source]
        source:        ResolveError,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
