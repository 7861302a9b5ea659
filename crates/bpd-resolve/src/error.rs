//! Resolver error type.

use std::fmt;

use thiserror::Error;

/// The lookup table a failed index was aimed at.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Table {
    VariableLinkTable,
    LinkedVariableIndices,
    VariableDefinitions,
    BehaviorNodes,
    OutputLinkTable,
    TimerOperations,
}

impl Table {
    pub fn as_str(self) -> &'static str {
        match self {
            Table::VariableLinkTable     => "variable_link_table",
            Table::LinkedVariableIndices => "linked_variable_indices",
            Table::VariableDefinitions   => "variable_definitions",
            Table::BehaviorNodes         => "behavior_nodes",
            Table::OutputLinkTable       => "output_link_table",
            Table::TimerOperations       => "timer_operations",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by `bpd-resolve`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// `index` is outside `[0, len)` of `table`.  Signed so that negative
    /// entries of `linked_variable_indices` are reported verbatim.
    #[error("index {index} is out of range for {table}")]
    IndexOutOfRange { table: Table, index: i64 },
}

pub type ResolveResult<T> = Result<T, ResolveError>;

/// Bounds-checked `table[index]`.
pub(crate) fn lookup<T>(items: &[T], index: usize, table: Table) -> ResolveResult<&T> {
    items.get(index).ok_or(ResolveError::IndexOutOfRange {
        table,
        index: index as i64,
    })
}
