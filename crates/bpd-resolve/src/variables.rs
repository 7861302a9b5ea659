//! Variable-link descriptions.
//!
//! A node's `linked_variables` range selects records in the sequence's
//! `variable_link_table`; each record's own range selects entries in
//! `linked_variable_indices`, which in turn index `variable_definitions`.
//! Each record renders as one block:
//!
//! ```text
//! \n<LinkType>: [<var>]<name>(<Type>) [<var>]<name>(<Type>) via [<record>]<property> (<connection>)
//! ```

use std::fmt::Write;

use bpd_core::{BehaviorSequence, PackedIndexLength};

use crate::error::{lookup, ResolveError, ResolveResult, Table};

/// Describe every variable link in `range`, one newline-prefixed block per
/// record.  An empty range yields an empty string.
///
/// Fails on the first index outside its table.
pub fn describe_variable_links(
    seq:   &BehaviorSequence,
    range: PackedIndexLength,
) -> ResolveResult<String> {
    let mut out = String::new();

    for record_idx in range.range() {
        let record = lookup(&seq.variable_link_table, record_idx, Table::VariableLinkTable)?;
        let _ = write!(out, "\n{}: ", record.link_type);

        for entry_idx in record.linked_variables.range() {
            let &var_idx =
                lookup(&seq.linked_variable_indices, entry_idx, Table::LinkedVariableIndices)?;
            let var = usize::try_from(var_idx)
                .ok()
                .and_then(|i| seq.variable_definitions.get(i))
                .ok_or(ResolveError::IndexOutOfRange {
                    table: Table::VariableDefinitions,
                    index: i64::from(var_idx),
                })?;
            let _ = write!(out, "[{var_idx}]{}({}) ", var.name, var.var_type);
        }

        let _ = write!(
            out,
            "via [{record_idx}]{} ({})",
            record.property_name, record.connection_index
        );
    }

    Ok(out)
}
