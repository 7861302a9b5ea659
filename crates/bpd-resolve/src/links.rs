//! Output-link resolution.

use bpd_core::{format_float, round_scale, BehaviorKind, BehaviorSequence, PackedIndexLength, SlotIdx};

use crate::error::{lookup, ResolveResult, Table};

/// One control-flow link out of a node, fully dereferenced.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedLink {
    /// Position of the link within its owner's output range.
    pub slot:       usize,
    pub link_id:    i8,
    /// Behavior slot the link activates.  Always a connected slot.
    pub target:     SlotIdx,
    /// `raw_delay` after [`round_scale`].
    pub delay:      f64,
    pub raw_delay:  f32,
    /// Operator implied by `link_id` when the owner is a comparison behavior.
    pub comparator: Option<&'static str>,
}

impl ResolvedLink {
    /// Edge label: `"[slot] (link_id,target)[ d=<delay>][ <comparator>]"`.
    ///
    /// The delay segment is omitted when the raw delay is exactly zero.
    pub fn label(&self) -> String {
        let mut label = format!("[{}] ({},{})", self.slot, self.link_id, self.target);
        if self.raw_delay != 0.0 {
            label.push_str(" d=");
            label.push_str(&format_float(self.delay));
        }
        if let Some(op) = self.comparator {
            label.push(' ');
            label.push_str(op);
        }
        label
    }
}

/// Resolve every output link in `range`.
///
/// `owner` is the kind of the behavior that owns the range, or `None` for an
/// event node; it only decides the comparator suffix.  Links whose target
/// slot is disconnected are omitted; a link index outside
/// `output_link_table` or a target outside `nodes` is an error.
pub fn describe_output_links(
    seq:   &BehaviorSequence,
    owner: Option<&BehaviorKind>,
    range: PackedIndexLength,
) -> ResolveResult<Vec<ResolvedLink>> {
    let mut links = Vec::with_capacity(usize::from(range.len()));

    for (slot, link_idx) in range.range().enumerate() {
        let record = lookup(&seq.output_link_table, link_idx, Table::OutputLinkTable)?;
        let link_id = record.link.link_id();
        let target = record.link.target();

        let target_node = lookup(&seq.nodes, usize::from(target), Table::BehaviorNodes)?;
        if target_node.is_none() {
            tracing::trace!(
                sequence = %seq.name,
                slot,
                target,
                "omitting link to disconnected behavior slot"
            );
            continue;
        }

        let raw_delay = record.activate_delay;
        links.push(ResolvedLink {
            slot,
            link_id,
            target: SlotIdx::from(target),
            delay: round_scale(f64::from(raw_delay)),
            raw_delay,
            comparator: owner.and_then(|k| k.comparator(link_id)),
        });
    }

    Ok(links)
}
