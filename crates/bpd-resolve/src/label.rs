//! Node and event label text.
//!
//! A behavior label is its title line, an optional kind-specific extra line,
//! and the variable-link blocks:
//!
//! ```text
//! [<seq>][<slot>] <name>
//! <extra data>
//! <LinkType>: ... via [...]
//! ```

use bpd_core::{
    format_float, round_digits, BehaviorKind, BehaviorNode, BehaviorSequence, EventNode,
    SequenceIdx, SlotIdx, TimerOperation,
};

use crate::error::{ResolveError, ResolveResult, Table};
use crate::variables::describe_variable_links;

/// Placeholder path component skipped when joining remote provider paths.
const PATH_PLACEHOLDER: &str = "None";

/// `"[<seq>][<slot>] <name>"` followed by the kind's extra-data line.
pub fn behavior_title(seq_idx: SequenceIdx, slot: SlotIdx, node: &BehaviorNode) -> ResolveResult<String> {
    let mut title = format!("[{seq_idx}][{slot}] {}", node.name);
    title.push_str(&extra_data(&node.kind)?);
    Ok(title)
}

/// Full label of a behavior node: title, extra data, and variable links.
pub fn behavior_label(
    seq:     &BehaviorSequence,
    seq_idx: SequenceIdx,
    slot:    SlotIdx,
    node:    &BehaviorNode,
) -> ResolveResult<String> {
    let mut label = behavior_title(seq_idx, slot, node)?;
    label.push_str(&describe_variable_links(seq, node.linked_variables)?);
    Ok(label)
}

/// `"[<seq>] <sequence name> [<slot>] <event name>"`.
pub fn event_title(seq: &BehaviorSequence, seq_idx: SequenceIdx, slot: SlotIdx, event: &EventNode) -> String {
    format!("[{seq_idx}] {} [{slot}] {}", seq.name, event.name)
}

/// Full label of an event node: title plus its output-variable links.
pub fn event_label(
    seq:     &BehaviorSequence,
    seq_idx: SequenceIdx,
    slot:    SlotIdx,
    event:   &EventNode,
) -> ResolveResult<String> {
    let mut label = event_title(seq, seq_idx, slot, event);
    label.push_str(&describe_variable_links(seq, event.linked_variables)?);
    Ok(label)
}

/// The newline-prefixed extra-data line for `kind`, or `""` for kinds with
/// no special rendering.
///
/// Fails only for a modify-timer operation code outside the operation table.
pub fn extra_data(kind: &BehaviorKind) -> ResolveResult<String> {
    let line = match kind {
        BehaviorKind::ActivateSkill { skill: Some(skill) } => skill.clone(),
        BehaviorKind::DeactivateSkill { skill: Some(skill) } => format!("skill {skill}"),
        BehaviorKind::ActivateSkill { skill: None } | BehaviorKind::DeactivateSkill { skill: None } => {
            return Ok(String::new());
        }

        BehaviorKind::Delay { delay } => format!("delay {}", format_float(f64::from(*delay))),

        BehaviorKind::ChangeInstanceDataSwitch { switch_name, new_value } => {
            format!("{switch_name} > {new_value}")
        }

        BehaviorKind::CustomEvent { event_name } | BehaviorKind::RemoteEvent { event_name } => {
            event_name.clone()
        }

        BehaviorKind::SkillCustomEvent { skill, event_name }
        | BehaviorKind::FireCustomSkillEvent { skill, event_name } => {
            format!("{} {event_name}", path_or_empty(skill))
        }

        BehaviorKind::RemoteCustomEvent { provider_path, event_name } => {
            let path: Vec<&str> = provider_path
                .iter()
                .map(String::as_str)
                .filter(|c| *c != PATH_PLACEHOLDER)
                .collect();
            format!("{} {event_name}", path.join("."))
        }

        BehaviorKind::MissionCustomEvent { mission, event_name } => {
            format!("{} {event_name}", path_or_empty(mission))
        }

        BehaviorKind::PostAkEvent { event } => path_or_empty(event).to_owned(),

        BehaviorKind::Metronome {
            tick_interval,
            duration,
            use_duration,
            max_tick_count,
            use_tick_count,
        } => {
            let mut line = format!("i={}", format_float(round_digits(f64::from(*tick_interval), 3)));
            if *use_duration {
                line.push_str(&format!(" d={}", format_float(round_digits(f64::from(*duration), 3))));
            }
            if *use_tick_count {
                line.push_str(&format!(" c={max_tick_count}"));
            }
            line
        }

        BehaviorKind::ModifyTimer { timer_id, operation } => {
            let op = TimerOperation::from_code(*operation).ok_or(ResolveError::IndexOutOfRange {
                table: Table::TimerOperations,
                index: i64::from(*operation),
            })?;
            format!("Timer_{timer_id} {}", op.as_str())
        }

        BehaviorKind::CallFunction { function_name } => function_name.clone(),

        BehaviorKind::CompareObject | BehaviorKind::CompareValues | BehaviorKind::Other => {
            return Ok(String::new());
        }
    };

    Ok(format!("\n{line}"))
}

fn path_or_empty(path: &Option<String>) -> &str {
    path.as_deref().unwrap_or("")
}
