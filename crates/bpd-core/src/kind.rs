//! Closed enumerations decoded from the engine's class and enum tables.
//!
//! Behavior kinds are a tagged union keyed by engine class name.  Every kind
//! that renders extra label data carries exactly the attributes it needs; all
//! classes without special rendering collapse into [`BehaviorKind::Other`].

use serde::{Deserialize, Serialize};

// ── BehaviorKind ──────────────────────────────────────────────────────────────

/// The class of a behavior node, with its kind-specific attributes.
///
/// Object references (`skill`, `mission`, …) are the referenced object's
/// path name, or `None` when the reference is empty.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum BehaviorKind {
    #[serde(rename = "Behavior_ActivateSkill")]
    ActivateSkill {
        #[serde(default)]
        skill: Option<String>,
    },

    #[serde(rename = "Behavior_DeactivateSkill")]
    DeactivateSkill {
        #[serde(default)]
        skill: Option<String>,
    },

    #[serde(rename = "Behavior_Delay")]
    Delay { delay: f32 },

    #[serde(rename = "Behavior_ChangeInstanceDataSwitch")]
    ChangeInstanceDataSwitch { switch_name: String, new_value: i32 },

    #[serde(rename = "Behavior_CustomEvent")]
    CustomEvent { event_name: String },

    #[serde(rename = "Behavior_SkillCustomEvent")]
    SkillCustomEvent {
        #[serde(default)]
        skill: Option<String>,
        event_name: String,
    },

    #[serde(rename = "Behavior_FireCustomSkillEvent")]
    FireCustomSkillEvent {
        #[serde(default)]
        skill: Option<String>,
        event_name: String,
    },

    #[serde(rename = "Behavior_RemoteEvent")]
    RemoteEvent { event_name: String },

    /// `provider_path` holds the raw path components, placeholders included.
    #[serde(rename = "Behavior_RemoteCustomEvent")]
    RemoteCustomEvent {
        #[serde(default)]
        provider_path: Vec<String>,
        event_name: String,
    },

    #[serde(rename = "Behavior_MissionCustomEvent")]
    MissionCustomEvent {
        #[serde(default)]
        mission: Option<String>,
        event_name: String,
    },

    #[serde(rename = "Behavior_PostAkEvent")]
    PostAkEvent {
        #[serde(default)]
        event: Option<String>,
    },

    #[serde(rename = "Behavior_Metronome")]
    Metronome {
        tick_interval: f32,
        #[serde(default)]
        duration: f32,
        #[serde(default)]
        use_duration: bool,
        #[serde(default)]
        max_tick_count: i32,
        #[serde(default)]
        use_tick_count: bool,
    },

    /// `operation` is the raw `TimerOperation` code; see [`TimerOperation::from_code`].
    #[serde(rename = "Behavior_ModifyTimer")]
    ModifyTimer { timer_id: i32, operation: u8 },

    #[serde(rename = "Behavior_CallFunction")]
    CallFunction { function_name: String },

    #[serde(rename = "Behavior_CompareObject")]
    CompareObject,

    #[serde(rename = "Behavior_CompareValues")]
    CompareValues,

    #[default]
    #[serde(other)]
    Other,
}

impl BehaviorKind {
    /// Engine class name, or `"Behavior"` for [`Other`](Self::Other).
    pub fn class_name(&self) -> &'static str {
        match self {
            BehaviorKind::ActivateSkill { .. }            => "Behavior_ActivateSkill",
            BehaviorKind::DeactivateSkill { .. }          => "Behavior_DeactivateSkill",
            BehaviorKind::Delay { .. }                    => "Behavior_Delay",
            BehaviorKind::ChangeInstanceDataSwitch { .. } => "Behavior_ChangeInstanceDataSwitch",
            BehaviorKind::CustomEvent { .. }              => "Behavior_CustomEvent",
            BehaviorKind::SkillCustomEvent { .. }         => "Behavior_SkillCustomEvent",
            BehaviorKind::FireCustomSkillEvent { .. }     => "Behavior_FireCustomSkillEvent",
            BehaviorKind::RemoteEvent { .. }              => "Behavior_RemoteEvent",
            BehaviorKind::RemoteCustomEvent { .. }        => "Behavior_RemoteCustomEvent",
            BehaviorKind::MissionCustomEvent { .. }       => "Behavior_MissionCustomEvent",
            BehaviorKind::PostAkEvent { .. }              => "Behavior_PostAkEvent",
            BehaviorKind::Metronome { .. }                => "Behavior_Metronome",
            BehaviorKind::ModifyTimer { .. }              => "Behavior_ModifyTimer",
            BehaviorKind::CallFunction { .. }             => "Behavior_CallFunction",
            BehaviorKind::CompareObject                   => "Behavior_CompareObject",
            BehaviorKind::CompareValues                   => "Behavior_CompareValues",
            BehaviorKind::Other                           => "Behavior",
        }
    }

    /// `true` for the six custom/remote event dispatchers.
    pub fn is_remote_event(&self) -> bool {
        matches!(
            self,
            BehaviorKind::CustomEvent { .. }
                | BehaviorKind::SkillCustomEvent { .. }
                | BehaviorKind::FireCustomSkillEvent { .. }
                | BehaviorKind::RemoteEvent { .. }
                | BehaviorKind::RemoteCustomEvent { .. }
                | BehaviorKind::MissionCustomEvent { .. }
        )
    }

    /// Comparison operator selected by output link `link_id`, for the two
    /// comparison kinds.  `None` for every other kind and unknown ids.
    pub fn comparator(&self, link_id: i8) -> Option<&'static str> {
        match (self, link_id) {
            (BehaviorKind::CompareObject, 0) => Some("=="),
            (BehaviorKind::CompareObject, _) => Some("!="),
            (BehaviorKind::CompareValues, 0) => Some("<="),
            (BehaviorKind::CompareValues, 1) => Some(">"),
            (BehaviorKind::CompareValues, 2) => Some("=="),
            (BehaviorKind::CompareValues, 3) => Some("<"),
            (BehaviorKind::CompareValues, 4) => Some(">="),
            _ => None,
        }
    }
}

// ── TimerOperation ────────────────────────────────────────────────────────────

/// Operation applied by a modify-timer behavior.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TimerOperation {
    None,
    Start,
    Pause,
    Toggle,
    Resume,
    Stop,
    Max,
}

impl TimerOperation {
    /// Number of entries in the operation table.
    pub const COUNT: usize = 7;

    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => TimerOperation::None,
            1 => TimerOperation::Start,
            2 => TimerOperation::Pause,
            3 => TimerOperation::Toggle,
            4 => TimerOperation::Resume,
            5 => TimerOperation::Stop,
            6 => TimerOperation::Max,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimerOperation::None   => "None",
            TimerOperation::Start  => "Start",
            TimerOperation::Pause  => "Pause",
            TimerOperation::Toggle => "Toggle",
            TimerOperation::Resume => "Resume",
            TimerOperation::Stop   => "Stop",
            TimerOperation::Max    => "MAX",
        }
    }
}

// ── Variable enums ────────────────────────────────────────────────────────────

/// How a variable link attaches to its node.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum VariableLinkType {
    #[default]
    Unknown,
    Context,
    Input,
    Output,
    #[serde(rename = "MAX")]
    Max,
}

impl VariableLinkType {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableLinkType::Unknown => "Unknown",
            VariableLinkType::Context => "Context",
            VariableLinkType::Input   => "Input",
            VariableLinkType::Output  => "Output",
            VariableLinkType::Max     => "MAX",
        }
    }
}

impl std::fmt::Display for VariableLinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type of a sequence variable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum VariableType {
    #[default]
    None,
    Bool,
    Int,
    Float,
    Vector,
    Object,
    AllPlayers,
    Attribute,
    InstanceData,
    NamedVariable,
    NamedKismetVariable,
    DirectionVector,
    AttachmentLocation,
    UnaryMath,
    BinaryMath,
    Flag,
    #[serde(rename = "MAX")]
    Max,
}

impl VariableType {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableType::None                => "None",
            VariableType::Bool                => "Bool",
            VariableType::Int                 => "Int",
            VariableType::Float               => "Float",
            VariableType::Vector              => "Vector",
            VariableType::Object              => "Object",
            VariableType::AllPlayers          => "AllPlayers",
            VariableType::Attribute           => "Attribute",
            VariableType::InstanceData        => "InstanceData",
            VariableType::NamedVariable       => "NamedVariable",
            VariableType::NamedKismetVariable => "NamedKismetVariable",
            VariableType::DirectionVector     => "DirectionVector",
            VariableType::AttachmentLocation  => "AttachmentLocation",
            VariableType::UnaryMath           => "UnaryMath",
            VariableType::BinaryMath          => "BinaryMath",
            VariableType::Flag                => "Flag",
            VariableType::Max                 => "MAX",
        }
    }
}

impl std::fmt::Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
