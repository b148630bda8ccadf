use serde_json::{Map, Value as JsonValue};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolveStrategy {
    #[default]
    Standard,
    Array,
    FirstMatch,
    EvaluateAll,
}

/// Audit retention, either a number of days or a duration string such as `30d`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum AuditTtl {
    Days(u64),
    Text(String),
}

/// Options forwarded verbatim as `options` in the solve request body.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_conflict_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_ttl: Option<AuditTtl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corr_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_condition_cols: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_condition_cols: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<SolveStrategy>,

    /// Keys the node does not model are passed through untouched.
    #[serde(flatten, default)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Pending,
    #[default]
    Published,
}

impl RuleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleStatus::Pending => "pending",
            RuleStatus::Published => "published",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    #[default]
    #[serde(rename = "")]
    Any,
    DecisionTable,
    DecisionTree,
    ScriptingRule,
    DecisionFlow,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindItemType {
    #[default]
    #[serde(rename = "")]
    Any,
    Folder,
    Rule,
}

/// Filter attributes posted to the folder search endpoint.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<RuleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RuleStatus>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<FindItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(flatten, default)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    #[default]
    Default,
    Violet,
    Yellow,
    Green,
    Red,
    White,
}

/// One row of a tag list. `color` only matters when tags are written.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TagEntry {
    pub tag: String,
    #[serde(default)]
    pub color: TagColor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeType {
    Root,
    #[default]
    Folder,
    Rule,
}

/// A folder-tree node to relocate with the move operation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MoveNode {
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    pub id: String,
}
