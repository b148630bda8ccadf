use crate::schema::{
    Choice, DefaultValue, FieldKind, FieldSpec, Show, IDENTIFIER_TYPE, IDENTIFIER_TYPE_FOLDER,
};
use crate::types::Operation::{self, *};

const fn field(
    name: &'static str,
    display_name: &'static str,
    kind: FieldKind,
    default: DefaultValue,
) -> FieldSpec {
    FieldSpec {
        name,
        display_name,
        kind,
        default,
        required: false,
        placeholder: None,
        description: "",
        show: None,
    }
}

const fn shown(mut spec: FieldSpec, operations: &'static [Operation]) -> FieldSpec {
    spec.show = Some(Show {
        operations,
        when: None,
    });
    spec
}

const fn shown_when(
    mut spec: FieldSpec,
    operations: &'static [Operation],
    discriminator: &'static str,
    value: &'static str,
) -> FieldSpec {
    spec.show = Some(Show {
        operations,
        when: Some((discriminator, value)),
    });
    spec
}

const fn required(mut spec: FieldSpec) -> FieldSpec {
    spec.required = true;
    spec
}

const fn described(
    mut spec: FieldSpec,
    placeholder: Option<&'static str>,
    description: &'static str,
) -> FieldSpec {
    spec.placeholder = placeholder;
    spec.description = description;
    spec
}

const TEXT: FieldKind = FieldKind::String;
const EMPTY: DefaultValue = DefaultValue::Text("");

const ID_OR_PATH: &[Choice] = &[
    Choice { name: "ID or Alias", value: "id" },
    Choice { name: "Path", value: "path" },
];

const NODE_ID_OR_PATH: &[Choice] = &[
    Choice { name: "Node ID", value: "id" },
    Choice { name: "Path", value: "path" },
];

const RULE_STATUSES: &[Choice] = &[
    Choice { name: "Pending", value: "pending" },
    Choice { name: "Published", value: "published" },
];

const STRATEGIES: &[Choice] = &[
    Choice { name: "Standard", value: "STANDARD" },
    Choice { name: "Array", value: "ARRAY" },
    Choice { name: "First Match", value: "FIRST_MATCH" },
    Choice { name: "Evaluate All", value: "EVALUATE_ALL" },
];

const TAG_COLORS: &[Choice] = &[
    Choice { name: "Default", value: "default" },
    Choice { name: "Violet", value: "violet" },
    Choice { name: "Yellow", value: "yellow" },
    Choice { name: "Green", value: "green" },
    Choice { name: "Red", value: "red" },
    Choice { name: "White", value: "white" },
];

const NODE_TYPES: &[Choice] = &[
    Choice { name: "Root", value: "ROOT" },
    Choice { name: "Folder", value: "FOLDER" },
    Choice { name: "Rule", value: "RULE" },
];

const RULE_TYPES: &[Choice] = &[
    Choice { name: "Any", value: "" },
    Choice { name: "Decision Table", value: "DECISION_TABLE" },
    Choice { name: "Decision Tree", value: "DECISION_TREE" },
    Choice { name: "Scripting Rule", value: "SCRIPTING_RULE" },
    Choice { name: "Decision Flow", value: "DECISION_FLOW" },
];

const ITEM_TYPES: &[Choice] = &[
    Choice { name: "Any", value: "" },
    Choice { name: "Folder", value: "FOLDER" },
    Choice { name: "Rule", value: "RULE" },
];

const SOLVE_OPTIONS: &[FieldSpec] = &[
    described(
        field("aliasConflictPath", "Alias Conflict Path", TEXT, EMPTY),
        None,
        "Path to handle alias conflicts",
    ),
    described(
        field("auditTtl", "Audit TTL", FieldKind::Number, EMPTY),
        None,
        "Time-to-live for audit logs (e.g. \"30d\")",
    ),
    described(
        field("corrId", "Correlation ID", TEXT, EMPTY),
        None,
        "Custom correlation ID for tracking requests",
    ),
    described(
        field("audit", "Enable Audit", FieldKind::Boolean, DefaultValue::Bool(false)),
        None,
        "Whether to enable auditing for solver operations",
    ),
    described(
        field("debug", "Enable Debug", FieldKind::Boolean, DefaultValue::Bool(false)),
        None,
        "Whether to enable debug mode for the solver",
    ),
    described(
        field("excludedConditionCols", "Excluded Condition Columns", FieldKind::MultiString, DefaultValue::EmptyList),
        None,
        "Columns to exclude from condition evaluation",
    ),
    described(
        field("includedConditionCols", "Included Condition Columns", FieldKind::MultiString, DefaultValue::EmptyList),
        None,
        "Columns to include in condition evaluation",
    ),
    described(
        field("strategy", "Strategy", FieldKind::Options { options: STRATEGIES }, DefaultValue::Text("STANDARD")),
        None,
        "Select the solver strategy",
    ),
];

const FIND_OPTIONS: &[FieldSpec] = &[
    described(field("name", "Name", TEXT, EMPTY), None, "Name of the folder or rule to find"),
    described(field("id", "ID", TEXT, EMPTY), None, "ID of the folder or rule to find"),
    described(field("baseId", "Base ID", TEXT, EMPTY), None, "Base ID of the rule to find"),
    described(field("ruleAlias", "Rule Alias", TEXT, EMPTY), None, "Alias of the rule to find"),
    described(
        field("ruleType", "Rule Type", FieldKind::Options { options: RULE_TYPES }, EMPTY),
        None,
        "Type of the rule to find",
    ),
    described(
        field("tags", "Tags", FieldKind::MultiString, DefaultValue::EmptyList),
        None,
        "Tags to filter by",
    ),
    described(
        field("status", "Rule status", FieldKind::Options { options: RULE_STATUSES }, DefaultValue::Text("published")),
        None,
        "State of the rule to find",
    ),
    described(
        field("type", "Type", FieldKind::Options { options: ITEM_TYPES }, EMPTY),
        None,
        "Type of the item to find (Folder or Rule)",
    ),
    described(
        field("version", "Version", FieldKind::Number, DefaultValue::Absent),
        None,
        "Version of the rule to find",
    ),
];

const TAG_ROW: &[FieldSpec] = &[required(described(
    field("tag", "Tag name", TEXT, EMPTY),
    None,
    "tag1 e.g.",
))];

const TAG_ROW_WITH_COLOR: &[FieldSpec] = &[
    required(described(field("tag", "Tag name", TEXT, EMPTY), None, "tag1 e.g.")),
    field(
        "color",
        "Color",
        FieldKind::Options { options: TAG_COLORS },
        DefaultValue::Text("default"),
    ),
];

const MOVE_NODE_ROW: &[FieldSpec] = &[
    required(field(
        "type",
        "Node type",
        FieldKind::Options { options: NODE_TYPES },
        DefaultValue::Text("FOLDER"),
    )),
    required(described(
        field("id", "Node ID", TEXT, EMPTY),
        None,
        "The ID of the folder/node. For move operation.",
    )),
];

const RULE_ID_OPS: &[Operation] = &[
    Solve,
    StartJob,
    LockRule,
    UpdateRuleStatus,
    UpdateRule,
    CreateNewRuleVersion,
    UpdateTags,
    DeleteTags,
    FindDuplicates,
    FindDependencies,
];

const RULE_VERSION_OPS: &[Operation] = &[
    Solve,
    StartJob,
    GetRule,
    UpdateRule,
    DeleteRule,
    UpdateTags,
    FindDuplicates,
    FindDependencies,
];

const PINNED_VERSION_OPS: &[Operation] = &[UpdateRuleStatus, LockRule, DeleteTags];

const RULE_ADDRESSED_OPS: &[Operation] = &[GetRule, DeleteRule];

const FOLDER_ADDRESSED_OPS: &[Operation] = &[
    UpdateNodeFolderStructure,
    ExportFolder,
    GetFolderStructure,
    DeleteFolder,
    RenameFolder,
    CreateFolder,
    ImportFolder,
];

const OPTIONAL_NODE_OPS: &[Operation] = &[
    UpdateNodeFolderStructure,
    ImportFolder,
    ExportFolder,
    GetFolderStructure,
    CreateFolder,
];

const REQUIRED_NODE_OPS: &[Operation] = &[DeleteFolder, RenameFolder];

const NODE_PLACEHOLDER: Option<&str> =
    Some("Empty for root or e.g., b64e1a2a-453f-6b9f-14a6-db5c4e549fbb");

/// Every field of the node in presentation order. Same-named entries never overlap in
/// visibility, so at most one of them is shown for a given operation.
pub static FIELDS: &[FieldSpec] = &[
    // solve
    shown(
        field(
            "solveOptions",
            "Solve Options",
            FieldKind::Collection { options: SOLVE_OPTIONS },
            DefaultValue::EmptyObject,
        ),
        &[Solve],
    ),
    // job
    shown(
        required(described(
            field("jobId", "Job ID", TEXT, EMPTY),
            Some("e.g., a1b2c3d4-e5f6-7890-1234-567890abcdef"),
            "The unique identifier for the job",
        )),
        &[CancelJob, JobInfo],
    ),
    // rules
    shown(
        field(
            IDENTIFIER_TYPE,
            "Identify By",
            FieldKind::Options { options: ID_OR_PATH },
            DefaultValue::Text("id"),
        ),
        RULE_ADDRESSED_OPS,
    ),
    shown_when(
        required(described(
            field("ruleId", "Rule ID or Alias", TEXT, EMPTY),
            Some("e.g., my-rule-alias or an ID"),
            "The unique ID or alias of the rule to target",
        )),
        RULE_ADDRESSED_OPS,
        IDENTIFIER_TYPE,
        "id",
    ),
    shown_when(
        required(described(
            field("path", "Path to the rule", TEXT, EMPTY),
            Some("e.g., /New folderRule Name"),
            "The unique path to the rule",
        )),
        RULE_ADDRESSED_OPS,
        IDENTIFIER_TYPE,
        "path",
    ),
    shown(
        required(described(
            field("status", "Status", FieldKind::Options { options: RULE_STATUSES }, DefaultValue::Text("published")),
            None,
            "The new status for the rule",
        )),
        &[UpdateRuleStatus],
    ),
    shown(
        required(described(
            field("locked", "Lock Rule", FieldKind::Boolean, DefaultValue::Bool(true)),
            None,
            "Whether to lock the rule to prevent edits",
        )),
        &[LockRule],
    ),
    // tags
    shown(
        field(
            "tagsList",
            "Tags",
            FieldKind::FixedCollection { group: "tags", values: TAG_ROW },
            DefaultValue::EmptyObject,
        ),
        &[GetTags, DeleteTags],
    ),
    shown(
        field(
            "updateTagsList",
            "Tags",
            FieldKind::FixedCollection { group: "tags", values: TAG_ROW_WITH_COLOR },
            DefaultValue::EmptyObject,
        ),
        &[UpdateTags],
    ),
    // folders
    shown(
        field(
            IDENTIFIER_TYPE_FOLDER,
            "Identify By",
            FieldKind::Options { options: NODE_ID_OR_PATH },
            DefaultValue::Text("id"),
        ),
        FOLDER_ADDRESSED_OPS,
    ),
    shown(
        described(
            field("nodeId", "Target Folder ID", TEXT, EMPTY),
            NODE_PLACEHOLDER,
            "The ID of the *destination* folder. Leave empty to target the root.",
        ),
        &[MoveFolder],
    ),
    shown_when(
        described(
            field("nodeId", "Node ID", TEXT, EMPTY),
            NODE_PLACEHOLDER,
            "The ID of the folder/node. Leave empty to target the root.",
        ),
        OPTIONAL_NODE_OPS,
        IDENTIFIER_TYPE_FOLDER,
        "id",
    ),
    shown_when(
        required(described(
            field("nodeId", "Node ID", TEXT, EMPTY),
            NODE_PLACEHOLDER,
            "The ID of the folder/node.",
        )),
        REQUIRED_NODE_OPS,
        IDENTIFIER_TYPE_FOLDER,
        "id",
    ),
    shown_when(
        required(described(
            field("pathFolder", "Path to folder", TEXT, EMPTY),
            Some("e.g. /New Folder"),
            "The path to folder.",
        )),
        REQUIRED_NODE_OPS,
        IDENTIFIER_TYPE_FOLDER,
        "path",
    ),
    shown_when(
        described(
            field("pathFolder", "Path to folder", TEXT, EMPTY),
            Some("e.g. /New Folder"),
            "The path to folder.",
        ),
        OPTIONAL_NODE_OPS,
        IDENTIFIER_TYPE_FOLDER,
        "path",
    ),
    shown(
        field(
            "nodes",
            "Nodes",
            FieldKind::FixedCollection { group: "nodes", values: MOVE_NODE_ROW },
            DefaultValue::EmptyObject,
        ),
        &[MoveFolder],
    ),
    shown(
        described(
            field("deleteAll", "Delete All Contents", FieldKind::Boolean, DefaultValue::Bool(false)),
            None,
            "Whether to delete all nested rules and folders within the target folder",
        ),
        &[DeleteFolder],
    ),
    shown(
        required(described(
            field("newName", "New Name", TEXT, EMPTY),
            None,
            "The new name for the folder",
        )),
        &[RenameFolder],
    ),
    shown(
        field(
            "findOptions",
            "Filter Attributes",
            FieldKind::Collection { options: FIND_OPTIONS },
            DefaultValue::EmptyObject,
        ),
        &[FindFolderOrRule],
    ),
    // shared rule addressing
    shown(
        required(described(
            field("ruleId", "Rule ID or Alias", TEXT, EMPTY),
            Some("my-rule-alias or ID..."),
            "The unique identifier or alias for the rule",
        )),
        RULE_ID_OPS,
    ),
    shown(
        described(
            field("ruleVersion", "Rule Version", TEXT, EMPTY),
            Some("e.g., 1"),
            "The specific version of the rule to use. If empty, the latest is used.",
        ),
        RULE_VERSION_OPS,
    ),
    shown(
        described(
            field("ruleVersion", "Version", TEXT, EMPTY),
            Some("e.g., 1"),
            "Specify a rule version.",
        ),
        PINNED_VERSION_OPS,
    ),
];
