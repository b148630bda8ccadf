//! Typed parameters per operation, populated by a single validation pass.

mod fields;

pub use fields::FieldValues;

use crate::error::{ParamError, ParamsError};
use crate::schema::{IDENTIFIER_TYPE, IDENTIFIER_TYPE_FOLDER};
use crate::types::{FindOptions, MoveNode, Operation, Resource, RuleStatus, SolveOptions, TagEntry};

/// A rule addressed by ID or alias, optionally pinned to a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRef {
    pub rule_id: String,
    pub version: Option<String>,
}

/// How a rule or folder is addressed. ID and path are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Id(String),
    Path(String),
    /// Neither given; targets the collection root.
    Root,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLocator {
    pub locator: Locator,
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolveParams {
    pub rule: RuleRef,
    pub options: Option<SolveOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRuleStatusParams {
    pub rule: RuleRef,
    pub status: RuleStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockRuleParams {
    pub rule: RuleRef,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTagsParams {
    pub rule: RuleRef,
    pub tags: Vec<TagEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTagsParams {
    pub rule: RuleRef,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFolderParams {
    pub folder: Locator,
    pub delete_all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameFolderParams {
    pub folder: Locator,
    pub new_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveFolderParams {
    /// Destination folder; `None` targets the root.
    pub target_id: Option<String>,
    pub nodes: Vec<MoveNode>,
}

/// Parameters of one invocation. One variant per [`Operation`], so every operation must
/// say which fields it reads.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationParams {
    Solve(SolveParams),
    StartJob(RuleRef),
    CancelJob { job_id: String },
    JobInfo { job_id: String },
    GetRule(RuleLocator),
    CreateRule,
    UpdateRule(RuleRef),
    DeleteRule(RuleLocator),
    UpdateRuleStatus(UpdateRuleStatusParams),
    LockRule(LockRuleParams),
    CreateNewRuleVersion { rule_id: String },
    GetRulesForSpace,
    GetTags { tags: Vec<String> },
    UpdateTags(UpdateTagsParams),
    DeleteTags(DeleteTagsParams),
    FindDependencies(RuleRef),
    FindDuplicates(RuleRef),
    GetFolderStructure(Locator),
    CreateFolder(Locator),
    UpdateNodeFolderStructure(Locator),
    ExportFolder(Locator),
    ImportFolder(Locator),
    DeleteFolder(DeleteFolderParams),
    RenameFolder(RenameFolderParams),
    MoveFolder(MoveFolderParams),
    FindFolderOrRule(FindOptions),
}

impl OperationParams {
    /// Resolves `operation` under `resource` and reads its parameters.
    pub fn resolve(
        resource: Resource,
        operation: Operation,
        values: &FieldValues,
    ) -> Result<Self, ParamsError> {
        if operation.resource() != resource {
            return Err(ParamsError::new(
                operation,
                vec![ParamError::ResourceMismatch { resource, operation }],
            ));
        }
        Self::from_fields(operation, values)
    }

    /// Reads every field `operation` needs in one pass, applying defaults to optional
    /// fields and reporting all violations together.
    pub fn from_fields(operation: Operation, values: &FieldValues) -> Result<Self, ParamsError> {
        let mut pass = Pass {
            values,
            violations: Vec::new(),
        };
        let params = pass.read(operation);
        if pass.violations.is_empty() {
            Ok(params)
        } else {
            Err(ParamsError::new(operation, pass.violations))
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            OperationParams::Solve(_) => Operation::Solve,
            OperationParams::StartJob(_) => Operation::StartJob,
            OperationParams::CancelJob { .. } => Operation::CancelJob,
            OperationParams::JobInfo { .. } => Operation::JobInfo,
            OperationParams::GetRule(_) => Operation::GetRule,
            OperationParams::CreateRule => Operation::CreateRule,
            OperationParams::UpdateRule(_) => Operation::UpdateRule,
            OperationParams::DeleteRule(_) => Operation::DeleteRule,
            OperationParams::UpdateRuleStatus(_) => Operation::UpdateRuleStatus,
            OperationParams::LockRule(_) => Operation::LockRule,
            OperationParams::CreateNewRuleVersion { .. } => Operation::CreateNewRuleVersion,
            OperationParams::GetRulesForSpace => Operation::GetRulesForSpace,
            OperationParams::GetTags { .. } => Operation::GetTags,
            OperationParams::UpdateTags(_) => Operation::UpdateTags,
            OperationParams::DeleteTags(_) => Operation::DeleteTags,
            OperationParams::FindDependencies(_) => Operation::FindDependencies,
            OperationParams::FindDuplicates(_) => Operation::FindDuplicates,
            OperationParams::GetFolderStructure(_) => Operation::GetFolderStructure,
            OperationParams::CreateFolder(_) => Operation::CreateFolder,
            OperationParams::UpdateNodeFolderStructure(_) => Operation::UpdateNodeFolderStructure,
            OperationParams::ExportFolder(_) => Operation::ExportFolder,
            OperationParams::ImportFolder(_) => Operation::ImportFolder,
            OperationParams::DeleteFolder(_) => Operation::DeleteFolder,
            OperationParams::RenameFolder(_) => Operation::RenameFolder,
            OperationParams::MoveFolder(_) => Operation::MoveFolder,
            OperationParams::FindFolderOrRule(_) => Operation::FindFolderOrRule,
        }
    }

    /// Names of the fields `operation` reads.
    pub fn field_names(operation: Operation) -> &'static [&'static str] {
        use Operation::*;
        match operation {
            Solve => &["ruleId", "ruleVersion", "solveOptions"],
            StartJob | UpdateRule | FindDependencies | FindDuplicates => &["ruleId", "ruleVersion"],
            CancelJob | JobInfo => &["jobId"],
            GetRule | DeleteRule => &[IDENTIFIER_TYPE, "ruleId", "path", "ruleVersion"],
            UpdateRuleStatus => &["ruleId", "ruleVersion", "status"],
            LockRule => &["ruleId", "ruleVersion", "locked"],
            CreateNewRuleVersion => &["ruleId"],
            CreateRule | GetRulesForSpace => &[],
            GetTags => &["tagsList"],
            UpdateTags => &["ruleId", "ruleVersion", "updateTagsList"],
            DeleteTags => &["ruleId", "ruleVersion", "tagsList"],
            GetFolderStructure | CreateFolder | UpdateNodeFolderStructure | ExportFolder
            | ImportFolder => &[IDENTIFIER_TYPE_FOLDER, "nodeId", "pathFolder"],
            DeleteFolder => &[IDENTIFIER_TYPE_FOLDER, "nodeId", "pathFolder", "deleteAll"],
            RenameFolder => &[IDENTIFIER_TYPE_FOLDER, "nodeId", "pathFolder", "newName"],
            MoveFolder => &["nodeId", "nodes"],
            FindFolderOrRule => &["findOptions"],
        }
    }
}

#[derive(serde::Deserialize)]
struct TagName {
    tag: String,
}

struct Pass<'a> {
    values: &'a FieldValues,
    violations: Vec<ParamError>,
}

impl Pass<'_> {
    fn read(&mut self, operation: Operation) -> OperationParams {
        use Operation::*;
        match operation {
            Solve => OperationParams::Solve(SolveParams {
                rule: self.rule_ref(),
                options: self.check(self.values.optional_typed("solveOptions")),
            }),
            StartJob => OperationParams::StartJob(self.rule_ref()),
            CancelJob => OperationParams::CancelJob {
                job_id: self.required("jobId"),
            },
            JobInfo => OperationParams::JobInfo {
                job_id: self.required("jobId"),
            },
            GetRule => OperationParams::GetRule(self.rule_locator()),
            CreateRule => OperationParams::CreateRule,
            UpdateRule => OperationParams::UpdateRule(self.rule_ref()),
            DeleteRule => OperationParams::DeleteRule(self.addressed_rule_locator()),
            UpdateRuleStatus => OperationParams::UpdateRuleStatus(UpdateRuleStatusParams {
                rule: self.rule_ref(),
                status: self.check(self.values.typed_or_default("status")),
            }),
            LockRule => OperationParams::LockRule(LockRuleParams {
                rule: self.rule_ref(),
                locked: self.check(self.values.bool_or("locked", true)),
            }),
            CreateNewRuleVersion => OperationParams::CreateNewRuleVersion {
                rule_id: self.required("ruleId"),
            },
            GetRulesForSpace => OperationParams::GetRulesForSpace,
            GetTags => OperationParams::GetTags {
                tags: self.tag_names(),
            },
            UpdateTags => OperationParams::UpdateTags(UpdateTagsParams {
                rule: self.rule_ref(),
                tags: self.check(self.values.collection_rows("updateTagsList", "tags")),
            }),
            DeleteTags => OperationParams::DeleteTags(DeleteTagsParams {
                rule: self.rule_ref(),
                tags: self.tag_names(),
            }),
            FindDependencies => OperationParams::FindDependencies(self.rule_ref()),
            FindDuplicates => OperationParams::FindDuplicates(self.rule_ref()),
            GetFolderStructure => OperationParams::GetFolderStructure(self.folder_locator()),
            CreateFolder => OperationParams::CreateFolder(self.folder_locator()),
            UpdateNodeFolderStructure => {
                OperationParams::UpdateNodeFolderStructure(self.folder_locator())
            }
            ExportFolder => OperationParams::ExportFolder(self.folder_locator()),
            ImportFolder => OperationParams::ImportFolder(self.folder_locator()),
            DeleteFolder => OperationParams::DeleteFolder(DeleteFolderParams {
                folder: self.folder_locator(),
                delete_all: self.check(self.values.bool_or("deleteAll", false)),
            }),
            RenameFolder => OperationParams::RenameFolder(RenameFolderParams {
                folder: self.folder_locator(),
                new_name: self.required("newName"),
            }),
            MoveFolder => OperationParams::MoveFolder(MoveFolderParams {
                target_id: self.values.optional_string("nodeId"),
                nodes: self.check(self.values.collection_rows("nodes", "nodes")),
            }),
            FindFolderOrRule => {
                OperationParams::FindFolderOrRule(self.check(self.values.typed_or_default("findOptions")))
            }
        }
    }

    fn check<T: Default>(&mut self, result: Result<T, ParamError>) -> T {
        result.unwrap_or_else(|e| {
            self.violations.push(e);
            T::default()
        })
    }

    fn required(&mut self, name: &str) -> String {
        let result = self.values.required_string(name);
        self.check(result)
    }

    fn rule_ref(&mut self) -> RuleRef {
        RuleRef {
            rule_id: self.required("ruleId"),
            version: self.values.optional_string("ruleVersion"),
        }
    }

    fn rule_locator(&mut self) -> RuleLocator {
        RuleLocator {
            locator: self.locator(IDENTIFIER_TYPE, "ruleId", "path"),
            version: self.values.optional_string("ruleVersion"),
        }
    }

    /// Like [`Self::rule_locator`], but the collection root is not a valid target.
    fn addressed_rule_locator(&mut self) -> RuleLocator {
        let rule = self.rule_locator();
        if rule.locator == Locator::Root {
            let active = match self.values.optional_str_ref(IDENTIFIER_TYPE) {
                Some("path") => Some("path"),
                Some("id") | None => Some("ruleId"),
                Some(_) => None,
            };
            if let Some(field) = active {
                self.violations.push(ParamError::missing(field));
            }
        }
        rule
    }

    fn folder_locator(&mut self) -> Locator {
        self.locator(IDENTIFIER_TYPE_FOLDER, "nodeId", "pathFolder")
    }

    /// An explicit discriminator wins. Otherwise a populated ID wins over a populated path.
    fn locator(&mut self, discriminator: &str, id_field: &str, path_field: &str) -> Locator {
        let values = self.values;
        let id = values.optional_string(id_field);
        let path = values.optional_string(path_field);
        match values.optional_str_ref(discriminator) {
            Some("id") => id.map(Locator::Id).unwrap_or(Locator::Root),
            Some("path") => path.map(Locator::Path).unwrap_or(Locator::Root),
            Some(other) => {
                self.violations.push(ParamError::invalid(
                    discriminator,
                    format!("expected \"id\" or \"path\", got {other:?}"),
                ));
                Locator::Root
            }
            None => match (id, path) {
                (Some(id), _) => Locator::Id(id),
                (None, Some(path)) => Locator::Path(path),
                (None, None) => Locator::Root,
            },
        }
    }

    fn tag_names(&mut self) -> Vec<String> {
        let rows: Vec<TagName> = self.check(self.values.collection_rows("tagsList", "tags"));
        rows.into_iter().map(|r| r.tag).collect()
    }
}
