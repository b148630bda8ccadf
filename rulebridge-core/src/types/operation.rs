use std::fmt;
use std::str::FromStr;

use crate::error::ParamError;
use crate::types::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which credential key authenticates a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyKind {
    Solver,
    Management,
}

impl KeyKind {
    pub fn field_name(self) -> &'static str {
        match self {
            KeyKind::Solver => "solverApiKey",
            KeyKind::Management => "managementApiKey",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// An action scoped to exactly one [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Solve,
    StartJob,
    CancelJob,
    JobInfo,
    GetRule,
    CreateRule,
    UpdateRule,
    DeleteRule,
    UpdateRuleStatus,
    LockRule,
    CreateNewRuleVersion,
    GetRulesForSpace,
    GetTags,
    UpdateTags,
    DeleteTags,
    FindDependencies,
    FindDuplicates,
    GetFolderStructure,
    CreateFolder,
    UpdateNodeFolderStructure,
    ExportFolder,
    ImportFolder,
    DeleteFolder,
    RenameFolder,
    MoveFolder,
    FindFolderOrRule,
}

impl Operation {
    pub const ALL: [Operation; 26] = [
        Operation::Solve,
        Operation::StartJob,
        Operation::CancelJob,
        Operation::JobInfo,
        Operation::CreateNewRuleVersion,
        Operation::CreateRule,
        Operation::DeleteRule,
        Operation::GetRule,
        Operation::GetRulesForSpace,
        Operation::LockRule,
        Operation::UpdateRule,
        Operation::UpdateRuleStatus,
        Operation::CreateFolder,
        Operation::DeleteFolder,
        Operation::ExportFolder,
        Operation::GetFolderStructure,
        Operation::ImportFolder,
        Operation::MoveFolder,
        Operation::RenameFolder,
        Operation::UpdateNodeFolderStructure,
        Operation::FindFolderOrRule,
        Operation::DeleteTags,
        Operation::GetTags,
        Operation::UpdateTags,
        Operation::FindDependencies,
        Operation::FindDuplicates,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Solve => "solve",
            Operation::StartJob => "startJob",
            Operation::CancelJob => "cancelJob",
            Operation::JobInfo => "jobInfo",
            Operation::GetRule => "getRule",
            Operation::CreateRule => "createRule",
            Operation::UpdateRule => "updateRule",
            Operation::DeleteRule => "deleteRule",
            Operation::UpdateRuleStatus => "updateRuleStatus",
            Operation::LockRule => "lockRule",
            Operation::CreateNewRuleVersion => "createNewRuleVersion",
            Operation::GetRulesForSpace => "getRulesForSpace",
            Operation::GetTags => "getTags",
            Operation::UpdateTags => "updateTags",
            Operation::DeleteTags => "deleteTags",
            Operation::FindDependencies => "findDependencies",
            Operation::FindDuplicates => "findDuplicates",
            Operation::GetFolderStructure => "getFolderStructure",
            Operation::CreateFolder => "createFolder",
            Operation::UpdateNodeFolderStructure => "updateNodeFolderStructure",
            Operation::ExportFolder => "exportFolder",
            Operation::ImportFolder => "importFolder",
            Operation::DeleteFolder => "deleteFolder",
            Operation::RenameFolder => "renameFolder",
            Operation::MoveFolder => "moveFolder",
            Operation::FindFolderOrRule => "findFolderOrRule",
        }
    }

    /// The single resource this operation belongs to.
    pub fn resource(self) -> Resource {
        use Operation::*;
        match self {
            Solve => Resource::Solve,
            StartJob | CancelJob | JobInfo => Resource::Job,
            GetRule | CreateRule | UpdateRule | DeleteRule | UpdateRuleStatus | LockRule
            | CreateNewRuleVersion | GetRulesForSpace => Resource::ManagementRule,
            GetTags | UpdateTags | DeleteTags => Resource::ManagementTag,
            FindDependencies | FindDuplicates => Resource::ManagementTools,
            GetFolderStructure | CreateFolder | UpdateNodeFolderStructure | ExportFolder
            | ImportFolder | DeleteFolder | RenameFolder | MoveFolder | FindFolderOrRule => {
                Resource::ManagementFolder
            }
        }
    }

    pub fn method(self) -> HttpMethod {
        use Operation::*;
        match self {
            JobInfo | GetRule | GetTags | FindDependencies | FindDuplicates
            | GetRulesForSpace | GetFolderStructure | ExportFolder => HttpMethod::Get,
            Solve | StartJob | CancelJob | CreateRule | CreateNewRuleVersion | CreateFolder
            | ImportFolder | FindFolderOrRule => HttpMethod::Post,
            UpdateRule | UpdateRuleStatus | UpdateNodeFolderStructure | MoveFolder => {
                HttpMethod::Put
            }
            LockRule | UpdateTags | RenameFolder => HttpMethod::Patch,
            DeleteRule | DeleteTags | DeleteFolder => HttpMethod::Delete,
        }
    }

    /// Solver key for solving and jobs, management key for everything else.
    pub fn key_kind(self) -> KeyKind {
        if self.resource().is_management() {
            KeyKind::Management
        } else {
            KeyKind::Solver
        }
    }

    /// Operations that send every input item in one request body.
    pub fn is_item_driven(self) -> bool {
        matches!(self, Operation::Solve | Operation::StartJob)
    }

    /// Operations whose body is the first input item as-is.
    pub fn takes_first_item(self) -> bool {
        use Operation::*;
        matches!(
            self,
            CreateRule
                | CreateNewRuleVersion
                | UpdateRule
                | CreateFolder
                | UpdateNodeFolderStructure
                | ImportFolder
        )
    }

    pub fn display_name(self) -> &'static str {
        use Operation::*;
        match self {
            Solve => "Solve Rule",
            StartJob => "Start Job",
            CancelJob => "Cancel Job",
            JobInfo => "Get Job Info",
            GetRule => "Get Rule",
            CreateRule => "Create Rule",
            UpdateRule => "Update Rule",
            DeleteRule => "Delete Rule",
            UpdateRuleStatus => "Update Rule Status",
            LockRule => "Lock Rule",
            CreateNewRuleVersion => "Create New Rule Version",
            GetRulesForSpace => "Get Rules for Space",
            GetTags => "Get Rules by Tags",
            UpdateTags => "Update Tags",
            DeleteTags => "Delete Tags",
            FindDependencies => "Find Dependencies",
            FindDuplicates => "Find Duplicates",
            GetFolderStructure => "Get Folder Structure",
            CreateFolder => "Create Folder",
            UpdateNodeFolderStructure => "Update Node Folder Structure",
            ExportFolder => "Export Folder",
            ImportFolder => "Import Folder",
            DeleteFolder => "Delete Folder",
            RenameFolder => "Rename Folder",
            MoveFolder => "Move Folder",
            FindFolderOrRule => "Find Folder or Rule",
        }
    }

    pub fn description(self) -> &'static str {
        use Operation::*;
        match self {
            Solve => "Sends the input items as data to the solver and solves a rule",
            StartJob => "Sends the input items as data and starts a job for an integration flow rule",
            CancelJob => "Cancels a running job",
            JobInfo => "Retrieves the status of a job (success, failure or in process) by its ID",
            GetRule => "Retrieves a specific rule by its ID, alias or path",
            CreateRule => "Creates a new rule",
            UpdateRule => "Updates the content or properties of a rule",
            DeleteRule => "Deletes a specific rule or a version of a rule",
            UpdateRuleStatus => "Changes a rule's status (published or pending)",
            LockRule => "Locks or unlocks a rule to prevent edits",
            CreateNewRuleVersion => "Creates a new version of an existing rule",
            GetRulesForSpace => "Retrieves all rules within the configured space",
            GetTags => "Retrieves the rules carrying the given tags",
            UpdateTags => "Adds or overwrites tags for a rule",
            DeleteTags => "Removes one or more tags from a rule",
            FindDependencies => "Finds all dependencies for a given rule",
            FindDuplicates => "Finds duplicate conditions within a rule",
            GetFolderStructure => "Retrieves the folder and rule hierarchy",
            CreateFolder => "Creates a new folder at a specified location",
            UpdateNodeFolderStructure => "Updates the structure of a folder or node",
            ExportFolder => "Exports the contents of a folder as a JSON object",
            ImportFolder => "Imports a folder structure from a JSON object",
            DeleteFolder => "Deletes a folder and optionally all its contents",
            RenameFolder => "Renames an existing folder",
            MoveFolder => "Moves folders or rules to a different location",
            FindFolderOrRule => "Finds a folder or rule by various attributes",
        }
    }

    pub fn action(self) -> &'static str {
        use Operation::*;
        match self {
            Solve => "Solve rule",
            StartJob => "Start a job",
            CancelJob => "Cancel a job",
            JobInfo => "Get job info",
            GetRule => "Get a rule",
            CreateRule => "Create a rule",
            UpdateRule => "Update a rule",
            DeleteRule => "Delete a rule",
            UpdateRuleStatus => "Update a rule's status",
            LockRule => "Lock or unlock a rule",
            CreateNewRuleVersion => "Create a new rule version",
            GetRulesForSpace => "Get all rules for a space",
            GetTags => "Get rules by tags",
            UpdateTags => "Update tags for a rule",
            DeleteTags => "Delete tags from a rule",
            FindDependencies => "Find rule dependencies",
            FindDuplicates => "Find duplicates in a rule",
            GetFolderStructure => "Get the folder structure",
            CreateFolder => "Create a folder",
            UpdateNodeFolderStructure => "Update a node folder structure",
            ExportFolder => "Export a folder",
            ImportFolder => "Import a folder",
            DeleteFolder => "Delete a folder",
            RenameFolder => "Rename a folder",
            MoveFolder => "Move a folder or rule",
            FindFolderOrRule => "Find a folder or rule",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == name)
            .ok_or_else(|| ParamError::UnknownOperation(s.to_string()))
    }
}
