use std::fmt;
use std::str::FromStr;

use crate::error::ParamError;
use crate::types::Operation;

/// Category of operations offered by the node. Selected once per node configuration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Resource {
    #[default]
    #[serde(rename = "solve", alias = "solveRes")]
    Solve,
    #[serde(rename = "job", alias = "jobRes")]
    Job,
    #[serde(rename = "managementRule", alias = "managementRuleRes")]
    ManagementRule,
    #[serde(rename = "managementFolder", alias = "managementFolderRes")]
    ManagementFolder,
    #[serde(rename = "managementTag", alias = "managementTagRes")]
    ManagementTag,
    #[serde(rename = "managementTools", alias = "managementToolsRes")]
    ManagementTools,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Solve,
        Resource::ManagementRule,
        Resource::ManagementFolder,
        Resource::ManagementTag,
        Resource::ManagementTools,
        Resource::Job,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Solve => "solve",
            Resource::Job => "job",
            Resource::ManagementRule => "managementRule",
            Resource::ManagementFolder => "managementFolder",
            Resource::ManagementTag => "managementTag",
            Resource::ManagementTools => "managementTools",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Resource::Solve => "Solve",
            Resource::Job => "Job",
            Resource::ManagementRule => "Management Rule",
            Resource::ManagementFolder => "Management Folder",
            Resource::ManagementTag => "Management Tag",
            Resource::ManagementTools => "Management Tools",
        }
    }

    /// Operations offered under this resource, in the order they are presented.
    pub fn operations(self) -> Vec<Operation> {
        Operation::ALL
            .iter()
            .copied()
            .filter(|op| op.resource() == self)
            .collect()
    }

    /// Operation preselected when the resource is chosen.
    pub fn default_operation(self) -> Operation {
        match self {
            Resource::Solve => Operation::Solve,
            Resource::Job => Operation::StartJob,
            Resource::ManagementRule => Operation::GetRule,
            Resource::ManagementFolder => Operation::GetFolderStructure,
            Resource::ManagementTag => Operation::GetTags,
            Resource::ManagementTools => Operation::FindDependencies,
        }
    }

    pub fn is_management(self) -> bool {
        !matches!(self, Resource::Solve | Resource::Job)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_suffix("Res").unwrap_or(name);
        Resource::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == name)
            .ok_or_else(|| ParamError::UnknownResource(s.to_string()))
    }
}
