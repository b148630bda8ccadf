mod operation;
mod options;
mod resource;

pub use operation::{HttpMethod, KeyKind, Operation};
pub use options::{
    AuditTtl, FindItemType, FindOptions, MoveNode, NodeType, RuleStatus, RuleType, SolveOptions,
    SolveStrategy, TagColor, TagEntry,
};
pub use resource::Resource;
