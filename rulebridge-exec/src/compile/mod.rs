//! Turns typed operation parameters into the request template of one invocation.

mod path;

pub use path::locator_url;

use rulebridge_core::params::{
    DeleteFolderParams, DeleteTagsParams, LockRuleParams, MoveFolderParams, RenameFolderParams,
    SolveParams, UpdateRuleStatusParams, UpdateTagsParams,
};
use rulebridge_core::{HttpMethod, KeyKind, Locator, Operation, OperationParams, RuleRef};
use serde_json::{json, Value as JsonValue};

use self::path::{segment, tags_query, with_optional_version};

/// Method, URL, body and key of the one request behind an invocation. Built fresh each time.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTemplate {
    pub operation: Operation,
    pub method: HttpMethod,
    pub url: url::Url,
    pub body: Option<JsonValue>,
    pub key: KeyKind,
}

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("invalid request URL {url}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("{0} sends the first input item as its body, but no input items were given")]
    MissingInputItem(Operation),
    #[error("failed to serialize request body: {0}")]
    Serialize(String),
}

/// Builds the request for `params` against `host`.
///
/// `host` is the service base URL without a trailing slash; management operations address
/// `{host}/api`. `items` are the invocation's input items: solve and startJob send all of
/// them, the item-body operations send the first one.
pub fn compile_request(
    params: &OperationParams,
    host: &str,
    items: &[JsonValue],
) -> Result<RequestTemplate, CompileError> {
    let operation = params.operation();
    let host = host.strip_suffix('/').unwrap_or(host);
    let mgmt = format!("{host}/api");

    let (url, body) = match params {
        OperationParams::Solve(SolveParams { rule, options }) => {
            let body = match options {
                Some(options) => Some(json!({ "options": to_json(options)? })),
                None => None,
            };
            (solver_url(host, &["rule", "solve"], rule), body)
        }
        OperationParams::StartJob(rule) => (solver_url(host, &["job", "start"], rule), None),
        OperationParams::CancelJob { job_id } => {
            (format!("{host}/job/cancel/{}", segment(job_id)), None)
        }
        OperationParams::JobInfo { job_id } => (format!("{host}/job/{}", segment(job_id)), None),
        OperationParams::GetRule(rule) | OperationParams::DeleteRule(rule) => (
            locator_url(&mgmt, &["rule"], &rule.locator, rule.version.as_deref()),
            None,
        ),
        OperationParams::CreateRule => (format!("{mgmt}/rule"), None),
        OperationParams::UpdateRule(rule) => (versioned(&mgmt, &["rule"], rule), None),
        OperationParams::UpdateRuleStatus(UpdateRuleStatusParams { rule, status }) => {
            let url = format!(
                "{mgmt}/rule/status/{}/{}/{}",
                segment(&rule.rule_id),
                status.as_str(),
                version_segment(rule)
            );
            (url, None)
        }
        OperationParams::LockRule(LockRuleParams { rule, locked }) => (
            versioned(&mgmt, &["rule", "lock"], rule),
            Some(json!({ "locked": locked })),
        ),
        OperationParams::CreateNewRuleVersion { rule_id } => {
            (format!("{mgmt}/rule/{}/new-version", segment(rule_id)), None)
        }
        OperationParams::GetRulesForSpace => (format!("{mgmt}/space/items"), None),
        OperationParams::GetTags { tags } => (format!("{mgmt}/tags/items{}", tags_query(tags)), None),
        OperationParams::UpdateTags(UpdateTagsParams { rule, tags }) => {
            let mut body = Vec::with_capacity(tags.len());
            for t in tags {
                body.push(json!({ "tagName": t.tag, "color": to_json(&t.color)? }));
            }
            (versioned(&mgmt, &["tags"], rule), Some(JsonValue::Array(body)))
        }
        OperationParams::DeleteTags(DeleteTagsParams { rule, tags }) => (
            format!("{}{}", versioned(&mgmt, &["tags"], rule), tags_query(tags)),
            None,
        ),
        OperationParams::FindDependencies(rule) => {
            (versioned(&mgmt, &["tools", "dependencies"], rule), None)
        }
        OperationParams::FindDuplicates(rule) => {
            (versioned(&mgmt, &["tools", "duplicates"], rule), None)
        }
        OperationParams::GetFolderStructure(folder) => (folder_url(&mgmt, &["folder"], folder), None),
        OperationParams::CreateFolder(folder) | OperationParams::UpdateNodeFolderStructure(folder) => {
            (folder_url(&mgmt, &["folder"], folder), None)
        }
        OperationParams::ExportFolder(folder) => {
            (folder_url(&mgmt, &["folder", "export"], folder), None)
        }
        OperationParams::ImportFolder(folder) => {
            let url = match folder {
                Locator::Id(id) => format!("{mgmt}/folder/import/{}", segment(id)),
                other => folder_url(&mgmt, &["folder", "import"], other),
            };
            (url, None)
        }
        OperationParams::DeleteFolder(DeleteFolderParams { folder, .. }) => {
            (folder_url(&mgmt, &["folder"], folder), None)
        }
        OperationParams::RenameFolder(RenameFolderParams { folder, new_name }) => (
            folder_url(&mgmt, &["folder", "rename"], folder),
            Some(json!({ "name": new_name })),
        ),
        OperationParams::MoveFolder(MoveFolderParams { target_id, nodes }) => (
            format!("{mgmt}/folder/move"),
            Some(json!({
                "targetId": target_id.as_deref().unwrap_or_default(),
                "nodes": to_json(nodes)?,
            })),
        ),
        OperationParams::FindFolderOrRule(options) => {
            (format!("{mgmt}/folder/find"), Some(to_json(options)?))
        }
    };

    let body = if operation.takes_first_item() {
        Some(first_item(operation, items)?)
    } else if operation.is_item_driven() {
        let mut body = body.unwrap_or_else(|| json!({}));
        body["data"] = JsonValue::Array(items.to_vec());
        Some(body)
    } else {
        body
    };

    let mut url = url::Url::parse(&url).map_err(|e| CompileError::InvalidUrl {
        url: url.clone(),
        message: e.to_string(),
    })?;
    if let OperationParams::DeleteFolder(DeleteFolderParams { delete_all, .. }) = params {
        url.query_pairs_mut()
            .append_pair("deleteAll", if *delete_all { "true" } else { "false" });
    }

    Ok(RequestTemplate {
        operation,
        method: operation.method(),
        url,
        body,
        key: operation.key_kind(),
    })
}

/// `{host}/{segments}/{ruleId}[/{version}]`.
fn solver_url(host: &str, segments: &[&str], rule: &RuleRef) -> String {
    let base = format!("{host}/{}/{}", segments.join("/"), segment(&rule.rule_id));
    with_optional_version(base, rule.version.as_deref())
}

/// `{mgmt}/{segments}/{ruleId}/{version}` with an empty version segment when unpinned.
fn versioned(mgmt: &str, segments: &[&str], rule: &RuleRef) -> String {
    format!(
        "{mgmt}/{}/{}/{}",
        segments.join("/"),
        segment(&rule.rule_id),
        version_segment(rule)
    )
}

fn version_segment(rule: &RuleRef) -> String {
    rule.version.as_deref().map(segment).unwrap_or_default()
}

fn folder_url(mgmt: &str, segments: &[&str], folder: &Locator) -> String {
    locator_url(mgmt, segments, folder, None)
}

fn first_item(operation: Operation, items: &[JsonValue]) -> Result<JsonValue, CompileError> {
    items
        .first()
        .cloned()
        .ok_or(CompileError::MissingInputItem(operation))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<JsonValue, CompileError> {
    serde_json::to_value(value).map_err(|e| CompileError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulebridge_core::params::RuleLocator;

    const HOST: &str = "https://rules.example.com";

    fn rule(id: &str, version: Option<&str>) -> RuleRef {
        RuleRef {
            rule_id: id.into(),
            version: version.map(Into::into),
        }
    }

    #[test]
    fn solve_version_suffix_only_when_present() {
        let params = OperationParams::Solve(SolveParams {
            rule: rule("r1", None),
            options: None,
        });
        let t = compile_request(&params, HOST, &[json!({"a": 1})]).unwrap();
        assert_eq!(t.url.as_str(), "https://rules.example.com/rule/solve/r1");
        assert_eq!(t.body, Some(json!({"data": [{"a": 1}]})));
        assert_eq!(t.key, KeyKind::Solver);

        let params = OperationParams::StartJob(rule("r1", Some("3")));
        let t = compile_request(&params, HOST, &[]).unwrap();
        assert_eq!(t.url.as_str(), "https://rules.example.com/job/start/r1/3");
    }

    #[test]
    fn unpinned_management_urls_keep_trailing_slash() {
        let params = OperationParams::FindDuplicates(rule("r1", None));
        let t = compile_request(&params, HOST, &[]).unwrap();
        assert_eq!(t.url.as_str(), "https://rules.example.com/api/tools/duplicates/r1/");
    }

    #[test]
    fn path_locator_goes_to_query() {
        let params = OperationParams::DeleteRule(RuleLocator {
            locator: Locator::Path("/Folder/My Rule".into()),
            version: Some("2".into()),
        });
        let t = compile_request(&params, HOST, &[]).unwrap();
        assert_eq!(t.method, HttpMethod::Delete);
        assert_eq!(t.url.path(), "/api/rule/");
        assert_eq!(t.url.query(), Some("path=/Folder/My%20Rule&version=2"));
    }

    #[test]
    fn item_body_requires_an_item() {
        let params = OperationParams::UpdateRule(rule("r1", Some("1")));
        let err = compile_request(&params, HOST, &[]).unwrap_err();
        assert!(matches!(err, CompileError::MissingInputItem(Operation::UpdateRule)));
    }

    #[test]
    fn trailing_slash_on_host_is_ignored() {
        let t = compile_request(&OperationParams::GetRulesForSpace, "https://h.example/", &[]).unwrap();
        assert_eq!(t.url.as_str(), "https://h.example/api/space/items");
    }
}
