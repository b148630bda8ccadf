use assert_cmd::Command;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("tempfile");
    std::io::Write::write_all(&mut f, contents.as_bytes()).expect("write");
    f
}

fn rulebridge() -> Command {
    let bin = assert_cmd::cargo::cargo_bin!("rulebridge");
    let mut cmd = Command::new(bin);
    cmd.env_remove("RULEBRIDGE_HOST")
        .env_remove("RULEBRIDGE_SOLVER_API_KEY")
        .env_remove("RULEBRIDGE_MANAGEMENT_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn credentials() -> NamedTempFile {
    write_temp(
        r#"
host: https://rules.example.com/
solverApiKey: s-key
managementApiKey: m-key
"#,
    )
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf8")
}

#[test]
fn schema_lists_every_resource() {
    let out = stdout_of(rulebridge().args(["schema", "--format", "json"]));
    let schema: serde_json::Value = serde_json::from_str(&out).unwrap();
    let resources: Vec<_> = schema
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["value"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        resources,
        [
            "solve",
            "job",
            "managementRule",
            "managementFolder",
            "managementTag",
            "managementTools"
        ]
    );
}

#[test]
fn schema_shows_operation_fields() {
    let out = stdout_of(rulebridge().args(["schema", "--operation", "getRule", "--format", "json"]));
    let fields: serde_json::Value = serde_json::from_str(&out).unwrap();
    let names: Vec<_> = fields
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"identifierType"));
    assert!(names.contains(&"path"));
    assert!(names.contains(&"ruleVersion"));
}

#[test]
fn schema_rejects_operation_of_another_resource() {
    rulebridge()
        .args(["schema", "--resource", "job", "--operation", "solve"])
        .assert()
        .code(2);
}

#[test]
fn plan_builds_rule_url_and_redacts_key() {
    let cred = credentials();
    let out = stdout_of(rulebridge().args([
        "plan",
        "getRule",
        "--set",
        "ruleId=abc",
        "--set",
        "ruleVersion=2",
        "--credentials",
        cred.path().to_str().unwrap(),
        "--format",
        "json",
    ]));
    let planned: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(planned["method"], "GET");
    assert_eq!(planned["url"], "https://rules.example.com/api/rule/abc/2");
    assert_eq!(planned["key"], "management");
    assert_eq!(planned["headers"]["Authorization"], "<redacted>");
    assert!(!out.contains("m-key"));
}

#[test]
fn plan_solve_sends_all_items() {
    let cred = credentials();
    let items = write_temp(r#"[{"amount": 10}, {"amount": 20}]"#);
    let fields = write_temp("ruleId: r1\nsolveOptions:\n  debug: true\n");
    let out = stdout_of(rulebridge().args([
        "plan",
        "solve",
        "--fields",
        fields.path().to_str().unwrap(),
        "--items",
        items.path().to_str().unwrap(),
        "--credentials",
        cred.path().to_str().unwrap(),
        "--format",
        "json",
    ]));
    let planned: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(planned["url"], "https://rules.example.com/rule/solve/r1");
    assert_eq!(
        planned["body"],
        serde_json::json!({"data": [{"amount": 10}, {"amount": 20}], "options": {"debug": true}})
    );
}

#[test]
fn unknown_operation_is_a_validation_failure() {
    rulebridge().args(["run", "explode"]).assert().code(2);
}

#[test]
fn missing_required_field_is_a_validation_failure() {
    rulebridge()
        .args(["run", "renameFolder", "--set", "nodeId=n1"])
        .assert()
        .code(2);
}

#[test]
fn resource_mismatch_is_a_validation_failure() {
    rulebridge()
        .args(["plan", "getTags", "--resource", "solve"])
        .assert()
        .code(2);
}

#[test]
fn missing_management_key_is_a_runtime_error() {
    let cred = write_temp(r#"{"host": "https://rules.example.com", "solverApiKey": "s"}"#);
    rulebridge()
        .args([
            "plan",
            "getRulesForSpace",
            "--credentials",
            cred.path().to_str().unwrap(),
        ])
        .assert()
        .code(4);
}

#[test]
fn unreadable_credentials_are_a_runtime_error() {
    rulebridge()
        .args([
            "run",
            "jobInfo",
            "--set",
            "jobId=j1",
            "--credentials",
            "/nonexistent/rulebridge-credentials.yaml",
        ])
        .assert()
        .code(4);
}

#[test]
fn missing_host_is_a_runtime_error() {
    rulebridge().args(["check-credentials"]).assert().code(4);
}
