use rulebridge_exec::executor::{normalize, parse_body};
use serde_json::json;

#[test]
fn empty_body_is_null_envelope() {
    let body = parse_body(b"  \n");
    assert!(body.is_null());
    let out = normalize(body);
    assert_eq!(out.len(), 1);
    assert!(out[0].data.is_null());
}

#[test]
fn non_json_body_is_kept_as_string() {
    assert_eq!(parse_body(b"OK"), json!("OK"));
}

#[test]
fn empty_array_yields_no_envelopes() {
    assert!(normalize(json!([])).is_empty());
}

#[test]
fn envelopes_keep_order_and_index() {
    let out = normalize(json!(["a", "b", "c"]));
    let pairs: Vec<_> = out.iter().map(|e| (e.data.clone(), e.source_index)).collect();
    assert_eq!(pairs, vec![(json!("a"), 0), (json!("b"), 1), (json!("c"), 2)]);
}

#[test]
fn envelope_serializes_camel_case() {
    let out = normalize(json!({"status": "ok"}));
    assert_eq!(
        serde_json::to_value(&out[0]).unwrap(),
        json!({"data": {"status": "ok"}, "sourceIndex": 0})
    );
}
