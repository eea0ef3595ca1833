//! Integration tests for condition splitting, resolution and assertion runs
//!
//! These tests exercise the public API end to end, the way an assertion
//! editor would drive it.

use condition_rs::assertion::{run_assertions, Outcome};
use condition_rs::expr::{execute, execute_json, is_valid, split, CompareOp};
use condition_rs::resolver::{resolve, VariableInfo};
use condition_rs::suite::SuiteLoader;
use serde_json::json;
use std::fs;

// ============================================================================
// Split / Validate
// ============================================================================

#[test]
fn test_split_reference_examples() {
    assert_eq!(split(""), None);

    let parsed = split("${status} = 200").unwrap();
    assert_eq!(parsed.as_triple(), ("status", "=", "200"));
    assert_eq!(parsed.operator, CompareOp::Eq);

    assert_eq!(split("a == b"), None);
    assert_eq!(split("a = b = c"), None);
}

#[test]
fn test_is_valid_agrees_with_split() {
    let inputs = [
        "",
        "${status} = 200",
        "a == b",
        "a = b = c",
        "${x}>=1",
        "x <",
        "   ",
        "${a b} = 1",
        "left != right side",
    ];
    for input in inputs {
        assert_eq!(is_valid(input), split(input).is_some(), "input: {:?}", input);
    }
}

#[test]
fn test_split_is_pure() {
    let condition = "${count} <= 10";
    assert_eq!(split(condition), split(condition));
}

// ============================================================================
// Execute
// ============================================================================

#[test]
fn test_execute_reference_examples() {
    assert!(execute("1", "=", 1));
    assert!(execute("true", "=", true));
    assert!(execute("false", "=", false));

    assert!(!execute(1, ">", 2));
    assert!(execute("10", ">", "9"));
    assert!(!execute("abc", ">", "1"));
    assert!(!execute(1, "&&", 2));
}

#[test]
fn test_execute_dynamic_values() {
    let body = json!({"status": 201, "ok": true, "items": [1, 2]});

    assert!(execute_json(body.get("status"), ">=", Some(&json!("200"))));
    assert!(execute_json(body.get("ok"), "=", Some(&json!("true"))));
    assert!(!execute_json(body.get("items"), "=", Some(&json!("1,2"))));
    assert!(execute_json(body.get("missing"), "=", Some(&json!("undefined"))));
}

// ============================================================================
// Resolve
// ============================================================================

#[test]
fn test_resolve_reference_example() {
    let conditions = ["${a} = 1", "${b} != 2"];
    let variables = vec![VariableInfo::new("a", "5", "x")];
    let res = resolve(&conditions, Some(variables.as_slice()));

    assert_eq!(
        serde_json::to_value(&res).unwrap(),
        json!({
            "data": {"a": "5"},
            "extra": {
                "vars": {
                    "a": {"name": "a", "value": "5", "failureMessage": "x"},
                    "b": null
                },
                "matchs": {
                    "${a} = 1": ["a", "=", "1"],
                    "${b} != 2": ["b", "!=", "2"]
                }
            }
        })
    );
}

#[test]
fn test_resolve_matchs_preserve_input_order() {
    let conditions = ["${z} = 1", "bad", "${a} = 2"];
    let res = resolve(&conditions, None);
    let keys: Vec<&str> = res.extra.matchs.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, conditions.to_vec());
}

#[test]
fn test_resolve_empty_conditions() {
    let res = resolve::<String>(&[], None);
    assert_eq!(
        serde_json::to_value(&res).unwrap(),
        json!({"data": {}, "extra": {"vars": {}, "matchs": {}}})
    );
}

#[test]
fn test_resolve_name_fallback() {
    let variables = vec![VariableInfo::new("c", "", "")];
    let res = resolve(&["${c} = 1"], Some(variables.as_slice()));
    assert_eq!(res.data["c"], "c");
}

// ============================================================================
// Assertion runs
// ============================================================================

#[test]
fn test_run_assertions_end_to_end() {
    let variables = vec![
        VariableInfo::new("status", "200", "bad status"),
        VariableInfo::new("items", "3", ""),
    ];
    let conditions = [
        "${status} = 200",
        "${items} > 5",
        "${status} == 200",
        "${unknown} = unknown",
    ];
    let report = run_assertions(&conditions, &variables);

    assert_eq!(report.results.len(), 4);
    assert_eq!(report.results[0].outcome, Outcome::Passed);
    assert_eq!(
        report.results[1].outcome,
        Outcome::Failed {
            message: "expected items > 5, got 3".to_string()
        }
    );
    assert_eq!(report.results[2].outcome, Outcome::Invalid);
    assert_eq!(report.results[3].outcome, Outcome::Passed);
    assert_eq!((report.passed(), report.failed(), report.invalid()), (2, 1, 1));
}

// ============================================================================
// Suite files
// ============================================================================

#[test]
fn test_load_and_run_yaml_suite() {
    let dir = std::env::temp_dir().join(format!("condition-rs-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("suite.yaml");
    fs::write(
        &path,
        r#"
name: smoke
variables:
  - name: code
    value: "0"
    failureMessage: "non-zero exit"
conditions:
  - "${code} = 0"
  - "${code} <= 1"
"#,
    )
    .unwrap();

    let suite = SuiteLoader::new().load(&path).unwrap();
    let report = run_assertions(&suite.conditions, &suite.variables);
    assert!(report.all_passed());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_load_json_suite() {
    let dir = std::env::temp_dir().join(format!("condition-rs-json-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("suite.json");
    fs::write(
        &path,
        r#"{"variables": [{"name": "a", "value": "1"}], "conditions": ["${a} != 1"]}"#,
    )
    .unwrap();

    let suite = SuiteLoader::new().load(&path).unwrap();
    let report = run_assertions(&suite.conditions, &suite.variables);
    assert_eq!(report.failed(), 1);

    fs::remove_dir_all(&dir).ok();
}
