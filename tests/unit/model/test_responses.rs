use project_client::model::responses::{field_or_null, is_truthy, present, unwrap_field};
use serde_json::{Value, json};

#[test]
fn test_unwrap_field_present() {
    let body = json!({"projects": [{"id": 1}], "count": 1});
    assert_eq!(unwrap_field(body, "projects"), json!([{"id": 1}]));
}

#[test]
fn test_unwrap_field_missing_returns_body() {
    let body = json!({"errors": {"projectId": "unknown"}});
    assert_eq!(unwrap_field(body.clone(), "materials"), body);
}

#[test]
fn test_unwrap_field_empty_string_returns_body() {
    let body = json!({"lineItemsWithMaterials": ""});
    assert_eq!(unwrap_field(body.clone(), "lineItemsWithMaterials"), body);
}

#[test]
fn test_present_skips_unset_values() {
    let body = json!({"user": null, "errors": ["bad"]});
    assert!(present(&body, "user").is_none());
    assert_eq!(present(&body, "errors"), Some(&json!(["bad"])));
    assert!(present(&json!("text"), "errors").is_none());

    for unset in [json!(false), json!(0), json!("")] {
        assert!(present(&json!({"user": unset}), "user").is_none());
    }
    assert_eq!(present(&json!({"user": 12}), "user"), Some(&json!(12)));
    assert_eq!(present(&json!({"user": {}}), "user"), Some(&json!({})));
}

#[test]
fn test_is_truthy_matches_set_values() {
    assert!(is_truthy(&json!("x")));
    assert!(is_truthy(&json!(1.5)));
    assert!(!is_truthy(&Value::Null));
}

#[test]
fn test_field_or_null_on_scalar_parent() {
    assert_eq!(field_or_null(&json!("x"), "id"), Value::Null);
    assert_eq!(field_or_null(&json!({"id": "p1"}), "id"), json!("p1"));
}
