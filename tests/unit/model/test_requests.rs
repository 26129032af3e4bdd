use project_client::model::requests::Payload;
use reqwest::Method;
use reqwest::multipart::Form;
use serde_json::json;

#[test]
fn test_payload_default_is_get() {
    let payload = Payload::default();
    assert!(!payload.is_some());
    assert_eq!(payload.method(), Method::GET);
}

#[test]
fn test_json_payload_is_post() {
    let payload = Payload::json(&json!({"quantity": 3})).unwrap();
    assert_eq!(payload.method(), Method::POST);
    assert!(format!("{payload:?}").contains("quantity"));
}

#[test]
fn test_payload_from_form_is_post() {
    let payload: Payload = Form::new().text("name", "plywood").into();
    assert_eq!(payload.method(), Method::POST);
    assert!(format!("{payload:?}").starts_with("Form"));
}
