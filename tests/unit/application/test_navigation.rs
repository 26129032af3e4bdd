use project_client::prelude::*;

#[test]
fn test_route_names() {
    assert_eq!(Route::Login.name(), "Login");
    assert_eq!(Route::DesignProject { id: json!(4) }.name(), "Design Project");
    assert_eq!(Route::WaitList.name(), "WaitList");
}

#[test]
fn test_route_serializes_with_name_and_params() {
    let route = Route::LeagueRegistration {
        id: json!(7),
        sex: json!("M"),
        age: json!(40),
    };
    let value = serde_json::to_value(&route).unwrap();
    assert_eq!(
        value,
        json!({"name": "LeagueRegistration", "params": {"id": 7, "sex": "M", "age": 40}})
    );

    let value = serde_json::to_value(Route::DesignProject { id: json!("p1") }).unwrap();
    assert_eq!(value["name"], json!("Design Project"));

    let value = serde_json::to_value(Route::Home).unwrap();
    assert_eq!(value, json!({"name": "Home"}));
}

#[test]
fn test_recording_navigator() {
    let navigator = RecordingNavigator::new();
    assert!(navigator.last().is_none());
    navigator.push(Route::Login);
    navigator.push(Route::Home);
    assert_eq!(navigator.routes(), vec![Route::Login, Route::Home]);
    assert_eq!(navigator.last(), Some(Route::Home));
}

#[test]
fn test_recording_error_sink() {
    let sink = RecordingErrorSink::new();
    sink.commit(json!(["one"]));
    sink.commit(json!({"field": "two"}));
    assert_eq!(sink.errors().len(), 2);
}

#[test]
fn test_log_integrations_do_not_panic() {
    LogNavigator.push(Route::LandingPage);
    LogErrorSink.commit(json!("oops"));
}
