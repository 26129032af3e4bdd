use project_client::constants::REQUEST_ID_LENGTH;
use project_client::utils::id::request_id;

#[test]
fn test_request_id_length_and_alphabet() {
    let id = request_id();
    assert_eq!(id.len(), REQUEST_ID_LENGTH);
    assert!(id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[test]
fn test_request_id_uniqueness() {
    assert_ne!(request_id(), request_id());
}
