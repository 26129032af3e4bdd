use project_client::utils::config::get_env_or_default;
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("PC_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("PC_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("PC_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("PC_MISSING_VAR");
    }
    let result: String = get_env_or_default("PC_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("PC_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("PC_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("PC_TEST_VAR_INVALID");
    }
}
