use std::env;
use veem_client::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};

// Each test uses its own variable so parallel tests do not interfere

#[test]
fn test_get_env_or_default_parses_value() {
    unsafe { env::set_var("VEEM_TEST_TIMEOUT_PARSE", "45") };
    assert_eq!(get_env_or_default("VEEM_TEST_TIMEOUT_PARSE", 30u64), 45);
}

#[test]
fn test_get_env_or_default_falls_back_on_garbage() {
    unsafe { env::set_var("VEEM_TEST_TIMEOUT_GARBAGE", "soon") };
    assert_eq!(get_env_or_default("VEEM_TEST_TIMEOUT_GARBAGE", 30u64), 30);
}

#[test]
fn test_get_env_or_default_missing() {
    assert_eq!(
        get_env_or_default("VEEM_TEST_NEVER_SET", String::from("fallback")),
        "fallback"
    );
}

#[test]
fn test_get_env_or_none_ignores_blank() {
    unsafe { env::set_var("VEEM_TEST_BLANK_URL", "  ") };
    assert_eq!(get_env_or_none::<String>("VEEM_TEST_BLANK_URL"), None);

    unsafe { env::set_var("VEEM_TEST_SET_URL", "http://localhost:8080") };
    assert_eq!(
        get_env_or_none::<String>("VEEM_TEST_SET_URL").as_deref(),
        Some("http://localhost:8080")
    );
}

#[test]
fn test_get_env_flag() {
    unsafe { env::set_var("VEEM_TEST_FLAG_OFF", "false") };
    unsafe { env::set_var("VEEM_TEST_FLAG_ON", "Yes") };
    unsafe { env::set_var("VEEM_TEST_FLAG_BAD", "maybe") };

    assert!(!get_env_flag("VEEM_TEST_FLAG_OFF", true));
    assert!(get_env_flag("VEEM_TEST_FLAG_ON", false));
    assert!(get_env_flag("VEEM_TEST_FLAG_BAD", true));
    assert!(!get_env_flag("VEEM_TEST_FLAG_UNSET", false));
}
