use super::*;

#[test]
fn defaults_match_constants() {
    let cfg = HooksConfig::default().with_system_token(None);
    assert_eq!(cfg.token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
    assert_eq!(cfg.login_route, "/login");
    assert_eq!(cfg.assertion_header, "X-JWT-Assertion");
    assert_eq!(cfg.fallback_error, "Something went wrong");
    assert_eq!(cfg.system_token, None);
}

#[test]
fn builder_methods_override_fields() {
    let cfg = HooksConfig::default()
        .with_token_storage_key("jwt")
        .with_login_route("/signin")
        .with_assertion_header("Authorization")
        .with_system_token(Some("sys".to_owned()))
        .with_fallback_error("oops");
    assert_eq!(cfg.token_storage_key, "jwt");
    assert_eq!(cfg.login_route, "/signin");
    assert_eq!(cfg.assertion_header, "Authorization");
    assert_eq!(cfg.system_token.as_deref(), Some("sys"));
    assert_eq!(cfg.fallback_error, "oops");
}

#[test]
fn build_token_ignores_blank_values() {
    assert_eq!(system_token_from_build(None), None);
    assert_eq!(system_token_from_build(Some("   ")), None);
    assert_eq!(system_token_from_build(Some(" abc ")), Some("abc".to_owned()));
}
