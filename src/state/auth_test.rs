use super::*;

fn user(rol: &str) -> User {
    User {
        rol: rol.to_owned(),
        nombre: None,
        email: Some("a@x.com".to_owned()),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_defaults() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(state.destination.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Role routing
// =============================================================

#[test]
fn role_route_admin_goes_to_admin() {
    assert_eq!(role_route("Admin"), Some("/admin"));
}

#[test]
fn role_route_cliente_goes_to_user() {
    assert_eq!(role_route("Cliente"), Some("/user"));
}

#[test]
fn role_route_is_case_sensitive_and_rejects_unknowns() {
    assert_eq!(role_route("admin"), None);
    assert_eq!(role_route("cliente"), None);
    assert_eq!(role_route("Moderator"), None);
    assert_eq!(role_route(""), None);
}

// =============================================================
// Login application
// =============================================================

#[test]
fn apply_login_stores_token_user_and_route() {
    let mut state = AuthState::default();
    state.apply_login("t1".to_owned(), user("Cliente"));

    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(state.user.as_ref().map(|u| u.rol.as_str()), Some("Cliente"));
    assert_eq!(state.destination, Some("/user"));
    assert!(state.is_authenticated());
}

#[test]
fn apply_login_admin_routes_to_admin() {
    let mut state = AuthState::default();
    state.apply_login("t1".to_owned(), user("Admin"));
    assert_eq!(state.destination, Some("/admin"));
}

#[test]
fn apply_login_unknown_role_keeps_token_without_destination() {
    let mut state = AuthState::default();
    state.apply_login("t1".to_owned(), user("Soporte"));

    assert!(state.is_authenticated());
    assert!(state.destination.is_none());
}

// =============================================================
// Session restore
// =============================================================

#[test]
fn restore_routes_to_dashboard() {
    let mut state = AuthState::default();
    state.restore("stored".to_owned());

    assert_eq!(state.token.as_deref(), Some("stored"));
    assert!(state.user.is_none());
    assert_eq!(state.destination, Some("/dashboard"));
}
