use super::*;
use crate::net::types::User;

fn signed_in(roles: &[Role]) -> AuthState {
    AuthState {
        user: Some(User { username: "u".to_owned(), roles: roles.to_vec() }),
        loading: false,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&AuthState { user: None, loading: false }));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState { user: None, loading: true }));
    assert_eq!(guard_target(&AuthState { user: None, loading: true }, &[Role::Admin]), None);
}

#[test]
fn staff_land_on_dashboard_and_clients_on_client_page() {
    assert_eq!(landing_route(&[Role::Admin]), "/dashboard");
    assert_eq!(landing_route(&[Role::Guard]), "/dashboard");
    assert_eq!(landing_route(&[Role::Client]), "/cliente");
    assert_eq!(landing_route(&[]), "/cliente");
}

#[test]
fn landing_follows_first_listed_role() {
    assert_eq!(landing_route(&[Role::Client, Role::Admin]), "/cliente");
    assert_eq!(landing_route(&[Role::Guard, Role::Client]), "/dashboard");
}

#[test]
fn guard_sends_signed_out_users_to_login() {
    assert_eq!(guard_target(&AuthState::default(), &[]), Some("/login"));
}

#[test]
fn guard_sends_wrong_role_to_landing() {
    assert_eq!(guard_target(&signed_in(&[Role::Client]), &[Role::Admin]), Some("/cliente"));
    assert_eq!(guard_target(&signed_in(&[Role::Guard]), &[Role::Admin]), Some("/dashboard"));
}

#[test]
fn guard_allows_matching_role() {
    assert_eq!(guard_target(&signed_in(&[Role::Guard]), &[Role::Admin, Role::Guard]), None);
    assert_eq!(guard_target(&signed_in(&[Role::Client]), &[]), None);
}
