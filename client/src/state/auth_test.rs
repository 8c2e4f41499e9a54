use super::*;
use peerpoint::types::User;

fn session() -> Session {
    Session {
        user: User {
            id: "u7".to_owned(),
            name: "Karan V.".to_owned(),
            email: "karan@example.edu".to_owned(),
            role: "STUDENT".to_owned(),
        },
        token: "jwt".to_owned(),
    }
}

#[test]
fn default_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.display_name(), None);
    assert_eq!(state.user_id(), None);
}

#[test]
fn signed_in_exposes_identity() {
    let state = AuthState::new(Some(session()));
    assert!(state.is_authenticated());
    assert_eq!(state.display_name(), Some("Karan V."));
    assert_eq!(state.user_id(), Some("u7"));
}
