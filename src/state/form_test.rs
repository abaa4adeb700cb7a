use super::*;

fn filled() -> AccountDraft {
    let mut d = AccountDraft::default();
    d.set(Field::FirstName, "Ana".to_owned());
    d.set(Field::LastName, "Lopez".to_owned());
    d.set(Field::Email, "a@x.com".to_owned());
    d.set(Field::Phone, "555".to_owned());
    d.set(Field::Password, "p1".to_owned());
    d.set(Field::ConfirmPassword, "p1".to_owned());
    d
}

// =============================================================
// Draft edits
// =============================================================

#[test]
fn set_keeps_last_write_per_field() {
    let mut d = AccountDraft::default();
    d.set(Field::Email, "first@x.com".to_owned());
    d.set(Field::Email, "second@x.com".to_owned());
    assert_eq!(d.get(Field::Email), "second@x.com");
}

#[test]
fn set_leaves_other_fields_untouched() {
    let mut d = AccountDraft::default();
    d.set(Field::FirstName, "Ana".to_owned());
    assert_eq!(d.get(Field::FirstName), "Ana");
    for field in [
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
    ] {
        assert_eq!(d.get(field), "", "{field:?} should stay empty");
    }
}

#[test]
fn clear_resets_every_field() {
    let mut d = filled();
    d.clear();
    assert_eq!(d, AccountDraft::default());
}

// =============================================================
// Password confirmation
// =============================================================

#[test]
fn passwords_match_detects_mismatch() {
    let mut d = filled();
    assert!(d.passwords_match());
    d.set(Field::ConfirmPassword, "other".to_owned());
    assert!(!d.passwords_match());
}

#[test]
fn empty_passwords_count_as_matching() {
    let d = AccountDraft::default();
    assert!(d.passwords_match());
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn register_request_carries_exactly_five_wire_fields() {
    let body = filled().to_register_request();
    let json = serde_json::to_value(&body).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "nombre": "Ana",
            "apellido": "Lopez",
            "email": "a@x.com",
            "telefono": "555",
            "password": "p1"
        })
    );
}

#[test]
fn login_request_carries_email_and_password_only() {
    let body = filled().to_login_request();
    let json = serde_json::to_value(&body).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "email": "a@x.com",
            "password": "p1"
        })
    );
}

// =============================================================
// Submit phase
// =============================================================

#[test]
fn submit_phase_defaults_to_idle() {
    assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
}

#[test]
fn only_submitting_is_in_flight() {
    assert!(SubmitPhase::Submitting.in_flight());
    assert!(!SubmitPhase::Idle.in_flight());
    assert!(!SubmitPhase::Done.in_flight());
    assert!(!SubmitPhase::Failed.in_flight());
}
