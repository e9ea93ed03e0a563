use super::*;

use crate::state::modal::ModalState;

fn legal_message(len: usize) -> String {
    "a".repeat(len)
}

// =============================================================
// Email rules
// =============================================================

#[test]
fn email_simple_address_passes() {
    assert_eq!(validate_email("a@b.co"), Ok(()));
    assert_eq!(validate_email("first.last-1_x@mail.example.org"), Ok(()));
}

#[test]
fn email_empty_is_required_only() {
    assert_eq!(validate_email(""), Err(FieldError::EmailRequired));
    assert_eq!(validate_email("   \t"), Err(FieldError::EmailRequired));
}

#[test]
fn email_is_trimmed_before_checks() {
    assert_eq!(validate_email("  a@b.co  "), Ok(()));
}

#[test]
fn email_with_inner_space_fails_format_first() {
    assert_eq!(validate_email("bad email@x.com"), Err(FieldError::EmailFormat));
}

#[test]
fn email_shape_failures() {
    for bad in ["plain", "a@b", "@b.co", "a@.co", "a@b.", "a@@b.co", "a@b@c.co"] {
        assert_eq!(validate_email(bad), Err(FieldError::EmailFormat), "{bad}");
    }
}

#[test]
fn email_with_trailing_bang_fails_illegal_characters_only() {
    assert_eq!(validate_email("ok@x.com!"), Err(FieldError::EmailIllegalCharacters));
    assert_eq!(validate_email("o+k@x.com"), Err(FieldError::EmailIllegalCharacters));
}

// =============================================================
// Message rules
// =============================================================

#[test]
fn message_empty_is_required() {
    assert_eq!(validate_message(""), Err(FieldError::MessageRequired));
    assert_eq!(validate_message("  \n "), Err(FieldError::MessageRequired));
}

#[test]
fn message_with_space_is_illegal() {
    assert_eq!(validate_message("hello world"), Err(FieldError::MessageIllegalCharacters));
}

#[test]
fn message_illegal_check_runs_before_length() {
    let long_and_illegal = format!("{}!", legal_message(400));
    assert_eq!(validate_message(&long_and_illegal), Err(FieldError::MessageIllegalCharacters));
}

#[test]
fn message_at_limit_passes() {
    assert_eq!(validate_message(&legal_message(300)), Ok(()));
}

#[test]
fn message_over_limit_fails_length_only() {
    let err = validate_message(&legal_message(301)).unwrap_err();
    assert_eq!(err, FieldError::MessageTooLong);
    assert_eq!(err.to_string(), "Message exceeds the maximum length of 300 characters.");
}

#[test]
fn message_length_is_measured_after_trim() {
    let padded = format!("  {}  ", legal_message(300));
    assert_eq!(validate_message(&padded), Ok(()));
}

// =============================================================
// Messages
// =============================================================

#[test]
fn field_error_display_matches_ui_text() {
    assert_eq!(FieldError::EmailRequired.to_string(), "Email is required.");
    assert_eq!(FieldError::EmailFormat.to_string(), "Invalid email format.");
    assert_eq!(FieldError::EmailIllegalCharacters.to_string(), "Email contains illegal characters.");
    assert_eq!(FieldError::MessageRequired.to_string(), "Message is required.");
    assert_eq!(FieldError::MessageIllegalCharacters.to_string(), "Message contains illegal characters.");
}

// =============================================================
// Report + submit
// =============================================================

#[test]
fn both_fields_are_checked_independently() {
    let report = validate("", "");
    assert_eq!(report.email, Some(FieldError::EmailRequired));
    assert_eq!(report.message, Some(FieldError::MessageRequired));
    assert!(!report.is_valid());
}

#[test]
fn valid_form_reports_no_errors() {
    let report = validate("a@b.co", "hello");
    assert_eq!(report, ValidationReport::default());
    assert!(report.is_valid());
}

#[test]
fn submit_clears_previous_errors() {
    let mut state = ContactState::default();
    assert!(!state.submit());
    assert_eq!(state.email_error, Some(FieldError::EmailRequired));
    assert_eq!(state.message_error, Some(FieldError::MessageRequired));

    state.set_email("a@b.co".to_owned());
    state.set_message("hello".to_owned());
    assert!(state.submit());
    assert_eq!(state.email_error, None);
    assert_eq!(state.message_error, None);
}

#[test]
fn submit_keeps_one_error_per_field() {
    let mut state = ContactState::default();
    state.set_email("ok@x.com!".to_owned());
    state.set_message(legal_message(301));
    assert!(!state.submit());
    assert_eq!(state.email_error, Some(FieldError::EmailIllegalCharacters));
    assert_eq!(state.message_error, Some(FieldError::MessageTooLong));
}

// =============================================================
// Counter
// =============================================================

#[test]
fn counter_tracks_raw_input_length() {
    let at_limit = legal_message(300);
    let over_limit = legal_message(301);
    for input in ["", "a", "  padded  ", "hello world!", at_limit.as_str(), over_limit.as_str()] {
        let counter = CharacterCounter::for_input(input);
        assert_eq!(counter.text(), format!("Characters: {}/300", input.len()));
        assert_eq!(counter.color() == COUNTER_ALERT_COLOR, input.len() > 300);
    }
}

#[test]
fn counter_turns_red_only_past_limit() {
    assert_eq!(CharacterCounter::for_input(&legal_message(300)).color(), "black");
    assert_eq!(CharacterCounter::for_input(&legal_message(301)).color(), "red");
}

#[test]
fn set_message_updates_counter_regardless_of_validity() {
    let mut state = ContactState::default();
    state.set_message("no good!".to_owned());
    assert_eq!(state.counter.text(), "Characters: 8/300");
    assert!(state.message_error.is_none(), "typing never validates");
}

#[test]
fn counter_counts_astral_characters_as_two_units() {
    assert_eq!(CharacterCounter::for_input("😀").text(), "Characters: 2/300");
    assert_eq!(CharacterCounter::for_input("é").text(), "Characters: 1/300");

    let emoji = "😀".repeat(150);
    assert_eq!(CharacterCounter::for_input(&emoji).color(), "black");
    let emoji_over = format!("{emoji}a");
    assert_eq!(CharacterCounter::for_input(&emoji_over).text(), "Characters: 301/300");
    assert_eq!(CharacterCounter::for_input(&emoji_over).color(), "red");
}

// =============================================================
// Submit -> modal
// =============================================================

#[test]
fn valid_submit_opens_modal_with_success_message() {
    let mut contact = ContactState::default();
    let mut modal = ModalState::default();
    contact.set_email("someone@example.com".to_owned());
    contact.set_message("hello".to_owned());

    assert!(submit_contact(&mut contact, &mut modal));
    assert!(modal.is_visible());
    assert_eq!(modal.message.as_deref(), Some(SUCCESS_MESSAGE));
    assert_eq!(contact.email_error, None);
    assert_eq!(contact.message_error, None);
}

#[test]
fn invalid_submit_leaves_modal_hidden() {
    let mut contact = ContactState::default();
    let mut modal = ModalState::default();
    contact.set_message("hello world".to_owned());

    assert!(!submit_contact(&mut contact, &mut modal));
    assert!(!modal.is_visible());
    assert_eq!(contact.email_error, Some(FieldError::EmailRequired));
    assert_eq!(contact.message_error, Some(FieldError::MessageIllegalCharacters));
}
