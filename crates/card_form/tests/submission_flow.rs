//! End-to-end flows through the public `CardSession` API:
//! - keystroke-by-keystroke entry of a card number
//! - accept / reject / continue cycles
//! - observer-driven redraw bookkeeping
//! - JSON shape of the outbound snapshot

use std::sync::{Arc, Mutex};

use card_form::{
    CardField, CardPreview, CardSession, Intent, Outcome, SessionSnapshot, SubmissionState,
    validate,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn jane() -> CardSession {
    let mut session = CardSession::new();
    session.update(CardField::Name, "Jane");
    session.update(CardField::Number, "4111 2222 3333 4444");
    session.update(CardField::ExpMonth, "12");
    session.update(CardField::ExpYear, "29");
    session.update(CardField::Cvc, "123");
    session
}

#[test]
fn number_typed_keystroke_by_keystroke() {
    let mut session = CardSession::new();
    let mut typed = String::new();
    for digit in "4111222233334444".chars() {
        // The input echoes the stored (formatted) value, then gets one more char.
        typed = format!("{}{}", session.fields().number, digit);
        session.update(CardField::Number, &typed);
    }
    assert_eq!(typed, "4111 2222 3333 4444");
    assert_eq!(session.fields().number, "4111 2222 3333 4444");
}

#[test]
fn raw_number_is_grouped() {
    let mut session = CardSession::new();
    session.update(CardField::Number, "4111222233334444");
    assert_eq!(session.fields().number, "4111 2222 3333 4444");
}

#[test]
fn complete_details_are_accepted() {
    let mut session = jane();
    assert_eq!(session.submit(), Outcome::Accepted);
    assert!(session.errors().is_empty());
    assert_eq!(session.state(), SubmissionState::Submitted);
}

#[test]
fn missing_name_is_the_only_error() {
    let mut session = jane();
    session.update(CardField::Name, "");
    assert_eq!(session.submit(), Outcome::Rejected { errors: 1 });
    let errors: Vec<(CardField, &str)> = session.errors().iter().collect();
    assert_eq!(errors, vec![(CardField::Name, "Name is required")]);
    assert_eq!(session.state(), SubmissionState::Editing);
}

#[test]
fn single_digit_month_is_rejected_but_thirteen_is_not() {
    let mut session = jane();
    session.update(CardField::ExpMonth, "1");
    session.submit();
    assert_eq!(
        session.errors().get(CardField::ExpMonth),
        Some("MM must be 2 digits")
    );

    session.update(CardField::ExpMonth, "13");
    assert_eq!(session.submit(), Outcome::Accepted);
}

#[test]
fn continue_returns_to_an_empty_form() {
    let mut session = jane();
    session.apply(Intent::Submit);
    assert_eq!(session.apply(Intent::Continue), Outcome::Reset);
    assert!(session.fields().is_empty());
    assert!(session.errors().is_empty());
    assert_eq!(session.state(), SubmissionState::Editing);
    assert_eq!(
        CardPreview::from_fields(session.fields()).number,
        "0000 0000 0000 0000"
    );

    // A second round works the same way.
    session.update(CardField::Name, "Jane");
    assert_eq!(session.submit(), Outcome::Rejected { errors: 4 });
}

#[test]
fn observer_sees_every_view_change() {
    let states = Arc::new(Mutex::new(Vec::new()));
    let sink = states.clone();
    let mut session = jane().with_observer(move |s: &SessionSnapshot<'_>| {
        sink.lock().expect("lock").push(s.state);
    });

    session.update(CardField::Cvc, "12");
    session.submit();
    session.update(CardField::Cvc, "123");
    session.submit();
    session.reset();

    assert_eq!(
        *states.lock().expect("lock"),
        vec![
            SubmissionState::Editing,
            SubmissionState::Editing,
            SubmissionState::Editing,
            SubmissionState::Submitted,
            SubmissionState::Editing,
        ]
    );
}

#[test]
fn snapshot_serializes_for_display() {
    let mut session = jane();
    session.update(CardField::Cvc, "");
    session.submit();
    let json = serde_json::to_value(session.snapshot()).expect("serialize");
    assert_eq!(json["state"], "Editing");
    assert_eq!(json["fields"]["number"], "4111 2222 3333 4444");
    assert_eq!(json["fields"]["expMonth"], "12");
    assert_eq!(json["errors"]["cvc"], "CVC must be 3 digits");
    assert!(json["errors"].get("name").is_none());
}

proptest! {
    #[test]
    fn submit_accepts_iff_validation_is_empty(
        name in "[ A-Za-z]{0,5}",
        number in "[0-9]{0,18}",
        month in "[0-9]{0,3}",
        year in "[0-9]{0,3}",
        cvc in "[0-9]{0,4}",
    ) {
        let mut session = CardSession::new();
        session.update(CardField::Name, &name);
        session.update(CardField::Number, &number);
        session.update(CardField::ExpMonth, &month);
        session.update(CardField::ExpYear, &year);
        session.update(CardField::Cvc, &cvc);

        let expected_empty = validate(session.fields()).is_empty();
        let outcome = session.submit();
        prop_assert_eq!(outcome == Outcome::Accepted, expected_empty);
        prop_assert_eq!(session.state() == SubmissionState::Submitted, expected_empty);
    }

    #[test]
    fn reset_after_submit_always_yields_initial_state(cvc in "[0-9]{3}", year in "[0-9]{2}") {
        let mut session = jane();
        session.update(CardField::Cvc, &cvc);
        session.update(CardField::ExpYear, &year);
        prop_assert_eq!(session.submit(), Outcome::Accepted);
        prop_assert_eq!(session.reset(), Outcome::Reset);
        prop_assert!(session.fields().is_empty());
        prop_assert!(session.errors().is_empty());
        prop_assert_eq!(session.state(), SubmissionState::Editing);
    }
}
