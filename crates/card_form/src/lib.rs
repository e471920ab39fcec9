//! Core of the card details form.
//!
//! The crate owns everything that is not presentation:
//!   - `format`   : card-number grouping applied on every keystroke
//!   - `field`    : the closed set of five form fields and their metadata
//!   - `store`    : `FieldSet` and the single update operation (`FieldStore`)
//!   - `validate` : shape rules producing an `ErrorSet`
//!   - `session`  : the `Editing` / `Submitted` state machine with observer hook
//!   - `preview`  : strings shown on the simulated card face
//!
//! A rendering layer only needs `CardSession`:
//! ```
//! use card_form::{CardField, CardSession, Outcome, SubmissionState};
//!
//! let mut session = CardSession::new();
//! session.update(CardField::Name, "Jane Appleseed");
//! session.update(CardField::Number, "4111222233334444");
//! session.update(CardField::ExpMonth, "12");
//! session.update(CardField::ExpYear, "29");
//! session.update(CardField::Cvc, "123");
//!
//! assert_eq!(session.fields().get(CardField::Number), "4111 2222 3333 4444");
//! assert_eq!(session.submit(), Outcome::Accepted);
//! assert_eq!(session.state(), SubmissionState::Submitted);
//! ```

pub mod errors;
pub mod field;
pub mod format;
pub mod preview;
pub mod session;
pub mod store;
pub mod validate;

pub use errors::CardFormError;
pub use field::CardField;
pub use format::format_card_number;
pub use preview::CardPreview;
pub use session::{
    CardSession, Intent, Outcome, SessionObserver, SessionSnapshot, SubmissionState,
};
pub use store::{FieldSet, FieldStore};
pub use validate::{ErrorSet, validate};
