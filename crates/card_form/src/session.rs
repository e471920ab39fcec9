//! Submission state machine.
//!
//! `CardSession` is the state container a rendering layer talks to. It owns
//! the `FieldStore`, the last `ErrorSet` and the `SubmissionState`:
//!
//! ```text
//!            submit() / errors empty
//!   Editing ─────────────────────────▶ Submitted
//!      ▲  │ submit() / errors                │
//!      │  └──────────┐ (stay, store errors)  │
//!      │             ▼                       │
//!      └──────────── reset() ◀───────────────┘
//!          (clears fields and errors)
//! ```
//!
//! Operations that do not apply in the current state (`reset()` while
//! editing, `submit()` or `update()` after submission) return
//! [`Outcome::Ignored`] and leave everything untouched.
//!
//! After each mutation every registered [`SessionObserver`] receives a
//! borrowed [`SessionSnapshot`]; this is the redraw hook for the UI.

use serde::Serialize;
use strum::Display;
use tracing::{debug, info, warn};

use crate::{
    CardField, CardFormError, ErrorSet, FieldSet, FieldStore, validate::validate,
};

/// Which view the rendering layer should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display)]
pub enum SubmissionState {
    /// Form is shown and accepts input.
    #[default]
    Editing,
    /// Details were accepted; confirmation is shown.
    Submitted,
}

/// Inbound user intentions, one per discrete UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Raw value of a field changed.
    Change { field: CardField, raw: String },
    Submit,
    /// Leave the confirmation for an empty form.
    Continue,
}

/// Result of applying one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Updated(CardField),
    Accepted,
    Rejected { errors: usize },
    Reset,
    /// Operation not valid in the current state; nothing changed.
    Ignored,
}

/// Borrowed view of everything the rendering layer displays.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionSnapshot<'a> {
    pub state: SubmissionState,
    pub fields: &'a FieldSet,
    pub errors: &'a ErrorSet,
}

/// Called after every state mutation.
pub trait SessionObserver {
    fn on_change(&self, snapshot: &SessionSnapshot<'_>);
}

impl<F> SessionObserver for F
where
    F: Fn(&SessionSnapshot<'_>),
{
    fn on_change(&self, snapshot: &SessionSnapshot<'_>) {
        self(snapshot)
    }
}

#[derive(Default)]
pub struct CardSession {
    store: FieldStore,
    errors: ErrorSet,
    state: SubmissionState,
    observers: Vec<Box<dyn SessionObserver + Send>>,
}

impl std::fmt::Debug for CardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardSession")
            .field("state", &self.state)
            .field("errors", &self.errors)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl CardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`CardSession::subscribe`].
    pub fn with_observer(mut self, observer: impl SessionObserver + Send + 'static) -> Self {
        self.subscribe(observer);
        self
    }

    /// Register a hook invoked after each mutation.
    pub fn subscribe(&mut self, observer: impl SessionObserver + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn fields(&self) -> &FieldSet {
        self.store.fields()
    }

    /// Errors from the last rejected submit (empty otherwise).
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            state: self.state,
            fields: self.store.fields(),
            errors: &self.errors,
        }
    }

    /// Reducer entry point: dispatch one intent.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Change { field, raw } => self.update(field, &raw),
            Intent::Submit => self.submit(),
            Intent::Continue => self.reset(),
        }
    }

    /// Forward a raw field value to the store. Ignored once submitted.
    ///
    /// Stored errors are left as they are; they are recomputed on the next
    /// submit only.
    pub fn update(&mut self, field: CardField, raw: &str) -> Outcome {
        if self.state != SubmissionState::Editing {
            warn!(field = field.key(), "field change ignored after submission");
            return Outcome::Ignored;
        }
        self.store.update(field, raw);
        self.notify();
        Outcome::Updated(field)
    }

    /// [`CardSession::update`] addressed by the field's wire name.
    pub fn update_named(&mut self, name: &str, raw: &str) -> Result<Outcome, CardFormError> {
        if self.state != SubmissionState::Editing {
            warn!(name, "field change ignored after submission");
            return Ok(Outcome::Ignored);
        }
        let field = self.store.update_named(name, raw)?;
        self.notify();
        Ok(Outcome::Updated(field))
    }

    /// Validate the current fields; accept when nothing fails.
    pub fn submit(&mut self) -> Outcome {
        if self.state != SubmissionState::Editing {
            warn!(state = %self.state, "submit ignored");
            return Outcome::Ignored;
        }
        self.errors = validate(self.store.fields());
        let outcome = if self.errors.is_empty() {
            self.state = SubmissionState::Submitted;
            info!("card details accepted");
            Outcome::Accepted
        } else {
            let failing: Vec<&str> = self.errors.iter().map(|(f, _)| f.key()).collect();
            info!(errors = self.errors.len(), ?failing, "card details rejected");
            Outcome::Rejected {
                errors: self.errors.len(),
            }
        };
        self.notify();
        outcome
    }

    /// "Continue" after a successful submit: back to an empty form.
    pub fn reset(&mut self) -> Outcome {
        if self.state != SubmissionState::Submitted {
            debug!(state = %self.state, "reset ignored");
            return Outcome::Ignored;
        }
        self.store.clear();
        self.errors.clear();
        self.state = SubmissionState::Editing;
        info!("session reset");
        self.notify();
        Outcome::Reset
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer.on_change(&snapshot);
        }
    }
}
