use serde::{Deserialize, Serialize};
use strum::Display;

/// Everything the app loop can be asked to do.
///
/// Components return actions from event handlers; the loop applies the ones
/// it owns (session transitions, lifecycle) and redraws on `Render`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    /// Validate the form.
    Submit,
    /// Leave the confirmation view with an empty form.
    Continue,
    /// Component state changed locally; redraw without touching the session.
    Update,
}
