use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardFormError {
    /// A field name outside the closed set of five form fields.
    #[error("unknown card field: {0}")]
    InvalidField(String),
}
