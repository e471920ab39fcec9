//! Field values and the single update operation.
//!
//! `FieldSet` is the source of truth for what the user typed. Its keys are
//! struct fields, so the set of keys cannot grow or shrink at runtime; only
//! the values change. `FieldStore` is the only writer and applies the
//! card-number formatting on the way in.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{CardField, CardFormError, format::format_card_number};

/// Current value of each of the five form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSet {
    pub name: String,
    pub number: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvc: String,
}

impl FieldSet {
    /// Borrow the value stored for `field`.
    pub fn get(&self, field: CardField) -> &str {
        match field {
            CardField::Name => &self.name,
            CardField::Number => &self.number,
            CardField::ExpMonth => &self.exp_month,
            CardField::ExpYear => &self.exp_year,
            CardField::Cvc => &self.cvc,
        }
    }

    fn slot_mut(&mut self, field: CardField) -> &mut String {
        match field {
            CardField::Name => &mut self.name,
            CardField::Number => &mut self.number,
            CardField::ExpMonth => &mut self.exp_month,
            CardField::ExpYear => &mut self.exp_year,
            CardField::Cvc => &mut self.cvc,
        }
    }

    /// True when every field is the empty string.
    pub fn is_empty(&self) -> bool {
        CardField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// `(field, value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (CardField, &str)> {
        CardField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Owner of the `FieldSet`; every write goes through [`FieldStore::update`].
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    fields: FieldSet,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Store `raw` for `field` (last write wins) and return the stored value.
    ///
    /// `Number` is passed through [`format_card_number`]; every other field is
    /// stored verbatim.
    pub fn update(&mut self, field: CardField, raw: &str) -> &str {
        let value = match field {
            CardField::Number => format_card_number(raw),
            _ => raw.to_string(),
        };
        // Card data never reaches the log, only the key and a length.
        debug!(field = field.key(), len = value.chars().count(), "field updated");
        let slot = self.fields.slot_mut(field);
        *slot = value;
        slot.as_str()
    }

    /// Like [`FieldStore::update`], addressed by the field's wire name.
    ///
    /// An unknown name is a caller bug: it trips a debug assertion and, in
    /// release builds, returns `InvalidField` without touching any value.
    /// Returns the field that was written.
    pub fn update_named(&mut self, name: &str, raw: &str) -> Result<CardField, CardFormError> {
        match CardField::from_str(name) {
            Ok(field) => {
                self.update(field, raw);
                Ok(field)
            }
            Err(_) => {
                error!(name, "update for unknown card field");
                debug_assert!(false, "unknown card field `{name}`");
                Err(CardFormError::InvalidField(name.to_string()))
            }
        }
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        self.fields = FieldSet::default();
    }
}
