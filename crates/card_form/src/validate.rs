//! Shape validation of the five fields.
//!
//! Rules check format only: digit counts and grouping. There is no range check
//! on the month and no checksum on the card number.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::{CardField, FieldSet};

pub const NAME_REQUIRED: &str = "Name is required";
pub const NUMBER_INVALID: &str = "Card number must be 16 digits";
pub const MONTH_INVALID: &str = "MM must be 2 digits";
pub const YEAR_INVALID: &str = "YY must be 2 digits";
pub const CVC_INVALID: &str = "CVC must be 3 digits";

// `[0-9]` rather than `\d`: the latter matches any Unicode digit.
lazy_static! {
    static ref CARD_NUMBER: Regex =
        Regex::new(r"^[0-9]{4} [0-9]{4} [0-9]{4} [0-9]{4}$").expect("card number pattern");
    static ref TWO_DIGITS: Regex = Regex::new(r"^[0-9]{2}$").expect("two digit pattern");
    static ref THREE_DIGITS: Regex = Regex::new(r"^[0-9]{3}$").expect("three digit pattern");
}

/// Per-field validation messages. A field is present only while it fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet(BTreeMap<CardField, String>);

impl ErrorSet {
    pub fn get(&self, field: CardField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: CardField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (CardField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// The single line shown under the MM/YY pair: month first, then year.
    pub fn expiry_message(&self) -> Option<&str> {
        self.get(CardField::ExpMonth)
            .or_else(|| self.get(CardField::ExpYear))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    fn insert(&mut self, field: CardField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Check a single value against the rule for `field`.
pub fn check_field(field: CardField, value: &str) -> Result<(), &'static str> {
    let ok = match field {
        CardField::Name => !value.trim().is_empty(),
        CardField::Number => CARD_NUMBER.is_match(value),
        CardField::ExpMonth | CardField::ExpYear => TWO_DIGITS.is_match(value),
        CardField::Cvc => THREE_DIGITS.is_match(value),
    };
    if ok {
        Ok(())
    } else {
        Err(message_for(field))
    }
}

fn message_for(field: CardField) -> &'static str {
    match field {
        CardField::Name => NAME_REQUIRED,
        CardField::Number => NUMBER_INVALID,
        CardField::ExpMonth => MONTH_INVALID,
        CardField::ExpYear => YEAR_INVALID,
        CardField::Cvc => CVC_INVALID,
    }
}

/// Evaluate all five rules (no short-circuit) and collect the failures.
///
/// An empty result means the fields may be submitted.
pub fn validate(fields: &FieldSet) -> ErrorSet {
    let mut errors = ErrorSet::default();
    for (field, value) in fields.iter() {
        if let Err(message) = check_field(field, value) {
            errors.insert(field, message);
        }
    }
    errors
}
