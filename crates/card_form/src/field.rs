//! The closed set of form fields.
//!
//! Every place that needs to address a field goes through `CardField`, so a
//! typo in a key is a compile error instead of a silently created entry.
//! The string form (`name`, `number`, `expMonth`, `expYear`, `cvc`) is only
//! used at the edges: parsing caller-provided names and serializing snapshots.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// One of the five inputs of the card form, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum CardField {
    Name,
    Number,
    ExpMonth,
    ExpYear,
    Cvc,
}

impl CardField {
    /// All fields in form order.
    pub const ALL: [CardField; 5] = [
        CardField::Name,
        CardField::Number,
        CardField::ExpMonth,
        CardField::ExpYear,
        CardField::Cvc,
    ];

    /// Stable key used when the field is addressed by name.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Position in the form (0-based).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The field after this one, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// The field before this one, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    pub fn label(self) -> &'static str {
        match self {
            CardField::Name => "CARDHOLDER NAME",
            CardField::Number => "CARD NUMBER",
            CardField::ExpMonth => "EXP. MONTH (MM)",
            CardField::ExpYear => "EXP. YEAR (YY)",
            CardField::Cvc => "CVC",
        }
    }

    /// Hint shown in an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            CardField::Name => "e.g. Jane Appleseed",
            CardField::Number => "e.g. 1234 5678 9123 0000",
            CardField::ExpMonth => "MM",
            CardField::ExpYear => "YY",
            CardField::Cvc => "e.g. 123",
        }
    }

    /// Maximum number of characters the input accepts while typing.
    ///
    /// The store never truncates; the cap belongs to whoever collects keystrokes.
    pub fn max_len(self) -> Option<usize> {
        match self {
            CardField::Name => None,
            CardField::Number => Some(19),
            CardField::ExpMonth | CardField::ExpYear => Some(2),
            CardField::Cvc => Some(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn keys_match_wire_names() {
        let keys: Vec<&str> = CardField::iter().map(CardField::key).collect();
        assert_eq!(keys, ["name", "number", "expMonth", "expYear", "cvc"]);
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!(CardField::from_str("expYear"), Ok(CardField::ExpYear));
        assert_eq!(CardField::from_str("cvc"), Ok(CardField::Cvc));
        assert!(CardField::from_str("ExpYear").is_err());
        assert!(CardField::from_str("zip").is_err());
    }

    #[test]
    fn display_uses_key() {
        assert_eq!(CardField::ExpMonth.to_string(), "expMonth");
    }

    #[test]
    fn focus_order_wraps() {
        assert_eq!(CardField::Cvc.next(), CardField::Name);
        assert_eq!(CardField::Name.prev(), CardField::Cvc);
        assert_eq!(CardField::Number.next(), CardField::ExpMonth);
    }

    #[test]
    fn all_is_in_index_order() {
        for (i, field) in CardField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }
}
