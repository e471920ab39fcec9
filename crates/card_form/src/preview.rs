use serde::Serialize;

use crate::FieldSet;

pub const NUMBER_PLACEHOLDER: &str = "0000 0000 0000 0000";
pub const NAME_PLACEHOLDER: &str = "JANE APPLESEED";
pub const EXPIRY_PART_PLACEHOLDER: &str = "00";
pub const CVC_PLACEHOLDER: &str = "000";

/// Text printed on the simulated card, front and back.
///
/// Empty fields fall back to placeholders so the card never looks blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardPreview {
    pub number: String,
    pub name: String,
    /// `MM/YY`
    pub expiry: String,
    pub cvc: String,
}

impl CardPreview {
    pub fn from_fields(fields: &FieldSet) -> Self {
        Self {
            number: or_placeholder(&fields.number, NUMBER_PLACEHOLDER),
            name: or_placeholder(&fields.name, NAME_PLACEHOLDER),
            expiry: format!(
                "{}/{}",
                or_placeholder(&fields.exp_month, EXPIRY_PART_PLACEHOLDER),
                or_placeholder(&fields.exp_year, EXPIRY_PART_PLACEHOLDER)
            ),
            cvc: or_placeholder(&fields.cvc, CVC_PLACEHOLDER),
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_fields_show_placeholders() {
        assert_eq!(
            CardPreview::from_fields(&FieldSet::default()),
            CardPreview {
                number: "0000 0000 0000 0000".into(),
                name: "JANE APPLESEED".into(),
                expiry: "00/00".into(),
                cvc: "000".into(),
            }
        );
    }

    #[test]
    fn partial_input_is_shown_as_typed() {
        let fields = FieldSet {
            name: "jane doe".into(),
            number: "4111 22".into(),
            exp_year: "2".into(),
            ..FieldSet::default()
        };
        let preview = CardPreview::from_fields(&fields);
        assert_eq!(preview.name, "jane doe");
        assert_eq!(preview.number, "4111 22");
        assert_eq!(preview.expiry, "00/2");
        assert_eq!(preview.cvc, "000");
    }

    #[test]
    fn whitespace_name_is_not_replaced() {
        let fields = FieldSet {
            name: " ".into(),
            ..FieldSet::default()
        };
        assert_eq!(CardPreview::from_fields(&fields).name, " ");
    }
}
