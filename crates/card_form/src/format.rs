//! Card-number grouping.

/// Digits per printed group.
pub const GROUP_LEN: usize = 4;

/// Keep only ASCII digits and group them in fours separated by one space.
///
/// Total: any input, including pasted text without digits, maps to a valid
/// (possibly empty) string. The digit count is not capped here.
///
/// ```
/// use card_form::format_card_number;
///
/// assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("abc12-34"), "1234");
/// assert_eq!(format_card_number(""), "");
/// ```
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    digits
        .chunks(GROUP_LEN)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
