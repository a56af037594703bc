//! Parser for legacy tuple-string keys such as `('Fire', 'Water')`
//!
//! Older chart files used a flat object whose keys were the printed
//! form of a two-element tuple. Only that exact shape is accepted:
//! two quoted strings (single or double quotes) separated by a comma,
//! wrapped in parentheses.

use crate::error::ChartError;
use crate::types::MatchupKey;
use std::iter::Peekable;
use std::str::Chars;

/// Parse a legacy tuple key into a matchup key
pub fn parse_tuple_key(raw: &str) -> Result<MatchupKey, ChartError> {
    let malformed = || ChartError::MalformedKey(raw.to_string());
    let mut chars = raw.trim().chars().peekable();

    consume(&mut chars, '(').ok_or_else(malformed)?;
    let attacker = quoted(&mut chars).ok_or_else(malformed)?;
    consume(&mut chars, ',').ok_or_else(malformed)?;
    let defender = quoted(&mut chars).ok_or_else(malformed)?;
    consume(&mut chars, ')').ok_or_else(malformed)?;

    if chars.next().is_some() {
        return Err(malformed());
    }
    super::matchup_key(&attacker, &defender)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn consume(chars: &mut Peekable<Chars<'_>>, wanted: char) -> Option<()> {
    skip_whitespace(chars);
    chars.next_if_eq(&wanted).map(|_| ())
}

/// Read a quoted string, honouring backslash escapes for the quote and backslash
fn quoted(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    skip_whitespace(chars);
    let quote = chars.next_if(|c| *c == '\'' || *c == '"')?;
    let mut out = String::new();

    loop {
        match chars.next()? {
            '\\' => match chars.next()? {
                c @ ('\\' | '\'' | '"') => out.push(c),
                other => {
                    out.push('\\');
                    out.push(other);
                }
            },
            c if c == quote => return Some(out),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_quoted() {
        let key = parse_tuple_key("('Fire', 'Water')").unwrap();
        assert_eq!(key, MatchupKey::new("Fire", "Water"));
    }

    #[test]
    fn test_parse_mixed_quotes_and_spacing() {
        let key = parse_tuple_key(" ( \"Farfetch'd\" ,'Steel' ) ").unwrap();
        assert_eq!(key, MatchupKey::new("Farfetch'd", "Steel"));
    }

    #[test]
    fn test_parse_escaped_quote() {
        let key = parse_tuple_key(r"('It\'s', 'Fire')").unwrap();
        assert_eq!(key.attacker, "It's");
    }

    #[test]
    fn test_parse_names_with_spaces_and_commas() {
        let key = parse_tuple_key("('Dark Matter', 'Fire, Hot')").unwrap();
        assert_eq!(key, MatchupKey::new("Dark Matter", "Fire, Hot"));
    }

    #[test]
    fn test_rejects_malformed() {
        for raw in [
            "",
            "Fire,Water",
            "('Fire', 'Water'",
            "('Fire' 'Water')",
            "('Fire', 'Water', 'Grass')",
            "('Fire', Water)",
            "('Fire', 'Water') extra",
            "('Fire)",
        ] {
            assert!(
                matches!(parse_tuple_key(raw), Err(ChartError::MalformedKey(_))),
                "expected malformed: {raw:?}"
            );
        }
    }

    #[test]
    fn test_rejects_empty_name() {
        for raw in ["('', 'Water')", "('Fire', '  ')"] {
            assert!(matches!(parse_tuple_key(raw), Err(ChartError::EmptyTypeName)));
        }
    }

    #[test]
    fn test_parse_trims_padded_names() {
        let key = parse_tuple_key("(' Fire ', 'Water  ')").unwrap();
        assert_eq!(key, MatchupKey::new("Fire", "Water"));
    }
}
