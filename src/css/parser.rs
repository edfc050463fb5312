//! Recursive descent stylesheet parser.
//!
//! Parses stylesheet text into a [`Stylesheet`]. Scans characters directly
//! through a [`Cursor`]; there is no separate token stream.
//!
//! ```text
//! stylesheet   := (ws* rule)*
//! rule         := selectors '{' declarations '}'
//! selectors    := simple (ws* ',' ws* simple)* ws*
//! simple       := ( ident | '#' ident | '.' ident | '*' )+
//! declarations := (ws* ident ws* ':' ws* value ws* ';')* ws*
//! value        := length | '#' [A-Za-z0-9]+ | ident
//! length       := [0-9] [0-9.]* ident
//! ident        := [A-Za-z0-9_-]+
//! ```

use tracing::{debug, trace};

use crate::css::model::{Declaration, Rule, Selector, SimpleSelector, Stylesheet};
use crate::css::specificity::sort_selectors;
use crate::css::value::{Unit, Value};
use crate::cursor::Cursor;
use crate::error::{ParseError, Result};

/// Parse stylesheet text into a [`Stylesheet`].
///
/// Rules keep source order. Each rule's selectors are sorted most specific
/// first; declarations keep source order.
pub fn parse_stylesheet(source: &str) -> Result<Stylesheet> {
    debug!(bytes = source.len(), "parsing stylesheet");

    let mut parser = Parser {
        cursor: Cursor::new(source),
    };
    match parser.parse_rules() {
        Ok(rules) => {
            debug!(rules = rules.len(), "parsed stylesheet");
            Ok(Stylesheet { rules })
        }
        Err(err) => {
            debug!(error = %err, "stylesheet parse failed");
            Err(err)
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Recursive descent parser state.
struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl Parser<'_> {
    fn parse_rules(&mut self) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();
        loop {
            self.cursor.consume_whitespace();
            if self.cursor.at_end() {
                break;
            }
            rules.push(self.parse_rule()?);
        }
        Ok(rules)
    }

    /// Parse a single rule: selector list, then the declaration block.
    fn parse_rule(&mut self) -> Result<Rule> {
        let selectors = self.parse_selectors()?;
        let declarations = self.parse_declarations()?;

        trace!(
            selectors = selectors.len(),
            declarations = declarations.len(),
            "parsed rule"
        );
        Ok(Rule {
            selectors,
            declarations,
        })
    }

    /// Parse a comma-separated selector list up to (not including) `{`,
    /// sorted most specific first.
    fn parse_selectors(&mut self) -> Result<Vec<Selector>> {
        let mut selectors = Vec::new();
        loop {
            selectors.push(Selector::Simple(self.parse_simple_selector()?));
            self.cursor.consume_whitespace();
            match self.cursor.peek() {
                Some(',') => {
                    self.cursor.advance();
                    self.cursor.consume_whitespace();
                }
                Some('{') => break,
                Some(c) => {
                    return Err(ParseError::unexpected(
                        "',' or '{'",
                        c,
                        self.cursor.position(),
                    ));
                }
                None => {
                    return Err(ParseError::eof(
                        "'{' after selectors",
                        self.cursor.position(),
                    ));
                }
            }
        }

        sort_selectors(&mut selectors);
        Ok(selectors)
    }

    /// Parse `tag`, `#id`, `.class` and `*` parts in any order until a
    /// character that starts none of them.
    ///
    /// A repeated `#id` overwrites the earlier one; classes accumulate.
    fn parse_simple_selector(&mut self) -> Result<SimpleSelector> {
        let start = self.cursor.position();
        let mut selector = SimpleSelector::new();

        loop {
            match self.cursor.peek() {
                Some('#') => {
                    self.cursor.advance();
                    selector.id = Some(self.parse_identifier("id")?);
                }
                Some('.') => {
                    self.cursor.advance();
                    selector.classes.push(self.parse_identifier("class name")?);
                }
                Some('*') => {
                    self.cursor.advance();
                }
                Some(c) if is_identifier_char(c) => {
                    selector.tag_name = Some(self.parse_identifier("tag name")?);
                }
                _ => break,
            }
        }

        if self.cursor.position() == start {
            return Err(self.cursor.unexpected("selector"));
        }
        Ok(selector)
    }

    /// Parse `{ name: value; ... }` including both braces.
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>> {
        self.cursor.expect('{', "rule")?;

        let mut declarations = Vec::new();
        loop {
            self.cursor.consume_whitespace();
            match self.cursor.peek() {
                Some('}') => {
                    self.cursor.advance();
                    break;
                }
                None => {
                    return Err(ParseError::eof(
                        "'}' to close declaration block",
                        self.cursor.position(),
                    ));
                }
                Some(_) => {
                    let before = self.cursor.position();
                    declarations.push(self.parse_declaration()?);
                    assert!(
                        self.cursor.position() > before,
                        "declaration parser made no progress at byte {before}"
                    );
                }
            }
        }
        Ok(declarations)
    }

    /// Parse a single declaration: `name: value;`
    fn parse_declaration(&mut self) -> Result<Declaration> {
        let name = self.parse_identifier("property name")?;
        self.cursor.consume_whitespace();
        self.cursor.expect(':', "declaration")?;
        self.cursor.consume_whitespace();
        let value = self.parse_value()?;
        self.cursor.consume_whitespace();
        self.cursor.expect(';', "declaration")?;

        Ok(Declaration { name, value })
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.cursor.peek() {
            Some(c) if c.is_ascii_digit() => self.parse_length(),
            Some('#') => self.parse_color(),
            _ => Ok(Value::Keyword(self.parse_identifier("value")?)),
        }
    }

    /// Parse a number (digits, at most one `.`) followed by a unit.
    fn parse_length(&mut self) -> Result<Value> {
        let start = self.cursor.position();
        let first = match self.cursor.peek() {
            Some(c) if c.is_ascii_digit() => c,
            _ => return Err(self.cursor.unexpected("number")),
        };
        let mut seen_dot = false;
        let number = self.cursor.consume_while(|c| match c {
            '0'..='9' => true,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        });
        // Only reached on a leading digit, and the run holds at most one '.',
        // so the literal always parses.
        let magnitude: f32 = number
            .parse()
            .map_err(|_| ParseError::unexpected("number", first, start))?;

        let unit_start = self.cursor.position();
        let unit_text = self.cursor.consume_while(|c| c.is_ascii_alphabetic());
        if unit_text.is_empty() {
            return Err(self.cursor.unexpected("unit"));
        }
        let unit = Unit::from_name(unit_text).ok_or_else(|| ParseError::UnknownUnit {
            text: unit_text.to_owned(),
            position: unit_start,
        })?;

        Ok(Value::Length(magnitude, unit))
    }

    /// `#` followed by an alphanumeric run, kept verbatim without the `#`.
    fn parse_color(&mut self) -> Result<Value> {
        self.cursor.expect('#', "color")?;
        let hex = self.cursor.consume_while(|c| c.is_ascii_alphanumeric());
        if hex.is_empty() {
            return Err(self.cursor.unexpected("color digits"));
        }
        Ok(Value::Color(hex.to_owned()))
    }

    fn parse_identifier(&mut self, what: &str) -> Result<String> {
        let ident = self.cursor.consume_while(is_identifier_char);
        if ident.is_empty() {
            return Err(self.cursor.unexpected(what));
        }
        Ok(ident.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Helper ───────────────────────────────────────────────────────

    fn parse(input: &str) -> Stylesheet {
        parse_stylesheet(input).unwrap_or_else(|e| panic!("parse failed: {e}"))
    }

    fn first_rule(input: &str) -> Rule {
        let sheet = parse(input);
        assert!(!sheet.rules.is_empty(), "expected at least one rule");
        sheet.rules.into_iter().next().unwrap()
    }

    fn selector_strings(rule: &Rule) -> Vec<String> {
        rule.selectors.iter().map(ToString::to_string).collect()
    }

    // ── Rules ────────────────────────────────────────────────────────

    #[test]
    fn empty_stylesheet() {
        assert!(parse("").is_empty());
        assert!(parse(" \n\t ").is_empty());
    }

    #[test]
    fn parse_simple_rule() {
        let rule = first_rule("p { color: red; }");
        assert_eq!(selector_strings(&rule), vec!["p"]);
        assert_eq!(
            rule.declarations,
            vec![Declaration::new("color", Value::keyword("red"))]
        );
    }

    #[test]
    fn selectors_sorted_declarations_in_source_order() {
        let rule = first_rule("h1, h2, .title { margin: 10px; color: red; }");
        assert_eq!(selector_strings(&rule), vec![".title", "h1", "h2"]);
        assert_eq!(
            rule.declarations,
            vec![
                Declaration::new("margin", Value::length(10.0, Unit::Px)),
                Declaration::new("color", Value::keyword("red")),
            ]
        );
    }

    #[test]
    fn rules_keep_source_order() {
        let sheet = parse("#a { x: y; } p { x: y; } .b { x: y; }");
        let first: Vec<_> = sheet
            .rules
            .iter()
            .map(|r| r.selectors[0].to_string())
            .collect();
        assert_eq!(first, vec!["#a", "p", ".b"]);
    }

    #[test]
    fn empty_declaration_block() {
        let rule = first_rule("div {}");
        assert!(rule.declarations.is_empty());
    }

    #[test]
    fn no_whitespace_anywhere() {
        let rule = first_rule("a,b{c:d;e:1px;}");
        assert_eq!(selector_strings(&rule), vec!["a", "b"]);
        assert_eq!(rule.declarations.len(), 2);
    }

    // ── Selectors ────────────────────────────────────────────────────

    #[test]
    fn compound_selector() {
        let rule = first_rule("div#main.note.wide { x: y; }");
        let simple = rule.selectors[0].simple();
        assert_eq!(simple.tag_name.as_deref(), Some("div"));
        assert_eq!(simple.id.as_deref(), Some("main"));
        assert_eq!(simple.classes, vec!["note", "wide"]);
    }

    #[test]
    fn parts_in_any_order() {
        let rule = first_rule(".a#b.c { x: y; }");
        let simple = rule.selectors[0].simple();
        assert_eq!(simple.tag_name, None);
        assert_eq!(simple.id.as_deref(), Some("b"));
        assert_eq!(simple.classes, vec!["a", "c"]);
    }

    #[test]
    fn second_id_overwrites_first() {
        let rule = first_rule("#one#two { x: y; }");
        assert_eq!(rule.selectors[0].simple().id.as_deref(), Some("two"));
    }

    #[test]
    fn duplicate_classes_kept() {
        let rule = first_rule(".a.a { x: y; }");
        assert_eq!(rule.selectors[0].simple().classes, vec!["a", "a"]);
    }

    #[test]
    fn universal_contributes_nothing() {
        let rule = first_rule("* { x: y; }");
        assert_eq!(rule.selectors[0].simple(), &SimpleSelector::new());

        let rule = first_rule("*.note { x: y; }");
        assert_eq!(
            rule.selectors[0].simple(),
            &SimpleSelector::new().with_class("note")
        );
    }

    #[test]
    fn id_outranks_classes_in_sort() {
        let rule = first_rule(".a.b.c, #x, p { x: y; }");
        assert_eq!(selector_strings(&rule), vec!["#x", ".a.b.c", "p"]);
    }

    // ── Values ───────────────────────────────────────────────────────

    #[test]
    fn fractional_length() {
        let rule = first_rule("p { width: 12.5px; }");
        assert_eq!(rule.declarations[0].value, Value::length(12.5, Unit::Px));
        assert_eq!(rule.declarations[0].value.to_pixels(), 12.5);
    }

    #[test]
    fn trailing_dot_length() {
        let rule = first_rule("p { width: 5.px; }");
        assert_eq!(rule.declarations[0].value, Value::length(5.0, Unit::Px));
    }

    #[test]
    fn large_length_survives_reprint() {
        let rule = first_rule("p { width: 10000000000000000000000px; }");
        let value = &rule.declarations[0].value;
        assert_eq!(*value, Value::length(1e22, Unit::Px));

        let reprinted = format!("p {{ width: {value}; }}");
        assert_eq!(first_rule(&reprinted), rule);
    }

    #[test]
    fn length_requires_leading_digit() {
        let mut parser = Parser {
            cursor: Cursor::new(".5px"),
        };
        assert_eq!(
            parser.parse_length(),
            Err(ParseError::UnexpectedCharacter {
                expected: "number".into(),
                found: '.',
                position: 0,
            })
        );
    }

    #[test]
    fn unit_case_insensitive() {
        let rule = first_rule("p { width: 3PX; }");
        assert_eq!(rule.declarations[0].value, Value::length(3.0, Unit::Px));
    }

    #[test]
    fn color_placeholder() {
        let rule = first_rule("p { color: #ff00aa; }");
        assert_eq!(rule.declarations[0].value, Value::Color("ff00aa".into()));
    }

    #[test]
    fn hyphenated_keyword_and_property() {
        let rule = first_rule("p { text-align: center-left; }");
        assert_eq!(
            rule.declarations[0],
            Declaration::new("text-align", Value::keyword("center-left"))
        );
    }

    #[test]
    fn spacing_around_colon_and_semicolon() {
        let rule = first_rule("p {\n  margin :  4px  ;\n}");
        assert_eq!(rule.declarations[0].value, Value::length(4.0, Unit::Px));
    }

    // ── Errors ───────────────────────────────────────────────────────

    #[test]
    fn unknown_unit() {
        let err = parse_stylesheet("p { width: 5em; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownUnit {
                text: "em".into(),
                position: 12,
            }
        );
    }

    #[test]
    fn missing_unit() {
        let err = parse_stylesheet("p { width: 5; }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedCharacter { found: ';', position: 12, .. }
        ));
    }

    #[test]
    fn second_dot_ends_number() {
        let err = parse_stylesheet("p { width: 1.2.3px; }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedCharacter { found: '.', position: 14, .. }
        ));
    }

    #[test]
    fn missing_semicolon() {
        let err = parse_stylesheet("p { color: red }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedCharacter {
                expected: "';'".into(),
                found: '}',
                position: 15,
            }
        );
    }

    #[test]
    fn missing_colon() {
        let err = parse_stylesheet("p { color red; }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedCharacter { found: 'r', position: 10, .. }
        ));
    }

    #[test]
    fn unterminated_block() {
        let err = parse_stylesheet("p { color: red;").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { position: 15, .. }));
    }

    #[test]
    fn selectors_without_block() {
        let err = parse_stylesheet("h1, h2").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { position: 6, .. }));
    }

    #[test]
    fn combinator_is_rejected() {
        let err = parse_stylesheet("div > p { x: y; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedCharacter {
                expected: "',' or '{'".into(),
                found: '>',
                position: 4,
            }
        );
    }

    #[test]
    fn empty_selector() {
        let err = parse_stylesheet("{ x: y; }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedCharacter { found: '{', position: 0, .. }
        ));

        let err = parse_stylesheet("a, , b { x: y; }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedCharacter { found: ',', position: 3, .. }
        ));
    }

    #[test]
    fn dot_without_class_name() {
        let err = parse_stylesheet("p. { x: y; }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedCharacter { found: ' ', position: 2, .. }
        ));
    }

    #[test]
    fn error_in_later_rule_discards_everything() {
        assert!(parse_stylesheet("a { x: y; } b { x: 1em; }").is_err());
    }

    #[test]
    fn deterministic() {
        let input = "h1, #top, .x.y { margin: 2px; color: #abc; font: bold; }";
        assert_eq!(parse(input), parse(input));
    }
}
