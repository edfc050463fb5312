//! Recursive descent markup parser.
//!
//! Turns markup text into a sequence of [`Node`]s. The accepted grammar is a
//! small well-formed subset:
//!
//! ```text
//! nodes     := (ws* node)*
//! node      := element | text
//! text      := [^<]+
//! element   := '<' name attribute* ws* '>' nodes '</' name ws* '>'
//! attribute := ws* name ws* '=' ws* ( '"' [^"]* '"' | '\'' [^']* '\'' )
//! name      := [A-Za-z0-9]+
//! ```
//!
//! Any mismatch aborts the whole parse with a [`ParseError`]; no partial tree
//! is ever returned.

use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::cursor::Cursor;
use crate::dom::node::{AttrMap, Node};
use crate::error::{ParseError, Result};

/// Parse a markup document with the default [`ParserConfig`].
pub fn parse_document(source: &str) -> Result<Vec<Node>> {
    parse_document_with(source, &ParserConfig::default())
}

/// Parse a markup document into its top-level node sequence.
///
/// The entire input must be consumed: a stray closing tag at the top level
/// is an error.
pub fn parse_document_with(source: &str, config: &ParserConfig) -> Result<Vec<Node>> {
    debug!(bytes = source.len(), "parsing document");

    let mut parser = Parser::new(source, config);
    match parser.parse_document() {
        Ok(nodes) => {
            debug!(top_level = nodes.len(), "parsed document");
            Ok(nodes)
        }
        Err(err) => {
            debug!(error = %err, "document parse failed");
            Err(err)
        }
    }
}

/// Markup parser state: one cursor, one config, current nesting depth.
struct Parser<'a> {
    cursor: Cursor<'a>,
    config: &'a ParserConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, config: &'a ParserConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            depth: 0,
        }
    }

    fn parse_document(&mut self) -> Result<Vec<Node>> {
        let nodes = self.parse_nodes()?;
        if !self.cursor.at_end() {
            return Err(self.cursor.unexpected("end of input"));
        }
        Ok(nodes)
    }

    /// Parse sibling nodes until end of input or the start of a closing tag.
    fn parse_nodes(&mut self) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        loop {
            self.cursor.consume_whitespace();
            if self.cursor.at_end() || self.cursor.starts_with("</") {
                break;
            }
            nodes.push(self.parse_node()?);
        }
        Ok(nodes)
    }

    fn parse_node(&mut self) -> Result<Node> {
        match self.cursor.peek() {
            Some('<') => self.parse_element(),
            _ => Ok(self.parse_text()),
        }
    }

    fn parse_text(&mut self) -> Node {
        let text = self.cursor.consume_while(|c| c != '<');
        if self.config.trim_text {
            Node::text(text.trim_end())
        } else {
            Node::text(text)
        }
    }

    fn parse_element(&mut self) -> Result<Node> {
        let start = self.cursor.position();

        // Opening tag.
        self.cursor.expect('<', "opening tag")?;
        let tag_name = self.parse_name("tag name")?;
        let attributes = self.parse_attributes(&tag_name)?;
        self.cursor.expect('>', "opening tag")?;

        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
                position: start,
            });
        }

        let children = self.parse_nodes()?;

        // Closing tag.
        if self.cursor.at_end() {
            return Err(ParseError::eof(
                format!("closing tag for <{tag_name}>"),
                self.cursor.position(),
            ));
        }
        self.cursor.expect('<', "closing tag")?;
        self.cursor.expect('/', "closing tag")?;
        let closing_start = self.cursor.position();
        let closing = self.parse_name("closing tag name")?;
        if closing != tag_name {
            return Err(ParseError::TagMismatch {
                opening: tag_name,
                closing,
                position: closing_start,
            });
        }
        self.cursor.consume_whitespace();
        self.cursor.expect('>', "closing tag")?;

        trace!(tag = %tag_name, depth = self.depth, children = children.len(), "parsed element");
        self.depth -= 1;

        Ok(Node::element(tag_name, attributes, children))
    }

    /// Non-empty ASCII alphanumeric run, used for tag and attribute names.
    fn parse_name(&mut self, what: &str) -> Result<String> {
        let name = self.cursor.consume_while(|c| c.is_ascii_alphanumeric());
        if name.is_empty() {
            return Err(self.cursor.unexpected(what));
        }
        Ok(name.to_owned())
    }

    fn parse_attributes(&mut self, tag_name: &str) -> Result<AttrMap> {
        let mut attributes = AttrMap::new();
        loop {
            self.cursor.consume_whitespace();
            match self.cursor.peek() {
                Some('>') => break,
                None => {
                    return Err(ParseError::eof(
                        format!("'>' to close <{tag_name}"),
                        self.cursor.position(),
                    ));
                }
                Some(_) => {
                    let (name, value) = self.parse_attribute()?;
                    attributes.insert(name, value);
                }
            }
        }
        Ok(attributes)
    }

    fn parse_attribute(&mut self) -> Result<(String, String)> {
        let name = self.parse_name("attribute name")?;
        self.cursor.consume_whitespace();
        self.cursor.expect('=', "attribute")?;
        self.cursor.consume_whitespace();
        let value = self.parse_attribute_value()?;
        Ok((name, value))
    }

    /// A value delimited by either `"` or `'`; the closing quote must match the
    /// opening one.
    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.cursor.peek() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.cursor.unexpected("quote (\" or ')")),
        };
        self.cursor.advance();
        let value = self.cursor.consume_while(|c| c != quote).to_owned();
        self.cursor.expect(quote, "attribute value")?;
        Ok(value)
    }
}
