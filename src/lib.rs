//! # petal
//!
//! The front end of a minimal document renderer: a markup parser that builds
//! an element/text tree, and a stylesheet parser that builds rules whose
//! selectors are ranked by specificity.
//!
//! Both parsers accept a small well-formed subset and reject anything else
//! with a single [`ParseError`]. They never recover and never return a
//! partial result. Each call owns its own state, so independent parses can
//! run on any number of threads.
//!
//! ## Core Systems
//!
//! - **[`cursor`]**: Forward-only character scanner shared by both parsers
//! - **[`dom`]**: Markup parser, owned node tree, slotmap arena with queries
//! - **[`css`]**: Stylesheet parser, rule model, values, specificity ordering
//! - **[`config`]**: Per-call parser configuration
//! - **[`error`]**: The closed set of parse errors
//! - **[`testing`]**: Plain-text dumps for snapshot tests
//!
//! ```
//! let nodes = petal::parse_document("<p id='a'>hello</p>").unwrap();
//! assert_eq!(nodes[0].children()[0].as_text(), Some("hello"));
//!
//! let sheet = petal::parse_stylesheet("h1, .title { margin: 10px; }").unwrap();
//! assert_eq!(sheet.rules[0].selectors[0].to_string(), ".title");
//! assert_eq!(sheet.rules[0].declarations[0].value.to_pixels(), 10.0);
//! ```

// Foundation
pub mod config;
pub mod cursor;
pub mod error;

// Parsers
pub mod css;
pub mod dom;

// Test support
pub mod testing;

pub use config::ParserConfig;
pub use css::parse_stylesheet;
pub use dom::{parse_document, parse_document_with};
pub use error::ParseError;
