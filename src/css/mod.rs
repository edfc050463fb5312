//! Stylesheet engine: value model, AST, specificity, parser.

pub mod model;
pub mod parser;
pub mod specificity;
pub mod value;

pub use model::{Declaration, Rule, Selector, SimpleSelector, Stylesheet};
pub use parser::parse_stylesheet;
pub use specificity::{compare_selectors, sort_selectors, Specificity};
pub use value::{Unit, Value};
