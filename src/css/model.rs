//! Stylesheet AST: Stylesheet, Rule, Selector, SimpleSelector, Declaration.

use std::fmt;

use crate::css::specificity::Specificity;
use crate::css::value::Value;

/// A compound of at most one tag name, at most one id, and any number of
/// classes. No combinators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimpleSelector {
    pub tag_name: Option<String>,
    pub id: Option<String>,
    /// Classes in source order; duplicates are kept.
    pub classes: Vec<String>,
}

impl SimpleSelector {
    /// Create an empty selector (matches like `*`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag name (builder).
    pub fn with_tag(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }
}

/// A selector. Wraps a single [`SimpleSelector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Simple(SimpleSelector),
}

impl Selector {
    pub fn simple(&self) -> &SimpleSelector {
        match self {
            Selector::Simple(simple) => simple,
        }
    }

    pub fn specificity(&self) -> Specificity {
        Specificity::of(self)
    }
}

impl From<SimpleSelector> for Selector {
    fn from(simple: SimpleSelector) -> Self {
        Selector::Simple(simple)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.simple();
        if let Some(tag_name) = &simple.tag_name {
            f.write_str(tag_name)?;
        }
        if let Some(id) = &simple.id {
            write!(f, "#{id}")?;
        }
        for class in &simple.classes {
            write!(f, ".{class}")?;
        }
        if simple.tag_name.is_none() && simple.id.is_none() && simple.classes.is_empty() {
            f.write_str("*")?;
        }
        Ok(())
    }
}

/// A single property declaration, e.g. `margin: 10px`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub value: Value,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

/// A rule: selectors sorted most specific first, declarations in source
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    /// The highest specificity among this rule's selectors.
    ///
    /// Selectors are kept sorted, so this is the first one's.
    pub fn max_specificity(&self) -> Specificity {
        self.selectors
            .first()
            .map(Selector::specificity)
            .unwrap_or_default()
    }
}

/// A parsed stylesheet: rules in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
