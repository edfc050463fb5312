//! Declaration values: keyword, length with unit, opaque color.

use std::fmt;

/// A length unit. Only absolute pixels are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Px,
}

impl Unit {
    /// Look up a unit by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("px") {
            Some(Unit::Px)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Px => "px",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The right-hand side of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An identifier like `red`, `auto`, `bold`.
    Keyword(String),
    /// A number with a unit, e.g. `10px`.
    Length(f32, Unit),
    /// A `#`-prefixed color literal, stored without the `#` and not
    /// interpreted.
    Color(String),
}

impl Value {
    pub fn keyword(text: impl Into<String>) -> Self {
        Value::Keyword(text.into())
    }

    pub fn length(magnitude: f32, unit: Unit) -> Self {
        Value::Length(magnitude, unit)
    }

    /// Pixel magnitude of a `px` length. Every other value yields `0.0`.
    pub fn to_pixels(&self) -> f32 {
        match self {
            Value::Length(magnitude, Unit::Px) => *magnitude,
            Value::Keyword(_) | Value::Color(_) => 0.0,
        }
    }

    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Value::Keyword(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Keyword(text) => f.write_str(text),
            Value::Length(magnitude, unit) => write!(f, "{magnitude}{unit}"),
            Value::Color(hex) => write!(f, "#{hex}"),
        }
    }
}
