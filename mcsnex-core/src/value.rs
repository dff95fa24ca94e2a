//! Attribute values and monitor shapes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An attribute value read from the file: numeric when it parses,
/// otherwise the original text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttrValue {
    /// Value that parsed as a float.
    Number(f64),
    /// Value kept in its raw text form.
    Text(String),
}

impl AttrValue {
    /// Parses `text` as a float when possible, keeping the raw text
    /// otherwise.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(value) => AttrValue::Number(value),
            Err(_) => AttrValue::Text(text.to_string()),
        }
    }

    /// Returns the numeric value, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(value) => Some(*value),
            AttrValue::Text(_) => None,
        }
    }

    /// Returns the text, if this kept its raw form.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Number(_) => None,
            AttrValue::Text(text) => Some(text),
        }
    }
}

/// Monitor shape classes, written by monitor_nD as small integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    /// Flat rectangular monitor (code 0).
    Square,
    /// Flat circular monitor (code 1).
    Disk,
    /// Spherical monitor (code 2).
    Sphere,
    /// Cylindrical monitor (code 3).
    Cylinder,
    /// Banana-section monitor (code 4).
    Banana,
    /// Box monitor (code 5).
    Box,
    /// Shape of the previous component (code 6).
    Previous,
    /// OFF-file polyhedron (code 7).
    Off,
}

impl Shape {
    /// Maps a monitor_nD shape identifier to its shape class.
    ///
    /// The absolute value selects the class; unknown codes map to
    /// `None`.
    #[must_use]
    pub fn from_identifier(identifier: i64) -> Option<Self> {
        match identifier.unsigned_abs() {
            0 => Some(Shape::Square),
            1 => Some(Shape::Disk),
            2 => Some(Shape::Sphere),
            3 => Some(Shape::Cylinder),
            4 => Some(Shape::Banana),
            5 => Some(Shape::Box),
            6 => Some(Shape::Previous),
            7 => Some(Shape::Off),
            _ => None,
        }
    }

    /// Lowercase tag used in geometry records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::Disk => "disk",
            Shape::Sphere => "sphere",
            Shape::Cylinder => "cylinder",
            Shape::Banana => "banana",
            Shape::Box => "box",
            Shape::Previous => "previous",
            Shape::Off => "off",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(AttrValue::parse("0.05"), AttrValue::Number(0.05));
        assert_eq!(AttrValue::parse("-3"), AttrValue::Number(-3.0));
        // float() in the writing tool strips whitespace, so we do too.
        assert_eq!(AttrValue::parse(" 2.5 "), AttrValue::Number(2.5));
    }

    #[test]
    fn test_parse_keeps_text() {
        assert_eq!(
            AttrValue::parse("no shape"),
            AttrValue::Text("no shape".to_string())
        );
        assert_eq!(AttrValue::parse(""), AttrValue::Text(String::new()));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(AttrValue::Number(1.5).as_number(), Some(1.5));
        assert_eq!(AttrValue::Number(1.5).as_text(), None);
        let text = AttrValue::Text("abc".to_string());
        assert_eq!(text.as_number(), None);
        assert_eq!(text.as_text(), Some("abc"));
    }

    #[test]
    fn test_shape_from_identifier() {
        assert_eq!(Shape::from_identifier(0), Some(Shape::Square));
        assert_eq!(Shape::from_identifier(3), Some(Shape::Cylinder));
        assert_eq!(Shape::from_identifier(7), Some(Shape::Off));
        // Sign carries no class information.
        assert_eq!(Shape::from_identifier(-5), Some(Shape::Box));
        assert_eq!(Shape::from_identifier(99), None);
        assert_eq!(Shape::from_identifier(-8), None);
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(Shape::Box.to_string(), "box");
        assert_eq!(Shape::Square.as_str(), "square");
    }
}
