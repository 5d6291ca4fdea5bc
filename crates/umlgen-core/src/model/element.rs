//! Element kinds of top-level packaged elements.

use std::fmt;

use serde_json::Value as JsonValue;

use super::{ID_KEY, NAME_KEY, TYPE_KEY};

/// Discriminator of a packaged element, read from its `$type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Class,
    Enumeration,
    Interface,
    PrimitiveType,
    /// Any `$type` outside the known set, or a missing one
    Unknown,
}

impl ElementKind {
    /// Parse a `$type` tag. Unrecognized tags map to [`ElementKind::Unknown`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Class" => Self::Class,
            "Enumeration" => Self::Enumeration,
            "Interface" => Self::Interface,
            "PrimitiveType" => Self::PrimitiveType,
            _ => Self::Unknown,
        }
    }

    /// Read the kind of a JSON element. Non-objects and untagged objects are `Unknown`.
    pub fn of(element: &JsonValue) -> Self {
        element
            .get(TYPE_KEY)
            .and_then(JsonValue::as_str)
            .map_or(Self::Unknown, Self::from_tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Enumeration => "Enumeration",
            Self::Interface => "Interface",
            Self::PrimitiveType => "PrimitiveType",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether elements of this kind are indexed in the type name table
    pub fn is_named_type(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Whether a source file is generated for elements of this kind.
    /// Primitive types are referenced by name only.
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Class | Self::Enumeration | Self::Interface)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Borrowed view of a top-level packaged element
#[derive(Debug, Clone, Copy)]
pub struct PackagedElement<'a> {
    pub json: &'a JsonValue,
}

impl<'a> PackagedElement<'a> {
    pub fn new(json: &'a JsonValue) -> Self {
        Self { json }
    }

    pub fn id(&self) -> Option<&'a str> {
        self.json.get(ID_KEY).and_then(JsonValue::as_str)
    }

    pub fn name(&self) -> Option<&'a str> {
        self.json.get(NAME_KEY).and_then(JsonValue::as_str)
    }

    pub fn kind(&self) -> ElementKind {
        ElementKind::of(self.json)
    }
}
