//! The discriminant of a JSON value.

use std::fmt;

/// Which of the six JSON shapes a [`Value`](crate::Value) currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Null,
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl Type {
    /// Returns the lowercase JSON name of the type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Type::Null => "null",
            Type::String => "string",
            Type::Number => "number",
            Type::Boolean => "boolean",
            Type::Array => "array",
            Type::Object => "object",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
