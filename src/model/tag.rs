use serde::{Deserialize, Serialize};

/// An inline `@name` or `@name(value)` annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Text after `@`, without any parenthesized value
    pub name: String,
    /// The matched text as it appears in the line, `@` included
    pub raw: String,
    /// Parenthesized payload, if the tag has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Tag {
            raw: format!("@{}", name),
            name,
            value: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        Tag {
            raw: format!("@{}({})", name, value),
            name,
            value: Some(value),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_constructors() {
        assert_eq!(Tag::new("today").raw, "@today");
        let due = Tag::with_value("due", "next week");
        assert_eq!(due.to_string(), "@due(next week)");
        assert_eq!(due.value.as_deref(), Some("next week"));
    }
}
