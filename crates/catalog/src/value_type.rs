//! Semantic type inference for raw attribute values.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// What a raw attribute value string represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeValueType {
    Color,
    Gradient,
    Url,
    String,
}

impl AttributeValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeValueType::Color => "COLOR",
            AttributeValueType::Gradient => "GRADIENT",
            AttributeValueType::Url => "URL",
            AttributeValueType::String => "STRING",
        }
    }
}

impl core::fmt::Display for AttributeValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

static GRADIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:linear|radial)-gradient\(.*\)$").expect("gradient pattern compiles")
});

// Hex shorthand/full forms, or rgb()/rgba()/hsl()/hsla() with 3 or 4 arguments.
static COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|(?:rgb|hsl)a?\(\s*(?:-?\d+(?:\.\d+)?%?\s*[,\s]\s*){2,3}-?\d*\.?\d+%?\s*\))$",
    )
    .expect("color pattern compiles")
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:https?|ftps?)://[^\s/?#]+(?:[/?#]\S*)?$").expect("url pattern compiles")
});

/// Infer the semantic type of a raw value. First match wins: gradient, color,
/// url, then plain string. Never fails.
pub fn classify(raw: &str) -> AttributeValueType {
    if GRADIENT.is_match(raw) {
        AttributeValueType::Gradient
    } else if COLOR.is_match(raw) {
        AttributeValueType::Color
    } else if URL.is_match(raw) {
        AttributeValueType::Url
    } else {
        AttributeValueType::String
    }
}
