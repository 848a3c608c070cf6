//! Form field controller.

use std::fmt;

/// HTML input type of a field.
///
/// Only plain text inputs exist; the info link is not checked as a URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputKind {
    #[default]
    Text,
}

impl InputKind {
    /// Value of the `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of one text input plus a reset.
///
/// Content is not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldController {
    kind: InputKind,
    value: String,
}

impl FieldController {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            value: String::new(),
        }
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Empty the field.
    pub fn reset(&mut self) {
        self.value.clear();
    }
}
