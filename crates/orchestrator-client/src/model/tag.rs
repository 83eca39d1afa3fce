// Tag model types

use std::fmt;

use serde::{Deserialize, Serialize};

/// A name/value tag attached to an instance
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    pub tag_name: String,
    pub tag_value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag_name: name.into(),
            tag_value: value.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag_value.is_empty() {
            f.write_str(&self.tag_name)
        } else {
            write!(f, "{}={}", self.tag_name, self.tag_value)
        }
    }
}
