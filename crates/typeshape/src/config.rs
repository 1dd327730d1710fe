//! Assertion configuration.

use serde::{Deserialize, Serialize};
use typeshape_types::{MemberScope, ReflectResult};
use typeshape_verify::FormatConfig;

/// Settings shared by every selector and facade created from one inspector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssertionConfig {
    /// Failure message formatting.
    pub format: FormatConfig,
    /// Members captured by selectors.
    pub scope: MemberScope,
}

impl AssertionConfig {
    /// Parse from JSON; missing sections take their defaults.
    pub fn from_json(json: &str) -> ReflectResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> ReflectResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    pub fn with_scope(mut self, scope: MemberScope) -> Self {
        self.scope = scope;
        self
    }
}
