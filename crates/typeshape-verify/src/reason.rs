//! Caller-supplied reason phrases.

use crate::template::substitute;
use std::borrow::Cow;
use std::fmt::Display;

const CONNECTIVE: &str = "because";

/// A reason template with positional arguments, formatted only on failure.
#[derive(Clone, Default)]
pub struct Reason<'a> {
    template: Cow<'a, str>,
    args: Vec<&'a dyn Display>,
}

impl<'a> Reason<'a> {
    /// No reason; the `{reason}` placeholder renders empty.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(template: impl Into<Cow<'a, str>>) -> Self {
        Self {
            template: template.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: &[&'a dyn Display]) -> Self {
        self.args.extend_from_slice(args);
        self
    }

    /// Blank templates count as no reason.
    pub fn is_empty(&self) -> bool {
        self.template.trim().is_empty()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Prefix the connective unless the phrase already starts with it.
    pub(crate) fn normalized(self) -> Self {
        if self.is_empty() {
            return Self::none();
        }
        let trimmed = self.template.trim_start();
        let has_connective = trimmed
            .get(..CONNECTIVE.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(CONNECTIVE));
        let template = if has_connective {
            Cow::Owned(trimmed.to_string())
        } else {
            Cow::Owned(format!("{} {}", CONNECTIVE, trimmed))
        };
        Self {
            template,
            args: self.args,
        }
    }

    /// The reason clause as it appears in a failure message: a leading space
    /// and the substituted phrase, or nothing.
    pub(crate) fn render_clause(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!(" {}", substitute(&self.template, &self.args, None))
    }
}

impl std::fmt::Debug for Reason<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reason")
            .field("template", &self.template)
            .field("args", &self.args.len())
            .finish()
    }
}

impl<'a> From<&'a str> for Reason<'a> {
    fn from(template: &'a str) -> Self {
        Self::new(template)
    }
}

impl From<String> for Reason<'_> {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}
