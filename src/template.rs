//! Description formats with a single `%@` placeholder.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Marks where the magnitude phrase gets inserted, for example `%@ ago`.
pub const PLACEHOLDER: &str = "%@";

/// Validated format string containing exactly one [`PLACEHOLDER`].
#[derive(Serialize, Deserialize, Clone, Debug, Hash, Eq, PartialEq)]
#[serde(try_from = "String", into = "String")]
pub struct Template(String);

impl Template {
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        match template.matches(PLACEHOLDER).count() {
            1 => Ok(Self(template)),
            n_placeholders => Err(Error::InvalidTemplate {
                template,
                n_placeholders,
            }),
        }
    }

    /// Only for the built-in formats.
    pub(crate) fn from_static(template: &'static str) -> Self {
        debug_assert_eq!(template.matches(PLACEHOLDER).count(), 1);
        Self(template.to_string())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitutes the phrase into the placeholder, leaving the rest of the template intact.
    #[must_use]
    pub fn render(&self, phrase: impl Display) -> String {
        self.0.replacen(PLACEHOLDER, &phrase.to_string(), 1)
    }
}

impl TryFrom<String> for Template {
    type Error = Error;

    fn try_from(template: String) -> Result<Self> {
        Self::new(template)
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(template: &str) -> Result<Self> {
        Self::new(template)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.0
    }
}

impl AsRef<str> for Template {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Template {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}
