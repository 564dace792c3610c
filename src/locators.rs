use serde::{Deserialize, Serialize};

use crate::page::xpath_literal;

/// Locator names with a dedicated semantic query in the engine
const NATIVE_NAMES: [&str; 6] = ["alt", "label", "placeholder", "role", "text", "title"];

/// Locator names passed to the engine's raw selector evaluator unchanged
const PASSTHROUGH_NAMES: [&str; 2] = ["css", "xpath"];

/// How one candidate is resolved against the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Query by image alt text
    Alt,
    /// Query by associated label text
    Label,
    /// Query by placeholder text
    Placeholder,
    /// Query by ARIA role
    Role,
    /// Query by visible text content
    Text,
    /// Query by title attribute
    Title,
    /// Raw CSS selector or XPath expression (css, xpath, and rewritten
    /// custom attributes)
    Selector,
}

impl Strategy {
    /// Strategy name as used in trace output
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Alt => "alt",
            Strategy::Label => "label",
            Strategy::Placeholder => "placeholder",
            Strategy::Role => "role",
            Strategy::Text => "text",
            Strategy::Title => "title",
            Strategy::Selector => "selector",
        }
    }

    fn for_name(name: &str) -> Strategy {
        match name.to_ascii_lowercase().as_str() {
            "alt" => Strategy::Alt,
            "label" => Strategy::Label,
            "placeholder" => Strategy::Placeholder,
            "role" => Strategy::Role,
            "text" => Strategy::Text,
            "title" => Strategy::Title,
            _ => Strategy::Selector,
        }
    }
}

/// One normalized locator hint, ready for resolution
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    name: String,
    value: String,
    strategy: Strategy,
}

impl Candidate {
    /// The locator name as supplied by the caller
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The query value after normalization (custom attribute names are
    /// rewritten into an XPath attribute-equality expression)
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The strategy assigned to this candidate
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

/// An insertion-ordered set of locator hints.
///
/// Hints are tried during resolution in exactly the order they were added.
/// Adding a hint under a name that is already present replaces its value but
/// keeps its original position, so fallback priority stays stable.
///
/// ```
/// use smart_locators::Locators;
///
/// let locators = Locators::new()
///     .id("save-button")
///     .text("Save")
///     .css("button[type='submit']");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Locators {
    entries: Vec<(String, String)>,
}

impl Locators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hint under an arbitrary name.
    ///
    /// Recognized names (`id`, `name`, `css`, `xpath`, `label`, `alt`,
    /// `placeholder`, `role`, `text`, `title`) behave exactly as their
    /// dedicated setters; anything else is treated as a custom attribute
    /// name and resolved as `//*[@name='value']`.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// ID attribute
    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    /// Name attribute
    pub fn name(self, value: impl Into<String>) -> Self {
        self.attr("name", value)
    }

    /// CSS selector, passed to the engine unchanged
    pub fn css(self, value: impl Into<String>) -> Self {
        self.attr("css", value)
    }

    /// XPath expression, passed to the engine unchanged
    pub fn xpath(self, value: impl Into<String>) -> Self {
        self.attr("xpath", value)
    }

    /// Associated label text
    pub fn label(self, value: impl Into<String>) -> Self {
        self.attr("label", value)
    }

    /// Image alt text
    pub fn alt(self, value: impl Into<String>) -> Self {
        self.attr("alt", value)
    }

    /// Placeholder text
    pub fn placeholder(self, value: impl Into<String>) -> Self {
        self.attr("placeholder", value)
    }

    /// ARIA role
    pub fn role(self, value: impl Into<String>) -> Self {
        self.attr("role", value)
    }

    /// Visible text content
    pub fn text(self, value: impl Into<String>) -> Self {
        self.attr("text", value)
    }

    /// Title attribute
    pub fn title(self, value: impl Into<String>) -> Self {
        self.attr("title", value)
    }

    /// True if no hints have been added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalize the hint set into an ordered candidate list.
    ///
    /// Empty-valued entries are discarded. Names outside the native
    /// vocabulary and the css/xpath pass-through forms are rewritten into an
    /// attribute-equality XPath so that arbitrary attributes can be queried
    /// uniformly.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.entries
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| {
                let lower = name.to_ascii_lowercase();
                let value = if NATIVE_NAMES.contains(&lower.as_str())
                    || PASSTHROUGH_NAMES.contains(&lower.as_str())
                {
                    value.clone()
                } else {
                    format!("//*[@{}={}]", name, xpath_literal(value))
                };
                Candidate {
                    name: name.clone(),
                    value,
                    strategy: Strategy::for_name(name),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "locators_test.rs"]
mod locators_test;
