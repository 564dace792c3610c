use anyhow::Result;
use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::{Client, Locator};
use tracing::debug;

/// Query capability the resolver needs from an automation engine.
///
/// One method per native locator semantic, plus [`by_selector`] for raw
/// CSS/XPath expressions. Each method returns the full match set; an empty
/// vector means "nothing matched" and is not an error. The resolver treats
/// an `Err` the same as an empty match set, so implementations are free to
/// propagate engine failures as-is.
///
/// [`by_selector`]: PageQuery::by_selector
#[async_trait]
pub trait PageQuery: Send + Sync {
    /// Handle to a matched element, owned by the caller once returned
    type Element: Send;

    /// Elements whose image alt text equals the given value
    async fn by_alt_text(&self, value: &str) -> Result<Vec<Self::Element>>;

    /// Form controls associated with a label of the given text
    async fn by_label(&self, value: &str) -> Result<Vec<Self::Element>>;

    /// Inputs with the given placeholder text
    async fn by_placeholder(&self, value: &str) -> Result<Vec<Self::Element>>;

    /// Elements with the given ARIA role
    async fn by_role(&self, value: &str) -> Result<Vec<Self::Element>>;

    /// Elements whose visible text contains the given value
    async fn by_text(&self, value: &str) -> Result<Vec<Self::Element>>;

    /// Elements with the given title attribute
    async fn by_title(&self, value: &str) -> Result<Vec<Self::Element>>;

    /// Raw CSS selector or XPath expression
    async fn by_selector(&self, value: &str) -> Result<Vec<Self::Element>>;
}

/// WebDriver has no per-semantic query commands, so the native semantics are
/// synthesized as structural queries over the DOM. An engine with dedicated
/// accessibility queries would implement the trait methods directly instead.
#[async_trait]
impl PageQuery for Client {
    type Element = Element;

    async fn by_alt_text(&self, value: &str) -> Result<Vec<Element>> {
        let selector = css_attr("alt", value);
        debug!("alt text query: {}", selector);
        Ok(self.find_all(Locator::Css(&selector)).await?)
    }

    async fn by_label(&self, value: &str) -> Result<Vec<Element>> {
        let expr = label_xpath(value);
        debug!("label query: {}", expr);
        Ok(self.find_all(Locator::XPath(&expr)).await?)
    }

    async fn by_placeholder(&self, value: &str) -> Result<Vec<Element>> {
        let selector = css_attr("placeholder", value);
        debug!("placeholder query: {}", selector);
        Ok(self.find_all(Locator::Css(&selector)).await?)
    }

    async fn by_role(&self, value: &str) -> Result<Vec<Element>> {
        let expr = role_xpath(value);
        debug!("role query: {}", expr);
        Ok(self.find_all(Locator::XPath(&expr)).await?)
    }

    async fn by_text(&self, value: &str) -> Result<Vec<Element>> {
        let expr = text_xpath(value);
        debug!("text query: {}", expr);
        Ok(self.find_all(Locator::XPath(&expr)).await?)
    }

    async fn by_title(&self, value: &str) -> Result<Vec<Element>> {
        let selector = css_attr("title", value);
        debug!("title query: {}", selector);
        Ok(self.find_all(Locator::Css(&selector)).await?)
    }

    async fn by_selector(&self, value: &str) -> Result<Vec<Element>> {
        let locator = if is_xpath(value) {
            debug!("raw xpath query: {}", value);
            Locator::XPath(value)
        } else {
            debug!("raw css query: {}", value);
            Locator::Css(value)
        };
        Ok(self.find_all(locator).await?)
    }
}

/// Attribute-equality CSS selector with the value quoted and escaped
fn css_attr(name: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[{}=\"{}\"]", name, escaped)
}

/// Quote a string as an XPath 1.0 literal.
///
/// XPath 1.0 has no escape sequences inside string literals, so a value
/// containing both quote kinds has to be assembled with concat().
pub(crate) fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        format!("'{}'", value)
    } else if !value.contains('"') {
        format!("\"{}\"", value)
    } else {
        let parts: Vec<String> = value
            .split('\'')
            .map(|part| format!("'{}'", part))
            .collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}

/// Heuristic used by the raw selector query to tell XPath from CSS
fn is_xpath(value: &str) -> bool {
    value.starts_with('/') || value.starts_with("./") || value.starts_with('(')
}

/// Form controls associated with a label: via the label's for/id pairing,
/// nested inside the label element, or carrying a matching aria-label.
fn label_xpath(value: &str) -> String {
    let lit = xpath_literal(value);
    format!(
        "//*[@id=//label[normalize-space(string())={lit}]/@for] | \
         //label[normalize-space(string())={lit}]//*[self::input or self::textarea or self::select] | \
         //*[@aria-label={lit}]"
    )
}

/// Elements carrying the role attribute, widened with the implicit role of
/// common HTML elements (a bare <button> has role "button" without saying so).
fn role_xpath(value: &str) -> String {
    let lit = xpath_literal(value);
    let implicit = match value {
        "button" => Some("//button | //input[@type='button'] | //input[@type='submit']"),
        "link" => Some("//a[@href]"),
        "textbox" => Some("//input[@type='text'] | //input[not(@type)] | //textarea"),
        "checkbox" => Some("//input[@type='checkbox']"),
        "radio" => Some("//input[@type='radio']"),
        "heading" => Some("//h1 | //h2 | //h3 | //h4 | //h5 | //h6"),
        "img" => Some("//img"),
        _ => None,
    };
    match implicit {
        Some(tags) => format!("//*[@role={lit}] | {tags}"),
        None => format!("//*[@role={lit}]"),
    }
}

/// Elements with a directly-owned text node containing the value. Matching
/// on own text nodes rather than string() keeps ancestors out of the set.
fn text_xpath(value: &str) -> String {
    format!(
        "//*[text()[contains(normalize-space(.), {})]]",
        xpath_literal(value)
    )
}

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;
