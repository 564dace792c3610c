use tracing::debug;

use crate::errors::LocatorError;
use crate::locators::{Locators, Strategy};
use crate::page::PageQuery;

/// Resolves a [`Locators`] set against a page by trying each candidate in
/// insertion order and returning the first non-empty match set.
///
/// Holds nothing but a borrow of the page handle; every call is independent,
/// so one resolver can serve any number of lookups.
pub struct SmartLocators<'p, P: PageQuery> {
    page: &'p P,
}

impl<'p, P: PageQuery> SmartLocators<'p, P> {
    pub fn new(page: &'p P) -> Self {
        Self { page }
    }

    /// Find the first element matched by the winning candidate.
    ///
    /// Equivalent to [`find_all`](Self::find_all) followed by taking element
    /// zero of the match set.
    ///
    /// # Errors
    ///
    /// [`LocatorError::NoSuchElement`] if no candidate matched anything.
    pub async fn find(&self, locators: &Locators) -> Result<P::Element, LocatorError> {
        let mut matches = self.resolve(locators).await?;
        Ok(matches.swap_remove(0))
    }

    /// Find every element matched by the winning candidate.
    ///
    /// The returned set always has at least one element and comes from a
    /// single candidate; results are never merged across candidates.
    ///
    /// # Errors
    ///
    /// [`LocatorError::NoSuchElement`] if no candidate matched anything.
    pub async fn find_all(&self, locators: &Locators) -> Result<Vec<P::Element>, LocatorError> {
        self.resolve(locators).await
    }

    /// Ordered fallback scan. A candidate whose query errors is treated the
    /// same as one that matched nothing, so a malformed selector never
    /// aborts the chain; the first non-empty match set short-circuits.
    async fn resolve(&self, locators: &Locators) -> Result<Vec<P::Element>, LocatorError> {
        for candidate in locators.candidates() {
            let value = candidate.value();
            let outcome = match candidate.strategy() {
                Strategy::Alt => self.page.by_alt_text(value).await,
                Strategy::Label => self.page.by_label(value).await,
                Strategy::Placeholder => self.page.by_placeholder(value).await,
                Strategy::Role => self.page.by_role(value).await,
                Strategy::Text => self.page.by_text(value).await,
                Strategy::Title => self.page.by_title(value).await,
                Strategy::Selector => self.page.by_selector(value).await,
            };
            match outcome {
                Ok(matches) if !matches.is_empty() => {
                    debug!(
                        "candidate '{}' ({}) matched {} element(s)",
                        candidate.name(),
                        candidate.strategy().name(),
                        matches.len()
                    );
                    return Ok(matches);
                }
                Ok(_) => {
                    debug!("candidate '{}' matched nothing, falling back", candidate.name());
                }
                Err(e) => {
                    debug!(
                        "candidate '{}' query failed, falling back: {:#}",
                        candidate.name(),
                        e
                    );
                }
            }
        }
        Err(LocatorError::NoSuchElement)
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;
