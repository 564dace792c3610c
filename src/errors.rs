use thiserror::Error;

/// Errors surfaced by the resolver
#[derive(Debug, Error)]
pub enum LocatorError {
    /// Every candidate was tried and none matched anything on the page.
    ///
    /// Also raised when the candidate set is empty after discarding
    /// empty-valued entries.
    #[error(
        "the element could not be located using the provided locator(s); \
         verify the locator or the element's presence on the page"
    )]
    NoSuchElement,
}
