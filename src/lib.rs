//! # smart-locators
//!
//! Fallback element resolution for WebDriver automation.
//!
//! Given a set of named locator hints (id, css, xpath, label, placeholder,
//! role, visible text, or any custom attribute), tries each hint in the order
//! it was supplied and returns the first one that matches something on the
//! page. Only when every hint comes up empty does the caller see an error.
//!
//! This makes tests resilient to markup churn: list a stable hint first and
//! one or two fallbacks after it, and the lookup keeps working when any single
//! hint rots.
//!
//! ## Usage
//!
//! ```no_run
//! use fantoccini::ClientBuilder;
//! use smart_locators::{Locators, SmartLocators};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ClientBuilder::rustls().connect("http://localhost:4444").await?;
//! client.goto("https://example.com/login").await?;
//!
//! let email = SmartLocators::new(&client)
//!     .find(
//!         &Locators::new()
//!             .id("email-field")
//!             .placeholder("Email")
//!             .css("form input[type='email']"),
//!     )
//!     .await?;
//! email.click().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Hints are tried strictly in the order they were added: the `id` first,
//! then the placeholder, then the CSS selector. Exactly one hint contributes
//! to the result; there is no merging across hints.
//!
//! Custom attributes work the same way:
//!
//! ```no_run
//! # use smart_locators::Locators;
//! // Equivalent to xpath("//*[@data-testid='submit']")
//! let locators = Locators::new().attr("data-testid", "submit");
//! ```
//!
//! The resolver is written against the [`PageQuery`] capability trait, which
//! is implemented for [`fantoccini::Client`]. It holds no state between
//! calls and adds no waiting or retries of its own.

/// Error surface for resolution failures
pub mod errors;

/// Locator candidates: vocabulary, builder, and normalization
pub mod locators;

/// Engine capability trait and its WebDriver implementation
pub mod page;

/// Ordered fallback resolution
pub mod resolver;

pub use errors::LocatorError;
pub use locators::{Candidate, Locators, Strategy};
pub use page::PageQuery;
pub use resolver::SmartLocators;
