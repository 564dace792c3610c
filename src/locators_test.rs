// Unit tests for the locator candidate model

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_insertion_order_preserved() {
    let locators = Locators::new()
        .placeholder("Email")
        .css("input")
        .text("Sign in");

    let candidates = locators.candidates();
    let names: Vec<&str> = candidates.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["placeholder", "css", "text"]);
}

#[test]
fn test_duplicate_key_overrides_in_place() {
    let locators = Locators::new()
        .id("first")
        .css("div")
        .id("second");

    let candidates = locators.candidates();
    assert_eq!(candidates.len(), 2);
    // The id entry keeps its original position with the new value
    assert_eq!(candidates[0].name(), "id");
    assert_eq!(candidates[0].value(), "//*[@id='second']");
    assert_eq!(candidates[1].name(), "css");
}

#[test]
fn test_empty_values_discarded() {
    let with_blank = Locators::new().id("").css("div");
    let without = Locators::new().css("div");

    assert_eq!(with_blank.candidates(), without.candidates());
    assert_eq!(with_blank.candidates().len(), 1);
}

#[test]
fn test_native_names_keep_value_and_strategy() {
    let candidates = Locators::new()
        .alt("logo")
        .label("Username")
        .placeholder("Email")
        .role("button")
        .text("Save")
        .title("tooltip")
        .candidates();

    assert_eq!(candidates.len(), 6);
    let expected = [
        ("logo", Strategy::Alt),
        ("Username", Strategy::Label),
        ("Email", Strategy::Placeholder),
        ("button", Strategy::Role),
        ("Save", Strategy::Text),
        ("tooltip", Strategy::Title),
    ];
    for (candidate, (value, strategy)) in candidates.iter().zip(expected) {
        assert_eq!(candidate.value(), value);
        assert_eq!(candidate.strategy(), strategy);
    }
}

#[test]
fn test_css_and_xpath_pass_through() {
    let candidates = Locators::new()
        .css("div.card > a")
        .xpath("//button[@disabled]")
        .candidates();

    assert_eq!(candidates[0].value(), "div.card > a");
    assert_eq!(candidates[0].strategy(), Strategy::Selector);
    assert_eq!(candidates[1].value(), "//button[@disabled]");
    assert_eq!(candidates[1].strategy(), Strategy::Selector);
}

#[test]
fn test_custom_attribute_rewritten_to_xpath() {
    let candidates = Locators::new().attr("data_test", "x").candidates();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].value(), "//*[@data_test='x']");
    assert_eq!(candidates[0].strategy(), Strategy::Selector);
}

#[test]
fn test_id_and_name_are_rewritten() {
    let candidates = Locators::new().id("login").name("q").candidates();

    assert_eq!(candidates[0].value(), "//*[@id='login']");
    assert_eq!(candidates[1].value(), "//*[@name='q']");
    assert_eq!(candidates[0].strategy(), Strategy::Selector);
}

#[test]
fn test_quote_in_custom_value() {
    let candidates = Locators::new().attr("data-test", "it's").candidates();
    assert_eq!(candidates[0].value(), "//*[@data-test=\"it's\"]");
}

#[test]
fn test_classification_is_case_insensitive() {
    let candidates = Locators::new().attr("ALT", "logo").candidates();

    assert_eq!(candidates[0].strategy(), Strategy::Alt);
    // Native values are never rewritten
    assert_eq!(candidates[0].value(), "logo");
}

#[test]
fn test_strategy_names() {
    assert_eq!(Strategy::Alt.name(), "alt");
    assert_eq!(Strategy::Placeholder.name(), "placeholder");
    assert_eq!(Strategy::Selector.name(), "selector");
}

#[test]
fn test_strategy_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Strategy::Role).unwrap(), "\"role\"");
}

#[test]
fn test_empty_set() {
    assert!(Locators::new().is_empty());
    assert!(Locators::new().candidates().is_empty());
}
