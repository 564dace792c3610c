// Unit tests for selector synthesis

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_css_attr() {
    assert_eq!(css_attr("placeholder", "Email"), "[placeholder=\"Email\"]");
    assert_eq!(css_attr("title", "say \"hi\""), "[title=\"say \\\"hi\\\"\"]");
}

#[test]
fn test_xpath_literal_plain() {
    assert_eq!(xpath_literal("Save"), "'Save'");
}

#[test]
fn test_xpath_literal_with_apostrophe() {
    assert_eq!(xpath_literal("it's"), "\"it's\"");
}

#[test]
fn test_xpath_literal_with_both_quote_kinds() {
    // No escaping in XPath 1.0 literals, so mixed quotes need concat()
    assert_eq!(
        xpath_literal("a'b\"c"),
        "concat('a', \"'\", 'b\"c')"
    );
}

#[test]
fn test_is_xpath_detection() {
    assert!(is_xpath("//button"));
    assert!(is_xpath("/html/body"));
    assert!(is_xpath("./div"));
    assert!(is_xpath("(//a)[1]"));

    assert!(!is_xpath("div.card"));
    assert!(!is_xpath("#login"));
    // A bare class selector starts with '.' but is CSS
    assert!(!is_xpath(".card"));
}

#[test]
fn test_label_xpath_covers_association_forms() {
    let expr = label_xpath("Username");
    assert!(expr.contains("//label[normalize-space(string())='Username']/@for"));
    assert!(expr.contains("self::input or self::textarea or self::select"));
    assert!(expr.contains("@aria-label='Username'"));
}

#[test]
fn test_role_xpath_widens_implicit_roles() {
    let expr = role_xpath("button");
    assert!(expr.contains("//*[@role='button']"));
    assert!(expr.contains("//button"));
    assert!(expr.contains("//input[@type='submit']"));
}

#[test]
fn test_role_xpath_unknown_role_is_attribute_only() {
    assert_eq!(role_xpath("tab"), "//*[@role='tab']");
}

#[test]
fn test_text_xpath() {
    assert_eq!(
        text_xpath("Sign in"),
        "//*[text()[contains(normalize-space(.), 'Sign in')]]"
    );
}
