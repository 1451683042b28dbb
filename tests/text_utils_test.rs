use perito_ui::utils::text::*;

#[test]
fn test_capitalize_lowercase_word() {
    assert_eq!(capitalize("hello"), "Hello");
}

#[test]
fn test_capitalize_uppercase_word() {
    assert_eq!(capitalize("HELLO"), "Hello");
}

#[test]
fn test_capitalize_empty() {
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_capitalize_destroys_internal_capitals() {
    assert_eq!(capitalize("McDonald"), "Mcdonald");
}

#[test]
fn test_capitalize_accented_characters() {
    assert_eq!(capitalize("ángel PÉREZ"), "Ángel pérez");
}

#[test]
fn test_truncate_cuts_and_appends_ellipsis() {
    let result = truncate("abcdefghij", 5);
    assert_eq!(result, "abcde...");
    assert_eq!(result.chars().count(), 8);
}

#[test]
fn test_truncate_short_text_unchanged() {
    assert_eq!(truncate("abc", 5), "abc");
    assert_eq!(truncate("abcde", 5), "abcde");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_counts_characters_not_bytes() {
    assert_eq!(truncate("añádir", 3), "añá...");
}

#[test]
fn test_truncate_default_length() {
    let long = "x".repeat(60);
    let result = truncate_default(&long);
    assert_eq!(result.chars().count(), 53);
    assert!(result.ends_with("..."));

    let short = "x".repeat(50);
    assert_eq!(truncate_default(&short), short);
}
