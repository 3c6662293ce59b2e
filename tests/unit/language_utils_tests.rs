/*!
 * Tests for language label lookup
 */

use galleria::language_utils::{get_language_name, get_native_name, language_labels, resolve_language};

/// Test resolving two- and three-letter codes
#[test]
fn test_resolve_language_withDifferentCodeForms_shouldAgree() {
    let two = resolve_language("fr").unwrap();
    let three = resolve_language("fra").unwrap();
    let bibliographic = resolve_language("fre").unwrap();

    assert_eq!(two, three);
    assert_eq!(three, bibliographic);
}

/// Test that invalid codes are rejected
#[test]
fn test_resolve_language_withInvalidCode_shouldError() {
    assert!(resolve_language("").is_err());
    assert!(resolve_language("q").is_err());
    assert!(resolve_language("english").is_err());
}

/// Test English names
#[test]
fn test_get_language_name_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("ja").unwrap(), "Japanese");
    assert_eq!(get_language_name("es_MX").unwrap(), "Spanish");
}

/// Test native names are capitalized autonyms
#[test]
fn test_get_native_name_shouldCapitalizeAutonym() {
    assert_eq!(get_native_name("de").unwrap(), "Deutsch");
    assert_eq!(get_native_name("fr").unwrap(), "Français");
}

/// Test labels for regional variants and plain codes
#[test]
fn test_language_labels_shouldCombineNameAndRegion() {
    let (native, english) = language_labels("de-AT");
    assert_eq!(native, "Deutsch (Österreich)");
    assert_eq!(english, "German (Austria)");

    let (native, english) = language_labels("en-IN");
    assert_eq!(native, "English (India)");
    assert_eq!(english, "English (India)");

    let (_, english) = language_labels("en");
    assert_eq!(english, "English");
}

/// Test that a tag naming the language's home region gets the plain name
#[test]
fn test_language_labels_withHomeRegion_shouldDropRegion() {
    assert_eq!(language_labels("zh-CN").1, "Chinese");
    assert_eq!(language_labels("en_us").1, "English");
    assert_eq!(language_labels("fr-FR"), ("Français".to_string(), "French".to_string()));
}

/// Test that unknown tags fall back to the tag itself
#[test]
fn test_language_labels_withUnknownTag_shouldUseTag() {
    assert_eq!(language_labels("klingon"), ("klingon".to_string(), "klingon".to_string()));
}
