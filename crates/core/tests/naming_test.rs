//! Tests for caption derivation, attribute formatting, and the skip list.

use folio_core::naming::{derive_caption, format_attribute, is_skipped_attribute};

// ============================================================================
// derive_caption
// ============================================================================

#[test]
fn test_prefix_and_extension_stripped() {
    assert_eq!(derive_caption("03=sunset.jpg"), "sunset");
}

#[test]
fn test_extension_only() {
    assert_eq!(derive_caption("photo.tiff"), "photo");
}

#[test]
fn test_no_extension_passes_through() {
    assert_eq!(derive_caption("noext"), "noext");
}

#[test]
fn test_case_and_punctuation_untouched() {
    assert_eq!(derive_caption("12=Dry Wash, North.webp"), "Dry Wash, North");
}

#[test]
fn test_derivation_is_idempotent() {
    for name in ["03=sunset.jpg", "photo.tiff", "noext", "12=Dry Wash, North.webp", ""] {
        let once = derive_caption(name);
        assert_eq!(derive_caption(&once), once, "not idempotent for {name:?}");
    }
}

// ============================================================================
// format_attribute
// ============================================================================

#[test]
fn test_underscores_become_title_case() {
    assert_eq!(format_attribute("project_owner"), "Project Owner");
}

#[test]
fn test_single_word() {
    assert_eq!(format_attribute("id"), "Id");
}

#[test]
fn test_empty_key() {
    assert_eq!(format_attribute(""), "");
}

#[test]
fn test_already_formatted_is_stable() {
    assert_eq!(format_attribute("Project Owner"), "Project Owner");
}

// ============================================================================
// is_skipped_attribute
// ============================================================================

#[test]
fn test_skip_list_membership() {
    for key in ["title", "id", "locked", "page", "type"] {
        assert!(is_skipped_attribute(key), "{key} should be skipped");
    }
}

#[test]
fn test_skip_list_is_case_sensitive() {
    assert!(!is_skipped_attribute("Title"));
}

#[test]
fn test_other_keys_pass() {
    assert!(!is_skipped_attribute("budget"));
}
