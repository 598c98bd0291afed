//! Tests for FileName
//!
//! These tests verify that only single, plain path components are accepted
//! and that every accepted name resolves inside the storage root.

use std::path::Path;

use filestash::storage::{FileName, MAX_NAME_LEN, TEMP_PREFIX};
use filestash::StashError;

fn assert_invalid(name: &str) {
    match FileName::parse(name) {
        Err(StashError::InvalidName { name: rejected, .. }) => assert_eq!(rejected, name),
        other => panic!("Expected InvalidName for {name:?}, got {other:?}"),
    }
}

// =============================================================================
// Accepted Names
// =============================================================================

#[test]
fn test_plain_names_accepted() {
    for name in ["a.txt", "report.final.pdf", "no_extension", "with space", "ünïcödé"] {
        let parsed = FileName::parse(name).unwrap();
        assert_eq!(parsed.as_str(), name);
    }
}

#[test]
fn test_dotfiles_accepted() {
    assert_eq!(FileName::parse(".hidden").unwrap().as_str(), ".hidden");
    assert_eq!(FileName::parse("...").unwrap().as_str(), "...");
}

#[test]
fn test_max_length_accepted() {
    let name = "a".repeat(MAX_NAME_LEN);
    assert!(FileName::parse(&name).is_ok());
}

#[test]
fn test_resolve_is_direct_child() {
    let root = Path::new("/data/storage");
    let name = FileName::parse("a.txt").unwrap();

    let path = name.resolve(root);

    assert_eq!(path, root.join("a.txt"));
    assert_eq!(path.parent(), Some(root));
}

// =============================================================================
// Rejected Names
// =============================================================================

#[test]
fn test_empty_rejected() {
    assert_invalid("");
}

#[test]
fn test_dot_components_rejected() {
    assert_invalid(".");
    assert_invalid("..");
}

#[test]
fn test_traversal_rejected() {
    assert_invalid("../a.txt");
    assert_invalid("../../etc/passwd");
    assert_invalid("a/../../b");
    assert_invalid("..\\a.txt");
}

#[test]
fn test_absolute_rejected() {
    assert_invalid("/etc/passwd");
    assert_invalid("\\windows\\system32");
}

#[test]
fn test_subdirectories_rejected() {
    assert_invalid("dir/a.txt");
    assert_invalid("a.txt/");
    assert_invalid("dir\\a.txt");
}

#[test]
fn test_nul_rejected() {
    assert_invalid("a\0b");
}

#[test]
fn test_too_long_rejected() {
    assert_invalid(&"a".repeat(MAX_NAME_LEN + 1));
}

#[test]
fn test_temp_prefix_rejected() {
    assert_invalid(TEMP_PREFIX);
    assert_invalid(&format!("{TEMP_PREFIX}-1-2"));
}
