use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use valtree::converter::EnumConverter;
use valtree::{from_str, Error, ValTree, WriteOptions};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load(name: &str) -> ValTree {
    let mut tree = ValTree::new();
    tree.parse_file(fixture(name)).unwrap();
    tree
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum Ability {
    MindReading,
    ExplosiveArrows,
    MindControl,
    Flatulence,
}

#[test]
fn test_example_document() {
    let mut tree = load("example.txt");
    tree.register_converter(EnumConverter::<Ability>::new());

    assert_eq!(tree.query_for::<i32>("orc.grunt.health").unwrap(), Some(100));
    assert_eq!(tree.query_for::<i32>("orc.wizard.health").unwrap(), Some(50));
    assert_eq!(
        tree.query_for::<Ability>("orc.grunt.ability").unwrap(),
        Some(Ability::Flatulence)
    );
    assert_eq!(
        tree.query_for::<Ability>("orc.wizard.ability").unwrap(),
        Some(Ability::MindControl)
    );
}

#[test]
fn test_readme_document() {
    let tree = load("test.txt");

    assert!(tree.query("a").unwrap().is_null());
    assert!(tree.query("a.b").unwrap().is_null());
    assert!(tree.query("a.b.c").unwrap().is_null());
    assert_eq!(tree.query_for_string("a.b.d"), Some("1"));
    assert_eq!(tree.query_for_string("a.b.e"), Some("2.01"));
    assert_eq!(tree.query_for_string("a.b.f"), Some("something"));
    assert!(tree.query("g-is-long").unwrap().is_null());
    assert_eq!(tree.query_for_string("g-is-long.h"), Some("h is a cool letter"));
    assert!(tree.query("g-is-long.i").unwrap().is_null());
}

#[test]
fn test_uneven_indentation_document() {
    let tree = load("test2.txt");

    let key1 = tree.child("key1").unwrap();
    assert_eq!(key1.string(), Some("val1"));
    assert_eq!(key1.query_for_string("key2"), Some("test"));
    assert_eq!(
        key1.query_for_string("key2.key3.key4-1.key5-1"),
        Some("should have no problem with this indentation")
    );
    assert_eq!(key1.query_for_string("key2.key3.key4-2"), Some("sibling"));
    assert!(key1.query("key2b").unwrap().is_null());
}

#[test]
fn test_mismatched_leading_whitespace_between_siblings() {
    let tree = from_str(" k1 1\n\tk2 2");

    assert_eq!(tree.query_for_string("k1"), Some("1"));
    assert_eq!(tree.query_for_string("k2"), Some("2"));
}

#[test]
fn test_key_value_separators() {
    for input in [
        "key value",
        "key\tvalue",
        "key        value",
        "  \t   key        value",
        "key value // ignore me",
    ] {
        let tree = from_str(input);
        assert_eq!(tree.size(), 1, "{input:?}");
        assert_eq!(tree.child("key").unwrap().key(), Some("key"), "{input:?}");
        assert_eq!(tree.query_for_string("key"), Some("value"), "{input:?}");
    }
}

#[test]
fn test_comment_lines() {
    let tree = from_str("// ignore me\n\t  // ignore me too\nkey value");

    assert_eq!(tree.size(), 1);
    assert_eq!(tree.query_for_string("key"), Some("value"));
}

#[test]
fn test_values_with_spaces() {
    let tree = from_str("key value can have spaces");
    assert_eq!(tree.query_for_string("key"), Some("value can have spaces"));
}

#[test]
fn test_numeric_values() {
    let tree = from_str("int 111\nfloat 2.33");

    assert_eq!(tree.child("int").unwrap().integer().unwrap(), Some(111));
    let float = tree.child("float").unwrap().float().unwrap().unwrap();
    assert!((float - 2.33).abs() < 0.001);
}

#[test]
fn test_windows_line_endings() {
    let tree = from_str("1 v1\r\n2 v2");

    assert_eq!(tree.query_for_string("1"), Some("v1"));
    assert_eq!(tree.query_for_string("2"), Some("v2"));
}

#[test]
fn test_save_and_reload_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.txt");

    let tree = load("test.txt");
    tree.save_file(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("a\n b\n  c\n  d 1\n"));
    assert!(!written.contains("//"));

    let mut reloaded = ValTree::new();
    reloaded.parse_file(&path).unwrap();
    assert_eq!(reloaded, tree);
}

#[test]
fn test_save_with_tabs_round_trips() {
    let tree = load("example.txt");
    let text = tree.to_string_with_options(&WriteOptions::tabs());

    assert!(text.contains("\n\tgrunt\n\t\thealth 100\n"));
    assert_eq!(from_str(&text), tree);
}

#[test]
fn test_missing_file_is_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut tree = ValTree::new();

    let err = tree.parse_file(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, Error::SourceRead(_)));
    assert!(err.to_string().starts_with("A problem occurred"));
}
