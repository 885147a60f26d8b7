use valtree::{valtree, ValTree};

#[test]
fn test_valtree_macro_empty() {
    let tree = valtree!();
    assert!(tree.is_empty());
    assert_eq!(tree, ValTree::new());
}

#[test]
fn test_valtree_macro_numbers() {
    let tree = valtree!({
        "int" => 42,
        "negative" => -123,
        "float" => 3.5,
    });

    assert_eq!(tree.query_for_integer("int").unwrap(), Some(42));
    assert_eq!(tree.query_for_integer("negative").unwrap(), Some(-123));
    assert_eq!(tree.query_for_float("float").unwrap(), Some(3.5));
}

#[test]
fn test_valtree_macro_strings() {
    let name = String::from("Grug the Large");
    let tree = valtree!({
        "name" => name,
        "greeting" => "hello world",
    });

    assert_eq!(tree.query_for_string("name"), Some("Grug the Large"));
    assert_eq!(tree.query_for_string("greeting"), Some("hello world"));
}

#[test]
fn test_valtree_macro_blank_entries() {
    let tree = valtree!({ "a.b", "c" });

    assert!(tree.query("a").unwrap().is_null());
    assert!(tree.query("a.b").unwrap().is_null());
    assert!(tree.query("c").unwrap().is_null());
    assert_eq!(tree.to_string(), "a\n b\nc\n");
}

#[test]
fn test_valtree_macro_nested_paths() {
    let tree = valtree!({
        "orc.grunt.health" => 100,
        "orc.grunt.ability" => "FLATULENCE",
        "orc.wizard.health" => 50,
    });

    assert_eq!(
        tree.to_string(),
        "orc\n grunt\n  health 100\n  ability FLATULENCE\n wizard\n  health 50\n"
    );
}

#[test]
fn test_valtree_macro_matches_parsed_text() {
    let built = valtree!({
        "key1" => "val1",
        "key1.key2" => "test",
    });
    let parsed: ValTree = "key1 val1\n    key2 test\n".parse().unwrap();

    assert_eq!(built, parsed);
}
