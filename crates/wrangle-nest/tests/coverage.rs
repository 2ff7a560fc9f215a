//! Cross-module behavior tests for the nest crate.

use wrangle_nest::{
    find_key, find_key_containing, flatten, key_exists, map_leaves, replace_in_leaves,
    value_exists, Branch, Find, Key, Node, Scalar,
};

/// Builds the fixture used across these tests:
/// {config: {db: {host: "localhost", port: 5432}, debug: true}, tags: ["web", "prod"]}
fn fixture() -> Branch {
    let mut db = Branch::new();
    db.insert("host", "localhost");
    db.insert("port", 5432i64);

    let mut config = Branch::new();
    config.insert("db", db);
    config.insert("debug", true);

    let mut tags = Branch::new();
    tags.push("web");
    tags.push("prod");

    let mut root = Branch::new();
    root.insert("config", config);
    root.insert("tags", tags);
    root
}

// ============================================================================
// Search operations over a realistic tree
// ============================================================================

#[test]
fn keys_found_at_every_depth() {
    let root = fixture();
    for key in ["config", "db", "host", "port", "debug", "tags"] {
        assert!(key_exists(&Scalar::from(key), &root), "missing key {key}");
    }
    assert!(key_exists(&Scalar::Int(0), &root));
    assert!(!key_exists(&Scalar::from("password"), &root));
}

#[test]
fn value_search_spans_branches() {
    let root = fixture();
    assert!(value_exists(&Scalar::from("localhost"), &root));
    assert!(value_exists(&Scalar::Int(5432), &root));
    // Loose: the stored integer also matches its string form.
    assert!(value_exists(&Scalar::from("5432"), &root));
    assert!(!Find::new().strict().value_exists(&Scalar::from("5432"), &root));
}

#[test]
fn find_key_locates_nested_leaf() {
    let root = fixture();
    assert_eq!(
        find_key(&Scalar::from("prod"), &root),
        Some(Key::Index(1))
    );
    assert_eq!(
        find_key_containing("local", &root),
        Some(Key::Name("host".into()))
    );
}

#[test]
fn shallow_search_sees_only_the_surface() {
    let root = fixture();
    let shallow = Find::new().shallow();

    assert!(shallow.key_exists(&Scalar::from("config"), &root));
    assert!(!shallow.key_exists(&Scalar::from("host"), &root));
    assert!(!shallow.value_exists(&Scalar::from("web"), &root));
    assert_eq!(shallow.find_key_containing("web", &root), None);
}

// ============================================================================
// Flatten
// ============================================================================

#[test]
fn flatten_full_fixture() {
    let flat = flatten(&Node::Branch(fixture()), None);
    let paths: Vec<_> = flat.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "config[db][host]",
            "config[db][port]",
            "config[debug]",
            "tags[0]",
            "tags[1]",
        ]
    );
}

#[test]
fn flatten_preserves_every_leaf() {
    let root = fixture();
    let leaf_count = Node::Branch(root.clone()).leaf_count();
    let flat = flatten(&Node::Branch(root), None);
    assert_eq!(flat.len(), leaf_count);
}

// ============================================================================
// Transforms compose with search
// ============================================================================

#[test]
fn mapped_tree_is_searchable() {
    let root = fixture();
    let upper = map_leaves(&Node::Branch(root), |s| match s {
        Scalar::Str(v) => Scalar::Str(v.to_uppercase()),
        other => other.clone(),
    });

    let branch = upper.as_branch().unwrap();
    assert!(value_exists(&Scalar::from("LOCALHOST"), branch));
    assert!(!value_exists(&Scalar::from("localhost"), branch));
    // Keys are untouched.
    assert!(key_exists(&Scalar::from("host"), branch));
}

#[test]
fn replaced_tree_keeps_shape() {
    let root = fixture();
    let replaced = replace_in_leaves(&root, "localhost", "db.internal");

    assert_eq!(
        find_key(&Scalar::from("db.internal"), &replaced),
        Some(Key::Name("host".into()))
    );
    let flat_before = flatten(&Node::Branch(root), None);
    let flat_after = flatten(&Node::Branch(replaced), None);
    let paths_before: Vec<_> = flat_before.iter().map(|(p, _)| p).collect();
    let paths_after: Vec<_> = flat_after.iter().map(|(p, _)| p).collect();
    assert_eq!(paths_before, paths_after);
}

// ============================================================================
// Flatten round trip: leaf values recoverable by path
// ============================================================================

#[test]
fn flat_paths_resolve_back_to_their_leaves() {
    let root = fixture();
    let flat = flatten(&Node::Branch(root.clone()), None);

    for (path, scalar) in &flat {
        let mut segments = path.split('[');
        let first = segments.next().unwrap();
        let mut node = root.get(first).unwrap();
        for segment in segments {
            let key = segment.trim_end_matches(']');
            node = node.as_branch().unwrap().get(key).unwrap();
        }
        assert_eq!(node.as_scalar(), Some(scalar), "path {path}");
    }
}
