//! End-to-end tests across the facade: config sources feeding the
//! container-search operations.

use wrangle::{
    find_key_containing, flatten, key_exists, value_exists, Branch, Config, Find, Format, Key,
    Node, Scalar,
};

const SOURCE: &str = r#"
{
    "servers": {
        "web": {"host": "web-1.example.com", "port": 8080},
        "db": {"host": "db-1.example.com", "port": 5432}
    },
    "admin_email": "ops@example.com",
    "support_phone": "8 (912) 345-67-89"
}
"#;

#[test]
fn config_tree_is_searchable() {
    let node = Format::Json.parse(SOURCE).unwrap();
    let root = node.as_branch().unwrap();

    assert!(key_exists(&Scalar::from("port"), root));
    assert!(value_exists(&Scalar::Int(5432), root));
    assert_eq!(
        find_key_containing("db-1", root),
        Some(Key::Name("host".into()))
    );
    assert!(!Find::new().shallow().key_exists(&Scalar::from("host"), root));
}

#[test]
fn config_store_and_flatten_agree_on_leaves() {
    let node = Format::Json.parse(SOURCE).unwrap();

    let mut config = Config::new();
    config.load_node(&node, None);

    // Every flattened leaf is reachable through the dotted store.
    for (path, scalar) in flatten(&node, None) {
        let dotted = path.replace('[', ".").replace(']', "");
        let stored = config.get(&dotted).and_then(Node::as_scalar);
        assert_eq!(stored, Some(&scalar), "path {dotted}");
    }
}

#[test]
fn validators_accept_config_values() {
    let mut config = Config::new();
    config.load_str(SOURCE, Format::Json, None).unwrap();

    let email = config.get_str("admin_email").unwrap();
    assert!(wrangle::is_valid_email(email));

    let phone = config.get_str("support_phone").unwrap();
    assert_eq!(
        wrangle::normalize_ru_phone(phone).as_deref(),
        Some("+79123456789")
    );
}

#[test]
fn hand_built_trees_flow_through_the_store() {
    let mut tags = Branch::new();
    tags.push("web");
    tags.push("prod");

    let mut root = Branch::new();
    root.insert("tags", tags);

    let mut config = Config::new();
    config.load_node(&Node::Branch(root), Some("meta"));

    assert_eq!(config.get_str("meta.tags.0"), Some("web"));
    assert!(config.get("meta.tags").is_some());
}
