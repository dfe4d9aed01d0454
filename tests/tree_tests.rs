use bracktree::bracket::{parse_str, write_bracket_file};
use bracktree::model::{Attribute, LabeledTree, LabeledTreeBuilder, NodeLabel, TreeBuilder};

#[test]
fn test_building_tree() {
    let mut tree = LabeledTree::new(4);
    let index_body = tree.add_node(NodeLabel::element("body"));
    let index_p = tree.add_node(NodeLabel::element("p"));
    let index_text = tree.add_node(NodeLabel::text("Kia ora"));
    let index_hr = tree.add_node(NodeLabel::element("hr"));
    tree.add_child(index_p, index_text);
    tree.add_child(index_body, index_p);
    tree.add_child(index_body, index_hr);
    tree.set_root(index_body);

    // Counts
    assert_eq!(tree.num_nodes(), 4);
    assert_eq!(tree.num_text_leaves(), 1);
    assert_eq!(tree.num_elements(), 3);
    assert_eq!(tree.depth(), 3);

    // Root
    let root = tree.root();
    assert_eq!(root.index(), index_body);
    assert_eq!(root.children(), &[index_p, index_hr]);
    assert!(!root.has_parent());

    // Text leaf
    let text = &tree[index_text];
    assert!(text.is_text());
    assert!(text.is_leaf());
    assert_eq!(text.parent(), Some(index_p));
    assert_eq!(tree.label(index_text).content(), "Kia ora");

    assert!(tree.is_valid());
    assert_eq!(tree.to_bracket(), "{body{p{#text:Kia ora}}{hr}}");
}

#[test]
#[should_panic]
fn test_get_root_panics_on_empty_tree() {
    let tree = LabeledTree::new(2);
    tree.root(); // Should panic
}

#[test]
#[should_panic]
fn test_get_node_out_of_bounds() {
    let tree = LabeledTree::new(2);
    let _ = &tree[55];
}

#[test]
#[should_panic]
fn test_text_leaf_cannot_have_children() {
    let mut tree = LabeledTree::new(2);
    let text = tree.add_node(NodeLabel::text("x"));
    let child = tree.add_node(NodeLabel::element("b"));
    tree.add_child(text, child);
}

#[test]
#[should_panic]
fn test_node_cannot_have_two_parents() {
    let mut tree = LabeledTree::new(3);
    let a = tree.add_node(NodeLabel::element("a"));
    let b = tree.add_node(NodeLabel::element("b"));
    let c = tree.add_node(NodeLabel::element("c"));
    tree.add_child(a, c);
    tree.add_child(b, c);
}

#[test]
fn test_invalid_without_root() {
    let mut tree = LabeledTree::new(1);
    tree.add_node(NodeLabel::element("a"));
    assert!(!tree.is_valid());
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.to_bracket(), "");
    assert_eq!(tree.post_order_iter().count(), 0);
}

#[test]
fn test_invalid_with_unreachable_node() {
    let mut tree = LabeledTree::new(2);
    let a = tree.add_node(NodeLabel::element("a"));
    tree.add_node(NodeLabel::element("orphan"));
    tree.set_root(a);
    assert!(!tree.is_valid());
}

#[test]
fn test_invalid_when_root_has_parent() {
    let mut tree = LabeledTree::new(2);
    let a = tree.add_node(NodeLabel::element("a"));
    let b = tree.add_node(NodeLabel::element("b"));
    tree.add_child(a, b);
    tree.set_root(b);
    assert!(!tree.is_valid());
}

#[test]
fn test_post_order_iter() {
    let tree = parse_str("{A{B{X}{Y}}{C}}").unwrap();
    let names: Vec<_> = tree.post_order_iter().map(|n| n.name()).collect();
    assert_eq!(names, ["X", "Y", "B", "C", "A"]);
}

#[test]
fn test_pre_order_iter() {
    let tree = parse_str("{A{B{X}{Y}}{C}}").unwrap();
    let names: Vec<_> = tree.pre_order_iter().map(|n| n.name()).collect();
    assert_eq!(names, ["A", "B", "X", "Y", "C"]);
}

#[test]
fn test_isomorphism_ignores_attributes_and_indices() {
    // Same shape built in a different arena order, with attributes
    let mut tree = LabeledTree::new(3);
    let b = tree.add_node(NodeLabel::element_with_attributes(
        "B",
        vec![Attribute::new("class", "x")],
    ));
    let a = tree.add_node(NodeLabel::element("A"));
    let text = tree.add_node(NodeLabel::text("t"));
    tree.add_child(a, text);
    tree.add_child(a, b);
    tree.set_root(a);

    let parsed = parse_str("{A{#text:t}{B}}").unwrap();
    assert!(tree.is_isomorphic_to(&parsed));
    assert!(parsed.is_isomorphic_to(&tree));
    assert_ne!(tree, parsed);

    let other_content = parse_str("{A{#text:u}{B}}").unwrap();
    assert!(!parsed.is_isomorphic_to(&other_content));

    let other_shape = parse_str("{A{#text:t}{B{C}}}").unwrap();
    assert!(!parsed.is_isomorphic_to(&other_shape));
}

#[test]
fn test_display_outline() {
    let tree = parse_str("{html{body{#text:Hello}{br}}}").unwrap();
    let expected = "\
Tree with 4 nodes (1 text leaves):
  [0] <html>
    └─ [1] <body>
        ├─ [2] \"Hello\"
        └─ [3] <br>
";
    assert_eq!(tree.to_string(), expected);
}

#[test]
fn test_labeled_tree_builder_lifecycle() {
    let mut builder = LabeledTreeBuilder::new();
    builder.init_next(2);
    let root = builder.make_leaf(NodeLabel::element("r"));
    let child = builder.make_leaf(NodeLabel::text("c"));
    builder.add_child(root, child);
    let tree = builder.finish_tree(root).unwrap();
    assert_eq!(tree.to_bracket(), "{r{#text:c}}");

    // Builder is empty again
    assert!(builder.finish_tree(0).is_none());
}

// ============= NodeLabel Tests =============

#[test]
fn test_text_label() {
    let label = NodeLabel::text("a:b");
    assert!(label.is_text());
    assert_eq!(label.name(), "#text");
    assert_eq!(label.content(), "a:b");
    assert!(label.attributes().is_empty());
}

#[test]
fn test_element_label_with_attributes() {
    let label = NodeLabel::element_with_attributes(
        "a",
        vec![Attribute::new("href", "/home"), Attribute::new("rel", "nofollow")],
    );
    assert!(!label.is_text());
    assert_eq!(label.content(), "");
    let names: Vec<_> = label.attributes().iter().map(|a| a.name()).collect();
    assert_eq!(names, ["href", "rel"]);
    assert_eq!(label.attributes()[0].value(), "/home");
}

#[test]
#[should_panic]
fn test_element_label_rejects_text_marker() {
    NodeLabel::element("#text");
}

#[test]
#[should_panic]
fn test_element_label_rejects_empty_name() {
    NodeLabel::element("");
}

// ============= Writer Tests =============

#[test]
fn test_to_bracket_reproduces_parsed_input() {
    let input = "{html{head{title{#text:Index}}}{body{p{#text:\"a {b\"}{br}{#text:c}}{p}}}";
    let tree = parse_str(input).unwrap();
    assert_eq!(tree.to_bracket(), input);
}

#[test]
fn test_write_bracket_file_one_tree_per_line() {
    let trees = vec![
        parse_str("{A{#text:x}}").unwrap(),
        parse_str("{B{C}{D}}").unwrap(),
    ];
    let path = std::env::temp_dir().join(format!("bracktree-writer-{}.txt", std::process::id()));

    let file = std::fs::File::create(&path).unwrap();
    write_bracket_file(file, &trees).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, "{A{#text:x}}\n{B{C}{D}}\n");

    let reparsed: Vec<_> = written.lines().map(|line| parse_str(line).unwrap()).collect();
    for (original, again) in trees.iter().zip(&reparsed) {
        assert!(original.is_isomorphic_to(again));
    }
}
