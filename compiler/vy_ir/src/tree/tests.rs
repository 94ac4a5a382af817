use pretty_assertions::assert_eq;

use super::*;
use crate::literal::Literal;
use crate::operators::BinaryOp;
use crate::TreeBuilder;

/// `(1 + 2) * x` as an expression statement; returns the tree and the
/// outer, inner and `x` handles.
fn arithmetic() -> (SyntaxTree, NodeId, NodeId, NodeId) {
    let mut b = TreeBuilder::new();
    let one = b.int(1);
    let two = b.int(2);
    let inner = b.binop(one, BinaryOp::Add, two);
    let x = b.name("x");
    let outer = b.binop(inner, BinaryOp::Mul, x);
    let stmt = b.expr_stmt(outer);
    b.stmt(stmt).unwrap();
    (b.finish(), outer, inner, x)
}

#[test]
fn alloc_links_parents() {
    let (tree, outer, inner, x) = arithmetic();
    assert_eq!(tree.parent(inner), Some(outer));
    assert_eq!(tree.parent(x), Some(outer));
    assert_eq!(tree.parent(tree.root()), None);
    assert!(tree.is_attached(x));
}

#[test]
fn push_stmt_rejects_attached_nodes() {
    let (mut tree, outer, ..) = arithmetic();
    assert_eq!(
        tree.push_stmt(outer),
        Err(TreeError::AlreadyAttached { node: outer })
    );
    let root = tree.root();
    assert_eq!(
        tree.push_stmt(root),
        Err(TreeError::AlreadyAttached { node: root })
    );
}

#[test]
fn descendants_in_document_order() {
    let (tree, outer, inner, x) = arithmetic();
    let forward: Vec<_> = tree
        .get_descendants(tree.root(), &[NodeTag::BinOp, NodeTag::Name], false)
        .collect();
    assert_eq!(forward, vec![outer, inner, x]);

    let backward: Vec<_> = tree
        .get_descendants(tree.root(), &[NodeTag::BinOp, NodeTag::Name], true)
        .collect();
    assert_eq!(backward, vec![x, inner, outer]);
}

#[test]
fn descendants_exclude_self_and_are_restartable() {
    let (tree, outer, ..) = arithmetic();
    let all = tree.get_descendants(outer, &[], false);
    assert_eq!(all.len(), 4);
    assert!(all.clone().all(|node| node != outer));
    assert_eq!(all.clone().count(), all.count());
}

#[test]
fn descendants_with_predicate() {
    let (tree, _, _, x) = arithmetic();
    let names: Vec<_> = tree
        .get_descendants_where(tree.root(), &[NodeTag::Name], true, |_, kind| {
            kind.name_id() == Some("x")
        })
        .collect();
    assert_eq!(names, vec![x]);
}

#[test]
fn ancestor_lookup() {
    let (tree, outer, inner, _) = arithmetic();
    let one = tree.children(inner)[0];
    assert_eq!(tree.get_ancestor(one, &[]), Some(inner));
    assert_eq!(tree.get_ancestor(one, &[NodeTag::Expr]), tree.parent(outer));
    assert_eq!(tree.get_ancestor(one, &[NodeTag::Subscript]), None);
    assert!(tree.is_within(one, outer));
    assert!(tree.is_within(outer, outer));
    assert!(!tree.is_within(outer, inner));
}

#[test]
fn replace_swaps_slot_and_detaches_old() {
    let (mut tree, outer, inner, _) = arithmetic();
    let three = tree.from_node(inner, NodeKind::Literal(Literal::Int(3.into())));
    assert_eq!(tree.span(three), tree.span(inner));

    tree.replace_in_tree(inner, three).unwrap();
    assert_eq!(tree.parent(three), Some(outer));
    assert_eq!(tree.parent(inner), None);
    assert!(!tree.is_attached(inner));
    assert_eq!(tree.unparse(outer), "3 * x");
}

#[test]
fn replace_guards_invariants() {
    let (mut tree, outer, inner, x) = arithmetic();
    let lit = tree.from_node(inner, NodeKind::Literal(Literal::Bool(true)));
    tree.replace_in_tree(inner, lit).unwrap();

    let again = tree.from_node(inner, NodeKind::Literal(Literal::Bool(false)));
    assert_eq!(
        tree.replace_in_tree(inner, again),
        Err(TreeError::Detached { node: inner })
    );
    assert_eq!(
        tree.replace_in_tree(x, outer),
        Err(TreeError::AlreadyAttached { node: outer })
    );
    let root = tree.root();
    assert_eq!(tree.replace_in_tree(root, again), Err(TreeError::ReplaceRoot));
}

#[test]
fn const_value_of_nested_lists() {
    let mut b = TreeBuilder::new();
    let one = b.int(1);
    let two = b.int(2);
    let inner = b.list(vec![one, two]);
    let empty = b.list(Vec::new());
    let outer = b.list(vec![inner, empty]);
    let name = b.name("x");
    let mixed = b.list(vec![name]);
    let tree = b.finish();

    assert_eq!(
        tree.const_value(outer),
        Some(ConstValue::List(vec![
            ConstValue::List(vec![ConstValue::int(1), ConstValue::int(2)]),
            ConstValue::List(Vec::new()),
        ]))
    );
    assert_eq!(tree.const_value(mixed), None);
}

#[test]
fn alloc_const_uses_template_span() {
    let (mut tree, _, inner, _) = arithmetic();
    let value = ConstValue::List(vec![ConstValue::int(7), ConstValue::boolean(false)]);
    let list = tree.alloc_const(inner, &value);
    assert_eq!(tree.parent(list), None);
    assert_eq!(tree.const_value(list), Some(value));
    for element in tree.children(list) {
        assert_eq!(tree.span(element), tree.span(inner));
        assert_eq!(tree.parent(element), Some(list));
    }
}

#[test]
fn copy_subtree_keeps_types() {
    let mut b = TreeBuilder::new();
    let one = b.int(1);
    let list = b.list(vec![one]);
    let anchor = b.name("here");
    let mut tree = b.finish();
    tree.set_ty(one, Type::INT128);

    let copy = tree.copy_subtree(anchor, list);
    assert_ne!(copy, list);
    let copied_one = tree.children(copy)[0];
    assert_ne!(copied_one, one);
    assert_eq!(tree.ty(copied_one), Some(&Type::INT128));
    assert_eq!(tree.span(copied_one), tree.span(anchor));
    assert_eq!(tree.parent(one), Some(list));
}

#[test]
fn detached_subtree_can_be_reparented() {
    let (mut tree, outer, inner, _) = arithmetic();
    let three = tree.alloc(NodeKind::Literal(Literal::Int(3.into())), Span::DUMMY);
    tree.replace_in_tree(inner, three).unwrap();
    assert!(!tree.is_attached(inner));

    let wrapper = tree.alloc(NodeKind::Expr { value: inner }, Span::DUMMY);
    assert_eq!(tree.parent(inner), Some(wrapper));
    assert_eq!(tree.parent(three), Some(outer));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "already has a parent")]
fn alloc_rejects_attached_child() {
    let (mut tree, _, inner, _) = arithmetic();
    tree.alloc(NodeKind::Expr { value: inner }, Span::DUMMY);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "already has a parent")]
fn alloc_rejects_module_root() {
    let mut tree = SyntaxTree::new();
    tree.alloc(NodeKind::Expr { value: tree.root() }, Span::DUMMY);
}
