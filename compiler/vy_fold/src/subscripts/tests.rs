use pretty_assertions::assert_eq;
use vy_ir::{TreeBuilder, Type};

use super::*;

/// `value[index]` as an expression statement; returns the tree and the
/// statement.
fn subscript_stmt(
    build: impl FnOnce(&mut TreeBuilder) -> (NodeId, NodeId),
) -> (SyntaxTree, NodeId) {
    let mut b = TreeBuilder::new();
    let (value, index) = build(&mut b);
    let sub = b.subscript(value, index);
    let stmt = b.expr_stmt(sub);
    b.stmt(stmt).unwrap();
    (b.finish(), stmt)
}

fn ints(b: &mut TreeBuilder, values: &[i64]) -> NodeId {
    let elements = values.iter().map(|&v| b.int(v)).collect();
    b.list(elements)
}

fn folded(build: impl FnOnce(&mut TreeBuilder) -> (NodeId, NodeId)) -> (usize, String) {
    let (mut tree, _) = subscript_stmt(build);
    let changed = replace_subscripts(&mut tree).unwrap();
    (changed, tree.unparse(tree.root()))
}

#[test]
fn selects_element() {
    let (changed, text) = folded(|b| {
        let list = ints(b, &[10, 20, 30]);
        (list, b.int(1))
    });
    assert_eq!(changed, 1);
    assert_eq!(text, "20");
}

#[test]
fn nested_subscripts_fold_in_one_pass() {
    let mut b = TreeBuilder::new();
    let first = ints(&mut b, &[1, 2]);
    let second = ints(&mut b, &[3, 4]);
    let matrix = b.list(vec![first, second]);
    let row = b.int(1);
    let inner = b.subscript(matrix, row);
    let col = b.int(0);
    let outer = b.subscript(inner, col);
    let stmt = b.expr_stmt(outer);
    b.stmt(stmt).unwrap();
    let mut tree = b.finish();

    assert_eq!(replace_subscripts(&mut tree).unwrap(), 2);
    assert_eq!(tree.unparse(tree.root()), "3");
}

#[test]
fn out_of_range_indices_are_left_alone() {
    for index in [2, -1] {
        let (changed, text) = folded(|b| {
            let list = ints(b, &[1, 2]);
            (list, b.int(index))
        });
        assert_eq!(changed, 0);
        assert_eq!(text, format!("[1, 2][{index}]"));
    }
}

#[test]
fn non_literal_parts_are_left_alone() {
    let (changed, _) = folded(|b| {
        let x = b.name("x");
        (x, b.int(0))
    });
    assert_eq!(changed, 0);

    let (changed, _) = folded(|b| {
        let list = ints(b, &[1, 2]);
        (list, b.name("i"))
    });
    assert_eq!(changed, 0);

    let (changed, _) = folded(|b| {
        let x = b.name("x");
        let one = b.int(1);
        let list = b.list(vec![x, one]);
        (list, b.int(1))
    });
    assert_eq!(changed, 0);
}

#[test]
fn mixed_element_kinds_are_left_alone() {
    let (changed, _) = folded(|b| {
        let one = b.int(1);
        let flag = b.boolean(true);
        let list = b.list(vec![one, flag]);
        (list, b.int(0))
    });
    assert_eq!(changed, 0);
}

#[test]
fn selected_element_keeps_type_and_takes_subscript_position() {
    let mut element = None;
    let (mut tree, stmt) = subscript_stmt(|b| {
        let list = ints(b, &[7, 8]);
        let index = b.int(1);
        element = Some(list);
        (list, index)
    });
    let list = element.unwrap();
    let second = tree.children(list)[1];
    tree.set_ty(second, Type::INT128);
    let NodeKind::Expr { value: sub } = *tree.kind(stmt) else {
        panic!("expected an expression statement");
    };

    assert_eq!(replace_subscripts(&mut tree).unwrap(), 1);
    let NodeKind::Expr { value: result } = *tree.kind(stmt) else {
        panic!("expected an expression statement");
    };
    assert_eq!(tree.unparse(result), "8");
    assert_eq!(tree.ty(result), Some(&Type::INT128));
    assert_eq!(tree.span(result), tree.span(sub));
    assert!(!tree.is_attached(sub));
}
