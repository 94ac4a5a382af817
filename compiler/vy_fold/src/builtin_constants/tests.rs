use pretty_assertions::assert_eq;
use vy_ir::{BinaryOp, NodeId, TreeBuilder};

use super::*;

fn build(f: impl FnOnce(&mut TreeBuilder) -> Vec<NodeId>) -> SyntaxTree {
    let mut b = TreeBuilder::new();
    for stmt in f(&mut b) {
        assert!(b.stmt(stmt).is_ok(), "statement already attached");
    }
    b.finish()
}

#[test]
fn table_lists_every_reserved_name() {
    let names: Vec<_> = builtin_constants().iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        [
            "EMPTY_BYTES32",
            "ZERO_ADDRESS",
            "MAX_INT128",
            "MIN_INT128",
            "MAX_DECIMAL",
            "MIN_DECIMAL",
            "MAX_UINT256",
        ]
    );
}

#[test]
fn zero_values_have_the_right_width() {
    let lookup = |wanted: &str| {
        builtin_constants()
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, value)| value.clone())
    };
    let Some(Literal::Hex(address)) = lookup("ZERO_ADDRESS") else {
        panic!("ZERO_ADDRESS is not a hex literal");
    };
    assert_eq!(address.len(), 2 + 40);
    let Some(Literal::Hex(word)) = lookup("EMPTY_BYTES32") else {
        panic!("EMPTY_BYTES32 is not a hex literal");
    };
    assert_eq!(word.len(), 2 + 64);
}

#[test]
fn references_in_value_positions_are_replaced() {
    let mut tree = build(|b| {
        let max = b.name("MAX_INT128");
        let one = b.int(1);
        let sum = b.binop(max, BinaryOp::Sub, one);
        let x = b.name("x");
        let first = b.assign(x, sum);

        let zero = b.name("ZERO_ADDRESS");
        let owner = b.name("owner");
        let second = b.assign(owner, zero);
        vec![first, second]
    });

    assert_eq!(replace_builtin_constants(&mut tree), Ok(2));
    assert_eq!(
        tree.unparse(tree.root()),
        format!(
            "x = 170141183460469231731687303715884105727 - 1\nowner = 0x{}",
            "00".repeat(20)
        )
    );
}

#[test]
fn unrelated_names_are_untouched() {
    let mut tree = build(|b| {
        let max = b.name("MAX_INT");
        let x = b.name("x");
        vec![b.assign(x, max)]
    });
    assert_eq!(replace_builtin_constants(&mut tree), Ok(0));
    assert_eq!(tree.unparse(tree.root()), "x = MAX_INT");
}

#[test]
fn reassignment_is_fatal() {
    let mut target = None;
    let mut tree = build(|b| {
        let name = b.name("MAX_UINT256");
        target = Some(name);
        let one = b.int(1);
        vec![b.assign(name, one)]
    });
    let Some(target) = target else {
        panic!("target not built");
    };

    assert_eq!(
        replace_builtin_constants(&mut tree),
        Err(FoldError::BuiltinConstantMisuse {
            name: "MAX_UINT256".to_owned(),
            span: tree.span(target),
        })
    );
}

#[test]
fn call_target_is_fatal() {
    let mut tree = build(|b| {
        let call = b.call("ZERO_ADDRESS", vec![]);
        vec![b.expr_stmt(call)]
    });
    assert!(matches!(
        replace_builtin_constants(&mut tree),
        Err(FoldError::BuiltinConstantMisuse { name, .. }) if name == "ZERO_ADDRESS"
    ));
}
