use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use vy_ir::literal::max_uint256;
use vy_ir::{ConstValue, Decimal, FoldResult, Literal, NodeId, TreeBuilder};

use crate::dispatch_table;

fn dec(text: &str) -> Decimal {
    text.parse()
        .unwrap_or_else(|e| panic!("bad decimal literal in test: {e}"))
}

/// Build `name(args...)` and run the builtin's evaluator on it.
fn eval(name: &str, build: impl FnOnce(&mut TreeBuilder) -> Vec<NodeId>) -> FoldResult<ConstValue> {
    let mut b = TreeBuilder::new();
    let args = build(&mut b);
    let call = b.call(name, args);
    let tree = b.finish();
    match dispatch_table().get(name).and_then(|f| f.as_foldable()) {
        Some(foldable) => foldable.evaluate(&tree, call),
        None => panic!("{name} has no evaluator"),
    }
}

fn hex(text: &str) -> ConstValue {
    ConstValue::Literal(Literal::Hex(text.to_owned()))
}

#[test]
fn floor_and_ceil_round_decimals() {
    assert_eq!(
        eval("floor", |b| vec![b.decimal(dec("-2.5"))]),
        Ok(ConstValue::int(-3))
    );
    assert_eq!(
        eval("ceil", |b| vec![b.decimal(dec("2.0000000001"))]),
        Ok(ConstValue::int(3))
    );
    assert!(eval("floor", |b| vec![b.int(2)]).is_err());
}

#[test]
fn len_counts_bytes() {
    assert_eq!(eval("len", |b| vec![b.string("hello")]), Ok(ConstValue::int(5)));
    assert_eq!(eval("len", |b| vec![b.bytes(&[1, 2, 3])]), Ok(ConstValue::int(3)));
    assert_eq!(eval("len", |b| vec![b.hex("0x00ff")]), Ok(ConstValue::int(2)));
    assert!(eval("len", |b| vec![b.name("data")]).is_err());
}

#[test]
fn min_and_max_require_matching_kinds() {
    assert_eq!(
        eval("min", |b| vec![b.int(3), b.int(-4)]),
        Ok(ConstValue::int(-4))
    );
    assert_eq!(
        eval("max", |b| vec![b.decimal(dec("1.5")), b.decimal(dec("1.25"))]),
        Ok(ConstValue::Literal(Literal::Decimal(dec("1.5"))))
    );
    assert!(eval("max", |b| vec![b.int(1), b.decimal(dec("1.5"))]).is_err());
    assert!(eval("max", |b| vec![b.int(1)]).is_err());
}

#[test]
fn modular_arithmetic_avoids_overflow() {
    let max = max_uint256();
    assert_eq!(
        eval("uint256_addmod", |b| vec![b.int(max.clone()), b.int(2), b.int(10)]),
        Ok(ConstValue::int((&max + 2) % 10))
    );
    assert_eq!(
        eval("uint256_mulmod", |b| vec![b.int(max.clone()), b.int(max.clone()), b.int(7)]),
        Ok(ConstValue::int((&max * &max) % 7))
    );
    assert!(eval("uint256_addmod", |b| vec![b.int(1), b.int(2), b.int(0)]).is_err());
    assert!(eval("uint256_mulmod", |b| vec![b.int(-1), b.int(2), b.int(3)]).is_err());
}

#[test]
fn bitwise_operations() {
    assert_eq!(
        eval("bitwise_and", |b| vec![b.int(0b1100), b.int(0b1010)]),
        Ok(ConstValue::int(0b1000))
    );
    assert_eq!(
        eval("bitwise_or", |b| vec![b.int(0b1100), b.int(0b1010)]),
        Ok(ConstValue::int(0b1110))
    );
    assert_eq!(
        eval("bitwise_xor", |b| vec![b.int(0b1100), b.int(0b1010)]),
        Ok(ConstValue::int(0b0110))
    );
    assert_eq!(
        eval("bitwise_not", |b| vec![b.int(0)]),
        Ok(ConstValue::int(max_uint256()))
    );
}

#[test]
fn shift_discards_high_bits() {
    assert_eq!(
        eval("shift", |b| vec![b.int(1), b.int(8)]),
        Ok(ConstValue::int(256))
    );
    assert_eq!(
        eval("shift", |b| vec![b.int(256), b.int(-4)]),
        Ok(ConstValue::int(16))
    );
    assert_eq!(
        eval("shift", |b| vec![b.int(max_uint256()), b.int(255)]),
        Ok(ConstValue::int(BigInt::from(1) << 255_u32))
    );
    assert_eq!(
        eval("shift", |b| vec![b.int(1), b.int(256)]),
        Ok(ConstValue::int(0))
    );
    assert!(eval("shift", |b| vec![b.int(1), b.int(257)]).is_err());
}

#[test]
fn sha256_digests() {
    assert_eq!(
        eval("sha256", |b| vec![b.string("abc")]),
        Ok(hex(
            "0xba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        ))
    );
    assert_eq!(
        eval("sha256", |b| vec![b.bytes(&[])]),
        Ok(hex(
            "0xe3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        ))
    );
    assert!(eval("sha256", |b| vec![b.int(1)]).is_err());
}

#[test]
fn keccak256_digests() {
    assert_eq!(
        eval("keccak256", |b| vec![b.string("abc")]),
        Ok(hex(
            "0x4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        ))
    );
    assert_eq!(
        eval("keccak256", |b| vec![b.bytes(&[])]),
        Ok(hex(
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        ))
    );
    assert!(eval("keccak256", |b| vec![b.boolean(true)]).is_err());
}

#[test]
fn as_wei_value_scales_by_denomination() {
    assert_eq!(
        eval("as_wei_value", |b| vec![b.int(3), b.string("gwei")]),
        Ok(ConstValue::int(3_000_000_000_u64))
    );
    assert_eq!(
        eval("as_wei_value", |b| vec![b.decimal(dec("1.5")), b.string("ether")]),
        Ok(ConstValue::int(1_500_000_000_000_000_000_u64))
    );
    // A fractional wei part is truncated.
    assert_eq!(
        eval("as_wei_value", |b| vec![b.decimal(dec("2.75")), b.string("wei")]),
        Ok(ConstValue::int(2))
    );
    assert_eq!(
        eval("as_wei_value", |b| vec![b.decimal(dec("0.0000000001")), b.string("kwei")]),
        Ok(ConstValue::int(0))
    );
    assert!(eval("as_wei_value", |b| vec![b.int(-1), b.string("wei")]).is_err());
    assert!(eval("as_wei_value", |b| vec![b.int(1), b.string("parsec")]).is_err());
}

#[test]
fn denomination_aliases() {
    assert_eq!(super::denomination_exponent("lovelace"), Some(6));
    assert_eq!(super::denomination_exponent("grand"), Some(21));
    assert_eq!(super::denomination_exponent("Ether"), None);
}
