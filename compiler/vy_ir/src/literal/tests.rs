use super::*;
use pretty_assertions::assert_eq;

fn dec(text: &str) -> Decimal {
    text.parse()
        .unwrap_or_else(|e| panic!("bad decimal literal in test: {e}"))
}

#[test]
fn parse_and_display_decimals() {
    assert_eq!(dec("1.5").to_string(), "1.5");
    assert_eq!(dec("-0.25").to_string(), "-0.25");
    assert_eq!(dec("3").to_string(), "3.0");
    assert_eq!(dec(".5").to_string(), "0.5");
    assert_eq!(dec("0.0000000001").scaled(), &BigInt::from(1));
}

#[test]
fn parse_rejects_malformed_decimals() {
    assert_eq!("".parse::<Decimal>(), Err(DecimalParseError::Empty));
    assert!(matches!(
        "1.2.3".parse::<Decimal>(),
        Err(DecimalParseError::InvalidDigit(_))
    ));
    assert!(matches!(
        "0.00000000001".parse::<Decimal>(),
        Err(DecimalParseError::TooPrecise(_))
    ));
}

#[test]
fn decimal_arithmetic_truncates_toward_zero() {
    assert_eq!(dec("1").checked_div(&dec("3")), Some(dec("0.3333333333")));
    assert_eq!(dec("-1").checked_div(&dec("3")), Some(dec("-0.3333333333")));
    assert_eq!(
        dec("0.0000000001").mul(&dec("0.5")),
        Decimal::from_scaled(BigInt::from(0))
    );
    assert_eq!(dec("2.5").mul(&dec("-2")), dec("-5"));
    assert_eq!(dec("1").checked_div(&dec("0")), None);
}

#[test]
fn decimal_remainder_follows_dividend_sign() {
    assert_eq!(dec("-7.5").checked_rem(&dec("2")), Some(dec("-1.5")));
    assert_eq!(dec("7.5").checked_rem(&dec("-2")), Some(dec("1.5")));
    assert_eq!(dec("1").checked_rem(&dec("0")), None);
}

#[test]
fn floor_and_ceil() {
    assert_eq!(dec("2.5").floor(), BigInt::from(2));
    assert_eq!(dec("2.5").ceil(), BigInt::from(3));
    assert_eq!(dec("-2.5").floor(), BigInt::from(-3));
    assert_eq!(dec("-2.5").ceil(), BigInt::from(-2));
    assert_eq!(dec("-2").floor(), BigInt::from(-2));
}

#[test]
fn numeric_bounds() {
    assert!(int_in_bounds(&max_uint256()));
    assert!(!int_in_bounds(&(max_uint256() + 1)));
    assert!(int_in_bounds(&min_int128()));
    assert!(!int_in_bounds(&(min_int128() - 1)));
    assert!(Decimal::max_value().in_bounds());
    assert!(!Decimal::max_value().add(&dec("0.0000000001")).in_bounds());
}

#[test]
fn hex_round_trip_and_rejects_odd_length() {
    let bytes = decode_hex("0x00ff10").unwrap_or_default();
    assert_eq!(bytes, vec![0x00, 0xff, 0x10]);
    assert_eq!(encode_hex(&bytes), "0x00ff10");
    assert_eq!(decode_hex("0xabc"), None);
    assert_eq!(decode_hex("abcd"), None);
    assert_eq!(decode_hex("0xzz"), None);
}

#[test]
fn hex_equality_ignores_case() {
    let upper = Literal::Hex("0xABCD".to_owned());
    let lower = Literal::Hex("0xabcd".to_owned());
    assert!(upper.value_eq(&lower));
    assert_ne!(upper, lower);
}

#[test]
fn literal_display_uses_source_syntax() {
    assert_eq!(Literal::Bool(true).to_string(), "True");
    assert_eq!(Literal::Str("hi".to_owned()).to_string(), "\"hi\"");
    assert_eq!(Literal::Bytes(vec![b'a', 0x01]).to_string(), "b\"a\\x01\"");
}

#[test]
fn const_value_kind_matching() {
    let one = ConstValue::int(1);
    let two = ConstValue::int(2);
    let flag = ConstValue::boolean(true);
    let list = ConstValue::List(vec![one.clone()]);
    assert!(one.same_kind(&two));
    assert!(!one.same_kind(&flag));
    assert!(list.same_kind(&ConstValue::List(Vec::new())));
    assert!(!list.same_kind(&one));
}
