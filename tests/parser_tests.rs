//! 解析器集成测试
//!
//! 验证优先级、结合性、括号分组判定与各类失败输入，
//! 以及 Display 输出可重新解析为同构树。

use aex::{AexError, AstNode, BinaryOp, parse};

fn lit(val: f64) -> AstNode {
    AstNode::Literal(val)
}

fn add(left: AstNode, right: AstNode) -> AstNode {
    AstNode::binary(BinaryOp::Add, left, right)
}

fn mul(left: AstNode, right: AstNode) -> AstNode {
    AstNode::binary(BinaryOp::Mul, left, right)
}

#[test]
fn test_mul_binds_tighter_than_add() {
    let tree = parse("1+2*3").unwrap();
    assert_eq!(tree, add(lit(1.0), mul(lit(2.0), lit(3.0))));
}

#[test]
fn test_group_overrides_precedence() {
    let tree = parse("(1+2)*3").unwrap();
    assert_eq!(tree, mul(add(lit(1.0), lit(2.0)), lit(3.0)));
}

#[test]
fn test_add_chain_nests_right() {
    let tree = parse("1+2+3").unwrap();
    assert_eq!(tree, add(lit(1.0), add(lit(2.0), lit(3.0))));
}

#[test]
fn test_mul_chain_nests_right() {
    let tree = parse("2*3*4").unwrap();
    assert_eq!(tree, mul(lit(2.0), mul(lit(3.0), lit(4.0))));
}

#[test]
fn test_plain_literal() {
    assert_eq!(parse("3.5").unwrap(), lit(3.5));
}

#[test]
fn test_leading_minus_is_part_of_literal() {
    assert_eq!(parse("-3.5").unwrap(), lit(-3.5));
}

#[test]
fn test_minus_is_not_a_unary_operator() {
    assert!(parse("-(1+2)").is_err());
}

#[test]
fn test_two_groups_split_at_naked_star() {
    // 首尾括号不配对，不能当作单个分组，应在裸 '*' 处切分
    let tree = parse("(1+2)*(3+4)").unwrap();
    assert_eq!(
        tree,
        mul(add(lit(1.0), lit(2.0)), add(lit(3.0), lit(4.0)))
    );
}

#[test]
fn test_nested_groups() {
    let tree = parse("((1+2))").unwrap();
    assert_eq!(tree, add(lit(1.0), lit(2.0)));
}

#[test]
fn test_grouped_left_operand_of_add() {
    let tree = parse("(1+2)+3").unwrap();
    assert_eq!(tree, add(add(lit(1.0), lit(2.0)), lit(3.0)));
}

#[test]
fn test_missing_right_operand_fails() {
    let err = parse("1+").unwrap_err();
    match err {
        AexError::Parse { expr, .. } => assert_eq!(expr, ""),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_missing_left_operand_fails() {
    assert!(parse("+1").is_err());
}

#[test]
fn test_unbalanced_group_fails() {
    let err = parse("(1+2").unwrap_err();
    match err {
        AexError::Parse { expr, .. } => assert_eq!(expr, "(1+2"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_false_enclosure_rejected() {
    // 首尾是括号但中途闭合，既不是分组也不是字面量
    assert!(parse("(1)(2)").is_err());
}

#[test]
fn test_empty_input_fails() {
    assert!(parse("").is_err());
}

#[test]
fn test_garbage_fails() {
    assert!(parse("abc").is_err());
}

#[test]
fn test_error_message_names_offending_substring() {
    let msg = parse("(1+2").unwrap_err().to_string();
    assert!(msg.contains("could not parse expression"), "{}", msg);
    assert!(msg.contains("(1+2"), "{}", msg);
}

#[test]
fn test_display_uses_minimal_parens() {
    assert_eq!(parse("1+2*3").unwrap().to_string(), "1+2*3");
    assert_eq!(parse("(1+2)*3").unwrap().to_string(), "(1+2)*3");
    assert_eq!(parse("2*(3+4)").unwrap().to_string(), "2*(3+4)");
    assert_eq!(parse("1+2+3").unwrap().to_string(), "1+2+3");
}

#[test]
fn test_display_roundtrip_is_structural_identity() {
    let corpus = [
        "1+2*3",
        "(1+2)*3",
        "1+2+3",
        "(1+2)+3",
        "2*3*4",
        "(2*3)*4",
        "2*(3+4)",
        "2*(3+4)+5",
        "3.5",
        "((1+2))*((3+4))",
    ];
    for expr in corpus {
        let tree = parse(expr).unwrap();
        let printed = tree.to_string();
        assert_eq!(
            parse(&printed).unwrap(),
            tree,
            "roundtrip failed: {} -> {}",
            expr,
            printed
        );
    }
}
