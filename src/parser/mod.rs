//! 表达式解析模块
//!
//! 在未分词的原始子串上做两层递归下降：加法层 → 乘法层 → 原子层。
//! 运算符优先级完全由下降顺序编码：先切分裸 `+`，加法因此总是成为
//! 顶层表达式的根（绑定最弱、最后求值），没有裸 `+` 时才轮到 `*`。
//!
//! 在首个裸符号处切分意味着同级运算右结合（`a+b+c` 解析为
//! `Add(a, Add(b, c))`）。对可结合、可交换的 `+` 与 `*` 这在语义上
//! 无碍；若引入不可结合的运算符，此处必须改写。

mod scan;

pub use scan::cleanup_input;

use crate::ast::{AstNode, BinaryOp};
use crate::error::{AexResult, parse_error};
use scan::{is_enclosed_group, naked_symbol_search};

/// 解析完整表达式（入口点）
///
/// 输入须已去除空白。成功时返回的树恰好覆盖 `expr` 的每个字符，
/// 不接受部分匹配；任何子串匹配失败都会使整次解析立即失败，不做恢复。
pub fn parse(expr: &str) -> AexResult<AstNode> {
    parse_sum(expr)
}

/// 加法层：在首个裸 `+` 处切分
///
/// 切分点左侧必然不含裸 `+`，直接交给乘法层；右侧继续按加法层解析，
/// 形成右嵌套的加法链。
fn parse_sum(expr: &str) -> AexResult<AstNode> {
    match naked_symbol_search(expr, &['+']) {
        Some(idx) => {
            let left = parse_product(&expr[..idx])?;
            let right = parse_sum(&expr[idx + 1..])?;
            Ok(AstNode::binary(BinaryOp::Add, left, right))
        }
        None => parse_product(expr),
    }
}

/// 乘法层：在首个裸 `*` 处切分
fn parse_product(expr: &str) -> AexResult<AstNode> {
    match naked_symbol_search(expr, &['*']) {
        Some(idx) => {
            let left = parse_atom(&expr[..idx])?;
            let right = parse_product(&expr[idx + 1..])?;
            Ok(AstNode::binary(BinaryOp::Mul, left, right))
        }
        None => parse_atom(expr),
    }
}

/// 原子层：括号分组或浮点字面量
///
/// 分组判定采用严格的配对检查（见 [`scan`]），首尾括号不配对的子串
/// 落入字面量分支并以解析错误告终。前导 `-` 只作为数字字面量的一部分
/// 被接受，不存在一元运算符。
fn parse_atom(expr: &str) -> AexResult<AstNode> {
    if expr.is_empty() {
        return Err(parse_error(expr, "empty expression"));
    }
    if is_enclosed_group(expr) {
        return parse_sum(&expr[1..expr.len() - 1]);
    }
    match expr.parse::<f64>() {
        Ok(val) => Ok(AstNode::Literal(val)),
        Err(_) => Err(parse_error(
            expr,
            "expected a parenthesized group or numeric literal",
        )),
    }
}
