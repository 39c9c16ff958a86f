//! AST 节点定义
//!
//! 解析器产出的封闭节点集合：二元运算与浮点字面量。
//! 节点自底向上构造，构造后不可变，不在树间共享，
//! 整棵树由发射遍历消费一次后即丢弃。

use std::fmt;

/// 二元运算符种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Mul,
}

impl BinaryOp {
    /// 绑定强度，数值越大绑定越紧
    fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add => 1,
            BinaryOp::Mul => 2,
        }
    }

    fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Mul => '*',
        }
    }
}

/// AST 节点
///
/// 封闭的带标签联合，遍历时可做穷尽匹配；畸形树在类型层面即不可表示。
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// 浮点字面量
    Literal(f64),
    /// 二元运算，独占左右子树
    Binary {
        op: BinaryOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
}

impl AstNode {
    /// 构造二元节点
    pub fn binary(op: BinaryOp, left: AstNode, right: AstNode) -> Self {
        AstNode::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            AstNode::Literal(_) => u8::MAX,
            AstNode::Binary { op, .. } => op.precedence(),
        }
    }
}

impl fmt::Display for AstNode {
    /// 输出可重新解析的表达式文本
    ///
    /// 左子树在优先级不高于父节点时加括号，右子树仅在严格更低时加括号。
    /// 括号规则与解析器"在首个裸符号处切分"的右结合习惯对应，
    /// 因此对解析器产出的任何树，重新解析打印结果得到同构的树。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Literal(val) => write!(f, "{}", val),
            AstNode::Binary { op, left, right } => {
                if left.precedence() <= op.precedence() {
                    write!(f, "({})", left)?;
                } else {
                    write!(f, "{}", left)?;
                }
                write!(f, "{}", op.symbol())?;
                if right.precedence() < op.precedence() {
                    write!(f, "({})", right)
                } else {
                    write!(f, "{}", right)
                }
            }
        }
    }
}
